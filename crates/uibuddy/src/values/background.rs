use serde::Serialize;

use super::{Length, parse_length, parse_plain_lengths, require_text, tokens};
use crate::error::{Grammar, ParseError, ParseResult};
use crate::tables::{Repeat, keyword_table};

keyword_table! {
    /// Anchor keyword of one background-position component. `middle` parses as `Center`.
    pub enum BackgroundPositionKeyword {
        Left => "left",
        Center => "center",
        Right => "right",
        Top => "top",
        Bottom => "bottom",
    }
}

impl BackgroundPositionKeyword {
    fn parse(token: &str) -> Option<Self> {
        match token {
            "middle" => Some(Self::Center),
            other => Self::lookup(other),
        }
    }

    fn fixed_axis(self) -> Option<Axis> {
        match self {
            Self::Left | Self::Right => Some(Axis::X),
            Self::Top | Self::Bottom => Some(Axis::Y),
            Self::Center => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    X,
    Y,
    All,
}

/// Stored value of `background-position-x` / `-y`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BackgroundPosition {
    pub keyword: BackgroundPositionKeyword,
    pub offset: Length,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PositionComponent {
    pub keyword: BackgroundPositionKeyword,
    pub offset: Option<Length>,
    pub axis: Axis,
}

impl PositionComponent {
    pub fn position(&self) -> BackgroundPosition {
        BackgroundPosition {
            keyword: self.keyword,
            offset: self.offset.unwrap_or(Length::Pixels(0.0)),
        }
    }

    fn applies_to(&self, axis: Axis) -> bool {
        self.axis == axis || self.axis == Axis::All
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BackgroundRepeat {
    pub x: Repeat,
    pub y: Repeat,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BackgroundSize {
    pub x: Length,
    pub y: Length,
}

/// Parses one or two `keyword [offset]` components.
pub fn parse_background_position(text: &str) -> ParseResult<Vec<PositionComponent>> {
    let text = require_text(text, Grammar::BackgroundPosition)?;
    let lowered = text.to_ascii_lowercase();
    let parts = tokens(&lowered);
    let invalid = || ParseError::invalid(Grammar::BackgroundPosition, text);

    let mut anchors = Vec::new();
    let mut index = 0;
    while index < parts.len() {
        let keyword = BackgroundPositionKeyword::parse(parts[index]).ok_or_else(invalid)?;
        index += 1;
        let offset = match parts.get(index).map(|token| parse_length(token)) {
            Some(Ok(length)) if length != Length::Auto => {
                index += 1;
                Some(length)
            }
            _ => None,
        };
        anchors.push((keyword, offset));
    }

    if anchors.len() > 2 {
        return Err(ParseError::TooManyValues {
            grammar: Grammar::BackgroundPosition,
            max: 2,
            found: anchors.len(),
        });
    }

    let components = anchors
        .iter()
        .enumerate()
        .map(|(position, &(keyword, offset))| {
            let axis = keyword.fixed_axis().unwrap_or_else(|| {
                anchors
                    .iter()
                    .enumerate()
                    .filter(|(other, _)| *other != position)
                    .find_map(|(_, (other, _))| other.fixed_axis())
                    .map(|axis| match axis {
                        Axis::X => Axis::Y,
                        _ => Axis::X,
                    })
                    .unwrap_or(Axis::All)
            });
            PositionComponent {
                keyword,
                offset,
                axis,
            }
        })
        .collect();
    Ok(components)
}

/// `background-position-x` / `-y`: exactly one component compatible with `axis`.
pub fn parse_background_position_axis(text: &str, axis: Axis) -> ParseResult<BackgroundPosition> {
    match parse_background_position(text)?.as_slice() {
        [component] if component.applies_to(axis) => Ok(component.position()),
        _ => Err(ParseError::invalid(Grammar::BackgroundPosition, text.trim())),
    }
}

/// Shorthand resolution onto the two axes. A lone `All` component writes both;
/// otherwise `All` takes whichever axis is still free.
pub fn resolve_position_axes(
    text: &str,
    components: &[PositionComponent],
) -> ParseResult<(Option<BackgroundPosition>, Option<BackgroundPosition>)> {
    let invalid = || ParseError::invalid(Grammar::BackgroundPosition, text.trim());
    if let [single] = components {
        if single.axis == Axis::All {
            return Ok((Some(single.position()), Some(single.position())));
        }
    }

    let mut x = None;
    let mut y = None;
    for component in components.iter().filter(|component| component.axis != Axis::All) {
        let slot = if component.axis == Axis::X { &mut x } else { &mut y };
        if slot.replace(component.position()).is_some() {
            return Err(invalid());
        }
    }
    for component in components.iter().filter(|component| component.axis == Axis::All) {
        let slot = if x.is_none() { &mut x } else { &mut y };
        if slot.replace(component.position()).is_some() {
            return Err(invalid());
        }
    }
    Ok((x, y))
}

pub fn parse_background_repeat(text: &str) -> ParseResult<BackgroundRepeat> {
    let text = require_text(text, Grammar::BackgroundRepeat)?;
    let lowered = text.to_ascii_lowercase();
    let invalid = || ParseError::invalid(Grammar::BackgroundRepeat, text);
    let (x, y) = match tokens(&lowered).as_slice() {
        ["repeat-x"] => (Repeat::Repeat, Repeat::NoRepeat),
        ["repeat-y"] => (Repeat::NoRepeat, Repeat::Repeat),
        [both] => {
            let both = Repeat::lookup(both).ok_or_else(invalid)?;
            (both, both)
        }
        [x, y] => (
            Repeat::lookup(x).ok_or_else(invalid)?,
            Repeat::lookup(y).ok_or_else(invalid)?,
        ),
        _ => return Err(invalid()),
    };
    Ok(BackgroundRepeat { x, y })
}

pub fn parse_background_size(text: &str) -> ParseResult<BackgroundSize> {
    let text = require_text(text, Grammar::BackgroundSize)?;
    let lengths =
        parse_plain_lengths(text).map_err(|_| ParseError::invalid(Grammar::BackgroundSize, text))?;
    match lengths.as_slice() {
        [both] => Ok(BackgroundSize { x: *both, y: *both }),
        [x, y] => Ok(BackgroundSize { x: *x, y: *y }),
        _ => Err(ParseError::TooManyValues {
            grammar: Grammar::BackgroundSize,
            max: 2,
            found: lengths.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_with_offset() {
        let components = parse_background_position("left 50%").unwrap();
        assert_eq!(
            components,
            vec![PositionComponent {
                keyword: BackgroundPositionKeyword::Left,
                offset: Some(Length::Percent(50.0)),
                axis: Axis::X,
            }]
        );
    }

    #[test]
    fn lone_center_applies_to_both_axes() {
        let components = parse_background_position("center").unwrap();
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].axis, Axis::All);
        assert_eq!(components[0].offset, None);

        let (x, y) = resolve_position_axes("center", &components).unwrap();
        assert_eq!(x, y);
        assert!(x.is_some());
    }

    #[test]
    fn center_takes_the_opposite_axis() {
        let components = parse_background_position("center top 10px").unwrap();
        assert_eq!(components[0].axis, Axis::X);
        assert_eq!(components[1].axis, Axis::Y);
        assert_eq!(components[1].offset, Some(Length::Pixels(10.0)));

        let components = parse_background_position("Middle RIGHT").unwrap();
        assert_eq!(components[0].keyword, BackgroundPositionKeyword::Center);
        assert_eq!(components[0].axis, Axis::Y);
    }

    #[test]
    fn malformed_positions_fail() {
        assert!(parse_background_position("50% left").is_err());
        assert!(parse_background_position("left top right").is_err());
        assert!(parse_background_position("left 10px 20px").is_err());
        assert!(parse_background_position("").is_err());
    }

    #[test]
    fn shorthand_rejects_duplicate_axes() {
        let components = parse_background_position("left right").unwrap();
        assert!(resolve_position_axes("left right", &components).is_err());

        let components = parse_background_position("bottom 5px left").unwrap();
        let (x, y) = resolve_position_axes("bottom 5px left", &components).unwrap();
        assert_eq!(x.unwrap().keyword, BackgroundPositionKeyword::Left);
        assert_eq!(y.unwrap().offset, Length::Pixels(5.0));
    }

    #[test]
    fn axis_longhands_require_a_compatible_component() {
        let position = parse_background_position_axis("right 4px", Axis::X).unwrap();
        assert_eq!(position.keyword, BackgroundPositionKeyword::Right);
        assert_eq!(position.offset, Length::Pixels(4.0));
        assert!(parse_background_position_axis("top", Axis::X).is_err());
        assert!(parse_background_position_axis("center", Axis::Y).is_ok());
        assert!(parse_background_position_axis("left top", Axis::X).is_err());
    }

    #[test]
    fn repeat_forms() {
        assert_eq!(
            parse_background_repeat("repeat-x").unwrap(),
            BackgroundRepeat {
                x: Repeat::Repeat,
                y: Repeat::NoRepeat
            }
        );
        assert_eq!(
            parse_background_repeat("no-repeat repeat").unwrap(),
            BackgroundRepeat {
                x: Repeat::NoRepeat,
                y: Repeat::Repeat
            }
        );
        assert!(parse_background_repeat("repeat-x repeat").is_err());
        assert!(parse_background_repeat("space").is_err());
    }

    #[test]
    fn size_forms() {
        assert_eq!(
            parse_background_size("10px").unwrap(),
            BackgroundSize {
                x: Length::Pixels(10.0),
                y: Length::Pixels(10.0)
            }
        );
        assert_eq!(parse_background_size("50% auto").unwrap().y, Length::Auto);
        assert!(parse_background_size("1px 2px 3px").is_err());
        assert!(parse_background_size("cover").is_err());
    }
}
