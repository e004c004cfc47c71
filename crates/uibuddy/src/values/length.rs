use serde::Serialize;

use super::{StyleKeyword, StyleValue, parse_number, require_text, tokens};
use crate::error::{Grammar, ParseError, ParseResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "unit", content = "value", rename_all = "snake_case")]
pub enum Length {
    Pixels(f32),
    Percent(f32),
    Auto,
}

impl Length {
    pub fn px(value: f32) -> Self {
        Length::Pixels(value)
    }

    pub fn percent(value: f32) -> Self {
        Length::Percent(value)
    }

    /// Numeric magnitude; `0.0` for `auto`.
    pub fn value(self) -> f32 {
        match self {
            Length::Pixels(value) | Length::Percent(value) => value,
            Length::Auto => 0.0,
        }
    }
}

/// Four box edges in top, right, bottom, left order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Edges<T> {
    pub top: T,
    pub right: T,
    pub bottom: T,
    pub left: T,
}

impl<T: Clone> Edges<T> {
    pub fn uniform(value: T) -> Self {
        Self {
            top: value.clone(),
            right: value.clone(),
            bottom: value.clone(),
            left: value,
        }
    }
}

/// Four box corners.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Corners<T> {
    pub top_left: T,
    pub top_right: T,
    pub bottom_right: T,
    pub bottom_left: T,
}

impl<T: Clone> Corners<T> {
    pub fn uniform(value: T) -> Self {
        Self {
            top_left: value.clone(),
            top_right: value.clone(),
            bottom_right: value.clone(),
            bottom_left: value,
        }
    }
}

/// `Npx`, `N%` or `auto`.
pub fn parse_length(text: &str) -> ParseResult<Length> {
    let text = require_text(text, Grammar::Length)?.to_ascii_lowercase();
    if text == "auto" {
        return Ok(Length::Auto);
    }
    if let Some(number) = text.strip_suffix("px") {
        if let Some(value) = parse_number(number) {
            return Ok(Length::Pixels(value));
        }
    } else if let Some(number) = text.strip_suffix('%') {
        if let Some(value) = parse_number(number) {
            return Ok(Length::Percent(value));
        }
    }
    Err(ParseError::invalid(Grammar::Length, &text))
}

/// `Npx` or a bare number. Percentages are refused rather than truncated.
pub fn parse_float_length(text: &str) -> ParseResult<f32> {
    let text = require_text(text, Grammar::Length)?.to_ascii_lowercase();
    if let Some(number) = text.strip_suffix("px") {
        if let Some(value) = parse_number(number) {
            return Ok(value);
        }
    } else if let Some(number) = text.strip_suffix('%') {
        if parse_number(number).is_some() {
            return Err(ParseError::PercentageUnsupported { text });
        }
    } else if let Some(value) = parse_number(&text) {
        return Ok(value);
    }
    Err(ParseError::invalid(Grammar::Length, &text))
}

pub fn parse_integer(text: &str) -> ParseResult<i32> {
    let text = require_text(text, Grammar::Integer)?;
    text.parse::<i32>()
        .map_err(|_| ParseError::invalid(Grammar::Integer, text))
}

/// Whitespace separated lengths; each token may also be a keyword.
pub fn parse_length_list(text: &str) -> ParseResult<Vec<StyleValue<Length>>> {
    parse_token_list(text, parse_length)
}

/// Whitespace separated float lengths; each token may also be a keyword.
pub fn parse_float_list(text: &str) -> ParseResult<Vec<StyleValue<f32>>> {
    parse_token_list(text, parse_float_length)
}

/// Whitespace separated lengths with no keyword handling (`auto` is a length here).
pub fn parse_plain_lengths(text: &str) -> ParseResult<Vec<Length>> {
    let text = require_text(text, Grammar::Length)?;
    tokens(text).into_iter().map(parse_length).collect()
}

fn parse_token_list<T>(
    text: &str,
    parse: fn(&str) -> ParseResult<T>,
) -> ParseResult<Vec<StyleValue<T>>> {
    let text = require_text(text, Grammar::Length)?;
    tokens(text)
        .into_iter()
        .map(|token| match StyleKeyword::parse(token) {
            Some(keyword) => Ok(StyleValue::Keyword(keyword)),
            None => parse(token).map(StyleValue::Value),
        })
        .collect()
}

/// Expands 1 to 4 values onto top, right, bottom, left.
pub fn expand_edges<T: Clone>(values: &[T]) -> ParseResult<Edges<T>> {
    match values {
        [] => Err(ParseError::Empty(Grammar::Length)),
        [all] => Ok(Edges::uniform(all.clone())),
        [vertical, horizontal] => Ok(Edges {
            top: vertical.clone(),
            right: horizontal.clone(),
            bottom: vertical.clone(),
            left: horizontal.clone(),
        }),
        [top, horizontal, bottom] => Ok(Edges {
            top: top.clone(),
            right: horizontal.clone(),
            bottom: bottom.clone(),
            left: horizontal.clone(),
        }),
        [top, right, bottom, left] => Ok(Edges {
            top: top.clone(),
            right: right.clone(),
            bottom: bottom.clone(),
            left: left.clone(),
        }),
        _ => Err(ParseError::TooManyValues {
            grammar: Grammar::Length,
            max: 4,
            found: values.len(),
        }),
    }
}

/// Expands 1 to 4 values onto top-left, top-right, bottom-right, bottom-left.
pub fn expand_corners<T: Clone>(values: &[T]) -> ParseResult<Corners<T>> {
    match values {
        [] => Err(ParseError::Empty(Grammar::Length)),
        [all] => Ok(Corners::uniform(all.clone())),
        [diagonal, anti_diagonal] => Ok(Corners {
            top_left: diagonal.clone(),
            top_right: anti_diagonal.clone(),
            bottom_right: diagonal.clone(),
            bottom_left: anti_diagonal.clone(),
        }),
        [top_left, anti_diagonal, bottom_right] => Ok(Corners {
            top_left: top_left.clone(),
            top_right: anti_diagonal.clone(),
            bottom_right: bottom_right.clone(),
            bottom_left: anti_diagonal.clone(),
        }),
        [top_left, top_right, bottom_right, bottom_left] => Ok(Corners {
            top_left: top_left.clone(),
            top_right: top_right.clone(),
            bottom_right: bottom_right.clone(),
            bottom_left: bottom_left.clone(),
        }),
        _ => Err(ParseError::TooManyValues {
            grammar: Grammar::Length,
            max: 4,
            found: values.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lengths_by_unit() {
        assert_eq!(parse_length("10px").unwrap(), Length::Pixels(10.0));
        assert_eq!(parse_length(" 50% ").unwrap(), Length::Percent(50.0));
        assert_eq!(parse_length("AUTO").unwrap(), Length::Auto);
        assert_eq!(parse_length("-4.5PX").unwrap(), Length::Pixels(-4.5));
        assert!(matches!(parse_length(""), Err(ParseError::Empty(Grammar::Length))));
        assert!(parse_length("invalid").is_err());
        assert!(parse_length("10").is_err());
        assert!(parse_length("10em").is_err());
    }

    #[test]
    fn float_lengths_reject_percentages() {
        assert_eq!(parse_float_length("10px").unwrap(), 10.0);
        assert_eq!(parse_float_length("0.5").unwrap(), 0.5);
        match parse_float_length("10%") {
            Err(ParseError::PercentageUnsupported { text }) => assert_eq!(text, "10%"),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(parse_float_length("wide").is_err());
    }

    #[test]
    fn token_lists_accept_keywords_per_token() {
        let values = parse_length_list("10px auto 5%").unwrap();
        assert_eq!(
            values,
            vec![
                StyleValue::Value(Length::Pixels(10.0)),
                StyleValue::Keyword(StyleKeyword::Auto),
                StyleValue::Value(Length::Percent(5.0)),
            ]
        );
        assert_eq!(
            parse_plain_lengths("50% auto").unwrap(),
            vec![Length::Percent(50.0), Length::Auto]
        );
        assert!(parse_float_list("1px 2%").is_err());
    }

    #[test]
    fn edge_expansion_table() {
        let edges = expand_edges(&[4, 8]).unwrap();
        assert_eq!((edges.top, edges.right, edges.bottom, edges.left), (4, 8, 4, 8));

        let edges = expand_edges(&[1]).unwrap();
        assert_eq!(edges, Edges::uniform(1));

        let edges = expand_edges(&[1, 2, 3]).unwrap();
        assert_eq!((edges.top, edges.right, edges.bottom, edges.left), (1, 2, 3, 2));

        let edges = expand_edges(&[1, 2, 3, 4]).unwrap();
        assert_eq!((edges.top, edges.right, edges.bottom, edges.left), (1, 2, 3, 4));

        assert!(matches!(
            expand_edges(&[1, 2, 3, 4, 5]),
            Err(ParseError::TooManyValues { found: 5, .. })
        ));
    }

    #[test]
    fn corner_expansion_table() {
        let corners = expand_corners(&[1, 2]).unwrap();
        assert_eq!(
            (corners.top_left, corners.top_right, corners.bottom_right, corners.bottom_left),
            (1, 2, 1, 2)
        );

        let corners = expand_corners(&[1, 2, 3]).unwrap();
        assert_eq!(
            (corners.top_left, corners.top_right, corners.bottom_right, corners.bottom_left),
            (1, 2, 3, 2)
        );

        let corners = expand_corners(&[1, 2, 3, 4]).unwrap();
        assert_eq!(
            (corners.top_left, corners.top_right, corners.bottom_right, corners.bottom_left),
            (1, 2, 3, 4)
        );
        assert!(expand_corners::<i32>(&[]).is_err());
    }
}
