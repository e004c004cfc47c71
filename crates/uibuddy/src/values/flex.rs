use serde::Serialize;

use super::{Length, StyleKeyword, parse_length, parse_number, require_text, tokens};
use crate::error::{Grammar, ParseError, ParseResult};

/// Result of the `flex` shorthand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlexShorthand {
    /// `auto`, `initial` or `none` on their own; no numeric part is set.
    Keyword(StyleKeyword),
    Values { grow: f32, shrink: f32, basis: Length },
}

const DEFAULT_SHRINK: f32 = 1.0;
const DEFAULT_BASIS: Length = Length::Pixels(0.0);

pub fn parse_flex(text: &str) -> ParseResult<FlexShorthand> {
    let text = require_text(text, Grammar::Flex)?;
    let lowered = text.to_ascii_lowercase();
    let parts = tokens(&lowered);
    let invalid = || ParseError::invalid(Grammar::Flex, text);

    if let [single] = parts.as_slice() {
        match *single {
            "auto" => return Ok(FlexShorthand::Keyword(StyleKeyword::Auto)),
            "initial" => return Ok(FlexShorthand::Keyword(StyleKeyword::Initial)),
            "none" => return Ok(FlexShorthand::Keyword(StyleKeyword::None)),
            _ => {}
        }
    }

    let (grow, shrink, basis) = match parts.as_slice() {
        [single] => {
            if let Ok(basis) = parse_length(single) {
                (0.0, DEFAULT_SHRINK, basis)
            } else if let Some(grow) = parse_number(single) {
                (grow, DEFAULT_SHRINK, DEFAULT_BASIS)
            } else if let Some(basis) = basis_keyword(single) {
                (0.0, DEFAULT_SHRINK, basis)
            } else {
                return Err(invalid());
            }
        }
        [grow, second] => {
            let grow = parse_number(grow).ok_or_else(invalid)?;
            if let Some(shrink) = parse_number(second) {
                (grow, shrink, DEFAULT_BASIS)
            } else {
                let basis = length_or_basis_keyword(second).ok_or_else(invalid)?;
                (grow, DEFAULT_SHRINK, basis)
            }
        }
        [grow, shrink, basis] => (
            parse_number(grow).ok_or_else(invalid)?,
            parse_number(shrink).ok_or_else(invalid)?,
            length_or_basis_keyword(basis).ok_or_else(invalid)?,
        ),
        _ => return Err(invalid()),
    };

    Ok(FlexShorthand::Values {
        grow,
        shrink,
        basis,
    })
}

fn basis_keyword(token: &str) -> Option<Length> {
    match token {
        "auto" => Some(Length::Auto),
        "min-content" => Some(Length::Percent(0.0)),
        _ => None,
    }
}

fn length_or_basis_keyword(token: &str) -> Option<Length> {
    parse_length(token).ok().or_else(|| basis_keyword(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(text: &str) -> (f32, f32, Length) {
        match parse_flex(text) {
            Ok(FlexShorthand::Values {
                grow,
                shrink,
                basis,
            }) => (grow, shrink, basis),
            other => panic!("unexpected flex for {text}: {:?}", other),
        }
    }

    #[test]
    fn single_keywords_short_circuit() {
        assert_eq!(
            parse_flex("auto").unwrap(),
            FlexShorthand::Keyword(StyleKeyword::Auto)
        );
        assert_eq!(
            parse_flex("initial").unwrap(),
            FlexShorthand::Keyword(StyleKeyword::Initial)
        );
        assert_eq!(
            parse_flex("NONE").unwrap(),
            FlexShorthand::Keyword(StyleKeyword::None)
        );
    }

    #[test]
    fn single_number_is_grow() {
        assert_eq!(values("2"), (2.0, 1.0, Length::Pixels(0.0)));
    }

    #[test]
    fn single_length_is_basis() {
        assert_eq!(values("10%"), (0.0, 1.0, Length::Percent(10.0)));
        assert_eq!(values("30px"), (0.0, 1.0, Length::Pixels(30.0)));
        assert_eq!(values("min-content"), (0.0, 1.0, Length::Percent(0.0)));
    }

    #[test]
    fn two_tokens() {
        assert_eq!(values("2 2"), (2.0, 2.0, Length::Pixels(0.0)));
        assert_eq!(values("1 30px"), (1.0, 1.0, Length::Pixels(30.0)));
        assert_eq!(values("1 auto"), (1.0, 1.0, Length::Auto));
    }

    #[test]
    fn three_tokens() {
        assert_eq!(values("2 2 10%"), (2.0, 2.0, Length::Percent(10.0)));
        assert_eq!(values("1 1 auto"), (1.0, 1.0, Length::Auto));
    }

    #[test]
    fn malformed_flex_fails() {
        for text in ["", "grow", "1px 2", "1 2 3", "1 2 3px 4", "a b c"] {
            assert!(parse_flex(text).is_err(), "{text} should not parse");
        }
    }
}
