//! Value compilers: one parser per USS value grammar.
//!
//! Every compiler is a pure function from text to a typed value or a [`ParseError`].
//! Whole-value style keywords are resolved by the applier before a compiler runs;
//! the compilers that accept keywords per token (edge lists) say so explicitly.

mod background;
mod color;
mod flex;
mod length;
mod text;
mod transform;
mod transition;
mod url;

use serde::Serialize;

use crate::error::ParseError;
use crate::tables::keyword_table;

pub use background::{
    Axis, BackgroundPosition, BackgroundPositionKeyword, BackgroundRepeat, BackgroundSize,
    PositionComponent, parse_background_position, parse_background_position_axis,
    parse_background_repeat, parse_background_size, resolve_position_axes,
};
pub use color::{Rgba, parse_color};
pub use flex::{FlexShorthand, parse_flex};
pub use length::{
    Corners, Edges, Length, expand_corners, expand_edges, parse_float_length, parse_float_list,
    parse_integer, parse_length, parse_length_list, parse_plain_lengths,
};
pub use text::{Outline, TextShadow, parse_outline, parse_text_shadow};
pub use transform::{
    Angle, AngleUnit, Scale, TransformOrigin, Translate, parse_angle, parse_scale,
    parse_transform_origin, parse_translate,
};
pub use transition::{
    TransitionList, parse_easing, parse_easing_list, parse_time, parse_time_list,
    parse_transition, parse_transition_properties,
};
pub use url::{Cursor, UrlReference, normalize_asset_path, parse_cursor, parse_url};

keyword_table! {
    /// Values that reset a property instead of assigning it.
    pub enum StyleKeyword {
        Auto => "auto",
        Initial => "initial",
        None => "none",
        Null => "null",
        Undefined => "undefined",
    }
}

impl StyleKeyword {
    /// Matches a whole value against the keyword set, ignoring case and padding.
    pub fn parse(text: &str) -> Option<Self> {
        Self::lookup(&text.trim().to_ascii_lowercase())
    }
}

/// A style field: either a concrete value or a keyword.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleValue<T> {
    Value(T),
    Keyword(StyleKeyword),
}

impl<T> StyleValue<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            StyleValue::Value(value) => Some(value),
            StyleValue::Keyword(_) => None,
        }
    }

    pub fn keyword(&self) -> Option<StyleKeyword> {
        match self {
            StyleValue::Keyword(keyword) => Some(*keyword),
            StyleValue::Value(_) => None,
        }
    }
}

/// Finite decimal number; `inf` and `nan` are rejected.
pub(crate) fn parse_number(text: &str) -> Option<f32> {
    text.trim().parse::<f32>().ok().filter(|value| value.is_finite())
}

pub(crate) fn tokens(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Whitespace split that keeps parenthesised groups such as `rgb(0, 0, 0)` whole.
pub(crate) fn grouped_tokens(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = None;
    for (index, ch) in text.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ => {}
        }
        if ch.is_whitespace() && depth == 0 {
            if let Some(begin) = start.take() {
                parts.push(&text[begin..index]);
            }
        } else if start.is_none() {
            start = Some(index);
        }
    }
    if let Some(begin) = start {
        parts.push(&text[begin..]);
    }
    parts
}

pub(crate) fn require_text(text: &str, grammar: crate::error::Grammar) -> Result<&str, ParseError> {
    let text = text.trim();
    if text.is_empty() {
        Err(ParseError::Empty(grammar))
    } else {
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_ignore_case_and_padding() {
        assert_eq!(StyleKeyword::parse(" Initial "), Some(StyleKeyword::Initial));
        assert_eq!(StyleKeyword::parse("undefined"), Some(StyleKeyword::Undefined));
        assert_eq!(StyleKeyword::parse("inherit"), None);
    }

    #[test]
    fn numbers_must_be_finite() {
        assert_eq!(parse_number("1.5"), Some(1.5));
        assert_eq!(parse_number("-2"), Some(-2.0));
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("1px"), None);
    }

    #[test]
    fn grouped_tokens_keep_function_arguments_together() {
        assert_eq!(
            grouped_tokens("  2px rgb(0, 0, 0)  1px "),
            vec!["2px", "rgb(0, 0, 0)", "1px"]
        );
        assert_eq!(grouped_tokens(""), Vec::<&str>::new());
    }
}
