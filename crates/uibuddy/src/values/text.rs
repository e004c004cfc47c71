use serde::Serialize;

use super::{Rgba, grouped_tokens, parse_color, parse_float_length, parse_number, require_text};
use crate::error::{Grammar, ParseError, ParseResult};

/// `-unity-text-outline`: only the parts present in the text are set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Outline {
    pub width: Option<f32>,
    pub color: Option<Rgba>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TextShadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur_radius: f32,
    pub color: Rgba,
}

pub fn parse_outline(text: &str) -> ParseResult<Outline> {
    let text = require_text(text, Grammar::Outline)?;
    let invalid = || ParseError::invalid(Grammar::Outline, text);
    let mut outline = Outline {
        width: None,
        color: None,
    };

    for token in grouped_tokens(text) {
        match parse_float_length(token) {
            Ok(width) => {
                if outline.width.replace(width).is_some() {
                    return Err(invalid());
                }
            }
            Err(err @ ParseError::PercentageUnsupported { .. }) => return Err(err),
            Err(_) => {
                let color = parse_color(token).map_err(|_| invalid())?;
                if outline.color.replace(color).is_some() {
                    return Err(invalid());
                }
            }
        }
    }
    Ok(outline)
}

/// `offset-x offset-y [blur] [color]`, color allowed anywhere and black by default.
pub fn parse_text_shadow(text: &str) -> ParseResult<TextShadow> {
    let text = require_text(text, Grammar::TextShadow)?;
    let invalid = || ParseError::invalid(Grammar::TextShadow, text);
    let mut numbers = Vec::with_capacity(3);
    let mut color = None;

    for token in grouped_tokens(text) {
        let lowered = token.to_ascii_lowercase();
        let number = parse_number(lowered.strip_suffix("px").unwrap_or(&lowered));
        match number {
            Some(value) => {
                if numbers.len() == 3 {
                    return Err(ParseError::TooManyValues {
                        grammar: Grammar::TextShadow,
                        max: 3,
                        found: numbers.len() + 1,
                    });
                }
                numbers.push(value);
            }
            None => {
                let parsed = parse_color(token).map_err(|_| invalid())?;
                if color.replace(parsed).is_some() {
                    return Err(invalid());
                }
            }
        }
    }

    let offset = |component: &'static str, index: usize| {
        numbers
            .get(index)
            .copied()
            .ok_or(ParseError::MissingComponent {
                grammar: Grammar::TextShadow,
                component,
            })
    };
    Ok(TextShadow {
        offset_x: offset("offset-x", 0)?,
        offset_y: offset("offset-y", 1)?,
        blur_radius: numbers.get(2).copied().unwrap_or(0.0),
        color: color.unwrap_or(Rgba::BLACK),
    })
}
