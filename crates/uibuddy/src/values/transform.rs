use serde::Serialize;

use super::{Length, parse_length, parse_number, require_text, tokens};
use crate::error::{Grammar, ParseError, ParseResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleUnit {
    Degrees,
    Gradians,
    Radians,
    Turns,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Angle {
    pub value: f32,
    pub unit: AngleUnit,
}

impl Angle {
    pub fn to_degrees(self) -> f32 {
        match self.unit {
            AngleUnit::Degrees => self.value,
            AngleUnit::Gradians => self.value * 360.0 / 400.0,
            AngleUnit::Radians => self.value.to_degrees(),
            AngleUnit::Turns => self.value * 360.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scale {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Translate {
    pub x: Length,
    pub y: Length,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransformOrigin {
    pub x: Length,
    pub y: Length,
}

// `grad` must be tested before `rad`.
const ANGLE_UNITS: [(&str, AngleUnit); 4] = [
    ("deg", AngleUnit::Degrees),
    ("grad", AngleUnit::Gradians),
    ("rad", AngleUnit::Radians),
    ("turn", AngleUnit::Turns),
];

pub fn parse_angle(text: &str) -> ParseResult<Angle> {
    let text = require_text(text, Grammar::Rotation)?;
    let lowered = text.to_ascii_lowercase();
    for (suffix, unit) in ANGLE_UNITS {
        if let Some(number) = lowered.strip_suffix(suffix) {
            return parse_number(number)
                .map(|value| Angle { value, unit })
                .ok_or_else(|| ParseError::invalid(Grammar::Rotation, text));
        }
    }
    Err(ParseError::invalid(Grammar::Rotation, text))
}

/// One component scales both axes; `z` is always 1.
pub fn parse_scale(text: &str) -> ParseResult<Scale> {
    let text = require_text(text, Grammar::Scale)?;
    let component = |token: &str| {
        let parsed = match token.strip_suffix('%') {
            Some(percent) => parse_number(percent).map(|value| value / 100.0),
            None => parse_number(token),
        };
        parsed.ok_or_else(|| ParseError::invalid(Grammar::Scale, text))
    };

    match tokens(text).as_slice() {
        [uniform] => {
            let value = component(*uniform)?;
            Ok(Scale {
                x: value,
                y: value,
                z: 1.0,
            })
        }
        [x, y] => Ok(Scale {
            x: component(*x)?,
            y: component(*y)?,
            z: 1.0,
        }),
        parts => Err(ParseError::TooManyValues {
            grammar: Grammar::Scale,
            max: 2,
            found: parts.len(),
        }),
    }
}

pub fn parse_translate(text: &str) -> ParseResult<Translate> {
    let text = require_text(text, Grammar::Translate)?;
    let (x, y) = pair(text, Grammar::Translate, |token| {
        parse_length(token).map_err(|_| ParseError::invalid(Grammar::Translate, text))
    })?;
    Ok(Translate { x, y })
}

/// Each component is a length or one of `left`, `top`, `center`, `right`, `bottom`.
pub fn parse_transform_origin(text: &str) -> ParseResult<TransformOrigin> {
    let text = require_text(text, Grammar::TransformOrigin)?;
    let (x, y) = pair(text, Grammar::TransformOrigin, |token| {
        match token.to_ascii_lowercase().as_str() {
            "left" | "top" => Ok(Length::Percent(0.0)),
            "center" => Ok(Length::Percent(50.0)),
            "right" | "bottom" => Ok(Length::Percent(100.0)),
            _ => parse_length(token)
                .map_err(|_| ParseError::invalid(Grammar::TransformOrigin, text)),
        }
    })?;
    Ok(TransformOrigin { x, y })
}

/// One component applies to both axes, two are x then y.
fn pair<T: Copy>(
    text: &str,
    grammar: Grammar,
    parse: impl Fn(&str) -> ParseResult<T>,
) -> ParseResult<(T, T)> {
    match tokens(text).as_slice() {
        [both] => {
            let value = parse(*both)?;
            Ok((value, value))
        }
        [x, y] => Ok((parse(*x)?, parse(*y)?)),
        parts => Err(ParseError::TooManyValues {
            grammar,
            max: 2,
            found: parts.len(),
        }),
    }
}
