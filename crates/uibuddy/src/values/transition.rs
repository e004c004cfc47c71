use serde::Serialize;

use super::{parse_number, require_text, tokens};
use crate::error::{Grammar, ParseError, ParseResult};
use crate::tables::EasingMode;

/// Four parallel lists, one entry per transition definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TransitionList {
    pub properties: Vec<String>,
    pub durations: Vec<f32>,
    pub timing_functions: Vec<EasingMode>,
    pub delays: Vec<f32>,
}

impl TransitionList {
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// Seconds; `ms` values are divided by 1000.
pub fn parse_time(text: &str) -> ParseResult<f32> {
    let text = require_text(text, Grammar::Time)?;
    let lowered = text.to_ascii_lowercase();
    let seconds = if let Some(millis) = lowered.strip_suffix("ms") {
        parse_number(millis).map(|value| value / 1000.0)
    } else if let Some(seconds) = lowered.strip_suffix('s') {
        parse_number(seconds)
    } else {
        None
    };
    seconds.ok_or_else(|| ParseError::invalid(Grammar::Time, text))
}

pub fn parse_easing(text: &str) -> ParseResult<EasingMode> {
    let text = require_text(text, Grammar::EasingFunction)?;
    EasingMode::lookup(&text.to_ascii_lowercase())
        .ok_or_else(|| ParseError::invalid(Grammar::EasingFunction, text))
}

pub fn parse_time_list(text: &str) -> ParseResult<Vec<f32>> {
    comma_list(text, Grammar::Time, parse_time)
}

pub fn parse_easing_list(text: &str) -> ParseResult<Vec<EasingMode>> {
    comma_list(text, Grammar::EasingFunction, parse_easing)
}

pub fn parse_transition_properties(text: &str) -> ParseResult<Vec<String>> {
    comma_list(text, Grammar::Transition, |entry| match tokens(entry).as_slice() {
        [name] => Ok(name.to_string()),
        _ => Err(ParseError::invalid(Grammar::Transition, entry)),
    })
}

/// `property [duration [easing] [delay]]`, comma separated.
///
/// The third token is an easing name when it is one, otherwise the delay.
pub fn parse_transition(text: &str) -> ParseResult<TransitionList> {
    let text = require_text(text, Grammar::Transition)?;
    let mut list = TransitionList::default();

    for definition in text.split(',') {
        let parts = tokens(definition);
        let (property, rest) = match parts.split_first() {
            Some((property, rest)) => (*property, rest),
            None => return Err(ParseError::invalid(Grammar::Transition, text)),
        };
        if rest.len() > 3 {
            return Err(ParseError::TooManyValues {
                grammar: Grammar::Transition,
                max: 4,
                found: parts.len(),
            });
        }

        let mut duration = 0.0;
        let mut easing = EasingMode::Ease;
        let mut delay = 0.0;
        match rest {
            [] => {}
            [time] => duration = parse_time(time)?,
            [time, third] => {
                duration = parse_time(time)?;
                match parse_easing(third) {
                    Ok(mode) => easing = mode,
                    Err(_) => delay = parse_time(third)?,
                }
            }
            [time, mode, offset] => {
                duration = parse_time(time)?;
                easing = parse_easing(mode)?;
                delay = parse_time(offset)?;
            }
            _ => return Err(ParseError::invalid(Grammar::Transition, text)),
        }

        list.properties.push(property.to_string());
        list.durations.push(duration);
        list.timing_functions.push(easing);
        list.delays.push(delay);
    }
    Ok(list)
}

fn comma_list<T>(
    text: &str,
    grammar: Grammar,
    parse: impl Fn(&str) -> ParseResult<T>,
) -> ParseResult<Vec<T>> {
    let text = require_text(text, grammar)?;
    text.split(',')
        .map(|entry| match entry.trim() {
            "" => Err(ParseError::invalid(grammar, text)),
            entry => parse(entry),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn times_convert_to_seconds() {
        assert_eq!(parse_time("500ms").unwrap(), 0.5);
        assert_eq!(parse_time("2S").unwrap(), 2.0);
        assert_eq!(parse_time("0.25s").unwrap(), 0.25);
        assert!(matches!(parse_time(" "), Err(ParseError::Empty(Grammar::Time))));
        assert!(parse_time("2").is_err());
        assert!(parse_time("fast").is_err());
    }

    #[test]
    fn shorthand_builds_parallel_lists() {
        let list = parse_transition("width 0.5s ease-in, height 1s ease-out").unwrap();
        assert_eq!(list.properties, vec!["width", "height"]);
        assert_eq!(list.durations, vec![0.5, 1.0]);
        assert_eq!(
            list.timing_functions,
            vec![EasingMode::EaseIn, EasingMode::EaseOut]
        );
        assert_eq!(list.delays, vec![0.0, 0.0]);
    }

    #[test]
    fn third_token_falls_back_to_delay() {
        let list = parse_transition("opacity 200ms 1s").unwrap();
        assert_eq!(list.timing_functions, vec![EasingMode::Ease]);
        assert_eq!(list.delays, vec![1.0]);

        let list = parse_transition("color 1s linear 250ms").unwrap();
        assert_eq!(list.timing_functions, vec![EasingMode::Linear]);
        assert_eq!(list.delays, vec![0.25]);

        let list = parse_transition("all").unwrap();
        assert_eq!(list.durations, vec![0.0]);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn malformed_transitions_fail() {
        assert!(parse_transition("width 1s linear 1s 2s").is_err());
        assert!(parse_transition("width 1s, ").is_err());
        assert!(parse_transition("width fast").is_err());
        assert!(parse_transition("width 1s 1s linear").is_err());
    }

    #[test]
    fn longhand_lists() {
        assert_eq!(parse_time_list("1s, 250ms").unwrap(), vec![1.0, 0.25]);
        assert_eq!(
            parse_easing_list("ease-in-out-bounce,linear").unwrap(),
            vec![EasingMode::EaseInOutBounce, EasingMode::Linear]
        );
        assert_eq!(
            parse_transition_properties(" width , background-color").unwrap(),
            vec!["width", "background-color"]
        );
        assert!(parse_transition_properties("width height").is_err());
        assert!(parse_easing_list("ease,").is_err());
    }
}
