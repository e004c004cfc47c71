//! Style declaration compiler: splits USS text into declarations and applies
//! them to a [`StyleState`](crate::style::StyleState).

mod apply;

use crate::tables::StyleProperty;
use crate::warnings::{Warning, WarningSink};

pub(crate) use apply::StyleApplier;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: StyleProperty,
    pub value: String,
}

/// Splits `property: value;` pairs.
///
/// Segments without a `:`, unknown property names and empty values are dropped
/// with a warning. A repeated property keeps the position of its first
/// occurrence and the value of its last.
pub fn parse_declarations(text: &str, sink: &dyn WarningSink) -> Vec<Declaration> {
    let mut declarations: Vec<Declaration> = Vec::new();

    for segment in text.split(';').map(str::trim).filter(|s| !s.is_empty()) {
        let Some((key, value)) = segment.split_once(':') else {
            sink.warning(&Warning::MalformedDeclaration {
                text: segment.to_string(),
            });
            continue;
        };
        let (key, value) = (key.trim(), value.trim());
        if key.is_empty() {
            sink.warning(&Warning::MalformedDeclaration {
                text: segment.to_string(),
            });
            continue;
        }
        let Some(property) = StyleProperty::lookup(key) else {
            sink.warning(&Warning::UnknownStyleProperty {
                property: key.to_string(),
            });
            continue;
        };
        if value.is_empty() {
            sink.warning(&Warning::EmptyStyleValue {
                property: key.to_string(),
            });
            continue;
        }

        match declarations.iter_mut().find(|d| d.property == property) {
            Some(existing) => existing.value = value.to_string(),
            None => declarations.push(Declaration {
                property,
                value: value.to_string(),
            }),
        }
    }
    declarations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::warnings::WarningLog;

    #[test]
    fn splits_and_trims() {
        let log = WarningLog::new();
        let declarations = parse_declarations(" width : 10px ;height:50%;; ", &log);
        assert_eq!(
            declarations,
            vec![
                Declaration {
                    property: StyleProperty::Width,
                    value: "10px".into()
                },
                Declaration {
                    property: StyleProperty::Height,
                    value: "50%".into()
                },
            ]
        );
        assert!(log.is_empty());
    }

    #[test]
    fn malformed_segment_is_dropped_with_warning() {
        let log = WarningLog::new();
        let declarations = parse_declarations("bogus; color: red;", &log);
        assert_eq!(declarations.len(), 1);
        assert_eq!(declarations[0].property, StyleProperty::Color);
        assert_eq!(
            log.take(),
            vec![Warning::MalformedDeclaration {
                text: "bogus".into()
            }]
        );
    }

    #[test]
    fn unknown_keys_and_empty_values_warn() {
        let log = WarningLog::new();
        let declarations = parse_declarations("gap: 4px; color: ; : red", &log);
        assert!(declarations.is_empty());
        let warnings = log.take();
        assert_eq!(warnings.len(), 3);
        assert!(matches!(
            &warnings[0],
            Warning::UnknownStyleProperty { property } if property == "gap"
        ));
        assert!(matches!(
            &warnings[1],
            Warning::EmptyStyleValue { property } if property == "color"
        ));
        assert!(matches!(warnings[2], Warning::MalformedDeclaration { .. }));
    }

    #[test]
    fn last_occurrence_wins() {
        let log = WarningLog::new();
        let declarations = parse_declarations("color: red; width: 1px; color: blue", &log);
        assert_eq!(declarations.len(), 2);
        assert_eq!(declarations[0].property, StyleProperty::Color);
        assert_eq!(declarations[0].value, "blue");
    }

    #[test]
    fn value_keeps_later_colons() {
        let log = WarningLog::new();
        let declarations = parse_declarations(
            "background-image: url('project://database/Assets/a.png')",
            &log,
        );
        assert_eq!(
            declarations[0].value,
            "url('project://database/Assets/a.png')"
        );
    }
}
