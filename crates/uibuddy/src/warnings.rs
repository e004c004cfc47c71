//! Recoverable failures. A warning never aborts a build.

use std::sync::Mutex;

use crate::context::ResourceKind;
use crate::error::Grammar;
use crate::tables::StyleProperty;

/// Element label used in warning text when the node has no `name`.
pub const UNNAMED_ELEMENT: &str = "Unnamed element";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Warning {
    #[error("Invalid attribute name on {element}: {name}=\"{value}\"")]
    UnknownAttribute {
        element: String,
        name: String,
        value: String,
    },
    #[error("Invalid attribute value on {element}: {name}=\"{value}\"")]
    InvalidAttributeValue {
        element: String,
        name: String,
        value: String,
    },
    #[error("Unsupported attribute on {element}: {name}=\"{value}\"")]
    UnsupportedAttribute {
        element: String,
        name: String,
        value: String,
    },
    #[error("Ignored element after the document root: {name}")]
    IgnoredElement { name: String },
    #[error("Unknown uss property: {property}")]
    UnknownStyleProperty { property: String },
    #[error("Missing uss value for property: {property}")]
    EmptyStyleValue { property: String },
    #[error("Malformed uss declaration: {text}")]
    MalformedDeclaration { text: String },
    #[error("Unsupported uss value: {value}")]
    UnsupportedStyleValue {
        element: String,
        property: StyleProperty,
        value: String,
    },
    #[error("Invalid {grammar} value on {element}: {value}")]
    InvalidStyleValue {
        element: String,
        property: StyleProperty,
        grammar: Grammar,
        value: String,
    },
    #[error("Missing {kind} resource on {element}: {path}")]
    ResourceNotFound {
        element: String,
        property: StyleProperty,
        kind: ResourceKind,
        path: String,
    },
}

/// Receives every recoverable failure.
pub trait WarningSink: Send + Sync {
    fn warning(&self, warning: &Warning);
}

/// Emits warnings through `tracing::warn!`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl WarningSink for TracingSink {
    fn warning(&self, warning: &Warning) {
        match warning {
            Warning::UnknownAttribute {
                element,
                name,
                value,
            }
            | Warning::InvalidAttributeValue {
                element,
                name,
                value,
            }
            | Warning::UnsupportedAttribute {
                element,
                name,
                value,
            } => {
                tracing::warn!(element = %element, attribute = %name, value = %value, "{warning}");
            }
            Warning::IgnoredElement { name } => {
                tracing::warn!(element = %name, "{warning}");
            }
            Warning::UnknownStyleProperty { property } | Warning::EmptyStyleValue { property } => {
                tracing::warn!(property = %property, "{warning}");
            }
            Warning::MalformedDeclaration { text } => {
                tracing::warn!(value = %text, "{warning}");
            }
            Warning::UnsupportedStyleValue {
                element,
                property,
                value,
            }
            | Warning::InvalidStyleValue {
                element,
                property,
                value,
                ..
            } => {
                tracing::warn!(
                    element = %element,
                    property = property.as_str(),
                    value = %value,
                    "{warning}"
                );
            }
            Warning::ResourceNotFound {
                element,
                property,
                path,
                ..
            } => {
                tracing::warn!(
                    element = %element,
                    property = property.as_str(),
                    value = %path,
                    "{warning}"
                );
            }
        }
    }
}

/// Keeps every warning in memory, in emission order.
#[derive(Debug, Default)]
pub struct WarningLog {
    entries: Mutex<Vec<Warning>>,
}

impl WarningLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warnings(&self) -> Vec<Warning> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Drains the log.
    pub fn take(&self) -> Vec<Warning> {
        std::mem::take(
            &mut *self
                .entries
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner()),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .is_empty()
    }
}

impl WarningSink for WarningLog {
    fn warning(&self, warning: &Warning) {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(warning.clone());
    }
}
