use std::fmt;

use serde::Serialize;

use crate::widget::WidgetType;

/// Fatal failures: the build is aborted and nothing is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("malformed markup: {message}")]
    Malformed { message: String },
    #[error("The XML document does not have a valid root element.")]
    EmptyDocument,
    #[error("Cannot create element for type {name}.")]
    UnknownElement { name: String },
    #[error("The created element is not of type {expected}. Element type is {actual}.")]
    RootTypeMismatch {
        expected: WidgetType,
        actual: WidgetType,
    },
}

impl BuildError {
    pub(crate) fn malformed(message: impl fmt::Display) -> Self {
        BuildError::Malformed {
            message: message.to_string(),
        }
    }
}

/// The value grammar a compiler was asked to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Grammar {
    Color,
    Length,
    Rotation,
    Scale,
    Integer,
    ImageUrl,
    Font,
    Cursor,
    Flex,
    BackgroundPosition,
    BackgroundRepeat,
    BackgroundSize,
    Outline,
    TextShadow,
    TransformOrigin,
    Translate,
    Time,
    Transition,
    EasingFunction,
}

impl Grammar {
    pub fn as_str(self) -> &'static str {
        match self {
            Grammar::Color => "color",
            Grammar::Length => "length",
            Grammar::Rotation => "rotation",
            Grammar::Scale => "scale",
            Grammar::Integer => "integer",
            Grammar::ImageUrl => "image url",
            Grammar::Font => "font",
            Grammar::Cursor => "cursor",
            Grammar::Flex => "flex",
            Grammar::BackgroundPosition => "background position",
            Grammar::BackgroundRepeat => "background repeat",
            Grammar::BackgroundSize => "background size",
            Grammar::Outline => "text outline",
            Grammar::TextShadow => "text shadow",
            Grammar::TransformOrigin => "transform origin",
            Grammar::Translate => "translate",
            Grammar::Time => "time",
            Grammar::Transition => "transition",
            Grammar::EasingFunction => "easing function",
        }
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured failure returned by every value compiler.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("{0} value cannot be empty")]
    Empty(Grammar),
    #[error("invalid {grammar} value: {text}")]
    Invalid { grammar: Grammar, text: String },
    #[error("percentage based lengths are not supported here: {text}")]
    PercentageUnsupported { text: String },
    #[error("too many {grammar} values: at most {max} allowed, found {found}")]
    TooManyValues {
        grammar: Grammar,
        max: usize,
        found: usize,
    },
    #[error("{grammar} value is missing its {component}")]
    MissingComponent {
        grammar: Grammar,
        component: &'static str,
    },
}

impl ParseError {
    pub(crate) fn invalid(grammar: Grammar, text: &str) -> Self {
        ParseError::Invalid {
            grammar,
            text: text.to_string(),
        }
    }

    /// Grammar the failure belongs to, used to phrase the warning.
    pub fn grammar(&self) -> Grammar {
        match self {
            ParseError::Empty(grammar)
            | ParseError::Invalid { grammar, .. }
            | ParseError::TooManyValues { grammar, .. }
            | ParseError::MissingComponent { grammar, .. } => *grammar,
            ParseError::PercentageUnsupported { .. } => Grammar::Length,
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;
