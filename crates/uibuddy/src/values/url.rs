use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use uibuddy_config::ResourceConfig;

use super::{grouped_tokens, parse_number, require_text};
use crate::error::{Grammar, ParseError, ParseResult};
use crate::tables::MouseCursor;

/// Target of a `url(...)` or `resource(...)` value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "path", rename_all = "snake_case")]
pub enum UrlReference {
    /// Asset path as written; see [`normalize_asset_path`].
    Url(String),
    /// Name passed to the resolver unchanged.
    Resource(String),
}

impl UrlReference {
    /// Path handed to the resource resolver.
    pub fn lookup_path(&self, config: &ResourceConfig) -> String {
        match self {
            UrlReference::Url(path) => normalize_asset_path(path, config),
            UrlReference::Resource(name) => name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Cursor {
    Builtin(MouseCursor),
    Texture {
        reference: UrlReference,
        hotspot: Option<(f32, f32)>,
    },
}

static REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(?i:(url|resource))\(\s*(?:"([^"]+)"|'([^']+)'|([^"'()\s][^"'()]*?))\s*\)$"#)
        .expect("url reference pattern")
});

/// `url("…")`, `url('…')`, `url(…)` or the same three forms of `resource(…)`.
pub fn parse_url(text: &str) -> ParseResult<UrlReference> {
    let text = require_text(text, Grammar::ImageUrl)?;
    let caps = REFERENCE
        .captures(text)
        .ok_or_else(|| ParseError::invalid(Grammar::ImageUrl, text))?;
    let path = caps
        .get(2)
        .or_else(|| caps.get(3))
        .or_else(|| caps.get(4))
        .map(|found| found.as_str().to_string())
        .ok_or_else(|| ParseError::invalid(Grammar::ImageUrl, text))?;

    if caps[1].eq_ignore_ascii_case("resource") {
        Ok(UrlReference::Resource(path))
    } else {
        Ok(UrlReference::Url(path))
    }
}

/// Strips the configured prefixes (case-insensitive, in order), any query or
/// fragment, and the file extension.
///
/// `project://database/Assets/Textures/image.png` becomes `Textures/image`.
pub fn normalize_asset_path(path: &str, config: &ResourceConfig) -> String {
    let mut path = path.trim();
    if let Some(end) = path.find(['?', '#']) {
        path = &path[..end];
    }
    for prefix in &config.strip_prefixes {
        let matches = path
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix));
        if matches {
            path = &path[prefix.len()..];
        }
    }
    if config.strip_extension {
        let file_start = path.rfind('/').map_or(0, |slash| slash + 1);
        if let Some(dot) = path[file_start..].rfind('.') {
            if file_start + dot > 0 {
                path = &path[..file_start + dot];
            }
        }
    }
    path.to_string()
}

/// A built-in cursor name, or a texture reference with an optional hotspot pair.
pub fn parse_cursor(text: &str) -> ParseResult<Cursor> {
    let text = require_text(text, Grammar::Cursor)?;
    let invalid = || ParseError::invalid(Grammar::Cursor, text);
    let parts = grouped_tokens(text);

    match parts.as_slice() {
        [name] if !name.contains('(') => MouseCursor::lookup(&name.to_ascii_lowercase())
            .map(Cursor::Builtin)
            .ok_or_else(invalid),
        [reference] => Ok(Cursor::Texture {
            reference: parse_url(reference).map_err(|_| invalid())?,
            hotspot: None,
        }),
        [reference, x, y] => {
            let reference = parse_url(reference).map_err(|_| invalid())?;
            let hotspot = match (parse_number(x), parse_number(y)) {
                (Some(x), Some(y)) => (x, y),
                _ => return Err(invalid()),
            };
            Ok(Cursor::Texture {
                reference,
                hotspot: Some(hotspot),
            })
        }
        _ => Err(invalid()),
    }
}
