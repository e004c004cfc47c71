//! Markup builder: parses a UXML fragment into a [`WidgetNode`] tree.
//!
//! The fragment is wrapped in a synthetic root element carrying the `ui`
//! namespace binding, so callers can write `<ui:Button/>` without declaring it.
//! The first element inside the synthetic root becomes the tree root; later
//! siblings are ignored.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use quick_xml::NsReader;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;
use uibuddy_config::UiBuddyConfig;

use crate::context::{EnumRegistry, NullResolver, ResourceResolver, StaticEnumRegistry};
use crate::diagnostics::Diagnostics;
use crate::error::BuildError;
use crate::style::StyleState;
use crate::tables::StyleProperty;
use crate::uss::{StyleApplier, parse_declarations};
use crate::warnings::{TracingSink, UNNAMED_ELEMENT, Warning, WarningSink};
use crate::widget::{WidgetNode, WidgetType};

/// Borrowed collaborators for one build or style call.
pub(crate) struct Session<'a> {
    pub(crate) resolver: &'a dyn ResourceResolver,
    pub(crate) registry: &'a dyn EnumRegistry,
    pub(crate) sink: &'a dyn WarningSink,
    pub(crate) config: &'a UiBuddyConfig,
    pub(crate) diagnostics: &'a Diagnostics,
}

impl Session<'_> {
    pub(crate) fn element_label(&self, node: &WidgetNode) -> String {
        node.name().unwrap_or(UNNAMED_ELEMENT).to_string()
    }

    fn applier<'s>(&'s self, element: &'s str) -> StyleApplier<'s> {
        StyleApplier {
            resolver: self.resolver,
            resources: &self.config.resources,
            sink: self.sink,
            diagnostics: self.diagnostics,
            element,
        }
    }

    /// Applies every declaration in `text`, in order.
    pub(crate) fn apply_style_text(&self, node: &mut WidgetNode, text: &str) {
        let element = self.element_label(node);
        let applier = self.applier(&element);
        for declaration in parse_declarations(text, self.sink) {
            applier.apply(&mut node.style, declaration.property, &declaration.value);
        }
    }

    pub(crate) fn apply_style_property(
        &self,
        node: &mut WidgetNode,
        property: StyleProperty,
        text: &str,
    ) -> bool {
        if text.trim().is_empty() {
            self.sink.warning(&Warning::EmptyStyleValue {
                property: property.as_str().to_string(),
            });
            return false;
        }
        let element = self.element_label(node);
        self.applier(&element).apply(&mut node.style, property, text)
    }

    fn create_element(
        &self,
        reader: &NsReader<&[u8]>,
        start: &BytesStart<'_>,
    ) -> Result<WidgetNode, BuildError> {
        let local = start.local_name();
        let name = std::str::from_utf8(local.as_ref()).map_err(BuildError::malformed)?;
        let widget_type = WidgetType::lookup(name).ok_or_else(|| BuildError::UnknownElement {
            name: name.to_string(),
        })?;

        let mut attributes: Vec<(String, String)> = Vec::new();
        for attribute in start.attributes() {
            let attribute = attribute.map_err(BuildError::malformed)?;
            if attribute.key.as_namespace_binding().is_some() {
                continue;
            }
            let (resolved, local) = reader.resolve_attribute(attribute.key);
            if let ResolveResult::Unknown(prefix) = resolved {
                return Err(BuildError::malformed(format!(
                    "unknown namespace prefix `{}`",
                    String::from_utf8_lossy(&prefix)
                )));
            }
            let key = std::str::from_utf8(local.as_ref())
                .map_err(BuildError::malformed)?
                .to_string();
            let value = attribute
                .unescape_value()
                .map_err(BuildError::malformed)?
                .into_owned();
            attributes.push((key, value));
        }

        let mut node = WidgetNode::new(widget_type);
        if self.diagnostics.enabled("markup") {
            tracing::info!(
                element = widget_type.as_str(),
                attributes = attributes.len(),
                "creating element"
            );
        }
        for (key, value) in &attributes {
            self.apply_attribute(&mut node, key, value, &attributes);
        }
        Ok(node)
    }

    fn ignore_sibling(&self, start: &BytesStart<'_>) -> Result<(), BuildError> {
        let local = start.local_name();
        let name = std::str::from_utf8(local.as_ref()).map_err(BuildError::malformed)?;
        self.sink.warning(&Warning::IgnoredElement {
            name: name.to_string(),
        });
        Ok(())
    }

    fn parse(&self, markup: &str) -> Result<WidgetNode, BuildError> {
        let markup_config = &self.config.markup;
        let document = format!(
            "{}{}{}",
            markup_config.root_open(),
            markup,
            markup_config.root_close()
        );
        let mut reader = NsReader::from_str(&document);
        reader.config_mut().trim_text(true);

        let mut wrapper_open = false;
        let mut wrapper_closed = false;
        let mut stack: Vec<WidgetNode> = Vec::new();
        let mut root: Option<WidgetNode> = None;
        // Depth inside ignored siblings of the root.
        let mut ignored = 0usize;

        loop {
            let (resolved, event) = reader
                .read_resolved_event()
                .map_err(BuildError::malformed)?;
            if let ResolveResult::Unknown(prefix) = resolved {
                return Err(BuildError::malformed(format!(
                    "unknown namespace prefix `{}`",
                    String::from_utf8_lossy(&prefix)
                )));
            }

            match event {
                Event::Start(start) => {
                    if wrapper_closed {
                        return Err(BuildError::malformed("content after the document root"));
                    }
                    if !wrapper_open {
                        wrapper_open = true;
                    } else if ignored > 0 {
                        ignored += 1;
                    } else if root.is_some() && stack.is_empty() {
                        self.ignore_sibling(&start)?;
                        ignored += 1;
                    } else {
                        stack.push(self.create_element(&reader, &start)?);
                    }
                }
                Event::Empty(start) => {
                    if wrapper_closed || !wrapper_open {
                        return Err(BuildError::malformed("content after the document root"));
                    }
                    if ignored > 0 {
                        continue;
                    }
                    if root.is_some() && stack.is_empty() {
                        self.ignore_sibling(&start)?;
                    } else {
                        let node = self.create_element(&reader, &start)?;
                        attach(&mut stack, &mut root, node);
                    }
                }
                Event::End(_) => {
                    if ignored > 0 {
                        ignored -= 1;
                    } else if let Some(node) = stack.pop() {
                        attach(&mut stack, &mut root, node);
                    } else {
                        wrapper_closed = true;
                    }
                }
                Event::Decl(_) => {
                    return Err(BuildError::malformed(
                        "XML declaration is only allowed at the start of a document",
                    ));
                }
                Event::Eof => break,
                other => {
                    tracing::debug!(event = ?other, "skipping non-element markup");
                }
            }
        }

        if !wrapper_closed {
            return Err(BuildError::malformed("unexpected end of markup"));
        }
        root.ok_or(BuildError::EmptyDocument)
    }
}

fn attach(stack: &mut Vec<WidgetNode>, root: &mut Option<WidgetNode>, node: WidgetNode) {
    match stack.last_mut() {
        Some(parent) => parent.add_child(node),
        None => {
            if root.is_none() {
                *root = Some(node);
            }
        }
    }
}

/// Builds widget trees from markup and applies inline styles.
///
/// Cheap to share: collaborators are held behind `Arc`, and a builder never
/// mutates itself while building.
#[derive(Clone)]
pub struct UiBuilder {
    resolver: Arc<dyn ResourceResolver>,
    registry: Arc<dyn EnumRegistry>,
    sink: Arc<dyn WarningSink>,
    config: UiBuddyConfig,
    diagnostics: Diagnostics,
}

impl Default for UiBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl UiBuilder {
    pub fn new() -> Self {
        Self::with_config(UiBuddyConfig::default())
    }

    pub fn with_config(config: UiBuddyConfig) -> Self {
        let diagnostics = Diagnostics::from_config(config.diagnostics.as_deref());
        Self {
            resolver: Arc::new(NullResolver),
            registry: Arc::new(StaticEnumRegistry::new()),
            sink: Arc::new(TracingSink),
            config,
            diagnostics,
        }
    }

    pub fn with_resolver(mut self, resolver: Arc<dyn ResourceResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn with_registry(mut self, registry: Arc<dyn EnumRegistry>) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_sink(mut self, sink: Arc<dyn WarningSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn config(&self) -> &UiBuddyConfig {
        &self.config
    }

    fn session(&self) -> Session<'_> {
        Session {
            resolver: self.resolver.as_ref(),
            registry: self.registry.as_ref(),
            sink: self.sink.as_ref(),
            config: &self.config,
            diagnostics: &self.diagnostics,
        }
    }

    /// Builds a tree whose root may be any widget type.
    pub fn build(&self, markup: &str) -> Result<WidgetNode, BuildError> {
        self.build_as(markup, WidgetType::VisualElement)
    }

    /// Builds a tree and checks the root's type.
    ///
    /// `VisualElement` accepts every root, since every widget is one.
    pub fn build_as(&self, markup: &str, expected: WidgetType) -> Result<WidgetNode, BuildError> {
        let root = self.session().parse(markup)?;
        let actual = root.widget_type();
        if expected != WidgetType::VisualElement && expected != actual {
            return Err(BuildError::RootTypeMismatch { expected, actual });
        }
        Ok(root)
    }

    /// Reads a markup file and builds it.
    pub fn build_file(&self, path: impl AsRef<Path>) -> anyhow::Result<WidgetNode> {
        let path = path.as_ref();
        let markup = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read markup file {}", path.display()))?;
        self.build(&markup)
            .with_context(|| format!("failed to build {}", path.display()))
    }

    /// Applies an inline style block (`prop: value; ...`) to an existing node.
    pub fn apply_style(&self, node: &mut WidgetNode, text: &str) {
        self.session().apply_style_text(node, text);
    }

    /// Applies a single property value. Returns whether a field was written.
    pub fn apply_style_property(
        &self,
        node: &mut WidgetNode,
        property: StyleProperty,
        text: &str,
    ) -> bool {
        self.session().apply_style_property(node, property, text)
    }

    /// Like [`apply_style_property`](Self::apply_style_property), with the
    /// property given by its USS name.
    pub fn apply_style_named(&self, node: &mut WidgetNode, property: &str, text: &str) -> bool {
        match StyleProperty::lookup(property.trim()) {
            Some(property) => self.apply_style_property(node, property, text),
            None => {
                self.sink.warning(&Warning::UnknownStyleProperty {
                    property: property.trim().to_string(),
                });
                false
            }
        }
    }

    /// Compiles a style block without a widget, e.g. for stylesheet tooling.
    pub fn compile_style(&self, text: &str) -> StyleState {
        let mut node = WidgetNode::new(WidgetType::VisualElement);
        self.apply_style(&mut node, text);
        node.style
    }
}
