//! UIBuddy: builds typed widget trees from UXML markup and compiles USS
//! declarations into per-element style state.
//!
//! The entry point is [`UiBuilder`]. Recoverable problems (unknown attributes,
//! bad style values, missing resources) are reported through a
//! [`WarningSink`] and never abort a build; only malformed markup, unknown
//! element names and root type mismatches are fatal ([`BuildError`]).
//!
//! ```no_run
//! use uibuddy::UiBuilder;
//!
//! let builder = UiBuilder::new();
//! let root = builder.build(r#"<ui:Button name="ok" text="OK" style="width: 80px"/>"#)?;
//! assert_eq!(root.name(), Some("ok"));
//! # Ok::<(), uibuddy::BuildError>(())
//! ```

pub mod context;
pub mod diagnostics;
pub mod error;
pub mod style;
pub mod tables;
pub mod uss;
pub mod values;
pub mod warnings;
pub mod widget;

mod attributes;
mod builder;

pub use builder::UiBuilder;
pub use context::{
    EnumMember, EnumRegistry, MapResolver, NullResolver, ResolvedResource, ResourceHandle,
    ResourceKind, ResourceResolver, StaticEnumRegistry,
};
pub use error::{BuildError, Grammar, ParseError};
pub use style::StyleState;
pub use tables::StyleProperty;
pub use uibuddy_config::UiBuddyConfig;
pub use warnings::{TracingSink, Warning, WarningLog, WarningSink};
pub use widget::{WidgetKind, WidgetNode, WidgetType};
