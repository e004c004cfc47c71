//! Immutable lookup tables: style property names, enumerated values, named colors.

/// Declares a closed enumeration together with its textual table.
///
/// Generates `lookup` (exact text to variant), `as_str`, `ALL` and `Display`.
macro_rules! keyword_table {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
        $vis enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn lookup(text: &str) -> Option<Self> {
                match text {
                    $($text => Some($name::$variant),)+
                    _ => None,
                }
            }

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use keyword_table;

mod attributes;
mod colors;
mod properties;
mod style_enums;
mod widget_enums;

pub use attributes::AttributeName;
pub use colors::named_color;
pub use properties::StyleProperty;
pub use style_enums::{
    Align, DisplayStyle, EasingMode, FlexDirection, FontStyle, Justify, MouseCursor, Overflow,
    OverflowClipBox, Position, Repeat, ScaleMode, TextAnchor, TextOverflow, TextOverflowPosition,
    Visibility, WhiteSpace, Wrap,
};
pub use widget_enums::{
    AlternatingRowBackground, CollectionVirtualizationMethod, ListViewReorderMode,
    NestedInteractionKind, PickingMode, ScrollViewMode, ScrollerVisibility, SelectionType,
    SliderDirection, TouchScrollBehavior, TouchScreenKeyboardType, UsageHints,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_table_has_every_name() {
        assert_eq!(StyleProperty::ALL.len(), 91);
        for property in StyleProperty::ALL {
            assert_eq!(StyleProperty::lookup(property.as_str()), Some(*property));
        }
    }

    #[test]
    fn property_lookup_is_exact() {
        assert_eq!(StyleProperty::lookup("margin-top"), Some(StyleProperty::MarginTop));
        assert_eq!(
            StyleProperty::lookup("-unity-text-outline"),
            Some(StyleProperty::UnityTextOutline)
        );
        assert_eq!(StyleProperty::lookup("Margin-Top"), None);
        assert_eq!(StyleProperty::lookup("gap"), None);
    }

    #[test]
    fn enumerated_style_values_resolve() {
        assert_eq!(Align::lookup("flex-end"), Some(Align::FlexEnd));
        assert_eq!(TextAnchor::lookup("lower-center"), Some(TextAnchor::LowerCenter));
        assert_eq!(FontStyle::lookup("bold-and-italic"), Some(FontStyle::BoldAndItalic));
        assert_eq!(DisplayStyle::lookup("grid"), None);
        assert_eq!(EasingMode::ALL.len(), 23);
    }

    #[test]
    fn attribute_enums_use_pascal_case() {
        assert_eq!(PickingMode::lookup("Ignore"), Some(PickingMode::Ignore));
        assert_eq!(PickingMode::lookup("ignore"), None);
        assert_eq!(
            TouchScreenKeyboardType::lookup("ASCIICapable"),
            Some(TouchScreenKeyboardType::AsciiCapable)
        );
    }

    #[test]
    fn named_colors_are_case_insensitive() {
        assert_eq!(named_color("red"), Some(0xff0000));
        assert_eq!(named_color("RebeccaPurple"), named_color("rebeccapurple"));
        assert_eq!(named_color("CornflowerBlue"), Some(0x6495ed));
        assert_eq!(named_color("notacolor"), None);
    }
}
