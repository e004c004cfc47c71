use std::fmt;

use serde::{Serialize, Serializer};

use crate::tables::{
    AlternatingRowBackground, CollectionVirtualizationMethod, ListViewReorderMode,
    NestedInteractionKind, ScrollViewMode, ScrollerVisibility, SelectionType, SliderDirection,
    TouchScreenKeyboardType, TouchScrollBehavior,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Vector4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Bounds {
    pub center: Vector3,
    pub extents: Vector3,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Vector2Int {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Vector3Int {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RectInt {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BoundsInt {
    pub position: Vector3Int,
    pub size: Vector3Int,
}

/// 128-bit hash written as 32 hex digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Hash128(pub [u8; 16]);

impl Hash128 {
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.len() != 32 {
            return None;
        }
        let mut bytes = [0u8; 16];
        hex::decode_to_slice(text, &mut bytes).ok()?;
        Some(Self(bytes))
    }
}

impl fmt::Display for Hash128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl Serialize for Hash128 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Attributes shared by Label and Button.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextElementProps {
    pub binding_path: Option<String>,
    pub text: Option<String>,
    pub parse_escape_sequences: bool,
    pub display_tooltip_when_elided: bool,
    pub enable_rich_text: bool,
}

impl Default for TextElementProps {
    fn default() -> Self {
        Self {
            binding_path: None,
            text: None,
            parse_escape_sequences: false,
            display_tooltip_when_elided: true,
            enable_rich_text: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GroupBoxProps {
    pub binding_path: Option<String>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoldoutProps {
    pub binding_path: Option<String>,
    pub text: Option<String>,
    pub value: bool,
}

impl Default for FoldoutProps {
    fn default() -> Self {
        Self {
            binding_path: None,
            text: None,
            value: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ToggleProps {
    pub binding_path: Option<String>,
    pub label: Option<String>,
    pub value: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RadioButtonProps {
    pub binding_path: Option<String>,
    pub label: Option<String>,
    pub text: Option<String>,
    pub value: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScrollViewProps {
    pub mode: ScrollViewMode,
    pub horizontal_scroller_visibility: ScrollerVisibility,
    pub vertical_scroller_visibility: ScrollerVisibility,
    pub nested_interaction_kind: NestedInteractionKind,
    pub horizontal_page_size: f32,
    pub vertical_page_size: f32,
    pub mouse_wheel_scroll_size: f32,
    pub scroll_deceleration_rate: f32,
    pub elasticity: f32,
    pub touch_scroll_behavior: TouchScrollBehavior,
    pub elastic_animation_interval_ms: i64,
}

impl Default for ScrollViewProps {
    fn default() -> Self {
        Self {
            mode: ScrollViewMode::Vertical,
            horizontal_scroller_visibility: ScrollerVisibility::Auto,
            vertical_scroller_visibility: ScrollerVisibility::Auto,
            nested_interaction_kind: NestedInteractionKind::Default,
            horizontal_page_size: -1.0,
            vertical_page_size: -1.0,
            mouse_wheel_scroll_size: 18.0,
            scroll_deceleration_rate: 0.135,
            elasticity: 0.1,
            touch_scroll_behavior: TouchScrollBehavior::Clamped,
            elastic_animation_interval_ms: 16,
        }
    }
}

/// Attributes shared by ListView and TreeView.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionProps {
    pub binding_path: Option<String>,
    pub show_border: bool,
    pub reorderable: bool,
    pub horizontal_scrolling: bool,
    pub selection_type: SelectionType,
    pub show_alternating_row_backgrounds: AlternatingRowBackground,
    pub fixed_item_height: f32,
    pub virtualization_method: CollectionVirtualizationMethod,
}

impl Default for CollectionProps {
    fn default() -> Self {
        Self {
            binding_path: None,
            show_border: false,
            reorderable: false,
            horizontal_scrolling: false,
            selection_type: SelectionType::Single,
            show_alternating_row_backgrounds: AlternatingRowBackground::None,
            fixed_item_height: 22.0,
            virtualization_method: CollectionVirtualizationMethod::FixedHeight,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListViewProps {
    pub collection: CollectionProps,
    pub show_foldout_header: bool,
    pub show_add_remove_footer: bool,
    pub show_bound_collection_size: bool,
    pub header_title: Option<String>,
    pub reorder_mode: ListViewReorderMode,
}

impl Default for ListViewProps {
    fn default() -> Self {
        Self {
            collection: CollectionProps::default(),
            show_foldout_header: false,
            show_add_remove_footer: false,
            show_bound_collection_size: true,
            header_title: None,
            reorder_mode: ListViewReorderMode::Simple,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TreeViewProps {
    pub collection: CollectionProps,
    pub auto_expand: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScrollerProps {
    pub low_value: f32,
    pub high_value: f32,
    pub value: f32,
    pub direction: SliderDirection,
}

impl Default for ScrollerProps {
    fn default() -> Self {
        Self {
            low_value: 0.0,
            high_value: 100.0,
            value: 0.0,
            direction: SliderDirection::Vertical,
        }
    }
}

/// Attributes shared by text inputs and the numeric fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InputProps {
    pub binding_path: Option<String>,
    pub label: Option<String>,
    pub readonly: bool,
    pub is_delayed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextFieldProps {
    pub input: InputProps,
    pub value: String,
    pub max_length: i32,
    pub password: bool,
    pub mask_character: char,
    pub hide_mobile_input: bool,
    pub keyboard_type: TouchScreenKeyboardType,
    pub auto_correction: bool,
    pub multiline: bool,
}

impl Default for TextFieldProps {
    fn default() -> Self {
        Self {
            input: InputProps::default(),
            value: String::new(),
            max_length: -1,
            password: false,
            mask_character: '*',
            hide_mobile_input: false,
            keyboard_type: TouchScreenKeyboardType::Default,
            auto_correction: false,
            multiline: false,
        }
    }
}

/// `Slider` over `f32`, `SliderInt` over `i32`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderProps<T> {
    pub binding_path: Option<String>,
    pub label: Option<String>,
    pub low_value: T,
    pub high_value: T,
    pub value: T,
    pub direction: SliderDirection,
    pub page_size: f32,
    pub show_input_field: bool,
    pub inverted: bool,
}

impl<T: From<u8> + Default> Default for SliderProps<T> {
    fn default() -> Self {
        Self {
            binding_path: None,
            label: None,
            low_value: T::default(),
            high_value: T::from(10),
            value: T::default(),
            direction: SliderDirection::Horizontal,
            page_size: 0.0,
            show_input_field: false,
            inverted: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MinMaxSliderProps {
    pub binding_path: Option<String>,
    pub label: Option<String>,
    pub min_value: f32,
    pub max_value: f32,
    pub low_limit: f32,
    pub high_limit: f32,
}

impl Default for MinMaxSliderProps {
    fn default() -> Self {
        Self {
            binding_path: None,
            label: None,
            min_value: 0.0,
            max_value: 10.0,
            low_limit: f32::MIN,
            high_limit: f32::MAX,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressBarProps {
    pub binding_path: Option<String>,
    pub low_value: f32,
    pub high_value: f32,
    pub value: f32,
    pub title: Option<String>,
}

impl Default for ProgressBarProps {
    fn default() -> Self {
        Self {
            binding_path: None,
            low_value: 0.0,
            high_value: 100.0,
            value: 0.0,
            title: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoiceProps {
    pub binding_path: Option<String>,
    pub label: Option<String>,
    /// `index` on DropdownField, `value` on RadioButtonGroup.
    pub index: i32,
    pub choices: Vec<String>,
}

impl Default for ChoiceProps {
    fn default() -> Self {
        Self {
            binding_path: None,
            label: None,
            index: -1,
            choices: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EnumFieldProps {
    pub binding_path: Option<String>,
    pub label: Option<String>,
    pub type_name: Option<String>,
    pub include_obsolete_values: bool,
    /// Selected member name.
    pub value: Option<String>,
}

/// Numeric and hash fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FieldProps<T> {
    pub input: InputProps,
    pub value: T,
}

/// Vector, rect and bounds fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CompositeProps<T> {
    pub binding_path: Option<String>,
    pub label: Option<String>,
    pub value: T,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash128_needs_32_hex_digits() {
        let hash = Hash128::parse("0123456789abcdef0123456789ABCDEF").unwrap();
        assert_eq!(hash.0[0], 0x01);
        assert_eq!(hash.0[15], 0xef);
        assert_eq!(hash.to_string(), "0123456789abcdef0123456789abcdef");
        assert!(Hash128::parse("0123").is_none());
        assert!(Hash128::parse("zz23456789abcdef0123456789abcdef").is_none());
        assert_eq!(
            serde_json::to_value(hash).unwrap(),
            serde_json::json!("0123456789abcdef0123456789abcdef")
        );
    }

    #[test]
    fn slider_defaults_span_zero_to_ten() {
        let slider = SliderProps::<f32>::default();
        assert_eq!((slider.low_value, slider.high_value), (0.0, 10.0));
        let slider = SliderProps::<i32>::default();
        assert_eq!((slider.low_value, slider.high_value), (0, 10));
    }
}
