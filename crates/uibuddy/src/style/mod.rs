//! Per-widget style state.
//!
//! Every field is independently settable; `None` means the declaration never
//! touched it. Box shorthands are stored as their expanded edges or corners.

use serde::Serialize;

use crate::context::ResourceHandle;
use crate::tables::{
    Align, DisplayStyle, EasingMode, FlexDirection, FontStyle, Justify, MouseCursor, Overflow,
    OverflowClipBox, Position, ScaleMode, TextAnchor, TextOverflow, TextOverflowPosition,
    Visibility, WhiteSpace, Wrap,
};
use crate::values::{
    Angle, BackgroundPosition, BackgroundRepeat, BackgroundSize, Corners, Edges, Length, Rgba,
    Scale, StyleValue, TextShadow, TransformOrigin, Translate,
};

pub type Field<T> = Option<StyleValue<T>>;

/// Resolved `cursor` value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CursorStyle {
    Builtin(MouseCursor),
    Texture {
        texture: ResourceHandle,
        hotspot: (f32, f32),
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StyleState {
    pub align_content: Field<Align>,
    pub align_items: Field<Align>,
    pub align_self: Field<Align>,

    pub background_color: Field<Rgba>,
    pub background_image: Field<ResourceHandle>,
    pub background_position_x: Field<BackgroundPosition>,
    pub background_position_y: Field<BackgroundPosition>,
    pub background_repeat: Field<BackgroundRepeat>,
    pub background_size: Field<BackgroundSize>,

    pub border_color: Edges<Field<Rgba>>,
    pub border_radius: Corners<Field<Length>>,
    pub border_width: Edges<Field<f32>>,

    pub top: Field<Length>,
    pub right: Field<Length>,
    pub bottom: Field<Length>,
    pub left: Field<Length>,

    pub color: Field<Rgba>,
    pub cursor: Field<CursorStyle>,
    pub display: Field<DisplayStyle>,

    pub flex_basis: Field<Length>,
    pub flex_direction: Field<FlexDirection>,
    pub flex_grow: Field<f32>,
    pub flex_shrink: Field<f32>,
    pub flex_wrap: Field<Wrap>,

    pub font_size: Field<Length>,
    pub width: Field<Length>,
    pub height: Field<Length>,
    pub min_width: Field<Length>,
    pub max_width: Field<Length>,
    pub min_height: Field<Length>,
    pub max_height: Field<Length>,
    pub justify_content: Field<Justify>,
    pub letter_spacing: Field<Length>,
    pub margin: Edges<Field<Length>>,
    pub opacity: Field<f32>,
    pub overflow: Field<Overflow>,
    pub padding: Edges<Field<Length>>,
    pub position: Field<Position>,

    pub rotate: Field<Angle>,
    pub scale: Field<Scale>,
    pub translate: Field<Translate>,
    pub transform_origin: Field<TransformOrigin>,

    pub text_overflow: Field<TextOverflow>,
    pub text_shadow: Field<TextShadow>,

    pub transition_property: Field<Vec<String>>,
    pub transition_duration: Field<Vec<f32>>,
    pub transition_timing_function: Field<Vec<EasingMode>>,
    pub transition_delay: Field<Vec<f32>>,

    pub unity_background_image_tint_color: Field<Rgba>,
    pub unity_background_scale_mode: Field<ScaleMode>,
    pub unity_font: Field<ResourceHandle>,
    pub unity_font_definition: Field<ResourceHandle>,
    pub unity_font_style: Field<FontStyle>,
    pub unity_overflow_clip_box: Field<OverflowClipBox>,
    pub unity_paragraph_spacing: Field<Length>,
    pub unity_slice: Edges<Field<i32>>,
    pub unity_slice_scale: Field<f32>,
    pub unity_text_align: Field<TextAnchor>,
    pub unity_text_outline_color: Field<Rgba>,
    pub unity_text_outline_width: Field<f32>,
    pub unity_text_overflow_position: Field<TextOverflowPosition>,

    pub visibility: Field<Visibility>,
    pub white_space: Field<WhiteSpace>,
    pub word_spacing: Field<Length>,
}

impl StyleState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no declaration has been applied.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
