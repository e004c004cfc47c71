use uibuddy_config::ResourceConfig;

use crate::context::{ResourceHandle, ResourceKind, ResourceResolver};
use crate::diagnostics::Diagnostics;
use crate::error::{Grammar, ParseError, ParseResult};
use crate::style::{CursorStyle, Field, StyleState};
use crate::tables::{
    Align, DisplayStyle, FlexDirection, FontStyle, Justify, Overflow, OverflowClipBox, Position,
    ScaleMode, StyleProperty, TextAnchor, TextOverflow, TextOverflowPosition, Visibility,
    WhiteSpace, Wrap,
};
use crate::values::{
    self, Axis, Corners, Cursor, Edges, FlexShorthand, Rgba, StyleKeyword, StyleValue,
    UrlReference, expand_corners, expand_edges,
};
use crate::warnings::{Warning, WarningSink};

/// Compiles one declaration value and writes it into a style state.
///
/// A failed compile leaves every field untouched; shorthands write all of
/// their fields or none.
pub(crate) struct StyleApplier<'a> {
    pub(crate) resolver: &'a dyn ResourceResolver,
    pub(crate) resources: &'a ResourceConfig,
    pub(crate) sink: &'a dyn WarningSink,
    pub(crate) diagnostics: &'a Diagnostics,
    pub(crate) element: &'a str,
}

fn assign<T>(slot: &mut Field<T>, value: Option<StyleValue<T>>) -> bool {
    match value {
        Some(value) => {
            *slot = Some(value);
            true
        }
        None => false,
    }
}

fn assign_edges<T>(slot: &mut Edges<Field<T>>, value: Option<Edges<StyleValue<T>>>) -> bool {
    let Some(edges) = value else {
        return false;
    };
    slot.top = Some(edges.top);
    slot.right = Some(edges.right);
    slot.bottom = Some(edges.bottom);
    slot.left = Some(edges.left);
    true
}

fn assign_corners<T>(slot: &mut Corners<Field<T>>, value: Option<Corners<StyleValue<T>>>) -> bool {
    let Some(corners) = value else {
        return false;
    };
    slot.top_left = Some(corners.top_left);
    slot.top_right = Some(corners.top_right);
    slot.bottom_right = Some(corners.bottom_right);
    slot.bottom_left = Some(corners.bottom_left);
    true
}

impl StyleApplier<'_> {
    /// Returns whether any field was written.
    pub(crate) fn apply(
        &self,
        style: &mut StyleState,
        property: StyleProperty,
        text: &str,
    ) -> bool {
        use StyleProperty as P;
        let text = text.trim();

        let applied = match property {
            P::AlignContent => assign(
                &mut style.align_content,
                self.enumerated(property, text, Align::lookup),
            ),
            P::AlignItems => assign(
                &mut style.align_items,
                self.enumerated(property, text, Align::lookup),
            ),
            P::AlignSelf => assign(
                &mut style.align_self,
                self.enumerated(property, text, Align::lookup),
            ),
            P::Display => assign(
                &mut style.display,
                self.enumerated(property, text, DisplayStyle::lookup),
            ),
            P::FlexDirection => assign(
                &mut style.flex_direction,
                self.enumerated(property, text, FlexDirection::lookup),
            ),
            P::FlexWrap => assign(
                &mut style.flex_wrap,
                self.enumerated(property, text, Wrap::lookup),
            ),
            P::JustifyContent => assign(
                &mut style.justify_content,
                self.enumerated(property, text, Justify::lookup),
            ),
            P::Overflow => assign(
                &mut style.overflow,
                self.enumerated(property, text, Overflow::lookup),
            ),
            P::Position => assign(
                &mut style.position,
                self.enumerated(property, text, Position::lookup),
            ),
            P::TextOverflow => assign(
                &mut style.text_overflow,
                self.enumerated(property, text, TextOverflow::lookup),
            ),
            P::UnityBackgroundScaleMode => assign(
                &mut style.unity_background_scale_mode,
                self.enumerated(property, text, ScaleMode::lookup),
            ),
            P::UnityFontStyle => assign(
                &mut style.unity_font_style,
                self.enumerated(property, text, FontStyle::lookup),
            ),
            P::UnityOverflowClipBox => assign(
                &mut style.unity_overflow_clip_box,
                self.enumerated(property, text, OverflowClipBox::lookup),
            ),
            P::UnityTextAlign => assign(
                &mut style.unity_text_align,
                self.enumerated(property, text, TextAnchor::lookup),
            ),
            P::UnityTextOverflowPosition => assign(
                &mut style.unity_text_overflow_position,
                self.enumerated(property, text, TextOverflowPosition::lookup),
            ),
            P::Visibility => assign(
                &mut style.visibility,
                self.enumerated(property, text, Visibility::lookup),
            ),
            P::WhiteSpace => assign(
                &mut style.white_space,
                self.enumerated(property, text, WhiteSpace::lookup),
            ),

            P::BackgroundColor => assign(
                &mut style.background_color,
                self.compile(property, text, values::parse_color),
            ),
            P::Color => assign(&mut style.color, self.compile(property, text, values::parse_color)),
            P::UnityBackgroundImageTintColor => assign(
                &mut style.unity_background_image_tint_color,
                self.compile(property, text, values::parse_color),
            ),
            P::UnityTextOutlineColor => assign(
                &mut style.unity_text_outline_color,
                self.compile(property, text, values::parse_color),
            ),
            P::BorderTopColor => assign(
                &mut style.border_color.top,
                self.compile(property, text, values::parse_color),
            ),
            P::BorderRightColor => assign(
                &mut style.border_color.right,
                self.compile(property, text, values::parse_color),
            ),
            P::BorderBottomColor => assign(
                &mut style.border_color.bottom,
                self.compile(property, text, values::parse_color),
            ),
            P::BorderLeftColor => assign(
                &mut style.border_color.left,
                self.compile(property, text, values::parse_color),
            ),
            P::BorderColor => assign_edges(
                &mut style.border_color,
                self.color_edges(property, text),
            ),

            P::Width => assign(
                &mut style.width,
                self.compile(property, text, values::parse_length),
            ),
            P::Height => assign(
                &mut style.height,
                self.compile(property, text, values::parse_length),
            ),
            P::MinWidth => assign(
                &mut style.min_width,
                self.compile(property, text, values::parse_length),
            ),
            P::MaxWidth => assign(
                &mut style.max_width,
                self.compile(property, text, values::parse_length),
            ),
            P::MinHeight => assign(
                &mut style.min_height,
                self.compile(property, text, values::parse_length),
            ),
            P::MaxHeight => assign(
                &mut style.max_height,
                self.compile(property, text, values::parse_length),
            ),
            P::Top => assign(&mut style.top, self.compile(property, text, values::parse_length)),
            P::Right => assign(
                &mut style.right,
                self.compile(property, text, values::parse_length),
            ),
            P::Bottom => assign(
                &mut style.bottom,
                self.compile(property, text, values::parse_length),
            ),
            P::Left => assign(&mut style.left, self.compile(property, text, values::parse_length)),
            P::FontSize => assign(
                &mut style.font_size,
                self.compile(property, text, values::parse_length),
            ),
            P::LetterSpacing => assign(
                &mut style.letter_spacing,
                self.compile(property, text, values::parse_length),
            ),
            P::WordSpacing => assign(
                &mut style.word_spacing,
                self.compile(property, text, values::parse_length),
            ),
            P::FlexBasis => assign(
                &mut style.flex_basis,
                self.compile(property, text, values::parse_length),
            ),
            P::UnityParagraphSpacing => assign(
                &mut style.unity_paragraph_spacing,
                self.compile(property, text, values::parse_length),
            ),
            P::MarginTop => assign(
                &mut style.margin.top,
                self.compile(property, text, values::parse_length),
            ),
            P::MarginRight => assign(
                &mut style.margin.right,
                self.compile(property, text, values::parse_length),
            ),
            P::MarginBottom => assign(
                &mut style.margin.bottom,
                self.compile(property, text, values::parse_length),
            ),
            P::MarginLeft => assign(
                &mut style.margin.left,
                self.compile(property, text, values::parse_length),
            ),
            P::PaddingTop => assign(
                &mut style.padding.top,
                self.compile(property, text, values::parse_length),
            ),
            P::PaddingRight => assign(
                &mut style.padding.right,
                self.compile(property, text, values::parse_length),
            ),
            P::PaddingBottom => assign(
                &mut style.padding.bottom,
                self.compile(property, text, values::parse_length),
            ),
            P::PaddingLeft => assign(
                &mut style.padding.left,
                self.compile(property, text, values::parse_length),
            ),
            P::BorderTopLeftRadius => assign(
                &mut style.border_radius.top_left,
                self.compile(property, text, values::parse_length),
            ),
            P::BorderTopRightRadius => assign(
                &mut style.border_radius.top_right,
                self.compile(property, text, values::parse_length),
            ),
            P::BorderBottomRightRadius => assign(
                &mut style.border_radius.bottom_right,
                self.compile(property, text, values::parse_length),
            ),
            P::BorderBottomLeftRadius => assign(
                &mut style.border_radius.bottom_left,
                self.compile(property, text, values::parse_length),
            ),
            P::Margin => assign_edges(
                &mut style.margin,
                self.edges(property, text, values::parse_length_list),
            ),
            P::Padding => assign_edges(
                &mut style.padding,
                self.edges(property, text, values::parse_length_list),
            ),
            P::BorderRadius => assign_corners(
                &mut style.border_radius,
                self.corners(property, text, values::parse_length_list),
            ),

            P::BorderTopWidth => assign(
                &mut style.border_width.top,
                self.compile(property, text, values::parse_float_length),
            ),
            P::BorderRightWidth => assign(
                &mut style.border_width.right,
                self.compile(property, text, values::parse_float_length),
            ),
            P::BorderBottomWidth => assign(
                &mut style.border_width.bottom,
                self.compile(property, text, values::parse_float_length),
            ),
            P::BorderLeftWidth => assign(
                &mut style.border_width.left,
                self.compile(property, text, values::parse_float_length),
            ),
            P::BorderWidth => assign_edges(
                &mut style.border_width,
                self.edges(property, text, values::parse_float_list),
            ),
            P::Opacity => assign(
                &mut style.opacity,
                self.compile(property, text, values::parse_float_length),
            ),
            P::FlexGrow => assign(
                &mut style.flex_grow,
                self.compile(property, text, values::parse_float_length),
            ),
            P::FlexShrink => assign(
                &mut style.flex_shrink,
                self.compile(property, text, values::parse_float_length),
            ),
            P::UnityTextOutlineWidth => assign(
                &mut style.unity_text_outline_width,
                self.compile(property, text, values::parse_float_length),
            ),
            P::UnitySliceScale => assign(
                &mut style.unity_slice_scale,
                self.compile(property, text, values::parse_float_length),
            ),

            P::UnitySliceTop => assign(
                &mut style.unity_slice.top,
                self.compile(property, text, values::parse_integer),
            ),
            P::UnitySliceRight => assign(
                &mut style.unity_slice.right,
                self.compile(property, text, values::parse_integer),
            ),
            P::UnitySliceBottom => assign(
                &mut style.unity_slice.bottom,
                self.compile(property, text, values::parse_integer),
            ),
            P::UnitySliceLeft => assign(
                &mut style.unity_slice.left,
                self.compile(property, text, values::parse_integer),
            ),

            P::Rotate => assign(
                &mut style.rotate,
                self.compile(property, text, values::parse_angle),
            ),
            P::Scale => assign(&mut style.scale, self.compile(property, text, values::parse_scale)),
            P::Translate => assign(
                &mut style.translate,
                self.compile(property, text, values::parse_translate),
            ),
            P::TransformOrigin => assign(
                &mut style.transform_origin,
                self.compile(property, text, values::parse_transform_origin),
            ),
            P::TextShadow => assign(
                &mut style.text_shadow,
                self.compile(property, text, values::parse_text_shadow),
            ),

            P::BackgroundRepeat => assign(
                &mut style.background_repeat,
                self.compile(property, text, values::parse_background_repeat),
            ),
            P::BackgroundSize => assign(
                &mut style.background_size,
                self.compile(property, text, values::parse_background_size),
            ),
            P::BackgroundPositionX => assign(
                &mut style.background_position_x,
                self.compile(property, text, |text| {
                    values::parse_background_position_axis(text, Axis::X)
                }),
            ),
            P::BackgroundPositionY => assign(
                &mut style.background_position_y,
                self.compile(property, text, |text| {
                    values::parse_background_position_axis(text, Axis::Y)
                }),
            ),
            P::BackgroundPosition => self.background_position(style, text),

            P::TransitionProperty => assign(
                &mut style.transition_property,
                self.compile(property, text, values::parse_transition_properties),
            ),
            P::TransitionDuration => assign(
                &mut style.transition_duration,
                self.compile(property, text, values::parse_time_list),
            ),
            P::TransitionDelay => assign(
                &mut style.transition_delay,
                self.compile(property, text, values::parse_time_list),
            ),
            P::TransitionTimingFunction => assign(
                &mut style.transition_timing_function,
                self.compile(property, text, values::parse_easing_list),
            ),
            P::Transition => self.transition(style, text),

            P::Flex => self.flex(style, text),
            P::UnityTextOutline => self.outline(style, text),

            P::BackgroundImage => assign(
                &mut style.background_image,
                self.resource(property, text, ResourceKind::Texture, Grammar::ImageUrl),
            ),
            P::UnityFont => assign(
                &mut style.unity_font,
                self.resource(property, text, ResourceKind::Font, Grammar::Font),
            ),
            P::UnityFontDefinition => assign(
                &mut style.unity_font_definition,
                self.resource(property, text, ResourceKind::FontDefinition, Grammar::Font),
            ),
            P::Cursor => assign(&mut style.cursor, self.cursor(text)),
        };

        if applied && self.diagnostics.enabled("uss") {
            tracing::info!(
                element = self.element,
                property = property.as_str(),
                value = text,
                "applied uss declaration"
            );
        }
        applied
    }

    fn invalid(&self, property: StyleProperty, grammar: Grammar, text: &str) {
        self.sink.warning(&Warning::InvalidStyleValue {
            element: self.element.to_string(),
            property,
            grammar,
            value: text.to_string(),
        });
    }

    fn compile<T>(
        &self,
        property: StyleProperty,
        text: &str,
        parse: impl FnOnce(&str) -> ParseResult<T>,
    ) -> Option<StyleValue<T>> {
        if let Some(keyword) = StyleKeyword::parse(text) {
            return Some(StyleValue::Keyword(keyword));
        }
        match parse(text) {
            Ok(value) => Some(StyleValue::Value(value)),
            Err(err) => {
                self.invalid(property, err.grammar(), text);
                None
            }
        }
    }

    /// Enumerated properties check their own table before the keyword set.
    fn enumerated<T>(
        &self,
        property: StyleProperty,
        text: &str,
        lookup: fn(&str) -> Option<T>,
    ) -> Option<StyleValue<T>> {
        let token = text.to_ascii_lowercase();
        if let Some(value) = lookup(&token) {
            return Some(StyleValue::Value(value));
        }
        if let Some(keyword) = StyleKeyword::lookup(&token) {
            return Some(StyleValue::Keyword(keyword));
        }
        self.sink.warning(&Warning::UnsupportedStyleValue {
            element: self.element.to_string(),
            property,
            value: text.to_string(),
        });
        None
    }

    fn edges<T: Clone>(
        &self,
        property: StyleProperty,
        text: &str,
        parse: fn(&str) -> ParseResult<Vec<StyleValue<T>>>,
    ) -> Option<Edges<StyleValue<T>>> {
        match parse(text).and_then(|values| expand_edges(&values)) {
            Ok(edges) => Some(edges),
            Err(err) => {
                self.invalid(property, err.grammar(), text);
                None
            }
        }
    }

    fn corners<T: Clone>(
        &self,
        property: StyleProperty,
        text: &str,
        parse: fn(&str) -> ParseResult<Vec<StyleValue<T>>>,
    ) -> Option<Corners<StyleValue<T>>> {
        match parse(text).and_then(|values| expand_corners(&values)) {
            Ok(corners) => Some(corners),
            Err(err) => {
                self.invalid(property, err.grammar(), text);
                None
            }
        }
    }

    fn color_edges(&self, property: StyleProperty, text: &str) -> Option<Edges<StyleValue<Rgba>>> {
        let parsed = values::grouped_tokens(text)
            .into_iter()
            .map(|token| match StyleKeyword::parse(token) {
                Some(keyword) => Ok(StyleValue::Keyword(keyword)),
                None => values::parse_color(token).map(StyleValue::Value),
            })
            .collect::<ParseResult<Vec<_>>>()
            .and_then(|colors| match colors.len() {
                0 => Err(ParseError::Empty(Grammar::Color)),
                _ => expand_edges(&colors).map_err(|err| match err {
                    ParseError::TooManyValues { max, found, .. } => ParseError::TooManyValues {
                        grammar: Grammar::Color,
                        max,
                        found,
                    },
                    other => other,
                }),
            });
        match parsed {
            Ok(edges) => Some(edges),
            Err(err) => {
                self.invalid(property, err.grammar(), text);
                None
            }
        }
    }

    fn background_position(&self, style: &mut StyleState, text: &str) -> bool {
        let property = StyleProperty::BackgroundPosition;
        if let Some(keyword) = StyleKeyword::parse(text) {
            style.background_position_x = Some(StyleValue::Keyword(keyword));
            style.background_position_y = Some(StyleValue::Keyword(keyword));
            return true;
        }
        let resolved = values::parse_background_position(text)
            .and_then(|components| values::resolve_position_axes(text, &components));
        match resolved {
            Ok((x, y)) => {
                if let Some(x) = x {
                    style.background_position_x = Some(StyleValue::Value(x));
                }
                if let Some(y) = y {
                    style.background_position_y = Some(StyleValue::Value(y));
                }
                true
            }
            Err(err) => {
                self.invalid(property, err.grammar(), text);
                false
            }
        }
    }

    fn flex(&self, style: &mut StyleState, text: &str) -> bool {
        let shorthand = match StyleKeyword::parse(text) {
            Some(keyword) => FlexShorthand::Keyword(keyword),
            None => match values::parse_flex(text) {
                Ok(shorthand) => shorthand,
                Err(err) => {
                    self.invalid(StyleProperty::Flex, err.grammar(), text);
                    return false;
                }
            },
        };
        match shorthand {
            FlexShorthand::Keyword(keyword) => {
                style.flex_grow = Some(StyleValue::Keyword(keyword));
                style.flex_shrink = Some(StyleValue::Keyword(keyword));
                style.flex_basis = Some(StyleValue::Keyword(keyword));
            }
            FlexShorthand::Values {
                grow,
                shrink,
                basis,
            } => {
                style.flex_grow = Some(StyleValue::Value(grow));
                style.flex_shrink = Some(StyleValue::Value(shrink));
                style.flex_basis = Some(StyleValue::Value(basis));
            }
        }
        true
    }

    fn outline(&self, style: &mut StyleState, text: &str) -> bool {
        if let Some(keyword) = StyleKeyword::parse(text) {
            style.unity_text_outline_width = Some(StyleValue::Keyword(keyword));
            style.unity_text_outline_color = Some(StyleValue::Keyword(keyword));
            return true;
        }
        match values::parse_outline(text) {
            Ok(outline) => {
                if let Some(width) = outline.width {
                    style.unity_text_outline_width = Some(StyleValue::Value(width));
                }
                if let Some(color) = outline.color {
                    style.unity_text_outline_color = Some(StyleValue::Value(color));
                }
                true
            }
            Err(err) => {
                self.invalid(StyleProperty::UnityTextOutline, err.grammar(), text);
                false
            }
        }
    }

    fn transition(&self, style: &mut StyleState, text: &str) -> bool {
        if let Some(keyword) = StyleKeyword::parse(text) {
            style.transition_property = Some(StyleValue::Keyword(keyword));
            style.transition_duration = Some(StyleValue::Keyword(keyword));
            style.transition_timing_function = Some(StyleValue::Keyword(keyword));
            style.transition_delay = Some(StyleValue::Keyword(keyword));
            return true;
        }
        match values::parse_transition(text) {
            Ok(list) => {
                style.transition_property = Some(StyleValue::Value(list.properties));
                style.transition_duration = Some(StyleValue::Value(list.durations));
                style.transition_timing_function = Some(StyleValue::Value(list.timing_functions));
                style.transition_delay = Some(StyleValue::Value(list.delays));
                true
            }
            Err(err) => {
                self.invalid(StyleProperty::Transition, err.grammar(), text);
                false
            }
        }
    }

    fn resource(
        &self,
        property: StyleProperty,
        text: &str,
        kind: ResourceKind,
        grammar: Grammar,
    ) -> Option<StyleValue<ResourceHandle>> {
        if let Some(keyword) = StyleKeyword::parse(text) {
            return Some(StyleValue::Keyword(keyword));
        }
        let Ok(reference) = values::parse_url(text) else {
            self.invalid(property, grammar, text);
            return None;
        };
        self.lookup(property, &reference, kind).map(StyleValue::Value)
    }

    fn cursor(&self, text: &str) -> Option<StyleValue<CursorStyle>> {
        let property = StyleProperty::Cursor;
        if let Some(keyword) = StyleKeyword::parse(text) {
            return Some(StyleValue::Keyword(keyword));
        }
        match values::parse_cursor(text) {
            Ok(Cursor::Builtin(cursor)) => Some(StyleValue::Value(CursorStyle::Builtin(cursor))),
            Ok(Cursor::Texture { reference, hotspot }) => self
                .lookup(property, &reference, ResourceKind::Cursor)
                .map(|texture| {
                    StyleValue::Value(CursorStyle::Texture {
                        texture,
                        hotspot: hotspot.unwrap_or((0.0, 0.0)),
                    })
                }),
            Err(err) => {
                self.invalid(property, err.grammar(), text);
                None
            }
        }
    }

    fn lookup(
        &self,
        property: StyleProperty,
        reference: &UrlReference,
        kind: ResourceKind,
    ) -> Option<ResourceHandle> {
        let path = reference.lookup_path(self.resources);
        let resolved = self.resolver.resolve(kind, &path);
        match kind.accepts(&resolved) {
            Some(handle) => Some(handle.clone()),
            None => {
                self.sink.warning(&Warning::ResourceNotFound {
                    element: self.element.to_string(),
                    property,
                    kind,
                    path,
                });
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{MapResolver, NullResolver};
    use crate::tables::EasingMode;
    use crate::values::{BackgroundPositionKeyword, Length};
    use crate::warnings::WarningLog;

    struct Fixture {
        resolver: MapResolver,
        resources: ResourceConfig,
        log: WarningLog,
        diagnostics: Diagnostics,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                resolver: MapResolver::new()
                    .with_texture("Textures/image", "tex-1")
                    .with_font("Fonts/Main", "font-1"),
                resources: ResourceConfig::default(),
                log: WarningLog::new(),
                diagnostics: Diagnostics::from_config(Some("")),
            }
        }

        fn applier(&self) -> StyleApplier<'_> {
            StyleApplier {
                resolver: &self.resolver,
                resources: &self.resources,
                sink: &self.log,
                diagnostics: &self.diagnostics,
                element: "box",
            }
        }

        fn apply(&self, property: StyleProperty, text: &str) -> (StyleState, bool) {
            let mut style = StyleState::new();
            let applied = self.applier().apply(&mut style, property, text);
            (style, applied)
        }
    }

    fn px(value: f32) -> Field<Length> {
        Some(StyleValue::Value(Length::Pixels(value)))
    }

    #[test]
    fn margin_shorthand_expands_edges() {
        let fixture = Fixture::new();
        let (style, applied) = fixture.apply(StyleProperty::Margin, "4px 8px");
        assert!(applied);
        assert_eq!(style.margin.top, px(4.0));
        assert_eq!(style.margin.right, px(8.0));
        assert_eq!(style.margin.bottom, px(4.0));
        assert_eq!(style.margin.left, px(8.0));
    }

    #[test]
    fn radius_uses_corner_table() {
        let fixture = Fixture::new();
        let (style, _) = fixture.apply(StyleProperty::BorderRadius, "1px 2px 3px");
        assert_eq!(style.border_radius.top_left, px(1.0));
        assert_eq!(style.border_radius.top_right, px(2.0));
        assert_eq!(style.border_radius.bottom_right, px(3.0));
        assert_eq!(style.border_radius.bottom_left, px(2.0));
    }

    #[test]
    fn failed_shorthand_writes_nothing() {
        let fixture = Fixture::new();
        let mut style = StyleState::new();
        fixture.applier().apply(&mut style, StyleProperty::Padding, "1px");
        let before = style.clone();
        assert!(!fixture.applier().apply(&mut style, StyleProperty::Padding, "2px wide"));
        assert_eq!(style, before);
        assert!(!fixture.applier().apply(
            &mut style,
            StyleProperty::Padding,
            "1px 2px 3px 4px 5px"
        ));
        assert_eq!(style, before);
        assert_eq!(fixture.log.take().len(), 2);
    }

    #[test]
    fn whole_value_keyword_reaches_every_field() {
        let fixture = Fixture::new();
        let (style, _) = fixture.apply(StyleProperty::Margin, "initial");
        assert_eq!(style.margin, Edges::uniform(Some(StyleValue::Keyword(StyleKeyword::Initial))));

        let (style, _) = fixture.apply(StyleProperty::Flex, "auto");
        assert_eq!(style.flex_grow, Some(StyleValue::Keyword(StyleKeyword::Auto)));
        assert_eq!(style.flex_basis, Some(StyleValue::Keyword(StyleKeyword::Auto)));

        let (style, _) = fixture.apply(StyleProperty::Width, "UNDEFINED");
        assert_eq!(style.width, Some(StyleValue::Keyword(StyleKeyword::Undefined)));
    }

    #[test]
    fn enumerated_tables_win_over_keywords() {
        let fixture = Fixture::new();
        let (style, _) = fixture.apply(StyleProperty::Display, "none");
        assert_eq!(style.display, Some(StyleValue::Value(DisplayStyle::None)));

        let (style, _) = fixture.apply(StyleProperty::AlignSelf, "auto");
        assert_eq!(style.align_self, Some(StyleValue::Value(Align::Auto)));

        let (style, _) = fixture.apply(StyleProperty::Overflow, "initial");
        assert_eq!(style.overflow, Some(StyleValue::Keyword(StyleKeyword::Initial)));

        let (style, applied) = fixture.apply(StyleProperty::Display, "grid");
        assert!(!applied);
        assert!(style.display.is_none());
        assert!(matches!(
            fixture.log.take().as_slice(),
            [Warning::UnsupportedStyleValue { value, .. }] if value == "grid"
        ));
    }

    #[test]
    fn flex_shorthand_writes_three_fields() {
        let fixture = Fixture::new();
        let (style, _) = fixture.apply(StyleProperty::Flex, "2");
        assert_eq!(style.flex_grow, Some(StyleValue::Value(2.0)));
        assert_eq!(style.flex_shrink, Some(StyleValue::Value(1.0)));
        assert_eq!(style.flex_basis, px(0.0));
    }

    #[test]
    fn percentage_border_width_is_rejected() {
        let fixture = Fixture::new();
        let (style, applied) = fixture.apply(StyleProperty::BorderWidth, "10%");
        assert!(!applied);
        assert_eq!(style.border_width, Edges::default());
        assert!(matches!(
            fixture.log.take().as_slice(),
            [Warning::InvalidStyleValue { grammar: Grammar::Length, .. }]
        ));

        let (style, _) = fixture.apply(StyleProperty::WordSpacing, "10%");
        assert_eq!(style.word_spacing, Some(StyleValue::Value(Length::Percent(10.0))));
    }

    #[test]
    fn border_color_accepts_edge_lists() {
        let fixture = Fixture::new();
        let (style, _) = fixture.apply(StyleProperty::BorderColor, "red");
        assert_eq!(style.border_color.top, style.border_color.left);
        assert!(style.border_color.bottom.is_some());

        let (style, _) = fixture.apply(StyleProperty::BorderColor, "red rgb(0, 0, 255)");
        assert_eq!(style.border_color.top, style.border_color.bottom);
        assert_ne!(style.border_color.top, style.border_color.right);
    }

    #[test]
    fn background_position_shorthand() {
        let fixture = Fixture::new();
        let (style, _) = fixture.apply(StyleProperty::BackgroundPosition, "center");
        assert_eq!(style.background_position_x, style.background_position_y);
        let (style, _) = fixture.apply(StyleProperty::BackgroundPosition, "left 50%");
        let x = style.background_position_x.unwrap();
        assert_eq!(x.value().map(|p| p.keyword), Some(BackgroundPositionKeyword::Left));
        assert_eq!(x.value().map(|p| p.offset), Some(Length::Percent(50.0)));
        assert!(style.background_position_y.is_none());

        let (_, applied) = fixture.apply(StyleProperty::BackgroundPositionY, "left");
        assert!(!applied);
    }

    #[test]
    fn transition_shorthand_fills_four_lists() {
        let fixture = Fixture::new();
        let (style, _) = fixture.apply(
            StyleProperty::Transition,
            "width 0.5s ease-in, height 1s ease-out",
        );
        assert_eq!(
            style.transition_property,
            Some(StyleValue::Value(vec!["width".to_string(), "height".to_string()]))
        );
        assert_eq!(
            style.transition_timing_function,
            Some(StyleValue::Value(vec![EasingMode::EaseIn, EasingMode::EaseOut]))
        );
        assert_eq!(style.transition_delay, Some(StyleValue::Value(vec![0.0, 0.0])));
    }

    #[test]
    fn outline_writes_only_present_parts() {
        let fixture = Fixture::new();
        let mut style = StyleState::new();
        let applier = fixture.applier();
        applier.apply(&mut style, StyleProperty::UnityTextOutlineWidth, "3px");
        applier.apply(&mut style, StyleProperty::UnityTextOutline, "blue");
        assert_eq!(style.unity_text_outline_width, Some(StyleValue::Value(3.0)));
        assert!(style.unity_text_outline_color.is_some());
    }

    #[test]
    fn resources_resolve_through_the_resolver() {
        let fixture = Fixture::new();
        let (style, _) = fixture.apply(
            StyleProperty::BackgroundImage,
            "url('project://database/Assets/Textures/image.png')",
        );
        assert_eq!(
            style.background_image,
            Some(StyleValue::Value(ResourceHandle::new("tex-1")))
        );

        let (style, _) = fixture.apply(StyleProperty::UnityFont, "resource('Fonts/Main')");
        assert_eq!(style.unity_font, Some(StyleValue::Value(ResourceHandle::new("font-1"))));
        assert!(fixture.log.is_empty());

        let (style, applied) =
            fixture.apply(StyleProperty::BackgroundImage, "resource('Fonts/Main')");
        assert!(!applied);
        assert!(style.background_image.is_none());
        assert!(matches!(
            fixture.log.take().as_slice(),
            [Warning::ResourceNotFound {
                kind: ResourceKind::Texture,
                path,
                ..
            }] if path == "Fonts/Main"
        ));

        let (_, applied) = fixture.apply(StyleProperty::UnityFont, "Fonts/Main");
        assert!(!applied);
        assert!(matches!(
            fixture.log.take().as_slice(),
            [Warning::InvalidStyleValue { grammar: Grammar::Font, .. }]
        ));
    }

    #[test]
    fn cursor_values() {
        let fixture = Fixture::new();
        let (style, _) = fixture.apply(StyleProperty::Cursor, "link");
        assert_eq!(
            style.cursor,
            Some(StyleValue::Value(CursorStyle::Builtin(crate::tables::MouseCursor::Link)))
        );

        let (style, _) =
            fixture.apply(StyleProperty::Cursor, "url('Assets/Textures/image.png') 2 3");
        assert_eq!(
            style.cursor,
            Some(StyleValue::Value(CursorStyle::Texture {
                texture: ResourceHandle::new("tex-1"),
                hotspot: (2.0, 3.0),
            }))
        );

        let resources = ResourceConfig::default();
        let log = WarningLog::new();
        let diagnostics = Diagnostics::from_config(Some(""));
        let applier = StyleApplier {
            resolver: &NullResolver,
            resources: &resources,
            sink: &log,
            diagnostics: &diagnostics,
            element: "box",
        };
        let mut style = StyleState::new();
        assert!(!applier.apply(&mut style, StyleProperty::Cursor, "url('missing.png')"));
        assert!(matches!(
            log.take().as_slice(),
            [Warning::ResourceNotFound { kind: ResourceKind::Cursor, .. }]
        ));
    }

    #[test]
    fn invalid_values_name_their_grammar() {
        let fixture = Fixture::new();
        fixture.apply(StyleProperty::Color, "blurple");
        fixture.apply(StyleProperty::Rotate, "45");
        fixture.apply(StyleProperty::UnitySliceTop, "1.5");
        let grammars: Vec<Grammar> = fixture
            .log
            .take()
            .into_iter()
            .filter_map(|warning| match warning {
                Warning::InvalidStyleValue { grammar, element, .. } => {
                    assert_eq!(element, "box");
                    Some(grammar)
                }
                _ => None,
            })
            .collect();
        assert_eq!(grammars, vec![Grammar::Color, Grammar::Rotation, Grammar::Integer]);
    }
}
