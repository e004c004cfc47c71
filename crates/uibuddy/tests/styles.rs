use std::sync::Arc;

use anyhow::Result;
use uibuddy::style::CursorStyle;
use uibuddy::tables::MouseCursor;
use uibuddy::values::{Axis, BackgroundPositionKeyword, Length, Rgba, StyleKeyword, StyleValue};
use uibuddy::{
    Grammar, MapResolver, ResourceHandle, ResourceKind, StyleProperty, UiBuilder, Warning,
    WarningLog, WidgetNode, WidgetType,
};

fn builder() -> (UiBuilder, Arc<WarningLog>) {
    let log = Arc::new(WarningLog::new());
    let resolver = MapResolver::new()
        .with_texture("Textures/panel", "tex-panel")
        .with_font("Fonts/Inter", "font-inter");
    let builder = UiBuilder::new()
        .with_sink(log.clone())
        .with_resolver(Arc::new(resolver));
    (builder, log)
}

fn node() -> WidgetNode {
    WidgetNode::new(WidgetType::VisualElement)
}

fn px(value: f32) -> Option<StyleValue<Length>> {
    Some(StyleValue::Value(Length::Pixels(value)))
}

#[test]
fn margin_shorthand_expands_every_count() -> Result<()> {
    let (builder, log) = builder();
    let cases = [
        ("4px", [4.0, 4.0, 4.0, 4.0]),
        ("4px 8px", [4.0, 8.0, 4.0, 8.0]),
        ("1px 2px 3px", [1.0, 2.0, 3.0, 2.0]),
        ("1px 2px 3px 4px", [1.0, 2.0, 3.0, 4.0]),
    ];
    for (text, [top, right, bottom, left]) in cases {
        let mut node = node();
        builder.apply_style(&mut node, &format!("margin: {text}"));
        let margin = &node.style.margin;
        assert_eq!(margin.top, px(top), "{text}");
        assert_eq!(margin.right, px(right), "{text}");
        assert_eq!(margin.bottom, px(bottom), "{text}");
        assert_eq!(margin.left, px(left), "{text}");
    }
    assert!(log.is_empty());
    Ok(())
}

#[test]
fn border_radius_uses_corner_order() {
    let (builder, _) = builder();
    let mut node = node();
    builder.apply_style(&mut node, "border-radius: 1px 2px 3px");
    let radius = &node.style.border_radius;
    assert_eq!(radius.top_left, px(1.0));
    assert_eq!(radius.top_right, px(2.0));
    assert_eq!(radius.bottom_right, px(3.0));
    assert_eq!(radius.bottom_left, px(2.0));
}

#[test]
fn equivalent_colors_resolve_identically() {
    let (builder, log) = builder();
    let red = Rgba::new(1.0, 0.0, 0.0, 1.0);
    for text in [
        "red",
        "#ff0000",
        "#f00",
        "rgb(255,0,0)",
        "rgba(255, 0, 0, 1)",
        "hsl(0, 100%, 50%)",
    ] {
        let mut node = node();
        assert!(
            builder.apply_style_property(&mut node, StyleProperty::Color, text),
            "{text}"
        );
        match node.style.color {
            Some(StyleValue::Value(color)) => {
                assert!(color.approx_eq(&red, 1e-3), "{text}: {color:?}")
            }
            other => panic!("unexpected color for {text}: {:?}", other),
        }
    }
    assert!(log.is_empty());
}

#[test]
fn flex_shorthand() {
    let (builder, _) = builder();
    let mut node = node();
    builder.apply_style(&mut node, "flex: auto");
    let auto = Some(StyleValue::Keyword(StyleKeyword::Auto));
    assert_eq!(node.style.flex_grow, auto);
    assert_eq!(node.style.flex_shrink, auto);
    assert_eq!(
        node.style.flex_basis,
        Some(StyleValue::Keyword(StyleKeyword::Auto))
    );

    let mut node = self::node();
    builder.apply_style(&mut node, "flex: 2");
    assert_eq!(node.style.flex_grow, Some(StyleValue::Value(2.0)));
    assert_eq!(node.style.flex_shrink, Some(StyleValue::Value(1.0)));
    assert_eq!(node.style.flex_basis, px(0.0));
}

#[test]
fn background_position_axes() {
    let (builder, _) = builder();
    let mut node = node();
    builder.apply_style(&mut node, "background-position: left 50%");
    let x = node.style.background_position_x.clone().and_then(|v| v.value().cloned());
    let x = x.expect("x position");
    assert_eq!(x.keyword, BackgroundPositionKeyword::Left);
    assert_eq!(x.offset, Length::Percent(50.0));
    assert!(node.style.background_position_y.is_none());

    let mut node = self::node();
    builder.apply_style(&mut node, "background-position: center");
    assert!(node.style.background_position_x.is_some());
    assert_eq!(node.style.background_position_x, node.style.background_position_y);

    let components = uibuddy::values::parse_background_position("center").expect("parse");
    assert_eq!(components[0].axis, Axis::All);
}

#[test]
fn malformed_declaration_does_not_block_valid_one() {
    let (builder, log) = builder();
    let mut node = node();
    builder.apply_style(&mut node, "bogus; color: red;");
    assert!(node.style.color.is_some());
    assert_eq!(
        log.take(),
        vec![Warning::MalformedDeclaration {
            text: "bogus".into()
        }]
    );
}

#[test]
fn reapplying_style_is_idempotent() {
    let (builder, _) = builder();
    let text = "margin: 1px 2px; color: #123456; flex: 1 0 10%; \
                transition: opacity 0.2s ease-in 100ms; \
                background-image: url('Assets/Textures/panel.png')";
    let mut once = node();
    builder.apply_style(&mut once, text);
    let mut twice = node();
    builder.apply_style(&mut twice, text);
    builder.apply_style(&mut twice, text);
    assert!(!once.style.is_empty());
    assert_eq!(once.style, twice.style);
}

#[test]
fn failed_value_leaves_previous_state() {
    let (builder, log) = builder();
    let mut node = WidgetNode::new(WidgetType::Label);
    node.common.name = Some("caption".into());
    builder.apply_style(&mut node, "width: 20px; margin: 1px");
    builder.apply_style(&mut node, "width: wide; margin: 1px 2px 3px 4px 5px");
    assert_eq!(node.style.width, px(20.0));
    assert_eq!(node.style.margin.left, px(1.0));

    let warnings = log.take();
    assert_eq!(warnings.len(), 2);
    assert!(matches!(
        &warnings[0],
        Warning::InvalidStyleValue {
            element,
            property: StyleProperty::Width,
            grammar: Grammar::Length,
            ..
        } if element == "caption"
    ));
}

#[test]
fn enumerated_value_outside_table_is_unsupported() {
    let (builder, log) = builder();
    let mut node = node();
    assert!(!builder.apply_style_property(&mut node, StyleProperty::Display, "grid"));
    assert!(builder.apply_style_property(&mut node, StyleProperty::Display, "none"));
    assert!(matches!(
        log.take().as_slice(),
        [Warning::UnsupportedStyleValue { value, .. }] if value == "grid"
    ));
}

#[test]
fn resources_resolve_through_the_host() {
    let (builder, log) = builder();
    let mut node = node();
    builder.apply_style(
        &mut node,
        "background-image: url(\"project://database/Assets/Textures/panel.png?guid=1\"); \
         -unity-font: resource('Fonts/Inter'); cursor: url('Textures/panel') 4 8",
    );
    assert_eq!(
        node.style.background_image,
        Some(StyleValue::Value(ResourceHandle::new("tex-panel")))
    );
    assert_eq!(
        node.style.unity_font,
        Some(StyleValue::Value(ResourceHandle::new("font-inter")))
    );
    assert!(matches!(
        &node.style.cursor,
        Some(StyleValue::Value(CursorStyle::Texture { hotspot, .. })) if *hotspot == (4.0, 8.0)
    ));
    assert!(log.is_empty(), "unexpected warnings: {:?}", log.warnings());

    builder.apply_style(&mut node, "-unity-font: url('Textures/panel'); cursor: link");
    assert_eq!(
        node.style.cursor,
        Some(StyleValue::Value(CursorStyle::Builtin(MouseCursor::Link)))
    );
    assert!(matches!(
        log.take().as_slice(),
        [Warning::ResourceNotFound { kind: ResourceKind::Font, .. }]
    ));
}

#[test]
fn compile_style_without_a_tree() {
    let (builder, _) = builder();
    let style = builder.compile_style("opacity: 0.25; rotate: 90deg");
    assert_eq!(style.opacity, Some(StyleValue::Value(0.25)));
    assert!(style.rotate.is_some());
}
