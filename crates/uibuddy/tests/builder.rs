use std::io::Write;
use std::sync::Arc;

use anyhow::Result;
use uibuddy::widget::TextElementProps;
use uibuddy::{BuildError, UiBuilder, Warning, WarningLog, WidgetKind, WidgetType};

fn builder() -> (UiBuilder, Arc<WarningLog>) {
    let log = Arc::new(WarningLog::new());
    (UiBuilder::new().with_sink(log.clone()), log)
}

const PANEL: &str = r#"
<ui:VisualElement name="panel" class="card  wide">
    <!-- header -->
    <ui:Label name="title" text="Settings" />
    <ui:ScrollView mode="Horizontal">
        <ui:Button name="ok" text="OK" tooltip="Apply" tabindex="2" />
        <ui:Toggle name="mute" label="Mute" value="true" />
    </ui:ScrollView>
</ui:VisualElement>
"#;

#[test]
fn builds_nested_tree_in_document_order() -> Result<()> {
    let (builder, log) = builder();
    let root = builder.build(PANEL)?;

    assert_eq!(root.widget_type(), WidgetType::VisualElement);
    assert_eq!(root.common.classes, vec!["card", "wide"]);
    let types: Vec<_> = root.children().iter().map(|c| c.widget_type()).collect();
    assert_eq!(types, vec![WidgetType::Label, WidgetType::ScrollView]);

    let ok = root.find("ok").expect("button is reachable");
    assert_eq!(ok.common.tooltip.as_deref(), Some("Apply"));
    assert_eq!(ok.common.tab_index, Some(2));
    match ok.kind() {
        WidgetKind::Button(TextElementProps { text, .. }) => {
            assert_eq!(text.as_deref(), Some("OK"))
        }
        other => panic!("unexpected kind: {:?}", other),
    }
    assert!(log.is_empty(), "unexpected warnings: {:?}", log.warnings());
    Ok(())
}

#[test]
fn unknown_tag_is_fatal() {
    let (builder, _) = builder();
    let result = builder.build(r#"<ui:VisualElement><ui:Carousel/></ui:VisualElement>"#);
    assert_eq!(
        result.unwrap_err(),
        BuildError::UnknownElement {
            name: "Carousel".into()
        }
    );
}

#[test]
fn unknown_attribute_only_warns() -> Result<()> {
    let (builder, log) = builder();
    let root = builder.build(r#"<ui:Label name="caption" colour="red" text="x"/>"#)?;
    assert_eq!(root.widget_type(), WidgetType::Label);
    assert_eq!(
        log.take(),
        vec![Warning::UnknownAttribute {
            element: "caption".into(),
            name: "colour".into(),
            value: "red".into(),
        }]
    );
    Ok(())
}

#[test]
fn malformed_markup_is_fatal() {
    let (builder, _) = builder();
    for markup in [
        "<ui:VisualElement>",
        "<ui:VisualElement></ui:Label>",
        r#"<ui:Label text="a" text="b"/>"#,
        "<ui:Label text=unquoted/>",
    ] {
        assert!(
            matches!(builder.build(markup), Err(BuildError::Malformed { .. })),
            "{markup} should be malformed"
        );
    }
}

#[test]
fn requested_root_type_must_match() -> Result<()> {
    let (builder, _) = builder();
    let toggle = builder.build_as(r#"<ui:Toggle value="false"/>"#, WidgetType::Toggle)?;
    assert_eq!(toggle.widget_type(), WidgetType::Toggle);

    let err = builder
        .build_as("<ui:Label/>", WidgetType::Button)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "The created element is not of type Button. Element type is Label."
    );
    Ok(())
}

#[test]
fn build_file_reads_markup() -> Result<()> {
    let (builder, _) = builder();
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(PANEL.as_bytes())?;
    let root = builder.build_file(file.path())?;
    assert_eq!(root.name(), Some("panel"));

    let missing = builder.build_file(file.path().with_extension("missing"));
    assert!(missing.is_err());
    Ok(())
}

#[test]
fn inline_style_is_applied_while_building() -> Result<()> {
    let (builder, log) = builder();
    let root = builder.build(
        r#"<ui:VisualElement name="box" style="width: 10px; bogus; opacity: 0.5"/>"#,
    )?;
    assert!(root.style.width.is_some());
    assert!(root.style.opacity.is_some());
    assert_eq!(
        log.take(),
        vec![Warning::MalformedDeclaration {
            text: "bogus".into()
        }]
    );
    Ok(())
}

#[test]
fn tree_serializes_to_json() -> Result<()> {
    let (builder, _) = builder();
    let root = builder.build(r#"<ui:Button name="b" text="Go"/>"#)?;
    let json = serde_json::to_value(&root)?;
    assert_eq!(json["type"], "Button");
    assert_eq!(json["props"]["text"], "Go");
    assert_eq!(json["common"]["name"], "b");
    Ok(())
}
