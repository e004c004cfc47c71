//! Widget tree: the closed variant set and the node that owns style and children.

mod props;

use serde::Serialize;

use crate::style::StyleState;
use crate::tables::{PickingMode, UsageHints, keyword_table};

pub use props::{
    Bounds, BoundsInt, ChoiceProps, CollectionProps, CompositeProps, EnumFieldProps, FieldProps,
    FoldoutProps, GroupBoxProps, Hash128, InputProps, ListViewProps, MinMaxSliderProps,
    ProgressBarProps, RadioButtonProps, Rect, RectInt, ScrollViewProps, ScrollerProps,
    SliderProps, TextElementProps, TextFieldProps, ToggleProps, TreeViewProps, Vector2,
    Vector2Int, Vector3, Vector3Int, Vector4,
};

keyword_table! {
    /// Element local names.
    pub enum WidgetType {
        VisualElement => "VisualElement",
        ScrollView => "ScrollView",
        ListView => "ListView",
        TreeView => "TreeView",
        GroupBox => "GroupBox",
        Label => "Label",
        Button => "Button",
        Toggle => "Toggle",
        Scroller => "Scroller",
        TextField => "TextField",
        Foldout => "Foldout",
        Slider => "Slider",
        SliderInt => "SliderInt",
        MinMaxSlider => "MinMaxSlider",
        ProgressBar => "ProgressBar",
        DropdownField => "DropdownField",
        EnumField => "EnumField",
        RadioButton => "RadioButton",
        RadioButtonGroup => "RadioButtonGroup",
        IntegerField => "IntegerField",
        FloatField => "FloatField",
        LongField => "LongField",
        DoubleField => "DoubleField",
        Hash128Field => "Hash128Field",
        Vector2Field => "Vector2Field",
        Vector3Field => "Vector3Field",
        Vector4Field => "Vector4Field",
        RectField => "RectField",
        BoundsField => "BoundsField",
        UnsignedIntegerField => "UnsignedIntegerField",
        UnsignedLongField => "UnsignedLongField",
        Vector2IntField => "Vector2IntField",
        Vector3IntField => "Vector3IntField",
        RectIntField => "RectIntField",
        BoundsIntField => "BoundsIntField",
    }
}

/// Variant-specific state. The variant is chosen at creation and never changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "props")]
pub enum WidgetKind {
    VisualElement,
    ScrollView(ScrollViewProps),
    ListView(ListViewProps),
    TreeView(TreeViewProps),
    GroupBox(GroupBoxProps),
    Label(TextElementProps),
    Button(TextElementProps),
    Toggle(ToggleProps),
    Scroller(ScrollerProps),
    TextField(TextFieldProps),
    Foldout(FoldoutProps),
    Slider(SliderProps<f32>),
    SliderInt(SliderProps<i32>),
    MinMaxSlider(MinMaxSliderProps),
    ProgressBar(ProgressBarProps),
    DropdownField(ChoiceProps),
    EnumField(EnumFieldProps),
    RadioButton(RadioButtonProps),
    RadioButtonGroup(ChoiceProps),
    IntegerField(FieldProps<i32>),
    FloatField(FieldProps<f32>),
    LongField(FieldProps<i64>),
    DoubleField(FieldProps<f64>),
    Hash128Field(FieldProps<Hash128>),
    Vector2Field(CompositeProps<Vector2>),
    Vector3Field(CompositeProps<Vector3>),
    Vector4Field(CompositeProps<Vector4>),
    RectField(CompositeProps<Rect>),
    BoundsField(CompositeProps<Bounds>),
    UnsignedIntegerField(FieldProps<u32>),
    UnsignedLongField(FieldProps<u64>),
    Vector2IntField(CompositeProps<Vector2Int>),
    Vector3IntField(CompositeProps<Vector3Int>),
    RectIntField(CompositeProps<RectInt>),
    BoundsIntField(CompositeProps<BoundsInt>),
}

impl WidgetKind {
    /// Default state for a variant.
    pub fn new(widget_type: WidgetType) -> Self {
        use WidgetType as T;
        match widget_type {
            T::VisualElement => WidgetKind::VisualElement,
            T::ScrollView => WidgetKind::ScrollView(Default::default()),
            T::ListView => WidgetKind::ListView(Default::default()),
            T::TreeView => WidgetKind::TreeView(Default::default()),
            T::GroupBox => WidgetKind::GroupBox(Default::default()),
            T::Label => WidgetKind::Label(Default::default()),
            T::Button => WidgetKind::Button(Default::default()),
            T::Toggle => WidgetKind::Toggle(Default::default()),
            T::Scroller => WidgetKind::Scroller(Default::default()),
            T::TextField => WidgetKind::TextField(Default::default()),
            T::Foldout => WidgetKind::Foldout(Default::default()),
            T::Slider => WidgetKind::Slider(Default::default()),
            T::SliderInt => WidgetKind::SliderInt(Default::default()),
            T::MinMaxSlider => WidgetKind::MinMaxSlider(Default::default()),
            T::ProgressBar => WidgetKind::ProgressBar(Default::default()),
            T::DropdownField => WidgetKind::DropdownField(Default::default()),
            T::EnumField => WidgetKind::EnumField(Default::default()),
            T::RadioButton => WidgetKind::RadioButton(Default::default()),
            T::RadioButtonGroup => WidgetKind::RadioButtonGroup(Default::default()),
            T::IntegerField => WidgetKind::IntegerField(Default::default()),
            T::FloatField => WidgetKind::FloatField(Default::default()),
            T::LongField => WidgetKind::LongField(Default::default()),
            T::DoubleField => WidgetKind::DoubleField(Default::default()),
            T::Hash128Field => WidgetKind::Hash128Field(Default::default()),
            T::Vector2Field => WidgetKind::Vector2Field(Default::default()),
            T::Vector3Field => WidgetKind::Vector3Field(Default::default()),
            T::Vector4Field => WidgetKind::Vector4Field(Default::default()),
            T::RectField => WidgetKind::RectField(Default::default()),
            T::BoundsField => WidgetKind::BoundsField(Default::default()),
            T::UnsignedIntegerField => WidgetKind::UnsignedIntegerField(Default::default()),
            T::UnsignedLongField => WidgetKind::UnsignedLongField(Default::default()),
            T::Vector2IntField => WidgetKind::Vector2IntField(Default::default()),
            T::Vector3IntField => WidgetKind::Vector3IntField(Default::default()),
            T::RectIntField => WidgetKind::RectIntField(Default::default()),
            T::BoundsIntField => WidgetKind::BoundsIntField(Default::default()),
        }
    }

    pub fn widget_type(&self) -> WidgetType {
        use WidgetKind as K;
        match self {
            K::VisualElement => WidgetType::VisualElement,
            K::ScrollView(_) => WidgetType::ScrollView,
            K::ListView(_) => WidgetType::ListView,
            K::TreeView(_) => WidgetType::TreeView,
            K::GroupBox(_) => WidgetType::GroupBox,
            K::Label(_) => WidgetType::Label,
            K::Button(_) => WidgetType::Button,
            K::Toggle(_) => WidgetType::Toggle,
            K::Scroller(_) => WidgetType::Scroller,
            K::TextField(_) => WidgetType::TextField,
            K::Foldout(_) => WidgetType::Foldout,
            K::Slider(_) => WidgetType::Slider,
            K::SliderInt(_) => WidgetType::SliderInt,
            K::MinMaxSlider(_) => WidgetType::MinMaxSlider,
            K::ProgressBar(_) => WidgetType::ProgressBar,
            K::DropdownField(_) => WidgetType::DropdownField,
            K::EnumField(_) => WidgetType::EnumField,
            K::RadioButton(_) => WidgetType::RadioButton,
            K::RadioButtonGroup(_) => WidgetType::RadioButtonGroup,
            K::IntegerField(_) => WidgetType::IntegerField,
            K::FloatField(_) => WidgetType::FloatField,
            K::LongField(_) => WidgetType::LongField,
            K::DoubleField(_) => WidgetType::DoubleField,
            K::Hash128Field(_) => WidgetType::Hash128Field,
            K::Vector2Field(_) => WidgetType::Vector2Field,
            K::Vector3Field(_) => WidgetType::Vector3Field,
            K::Vector4Field(_) => WidgetType::Vector4Field,
            K::RectField(_) => WidgetType::RectField,
            K::BoundsField(_) => WidgetType::BoundsField,
            K::UnsignedIntegerField(_) => WidgetType::UnsignedIntegerField,
            K::UnsignedLongField(_) => WidgetType::UnsignedLongField,
            K::Vector2IntField(_) => WidgetType::Vector2IntField,
            K::Vector3IntField(_) => WidgetType::Vector3IntField,
            K::RectIntField(_) => WidgetType::RectIntField,
            K::BoundsIntField(_) => WidgetType::BoundsIntField,
        }
    }

    /// `binding-path`; absent on VisualElement, ScrollView and Scroller.
    pub(crate) fn binding_path_mut(&mut self) -> Option<&mut Option<String>> {
        use WidgetKind as K;
        match self {
            K::VisualElement | K::ScrollView(_) | K::Scroller(_) => None,
            K::ListView(p) => Some(&mut p.collection.binding_path),
            K::TreeView(p) => Some(&mut p.collection.binding_path),
            K::GroupBox(p) => Some(&mut p.binding_path),
            K::Label(p) | K::Button(p) => Some(&mut p.binding_path),
            K::Toggle(p) => Some(&mut p.binding_path),
            K::TextField(p) => Some(&mut p.input.binding_path),
            K::Foldout(p) => Some(&mut p.binding_path),
            K::Slider(p) => Some(&mut p.binding_path),
            K::SliderInt(p) => Some(&mut p.binding_path),
            K::MinMaxSlider(p) => Some(&mut p.binding_path),
            K::ProgressBar(p) => Some(&mut p.binding_path),
            K::DropdownField(p) | K::RadioButtonGroup(p) => Some(&mut p.binding_path),
            K::EnumField(p) => Some(&mut p.binding_path),
            K::RadioButton(p) => Some(&mut p.binding_path),
            K::IntegerField(p) => Some(&mut p.input.binding_path),
            K::FloatField(p) => Some(&mut p.input.binding_path),
            K::LongField(p) => Some(&mut p.input.binding_path),
            K::DoubleField(p) => Some(&mut p.input.binding_path),
            K::Hash128Field(p) => Some(&mut p.input.binding_path),
            K::UnsignedIntegerField(p) => Some(&mut p.input.binding_path),
            K::UnsignedLongField(p) => Some(&mut p.input.binding_path),
            K::Vector2Field(p) => Some(&mut p.binding_path),
            K::Vector3Field(p) => Some(&mut p.binding_path),
            K::Vector4Field(p) => Some(&mut p.binding_path),
            K::RectField(p) => Some(&mut p.binding_path),
            K::BoundsField(p) => Some(&mut p.binding_path),
            K::Vector2IntField(p) => Some(&mut p.binding_path),
            K::Vector3IntField(p) => Some(&mut p.binding_path),
            K::RectIntField(p) => Some(&mut p.binding_path),
            K::BoundsIntField(p) => Some(&mut p.binding_path),
        }
    }

    pub(crate) fn label_mut(&mut self) -> Option<&mut Option<String>> {
        use WidgetKind as K;
        match self {
            K::VisualElement
            | K::ScrollView(_)
            | K::ListView(_)
            | K::TreeView(_)
            | K::GroupBox(_)
            | K::Label(_)
            | K::Button(_)
            | K::Scroller(_)
            | K::Foldout(_)
            | K::ProgressBar(_) => None,
            K::Toggle(p) => Some(&mut p.label),
            K::TextField(p) => Some(&mut p.input.label),
            K::Slider(p) => Some(&mut p.label),
            K::SliderInt(p) => Some(&mut p.label),
            K::MinMaxSlider(p) => Some(&mut p.label),
            K::DropdownField(p) | K::RadioButtonGroup(p) => Some(&mut p.label),
            K::EnumField(p) => Some(&mut p.label),
            K::RadioButton(p) => Some(&mut p.label),
            K::IntegerField(p) => Some(&mut p.input.label),
            K::FloatField(p) => Some(&mut p.input.label),
            K::LongField(p) => Some(&mut p.input.label),
            K::DoubleField(p) => Some(&mut p.input.label),
            K::Hash128Field(p) => Some(&mut p.input.label),
            K::UnsignedIntegerField(p) => Some(&mut p.input.label),
            K::UnsignedLongField(p) => Some(&mut p.input.label),
            K::Vector2Field(p) => Some(&mut p.label),
            K::Vector3Field(p) => Some(&mut p.label),
            K::Vector4Field(p) => Some(&mut p.label),
            K::RectField(p) => Some(&mut p.label),
            K::BoundsField(p) => Some(&mut p.label),
            K::Vector2IntField(p) => Some(&mut p.label),
            K::Vector3IntField(p) => Some(&mut p.label),
            K::RectIntField(p) => Some(&mut p.label),
            K::BoundsIntField(p) => Some(&mut p.label),
        }
    }

    pub(crate) fn text_mut(&mut self) -> Option<&mut Option<String>> {
        match self {
            WidgetKind::Label(p) | WidgetKind::Button(p) => Some(&mut p.text),
            WidgetKind::GroupBox(p) => Some(&mut p.text),
            WidgetKind::Foldout(p) => Some(&mut p.text),
            WidgetKind::RadioButton(p) => Some(&mut p.text),
            _ => None,
        }
    }

    /// `readonly` and `is-delayed` carriers.
    pub(crate) fn input_mut(&mut self) -> Option<&mut InputProps> {
        use WidgetKind as K;
        match self {
            K::TextField(p) => Some(&mut p.input),
            K::IntegerField(p) => Some(&mut p.input),
            K::FloatField(p) => Some(&mut p.input),
            K::LongField(p) => Some(&mut p.input),
            K::DoubleField(p) => Some(&mut p.input),
            K::Hash128Field(p) => Some(&mut p.input),
            K::UnsignedIntegerField(p) => Some(&mut p.input),
            K::UnsignedLongField(p) => Some(&mut p.input),
            _ => None,
        }
    }

    pub(crate) fn collection_mut(&mut self) -> Option<&mut CollectionProps> {
        match self {
            WidgetKind::ListView(p) => Some(&mut p.collection),
            WidgetKind::TreeView(p) => Some(&mut p.collection),
            _ => None,
        }
    }
}

/// Attributes every variant accepts.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CommonAttributes {
    pub name: Option<String>,
    pub classes: Vec<String>,
    pub tooltip: Option<String>,
    pub view_data_key: Option<String>,
    pub focusable: Option<bool>,
    pub visible: Option<bool>,
    pub delegates_focus: Option<bool>,
    pub picking_mode: Option<PickingMode>,
    pub usage_hints: Option<UsageHints>,
    pub tab_index: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidgetNode {
    #[serde(flatten)]
    kind: WidgetKind,
    pub common: CommonAttributes,
    pub style: StyleState,
    children: Vec<WidgetNode>,
}

impl WidgetNode {
    pub fn new(widget_type: WidgetType) -> Self {
        Self {
            kind: WidgetKind::new(widget_type),
            common: CommonAttributes::default(),
            style: StyleState::default(),
            children: Vec::new(),
        }
    }

    pub fn widget_type(&self) -> WidgetType {
        self.kind.widget_type()
    }

    pub fn kind(&self) -> &WidgetKind {
        &self.kind
    }

    pub(crate) fn kind_mut(&mut self) -> &mut WidgetKind {
        &mut self.kind
    }

    pub fn name(&self) -> Option<&str> {
        self.common.name.as_deref()
    }

    pub fn children(&self) -> &[WidgetNode] {
        &self.children
    }

    pub fn add_child(&mut self, child: WidgetNode) {
        self.children.push(child);
    }

    /// Depth-first search by `name`, starting with this node.
    pub fn find(&self, name: &str) -> Option<&WidgetNode> {
        if self.name() == Some(name) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_type_round_trips_through_its_kind() {
        assert_eq!(WidgetType::ALL.len(), 35);
        for widget_type in WidgetType::ALL {
            assert_eq!(WidgetKind::new(*widget_type).widget_type(), *widget_type);
            assert_eq!(WidgetType::lookup(widget_type.as_str()), Some(*widget_type));
        }
    }

    #[test]
    fn binding_path_support() {
        assert!(WidgetKind::new(WidgetType::VisualElement).binding_path_mut().is_none());
        assert!(WidgetKind::new(WidgetType::Scroller).binding_path_mut().is_none());
        assert!(WidgetKind::new(WidgetType::Label).binding_path_mut().is_some());
        assert!(WidgetKind::new(WidgetType::BoundsIntField).binding_path_mut().is_some());
    }

    #[test]
    fn find_searches_depth_first() {
        let mut root = WidgetNode::new(WidgetType::VisualElement);
        let mut row = WidgetNode::new(WidgetType::GroupBox);
        let mut button = WidgetNode::new(WidgetType::Button);
        button.common.name = Some("ok".to_string());
        row.add_child(button);
        root.add_child(row);

        assert_eq!(root.find("ok").map(WidgetNode::widget_type), Some(WidgetType::Button));
        assert!(root.find("cancel").is_none());
        assert_eq!(root.children().len(), 1);
    }

    #[test]
    fn serializes_variant_tag() {
        let node = WidgetNode::new(WidgetType::Toggle);
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["type"], "Toggle");
        assert_eq!(json["props"]["value"], false);
        assert!(json["children"].as_array().is_some_and(Vec::is_empty));
    }
}
