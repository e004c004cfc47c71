//! Attribute dispatcher: routes one markup attribute to the typed setter of the
//! node's variant.

use std::str::FromStr;

use crate::builder::Session;
use crate::tables::{
    AlternatingRowBackground, AttributeName, CollectionVirtualizationMethod, ListViewReorderMode,
    NestedInteractionKind, PickingMode, ScrollViewMode, ScrollerVisibility, SelectionType,
    SliderDirection, TouchScreenKeyboardType, TouchScrollBehavior, UsageHints,
};
use crate::values::parse_number;
use crate::warnings::Warning;
use crate::widget::{
    Bounds, BoundsInt, CollectionProps, EnumFieldProps, Hash128, Rect, RectInt, Vector2,
    Vector2Int, Vector3, Vector3Int, Vector4, WidgetKind, WidgetNode,
};

/// Every attribute of one element, in document order.
pub(crate) type Siblings = [(String, String)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Applied,
    Unsupported,
    Invalid,
}

fn set<T>(slot: &mut T, value: Option<T>) -> Outcome {
    match value {
        Some(value) => {
            *slot = value;
            Outcome::Applied
        }
        None => Outcome::Invalid,
    }
}

fn set_text(slot: Option<&mut Option<String>>, value: &str) -> Outcome {
    match slot {
        Some(slot) => {
            *slot = Some(value.to_string());
            Outcome::Applied
        }
        None => Outcome::Unsupported,
    }
}

fn parse_bool(text: &str) -> Option<bool> {
    let text = text.trim();
    if text.eq_ignore_ascii_case("true") {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn parse_int<T: FromStr>(text: &str) -> Option<T> {
    text.trim().parse().ok()
}

fn parse_double(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

fn parse_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

fn parse_choices(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|choice| !choice.is_empty())
        .map(str::to_string)
        .collect()
}

fn sibling<'s>(siblings: &'s Siblings, name: &str) -> Option<&'s str> {
    siblings
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

/// Missing or unparseable components read as zero.
fn float_component(siblings: &Siblings, name: &str) -> f32 {
    sibling(siblings, name).and_then(parse_number).unwrap_or(0.0)
}

fn int_component(siblings: &Siblings, name: &str) -> i32 {
    sibling(siblings, name).and_then(parse_int).unwrap_or(0)
}

fn vector3(siblings: &Siblings, x: &str, y: &str, z: &str) -> Vector3 {
    Vector3 {
        x: float_component(siblings, x),
        y: float_component(siblings, y),
        z: float_component(siblings, z),
    }
}

fn vector3_int(siblings: &Siblings, x: &str, y: &str, z: &str) -> Vector3Int {
    Vector3Int {
        x: int_component(siblings, x),
        y: int_component(siblings, y),
        z: int_component(siblings, z),
    }
}

impl Session<'_> {
    /// Applies one attribute; failures become warnings and never stop the build.
    pub(crate) fn apply_attribute(
        &self,
        node: &mut WidgetNode,
        name: &str,
        value: &str,
        siblings: &Siblings,
    ) {
        let Some(attribute) = AttributeName::lookup(name) else {
            self.sink.warning(&Warning::UnknownAttribute {
                element: self.element_label(node),
                name: name.to_string(),
                value: value.to_string(),
            });
            return;
        };

        let outcome = self.dispatch(node, attribute, value, siblings);
        let element = self.element_label(node);
        match outcome {
            Outcome::Applied => {
                if self.diagnostics.enabled("attributes") {
                    tracing::info!(
                        element = %element,
                        attribute = attribute.as_str(),
                        value,
                        "applied attribute"
                    );
                }
            }
            Outcome::Unsupported => self.sink.warning(&Warning::UnsupportedAttribute {
                element,
                name: name.to_string(),
                value: value.to_string(),
            }),
            Outcome::Invalid => self.sink.warning(&Warning::InvalidAttributeValue {
                element,
                name: name.to_string(),
                value: value.to_string(),
            }),
        }
    }

    fn dispatch(
        &self,
        node: &mut WidgetNode,
        attribute: AttributeName,
        value: &str,
        siblings: &Siblings,
    ) -> Outcome {
        use AttributeName as A;
        let common = &mut node.common;
        match attribute {
            A::Class => {
                common
                    .classes
                    .extend(value.split_whitespace().map(str::to_string));
                Outcome::Applied
            }
            A::Name => {
                common.name = Some(value.to_string());
                Outcome::Applied
            }
            A::Tooltip => {
                common.tooltip = Some(value.to_string());
                Outcome::Applied
            }
            A::ViewDataKey => {
                common.view_data_key = Some(value.to_string());
                Outcome::Applied
            }
            A::Focusable => set(&mut common.focusable, parse_bool(value).map(Some)),
            A::Visible => set(&mut common.visible, parse_bool(value).map(Some)),
            A::DelegatesFocus => set(&mut common.delegates_focus, parse_bool(value).map(Some)),
            A::PickingMode => set(
                &mut common.picking_mode,
                PickingMode::lookup(value.trim()).map(Some),
            ),
            A::UsageHints => set(
                &mut common.usage_hints,
                UsageHints::lookup(value.trim()).map(Some),
            ),
            A::TabIndex => set(&mut common.tab_index, parse_int(value).map(Some)),
            A::Style => {
                self.apply_style_text(node, value);
                Outcome::Applied
            }
            _ => self.dispatch_variant(node.kind_mut(), attribute, value, siblings),
        }
    }

    fn dispatch_variant(
        &self,
        kind: &mut WidgetKind,
        attribute: AttributeName,
        value: &str,
        siblings: &Siblings,
    ) -> Outcome {
        use AttributeName as A;
        use WidgetKind as K;

        match (attribute, kind) {
            (A::Type, K::EnumField(p)) => {
                p.type_name = Some(value.trim().to_string());
                Outcome::Applied
            }
            (A::IncludeObsoleteValues, K::EnumField(p)) => {
                set(&mut p.include_obsolete_values, parse_bool(value))
            }
            (A::Type | A::IncludeObsoleteValues, _) => Outcome::Applied,

            (A::BindingPath, kind) => set_text(kind.binding_path_mut(), value),
            (A::Label, kind) => set_text(kind.label_mut(), value),
            (A::Text, kind) => set_text(kind.text_mut(), value),

            (A::ParseEscapeSequences, K::Label(p) | K::Button(p)) => {
                set(&mut p.parse_escape_sequences, parse_bool(value))
            }
            (A::DisplayTooltipWhenElided, K::Label(p) | K::Button(p)) => {
                set(&mut p.display_tooltip_when_elided, parse_bool(value))
            }
            (A::EnableRichText, K::Label(p) | K::Button(p)) => {
                set(&mut p.enable_rich_text, parse_bool(value))
            }

            (A::Mode, K::ScrollView(p)) => set(&mut p.mode, ScrollViewMode::lookup(value.trim())),
            (A::HorizontalScrollerVisibility, K::ScrollView(p)) => set(
                &mut p.horizontal_scroller_visibility,
                ScrollerVisibility::lookup(value.trim()),
            ),
            (A::VerticalScrollerVisibility, K::ScrollView(p)) => set(
                &mut p.vertical_scroller_visibility,
                ScrollerVisibility::lookup(value.trim()),
            ),
            (A::NestedInteractionKind, K::ScrollView(p)) => set(
                &mut p.nested_interaction_kind,
                NestedInteractionKind::lookup(value.trim()),
            ),
            (A::HorizontalPageSize, K::ScrollView(p)) => {
                set(&mut p.horizontal_page_size, parse_number(value))
            }
            (A::VerticalPageSize, K::ScrollView(p)) => {
                set(&mut p.vertical_page_size, parse_number(value))
            }
            (A::MouseWheelScrollSize, K::ScrollView(p)) => {
                set(&mut p.mouse_wheel_scroll_size, parse_number(value))
            }
            (A::ScrollDecelerationRate, K::ScrollView(p)) => {
                set(&mut p.scroll_deceleration_rate, parse_number(value))
            }
            (A::Elasticity, K::ScrollView(p)) => set(&mut p.elasticity, parse_number(value)),
            (A::TouchScrollType, K::ScrollView(p)) => set(
                &mut p.touch_scroll_behavior,
                TouchScrollBehavior::lookup(value.trim()),
            ),
            (A::ElasticAnimationIntervalMs, K::ScrollView(p)) => {
                set(&mut p.elastic_animation_interval_ms, parse_int(value))
            }

            (A::ShowBorder, kind) => {
                collection(kind, |c| set(&mut c.show_border, parse_bool(value)))
            }
            (A::Reorderable, kind) => {
                collection(kind, |c| set(&mut c.reorderable, parse_bool(value)))
            }
            (A::HorizontalScrolling, kind) => collection(kind, |c| {
                set(&mut c.horizontal_scrolling, parse_bool(value))
            }),
            (A::SelectionType, kind) => collection(kind, |c| {
                set(&mut c.selection_type, SelectionType::lookup(value.trim()))
            }),
            (A::ShowAlternatingRowBackgrounds, kind) => collection(kind, |c| {
                set(
                    &mut c.show_alternating_row_backgrounds,
                    AlternatingRowBackground::lookup(value.trim()),
                )
            }),
            (A::FixedItemHeight, kind) => collection(kind, |c| {
                set(&mut c.fixed_item_height, parse_number(value))
            }),
            (A::VirtualizationMethod, kind) => collection(kind, |c| {
                set(
                    &mut c.virtualization_method,
                    CollectionVirtualizationMethod::lookup(value.trim()),
                )
            }),

            (A::ShowFoldoutHeader, K::ListView(p)) => {
                set(&mut p.show_foldout_header, parse_bool(value))
            }
            (A::ShowAddRemoveFooter, K::ListView(p)) => {
                set(&mut p.show_add_remove_footer, parse_bool(value))
            }
            (A::ShowBoundCollectionSize, K::ListView(p)) => {
                set(&mut p.show_bound_collection_size, parse_bool(value))
            }
            (A::HeaderTitle, K::ListView(p)) => {
                p.header_title = Some(value.to_string());
                Outcome::Applied
            }
            (A::ReorderMode, K::ListView(p)) => {
                set(&mut p.reorder_mode, ListViewReorderMode::lookup(value.trim()))
            }
            (A::AutoExpand, K::TreeView(p)) => set(&mut p.auto_expand, parse_bool(value)),

            (A::LowValue, K::Scroller(p)) => set(&mut p.low_value, parse_number(value)),
            (A::LowValue, K::Slider(p)) => set(&mut p.low_value, parse_number(value)),
            (A::LowValue, K::ProgressBar(p)) => set(&mut p.low_value, parse_number(value)),
            (A::LowValue, K::SliderInt(p)) => set(&mut p.low_value, parse_int(value)),
            (A::HighValue, K::Scroller(p)) => set(&mut p.high_value, parse_number(value)),
            (A::HighValue, K::Slider(p)) => set(&mut p.high_value, parse_number(value)),
            (A::HighValue, K::ProgressBar(p)) => set(&mut p.high_value, parse_number(value)),
            (A::HighValue, K::SliderInt(p)) => set(&mut p.high_value, parse_int(value)),

            (A::Value, K::Toggle(p)) => set(&mut p.value, parse_bool(value)),
            (A::Value, K::Foldout(p)) => set(&mut p.value, parse_bool(value)),
            (A::Value, K::RadioButton(p)) => set(&mut p.value, parse_bool(value)),
            (A::Value, K::Scroller(p)) => set(&mut p.value, parse_number(value)),
            (A::Value, K::Slider(p)) => set(&mut p.value, parse_number(value)),
            (A::Value, K::ProgressBar(p)) => set(&mut p.value, parse_number(value)),
            (A::Value, K::FloatField(p)) => set(&mut p.value, parse_number(value)),
            (A::Value, K::SliderInt(p)) => set(&mut p.value, parse_int(value)),
            (A::Value, K::RadioButtonGroup(p)) => set(&mut p.index, parse_int(value)),
            (A::Value, K::IntegerField(p)) => set(&mut p.value, parse_int(value)),
            (A::Value, K::LongField(p)) => set(&mut p.value, parse_int(value)),
            (A::Value, K::DoubleField(p)) => set(&mut p.value, parse_double(value)),
            (A::Value, K::UnsignedIntegerField(p)) => set(&mut p.value, parse_int(value)),
            (A::Value, K::UnsignedLongField(p)) => set(&mut p.value, parse_int(value)),
            (A::Value, K::Hash128Field(p)) => set(&mut p.value, Hash128::parse(value)),
            (A::Value, K::TextField(p)) => {
                p.value = value.to_string();
                Outcome::Applied
            }
            (A::Value, K::EnumField(p)) => self.enum_value(p, value, siblings),

            (A::Direction, K::Scroller(p)) => {
                set(&mut p.direction, SliderDirection::lookup(value.trim()))
            }
            (A::Direction, K::Slider(p)) => {
                set(&mut p.direction, SliderDirection::lookup(value.trim()))
            }
            (A::Direction, K::SliderInt(p)) => {
                set(&mut p.direction, SliderDirection::lookup(value.trim()))
            }

            (A::MaxLength, K::TextField(p)) => set(&mut p.max_length, parse_int(value)),
            (A::Password, K::TextField(p)) => set(&mut p.password, parse_bool(value)),
            (A::MaskCharacter, K::TextField(p)) => set(&mut p.mask_character, parse_char(value)),
            (A::HideMobileInput, K::TextField(p)) => {
                set(&mut p.hide_mobile_input, parse_bool(value))
            }
            (A::KeyboardType, K::TextField(p)) => set(
                &mut p.keyboard_type,
                TouchScreenKeyboardType::lookup(value.trim()),
            ),
            (A::AutoCorrection, K::TextField(p)) => {
                set(&mut p.auto_correction, parse_bool(value))
            }
            (A::Multiline, K::TextField(p)) => set(&mut p.multiline, parse_bool(value)),
            (A::ReadOnly, kind) => match kind.input_mut() {
                Some(input) => set(&mut input.readonly, parse_bool(value)),
                None => Outcome::Unsupported,
            },
            (A::IsDelayed, kind) => match kind.input_mut() {
                Some(input) => set(&mut input.is_delayed, parse_bool(value)),
                None => Outcome::Unsupported,
            },

            (A::PageSize, K::Slider(p)) => set(&mut p.page_size, parse_number(value)),
            (A::PageSize, K::SliderInt(p)) => set(&mut p.page_size, parse_number(value)),
            (A::ShowInputField, K::Slider(p)) => set(&mut p.show_input_field, parse_bool(value)),
            (A::ShowInputField, K::SliderInt(p)) => {
                set(&mut p.show_input_field, parse_bool(value))
            }
            (A::Inverted, K::Slider(p)) => set(&mut p.inverted, parse_bool(value)),
            (A::Inverted, K::SliderInt(p)) => set(&mut p.inverted, parse_bool(value)),

            (A::MinValue, K::MinMaxSlider(p)) => set(&mut p.min_value, parse_number(value)),
            (A::MaxValue, K::MinMaxSlider(p)) => set(&mut p.max_value, parse_number(value)),
            (A::LowLimit, K::MinMaxSlider(p)) => set(&mut p.low_limit, parse_number(value)),
            (A::HighLimit, K::MinMaxSlider(p)) => set(&mut p.high_limit, parse_number(value)),

            (A::Title, K::ProgressBar(p)) => {
                p.title = Some(value.to_string());
                Outcome::Applied
            }
            (A::Index, K::DropdownField(p)) => set(&mut p.index, parse_int(value)),
            (A::Choices, K::DropdownField(p) | K::RadioButtonGroup(p)) => {
                p.choices = parse_choices(value);
                Outcome::Applied
            }

            (A::X | A::Y, K::Vector2Field(p)) => {
                p.value = Vector2 {
                    x: float_component(siblings, "x"),
                    y: float_component(siblings, "y"),
                };
                component_outcome(parse_number(value).is_some())
            }
            (A::X | A::Y | A::Z, K::Vector3Field(p)) => {
                p.value = vector3(siblings, "x", "y", "z");
                component_outcome(parse_number(value).is_some())
            }
            (A::X | A::Y | A::Z | A::W, K::Vector4Field(p)) => {
                p.value = Vector4 {
                    x: float_component(siblings, "x"),
                    y: float_component(siblings, "y"),
                    z: float_component(siblings, "z"),
                    w: float_component(siblings, "w"),
                };
                component_outcome(parse_number(value).is_some())
            }
            (A::X | A::Y | A::W | A::H, K::RectField(p)) => {
                p.value = Rect {
                    x: float_component(siblings, "x"),
                    y: float_component(siblings, "y"),
                    width: float_component(siblings, "w"),
                    height: float_component(siblings, "h"),
                };
                component_outcome(parse_number(value).is_some())
            }
            (
                A::CenterX | A::CenterY | A::CenterZ | A::ExtentX | A::ExtentY | A::ExtentZ,
                K::BoundsField(p),
            ) => {
                p.value = Bounds {
                    center: vector3(siblings, "cx", "cy", "cz"),
                    extents: vector3(siblings, "ex", "ey", "ez"),
                };
                component_outcome(parse_number(value).is_some())
            }
            (A::X | A::Y, K::Vector2IntField(p)) => {
                p.value = Vector2Int {
                    x: int_component(siblings, "x"),
                    y: int_component(siblings, "y"),
                };
                component_outcome(parse_int::<i32>(value).is_some())
            }
            (A::X | A::Y | A::Z, K::Vector3IntField(p)) => {
                p.value = vector3_int(siblings, "x", "y", "z");
                component_outcome(parse_int::<i32>(value).is_some())
            }
            (A::X | A::Y | A::W | A::H, K::RectIntField(p)) => {
                p.value = RectInt {
                    x: int_component(siblings, "x"),
                    y: int_component(siblings, "y"),
                    width: int_component(siblings, "w"),
                    height: int_component(siblings, "h"),
                };
                component_outcome(parse_int::<i32>(value).is_some())
            }
            (
                A::PositionX | A::PositionY | A::PositionZ | A::SizeX | A::SizeY | A::SizeZ,
                K::BoundsIntField(p),
            ) => {
                p.value = BoundsInt {
                    position: vector3_int(siblings, "px", "py", "pz"),
                    size: vector3_int(siblings, "sx", "sy", "sz"),
                };
                component_outcome(parse_int::<i32>(value).is_some())
            }

            _ => Outcome::Unsupported,
        }
    }

    /// Resolves the member list named by `type`, presets the default member,
    /// then selects the member named by the value (case-insensitive).
    fn enum_value(&self, props: &mut EnumFieldProps, value: &str, siblings: &Siblings) -> Outcome {
        let Some(type_name) = sibling(siblings, "type").map(str::trim) else {
            return Outcome::Invalid;
        };
        let include_obsolete = sibling(siblings, "include-obsolete-values")
            .and_then(parse_bool)
            .unwrap_or(false);
        props.type_name = Some(type_name.to_string());
        props.include_obsolete_values = include_obsolete;

        let Some(members) = self.registry.members(type_name) else {
            return Outcome::Invalid;
        };
        let Some(default) = members
            .iter()
            .find(|member| member.obsolete == include_obsolete)
            .or_else(|| members.first())
        else {
            return Outcome::Invalid;
        };
        props.value = Some(default.name.clone());

        match members
            .iter()
            .find(|member| member.name.eq_ignore_ascii_case(value.trim()))
        {
            Some(member) => {
                props.value = Some(member.name.clone());
                Outcome::Applied
            }
            None => Outcome::Invalid,
        }
    }
}

fn collection(
    kind: &mut WidgetKind,
    apply: impl FnOnce(&mut CollectionProps) -> Outcome,
) -> Outcome {
    match kind.collection_mut() {
        Some(props) => apply(props),
        None => Outcome::Unsupported,
    }
}

/// Joint components are written even when this one is unparseable; the
/// warning still reports it.
fn component_outcome(parsed: bool) -> Outcome {
    if parsed {
        Outcome::Applied
    } else {
        Outcome::Invalid
    }
}
