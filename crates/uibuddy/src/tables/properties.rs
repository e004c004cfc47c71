keyword_table! {
    /// Canonical style property identifiers.
    pub enum StyleProperty {
        AlignContent => "align-content",
        AlignItems => "align-items",
        AlignSelf => "align-self",
        BackgroundColor => "background-color",
        BackgroundImage => "background-image",
        BackgroundPosition => "background-position",
        BackgroundPositionX => "background-position-x",
        BackgroundPositionY => "background-position-y",
        BackgroundRepeat => "background-repeat",
        BackgroundSize => "background-size",
        BorderBottomColor => "border-bottom-color",
        BorderBottomLeftRadius => "border-bottom-left-radius",
        BorderBottomRightRadius => "border-bottom-right-radius",
        BorderBottomWidth => "border-bottom-width",
        BorderColor => "border-color",
        BorderLeftColor => "border-left-color",
        BorderLeftWidth => "border-left-width",
        BorderRadius => "border-radius",
        BorderRightColor => "border-right-color",
        BorderRightWidth => "border-right-width",
        BorderTopColor => "border-top-color",
        BorderTopLeftRadius => "border-top-left-radius",
        BorderTopRightRadius => "border-top-right-radius",
        BorderTopWidth => "border-top-width",
        BorderWidth => "border-width",
        Bottom => "bottom",
        Color => "color",
        Cursor => "cursor",
        Display => "display",
        Flex => "flex",
        FlexBasis => "flex-basis",
        FlexDirection => "flex-direction",
        FlexGrow => "flex-grow",
        FlexShrink => "flex-shrink",
        FlexWrap => "flex-wrap",
        FontSize => "font-size",
        Height => "height",
        JustifyContent => "justify-content",
        Left => "left",
        LetterSpacing => "letter-spacing",
        Margin => "margin",
        MarginBottom => "margin-bottom",
        MarginLeft => "margin-left",
        MarginRight => "margin-right",
        MarginTop => "margin-top",
        MaxHeight => "max-height",
        MaxWidth => "max-width",
        MinHeight => "min-height",
        MinWidth => "min-width",
        Opacity => "opacity",
        Overflow => "overflow",
        Padding => "padding",
        PaddingBottom => "padding-bottom",
        PaddingLeft => "padding-left",
        PaddingRight => "padding-right",
        PaddingTop => "padding-top",
        Position => "position",
        Right => "right",
        Rotate => "rotate",
        Scale => "scale",
        TextOverflow => "text-overflow",
        TextShadow => "text-shadow",
        Top => "top",
        TransformOrigin => "transform-origin",
        Transition => "transition",
        TransitionDelay => "transition-delay",
        TransitionDuration => "transition-duration",
        TransitionProperty => "transition-property",
        TransitionTimingFunction => "transition-timing-function",
        Translate => "translate",
        UnityBackgroundImageTintColor => "-unity-background-image-tint-color",
        UnityBackgroundScaleMode => "-unity-background-scale-mode",
        UnityFont => "-unity-font",
        UnityFontDefinition => "-unity-font-definition",
        UnityFontStyle => "-unity-font-style",
        UnityOverflowClipBox => "-unity-overflow-clip-box",
        UnityParagraphSpacing => "-unity-paragraph-spacing",
        UnitySliceBottom => "-unity-slice-bottom",
        UnitySliceLeft => "-unity-slice-left",
        UnitySliceRight => "-unity-slice-right",
        UnitySliceScale => "-unity-slice-scale",
        UnitySliceTop => "-unity-slice-top",
        UnityTextAlign => "-unity-text-align",
        UnityTextOutline => "-unity-text-outline",
        UnityTextOutlineColor => "-unity-text-outline-color",
        UnityTextOutlineWidth => "-unity-text-outline-width",
        UnityTextOverflowPosition => "-unity-text-overflow-position",
        Visibility => "visibility",
        WhiteSpace => "white-space",
        Width => "width",
        WordSpacing => "word-spacing",
    }
}
