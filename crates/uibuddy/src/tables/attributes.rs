keyword_table! {
    /// Every markup attribute the dispatcher recognises.
    pub enum AttributeName {
        Class => "class",
        Name => "name",
        Tooltip => "tooltip",
        ViewDataKey => "view-data-key",
        Focusable => "focusable",
        Visible => "visible",
        DelegatesFocus => "delegates-focus",
        PickingMode => "picking-mode",
        UsageHints => "usage-hints",
        TabIndex => "tabindex",
        Style => "style",
        Type => "type",
        IncludeObsoleteValues => "include-obsolete-values",
        BindingPath => "binding-path",
        Text => "text",
        ParseEscapeSequences => "parse-escape-sequences",
        DisplayTooltipWhenElided => "display-tooltip-when-elided",
        EnableRichText => "enable-rich-text",
        Mode => "mode",
        HorizontalScrollerVisibility => "horizontal-scroller-visibility",
        VerticalScrollerVisibility => "vertical-scroller-visibility",
        NestedInteractionKind => "nested-interaction-kind",
        HorizontalPageSize => "horizontal-page-size",
        VerticalPageSize => "vertical-page-size",
        MouseWheelScrollSize => "mouse-wheel-scroll-size",
        TouchScrollType => "touch-scroll-type",
        ScrollDecelerationRate => "scroll-deceleration-rate",
        Elasticity => "elasticity",
        ElasticAnimationIntervalMs => "elastic-animation-interval-ms",
        ShowBorder => "show-border",
        SelectionType => "selection-type",
        ShowAlternatingRowBackgrounds => "show-alternating-row-backgrounds",
        Reorderable => "reorderable",
        HorizontalScrolling => "horizontal-scrolling",
        ShowFoldoutHeader => "show-foldout-header",
        HeaderTitle => "header-title",
        ShowAddRemoveFooter => "show-add-remove-footer",
        ReorderMode => "reorder-mode",
        ShowBoundCollectionSize => "show-bound-collection-size",
        FixedItemHeight => "fixed-item-height",
        VirtualizationMethod => "virtualization-method",
        AutoExpand => "auto-expand",
        Label => "label",
        LowValue => "low-value",
        HighValue => "high-value",
        Value => "value",
        Direction => "direction",
        MaxLength => "max-length",
        Password => "password",
        MaskCharacter => "mask-character",
        ReadOnly => "readonly",
        IsDelayed => "is-delayed",
        HideMobileInput => "hide-mobile-input",
        KeyboardType => "keyboard-type",
        AutoCorrection => "auto-correction",
        Multiline => "multiline",
        PageSize => "page-size",
        ShowInputField => "show-input-field",
        Inverted => "inverted",
        MinValue => "min-value",
        MaxValue => "max-value",
        LowLimit => "low-limit",
        HighLimit => "high-limit",
        Title => "title",
        Index => "index",
        Choices => "choices",
        X => "x",
        Y => "y",
        Z => "z",
        W => "w",
        H => "h",
        CenterX => "cx",
        CenterY => "cy",
        CenterZ => "cz",
        ExtentX => "ex",
        ExtentY => "ey",
        ExtentZ => "ez",
        PositionX => "px",
        PositionY => "py",
        PositionZ => "pz",
        SizeX => "sx",
        SizeY => "sy",
        SizeZ => "sz",
    }
}
