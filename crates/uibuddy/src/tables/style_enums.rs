keyword_table! {
    pub enum Align {
        Auto => "auto",
        FlexStart => "flex-start",
        FlexEnd => "flex-end",
        Center => "center",
        Stretch => "stretch",
    }
}

keyword_table! {
    pub enum FlexDirection {
        Row => "row",
        RowReverse => "row-reverse",
        Column => "column",
        ColumnReverse => "column-reverse",
    }
}

keyword_table! {
    pub enum Wrap {
        NoWrap => "nowrap",
        Wrap => "wrap",
        WrapReverse => "wrap-reverse",
    }
}

keyword_table! {
    pub enum DisplayStyle {
        Flex => "flex",
        None => "none",
    }
}

keyword_table! {
    pub enum Justify {
        FlexStart => "flex-start",
        FlexEnd => "flex-end",
        Center => "center",
        SpaceBetween => "space-between",
        SpaceAround => "space-around",
    }
}

keyword_table! {
    pub enum Overflow {
        Visible => "visible",
        Hidden => "hidden",
    }
}

keyword_table! {
    pub enum Position {
        Relative => "relative",
        Absolute => "absolute",
    }
}

keyword_table! {
    pub enum TextOverflow {
        Clip => "clip",
        Ellipsis => "ellipsis",
    }
}

keyword_table! {
    pub enum ScaleMode {
        StretchToFill => "stretch-to-fill",
        ScaleAndCrop => "scale-and-crop",
        ScaleToFit => "scale-to-fit",
    }
}

keyword_table! {
    pub enum FontStyle {
        Normal => "normal",
        Italic => "italic",
        Bold => "bold",
        BoldAndItalic => "bold-and-italic",
    }
}

keyword_table! {
    pub enum TextAnchor {
        UpperLeft => "upper-left",
        UpperCenter => "upper-center",
        UpperRight => "upper-right",
        MiddleLeft => "middle-left",
        MiddleCenter => "middle-center",
        MiddleRight => "middle-right",
        LowerLeft => "lower-left",
        LowerCenter => "lower-center",
        LowerRight => "lower-right",
    }
}

keyword_table! {
    pub enum TextOverflowPosition {
        Start => "start",
        Middle => "middle",
        End => "end",
    }
}

keyword_table! {
    pub enum WhiteSpace {
        Normal => "normal",
        NoWrap => "nowrap",
    }
}

keyword_table! {
    pub enum Visibility {
        Visible => "visible",
        Hidden => "hidden",
    }
}

keyword_table! {
    pub enum OverflowClipBox {
        PaddingBox => "padding-box",
        ContentBox => "content-box",
    }
}

keyword_table! {
    pub enum Repeat {
        Repeat => "repeat",
        NoRepeat => "no-repeat",
    }
}

keyword_table! {
    /// Transition timing functions.
    pub enum EasingMode {
        Ease => "ease",
        EaseIn => "ease-in",
        EaseOut => "ease-out",
        EaseInOut => "ease-in-out",
        Linear => "linear",
        EaseInSine => "ease-in-sine",
        EaseOutSine => "ease-out-sine",
        EaseInOutSine => "ease-in-out-sine",
        EaseInCubic => "ease-in-cubic",
        EaseOutCubic => "ease-out-cubic",
        EaseInOutCubic => "ease-in-out-cubic",
        EaseInCirc => "ease-in-circ",
        EaseOutCirc => "ease-out-circ",
        EaseInOutCirc => "ease-in-out-circ",
        EaseInElastic => "ease-in-elastic",
        EaseOutElastic => "ease-out-elastic",
        EaseInOutElastic => "ease-in-out-elastic",
        EaseInBack => "ease-in-back",
        EaseOutBack => "ease-out-back",
        EaseInOutBack => "ease-in-out-back",
        EaseInBounce => "ease-in-bounce",
        EaseOutBounce => "ease-out-bounce",
        EaseInOutBounce => "ease-in-out-bounce",
    }
}

keyword_table! {
    /// Built-in cursors accepted by `cursor`.
    pub enum MouseCursor {
        Arrow => "arrow",
        Text => "text",
        ResizeVertical => "resize-vertical",
        ResizeHorizontal => "resize-horizontal",
        Link => "link",
        SlideArrow => "slide-arrow",
        ResizeUpRight => "resize-up-right",
        ResizeUpLeft => "resize-up-left",
        MoveArrow => "move-arrow",
        RotateArrow => "rotate-arrow",
        ScaleArrow => "scale-arrow",
        ArrowPlus => "arrow-plus",
        ArrowMinus => "arrow-minus",
        Pan => "pan",
        Orbit => "orbit",
        Zoom => "zoom",
        Fps => "fps",
        SplitResizeUpDown => "split-resize-up-down",
        SplitResizeLeftRight => "split-resize-left-right",
    }
}
