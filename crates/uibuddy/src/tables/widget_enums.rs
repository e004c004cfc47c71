keyword_table! {
    pub enum PickingMode {
        Position => "Position",
        Ignore => "Ignore",
    }
}

keyword_table! {
    pub enum UsageHints {
        None => "None",
        DynamicTransform => "DynamicTransform",
        GroupTransform => "GroupTransform",
        MaskContainer => "MaskContainer",
        DynamicColor => "DynamicColor",
    }
}

keyword_table! {
    pub enum ScrollViewMode {
        Vertical => "Vertical",
        Horizontal => "Horizontal",
        VerticalAndHorizontal => "VerticalAndHorizontal",
    }
}

keyword_table! {
    pub enum ScrollerVisibility {
        Auto => "Auto",
        AlwaysVisible => "AlwaysVisible",
        Hidden => "Hidden",
    }
}

keyword_table! {
    pub enum NestedInteractionKind {
        Default => "Default",
        StopScrolling => "StopScrolling",
        ForwardScrolling => "ForwardScrolling",
    }
}

keyword_table! {
    pub enum TouchScrollBehavior {
        Unrestricted => "Unrestricted",
        Elastic => "Elastic",
        Clamped => "Clamped",
    }
}

keyword_table! {
    pub enum SelectionType {
        None => "None",
        Single => "Single",
        Multiple => "Multiple",
    }
}

keyword_table! {
    pub enum AlternatingRowBackground {
        None => "None",
        ContentOnly => "ContentOnly",
        All => "All",
    }
}

keyword_table! {
    pub enum CollectionVirtualizationMethod {
        FixedHeight => "FixedHeight",
        DynamicHeight => "DynamicHeight",
    }
}

keyword_table! {
    pub enum ListViewReorderMode {
        Simple => "Simple",
        Animated => "Animated",
    }
}

keyword_table! {
    pub enum SliderDirection {
        Horizontal => "Horizontal",
        Vertical => "Vertical",
    }
}

keyword_table! {
    pub enum TouchScreenKeyboardType {
        Default => "Default",
        AsciiCapable => "ASCIICapable",
        NumbersAndPunctuation => "NumbersAndPunctuation",
        Url => "URL",
        NumberPad => "NumberPad",
        PhonePad => "PhonePad",
        NamePhonePad => "NamePhonePad",
        EmailAddress => "EmailAddress",
        Social => "Social",
        Search => "Search",
        DecimalPad => "DecimalPad",
        OneTimeCode => "OneTimeCode",
    }
}
