//! Layout axes.
//!
//! The three basic-mode axes are small (three entries each) because they are
//! all drawn from one seed by bit shifting. The advanced-mode axes each get
//! their own seed or seed sum and can afford larger catalogs.

// ============================================================================
// Basic Layout
// ============================================================================

style_axis! {
    /// Hero section arrangement in basic mode.
    HeroStyle: "hero style" {
        Centered => "centered",
        LeftAligned => "left-aligned",
        Split => "split",
    }
}

style_axis! {
    /// Card corner treatment in basic mode.
    CardStyle: "card style" {
        Rounded => "rounded",
        Sharp => "sharp",
        Minimal => "minimal",
    }
}

style_axis! {
    /// Call-to-action button shape in basic mode.
    CtaStyle: "cta style" {
        Pill => "pill",
        Square => "square",
        Rounded => "rounded",
    }
}

// ============================================================================
// Advanced Layout
// ============================================================================

style_axis! {
    /// Hero section structure.
    HeroVariant: "hero variant" {
        Centered => "centered",
        SplitLeft => "split-left",
        SplitRight => "split-right",
        Diagonal => "diagonal",
        Wave => "wave",
        GradientMesh => "gradient-mesh",
        CardOverlay => "card-overlay",
        Minimal => "minimal",
    }
}

style_axis! {
    /// Arrangement of card collections.
    CardLayout: "card layout" {
        Grid3 => "grid-3",
        Grid2 => "grid-2",
        Grid4 => "grid-4",
        Masonry => "masonry",
        Carousel => "carousel",
        Accordion => "accordion",
        List => "list",
        Alternating => "alternating",
    }
}

style_axis! {
    NavStyle: "nav style" {
        Standard => "standard",
        CenteredLogo => "centered-logo",
        Minimal => "minimal",
        Transparent => "transparent",
        Dark => "dark",
        Floating => "floating",
    }
}

style_axis! {
    FooterStyle: "footer style" {
        Mega => "mega",
        Simple => "simple",
        Minimal => "minimal",
        Centered => "centered",
        Dark => "dark",
        Gradient => "gradient",
    }
}

style_axis! {
    /// Multiplier applied to the base spacing unit.
    SpacingScale: "spacing scale" {
        Compact => "compact",
        Balanced => "balanced",
        Generous => "generous",
        Dramatic => "dramatic",
    }
}

style_axis! {
    AnimationStyle: "animation style" {
        None => "none",
        Subtle => "subtle",
        Moderate => "moderate",
        Playful => "playful",
    }
}

style_axis! {
    BorderRadius: "border radius" {
        None => "none",
        Small => "small",
        Medium => "medium",
        Large => "large",
        Full => "full",
    }
}

style_axis! {
    /// Box shadow intensity. `Colored` tints the shadow with the primary colour.
    ShadowStyle: "shadow style" {
        None => "none",
        Subtle => "subtle",
        Medium => "medium",
        Strong => "strong",
        Colored => "colored",
    }
}

style_axis! {
    /// Decorative page background.
    BackgroundPattern: "background pattern" {
        None => "none",
        Dots => "dots",
        Grid => "grid",
        Waves => "waves",
        GradientMesh => "gradient-mesh",
        Noise => "noise",
    }
}

style_axis! {
    /// Where the primary call to action is placed on the page.
    CtaPlacement: "cta placement" {
        Inline => "inline",
        Floating => "floating",
        Sidebar => "sidebar",
        BottomBar => "bottom-bar",
        ModalTrigger => "modal-trigger",
    }
}

style_axis! {
    /// Multiplier applied to the base type scale.
    TypographyScale: "typography scale" {
        Compact => "compact",
        Standard => "standard",
        Large => "large",
        Dramatic => "dramatic",
    }
}

style_axis! {
    ImageStyle: "image style" {
        Rounded => "rounded",
        Sharp => "sharp",
        Circular => "circular",
        Masked => "masked",
        Shadowed => "shadowed",
    }
}

style_axis! {
    ButtonStyle: "button style" {
        Solid => "solid",
        Outline => "outline",
        Ghost => "ghost",
        Gradient => "gradient",
        ThreeD => "3d",
        Glow => "glow",
    }
}
