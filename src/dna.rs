//! Design DNA: the resolved visual identity of one site.
//!
//! [`DesignDna::resolve`] hashes a site's domain and keyword into several
//! independent seeds and uses each one to index a catalog. The result is a
//! pure function of its inputs: the same site always resolves to the same
//! identity, on any machine and in any process.
//!
//! # Example
//!
//! ```
//! use design_dna::{DesignDna, DesignMode, HeroStyle};
//!
//! let dna = DesignDna::resolve("example.com", "free government phone", DesignMode::Basic);
//!
//! assert_eq!(dna.colors().primary, "#16a34a");
//! assert_eq!(dna.fonts().heading, "Montserrat");
//! assert_eq!(dna.layout().hero_style, HeroStyle::LeftAligned);
//! assert!(dna.advanced_layout().is_none());
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::{
    AnimationStyle, BackgroundPattern, BorderRadius, ButtonStyle, CardLayout, CardStyle,
    CtaPlacement, CtaStyle, FONT_PAIRS, FontPair, FooterStyle, HeroStyle, HeroVariant,
    ImageStyle, NavStyle, PALETTES, Palette, SECTION_ORDERS, SectionOrder, ShadowStyle,
    SpacingScale, StyleOption, TypographyScale, index_for,
};
use crate::error::{Error, Result};
use crate::hash::{hash_concat, hash_reversed, hash_units, reversed_units};
use crate::overrides::DesignOverride;

// ============================================================================
// DesignMode
// ============================================================================

/// How much of the layout varies between sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum DesignMode {
    /// Colours, fonts and three small layout choices.
    #[default]
    Basic,
    /// Everything in basic mode plus structural layout axes and section order.
    Advanced,
}

impl DesignMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Advanced => "advanced",
        }
    }
}

impl std::fmt::Display for DesignMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DesignMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "basic" => Ok(Self::Basic),
            "advanced" => Ok(Self::Advanced),
            other => Err(Error::UnknownMode(other.to_string())),
        }
    }
}

// ============================================================================
// Colors, Gradients, Fonts
// ============================================================================

/// The six site colours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct Colors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
    pub text_on_primary: String,
}

impl From<&Palette> for Colors {
    fn from(palette: &Palette) -> Self {
        Self {
            primary: palette.primary.to_string(),
            secondary: palette.secondary.to_string(),
            accent: palette.accent.to_string(),
            background: palette.background.to_string(),
            text: palette.text.to_string(),
            text_on_primary: palette.text_on_primary.to_string(),
        }
    }
}

/// CSS gradients derived from [`Colors`].
///
/// Always built with [`Gradients::from_colors`] so they never disagree with
/// the colours they accompany.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct Gradients {
    /// primary → secondary
    pub primary: String,
    /// primary → secondary → accent
    pub hero: String,
    /// accent → primary
    pub accent: String,
}

impl Gradients {
    pub fn from_colors(colors: &Colors) -> Self {
        let Colors {
            primary,
            secondary,
            accent,
            ..
        } = colors;

        Self {
            primary: format!("linear-gradient(135deg, {primary} 0%, {secondary} 100%)"),
            hero: format!(
                "linear-gradient(135deg, {primary} 0%, {secondary} 50%, {accent} 100%)"
            ),
            accent: format!("linear-gradient(135deg, {accent} 0%, {primary} 100%)"),
        }
    }
}

/// Heading and body font families.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct Fonts {
    pub heading: String,
    pub body: String,
}

impl From<&FontPair> for Fonts {
    fn from(pair: &FontPair) -> Self {
        Self {
            heading: pair.heading.to_string(),
            body: pair.body.to_string(),
        }
    }
}

// ============================================================================
// Layout
// ============================================================================

/// The three layout choices made in every mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct BasicLayout {
    pub hero_style: HeroStyle,
    pub card_style: CardStyle,
    pub cta_style: CtaStyle,
}

impl BasicLayout {
    /// Draws all three choices from one seed at bit offsets 0, 2 and 4.
    ///
    /// The shift amounts are fixed: changing them reassigns every site.
    pub fn from_seed(seed: u32) -> Self {
        Self {
            hero_style: HeroStyle::select(u64::from(seed)),
            card_style: CardStyle::select(u64::from(seed >> 2)),
            cta_style: CtaStyle::select(u64::from(seed >> 4)),
        }
    }
}

/// The five seeds behind the structural axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutSeeds {
    /// `hash(domain)`
    pub domain: u64,
    /// `hash(keyword + domain)`
    pub keyword_domain: u64,
    /// `hash(reverse(domain))`
    pub reversed_domain: u64,
    /// `hash(domain + keyword + "layout")`
    pub tagged: u64,
    /// `hash(reverse(keyword) + domain)`
    pub reversed_keyword: u64,
}

impl LayoutSeeds {
    pub fn new(domain: &str, keyword: &str) -> Self {
        Self {
            domain: u64::from(hash_concat(&[domain])),
            keyword_domain: u64::from(hash_concat(&[keyword, domain])),
            reversed_domain: u64::from(hash_reversed(domain)),
            tagged: u64::from(hash_concat(&[domain, keyword, "layout"])),
            reversed_keyword: u64::from(hash_units(
                reversed_units(keyword).chain(domain.encode_utf16()),
            )),
        }
    }
}

/// Structural layout choices, present only in advanced mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct AdvancedLayout {
    pub hero_variant: HeroVariant,
    pub section_order: SectionOrder,
    pub card_layout: CardLayout,
    pub nav_style: NavStyle,
    pub footer_style: FooterStyle,
    pub spacing_scale: SpacingScale,
    pub animation_style: AnimationStyle,
    pub border_radius: BorderRadius,
    pub shadow_style: ShadowStyle,
    pub background_pattern: BackgroundPattern,
    pub cta_placement: CtaPlacement,
    pub typography_scale: TypographyScale,
    pub image_style: ImageStyle,
    pub button_style: ButtonStyle,
}

impl AdvancedLayout {
    pub fn resolve(domain: &str, keyword: &str) -> Self {
        Self::from_seeds(&LayoutSeeds::new(domain, keyword))
    }

    /// Maps seeds to axes. Axes without a dedicated seed use a pairwise sum.
    pub fn from_seeds(seeds: &LayoutSeeds) -> Self {
        let LayoutSeeds {
            domain: s1,
            keyword_domain: s2,
            reversed_domain: s3,
            tagged: s4,
            reversed_keyword: s5,
        } = *seeds;

        Self {
            hero_variant: HeroVariant::select(s1),
            section_order: SECTION_ORDERS[index_for(s2, SECTION_ORDERS.len())],
            card_layout: CardLayout::select(s3),
            nav_style: NavStyle::select(s4),
            footer_style: FooterStyle::select(s1 + s2),
            spacing_scale: SpacingScale::select(s5),
            animation_style: AnimationStyle::select(s3 + s4),
            border_radius: BorderRadius::select(s1 + s3),
            shadow_style: ShadowStyle::select(s2 + s4),
            background_pattern: BackgroundPattern::select(s1 + s5),
            cta_placement: CtaPlacement::select(s2 + s5),
            typography_scale: TypographyScale::select(s3 + s5),
            image_style: ImageStyle::select(s4 + s5),
            button_style: ButtonStyle::select(s1 + s4),
        }
    }
}

// ============================================================================
// DesignDna
// ============================================================================

/// The complete resolved identity for one site.
///
/// Immutable once built. [`with_override`](Self::with_override) returns a
/// new value rather than modifying this one.
///
/// # JSON Format
///
/// ```json
/// {
///   "designStyle": "basic",
///   "colors": { "primary": "#16a34a", "textOnPrimary": "#ffffff", ... },
///   "gradients": { "primary": "linear-gradient(...)", ... },
///   "fonts": { "heading": "Montserrat", "body": "Lato" },
///   "layout": { "heroStyle": "left-aligned", "cardStyle": "rounded", "ctaStyle": "pill" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct DesignDna {
    design_style: DesignMode,
    colors: Colors,
    gradients: Gradients,
    fonts: Fonts,
    layout: BasicLayout,
    #[serde(skip_serializing_if = "Option::is_none")]
    advanced_layout: Option<AdvancedLayout>,
}

impl DesignDna {
    /// Resolves the identity for a domain and keyword.
    ///
    /// Total over all inputs, including empty strings.
    pub fn resolve(domain: &str, keyword: &str, mode: DesignMode) -> Self {
        // Palette and layout hash the same inputs in opposite order so the
        // two choices do not move together.
        let palette_seed = hash_concat(&[domain, keyword]);
        let palette_index = index_for(u64::from(palette_seed), PALETTES.len());
        let font_index = index_for(u64::from(hash_reversed(domain)), FONT_PAIRS.len());
        let layout = BasicLayout::from_seed(hash_concat(&[keyword, domain]));

        let colors = Colors::from(&PALETTES[palette_index]);
        let advanced_layout = match mode {
            DesignMode::Basic => None,
            DesignMode::Advanced => Some(AdvancedLayout::resolve(domain, keyword)),
        };

        tracing::trace!(
            domain,
            keyword,
            %mode,
            palette = palette_index,
            fonts = font_index,
            "resolved design dna"
        );

        Self {
            design_style: mode,
            gradients: Gradients::from_colors(&colors),
            colors,
            fonts: Fonts::from(&FONT_PAIRS[font_index]),
            layout,
            advanced_layout,
        }
    }

    /// Returns a copy with override colours and fonts applied.
    ///
    /// Each colour and font field falls back to this descriptor's value when
    /// the override leaves it unset or empty. Gradients are rebuilt from the
    /// merged colours. Layout is never overridden.
    pub fn with_override(&self, overrides: &DesignOverride) -> Self {
        let colors = match &overrides.colors {
            Some(colors) => colors.merge_onto(&self.colors),
            None => self.colors.clone(),
        };
        let fonts = match &overrides.fonts {
            Some(fonts) => fonts.merge_onto(&self.fonts),
            None => self.fonts.clone(),
        };

        tracing::debug!(
            primary = %colors.primary,
            heading = %fonts.heading,
            "applied design override"
        );

        Self {
            design_style: self.design_style,
            gradients: Gradients::from_colors(&colors),
            colors,
            fonts,
            layout: self.layout,
            advanced_layout: self.advanced_layout,
        }
    }

    /// Captures this descriptor's colours and fonts as a complete override.
    ///
    /// Storing the result in a site's configuration pins its identity even if
    /// the catalogs change later.
    pub fn export_override(&self) -> DesignOverride {
        DesignOverride::from_parts(&self.colors, &self.fonts)
    }

    pub fn mode(&self) -> DesignMode {
        self.design_style
    }

    pub fn is_advanced(&self) -> bool {
        self.design_style == DesignMode::Advanced
    }

    pub fn colors(&self) -> &Colors {
        &self.colors
    }

    pub fn gradients(&self) -> &Gradients {
        &self.gradients
    }

    pub fn fonts(&self) -> &Fonts {
        &self.fonts
    }

    pub fn layout(&self) -> &BasicLayout {
        &self.layout
    }

    /// Structural layout; `Some` exactly when the mode is advanced.
    pub fn advanced_layout(&self) -> Option<&AdvancedLayout> {
        self.advanced_layout.as_ref()
    }

    /// Serializes the descriptor to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the descriptor to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Shorthand for [`DesignDna::resolve`].
pub fn resolve(domain: &str, keyword: &str, mode: DesignMode) -> DesignDna {
    DesignDna::resolve(domain, keyword, mode)
}

// ============================================================================
// Tests
// ============================================================================
