//! design-dna: Deterministic visual identities for fleets of sites
//!
//! This crate derives a colour palette, font pair, layout variant and CSS
//! tokens from a site's domain and target keyword. The same inputs always
//! produce the same identity, so nothing needs to be stored.
//!
//! # Example
//!
//! ```
//! use design_dna::{DesignDna, DesignMode, css_variables, google_fonts_url, layout_classes};
//!
//! let dna = DesignDna::resolve("example.com", "free government phone", DesignMode::Advanced);
//!
//! // Custom properties for a `:root` block
//! let css = css_variables(&dna);
//! assert!(css.contains("--color-primary: #16a34a;"));
//!
//! // Stylesheet link for the selected fonts
//! let url = google_fonts_url(dna.fonts());
//! assert!(url.contains("family=Montserrat"));
//!
//! // Class tokens for the structural layout
//! let classes = layout_classes(&dna);
//! assert_eq!(classes.len(), 9);
//! ```
//!
//! # Overrides
//!
//! Colours and fonts can be replaced after resolution with a serializable
//! [`DesignOverride`]. Gradients are rebuilt from the merged colours:
//!
//! ```
//! use design_dna::{ColorOverride, DesignDna, DesignMode, DesignOverride};
//!
//! let base = DesignDna::resolve("example.com", "free government phone", DesignMode::Basic);
//! let custom = base.with_override(&DesignOverride::new().with_colors(ColorOverride {
//!     primary: Some("#ff6b35".into()),
//!     ..Default::default()
//! }));
//!
//! assert_eq!(custom.colors().primary, "#ff6b35");
//! assert_eq!(custom.fonts(), base.fonts());
//! ```

pub mod catalog;
mod classes;
mod combinations;
mod css;
mod dna;
mod error;
pub mod hash;
mod overrides;
mod pattern;
mod site;

pub use catalog::{
    AnimationStyle, BackgroundPattern, BorderRadius, ButtonStyle, CardLayout, CardStyle,
    CtaPlacement, CtaStyle, FontPair, FooterStyle, HeroStyle, HeroVariant, ImageStyle, NavStyle,
    Palette, Section, SectionOrder, ShadowStyle, SpacingScale, StyleOption, TypographyScale,
};
pub use classes::{ClassSlot, LayoutClasses, classes_for_layout, layout_classes};
pub use combinations::unique_combinations;
pub use css::{css_variables, google_fonts_url, light_color};
pub use dna::{
    AdvancedLayout, BasicLayout, Colors, DesignDna, DesignMode, Fonts, Gradients, LayoutSeeds,
    resolve,
};
pub use error::{Error, Result};
pub use overrides::{ColorOverride, DesignOverride, FontOverride};
pub use pattern::{background_pattern_css, background_pattern_css_for_kind};
pub use site::{ContentConfig, Environment, HomepageContent, SiteConfig, SiteDesign};
