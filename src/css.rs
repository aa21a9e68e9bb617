//! CSS custom properties and font requests derived from a [`DesignDna`].
//!
//! Everything here is a pure function of the descriptor.

use std::fmt::Write as _;

use palette::Srgb;
use palette::rgb::FromHexError;

use crate::catalog::{BorderRadius, ShadowStyle, SpacingScale, TypographyScale};
use crate::dna::{DesignDna, Fonts};

const FONT_WEIGHTS: &str = "400;500;600;700";
const FONTS_ENDPOINT: &str = "https://fonts.googleapis.com/css2";

// ============================================================================
// Token Tables
// ============================================================================

impl BorderRadius {
    pub fn css_value(self) -> &'static str {
        match self {
            Self::None => "0",
            Self::Small => "4px",
            Self::Medium => "8px",
            Self::Large => "16px",
            Self::Full => "9999px",
        }
    }
}

impl SpacingScale {
    /// Unitless multiplier for the base spacing unit.
    pub fn css_value(self) -> &'static str {
        match self {
            Self::Compact => "0.75",
            Self::Balanced => "1",
            Self::Generous => "1.25",
            Self::Dramatic => "1.5",
        }
    }
}

impl TypographyScale {
    /// Unitless multiplier for the base font size.
    pub fn css_value(self) -> &'static str {
        match self {
            Self::Compact => "0.9",
            Self::Standard => "1",
            Self::Large => "1.1",
            Self::Dramatic => "1.25",
        }
    }
}

impl ShadowStyle {
    /// The `box-shadow` value. `Colored` appends a `30` alpha byte to the
    /// primary colour, so it expects a six-digit hex primary.
    pub fn css_value(self, primary: &str) -> String {
        match self {
            Self::None => "none".to_string(),
            Self::Subtle => "0 1px 3px rgba(0,0,0,0.1)".to_string(),
            Self::Medium => "0 4px 6px rgba(0,0,0,0.1)".to_string(),
            Self::Strong => "0 10px 25px rgba(0,0,0,0.15)".to_string(),
            Self::Colored => format!("0 10px 25px {primary}30"),
        }
    }
}

// ============================================================================
// CSS Variables
// ============================================================================

/// Parses a `#rgb` or `#rrggbb` colour.
///
/// The shape is checked before handing the text to `palette`, whose parser
/// slices by byte offset and cannot take non-ASCII input.
pub(crate) fn parse_hex_color(value: &str) -> Result<Srgb<u8>, FromHexError> {
    let well_formed = value.strip_prefix('#').is_some_and(|digits| {
        matches!(digits.len(), 3 | 6) && digits.bytes().all(|b| b.is_ascii_hexdigit())
    });
    if !well_formed {
        return Err(FromHexError::HexFormatError(
            "expected `#rgb` or `#rrggbb` hex digits",
        ));
    }
    value.parse()
}

/// Returns `hex` as an `rgba(...)` colour at 10% opacity.
///
/// Used for hover and tint backgrounds. An unparsable colour degrades to
/// translucent black.
pub fn light_color(hex: &str) -> String {
    match parse_hex_color(hex) {
        Ok(rgb) => format!("rgba({}, {}, {}, 0.1)", rgb.red, rgb.green, rgb.blue),
        Err(err) => {
            tracing::warn!(color = hex, error = %err, "cannot derive light color");
            "rgba(0, 0, 0, 0.1)".to_string()
        }
    }
}

/// Builds the custom-property block for a descriptor.
///
/// Emits one `--name: value;` declaration per line, without a surrounding
/// selector, so the caller can place it under `:root` or a scoped class.
/// Advanced descriptors additionally get radius, spacing, typography and
/// shadow tokens.
pub fn css_variables(dna: &DesignDna) -> String {
    let colors = dna.colors();
    let gradients = dna.gradients();
    let fonts = dna.fonts();

    let mut declarations = vec![
        ("--color-primary", colors.primary.clone()),
        ("--color-primary-light", light_color(&colors.primary)),
        ("--color-secondary", colors.secondary.clone()),
        ("--color-accent", colors.accent.clone()),
        ("--color-background", colors.background.clone()),
        ("--color-text", colors.text.clone()),
        ("--color-text-on-primary", colors.text_on_primary.clone()),
        ("--gradient-primary", gradients.primary.clone()),
        ("--gradient-hero", gradients.hero.clone()),
        ("--gradient-accent", gradients.accent.clone()),
        ("--font-heading", format!("'{}', sans-serif", fonts.heading)),
        ("--font-body", format!("'{}', sans-serif", fonts.body)),
    ];

    if let Some(adv) = dna.advanced_layout() {
        declarations.extend([
            ("--border-radius", adv.border_radius.css_value().to_string()),
            ("--spacing-scale", adv.spacing_scale.css_value().to_string()),
            ("--typography-scale", adv.typography_scale.css_value().to_string()),
            ("--shadow", adv.shadow_style.css_value(&colors.primary)),
        ]);
    }

    let mut css = String::new();
    for (name, value) in declarations {
        let _ = writeln!(css, "{name}: {value};");
    }
    css
}

// ============================================================================
// Font Request
// ============================================================================

/// Replaces each run of whitespace with a single `+`.
fn font_family_param(name: &str) -> String {
    let mut param = String::with_capacity(name.len());
    let mut in_space = false;
    for c in name.chars() {
        if c.is_whitespace() {
            if !in_space {
                param.push('+');
            }
            in_space = true;
        } else {
            param.push(c);
            in_space = false;
        }
    }
    param
}

/// Builds the Google Fonts stylesheet URL for a font pair.
///
/// The body family is omitted when it matches the heading family.
pub fn google_fonts_url(fonts: &Fonts) -> String {
    let mut families = vec![fonts.heading.as_str()];
    if fonts.body != fonts.heading {
        families.push(fonts.body.as_str());
    }

    let params: Vec<String> = families
        .into_iter()
        .map(|family| format!("family={}:wght@{FONT_WEIGHTS}", font_family_param(family)))
        .collect();

    format!("{FONTS_ENDPOINT}?{}&display=swap", params.join("&"))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StyleOption;
    use crate::dna::DesignMode;
    use crate::overrides::{ColorOverride, DesignOverride};

    fn example(mode: DesignMode) -> DesignDna {
        DesignDna::resolve("example.com", "free government phone", mode)
    }

    #[test]
    fn light_color_from_hex() {
        assert_eq!(light_color("#16a34a"), "rgba(22, 163, 74, 0.1)");
        assert_eq!(light_color("#ffffff"), "rgba(255, 255, 255, 0.1)");
    }

    #[test]
    fn light_color_degrades_on_garbage() {
        assert_eq!(light_color("not-a-color"), "rgba(0, 0, 0, 0.1)");
        assert_eq!(light_color(""), "rgba(0, 0, 0, 0.1)");
        assert_eq!(light_color("16a34a"), "rgba(0, 0, 0, 0.1)");
    }

    #[test]
    fn light_color_degrades_on_non_ascii() {
        assert_eq!(light_color("#é1"), "rgba(0, 0, 0, 0.1)");
        assert_eq!(light_color("#ééé"), "rgba(0, 0, 0, 0.1)");
        assert_eq!(light_color("é"), "rgba(0, 0, 0, 0.1)");
    }

    #[test]
    fn hex_shape_is_checked() {
        assert!(parse_hex_color("#fff").is_ok());
        assert!(parse_hex_color("#16A34A").is_ok());
        assert!(parse_hex_color("#16a34").is_err());
        assert!(parse_hex_color("#16a34g").is_err());
        assert!(parse_hex_color("#16a34a30").is_err());
        assert!(matches!(
            parse_hex_color("#é1"),
            Err(FromHexError::HexFormatError(_))
        ));
    }

    #[test]
    fn basic_block_has_colors_gradients_fonts() {
        let css = css_variables(&example(DesignMode::Basic));

        assert!(css.contains("--color-primary: #16a34a;\n"));
        assert!(css.contains("--color-primary-light: rgba(22, 163, 74, 0.1);\n"));
        assert!(css.contains("--color-text-on-primary: #ffffff;\n"));
        assert!(css.contains(
            "--gradient-hero: linear-gradient(135deg, #16a34a 0%, #15803d 50%, #f59e0b 100%);\n"
        ));
        assert!(css.contains("--font-heading: 'Montserrat', sans-serif;\n"));
        assert!(css.contains("--font-body: 'Lato', sans-serif;\n"));
        assert_eq!(css.lines().count(), 12);
        assert!(!css.contains("--border-radius"));
        assert!(!css.contains("--shadow"));
    }

    #[test]
    fn advanced_block_adds_scale_tokens() {
        let css = css_variables(&example(DesignMode::Advanced));

        // large radius, balanced spacing, standard type, medium shadow
        assert!(css.contains("--border-radius: 16px;\n"));
        assert!(css.contains("--spacing-scale: 1;\n"));
        assert!(css.contains("--typography-scale: 1;\n"));
        assert!(css.contains("--shadow: 0 4px 6px rgba(0,0,0,0.1);\n"));
        assert_eq!(css.lines().count(), 16);
    }

    #[test]
    fn css_reflects_overridden_colors() {
        let dna = example(DesignMode::Basic).with_override(&DesignOverride::new().with_colors(
            ColorOverride {
                primary: Some("#ff6b35".into()),
                ..Default::default()
            },
        ));
        let css = css_variables(&dna);

        assert!(css.contains("--color-primary: #ff6b35;"));
        assert!(css.contains("--color-primary-light: rgba(255, 107, 53, 0.1);"));
        assert!(!css.contains("#16a34a"));
    }

    #[test]
    fn every_token_table_is_total() {
        for radius in BorderRadius::ALL {
            assert!(!radius.css_value().is_empty());
        }
        for spacing in SpacingScale::ALL {
            assert!(spacing.css_value().parse::<f32>().is_ok());
        }
        for typography in TypographyScale::ALL {
            assert!(typography.css_value().parse::<f32>().is_ok());
        }
        assert_eq!(BorderRadius::Full.css_value(), "9999px");
        assert_eq!(ShadowStyle::None.css_value("#000000"), "none");
        assert_eq!(
            ShadowStyle::Colored.css_value("#2563eb"),
            "0 10px 25px #2563eb30"
        );
    }

    #[test]
    fn fonts_url_single_family() {
        let fonts = Fonts {
            heading: "Plus Jakarta Sans".into(),
            body: "Plus Jakarta Sans".into(),
        };
        assert_eq!(
            google_fonts_url(&fonts),
            "https://fonts.googleapis.com/css2?family=Plus+Jakarta+Sans:wght@400;500;600;700&display=swap"
        );
    }

    #[test]
    fn fonts_url_two_families() {
        let url = google_fonts_url(example(DesignMode::Basic).fonts());
        assert_eq!(
            url,
            "https://fonts.googleapis.com/css2?family=Montserrat:wght@400;500;600;700&family=Lato:wght@400;500;600;700&display=swap"
        );
    }

    #[test]
    fn whitespace_runs_collapse() {
        assert_eq!(font_family_param("Red  Hat\tDisplay"), "Red+Hat+Display");
        assert_eq!(font_family_param("Inter"), "Inter");
    }
}
