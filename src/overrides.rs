//! Serializable partial overrides for a resolved design.
//!
//! A [`DesignOverride`] carries colours and/or fonts supplied from outside
//! the resolver (for example a hand-tuned palette stored in a site's
//! configuration). Only colours and fonts are override-eligible; layout is
//! always hash-derived.
//!
//! # Example
//!
//! ```
//! use design_dna::{ColorOverride, DesignDna, DesignMode, DesignOverride};
//!
//! let overrides = DesignOverride::new().with_colors(ColorOverride {
//!     primary: Some("#ff6b35".into()),
//!     ..Default::default()
//! });
//!
//! // Serialize for storage in a site config
//! let json = overrides.to_json().unwrap();
//! let restored = DesignOverride::from_json(&json).unwrap();
//!
//! let dna = DesignDna::resolve("example.com", "free government phone", DesignMode::Basic)
//!     .with_override(&restored);
//! assert_eq!(dna.colors().primary, "#ff6b35");
//! assert!(dna.gradients().primary.contains("#ff6b35"));
//! ```

use serde::{Deserialize, Serialize};

use crate::css::parse_hex_color;
use crate::dna::{Colors, Fonts};
use crate::error::{Error, Result};

/// Uses the override value unless it is missing or empty.
fn merge_field(value: &Option<String>, base: &str) -> String {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .unwrap_or(base)
        .to_string()
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}

// ============================================================================
// ColorOverride
// ============================================================================

/// Optional replacements for each of the six site colours.
///
/// Serializes with camelCase keys, omitting unset fields:
///
/// ```json
/// { "primary": "#ff6b35", "textOnPrimary": "#ffffff" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct ColorOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_on_primary: Option<String>,
}

impl ColorOverride {
    /// Applies this override field by field on top of `base`.
    pub fn merge_onto(&self, base: &Colors) -> Colors {
        Colors {
            primary: merge_field(&self.primary, &base.primary),
            secondary: merge_field(&self.secondary, &base.secondary),
            accent: merge_field(&self.accent, &base.accent),
            background: merge_field(&self.background, &base.background),
            text: merge_field(&self.text, &base.text),
            text_on_primary: merge_field(&self.text_on_primary, &base.text_on_primary),
        }
    }

    /// Returns true if no field carries a value.
    pub fn is_empty(&self) -> bool {
        [
            &self.primary,
            &self.secondary,
            &self.accent,
            &self.background,
            &self.text,
            &self.text_on_primary,
        ]
        .into_iter()
        .all(is_blank)
    }

    /// Checks that every set, non-empty field is a hex colour.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("accent", &self.accent),
            ("background", &self.background),
            ("text", &self.text),
            ("textOnPrimary", &self.text_on_primary),
        ];

        for (field, value) in fields {
            let Some(value) = value.as_deref().filter(|v| !v.is_empty()) else {
                continue;
            };
            parse_hex_color(value).map_err(|source| Error::InvalidColor {
                field,
                value: value.to_string(),
                source,
            })?;
        }
        Ok(())
    }
}

// ============================================================================
// FontOverride
// ============================================================================

/// Optional replacements for the heading and body font families.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct FontOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl FontOverride {
    /// Applies this override field by field on top of `base`.
    pub fn merge_onto(&self, base: &Fonts) -> Fonts {
        Fonts {
            heading: merge_field(&self.heading, &base.heading),
            body: merge_field(&self.body, &base.body),
        }
    }

    /// Returns true if neither family is set.
    pub fn is_empty(&self) -> bool {
        is_blank(&self.heading) && is_blank(&self.body)
    }
}

// ============================================================================
// DesignOverride
// ============================================================================

/// A partial design supplied from outside the resolver.
///
/// # JSON Format
///
/// ```json
/// {
///   "colors": { "primary": "#ff6b35", "accent": "#4ecdc4" },
///   "fonts": { "heading": "Sora" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct DesignOverride {
    /// Colour replacements. `None` keeps every resolved colour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<ColorOverride>,

    /// Font replacements. `None` keeps the resolved font pair.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fonts: Option<FontOverride>,
}

impl DesignOverride {
    /// Creates an override that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets colour replacements.
    pub fn with_colors(mut self, colors: ColorOverride) -> Self {
        self.colors = Some(colors);
        self
    }

    /// Sets font replacements.
    pub fn with_fonts(mut self, fonts: FontOverride) -> Self {
        self.fonts = Some(fonts);
        self
    }

    /// Builds an override that sets every colour and font field.
    pub(crate) fn from_parts(colors: &Colors, fonts: &Fonts) -> Self {
        Self::new()
            .with_colors(ColorOverride {
                primary: Some(colors.primary.clone()),
                secondary: Some(colors.secondary.clone()),
                accent: Some(colors.accent.clone()),
                background: Some(colors.background.clone()),
                text: Some(colors.text.clone()),
                text_on_primary: Some(colors.text_on_primary.clone()),
            })
            .with_fonts(FontOverride {
                heading: Some(fonts.heading.clone()),
                body: Some(fonts.body.clone()),
            })
    }

    /// Returns true if applying this override cannot change anything.
    pub fn is_empty(&self) -> bool {
        self.colors.as_ref().is_none_or(ColorOverride::is_empty)
            && self.fonts.as_ref().is_none_or(FontOverride::is_empty)
    }

    /// Checks that every supplied colour is a hex colour.
    pub fn validate(&self) -> Result<()> {
        match &self.colors {
            Some(colors) => colors.validate(),
            None => Ok(()),
        }
    }

    /// Serializes the override to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the override to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserializes an override from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_serialization_roundtrip() {
        let overrides = DesignOverride::new()
            .with_colors(ColorOverride {
                primary: Some("#ff6b35".into()),
                text_on_primary: Some("#1e293b".into()),
                ..Default::default()
            })
            .with_fonts(FontOverride {
                heading: Some("Sora".into()),
                body: None,
            });

        let json = overrides.to_json().unwrap();
        let restored = DesignOverride::from_json(&json).unwrap();

        assert_eq!(restored, overrides);
        assert_eq!(
            restored.colors.as_ref().unwrap().primary.as_deref(),
            Some("#ff6b35")
        );
        assert!(restored.fonts.as_ref().unwrap().body.is_none());
    }

    #[test]
    fn override_json_format() {
        let overrides = DesignOverride::new().with_colors(ColorOverride {
            text_on_primary: Some("#ffffff".into()),
            ..Default::default()
        });

        let json = overrides.to_json_pretty().unwrap();

        // camelCase keys, unset fields omitted
        assert!(json.contains("\"textOnPrimary\""));
        assert!(!json.contains("\"primary\""));
        assert!(!json.contains("\"fonts\""));
    }

    #[test]
    fn empty_override_deserializes() {
        let overrides = DesignOverride::from_json("{}").unwrap();
        assert!(overrides.colors.is_none());
        assert!(overrides.fonts.is_none());
        assert!(overrides.is_empty());
    }

    #[test]
    fn partial_nested_override_deserializes() {
        let json = r##"{ "colors": { "accent": "#4ecdc4" }, "fonts": { "body": "Lora" } }"##;
        let overrides = DesignOverride::from_json(json).unwrap();

        let colors = overrides.colors.as_ref().unwrap();
        assert_eq!(colors.accent.as_deref(), Some("#4ecdc4"));
        assert!(colors.primary.is_none());
        assert_eq!(
            overrides.fonts.as_ref().unwrap().body.as_deref(),
            Some("Lora")
        );
        assert!(!overrides.is_empty());
    }

    #[test]
    fn blank_values_count_as_empty() {
        let overrides = DesignOverride::new().with_colors(ColorOverride {
            primary: Some(String::new()),
            ..Default::default()
        });
        assert!(overrides.is_empty());
    }

    #[test]
    fn merge_falls_back_per_field() {
        let base = Fonts {
            heading: "Inter".into(),
            body: "Inter".into(),
        };
        let merged = FontOverride {
            heading: None,
            body: Some("Lora".into()),
        }
        .merge_onto(&base);

        assert_eq!(merged.heading, "Inter");
        assert_eq!(merged.body, "Lora");
    }

    #[test]
    fn validate_accepts_hex() {
        let overrides = DesignOverride::new().with_colors(ColorOverride {
            primary: Some("#ff6b35".into()),
            accent: Some("#fff".into()),
            text: Some(String::new()),
            ..Default::default()
        });
        assert!(overrides.validate().is_ok());
    }

    #[test]
    fn validate_rejects_non_hex() {
        let overrides = DesignOverride::new().with_colors(ColorOverride {
            secondary: Some("tomato".into()),
            ..Default::default()
        });

        let err = overrides.validate().unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidColor { field: "secondary", ref value, .. } if value == "tomato"
        ));
    }

    #[test]
    fn validate_rejects_non_ascii() {
        for value in ["#é1", "#ééé", "é"] {
            let overrides = DesignOverride::new().with_colors(ColorOverride {
                accent: Some(value.into()),
                ..Default::default()
            });
            assert!(matches!(
                overrides.validate(),
                Err(Error::InvalidColor { field: "accent", .. })
            ));
        }
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = DesignOverride::from_json("{ \"colors\": 3 }").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
