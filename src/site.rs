//! Per-site configuration and its memoized design.
//!
//! A deployed site is described by a [`SiteConfig`] record written at build
//! time. [`SiteDesign`] resolves that record's identity once, applies any
//! stored override, and hands out the derived CSS artifacts.
//!
//! # Example
//!
//! ```
//! use design_dna::{DesignMode, SiteDesign};
//!
//! let site = SiteDesign::from_json(r#"{
//!     "domain": "superring.net",
//!     "siteName": "Adad",
//!     "keyword": "Free Government Phone",
//!     "designStyle": "advanced"
//! }"#).unwrap();
//!
//! assert_eq!(site.config().site_url(), "https://superring.net");
//! assert_eq!(site.dna().mode(), DesignMode::Advanced);
//! assert!(site.css_variables().contains("--border-radius"));
//! ```

use std::fmt::Display;
use std::str::FromStr;

use once_cell::sync::OnceCell;
use serde::{Deserialize, Deserializer, Serialize};

use crate::classes::{LayoutClasses, layout_classes};
use crate::css::{css_variables, google_fonts_url};
use crate::dna::{DesignDna, DesignMode};
use crate::error::Result;
use crate::overrides::DesignOverride;
use crate::pattern::background_pattern_css;

const DEFAULT_DOMAIN: &str = "example.com";
const DEFAULT_SITE_NAME: &str = "Free Phone Service";
const DEFAULT_KEYWORD: &str = "Free Government Phone";
const DEFAULT_KEYWORD_ID: &str = "free-government-phone";
const DEFAULT_OWNER_EMAIL: &str = "admin@example.com";
const DEFAULT_VERSION: &str = "1.0.0";

/// Deserializes a string-backed value, treating an empty string as absent.
fn blank_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
    T::Err: Display,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(value) if !value.is_empty() => value.parse().map_err(serde::de::Error::custom),
        _ => Ok(T::default()),
    }
}

fn fill_blank(field: &mut String, default: &str) {
    if field.is_empty() {
        *field = default.to_string();
    }
}

// ============================================================================
// Environment
// ============================================================================

/// Deployment stage of a site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub enum Environment {
    #[default]
    Staging,
    Production,
}

impl Environment {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Staging => "staging",
            Self::Production => "production",
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "staging" => Ok(Self::Staging),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "unknown environment `{other}` (expected `staging` or `production`)"
            )),
        }
    }
}

// ============================================================================
// Content
// ============================================================================

/// Copy overrides for the homepage.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct HomepageContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Site copy overrides, keyed by page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct ContentConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<HomepageContent>,
}

// ============================================================================
// SiteConfig
// ============================================================================

/// The build-time record for one deployed site.
///
/// Missing or empty fields take the default record's value, so `{}` is a
/// valid configuration for `example.com`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct SiteConfig {
    pub domain: String,
    pub site_name: String,
    /// Display form of the target keyword; also a hash input.
    pub keyword: String,
    /// Slug used to pick content variations, e.g. `free-government-phone`.
    pub keyword_id: String,
    pub keyword_label: String,
    pub owner_email: String,
    #[serde(deserialize_with = "blank_as_default")]
    pub design_style: DesignMode,
    /// Stored override applied on top of the resolved design.
    #[serde(rename = "designDNA", alias = "designDna", skip_serializing_if = "Option::is_none")]
    pub design_dna: Option<DesignOverride>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<ContentConfig>,
    #[serde(deserialize_with = "blank_as_default")]
    pub environment: Environment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    pub version: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            domain: DEFAULT_DOMAIN.to_string(),
            site_name: DEFAULT_SITE_NAME.to_string(),
            keyword: DEFAULT_KEYWORD.to_string(),
            keyword_id: DEFAULT_KEYWORD_ID.to_string(),
            keyword_label: DEFAULT_KEYWORD.to_string(),
            owner_email: DEFAULT_OWNER_EMAIL.to_string(),
            design_style: DesignMode::Basic,
            design_dna: None,
            content: None,
            environment: Environment::Staging,
            created_at: None,
            version: DEFAULT_VERSION.to_string(),
        }
    }
}

impl SiteConfig {
    /// Parses a configuration record, filling blank fields with defaults
    /// and checking any stored override colours.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut config: Self = serde_json::from_str(json)?;
        config.fill_defaults();
        if let Some(overrides) = &config.design_dna {
            overrides.validate()?;
        }
        Ok(config)
    }

    /// Serializes the record to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Replaces empty string fields with the default record's values.
    pub fn fill_defaults(&mut self) {
        fill_blank(&mut self.domain, DEFAULT_DOMAIN);
        fill_blank(&mut self.site_name, DEFAULT_SITE_NAME);
        fill_blank(&mut self.keyword, DEFAULT_KEYWORD);
        fill_blank(&mut self.keyword_id, DEFAULT_KEYWORD_ID);
        fill_blank(&mut self.keyword_label, DEFAULT_KEYWORD);
        fill_blank(&mut self.owner_email, DEFAULT_OWNER_EMAIL);
        fill_blank(&mut self.version, DEFAULT_VERSION);
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn site_name(&self) -> &str {
        &self.site_name
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn keyword_id(&self) -> &str {
        &self.keyword_id
    }

    pub fn keyword_label(&self) -> &str {
        &self.keyword_label
    }

    pub fn owner_email(&self) -> &str {
        &self.owner_email
    }

    pub fn design_mode(&self) -> DesignMode {
        self.design_style
    }

    pub fn site_url(&self) -> String {
        format!("https://{}", self.domain)
    }

    /// Homepage H1 override, if configured.
    pub fn homepage_h1(&self) -> Option<&str> {
        self.homepage()?.h1.as_deref()
    }

    /// Homepage meta description override, if configured.
    pub fn homepage_description(&self) -> Option<&str> {
        self.homepage()?.description.as_deref()
    }

    fn homepage(&self) -> Option<&HomepageContent> {
        self.content.as_ref()?.homepage.as_ref()
    }

    /// Resolves this site's design and applies its stored override.
    ///
    /// Recomputes on every call; use [`SiteDesign`] to keep the result.
    pub fn resolve_design(&self) -> DesignDna {
        let base = DesignDna::resolve(&self.domain, &self.keyword, self.design_style);
        match &self.design_dna {
            Some(overrides) if !overrides.is_empty() => base.with_override(overrides),
            _ => base,
        }
    }
}

// ============================================================================
// SiteDesign
// ============================================================================

/// A site's configuration plus its lazily resolved design.
///
/// The design is computed on first access and reused afterwards. Shared
/// references may be used from several threads; the resolution runs once.
#[derive(Debug)]
pub struct SiteDesign {
    config: SiteConfig,
    dna: OnceCell<DesignDna>,
}

impl SiteDesign {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config,
            dna: OnceCell::new(),
        }
    }

    /// Parses a configuration record; see [`SiteConfig::from_json`].
    pub fn from_json(json: &str) -> Result<Self> {
        SiteConfig::from_json(json).map(Self::new)
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// The resolved, override-merged design.
    pub fn dna(&self) -> &DesignDna {
        self.dna.get_or_init(|| {
            tracing::debug!(
                domain = %self.config.domain,
                mode = %self.config.design_style,
                "resolving site design"
            );
            self.config.resolve_design()
        })
    }

    pub fn css_variables(&self) -> String {
        css_variables(self.dna())
    }

    pub fn google_fonts_url(&self) -> String {
        google_fonts_url(self.dna().fonts())
    }

    pub fn layout_classes(&self) -> LayoutClasses {
        layout_classes(self.dna())
    }

    /// CSS for the site's background pattern; empty in basic mode.
    pub fn background_pattern_css(&self) -> String {
        let dna = self.dna();
        match dna.advanced_layout() {
            Some(layout) => background_pattern_css(layout.background_pattern, &dna.colors().primary),
            None => String::new(),
        }
    }

    pub fn into_config(self) -> SiteConfig {
        self.config
    }
}

impl From<SiteConfig> for SiteDesign {
    fn from(config: SiteConfig) -> Self {
        Self::new(config)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const SUPERRING: &str = r#"{
        "domain": "superring.net",
        "siteName": "Adad",
        "keyword": "Free Government Phone",
        "keywordId": "free-government-phone",
        "keywordLabel": "Free Government Phone",
        "ownerEmail": "owner@superring.net",
        "designStyle": "advanced",
        "environment": "staging",
        "createdAt": "2025-12-09T19:16:53.185Z",
        "version": "1.0.0"
    }"#;

    #[test]
    fn empty_record_uses_defaults() {
        let config = SiteConfig::from_json("{}").unwrap();

        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.domain(), "example.com");
        assert_eq!(config.site_name(), "Free Phone Service");
        assert_eq!(config.keyword(), "Free Government Phone");
        assert_eq!(config.keyword_id(), "free-government-phone");
        assert_eq!(config.owner_email(), "admin@example.com");
        assert_eq!(config.design_mode(), DesignMode::Basic);
        assert_eq!(config.environment, Environment::Staging);
        assert_eq!(config.version, "1.0.0");
        assert_eq!(config.site_url(), "https://example.com");
    }

    #[test]
    fn blank_fields_use_defaults() {
        let config = SiteConfig::from_json(
            r#"{ "domain": "", "siteName": "", "designStyle": "", "environment": "" }"#,
        )
        .unwrap();

        assert_eq!(config.domain(), "example.com");
        assert_eq!(config.site_name(), "Free Phone Service");
        assert_eq!(config.design_mode(), DesignMode::Basic);
        assert_eq!(config.environment, Environment::Staging);
    }

    #[test]
    fn full_record_parses() {
        let config = SiteConfig::from_json(SUPERRING).unwrap();

        assert_eq!(config.domain(), "superring.net");
        assert_eq!(config.site_name(), "Adad");
        assert_eq!(config.design_mode(), DesignMode::Advanced);
        assert_eq!(config.created_at.as_deref(), Some("2025-12-09T19:16:53.185Z"));
        assert!(config.design_dna.is_none());
        assert!(config.homepage_h1().is_none());
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let err = SiteConfig::from_json(r#"{ "designStyle": "fancy" }"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("fancy"));
    }

    #[test]
    fn homepage_content() {
        let config = SiteConfig::from_json(
            r#"{ "content": { "homepage": { "h1": "Get Connected Today" } } }"#,
        )
        .unwrap();

        assert_eq!(config.homepage_h1(), Some("Get Connected Today"));
        assert!(config.homepage_description().is_none());
    }

    #[test]
    fn stored_override_is_applied() {
        let site = SiteDesign::from_json(
            r##"{
                "domain": "example.com",
                "keyword": "free government phone",
                "designDNA": {
                    "colors": { "primary": "#ff6b35", "accent": "" },
                    "fonts": { "heading": "Sora" }
                }
            }"##,
        )
        .unwrap();
        let dna = site.dna();

        assert_eq!(dna.colors().primary, "#ff6b35");
        assert_eq!(dna.colors().accent, "#f59e0b");
        assert_eq!(dna.fonts().heading, "Sora");
        assert_eq!(dna.fonts().body, "Lato");
        assert!(dna.gradients().primary.starts_with("linear-gradient(135deg, #ff6b35 0%"));
        assert!(site.css_variables().contains("--color-primary: #ff6b35;"));
    }

    #[test]
    fn invalid_override_color_is_rejected() {
        let err = SiteConfig::from_json(r#"{ "designDNA": { "colors": { "text": "dark" } } }"#)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidColor { field: "text", .. }));
    }

    #[test]
    fn non_ascii_override_color_is_rejected() {
        let err = SiteConfig::from_json(r##"{ "designDNA": { "colors": { "text": "#é1" } } }"##)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidColor { field: "text", ref value, .. } if value == "#é1"
        ));
    }

    #[test]
    fn design_is_memoized() {
        let site = SiteDesign::from_json(SUPERRING).unwrap();
        let first: *const DesignDna = site.dna();
        let second: *const DesignDna = site.dna();

        assert_eq!(first, second);
        assert_eq!(
            site.dna(),
            &DesignDna::resolve("superring.net", "Free Government Phone", DesignMode::Advanced)
        );
    }

    #[test]
    fn shared_across_threads() {
        let site = SiteDesign::from_json(SUPERRING).unwrap();
        let expected = site.config().resolve_design();

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4).map(|_| scope.spawn(|| site.dna().clone())).collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }

    #[test]
    fn artifacts_follow_mode() {
        let basic = SiteDesign::new(SiteConfig::default());
        assert!(basic.layout_classes().is_empty());
        assert_eq!(basic.background_pattern_css(), "");
        assert!(basic.google_fonts_url().starts_with("https://fonts.googleapis.com/css2?family="));

        let advanced = SiteDesign::from_json(SUPERRING).unwrap();
        assert_eq!(advanced.layout_classes().len(), 9);
    }

    #[test]
    fn config_roundtrip() {
        let config = SiteConfig::from_json(SUPERRING).unwrap();
        let json = config.to_json_pretty().unwrap();

        assert!(json.contains("\"siteName\": \"Adad\""));
        assert!(json.contains("\"designStyle\": \"advanced\""));
        assert!(!json.contains("designDNA"));
        assert_eq!(SiteConfig::from_json(&json).unwrap(), config);
    }
}
