//! Per-axis CSS class tokens for advanced layouts.
//!
//! Each visually classed axis maps to a single class of the form
//! `<prefix>-<token>`, e.g. `hero-split-left` or `btn-3d`. Basic descriptors
//! have no structural axes and produce an empty map.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::StyleOption;
use crate::dna::{AdvancedLayout, DesignDna};

/// The element a class token is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub enum ClassSlot {
    #[serde(rename = "heroClass")]
    Hero,
    #[serde(rename = "cardContainerClass")]
    CardContainer,
    #[serde(rename = "navClass")]
    Nav,
    #[serde(rename = "footerClass")]
    Footer,
    #[serde(rename = "animationClass")]
    Animation,
    #[serde(rename = "backgroundClass")]
    Background,
    #[serde(rename = "buttonClass")]
    Button,
    #[serde(rename = "imageClass")]
    Image,
    #[serde(rename = "ctaClass")]
    Cta,
}

impl ClassSlot {
    pub const ALL: &'static [Self] = &[
        Self::Hero,
        Self::CardContainer,
        Self::Nav,
        Self::Footer,
        Self::Animation,
        Self::Background,
        Self::Button,
        Self::Image,
        Self::Cta,
    ];

    /// The class-name prefix for this slot.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::CardContainer => "cards",
            Self::Nav => "nav",
            Self::Footer => "footer",
            Self::Animation => "animate",
            Self::Background => "bg-pattern",
            Self::Button => "btn",
            Self::Image => "img",
            Self::Cta => "cta",
        }
    }

    /// The key used for this slot in serialized class maps.
    pub fn key(self) -> &'static str {
        match self {
            Self::Hero => "heroClass",
            Self::CardContainer => "cardContainerClass",
            Self::Nav => "navClass",
            Self::Footer => "footerClass",
            Self::Animation => "animationClass",
            Self::Background => "backgroundClass",
            Self::Button => "buttonClass",
            Self::Image => "imageClass",
            Self::Cta => "ctaClass",
        }
    }

    /// The selected token for this slot's axis.
    fn token(self, layout: &AdvancedLayout) -> &'static str {
        match self {
            Self::Hero => layout.hero_variant.as_str(),
            Self::CardContainer => layout.card_layout.as_str(),
            Self::Nav => layout.nav_style.as_str(),
            Self::Footer => layout.footer_style.as_str(),
            Self::Animation => layout.animation_style.as_str(),
            Self::Background => layout.background_pattern.as_str(),
            Self::Button => layout.button_style.as_str(),
            Self::Image => layout.image_style.as_str(),
            Self::Cta => layout.cta_placement.as_str(),
        }
    }
}

impl std::fmt::Display for ClassSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Class tokens keyed by slot, in a stable order.
pub type LayoutClasses = BTreeMap<ClassSlot, String>;

/// Builds the class token for every slot of an advanced layout.
pub fn classes_for_layout(layout: &AdvancedLayout) -> LayoutClasses {
    ClassSlot::ALL
        .iter()
        .map(|&slot| (slot, format!("{}-{}", slot.prefix(), slot.token(layout))))
        .collect()
}

/// Builds the class tokens for a descriptor; empty unless it is advanced.
pub fn layout_classes(dna: &DesignDna) -> LayoutClasses {
    dna.advanced_layout()
        .map(classes_for_layout)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dna::DesignMode;

    #[test]
    fn basic_mode_has_no_classes() {
        let dna = DesignDna::resolve("example.com", "free government phone", DesignMode::Basic);
        assert!(layout_classes(&dna).is_empty());
    }

    #[test]
    fn advanced_classes_by_hand() {
        let dna = DesignDna::resolve("example.com", "free government phone", DesignMode::Advanced);
        let classes = layout_classes(&dna);

        assert_eq!(classes.len(), 9);
        assert_eq!(classes[&ClassSlot::Hero], "hero-centered");
        assert_eq!(classes[&ClassSlot::CardContainer], "cards-carousel");
        assert_eq!(classes[&ClassSlot::Nav], "nav-floating");
        assert_eq!(classes[&ClassSlot::Footer], "footer-centered");
        assert_eq!(classes[&ClassSlot::Animation], "animate-subtle");
        assert_eq!(classes[&ClassSlot::Background], "bg-pattern-dots");
        assert_eq!(classes[&ClassSlot::Button], "btn-outline");
        assert_eq!(classes[&ClassSlot::Image], "img-rounded");
        assert_eq!(classes[&ClassSlot::Cta], "cta-sidebar");
    }

    #[test]
    fn multi_word_tokens_keep_hyphens() {
        let dna = DesignDna::resolve("example.com", "free government phone", DesignMode::Advanced);
        let mut layout = *dna.advanced_layout().unwrap();
        layout.button_style = crate::catalog::ButtonStyle::ThreeD;
        layout.background_pattern = crate::catalog::BackgroundPattern::GradientMesh;

        let classes = classes_for_layout(&layout);
        assert_eq!(classes[&ClassSlot::Button], "btn-3d");
        assert_eq!(classes[&ClassSlot::Background], "bg-pattern-gradient-mesh");
    }

    #[test]
    fn serializes_with_slot_keys() {
        let dna = DesignDna::resolve("example.com", "free government phone", DesignMode::Advanced);
        let json = serde_json::to_value(layout_classes(&dna)).unwrap();

        assert_eq!(json["heroClass"], "hero-centered");
        assert_eq!(json["cardContainerClass"], "cards-carousel");
        assert_eq!(json["ctaClass"], "cta-sidebar");
        for slot in ClassSlot::ALL {
            assert!(json.get(slot.key()).is_some(), "missing {slot}");
        }
    }
}
