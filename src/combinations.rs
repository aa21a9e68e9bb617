//! Size of the identity space.

use crate::catalog::{
    AnimationStyle, BackgroundPattern, BorderRadius, ButtonStyle, CardLayout, CardStyle,
    CtaPlacement, CtaStyle, FONT_PAIRS, FooterStyle, HeroStyle, HeroVariant, ImageStyle,
    NavStyle, PALETTES, SECTION_ORDERS, ShadowStyle, SpacingScale, StyleOption, TypographyScale,
};
use crate::dna::DesignMode;

/// Number of distinct identities `mode` can produce.
///
/// Basic mode multiplies palettes, font pairs and the three basic layout
/// axes. Advanced mode multiplies palettes, font pairs, the thirteen
/// structural axes and the section orders; the basic layout axes are left
/// out of the advanced count.
pub fn unique_combinations(mode: DesignMode) -> u64 {
    match mode {
        DesignMode::Basic => product(&[
            PALETTES.len(),
            FONT_PAIRS.len(),
            HeroStyle::ALL.len(),
            CardStyle::ALL.len(),
            CtaStyle::ALL.len(),
        ]),
        DesignMode::Advanced => product(&[
            PALETTES.len(),
            FONT_PAIRS.len(),
            HeroVariant::ALL.len(),
            CardLayout::ALL.len(),
            NavStyle::ALL.len(),
            FooterStyle::ALL.len(),
            SpacingScale::ALL.len(),
            AnimationStyle::ALL.len(),
            BorderRadius::ALL.len(),
            ShadowStyle::ALL.len(),
            BackgroundPattern::ALL.len(),
            CtaPlacement::ALL.len(),
            TypographyScale::ALL.len(),
            ImageStyle::ALL.len(),
            ButtonStyle::ALL.len(),
            SECTION_ORDERS.len(),
        ]),
    }
}

fn product(sizes: &[usize]) -> u64 {
    sizes.iter().map(|&len| len as u64).product()
}
