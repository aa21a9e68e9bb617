//! Fixed style catalogs.
//!
//! A catalog is an ordered, immutable list of entries for one style
//! category. Selection is always `seed % len`, so any seed maps to a valid
//! entry. Catalog order is part of the output contract: reordering or
//! resizing a catalog changes the identity of every site that indexes it.
//!
//! Enumerated axes implement [`StyleOption`], which ties each enum to its
//! catalog slice and its serialized token.

/// Declares a closed style axis: the enum, its catalog and its tokens.
macro_rules! style_axis {
    (
        $(#[$meta:meta])*
        $name:ident: $axis:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $token:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
        #[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $token)]
                $variant,
            )+
        }

        impl $crate::catalog::StyleOption for $name {
            const AXIS: &'static str = $axis;
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $token,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::catalog::StyleOption::as_str(*self))
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::Error;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                <Self as $crate::catalog::StyleOption>::parse_token(s)
            }
        }
    };
}

mod fonts;
mod layout;
mod palettes;
mod sections;

pub use fonts::{FONT_PAIRS, FontPair};
pub use layout::{
    AnimationStyle, BackgroundPattern, BorderRadius, ButtonStyle, CardLayout, CardStyle,
    CtaPlacement, CtaStyle, FooterStyle, HeroStyle, HeroVariant, ImageStyle, NavStyle,
    ShadowStyle, SpacingScale, TypographyScale,
};
pub use palettes::{PALETTES, Palette};
pub use sections::{SECTION_ORDERS, Section, SectionOrder};

use crate::error::{Error, Result};

// ============================================================================
// StyleOption
// ============================================================================

/// An enumerated style axis backed by a fixed catalog.
pub trait StyleOption: Copy + PartialEq + 'static {
    /// Axis name used in error messages and logs.
    const AXIS: &'static str;

    /// Every value of the axis, in catalog order.
    const ALL: &'static [Self];

    /// The token used in class names and serialized output.
    fn as_str(self) -> &'static str;

    /// Selects the catalog entry for `seed`.
    fn select(seed: u64) -> Self {
        pick(Self::ALL, seed)
    }

    /// Position of this value within [`ALL`](Self::ALL).
    fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|candidate| *candidate == self)
            .unwrap_or_default()
    }

    /// Parses a catalog token.
    fn parse_token(token: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|candidate| candidate.as_str() == token)
            .ok_or_else(|| Error::UnknownStyle {
                axis: Self::AXIS,
                value: token.to_string(),
            })
    }
}

/// Reduces `seed` to an index into a catalog of `len` entries.
///
/// `len` must be non-zero; every catalog in this crate is.
pub fn index_for(seed: u64, len: usize) -> usize {
    debug_assert!(len > 0, "catalogs are never empty");
    (seed % len as u64) as usize
}

/// Picks the catalog entry for `seed`.
pub fn pick<T: Copy>(catalog: &[T], seed: u64) -> T {
    catalog[index_for(seed, catalog.len())]
}
