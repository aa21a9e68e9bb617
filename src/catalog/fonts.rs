//! Heading/body font pairs.

/// A heading and body font family. The two may be the same family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontPair {
    pub heading: &'static str,
    pub body: &'static str,
}

impl FontPair {
    const fn new(heading: &'static str, body: &'static str) -> Self {
        Self { heading, body }
    }
}

/// The font pair catalog. All families are available from Google Fonts.
pub const FONT_PAIRS: &[FontPair] = &[
    FontPair::new("Inter", "Inter"),
    FontPair::new("Poppins", "Open Sans"),
    FontPair::new("Montserrat", "Lato"),
    FontPair::new("Playfair Display", "Source Sans Pro"),
    FontPair::new("Raleway", "Roboto"),
    FontPair::new("Oswald", "Merriweather"),
    FontPair::new("Nunito", "Nunito Sans"),
    FontPair::new("DM Sans", "DM Sans"),
    FontPair::new("Work Sans", "Work Sans"),
    FontPair::new("Rubik", "Karla"),
    FontPair::new("Quicksand", "Quicksand"),
    FontPair::new("Josefin Sans", "Lora"),
    FontPair::new("Cabin", "Cabin"),
    FontPair::new("Mulish", "Mulish"),
    FontPair::new("Barlow", "Barlow"),
    FontPair::new("Manrope", "Manrope"),
    FontPair::new("Outfit", "Outfit"),
    FontPair::new("Plus Jakarta Sans", "Plus Jakarta Sans"),
    FontPair::new("Sora", "Sora"),
    FontPair::new("Urbanist", "Urbanist"),
    FontPair::new("Figtree", "Figtree"),
    FontPair::new("Lexend", "Lexend"),
    FontPair::new("Be Vietnam Pro", "Be Vietnam Pro"),
    FontPair::new("Red Hat Display", "Red Hat Text"),
    FontPair::new("Space Grotesk", "Space Grotesk"),
    FontPair::new("Albert Sans", "Albert Sans"),
    FontPair::new("Epilogue", "Epilogue"),
    FontPair::new("General Sans", "General Sans"),
    FontPair::new("Satoshi", "Satoshi"),
    FontPair::new("Clash Display", "Clash Grotesk"),
];

const _: () = assert!(!FONT_PAIRS.is_empty());
