//! Colour palettes.

/// A fixed six-colour palette. Every field is a `#rrggbb` hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub background: &'static str,
    pub text: &'static str,
    /// Text colour used on top of `primary` fills.
    pub text_on_primary: &'static str,
}

impl Palette {
    const fn new(
        primary: &'static str,
        secondary: &'static str,
        accent: &'static str,
        background: &'static str,
        text: &'static str,
        text_on_primary: &'static str,
    ) -> Self {
        Self {
            primary,
            secondary,
            accent,
            background,
            text,
            text_on_primary,
        }
    }

    /// The six colours in field order.
    pub fn colors(&self) -> [&'static str; 6] {
        [
            self.primary,
            self.secondary,
            self.accent,
            self.background,
            self.text,
            self.text_on_primary,
        ]
    }
}

/// The palette catalog, grouped loosely by hue family.
pub const PALETTES: &[Palette] = &[
    // Blues
    Palette::new("#2563eb", "#1e40af", "#f59e0b", "#eff6ff", "#1e293b", "#ffffff"),
    Palette::new("#0ea5e9", "#0284c7", "#f97316", "#f0f9ff", "#0f172a", "#ffffff"),
    Palette::new("#3b82f6", "#2563eb", "#eab308", "#dbeafe", "#1e293b", "#ffffff"),
    // Greens
    Palette::new("#16a34a", "#15803d", "#f59e0b", "#f0fdf4", "#14532d", "#ffffff"),
    Palette::new("#22c55e", "#16a34a", "#ef4444", "#dcfce7", "#166534", "#ffffff"),
    Palette::new("#10b981", "#059669", "#8b5cf6", "#ecfdf5", "#064e3b", "#ffffff"),
    // Purples
    Palette::new("#8b5cf6", "#7c3aed", "#f59e0b", "#f5f3ff", "#4c1d95", "#ffffff"),
    Palette::new("#a855f7", "#9333ea", "#22c55e", "#faf5ff", "#581c87", "#ffffff"),
    Palette::new("#6366f1", "#4f46e5", "#f97316", "#eef2ff", "#3730a3", "#ffffff"),
    // Oranges
    Palette::new("#f97316", "#ea580c", "#3b82f6", "#fff7ed", "#7c2d12", "#ffffff"),
    Palette::new("#fb923c", "#f97316", "#8b5cf6", "#ffedd5", "#9a3412", "#1e293b"),
    Palette::new("#f59e0b", "#d97706", "#2563eb", "#fffbeb", "#78350f", "#1e293b"),
    // Reds
    Palette::new("#ef4444", "#dc2626", "#22c55e", "#fef2f2", "#7f1d1d", "#ffffff"),
    Palette::new("#f43f5e", "#e11d48", "#3b82f6", "#fff1f2", "#881337", "#ffffff"),
    // Teals
    Palette::new("#14b8a6", "#0d9488", "#f59e0b", "#f0fdfa", "#134e4a", "#ffffff"),
    Palette::new("#06b6d4", "#0891b2", "#f97316", "#ecfeff", "#164e63", "#ffffff"),
    // Pinks
    Palette::new("#ec4899", "#db2777", "#22c55e", "#fdf2f8", "#831843", "#ffffff"),
    Palette::new("#d946ef", "#c026d3", "#f59e0b", "#fdf4ff", "#701a75", "#ffffff"),
    // Cyans
    Palette::new("#22d3ee", "#06b6d4", "#f43f5e", "#cffafe", "#155e75", "#1e293b"),
    // Indigos
    Palette::new("#4f46e5", "#4338ca", "#f59e0b", "#e0e7ff", "#312e81", "#ffffff"),
    // Slates
    Palette::new("#475569", "#334155", "#3b82f6", "#f8fafc", "#0f172a", "#ffffff"),
    Palette::new("#64748b", "#475569", "#22c55e", "#f1f5f9", "#1e293b", "#ffffff"),
    // Warm
    Palette::new("#dc2626", "#b91c1c", "#fbbf24", "#fef9f9", "#450a0a", "#ffffff"),
    Palette::new("#ea580c", "#c2410c", "#84cc16", "#fffaf5", "#431407", "#ffffff"),
    // Cool
    Palette::new("#0369a1", "#075985", "#fbbf24", "#f0f9ff", "#0c4a6e", "#ffffff"),
    Palette::new("#0891b2", "#0e7490", "#f97316", "#ecfeff", "#155e75", "#ffffff"),
    // Nature
    Palette::new("#65a30d", "#4d7c0f", "#f59e0b", "#f7fee7", "#365314", "#ffffff"),
    Palette::new("#059669", "#047857", "#ec4899", "#ecfdf5", "#064e3b", "#ffffff"),
    // Mixed
    Palette::new("#7c3aed", "#6d28d9", "#10b981", "#f5f3ff", "#4c1d95", "#ffffff"),
    Palette::new("#2dd4bf", "#14b8a6", "#f43f5e", "#f0fdfa", "#115e59", "#1e293b"),
    Palette::new("#818cf8", "#6366f1", "#fbbf24", "#eef2ff", "#3730a3", "#ffffff"),
    Palette::new("#34d399", "#10b981", "#8b5cf6", "#d1fae5", "#065f46", "#1e293b"),
    Palette::new("#fbbf24", "#f59e0b", "#6366f1", "#fefce8", "#713f12", "#1e293b"),
    Palette::new("#38bdf8", "#0ea5e9", "#f43f5e", "#e0f2fe", "#0c4a6e", "#1e293b"),
    Palette::new("#c084fc", "#a855f7", "#22c55e", "#faf5ff", "#6b21a8", "#ffffff"),
    Palette::new("#fb7185", "#f43f5e", "#14b8a6", "#fff1f2", "#9f1239", "#ffffff"),
    Palette::new("#a3e635", "#84cc16", "#8b5cf6", "#f7fee7", "#3f6212", "#1e293b"),
    Palette::new("#facc15", "#eab308", "#7c3aed", "#fefce8", "#854d0e", "#1e293b"),
    Palette::new("#4ade80", "#22c55e", "#f43f5e", "#dcfce7", "#166534", "#1e293b"),
    Palette::new("#60a5fa", "#3b82f6", "#f97316", "#dbeafe", "#1e40af", "#ffffff"),
    // Deep tones
    Palette::new("#0d9488", "#0f766e", "#fbbf24", "#ccfbf1", "#134e4a", "#ffffff"),
    Palette::new("#7e22ce", "#6b21a8", "#22c55e", "#f3e8ff", "#581c87", "#ffffff"),
    Palette::new("#be123c", "#9f1239", "#fbbf24", "#ffe4e6", "#881337", "#ffffff"),
    Palette::new("#15803d", "#166534", "#f97316", "#bbf7d0", "#14532d", "#ffffff"),
    Palette::new("#1d4ed8", "#1e40af", "#fbbf24", "#bfdbfe", "#1e3a8a", "#ffffff"),
    Palette::new("#b45309", "#92400e", "#3b82f6", "#fef3c7", "#78350f", "#ffffff"),
    Palette::new("#0f766e", "#115e59", "#f43f5e", "#99f6e4", "#134e4a", "#ffffff"),
    Palette::new("#9333ea", "#7e22ce", "#f59e0b", "#e9d5ff", "#6b21a8", "#ffffff"),
    Palette::new("#dc2626", "#b91c1c", "#14b8a6", "#fecaca", "#7f1d1d", "#ffffff"),
    Palette::new("#ca8a04", "#a16207", "#8b5cf6", "#fef08a", "#713f12", "#1e293b"),
];

const _: () = assert!(!PALETTES.is_empty());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_palette_is_fully_populated_hex() {
        for palette in PALETTES {
            for color in palette.colors() {
                assert_eq!(color.len(), 7, "{color}");
                assert!(color.starts_with('#'));
                assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()), "{color}");
            }
        }
    }
}
