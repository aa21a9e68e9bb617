//! Decorative background pattern CSS.
//!
//! Patterns are tinted with the primary colour by appending a two-digit
//! alpha byte, so they expect a six-digit hex colour. The SVG patterns are
//! inlined as data URIs.

use crate::catalog::{BackgroundPattern, StyleOption};

const WAVE_PATH: &str = "M0,96L48,112C96,128,192,160,288,160C384,160,480,128,576,122.7\
C672,117,768,139,864,154.7C960,171,1056,181,1152,165.3C1248,149,1344,107,1392,85.3\
L1440,64L1440,320L1392,320C1344,320,1248,320,1152,320C1056,320,960,320,864,320\
C768,320,672,320,576,320C480,320,384,320,288,320C192,320,96,320,48,320L0,320Z";

const NOISE_CSS: &str = "background-image: url(\"data:image/svg+xml,\
%3Csvg viewBox='0 0 400 400' xmlns='http://www.w3.org/2000/svg'%3E\
%3Cfilter id='noiseFilter'%3E\
%3CfeTurbulence type='fractalNoise' baseFrequency='0.9' numOctaves='3' stitchTiles='stitch'/%3E\
%3C/filter%3E\
%3Crect width='100%25' height='100%25' filter='url(%23noiseFilter)'/%3E\
%3C/svg%3E\"); opacity: 0.05;";

/// Returns the CSS declarations that draw `pattern` tinted with `primary`.
///
/// [`BackgroundPattern::None`] yields an empty string.
pub fn background_pattern_css(pattern: BackgroundPattern, primary: &str) -> String {
    match pattern {
        BackgroundPattern::None => String::new(),
        BackgroundPattern::Dots => format!(
            "background-image: radial-gradient({primary}20 1px, transparent 1px); \
             background-size: 20px 20px;"
        ),
        BackgroundPattern::Grid => format!(
            "background-image: linear-gradient({primary}10 1px, transparent 1px), \
             linear-gradient(90deg, {primary}10 1px, transparent 1px); \
             background-size: 40px 40px;"
        ),
        BackgroundPattern::Waves => format!(
            "background-image: url(\"data:image/svg+xml,\
             %3Csvg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 1440 320'%3E\
             %3Cpath fill='{fill}' fill-opacity='0.1' d='{WAVE_PATH}'%3E%3C/path%3E\
             %3C/svg%3E\");",
            fill = urlencoding::encode(primary),
        ),
        BackgroundPattern::GradientMesh => format!(
            "background: radial-gradient(at 40% 20%, {primary}30 0px, transparent 50%), \
             radial-gradient(at 80% 0%, {primary}20 0px, transparent 50%), \
             radial-gradient(at 0% 50%, {primary}25 0px, transparent 50%);"
        ),
        BackgroundPattern::Noise => NOISE_CSS.to_string(),
    }
}

/// Like [`background_pattern_css`] but takes the pattern's token.
///
/// Unknown tokens yield an empty string.
pub fn background_pattern_css_for_kind(kind: &str, primary: &str) -> String {
    match BackgroundPattern::parse_token(kind) {
        Ok(pattern) => background_pattern_css(pattern, primary),
        Err(err) => {
            tracing::debug!(error = %err, "no background pattern");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRIMARY: &str = "#2563eb";

    #[test]
    fn none_is_empty() {
        assert_eq!(background_pattern_css(BackgroundPattern::None, PRIMARY), "");
    }

    #[test]
    fn dots_and_grid() {
        assert_eq!(
            background_pattern_css(BackgroundPattern::Dots, PRIMARY),
            "background-image: radial-gradient(#2563eb20 1px, transparent 1px); \
             background-size: 20px 20px;"
        );
        let grid = background_pattern_css(BackgroundPattern::Grid, PRIMARY);
        assert!(grid.starts_with("background-image: linear-gradient(#2563eb10 1px"));
        assert!(grid.contains("linear-gradient(90deg, #2563eb10 1px, transparent 1px)"));
        assert!(grid.ends_with("background-size: 40px 40px;"));
    }

    #[test]
    fn waves_encode_the_fill() {
        let waves = background_pattern_css(BackgroundPattern::Waves, PRIMARY);
        assert!(waves.contains("fill='%232563eb' fill-opacity='0.1'"));
        assert!(waves.contains("d='M0,96L48,112C96,128"));
        assert!(waves.contains("L0,320Z'%3E%3C/path%3E%3C/svg%3E\");"));
        assert!(!waves.contains('#'));

        let waves = background_pattern_css(BackgroundPattern::Waves, "rgb(1, 2, 3)");
        assert!(waves.contains("fill='rgb%281%2C%202%2C%203%29'"));
    }

    #[test]
    fn gradient_mesh_stops() {
        let mesh = background_pattern_css(BackgroundPattern::GradientMesh, PRIMARY);
        assert!(mesh.starts_with("background: radial-gradient(at 40% 20%, #2563eb30 0px"));
        assert!(mesh.contains("radial-gradient(at 80% 0%, #2563eb20 0px, transparent 50%)"));
        assert!(mesh.contains("radial-gradient(at 0% 50%, #2563eb25 0px, transparent 50%);"));
    }

    #[test]
    fn noise_is_fixed_and_faint() {
        let noise = background_pattern_css(BackgroundPattern::Noise, PRIMARY);
        assert_eq!(noise, background_pattern_css(BackgroundPattern::Noise, "#000000"));
        assert!(noise.contains("feTurbulence type='fractalNoise'"));
        assert!(noise.ends_with("opacity: 0.05;"));
    }

    #[test]
    fn lookup_by_kind() {
        assert_eq!(
            background_pattern_css_for_kind("dots", PRIMARY),
            background_pattern_css(BackgroundPattern::Dots, PRIMARY)
        );
        assert_eq!(background_pattern_css_for_kind("stripes", PRIMARY), "");
        assert_eq!(background_pattern_css_for_kind("", PRIMARY), "");
    }
}
