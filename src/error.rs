//! Error type for the fallible edges of the crate.
//!
//! Resolution and the CSS derivations are total; errors only arise when
//! parsing text into typed values (modes, axis tokens, colours, config).

use palette::rgb::FromHexError;

/// Errors produced while parsing inputs into design types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A design mode string other than `basic` or `advanced`.
    #[error("unknown design mode `{0}` (expected `basic` or `advanced`)")]
    UnknownMode(String),

    /// A token that is not part of the named axis catalog.
    #[error("unknown {axis} value `{value}`")]
    UnknownStyle {
        /// Axis the token was parsed for.
        axis: &'static str,
        /// The rejected token.
        value: String,
    },

    /// An override colour that is not a hex colour.
    #[error("invalid color `{value}` for {field}")]
    InvalidColor {
        /// Colour field the value was supplied for.
        field: &'static str,
        /// The rejected value.
        value: String,
        #[source]
        source: FromHexError,
    },

    /// Malformed configuration or override JSON.
    #[error("malformed configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result alias defaulting to [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
