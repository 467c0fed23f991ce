//! Error types for switch configuration.

use crate::image_switch::Side;
use switchkit_core::ColorParseError;
use thiserror::Error;

/// Errors raised while loading a [`SwitchConfig`](crate::SwitchConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML parsing error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A color field is not a valid hex color.
    #[error("invalid color for '{field}': {value:?}")]
    InvalidColor {
        /// Field name
        field: String,
        /// Raw value
        value: String,
        /// Parse failure
        #[source]
        source: ColorParseError,
    },

    /// Both text and an image were given for one side.
    #[error("{side} side has both text and an image")]
    ConflictingContent {
        /// Offending side
        side: Side,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_invalid_color_message_and_source() {
        let err = ConfigError::InvalidColor {
            field: "on_tint_color".into(),
            value: "#zz".into(),
            source: ColorParseError::InvalidHex,
        };
        assert!(err.to_string().contains("on_tint_color"));
        assert!(err.to_string().contains("#zz"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_conflicting_content_message() {
        let err = ConfigError::ConflictingContent { side: Side::Off };
        assert_eq!(err.to_string(), "off side has both text and an image");
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: ConfigError = json_err.into();
        assert!(matches!(err, ConfigError::Json(_)));
        assert!(err.to_string().starts_with("JSON error"));
    }
}
