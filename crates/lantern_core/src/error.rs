//! Error types for the Lantern context menu engine.
//!
//! Configuration problems (missing or malformed layout properties) and host
//! programming errors (showing a menu on an unmounted layer) surface here as
//! values instead of being absorbed into a broken layout.

use thiserror::Error;

/// Main error type for Lantern.
#[derive(Debug, Error)]
pub enum LanternError {
    /// A required layout custom property is not defined by the style source.
    #[error("Missing style property: {property}")]
    MissingStyleProperty {
        /// Name of the custom property, including the leading `--`.
        property: String,
    },

    /// A layout custom property is defined but cannot be used.
    #[error("Invalid style property {property} = {value:?}: {reason}")]
    InvalidStyleProperty {
        /// Name of the custom property.
        property: String,
        /// Raw value as read from the style source.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// `show` was called while no overlay is mounted.
    #[error("Context menu layer is not mounted")]
    LayerMissing,

    /// Local file storage error.
    #[error("Storage error: {message}")]
    Storage {
        /// Human-readable error message.
        message: String,
        /// Actionable hint for the user.
        hint: Option<String>,
        /// Optional underlying error source.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration error.
    #[error("Config error: {message}")]
    Config {
        /// Human-readable error message.
        message: String,
    },
}

impl LanternError {
    // ========== Constructors ==========

    /// Create a missing style property error.
    pub fn missing_style_property(property: impl Into<String>) -> Self {
        Self::MissingStyleProperty { property: property.into() }
    }

    /// Create an invalid style property error.
    pub fn invalid_style_property(
        property: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidStyleProperty {
            property: property.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a new config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config { message: message.into() }
    }

    // ========== Methods ==========

    /// Check if this error comes from the layout style properties.
    pub fn is_style_error(&self) -> bool {
        matches!(self, Self::MissingStyleProperty { .. } | Self::InvalidStyleProperty { .. })
    }

    /// Get the error category name.
    pub fn category(&self) -> &'static str {
        match self {
            Self::MissingStyleProperty { .. } | Self::InvalidStyleProperty { .. } => "Style",
            Self::LayerMissing => "Layer",
            Self::Storage { .. } => "Storage",
            Self::Config { .. } => "Config",
        }
    }

    /// Get actionable hint for the developer or user.
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::MissingStyleProperty { .. } => {
                Some("Define the property in the active theme's menu style")
            }
            Self::InvalidStyleProperty { .. } => Some("Use a plain number or a pixel value"),
            Self::LayerMissing => Some("Mount the context menu layer before showing menus"),
            Self::Storage { hint, .. } => hint.as_deref(),
            Self::Config { .. } => None,
        }
    }

    /// Convert to user-displayable error info.
    pub fn to_error_info(&self) -> ErrorInfo {
        let technical_detail = match self {
            Self::MissingStyleProperty { property } => Some(format!("Property: {property}")),
            Self::InvalidStyleProperty { property, value, .. } => {
                Some(format!("Property: {property}\nValue: {value}"))
            }
            _ => None,
        };

        ErrorInfo {
            error_type: format!("{} Error", self.category()),
            message: self.to_string(),
            hint: self.hint().map(String::from),
            technical_detail,
        }
    }
}

/// User-displayable error information.
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Category name (e.g., "Style Error").
    pub error_type: String,
    /// User-friendly message.
    pub message: String,
    /// Actionable suggestion.
    pub hint: Option<String>,
    /// Technical detail for "Show Details" expansion.
    pub technical_detail: Option<String>,
}

// ========== Error Conversions ==========

/// Convert from std::io::Error to LanternError.
impl From<std::io::Error> for LanternError {
    fn from(err: std::io::Error) -> Self {
        LanternError::Storage {
            message: err.to_string(),
            hint: Some("Check file permissions and disk space".to_string()),
            source: Some(Box::new(err)),
        }
    }
}

/// Convert from serde_json::Error to LanternError.
impl From<serde_json::Error> for LanternError {
    fn from(err: serde_json::Error) -> Self {
        LanternError::Storage {
            message: format!("JSON error: {err}"),
            hint: Some("Fix or remove the malformed settings file".to_string()),
            source: Some(Box::new(err)),
        }
    }
}
