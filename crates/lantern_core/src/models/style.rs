//! Computed-style custom properties.
//!
//! Themes describe menu geometry through named custom properties so the
//! visual theme can change menu size without code changes. The engine reads
//! them through [`StyleSource`] at the moment a menu is shown.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::LanternError;
use crate::models::LayoutConstants;

/// Custom property holding the width of a menu level.
pub const MENU_WIDTH_PROPERTY: &str = "--context-menu-width";
/// Custom property holding the line height of item text.
pub const ITEM_LINE_HEIGHT_PROPERTY: &str = "--context-menu-item-line-height";
/// Custom property holding the vertical padding of an item.
pub const ITEM_PADDING_PROPERTY: &str = "--context-menu-item-padding-vertical";
/// Custom property holding the clearance to the viewport edge.
pub const BORDER_MARGIN_PROPERTY: &str = "--context-menu-border-margin";

/// Anything that can answer computed-style property lookups.
pub trait StyleSource: Send + Sync {
    /// Return the raw value of a custom property, if defined.
    fn property(&self, name: &str) -> Option<String>;
}

/// A plain map of custom properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleProperties(BTreeMap<String, String>);

impl StyleProperties {
    /// Create an empty property map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set a property.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Set a property, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Remove a property.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.0.remove(name)
    }

    /// Return a copy with `overrides` applied on top of `self`.
    pub fn merged(&self, overrides: &StyleProperties) -> StyleProperties {
        let mut merged = self.clone();
        for (name, value) in &overrides.0 {
            merged.set(name.clone(), value.clone());
        }
        merged
    }

    /// Check whether no properties are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl StyleSource for StyleProperties {
    fn property(&self, name: &str) -> Option<String> {
        self.0.get(name).cloned()
    }
}

impl LayoutConstants {
    /// Read menu geometry from the style source.
    ///
    /// Every property must be present. Width and line height must be positive;
    /// padding and border margin may be zero but not negative.
    pub fn from_style(style: &dyn StyleSource) -> Result<Self, LanternError> {
        Ok(Self {
            menu_width: read_length(style, MENU_WIDTH_PROPERTY, false)?,
            item_line_height: read_length(style, ITEM_LINE_HEIGHT_PROPERTY, false)?,
            item_vertical_padding: read_length(style, ITEM_PADDING_PROPERTY, true)?,
            border_margin: read_length(style, BORDER_MARGIN_PROPERTY, true)?,
        })
    }
}

fn read_length(style: &dyn StyleSource, name: &str, allow_zero: bool) -> Result<f32, LanternError> {
    let raw = style.property(name).ok_or_else(|| {
        tracing::warn!(property = name, "Menu style property is not defined");
        LanternError::missing_style_property(name)
    })?;
    let value = parse_length(&raw)
        .ok_or_else(|| LanternError::invalid_style_property(name, &raw, "not a length"))?;

    if value < 0.0 || (!allow_zero && value == 0.0) {
        tracing::warn!(property = name, value = %raw, "Menu style property out of range");
        let reason = if allow_zero { "must not be negative" } else { "must be positive" };
        return Err(LanternError::invalid_style_property(name, raw, reason));
    }
    Ok(value)
}

/// Parse `12`, `12.5` or `12px`, surrounded by optional whitespace.
fn parse_length(raw: &str) -> Option<f32> {
    let trimmed = raw.trim();
    let number = trimmed.strip_suffix("px").unwrap_or(trimmed).trim_end();
    number.parse::<f32>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_style() -> StyleProperties {
        StyleProperties::new()
            .with(MENU_WIDTH_PROPERTY, "200px")
            .with(ITEM_LINE_HEIGHT_PROPERTY, "20px")
            .with(ITEM_PADDING_PROPERTY, " 5 ")
            .with(BORDER_MARGIN_PROPERTY, "10px")
    }

    #[test]
    fn test_reads_all_constants() {
        let constants = LayoutConstants::from_style(&full_style()).unwrap();
        assert_eq!(constants.menu_width, 200.0);
        assert_eq!(constants.item_line_height, 20.0);
        assert_eq!(constants.item_vertical_padding, 5.0);
        assert_eq!(constants.border_margin, 10.0);
    }

    #[test]
    fn test_missing_property_is_an_error() {
        let mut style = full_style();
        style.remove(ITEM_LINE_HEIGHT_PROPERTY);
        let err = LayoutConstants::from_style(&style).unwrap_err();
        assert!(matches!(
            err,
            LanternError::MissingStyleProperty { ref property }
                if property == ITEM_LINE_HEIGHT_PROPERTY
        ));
    }

    #[test]
    fn test_zero_width_is_rejected() {
        let style = full_style().with(MENU_WIDTH_PROPERTY, "0px");
        assert!(matches!(
            LayoutConstants::from_style(&style),
            Err(LanternError::InvalidStyleProperty { .. })
        ));
    }

    #[test]
    fn test_zero_margin_is_allowed() {
        let style = full_style().with(BORDER_MARGIN_PROPERTY, "0");
        assert_eq!(LayoutConstants::from_style(&style).unwrap().border_margin, 0.0);
    }

    #[test]
    fn test_malformed_values_are_rejected() {
        for bad in ["", "px", "wide", "NaN", "inf", "-4px"] {
            let style = full_style().with(ITEM_PADDING_PROPERTY, bad);
            assert!(LayoutConstants::from_style(&style).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_merged_overrides_win() {
        let base = full_style();
        let merged = base.merged(&StyleProperties::new().with(MENU_WIDTH_PROPERTY, "240px"));
        assert_eq!(merged.property(MENU_WIDTH_PROPERTY).as_deref(), Some("240px"));
        assert_eq!(merged.property(BORDER_MARGIN_PROPERTY).as_deref(), Some("10px"));
    }

    #[test]
    fn test_properties_round_trip_as_plain_json_object() {
        let json = r#"{"--context-menu-width":"180px"}"#;
        let props: StyleProperties = serde_json::from_str(json).unwrap();
        assert_eq!(props.property(MENU_WIDTH_PROPERTY).as_deref(), Some("180px"));
    }
}
