//! Layout configuration.
//!
//! Everything that used to be a process-wide toggle is a field here and is
//! passed into each layout call.

use brickbook_core::{Margin, Size};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::furniture::NumberPosition;
use crate::grid::{FixedShape, GridLayout};
use crate::item::Orientation;
use crate::overflow::OverflowPacker;

/// Errors loading or validating a [`LayoutConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Malformed layout configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Step and floor of the preview shrink loop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShrinkConfig {
    /// Amount subtracted from the scale on each step
    pub step: f64,
    /// Smallest scale the loop will reach
    pub floor: f64,
}

impl Default for ShrinkConfig {
    fn default() -> Self {
        Self {
            step: 0.2,
            floor: 0.5,
        }
    }
}

/// Options for a layout pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Size of every page
    pub page_size: Size,
    /// Margin between the page edge and its content
    pub page_margin: Margin,
    /// Default grid orientation for pages without their own preference
    pub orientation: Orientation,
    /// Replaces the automatic grid shape
    pub grid_override: Option<FixedShape>,
    /// Spacing between parts-list entries
    pub pack_margin: f64,
    /// Inner margin of callouts
    pub callout_margin: f64,
    /// Group parts-list entries by colour before sorting by width
    pub group_by_type: bool,
    /// Keep the separators computed between steps
    pub show_separators: bool,
    pub shrink: ShrinkConfig,
    /// Where page numbers go
    pub number_position: NumberPosition,
    /// Extra reduction applied when a title-page preview is shrunk to fit
    pub title_scale_slack: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page_size: Size::saturating(800.0, 600.0),
            page_margin: Margin::default(),
            orientation: Orientation::Horizontal,
            grid_override: None,
            pack_margin: 15.0,
            callout_margin: 15.0,
            group_by_type: true,
            show_separators: true,
            shrink: ShrinkConfig::default(),
            number_position: NumberPosition::Right,
            title_scale_slack: 0.1,
        }
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("expected a non-negative number, got {value}"),
        })
    }
}

impl LayoutConfig {
    /// Parse and validate a JSON configuration. Missing fields take their
    /// defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: LayoutConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check values serde cannot: margins, shrink bounds and shape counts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("page_margin.x", self.page_margin.x)?;
        non_negative("page_margin.y", self.page_margin.y)?;
        non_negative("pack_margin", self.pack_margin)?;
        non_negative("callout_margin", self.callout_margin)?;
        non_negative("title_scale_slack", self.title_scale_slack)?;

        if !(self.shrink.step.is_finite() && self.shrink.step > 0.0) {
            return Err(ConfigError::Invalid {
                field: "shrink.step",
                reason: format!("must be positive, got {}", self.shrink.step),
            });
        }
        if !(self.shrink.floor > 0.0 && self.shrink.floor <= 1.0) {
            return Err(ConfigError::Invalid {
                field: "shrink.floor",
                reason: format!("must be in (0, 1], got {}", self.shrink.floor),
            });
        }
        if let Some(FixedShape::Rows(0) | FixedShape::Columns(0)) = self.grid_override {
            return Err(ConfigError::Invalid {
                field: "grid_override",
                reason: "row or column count must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Grid engine with the configured default orientation and override.
    /// Use [`GridLayout::for_container`] to apply a container's preference.
    pub fn grid(&self) -> GridLayout {
        GridLayout {
            orientation: self.orientation,
            fixed: self.grid_override,
        }
    }

    /// Packer for parts-list pages.
    pub fn packer(&self) -> OverflowPacker {
        OverflowPacker::new(self.pack_margin).with_group_by_type(self.group_by_type)
    }
}
