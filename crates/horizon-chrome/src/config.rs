//! Chrome configuration and builder.
//!
//! `ChromeConfig` collects every tunable of the chrome engine. It can be
//! built in code with the `with_*` methods or loaded from TOML; missing
//! keys fall back to the defaults.
//!
//! # Example
//!
//! ```
//! use horizon_chrome::{Bounds, ChromeConfig};
//!
//! let config = ChromeConfig::new()
//!     .with_resize_margin(8.0)
//!     .with_corner_radius(12.0)
//!     .with_interactive_region(Bounds::new(740.0, 0.0, 60.0, 38.0));
//!
//! assert_eq!(config.resize_margin(), 8.0);
//! assert!(config.validate().is_ok());
//! ```
//!
//! From TOML:
//!
//! ```
//! use horizon_chrome::ChromeConfig;
//!
//! let config = ChromeConfig::from_toml_str(
//!     r#"
//!     resize_margin = 4.0
//!     corner_radius = 0.0
//!     fullscreen_bounds_workaround = true
//!     "#,
//! ).unwrap();
//!
//! assert_eq!(config.resize_margin(), 4.0);
//! assert!(config.is_fullscreen_bounds_workaround_enabled());
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::geometry::{
    Bounds, DEFAULT_CORNER_RADIUS, DEFAULT_MIN_HEIGHT, DEFAULT_MIN_WIDTH, DEFAULT_RESIZE_MARGIN,
    DEFAULT_TITLE_BAR_HEIGHT, Size,
};
use crate::platform::Platform;

/// Default maximum delay between the clicks of a double-click.
pub const DEFAULT_DOUBLE_CLICK_INTERVAL_MS: u64 = 500;

/// Configuration for a window's chrome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromeConfig {
    /// Width of the invisible resize margin along each edge.
    resize_margin: f64,
    /// Minimum size used during resize when the window has no override.
    min_size: Size,
    /// Corner radius of the content clip. Zero gives square corners.
    corner_radius: f64,
    /// Height of the default title bar strip.
    title_bar_height: f64,
    /// Explicit title bar rectangle, replacing the default strip.
    #[serde(skip_serializing_if = "Option::is_none")]
    title_bar_region: Option<Bounds>,
    /// Extra window-local regions that move the window.
    draggable_regions: Vec<Bounds>,
    /// Window-local regions excluded from dragging.
    interactive_regions: Vec<Bounds>,
    /// Double-click interval in milliseconds.
    double_click_interval_ms: u64,
    /// Platform whose conventions apply.
    platform: Platform,
    /// Override for the fullscreen bounds workaround; the platform decides when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    fullscreen_bounds_workaround: Option<bool>,
    /// Whether edge resizing is enabled.
    resize_enabled: bool,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            resize_margin: DEFAULT_RESIZE_MARGIN,
            min_size: Size::new(DEFAULT_MIN_WIDTH, DEFAULT_MIN_HEIGHT),
            corner_radius: DEFAULT_CORNER_RADIUS,
            title_bar_height: DEFAULT_TITLE_BAR_HEIGHT,
            title_bar_region: None,
            draggable_regions: Vec::new(),
            interactive_regions: Vec::new(),
            double_click_interval_ms: DEFAULT_DOUBLE_CLICK_INTERVAL_MS,
            platform: Platform::current(),
            fullscreen_bounds_workaround: None,
            resize_enabled: true,
        }
    }
}

impl ChromeConfig {
    /// Create a configuration with the defaults for the current platform.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to a TOML document.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    /// Check that every numeric setting is finite and in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_negative = [
            ("resize_margin", self.resize_margin),
            ("corner_radius", self.corner_radius),
            ("title_bar_height", self.title_bar_height),
            ("min_size.width", self.min_size.width),
            ("min_size.height", self.min_size.height),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidValue { field, value });
            }
        }

        let regions = self
            .title_bar_region
            .iter()
            .map(|r| ("title_bar_region", r))
            .chain(self.draggable_regions.iter().map(|r| ("draggable_regions", r)))
            .chain(self.interactive_regions.iter().map(|r| ("interactive_regions", r)));
        for (field, region) in regions {
            for value in [region.x, region.y, region.width, region.height] {
                if !value.is_finite() {
                    return Err(ConfigError::InvalidValue { field, value });
                }
            }
            for value in [region.width, region.height] {
                if value < 0.0 {
                    return Err(ConfigError::InvalidValue { field, value });
                }
            }
        }

        Ok(())
    }

    // =========================================================================
    // Builder Methods
    // =========================================================================

    /// Set the resize margin width. Clamped to zero.
    pub fn with_resize_margin(mut self, margin: f64) -> Self {
        self.resize_margin = margin.max(0.0);
        self
    }

    /// Set the fallback minimum size. Clamped to zero.
    pub fn with_min_size(mut self, width: f64, height: f64) -> Self {
        self.min_size = Size::new(width.max(0.0), height.max(0.0));
        self
    }

    /// Set the corner radius. Zero disables the clip.
    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius.max(0.0);
        self
    }

    /// Set the height of the default title bar strip.
    pub fn with_title_bar_height(mut self, height: f64) -> Self {
        self.title_bar_height = height.max(0.0);
        self
    }

    /// Use an explicit title bar rectangle.
    pub fn with_title_bar_region(mut self, region: Bounds) -> Self {
        self.title_bar_region = Some(region);
        self
    }

    /// Add a draggable region.
    pub fn with_draggable_region(mut self, region: Bounds) -> Self {
        self.draggable_regions.push(region);
        self
    }

    /// Add a region excluded from dragging, such as a window button.
    pub fn with_interactive_region(mut self, region: Bounds) -> Self {
        self.interactive_regions.push(region);
        self
    }

    /// Set the double-click interval.
    pub fn with_double_click_interval(mut self, interval: Duration) -> Self {
        self.double_click_interval_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Apply another platform's conventions.
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Force the fullscreen bounds workaround on or off.
    pub fn with_fullscreen_bounds_workaround(mut self, enabled: bool) -> Self {
        self.fullscreen_bounds_workaround = Some(enabled);
        self
    }

    /// Enable or disable edge resizing.
    pub fn with_resize_enabled(mut self, enabled: bool) -> Self {
        self.resize_enabled = enabled;
        self
    }

    // =========================================================================
    // Setters
    // =========================================================================

    pub fn set_resize_margin(&mut self, margin: f64) {
        self.resize_margin = margin.max(0.0);
    }

    pub fn set_corner_radius(&mut self, radius: f64) {
        self.corner_radius = radius.max(0.0);
    }

    pub fn set_title_bar_height(&mut self, height: f64) {
        self.title_bar_height = height.max(0.0);
    }

    pub fn set_resize_enabled(&mut self, enabled: bool) {
        self.resize_enabled = enabled;
    }

    // =========================================================================
    // Getters
    // =========================================================================

    pub fn resize_margin(&self) -> f64 {
        self.resize_margin
    }

    /// The margin the resize controller should use: zero when resizing is disabled.
    pub fn effective_resize_margin(&self) -> f64 {
        if self.resize_enabled {
            self.resize_margin
        } else {
            0.0
        }
    }

    pub fn min_size(&self) -> Size {
        self.min_size
    }

    pub fn corner_radius(&self) -> f64 {
        self.corner_radius
    }

    pub fn title_bar_height(&self) -> f64 {
        self.title_bar_height
    }

    pub fn title_bar_region(&self) -> Option<&Bounds> {
        self.title_bar_region.as_ref()
    }

    pub fn draggable_regions(&self) -> &[Bounds] {
        &self.draggable_regions
    }

    pub fn interactive_regions(&self) -> &[Bounds] {
        &self.interactive_regions
    }

    pub fn double_click_interval(&self) -> Duration {
        Duration::from_millis(self.double_click_interval_ms)
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Whether the fullscreen bounds workaround applies, resolving the
    /// platform default when no override is set.
    pub fn is_fullscreen_bounds_workaround_enabled(&self) -> bool {
        self.fullscreen_bounds_workaround
            .unwrap_or_else(|| self.platform.needs_fullscreen_bounds_workaround())
    }

    pub fn is_resize_enabled(&self) -> bool {
        self.resize_enabled
    }
}
