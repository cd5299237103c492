//! Part colours as seen by the layout engine.
//!
//! The engine never renders colour; it only needs a stable weight so that
//! parts of the same colour end up next to each other in a parts list.

/// An RGBA part colour with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl PartColor {
    pub const BLACK: PartColor = PartColor::rgba(0.0, 0.0, 0.0, 1.0);

    /// Standard red. Parts without a colour sort as if they were red.
    pub const RED: PartColor = PartColor::rgba(0.77, 0.0, 0.15, 1.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create from 8-bit RGB values.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Sort weight: the sum of all four components.
    pub fn sort_weight(&self) -> f64 {
        f64::from(self.r) + f64::from(self.g) + f64::from(self.b) + f64::from(self.a)
    }

    /// Sort weight of an optional colour, falling back to [`PartColor::RED`].
    pub fn weight_of(color: Option<&PartColor>) -> f64 {
        color.unwrap_or(&PartColor::RED).sort_weight()
    }
}

impl Default for PartColor {
    fn default() -> Self {
        Self::BLACK
    }
}
