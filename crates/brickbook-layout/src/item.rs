//! Things the layout engines can place.

use brickbook_core::{PartColor, Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// Primary split direction of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Fill rows left to right, then move down
    #[default]
    Horizontal,
    /// Fill columns top to bottom, then move right
    Vertical,
}

impl Orientation {
    /// The other orientation.
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// Extent of `size` along this orientation's main axis.
    pub fn main(self, size: Size) -> f64 {
        match self {
            Orientation::Horizontal => size.width(),
            Orientation::Vertical => size.height(),
        }
    }

    /// Extent of `size` across this orientation's main axis.
    pub fn cross(self, size: Size) -> f64 {
        self.flipped().main(size)
    }
}

/// Anything the layout can position.
///
/// The natural size is computed upstream by the host and is read-only here;
/// the engines only ever write the assigned rectangle.
pub trait Placeable {
    /// Unconstrained size of the content.
    fn natural_size(&self) -> Size;

    /// Rectangle assigned by the last layout pass.
    fn rect(&self) -> Rect;

    /// Store the rectangle chosen by a layout pass.
    fn set_rect(&mut self, rect: Rect);

    /// Preferred orientation for the item's own children, if it is a group.
    fn orientation(&self) -> Option<Orientation> {
        None
    }

    /// Move the item without changing its size.
    fn set_position(&mut self, origin: Point) {
        let rect = Rect::from_origin_size(origin, self.natural_size());
        self.set_rect(rect);
    }
}

/// A placeable item that the overflow packer can order.
pub trait Packable: Placeable {
    /// Weight grouping same-coloured parts together.
    fn color_weight(&self) -> f64;
}

/// A generic placeable carrying a host identity.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutItem<T> {
    /// Opaque reference back to the host's object
    pub id: T,
    pub natural: Size,
    pub rect: Rect,
    pub orientation: Option<Orientation>,
}

impl<T> LayoutItem<T> {
    pub fn new(id: T, natural: Size) -> Self {
        Self {
            id,
            natural,
            rect: Rect::from_size(natural),
            orientation: None,
        }
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }
}

impl<T> Placeable for LayoutItem<T> {
    fn natural_size(&self) -> Size {
        self.natural
    }

    fn rect(&self) -> Rect {
        self.rect
    }

    fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    fn orientation(&self) -> Option<Orientation> {
        self.orientation
    }
}

/// One entry of a parts list: a part image with its quantity label, already
/// measured by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct PartEntry<T> {
    pub id: T,
    pub natural: Size,
    pub rect: Rect,
    pub color: Option<PartColor>,
}

impl<T> PartEntry<T> {
    pub fn new(id: T, natural: Size) -> Self {
        Self {
            id,
            natural,
            rect: Rect::from_size(natural),
            color: None,
        }
    }

    pub fn with_color(mut self, color: PartColor) -> Self {
        self.color = Some(color);
        self
    }
}

impl<T> Placeable for PartEntry<T> {
    fn natural_size(&self) -> Size {
        self.natural
    }

    fn rect(&self) -> Rect {
        self.rect
    }

    fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }
}

impl<T> Packable for PartEntry<T> {
    fn color_weight(&self) -> f64 {
        PartColor::weight_of(self.color.as_ref())
    }
}
