//! Geometry primitives.
//!
//! All layout happens in floating-point "page units". Sizes and rectangles
//! reject negative or non-finite extents at construction, so the layout
//! engines never have to re-check them.

use glam::DVec2;

use crate::errors::GeometryError;

fn check_finite(value: f64) -> Result<f64, GeometryError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GeometryError::NonFinite { value })
    }
}

/// A position in page units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset this point by a vector.
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> Self {
        DVec2::new(p.x, p.y)
    }
}

/// A horizontal/vertical margin pair.
///
/// The same amount is applied on both opposing sides.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Margin {
    pub x: f64,
    pub y: f64,
}

impl Margin {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Same margin on both axes.
    pub const fn uniform(value: f64) -> Self {
        Self { x: value, y: value }
    }

    /// Total horizontal margin (left + right).
    pub fn horizontal(&self) -> f64 {
        self.x * 2.0
    }

    /// Total vertical margin (top + bottom).
    pub fn vertical(&self) -> f64 {
        self.y * 2.0
    }
}

impl Default for Margin {
    fn default() -> Self {
        Self::uniform(15.0)
    }
}

/// A non-negative width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "SizeRepr", into = "SizeRepr")
)]
pub struct Size {
    width: f64,
    height: f64,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    /// Create a size, rejecting negative or non-finite extents.
    pub fn new(width: f64, height: f64) -> Result<Self, GeometryError> {
        let width = check_finite(width)?;
        let height = check_finite(height)?;
        if width < 0.0 || height < 0.0 {
            return Err(GeometryError::NegativeSize { width, height });
        }
        Ok(Self { width, height })
    }

    /// Create a size, clamping negative or NaN extents to zero.
    pub fn saturating(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Uniformly scale the size. Negative factors collapse it to zero.
    pub fn scale(&self, factor: f64) -> Self {
        let factor = if factor.is_finite() { factor.max(0.0) } else { 0.0 };
        Self::saturating(self.width * factor, self.height * factor)
    }
}

impl TryFrom<DVec2> for Size {
    type Error = GeometryError;

    fn try_from(v: DVec2) -> Result<Self, Self::Error> {
        Size::new(v.x, v.y)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct SizeRepr {
    width: f64,
    height: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<SizeRepr> for Size {
    type Error = GeometryError;

    fn try_from(repr: SizeRepr) -> Result<Self, Self::Error> {
        Size::new(repr.width, repr.height)
    }
}

#[cfg(feature = "serde")]
impl From<Size> for SizeRepr {
    fn from(size: Size) -> Self {
        Self {
            width: size.width,
            height: size.height,
        }
    }
}

/// Axis-aligned rectangle with a non-negative size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RectRepr", into = "RectRepr")
)]
pub struct Rect {
    origin: Point,
    size: Size,
}

impl Rect {
    /// Create a rectangle, rejecting negative or non-finite values.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Result<Self, GeometryError> {
        let origin = Point::new(check_finite(x)?, check_finite(y)?);
        Ok(Self {
            origin,
            size: Size::new(width, height)?,
        })
    }

    /// Create a rectangle from an origin and an already-validated size.
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Rectangle of `size` anchored at the origin.
    pub fn from_size(size: Size) -> Self {
        Self::from_origin_size(Point::ORIGIN, size)
    }

    /// Zero-thickness horizontal line starting at `start`.
    pub fn horizontal_line(start: Point, length: f64) -> Self {
        Self::from_origin_size(start, Size::saturating(length, 0.0))
    }

    /// Zero-thickness vertical line starting at `start`.
    pub fn vertical_line(start: Point, length: f64) -> Self {
        Self::from_origin_size(start, Size::saturating(0.0, length))
    }

    pub fn x(&self) -> f64 {
        self.origin.x
    }

    pub fn y(&self) -> f64 {
        self.origin.y
    }

    pub fn width(&self) -> f64 {
        self.size.width
    }

    pub fn height(&self) -> f64 {
        self.size.height
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// X coordinate of the right side.
    pub fn right(&self) -> f64 {
        self.origin.x + self.size.width
    }

    /// Y coordinate of the bottom side.
    pub fn bottom(&self) -> f64 {
        self.origin.y + self.size.height
    }

    pub fn top_left(&self) -> Point {
        self.origin
    }

    pub fn top_right(&self) -> Point {
        Point::new(self.right(), self.y())
    }

    pub fn bottom_left(&self) -> Point {
        Point::new(self.x(), self.bottom())
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.right(), self.bottom())
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    /// Shrink by `margin` on every side. Collapses to zero size rather than
    /// inverting.
    pub fn inset(&self, margin: Margin) -> Rect {
        let size = Size::saturating(
            self.size.width - margin.horizontal(),
            self.size.height - margin.vertical(),
        );
        Rect::from_origin_size(self.origin.offset(margin.x, margin.y), size)
    }

    /// A rectangle of `size` centered inside this one. The result may
    /// extend outside when `size` is larger.
    pub fn centered(&self, size: Size) -> Rect {
        let origin = Point::new(
            self.origin.x + (self.size.width - size.width) / 2.0,
            self.origin.y + (self.size.height - size.height) / 2.0,
        );
        Rect::from_origin_size(origin, size)
    }

    /// True when all four edges of `other` lie within this rectangle.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        const EPSILON: f64 = 1e-9;
        other.x() >= self.x() - EPSILON
            && other.y() >= self.y() - EPSILON
            && other.right() <= self.right() + EPSILON
            && other.bottom() <= self.bottom() + EPSILON
    }

    /// Overlapping region of two rectangles, if any. Rectangles that only
    /// share an edge do not overlap.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x1 = self.x().max(other.x());
        let y1 = self.y().max(other.y());
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());

        if x1 < x2 && y1 < y2 {
            Some(Rect::from_origin_size(
                Point::new(x1, y1),
                Size::saturating(x2 - x1, y2 - y1),
            ))
        } else {
            None
        }
    }

    /// True if the two rectangles overlap with positive area.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.intersect(other).is_some()
    }

    /// Smallest rectangle covering both.
    pub fn union(&self, other: &Rect) -> Rect {
        let x1 = self.x().min(other.x());
        let y1 = self.y().min(other.y());
        let x2 = self.right().max(other.right());
        let y2 = self.bottom().max(other.bottom());
        Rect::from_origin_size(Point::new(x1, y1), Size::saturating(x2 - x1, y2 - y1))
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RectRepr {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RectRepr> for Rect {
    type Error = GeometryError;

    fn try_from(repr: RectRepr) -> Result<Self, Self::Error> {
        Rect::new(repr.x, repr.y, repr.width, repr.height)
    }
}

#[cfg(feature = "serde")]
impl From<Rect> for RectRepr {
    fn from(rect: Rect) -> Self {
        Self {
            x: rect.x(),
            y: rect.y(),
            width: rect.width(),
            height: rect.height(),
        }
    }
}
