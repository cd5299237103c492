//! Grid layout for page members.
//!
//! Splits a bounding rectangle into lines (rows or columns) holding a
//! roughly square arrangement of items. Lines take the height (or width) of
//! their largest item and share any leftover space; cells along a line are
//! uniform. Items are centered in their cells and are never resized, so
//! oversized content simply runs past the bounds.

use brickbook_core::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

use crate::item::{Orientation, Placeable};

/// Explicit override of the automatic grid shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FixedShape {
    /// Use exactly this many rows
    Rows(usize),
    /// Use exactly this many columns
    Columns(usize),
}

/// Number of rows and columns a grid ended up with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridShape {
    pub rows: usize,
    pub columns: usize,
}

/// A visual divider between two rows or two columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Separator {
    /// Input index of the first item after the divider
    pub index: usize,
    /// Zero-thickness line spanning the bounds
    pub rect: Rect,
}

/// Output of a grid pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GridResult {
    pub shape: GridShape,
    /// One rectangle per input item, in input order
    pub rects: Vec<Rect>,
    pub separators: Vec<Separator>,
}

/// Grid layout configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridLayout {
    /// Horizontal fills rows first, Vertical fills columns first
    pub orientation: Orientation,
    /// Overrides the square-root shape heuristic
    pub fixed: Option<FixedShape>,
}

fn ceil_sqrt(n: usize) -> usize {
    let mut root = (n as f64).sqrt().ceil() as usize;
    while root * root < n {
        root += 1;
    }
    while root > 1 && (root - 1) * (root - 1) >= n {
        root -= 1;
    }
    root
}

fn along(orientation: Orientation, point: Point) -> f64 {
    match orientation {
        Orientation::Horizontal => point.x,
        Orientation::Vertical => point.y,
    }
}

fn across(orientation: Orientation, point: Point) -> f64 {
    along(orientation.flipped(), point)
}

fn point_at(orientation: Orientation, main: f64, cross: f64) -> Point {
    match orientation {
        Orientation::Horizontal => Point::new(main, cross),
        Orientation::Vertical => Point::new(cross, main),
    }
}

/// A divider running along `orientation` at `position` on the other axis.
fn divider(bounds: Rect, orientation: Orientation, position: f64) -> Rect {
    match orientation {
        Orientation::Horizontal => {
            Rect::horizontal_line(Point::new(bounds.x(), position), bounds.width())
        }
        Orientation::Vertical => {
            Rect::vertical_line(Point::new(position, bounds.y()), bounds.height())
        }
    }
}

impl GridLayout {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            fixed: None,
        }
    }

    /// Force a row or column count.
    pub fn with_fixed(mut self, fixed: FixedShape) -> Self {
        self.fixed = Some(fixed);
        self
    }

    /// Grid for a container's children, following the container's own
    /// orientation preference when it has one.
    pub fn for_container<C: Placeable + ?Sized>(self, container: &C) -> Self {
        Self {
            orientation: container.orientation().unwrap_or(self.orientation),
            ..self
        }
    }

    /// Cells per line when lines are filled one after another.
    fn per_line(&self, bounds: Rect, count: usize) -> usize {
        let per_line = match (self.fixed, self.orientation) {
            (Some(FixedShape::Columns(columns)), Orientation::Horizontal) => columns,
            (Some(FixedShape::Rows(rows)), Orientation::Vertical) => rows,
            _ => {
                let major = ceil_sqrt(count);
                let minor = count.div_ceil(major);
                let landscape = bounds.width() >= bounds.height();
                if self.orientation == Orientation::Vertical || landscape {
                    major
                } else {
                    minor
                }
            }
        };
        per_line.clamp(1, count)
    }

    /// Number of items on each line, in fill order. The first line is always
    /// one of the longest.
    fn line_lengths(&self, bounds: Rect, count: usize) -> Vec<usize> {
        match (self.fixed, self.orientation) {
            // The override names the line count: spread items over exactly
            // that many lines, earlier lines taking the remainder.
            (Some(FixedShape::Rows(lines)), Orientation::Horizontal)
            | (Some(FixedShape::Columns(lines)), Orientation::Vertical) => {
                let lines = lines.clamp(1, count);
                let (base, extra) = (count / lines, count % lines);
                (0..lines).map(|l| base + usize::from(l < extra)).collect()
            }
            _ => {
                let per_line = self.per_line(bounds, count);
                (0..count)
                    .step_by(per_line)
                    .map(|start| per_line.min(count - start))
                    .collect()
            }
        }
    }

    fn shape_of(&self, lines: usize, per_line: usize) -> GridShape {
        match self.orientation {
            Orientation::Horizontal => GridShape {
                rows: lines,
                columns: per_line,
            },
            Orientation::Vertical => GridShape {
                rows: per_line,
                columns: lines,
            },
        }
    }

    /// Grid shape chosen for `count` items inside `bounds`.
    pub fn shape(&self, bounds: Rect, count: usize) -> GridShape {
        if count == 0 {
            return GridShape::default();
        }
        let lengths = self.line_lengths(bounds, count);
        let per_line = lengths.iter().copied().max().unwrap_or(1);
        self.shape_of(lengths.len(), per_line)
    }

    /// Compute a rectangle for each size, plus the separators between rows
    /// and columns.
    pub fn compute(&self, bounds: Rect, sizes: &[Size]) -> GridResult {
        if sizes.is_empty() {
            return GridResult::default();
        }

        let o = self.orientation;
        let lengths = self.line_lengths(bounds, sizes.len());
        let per_line = lengths.iter().copied().max().unwrap_or(1);
        let line_count = lengths.len();
        let shape = self.shape_of(line_count, per_line);

        // (line, cell) of every item
        let slots: Vec<(usize, usize)> = lengths
            .iter()
            .enumerate()
            .flat_map(|(line, &len)| (0..len).map(move |cell| (line, cell)))
            .collect();

        let main_start = along(o, bounds.origin());
        let cross_start = across(o, bounds.origin());
        let cell_main = o.main(bounds.size()) / per_line as f64;

        // Each line is as thick as its largest item
        let mut line_extent = vec![0.0f64; line_count];
        for (&(line, _), size) in slots.iter().zip(sizes) {
            line_extent[line] = line_extent[line].max(o.cross(*size));
        }
        let used: f64 = line_extent.iter().sum();
        let slack = ((o.cross(bounds.size()) - used) / line_count as f64).max(0.0);

        let mut line_start = Vec::with_capacity(line_count);
        let mut cursor = cross_start;
        for extent in &line_extent {
            line_start.push(cursor);
            cursor += extent + slack;
        }

        let rects: Vec<Rect> = slots
            .iter()
            .zip(sizes)
            .map(|(&(line, cell), size)| {
                let main = main_start + cell as f64 * cell_main + (cell_main - o.main(*size)) / 2.0;
                let cross = line_start[line] + (line_extent[line] + slack - o.cross(*size)) / 2.0;
                Rect::from_origin_size(point_at(o, main, cross), *size)
            })
            .collect();

        let separators = Self::separators(o, bounds, &rects, &slots, line_count, per_line);

        GridResult {
            shape,
            rects,
            separators,
        }
    }

    fn separators(
        o: Orientation,
        bounds: Rect,
        rects: &[Rect],
        slots: &[(usize, usize)],
        line_count: usize,
        per_line: usize,
    ) -> Vec<Separator> {
        let cross_end = |r: &Rect| across(o, r.origin()) + o.cross(r.size());
        let main_end = |r: &Rect| along(o, r.origin()) + o.main(r.size());
        let line = |l: usize| {
            rects
                .iter()
                .zip(slots)
                .filter(move |(_, slot)| slot.0 == l)
                .map(|(r, _)| r)
        };
        let cell = |c: usize| {
            rects
                .iter()
                .zip(slots)
                .filter(move |(_, slot)| slot.1 == c)
                .map(|(r, _)| r)
        };

        let mut separators = Vec::with_capacity(line_count + per_line - 2);

        for l in 1..line_count {
            let prev_end = line(l - 1).map(cross_end).fold(f64::MIN, f64::max);
            let next_start = line(l)
                .map(|r| across(o, r.origin()))
                .fold(f64::MAX, f64::min);
            separators.push(Separator {
                index: slots.iter().position(|slot| slot.0 == l).unwrap_or(rects.len()),
                rect: divider(bounds, o, (prev_end + next_start) / 2.0),
            });
        }

        // The first line is a longest one, so cell `c` starts at input index `c`
        for c in 1..per_line {
            let prev_end = cell(c - 1).map(main_end).fold(f64::MIN, f64::max);
            let next_start = cell(c)
                .map(|r| along(o, r.origin()))
                .fold(f64::MAX, f64::min);
            separators.push(Separator {
                index: c,
                rect: divider(bounds, o.flipped(), (prev_end + next_start) / 2.0),
            });
        }

        separators
    }

    /// Lay out `items` in place and return the full result.
    pub fn apply<P: Placeable>(&self, bounds: Rect, items: &mut [P]) -> GridResult {
        let sizes: Vec<Size> = items.iter().map(Placeable::natural_size).collect();
        let result = self.compute(bounds, &sizes);
        for (item, rect) in items.iter_mut().zip(&result.rects) {
            item.set_rect(*rect);
        }
        result
    }
}
