//! Column packing for parts-list pages.
//!
//! Entries are sorted by colour weight, then width, and stacked top to
//! bottom in columns. The first entry that cannot fit ends the pass; it and
//! everything after it are handed back for a continuation page.

use std::cmp::Ordering;

use brickbook_core::{Point, Rect};

use crate::item::{Packable, Placeable};

/// Outcome of one packing pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Packed<P> {
    /// Items that fit, with their rects assigned, in sort order
    pub placed: Vec<P>,
    /// Items that did not fit, in sort order
    pub overflow: Vec<P>,
}

impl<P> Packed<P> {
    /// True when every item fit.
    pub fn is_complete(&self) -> bool {
        self.overflow.is_empty()
    }
}

/// Column packer configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverflowPacker {
    /// Spacing around and between entries
    pub margin: f64,
    /// Sort by colour before width
    pub group_by_type: bool,
}

impl Default for OverflowPacker {
    fn default() -> Self {
        Self {
            margin: 15.0,
            group_by_type: true,
        }
    }
}

/// Spacing that keeps placed entries inside the region: negative or NaN
/// margins become zero.
fn spacing(margin: f64) -> f64 {
    if margin.is_finite() && margin > 0.0 {
        margin
    } else {
        0.0
    }
}

impl OverflowPacker {
    /// Packer with `margin` spacing, clamped to be non-negative.
    pub fn new(margin: f64) -> Self {
        Self {
            margin: spacing(margin),
            ..Default::default()
        }
    }

    pub fn with_group_by_type(mut self, group_by_type: bool) -> Self {
        self.group_by_type = group_by_type;
        self
    }

    /// Packing order of two entries.
    pub fn compare<P: Packable>(&self, a: &P, b: &P) -> Ordering {
        let by_width = a
            .natural_size()
            .width()
            .total_cmp(&b.natural_size().width());
        if self.group_by_type {
            a.color_weight().total_cmp(&b.color_weight()).then(by_width)
        } else {
            by_width
        }
    }

    /// Sort `items` into packing order. The sort is stable.
    pub fn sort<P: Packable>(&self, items: &mut [P]) {
        items.sort_by(|a, b| self.compare(a, b));
    }

    /// Pack `items` into columns inside `region`.
    pub fn pack<P: Packable>(&self, region: Rect, mut items: Vec<P>) -> Packed<P> {
        self.sort(&mut items);

        let margin = spacing(self.margin);
        let (mut x, mut y) = (margin, margin);
        let mut column_width: f64 = 0.0;
        let mut column_empty = true;

        let mut placed = Vec::with_capacity(items.len());
        let mut remaining = items.into_iter();

        while let Some(mut item) = remaining.next() {
            let size = item.natural_size();
            let advance = size.height() + margin;

            if !column_empty && y + advance > region.height() {
                x += column_width + margin * 2.0;
                y = margin;
                column_width = 0.0;
                column_empty = true;
            }

            if y + advance > region.height() || x + size.width() > region.width() {
                let mut overflow = Vec::with_capacity(remaining.len() + 1);
                overflow.push(item);
                overflow.extend(remaining);
                tracing::trace!(
                    placed = placed.len(),
                    overflow = overflow.len(),
                    "parts list overflowed its region"
                );
                return Packed { placed, overflow };
            }

            item.set_position(region.origin().offset(x, y));
            y += advance;
            column_width = column_width.max(size.width());
            column_empty = false;
            placed.push(item);
        }

        Packed {
            placed,
            overflow: Vec::new(),
        }
    }

    /// Origin of the first slot in `region`.
    pub fn first_slot(&self, region: Rect) -> Point {
        let margin = spacing(self.margin);
        region.origin().offset(margin, margin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::PartEntry;
    use brickbook_core::{PartColor, Size};
    use proptest::prelude::*;

    fn region(width: f64, height: f64) -> Rect {
        Rect::new(0.0, 0.0, width, height).unwrap()
    }

    fn entries(count: usize, width: f64, height: f64) -> Vec<PartEntry<usize>> {
        (0..count)
            .map(|i| PartEntry::new(i, Size::new(width, height).unwrap()))
            .collect()
    }

    fn ids<P>(items: &[PartEntry<P>]) -> Vec<P>
    where
        P: Copy,
    {
        items.iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_single_column_fits() {
        let packed = OverflowPacker::new(15.0).pack(region(800.0, 600.0), entries(3, 100.0, 100.0));
        assert!(packed.is_complete());
        let origins: Vec<(f64, f64)> = packed.placed.iter().map(|e| (e.rect.x(), e.rect.y())).collect();
        assert_eq!(origins, vec![(15.0, 15.0), (15.0, 130.0), (15.0, 245.0)]);
    }

    #[test]
    fn test_second_column_overflows_right_edge() {
        let packed = OverflowPacker::new(10.0).pack(region(400.0, 300.0), entries(5, 200.0, 150.0));
        assert_eq!(packed.placed.len(), 1);
        assert_eq!(packed.overflow.len(), 4);
        assert_eq!(packed.placed[0].rect, Rect::new(10.0, 10.0, 200.0, 150.0).unwrap());
        assert_eq!(ids(&packed.overflow), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_oversized_item_overflows_immediately() {
        let packed = OverflowPacker::default().pack(region(800.0, 600.0), entries(1, 900.0, 900.0));
        assert!(packed.placed.is_empty());
        assert_eq!(packed.overflow.len(), 1);
    }

    #[test]
    fn test_new_column_starts_after_widest_entry() {
        let mut items = entries(2, 50.0, 100.0);
        items.push(PartEntry::new(2, Size::new(80.0, 100.0).unwrap()));
        let packed = OverflowPacker::new(10.0).pack(region(400.0, 250.0), items);
        assert!(packed.is_complete());
        // Two entries per column: 10 + 110 + 110 = 230 <= 250, third would be 340
        assert_eq!(packed.placed[2].rect.origin(), Point::new(10.0 + 50.0 + 20.0, 10.0));
    }

    #[test]
    fn test_sorts_by_colour_then_width() {
        let items = vec![
            PartEntry::new("wide-black", Size::new(60.0, 10.0).unwrap()).with_color(PartColor::BLACK),
            PartEntry::new("plain", Size::new(10.0, 10.0).unwrap()),
            PartEntry::new("narrow-black", Size::new(20.0, 10.0).unwrap()).with_color(PartColor::BLACK),
        ];
        let packed = OverflowPacker::default().pack(region(800.0, 600.0), items);
        assert_eq!(ids(&packed.placed), vec!["narrow-black", "wide-black", "plain"]);
    }

    #[test]
    fn test_width_only_order_without_grouping() {
        let items = vec![
            PartEntry::new("wide-black", Size::new(60.0, 10.0).unwrap()).with_color(PartColor::BLACK),
            PartEntry::new("plain", Size::new(10.0, 10.0).unwrap()),
        ];
        let packer = OverflowPacker::default().with_group_by_type(false);
        let packed = packer.pack(region(800.0, 600.0), items);
        assert_eq!(ids(&packed.placed), vec!["plain", "wide-black"]);
    }

    #[test]
    fn test_positions_are_relative_to_region_origin() {
        let area = Rect::new(15.0, 15.0, 770.0, 570.0).unwrap();
        let packer = OverflowPacker::new(15.0);
        let packed = packer.pack(area, entries(1, 10.0, 10.0));
        assert_eq!(packed.placed[0].rect.origin(), Point::new(30.0, 30.0));
        assert_eq!(packer.first_slot(area), Point::new(30.0, 30.0));
    }

    #[test]
    fn test_empty_input() {
        let packed = OverflowPacker::default().pack(region(800.0, 600.0), entries(0, 1.0, 1.0));
        assert!(packed.placed.is_empty());
        assert!(packed.is_complete());
    }

    #[test]
    fn test_negative_or_nan_margin_keeps_entries_inside() {
        let area = region(800.0, 600.0);
        let packer = OverflowPacker::new(-5.0);
        assert_eq!(packer.margin, 0.0);
        let packed = packer.pack(area, entries(1, 10.0, 10.0));
        assert_eq!(packed.placed[0].rect.origin(), Point::ORIGIN);
        assert!(area.contains_rect(&packed.placed[0].rect));

        let packer = OverflowPacker { margin: f64::NAN, group_by_type: true };
        let packed = packer.pack(area, entries(2, 10.0, 10.0));
        assert!(packed.is_complete());
        for entry in &packed.placed {
            assert!(area.contains_rect(&entry.rect));
        }
        assert_eq!(packer.first_slot(area), Point::ORIGIN);
    }

    fn entries_strategy() -> impl Strategy<Value = Vec<PartEntry<usize>>> {
        prop::collection::vec((1.0f64..500.0, 1.0f64..500.0, 0u8..4), 0..60).prop_map(|dims| {
            dims.into_iter()
                .enumerate()
                .map(|(i, (w, h, shade))| {
                    let grey = f32::from(shade) / 4.0;
                    PartEntry::new(i, Size::new(w, h).unwrap()).with_color(PartColor::rgb(grey, grey, grey))
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn packing_preserves_the_item_set(
            items in entries_strategy(),
            width in 50.0f64..1200.0,
            height in 50.0f64..1200.0,
            margin in 0.0f64..30.0,
        ) {
            let count = items.len();
            let packed = OverflowPacker::new(margin).pack(region(width, height), items);
            let mut all: Vec<usize> = ids(&packed.placed);
            all.extend(ids(&packed.overflow));
            prop_assert_eq!(all.len(), count);
            all.sort_unstable();
            all.dedup();
            prop_assert_eq!(all, (0..count).collect::<Vec<_>>());
        }

        #[test]
        fn placed_items_stay_inside_region(
            items in entries_strategy(),
            x in -100.0f64..100.0,
            y in -100.0f64..100.0,
            width in 50.0f64..1200.0,
            height in 50.0f64..1200.0,
            margin in -30.0f64..30.0,
        ) {
            let area = Rect::new(x, y, width, height).unwrap();
            let packed = OverflowPacker::new(margin).pack(area, items);
            for entry in &packed.placed {
                prop_assert!(area.contains_rect(&entry.rect()), "{:?} escapes {:?}", entry.rect(), area);
            }
        }
    }
}
