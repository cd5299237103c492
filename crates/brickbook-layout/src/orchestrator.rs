//! Multi-pass drivers built on the layout engines.
//!
//! `pack_all` cascades parts-list overflow onto as many continuation pages
//! as needed. `shrink_to_fit` steps a preview's scale down until the page
//! stops overlapping, one yielded step at a time.

use std::iter::FusedIterator;

use brickbook_core::{LayoutError, Margin, Rect, Size};

use crate::config::{LayoutConfig, ShrinkConfig};
use crate::item::{Packable, Placeable};
use crate::overflow::Packed;

/// Scales closer than this are treated as equal.
const SCALE_EPSILON: f64 = 1e-9;

/// A parts-list page owning the entries packed onto it.
#[derive(Debug, Clone, PartialEq)]
pub struct PartListPage<P> {
    /// Page number, assigned by the host
    pub number: u32,
    /// Full page rectangle
    pub bounds: Rect,
    pub items: Vec<P>,
}

impl<P> PartListPage<P> {
    /// Create an empty page of `size`.
    pub fn new(number: u32, size: Size) -> Self {
        Self {
            number,
            bounds: Rect::from_size(size),
            items: Vec::new(),
        }
    }

    /// Area available to the parts list.
    pub fn region(&self, margin: Margin) -> Rect {
        self.bounds.inset(margin)
    }
}

/// Progress report emitted after each page is packed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackProgress {
    pub page_number: u32,
    /// Entries placed on this page
    pub placed: usize,
    /// Entries still waiting for a page
    pub remaining: usize,
}

/// Pack `items` onto `first` and as many pages from `new_page` as it takes.
///
/// Any entries already on `first` are replaced. Fails instead of looping
/// when an entry cannot fit on an empty page, and before packing anything
/// when `config` does not validate.
pub fn pack_all<P, F>(
    config: &LayoutConfig,
    first: PartListPage<P>,
    items: Vec<P>,
    new_page: F,
) -> Result<Vec<PartListPage<P>>, LayoutError>
where
    P: Packable,
    F: FnMut() -> PartListPage<P>,
{
    pack_all_with_progress(config, first, items, new_page, |_| {})
}

/// [`pack_all`], reporting each completed page to `progress` in order.
pub fn pack_all_with_progress<P, F, R>(
    config: &LayoutConfig,
    first: PartListPage<P>,
    items: Vec<P>,
    mut new_page: F,
    mut progress: R,
) -> Result<Vec<PartListPage<P>>, LayoutError>
where
    P: Packable,
    F: FnMut() -> PartListPage<P>,
    R: FnMut(&PackProgress),
{
    config.validate().map_err(|err| LayoutError::InvalidConfig {
        reason: err.to_string(),
    })?;

    let packer = config.packer();
    let mut pages = Vec::new();
    let mut page = first;
    let mut remaining = items;
    // Sorted position of the first entry in `remaining`
    let mut position = 0;

    loop {
        let region = page.region(config.page_margin);
        let Packed { placed, overflow } = packer.pack(region, remaining);

        if placed.is_empty() {
            if let Some(stuck) = overflow.first() {
                let size = stuck.natural_size();
                tracing::warn!(
                    page = page.number,
                    position,
                    width = size.width(),
                    height = size.height(),
                    "parts list entry does not fit on an empty page"
                );
                return Err(LayoutError::DegenerateItem {
                    position,
                    width: size.width(),
                    height: size.height(),
                    region_width: region.width(),
                    region_height: region.height(),
                });
            }
        }

        position += placed.len();
        page.items = placed;

        let report = PackProgress {
            page_number: page.number,
            placed: page.items.len(),
            remaining: overflow.len(),
        };
        tracing::debug!(
            page = report.page_number,
            placed = report.placed,
            remaining = report.remaining,
            "packed parts list page"
        );
        progress(&report);
        pages.push(page);

        if overflow.is_empty() {
            return Ok(pages);
        }
        remaining = overflow;
        page = new_page();
    }
}

/// Something with a scale that can be re-laid out after it changes.
pub trait Shrinkable {
    /// Current scale, 1.0 being natural size.
    fn scale(&self) -> f64;

    fn set_scale(&mut self, scale: f64);

    /// Re-run layout after a scale change.
    fn relayout(&mut self);

    /// Progress label for a step that reached `scale`.
    fn describe(&self, scale: f64) -> String {
        format!("Scaling preview to {scale:.1}")
    }
}

/// One completed shrink step.
#[derive(Debug, Clone, PartialEq)]
pub struct ShrinkStep {
    /// Scale in effect after this step
    pub scale: f64,
    pub label: String,
}

/// Lazy shrink loop returned by [`shrink_to_fit`].
///
/// Each call to `next` shrinks and re-lays out before yielding. Dropping the
/// iterator early keeps whatever scale was reached.
pub struct ShrinkToFit<'a, S, O> {
    target: &'a mut S,
    overlapping: O,
    config: ShrinkConfig,
    finished: bool,
}

/// Shrink `target` by `config.step` while `overlapping` reports a clash
/// and the scale is above `config.floor`.
pub fn shrink_to_fit<S, O>(target: &mut S, config: ShrinkConfig, overlapping: O) -> ShrinkToFit<'_, S, O>
where
    S: Shrinkable,
    O: FnMut(&S) -> bool,
{
    ShrinkToFit {
        target,
        overlapping,
        config,
        finished: false,
    }
}

impl<S, O> Iterator for ShrinkToFit<'_, S, O>
where
    S: Shrinkable,
    O: FnMut(&S) -> bool,
{
    type Item = ShrinkStep;

    fn next(&mut self) -> Option<ShrinkStep> {
        if self.finished {
            return None;
        }

        let scale = self.target.scale();
        if scale <= self.config.floor + SCALE_EPSILON || !(self.overlapping)(&*self.target) {
            self.finished = true;
            return None;
        }

        let new_scale = (scale - self.config.step).max(self.config.floor);
        self.target.set_scale(new_scale);
        self.target.relayout();

        let label = self.target.describe(new_scale);
        tracing::debug!(scale = new_scale, "{label}");
        Some(ShrinkStep {
            scale: new_scale,
            label,
        })
    }
}

impl<S, O> FusedIterator for ShrinkToFit<'_, S, O>
where
    S: Shrinkable,
    O: FnMut(&S) -> bool,
{
}
