//! Automatic page layout for instruction books.
//!
//! This crate positions rectangular content blocks on fixed-size pages.
//! Sizes are always supplied by the host; nothing here measures content.
//!
//! # Architecture
//!
//! 1. **Grid layout**: arranges steps and previews into rows/columns on a page
//! 2. **Overflow packing**: packs parts-list entries into columns and reports
//!    what did not fit
//! 3. **Page tree**: pages, steps and nested callouts in an arena, laid out
//!    recursively with the grid engine
//! 4. **Orchestration**: cascades overflow across continuation pages and
//!    shrinks oversized submodel previews
//!
//! # Example
//!
//! ```
//! use brickbook_layout::{LayoutConfig, PageOutcome, PageTree, Size};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = LayoutConfig::default();
//! let mut tree = PageTree::new(config.page_size);
//! let page = tree.add_page(1);
//! tree.add_step(page, Size::new(200.0, 150.0)?)?;
//! let outcome = tree.init_layout(page, &config)?;
//! assert!(matches!(outcome, PageOutcome::Arranged { .. }));
//! # Ok(())
//! # }
//! ```

mod config;
mod furniture;
mod grid;
mod item;
mod orchestrator;
mod overflow;
mod tree;

pub use config::{ConfigError, LayoutConfig, ShrinkConfig};
pub use furniture::{
    fit_annotation, layout_title_page, lock_icon_position, page_number_rect, AnnotationFit,
    NumberPosition, TitlePageInput, TitlePageLayout,
};
pub use grid::{FixedShape, GridLayout, GridResult, GridShape, Separator};
pub use item::{LayoutItem, Orientation, Packable, PartEntry, Placeable};
pub use orchestrator::{
    pack_all, pack_all_with_progress, shrink_to_fit, PackProgress, PartListPage, ShrinkStep,
    ShrinkToFit, Shrinkable,
};
pub use overflow::{OverflowPacker, Packed};
pub use tree::{Node, NodeId, NodeKind, PageOutcome, PageState, PageTree, Preview, PreviewShrink};

pub use brickbook_core::{GeometryError, LayoutError, Margin, PartColor, Point, Rect, Size};
