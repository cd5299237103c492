//! Placement of the fixed page furniture: title page content, page
//! numbers, the layout lock icon and pasted annotation images.

use brickbook_core::{Margin, Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// Distance of the lock icon from the page's bottom-left corner.
const LOCK_ICON_INSET: f64 = 5.0;

/// Which corner the page number goes in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberPosition {
    /// Always bottom-left
    Left,
    /// Always bottom-right
    #[default]
    Right,
    /// Bottom-right on odd pages, bottom-left on even ones
    OddRight,
    /// Bottom-right on even pages, bottom-left on odd ones
    EvenRight,
}

impl NumberPosition {
    /// True if page `number` gets its label on the right.
    pub fn on_right(self, number: u32) -> bool {
        let odd = number % 2 == 1;
        match self {
            NumberPosition::Left => false,
            NumberPosition::Right => true,
            NumberPosition::OddRight => odd,
            NumberPosition::EvenRight => !odd,
        }
    }
}

/// Rectangle of the page number label for page `number`.
pub fn page_number_rect(
    page: Rect,
    margin: Margin,
    label: Size,
    number: u32,
    position: NumberPosition,
) -> Rect {
    let bottom = page.bottom() - margin.y - label.height();
    let x = if position.on_right(number) {
        page.right() - margin.x - label.width()
    } else {
        page.x() + margin.x
    };
    Rect::from_origin_size(Point::new(x, bottom), label)
}

/// Top-left corner of the lock icon.
pub fn lock_icon_position(page: Size, icon: Size) -> Point {
    Point::new(LOCK_ICON_INSET, page.height() - icon.height() - LOCK_ICON_INSET)
}

/// Result of fitting an annotation image to the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnotationFit {
    pub size: Size,
    pub resized: bool,
}

/// Scale an annotation image down until it fits on the page, height first,
/// keeping its aspect ratio.
pub fn fit_annotation(image: Size, page: Size) -> AnnotationFit {
    let mut size = image;
    let mut resized = false;

    if size.height() > page.height() {
        size = size.scale(page.height() / size.height());
        resized = true;
    }
    if size.width() > page.width() {
        size = size.scale(page.width() / size.width());
        resized = true;
    }

    if resized {
        tracing::info!(
            original_width = image.width(),
            original_height = image.height(),
            page_width = page.width(),
            page_height = page.height(),
            "annotation is larger than the page, resized"
        );
    }

    AnnotationFit { size, resized }
}

/// Everything the title page needs to know, measured by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitlePageInput {
    pub page_size: Size,
    pub margin: Margin,
    /// Title label, if any
    pub title: Option<Size>,
    /// Main model preview at scale 1.0
    pub preview: Option<Size>,
    /// "N pcs." label
    pub part_count_label: Option<Size>,
    /// "N Pages" label
    pub page_count_label: Option<Size>,
}

/// Positions chosen for the title page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitlePageLayout {
    /// Scale applied to the preview (1.0 when it already fit)
    pub preview_scale: f64,
    pub preview: Option<Rect>,
    pub title: Option<Rect>,
    pub part_count_label: Option<Rect>,
    pub page_count_label: Option<Rect>,
}

fn fit_scale(extent: f64, available: f64, slack: f64) -> f64 {
    if extent > available && extent > 0.0 {
        available / extent - slack
    } else {
        1.0
    }
}

/// Lay out a title page: the preview shrunk to fit and centered below the
/// title, the title centered above it, count labels in the bottom corners.
pub fn layout_title_page(input: &TitlePageInput, slack: f64) -> TitlePageLayout {
    let (pw, ph) = (input.page_size.width(), input.page_size.height());
    let margin = input.margin;
    let title_height = input.title.map_or(0.0, |t| t.height());

    let mut preview_scale = 1.0;
    let preview = input.preview.map(|natural| {
        let max_width = pw - margin.horizontal();
        let max_height = ph - title_height - margin.vertical();
        let scale_width = fit_scale(natural.width(), max_width, slack);
        let scale_height = fit_scale(natural.height(), max_height, slack);

        let mut size = natural;
        if scale_width < 1.0 || scale_height < 1.0 {
            preview_scale = scale_width.min(scale_height).max(0.0);
            size = natural.scale(preview_scale);
        }

        let x = (pw - size.width()) / 2.0;
        let y = if title_height > 0.0 {
            title_height + (ph - size.height() - title_height) / 1.5
        } else {
            (ph - size.height()) / 2.0
        };
        Rect::from_origin_size(Point::new(x, y), size)
    });

    let title = input.title.map(|size| {
        let band_height = preview.map_or(ph, |p| p.y());
        let band = Rect::from_size(Size::saturating(pw, band_height));
        band.centered(size)
    });

    let part_count_label = input.part_count_label.map(|label| {
        Rect::from_origin_size(
            Point::new(margin.x, ph - label.height() - margin.y),
            label,
        )
    });

    let page_count_label = input.page_count_label.map(|label| {
        Rect::from_origin_size(
            Point::new(pw - label.width() - margin.x, ph - label.height() - margin.y),
            label,
        )
    });

    TitlePageLayout {
        preview_scale,
        preview,
        title,
        part_count_label,
        page_count_label,
    }
}
