//! Page tree: pages, steps and nested callouts.
//!
//! Nodes live in a flat arena and refer to each other by index. A page holds
//! steps (plus an optional submodel preview), a step holds callouts, and a
//! callout holds steps again, to any depth.

use brickbook_core::{LayoutError, Margin, Rect, Size};
use smallvec::SmallVec;

use crate::config::LayoutConfig;
use crate::grid::{GridShape, Separator};
use crate::item::{Orientation, Placeable};
use crate::orchestrator::{shrink_to_fit, ShrinkStep, Shrinkable};

/// Index of a node in a [`PageTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// The submodel preview shown on a page.
#[derive(Debug, Clone, PartialEq)]
pub struct Preview {
    /// Submodel name, used in progress labels
    pub name: String,
    /// Size at scale 1.0
    pub base: Size,
    pub scale: f64,
    pub rect: Rect,
}

impl Preview {
    pub fn new(name: impl Into<String>, base: Size) -> Self {
        Self {
            name: name.into(),
            base,
            scale: 1.0,
            rect: Rect::from_size(base),
        }
    }

    /// Size at the current scale.
    pub fn natural_size(&self) -> Size {
        self.base.scale(self.scale)
    }
}

/// Page-only state.
#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    pub number: u32,
    /// Locked pages keep their current layout
    pub locked: bool,
    pub preview: Option<Preview>,
}

/// What a node is.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Page(PageState),
    Step,
    Callout,
}

impl NodeKind {
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Page(_) => "page",
            NodeKind::Step => "step",
            NodeKind::Callout => "callout",
        }
    }
}

/// A node in the page tree.
#[derive(Debug, Clone)]
pub struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: SmallVec<[NodeId; 4]>,
    natural: Size,
    rect: Rect,
    orientation: Option<Orientation>,
    separators: Vec<Separator>,
}

impl Node {
    fn new(kind: NodeKind, natural: Size) -> Self {
        Self {
            kind,
            parent: None,
            children: SmallVec::new(),
            natural,
            rect: Rect::from_size(natural),
            orientation: None,
            separators: Vec::new(),
        }
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Dividers between this node's children from the last layout pass.
    pub fn separators(&self) -> &[Separator] {
        &self.separators
    }
}

impl Placeable for Node {
    /// Size supplied by the host.
    fn natural_size(&self) -> Size {
        self.natural
    }

    /// Rectangle from the last layout pass.
    fn rect(&self) -> Rect {
        self.rect
    }

    fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    /// Orientation used for this node's children, if it overrides the default.
    fn orientation(&self) -> Option<Orientation> {
        self.orientation
    }
}

/// What [`PageTree::init_layout`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    /// Page is locked; nothing moved
    Locked,
    /// Page has no steps; only the preview was positioned
    Empty,
    /// Steps were arranged in a grid
    Arranged { shape: GridShape, separators: usize },
}

/// Arena of pages, steps and callouts.
#[derive(Debug, Clone)]
pub struct PageTree {
    nodes: Vec<Node>,
    pages: Vec<NodeId>,
    page_size: Size,
}

impl Default for PageTree {
    fn default() -> Self {
        Self::new(LayoutConfig::default().page_size)
    }
}

fn any_overlap(rects: &[Rect]) -> bool {
    rects
        .iter()
        .enumerate()
        .any(|(i, a)| rects[i + 1..].iter().any(|b| a.intersects(b)))
}

fn no_preview(page: NodeId) -> LayoutError {
    LayoutError::WrongNodeKind {
        index: page.0,
        expected: "page with a preview",
        found: "page",
    }
}

impl PageTree {
    /// Create an empty tree whose pages are all `page_size`.
    pub fn new(page_size: Size) -> Self {
        Self {
            nodes: Vec::new(),
            pages: Vec::new(),
            page_size,
        }
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Get a node by ID.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    fn node(&self, id: NodeId) -> Result<&Node, LayoutError> {
        self.nodes
            .get(id.0)
            .ok_or(LayoutError::UnknownNode { index: id.0 })
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, LayoutError> {
        self.nodes
            .get_mut(id.0)
            .ok_or(LayoutError::UnknownNode { index: id.0 })
    }

    fn page_state_mut(&mut self, id: NodeId) -> Result<&mut PageState, LayoutError> {
        let node = self.node_mut(id)?;
        match &mut node.kind {
            NodeKind::Page(state) => Ok(state),
            other => Err(LayoutError::WrongNodeKind {
                index: id.0,
                expected: "page",
                found: other.name(),
            }),
        }
    }

    /// Page state of `id`.
    pub fn page_state(&self, id: NodeId) -> Result<&PageState, LayoutError> {
        match &self.node(id)?.kind {
            NodeKind::Page(state) => Ok(state),
            other => Err(LayoutError::WrongNodeKind {
                index: id.0,
                expected: "page",
                found: other.name(),
            }),
        }
    }

    /// All pages in creation order.
    pub fn pages(&self) -> &[NodeId] {
        &self.pages
    }

    /// Iterate over the children of a node.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &Node> {
        self.nodes
            .get(id.0)
            .into_iter()
            .flat_map(|n| n.children.iter())
            .filter_map(|child| self.nodes.get(child.0))
    }

    /// Add an empty page.
    pub fn add_page(&mut self, number: u32) -> NodeId {
        let state = PageState {
            number,
            locked: false,
            preview: None,
        };
        let id = self.push(Node::new(NodeKind::Page(state), self.page_size));
        self.pages.push(id);
        id
    }

    /// Append a step to a page or callout.
    pub fn add_step(&mut self, parent: NodeId, natural: Size) -> Result<NodeId, LayoutError> {
        let row = self.node(parent)?.children.len();
        self.insert_step(parent, row, natural)
    }

    /// Insert a step at `row` among the children of a page or callout.
    /// Rows past the end append.
    pub fn insert_step(
        &mut self,
        parent: NodeId,
        row: usize,
        natural: Size,
    ) -> Result<NodeId, LayoutError> {
        match self.node(parent)?.kind {
            NodeKind::Page(_) | NodeKind::Callout => {}
            NodeKind::Step => {
                return Err(LayoutError::WrongNodeKind {
                    index: parent.0,
                    expected: "page or callout",
                    found: "step",
                })
            }
        }
        Ok(self.attach(parent, Some(row), Node::new(NodeKind::Step, natural)))
    }

    /// Add a callout to a step.
    pub fn add_callout(&mut self, step: NodeId, natural: Size) -> Result<NodeId, LayoutError> {
        let kind = &self.node(step)?.kind;
        if *kind != NodeKind::Step {
            return Err(LayoutError::WrongNodeKind {
                index: step.0,
                expected: "step",
                found: kind.name(),
            });
        }
        Ok(self.attach(step, None, Node::new(NodeKind::Callout, natural)))
    }

    fn attach(&mut self, parent: NodeId, row: Option<usize>, mut node: Node) -> NodeId {
        node.parent = Some(parent);
        let id = self.push(node);
        let children = &mut self.nodes[parent.0].children;
        let row = row.unwrap_or(children.len()).min(children.len());
        children.insert(row, id);
        id
    }

    /// Give a page a submodel preview at scale 1.0.
    pub fn set_preview(
        &mut self,
        page: NodeId,
        name: impl Into<String>,
        base: Size,
    ) -> Result<(), LayoutError> {
        self.page_state_mut(page)?.preview = Some(Preview::new(name, base));
        Ok(())
    }

    /// Change the preview scale without re-running layout.
    pub fn set_preview_scale(&mut self, page: NodeId, scale: f64) -> Result<(), LayoutError> {
        let preview = self
            .page_state_mut(page)?
            .preview
            .as_mut()
            .ok_or_else(|| no_preview(page))?;
        preview.scale = scale.max(0.0);
        preview.rect = Rect::from_origin_size(preview.rect.origin(), preview.natural_size());
        Ok(())
    }

    /// Override the orientation used for a node's children.
    pub fn set_orientation(
        &mut self,
        id: NodeId,
        orientation: Option<Orientation>,
    ) -> Result<(), LayoutError> {
        self.node_mut(id)?.orientation = orientation;
        Ok(())
    }

    /// Lock or unlock a page's layout.
    pub fn lock(&mut self, page: NodeId, locked: bool) -> Result<(), LayoutError> {
        self.page_state_mut(page)?.locked = locked;
        Ok(())
    }

    /// Nearest step at or above `id`.
    pub fn find_enclosing_step(&self, id: NodeId) -> Option<NodeId> {
        self.ancestors(id)
            .find(|(_, node)| node.kind == NodeKind::Step)
            .map(|(id, _)| id)
    }

    /// Page that `id` belongs to.
    pub fn page_of(&self, id: NodeId) -> Option<NodeId> {
        self.ancestors(id)
            .find(|(_, node)| matches!(node.kind, NodeKind::Page(_)))
            .map(|(id, _)| id)
    }

    /// `id` followed by each of its ancestors.
    fn ancestors(&self, id: NodeId) -> impl Iterator<Item = (NodeId, &Node)> {
        std::iter::successors(self.get(id).map(|node| (id, node)), |(_, node)| {
            node.parent.and_then(|parent| self.get(parent).map(|p| (parent, p)))
        })
    }

    /// Run automatic layout for a page and everything nested in it.
    ///
    /// Members (`[preview] + steps`) are arranged in a grid inside the page
    /// inset by its margin; each step's callouts are then arranged inside the
    /// step, and each callout's steps inside the callout, recursively.
    /// Separator indices count the preview as member 0 when present.
    pub fn init_layout(
        &mut self,
        page: NodeId,
        config: &LayoutConfig,
    ) -> Result<PageOutcome, LayoutError> {
        let state = self.page_state(page)?;
        let number = state.number;
        if state.locked {
            tracing::debug!(page = number, "skipping layout of locked page");
            return Ok(PageOutcome::Locked);
        }

        let node = &mut self.nodes[page.0];
        node.separators.clear();
        let bounds = node.rect.inset(config.page_margin);
        let grid = config.grid().for_container(&*node);
        let steps: Vec<NodeId> = node.children.to_vec();

        let preview_size = self.page_state(page)?.preview.as_ref().map(Preview::natural_size);

        if steps.is_empty() {
            if let Some(preview) = self.page_state_mut(page)?.preview.as_mut() {
                preview.rect = Rect::from_origin_size(bounds.origin(), preview.natural_size());
            }
            tracing::debug!(page = number, "page has no steps");
            return Ok(PageOutcome::Empty);
        }

        let mut sizes: Vec<Size> = preview_size.into_iter().collect();
        sizes.extend(steps.iter().map(|step| self.nodes[step.0].natural));

        let result = grid.compute(bounds, &sizes);
        let mut rects = result.rects.iter().copied();

        if preview_size.is_some() {
            if let (Some(preview), Some(rect)) =
                (self.page_state_mut(page)?.preview.as_mut(), rects.next())
            {
                preview.rect = rect;
            }
        }
        for (step, rect) in steps.iter().zip(rects) {
            self.nodes[step.0].set_rect(rect);
        }

        let separators = if config.show_separators {
            result.separators
        } else {
            Vec::new()
        };
        let separator_count = separators.len();
        self.nodes[page.0].separators = separators;

        for step in &steps {
            self.layout_children(*step, config);
        }

        tracing::debug!(
            page = number,
            rows = result.shape.rows,
            columns = result.shape.columns,
            "initialized page layout"
        );

        Ok(PageOutcome::Arranged {
            shape: result.shape,
            separators: separator_count,
        })
    }

    /// Arrange the children of a step or callout inside it.
    fn layout_children(&mut self, id: NodeId, config: &LayoutConfig) {
        let node = &mut self.nodes[id.0];
        node.separators.clear();
        if node.children.is_empty() {
            return;
        }

        let bounds = match node.kind {
            NodeKind::Callout => node.rect.inset(Margin::uniform(config.callout_margin)),
            _ => node.rect,
        };
        let grid = config.grid().for_container(&*node);
        let children: Vec<NodeId> = node.children.to_vec();

        let sizes: Vec<Size> = children.iter().map(|c| self.nodes[c.0].natural).collect();
        let result = grid.compute(bounds, &sizes);
        for (child, rect) in children.iter().zip(&result.rects) {
            self.nodes[child.0].set_rect(*rect);
        }
        if config.show_separators {
            self.nodes[id.0].separators = result.separators;
        }

        tracing::trace!(node = id.0, children = children.len(), "laid out nested content");

        for child in children {
            self.layout_children(child, config);
        }
    }

    /// Member rectangles of a page: the preview first, then its steps.
    fn page_members(&self, page: NodeId) -> Vec<Rect> {
        let Some(node) = self.get(page) else {
            return Vec::new();
        };
        let preview = match &node.kind {
            NodeKind::Page(state) => state.preview.as_ref().map(|p| p.rect),
            _ => None,
        };
        preview
            .into_iter()
            .chain(self.children(page).map(Node::rect))
            .collect()
    }

    /// True if anything on the page leaves the page or overlaps a sibling,
    /// at any depth.
    pub fn has_overlaps(&self, page: NodeId) -> bool {
        let Some(node) = self.get(page) else {
            return false;
        };
        let members = self.page_members(page);
        if members.iter().any(|r| !node.rect.contains_rect(r)) || any_overlap(&members) {
            return true;
        }
        node.children.iter().any(|step| self.children_overlap(*step))
    }

    fn children_overlap(&self, id: NodeId) -> bool {
        let rects: Vec<Rect> = self.children(id).map(Node::rect).collect();
        if any_overlap(&rects) {
            return true;
        }
        self.get(id)
            .map(|node| node.children.iter().any(|child| self.children_overlap(*child)))
            .unwrap_or(false)
    }

    /// Adapter that lets [`shrink_to_fit`] drive a page's preview.
    pub fn preview_shrink<'a>(
        &'a mut self,
        page: NodeId,
        config: &'a LayoutConfig,
    ) -> Result<PreviewShrink<'a>, LayoutError> {
        if self.page_state(page)?.preview.is_none() {
            return Err(no_preview(page));
        }
        Ok(PreviewShrink {
            tree: self,
            page,
            config,
        })
    }

    /// Shrink a page's preview until nothing on the page overlaps or the
    /// configured floor is reached. Pages without a preview are left alone.
    pub fn adjust_preview(
        &mut self,
        page: NodeId,
        config: &LayoutConfig,
    ) -> Result<Vec<ShrinkStep>, LayoutError> {
        if self.page_state(page)?.preview.is_none() {
            return Ok(Vec::new());
        }
        let mut target = self.preview_shrink(page, config)?;
        let steps = shrink_to_fit(&mut target, config.shrink, |t: &PreviewShrink<'_>| {
            t.has_overlaps()
        })
        .collect();
        Ok(steps)
    }
}

/// A page's preview seen as something [`shrink_to_fit`] can shrink.
pub struct PreviewShrink<'a> {
    tree: &'a mut PageTree,
    page: NodeId,
    config: &'a LayoutConfig,
}

impl PreviewShrink<'_> {
    /// Default overlap check: the whole page tree.
    pub fn has_overlaps(&self) -> bool {
        self.tree.has_overlaps(self.page)
    }

    fn preview(&self) -> Option<&Preview> {
        self.tree
            .page_state(self.page)
            .ok()
            .and_then(|state| state.preview.as_ref())
    }
}

impl Shrinkable for PreviewShrink<'_> {
    fn scale(&self) -> f64 {
        self.preview().map_or(1.0, |p| p.scale)
    }

    fn set_scale(&mut self, scale: f64) {
        if let Err(err) = self.tree.set_preview_scale(self.page, scale) {
            tracing::warn!(%err, "could not scale preview");
        }
    }

    fn relayout(&mut self) {
        if let Err(err) = self.tree.init_layout(self.page, self.config) {
            tracing::warn!(%err, "could not re-layout page after scaling its preview");
        }
    }

    fn describe(&self, scale: f64) -> String {
        let name = self.preview().map_or("submodel", |p| p.name.as_str());
        format!("Scaling {name} preview to {scale:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brickbook_core::Point;

    fn size(w: f64, h: f64) -> Size {
        Size::new(w, h).unwrap()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.001
    }

    #[test]
    fn test_structure_rules() {
        let mut tree = PageTree::default();
        let page = tree.add_page(1);
        let step = tree.add_step(page, size(100.0, 100.0)).unwrap();

        let err = tree.add_step(step, size(10.0, 10.0)).unwrap_err();
        assert_eq!(
            err,
            LayoutError::WrongNodeKind { index: step.index(), expected: "page or callout", found: "step" }
        );
        assert!(tree.add_callout(page, size(10.0, 10.0)).is_err());
        assert!(matches!(
            tree.add_step(NodeId(99), size(1.0, 1.0)),
            Err(LayoutError::UnknownNode { index: 99 })
        ));
    }

    #[test]
    fn test_find_enclosing_step() {
        let mut tree = PageTree::default();
        let page = tree.add_page(1);
        let step = tree.add_step(page, size(300.0, 300.0)).unwrap();
        let callout = tree.add_callout(step, size(100.0, 100.0)).unwrap();
        let inner = tree.add_step(callout, size(50.0, 50.0)).unwrap();

        assert_eq!(tree.find_enclosing_step(callout), Some(step));
        assert_eq!(tree.find_enclosing_step(inner), Some(inner));
        assert_eq!(tree.find_enclosing_step(page), None);
        assert_eq!(tree.page_of(inner), Some(page));
        assert_eq!(tree.get(inner).unwrap().parent(), Some(callout));
    }

    #[test]
    fn test_insert_step_at_row() {
        let mut tree = PageTree::default();
        let page = tree.add_page(1);
        let first = tree.add_step(page, size(10.0, 10.0)).unwrap();
        let last = tree.add_step(page, size(10.0, 10.0)).unwrap();
        let middle = tree.insert_step(page, 1, size(10.0, 10.0)).unwrap();
        let appended = tree.insert_step(page, 42, size(10.0, 10.0)).unwrap();
        assert_eq!(tree.get(page).unwrap().children(), &[first, middle, last, appended]);
    }

    #[test]
    fn test_page_grid_layout() {
        let config = LayoutConfig::default();
        let mut tree = PageTree::default();
        let page = tree.add_page(1);
        let steps: Vec<NodeId> = (0..4)
            .map(|_| tree.add_step(page, size(100.0, 100.0)).unwrap())
            .collect();

        let outcome = tree.init_layout(page, &config).unwrap();
        assert_eq!(
            outcome,
            PageOutcome::Arranged { shape: GridShape { rows: 2, columns: 2 }, separators: 2 }
        );

        let first = tree.get(steps[0]).unwrap().rect();
        assert!(approx(first.x(), 157.5));
        assert!(approx(first.y(), 107.5));
        let last = tree.get(steps[3]).unwrap().rect();
        assert!(approx(last.x(), 542.5));
        assert!(approx(last.y(), 392.5));
        assert_eq!(tree.get(page).unwrap().separators().len(), 2);
        assert!(!tree.has_overlaps(page));
    }

    #[test]
    fn test_hidden_separators() {
        let config = LayoutConfig {
            show_separators: false,
            ..Default::default()
        };
        let mut tree = PageTree::default();
        let page = tree.add_page(1);
        tree.add_step(page, size(100.0, 100.0)).unwrap();
        tree.add_step(page, size(100.0, 100.0)).unwrap();

        let outcome = tree.init_layout(page, &config).unwrap();
        assert!(matches!(outcome, PageOutcome::Arranged { separators: 0, .. }));
        assert!(tree.get(page).unwrap().separators().is_empty());
    }

    #[test]
    fn test_locked_page_is_untouched() {
        let config = LayoutConfig::default();
        let mut tree = PageTree::default();
        let page = tree.add_page(1);
        let step = tree.add_step(page, size(100.0, 100.0)).unwrap();
        tree.lock(page, true).unwrap();

        assert_eq!(tree.init_layout(page, &config).unwrap(), PageOutcome::Locked);
        assert_eq!(tree.get(step).unwrap().rect().origin(), Point::ORIGIN);
    }

    #[test]
    fn test_empty_page_positions_preview() {
        let config = LayoutConfig::default();
        let mut tree = PageTree::default();
        let page = tree.add_page(1);
        tree.set_preview(page, "chassis", size(200.0, 100.0)).unwrap();

        assert_eq!(tree.init_layout(page, &config).unwrap(), PageOutcome::Empty);
        let preview = tree.page_state(page).unwrap().preview.as_ref().unwrap().rect;
        assert_eq!(preview.origin(), Point::new(15.0, 15.0));
    }

    #[test]
    fn test_nested_callouts_are_laid_out_recursively() {
        let config = LayoutConfig::default();
        let mut tree = PageTree::default();
        let page = tree.add_page(1);
        let step = tree.add_step(page, size(400.0, 300.0)).unwrap();
        let callout = tree.add_callout(step, size(100.0, 100.0)).unwrap();
        let inner = tree.add_step(callout, size(50.0, 50.0)).unwrap();

        tree.init_layout(page, &config).unwrap();

        assert_eq!(tree.get(step).unwrap().rect().origin(), Point::new(200.0, 150.0));
        assert_eq!(tree.get(callout).unwrap().rect().origin(), Point::new(350.0, 250.0));
        assert_eq!(tree.get(inner).unwrap().rect().origin(), Point::new(375.0, 275.0));
    }

    #[test]
    fn test_vertical_page_orientation() {
        let config = LayoutConfig::default();
        let mut tree = PageTree::default();
        let page = tree.add_page(1);
        let a = tree.add_step(page, size(100.0, 100.0)).unwrap();
        let b = tree.add_step(page, size(100.0, 100.0)).unwrap();
        tree.set_orientation(page, Some(Orientation::Vertical)).unwrap();

        let outcome = tree.init_layout(page, &config).unwrap();
        assert!(matches!(
            outcome,
            PageOutcome::Arranged { shape: GridShape { rows: 2, columns: 1 }, .. }
        ));
        let (ra, rb) = (tree.get(a).unwrap().rect(), tree.get(b).unwrap().rect());
        assert!(approx(ra.x(), rb.x()));
        assert!(ra.y() < rb.y());
    }

    #[test]
    fn test_overlapping_steps_detected() {
        let config = LayoutConfig::default();
        let mut tree = PageTree::default();
        let page = tree.add_page(1);
        tree.add_step(page, size(500.0, 500.0)).unwrap();
        tree.add_step(page, size(500.0, 500.0)).unwrap();
        tree.init_layout(page, &config).unwrap();
        assert!(tree.has_overlaps(page));
    }

    #[test]
    fn test_adjust_preview_shrinks_until_page_fits() {
        let config = LayoutConfig::default();
        let mut tree = PageTree::default();
        let page = tree.add_page(3);
        tree.set_preview(page, "wing", size(600.0, 500.0)).unwrap();
        tree.add_step(page, size(300.0, 300.0)).unwrap();
        tree.init_layout(page, &config).unwrap();
        assert!(tree.has_overlaps(page));

        let steps = tree.adjust_preview(page, &config).unwrap();
        let scales: Vec<f64> = steps.iter().map(|s| s.scale).collect();
        assert_eq!(scales.len(), 2);
        assert!(approx(scales[0], 0.8));
        assert!(approx(scales[1], 0.6));
        assert_eq!(steps[1].label, "Scaling wing preview to 0.6");
        assert!(!tree.has_overlaps(page));
    }

    #[test]
    fn test_adjust_preview_without_preview_is_noop() {
        let config = LayoutConfig::default();
        let mut tree = PageTree::default();
        let page = tree.add_page(1);
        assert!(tree.adjust_preview(page, &config).unwrap().is_empty());
        assert!(tree.preview_shrink(page, &config).is_err());
    }

    #[test]
    fn test_scaling_missing_preview_is_an_error() {
        let mut tree = PageTree::default();
        let page = tree.add_page(2);
        let err = tree.set_preview_scale(page, 0.5).unwrap_err();
        assert_eq!(
            err,
            LayoutError::WrongNodeKind { index: page.index(), expected: "page with a preview", found: "page" }
        );

        tree.set_preview(page, "cab", size(100.0, 50.0)).unwrap();
        tree.set_preview_scale(page, 0.5).unwrap();
        let preview = tree.page_state(page).unwrap().preview.as_ref().unwrap();
        assert_eq!(preview.rect.size(), size(50.0, 25.0));
    }
}
