//! Node arena for the widget hierarchy.
//!
//! Nodes live in a [`SlotMap`] and refer to each other by [`NodeId`]. A node
//! owns its children: removing a node releases its whole subtree exactly
//! once. Parent links are plain ids and never keep a node alive.

use std::io::{self, Write};

use easel_window::EventMask;
use slotmap::{SlotMap, new_key_type};
use thiserror::Error;

use crate::elements::{Frame, ModalManager};
use crate::event_handler::{AsAny, Widget};

new_key_type! {
    /// Stable handle to a node in a [`Tree`].
    pub struct NodeId;
}

/// Errors raised by structural tree operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("node {0:?} does not exist")]
    NodeNotFound(NodeId),

    #[error("node {child:?} already has parent {parent:?}")]
    AlreadyAttached { child: NodeId, parent: NodeId },

    #[error("attaching {child:?} under {parent:?} would create a cycle")]
    WouldCycle { parent: NodeId, child: NodeId },

    #[error("node {0:?} does not hold a {1}")]
    WidgetType(NodeId, &'static str),

    #[error("no modal manager above {0:?}")]
    NoModalManager(NodeId),

    #[error("node {0:?} has no parent")]
    NoParent(NodeId),
}

pub(crate) struct Node {
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) event_mask: EventMask,
    pub(crate) propagation_mask: EventMask,
    /// Part of `event_mask` that is never advertised to ancestors.
    pub(crate) local_mask: EventMask,
    /// Taken out while the widget handles an event.
    pub(crate) widget: Option<Box<dyn Widget>>,
}

/// Arena of widget nodes plus the structural operations over them.
#[derive(Default)]
pub struct Tree {
    pub(crate) nodes: SlotMap<NodeId, Node>,
    pub(crate) dispatch_depth: usize,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an unattached node. Its event mask starts as the widget's
    /// declared interest plus its local interest.
    pub fn insert(&mut self, widget: impl Widget) -> NodeId {
        self.insert_boxed(Box::new(widget))
    }

    pub fn insert_boxed(&mut self, widget: Box<dyn Widget>) -> NodeId {
        let interest = widget.interest();
        let local_mask = widget.local_interest().difference(interest);
        let id = self.nodes.insert(Node {
            parent: None,
            children: Vec::new(),
            event_mask: interest | local_mask,
            propagation_mask: EventMask::empty(),
            local_mask,
            widget: Some(widget),
        });
        tracing::trace!(?id, widget = self.name(id), "node inserted");
        id
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|n| n.parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    pub fn event_mask(&self, id: NodeId) -> EventMask {
        self.nodes.get(id).map(|n| n.event_mask).unwrap_or_default()
    }

    pub fn propagation_mask(&self, id: NodeId) -> EventMask {
        self.nodes
            .get(id)
            .map(|n| n.propagation_mask)
            .unwrap_or_default()
    }

    /// Bits a node asks its ancestors to route down to it.
    pub fn advertised_mask(&self, id: NodeId) -> EventMask {
        self.nodes
            .get(id)
            .map(|n| n.event_mask.difference(n.local_mask) | n.propagation_mask)
            .unwrap_or_default()
    }

    /// `id` followed by each of its ancestors up to the root.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.contains(id).then_some(id), move |&n| self.parent(n))
    }

    /// True if `ancestor` is `id` or lies on its parent chain.
    pub fn is_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        self.ancestors(id).any(|n| n == ancestor)
    }

    /// Append `child` to `parent`'s children and widen the propagation
    /// masks of `parent` and every ancestor above it.
    pub fn attach(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        let child_node = self.nodes.get(child).ok_or(TreeError::NodeNotFound(child))?;
        if !self.contains(parent) {
            return Err(TreeError::NodeNotFound(parent));
        }
        if let Some(existing) = child_node.parent {
            return Err(TreeError::AlreadyAttached {
                child,
                parent: existing,
            });
        }
        if self.is_ancestor(child, parent) {
            return Err(TreeError::WouldCycle { parent, child });
        }

        let bits = self.advertised_mask(child);
        self.nodes[parent].children.push(child);
        self.nodes[child].parent = Some(parent);
        self.propagate_up(parent, bits);
        Ok(())
    }

    /// Unlink `id` from its parent. Ancestors keep the mask bits the
    /// subtree contributed. Detaching an unparented node does nothing.
    pub fn detach(&mut self, id: NodeId) -> Result<(), TreeError> {
        let node = self.nodes.get_mut(id).ok_or(TreeError::NodeNotFound(id))?;
        let Some(parent) = node.parent.take() else {
            return Ok(());
        };
        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.retain(|&c| c != id);
        }
        Ok(())
    }

    /// Widen `id`'s own event mask and every ancestor's propagation mask.
    pub fn update_event_mask(&mut self, id: NodeId, bits: EventMask) -> Result<(), TreeError> {
        let node = self.nodes.get_mut(id).ok_or(TreeError::NodeNotFound(id))?;
        node.event_mask |= bits;
        node.local_mask.remove(bits);
        if let Some(parent) = node.parent {
            self.propagate_up(parent, bits);
        }
        Ok(())
    }

    pub(crate) fn propagate_up(&mut self, from: NodeId, bits: EventMask) {
        let mut cursor = Some(from);
        while let Some(id) = cursor {
            let Some(node) = self.nodes.get_mut(id) else {
                break;
            };
            node.propagation_mask |= bits;
            cursor = node.parent;
        }
    }

    /// Remove `id` and its whole subtree. Returns the number of nodes
    /// released.
    pub fn remove(&mut self, id: NodeId) -> Result<usize, TreeError> {
        if !self.contains(id) {
            return Err(TreeError::NodeNotFound(id));
        }
        self.detach(id)?;

        let mut stack = vec![id];
        let mut removed = Vec::new();
        while let Some(next) = stack.pop() {
            if let Some(node) = self.nodes.remove(next) {
                stack.extend(node.children.iter().copied());
                removed.push(next);
            }
        }

        // Overlay back-links and modal references may still point at the
        // released nodes.
        for (_, node) in self.nodes.iter_mut() {
            if node.parent.is_some_and(|p| removed.contains(&p)) {
                node.parent = None;
            }
            if let Some(manager) = node
                .widget
                .as_deref_mut()
                .and_then(|w| <dyn Widget as AsAny>::as_any_mut(w).downcast_mut::<ModalManager>())
            {
                if manager.current_modal().is_some_and(|m| removed.contains(&m)) {
                    manager.clear();
                }
            }
        }

        tracing::debug!(?id, count = removed.len(), "subtree removed");
        Ok(removed.len())
    }

    /// Every node below `id`, depth first in child order.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev());
        }
        out
    }

    pub fn widget<T: Widget>(&self, id: NodeId) -> Option<&T> {
        let widget = self.nodes.get(id)?.widget.as_deref()?;
        <dyn Widget as AsAny>::as_any(widget).downcast_ref::<T>()
    }

    pub fn widget_mut<T: Widget>(&mut self, id: NodeId) -> Option<&mut T> {
        let widget = self.nodes.get_mut(id)?.widget.as_deref_mut()?;
        <dyn Widget as AsAny>::as_any_mut(widget).downcast_mut::<T>()
    }

    /// Run `f` against the typed widget stored at `id`.
    pub fn with_widget<T: Widget, R>(
        &mut self,
        id: NodeId,
        f: impl FnOnce(&mut T) -> R,
    ) -> Result<R, TreeError> {
        if !self.contains(id) {
            return Err(TreeError::NodeNotFound(id));
        }
        self.widget_mut::<T>(id)
            .map(f)
            .ok_or(TreeError::WidgetType(id, short_type_name::<T>()))
    }

    pub fn dyn_widget(&self, id: NodeId) -> Option<&dyn Widget> {
        self.nodes.get(id)?.widget.as_deref()
    }

    pub fn name(&self, id: NodeId) -> &'static str {
        self.dyn_widget(id).map(|w| w.name()).unwrap_or("<detached>")
    }

    pub fn frame(&self, id: NodeId) -> Option<&Frame> {
        self.dyn_widget(id)?.frame()
    }

    /// Whether `p` falls inside the rectangle of the node at `id`. Nodes
    /// without a rectangle never match.
    pub fn hit_test(&self, id: NodeId, p: easel_core::Point) -> bool {
        self.frame(id).is_some_and(|f| f.hit_test(p))
    }

    /// Write the subtree under `root` as a Graphviz digraph.
    pub fn dump_dot(&self, root: NodeId, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "digraph hierarchy {{")?;
        writeln!(out, "    node [shape=box];")?;
        let mut counter = 0usize;
        let mut stack: Vec<(NodeId, Option<usize>)> = vec![(root, None)];
        while let Some((id, parent_index)) = stack.pop() {
            let Some(node) = self.nodes.get(id) else {
                continue;
            };
            let index = counter;
            counter += 1;
            writeln!(
                out,
                "    n{index} [label=\"{}\\nconsumes: {}\\nforwards: {}\"];",
                self.name(id),
                mask_label(node.event_mask),
                mask_label(node.propagation_mask),
            )?;
            if let Some(p) = parent_index {
                writeln!(out, "    n{p} -> n{index};")?;
            }
            for &child in node.children.iter().rev() {
                stack.push((child, Some(index)));
            }
        }
        writeln!(out, "}}")
    }
}

fn mask_label(mask: EventMask) -> String {
    if mask.is_empty() {
        return "-".to_string();
    }
    mask.iter_names()
        .map(|(name, _)| name.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::Group;
    use crate::event_handler::{EventCtx, EventResult};
    use easel_window::Event;

    struct Probe(EventMask);

    impl Widget for Probe {
        fn interest(&self) -> EventMask {
            self.0
        }

        fn handle_event(&mut self, _ctx: &mut EventCtx<'_>, _event: &Event) -> EventResult {
            EventResult::Handled
        }
    }

    #[test]
    fn test_attach_propagates_masks_to_all_ancestors() {
        let mut tree = Tree::new();
        let root = tree.insert(Group::new());
        let mid = tree.insert(Group::new());
        let leaf = tree.insert(Probe(EventMask::SCROLL));
        tree.attach(mid, leaf).unwrap();
        tree.attach(root, mid).unwrap();

        assert_eq!(tree.propagation_mask(mid), EventMask::SCROLL);
        assert_eq!(tree.propagation_mask(root), EventMask::SCROLL);
        assert!(tree.event_mask(root).is_empty());
    }

    struct Quiet;

    impl Widget for Quiet {
        fn interest(&self) -> EventMask {
            EventMask::POINTER_MOVE
        }

        fn local_interest(&self) -> EventMask {
            EventMask::SCROLL
        }
    }

    #[test]
    fn test_local_interest_stays_off_ancestors() {
        let mut tree = Tree::new();
        let root = tree.insert(Group::new());
        let quiet = tree.insert(Quiet);
        tree.attach(root, quiet).unwrap();

        assert_eq!(tree.event_mask(quiet), EventMask::POINTER_MOVE | EventMask::SCROLL);
        assert_eq!(tree.propagation_mask(root), EventMask::POINTER_MOVE);

        // An explicit subscription is advertised like any other.
        tree.update_event_mask(quiet, EventMask::SCROLL).unwrap();
        assert_eq!(tree.propagation_mask(root), EventMask::POINTER_MOVE | EventMask::SCROLL);
    }

    #[test]
    fn test_descendants_in_child_order() {
        let mut tree = Tree::new();
        let root = tree.insert(Group::new());
        let a = tree.insert(Group::new());
        let a1 = tree.insert(Group::new());
        let b = tree.insert(Group::new());
        tree.attach(root, a).unwrap();
        tree.attach(a, a1).unwrap();
        tree.attach(root, b).unwrap();
        assert_eq!(tree.descendants(root), vec![a, a1, b]);
    }

    #[test]
    fn test_attach_rejects_second_parent_and_cycles() {
        let mut tree = Tree::new();
        let a = tree.insert(Group::new());
        let b = tree.insert(Group::new());
        let c = tree.insert(Group::new());
        tree.attach(a, b).unwrap();
        tree.attach(b, c).unwrap();

        assert_eq!(
            tree.attach(c, b),
            Err(TreeError::AlreadyAttached { child: b, parent: a })
        );
        assert_eq!(tree.attach(c, a), Err(TreeError::WouldCycle { parent: c, child: a }));
        assert_eq!(tree.attach(a, a), Err(TreeError::WouldCycle { parent: a, child: a }));
    }

    #[test]
    fn test_detach_keeps_masks_and_is_idempotent() {
        let mut tree = Tree::new();
        let root = tree.insert(Group::new());
        let leaf = tree.insert(Probe(EventMask::POINTER));
        tree.attach(root, leaf).unwrap();

        tree.detach(leaf).unwrap();
        tree.detach(leaf).unwrap();
        assert!(tree.children(root).is_empty());
        assert_eq!(tree.parent(leaf), None);
        assert_eq!(tree.propagation_mask(root), EventMask::POINTER);
    }

    #[test]
    fn test_update_event_mask_widens_chain() {
        let mut tree = Tree::new();
        let root = tree.insert(Group::new());
        let leaf = tree.insert(Group::new());
        tree.attach(root, leaf).unwrap();
        tree.update_event_mask(leaf, EventMask::KEY_PRESS).unwrap();

        assert_eq!(tree.event_mask(leaf), EventMask::KEY_PRESS);
        assert_eq!(tree.propagation_mask(root), EventMask::KEY_PRESS);
    }

    #[test]
    fn test_remove_releases_subtree_once() {
        let mut tree = Tree::new();
        let root = tree.insert(Group::new());
        let panel = tree.insert(Group::new());
        tree.attach(root, panel).unwrap();
        for _ in 0..3 {
            let child = tree.insert(Group::new());
            tree.attach(panel, child).unwrap();
        }

        assert_eq!(tree.remove(panel), Ok(4));
        assert_eq!(tree.len(), 1);
        assert!(tree.children(root).is_empty());
        assert_eq!(tree.remove(panel), Err(TreeError::NodeNotFound(panel)));
    }

    #[test]
    fn test_typed_access() {
        let mut tree = Tree::new();
        let id = tree.insert(Probe(EventMask::TEXT));
        assert!(tree.widget::<Probe>(id).is_some());
        assert!(tree.widget::<Group>(id).is_none());
        assert_eq!(
            tree.with_widget::<Group, _>(id, |_| ()),
            Err(TreeError::WidgetType(id, "Group"))
        );
        assert_eq!(tree.name(id), "Probe");
    }

    #[test]
    fn test_dump_dot_lists_edges() {
        let mut tree = Tree::new();
        let root = tree.insert(Group::new());
        let child = tree.insert(Probe(EventMask::SCROLL));
        tree.attach(root, child).unwrap();

        let mut out = Vec::new();
        tree.dump_dot(root, &mut out).unwrap();
        let dot = String::from_utf8(out).unwrap();
        assert!(dot.starts_with("digraph hierarchy {"));
        assert!(dot.contains("n0 -> n1;"));
        assert!(dot.contains("Probe\\nconsumes: scroll"));
    }
}
