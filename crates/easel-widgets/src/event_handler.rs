//! Event handling trait and context for widgets
//!
//! Every node in the tree holds a [`Widget`]. The router calls
//! [`Widget::handle_event`] for kinds in the node's event mask and hands it
//! an [`EventCtx`] through which the widget queues follow-up work (posting
//! to its parent, targeting another node, opening or closing a modal).
//! Queued work runs after the handler returns, in the order it was queued.

use std::any::Any;

use easel_core::{DrawCtx, Result as DrawResult};
use easel_window::{Event, EventMask};

use crate::elements::Frame;
use crate::tree::{NodeId, Tree, short_type_name};

/// Result of an event handling operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// The widget acted on the event
    Handled,
    /// The widget looked at the event and did nothing
    Ignored,
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Handled)
    }

    pub fn or(self, other: EventResult) -> EventResult {
        if self.is_handled() { self } else { other }
    }
}

/// Upcast helper so the tree can hand out typed widget references.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Behavior attached to a tree node.
pub trait Widget: AsAny {
    /// Kinds this widget consumes. Installed as the node's event mask when
    /// the node is inserted.
    fn interest(&self) -> EventMask {
        EventMask::empty()
    }

    /// Kinds this widget consumes when they are posted or sent to it, or
    /// dispatched at it directly. Ancestors are not asked to route them down.
    fn local_interest(&self) -> EventMask {
        EventMask::empty()
    }

    fn handle_event(&mut self, ctx: &mut EventCtx<'_>, event: &Event) -> EventResult {
        let _ = (ctx, event);
        EventResult::Ignored
    }

    /// Draw the widget and, by default, its children in order.
    fn draw(&self, cx: &mut DrawCtx<'_>, children: Children<'_>) -> DrawResult<()> {
        children.draw(cx)
    }

    /// Rectangle state for widgets that occupy an area.
    fn frame(&self) -> Option<&Frame> {
        None
    }

    /// The event as this widget's children should see it, or `None` to
    /// keep it from them.
    fn child_event(&self, event: &Event) -> Option<Event> {
        Some(event.clone())
    }

    /// When set, events and drawing for this node's subtree go only to the
    /// returned node.
    fn exclusive_overlay(&self) -> Option<NodeId> {
        None
    }

    fn name(&self) -> &'static str {
        short_type_name::<Self>()
    }
}

/// The ordered children of a node, handed to [`Widget::draw`].
#[derive(Clone, Copy)]
pub struct Children<'a> {
    tree: &'a Tree,
    ids: &'a [NodeId],
}

impl<'a> Children<'a> {
    pub(crate) fn new(tree: &'a Tree, ids: &'a [NodeId]) -> Self {
        Self { tree, ids }
    }

    pub fn ids(&self) -> &'a [NodeId] {
        self.ids
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn draw(&self, cx: &mut DrawCtx<'_>) -> DrawResult<()> {
        for &id in self.ids {
            self.tree.draw_node(id, cx)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Action {
    PostToParent(Event),
    Send(NodeId, Event),
    InvokeModal(NodeId),
    FinishModal,
    Subscribe(EventMask),
}

/// Handle given to a widget while it processes one event.
pub struct EventCtx<'a> {
    tree: &'a Tree,
    id: NodeId,
    sender: Option<NodeId>,
    actions: Vec<Action>,
}

impl<'a> EventCtx<'a> {
    pub(crate) fn new(tree: &'a Tree, id: NodeId, sender: Option<NodeId>) -> Self {
        Self {
            tree,
            id,
            sender,
            actions: Vec::new(),
        }
    }

    pub(crate) fn into_actions(self) -> Vec<Action> {
        self.actions
    }

    /// The node handling the event.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The child that posted this event, if it arrived by posting rather
    /// than routing.
    pub fn sender(&self) -> Option<NodeId> {
        self.sender
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.tree.parent(self.id)
    }

    /// Read access to the rest of the tree. The handling widget itself is
    /// not reachable through it.
    pub fn tree(&self) -> &Tree {
        self.tree
    }

    /// Deliver `event` to the parent node, which sees this node as sender.
    pub fn post_to_parent(&mut self, event: Event) {
        self.actions.push(Action::PostToParent(event));
    }

    /// Deliver `event` to `target` as if it had been routed there.
    pub fn send(&mut self, target: NodeId, event: Event) {
        self.actions.push(Action::Send(target, event));
    }

    /// Show `modal` on the nearest modal manager above this node.
    pub fn invoke_modal(&mut self, modal: NodeId) {
        self.actions.push(Action::InvokeModal(modal));
    }

    /// Close the modal shown by the nearest modal manager above this node.
    pub fn finish_modal(&mut self) {
        self.actions.push(Action::FinishModal);
    }

    /// Start consuming `bits` in addition to the current interest.
    pub fn subscribe(&mut self, bits: EventMask) {
        self.actions.push(Action::Subscribe(bits));
    }
}
