//! Event Router - dispatch through the node tree
//!
//! Routing is mask driven. At each node:
//! 1. If the widget shows an exclusive overlay, only the overlay sees the
//!    event. An event the overlay posted up is handled by the widget alone.
//! 2. If the kind is in the propagation mask, each child (in order) that
//!    advertises the kind gets the event, after the widget had a chance to
//!    adjust it for its children. Local interest is not advertised.
//! 3. If the kind is in the event mask, the widget itself handles it.
//!
//! Children are visited from a snapshot of the child list, so handlers may
//! reshape the tree without disturbing the pass in progress.

use easel_core::{DrawCtx, Result as DrawResult};
use easel_window::Event;

use crate::elements::ModalManager;
use crate::event_handler::{Action, Children, EventCtx, EventResult};
use crate::tree::{NodeId, Tree, TreeError};

/// Nesting limit for posted and routed deliveries.
pub const MAX_DISPATCH_DEPTH: usize = 64;

impl Tree {
    /// Deliver `event` to `id` and whatever lies below it.
    pub fn process_event(&mut self, id: NodeId, event: &Event) -> EventResult {
        self.deliver(id, event, None)
    }

    fn deliver(&mut self, id: NodeId, event: &Event, sender: Option<NodeId>) -> EventResult {
        if self.dispatch_depth >= MAX_DISPATCH_DEPTH {
            tracing::warn!(?id, ?event, "dispatch depth limit reached, dropping event");
            return EventResult::Ignored;
        }
        self.dispatch_depth += 1;
        let result = self.deliver_inner(id, event, sender);
        self.dispatch_depth -= 1;
        result
    }

    fn deliver_inner(&mut self, id: NodeId, event: &Event, sender: Option<NodeId>) -> EventResult {
        let Some(node) = self.nodes.get(id) else {
            tracing::debug!(?id, "event for removed node ignored");
            return EventResult::Ignored;
        };

        let kind = event.kind();
        if let Some(overlay) = node.widget.as_deref().and_then(|w| w.exclusive_overlay()) {
            if sender == Some(overlay) {
                if !node.event_mask.intersects(kind) {
                    return EventResult::Ignored;
                }
                return self.handle(id, event, sender);
            }
            tracing::trace!(?id, ?overlay, "event captured by overlay");
            return self.deliver(overlay, event, None);
        }

        let mut result = EventResult::Ignored;

        if node.propagation_mask.intersects(kind) {
            let forwarded = match node.widget.as_deref() {
                Some(widget) => widget.child_event(event),
                None => Some(event.clone()),
            };
            if let Some(forwarded) = forwarded {
                let children = node.children.clone();
                for child in children {
                    if !self.advertised_mask(child).intersects(kind) {
                        continue;
                    }
                    result = self.deliver(child, &forwarded, None).or(result);
                }
            }
        }

        if self.event_mask(id).intersects(kind) {
            result = self.handle(id, event, sender).or(result);
        }
        result
    }

    fn handle(&mut self, id: NodeId, event: &Event, sender: Option<NodeId>) -> EventResult {
        let Some(mut widget) = self.nodes.get_mut(id).and_then(|n| n.widget.take()) else {
            return EventResult::Ignored;
        };

        let (result, actions) = {
            let mut ctx = EventCtx::new(self, id, sender);
            let result = widget.handle_event(&mut ctx, event);
            (result, ctx.into_actions())
        };

        match self.nodes.get_mut(id) {
            Some(node) => node.widget = Some(widget),
            None => tracing::warn!(?id, "node removed while handling an event"),
        }

        for action in actions {
            if let Err(error) = self.run_action(id, action) {
                tracing::warn!(?error, ?id, "queued action failed");
            }
        }
        result
    }

    fn run_action(&mut self, id: NodeId, action: Action) -> Result<(), TreeError> {
        match action {
            Action::PostToParent(event) => {
                let parent = self.parent(id).ok_or(TreeError::NoParent(id))?;
                self.deliver(parent, &event, Some(id));
            }
            Action::Send(target, event) => {
                if !self.contains(target) {
                    return Err(TreeError::NodeNotFound(target));
                }
                self.deliver(target, &event, None);
            }
            Action::InvokeModal(modal) => {
                self.invoke_modal(id, modal)?;
            }
            Action::FinishModal => {
                self.finish_modal(id)?;
            }
            Action::Subscribe(bits) => {
                self.update_event_mask(id, bits)?;
            }
        }
        Ok(())
    }

    /// Nearest node at or above `from` holding a [`ModalManager`].
    pub fn modal_manager_above(&self, from: NodeId) -> Option<NodeId> {
        self.ancestors(from)
            .find(|&n| self.widget::<ModalManager>(n).is_some())
    }

    /// Show `modal` on the nearest modal manager above `requester`.
    ///
    /// An unparented modal is linked back to the manager so that its own
    /// handlers can post upward and finish themselves. The modal's mask bits
    /// are pushed up from the manager so that routing reaches it wherever
    /// the manager sits.
    pub fn invoke_modal(&mut self, requester: NodeId, modal: NodeId) -> Result<NodeId, TreeError> {
        if !self.contains(modal) {
            return Err(TreeError::NodeNotFound(modal));
        }
        let manager = self
            .modal_manager_above(requester)
            .ok_or(TreeError::NoModalManager(requester))?;
        if self.is_ancestor(modal, manager) {
            return Err(TreeError::WouldCycle {
                parent: manager,
                child: modal,
            });
        }

        if self.parent(modal).is_none() {
            self.nodes[modal].parent = Some(manager);
        }
        let bits = self.advertised_mask(modal);
        self.propagate_up(manager, bits);
        self.with_widget::<ModalManager, _>(manager, |m| m.invoke(modal))?;
        tracing::debug!(?manager, ?modal, "modal invoked");
        Ok(manager)
    }

    /// Close the modal on the nearest modal manager above `from`.
    pub fn finish_modal(&mut self, from: NodeId) -> Result<NodeId, TreeError> {
        let manager = self
            .modal_manager_above(from)
            .ok_or(TreeError::NoModalManager(from))?;
        self.with_widget::<ModalManager, _>(manager, |m| m.deinvoke())?;
        tracing::debug!(?manager, "modal finished");
        Ok(manager)
    }

    /// Draw `id`, its subtree, then any overlay it shows.
    pub fn draw_node(&self, id: NodeId, cx: &mut DrawCtx<'_>) -> DrawResult<()> {
        let Some(node) = self.nodes.get(id) else {
            return Ok(());
        };
        let Some(widget) = node.widget.as_deref() else {
            return Ok(());
        };
        widget.draw(cx, Children::new(self, &node.children))?;
        if let Some(overlay) = widget.exclusive_overlay() {
            self.draw_node(overlay, cx)?;
        }
        Ok(())
    }
}
