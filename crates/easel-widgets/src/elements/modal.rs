//! Modal overlay manager and the stock dialog it usually shows.

use easel_core::{DrawCtx, Point, Rect, Result as DrawResult};

use super::button::Button;
use super::frame::{ControlStyle, Frame};
use crate::event_handler::{Children, Widget};
use crate::tree::{NodeId, Tree, TreeError};

/// Routing root that can hand all input to a single modal subtree.
///
/// While a modal is invoked, every event reaching the manager goes only to
/// that modal, and the modal is drawn after the normal tree.
#[derive(Debug, Default, Clone)]
pub struct ModalManager {
    current_modal: Option<NodeId>,
    invoked: bool,
}

impl ModalManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_modal(&self) -> Option<NodeId> {
        self.current_modal
    }

    pub fn is_invoked(&self) -> bool {
        self.invoked
    }

    pub fn invoke(&mut self, modal: NodeId) {
        self.current_modal = Some(modal);
        self.invoked = true;
    }

    /// Return to normal routing. The modal node stays in the tree.
    pub fn deinvoke(&mut self) {
        self.invoked = false;
    }

    pub(crate) fn clear(&mut self) {
        self.current_modal = None;
        self.invoked = false;
    }
}

impl Widget for ModalManager {
    fn exclusive_overlay(&self) -> Option<NodeId> {
        self.current_modal.filter(|_| self.invoked)
    }
}

/// Titled panel with a button that finishes the modal it is shown in.
pub struct Dialog {
    pub frame: Frame,
    pub title: String,
    style: ControlStyle,
    close_button: Option<NodeId>,
}

impl Dialog {
    /// Create an unattached dialog with its close button in the top-right
    /// corner. Pass the returned id to [`Tree::invoke_modal`].
    pub fn spawn(
        tree: &mut Tree,
        rect: Rect,
        title: impl Into<String>,
        style: ControlStyle,
    ) -> Result<NodeId, TreeError> {
        let mut frame = Frame::styled(rect, &style);
        frame.background = style.hover;
        let dialog = tree.insert(Dialog {
            frame,
            title: title.into(),
            style,
            close_button: None,
        });

        let close_rect = Rect::new(rect.right() as i32 - 22, rect.y() + 2, 20, 20);
        let close = tree.insert(
            Button::new(close_rect, style)
                .with_label("x")
                .on_click(|ctx| ctx.finish_modal()),
        );
        tree.attach(dialog, close)?;
        tree.with_widget::<Dialog, _>(dialog, |d| d.close_button = Some(close))?;
        Ok(dialog)
    }

    pub fn close_button(&self) -> Option<NodeId> {
        self.close_button
    }
}

impl Widget for Dialog {
    fn draw(&self, cx: &mut DrawCtx<'_>, children: Children<'_>) -> DrawResult<()> {
        self.frame.paint(cx);
        let title_pos = Point::new(self.frame.rect.x() + 6, self.frame.rect.y() + 4);
        cx.text(title_pos, &self.title, 14, self.style.text);
        children.draw(cx)
    }

    fn frame(&self) -> Option<&Frame> {
        Some(&self.frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::Group;

    #[test]
    fn test_overlay_only_while_invoked() {
        let mut tree = Tree::new();
        let modal = tree.insert(Group::new());
        let mut manager = ModalManager::new();
        assert_eq!(manager.exclusive_overlay(), None);
        manager.invoke(modal);
        assert_eq!(manager.exclusive_overlay(), Some(modal));
        manager.deinvoke();
        assert_eq!(manager.exclusive_overlay(), None);
        assert_eq!(manager.current_modal(), Some(modal));
    }

    #[test]
    fn test_invoke_back_links_unparented_modal() {
        let mut tree = Tree::new();
        let root = tree.insert(ModalManager::new());
        let requester = tree.insert(Group::new());
        tree.attach(root, requester).unwrap();
        let dialog =
            Dialog::spawn(&mut tree, Rect::new(10, 10, 100, 60), "Hi", ControlStyle::default())
                .unwrap();

        assert_eq!(tree.invoke_modal(requester, dialog), Ok(root));
        assert_eq!(tree.parent(dialog), Some(root));
        assert!(!tree.children(root).contains(&dialog));
        assert!(tree.widget::<ModalManager>(root).unwrap().is_invoked());

        assert_eq!(tree.finish_modal(dialog), Ok(root));
        assert!(!tree.widget::<ModalManager>(root).unwrap().is_invoked());
    }

    #[test]
    fn test_invoke_without_manager_fails() {
        let mut tree = Tree::new();
        let lonely = tree.insert(Group::new());
        let modal = tree.insert(Group::new());
        assert_eq!(
            tree.invoke_modal(lonely, modal),
            Err(TreeError::NoModalManager(lonely))
        );
    }
}
