use anyhow::{Context, Result};
use easel_config::ScrollbarConfig;
use easel_core::{Axis, Rect, Size};
use easel_widgets::elements::{ControlStyle, Scrollbar};
use easel_widgets::zones::{ScrollArea, ScrollBars, Viewport};
use easel_widgets::{Group, NodeId, Tree};
use easel_window::{Event, MouseButton, PointerEvent, ScrollEvent, ScrollKind};

fn area(tree: &mut Tree, visible: Rect, content: Size) -> Result<NodeId> {
    let id = ScrollArea::spawn(
        tree,
        visible,
        content,
        ScrollBars::VERTICAL,
        &ScrollbarConfig::default(),
        ControlStyle::default(),
    )?;
    Ok(id)
}

fn viewport_of(tree: &Tree, area: NodeId) -> Result<NodeId> {
    tree.widget::<ScrollArea>(area)
        .map(ScrollArea::viewport)
        .context("scroll area")
}

fn offset(tree: &Tree, area: NodeId) -> Result<f32> {
    let viewport = viewport_of(tree, area)?;
    tree.widget::<Viewport>(viewport)
        .map(|v| v.scroll_offset_along(Axis::Vertical))
        .context("viewport")
}

fn hover(x: i32, y: i32) -> Event {
    Event::PointerMoved(PointerEvent::new(x, y, MouseButton::None))
}

fn wheel(kind: ScrollKind) -> Event {
    Event::Scroll(ScrollEvent::step(kind, Axis::Vertical))
}

#[test]
fn nested_scroll_areas_scroll_independently() -> Result<()> {
    let mut tree = Tree::new();
    let outer = area(&mut tree, Rect::new(0, 0, 300, 300), Size::new(300, 900))?;
    let inner = area(&mut tree, Rect::new(20, 150, 100, 100), Size::new(100, 400))?;
    tree.attach(viewport_of(&tree, outer)?, inner)?;

    // Paging the outer bar moves only the outer viewport.
    let outer_bar = tree
        .widget::<ScrollArea>(outer)
        .and_then(|a| a.scrollbar(Axis::Vertical))
        .context("outer bar")?;
    tree.process_event(outer_bar, &wheel(ScrollKind::PageDown));
    assert!(offset(&tree, outer)? > 0.0);
    assert_eq!(offset(&tree, inner)?, 0.0);
    let outer_before = offset(&tree, outer)?;

    // The outer content is scrolled, so the inner area sits higher on screen.
    let scrolled = tree
        .widget::<Viewport>(viewport_of(&tree, outer)?)
        .context("outer viewport")?
        .scroll_offset();
    tree.process_event(outer, &hover(50, 180 - scrolled.y));
    tree.process_event(outer, &wheel(ScrollKind::Down));
    assert!(offset(&tree, inner)? > 0.0);
    assert_eq!(offset(&tree, outer)?, outer_before);

    // Off the inner area the wheel belongs to the outer one again.
    let inner_before = offset(&tree, inner)?;
    tree.process_event(outer, &hover(250, 250));
    tree.process_event(outer, &wheel(ScrollKind::Down));
    assert!(offset(&tree, outer)? > outer_before);
    assert_eq!(offset(&tree, inner)?, inner_before);
    Ok(())
}

#[test]
fn sibling_scroll_areas_scroll_independently() -> Result<()> {
    let mut tree = Tree::new();
    let root = tree.insert(Group::new());
    let left = area(&mut tree, Rect::new(0, 0, 200, 200), Size::new(200, 800))?;
    let right = area(&mut tree, Rect::new(300, 0, 200, 200), Size::new(200, 800))?;
    tree.attach(root, left)?;
    tree.attach(root, right)?;

    // Without a hovered area the wheel goes nowhere.
    tree.process_event(root, &wheel(ScrollKind::Down));
    assert_eq!(offset(&tree, left)?, 0.0);
    assert_eq!(offset(&tree, right)?, 0.0);

    tree.process_event(root, &hover(350, 100));
    tree.process_event(root, &wheel(ScrollKind::Down));
    assert_eq!(offset(&tree, left)?, 0.0);
    assert!(offset(&tree, right)? > 0.0);

    // A relocation from one bar never reaches the other area.
    let left_bar = tree
        .widget::<ScrollArea>(left)
        .and_then(|a| a.scrollbar(Axis::Vertical))
        .context("left bar")?;
    let right_before = offset(&tree, right)?;
    tree.process_event(left_bar, &wheel(ScrollKind::PageDown));
    assert!(offset(&tree, left)? > 0.0);
    assert_eq!(offset(&tree, right)?, right_before);
    assert!(Scrollbar::fraction(&tree, left_bar).context("left fraction")? > 0.0);
    Ok(())
}
