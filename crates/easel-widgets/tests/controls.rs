use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Context, Result};
use easel_config::ScrollbarConfig;
use easel_core::{Axis, Rect};
use easel_widgets::elements::{Button, ControlStyle, Panel, Scrollbar, Signals, Slider};
use easel_widgets::{EventCtx, EventResult, NodeId, Tree, Widget};
use easel_window::{Event, EventMask, MouseButton, PointerEvent, ScrollEvent, ScrollKind};

fn press(x: i32, y: i32) -> Event {
    Event::PointerPressed(PointerEvent::new(x, y, MouseButton::Left))
}

fn release(x: i32, y: i32) -> Event {
    Event::PointerReleased(PointerEvent::new(x, y, MouseButton::Left))
}

fn moved(x: i32, y: i32) -> Event {
    Event::PointerMoved(PointerEvent::new(x, y, MouseButton::Left))
}

type SignalLog = Rc<RefCell<Vec<Signals>>>;

fn logged_button(tree: &mut Tree, rect: Rect, log: &SignalLog) -> NodeId {
    let mut button = Button::new(rect, ControlStyle::default());
    for signal in Signals::all().iter() {
        let log = log.clone();
        button = button.on(signal, move |_| log.borrow_mut().push(signal));
    }
    tree.insert(button)
}

#[test]
fn click_fires_only_for_press_and_release_inside() -> Result<()> {
    let log: SignalLog = Rc::default();
    let mut tree = Tree::new();
    let root = tree.insert(Panel::new(Rect::new(0, 0, 400, 300)));
    let button = logged_button(&mut tree, Rect::new(10, 10, 50, 20), &log);
    tree.attach(root, button)?;

    tree.process_event(root, &press(20, 15));
    tree.process_event(root, &release(21, 16));
    assert_eq!(
        *log.borrow(),
        vec![
            Signals::PRESS,
            Signals::HOVER_ENTER,
            Signals::CLICK,
            Signals::RELEASE
        ]
    );

    log.borrow_mut().clear();
    tree.process_event(root, &press(20, 15));
    tree.process_event(root, &moved(200, 200));
    tree.process_event(root, &release(200, 200));
    assert_eq!(
        *log.borrow(),
        vec![
            Signals::PRESS,
            Signals::DRAG,
            Signals::HOVER_EXIT,
            Signals::RELEASE
        ]
    );
    Ok(())
}

#[test]
fn hover_edges_fire_once_each() -> Result<()> {
    let log: SignalLog = Rc::default();
    let mut tree = Tree::new();
    let button = logged_button(&mut tree, Rect::new(10, 10, 50, 20), &log);

    let path = [(0, 0), (15, 15), (20, 15), (30, 20), (100, 100), (120, 100), (40, 20)];
    for (x, y) in path {
        tree.process_event(button, &Event::PointerMoved(PointerEvent::new(x, y, MouseButton::None)));
    }
    assert_eq!(
        *log.borrow(),
        vec![Signals::HOVER_ENTER, Signals::HOVER_EXIT, Signals::HOVER_ENTER]
    );
    Ok(())
}

#[test]
fn slider_stays_in_range_after_every_event() -> Result<()> {
    let mut tree = Tree::new();
    let mut slider = Slider::new(Axis::Horizontal, Rect::new(50, 0, 10, 10), ControlStyle::default());
    slider.set_limit(35);
    let id = tree.insert(slider);

    let step = |kind| Event::Scroll(ScrollEvent::step(kind, Axis::Horizontal));
    let events = [
        press(55, 5),
        moved(-300, 5),
        moved(70, 5),
        moved(9000, 5),
        release(60, 5),
        step(ScrollKind::PageDown),
        step(ScrollKind::PageDown),
        step(ScrollKind::Down),
        step(ScrollKind::PageUp),
        step(ScrollKind::PageUp),
        step(ScrollKind::PageUp),
        step(ScrollKind::Up),
        Event::Scroll(ScrollEvent::relocation(1.7, Axis::Horizontal)),
        Event::Scroll(ScrollEvent::relocation(-0.4, Axis::Horizontal)),
    ];
    for event in &events {
        tree.process_event(id, event);
        let s = tree.widget::<Slider>(id).context("slider")?;
        assert!(
            (s.pivot()..=s.pivot() + s.limit()).contains(&s.offset()),
            "offset {} out of range after {event:?}",
            s.offset()
        );
    }
    Ok(())
}

/// Records the fractions a scrollbar reports upward.
struct FractionSink {
    seen: Rc<RefCell<Vec<f32>>>,
}

impl Widget for FractionSink {
    fn interest(&self) -> EventMask {
        EventMask::SCROLL
    }

    fn handle_event(&mut self, ctx: &mut EventCtx<'_>, event: &Event) -> EventResult {
        match event {
            Event::Scroll(ScrollEvent {
                kind: ScrollKind::Relocation,
                position: Some(fraction),
                ..
            }) if ctx.sender().is_some() => {
                self.seen.borrow_mut().push(*fraction);
                EventResult::Handled
            }
            _ => EventResult::Ignored,
        }
    }
}

#[test]
fn scrollbar_reports_slider_fraction_to_parent() -> Result<()> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut tree = Tree::new();
    let sink = tree.insert(FractionSink { seen: seen.clone() });
    let bar = Scrollbar::spawn(
        &mut tree,
        Axis::Vertical,
        100,
        &ScrollbarConfig::default(),
        ControlStyle::default(),
    )?;
    Scrollbar::set_slider_size(&mut tree, bar, 20)?;
    tree.attach(sink, bar)?;

    // The track starts at 20, below the up button; the slider covers 20..40.
    tree.process_event(sink, &press(10, 25));
    tree.process_event(sink, &moved(10, 105));
    assert_eq!(seen.borrow().last().copied(), Some(1.0));

    tree.process_event(sink, &moved(10, 65));
    assert_eq!(seen.borrow().last().copied(), Some(0.5));

    tree.process_event(sink, &release(10, 65));
    assert_eq!(seen.borrow().last().copied(), Some(0.5));
    assert_eq!(Scrollbar::fraction(&tree, bar), Some(0.5));
    Ok(())
}

#[test]
fn step_buttons_and_track_drive_the_slider() -> Result<()> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut tree = Tree::new();
    let sink = tree.insert(FractionSink { seen: seen.clone() });
    let config = ScrollbarConfig::default();
    let bar = Scrollbar::spawn(&mut tree, Axis::Horizontal, 100, &config, ControlStyle::default())?;
    Scrollbar::set_slider_size(&mut tree, bar, 20)?;
    tree.attach(sink, bar)?;

    // Down button sits after the track: x in 120..140.
    tree.process_event(sink, &press(130, 10));
    tree.process_event(sink, &release(130, 10));
    assert_eq!(seen.borrow().last().copied(), Some(10.0 / 80.0));

    // Release on the track past the slider pages forward.
    tree.process_event(sink, &release(100, 10));
    assert_eq!(seen.borrow().last().copied(), Some(40.0 / 80.0));

    // Up button.
    tree.process_event(sink, &press(5, 10));
    tree.process_event(sink, &release(5, 10));
    assert_eq!(seen.borrow().last().copied(), Some(30.0 / 80.0));
    Ok(())
}
