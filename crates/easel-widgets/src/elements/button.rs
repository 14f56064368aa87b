use easel_core::{DrawCtx, Point, Rect, Result};
use easel_window::{Event, EventMask};

use super::frame::{ControlStyle, Frame};
use super::interaction::{Interaction, Signals};
use crate::event_handler::{Children, EventCtx, EventResult, Widget};

type Callback = Box<dyn FnMut(&mut EventCtx<'_>)>;

/// Clickable rectangle with an optional label.
///
/// Callbacks are registered per signal and run in registration order for
/// each signal the event produced.
pub struct Button {
    pub frame: Frame,
    pub style: ControlStyle,
    pub label: Option<String>,
    pub label_size: u32,
    interaction: Interaction,
    callbacks: Vec<(Signals, Callback)>,
}

impl Button {
    pub fn new(rect: Rect, style: ControlStyle) -> Self {
        Self {
            frame: Frame::styled(rect, &style),
            style,
            label: None,
            label_size: 14,
            interaction: Interaction::default(),
            callbacks: Vec::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn on(mut self, signals: Signals, f: impl FnMut(&mut EventCtx<'_>) + 'static) -> Self {
        self.callbacks.push((signals, Box::new(f)));
        self
    }

    pub fn on_click(self, f: impl FnMut(&mut EventCtx<'_>) + 'static) -> Self {
        self.on(Signals::CLICK, f)
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    pub fn set_position(&mut self, position: Point) {
        self.frame.rect.origin = position;
    }
}

impl Widget for Button {
    fn interest(&self) -> EventMask {
        EventMask::POINTER
    }

    fn handle_event(&mut self, ctx: &mut EventCtx<'_>, event: &Event) -> EventResult {
        let signals = self.interaction.update(event, &self.frame);
        self.frame.background = self.interaction.background(&self.style);
        if signals.is_empty() {
            return EventResult::Ignored;
        }

        for signal in signals.iter() {
            for (wanted, callback) in &mut self.callbacks {
                if wanted.contains(signal) {
                    callback(ctx);
                }
            }
        }
        EventResult::Handled
    }

    fn draw(&self, cx: &mut DrawCtx<'_>, children: Children<'_>) -> Result<()> {
        self.frame.paint(cx);
        if let Some(label) = &self.label {
            let rect = self.frame.rect;
            let baseline = rect.y() + (rect.size.height as i32 - self.label_size as i32) / 2;
            cx.text(Point::new(rect.x() + 4, baseline), label, self.label_size, self.style.text);
        }
        children.draw(cx)
    }

    fn frame(&self) -> Option<&Frame> {
        Some(&self.frame)
    }
}
