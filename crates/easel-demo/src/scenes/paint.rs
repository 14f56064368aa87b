//! Paint canvas with a small toolbar and an about dialog.

use std::cell::Cell;
use std::rc::Rc;

use anyhow::{Context, Result};
use easel_core::{Color, Point, Rect};
use easel_widgets::elements::{Button, Dialog};
use easel_widgets::paint::{PaintCanvas, ToolRegistry};
use easel_widgets::{App, NodeId};
use easel_window::Event;

use super::{Scene, click, drag};

const TOOLBAR_Y: i32 = 8;

pub struct PaintScene {
    canvas: NodeId,
    dialog: NodeId,
    registry: ToolRegistry,
    pending_tool: Rc<Cell<Option<&'static str>>>,
    brush_radius: f32,
}

impl PaintScene {
    pub fn build(app: &mut App) -> Result<Self> {
        let style = app.style();
        let brush_radius = app.config().canvas.brush_radius as f32;
        let registry = ToolRegistry::with_defaults();
        let pending_tool = Rc::new(Cell::new(None));

        let mut canvas = PaintCanvas::from_config(Point::new(10, 40), &app.config().canvas);
        let brush = registry.create("brush").context("brush tool missing")?;
        canvas.set_tool(brush);
        canvas.settings_mut().set("radius", brush_radius);
        let canvas = app.tree_mut().insert(canvas);
        app.attach(canvas)?;

        let dialog = Dialog::spawn(app.tree_mut(), Rect::new(250, 200, 300, 150), "About", style)?;

        for (i, name) in ["brush", "eraser"].into_iter().enumerate() {
            let pending = pending_tool.clone();
            let rect = Rect::new(10 + 70 * i as i32, TOOLBAR_Y, 60, 24);
            let button = app.tree_mut().insert(
                Button::new(rect, style)
                    .with_label(name)
                    .on_click(move |_| pending.set(Some(name))),
            );
            app.attach(button)?;
        }

        let about = app.tree_mut().insert(
            Button::new(Rect::new(150, TOOLBAR_Y, 60, 24), style)
                .with_label("about")
                .on_click(move |ctx| ctx.invoke_modal(dialog)),
        );
        app.attach(about)?;

        Ok(Self {
            canvas,
            dialog,
            registry,
            pending_tool,
            brush_radius,
        })
    }
}

impl Scene for PaintScene {
    fn script(&self) -> Vec<Vec<Event>> {
        let close = Point::new(535, 210);
        vec![
            click(Point::new(15, TOOLBAR_Y + 5)),
            drag(&[Point::new(60, 90), Point::new(120, 140), Point::new(200, 100)]),
            click(Point::new(85, TOOLBAR_Y + 5)),
            drag(&[Point::new(60, 90), Point::new(100, 110)]),
            click(Point::new(155, TOOLBAR_Y + 5)),
            drag(&[Point::new(300, 300), Point::new(350, 350)]),
            click(close),
            vec![Event::Closed],
        ]
    }

    fn after_frame(&mut self, app: &mut App) -> Result<()> {
        let Some(name) = self.pending_tool.take() else {
            return Ok(());
        };
        let tool = self
            .registry
            .create(name)
            .with_context(|| format!("unknown tool {name}"))?;
        let radius = self.brush_radius;
        app.tree_mut().with_widget::<PaintCanvas, _>(self.canvas, |c| {
            c.set_tool(tool);
            c.settings_mut().set("radius", radius);
        })?;
        Ok(())
    }

    fn report(&self, app: &App) {
        let tree = app.tree();
        let Some(canvas) = tree.widget::<PaintCanvas>(self.canvas) else {
            return;
        };
        let background = Color::from_array(app.config().canvas.background).to_pixel();
        let painted = canvas
            .pixels()
            .data()
            .iter()
            .filter(|&&px| px != background)
            .count();
        tracing::info!(
            painted,
            tool = canvas.tool_name().unwrap_or("none"),
            dialog_parent = ?tree.parent(self.dialog),
            "paint scene finished"
        );
    }
}
