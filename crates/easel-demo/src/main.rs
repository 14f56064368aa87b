//! Headless walkthrough of the toolkit: builds a scene, feeds it a scripted
//! input sequence and renders each frame into a display list.
//!
//! `--scene=text` shows a scrolled text view instead of the paint canvas.
//! Set `EASEL_DUMP=<path>` to write the final hierarchy as Graphviz.

use anyhow::Result;
use easel_core::DisplayList;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod scenes;
use scenes::{Scene, SceneKind};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let kind = if std::env::args().any(|a| a == "--scene=text" || a == "--text") {
        SceneKind::Text
    } else {
        SceneKind::Paint
    };

    let mut app = easel::app_from_environment()?;
    let mut scene: Box<dyn Scene> = match kind {
        SceneKind::Paint => Box::new(scenes::paint::PaintScene::build(&mut app)?),
        SceneKind::Text => Box::new(scenes::text::TextScene::build(&mut app)?),
    };

    let mut list = DisplayList::new();
    for (frame, batch) in scene.script().into_iter().enumerate() {
        list.clear();
        let running = app.run_frame(batch, &mut list)?;
        scene.after_frame(&mut app)?;
        tracing::info!(frame, commands = list.commands.len(), "frame rendered");
        if !running {
            break;
        }
    }
    scene.report(&app);

    if let Some(path) = std::env::var_os("EASEL_DUMP") {
        app.dump_hierarchy(&path)?;
        tracing::info!(path = ?path, "hierarchy written");
    }
    Ok(())
}
