//! Application driver: owns the tree under a modal manager root and turns
//! batches of input into frames.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use easel_config::EaselConfig;
use easel_core::{DrawCtx, RenderBackend, SurfaceError};
use easel_window::Event;

use crate::elements::{ControlStyle, ModalManager};
use crate::tree::{NodeId, Tree, TreeError};

pub struct App {
    tree: Tree,
    root: NodeId,
    config: EaselConfig,
    style: ControlStyle,
    running: bool,
}

impl App {
    pub fn new(config: EaselConfig) -> Self {
        let mut tree = Tree::new();
        let root = tree.insert(ModalManager::new());
        let style = ControlStyle::from_theme(&config.theme);
        tracing::info!(
            width = config.window.width,
            height = config.window.height,
            title = %config.window.title,
            "app created"
        );
        Self {
            tree,
            root,
            config,
            style,
            running: true,
        }
    }

    /// Build an app from a config file, with environment overrides applied.
    pub fn from_config_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let mut config = EaselConfig::load_from_file(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?;
        config.merge_with_env();
        Ok(Self::new(config))
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut Tree {
        &mut self.tree
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn config(&self) -> &EaselConfig {
        &self.config
    }

    pub fn style(&self) -> ControlStyle {
        self.style
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Attach `node` under the root.
    pub fn attach(&mut self, node: NodeId) -> Result<(), TreeError> {
        self.tree.attach(self.root, node)
    }

    /// Route one event from the root. `Closed` also stops the app.
    pub fn dispatch(&mut self, event: Event) {
        tracing::trace!(?event, "dispatch");
        if event == Event::Closed {
            self.running = false;
        }
        self.tree.process_event(self.root, &event);
    }

    pub fn draw(&self, backend: &mut dyn RenderBackend) -> Result<(), SurfaceError> {
        let mut cx = DrawCtx::new(backend);
        self.tree.draw_node(self.root, &mut cx)
    }

    /// Dispatch `events`, then draw if still running. Returns whether the
    /// app keeps running.
    pub fn run_frame(
        &mut self,
        events: impl IntoIterator<Item = Event>,
        backend: &mut dyn RenderBackend,
    ) -> anyhow::Result<bool> {
        for event in events {
            self.dispatch(event);
        }
        if self.running {
            self.draw(backend).context("drawing frame")?;
        }
        Ok(self.running)
    }

    /// Write the node hierarchy as a Graphviz file.
    pub fn dump_hierarchy(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("creating hierarchy dump {}", path.display()))?;
        let mut out = BufWriter::new(file);
        self.tree.dump_dot(self.root, &mut out)?;
        out.flush()?;
        tracing::debug!(path = %path.display(), nodes = self.tree.len(), "hierarchy dumped");
        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(EaselConfig::default())
    }
}
