//! easel: retained-mode widget toolkit for a small pixel editor.
//!
//! Facade over the workspace crates so applications can depend on a single
//! package.

pub use easel_config as config;
pub use easel_core as core;
pub use easel_widgets as widgets;
pub use easel_window as window;

pub use easel_config::EaselConfig;
pub use easel_widgets::{App, NodeId, Tree};

/// Build an [`App`] from the file named by `EASEL_CONFIG`, or from
/// `easel.toml` when present, with environment overrides applied.
///
/// An explicitly named file must load; the default location silently falls
/// back to built-in settings.
pub fn app_from_environment() -> anyhow::Result<App> {
    match std::env::var_os("EASEL_CONFIG") {
        Some(path) => App::from_config_file(path),
        None => Ok(App::new(EaselConfig::load())),
    }
}
