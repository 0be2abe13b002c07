pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, toml_config::TomlConfig, CliConfig};
pub use crate::core::{
    binder::Binder, dom::Document, loader::HttpProfileLoader, mounts::MountPoints,
    pipeline::PagePipeline, renderer::PageRenderer, shell::PageShell,
};
pub use domain::model::Profile;
pub use utils::error::{ProfileError, Result};
