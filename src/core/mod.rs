pub mod binder;
pub mod dom;
pub mod loader;
pub mod mounts;
pub mod pipeline;
pub mod renderer;
pub mod shell;

pub use crate::domain::model::Profile;
pub use crate::domain::ports::{ConfigProvider, Pipeline, ProfileSource, Storage};
pub use crate::utils::error::Result;
