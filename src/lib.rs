// img2text - NVIDIA VLM image-description plugin for agent runtimes

pub mod config;
pub mod error;
pub mod plugin;
pub mod utils;
pub mod vlm;

pub use config::AppConfig;
pub use error::{Result, ViewError};
pub use plugin::ViewImagePlugin;
