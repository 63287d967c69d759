//! Opens a window, creates a Vulkan instance with validation, installs a
//! debug-report callback and idles until the window is closed.

#[macro_use]
extern crate lazy_static;

pub mod app;
pub mod error;
pub mod vulkan;
pub mod window;

pub use error::{Error, Result};
