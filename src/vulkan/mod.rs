use ash::{vk, Entry};

use crate::error::{Error, Result};

pub mod constants;
pub mod debug;
pub mod fp;
pub mod instance;
pub mod names;
pub mod utils;

pub fn load_entry() -> Result<Entry> {
    unsafe { Entry::load() }.map_err(|err| {
        Error::instance_creation(
            format!("could not load the Vulkan loader: {}", err),
            vk::Result::ERROR_INITIALIZATION_FAILED,
        )
    })
}
