use ash::vk::DebugReportFlagsEXT;
use log::info;

use crate::{
    error::Result,
    vulkan::{
        constants::DEBUG_REPORT_SEVERITY,
        debug::DebugCallback,
        instance::{Instance, InstanceConfig},
        load_entry,
    },
    window::WindowHost,
};

pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 600;
pub const WINDOW_TITLE: &str = "Vulkan window";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub instance: InstanceConfig,
    pub debug_severity: DebugReportFlagsEXT,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            title: WINDOW_TITLE.to_string(),
            instance: InstanceConfig::default(),
            debug_severity: DEBUG_REPORT_SEVERITY,
        }
    }
}

// Teardown is the reverse of creation: callback, instance, window.
pub fn run(config: &AppConfig) -> Result<()> {
    let mut window_host = WindowHost::open(config.width, config.height, &config.title)?;
    let platform_extensions = window_host.required_extensions()?;

    let entry = load_entry()?;
    let instance = Instance::new(
        &entry,
        &config.instance.including(&platform_extensions),
        &platform_extensions,
    )?;
    let debug_callback = DebugCallback::install(&instance, config.debug_severity)?;

    window_host.run_until_closed();
    info!("shutting down");

    debug_callback.destroy();
    instance.destroy();
    window_host.close();
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::ffi::CString;

    use super::*;

    #[test]
    fn defaults_describe_the_bootstrap_window() {
        let config = AppConfig::default();
        assert_eq!((config.width, config.height), (800, 600));
        assert_eq!(config.title, "Vulkan window");
        assert_eq!(
            config.debug_severity,
            DebugReportFlagsEXT::ERROR | DebugReportFlagsEXT::WARNING
        );
        assert_eq!(
            config
                .instance
                .including(&[CString::new("VK_KHR_surface").unwrap()])
                .extensions,
            vec![
                CString::new("VK_KHR_surface").unwrap(),
                CString::new("VK_EXT_debug_report").unwrap(),
            ]
        );
    }
}
