//! Runs against a real display and Vulkan loader. winit wants its event loop
//! on the main thread, so this file has its own `main` instead of libtest.

use std::{env, process};

use ash::{vk, Entry};
use vkbootstrap::{
    app::AppConfig,
    vulkan::{debug::DebugCallback, instance::Instance, load_entry},
    window::WindowHost,
    Error,
};

/// `Ok(Some(note))` passed only in a reduced form.
type Check = fn(&mut WindowHost, &Entry) -> Result<Option<String>, String>;

fn has_display() -> bool {
    if cfg!(all(unix, not(target_os = "macos"))) {
        env::var_os("DISPLAY").is_some() || env::var_os("WAYLAND_DISPLAY").is_some()
    } else {
        true
    }
}

fn bootstrap_with_debug_callback(
    window_host: &mut WindowHost,
    entry: &Entry,
) -> Result<Option<String>, String> {
    let platform = window_host.required_extensions().map_err(|e| e.to_string())?;
    let config = AppConfig::default();
    let mut instance_config = config.instance.including(&platform);

    let mut degraded = None;
    let instance = match Instance::new(entry, &instance_config, &platform) {
        Err(Error::InstanceCreation {
            result: vk::Result::ERROR_LAYER_NOT_PRESENT,
            ..
        }) => {
            degraded = Some(format!(
                "{:?} not installed, ran without layers",
                instance_config.layers
            ));
            instance_config.layers.clear();
            Instance::new(entry, &instance_config, &platform).map_err(|e| e.to_string())?
        }
        other => other.map_err(|e| e.to_string())?,
    };
    if !instance.has_extension_debug_report() {
        return Err("VK_EXT_debug_report missing from enabled extensions".to_string());
    }

    let callback =
        DebugCallback::install(&instance, config.debug_severity).map_err(|e| e.to_string())?;

    window_host.request_close();
    window_host.run_until_closed();

    callback.destroy();
    instance.destroy();
    Ok(degraded)
}

fn empty_extension_list_is_rejected(
    window_host: &mut WindowHost,
    entry: &Entry,
) -> Result<Option<String>, String> {
    let platform = window_host.required_extensions().map_err(|e| e.to_string())?;
    if platform.is_empty() {
        return Ok(Some(
            "platform needs no presentation extensions, nothing to check".to_string(),
        ));
    }

    let mut instance_config = AppConfig::default().instance;
    instance_config.extensions.clear();
    match Instance::new(entry, &instance_config, &platform) {
        Err(Error::InstanceCreation {
            result: vk::Result::ERROR_EXTENSION_NOT_PRESENT,
            ..
        }) => Ok(None),
        Err(other) => Err(format!("unexpected error: {}", other)),
        Ok(_) => Err("instance created without presentation extensions".to_string()),
    }
}

fn debug_callback_needs_debug_report(
    window_host: &mut WindowHost,
    entry: &Entry,
) -> Result<Option<String>, String> {
    let platform = window_host.required_extensions().map_err(|e| e.to_string())?;
    let mut instance_config = AppConfig::default().instance;
    instance_config.layers.clear();
    instance_config.extensions = platform.clone();

    let instance = Instance::new(entry, &instance_config, &platform).map_err(|e| e.to_string())?;
    let result = match DebugCallback::install(&instance, vk::DebugReportFlagsEXT::ERROR) {
        Err(Error::ExtensionUnavailable { .. }) => Ok(None),
        Err(other) => Err(format!("unexpected error: {}", other)),
        Ok(_) => Err("callback installed without VK_EXT_debug_report".to_string()),
    };
    result
}

fn main() {
    let _ = env_logger::builder().is_test(true).try_init();

    if !has_display() {
        println!("bootstrap: no display, skipped");
        return;
    }

    let mut window_host = match WindowHost::open(800, 600, "Vulkan window") {
        Ok(window_host) => window_host,
        Err(err) => {
            eprintln!("bootstrap: could not open window: {}", err);
            process::exit(1);
        }
    };
    if window_host.should_close() {
        eprintln!("bootstrap: fresh window already wants to close");
        process::exit(1);
    }
    println!("test window_opens_without_close_request ... ok");

    let entry = match load_entry() {
        Ok(entry) => entry,
        Err(err) => {
            println!("bootstrap: {}, instance checks skipped", err);
            return;
        }
    };

    let checks: [(&str, Check); 3] = [
        ("bootstrap_with_debug_callback", bootstrap_with_debug_callback),
        ("empty_extension_list_is_rejected", empty_extension_list_is_rejected),
        ("debug_callback_needs_debug_report", debug_callback_needs_debug_report),
    ];

    let mut failed = 0;
    for (name, check) in checks {
        match check(&mut window_host, &entry) {
            Ok(None) => println!("test {} ... ok", name),
            Ok(Some(note)) => println!("test {} ... degraded: {}", name, note),
            Err(reason) => {
                println!("test {} ... FAILED: {}", name, reason);
                failed += 1;
            }
        }
    }

    window_host.close();
    if failed > 0 {
        process::exit(1);
    }
}
