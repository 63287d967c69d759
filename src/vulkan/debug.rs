use std::{
    borrow::Cow,
    ffi::{c_void, CStr},
    os::raw::c_char,
    ptr,
};

use ash::vk::{
    self, DebugReportCallbackCreateInfoEXT, DebugReportCallbackCreateInfoEXTBuilder,
    DebugReportCallbackEXT, DebugReportFlagsEXT, DebugReportObjectTypeEXT,
};
use log::{debug, info, log, Level};

use super::{fp, instance::Instance, names::*};
use crate::error::{Error, Result};

unsafe fn lossy<'a>(raw: *const c_char) -> Cow<'a, str> {
    if raw.is_null() {
        Cow::Borrowed("")
    } else {
        CStr::from_ptr(raw).to_string_lossy()
    }
}

pub fn severity_level(flags: DebugReportFlagsEXT) -> Level {
    if flags.contains(DebugReportFlagsEXT::ERROR) {
        Level::Error
    } else if flags.intersects(DebugReportFlagsEXT::WARNING | DebugReportFlagsEXT::PERFORMANCE_WARNING)
    {
        Level::Warn
    } else if flags.contains(DebugReportFlagsEXT::INFORMATION) {
        Level::Info
    } else {
        Level::Debug
    }
}

pub unsafe extern "system" fn debug_callback(
    flags: DebugReportFlagsEXT,
    object_type: DebugReportObjectTypeEXT,
    object: u64,
    location: usize,
    message_code: i32,
    p_layer_prefix: *const c_char,
    p_message: *const c_char,
    _user_data: *mut c_void,
) -> vk::Bool32 {
    log!(
        target: "validation",
        severity_level(flags),
        "validation layer: [{}] {} (code {}, object {:?} {:#x}, location {})",
        lossy(p_layer_prefix),
        lossy(p_message),
        message_code,
        object_type,
        object,
        location
    );
    vk::FALSE
}

pub fn get_create_info(severity: DebugReportFlagsEXT) -> DebugReportCallbackCreateInfoEXTBuilder<'static> {
    DebugReportCallbackCreateInfoEXT::builder()
        .flags(severity)
        .pfn_callback(Some(debug_callback))
}

/// A debug-report callback registered with an [`Instance`].
///
/// The callback borrows its instance, so it is always removed first:
///
/// ```compile_fail
/// use vkbootstrap::vulkan::{
///     constants::DEBUG_REPORT_SEVERITY,
///     debug::DebugCallback,
///     instance::{Instance, InstanceConfig},
///     load_entry,
/// };
///
/// fn out_of_order() -> vkbootstrap::Result<()> {
///     let entry = load_entry()?;
///     let config = InstanceConfig::with_platform_extensions(&[]);
///     let instance = Instance::new(&entry, &config, &[])?;
///     let callback = DebugCallback::install(&instance, DEBUG_REPORT_SEVERITY)?;
///     instance.destroy();
///     callback.destroy();
///     Ok(())
/// }
/// ```
pub struct DebugCallback<'i> {
    instance: &'i Instance,
    handle: DebugReportCallbackEXT,
}

impl<'i> DebugCallback<'i> {
    pub fn install(instance: &'i Instance, severity: DebugReportFlagsEXT) -> Result<Self> {
        let unavailable = || Error::ExtensionUnavailable {
            function: PFN_VK_CREATE_DEBUG_REPORT_CALLBACK_EXT
                .to_string_lossy()
                .into_owned(),
        };

        // The loader may hand out a pointer even when the extension was not
        // enabled; calling it would be invalid usage.
        if !instance.has_extension_debug_report() {
            return Err(unavailable());
        }

        let create_fp = unsafe {
            fp::get_create_debug_report_callback_fp(instance.entry(), instance.handle())
        }
        .ok_or_else(unavailable)?;

        let create_info = get_create_info(severity);
        let mut handle = DebugReportCallbackEXT::null();
        unsafe { create_fp(instance.handle(), &*create_info, ptr::null(), &mut handle) }
            .result()
            .map_err(Error::DebugCallbackInstall)?;
        info!("debug report callback installed for {:?}", severity);

        Ok(DebugCallback { instance, handle })
    }

    pub fn destroy(self) {
        drop(self);
    }
}

impl Drop for DebugCallback<'_> {
    fn drop(&mut self) {
        let destroy_fp = unsafe {
            fp::get_destroy_debug_report_callback_fp(self.instance.entry(), self.instance.handle())
        };
        match destroy_fp {
            Some(destroy_fn) => unsafe {
                debug!("destroying debug report callback");
                destroy_fn(self.instance.handle(), self.handle, ptr::null());
            },
            None => debug!("vkDestroyDebugReportCallbackEXT unavailable, nothing to remove"),
        }
    }
}
