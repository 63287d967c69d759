use std::{ffi::CStr, mem};

use ash::{
    vk::{self, PFN_vkCreateDebugReportCallbackEXT, PFN_vkDestroyDebugReportCallbackEXT},
    Entry,
};

use super::names::*;

/// Looks up an instance-level entry point and reinterprets it as `F`.
///
/// # Safety
/// `F` must be the `PFN_*` function pointer type that matches `name`.
pub unsafe fn get_instance_proc_addr<F: Copy>(
    entry: &Entry,
    instance: vk::Instance,
    name: &CStr,
) -> Option<F> {
    debug_assert_eq!(mem::size_of::<F>(), mem::size_of::<unsafe extern "system" fn()>());
    entry
        .get_instance_proc_addr(instance, name.as_ptr())
        .map(|fp| mem::transmute_copy::<unsafe extern "system" fn(), F>(&fp))
}

pub unsafe fn get_create_debug_report_callback_fp(
    entry: &Entry,
    instance: vk::Instance,
) -> Option<PFN_vkCreateDebugReportCallbackEXT> {
    get_instance_proc_addr(entry, instance, PFN_VK_CREATE_DEBUG_REPORT_CALLBACK_EXT)
}

pub unsafe fn get_destroy_debug_report_callback_fp(
    entry: &Entry,
    instance: vk::Instance,
) -> Option<PFN_vkDestroyDebugReportCallbackEXT> {
    get_instance_proc_addr(entry, instance, PFN_VK_DESTROY_DEBUG_REPORT_CALLBACK_EXT)
}
