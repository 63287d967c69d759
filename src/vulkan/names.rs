use cstr::cstr;
use std::ffi::CStr;
// --- INSTANCE
// LAYERS
pub const VK_LAYER_LUNARG_STANDARD_VALIDATION: &CStr = cstr!("VK_LAYER_LUNARG_standard_validation");

// EXTENSIONS
// Debug
pub const VK_EXT_DEBUG_REPORT_EXTENSION: &CStr = cstr!("VK_EXT_debug_report");

// --- FP
pub const PFN_VK_CREATE_DEBUG_REPORT_CALLBACK_EXT: &CStr = cstr!("vkCreateDebugReportCallbackEXT");
pub const PFN_VK_DESTROY_DEBUG_REPORT_CALLBACK_EXT: &CStr =
    cstr!("vkDestroyDebugReportCallbackEXT");
