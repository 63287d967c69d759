use ash::vk::DebugReportFlagsEXT;

use crate::vulkan::{
    names::{VK_EXT_DEBUG_REPORT_EXTENSION, VK_LAYER_LUNARG_STANDARD_VALIDATION},
    utils::apiversion::ApiVersion,
};
use std::ffi::CString;

lazy_static! {
    // INSTANCE
    pub static ref INSTANCE_APPLICATION_NAME: CString = CString::from(cstr::cstr!("Vulkan Test App"));
    pub static ref INSTANCE_ENGINE_NAME: CString = CString::from(cstr::cstr!("No Engine"));

    pub static ref INSTANCE_REQUESTED_LAYER_NAMES: Vec<CString> = vec![CString::from(VK_LAYER_LUNARG_STANDARD_VALIDATION)];
    pub static ref INSTANCE_DEBUG_EXTENSION_NAMES: Vec<CString> = vec![CString::from(VK_EXT_DEBUG_REPORT_EXTENSION)];
}

pub const INSTANCE_APPLICATION_VERSION: ApiVersion = ApiVersion::new(0, 1, 0, 0);
pub const INSTANCE_ENGINE_VERSION: ApiVersion = ApiVersion::new(0, 1, 0, 0);
pub const INSTANCE_API_VERSION: ApiVersion = ApiVersion::new(0, 1, 0, 0);

// DEBUG CALLBACK
pub const DEBUG_REPORT_SEVERITY: DebugReportFlagsEXT = DebugReportFlagsEXT::from_raw(
    DebugReportFlagsEXT::ERROR.as_raw() | DebugReportFlagsEXT::WARNING.as_raw(),
);
