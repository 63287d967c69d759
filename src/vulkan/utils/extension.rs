use std::ffi::CString;

use ash::vk::ExtensionProperties;

use super::cstringstuff;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Extension {
    pub name: CString,
    pub spec_version: u32,
}

impl Extension {
    pub fn from_properties(properties: &ExtensionProperties) -> Self {
        Extension {
            name: cstringstuff::c_char_slice_to_cstring(&properties.extension_name),
            spec_version: properties.spec_version,
        }
    }

    pub fn convert_vec(properties: &[ExtensionProperties]) -> Vec<Extension> {
        properties.iter().map(Extension::from_properties).collect()
    }
}

pub fn merge_extension_names(lists: &[&[CString]]) -> Vec<CString> {
    let mut merged: Vec<CString> = Vec::new();
    for name in lists.iter().flat_map(|list| list.iter()) {
        if !merged.contains(name) {
            merged.push(name.clone());
        }
    }
    merged
}

pub fn missing_extension_names(enabled: &[CString], required: &[CString]) -> Vec<CString> {
    required
        .iter()
        .filter(|name| !enabled.contains(name))
        .cloned()
        .collect()
}
