use std::ffi::CString;

use ash::vk::LayerProperties;

use super::{apiversion::ApiVersion, cstringstuff};

#[derive(Clone, Debug)]
pub struct Layer {
    pub name: CString,
    pub spec_version: ApiVersion,
    pub implementation_version: u32,
    pub description: CString,
}

impl Layer {
    pub fn from_properties(properties: &LayerProperties) -> Self {
        Layer {
            name: cstringstuff::c_char_slice_to_cstring(&properties.layer_name),
            spec_version: ApiVersion::from(properties.spec_version),
            implementation_version: properties.implementation_version,
            description: cstringstuff::c_char_slice_to_cstring(&properties.description),
        }
    }

    pub fn convert_vec(properties: &[LayerProperties]) -> Vec<Layer> {
        properties.iter().map(Layer::from_properties).collect()
    }
}
