use std::ffi::{CStr, CString};

use ash::{
    vk::{self, ApplicationInfo, InstanceCreateInfo},
    Entry,
};
use log::{debug, info, warn};

use crate::{
    error::{Error, Result},
    vulkan::{
        constants::{
            INSTANCE_API_VERSION, INSTANCE_APPLICATION_NAME, INSTANCE_APPLICATION_VERSION,
            INSTANCE_DEBUG_EXTENSION_NAMES, INSTANCE_ENGINE_NAME, INSTANCE_ENGINE_VERSION,
            INSTANCE_REQUESTED_LAYER_NAMES,
        },
        names::VK_EXT_DEBUG_REPORT_EXTENSION,
        utils::{
            apiversion::ApiVersion,
            cstringstuff::cstring_slice_to_raw,
            extension::{merge_extension_names, missing_extension_names, Extension},
            layer::Layer,
        },
    },
};

#[derive(Clone, Debug)]
pub struct InstanceConfig {
    pub application_name: CString,
    pub application_version: ApiVersion,
    pub engine_name: CString,
    pub engine_version: ApiVersion,
    pub api_version: ApiVersion,
    pub layers: Vec<CString>,
    pub extensions: Vec<CString>,
}

impl Default for InstanceConfig {
    fn default() -> Self {
        InstanceConfig {
            application_name: INSTANCE_APPLICATION_NAME.clone(),
            application_version: INSTANCE_APPLICATION_VERSION,
            engine_name: INSTANCE_ENGINE_NAME.clone(),
            engine_version: INSTANCE_ENGINE_VERSION,
            api_version: INSTANCE_API_VERSION,
            layers: INSTANCE_REQUESTED_LAYER_NAMES.clone(),
            extensions: INSTANCE_DEBUG_EXTENSION_NAMES.clone(),
        }
    }
}

impl InstanceConfig {
    pub fn with_platform_extensions(platform_extensions: &[CString]) -> Self {
        InstanceConfig::default().including(platform_extensions)
    }

    pub fn including(&self, platform_extensions: &[CString]) -> Self {
        InstanceConfig {
            extensions: merge_extension_names(&[platform_extensions, self.extensions.as_slice()]),
            ..self.clone()
        }
    }
}

pub struct Instance {
    entry: Entry,
    pub inner: ash::Instance,
    pub extensions: Vec<CString>,
}

impl Instance {
    /// Creates the instance described by `config`.
    ///
    /// Requested layers are passed through even when the loader does not list
    /// them; `vkCreateInstance` decides. Every name in `platform_extensions`
    /// must be part of `config.extensions`.
    pub fn new(entry: &Entry, config: &InstanceConfig, platform_extensions: &[CString]) -> Result<Self> {
        let version = match entry.try_enumerate_instance_version() {
            Ok(Some(version)) => ApiVersion::from(version),
            Ok(None) => ApiVersion::new(0, 1, 0, 0),
            Err(result) => {
                return Err(Error::instance_creation(
                    "could not query the instance version",
                    result,
                ))
            }
        };
        info!("Vulkan instance version: {}", version);

        let required_version = config.api_version.without_patch();
        if version < required_version {
            return Err(Error::instance_creation(
                format!(
                    "instance version too low: actual {}, required {}",
                    version, required_version
                ),
                vk::Result::ERROR_INCOMPATIBLE_DRIVER,
            ));
        }

        let available_layers = Layer::convert_vec(
            &entry
                .enumerate_instance_layer_properties()
                .map_err(|result| Error::instance_creation("could not enumerate layers", result))?,
        );
        info!("{} layers found!", available_layers.len());
        for layer in &available_layers {
            info!("\t{:?}", layer.name);
        }
        for requested in &config.layers {
            if !available_layers.iter().any(|layer| &layer.name == requested) {
                warn!(
                    "layer {:?} was not enumerated, requesting it anyway",
                    requested
                );
            }
        }

        let available_extensions = Extension::convert_vec(
            &entry
                .enumerate_instance_extension_properties(None)
                .map_err(|result| {
                    Error::instance_creation("could not enumerate extensions", result)
                })?,
        );
        info!("available extensions:");
        for extension in &available_extensions {
            info!("\t{:?}", extension.name);
        }
        info!("required extensions:");
        for extension in &config.extensions {
            info!("\t{:?}", extension);
        }

        let missing = missing_extension_names(&config.extensions, platform_extensions);
        if !missing.is_empty() {
            return Err(Error::instance_creation(
                format!("platform extensions not enabled: {:?}", missing),
                vk::Result::ERROR_EXTENSION_NOT_PRESENT,
            ));
        }

        let application_info = ApplicationInfo::builder()
            .application_name(&config.application_name)
            .application_version(config.application_version.raw())
            .engine_name(&config.engine_name)
            .engine_version(config.engine_version.raw())
            .api_version(config.api_version.without_patch().raw());

        let layer_names_raw = cstring_slice_to_raw(&config.layers);
        let extension_names_raw = cstring_slice_to_raw(&config.extensions);

        let create_info = InstanceCreateInfo::builder()
            .application_info(&application_info)
            .enabled_layer_names(&layer_names_raw)
            .enabled_extension_names(&extension_names_raw);

        let inner = unsafe { entry.create_instance(&create_info, None) }
            .map_err(|result| Error::instance_creation("vkCreateInstance failed", result))?;
        info!("INSTANCE LAYERS USED: {:?}", config.layers);
        info!("INSTANCE EXTENSIONS USED: {:?}", config.extensions);

        Ok(Instance {
            entry: entry.clone(),
            inner,
            extensions: config.extensions.clone(),
        })
    }

    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    pub fn handle(&self) -> vk::Instance {
        self.inner.handle()
    }

    pub fn has_extension_debug_report(&self) -> bool {
        self.has_extension(VK_EXT_DEBUG_REPORT_EXTENSION)
    }

    pub fn has_extension(&self, name: &CStr) -> bool {
        self.extensions.iter().any(|x| x.as_c_str() == name)
    }

    pub fn destroy(self) {
        drop(self);
    }
}

impl Drop for Instance {
    fn drop(&mut self) {
        debug!("destroying instance");
        unsafe {
            self.inner.destroy_instance(None);
        }
    }
}
