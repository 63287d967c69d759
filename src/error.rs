use ash::vk;
use thiserror::Error;

/// Startup failures; none are retried.
#[derive(Error, Debug)]
pub enum Error {
    #[error("platform window unavailable: {0}")]
    PlatformInit(String),

    #[error("failed to create instance: {reason} ({result:?})")]
    InstanceCreation { reason: String, result: vk::Result },

    #[error("entry point {function} could not be resolved")]
    ExtensionUnavailable { function: String },

    #[error("failed to set up debug callback: {0:?}")]
    DebugCallbackInstall(vk::Result),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn instance_creation(reason: impl Into<String>, result: vk::Result) -> Self {
        Error::InstanceCreation {
            reason: reason.into(),
            result,
        }
    }
}
