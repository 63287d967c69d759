use std::{cmp::Ordering, fmt};

use ash::vk::{
    api_version_major, api_version_minor, api_version_patch, api_version_variant, make_api_version,
};

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct ApiVersion(u32);

impl ApiVersion {
    pub const fn new(variant: u32, major: u32, minor: u32, patch: u32) -> Self {
        ApiVersion(make_api_version(variant, major, minor, patch))
    }

    pub fn raw(self) -> u32 {
        self.0
    }

    pub fn variant(self) -> u32 {
        api_version_variant(self.0)
    }

    pub fn major(self) -> u32 {
        api_version_major(self.0)
    }

    pub fn minor(self) -> u32 {
        api_version_minor(self.0)
    }

    pub fn patch(self) -> u32 {
        api_version_patch(self.0)
    }

    pub fn without_patch(self) -> Self {
        ApiVersion::new(self.variant(), self.major(), self.minor(), 0)
    }
}

impl From<u32> for ApiVersion {
    fn from(raw: u32) -> Self {
        ApiVersion(raw)
    }
}

impl From<ApiVersion> for u32 {
    fn from(version: ApiVersion) -> Self {
        version.0
    }
}

// Variant only breaks ties so the order stays consistent with Eq.
impl Ord for ApiVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major(), self.minor(), self.patch(), self.variant()).cmp(&(
            other.major(),
            other.minor(),
            other.patch(),
            other.variant(),
        ))
    }
}

impl PartialOrd for ApiVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major(), self.minor(), self.patch())
    }
}
