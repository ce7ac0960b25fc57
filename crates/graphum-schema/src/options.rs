//! Configuration carried into enum type construction.

use std::sync::Arc;

use graphum_native::NativeEnum;

use crate::base::BaseOptions;

/// The meta block of a declaration, bound under the `Meta` key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnumMeta {
    pub name: Option<String>,
    pub description: Option<String>,
    pub deprecation_reason: Option<String>,
    /// An existing enumeration to back the type instead of declared members.
    pub native: Option<Arc<NativeEnum>>,
}

impl EnumMeta {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the schema name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Mark the type deprecated
    pub fn deprecation_reason(mut self, reason: impl Into<String>) -> Self {
        self.deprecation_reason = Some(reason.into());
        self
    }

    /// Back the type with an existing enumeration
    pub fn native(mut self, native: impl Into<Arc<NativeEnum>>) -> Self {
        self.native = Some(native.into());
        self
    }
}

/// Options assembled from the meta block and handed to the finalize hook.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnumOptions {
    pub base: BaseOptions,
    pub native: Option<Arc<NativeEnum>>,
    pub deprecation_reason: Option<String>,
}

impl From<EnumMeta> for EnumOptions {
    fn from(meta: EnumMeta) -> Self {
        EnumOptions {
            base: BaseOptions {
                name: meta.name,
                description: meta.description,
            },
            native: meta.native,
            deprecation_reason: meta.deprecation_reason,
        }
    }
}

/// Descriptive options for [`crate::EnumType::functional`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionalOptions {
    pub description: Option<String>,
    pub deprecation_reason: Option<String>,
    /// First value given to auto-numbered names. Defaults to 1.
    pub start: Option<i64>,
}

impl FunctionalOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Mark the type deprecated
    pub fn deprecation_reason(mut self, reason: impl Into<String>) -> Self {
        self.deprecation_reason = Some(reason.into());
        self
    }

    /// Number bare names from `start`
    pub fn start(mut self, start: i64) -> Self {
        self.start = Some(start);
        self
    }
}
