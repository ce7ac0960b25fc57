//! Attaching enum types to fields, arguments and input fields.

use std::sync::Arc;

use graphum_native::RawValue;

use crate::enum_type::EnumType;
use crate::error::MountError;
use crate::member::EnumMember;

/// A type reference that can be resolved when it is mounted.
pub trait UnmountedType {
    type Type;

    /// Called when the unmounted type is mounted as a field, input field or
    /// argument.
    fn get_type(&self) -> Self::Type;
}

/// Enum types are fully resolved at construction, so mounting yields the
/// type itself.
impl UnmountedType for Arc<EnumType> {
    type Type = Arc<EnumType>;

    fn get_type(&self) -> Arc<EnumType> {
        Arc::clone(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountKind {
    Field,
    Argument,
    InputField,
}

impl core::fmt::Display for MountKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Field => write!(f, "field"),
            Self::Argument => write!(f, "argument"),
            Self::InputField => write!(f, "input field"),
        }
    }
}

/// One use of an enum type, carrying per-use options until it is mounted.
#[derive(Debug, Clone)]
pub struct Unmounted {
    ty: Arc<EnumType>,
    description: Option<String>,
    deprecation_reason: Option<String>,
    default_value: Option<RawValue>,
    required: bool,
}

impl EnumType {
    /// Start an unmounted use of this type.
    pub fn unmounted(self: &Arc<Self>) -> Unmounted {
        Unmounted {
            ty: Arc::clone(self),
            description: None,
            deprecation_reason: None,
            default_value: None,
            required: false,
        }
    }
}

impl Unmounted {
    /// Set description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Mark this use deprecated
    pub fn deprecation_reason(mut self, reason: impl Into<String>) -> Self {
        self.deprecation_reason = Some(reason.into());
        self
    }

    /// Set the default by raw value; it must name a member when mounted
    pub fn default_value(mut self, value: impl Into<RawValue>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Set the default to a member
    pub fn default_member(self, member: &EnumMember) -> Self {
        self.default_value(member.value().clone())
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Resolve the type and attach it as `kind`.
    pub fn mount_as(self, kind: MountKind) -> Result<Mounted, MountError> {
        let ty = self.get_type();
        let default = match self.default_value {
            None => None,
            Some(_) if kind == MountKind::Field => {
                return Err(MountError::DefaultOnField {
                    type_name: ty.name().to_string(),
                });
            }
            Some(value) => Some(ty.get(value)?.clone()),
        };
        Ok(Mounted {
            kind,
            ty,
            description: self.description,
            deprecation_reason: self.deprecation_reason,
            default,
            required: self.required,
        })
    }
}

impl UnmountedType for Unmounted {
    type Type = Arc<EnumType>;

    fn get_type(&self) -> Arc<EnumType> {
        self.ty.get_type()
    }
}

/// An enum type attached to a field, argument or input field.
#[derive(Debug, Clone, PartialEq)]
pub struct Mounted {
    pub kind: MountKind,
    pub ty: Arc<EnumType>,
    pub description: Option<String>,
    pub deprecation_reason: Option<String>,
    pub default: Option<EnumMember>,
    pub required: bool,
}
