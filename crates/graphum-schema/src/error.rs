//! Error types for the graphum-schema crate

use graphum_native::{NativeEnumError, RawValue};
use thiserror::Error;

use crate::identifier::IdentifierError;

/// Errors raised while defining an enum type from a declaration.
/// No type is produced when any of these occur.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidMemberError {
    #[error("Enum `{type_name}` declares no members")]
    Empty { type_name: String },

    #[error("Member name `{name}` is reserved in enum `{type_name}`")]
    ReservedName { type_name: String, name: String },

    #[error("Member `{name}` is declared twice in enum `{type_name}`")]
    DuplicateName { type_name: String, name: String },

    #[error("Invalid member name `{name}` in enum `{type_name}`: {source}")]
    InvalidName {
        type_name: String,
        name: String,
        source: IdentifierError,
    },

    #[error("Enum `{type_name}` declares its meta block more than once")]
    DuplicateMeta { type_name: String },

    #[error("Meta block of enum `{type_name}` must be bound to `Meta`, found `{name}`")]
    MisplacedMeta { type_name: String, name: String },

    #[error("Enum `{type_name}` wraps `{enum_name}` from its meta block and cannot declare members")]
    ConflictingEnum {
        type_name: String,
        enum_name: String,
    },

    /// Names are validated before the enumeration is built, so this only
    /// surfaces if the native builder gains a rule the declaration lacks.
    #[error(transparent)]
    Native(#[from] NativeEnumError),
}

/// The native enumeration handed to the wrap path cannot back a schema type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidWrapTargetError {
    #[error("Enumeration `{enum_name}` has no members")]
    Empty { enum_name: String },

    #[error("Enumeration `{enum_name}` has member `{name}` which is not a valid schema name: {source}")]
    InvalidName {
        enum_name: String,
        name: String,
        source: IdentifierError,
    },

    #[error("Enumeration `{enum_name}` has member `{name}` which is a reserved name")]
    ReservedName { enum_name: String, name: String },
}

/// A lookup on a finished enum type found nothing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnknownMemberError {
    #[error("Enum `{type_name}` has no member named `{name}`")]
    Name { type_name: String, name: String },

    #[error("Enum `{type_name}` has no member with value {value}")]
    Value { type_name: String, value: RawValue },
}

/// Errors from [`crate::TypeBuilder::define`] and [`crate::Declaration::define`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefineError {
    #[error(transparent)]
    Member(#[from] InvalidMemberError),

    #[error(transparent)]
    WrapTarget(#[from] InvalidWrapTargetError),
}

/// Errors from [`crate::EnumType::functional`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FunctionalError {
    #[error("Failed to build enumeration: {0}")]
    Native(#[from] NativeEnumError),

    #[error(transparent)]
    WrapTarget(#[from] InvalidWrapTargetError),
}

/// Errors from mounting an enum type on a field, argument or input field.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MountError {
    #[error("Invalid default value: {0}")]
    Default(#[from] UnknownMemberError),

    #[error("Field of type `{type_name}` cannot carry a default value")]
    DefaultOnField { type_name: String },
}
