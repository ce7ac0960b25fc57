//! Declarative enum types for graphum schemas.
//!
//! An enum type restricts a field, argument or input field to a fixed,
//! ordered set of named members. Types are defined once and are immutable
//! afterwards.
//!
//! ```
//! use graphum_schema::{Declaration, UnmountedType};
//!
//! let name_format = Declaration::new("NameFormat")
//!     .member("FIRST_LAST", "first_last")
//!     .member("LAST_FIRST", "last_first")
//!     .define()
//!     .unwrap();
//!
//! let first_last = name_format.get("first_last").unwrap();
//! assert_eq!(Some(first_last), name_format.attr("FIRST_LAST"));
//! assert!(*first_last == "first_last");
//! assert_eq!(name_format.get_type(), name_format);
//! ```
//!
//! Existing enumerations can be wrapped with [`EnumType::from_native_enum`],
//! or built and wrapped in one call with [`EnumType::functional`].

/// Schema names for enum members.
pub mod identifier;

/// Insertion-ordered map.
pub mod map;

/// Options and finalize hook shared by schema types.
pub mod base;

/// Construction options.
pub mod options;

pub mod error;

/// Member values and their equality.
pub mod member;

/// The enum type object.
pub mod enum_type;

/// Declarative definition.
pub mod declaration;

/// Mounting on fields, arguments and input fields.
pub mod mount;

pub use base::{BaseOptions, FinalizeSubtype, Subtype};
pub use declaration::{Binding, Declaration, TypeBuilder};
pub use enum_type::EnumType;
pub use error::{
    DefineError, FunctionalError, InvalidMemberError, InvalidWrapTargetError, MountError,
    UnknownMemberError,
};
pub use graphum_native::{Names, NativeEnum, RawValue};
pub use member::{EnumMember, TypeIdentity};
pub use mount::{MountKind, Mounted, Unmounted, UnmountedType};
pub use options::{EnumMeta, EnumOptions, FunctionalOptions};
