//! Native enumerations: the ordered name/value sets that graphum schema
//! enum types are built on.

/// Raw values bound to enumeration members.
pub mod value;

/// The enumeration type and its builder.
pub mod enumeration;

/// Single-call construction from a names specification.
pub mod functional;

pub use enumeration::{NativeEnum, NativeEnumBuilder, NativeEnumError, NativeMember};
pub use functional::Names;
pub use value::{RawValue, RawValueKind};
