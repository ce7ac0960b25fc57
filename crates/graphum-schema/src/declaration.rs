//! Declarative construction of enum types.
//!
//! A [`Declaration`] collects name bindings in order, the way a type body
//! would list them. Defining it separates the meta block from the members,
//! builds the native enumeration, and runs the finalize hook.

use std::collections::HashSet;
use std::str::FromStr;
use std::sync::Arc;

use graphum_native::{NativeEnum, RawValue};

use crate::base::{Subtype, finalize_subtype};
use crate::enum_type::EnumType;
use crate::error::{DefineError, InvalidMemberError};
use crate::identifier::{Identifier, META_KEY};
use crate::options::{EnumMeta, EnumOptions};

/// Right-hand side of a binding in a declaration body.
#[derive(Debug, Clone, PartialEq)]
pub enum Binding {
    Value(RawValue),
    Meta(EnumMeta),
}

impl From<RawValue> for Binding {
    fn from(value: RawValue) -> Self {
        Binding::Value(value)
    }
}

impl From<EnumMeta> for Binding {
    fn from(meta: EnumMeta) -> Self {
        Binding::Meta(meta)
    }
}

/// The body of an enum type declaration.
#[derive(Debug, Clone)]
pub struct Declaration {
    name: String,
    doc: Option<String>,
    bindings: Vec<(String, Binding)>,
}

impl Declaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            bindings: Vec::new(),
        }
    }

    /// Set the documentation text; used as description unless the meta block sets one.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Bind `name` to a value or the meta block
    pub fn bind(mut self, name: impl Into<String>, binding: impl Into<Binding>) -> Self {
        self.bindings.push((name.into(), binding.into()));
        self
    }

    /// Declare a member
    pub fn member(self, name: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.bind(name, Binding::Value(value.into()))
    }

    /// Declare the meta block
    pub fn meta(self, meta: EnumMeta) -> Self {
        self.bind(META_KEY, Binding::Meta(meta))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Turn the declaration into a finished enum type.
    pub fn define(self) -> Result<Arc<EnumType>, DefineError> {
        let Declaration {
            name,
            doc,
            bindings,
        } = self;
        let (members, meta) = split_bindings(&name, bindings)?;

        tracing::debug!(enum_type = %name, members = members.len(), "defining enum type");

        match meta.as_ref().and_then(|m| m.native.as_ref()) {
            Some(native) if !members.is_empty() => {
                return Err(InvalidMemberError::ConflictingEnum {
                    type_name: name,
                    enum_name: native.name().to_string(),
                }
                .into());
            }
            None if members.is_empty() => {
                return Err(InvalidMemberError::Empty { type_name: name }.into());
            }
            _ => {}
        }

        let mut builder = NativeEnum::builder(name.as_str()).members(members);
        if let Some(doc) = &doc {
            builder = builder.doc(doc.as_str());
        }
        let native = builder.build().map_err(InvalidMemberError::from)?;

        // The declaration's doc outranks the doc of a meta `native`.
        let options = meta.map(|meta| {
            let mut options = EnumOptions::from(meta);
            options.base.description = options.base.description.or(doc);
            options
        });

        // The built enumeration rides along in the slot; a meta `native`
        // takes precedence when the hook runs.
        let subtype = Subtype {
            name,
            slot: Arc::new(native),
        };
        Ok(finalize_subtype(subtype, options)?)
    }
}

/// Separate member bindings from the meta block, validating member names.
fn split_bindings(
    type_name: &str,
    bindings: Vec<(String, Binding)>,
) -> Result<(Vec<(String, RawValue)>, Option<EnumMeta>), InvalidMemberError> {
    let mut members = Vec::with_capacity(bindings.len());
    let mut seen = HashSet::new();
    let mut meta = None;

    for (name, binding) in bindings {
        match binding {
            Binding::Meta(block) => {
                if name != META_KEY {
                    return Err(InvalidMemberError::MisplacedMeta {
                        type_name: type_name.to_string(),
                        name,
                    });
                }
                if meta.replace(block).is_some() {
                    return Err(InvalidMemberError::DuplicateMeta {
                        type_name: type_name.to_string(),
                    });
                }
            }
            Binding::Value(value) => {
                let identifier =
                    Identifier::from_str(&name).map_err(|source| InvalidMemberError::InvalidName {
                        type_name: type_name.to_string(),
                        name: name.clone(),
                        source,
                    })?;
                if identifier.is_reserved() {
                    return Err(InvalidMemberError::ReservedName {
                        type_name: type_name.to_string(),
                        name,
                    });
                }
                if !seen.insert(identifier) {
                    return Err(InvalidMemberError::DuplicateName {
                        type_name: type_name.to_string(),
                        name,
                    });
                }
                members.push((name, value));
            }
        }
    }

    Ok((members, meta))
}

/// Entry point for declaring enum types in one call.
pub struct TypeBuilder;

impl TypeBuilder {
    /// Define an enum type from ordered member bindings and an optional meta block.
    pub fn define<N, V>(
        name: impl Into<String>,
        members: impl IntoIterator<Item = (N, V)>,
        meta: Option<EnumMeta>,
    ) -> Result<Arc<EnumType>, DefineError>
    where
        N: Into<String>,
        V: Into<RawValue>,
    {
        let declaration = members
            .into_iter()
            .fold(Declaration::new(name), |decl, (n, v)| decl.member(n, v));
        match meta {
            Some(meta) => declaration.meta(meta).define(),
            None => declaration.define(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidWrapTargetError;
    use crate::identifier::IdentifierError;
    use pretty_assertions::assert_eq;

    fn name_format() -> Declaration {
        Declaration::new("NameFormat")
            .member("FIRST_LAST", "first_last")
            .member("LAST_FIRST", "last_first")
    }

    #[test]
    fn test_meta_is_not_a_member() {
        let ty = name_format()
            .meta(EnumMeta::new().description("Name order"))
            .define()
            .unwrap();
        assert_eq!(ty.members().len(), 2);
        assert!(ty.attr(META_KEY).is_none());
        assert_eq!(ty.description(), Some("Name order"));
    }

    #[test]
    fn test_meta_position_does_not_matter() {
        let ty = Declaration::new("NameFormat")
            .meta(EnumMeta::new().deprecation_reason("Use NameStyle"))
            .member("FIRST_LAST", "first_last")
            .define()
            .unwrap();
        assert_eq!(ty.deprecation_reason(), Some("Use NameStyle"));
        assert_eq!(ty.len(), 1);
    }

    #[test]
    fn test_meta_name_overrides_declared_name() {
        let ty = name_format()
            .meta(EnumMeta::new().name("NameOrder"))
            .define()
            .unwrap();
        assert_eq!(ty.name(), "NameOrder");
        assert_eq!(ty.by_name("FIRST_LAST").unwrap().owner_name(), "NameOrder");
    }

    #[test]
    fn test_doc_becomes_description() {
        let ty = name_format().doc("Order of name parts").define().unwrap();
        assert_eq!(ty.description(), Some("Order of name parts"));
    }

    #[test]
    fn test_empty_declaration() {
        let err = Declaration::new("Nothing").define().unwrap_err();
        assert_eq!(
            err,
            DefineError::Member(InvalidMemberError::Empty {
                type_name: "Nothing".to_string()
            })
        );
    }

    #[test]
    fn test_meta_only_declaration_is_empty() {
        let err = Declaration::new("Nothing")
            .meta(EnumMeta::new().description("No members"))
            .define()
            .unwrap_err();
        assert!(matches!(
            err,
            DefineError::Member(InvalidMemberError::Empty { .. })
        ));
    }

    #[test]
    fn test_value_bound_to_meta_key_collides() {
        let err = name_format().member("Meta", "meta").define().unwrap_err();
        assert_eq!(
            err,
            DefineError::Member(InvalidMemberError::ReservedName {
                type_name: "NameFormat".to_string(),
                name: "Meta".to_string(),
            })
        );
    }

    #[test]
    fn test_sunder_names_are_reserved() {
        let err = name_format().member("_order_", "x").define().unwrap_err();
        assert!(matches!(
            err,
            DefineError::Member(InvalidMemberError::ReservedName { .. })
        ));
    }

    #[test]
    fn test_meta_under_other_key() {
        let err = name_format()
            .bind("Options", EnumMeta::new())
            .define()
            .unwrap_err();
        assert_eq!(
            err,
            DefineError::Member(InvalidMemberError::MisplacedMeta {
                type_name: "NameFormat".to_string(),
                name: "Options".to_string(),
            })
        );
    }

    #[test]
    fn test_duplicate_meta() {
        let err = name_format()
            .meta(EnumMeta::new())
            .meta(EnumMeta::new())
            .define()
            .unwrap_err();
        assert!(matches!(
            err,
            DefineError::Member(InvalidMemberError::DuplicateMeta { .. })
        ));
    }

    #[test]
    fn test_duplicate_member() {
        let err = name_format()
            .member("FIRST_LAST", "again")
            .define()
            .unwrap_err();
        assert_eq!(
            err,
            DefineError::Member(InvalidMemberError::DuplicateName {
                type_name: "NameFormat".to_string(),
                name: "FIRST_LAST".to_string(),
            })
        );
    }

    #[test]
    fn test_invalid_member_name() {
        let err = name_format().member("first last", 3).define().unwrap_err();
        assert_eq!(
            err,
            DefineError::Member(InvalidMemberError::InvalidName {
                type_name: "NameFormat".to_string(),
                name: "first last".to_string(),
                source: IdentifierError::InvalidChar {
                    at: 5,
                    invalid_char: ' ',
                },
            })
        );
    }

    #[test]
    fn test_meta_enum_backs_the_type() {
        let native = NativeEnum::builder("Episode")
            .doc("An episode")
            .member("JEDI", 6)
            .build()
            .unwrap();
        let ty = Declaration::new("Episode")
            .meta(EnumMeta::new().native(native))
            .define()
            .unwrap();
        assert_eq!(ty.get(6).unwrap().name(), "JEDI");
        assert_eq!(ty.description(), Some("An episode"));
    }

    #[test]
    fn test_declared_doc_outranks_meta_enum_doc() {
        let native = NativeEnum::builder("Episode")
            .doc("An episode")
            .member("JEDI", 6)
            .build()
            .unwrap();
        let ty = Declaration::new("Episode")
            .doc("Declared doc")
            .meta(EnumMeta::new().native(native))
            .define()
            .unwrap();
        assert_eq!(ty.description(), Some("Declared doc"));

        let explicit = NativeEnum::builder("Episode").member("JEDI", 6).build().unwrap();
        let ty = Declaration::new("Episode")
            .doc("Declared doc")
            .meta(EnumMeta::new().native(explicit).description("Explicit"))
            .define()
            .unwrap();
        assert_eq!(ty.description(), Some("Explicit"));
    }

    #[test]
    fn test_meta_enum_conflicts_with_members() {
        let native = NativeEnum::builder("Episode").member("JEDI", 6).build().unwrap();
        let err = name_format()
            .meta(EnumMeta::new().native(native))
            .define()
            .unwrap_err();
        assert_eq!(
            err,
            DefineError::Member(InvalidMemberError::ConflictingEnum {
                type_name: "NameFormat".to_string(),
                enum_name: "Episode".to_string(),
            })
        );
    }

    #[test]
    fn test_meta_enum_must_be_valid() {
        let empty = NativeEnum::builder("Nothing").build().unwrap();
        let err = Declaration::new("Nothing")
            .meta(EnumMeta::new().native(empty))
            .define()
            .unwrap_err();
        assert_eq!(
            err,
            DefineError::WrapTarget(InvalidWrapTargetError::Empty {
                enum_name: "Nothing".to_string()
            })
        );
    }

    #[test]
    fn test_type_builder_define() {
        let ty = TypeBuilder::define(
            "NameFormat",
            [("FIRST_LAST", "first_last"), ("LAST_FIRST", "last_first")],
            Some(EnumMeta::new().deprecation_reason("Use NameStyle")),
        )
        .unwrap();
        let names: Vec<_> = ty.members().keys().map(String::as_str).collect();
        assert_eq!(names, vec!["FIRST_LAST", "LAST_FIRST"]);
        assert!(ty.is_deprecated());
    }
}
