use std::str::FromStr;
use std::sync::Arc;

use graphum_native::functional::DEFAULT_START;
use graphum_native::{NativeEnum, Names, RawValue};

use crate::base::{BaseOptions, FinalizeSubtype, Subtype, finalize_subtype};
use crate::error::{FunctionalError, InvalidWrapTargetError, UnknownMemberError};
use crate::identifier::Identifier;
use crate::map::Map;
use crate::member::{EnumMember, TypeIdentity};
use crate::options::{EnumOptions, FunctionalOptions};

/// A finished enum schema type.
///
/// Defines a static set of values that can be provided as a field, argument
/// or input field. Built once by [`crate::TypeBuilder::define`],
/// [`EnumType::from_native_enum`] or [`EnumType::functional`] and immutable
/// afterwards. Two types are equal only if they are the same construction.
#[derive(Debug)]
pub struct EnumType {
    identity: TypeIdentity,
    name: String,
    description: Option<String>,
    deprecation_reason: Option<String>,
    native: Arc<NativeEnum>,
    canonical: Vec<EnumMember>,
    /// Every bound name, aliases included, in declaration order.
    members: Map<String, EnumMember>,
}

impl EnumType {
    /// Wrap an existing native enumeration.
    ///
    /// The type takes the enumeration's name, and its documentation when no
    /// description is given.
    pub fn from_native_enum(
        native: impl Into<Arc<NativeEnum>>,
        description: Option<&str>,
        deprecation_reason: Option<&str>,
    ) -> Result<Arc<EnumType>, InvalidWrapTargetError> {
        let native = native.into();
        let options = EnumOptions {
            base: BaseOptions {
                name: None,
                description: description.map(str::to_string),
            },
            native: Some(Arc::clone(&native)),
            deprecation_reason: deprecation_reason.map(str::to_string),
        };

        let subtype = Subtype {
            name: native.name().to_string(),
            slot: native,
        };
        finalize_subtype(subtype, Some(options))
    }

    /// Build the native enumeration from `names` and wrap it in one call.
    pub fn functional(
        name: impl Into<String>,
        names: impl Into<Names>,
        options: FunctionalOptions,
    ) -> Result<Arc<EnumType>, FunctionalError> {
        let start = options.start.unwrap_or(DEFAULT_START);
        let native = NativeEnum::functional_with_start(name, names, start)?;
        Ok(Self::from_native_enum(
            native,
            options.description.as_deref(),
            options.deprecation_reason.as_deref(),
        )?)
    }

    pub fn identity(&self) -> TypeIdentity {
        self.identity
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn deprecation_reason(&self) -> Option<&str> {
        self.deprecation_reason.as_deref()
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecation_reason.is_some()
    }

    /// The enumeration backing this type.
    pub fn native(&self) -> &Arc<NativeEnum> {
        &self.native
    }

    /// Member name to member value, in declaration order. Aliases map to
    /// their canonical member.
    pub fn members(&self) -> &Map<String, EnumMember> {
        &self.members
    }

    /// Members without aliases, in declaration order.
    pub fn canonical_members(&self) -> &[EnumMember] {
        &self.canonical
    }

    pub fn len(&self) -> usize {
        self.canonical.len()
    }

    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }

    /// Direct access to a member, like a field on the type.
    pub fn attr(&self, name: &str) -> Option<&EnumMember> {
        self.members.get(name)
    }

    /// Look up a member by name.
    pub fn by_name(&self, name: &str) -> Result<&EnumMember, UnknownMemberError> {
        self.attr(name).ok_or_else(|| UnknownMemberError::Name {
            type_name: self.name.clone(),
            name: name.to_string(),
        })
    }

    /// Look up a member by its raw value.
    pub fn get(&self, value: impl Into<RawValue>) -> Result<&EnumMember, UnknownMemberError> {
        let value = value.into();
        match self.native.index_of_value(&value) {
            Some(index) => Ok(&self.canonical[index]),
            None => Err(UnknownMemberError::Value {
                type_name: self.name.clone(),
                value,
            }),
        }
    }

    /// Whether `member` belongs to this type.
    pub fn contains(&self, member: &EnumMember) -> bool {
        member.owner() == self.identity
    }
}

impl PartialEq for EnumType {
    fn eq(&self, other: &Self) -> bool {
        self.identity == other.identity
    }
}

impl Eq for EnumType {}

impl FinalizeSubtype for EnumType {
    /// The enumeration built from the declared members.
    type Slot = Arc<NativeEnum>;
    type Options = EnumOptions;
    type Error = InvalidWrapTargetError;

    fn on_subtype_finalized(
        subtype: Subtype<Arc<NativeEnum>>,
        options: Option<EnumOptions>,
    ) -> Result<Self, InvalidWrapTargetError> {
        let options = options.unwrap_or_default();
        let native = options.native.unwrap_or(subtype.slot);
        validate_wrap_target(&native)?;

        let base = options.base.resolve(&subtype.name, native.doc());
        let identity = TypeIdentity::fresh();
        let owner_name: Arc<str> = base.name.as_str().into();

        let canonical: Vec<EnumMember> = native
            .members()
            .enumerate()
            .map(|(index, m)| {
                EnumMember::new(
                    identity,
                    Arc::clone(&owner_name),
                    index,
                    m.name(),
                    m.value().clone(),
                )
            })
            .collect();

        let mut members = Map::new();
        for (name, index) in native.name_indices() {
            // Aliases share the canonical member instance.
            tracing::trace!(enum_type = %base.name, member = name, index, "promoting member");
            members.insert(name.to_string(), canonical[index].clone());
        }

        tracing::debug!(
            enum_type = %base.name,
            members = canonical.len(),
            aliases = members.len() - canonical.len(),
            deprecated = options.deprecation_reason.is_some(),
            "enum type finalized"
        );

        Ok(EnumType {
            identity,
            name: base.name,
            description: base.description,
            deprecation_reason: options.deprecation_reason,
            native,
            canonical,
            members,
        })
    }
}

/// Check that every member of `native` can be exposed in a schema.
fn validate_wrap_target(native: &NativeEnum) -> Result<(), InvalidWrapTargetError> {
    if native.is_empty() {
        return Err(InvalidWrapTargetError::Empty {
            enum_name: native.name().to_string(),
        });
    }
    for (name, _) in native.names() {
        let identifier =
            Identifier::from_str(name).map_err(|source| InvalidWrapTargetError::InvalidName {
                enum_name: native.name().to_string(),
                name: name.to_string(),
                source,
            })?;
        if identifier.is_reserved() {
            return Err(InvalidWrapTargetError::ReservedName {
                enum_name: native.name().to_string(),
                name: name.to_string(),
            });
        }
    }
    Ok(())
}
