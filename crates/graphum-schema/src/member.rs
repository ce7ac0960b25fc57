use std::hash::{Hash, Hasher};
use std::num::NonZeroU64;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use graphum_native::RawValue;

static NEXT_IDENTITY: AtomicU64 = AtomicU64::new(1);

/// Identity of one constructed enum type. Never reused within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeIdentity(NonZeroU64);

impl TypeIdentity {
    pub(crate) fn fresh() -> Self {
        let id = NEXT_IDENTITY.fetch_add(1, Ordering::Relaxed);
        TypeIdentity(NonZeroU64::new(id).unwrap_or(NonZeroU64::MIN))
    }
}

/// A member value of an enum type.
///
/// Members compare equal only to the identical member of the identical type.
/// Compared with a raw value, a member is equal when its `value` is.
#[derive(Clone)]
pub struct EnumMember {
    owner: TypeIdentity,
    owner_name: Arc<str>,
    index: usize,
    name: Arc<str>,
    value: RawValue,
}

impl EnumMember {
    pub(crate) fn new(
        owner: TypeIdentity,
        owner_name: Arc<str>,
        index: usize,
        name: &str,
        value: RawValue,
    ) -> Self {
        Self {
            owner,
            owner_name,
            index,
            name: name.into(),
            value,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &RawValue {
        &self.value
    }

    /// Position among the canonical members of the owning type.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn owner(&self) -> TypeIdentity {
        self.owner
    }

    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }
}

impl std::fmt::Debug for EnumMember {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}.{}: {}>", self.owner_name, self.name, self.value)
    }
}

impl std::fmt::Display for EnumMember {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.owner_name, self.name)
    }
}

impl PartialEq for EnumMember {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner && self.index == other.index
    }
}

impl Eq for EnumMember {}

impl Hash for EnumMember {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.owner.hash(state);
        self.index.hash(state);
    }
}

impl PartialEq<RawValue> for EnumMember {
    fn eq(&self, other: &RawValue) -> bool {
        &self.value == other
    }
}

impl PartialEq<EnumMember> for RawValue {
    fn eq(&self, other: &EnumMember) -> bool {
        other == self
    }
}

impl PartialEq<str> for EnumMember {
    fn eq(&self, other: &str) -> bool {
        self.value == *other
    }
}

impl PartialEq<&str> for EnumMember {
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}

impl PartialEq<i64> for EnumMember {
    fn eq(&self, other: &i64) -> bool {
        self.value == *other
    }
}

impl PartialEq<bool> for EnumMember {
    fn eq(&self, other: &bool) -> bool {
        self.value == *other
    }
}
