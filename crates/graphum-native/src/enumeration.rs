use indexmap::IndexMap;
use thiserror::Error;

use crate::value::RawValue;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NativeEnumError {
    #[error("Empty member name in enumeration `{enum_name}`")]
    EmptyName { enum_name: String },
    #[error("Member name `{name}` is declared twice in enumeration `{enum_name}`")]
    DuplicateName { enum_name: String, name: String },
}

/// One canonical member of a [`NativeEnum`].
#[derive(Debug, Clone, PartialEq)]
pub struct NativeMember {
    name: String,
    value: RawValue,
}

impl NativeMember {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &RawValue {
        &self.value
    }
}

/// An ordered, immutable enumeration of named raw values.
///
/// Every bound name maps to a canonical member. A name whose value repeats the
/// value of an earlier member is an alias of that member: it is reachable by
/// name but does not produce a member of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct NativeEnum {
    name: String,
    doc: Option<String>,
    members: Vec<NativeMember>,
    /// All bound names in declaration order, aliases included.
    names: IndexMap<String, usize>,
}

impl NativeEnum {
    pub fn builder(name: impl Into<String>) -> NativeEnumBuilder {
        NativeEnumBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    /// Number of canonical members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Canonical members in declaration order.
    pub fn members(&self) -> impl ExactSizeIterator<Item = &NativeMember> {
        self.members.iter()
    }

    /// Every bound name with the member it resolves to, aliases included.
    pub fn names(&self) -> impl ExactSizeIterator<Item = (&str, &NativeMember)> {
        self.names
            .iter()
            .map(|(name, index)| (name.as_str(), &self.members[*index]))
    }

    /// Every bound name with the index of its canonical member.
    pub fn name_indices(&self) -> impl ExactSizeIterator<Item = (&str, usize)> {
        self.names.iter().map(|(name, index)| (name.as_str(), *index))
    }

    pub fn member(&self, index: usize) -> Option<&NativeMember> {
        self.members.get(index)
    }

    /// Index of the canonical member bound to `name`.
    pub fn index_of_name(&self, name: &str) -> Option<usize> {
        self.names.get(name).copied()
    }

    /// Index of the canonical member carrying `value`.
    pub fn index_of_value(&self, value: &RawValue) -> Option<usize> {
        self.members.iter().position(|m| &m.value == value)
    }

    pub fn by_name(&self, name: &str) -> Option<&NativeMember> {
        self.index_of_name(name).map(|i| &self.members[i])
    }

    pub fn by_value(&self, value: &RawValue) -> Option<&NativeMember> {
        self.index_of_value(value).map(|i| &self.members[i])
    }

    pub fn is_alias(&self, name: &str) -> bool {
        self.by_name(name).is_some_and(|m| m.name != name)
    }
}

/// Collects name/value bindings and builds a [`NativeEnum`].
#[derive(Debug, Clone)]
pub struct NativeEnumBuilder {
    name: String,
    doc: Option<String>,
    entries: Vec<(String, RawValue)>,
}

impl NativeEnumBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            entries: Vec::new(),
        }
    }

    /// Set the documentation text
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Add a member binding
    pub fn member(mut self, name: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.entries.push((name.into(), value.into()));
        self
    }

    /// Add several member bindings in order
    pub fn members<N, V>(mut self, members: impl IntoIterator<Item = (N, V)>) -> Self
    where
        N: Into<String>,
        V: Into<RawValue>,
    {
        self.entries
            .extend(members.into_iter().map(|(n, v)| (n.into(), v.into())));
        self
    }

    pub fn build(self) -> Result<NativeEnum, NativeEnumError> {
        let mut members: Vec<NativeMember> = Vec::with_capacity(self.entries.len());
        let mut names: IndexMap<String, usize> = IndexMap::with_capacity(self.entries.len());

        for (name, value) in self.entries {
            if name.is_empty() {
                return Err(NativeEnumError::EmptyName {
                    enum_name: self.name,
                });
            }
            if names.contains_key(&name) {
                return Err(NativeEnumError::DuplicateName {
                    enum_name: self.name,
                    name,
                });
            }
            let index = match members.iter().position(|m| m.value == value) {
                Some(canonical) => {
                    tracing::trace!(
                        enumeration = %self.name,
                        alias = %name,
                        canonical = %members[canonical].name,
                        "binding alias"
                    );
                    canonical
                }
                None => {
                    members.push(NativeMember {
                        name: name.clone(),
                        value,
                    });
                    members.len() - 1
                }
            };
            names.insert(name, index);
        }

        Ok(NativeEnum {
            name: self.name,
            doc: self.doc,
            members,
            names,
        })
    }
}
