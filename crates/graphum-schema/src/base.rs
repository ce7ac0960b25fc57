//! The narrow slice of base-type machinery shared by every schema type.

use std::sync::Arc;

/// Options every schema type accepts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaseOptions {
    /// Name of the type in the schema. Defaults to the declared name.
    pub name: Option<String>,
    /// Description of the type. Defaults to the declaration's documentation.
    pub description: Option<String>,
}

impl BaseOptions {
    /// Fill unset options from the declaration.
    pub fn resolve(self, declared_name: &str, doc: Option<&str>) -> ResolvedBase {
        ResolvedBase {
            name: self.name.unwrap_or_else(|| declared_name.to_string()),
            description: self.description.or_else(|| doc.map(str::to_string)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBase {
    pub name: String,
    pub description: Option<String>,
}

/// A declared subtype whose construction has not been finalized yet.
///
/// `slot` carries whatever the declaration phase attached for the finalize
/// hook to pick up.
#[derive(Debug, Clone)]
pub struct Subtype<S> {
    pub name: String,
    pub slot: S,
}

/// Completes construction of a schema type from its assembled options.
pub trait FinalizeSubtype: Sized {
    /// Data attached by the declaration phase.
    type Slot;
    /// Options assembled from the meta block.
    type Options;
    type Error;

    /// Called exactly once per new type. `options` is `None` when the
    /// declaration had no meta block.
    fn on_subtype_finalized(
        subtype: Subtype<Self::Slot>,
        options: Option<Self::Options>,
    ) -> Result<Self, Self::Error>;
}

/// Run the finalize hook of `T` and freeze the result.
pub fn finalize_subtype<T: FinalizeSubtype>(
    subtype: Subtype<T::Slot>,
    options: Option<T::Options>,
) -> Result<Arc<T>, T::Error> {
    let _span = tracing::debug_span!("finalize_subtype", name = %subtype.name).entered();
    T::on_subtype_finalized(subtype, options).map(Arc::new)
}
