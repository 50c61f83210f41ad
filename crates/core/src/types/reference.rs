//! Reference fields that may hold a raw id or an expanded record.
//!
//! The remote API sometimes returns a bare identifier for a related entity
//! and sometimes the embedded record, depending on whether the endpoint
//! populated the reference. [`Ref`] models that shape explicitly so the id
//! is resolved once at the store boundary instead of being re-checked at
//! every use site.

use serde::{Deserialize, Serialize};

/// A record that knows its own typed id.
pub trait HasId {
    /// The newtype id of this record.
    type Id;

    /// The record's id.
    fn id(&self) -> &Self::Id;
}

/// Either an unresolved id or the fully expanded record.
///
/// Deserialized with `untagged`: a JSON string becomes [`Ref::Id`], a JSON
/// object becomes [`Ref::Record`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ref<Id, T> {
    /// Bare identifier, not expanded by the server.
    Id(Id),
    /// Embedded full record.
    Record(Box<T>),
}

impl<Id, T> Ref<Id, T>
where
    T: HasId<Id = Id>,
{
    /// The referenced entity's id, whichever form the reference arrived in.
    #[must_use]
    pub fn id(&self) -> &Id {
        match self {
            Self::Id(id) => id,
            Self::Record(record) => record.id(),
        }
    }

    /// The embedded record, when the server expanded the reference.
    #[must_use]
    pub fn record(&self) -> Option<&T> {
        match self {
            Self::Id(_) => None,
            Self::Record(record) => Some(record),
        }
    }
}
