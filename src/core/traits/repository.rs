use async_trait::async_trait;

use crate::core::error::Result;

/// A record whose identifier is assigned by the storage layer.
///
/// `Draft` is the same record before it has been persisted. Storage backends
/// that cannot generate identifiers themselves build the entity through
/// [`Entity::from_draft`], handing out a fresh id for the record and for every
/// child row it owns.
pub trait Entity: Clone + Send + Sync + 'static {
    type Draft: Send + Sync + 'static;

    /// Build the stored form of `draft`, pulling identifiers from `next_id`
    fn from_draft(draft: Self::Draft, next_id: &mut dyn FnMut() -> i64) -> Self;
}

/// Base repository trait for identifier-keyed storage
/// All repositories should implement this trait for consistency
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Persist a new record and return it with its identifier assigned
    async fn save(&self, draft: T::Draft) -> Result<T>;

    /// List every stored record, ordered by identifier
    async fn find_all(&self) -> Result<Vec<T>>;
}
