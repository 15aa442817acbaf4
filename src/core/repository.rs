use std::cmp;
use async_trait::async_trait;
use crate::core::domain::Identifiable;
use crate::core::library::LibraryResult;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // loads every entity in stored order
    async fn load(&self) -> LibraryResult<Vec<Entity>>;

    // replaces the stored entities with the given ones, returns the count written
    async fn save(&self, entities: &[Entity]) -> LibraryResult<usize>;
}

// next_id returns the largest `id + 1` among entities, never less than 1.
// Entities without an integer id take no part.
pub(crate) fn next_id<T: Identifiable>(entities: &[T]) -> i64 {
    entities.iter()
        .filter_map(|entity| entity.id())
        .fold(1, |id, entity_id| cmp::max(entity_id.saturating_add(1), id))
}
