use async_trait::async_trait;
use crate::core::library::{LibraryResult, PaginatedResult, PaginationParams};

// Entities are addressed by their position; a delete shifts every later entity
// down by one.
#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // appends an entity and returns its position
    async fn create(&self, entity: &Entity) -> LibraryResult<usize>;

    // overwrites the entity at a position, keeping its stable key
    async fn update(&self, index: i64, entity: &Entity) -> LibraryResult<Entity>;

    // get an entity
    async fn get(&self, index: i64) -> LibraryResult<Entity>;

    // delete an entity
    async fn delete(&self, index: i64) -> LibraryResult<usize>;

    // a page of all entities in position order
    async fn query(&self, pagination: PaginationParams) -> LibraryResult<PaginatedResult<Entity>>;
}
