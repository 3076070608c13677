use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait Query<T> {
    type Filter;
    async fn query(&self, filter: &Self::Filter) -> Result<Vec<T>>;
}

/// A stored record and the acknowledgement message
/// of the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct Saved<T> {
    pub record: T,
    pub message: String,
}

#[async_trait]
pub trait Insert<T> {
    async fn insert(&self, item: T) -> Result<Saved<T>>;
}

#[async_trait]
pub trait Update<T> {
    async fn update(&self, item: T) -> Result<Saved<T>>;
}

#[async_trait]
pub trait Retrieve<T> {
    type Key;
    async fn retrieve(&self, key: Self::Key) -> Result<T>;
}

/// Removal by key. Resolves to the acknowledgement
/// message of the backend.
#[async_trait]
pub trait Delete<T> {
    type Key;
    async fn delete(&self, key: Self::Key) -> Result<String>;
}
