/// Database model definitions.
pub mod models;
/// Player storage and retrieval operations.
pub mod player_store;
/// Storage abstraction layer for persistence errors.
pub mod storage;
