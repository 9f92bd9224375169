pub mod health;
pub mod player;
pub mod timestamp;
pub mod validation;
