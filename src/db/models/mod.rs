//! Database Models

// Serde helpers
pub mod serde_helpers;

pub mod order;
pub mod user;

// Re-exports
pub use order::{Order, OrderCreate, OrderDelete, OrderUpdate, OrderWithUser};
pub use user::User;
