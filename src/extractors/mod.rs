//! Request extractors that map rejections onto `AppError`.

pub mod id;
pub mod json;

pub use id::EntityId;
pub use json::ValidJson;
