//! Post domain: author-owned content items.

mod entity;
mod errors;

pub use entity::Post;
pub use errors::PostError;
