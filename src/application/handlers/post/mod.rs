//! Post handlers: catalog, detail, and owner-only mutations.

mod create_post;
mod delete_post;
mod get_post;
mod list_posts;
mod update_post;

pub use create_post::{CreatePostCommand, CreatePostHandler, CreatePostResult};
pub use delete_post::{DeletePostCommand, DeletePostHandler};
pub use get_post::{GetPostHandler, GetPostQuery, GetPostResult};
pub use list_posts::{LatestPostsQuery, ListPostsHandler, ListPostsQuery, ListPostsResult};
pub use update_post::{UpdatePostCommand, UpdatePostHandler, UpdatePostResult};
