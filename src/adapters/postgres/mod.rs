//! PostgreSQL persistence adapters.

mod post_repository;
mod subscription_repository;
mod user_repository;

pub use post_repository::PostgresPostRepository;
pub use subscription_repository::PostgresSubscriptionRepository;
pub use user_repository::PostgresUserRepository;
