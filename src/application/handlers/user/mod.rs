//! User handlers: registration, SMS confirmation, author directory.

mod confirm_registration;
mod list_authors;
mod register_user;

pub use confirm_registration::{
    ConfirmRegistrationCommand, ConfirmRegistrationHandler, ConfirmRegistrationResult,
};
pub use list_authors::{ListAuthorsHandler, ListAuthorsQuery, ListAuthorsResult};
pub use register_user::{RegisterUserCommand, RegisterUserHandler, RegisterUserResult};
