//! User domain: phone-verified accounts.

mod account;
mod confirmation;
mod errors;
mod password;
mod phone;

pub use account::User;
pub use confirmation::ConfirmationToken;
pub use errors::UserError;
pub use password::{hash_password, verify_password};
pub use phone::PhoneNumber;
