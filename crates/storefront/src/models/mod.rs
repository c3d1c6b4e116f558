//! Domain models for the storefront.

pub mod auth_form;
pub mod session;
pub mod user;

pub use auth_form::{AuthFields, AuthFormState, AuthMode};
pub use user::User;
