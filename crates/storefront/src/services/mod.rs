//! Service layer for the storefront.

pub mod auth;
