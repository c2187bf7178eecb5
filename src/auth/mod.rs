//! Boundary with the upstream identity provider.

pub mod middleware;

pub use middleware::{VerifiedEmail, VerifiedIdentity, EMAIL_HEADER, NAME_HEADER};
