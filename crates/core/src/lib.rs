//! `sitedesk-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** types (no infrastructure concerns):
//! entities, typed identifiers, and boundary validation.

pub mod contact;
pub mod error;
pub mod id;
pub mod user;

pub use contact::{ContactMessage, NewContactMessage};
pub use error::{DomainError, DomainResult};
pub use id::{ContactMessageId, UserId};
pub use user::{NewUser, User};
