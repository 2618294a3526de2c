//! # Blog Core
//!
//! The domain layer of the blog backend.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod markdown;
pub mod ports;
pub mod site;
pub mod slug;

pub use error::DomainError;
