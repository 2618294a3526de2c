//! Request middleware: error conversion and the auth extractor.

pub mod auth;
pub mod error;
