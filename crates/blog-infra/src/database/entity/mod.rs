//! SeaORM entity definitions and conversions to/from domain types.

pub mod post;
pub mod project;
pub mod tag;
pub mod user;
