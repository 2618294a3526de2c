//! Domain entities - the core business objects.

mod post;
mod project;
mod tag;
mod user;

pub use post::Post;
pub use project::Project;
pub use tag::Tag;
pub use user::User;
