pub mod category;
pub mod comment;
pub mod post;
pub mod user;

pub use category::CategoryBody;
pub use comment::CommentBody;
pub use post::PostBody;
pub use user::UserBody;
