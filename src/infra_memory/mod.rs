mod user_permission_repo_fake;
mod user_permission_repo_static;

pub use user_permission_repo_fake::*;
pub use user_permission_repo_static::*;
