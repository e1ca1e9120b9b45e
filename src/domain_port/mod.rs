// repo

mod user_permission_repo;

pub use user_permission_repo::*;
