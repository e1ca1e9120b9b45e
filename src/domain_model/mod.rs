mod market;
mod permission;
mod user;

pub use market::*;
pub use permission::*;
pub use user::*;
