pub mod generated_user;
pub mod user;

pub use generated_user::*;
pub use user::*;
