pub mod object_id;
pub mod user;

pub use object_id::*;
pub use user::*;
