pub mod root;
pub mod health;
pub mod users;

pub use root::root_handler;
pub use health::health_handler;
pub use users::users_handler;
