pub mod contacts;
pub mod system;
pub mod users;
