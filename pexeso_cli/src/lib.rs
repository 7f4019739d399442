mod config;
mod console;
mod human;
mod messages;
pub use config::*;
pub use console::*;
pub use human::*;
pub use messages::*;
