mod memory;
mod memory_bot;
mod policy;
pub use memory::*;
pub use memory_bot::*;
pub use policy::*;
