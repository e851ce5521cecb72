pub mod memory;
pub mod notion;

pub use memory::MemoryStorage;
pub use notion::NotionStorage;
