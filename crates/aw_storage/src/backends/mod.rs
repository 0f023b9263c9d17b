pub mod jsonl;
pub mod memory;

pub use jsonl::{JsonlSource, JsonlStorage};
pub use memory::MemoryStorage;
