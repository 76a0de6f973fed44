mod file;
mod memory;

pub use file::FileMessageBackend;
pub use memory::InMemoryMessageBackend;
