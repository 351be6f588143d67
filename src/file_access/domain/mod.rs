pub mod buffer_size;
pub mod entry_name;
pub mod write_mode;

pub use buffer_size::{BufferSize, DEFAULT_BUFFER_SIZE};
pub use entry_name::{RawEntryName, ENTRY_NAME_CAPACITY};
pub use write_mode::WriteMode;
