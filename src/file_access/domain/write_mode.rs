use std::fs::OpenOptions;

/// How a write operation treats existing file content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Create the file if absent, otherwise discard its content
    Truncate,
    /// Create the file if absent, otherwise write after its content
    Append,
}

impl WriteMode {
    /// Open options matching this mode
    pub fn open_options(self) -> OpenOptions {
        let mut options = OpenOptions::new();
        match self {
            WriteMode::Truncate => options.write(true).create(true).truncate(true),
            WriteMode::Append => options.append(true).create(true),
        };
        options
    }
}
