use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Read, write and list files with line-buffered I/O
#[derive(Parser, Debug)]
#[command(name = "plainfs")]
#[command(version)]
#[command(about = "Read, write and list files with line-buffered I/O", long_about = None)]
pub struct Args {
    /// Path to a config file (defaults to ./plainfs.config.yml when present)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable coloured diagnostics
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a text file
    Read {
        /// File to read
        file: PathBuf,

        /// Read buffer size in bytes; lines longer than this minus one are split
        #[arg(short, long, value_name = "BYTES")]
        buffer_size: Option<usize>,

        /// Print each line chunk on its own row, prefixed with its index
        #[arg(short, long)]
        lines: bool,
    },
    /// Replace the content of a file (creating it if needed)
    Write {
        file: PathBuf,
        content: String,
    },
    /// Append to a file (creating it if needed)
    Append {
        file: PathBuf,
        content: String,
    },
    /// Print the entry names of a directory, one per line
    List {
        dir: PathBuf,
    },
}

impl Command {
    /// Buffer size given on the command line, if any
    pub fn buffer_size(&self) -> Option<usize> {
        match self {
            Command::Read { buffer_size, .. } => *buffer_size,
            _ => None,
        }
    }
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_read_with_options() {
        let args =
            Args::try_parse_from(["plainfs", "read", "notes.txt", "-b", "16", "--lines"])
                .unwrap();
        match args.command {
            Command::Read {
                file,
                buffer_size,
                lines,
            } => {
                assert_eq!(file, PathBuf::from("notes.txt"));
                assert_eq!(buffer_size, Some(16));
                assert!(lines);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_write() {
        let args = Args::try_parse_from(["plainfs", "write", "out.txt", "Hello"]).unwrap();
        assert!(matches!(args.command, Command::Write { ref content, .. } if content == "Hello"));
        assert!(args.command.buffer_size().is_none());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args =
            Args::try_parse_from(["plainfs", "list", ".", "--no-color", "-c", "cfg.yml"]).unwrap();
        assert!(args.no_color);
        assert_eq!(args.config, Some(PathBuf::from("cfg.yml")));
    }

    #[test]
    fn test_buffer_size_accessor() {
        let args = Args::try_parse_from(["plainfs", "read", "f", "--buffer-size", "0"]).unwrap();
        assert_eq!(args.command.buffer_size(), Some(0));
    }

    #[test]
    fn test_missing_subcommand_is_error() {
        assert!(Args::try_parse_from(["plainfs"]).is_err());
    }

    #[test]
    fn test_negative_buffer_size_is_error() {
        assert!(Args::try_parse_from(["plainfs", "read", "f", "-b", "-1"]).is_err());
    }
}
