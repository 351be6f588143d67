/// Use cases module containing the text file and directory services
mod directory_lister;
mod text_file;

pub use directory_lister::DirectoryLister;
pub use text_file::{FileLines, TextFileService};
