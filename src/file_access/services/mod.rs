mod line_chunker;

pub use line_chunker::LineChunks;
