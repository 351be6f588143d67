use crate::file_access::domain::BufferSize;
use std::io::{BufRead, Read};
use std::iter::FusedIterator;

/// Iterator over the line chunks of a buffered reader
///
/// Each item holds at most `buffer_size - 1` bytes and ends after the
/// first newline it contains, which is kept. Longer lines therefore arrive
/// split across several items. Iteration ends for good on end of input,
/// on a read error, or on the first chunk that is not valid UTF-8; the
/// three cases are not distinguished.
pub struct LineChunks<R> {
    reader: R,
    limit: usize,
    finished: bool,
}

impl<R: BufRead> LineChunks<R> {
    pub fn new(reader: R, buffer_size: BufferSize) -> Self {
        Self {
            reader,
            limit: buffer_size.chunk_limit(),
            finished: false,
        }
    }

    /// Reads the next raw chunk. `None` means no further data can be read.
    fn next_chunk(&mut self) -> Option<Vec<u8>> {
        // A zero-length window can never advance through the input
        if self.limit == 0 {
            return None;
        }

        let mut chunk = Vec::with_capacity(self.limit.min(256));
        match (&mut self.reader)
            .take(self.limit as u64)
            .read_until(b'\n', &mut chunk)
        {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(chunk),
        }
    }
}

impl<R: BufRead> Iterator for LineChunks<R> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let line = self
            .next_chunk()
            .and_then(|chunk| String::from_utf8(chunk).ok());

        if line.is_none() {
            self.finished = true;
        }
        line
    }
}

impl<R: BufRead> FusedIterator for LineChunks<R> {}
