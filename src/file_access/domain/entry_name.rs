/// Capacity of a raw directory entry name buffer, terminator included.
///
/// Sized for the largest `d_name` among supported platforms: 1024 bytes on
/// Apple targets. Linux names stop at 255 bytes and Windows names at 255
/// UTF-16 units, which is at most 765 bytes once encoded.
pub const ENTRY_NAME_CAPACITY: usize = 1024;

/// Fixed-capacity, zero-padded name buffer copied out of a directory entry
///
/// Only the bytes before the first zero byte are meaningful. Names longer
/// than `ENTRY_NAME_CAPACITY - 1` bytes are truncated on construction so
/// that a terminator always remains.
#[derive(Clone, PartialEq, Eq)]
pub struct RawEntryName {
    bytes: [u8; ENTRY_NAME_CAPACITY],
}

impl RawEntryName {
    /// Bounded copy of `name` into a fresh zero-filled buffer
    pub fn from_bytes(name: &[u8]) -> Self {
        let mut bytes = [0u8; ENTRY_NAME_CAPACITY];
        let len = name.len().min(ENTRY_NAME_CAPACITY - 1);
        bytes[..len].copy_from_slice(&name[..len]);
        Self { bytes }
    }

    /// Wraps an already filled buffer, e.g. one taken verbatim from a dirent
    pub fn from_buffer(bytes: [u8; ENTRY_NAME_CAPACITY]) -> Self {
        Self { bytes }
    }

    /// Bytes up to (not including) the first zero byte
    pub fn as_bytes(&self) -> &[u8] {
        let end = self
            .bytes
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(ENTRY_NAME_CAPACITY);
        &self.bytes[..end]
    }

    /// Decodes the name as UTF-8
    ///
    /// Returns `None` when the name is not valid text; callers skip such
    /// entries rather than treating them as errors.
    pub fn to_name(&self) -> Option<String> {
        std::str::from_utf8(self.as_bytes())
            .ok()
            .map(str::to_owned)
    }
}

impl std::fmt::Debug for RawEntryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("RawEntryName")
            .field(&String::from_utf8_lossy(self.as_bytes()))
            .finish()
    }
}
