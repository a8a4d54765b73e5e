use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

const CHUNK_SIZE: usize = 256;

/// Classify a file as binary or text by probing its content for NUL bytes.
///
/// Reads 256-byte chunks sequentially and returns `Ok(true)` as soon as a
/// chunk contains a NUL byte; reaching end-of-file without one returns
/// `Ok(false)`. An empty file is text. A file that cannot be opened or read
/// returns the `io::Error`; callers must not treat an unreadable file as
/// text.
pub fn is_binary(path: &Path) -> io::Result<bool> {
    let mut file = File::open(path)?;
    let mut chunk = [0u8; CHUNK_SIZE];
    loop {
        let n = file.read(&mut chunk)?;
        if n == 0 {
            return Ok(false);
        }
        if chunk[..n].contains(&0) {
            return Ok(true);
        }
    }
}
