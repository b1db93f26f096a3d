// crates/cityinfo-core/src/loader/common_io.rs
use crate::error::{CityInfoError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Seek};
use std::path::Path;

/// A buffered, seekable byte stream over the backing data.
pub trait SeekBufRead: BufRead + Seek + Send {}

impl<T: BufRead + Seek + Send> SeekBufRead for T {}

/// Open the backing data at `path`.
///
/// With the `compact` feature, a path ending in `.gz` is decompressed into
/// memory first so the result stays seekable.
pub fn open_stream(path: &Path) -> Result<Box<dyn SeekBufRead>> {
    let file = File::open(path).map_err(|source| CityInfoError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    #[cfg(feature = "compact")]
    if is_gzip(path) {
        use flate2::read::GzDecoder;
        use std::io::{Cursor, Read};

        let mut data = Vec::new();
        GzDecoder::new(BufReader::new(file)).read_to_end(&mut data)?;
        return Ok(Box::new(Cursor::new(data)));
    }

    Ok(Box::new(BufReader::new(file)))
}

#[cfg(feature = "compact")]
fn is_gzip(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}
