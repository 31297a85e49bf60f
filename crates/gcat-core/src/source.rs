// crates/gcat-core/src/source.rs
//
// Input sources: regular files (read whole) and stdin (read per line).

use std::borrow::Cow;
use std::ffi::OsStr;
use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use crate::error::{CatError, Result};

/// Name used for stdin in arguments and error messages.
pub const STDIN_NAME: &str = "-";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    pub fn from_arg(arg: &OsStr) -> Self {
        if arg == STDIN_NAME {
            Source::Stdin
        } else {
            Source::File(PathBuf::from(arg))
        }
    }

    /// Display name; non-UTF-8 paths are shown lossily.
    pub fn name(&self) -> Cow<'_, str> {
        match self {
            Source::Stdin => Cow::Borrowed(STDIN_NAME),
            Source::File(p) => p.to_string_lossy(),
        }
    }
}

/// Check that `path` exists and is a regular file.
pub fn validate_path(path: &Path) -> Result<()> {
    let meta = match fs::metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(CatError::PathNotFound(display_name(path)))
        }
        Err(e) => {
            return Err(CatError::ReadFailure {
                name: display_name(path),
                source: e,
            })
        }
    };
    if !meta.is_file() {
        return Err(CatError::NotARegularFile(display_name(path)));
    }
    Ok(())
}

/// Read a whole file.
pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| CatError::ReadFailure {
        name: display_name(path),
        source: e,
    })
}

fn display_name(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Successive LF-terminated chunks of a reader. The final chunk may lack
/// its LF. Ends at EOF.
pub struct LineChunks<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> LineChunks<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::with_capacity(256),
        }
    }

    /// Next chunk, or `None` at end of stream. The slice is valid until the
    /// following call.
    pub fn next_chunk(&mut self) -> Result<Option<&[u8]>> {
        self.buf.clear();
        let n = self
            .reader
            .read_until(b'\n', &mut self.buf)
            .map_err(|e| CatError::ReadFailure {
                name: STDIN_NAME.to_string(),
                source: e,
            })?;
        if n == 0 {
            return Ok(None);
        }
        Ok(Some(&self.buf))
    }
}
