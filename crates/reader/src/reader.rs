//! Multi-source frame reading

use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

use thiserror::Error;

use burst_protocol::{Frame, unmarshal_burst, unmarshal_frame};

/// How the bytes of a source are framed
///
/// Framing is selected before any bytes are read; it is never inferred from
/// content. The two modes are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framing {
    /// The whole source is one encoded burst
    Burst,

    /// The whole source is exactly one encoded frame
    Frame,
}

/// Fatal reader errors
#[derive(Debug, Error)]
pub enum ReadError {
    /// An explicitly named input file could not be opened
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: io::Error,
    },
}

/// Read one source fully and decode it under the given framing
///
/// Returns the decoded frames in order. An empty source yields no frames and
/// no error. Read and decode failures are logged with the source name and
/// yield an empty result; they never propagate.
pub fn read_source<R: Read>(name: &str, mut source: R, framing: Framing) -> Vec<Frame> {
    let mut buf = Vec::new();
    if let Err(e) = source.read_to_end(&mut buf) {
        // Bytes read before the error are still in buf; decode them anyway
        tracing::error!(source = name, error = %e, "read failed, decoding buffered bytes");
    }

    if buf.is_empty() {
        return Vec::new();
    }

    match framing {
        Framing::Burst => match unmarshal_burst(&buf) {
            Ok(burst) => burst.into_frames(),
            Err(e) => {
                tracing::error!(source = name, error = %e, "failed to decode burst");
                Vec::new()
            }
        },
        Framing::Frame => match unmarshal_frame(&buf) {
            Ok(frame) => vec![frame],
            Err(e) => {
                tracing::error!(source = name, error = %e, "failed to decode frame");
                Vec::new()
            }
        },
    }
}

/// Read standard input under the given framing
pub fn read_stdin(framing: Framing) -> Vec<Frame> {
    read_source("stdin", io::stdin().lock(), framing)
}

/// Read a list of files, each burst-encapsulated, concatenating in order
///
/// A file that cannot be opened aborts with `ReadError::Open`. A file that
/// opens but fails to decode is skipped after logging; the remaining files
/// are still processed.
pub fn read_files(paths: &[PathBuf]) -> Result<Vec<Frame>, ReadError> {
    let mut frames = Vec::new();
    for path in paths {
        let file = File::open(path).map_err(|source| ReadError::Open {
            path: path.clone(),
            source,
        })?;
        let name = path.display().to_string();
        frames.extend(read_source(&name, file, Framing::Burst));
    }
    Ok(frames)
}
