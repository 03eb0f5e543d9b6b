//! The flat error taxonomy shared by every crate in this workspace.
//!
//! The numeric `code()` of each variant is wire-visible: it is what the CLI tools print and
//! what an FFI caller would see as an errno-style discriminant. The variants are intentionally
//! flat (no nested error trees) so that a caller checking `match err.code() { ... }` never has
//! to chase a cause chain to decide what went wrong structurally, even though `source()` is
//! still wired up for anyone who wants the underlying `io::Error`.

/// Every way a SEG-Y operation can fail.
#[derive(Debug)]
pub enum SegyError {
    /// Could not open the underlying file.
    OpenError(std::io::Error),
    /// A seek on the underlying file failed.
    SeekError(std::io::Error),
    /// A read from the underlying file failed.
    ReadError(std::io::Error),
    /// A write to the underlying file failed.
    WriteError(std::io::Error),
    /// A header access used an offset the field catalogue does not recognise.
    InvalidField { offset: usize },
    /// `GeometryEngine::sorting` could not resolve a sorting direction.
    InvalidSorting,
    /// A line lookup named a line number absent from the inferred index vector.
    MissingLineIndex { lineno: i32 },
    /// The inferred offsets-per-cell count is inconsistent with the trace count.
    InvalidOffsets { msg: String },
    /// `(file_size - trace0)` is not a multiple of the trace size.
    TraceSizeMismatch {
        file_size: u64,
        trace0: u64,
        trace_bsize: u64,
    },
    /// A caller-supplied argument failed validation (bad range, bad mode string, lossy
    /// conversion attempted where none is possible, unsupported sample format, ...).
    InvalidArgs { msg: String },
    /// Creating or growing a memory map failed.
    MmapError(std::io::Error),
    /// The handle is in mmap mode but the requested operation cannot be satisfied by it.
    MmapInvalid { msg: String },
    /// A write was attempted on a handle opened in a non-writable mode.
    ReadOnly,
    /// The requested resource (trace, line, file) does not exist.
    NotFound { msg: String },
    /// The handle was already closed; no further operations (including a second close) are
    /// possible.
    Closed,
}

impl SegyError {
    /// The wire-visible numeric code for this error kind.
    pub fn code(&self) -> u8 {
        use SegyError::*;
        match self {
            OpenError(_) => 1,
            SeekError(_) => 2,
            ReadError(_) => 3,
            WriteError(_) => 4,
            InvalidField { .. } => 5,
            InvalidSorting => 6,
            MissingLineIndex { .. } => 7,
            InvalidOffsets { .. } => 8,
            TraceSizeMismatch { .. } => 9,
            InvalidArgs { .. } => 10,
            MmapError(_) => 11,
            MmapInvalid { .. } => 12,
            ReadOnly => 13,
            NotFound { .. } => 14,
            Closed => 15,
        }
    }

    /// Build an [`SegyError::InvalidArgs`] carrying a formatted message; a small convenience
    /// since it is by far the most common caller-facing variant to construct ad hoc.
    pub fn invalid_args<T: std::fmt::Display>(msg: T) -> Self {
        Self::InvalidArgs {
            msg: msg.to_string(),
        }
    }
}

impl From<std::array::TryFromSliceError> for SegyError {
    fn from(e: std::array::TryFromSliceError) -> Self {
        Self::InvalidArgs { msg: e.to_string() }
    }
}

impl From<std::io::Error> for SegyError {
    fn from(e: std::io::Error) -> Self {
        // A bare io::Error with no call-site context defaults to ReadError, the
        // most common origin; call sites that know better construct the specific
        // variant directly instead of relying on this conversion.
        Self::ReadError(e)
    }
}

impl std::fmt::Display for SegyError {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use SegyError::*;
        match self {
            OpenError(e) => write!(fmt, "could not open file: {}", e),
            SeekError(e) => write!(fmt, "seek failed: {}", e),
            ReadError(e) => write!(fmt, "read failed: {}", e),
            WriteError(e) => write!(fmt, "write failed: {}", e),
            InvalidField { offset } => write!(fmt, "offset {} is not a recognised field", offset),
            InvalidSorting => write!(fmt, "could not determine trace sorting direction"),
            MissingLineIndex { lineno } => write!(fmt, "line number {} not present in survey", lineno),
            InvalidOffsets { msg } => write!(fmt, "invalid offsets-per-cell count: {}", msg),
            TraceSizeMismatch {
                file_size,
                trace0,
                trace_bsize,
            } => write!(
                fmt,
                "(file_size {} - trace0 {}) is not a multiple of trace size {}",
                file_size, trace0, trace_bsize
            ),
            InvalidArgs { msg } => write!(fmt, "invalid argument: {}", msg),
            MmapError(e) => write!(fmt, "memory map failed: {}", e),
            MmapInvalid { msg } => write!(fmt, "memory map cannot satisfy request: {}", msg),
            ReadOnly => write!(fmt, "handle is read-only"),
            NotFound { msg } => write!(fmt, "not found: {}", msg),
            Closed => write!(fmt, "handle is closed"),
        }
    }
}

impl From<SegyError> for String {
    fn from(e: SegyError) -> String {
        e.to_string()
    }
}

impl std::error::Error for SegyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        use SegyError::*;
        match self {
            OpenError(e) | SeekError(e) | ReadError(e) | WriteError(e) | MmapError(e) => Some(e),
            _ => None,
        }
    }
}
