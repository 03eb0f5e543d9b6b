//! File I/O, trace access and survey-geometry inference for SEG-Y seismic data.
//!
//! This crate is the single read/write path over the mode-independent types in `segy-core`: it
//! owns the open file descriptor or memory mapping ([`file_handle::FileHandle`]), the generic
//! offset-based header accessors ([`header_accessor`]), the per-trace read/write path
//! ([`trace_io`]), the 3-D/4-D survey geometry inference ([`geometry`]), line-at-a-time access
//! ([`line_io`]) and the textual header codec ([`text_header`]). [`reader::SegyReader`] and
//! [`writer::SegyWriter`] compose those primitives into the ergonomic, trace-by-trace surface
//! most callers use day to day.
extern crate segy_core;

pub mod file_handle;
pub mod geometry;
pub mod header_accessor;
pub mod line_io;
pub mod reader;
pub mod text_header;
pub mod trace_io;
pub mod typed_headers;
pub mod writer;

pub use file_handle::{FileHandle, OpenMode};
pub use geometry::Geometry;
pub use reader::SegyReader;
pub use trace_io::FileMetadata;
pub use writer::SegyWriter;

#[cfg(test)]
pub(crate) mod tests_support {
    use crate::file_handle::FileHandle;

    /// A `FileHandle` over a fresh temp file of exactly `len` zero bytes, for tests that only
    /// care about `FileHandle::size()` tiling arithmetic and not real trace content.
    pub fn file_of_size(len: u64) -> FileHandle {
        let f = tempfile::NamedTempFile::new().expect("tempfile");
        f.as_file().set_len(len).expect("set_len");
        FileHandle::open(f.path(), "r").expect("open")
    }
}
