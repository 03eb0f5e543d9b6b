//! `FileHandle`: the stream/mmap-backed state machine every other module in this crate reads
//! and writes through. One handle owns exactly one open file descriptor (and, in mmap mode, one
//! mapping); see the module docs in [`crate`] for the state diagram.
use segy_core::errors::SegyError;

use memmap2::{Mmap, MmapMut, MmapOptions};
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

/// Offsets above this could not be reached by a single `lseek` on a 32-bit `off_t`. On every
/// platform this crate targets `std::fs::File::seek` already takes a 64-bit absolute offset, so
/// no chunking is actually performed; the threshold only gates a diagnostic log message, keeping
/// the seek path centralised in [`FileHandle::seek`] in case chunking is ever reinstated.
const MAX_32BIT_OFFSET: u64 = i32::MAX as u64;

/// The mode a [`FileHandle`] was opened in. Mirrors the `r` / `r+` / `w+` mode strings accepted
/// by [`FileHandle::open`], with an optional trailing `b` (binary mode, meaningless on platforms
/// without CRLF translation, but accepted for compatibility with callers that always pass it).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    /// `r` / `rb`: read-only, file must already exist.
    Read,
    /// `r+` / `r+b` / `rb+`: read-write, file must already exist.
    ReadWrite,
    /// `w+` / `w+b` / `wb+`: read-write, file is created (and truncated if it already exists).
    CreateReadWrite,
}

impl OpenMode {
    /// Parse one of the accepted mode strings.
    pub fn parse(mode: &str) -> Result<Self, SegyError> {
        match mode {
            "r" | "rb" => Ok(OpenMode::Read),
            "r+" | "r+b" | "rb+" => Ok(OpenMode::ReadWrite),
            "w+" | "w+b" | "wb+" => Ok(OpenMode::CreateReadWrite),
            other => Err(SegyError::InvalidArgs {
                msg: format!("'{}' is not a recognised SEG-Y open mode (want r, r+ or w+)", other),
            }),
        }
    }

    /// Whether this mode permits writes.
    pub fn is_writable(self) -> bool {
        !matches!(self, OpenMode::Read)
    }
}

enum Backing {
    Stream,
    MmapReadOnly(Mmap),
    MmapReadWrite(MmapMut),
}

/// A single open SEG-Y file, backed either by ordinary buffered I/O ("stream mode") or by a
/// memory mapping ("mmap mode"). Every read/write method is expressed in terms of absolute file
/// offsets; the `*_at` variants are preferred since they fuse the seek into the call and leave no
/// room for the cursor to drift between a `seek` and the following `read`/`write`.
pub struct FileHandle {
    file: File,
    mode: OpenMode,
    backing: Backing,
    cursor: u64,
    closed: bool,
}

impl FileHandle {
    /// Open `path` in the given mode string (`r`, `r+`, `w+`, each with an optional trailing
    /// `b`). Starts in stream mode; call [`FileHandle::try_mmap`] to switch to mmap mode.
    pub fn open<P: AsRef<Path>>(path: P, mode: &str) -> Result<Self, SegyError> {
        let mode = OpenMode::parse(mode)?;
        let file = match mode {
            OpenMode::Read => OpenOptions::new().read(true).open(path),
            OpenMode::ReadWrite => OpenOptions::new().read(true).write(true).open(path),
            OpenMode::CreateReadWrite => OpenOptions::new()
                .read(true)
                .write(true)
                .create(true)
                .truncate(true)
                .open(path),
        }
        .map_err(SegyError::OpenError)?;

        Ok(FileHandle {
            file,
            mode,
            backing: Backing::Stream,
            cursor: 0,
            closed: false,
        })
    }

    /// Fail with [`SegyError::Closed`] if this handle has already been closed; every method
    /// below that touches the underlying file or mapping calls this first.
    fn check_open(&self) -> Result<(), SegyError> {
        if self.closed {
            Err(SegyError::Closed)
        } else {
            Ok(())
        }
    }

    /// The mode this handle was opened in.
    pub fn mode(&self) -> OpenMode {
        self.mode
    }

    /// Whether this handle currently holds a memory mapping.
    pub fn is_mapped(&self) -> bool {
        !matches!(self.backing, Backing::Stream)
    }

    /// Attempt to switch this handle to mmap mode. On failure the handle remains in (or falls
    /// back to) stream mode and a warning is logged, since a silent fallback is a path a caller
    /// sizing memory use might want to know about.
    pub fn try_mmap(&mut self) -> Result<(), SegyError> {
        self.check_open()?;
        let result = if self.mode.is_writable() {
            // SAFETY-adjacent note: third-party mutation of the backing file while mapped is a
            // platform hazard `memmap2` itself documents; this crate does not attempt to guard
            // against it, matching the teacher family's trust-the-caller posture.
            unsafe { MmapOptions::new().map_mut(&self.file) }.map(Backing::MmapReadWrite)
        } else {
            unsafe { MmapOptions::new().map(&self.file) }.map(Backing::MmapReadOnly)
        };

        match result {
            Ok(backing) => {
                self.backing = backing;
                Ok(())
            }
            Err(e) => {
                log::warn!("mmap failed for this handle, staying in stream mode: {}", e);
                Err(SegyError::MmapError(e))
            }
        }
    }

    /// Drop the memory mapping and return to stream mode. A no-op if not currently mapped.
    pub fn drop_mmap(&mut self) {
        self.backing = Backing::Stream;
    }

    /// Seek to an absolute offset. Centralised here so that a chunked-seek fallback for 32-bit
    /// `off_t` platforms could be reinstated without touching any caller.
    pub fn seek(&mut self, absolute_offset: u64) -> Result<(), SegyError> {
        self.check_open()?;
        if absolute_offset > MAX_32BIT_OFFSET {
            log::debug!(
                "seek to {} exceeds a 32-bit off_t; no chunking performed since this platform's \
                 std::fs::File::seek already takes a 64-bit absolute offset",
                absolute_offset
            );
        }
        self.file
            .seek(SeekFrom::Start(absolute_offset))
            .map_err(SegyError::SeekError)?;
        self.cursor = absolute_offset;
        Ok(())
    }

    /// The current cursor position (stream mode only; meaningless but harmless in mmap mode).
    pub fn ftell(&self) -> u64 {
        self.cursor
    }

    /// The size of the underlying file in bytes.
    pub fn size(&self) -> Result<u64, SegyError> {
        self.check_open()?;
        self.file.metadata().map(|m| m.len()).map_err(SegyError::ReadError)
    }

    /// Read into `buf` from the current cursor, advancing it. Stream mode only in practice;
    /// prefer [`FileHandle::read_at`] when the offset is known, which also works in mmap mode.
    pub fn read(&mut self, buf: &mut [u8]) -> Result<usize, SegyError> {
        self.check_open()?;
        let n = self.file.read(buf).map_err(SegyError::ReadError)?;
        self.cursor += n as u64;
        Ok(n)
    }

    /// Write `buf` at the current cursor, advancing it.
    pub fn write(&mut self, buf: &[u8]) -> Result<usize, SegyError> {
        self.check_open()?;
        if !self.mode.is_writable() {
            return Err(SegyError::ReadOnly);
        }
        let n = self.file.write(buf).map_err(SegyError::WriteError)?;
        self.cursor += n as u64;
        Ok(n)
    }

    /// Read exactly `buf.len()` bytes starting at `offset`. Works in both stream and mmap mode.
    pub fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> Result<(), SegyError> {
        self.check_open()?;
        match &self.backing {
            Backing::Stream => {
                self.seek(offset)?;
                self.file.read_exact(buf).map_err(SegyError::ReadError)?;
                self.cursor += buf.len() as u64;
                Ok(())
            }
            Backing::MmapReadOnly(map) => copy_from_map(map, offset, buf),
            Backing::MmapReadWrite(map) => copy_from_map(map, offset, buf),
        }
    }

    /// Write `buf` at `offset`, extending the file first if required. Works in both stream and
    /// mmap mode; mmap mode requires the handle to have been opened writable.
    pub fn write_at(&mut self, offset: u64, buf: &[u8]) -> Result<(), SegyError> {
        self.check_open()?;
        if !self.mode.is_writable() {
            return Err(SegyError::ReadOnly);
        }
        match &mut self.backing {
            Backing::Stream => {
                self.seek(offset)?;
                self.file.write_all(buf).map_err(SegyError::WriteError)?;
                self.cursor += buf.len() as u64;
                Ok(())
            }
            Backing::MmapReadOnly(_) => Err(SegyError::MmapInvalid {
                msg: "handle is mapped read-only".to_string(),
            }),
            Backing::MmapReadWrite(map) => {
                let end = offset as usize + buf.len();
                if end > map.len() {
                    return Err(SegyError::MmapInvalid {
                        msg: format!("write of {} bytes at {} would exceed the mapped length {}", buf.len(), offset, map.len()),
                    });
                }
                map[offset as usize..end].copy_from_slice(buf);
                Ok(())
            }
        }
    }

    /// Flush pending writes. `async_` selects `msync`-style asynchronous page-out (schedules but
    /// does not wait) versus synchronous flush (blocks until stable storage has the data).
    pub fn flush(&mut self, async_: bool) -> Result<(), SegyError> {
        self.check_open()?;
        match &self.backing {
            Backing::Stream => self.file.flush().map_err(SegyError::WriteError),
            Backing::MmapReadOnly(_) => Ok(()),
            Backing::MmapReadWrite(map) => {
                let result = if async_ { map.flush_async() } else { map.flush() };
                result.map_err(SegyError::MmapError)
            }
        }
    }

    /// Extend the backing file to at least `new_len` bytes. Stream mode only grows on the next
    /// write; mmap mode must remap, since the mapping's length is fixed at creation.
    pub fn grow_to(&mut self, new_len: u64) -> Result<(), SegyError> {
        self.check_open()?;
        let current = self.size()?;
        if new_len <= current {
            return Ok(());
        }
        self.file.set_len(new_len).map_err(SegyError::WriteError)?;
        if self.is_mapped() {
            self.try_mmap()?;
        }
        Ok(())
    }

    /// Close this handle: drop the memory mapping (if any), flush pending writes and release the
    /// underlying file descriptor. After this call every other method, including a second
    /// `close()`, fails with [`SegyError::Closed`].
    pub fn close(&mut self) -> Result<(), SegyError> {
        self.check_open()?;
        if self.mode.is_writable() {
            self.flush(false)?;
        }
        self.backing = Backing::Stream;
        self.closed = true;
        Ok(())
    }
}

fn copy_from_map(map: &[u8], offset: u64, buf: &mut [u8]) -> Result<(), SegyError> {
    let start = offset as usize;
    let end = start + buf.len();
    if end > map.len() {
        return Err(SegyError::MmapInvalid {
            msg: format!("read of {} bytes at {} would exceed the mapped length {}", buf.len(), offset, map.len()),
        });
    }
    buf.copy_from_slice(&map[start..end]);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn tempfile_with(content: &[u8]) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().expect("tempfile");
        f.write_all(content).expect("write");
        f
    }

    #[test]
    fn open_mode_parses_all_accepted_strings() {
        assert_eq!(OpenMode::parse("r").unwrap(), OpenMode::Read);
        assert_eq!(OpenMode::parse("rb").unwrap(), OpenMode::Read);
        assert_eq!(OpenMode::parse("r+").unwrap(), OpenMode::ReadWrite);
        assert_eq!(OpenMode::parse("rb+").unwrap(), OpenMode::ReadWrite);
        assert_eq!(OpenMode::parse("w+b").unwrap(), OpenMode::CreateReadWrite);
        assert!(OpenMode::parse("q").is_err());
    }

    #[test]
    fn stream_read_at_and_write_at_roundtrip() {
        let f = tempfile_with(b"0123456789");
        let mut fh = FileHandle::open(f.path(), "r+").expect("open");
        let mut buf = [0u8; 4];
        fh.read_at(3, &mut buf).expect("read_at");
        assert_eq!(&buf, b"3456");

        fh.write_at(0, b"ZZZZ").expect("write_at");
        let mut check = [0u8; 4];
        fh.read_at(0, &mut check).expect("read_at 2");
        assert_eq!(&check, b"ZZZZ");
    }

    #[test]
    fn read_only_handle_rejects_writes() {
        let f = tempfile_with(b"0123456789");
        let mut fh = FileHandle::open(f.path(), "r").expect("open");
        let err = fh.write_at(0, b"X").unwrap_err();
        assert!(matches!(err, SegyError::ReadOnly));
    }

    #[test]
    fn mmap_mode_roundtrips_like_stream_mode() {
        let f = tempfile_with(&[0u8; 64]);
        let mut fh = FileHandle::open(f.path(), "r+").expect("open");
        fh.try_mmap().expect("try_mmap");
        fh.write_at(8, b"hello").expect("write_at mapped");
        let mut buf = [0u8; 5];
        fh.read_at(8, &mut buf).expect("read_at mapped");
        assert_eq!(&buf, b"hello");
    }

    #[test]
    fn size_reports_file_length() {
        let f = tempfile_with(&[0u8; 128]);
        let fh = FileHandle::open(f.path(), "r").expect("open");
        assert_eq!(fh.size().unwrap(), 128);
    }

    #[test]
    fn close_then_any_operation_fails() {
        let f = tempfile_with(b"0123456789");
        let mut fh = FileHandle::open(f.path(), "r").expect("open");
        fh.close().expect("close");
        let mut buf = [0u8; 4];
        assert!(matches!(fh.read_at(0, &mut buf), Err(SegyError::Closed)));
        assert!(matches!(fh.size(), Err(SegyError::Closed)));
    }

    #[test]
    fn closing_twice_is_an_error() {
        let f = tempfile_with(b"0123456789");
        let mut fh = FileHandle::open(f.path(), "r").expect("open");
        fh.close().expect("close");
        assert!(matches!(fh.close(), Err(SegyError::Closed)));
    }
}
