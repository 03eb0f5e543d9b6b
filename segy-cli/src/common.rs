//! Stream-mode header access shared by every binary: resolving the tape-label offset and reading
//! the binary header, without paying for [`segy_io::SegyReader::open`]'s full trace-header parse.
use segy_core::errors::SegyError;
use segy_io::file_handle::FileHandle;
use segy_io::reader::detect_tape_label;
use segy_io::trace_io;

/// The two things every dumper needs before it can look at anything past the primary textual
/// header: where it starts, and the raw binary-header bytes.
pub struct StreamHeader {
    pub base: u64,
    pub bin_header_bytes: [u8; segy_core::BIN_HEADER_LEN],
}

impl StreamHeader {
    pub fn read(fh: &mut FileHandle) -> Result<Self, SegyError> {
        let base = if detect_tape_label(fh)? { segy_core::TAPE_LABEL_LEN as u64 } else { 0 };
        let mut bin_header_bytes = [0u8; segy_core::BIN_HEADER_LEN];
        fh.read_at(base + segy_core::TEXT_HEADER_LEN as u64, &mut bin_header_bytes)?;
        Ok(StreamHeader { base, bin_header_bytes })
    }

    pub fn file_metadata(&self, fh: &FileHandle) -> Result<trace_io::FileMetadata, SegyError> {
        trace_io::file_metadata(fh, &self.bin_header_bytes, self.base)
    }
}

/// Run `op` for one `--strict`-sensitive file in a multi-file dumper: under `--strict` any error
/// aborts the whole run; otherwise it is logged to stderr and the file is skipped.
pub fn run_per_file(path: &std::path::Path, strict: bool, op: impl FnOnce() -> Result<(), SegyError>) -> Result<(), SegyError> {
    match op() {
        Ok(()) => Ok(()),
        Err(e) if strict => Err(e),
        Err(e) => {
            eprintln!("{}: {}", path.display(), e);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use segy_core::enums::SampleFormatCode;
    use segy_core::header_structs::{BinHeader, TraceHeader};
    use segy_core::settings::SegySettings;
    use segy_io::writer::SegyWriter;

    fn fixture(dir: &std::path::Path, name: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        let mut bh = BinHeader::default();
        bh.no_samples = 4;
        bh.sample_format_code = SampleFormatCode::Float32;
        bh.binary_flag_direction_is_le = false;

        let mut writer = SegyWriter::create_file(&path, SegySettings::default(), " ".repeat(3200), bh, None).unwrap();
        let mut th = TraceHeader::default();
        th.no_samples_in_trace = 4;
        writer.add_trace(th, &[1.0, 2.0, 3.0, 4.0]).unwrap();
        writer.flush().unwrap();
        path
    }

    #[test]
    fn stream_header_reads_same_bin_header_as_reader_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = fixture(dir.path(), "plain.sgy");

        let mut fh = FileHandle::open(&path, "r").unwrap();
        let header = StreamHeader::read(&mut fh).unwrap();
        assert_eq!(header.base, 0);

        let meta = header.file_metadata(&fh).unwrap();
        assert_eq!(meta.samples, 4);
        assert_eq!(meta.tracecount, 1);
    }

    #[test]
    fn run_per_file_skips_errors_unless_strict() {
        let path = std::path::PathBuf::from("irrelevant.sgy");
        let err = || Err(SegyError::invalid_args("boom"));

        let lenient = run_per_file(&path, false, err);
        assert!(lenient.is_ok());

        let strict = run_per_file(&path, true, err);
        assert!(strict.is_err());
    }

    #[test]
    fn run_per_file_passes_through_success() {
        let path = std::path::PathBuf::from("irrelevant.sgy");
        assert!(run_per_file(&path, true, || Ok(())).is_ok());
    }
}
