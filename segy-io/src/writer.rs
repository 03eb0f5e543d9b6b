//! [`SegyWriter`]: the trace-by-trace write path. A file is created with its textual and binary
//! headers fixed up front; every trace written afterwards must match the sample count and format
//! those headers declare, mirroring the reference family's "headers describe the file, traces
//! fill it in" contract.
use std::convert::TryInto;
use std::path::Path;

use fnv::FnvHashMap;

use segy_core::errors::SegyError;
use segy_core::settings::SegySettings;
use segy_core::{BinHeader, SegyMetadata, TapeLabel, Trace, TraceHeader};

use crate::file_handle::FileHandle;
use crate::text_header;
use crate::trace_io::{self, FileMetadata, TRACE_HEADER_BYTES};
use crate::typed_headers::{bin_header_as_bytes, tape_label_as_bytes, trace_header_as_bytes};

/// A SEG-Y file being written one trace at a time.
pub struct SegyWriter {
    file: FileHandle,
    meta: SegyMetadata<SegySettings>,
    file_meta: FileMetadata,
    traces: Vec<Trace>,
    lookup: FnvHashMap<[i32; 2], usize>,
}

impl SegyWriter {
    /// Create `path` and write the tape label (if given), primary textual header, and binary
    /// header. The file must not already exist. `bin_header.no_samples` and
    /// `bin_header.sample_format_code` fix the sample layout every trace added afterwards must
    /// match.
    pub fn create_file<P: AsRef<Path>>(
        path: P,
        settings: SegySettings,
        text_header: String,
        bin_header: BinHeader,
        tape_label: Option<TapeLabel>,
    ) -> Result<Self, SegyError> {
        let mut file = FileHandle::open(path, "w+")?;

        let base = if let Some(ref label) = tape_label {
            file.write_at(0, &tape_label_as_bytes(label)?)?;
            segy_core::TAPE_LABEL_LEN as u64
        } else {
            0
        };

        text_header::write_textheader(&mut file, base, text_header.as_bytes())?;

        let bin_bytes = bin_header_as_bytes(&bin_header)?;
        file.write_at(base + segy_core::TEXT_HEADER_LEN as u64, &bin_bytes)?;

        let trsize = trace_io::trsize_bytes(bin_header.sample_format_code, bin_header.no_samples as u32)?;
        let file_meta = FileMetadata {
            trace0: base + segy_core::TEXT_HEADER_LEN as u64,
            samples: bin_header.no_samples as u32,
            format: bin_header.sample_format_code,
            trsize_bytes: trsize,
            tracecount: 0,
        };

        Ok(SegyWriter {
            file,
            meta: SegyMetadata::new(tape_label, text_header, vec![], bin_header, settings),
            file_meta,
            traces: Vec::new(),
            lookup: FnvHashMap::default(),
        })
    }

    /// Append one trace. `samples` must be exactly as long as either the binary header's or this
    /// trace header's declared sample count, matching the reference family's validation.
    pub fn add_trace(&mut self, trace_header: TraceHeader, samples: &[f32]) -> Result<&Trace, SegyError> {
        let bin_samples = self.meta.get_bin_header().no_samples;
        if samples.len() as u16 != bin_samples && samples.len() as u16 != trace_header.no_samples_in_trace {
            return Err(SegyError::InvalidArgs {
                msg: format!(
                    "trace has {} samples but the binary header declares {} and the trace header declares {}",
                    samples.len(),
                    bin_samples,
                    trace_header.no_samples_in_trace
                ),
            });
        }

        let header_bytes = trace_header_as_bytes(&trace_header, self.meta.get_settings(), self.meta.get_bin_header())?;
        let header_array: [u8; TRACE_HEADER_BYTES] = header_bytes[..]
            .try_into()
            .expect("trace_header_as_bytes always returns exactly TRACE_HEADER_BYTES bytes");
        let sample_bytes = trace_io::from_native(self.file_meta.format, samples)?;

        let trace_no = self.file_meta.tracecount;
        trace_io::write_trace(&mut self.file, &self.file_meta, trace_no, &header_array, &sample_bytes)?;

        let data_start = (self.file_meta.trace0
            + trace_no * (TRACE_HEADER_BYTES as u64 + self.file_meta.trsize_bytes)
            + TRACE_HEADER_BYTES as u64) as usize;
        self.lookup.insert([trace_header.crossline_no, trace_header.inline_no], self.traces.len());
        self.traces.push(Trace::new(trace_header, data_start, sample_bytes.len()));
        self.file_meta.tracecount += 1;

        Ok(self.traces.last().expect("just pushed"))
    }

    /// Number of traces written so far.
    pub fn trace_count(&self) -> u64 {
        self.file_meta.tracecount
    }

    /// Look up a previously written trace by `(crossline_no, inline_no)`.
    pub fn get_trace_by_xline_inline(&self, crossline_no: i32, inline_no: i32) -> Result<&Trace, SegyError> {
        let idx = self.lookup.get(&[crossline_no, inline_no]).ok_or_else(|| SegyError::NotFound {
            msg: format!("no trace at crossline {} inline {}", crossline_no, inline_no),
        })?;
        Ok(&self.traces[*idx])
    }

    /// Flush pending writes to disk.
    pub fn flush(&mut self) -> Result<(), SegyError> {
        self.file.flush(false)
    }

    /// Consume the writer, handing back its constituent parts.
    pub fn deconstruct(self) -> (FileHandle, SegyMetadata<SegySettings>, FileMetadata, Vec<Trace>) {
        (self.file, self.meta, self.file_meta, self.traces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use segy_core::enums::SampleFormatCode;

    fn fresh_bin_header(samples: u16) -> BinHeader {
        let mut bh = BinHeader::default();
        bh.no_samples = samples;
        bh.sample_format_code = SampleFormatCode::Float32;
        bh.binary_flag_direction_is_le = false;
        bh
    }

    #[test]
    fn create_file_then_add_trace_roundtrips_through_reader() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.sgy");

        let bh = fresh_bin_header(4);
        let mut writer = SegyWriter::create_file(
            &path,
            SegySettings::default(),
            " ".repeat(3200),
            bh,
            None,
        )
        .unwrap();

        let mut th = TraceHeader::default();
        th.inline_no = 1;
        th.crossline_no = 7;
        th.no_samples_in_trace = 4;
        writer.add_trace(th, &[1.0, 2.0, 3.0, 4.0]).unwrap();
        writer.flush().unwrap();
        assert_eq!(writer.trace_count(), 1);
        drop(writer);

        let mut reader = crate::reader::SegyReader::open(&path, SegySettings::default()).unwrap();
        assert_eq!(reader.trace_count(), 1);
        let data = reader.get_trace_data_as_f32(0).unwrap();
        assert_eq!(data, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn add_trace_rejects_wrong_sample_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out2.sgy");
        let bh = fresh_bin_header(4);
        let mut writer = SegyWriter::create_file(&path, SegySettings::default(), " ".repeat(3200), bh, None).unwrap();
        let mut th = TraceHeader::default();
        th.no_samples_in_trace = 4;
        let err = writer.add_trace(th, &[1.0, 2.0]).unwrap_err();
        assert!(matches!(err, SegyError::InvalidArgs { .. }));
    }
}
