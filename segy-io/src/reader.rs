//! [`SegyReader`]: the ergonomic, trace-by-trace read path built on [`FileHandle`],
//! [`crate::trace_io`], [`crate::typed_headers`] and [`crate::geometry`]. Every trace header is
//! parsed once, up front, and kept in memory as a [`segy_core::Trace`]; only sample data is read
//! lazily, on demand, from the handle.
use std::path::Path;

use fnv::FnvHashMap;

use segy_core::catalogue::trace_field;
use segy_core::errors::SegyError;
use segy_core::settings::SegySettings;
use segy_core::{BinHeader, ReadableTapeLabel, SegyMetadata, TapeLabel, Trace};

use crate::file_handle::FileHandle;
use crate::geometry::{self, Geometry};
use crate::text_header;
use crate::trace_io::{self, FileMetadata, TRACE_HEADER_BYTES};
use crate::typed_headers::{bin_header_from_bytes, tape_label_from_bytes, trace_header_from_bytes};

/// Sniff whether `fh` begins with a 128-byte tape label: the primary textual header (always
/// `'C'` in its first byte, whatever the encoding) is found at byte 128 rather than byte 0.
/// Mirrors the reference family's `has_label` heuristic exactly, since there is no flag anywhere
/// in the format that states this outright. Public so that stream-mode-only callers (the `segy-cli`
/// binaries) can resolve the primary textual header's offset without paying for a full
/// [`SegyReader::open`].
pub fn detect_tape_label(fh: &mut FileHandle) -> Result<bool, SegyError> {
    let mut probe = [0u8; 129];
    let file_size = fh.size()?;
    if file_size <= 128 {
        return Ok(false);
    }
    fh.read_at(0, &mut probe)?;
    let is_c = |b: u8| b == b'C' || segy_core::codec::ebcdic_to_ascii(&[b])[0] == b'C';
    Ok(!is_c(probe[0]) && is_c(probe[128]))
}

/// A fully opened SEG-Y file: parsed headers, the trace index, and (if it could be inferred) the
/// survey geometry.
pub struct SegyReader {
    file: FileHandle,
    meta: SegyMetadata<SegySettings>,
    file_meta: FileMetadata,
    base: u64,
    traces: Vec<Trace>,
    /// Keyed `[crossline_no, inline_no]`, matching the reference family's lookup convention.
    lookup: FnvHashMap<[i32; 2], usize>,
    geometry: Option<Geometry>,
}

impl SegyReader {
    /// Open `path` and eagerly parse every header: tape label (if present), textual headers,
    /// binary header, and every trace header. Sample data is left on disk and read on demand.
    pub fn open<P: AsRef<Path>>(path: P, settings: SegySettings) -> Result<Self, SegyError> {
        let mut file = FileHandle::open(path, "r")?;
        if let Err(e) = file.try_mmap() {
            log::warn!("opening without a memory map, falling back to stream I/O: {}", e);
        }

        let has_label = detect_tape_label(&mut file)?;
        let base = if has_label { 128 } else { 0 };

        let tape_label = if has_label {
            let mut buf = [0u8; segy_core::TAPE_LABEL_LEN];
            file.read_at(0, &mut buf)?;
            Some(tape_label_from_bytes(&buf)?)
        } else {
            None
        };

        let text_header = String::from_utf8_lossy(&text_header::read_primary(&mut file, base)?).to_string();

        let mut bin_header_bytes = [0u8; segy_core::BIN_HEADER_LEN];
        file.read_at(base + segy_core::TEXT_HEADER_LEN as u64, &mut bin_header_bytes)?;
        let bin_header = bin_header_from_bytes(&bin_header_bytes, &settings)?;

        let extended_headers = (0..bin_header.extended_header_count)
            .map(|i| {
                text_header::read_extended(&mut file, base, i).map(|b| String::from_utf8_lossy(&b).to_string())
            })
            .collect::<Result<Vec<_>, _>>()?;

        let file_meta = trace_io::file_metadata(&file, &bin_header_bytes, base)?;

        let mut traces = Vec::with_capacity(file_meta.tracecount as usize);
        let mut lookup = FnvHashMap::with_capacity_and_hasher(file_meta.tracecount as usize, Default::default());
        for trace_no in 0..file_meta.tracecount {
            let header_bytes = trace_io::read_trace_header(&mut file, &file_meta, trace_no)?;
            let th = trace_header_from_bytes(&header_bytes, &bin_header, &settings, trace_no as usize)?;
            if !settings.trace_in_bounds(th.inline_no, th.crossline_no) {
                continue;
            }
            let data_start = (file_meta.trace0
                + trace_no * (TRACE_HEADER_BYTES as u64 + file_meta.trsize_bytes)
                + TRACE_HEADER_BYTES as u64) as usize;
            lookup.insert([th.crossline_no, th.inline_no], traces.len());
            traces.push(Trace::new(th, data_start, file_meta.trsize_bytes as usize));
        }

        let geometry = if traces.len() > 1 {
            match geometry::infer_geometry(
                &mut file,
                &file_meta,
                trace_field::INLINE_NO,
                trace_field::CROSSLINE_NO,
                trace_field::OFFSET,
            ) {
                Ok(g) => Some(g),
                Err(e) => {
                    log::debug!("survey geometry could not be inferred: {}", e);
                    None
                }
            }
        } else {
            None
        };

        Ok(SegyReader {
            file,
            meta: SegyMetadata::new(tape_label, text_header, extended_headers, bin_header, settings),
            file_meta,
            base,
            traces,
            lookup,
            geometry,
        })
    }

    /// The settings this reader was opened with.
    pub fn get_settings(&self) -> &SegySettings {
        self.meta.get_settings()
    }

    /// The tape label, if the file had one.
    pub fn get_tape_label(&self) -> Option<&TapeLabel> {
        self.meta.get_tape_label().as_ref()
    }

    /// The tape label in readable (ASCII `String`-bearing) form.
    pub fn get_readable_tape_label(&self) -> Option<ReadableTapeLabel> {
        self.meta.get_readable_tape_label()
    }

    /// The primary textual header, translated to ASCII.
    pub fn get_text_header(&self) -> &str {
        self.meta.get_text_header()
    }

    /// The primary textual header split into 80-character lines.
    pub fn get_text_header_lines(&self) -> Vec<String> {
        self.meta.get_text_header_lines()
    }

    /// Iterate over the extended textual headers, in file order.
    pub fn extended_headers_iter(&self) -> std::slice::Iter<String> {
        self.meta.extended_headers_iter()
    }

    /// The extended textual headers, in file order.
    pub fn get_extended_headers(&self) -> &[String] {
        self.meta.get_extended_headers()
    }

    /// The parsed binary header.
    pub fn get_bin_header(&self) -> &BinHeader {
        self.meta.get_bin_header()
    }

    /// The inferred survey geometry, or `None` if it could not be determined (fewer than two
    /// traces, or the trace headers do not tile into a consistent grid).
    pub fn get_geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }

    /// Number of traces that passed the configured inline/crossline bounds filter.
    pub fn trace_count(&self) -> u64 {
        self.traces.len() as u64
    }

    /// The trace at in-memory index `idx` (post-filtering; not necessarily its on-disk trace
    /// number if bounds filtering dropped earlier traces).
    pub fn get_trace(&self, idx: usize) -> Result<&Trace, SegyError> {
        self.traces.get(idx).ok_or_else(|| SegyError::NotFound {
            msg: format!("no trace at index {}", idx),
        })
    }

    /// Look up the trace with the given `(crossline_no, inline_no)` pair.
    pub fn get_trace_by_xline_inline(&self, crossline_no: i32, inline_no: i32) -> Result<&Trace, SegyError> {
        let idx = self.lookup.get(&[crossline_no, inline_no]).ok_or_else(|| SegyError::NotFound {
            msg: format!("no trace at crossline {} inline {}", crossline_no, inline_no),
        })?;
        Ok(&self.traces[*idx])
    }

    /// Iterate over every trace (header only; call [`SegyReader::get_trace_data_as_f32`] for
    /// samples).
    pub fn traces_iter(&self) -> std::slice::Iter<Trace> {
        self.traces.iter()
    }

    /// Read trace `idx`'s sample data, converting it to native `f32` using the binary header's
    /// declared sample format.
    pub fn get_trace_data_as_f32(&mut self, idx: usize) -> Result<Vec<f32>, SegyError> {
        let trace_no = self.on_disk_trace_no(idx)?;
        let buf = trace_io::read_trace(&mut self.file, &self.file_meta, trace_no)?;
        trace_io::to_native(self.file_meta.format, self.file_meta.samples as usize, &buf)
    }

    /// Read trace `idx`'s sample data as raw, on-disk (un-endian-corrected) bytes.
    pub fn get_trace_data_as_bytes(&mut self, idx: usize) -> Result<Vec<u8>, SegyError> {
        let trace_no = self.on_disk_trace_no(idx)?;
        trace_io::read_trace(&mut self.file, &self.file_meta, trace_no)
    }

    /// Same as [`SegyReader::get_trace_data_as_f32`], but addressed by `(crossline_no,
    /// inline_no)` rather than in-memory index.
    pub fn get_trace_data_as_f32_by_xline_inline(&mut self, crossline_no: i32, inline_no: i32) -> Result<Vec<f32>, SegyError> {
        let idx = *self.lookup.get(&[crossline_no, inline_no]).ok_or_else(|| SegyError::NotFound {
            msg: format!("no trace at crossline {} inline {}", crossline_no, inline_no),
        })?;
        self.get_trace_data_as_f32(idx)
    }

    /// In-memory indices of every trace whose crossline number falls in `[min, max]`.
    pub fn get_trace_idx_for_crossline_min_max(&self, min: i32, max: i32) -> Vec<usize> {
        self.filter_indices(|t| (min..=max).contains(&t.get_header().crossline_no))
    }

    /// In-memory indices of every trace whose inline number falls in `[min, max]`.
    pub fn get_trace_idx_for_inline_min_max(&self, min: i32, max: i32) -> Vec<usize> {
        self.filter_indices(|t| (min..=max).contains(&t.get_header().inline_no))
    }

    /// In-memory indices of every trace whose x-ensemble (CDP-X) falls in `[min, max]`.
    pub fn get_trace_idx_for_x_ensemble_min_max(&self, min: i32, max: i32) -> Vec<usize> {
        self.filter_indices(|t| (min..=max).contains(&t.get_header().x_ensemble))
    }

    /// In-memory indices of every trace whose y-ensemble (CDP-Y) falls in `[min, max]`.
    pub fn get_trace_idx_for_y_ensemble_min_max(&self, min: i32, max: i32) -> Vec<usize> {
        self.filter_indices(|t| (min..=max).contains(&t.get_header().y_ensemble))
    }

    fn filter_indices(&self, pred: impl Fn(&Trace) -> bool) -> Vec<usize> {
        self.traces.iter().enumerate().filter(|(_, t)| pred(t)).map(|(i, _)| i).collect()
    }

    fn on_disk_trace_no(&self, idx: usize) -> Result<u64, SegyError> {
        if idx >= self.traces.len() {
            return Err(SegyError::NotFound {
                msg: format!("no trace at index {}", idx),
            });
        }
        let trace_start = self.traces[idx].get_start() as u64 - TRACE_HEADER_BYTES as u64;
        Ok((trace_start - self.file_meta.trace0) / (TRACE_HEADER_BYTES as u64 + self.file_meta.trsize_bytes))
    }

    /// The byte offset at which the primary textual header begins: 0, or 128 if this file had a
    /// tape label.
    pub fn base_offset(&self) -> u64 {
        self.base
    }

    /// The derived per-file scalars ([`FileMetadata`]) this reader computed on open.
    pub fn file_metadata(&self) -> &FileMetadata {
        &self.file_meta
    }

    /// Consume the reader, handing back its constituent parts.
    pub fn deconstruct(self) -> (FileHandle, SegyMetadata<SegySettings>, FileMetadata, Vec<Trace>) {
        (self.file, self.meta, self.file_meta, self.traces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typed_headers::{bin_header_as_bytes, trace_header_as_bytes};
    use segy_core::enums::SampleFormatCode;
    use segy_core::{BinHeader, TraceHeader};

    fn sample_file(tracecount: usize, samples: u16) -> tempfile::NamedTempFile {
        let f = tempfile::NamedTempFile::new().expect("tempfile");
        let mut bh = BinHeader::default();
        bh.no_samples = samples;
        bh.sample_format_code = SampleFormatCode::Float32;
        bh.binary_flag_direction_is_le = false;
        let bh_bytes = bin_header_as_bytes(&bh).unwrap();

        let mut out = vec![b' '; segy_core::TEXT_HEADER_LEN];
        out = segy_core::codec::ascii_to_ebcdic(&out);
        out.extend_from_slice(&bh_bytes);

        let settings = SegySettings::default();
        for i in 0..tracecount {
            let mut th = TraceHeader::default();
            th.inline_no = 1;
            th.crossline_no = i as i32;
            th.no_samples_in_trace = samples;
            out.extend_from_slice(&trace_header_as_bytes(&th, &settings, &bh).unwrap());
            out.extend(trace_io::from_native(SampleFormatCode::Float32, &vec![i as f32; samples as usize]).unwrap());
        }

        use std::io::Write;
        let mut f = f;
        f.write_all(&out).unwrap();
        f
    }

    #[test]
    fn open_reads_back_trace_count_and_samples() {
        let f = sample_file(4, 10);
        let reader = SegyReader::open(f.path(), SegySettings::default()).unwrap();
        assert_eq!(reader.trace_count(), 4);
        assert_eq!(reader.base_offset(), 0);
    }

    #[test]
    fn get_trace_data_as_f32_matches_written_samples() {
        let f = sample_file(3, 5);
        let mut reader = SegyReader::open(f.path(), SegySettings::default()).unwrap();
        let data = reader.get_trace_data_as_f32(2).unwrap();
        assert_eq!(data, vec![2.0f32; 5]);
    }

    #[test]
    fn lookup_by_xline_inline_finds_the_right_trace() {
        let f = sample_file(3, 5);
        let mut reader = SegyReader::open(f.path(), SegySettings::default()).unwrap();
        let via_lookup = reader.get_trace_by_xline_inline(1, 1).unwrap().clone();
        assert_eq!(via_lookup.get_header().crossline_no, 1);
        let data = reader.get_trace_data_as_f32_by_xline_inline(1, 1).unwrap();
        assert_eq!(data, vec![1.0f32; 5]);
    }

    #[test]
    fn missing_trace_is_not_found() {
        let f = sample_file(2, 4);
        let reader = SegyReader::open(f.path(), SegySettings::default()).unwrap();
        let err = reader.get_trace_by_xline_inline(99, 99).unwrap_err();
        assert!(matches!(err, SegyError::NotFound { .. }));
    }
}
