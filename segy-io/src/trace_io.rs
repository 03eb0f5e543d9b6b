//! Derived trace-geometry scalars and the trace read/write path: locating a trace's bytes on
//! disk, loading/storing its raw header, and converting sample buffers between on-disk and host
//! representation.
use crate::file_handle::FileHandle;
use crate::header_accessor::get_binary_field;
use segy_core::catalogue::binary_field;
use segy_core::codec::{converter_chooser, ibm_to_ieee, ieee_to_ibm, writer_chooser};
use segy_core::enums::SampleFormatCode;
use segy_core::errors::SegyError;

/// Byte length of one trace header, fixed by the standard.
pub const TRACE_HEADER_BYTES: usize = 240;

/// File-wide scalars derived once from the binary header and file size. Invalidated by any
/// operation that changes the trace count (e.g. cropping); callers should re-derive after such
/// an operation rather than reuse a stale value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileMetadata {
    /// Absolute byte offset of the first trace (header start).
    pub trace0: u64,
    /// Samples per trace, from the binary header.
    pub samples: u32,
    /// The declared sample format.
    pub format: SampleFormatCode,
    /// `samples * bytes_per_sample(format)`.
    pub trsize_bytes: u64,
    /// Number of traces inferred from file size.
    pub tracecount: u64,
}

/// Bytes occupied on disk by one sample of `format`, or `None` for formats this library cannot
/// decode (`Int24`/`UInt24`/`FixPoint32`).
pub fn bytes_per_sample(format: SampleFormatCode) -> Option<u32> {
    use SampleFormatCode::*;
    match format {
        Int24 | UInt24 | FixPoint32 => None,
        other => Some(other.datum_byte_length() as u32),
    }
}

/// `samples * bytes_per_sample(format)`.
pub fn trsize_bytes(format: SampleFormatCode, samples: u32) -> Result<u64, SegyError> {
    let bps = bytes_per_sample(format).ok_or_else(|| SegyError::InvalidArgs {
        msg: format!("{} has no fixed decodable byte width", format),
    })?;
    Ok(samples as u64 * bps as u64)
}

/// `base + 3600 + 3200 * extended_header_count`. `base` is 0 for a file with no tape label, or
/// 128 when [`crate::reader`] has detected one preceding the primary textual header.
pub fn trace0(bin_header: &[u8; 400], base: u64) -> Result<u64, SegyError> {
    let extended_headers = get_binary_field(bin_header, binary_field::EXTENDED_HEADER_COUNT)?;
    Ok(base + 3600 + 3200 * extended_headers.max(0) as u64)
}

/// Derive [`FileMetadata`] from a 400-byte binary header and the handle's current size. `base`
/// shifts every offset to account for a preceding tape label, as in [`trace0`].
/// `TraceSizeMismatch` if the file size does not tile evenly into whole traces.
pub fn file_metadata(fh: &FileHandle, bin_header: &[u8; 400], base: u64) -> Result<FileMetadata, SegyError> {
    let trace0 = self::trace0(bin_header, base)?;
    let samples = get_binary_field(bin_header, binary_field::NO_SAMPLES)?.max(0) as u32;
    let format_code = get_binary_field(bin_header, binary_field::SAMPLE_FORMAT_CODE)?;
    let format = SampleFormatCode::new(format_code as u16)?;
    let trsize = trsize_bytes(format, samples)?;

    let file_size = fh.size()?;
    let per_trace = TRACE_HEADER_BYTES as u64 + trsize;
    if per_trace == 0 || file_size < trace0 {
        return Err(SegyError::TraceSizeMismatch {
            file_size,
            trace0,
            trace_bsize: per_trace,
        });
    }
    let remaining = file_size - trace0;
    if remaining % per_trace != 0 {
        return Err(SegyError::TraceSizeMismatch {
            file_size,
            trace0,
            trace_bsize: per_trace,
        });
    }

    Ok(FileMetadata {
        trace0,
        samples,
        format,
        trsize_bytes: trsize,
        tracecount: remaining / per_trace,
    })
}

fn trace_start(meta: &FileMetadata, trace_no: u64) -> u64 {
    meta.trace0 + trace_no * (TRACE_HEADER_BYTES as u64 + meta.trsize_bytes)
}

/// Read the 240-byte header of trace `trace_no`.
pub fn read_trace_header(fh: &mut FileHandle, meta: &FileMetadata, trace_no: u64) -> Result<[u8; 240], SegyError> {
    let mut buf = [0u8; TRACE_HEADER_BYTES];
    fh.read_at(trace_start(meta, trace_no), &mut buf)?;
    Ok(buf)
}

/// Read the raw (on-disk, un-endian-corrected) sample bytes of trace `trace_no`.
pub fn read_trace(fh: &mut FileHandle, meta: &FileMetadata, trace_no: u64) -> Result<Vec<u8>, SegyError> {
    let mut buf = vec![0u8; meta.trsize_bytes as usize];
    let start = trace_start(meta, trace_no) + TRACE_HEADER_BYTES as u64;
    fh.read_at(start, &mut buf)?;
    Ok(buf)
}

/// Read a strided sub-range `[start, stop)` of trace `trace_no`'s samples, `step` elements at a
/// time. `stop == -1` with `step < 0` means "the whole trace, reversed", matching the reference
/// family's documented (if unusual) convention; any other negative range is unspecified.
pub fn read_subtrace(
    fh: &mut FileHandle,
    meta: &FileMetadata,
    trace_no: u64,
    start: i64,
    stop: i64,
    step: i64,
) -> Result<Vec<u8>, SegyError> {
    let bps = bytes_per_sample(meta.format).ok_or_else(|| SegyError::InvalidArgs {
        msg: format!("{} has no fixed decodable byte width", meta.format),
    })? as i64;

    let (start, stop) = if step < 0 && stop == -1 {
        (meta.samples as i64 - 1, -1i64)
    } else {
        (start, stop)
    };

    if step == 0 {
        return Err(SegyError::InvalidArgs {
            msg: "subtrace step must be non-zero".to_string(),
        });
    }
    if step > 0 && (start < 0 || stop < start || stop as u64 > meta.samples as u64) {
        return Err(SegyError::InvalidArgs {
            msg: format!("subtrace range [{}, {}) is out of bounds for {} samples", start, stop, meta.samples),
        });
    }

    let data_start = trace_start(meta, trace_no) + TRACE_HEADER_BYTES as u64;
    let mut out = Vec::new();
    let mut idx = start;
    while (step > 0 && idx < stop) || (step < 0 && idx > stop) {
        let mut one = vec![0u8; bps as usize];
        fh.read_at(data_start + idx as u64 * bps as u64, &mut one)?;
        out.extend_from_slice(&one);
        idx += step;
    }
    Ok(out)
}

/// Convert `n` on-disk samples of `format` in place to native `f32` representation. IEEE and
/// integer formats are byte-swapped from big-endian; IBM floats go through the bit-exact
/// conversion in [`segy_core::codec`].
pub fn to_native(format: SampleFormatCode, n: usize, buf: &[u8]) -> Result<Vec<f32>, SegyError> {
    let bps = bytes_per_sample(format).ok_or_else(|| SegyError::InvalidArgs {
        msg: format!("{} has no fixed decodable byte width", format),
    })? as usize;
    if buf.len() < n * bps {
        return Err(SegyError::InvalidArgs {
            msg: format!("buffer of {} bytes is too short for {} samples of width {}", buf.len(), n, bps),
        });
    }
    let convert = converter_chooser(format, false)?;
    (0..n).map(|i| convert(&buf[i * bps..(i + 1) * bps]).map_err(SegyError::from)).collect()
}

/// Inverse of [`to_native`]: encode `samples` as on-disk big-endian bytes in `format`.
pub fn from_native(format: SampleFormatCode, samples: &[f32]) -> Result<Vec<u8>, SegyError> {
    let encode = writer_chooser(format)?;
    let mut out = Vec::with_capacity(samples.len() * bytes_per_sample(format).unwrap_or(4) as usize);
    for &s in samples {
        out.extend_from_slice(&encode(s));
    }
    Ok(out)
}

/// Write `header` and `samples` (already `from_native`-encoded) as trace `trace_no`. Only
/// appending (`trace_no == meta.tracecount`) or overwriting an existing trace is permitted;
/// any other position would leave a gap and is rejected as `InvalidArgs`.
pub fn write_trace(
    fh: &mut FileHandle,
    meta: &FileMetadata,
    trace_no: u64,
    header: &[u8; 240],
    samples: &[u8],
) -> Result<(), SegyError> {
    if trace_no > meta.tracecount {
        return Err(SegyError::InvalidArgs {
            msg: format!(
                "trace {} would leave a gap; file currently has {} traces and only appending at {} is allowed",
                trace_no, meta.tracecount, meta.tracecount
            ),
        });
    }
    if samples.len() as u64 != meta.trsize_bytes {
        return Err(SegyError::InvalidArgs {
            msg: format!(
                "trace {} data is {} bytes but the file format expects {}",
                trace_no,
                samples.len(),
                meta.trsize_bytes
            ),
        });
    }
    let start = trace_start(meta, trace_no);
    fh.write_at(start, header)?;
    fh.write_at(start + TRACE_HEADER_BYTES as u64, samples)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use segy_core::codec::{read_i16_be, write_i16_be};

    fn bin_header_bytes(samples: u16, format: SampleFormatCode) -> [u8; 400] {
        let mut buf = [0u8; 400];
        write_i16_be(&mut buf, binary_field::NO_SAMPLES - 1, samples as i16);
        write_i16_be(&mut buf, binary_field::SAMPLE_FORMAT_CODE - 1, format as i16);
        buf
    }

    #[test]
    fn trace0_is_3600_with_no_extended_headers() {
        let buf = bin_header_bytes(50, SampleFormatCode::IbmFloat32);
        assert_eq!(trace0(&buf, 0).unwrap(), 3600);
    }

    #[test]
    fn trace0_accounts_for_extended_headers() {
        let mut buf = bin_header_bytes(50, SampleFormatCode::IbmFloat32);
        write_i16_be(&mut buf, binary_field::EXTENDED_HEADER_COUNT - 1, 2);
        assert_eq!(trace0(&buf, 0).unwrap(), 3600 + 3200 * 2);
    }

    #[test]
    fn trace0_accounts_for_tape_label() {
        let buf = bin_header_bytes(50, SampleFormatCode::IbmFloat32);
        assert_eq!(trace0(&buf, 128).unwrap(), 3600 + 128);
    }

    #[test]
    fn file_metadata_matches_scenario_s1() {
        let buf = bin_header_bytes(50, SampleFormatCode::IbmFloat32);
        let file_size = 3600 + 25 * (240 + 50 * 4);
        let fh = crate::tests_support::file_of_size(file_size as u64);
        let meta = file_metadata(&fh, &buf, 0).unwrap();
        assert_eq!(meta.trace0, 3600);
        assert_eq!(meta.samples, 50);
        assert_eq!(meta.trsize_bytes, 200);
        assert_eq!(meta.tracecount, 25);
    }

    #[test]
    fn file_metadata_rejects_misaligned_size() {
        let buf = bin_header_bytes(50, SampleFormatCode::IbmFloat32);
        let fh = crate::tests_support::file_of_size(3600 + 17);
        assert!(matches!(file_metadata(&fh, &buf, 0), Err(SegyError::TraceSizeMismatch { .. })));
    }

    #[test]
    fn to_native_then_from_native_roundtrips_float32() {
        let samples = [1.0f32, -2.5, 42.125];
        let encoded = from_native(SampleFormatCode::Float32, &samples).unwrap();
        let decoded = to_native(SampleFormatCode::Float32, samples.len(), &encoded).unwrap();
        assert_eq!(decoded, samples);
    }

    #[test]
    fn to_native_ibm_decodes_known_value() {
        // 0x42 0x10 0x00 0x00 is 1.0625 in IBM float (sign 0, exp 0x42=66 -> 16^(66-64)=256,
        // fraction 0x100000 / 0x1000000 = 0.0625 -> 0.0625 * 256 = 16... use direct codec check.
        let word: u32 = 0xC110_0000;
        let f = ibm_to_ieee(word);
        assert!(f < 0.0);
        let back = ieee_to_ibm(f);
        assert_eq!(ibm_to_ieee(back), f);
    }

    #[test]
    fn read_i16_be_matches_written_value() {
        let mut buf = [0u8; 2];
        write_i16_be(&mut buf, 0, -5);
        assert_eq!(read_i16_be(&buf, 0), -5);
    }
}
