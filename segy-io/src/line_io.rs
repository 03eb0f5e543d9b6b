//! Line-at-a-time access: read or write every trace along one inline/crossline in a single call,
//! concatenating their sample vectors. Built on [`crate::trace_io`]; sample conversion is left to
//! the caller via `to_native`/`from_native` on the concatenated buffer, exactly as for single
//! traces.
use crate::file_handle::FileHandle;
use crate::trace_io::{read_trace, write_trace, FileMetadata};
use segy_core::errors::SegyError;

/// Read `line_length` traces starting at `first_trace`, each `stride * offsets` traces apart,
/// concatenating their raw (on-disk) sample bytes in the order read.
pub fn read_line(
    fh: &mut FileHandle,
    meta: &FileMetadata,
    first_trace: u64,
    line_length: u32,
    stride: u64,
    offsets: u64,
) -> Result<Vec<u8>, SegyError> {
    let step = stride * offsets.max(1);
    let mut out = Vec::with_capacity(line_length as usize * meta.trsize_bytes as usize);
    for i in 0..line_length as u64 {
        let trace_no = first_trace + i * step;
        out.extend(read_trace(fh, meta, trace_no)?);
    }
    Ok(out)
}

/// Write a concatenated buffer of `line_length` traces (each already header-prefixed per trace
/// via `headers`) back at the positions [`read_line`] would have read from.
pub fn write_line(
    fh: &mut FileHandle,
    meta: &FileMetadata,
    first_trace: u64,
    line_length: u32,
    stride: u64,
    offsets: u64,
    headers: &[[u8; 240]],
    data: &[u8],
) -> Result<(), SegyError> {
    if headers.len() != line_length as usize {
        return Err(SegyError::InvalidArgs {
            msg: format!("expected {} trace headers, got {}", line_length, headers.len()),
        });
    }
    let trsize = meta.trsize_bytes as usize;
    if data.len() != line_length as usize * trsize {
        return Err(SegyError::InvalidArgs {
            msg: format!("expected {} bytes of sample data, got {}", line_length as usize * trsize, data.len()),
        });
    }

    let step = stride * offsets.max(1);
    for i in 0..line_length as u64 {
        let trace_no = first_trace + i * step;
        let chunk = &data[i as usize * trsize..(i as usize + 1) * trsize];
        write_trace(fh, meta, trace_no, &headers[i as usize], chunk)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use segy_core::enums::SampleFormatCode;

    #[test]
    fn read_line_length_mismatch_is_caught_by_write_line() {
        let meta = FileMetadata {
            trace0: 3600,
            samples: 2,
            format: SampleFormatCode::Float32,
            trsize_bytes: 8,
            tracecount: 4,
        };
        let mut fh = crate::tests_support::file_of_size(3600 + 4 * (240 + 8));
        let headers = vec![[0u8; 240]; 3];
        let data = vec![0u8; 2 * 8];
        let err = write_line(&mut fh, &meta, 0, 4, 1, 1, &headers, &data).unwrap_err();
        assert!(matches!(err, SegyError::InvalidArgs { .. }));
    }
}
