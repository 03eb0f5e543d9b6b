//! Survey geometry inference: reverse-engineering the inline/crossline/offset layout of a 3-D or
//! 4-D survey purely from trace headers, with no external manifest. Ties and edge cases here are
//! load-bearing — see the module-level algorithms this mirrors in the reference C library's
//! `segy_sorting`/`segy_offsets`/`segy_offset_indices`/`segy_line_indices`/`segy_inline_stride`
//! family of functions.
use crate::file_handle::FileHandle;
use crate::header_accessor::get_trace_field;
use crate::trace_io::{read_trace_header, FileMetadata};
use segy_core::catalogue::trace_field;
use segy_core::errors::SegyError;

/// The major axis traces are laid out on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sorting {
    Inline,
    Crossline,
}

/// A fully inferred survey geometry. `tracecount == ilines * xlines * offsets` is checked when
/// this is assembled by [`infer_geometry`]; a mismatch means the inference did not actually tile
/// the file and is reported as [`SegyError::InvalidOffsets`] rather than trusted silently.
#[derive(Debug, Clone)]
pub struct Geometry {
    pub sorting: Sorting,
    pub offsets: u32,
    pub ilines: u32,
    pub xlines: u32,
    pub il_stride: u32,
    pub xl_stride: u32,
    pub iline_indices: Vec<i32>,
    pub xline_indices: Vec<i32>,
    pub offset_indices: Vec<i32>,
}

fn header_field(fh: &mut FileHandle, meta: &FileMetadata, trace_no: u64, field: usize) -> Result<i32, SegyError> {
    let header = read_trace_header(fh, meta, trace_no)?;
    get_trace_field(&header, field)
}

/// Determine whether the file is laid out inline-major or crossline-major. Reads trace 0, walks
/// forward to the first trace whose offset field differs (or EOF), and also checks the last
/// trace, which is what lets this resolve degenerate Mx1 / 1xN / 1x1 surveys that a two-trace
/// heuristic would get wrong.
pub fn sorting(fh: &mut FileHandle, meta: &FileMetadata, il_field: usize, xl_field: usize, off_field: usize) -> Result<Sorting, SegyError> {
    let il0 = header_field(fh, meta, 0, il_field)?;
    let xl0 = header_field(fh, meta, 0, xl_field)?;
    let off0 = header_field(fh, meta, 0, off_field)?;

    let mut k = 1;
    let (il1, xl1) = loop {
        if k >= meta.tracecount {
            break (il0, xl0);
        }
        let off_k = header_field(fh, meta, k, off_field)?;
        if off_k != off0 {
            break (header_field(fh, meta, k, il_field)?, header_field(fh, meta, k, xl_field)?);
        }
        k += 1;
    };

    let last = meta.tracecount - 1;
    let il_last = header_field(fh, meta, last, il_field)?;
    let xl_last = header_field(fh, meta, last, xl_field)?;

    if il0 == il_last {
        log::warn!("sorting resolved via the last-trace rule (il0 == il_last); a two-trace heuristic would have missed this degenerate geometry");
        return Ok(Sorting::Crossline);
    }
    if xl0 == xl_last {
        log::warn!("sorting resolved via the last-trace rule (xl0 == xl_last); a two-trace heuristic would have missed this degenerate geometry");
        return Ok(Sorting::Inline);
    }
    if il0 == il1 {
        return Ok(Sorting::Inline);
    }
    if xl0 == xl1 {
        return Ok(Sorting::Crossline);
    }
    Err(SegyError::InvalidSorting)
}

/// Number of distinct offsets recorded per `(il, xl)` cell: scan from trace 0, counting while
/// `(il, xl)` matches trace 0's, stopping at the first trace where either differs.
pub fn offsets(fh: &mut FileHandle, meta: &FileMetadata, il_field: usize, xl_field: usize) -> Result<u32, SegyError> {
    if meta.tracecount == 1 {
        return Ok(1);
    }
    let il0 = header_field(fh, meta, 0, il_field)?;
    let xl0 = header_field(fh, meta, 0, xl_field)?;

    let mut count = 1u32;
    for k in 1..meta.tracecount {
        let il_k = header_field(fh, meta, k, il_field)?;
        let xl_k = header_field(fh, meta, k, xl_field)?;
        if il_k != il0 || xl_k != xl0 {
            break;
        }
        count += 1;
    }
    Ok(count)
}

/// The *Offset* field of the first `offsets` traces, in on-disk order.
pub fn offset_indices(fh: &mut FileHandle, meta: &FileMetadata, off_field: usize, offsets: u32) -> Result<Vec<i32>, SegyError> {
    (0..offsets as u64).map(|k| header_field(fh, meta, k, off_field)).collect()
}

/// Step through traces `offsets` at a time (skipping within-cell replicates), counting distinct
/// values of `slow_field` until it repeats its trace-0 value alongside a repeated offset value.
/// Returns `(slow_count, fast_count)`; `fast_count` is the number of unique lines seen along the
/// fast axis before the cycle closes, and `slow_count = tracecount / (fast_count * offsets)`.
pub fn count_lines(fh: &mut FileHandle, meta: &FileMetadata, slow_field: usize, off_field: usize, offsets: u32) -> Result<(u32, u32), SegyError> {
    let step = offsets.max(1) as u64;
    let ln0 = header_field(fh, meta, 0, slow_field)?;
    let off0 = header_field(fh, meta, 0, off_field)?;

    let mut seen = Vec::new();
    seen.push(ln0);

    let mut k = step;
    while k < meta.tracecount {
        let ln = header_field(fh, meta, k, slow_field)?;
        let off = header_field(fh, meta, k, off_field)?;
        if ln == ln0 && off == off0 {
            break;
        }
        if !seen.contains(&ln) {
            seen.push(ln);
        }
        k += step;
    }

    let fast_count = seen.len() as u32;
    if fast_count == 0 || step * fast_count as u64 == 0 {
        return Err(SegyError::InvalidOffsets {
            msg: "count_lines derived a zero-length fast axis".to_string(),
        });
    }
    let denom = fast_count as u64 * step;
    if meta.tracecount % denom != 0 {
        return Err(SegyError::InvalidOffsets {
            msg: format!("tracecount {} does not divide evenly by fast_count {} * offsets {}", meta.tracecount, fast_count, offsets),
        });
    }
    Ok(((meta.tracecount / denom) as u32, fast_count))
}

/// Read `field` out of `n` trace headers starting at `start_trace`, stepping `stride` traces at
/// a time, into `out`.
pub fn line_indices(fh: &mut FileHandle, meta: &FileMetadata, field: usize, start_trace: u64, stride: u64, n: u32, out: &mut Vec<i32>) -> Result<(), SegyError> {
    out.clear();
    for i in 0..n as u64 {
        out.push(header_field(fh, meta, start_trace + i * stride, field)?);
    }
    Ok(())
}

/// `(inline_stride, crossline_stride)` given the sorting direction and the crossline count.
pub fn inline_crossline_stride(sorting: Sorting, crossline_count: u32) -> (u32, u32) {
    match sorting {
        Sorting::Inline => (1, crossline_count),
        Sorting::Crossline => (crossline_count, 1),
    }
}

/// The trace number (at offset 0) of the first trace of `lineno`, given the sorted list of line
/// numbers along this axis. `MissingLineIndex` if `lineno` is absent.
pub fn line_trace0(lineno: i32, length: u32, stride: u32, offsets: u32, linenos: &[i32]) -> Result<u32, SegyError> {
    let i = linenos
        .iter()
        .position(|&x| x == lineno)
        .ok_or(SegyError::MissingLineIndex { lineno })? as u32;
    let first = if stride == 1 { i * length } else { i };
    Ok(first * offsets)
}

/// Clockwise angle, in `[0, 2*pi)`, from geographic north (`+CDP_Y`) to the direction of the
/// first inline/crossline traversed, measured using the first and last trace of the first line.
/// "East" is `+CDP_X`.
pub fn rotation_cw(fh: &mut FileHandle, meta: &FileMetadata, first_trace: u64, last_trace: u64) -> Result<f32, SegyError> {
    let x0 = header_field(fh, meta, first_trace, trace_field::X_ENSEMBLE)? as f32;
    let y0 = header_field(fh, meta, first_trace, trace_field::Y_ENSEMBLE)? as f32;
    let x1 = header_field(fh, meta, last_trace, trace_field::X_ENSEMBLE)? as f32;
    let y1 = header_field(fh, meta, last_trace, trace_field::Y_ENSEMBLE)? as f32;

    let dx = x1 - x0;
    let dy = y1 - y0;
    // atan2 measures counter-clockwise from +x (east); clockwise-from-north is its complement.
    let mut angle = std::f32::consts::FRAC_PI_2 - dy.atan2(dx);
    if angle < 0.0 {
        angle += std::f32::consts::TAU;
    }
    Ok(angle)
}

/// Assemble a full [`Geometry`] from a file's trace headers, validating that the inferred shape
/// actually tiles the file (`InvalidOffsets` if not).
pub fn infer_geometry(fh: &mut FileHandle, meta: &FileMetadata, il_field: usize, xl_field: usize, off_field: usize) -> Result<Geometry, SegyError> {
    let sort = sorting(fh, meta, il_field, xl_field, off_field)?;
    let offs = offsets(fh, meta, il_field, xl_field)?;
    let offset_idx = offset_indices(fh, meta, off_field, offs)?;

    let (slow_field, fast_field) = match sort {
        Sorting::Inline => (il_field, xl_field),
        Sorting::Crossline => (xl_field, il_field),
    };
    let (slow_count, fast_count) = count_lines(fh, meta, slow_field, off_field, offs)?;

    let (ilines, xlines) = match sort {
        Sorting::Inline => (slow_count, fast_count),
        Sorting::Crossline => (fast_count, slow_count),
    };
    let (il_stride, xl_stride) = inline_crossline_stride(sort, xlines);

    let mut iline_indices = Vec::new();
    let mut xline_indices = Vec::new();
    match sort {
        Sorting::Inline => {
            line_indices(fh, meta, il_field, 0, (xlines as u64) * offs as u64, ilines, &mut iline_indices)?;
            line_indices(fh, meta, xl_field, 0, offs as u64, xlines, &mut xline_indices)?;
        }
        Sorting::Crossline => {
            line_indices(fh, meta, xl_field, 0, (ilines as u64) * offs as u64, xlines, &mut xline_indices)?;
            line_indices(fh, meta, il_field, 0, offs as u64, ilines, &mut iline_indices)?;
        }
    }

    let expected = ilines as u64 * xlines as u64 * offs as u64;
    if expected != meta.tracecount {
        return Err(SegyError::InvalidOffsets {
            msg: format!(
                "inferred geometry {}x{}x{} = {} traces, but the file has {}",
                ilines, xlines, offs, expected, meta.tracecount
            ),
        });
    }

    Ok(Geometry {
        sorting: sort,
        offsets: offs,
        ilines,
        xlines,
        il_stride,
        xl_stride,
        iline_indices,
        xline_indices,
        offset_indices: offset_idx,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_trace0_matches_scenario_s4_stride_1() {
        assert_eq!(line_trace0(4, 5, 1, 1, &[1, 2, 3, 4, 5]).unwrap(), 15);
    }

    #[test]
    fn line_trace0_matches_scenario_s4_stride_5() {
        assert_eq!(line_trace0(22, 5, 5, 1, &[20, 21, 22, 23, 24]).unwrap(), 2);
    }

    #[test]
    fn line_trace0_reports_missing_line() {
        let err = line_trace0(99, 5, 1, 1, &[1, 2, 3, 4, 5]).unwrap_err();
        assert!(matches!(err, SegyError::MissingLineIndex { lineno: 99 }));
    }

    #[test]
    fn inline_sorted_strides_use_crossline_count() {
        assert_eq!(inline_crossline_stride(Sorting::Inline, 5), (1, 5));
        assert_eq!(inline_crossline_stride(Sorting::Crossline, 5), (5, 1));
    }
}
