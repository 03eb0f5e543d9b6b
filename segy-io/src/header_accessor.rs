//! Generic offset-based access to trace/binary header buffers, routed entirely through
//! [`segy_core::catalogue`] so that unassigned offsets fail rather than silently returning
//! garbage. This is the authority the typed `TraceHeader`/`BinHeader` structs ultimately read
//! and write through when they parse or serialise themselves; see `segy-core`'s header structs
//! for that ergonomic layer.
use segy_core::catalogue::{binary_field_width, trace_field_width};
use segy_core::codec::{read_i16_be, read_i32_be, write_i16_be, write_i32_be};
use segy_core::errors::SegyError;

/// Read the recognised field at 1-based trace-header `offset`, sign-extending a 2-byte field to
/// `i32`. `InvalidField` if `offset` is not the start of a recognised field.
pub fn get_trace_field(buf: &[u8; 240], offset: usize) -> Result<i32, SegyError> {
    match trace_field_width(offset) {
        Some(2) => Ok(read_i16_be(buf, offset - 1) as i32),
        Some(4) => Ok(read_i32_be(buf, offset - 1)),
        _ => Err(SegyError::InvalidField { offset }),
    }
}

/// Read the recognised field at 1-based binary-header offset `offset_from_3200`.
pub fn get_binary_field(buf: &[u8; 400], offset_from_3200: usize) -> Result<i32, SegyError> {
    match binary_field_width(offset_from_3200) {
        Some(2) => Ok(read_i16_be(buf, offset_from_3200 - 1) as i32),
        Some(4) => Ok(read_i32_be(buf, offset_from_3200 - 1)),
        _ => Err(SegyError::InvalidField {
            offset: offset_from_3200,
        }),
    }
}

/// Write `value` at 1-based trace-header `offset`. A value that overflows the field's width is
/// truncated, matching the reference family's "caller's responsibility" contract.
pub fn set_trace_field(buf: &mut [u8; 240], offset: usize, value: i32) -> Result<(), SegyError> {
    match trace_field_width(offset) {
        Some(2) => {
            write_i16_be(buf, offset - 1, value as i16);
            Ok(())
        }
        Some(4) => {
            write_i32_be(buf, offset - 1, value);
            Ok(())
        }
        _ => Err(SegyError::InvalidField { offset }),
    }
}

/// Write `value` at 1-based binary-header offset `offset_from_3200`.
pub fn set_binary_field(buf: &mut [u8; 400], offset_from_3200: usize, value: i32) -> Result<(), SegyError> {
    match binary_field_width(offset_from_3200) {
        Some(2) => {
            write_i16_be(buf, offset_from_3200 - 1, value as i16);
            Ok(())
        }
        Some(4) => {
            write_i32_be(buf, offset_from_3200 - 1, value);
            Ok(())
        }
        _ => Err(SegyError::InvalidField {
            offset: offset_from_3200,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use segy_core::catalogue::{binary_field, trace_field};

    #[test]
    fn trace_field_roundtrips_through_set_and_get() {
        let mut buf = [0u8; 240];
        set_trace_field(&mut buf, trace_field::INLINE_NO, 1234).unwrap();
        assert_eq!(get_trace_field(&buf, trace_field::INLINE_NO).unwrap(), 1234);
    }

    #[test]
    fn two_byte_field_sign_extends() {
        let mut buf = [0u8; 240];
        set_trace_field(&mut buf, trace_field::DATA_USE, -1).unwrap();
        assert_eq!(get_trace_field(&buf, trace_field::DATA_USE).unwrap(), -1);
    }

    #[test]
    fn unassigned_offset_is_rejected() {
        let buf = [0u8; 240];
        let err = get_trace_field(&buf, 190).unwrap_err();
        assert!(matches!(err, SegyError::InvalidField { offset: 190 }));
    }

    #[test]
    fn binary_field_roundtrips() {
        let mut buf = [0u8; 400];
        set_binary_field(&mut buf, binary_field::NO_SAMPLES, 50).unwrap();
        assert_eq!(get_binary_field(&buf, binary_field::NO_SAMPLES).unwrap(), 50);
    }

    #[test]
    fn oversized_value_is_truncated_not_rejected() {
        let mut buf = [0u8; 240];
        // DATA_USE is a 2-byte field; 0x1_0000 truncates to 0 when narrowed to i16.
        set_trace_field(&mut buf, trace_field::DATA_USE, 0x1_0000).unwrap();
        assert_eq!(get_trace_field(&buf, trace_field::DATA_USE).unwrap(), 0);
    }
}
