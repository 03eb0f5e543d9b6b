//! Textual header I/O: the primary EBCDIC textual header and any number of extended textual
//! headers, each exactly 3200 bytes. Conversion is applied unconditionally on read and write,
//! matching legacy callers that treat non-primary textual headers as arbitrary bytes rather than
//! validating their encoding.
use crate::file_handle::FileHandle;
use segy_core::codec::{ascii_to_ebcdic, ebcdic_to_ascii};
use segy_core::errors::SegyError;

/// Byte length of every textual header block, primary or extended.
pub const TEXT_HEADER_BYTES: usize = 3200;

fn extended_offset(base: u64, i: u32) -> u64 {
    base + 3600 + 3200 * i as u64
}

/// Read the primary textual header and translate it from EBCDIC to ASCII. `base` is 0 for a file
/// with no tape label, or 128 when one precedes the primary header (see [`crate::reader`]).
pub fn read_primary(fh: &mut FileHandle, base: u64) -> Result<Vec<u8>, SegyError> {
    let mut buf = vec![0u8; TEXT_HEADER_BYTES];
    fh.read_at(base, &mut buf)?;
    Ok(ebcdic_to_ascii(&buf))
}

/// Read extended textual header `i` (0-based) and translate it from EBCDIC to ASCII.
pub fn read_extended(fh: &mut FileHandle, base: u64, i: u32) -> Result<Vec<u8>, SegyError> {
    let mut buf = vec![0u8; TEXT_HEADER_BYTES];
    fh.read_at(extended_offset(base, i), &mut buf)?;
    Ok(ebcdic_to_ascii(&buf))
}

/// Translate `ascii` to EBCDIC and write it as the 3200-byte textual header starting at
/// `pos` (0 for the primary header, `extended_offset(i)` for extended header `i`). The input is
/// padded with ASCII spaces (which map to a fixed EBCDIC byte) to exactly 3200 bytes, or
/// rejected with `InvalidArgs` if it is longer.
pub fn write_textheader(fh: &mut FileHandle, pos: u64, ascii: &[u8]) -> Result<(), SegyError> {
    if ascii.len() > TEXT_HEADER_BYTES {
        return Err(SegyError::InvalidArgs {
            msg: format!("textual header is {} bytes, exceeds the fixed {} byte block", ascii.len(), TEXT_HEADER_BYTES),
        });
    }
    let mut padded = ascii.to_vec();
    padded.resize(TEXT_HEADER_BYTES, b' ');
    let ebcdic = ascii_to_ebcdic(&padded);
    fh.write_at(pos, &ebcdic)
}

/// The absolute file offset of extended textual header `i` (0-based).
pub fn extended_header_offset(base: u64, i: u32) -> u64 {
    extended_offset(base, i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_header_roundtrips_through_write_and_read() {
        let mut fh = crate::tests_support::file_of_size(TEXT_HEADER_BYTES as u64);
        let text = b"hello segy".to_vec();
        write_textheader(&mut fh, 0, &text).unwrap();
        let read_back = read_primary(&mut fh, 0).unwrap();
        assert_eq!(&read_back[..text.len()], &text[..]);
        assert_eq!(read_back.len(), TEXT_HEADER_BYTES);
        // Padding decodes back to ASCII spaces, not stray EBCDIC artefacts.
        assert!(read_back[text.len()..].iter().all(|&b| b == b' '));
    }

    #[test]
    fn write_textheader_rejects_overlong_input() {
        let mut fh = crate::tests_support::file_of_size(TEXT_HEADER_BYTES as u64);
        let too_long = vec![b'x'; TEXT_HEADER_BYTES + 1];
        let err = write_textheader(&mut fh, 0, &too_long).unwrap_err();
        assert!(matches!(err, SegyError::InvalidArgs { .. }));
    }

    #[test]
    fn extended_header_offset_matches_layout() {
        assert_eq!(extended_header_offset(0, 0), 3600);
        assert_eq!(extended_header_offset(0, 1), 6800);
    }

    #[test]
    fn extended_header_offset_accounts_for_tape_label() {
        assert_eq!(extended_header_offset(128, 0), 3728);
    }
}
