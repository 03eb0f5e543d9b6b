// Copyright (C) 2020 by GiGa infosystems
//! The byte-level codec: big-endian integer load/store at fixed offsets, bit-exact
//! IBM-to-IEEE float conversion, and EBCDIC/ASCII translation.
//!
//! Every function here is pure and infallible given an in-bounds offset; bounds checking
//! against the recognised-field tables is the [`crate::catalogue`] module's job, not this one.
use crate::enums::SampleFormatCode;
use crate::errors::*;

use std::array::TryFromSliceError;
use std::convert::TryInto;

/// Read a big-endian `i16` at `offset`. Caller guarantees `offset + 2 <= buf.len()`.
pub fn read_i16_be(buf: &[u8], offset: usize) -> i16 {
    i16::from_be_bytes(buf[offset..offset + 2].try_into().expect("bounds checked by caller"))
}

/// Read a big-endian `i32` at `offset`. Caller guarantees `offset + 4 <= buf.len()`.
pub fn read_i32_be(buf: &[u8], offset: usize) -> i32 {
    i32::from_be_bytes(buf[offset..offset + 4].try_into().expect("bounds checked by caller"))
}

/// Write a big-endian `i16` at `offset`. Caller guarantees `offset + 2 <= buf.len()`.
pub fn write_i16_be(buf: &mut [u8], offset: usize, value: i16) {
    buf[offset..offset + 2].copy_from_slice(&value.to_be_bytes());
}

/// Write a big-endian `i32` at `offset`. Caller guarantees `offset + 4 <= buf.len()`.
pub fn write_i32_be(buf: &mut [u8], offset: usize, value: i32) {
    buf[offset..offset + 4].copy_from_slice(&value.to_be_bytes());
}

/// Convert a 32-bit IBM System/390 hexadecimal float (big-endian on disk) to IEEE 754
/// single precision, via the `ibmfloat` crate.
///
/// ```
/// # use segy_core::codec::ibm_to_ieee;
/// assert_eq!(ibm_to_ieee(0), 0.0f32);
/// ```
pub fn ibm_to_ieee(word: u32) -> f32 {
    f32::from(ibmfloat::F32::from_be_bytes(word.to_be_bytes()))
}

/// Convert an IEEE 754 single-precision value to its nearest 32-bit IBM representation,
/// bit-exact with the reference algorithm. Round-trip error through [`ibm_to_ieee`] is
/// bounded at roughly `4.77e-7` relative, matching real IBM/370 hardware behaviour.
///
/// ```
/// # use segy_core::codec::{ibm_to_ieee, ieee_to_ibm};
/// let original = 123.456f32;
/// let roundtripped = ibm_to_ieee(ieee_to_ibm(original));
/// let rel_err = ((roundtripped - original) / original).abs();
/// assert!(rel_err < 4.77e-7);
/// ```
pub fn ieee_to_ibm(f: f32) -> u32 {
    let bits = f.to_bits();
    let sgn = (bits >> 31) & 1;
    let mut exp = ((bits >> 23) & 0xff) as i32;
    let mantissa = bits & 0x007f_ffff;

    if bits & 0x7fff_ffff == 0 {
        return sgn << 31;
    }

    if exp == 255 {
        // Infinity/NaN: saturate to the largest representable IBM magnitude.
        return (sgn << 31) | (0x7fu32 << 24) | 0x00ff_ffff;
    }

    // Restore the assumed leading one for normals (all SEG-Y floats reaching here are
    // normal IEEE values; subnormals underflow to zero below via the exp<=0 path).
    let mut fr = mantissa | 0x0080_0000;
    exp -= 127;

    exp += 130;
    // Align the binary exponent to a multiple of 4 (nibble boundary) by shifting the
    // fraction right, rounding the exponent up to the next hex digit.
    let shift = (-exp) & 3;
    fr >>= shift;
    exp = (exp + 3) >> 2;

    if exp <= 0 {
        return sgn << 31;
    }
    if exp >= 128 {
        return (sgn << 31) | (0x7fu32 << 24) | 0x00ff_ffff;
    }

    (sgn << 31) | ((exp as u32) << 24) | (fr & 0x00ff_ffff)
}

/// Translate an EBCDIC (IBM-037) buffer to its ASCII (ISO-8859-1) equivalent, byte for
/// byte. Used for the primary and extended textual headers.
pub fn ebcdic_to_ascii(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().map(|&b| encoding8::ebcdic::to_ascii(b)).collect()
}

/// Inverse of [`ebcdic_to_ascii`].
pub fn ascii_to_ebcdic(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().map(|&b| encoding8::ascii::to_ebcdic(b)).collect()
}

pub type BitConverter = fn(&[u8]) -> Result<f32, TryFromSliceError>;

/// Choose the converter from on-disk sample bytes to native `f32` for a given sample
/// format and endianness.
///
/// The converter should be chosen once per trace (or better still once per file) for
/// efficiency. Importantly the `le` argument determines whether the bytes converted are
/// assumed to be little endian or big endian; SEG-Y itself is always big-endian on disk,
/// but this is also used by `seg-flip-endianness` to read byte-swapped fixtures.
/// ```
/// # use segy_core::codec::converter_chooser;
/// # use segy_core::enums::SampleFormatCode;
/// let bytes_to_f32_converter: fn(&[u8]) -> Result<f32, _> =
///     converter_chooser(SampleFormatCode::Float32, false).unwrap();
///
/// let bytes = 42.0f32.to_be_bytes();
/// let nmbr = bytes_to_f32_converter(&bytes[..]).unwrap();
/// assert_eq!(nmbr, 42.);
/// ```
pub fn converter_chooser(format: SampleFormatCode, le: bool) -> Result<BitConverter, SegyError> {
    let f = match format {
        SampleFormatCode::IbmFloat32 if le => {
            fn x(input: &[u8]) -> Result<f32, TryFromSliceError> {
                Ok(ibm_to_ieee(u32::from_le_bytes(input.try_into()?)))
            }
            x
        }
        SampleFormatCode::IbmFloat32 => {
            fn x(input: &[u8]) -> Result<f32, TryFromSliceError> {
                Ok(ibm_to_ieee(u32::from_be_bytes(input.try_into()?)))
            }
            x
        }
        SampleFormatCode::Int32 if le => {
            fn x(input: &[u8]) -> Result<f32, TryFromSliceError> {
                Ok(i32::from_le_bytes(input.try_into()?) as f32)
            }
            x
        }
        SampleFormatCode::Int32 => {
            fn x(input: &[u8]) -> Result<f32, TryFromSliceError> {
                Ok(i32::from_be_bytes(input.try_into()?) as f32)
            }
            x
        }
        SampleFormatCode::Int16 if le => {
            fn x(input: &[u8]) -> Result<f32, TryFromSliceError> {
                Ok(i16::from_le_bytes(input.try_into()?) as f32)
            }
            x
        }
        SampleFormatCode::Int16 => {
            fn x(input: &[u8]) -> Result<f32, TryFromSliceError> {
                Ok(i16::from_be_bytes(input.try_into()?) as f32)
            }
            x
        }
        SampleFormatCode::Float32 if le => {
            fn x(input: &[u8]) -> Result<f32, TryFromSliceError> {
                Ok(f32::from_le_bytes(input.try_into()?))
            }
            x
        }
        SampleFormatCode::Float32 => {
            fn x(input: &[u8]) -> Result<f32, TryFromSliceError> {
                Ok(f32::from_be_bytes(input.try_into()?))
            }
            x
        }
        SampleFormatCode::Int8 if le => {
            fn x(input: &[u8]) -> Result<f32, TryFromSliceError> {
                Ok(i8::from_le_bytes(input.try_into()?) as f32)
            }
            x
        }
        SampleFormatCode::Int8 => {
            fn x(input: &[u8]) -> Result<f32, TryFromSliceError> {
                Ok(i8::from_be_bytes(input.try_into()?) as f32)
            }
            x
        }
        SampleFormatCode::FixPoint32 => {
            return Err(SegyError::InvalidArgs {
                msg: "fixed-point-with-gain samples (format code 4) are obsolete and not decodable".to_string(),
            });
        }
        other => {
            return Err(SegyError::InvalidArgs {
                msg: format!("{} is not one of the sample formats this library decodes", other),
            });
        }
    };
    Ok(f)
}

/// Inverse of [`converter_chooser`]: pick the function that encodes a native `f32` sample
/// back into its on-disk big-endian representation for the declared sample format.
pub fn writer_chooser(format: SampleFormatCode) -> Result<fn(f32) -> Vec<u8>, SegyError> {
    let f: fn(f32) -> Vec<u8> = match format {
        SampleFormatCode::IbmFloat32 => |v| ieee_to_ibm(v).to_be_bytes().to_vec(),
        SampleFormatCode::Int32 => |v| (v as i32).to_be_bytes().to_vec(),
        SampleFormatCode::Int16 => |v| (v as i16).to_be_bytes().to_vec(),
        SampleFormatCode::Float32 => |v| v.to_be_bytes().to_vec(),
        SampleFormatCode::Int8 => |v| (v as i8).to_be_bytes().to_vec(),
        SampleFormatCode::FixPoint32 => {
            return Err(SegyError::InvalidArgs {
                msg: "fixed-point-with-gain samples (format code 4) are obsolete and not encodable".to_string(),
            });
        }
        other => {
            return Err(SegyError::InvalidArgs {
                msg: format!("{} is not one of the sample formats this library encodes", other),
            });
        }
    };
    Ok(f)
}

/// A helper function to convert null-terminated ascii to string.
///
/// This function assumes that the string is ascii and will truncate it at the first null byte.
/// ```
/// # use segy_core::codec::ascii_bytes_to_string;
/// let input = b"I am an ascii string 123456!?";
/// let output = ascii_bytes_to_string(input);
/// assert_eq!(&output, "I am an ascii string 123456!?");
///
/// let input = b"hello\0world";
/// let output = ascii_bytes_to_string(&input[..]);
/// assert_eq!(&output, "hello");
/// ```
pub fn ascii_bytes_to_string(bytes: &[u8]) -> String {
    let mut bytes = bytes.to_vec();
    let i = bytes.iter().position(|x| *x == 0).unwrap_or(bytes.len());
    bytes.truncate(i);
    String::from_utf8_lossy(&bytes).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn be_i16_roundtrip() {
        for v in [-32768i16, -1, 0, 1, 32767] {
            let mut buf = [0u8; 2];
            write_i16_be(&mut buf, 0, v);
            assert_eq!(read_i16_be(&buf, 0), v);
        }
    }

    #[test]
    fn be_i32_roundtrip() {
        for v in [i32::MIN, -1, 0, 1, i32::MAX] {
            let mut buf = [0u8; 4];
            write_i32_be(&mut buf, 0, v);
            assert_eq!(read_i32_be(&buf, 0), v);
        }
    }

    #[test]
    fn ibm_roundtrip_zero() {
        assert_eq!(ibm_to_ieee(0), 0.0f32);
        assert_eq!(ieee_to_ibm(0.0f32), 0u32);
    }

    #[test]
    fn ibm_roundtrip_bounded_error() {
        // Deterministic sweep in lieu of a property-testing dependency (kept out of
        // the dependency set, matching the reference family).
        let mut seed = 0x2545_f491_4f6c_dd1du64;
        let mut worst: f32 = 0.0;
        for _ in 0..100_000 {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            let bits = (seed & 0xffff_ffff) as u32;
            let f = f32::from_bits(bits);
            if !f.is_finite() || f == 0.0 {
                continue;
            }
            let exponent = f.abs().log2();
            if !(-215.0..=215.0).contains(&exponent) {
                continue;
            }
            let roundtripped = ibm_to_ieee(ieee_to_ibm(f));
            let rel = ((roundtripped - f) / f).abs();
            if rel > worst {
                worst = rel;
            }
        }
        assert!(worst <= 4.77e-7, "worst relative error {} exceeded bound", worst);
    }

    #[test]
    fn ebcdic_ascii_roundtrip() {
        let ascii: Vec<u8> = (0u8..=255).collect();
        let ebcdic = ascii_to_ebcdic(&ascii);
        let back = ebcdic_to_ascii(&ebcdic);
        assert_eq!(back, ascii);
    }
}
