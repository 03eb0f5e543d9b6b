//! The field catalogue: which byte offsets within a trace or binary header are recognised
//! fields, and how wide each one is.
//!
//! Offsets here follow the SEG-Y convention used throughout the standard and by the reference
//! `segyio` library: they are **1-based** byte positions (`SEGY_TR_INLINE = 189`, not `188`).
//! [`trace_field_width`] and [`binary_field_width`] translate an offset to a 0-based buffer
//! index by subtracting one, mirroring `header + (field - 1)` in the C original. Callers can
//! therefore copy offset constants straight out of the standard (or out of this module) without
//! an off-by-one translation at the call site.
use crate::errors::*;

/// Trace header field byte offsets (1-based). Mirrors the subset of `SEGY_TR_*` constants this
/// library recognises; everything else in the 240-byte trace header is an unassigned gap.
pub mod trace_field {
    pub const TRACE_SEQUENCE_ON_LINE: usize = 1;
    pub const TRACE_SEQUENCE_IN_FILE: usize = 5;
    pub const FIELD_RECORD_NO: usize = 9;
    pub const TRACE_NO: usize = 13;
    pub const ENERGY_SOURCE_POINT_NO: usize = 17;
    pub const ENSEMBLE_NO: usize = 21;
    pub const TRACE_NO_IN_ENSEMBLE: usize = 25;
    pub const TRACE_IDENTIFICATION_CODE: usize = 29;
    pub const NO_V_SUMMED_TRACES: usize = 31;
    pub const NO_H_STACKED_TRACES: usize = 33;
    pub const DATA_USE: usize = 35;
    pub const OFFSET: usize = 37;
    pub const ELEVATION_OF_RECEIVER_GROUP: usize = 41;
    pub const SURFACE_ELEVATION_OF_SOURCE: usize = 45;
    pub const SOURCE_DEPTH: usize = 49;
    pub const DATUM_ELEVATION_OF_RECEIVER_GROUP: usize = 53;
    pub const DATUM_ELEVATION_OF_SOURCE: usize = 57;
    pub const WATER_COLUMN_HEIGHT_AT_SOURCE: usize = 61;
    pub const WATER_COLUMN_HEIGHT_AT_GROUP: usize = 65;
    pub const ELEVATION_SCALAR: usize = 69;
    pub const COORDINATE_SCALAR: usize = 71;
    pub const SOURCE_X: usize = 73;
    pub const SOURCE_Y: usize = 77;
    pub const RECEIVER_GROUP_X: usize = 81;
    pub const RECEIVER_GROUP_Y: usize = 85;
    pub const COORDINATE_UNITS: usize = 89;
    pub const WEATHING_VELOCITY: usize = 91;
    pub const SUB_WEATHERING_VELOCITY: usize = 93;
    pub const UPHOLE_TIME_AT_SOURCE: usize = 95;
    pub const UPHOLE_TIME_AT_GROUP: usize = 97;
    pub const SOURCE_STATIC_CORRECTION: usize = 99;
    pub const GROUP_STATIC_CORRECTION: usize = 101;
    pub const TOTAL_STATIC_APPLIED: usize = 103;
    pub const LAG_TIME_A: usize = 105;
    pub const LAG_TIME_B: usize = 107;
    pub const DELAY_RECORDING_TIME: usize = 109;
    pub const MUTE_TIME_START: usize = 111;
    pub const MUTE_TIME_END: usize = 113;
    pub const NO_SAMPLES_IN_TRACE: usize = 115;
    pub const SAMPLE_INTERVAL_OF_TRACE: usize = 117;
    pub const GAIN_TYPE: usize = 119;
    pub const INSTRUMENT_GAIN_CONSTANT: usize = 121;
    pub const INSTRUMENT_INITIAL_GAIN: usize = 123;
    pub const CORRELATED: usize = 125;
    pub const SWEEP_FREQUENCY_AT_START: usize = 127;
    pub const SWEEP_FREQUENCY_AT_END: usize = 129;
    pub const SWEEP_LENGTH: usize = 131;
    pub const SWEEP_TYPE: usize = 133;
    pub const SWEEP_TRACE_TAPER_LENGTH_AT_START: usize = 135;
    pub const SWEEP_TRACE_TAPER_LENGTH_AT_END: usize = 137;
    pub const TAPER_TYPE: usize = 139;
    pub const ALIAS_FILTER_FREQUENCY: usize = 141;
    pub const ALIAS_FILTER_SLOPE: usize = 143;
    pub const NOTCH_FILTER_FREQUENCY: usize = 145;
    pub const NOTCH_FILTER_SLOPE: usize = 147;
    pub const LOW_CUT_FREQUENCY: usize = 149;
    pub const HIGH_CUT_FREQUENCY: usize = 151;
    pub const LOW_CUT_SLOPE: usize = 153;
    pub const HIGH_CUT_SLOPE: usize = 155;
    pub const YEAR_RECORDED: usize = 157;
    pub const DAY_OF_YEAR: usize = 159;
    pub const HOUR_OF_DAY: usize = 161;
    pub const MINUTE_OF_HOUR: usize = 163;
    pub const SECOND_OF_MINUTE: usize = 165;
    pub const TIME_BASE_CODE: usize = 167;
    pub const TRACE_WEIGHTING_FACTOR: usize = 169;
    pub const GEOPHONE_GROUP_NUMBER_ROLL_POS1: usize = 171;
    pub const GEOPHONE_GROUP_NUMBER_FIRST_TRACE_ORIG_FIELD: usize = 173;
    pub const GEOPHONE_GROUP_NUMBER_LAST_TRACE_ORIG_FIELD: usize = 175;
    pub const GAP_SIZE: usize = 177;
    pub const OVER_TRAVEL: usize = 179;
    pub const X_ENSEMBLE: usize = 181;
    pub const Y_ENSEMBLE: usize = 185;
    pub const INLINE_NO: usize = 189;
    pub const CROSSLINE_NO: usize = 193;
    pub const SHOT_POINT_NO: usize = 197;
    pub const SHOT_POINT_SCALAR: usize = 201;
    pub const TRACE_VALUE_MEASUREMENT_UNIT: usize = 203;
    pub const TRANSDUCTION_CONSTANT_MANTISSA: usize = 205;
    pub const TRANSDUCTION_CONSTANT_POWER: usize = 209;
    pub const TRANSDUCTION_UNITS: usize = 211;
    pub const TRACE_IDENTIFIER: usize = 213;
    pub const TIME_SCALAR_TRACE_HEADER: usize = 215;
    pub const SOURCE_TYPE: usize = 217;
    pub const SOURCE_ENERGY_DIRECTION_V: usize = 219;
    pub const SOURCE_ENERGY_DIRECTION_IL: usize = 221;
    pub const SOURCE_ENERGY_DIRECTION_XL: usize = 223;
    pub const SOURCE_MEASUREMENT_MANTISSA: usize = 225;
    pub const SOURCE_MEASUREMENT_EXPONENT: usize = 229;
    pub const SOURCE_MEASUREMENT_UNIT: usize = 231;
    /// Not part of the numeric catalogue: 8 raw bytes, bytes 233-240.
    pub const TRACE_NAME: usize = 233;
}

/// Binary header field byte offsets, 1-based from the start of the 400-byte binary header
/// (i.e. `offset_from_3200`, not the absolute file offset).
pub mod binary_field {
    pub const JOB_ID: usize = 1;
    pub const LINE_NUMBER: usize = 5;
    pub const REEL_NUMBER: usize = 9;
    pub const NO_TRACES: usize = 13;
    pub const NO_AUX_TRACES: usize = 15;
    pub const SAMPLE_INTERVAL: usize = 17;
    pub const SAMPLE_INTERVAL_ORIGINAL: usize = 19;
    pub const NO_SAMPLES: usize = 21;
    pub const NO_SAMPLES_ORIGINAL: usize = 23;
    pub const SAMPLE_FORMAT_CODE: usize = 25;
    pub const ENSEMBLE_FOLD: usize = 27;
    pub const SORTING_CODE: usize = 29;
    pub const VERTICAL_SUM: usize = 31;
    pub const SWEEP_FREQUENCY_START: usize = 33;
    pub const SWEEP_FREQUENCY_END: usize = 35;
    pub const SWEEP_LENGTH: usize = 37;
    pub const SWEEP_TYPE: usize = 39;
    pub const SWEEP_CHANNEL_TRACE_NO: usize = 41;
    pub const SWEEP_TAPER_AT_START: usize = 43;
    pub const SWEEP_TAPER_AT_END: usize = 45;
    pub const TAPER_TYPE: usize = 47;
    pub const CORRELATED_TRACES: usize = 49;
    pub const BINARY_GAIN_RECOVERED: usize = 51;
    pub const AMPLITUDE_RECOVERY_METHOD: usize = 53;
    pub const MEASUREMENT_SYSTEM: usize = 55;
    pub const IMPULSE_SIGNAL_POLARITY: usize = 57;
    pub const VIBRATORY_POLARITY_CODE: usize = 59;
    pub const SEGY_REVISION_NUMBER: usize = 301;
    pub const FIXED_LENGTH_TRACE_FLAG: usize = 303;
    pub const EXTENDED_HEADER_COUNT: usize = 305;
    pub const TIME_BASIS_CODE: usize = 311;
}

const TRACE_HEADER_LEN: usize = 240;
const BINARY_HEADER_LEN: usize = 400;

macro_rules! width_table {
    ($len:expr, [$(($offset:expr, $width:expr)),+ $(,)?]) => {{
        let mut table = [0u8; $len];
        $(table[$offset - 1] = $width;)+
        table
    }};
}

/// Byte width recognised at each 1-based trace header offset; `0` marks an unassigned gap.
pub static TRACE_FIELD_WIDTH: [u8; TRACE_HEADER_LEN] = width_table!(TRACE_HEADER_LEN, [
    (trace_field::TRACE_SEQUENCE_ON_LINE, 4),
    (trace_field::TRACE_SEQUENCE_IN_FILE, 4),
    (trace_field::FIELD_RECORD_NO, 4),
    (trace_field::TRACE_NO, 4),
    (trace_field::ENERGY_SOURCE_POINT_NO, 4),
    (trace_field::ENSEMBLE_NO, 4),
    (trace_field::TRACE_NO_IN_ENSEMBLE, 4),
    (trace_field::TRACE_IDENTIFICATION_CODE, 2),
    (trace_field::NO_V_SUMMED_TRACES, 2),
    (trace_field::NO_H_STACKED_TRACES, 2),
    (trace_field::DATA_USE, 2),
    (trace_field::OFFSET, 4),
    (trace_field::ELEVATION_OF_RECEIVER_GROUP, 4),
    (trace_field::SURFACE_ELEVATION_OF_SOURCE, 4),
    (trace_field::SOURCE_DEPTH, 4),
    (trace_field::DATUM_ELEVATION_OF_RECEIVER_GROUP, 4),
    (trace_field::DATUM_ELEVATION_OF_SOURCE, 4),
    (trace_field::WATER_COLUMN_HEIGHT_AT_SOURCE, 4),
    (trace_field::WATER_COLUMN_HEIGHT_AT_GROUP, 4),
    (trace_field::ELEVATION_SCALAR, 2),
    (trace_field::COORDINATE_SCALAR, 2),
    (trace_field::SOURCE_X, 4),
    (trace_field::SOURCE_Y, 4),
    (trace_field::RECEIVER_GROUP_X, 4),
    (trace_field::RECEIVER_GROUP_Y, 4),
    (trace_field::COORDINATE_UNITS, 2),
    (trace_field::WEATHING_VELOCITY, 2),
    (trace_field::SUB_WEATHERING_VELOCITY, 2),
    (trace_field::UPHOLE_TIME_AT_SOURCE, 2),
    (trace_field::UPHOLE_TIME_AT_GROUP, 2),
    (trace_field::SOURCE_STATIC_CORRECTION, 2),
    (trace_field::GROUP_STATIC_CORRECTION, 2),
    (trace_field::TOTAL_STATIC_APPLIED, 2),
    (trace_field::LAG_TIME_A, 2),
    (trace_field::LAG_TIME_B, 2),
    (trace_field::DELAY_RECORDING_TIME, 2),
    (trace_field::MUTE_TIME_START, 2),
    (trace_field::MUTE_TIME_END, 2),
    (trace_field::NO_SAMPLES_IN_TRACE, 2),
    (trace_field::SAMPLE_INTERVAL_OF_TRACE, 2),
    (trace_field::GAIN_TYPE, 2),
    (trace_field::INSTRUMENT_GAIN_CONSTANT, 2),
    (trace_field::INSTRUMENT_INITIAL_GAIN, 2),
    (trace_field::CORRELATED, 2),
    (trace_field::SWEEP_FREQUENCY_AT_START, 2),
    (trace_field::SWEEP_FREQUENCY_AT_END, 2),
    (trace_field::SWEEP_LENGTH, 2),
    (trace_field::SWEEP_TYPE, 2),
    (trace_field::SWEEP_TRACE_TAPER_LENGTH_AT_START, 2),
    (trace_field::SWEEP_TRACE_TAPER_LENGTH_AT_END, 2),
    (trace_field::TAPER_TYPE, 2),
    (trace_field::ALIAS_FILTER_FREQUENCY, 2),
    (trace_field::ALIAS_FILTER_SLOPE, 2),
    (trace_field::NOTCH_FILTER_FREQUENCY, 2),
    (trace_field::NOTCH_FILTER_SLOPE, 2),
    (trace_field::LOW_CUT_FREQUENCY, 2),
    (trace_field::HIGH_CUT_FREQUENCY, 2),
    (trace_field::LOW_CUT_SLOPE, 2),
    (trace_field::HIGH_CUT_SLOPE, 2),
    (trace_field::YEAR_RECORDED, 2),
    (trace_field::DAY_OF_YEAR, 2),
    (trace_field::HOUR_OF_DAY, 2),
    (trace_field::MINUTE_OF_HOUR, 2),
    (trace_field::SECOND_OF_MINUTE, 2),
    (trace_field::TIME_BASE_CODE, 2),
    (trace_field::TRACE_WEIGHTING_FACTOR, 2),
    (trace_field::GEOPHONE_GROUP_NUMBER_ROLL_POS1, 2),
    (trace_field::GEOPHONE_GROUP_NUMBER_FIRST_TRACE_ORIG_FIELD, 2),
    (trace_field::GEOPHONE_GROUP_NUMBER_LAST_TRACE_ORIG_FIELD, 2),
    (trace_field::GAP_SIZE, 2),
    (trace_field::OVER_TRAVEL, 2),
    (trace_field::X_ENSEMBLE, 4),
    (trace_field::Y_ENSEMBLE, 4),
    (trace_field::INLINE_NO, 4),
    (trace_field::CROSSLINE_NO, 4),
    (trace_field::SHOT_POINT_NO, 4),
    (trace_field::SHOT_POINT_SCALAR, 2),
    (trace_field::TRACE_VALUE_MEASUREMENT_UNIT, 2),
    (trace_field::TRANSDUCTION_CONSTANT_MANTISSA, 4),
    (trace_field::TRANSDUCTION_CONSTANT_POWER, 2),
    (trace_field::TRANSDUCTION_UNITS, 2),
    (trace_field::TRACE_IDENTIFIER, 2),
    (trace_field::TIME_SCALAR_TRACE_HEADER, 2),
    (trace_field::SOURCE_TYPE, 2),
    (trace_field::SOURCE_ENERGY_DIRECTION_V, 2),
    (trace_field::SOURCE_ENERGY_DIRECTION_IL, 2),
    (trace_field::SOURCE_ENERGY_DIRECTION_XL, 2),
    (trace_field::SOURCE_MEASUREMENT_MANTISSA, 4),
    (trace_field::SOURCE_MEASUREMENT_EXPONENT, 2),
    (trace_field::SOURCE_MEASUREMENT_UNIT, 2),
]);

/// Byte width recognised at each 1-based binary header offset (`offset_from_3200`); `0` marks
/// an unassigned gap.
pub static BINARY_FIELD_WIDTH: [u8; BINARY_HEADER_LEN] = width_table!(BINARY_HEADER_LEN, [
    (binary_field::JOB_ID, 4),
    (binary_field::LINE_NUMBER, 4),
    (binary_field::REEL_NUMBER, 4),
    (binary_field::NO_TRACES, 2),
    (binary_field::NO_AUX_TRACES, 2),
    (binary_field::SAMPLE_INTERVAL, 2),
    (binary_field::SAMPLE_INTERVAL_ORIGINAL, 2),
    (binary_field::NO_SAMPLES, 2),
    (binary_field::NO_SAMPLES_ORIGINAL, 2),
    (binary_field::SAMPLE_FORMAT_CODE, 2),
    (binary_field::ENSEMBLE_FOLD, 2),
    (binary_field::SORTING_CODE, 2),
    (binary_field::VERTICAL_SUM, 2),
    (binary_field::SWEEP_FREQUENCY_START, 2),
    (binary_field::SWEEP_FREQUENCY_END, 2),
    (binary_field::SWEEP_LENGTH, 2),
    (binary_field::SWEEP_TYPE, 2),
    (binary_field::SWEEP_CHANNEL_TRACE_NO, 2),
    (binary_field::SWEEP_TAPER_AT_START, 2),
    (binary_field::SWEEP_TAPER_AT_END, 2),
    (binary_field::TAPER_TYPE, 2),
    (binary_field::CORRELATED_TRACES, 2),
    (binary_field::BINARY_GAIN_RECOVERED, 2),
    (binary_field::AMPLITUDE_RECOVERY_METHOD, 2),
    (binary_field::MEASUREMENT_SYSTEM, 2),
    (binary_field::IMPULSE_SIGNAL_POLARITY, 2),
    (binary_field::VIBRATORY_POLARITY_CODE, 2),
    (binary_field::SEGY_REVISION_NUMBER, 2),
    (binary_field::FIXED_LENGTH_TRACE_FLAG, 2),
    (binary_field::EXTENDED_HEADER_COUNT, 2),
    (binary_field::TIME_BASIS_CODE, 2),
]);

/// Width recognised at a 1-based trace header `offset`, or `None` if unassigned or out of range.
pub fn trace_field_width(offset: usize) -> Option<u8> {
    field_width(&TRACE_FIELD_WIDTH, offset)
}

/// Width recognised at a 1-based binary header `offset`, or `None` if unassigned or out of range.
pub fn binary_field_width(offset: usize) -> Option<u8> {
    field_width(&BINARY_FIELD_WIDTH, offset)
}

fn field_width(table: &[u8], offset: usize) -> Option<u8> {
    if offset == 0 {
        return None;
    }
    match table.get(offset - 1) {
        Some(0) | None => None,
        Some(w) => Some(*w),
    }
}

/// Validate a 1-based trace header offset against an expected width, returning the 0-based
/// buffer index to read or write at.
pub fn validate_trace_offset(offset: usize, expected_width: u8) -> Result<usize, SegyError> {
    validate_offset(&TRACE_FIELD_WIDTH, offset, expected_width)
}

/// Validate a 1-based binary header offset against an expected width, returning the 0-based
/// buffer index to read or write at.
pub fn validate_binary_offset(offset: usize, expected_width: u8) -> Result<usize, SegyError> {
    validate_offset(&BINARY_FIELD_WIDTH, offset, expected_width)
}

fn validate_offset(table: &[u8], offset: usize, expected_width: u8) -> Result<usize, SegyError> {
    match field_width(table, offset) {
        Some(w) if w == expected_width => Ok(offset - 1),
        _ => Err(SegyError::InvalidField { offset }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_offset_matches_segyio_convention() {
        // SEGY_TR_INLINE == 189 in the reference C library; buffer index is 188.
        assert_eq!(trace_field_width(trace_field::INLINE_NO), Some(4));
        assert_eq!(validate_trace_offset(trace_field::INLINE_NO, 4).unwrap(), 188);
    }

    #[test]
    fn offset_field_matches_segyio_convention() {
        // SEGY_TR_OFFSET == 37.
        assert_eq!(validate_trace_offset(trace_field::OFFSET, 4).unwrap(), 36);
    }

    #[test]
    fn unassigned_gap_is_rejected() {
        assert_eq!(trace_field_width(2), None);
        assert!(validate_trace_offset(2, 4).is_err());
    }

    #[test]
    fn out_of_range_offset_is_rejected() {
        assert_eq!(trace_field_width(241), None);
        assert_eq!(binary_field_width(401), None);
    }

    #[test]
    fn wrong_width_is_rejected() {
        let err = validate_trace_offset(trace_field::INLINE_NO, 2).unwrap_err();
        assert_eq!(err.code(), SegyError::InvalidField { offset: 0 }.code());
    }

    #[test]
    fn binary_job_id_matches_segyio_convention() {
        assert_eq!(validate_binary_offset(binary_field::JOB_ID, 4).unwrap(), 0);
    }

    #[test]
    fn trace_name_is_outside_numeric_catalogue() {
        assert_eq!(trace_field_width(trace_field::TRACE_NAME), None);
    }
}
