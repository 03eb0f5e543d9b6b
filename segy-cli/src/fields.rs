//! Name tables for the two CLI field dumpers. Offsets and widths come straight from
//! `segy_core::catalogue`; this module only adds the display names the C tooling this crate
//! diffs against expects.
use segy_core::catalogue::{binary_field, binary_field_width, trace_field, trace_field_width};

/// One printable binary-header field: this crate's name, the Seismic-Unix `bhed` short name, and
/// the 1-based offset to look it up with [`segy_core::catalogue::binary_field_width`].
pub struct BinFieldEntry {
    pub name: &'static str,
    pub su_name: &'static str,
    pub offset: usize,
}

/// One printable trace-header field: this crate's name, the upstream `segyio` `SEGY_TR_*` name,
/// and the 1-based offset.
pub struct TraceFieldEntry {
    pub name: &'static str,
    pub segyio_name: &'static str,
    pub offset: usize,
}

/// Every recognised binary-header field, in offset order.
pub static BIN_FIELDS: &[BinFieldEntry] = &[
    BinFieldEntry { name: "JOB_ID", su_name: "jobid", offset: binary_field::JOB_ID },
    BinFieldEntry { name: "LINE_NUMBER", su_name: "lino", offset: binary_field::LINE_NUMBER },
    BinFieldEntry { name: "REEL_NUMBER", su_name: "reno", offset: binary_field::REEL_NUMBER },
    BinFieldEntry { name: "NO_TRACES", su_name: "ntrpr", offset: binary_field::NO_TRACES },
    BinFieldEntry { name: "NO_AUX_TRACES", su_name: "nart", offset: binary_field::NO_AUX_TRACES },
    BinFieldEntry { name: "SAMPLE_INTERVAL", su_name: "hdt", offset: binary_field::SAMPLE_INTERVAL },
    BinFieldEntry { name: "SAMPLE_INTERVAL_ORIGINAL", su_name: "dto", offset: binary_field::SAMPLE_INTERVAL_ORIGINAL },
    BinFieldEntry { name: "NO_SAMPLES", su_name: "hns", offset: binary_field::NO_SAMPLES },
    BinFieldEntry { name: "NO_SAMPLES_ORIGINAL", su_name: "nso", offset: binary_field::NO_SAMPLES_ORIGINAL },
    BinFieldEntry { name: "SAMPLE_FORMAT_CODE", su_name: "format", offset: binary_field::SAMPLE_FORMAT_CODE },
    BinFieldEntry { name: "ENSEMBLE_FOLD", su_name: "fold", offset: binary_field::ENSEMBLE_FOLD },
    BinFieldEntry { name: "SORTING_CODE", su_name: "tsort", offset: binary_field::SORTING_CODE },
    BinFieldEntry { name: "VERTICAL_SUM", su_name: "vscode", offset: binary_field::VERTICAL_SUM },
    BinFieldEntry { name: "SWEEP_FREQUENCY_START", su_name: "hsfs", offset: binary_field::SWEEP_FREQUENCY_START },
    BinFieldEntry { name: "SWEEP_FREQUENCY_END", su_name: "hsfe", offset: binary_field::SWEEP_FREQUENCY_END },
    BinFieldEntry { name: "SWEEP_LENGTH", su_name: "hslen", offset: binary_field::SWEEP_LENGTH },
    BinFieldEntry { name: "SWEEP_TYPE", su_name: "hstyp", offset: binary_field::SWEEP_TYPE },
    BinFieldEntry { name: "SWEEP_CHANNEL_TRACE_NO", su_name: "schn", offset: binary_field::SWEEP_CHANNEL_TRACE_NO },
    BinFieldEntry { name: "SWEEP_TAPER_AT_START", su_name: "hstas", offset: binary_field::SWEEP_TAPER_AT_START },
    BinFieldEntry { name: "SWEEP_TAPER_AT_END", su_name: "hstae", offset: binary_field::SWEEP_TAPER_AT_END },
    BinFieldEntry { name: "TAPER_TYPE", su_name: "htatyp", offset: binary_field::TAPER_TYPE },
    BinFieldEntry { name: "CORRELATED_TRACES", su_name: "hcorr", offset: binary_field::CORRELATED_TRACES },
    BinFieldEntry { name: "BINARY_GAIN_RECOVERED", su_name: "bgrcv", offset: binary_field::BINARY_GAIN_RECOVERED },
    BinFieldEntry { name: "AMPLITUDE_RECOVERY_METHOD", su_name: "rcvm", offset: binary_field::AMPLITUDE_RECOVERY_METHOD },
    BinFieldEntry { name: "MEASUREMENT_SYSTEM", su_name: "mfeet", offset: binary_field::MEASUREMENT_SYSTEM },
    BinFieldEntry { name: "IMPULSE_SIGNAL_POLARITY", su_name: "polyt", offset: binary_field::IMPULSE_SIGNAL_POLARITY },
    BinFieldEntry { name: "VIBRATORY_POLARITY_CODE", su_name: "vpol", offset: binary_field::VIBRATORY_POLARITY_CODE },
    BinFieldEntry { name: "SEGY_REVISION_NUMBER", su_name: "rev", offset: binary_field::SEGY_REVISION_NUMBER },
    BinFieldEntry { name: "FIXED_LENGTH_TRACE_FLAG", su_name: "trflag", offset: binary_field::FIXED_LENGTH_TRACE_FLAG },
    BinFieldEntry { name: "EXTENDED_HEADER_COUNT", su_name: "extnumhdr", offset: binary_field::EXTENDED_HEADER_COUNT },
    BinFieldEntry { name: "TIME_BASIS_CODE", su_name: "timbasc", offset: binary_field::TIME_BASIS_CODE },
];

/// Every recognised trace-header field, in offset order.
pub static TRACE_FIELDS: &[TraceFieldEntry] = &[
    TraceFieldEntry { name: "TRACE_SEQUENCE_ON_LINE", segyio_name: "SEGY_TR_SEQ_LINE", offset: trace_field::TRACE_SEQUENCE_ON_LINE },
    TraceFieldEntry { name: "TRACE_SEQUENCE_IN_FILE", segyio_name: "SEGY_TR_SEQ_FILE", offset: trace_field::TRACE_SEQUENCE_IN_FILE },
    TraceFieldEntry { name: "FIELD_RECORD_NO", segyio_name: "SEGY_TR_FIELD_RECORD", offset: trace_field::FIELD_RECORD_NO },
    TraceFieldEntry { name: "TRACE_NO", segyio_name: "SEGY_TR_NUMBER_ORIG_FIELD", offset: trace_field::TRACE_NO },
    TraceFieldEntry { name: "ENERGY_SOURCE_POINT_NO", segyio_name: "SEGY_TR_ENERGY_SOURCE_POINT", offset: trace_field::ENERGY_SOURCE_POINT_NO },
    TraceFieldEntry { name: "ENSEMBLE_NO", segyio_name: "SEGY_TR_ENSEMBLE", offset: trace_field::ENSEMBLE_NO },
    TraceFieldEntry { name: "TRACE_NO_IN_ENSEMBLE", segyio_name: "SEGY_TR_NUM_IN_ENSEMBLE", offset: trace_field::TRACE_NO_IN_ENSEMBLE },
    TraceFieldEntry { name: "TRACE_IDENTIFICATION_CODE", segyio_name: "SEGY_TR_TRACE_ID", offset: trace_field::TRACE_IDENTIFICATION_CODE },
    TraceFieldEntry { name: "NO_V_SUMMED_TRACES", segyio_name: "SEGY_TR_SUMMED_TRACES", offset: trace_field::NO_V_SUMMED_TRACES },
    TraceFieldEntry { name: "NO_H_STACKED_TRACES", segyio_name: "SEGY_TR_STACKED_TRACES", offset: trace_field::NO_H_STACKED_TRACES },
    TraceFieldEntry { name: "DATA_USE", segyio_name: "SEGY_TR_DATA_USE", offset: trace_field::DATA_USE },
    TraceFieldEntry { name: "OFFSET", segyio_name: "SEGY_TR_OFFSET", offset: trace_field::OFFSET },
    TraceFieldEntry { name: "ELEVATION_OF_RECEIVER_GROUP", segyio_name: "SEGY_TR_RECV_GROUP_ELEV", offset: trace_field::ELEVATION_OF_RECEIVER_GROUP },
    TraceFieldEntry { name: "SURFACE_ELEVATION_OF_SOURCE", segyio_name: "SEGY_TR_SOURCE_SURF_ELEV", offset: trace_field::SURFACE_ELEVATION_OF_SOURCE },
    TraceFieldEntry { name: "SOURCE_DEPTH", segyio_name: "SEGY_TR_SOURCE_DEPTH", offset: trace_field::SOURCE_DEPTH },
    TraceFieldEntry { name: "DATUM_ELEVATION_OF_RECEIVER_GROUP", segyio_name: "SEGY_TR_RECV_DATUM_ELEV", offset: trace_field::DATUM_ELEVATION_OF_RECEIVER_GROUP },
    TraceFieldEntry { name: "DATUM_ELEVATION_OF_SOURCE", segyio_name: "SEGY_TR_SOURCE_DATUM_ELEV", offset: trace_field::DATUM_ELEVATION_OF_SOURCE },
    TraceFieldEntry { name: "WATER_COLUMN_HEIGHT_AT_SOURCE", segyio_name: "SEGY_TR_SOURCE_WATER_DEPTH", offset: trace_field::WATER_COLUMN_HEIGHT_AT_SOURCE },
    TraceFieldEntry { name: "WATER_COLUMN_HEIGHT_AT_GROUP", segyio_name: "SEGY_TR_GROUP_WATER_DEPTH", offset: trace_field::WATER_COLUMN_HEIGHT_AT_GROUP },
    TraceFieldEntry { name: "ELEVATION_SCALAR", segyio_name: "SEGY_TR_ELEV_SCALAR", offset: trace_field::ELEVATION_SCALAR },
    TraceFieldEntry { name: "COORDINATE_SCALAR", segyio_name: "SEGY_TR_SOURCE_GROUP_SCALAR", offset: trace_field::COORDINATE_SCALAR },
    TraceFieldEntry { name: "SOURCE_X", segyio_name: "SEGY_TR_SOURCE_X", offset: trace_field::SOURCE_X },
    TraceFieldEntry { name: "SOURCE_Y", segyio_name: "SEGY_TR_SOURCE_Y", offset: trace_field::SOURCE_Y },
    TraceFieldEntry { name: "RECEIVER_GROUP_X", segyio_name: "SEGY_TR_GROUP_X", offset: trace_field::RECEIVER_GROUP_X },
    TraceFieldEntry { name: "RECEIVER_GROUP_Y", segyio_name: "SEGY_TR_GROUP_Y", offset: trace_field::RECEIVER_GROUP_Y },
    TraceFieldEntry { name: "COORDINATE_UNITS", segyio_name: "SEGY_TR_COORD_UNITS", offset: trace_field::COORDINATE_UNITS },
    TraceFieldEntry { name: "WEATHING_VELOCITY", segyio_name: "SEGY_TR_WEATHERING_VELO", offset: trace_field::WEATHING_VELOCITY },
    TraceFieldEntry { name: "SUB_WEATHERING_VELOCITY", segyio_name: "SEGY_TR_SUBWEATHERING_VELO", offset: trace_field::SUB_WEATHERING_VELOCITY },
    TraceFieldEntry { name: "UPHOLE_TIME_AT_SOURCE", segyio_name: "SEGY_TR_SOURCE_UPHOLE_TIME", offset: trace_field::UPHOLE_TIME_AT_SOURCE },
    TraceFieldEntry { name: "UPHOLE_TIME_AT_GROUP", segyio_name: "SEGY_TR_GROUP_UPHOLE_TIME", offset: trace_field::UPHOLE_TIME_AT_GROUP },
    TraceFieldEntry { name: "SOURCE_STATIC_CORRECTION", segyio_name: "SEGY_TR_SOURCE_STATIC_CORR", offset: trace_field::SOURCE_STATIC_CORRECTION },
    TraceFieldEntry { name: "GROUP_STATIC_CORRECTION", segyio_name: "SEGY_TR_GROUP_STATIC_CORR", offset: trace_field::GROUP_STATIC_CORRECTION },
    TraceFieldEntry { name: "TOTAL_STATIC_APPLIED", segyio_name: "SEGY_TR_TOT_STATIC_APPLIED", offset: trace_field::TOTAL_STATIC_APPLIED },
    TraceFieldEntry { name: "LAG_TIME_A", segyio_name: "SEGY_TR_LAG_A", offset: trace_field::LAG_TIME_A },
    TraceFieldEntry { name: "LAG_TIME_B", segyio_name: "SEGY_TR_LAG_B", offset: trace_field::LAG_TIME_B },
    TraceFieldEntry { name: "DELAY_RECORDING_TIME", segyio_name: "SEGY_TR_DELAY_REC_TIME", offset: trace_field::DELAY_RECORDING_TIME },
    TraceFieldEntry { name: "MUTE_TIME_START", segyio_name: "SEGY_TR_MUTE_TIME_START", offset: trace_field::MUTE_TIME_START },
    TraceFieldEntry { name: "MUTE_TIME_END", segyio_name: "SEGY_TR_MUTE_TIME_END", offset: trace_field::MUTE_TIME_END },
    TraceFieldEntry { name: "NO_SAMPLES_IN_TRACE", segyio_name: "SEGY_TR_SAMPLE_COUNT", offset: trace_field::NO_SAMPLES_IN_TRACE },
    TraceFieldEntry { name: "SAMPLE_INTERVAL_OF_TRACE", segyio_name: "SEGY_TR_SAMPLE_INTER", offset: trace_field::SAMPLE_INTERVAL_OF_TRACE },
    TraceFieldEntry { name: "GAIN_TYPE", segyio_name: "SEGY_TR_GAIN_TYPE", offset: trace_field::GAIN_TYPE },
    TraceFieldEntry { name: "INSTRUMENT_GAIN_CONSTANT", segyio_name: "SEGY_TR_INSTR_GAIN_CONST", offset: trace_field::INSTRUMENT_GAIN_CONSTANT },
    TraceFieldEntry { name: "INSTRUMENT_INITIAL_GAIN", segyio_name: "SEGY_TR_INSTR_INIT_GAIN", offset: trace_field::INSTRUMENT_INITIAL_GAIN },
    TraceFieldEntry { name: "CORRELATED", segyio_name: "SEGY_TR_CORRELATED", offset: trace_field::CORRELATED },
    TraceFieldEntry { name: "SWEEP_FREQUENCY_AT_START", segyio_name: "SEGY_TR_SWEEP_FREQ_START", offset: trace_field::SWEEP_FREQUENCY_AT_START },
    TraceFieldEntry { name: "SWEEP_FREQUENCY_AT_END", segyio_name: "SEGY_TR_SWEEP_FREQ_END", offset: trace_field::SWEEP_FREQUENCY_AT_END },
    TraceFieldEntry { name: "SWEEP_LENGTH", segyio_name: "SEGY_TR_SWEEP_LENGTH", offset: trace_field::SWEEP_LENGTH },
    TraceFieldEntry { name: "SWEEP_TYPE", segyio_name: "SEGY_TR_SWEEP_TYPE", offset: trace_field::SWEEP_TYPE },
    TraceFieldEntry { name: "SWEEP_TRACE_TAPER_LENGTH_AT_START", segyio_name: "SEGY_TR_SWEEP_TAPERLEN_START", offset: trace_field::SWEEP_TRACE_TAPER_LENGTH_AT_START },
    TraceFieldEntry { name: "SWEEP_TRACE_TAPER_LENGTH_AT_END", segyio_name: "SEGY_TR_SWEEP_TAPERLEN_END", offset: trace_field::SWEEP_TRACE_TAPER_LENGTH_AT_END },
    TraceFieldEntry { name: "TAPER_TYPE", segyio_name: "SEGY_TR_TAPER_TYPE", offset: trace_field::TAPER_TYPE },
    TraceFieldEntry { name: "ALIAS_FILTER_FREQUENCY", segyio_name: "SEGY_TR_ALIAS_FILT_FREQ", offset: trace_field::ALIAS_FILTER_FREQUENCY },
    TraceFieldEntry { name: "ALIAS_FILTER_SLOPE", segyio_name: "SEGY_TR_ALIAS_FILT_SLOPE", offset: trace_field::ALIAS_FILTER_SLOPE },
    TraceFieldEntry { name: "NOTCH_FILTER_FREQUENCY", segyio_name: "SEGY_TR_NOTCH_FILT_FREQ", offset: trace_field::NOTCH_FILTER_FREQUENCY },
    TraceFieldEntry { name: "NOTCH_FILTER_SLOPE", segyio_name: "SEGY_TR_NOTCH_FILT_SLOPE", offset: trace_field::NOTCH_FILTER_SLOPE },
    TraceFieldEntry { name: "LOW_CUT_FREQUENCY", segyio_name: "SEGY_TR_LOW_CUT_FREQ", offset: trace_field::LOW_CUT_FREQUENCY },
    TraceFieldEntry { name: "HIGH_CUT_FREQUENCY", segyio_name: "SEGY_TR_HIGH_CUT_FREQ", offset: trace_field::HIGH_CUT_FREQUENCY },
    TraceFieldEntry { name: "LOW_CUT_SLOPE", segyio_name: "SEGY_TR_LOW_CUT_SLOPE", offset: trace_field::LOW_CUT_SLOPE },
    TraceFieldEntry { name: "HIGH_CUT_SLOPE", segyio_name: "SEGY_TR_HIGH_CUT_SLOPE", offset: trace_field::HIGH_CUT_SLOPE },
    TraceFieldEntry { name: "YEAR_RECORDED", segyio_name: "SEGY_TR_YEAR_DATA_REC", offset: trace_field::YEAR_RECORDED },
    TraceFieldEntry { name: "DAY_OF_YEAR", segyio_name: "SEGY_TR_DAY_OF_YEAR", offset: trace_field::DAY_OF_YEAR },
    TraceFieldEntry { name: "HOUR_OF_DAY", segyio_name: "SEGY_TR_HOUR_OF_DAY", offset: trace_field::HOUR_OF_DAY },
    TraceFieldEntry { name: "MINUTE_OF_HOUR", segyio_name: "SEGY_TR_MIN_OF_HOUR", offset: trace_field::MINUTE_OF_HOUR },
    TraceFieldEntry { name: "SECOND_OF_MINUTE", segyio_name: "SEGY_TR_SEC_OF_MIN", offset: trace_field::SECOND_OF_MINUTE },
    TraceFieldEntry { name: "TIME_BASE_CODE", segyio_name: "SEGY_TR_TIME_BASE_CODE", offset: trace_field::TIME_BASE_CODE },
    TraceFieldEntry { name: "TRACE_WEIGHTING_FACTOR", segyio_name: "SEGY_TR_WEIGHTING_FAC", offset: trace_field::TRACE_WEIGHTING_FACTOR },
    TraceFieldEntry { name: "GEOPHONE_GROUP_NUMBER_ROLL_POS1", segyio_name: "SEGY_TR_GEOPHONE_GROUP_ROLL1", offset: trace_field::GEOPHONE_GROUP_NUMBER_ROLL_POS1 },
    TraceFieldEntry { name: "GEOPHONE_GROUP_NUMBER_FIRST_TRACE_ORIG_FIELD", segyio_name: "SEGY_TR_GEOPHONE_GROUP_FIRST", offset: trace_field::GEOPHONE_GROUP_NUMBER_FIRST_TRACE_ORIG_FIELD },
    TraceFieldEntry { name: "GEOPHONE_GROUP_NUMBER_LAST_TRACE_ORIG_FIELD", segyio_name: "SEGY_TR_GEOPHONE_GROUP_LAST", offset: trace_field::GEOPHONE_GROUP_NUMBER_LAST_TRACE_ORIG_FIELD },
    TraceFieldEntry { name: "GAP_SIZE", segyio_name: "SEGY_TR_GAP_SIZE", offset: trace_field::GAP_SIZE },
    TraceFieldEntry { name: "OVER_TRAVEL", segyio_name: "SEGY_TR_OVER_TRAVEL", offset: trace_field::OVER_TRAVEL },
    TraceFieldEntry { name: "X_ENSEMBLE", segyio_name: "SEGY_TR_CDP_X", offset: trace_field::X_ENSEMBLE },
    TraceFieldEntry { name: "Y_ENSEMBLE", segyio_name: "SEGY_TR_CDP_Y", offset: trace_field::Y_ENSEMBLE },
    TraceFieldEntry { name: "INLINE_NO", segyio_name: "SEGY_TR_INLINE", offset: trace_field::INLINE_NO },
    TraceFieldEntry { name: "CROSSLINE_NO", segyio_name: "SEGY_TR_CROSSLINE", offset: trace_field::CROSSLINE_NO },
    TraceFieldEntry { name: "SHOT_POINT_NO", segyio_name: "SEGY_TR_SHOT_POINT", offset: trace_field::SHOT_POINT_NO },
    TraceFieldEntry { name: "SHOT_POINT_SCALAR", segyio_name: "SEGY_TR_SHOT_POINT_SCALAR", offset: trace_field::SHOT_POINT_SCALAR },
    TraceFieldEntry { name: "TRACE_VALUE_MEASUREMENT_UNIT", segyio_name: "SEGY_TR_MEASURE_UNIT", offset: trace_field::TRACE_VALUE_MEASUREMENT_UNIT },
    TraceFieldEntry { name: "TRANSDUCTION_CONSTANT_MANTISSA", segyio_name: "SEGY_TR_TRANSDUCTION_MANT", offset: trace_field::TRANSDUCTION_CONSTANT_MANTISSA },
    TraceFieldEntry { name: "TRANSDUCTION_CONSTANT_POWER", segyio_name: "SEGY_TR_TRANSDUCTION_EXP", offset: trace_field::TRANSDUCTION_CONSTANT_POWER },
    TraceFieldEntry { name: "TRANSDUCTION_UNITS", segyio_name: "SEGY_TR_TRANSDUCTION_UNIT", offset: trace_field::TRANSDUCTION_UNITS },
    TraceFieldEntry { name: "TRACE_IDENTIFIER", segyio_name: "SEGY_TR_DEVICE_ID", offset: trace_field::TRACE_IDENTIFIER },
    TraceFieldEntry { name: "TIME_SCALAR_TRACE_HEADER", segyio_name: "SEGY_TR_SCALAR_TRACE_HEADER", offset: trace_field::TIME_SCALAR_TRACE_HEADER },
    TraceFieldEntry { name: "SOURCE_TYPE", segyio_name: "SEGY_TR_SOURCE_TYPE", offset: trace_field::SOURCE_TYPE },
    TraceFieldEntry { name: "SOURCE_ENERGY_DIRECTION_V", segyio_name: "SEGY_TR_SOURCE_ENERGY_DIR_VERT", offset: trace_field::SOURCE_ENERGY_DIRECTION_V },
    TraceFieldEntry { name: "SOURCE_ENERGY_DIRECTION_IL", segyio_name: "SEGY_TR_SOURCE_ENERGY_DIR_ILINE", offset: trace_field::SOURCE_ENERGY_DIRECTION_IL },
    TraceFieldEntry { name: "SOURCE_ENERGY_DIRECTION_XL", segyio_name: "SEGY_TR_SOURCE_ENERGY_DIR_XLINE", offset: trace_field::SOURCE_ENERGY_DIRECTION_XL },
    TraceFieldEntry { name: "SOURCE_MEASUREMENT_MANTISSA", segyio_name: "SEGY_TR_SOURCE_MEASURE_MANT", offset: trace_field::SOURCE_MEASUREMENT_MANTISSA },
    TraceFieldEntry { name: "SOURCE_MEASUREMENT_EXPONENT", segyio_name: "SEGY_TR_SOURCE_MEASURE_EXP", offset: trace_field::SOURCE_MEASUREMENT_EXPONENT },
    TraceFieldEntry { name: "SOURCE_MEASUREMENT_UNIT", segyio_name: "SEGY_TR_SOURCE_MEASURE_UNIT", offset: trace_field::SOURCE_MEASUREMENT_UNIT },
];

/// `width, value` for a recognised binary-header field; `None` if unassigned (should not happen
/// for anything drawn from [`BIN_FIELDS`]).
pub fn bin_field_width(offset: usize) -> Option<u8> {
    binary_field_width(offset)
}

/// Same as [`bin_field_width`] but for trace-header offsets.
pub fn trace_field_width_of(offset: usize) -> Option<u8> {
    trace_field_width(offset)
}

/// Reverse the `width` bytes at 1-based `offset` in place. Used by `seg-flip-endianness` to
/// generate byte-order test fixtures: a literal byte reversal, not a value reinterpretation.
pub fn reverse_field_bytes(buf: &mut [u8], offset: usize, width: u8) {
    let start = offset - 1;
    buf[start..start + width as usize].reverse();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_bin_field_has_a_known_width() {
        for field in BIN_FIELDS {
            assert!(
                bin_field_width(field.offset).is_some(),
                "{} ({}) has no width in the catalogue",
                field.name,
                field.su_name
            );
        }
    }

    #[test]
    fn every_listed_trace_field_has_a_known_width() {
        for field in TRACE_FIELDS {
            assert!(
                trace_field_width_of(field.offset).is_some(),
                "{} ({}) has no width in the catalogue",
                field.name,
                field.segyio_name
            );
        }
    }

    #[test]
    fn no_duplicate_offsets_in_either_table() {
        let mut bin_offsets: Vec<usize> = BIN_FIELDS.iter().map(|f| f.offset).collect();
        bin_offsets.sort_unstable();
        bin_offsets.dedup();
        assert_eq!(bin_offsets.len(), BIN_FIELDS.len());

        let mut trace_offsets: Vec<usize> = TRACE_FIELDS.iter().map(|f| f.offset).collect();
        trace_offsets.sort_unstable();
        trace_offsets.dedup();
        assert_eq!(trace_offsets.len(), TRACE_FIELDS.len());
    }

    #[test]
    fn reverse_field_bytes_reverses_only_the_named_span() {
        let mut buf = [1u8, 2, 3, 4, 5, 6];
        // 1-based offset 3, width 2 -> bytes at index 2..4.
        reverse_field_bytes(&mut buf, 3, 2);
        assert_eq!(buf, [1, 2, 4, 3, 5, 6]);
    }

    #[test]
    fn reverse_field_bytes_is_a_noop_for_width_one() {
        let mut buf = [9u8, 8, 7];
        reverse_field_bytes(&mut buf, 2, 1);
        assert_eq!(buf, [9, 8, 7]);
    }
}
