//! Parsing and serialising the ergonomic `TapeLabel`/`BinHeader`/`TraceHeader` structs from/to
//! raw header bytes. This is the layer the typed structs in `segy-core::header_structs` sit on
//! top of: the structs themselves stay plain data, and every byte in/out of them passes through
//! here, which in turn is built on `segy-core`'s `codec` conversions.
use num::FromPrimitive;
use std::convert::TryInto;

use segy_core::enums::*;
use segy_core::errors::SegyError;
use segy_core::settings::SegySettings;
use segy_core::{BinHeader, TapeLabel, TraceHeader};

use segy_core::codec::{converter_chooser, writer_chooser};

/// Parse a [`TapeLabel`] from its fixed 128-byte on-disk layout. Tape labels are always ASCII.
pub fn tape_label_from_bytes(bytes: &[u8]) -> Result<TapeLabel, SegyError> {
    let max_block_size: u32 = String::from_utf8(bytes[19..29].to_vec())
        .map_err(|e| SegyError::invalid_args(e.to_string()))?
        .trim()
        .parse()
        .map_err(|e: std::num::ParseIntError| SegyError::invalid_args(e.to_string()))?;

    Ok(TapeLabel {
        storage_unit_seq_no: bytes[0..4].try_into().unwrap(),
        segy_revision_no: bytes[4..9].try_into().unwrap(),
        storage_unit_structure: bytes[9..15].try_into().unwrap(),
        binding_number: bytes[15..19].try_into().unwrap(),
        max_block_size,
        producing_organisation_code: bytes[29..39].try_into().unwrap(),
        creation_date: bytes[39..50].try_into().unwrap(),
        serial_number: bytes[50..62].try_into().unwrap(),
        external_label: bytes[68..80].try_into().unwrap(),
        recording_entity: bytes[80..104].try_into().unwrap(),
        extra: bytes[104..118].try_into().unwrap(),
    })
}

/// Serialise a [`TapeLabel`] back to its 128-byte on-disk layout.
pub fn tape_label_as_bytes(label: &TapeLabel) -> Result<Vec<u8>, SegyError> {
    let mbs_string = label.max_block_size.to_string();
    if mbs_string.len() > 10 {
        return Err(SegyError::invalid_args(format!(
            "tape label max block size '{}' does not fit the 10-byte field",
            mbs_string
        )));
    }
    let mut max_block_size = vec![b'0'; 10 - mbs_string.len()];
    max_block_size.extend_from_slice(mbs_string.as_bytes());

    let mut out = Vec::with_capacity(128);
    out.extend_from_slice(&label.storage_unit_seq_no);
    out.extend_from_slice(&label.segy_revision_no);
    out.extend_from_slice(&label.storage_unit_structure);
    out.extend_from_slice(&label.binding_number);
    out.extend_from_slice(&max_block_size);
    out.extend_from_slice(&label.producing_organisation_code);
    out.extend_from_slice(&label.creation_date);
    out.extend_from_slice(&label.serial_number);
    // Bytes 62..68 are reserved and carry no named field.
    out.extend_from_slice(&[0; 6]);
    out.extend_from_slice(&label.external_label);
    out.extend_from_slice(&label.recording_entity);
    out.extend_from_slice(&label.extra);
    // The last ten bytes of the tape label are reserved.
    out.extend_from_slice(&[0; 10]);
    debug_assert_eq!(out.len(), 128);
    Ok(out)
}

/// Parse a [`BinHeader`] from its fixed 400-byte on-disk layout. `settings` may override the
/// endianness, sample format, coordinate units, and fixed-length-trace-flag interpretation,
/// mirroring the reference family's override knobs.
pub fn bin_header_from_bytes(bytes: &[u8], settings: &SegySettings) -> Result<BinHeader, SegyError> {
    if bytes.len() != segy_core::BIN_HEADER_LEN {
        return Err(SegyError::invalid_args(format!(
            "binary header must be {} bytes, got {}",
            segy_core::BIN_HEADER_LEN,
            bytes.len()
        )));
    }

    let le = settings.get_override_to_le().unwrap_or(bytes[96..100] == [1, 2, 3, 4]);

    let u16_from = if le { u16::from_le_bytes } else { u16::from_be_bytes };
    let i16_from = if le { i16::from_le_bytes } else { i16::from_be_bytes };
    let u32_from = if le { u32::from_le_bytes } else { u32::from_be_bytes };

    let sample_format_code = match settings.get_override_trace_format() {
        Some(code) => code,
        None => SampleFormatCode::new(u16_from(bytes[24..26].try_into().unwrap()))?,
    };

    let measurement_system = match settings.get_override_coordinate_units() {
        Some(units) => units,
        None => MeasurementSystem::new(u16_from(bytes[54..56].try_into().unwrap())),
    };

    Ok(BinHeader {
        job_id: u32_from(bytes[0..4].try_into().unwrap()),
        line_number: u32_from(bytes[4..8].try_into().unwrap()),
        reel_number: u32_from(bytes[8..12].try_into().unwrap()),
        no_traces: u16_from(bytes[12..14].try_into().unwrap()),
        no_aux_traces: u16_from(bytes[14..16].try_into().unwrap()),
        sample_interval: u16_from(bytes[16..18].try_into().unwrap()),
        sample_interval_original: u16_from(bytes[18..20].try_into().unwrap()),
        no_samples: u16_from(bytes[20..22].try_into().unwrap()),
        no_samples_original: u16_from(bytes[22..24].try_into().unwrap()),
        sample_format_code,
        ensemble_fold: u16_from(bytes[26..28].try_into().unwrap()),
        sorting_code: TraceSortingCode::new(i16_from(bytes[28..30].try_into().unwrap())),
        vertical_sum: u16_from(bytes[30..32].try_into().unwrap()),
        sweep_frequency_start: u16_from(bytes[32..34].try_into().unwrap()),
        sweep_frequency_end: u16_from(bytes[34..36].try_into().unwrap()),
        sweep_length: u16_from(bytes[36..38].try_into().unwrap()),
        sweep_type: SweepTypeCode::new(u16_from(bytes[38..40].try_into().unwrap())),
        sweep_channel_trace_no: u16_from(bytes[40..42].try_into().unwrap()),
        sweep_taper_at_start: u16_from(bytes[42..44].try_into().unwrap()),
        sweep_taper_at_end: u16_from(bytes[44..46].try_into().unwrap()),
        taper_type: TaperType::new(u16_from(bytes[46..48].try_into().unwrap())),
        correlated_traces: CorrelatedDataTraces::new(u16_from(bytes[48..50].try_into().unwrap())),
        binary_gain_recovered: BinaryGainRecovered::new(u16_from(bytes[50..52].try_into().unwrap())),
        amplitude_recovery_method: AmplitudeRecoveryMethod::new(u16_from(bytes[52..54].try_into().unwrap())),
        measurement_system,
        impulse_signal_polarity: ImpulseSignalPolarity::new(u16_from(bytes[56..58].try_into().unwrap())),
        vibratory_polarity_code: VibratoryPolarityCode::new(u16_from(bytes[58..60].try_into().unwrap())),
        segy_revision_number: [bytes[300], bytes[301]],
        fixed_length_trace_flag: FixedLengthTraces::new(u16_from(bytes[302..304].try_into().unwrap()))?,
        extended_header_count: u32_from(bytes[306..310].try_into().unwrap()),
        time_basis_code: TimeBasisCode::new(u16_from(bytes[310..312].try_into().unwrap())),
        binary_flag_direction_is_le: le,
    })
}

/// Serialise a [`BinHeader`] back to its 400-byte on-disk layout.
pub fn bin_header_as_bytes(header: &BinHeader) -> Result<Vec<u8>, SegyError> {
    use num::ToPrimitive;

    let le = header.binary_flag_direction_is_le;
    let u16_to = if le { u16::to_le_bytes } else { u16::to_be_bytes };
    let i16_to = if le { i16::to_le_bytes } else { i16::to_be_bytes };
    let u32_to = if le { u32::to_le_bytes } else { u32::to_be_bytes };

    let mut out = Vec::with_capacity(400);
    out.extend_from_slice(&u32_to(header.job_id));
    out.extend_from_slice(&u32_to(header.line_number));
    out.extend_from_slice(&u32_to(header.reel_number));
    out.extend_from_slice(&u16_to(header.no_traces));
    out.extend_from_slice(&u16_to(header.no_aux_traces));
    out.extend_from_slice(&u16_to(header.sample_interval));
    out.extend_from_slice(&u16_to(header.sample_interval_original));
    out.extend_from_slice(&u16_to(header.no_samples));
    out.extend_from_slice(&u16_to(header.no_samples_original));
    out.extend_from_slice(&u16_to(header.sample_format_code.to_u16().unwrap()));
    out.extend_from_slice(&u16_to(header.ensemble_fold));
    out.extend_from_slice(&i16_to(header.sorting_code.to_i16().unwrap()));
    out.extend_from_slice(&u16_to(header.vertical_sum));
    out.extend_from_slice(&u16_to(header.sweep_frequency_start));
    out.extend_from_slice(&u16_to(header.sweep_frequency_end));
    out.extend_from_slice(&u16_to(header.sweep_length));
    out.extend_from_slice(&u16_to(header.sweep_type.to_u16().unwrap()));
    out.extend_from_slice(&u16_to(header.sweep_channel_trace_no));
    out.extend_from_slice(&u16_to(header.sweep_taper_at_start));
    out.extend_from_slice(&u16_to(header.sweep_taper_at_end));
    out.extend_from_slice(&u16_to(header.taper_type.to_u16().unwrap()));
    out.extend_from_slice(&u16_to(header.correlated_traces.to_u16().unwrap()));
    out.extend_from_slice(&u16_to(header.binary_gain_recovered.to_u16().unwrap()));
    out.extend_from_slice(&u16_to(header.amplitude_recovery_method.to_u16().unwrap()));
    out.extend_from_slice(&u16_to(header.measurement_system.to_u16().unwrap()));
    out.extend_from_slice(&u16_to(header.impulse_signal_polarity.to_u16().unwrap()));
    out.extend_from_slice(&u16_to(header.vibratory_polarity_code.to_u16().unwrap()));
    // Bytes 60..96 and 100..300 of the binary header are unassigned; only 96..100 (endianness
    // flag) interrupts the gap.
    out.extend_from_slice(&[0; 36]);
    out.extend_from_slice(&if le { [1, 2, 3, 4] } else { [4, 3, 2, 1] });
    out.extend_from_slice(&[0; 200]);
    debug_assert_eq!(out.len(), 300);
    out.extend_from_slice(&header.segy_revision_number);
    out.extend_from_slice(&u16_to(header.fixed_length_trace_flag.to_u16().unwrap()));
    out.extend_from_slice(&[0, 0]);
    out.extend_from_slice(&u32_to(header.extended_header_count));
    out.extend_from_slice(&u16_to(header.time_basis_code.to_u16().unwrap()));
    debug_assert_eq!(out.len(), 312);
    out.extend_from_slice(&[0; 88]);
    debug_assert_eq!(out.len(), 400);
    Ok(out)
}

/// Parse a [`TraceHeader`] from its fixed 240-byte on-disk layout, using `bin_header`'s
/// endianness and `settings`' byte-index/override knobs for the dimension fields.
pub fn trace_header_from_bytes(
    bytes: &[u8],
    bin_header: &BinHeader,
    settings: &SegySettings,
    idx: usize,
) -> Result<TraceHeader, SegyError> {
    if bytes.len() != segy_core::TRACE_HEADER_LEN {
        return Err(SegyError::invalid_args(format!(
            "trace header must be {} bytes, got {}",
            segy_core::TRACE_HEADER_LEN,
            bytes.len()
        )));
    }

    let le = bin_header.binary_flag_direction_is_le;
    let u16_from = if le { u16::from_le_bytes } else { u16::from_be_bytes };
    let i16_from = if le { i16::from_le_bytes } else { i16::from_be_bytes };
    let i32_from = if le { i32::from_le_bytes } else { i32::from_be_bytes };

    let inline_no_rng = settings.get_inline_no_bidx()..(4 + settings.get_inline_no_bidx());
    let xline_no_rng = settings.get_crossline_no_bidx()..(4 + settings.get_crossline_no_bidx());
    let x_ensemble_rng = settings.get_x_ensemble_bidx()..(4 + settings.get_x_ensemble_bidx());
    let y_ensemble_rng = settings.get_y_ensemble_bidx()..(4 + settings.get_y_ensemble_bidx());

    let trace_name: [u8; 8] = if le {
        bytes[232..240].try_into().unwrap()
    } else {
        let reversed: Vec<u8> = bytes[232..240].iter().copied().rev().collect();
        reversed[..].try_into().unwrap()
    };

    let coordinate_format = settings.get_override_coordinate_format().unwrap_or(SampleFormatCode::Int32);
    let coordinate_parser = converter_chooser(coordinate_format, le)?;
    let coord_parser = |x: [u8; 4]| -> Result<i32, SegyError> {
        let float: f32 = coordinate_parser(&x)?;
        i32::from_f32(float).ok_or_else(|| {
            SegyError::invalid_args(format!("coordinate value {} in format {:?} has no i32 representation", float, coordinate_format))
        })
    };

    let coordinate_scalar = match settings.get_override_coordinate_scaling() {
        Some(scaling) => scaling as i16,
        None => i16_from(bytes[70..72].try_into().unwrap()),
    };

    let trace_identification_code = match settings.get_override_trace_id_code() {
        Some(id) => id,
        None => TraceIdCode::new(i16_from(bytes[28..30].try_into().unwrap())),
    };

    let trace_sequence_on_line = i32_from(bytes[0..4].try_into().unwrap());
    let trace_sequence_in_file = i32_from(bytes[4..8].try_into().unwrap());
    let field_record_no = i32_from(bytes[8..12].try_into().unwrap());
    let trace_no = i32_from(bytes[12..16].try_into().unwrap());
    let trace_no_in_ensemble = i32_from(bytes[24..28].try_into().unwrap());

    let order_idx = match settings.get_order_trace_by() {
        OrderTraceBy::Default => idx,
        OrderTraceBy::TraceSequenceOnLine => trace_sequence_on_line as usize,
        OrderTraceBy::TraceSequenceInFile => trace_sequence_in_file as usize,
        OrderTraceBy::FieldRecordNo => field_record_no as usize,
        OrderTraceBy::TraceNo => trace_no as usize,
        OrderTraceBy::TraceNoInEnsemble => trace_no_in_ensemble as usize,
    };

    let (inline_no, crossline_no) = match settings.get_override_dim_x() {
        Some(x) => ((order_idx / x as usize) as i32, (order_idx % x as usize) as i32),
        None => (
            i32_from(bytes[inline_no_rng].try_into().unwrap()),
            i32_from(bytes[xline_no_rng].try_into().unwrap()),
        ),
    };

    Ok(TraceHeader {
        trace_sequence_on_line,
        trace_sequence_in_file,
        field_record_no,
        trace_no,
        energy_source_point_no: i32_from(bytes[16..20].try_into().unwrap()),
        ensemble_no: i32_from(bytes[20..24].try_into().unwrap()),
        trace_no_in_ensemble,
        trace_identification_code,
        no_v_summed_traces: u16_from(bytes[30..32].try_into().unwrap()),
        no_h_stacked_traces: u16_from(bytes[32..34].try_into().unwrap()),
        data_use: DataUse::new(u16_from(bytes[34..36].try_into().unwrap())),
        source_to_receiver_distance: coord_parser(bytes[36..40].try_into().unwrap())?,
        elevation_of_receiver_group: coord_parser(bytes[40..44].try_into().unwrap())?,
        surface_elevation_of_source: coord_parser(bytes[44..48].try_into().unwrap())?,
        source_depth: coord_parser(bytes[48..52].try_into().unwrap())?,
        datum_elevation_of_receiver_group: coord_parser(bytes[52..56].try_into().unwrap())?,
        datum_elevation_of_source: coord_parser(bytes[56..60].try_into().unwrap())?,
        water_column_height_at_source: coord_parser(bytes[60..64].try_into().unwrap())?,
        water_column_height_at_group: coord_parser(bytes[64..68].try_into().unwrap())?,
        elevation_scalar: i16_from(bytes[68..70].try_into().unwrap()),
        coordinate_scalar,
        source_x: coord_parser(bytes[72..76].try_into().unwrap())?,
        source_y: coord_parser(bytes[76..80].try_into().unwrap())?,
        receiver_group_x: coord_parser(bytes[80..84].try_into().unwrap())?,
        receiver_group_y: coord_parser(bytes[84..88].try_into().unwrap())?,
        coordinate_units: CoordinateUnits::new(u16_from(bytes[88..90].try_into().unwrap())),
        weathing_velocity: u16_from(bytes[90..92].try_into().unwrap()),
        sub_weathering_velocity: u16_from(bytes[92..94].try_into().unwrap()),
        uphole_time_at_source: u16_from(bytes[94..96].try_into().unwrap()),
        uphole_time_at_group: u16_from(bytes[96..98].try_into().unwrap()),
        source_static_correction: u16_from(bytes[98..100].try_into().unwrap()),
        group_static_correction: u16_from(bytes[100..102].try_into().unwrap()),
        total_static_applied: u16_from(bytes[102..104].try_into().unwrap()),
        lag_time_a: u16_from(bytes[104..106].try_into().unwrap()),
        lag_time_b: u16_from(bytes[106..108].try_into().unwrap()),
        delay_recording_time: u16_from(bytes[108..110].try_into().unwrap()),
        mute_time_start: u16_from(bytes[110..112].try_into().unwrap()),
        mute_time_end: u16_from(bytes[112..114].try_into().unwrap()),
        no_samples_in_trace: u16_from(bytes[114..116].try_into().unwrap()),
        sample_interval_of_trace: u16_from(bytes[116..118].try_into().unwrap()),
        gain_type: GainType::new(u16_from(bytes[118..120].try_into().unwrap())),
        instrument_gain_constant: u16_from(bytes[120..122].try_into().unwrap()),
        instrument_initial_gain: u16_from(bytes[122..124].try_into().unwrap()),
        correlated: Correlated::new(u16_from(bytes[124..126].try_into().unwrap())),
        sweep_frequency_at_start: u16_from(bytes[126..128].try_into().unwrap()),
        sweep_frequency_at_end: u16_from(bytes[128..130].try_into().unwrap()),
        sweep_length: u16_from(bytes[130..132].try_into().unwrap()),
        sweep_type: SweepType::new(u16_from(bytes[132..134].try_into().unwrap())),
        sweep_trace_taper_length_at_start: u16_from(bytes[134..136].try_into().unwrap()),
        sweep_trace_taper_length_at_end: u16_from(bytes[136..138].try_into().unwrap()),
        taper_type: TaperType::new(u16_from(bytes[138..140].try_into().unwrap())),
        alias_filter_frequency: u16_from(bytes[140..142].try_into().unwrap()),
        alias_filter_slope: u16_from(bytes[142..144].try_into().unwrap()),
        notch_filter_frequency: u16_from(bytes[144..146].try_into().unwrap()),
        notch_filter_slope: u16_from(bytes[146..148].try_into().unwrap()),
        low_cut_frequency: u16_from(bytes[148..150].try_into().unwrap()),
        high_cut_frequency: u16_from(bytes[150..152].try_into().unwrap()),
        low_cut_slope: u16_from(bytes[152..154].try_into().unwrap()),
        high_cut_slope: u16_from(bytes[154..156].try_into().unwrap()),
        year_recorded: u16_from(bytes[156..158].try_into().unwrap()),
        day_of_year: u16_from(bytes[158..160].try_into().unwrap()),
        hour_of_day: u16_from(bytes[160..162].try_into().unwrap()),
        minute_of_hour: u16_from(bytes[162..164].try_into().unwrap()),
        second_of_minute: u16_from(bytes[164..166].try_into().unwrap()),
        time_base_code: TimeBasisCode::new(u16_from(bytes[166..168].try_into().unwrap())),
        trace_weighting_factor: u16_from(bytes[168..170].try_into().unwrap()),
        geophone_group_number_roll_pos1: u16_from(bytes[170..172].try_into().unwrap()),
        geophone_group_number_first_trace_orig_field: u16_from(bytes[172..174].try_into().unwrap()),
        geophone_group_number_last_trace_orig_field: u16_from(bytes[174..176].try_into().unwrap()),
        gap_size: u16_from(bytes[176..178].try_into().unwrap()),
        over_travel: OverTravel::new(u16_from(bytes[178..180].try_into().unwrap())),
        x_ensemble: coord_parser(bytes[x_ensemble_rng].try_into().unwrap())?,
        y_ensemble: coord_parser(bytes[y_ensemble_rng].try_into().unwrap())?,
        inline_no,
        crossline_no,
        shot_point_no: i32_from(bytes[196..200].try_into().unwrap()),
        shot_point_scalar: u16_from(bytes[200..202].try_into().unwrap()),
        trace_value_measurement_unit: TraceValueUnit::new(i16_from(bytes[202..204].try_into().unwrap())),
        transduction_constant_mantissa: i32_from(bytes[204..208].try_into().unwrap()),
        transduction_constant_power: u16_from(bytes[208..210].try_into().unwrap()),
        transduction_units: TransductionUnits::new(i16_from(bytes[210..212].try_into().unwrap())),
        trace_identifier: u16_from(bytes[212..214].try_into().unwrap()),
        time_scalar_trace_header: u16_from(bytes[214..216].try_into().unwrap()),
        source_type: SourceType::new(i16_from(bytes[216..218].try_into().unwrap())),
        source_energy_direction_v: u16_from(bytes[218..220].try_into().unwrap()),
        source_energy_direction_il: u16_from(bytes[220..222].try_into().unwrap()),
        source_energy_direction_xl: u16_from(bytes[222..224].try_into().unwrap()),
        source_measurement_mantissa: i32_from(bytes[224..228].try_into().unwrap()),
        source_measurement_exponent: u16_from(bytes[228..230].try_into().unwrap()),
        source_measurement_unit: SourceMeasurementUnit::new(i16_from(bytes[230..232].try_into().unwrap())),
        trace_name,
    })
}

/// Serialise a [`TraceHeader`] back to its 240-byte on-disk layout, applying `settings`' byte
/// index overrides for the dimension fields and `bin_header`'s coordinate format/endianness.
pub fn trace_header_as_bytes(header: &TraceHeader, settings: &SegySettings, bin_header: &BinHeader) -> Result<Vec<u8>, SegyError> {
    use num::ToPrimitive;

    let le = bin_header.binary_flag_direction_is_le;
    let u16_to = if le { u16::to_le_bytes } else { u16::to_be_bytes };
    let i16_to = if le { i16::to_le_bytes } else { i16::to_be_bytes };
    let i32_to = if le { i32::to_le_bytes } else { i32::to_be_bytes };

    let coordinate_format = settings.get_override_coordinate_format().unwrap_or(SampleFormatCode::Int32);
    let cb_inner = writer_chooser(coordinate_format)?;
    let coord_byter = |x: i32| -> Result<[u8; 4], SegyError> {
        let bytes = cb_inner(x as f32);
        bytes[..].try_into().map_err(SegyError::from)
    };

    let mut out = vec![0u8; 240];
    let set = |out: &mut [u8], idx: usize, bytes: &[u8]| out[idx..idx + bytes.len()].copy_from_slice(bytes);

    set(&mut out, 0, &i32_to(header.trace_sequence_on_line));
    set(&mut out, 4, &i32_to(header.trace_sequence_in_file));
    set(&mut out, 8, &i32_to(header.field_record_no));
    set(&mut out, 12, &i32_to(header.trace_no));
    set(&mut out, 16, &i32_to(header.energy_source_point_no));
    set(&mut out, 20, &i32_to(header.ensemble_no));
    set(&mut out, 24, &i32_to(header.trace_no_in_ensemble));
    set(&mut out, 28, &i16_to(header.trace_identification_code.to_i16().unwrap()));
    set(&mut out, 30, &u16_to(header.no_v_summed_traces));
    set(&mut out, 32, &u16_to(header.no_h_stacked_traces));
    set(&mut out, 34, &u16_to(header.data_use.to_u16().unwrap()));
    set(&mut out, 36, &coord_byter(header.source_to_receiver_distance)?);
    set(&mut out, 40, &coord_byter(header.elevation_of_receiver_group)?);
    set(&mut out, 44, &coord_byter(header.surface_elevation_of_source)?);
    set(&mut out, 48, &coord_byter(header.source_depth)?);
    set(&mut out, 52, &coord_byter(header.datum_elevation_of_receiver_group)?);
    set(&mut out, 56, &coord_byter(header.datum_elevation_of_source)?);
    set(&mut out, 60, &coord_byter(header.water_column_height_at_source)?);
    set(&mut out, 64, &coord_byter(header.water_column_height_at_group)?);
    set(&mut out, 68, &i16_to(header.elevation_scalar));
    set(&mut out, 70, &i16_to(header.coordinate_scalar));
    set(&mut out, 72, &coord_byter(header.source_x)?);
    set(&mut out, 76, &coord_byter(header.source_y)?);
    set(&mut out, 80, &coord_byter(header.receiver_group_x)?);
    set(&mut out, 84, &coord_byter(header.receiver_group_y)?);
    set(&mut out, 88, &u16_to(header.coordinate_units.to_u16().unwrap()));
    set(&mut out, 90, &u16_to(header.weathing_velocity));
    set(&mut out, 92, &u16_to(header.sub_weathering_velocity));
    set(&mut out, 94, &u16_to(header.uphole_time_at_source));
    set(&mut out, 96, &u16_to(header.uphole_time_at_group));
    set(&mut out, 98, &u16_to(header.source_static_correction));
    set(&mut out, 100, &u16_to(header.group_static_correction));
    set(&mut out, 102, &u16_to(header.total_static_applied));
    set(&mut out, 104, &u16_to(header.lag_time_a));
    set(&mut out, 106, &u16_to(header.lag_time_b));
    set(&mut out, 108, &u16_to(header.delay_recording_time));
    set(&mut out, 110, &u16_to(header.mute_time_start));
    set(&mut out, 112, &u16_to(header.mute_time_end));
    set(&mut out, 114, &u16_to(header.no_samples_in_trace));
    set(&mut out, 116, &u16_to(header.sample_interval_of_trace));
    set(&mut out, 118, &u16_to(header.gain_type.to_u16().unwrap()));
    set(&mut out, 120, &u16_to(header.instrument_gain_constant));
    set(&mut out, 122, &u16_to(header.instrument_initial_gain));
    set(&mut out, 124, &u16_to(header.correlated.to_u16().unwrap()));
    set(&mut out, 126, &u16_to(header.sweep_frequency_at_start));
    set(&mut out, 128, &u16_to(header.sweep_frequency_at_end));
    set(&mut out, 130, &u16_to(header.sweep_length));
    set(&mut out, 132, &u16_to(header.sweep_type.to_u16().unwrap()));
    set(&mut out, 134, &u16_to(header.sweep_trace_taper_length_at_start));
    set(&mut out, 136, &u16_to(header.sweep_trace_taper_length_at_end));
    set(&mut out, 138, &u16_to(header.taper_type.to_u16().unwrap()));
    set(&mut out, 140, &u16_to(header.alias_filter_frequency));
    set(&mut out, 142, &u16_to(header.alias_filter_slope));
    set(&mut out, 144, &u16_to(header.notch_filter_frequency));
    set(&mut out, 146, &u16_to(header.notch_filter_slope));
    set(&mut out, 148, &u16_to(header.low_cut_frequency));
    set(&mut out, 150, &u16_to(header.high_cut_frequency));
    set(&mut out, 152, &u16_to(header.low_cut_slope));
    set(&mut out, 154, &u16_to(header.high_cut_slope));
    set(&mut out, 156, &u16_to(header.year_recorded));
    set(&mut out, 158, &u16_to(header.day_of_year));
    set(&mut out, 160, &u16_to(header.hour_of_day));
    set(&mut out, 162, &u16_to(header.minute_of_hour));
    set(&mut out, 164, &u16_to(header.second_of_minute));
    set(&mut out, 166, &u16_to(header.time_base_code.to_u16().unwrap()));
    set(&mut out, 168, &u16_to(header.trace_weighting_factor));
    set(&mut out, 170, &u16_to(header.geophone_group_number_roll_pos1));
    set(&mut out, 172, &u16_to(header.geophone_group_number_first_trace_orig_field));
    set(&mut out, 174, &u16_to(header.geophone_group_number_last_trace_orig_field));
    set(&mut out, 176, &u16_to(header.gap_size));
    set(&mut out, 178, &u16_to(header.over_travel.to_u16().unwrap()));
    set(&mut out, 196, &i32_to(header.shot_point_no));
    set(&mut out, 200, &u16_to(header.shot_point_scalar));
    set(&mut out, 202, &i16_to(header.trace_value_measurement_unit.to_i16().unwrap()));
    set(&mut out, 204, &i32_to(header.transduction_constant_mantissa));
    set(&mut out, 208, &u16_to(header.transduction_constant_power));
    set(&mut out, 210, &i16_to(header.transduction_units.to_i16().unwrap()));
    set(&mut out, 212, &u16_to(header.trace_identifier));
    set(&mut out, 214, &u16_to(header.time_scalar_trace_header));
    set(&mut out, 216, &i16_to(header.source_type.to_i16().unwrap()));
    set(&mut out, 218, &u16_to(header.source_energy_direction_v));
    set(&mut out, 220, &u16_to(header.source_energy_direction_il));
    set(&mut out, 222, &u16_to(header.source_energy_direction_xl));
    set(&mut out, 224, &i32_to(header.source_measurement_mantissa));
    set(&mut out, 228, &u16_to(header.source_measurement_exponent));
    set(&mut out, 230, &i16_to(header.source_measurement_unit.to_i16().unwrap()));

    let trace_name: [u8; 8] = if le {
        header.trace_name
    } else {
        let reversed: Vec<u8> = header.trace_name.iter().copied().rev().collect();
        reversed[..].try_into().unwrap()
    };
    set(&mut out, 232, &trace_name);

    // Settings-driven overrides land last: they may legitimately collide with fields already
    // written above, and the override wins, matching the reference family's write-path contract.
    set(&mut out, settings.get_x_ensemble_bidx(), &coord_byter(header.x_ensemble)?);
    set(&mut out, settings.get_y_ensemble_bidx(), &coord_byter(header.y_ensemble)?);
    set(&mut out, settings.get_inline_no_bidx(), &i32_to(header.inline_no));
    set(&mut out, settings.get_crossline_no_bidx(), &i32_to(header.crossline_no));

    debug_assert_eq!(out.len(), 240);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bin_header_roundtrips_through_bytes() {
        let mut header = BinHeader::default();
        header.no_samples = 50;
        header.sample_format_code = SampleFormatCode::Float32;
        header.binary_flag_direction_is_le = false;

        let bytes = bin_header_as_bytes(&header).unwrap();
        let settings = SegySettings::default();
        let parsed = bin_header_from_bytes(&bytes, &settings).unwrap();
        assert_eq!(parsed.no_samples, 50);
        assert_eq!(parsed.sample_format_code, SampleFormatCode::Float32);
        assert!(!parsed.binary_flag_direction_is_le);
    }

    #[test]
    fn trace_header_roundtrips_inline_crossline() {
        let bin_header = BinHeader::default();
        let settings = SegySettings::default();
        let mut header = TraceHeader::default();
        header.inline_no = 3;
        header.crossline_no = 21;

        let bytes = trace_header_as_bytes(&header, &settings, &bin_header).unwrap();
        let parsed = trace_header_from_bytes(&bytes, &bin_header, &settings, 0).unwrap();
        assert_eq!(parsed.inline_no, 3);
        assert_eq!(parsed.crossline_no, 21);
    }

    #[test]
    fn bin_header_rejects_wrong_length() {
        let settings = SegySettings::default();
        let err = bin_header_from_bytes(&[0u8; 10], &settings).unwrap_err();
        assert!(matches!(err, SegyError::InvalidArgs { .. }));
    }
}
