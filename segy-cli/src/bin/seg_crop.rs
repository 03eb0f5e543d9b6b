//! Copy a sub-cube of a SEG-Y file: an inline/crossline window and, optionally, a cropped sample
//! range.
use std::path::PathBuf;

use clap::Parser;
use segy_core::settings::SegySettings;
use segy_io::{SegyReader, SegyWriter};

#[derive(Parser)]
#[command(about = "Crop a SEG-Y file to an inline/crossline window and/or a sample range")]
struct Args {
    /// Minimum inline number to keep.
    #[arg(short = 'i')]
    il_min: Option<i32>,
    /// Maximum inline number to keep.
    #[arg(short = 'I')]
    il_max: Option<i32>,
    /// Minimum crossline number to keep.
    #[arg(short = 'x')]
    xl_min: Option<i32>,
    /// Maximum crossline number to keep.
    #[arg(short = 'X')]
    xl_max: Option<i32>,
    /// Start of the kept recording-time window, in milliseconds. Unset copies from the start of
    /// each trace.
    #[arg(short = 's')]
    sample_begin: Option<i64>,
    /// End of the kept recording-time window, in milliseconds. Unset copies to the end of each
    /// trace.
    #[arg(short = 'S')]
    sample_end: Option<i64>,
    /// The 1-based byte offset of the inline number field, if it differs from the standard one.
    #[arg(long)]
    il: Option<usize>,
    /// The 1-based byte offset of the crossline number field, if it differs from the standard one.
    #[arg(long)]
    xl: Option<usize>,
    /// Print the number of traces kept.
    #[arg(short = 'v')]
    verbose: bool,
    src: PathBuf,
    dst: PathBuf,
}

/// The recording-time crop window computed for a single trace: how much of its sample vector to
/// keep, and what delay-recording-time to stamp on the cropped copy.
struct Crop {
    delay: i64,
    skip: i64,
    len: i64,
}

/// Work out how much of a trace's sample vector falls inside `[sbeg, send]` (milliseconds),
/// given the trace's own delay-recording-time `t0` and sample interval `dt` (the trace's own
/// interval overrides the binary header's `dt0` when it is nonzero, matching per-trace recording
/// variations within a single file).
///
/// `sbeg < 0 && send == i64::MAX` means "no window requested": the whole trace is kept.
fn crop_window(t0: i64, trace_dt: i64, dt0: i64, samples: i64, sbeg: i64, send: i64) -> Crop {
    let dt = if trace_dt != 0 { trace_dt } else { dt0 };

    let mut d = Crop { delay: t0, skip: 0, len: samples };
    if sbeg < 0 && send == i64::MAX {
        return d;
    }

    if sbeg - t0 > 0 {
        let skip = ((sbeg - t0) * 1000) / dt;
        d.delay = t0 + ((skip * dt) / 1000);
        d.skip = skip;
        d.len -= d.skip;
    }

    if send * 1000 < (t0 * 1000) + (samples * dt) {
        let t0us = t0 * 1000;
        let sendus = send * 1000;
        d.len -= (t0us + ((samples - 1) * dt) - sendus) / dt;
    }

    d
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    if same_path(&args.src, &args.dst) {
        anyhow::bail!("SRC and DST must not be the same path");
    }

    let il_min = args.il_min.unwrap_or(i32::MIN);
    let il_max = args.il_max.unwrap_or(i32::MAX);
    let xl_min = args.xl_min.unwrap_or(i32::MIN);
    let xl_max = args.xl_max.unwrap_or(i32::MAX);
    if il_min > il_max {
        anyhow::bail!("inline window [{}, {}] is empty", il_min, il_max);
    }
    if xl_min > xl_max {
        anyhow::bail!("crossline window [{}, {}] is empty", xl_min, xl_max);
    }

    let sbeg = args.sample_begin.unwrap_or(-1);
    let send = args.sample_end.unwrap_or(i64::MAX);
    if sbeg > send {
        anyhow::bail!("sample window [{}, {}] is empty", sbeg, send);
    }

    let mut settings = SegySettings::default();
    if let Some(byte) = args.il {
        settings.set_inline_no_bidx(byte - 1)?;
    }
    if let Some(byte) = args.xl {
        settings.set_crossline_no_bidx(byte - 1)?;
    }

    let mut reader = SegyReader::open(&args.src, settings)?;
    let bin_header = reader.get_bin_header().clone();
    let src_samples = bin_header.no_samples as i64;
    let dt0 = bin_header.sample_interval as i64;

    let il_keep = reader.get_trace_idx_for_inline_min_max(il_min, il_max);
    let xl_keep = reader.get_trace_idx_for_crossline_min_max(xl_min, xl_max);
    let keep: Vec<usize> = il_keep.into_iter().filter(|i| xl_keep.contains(i)).collect();

    // The binary header declares one sample count for every trace in the file, but the crop
    // window can vary per trace when traces carry their own sample-interval override. Use the
    // window of the last kept trace, mirroring how the declared count ends up reflecting
    // whichever trace an in-place rewrite last touched.
    let mut crops = Vec::with_capacity(keep.len());
    for idx in &keep {
        let th = reader.get_trace(*idx)?.get_header();
        let crop = crop_window(
            th.delay_recording_time as i64,
            th.sample_interval_of_trace as i64,
            dt0,
            src_samples,
            sbeg,
            send,
        );
        crops.push(crop);
    }

    let mut dst_bin_header = bin_header.clone();
    if let Some(last) = crops.last() {
        dst_bin_header.no_samples = last.len as u16;
    }

    let mut writer = SegyWriter::create_file(
        &args.dst,
        SegySettings::default(),
        reader.get_text_header().to_string(),
        dst_bin_header,
        reader.get_tape_label().cloned(),
    )?;

    for (idx, crop) in keep.iter().zip(crops.iter()) {
        let mut th = reader.get_trace(*idx)?.get_header().clone();
        let samples = reader.get_trace_data_as_f32(*idx)?;
        let skip = crop.skip as usize;
        let len = crop.len as usize;
        let cropped = &samples[skip..skip + len];
        th.no_samples_in_trace = crop.len as u16;
        th.delay_recording_time = crop.delay as u16;
        writer.add_trace(th, cropped)?;
    }
    writer.flush()?;

    if args.verbose {
        println!("wrote {} of {} traces", keep.len(), reader.trace_count());
    }
    Ok(())
}

fn same_path(a: &std::path::Path, b: &std::path::Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
