//! Print recognised trace-header fields for one or more traces of a single SEG-Y file.
use std::path::PathBuf;

use clap::Parser;
use segy_io::file_handle::FileHandle;
use segy_io::header_accessor::get_trace_field;
use segy_io::trace_io;

use segy_cli::common::{run_per_file, StreamHeader};
use segy_cli::fields::TRACE_FIELDS;

#[derive(Parser)]
#[command(about = "Print recognised trace-header fields for selected traces of a SEG-Y file")]
struct Args {
    /// Print this single trace (0-based).
    #[arg(short = 't', conflicts_with = "range")]
    trace: Option<u64>,
    /// Print traces START..STOP, stepping by STEP.
    #[arg(short = 'r', num_args = 3, value_names = ["START", "STOP", "STEP"])]
    range: Option<Vec<i64>>,
    /// Abort on the first error instead of skipping the offending trace.
    #[arg(long)]
    strict: bool,
    /// Print the upstream segyio `SEGY_TR_*` names instead of this crate's own.
    #[arg(long)]
    segyio_names: bool,
    file: PathBuf,
}

fn dump_trace(fh: &mut FileHandle, meta: &trace_io::FileMetadata, trace_no: u64, segyio_names: bool) -> Result<(), segy_core::errors::SegyError> {
    let header = trace_io::read_trace_header(fh, meta, trace_no)?;
    println!("--- trace {} ---", trace_no);
    for field in TRACE_FIELDS {
        let value = get_trace_field(&header, field.offset)?;
        let name = if segyio_names { field.segyio_name } else { field.name };
        println!("{:<46} {}", name, value);
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut fh = FileHandle::open(&args.file, "r")?;
    let header = StreamHeader::read(&mut fh)?;
    let meta = header.file_metadata(&fh)?;

    let trace_nos: Vec<u64> = if let Some(t) = args.trace {
        vec![t]
    } else if let Some(r) = &args.range {
        let (start, stop, step) = (r[0], r[1], r[2]);
        if step == 0 {
            anyhow::bail!("-r step must be non-zero");
        }
        let mut v = Vec::new();
        let mut i = start;
        while (step > 0 && i < stop) || (step < 0 && i > stop) {
            if i >= 0 {
                v.push(i as u64);
            }
            i += step;
        }
        v
    } else {
        (0..meta.tracecount).collect()
    };

    for trace_no in trace_nos {
        run_per_file(&args.file, args.strict, || dump_trace(&mut fh, &meta, trace_no, args.segyio_names))?;
    }
    Ok(())
}
