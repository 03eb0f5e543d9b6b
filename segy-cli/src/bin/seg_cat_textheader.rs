//! Print the primary (and optionally extended) textual header of one or more SEG-Y files.
use std::path::PathBuf;

use clap::Parser;
use segy_core::catalogue::binary_field;
use segy_io::file_handle::FileHandle;
use segy_io::header_accessor::get_binary_field;
use segy_io::text_header;

use segy_cli::common::{run_per_file, StreamHeader};

#[derive(Parser)]
#[command(about = "Print the primary and extended textual headers of SEG-Y files")]
struct Args {
    /// Print this many extended textual headers after the primary one.
    #[arg(long, conflicts_with = "all")]
    num: Option<u32>,
    /// Print every extended textual header the binary header declares.
    #[arg(long)]
    all: bool,
    /// Abort on the first file that fails to open or parse, instead of skipping it.
    #[arg(long)]
    strict: bool,
    files: Vec<PathBuf>,
}

fn dump(path: &std::path::Path, args: &Args) -> Result<(), segy_core::errors::SegyError> {
    let mut fh = FileHandle::open(path, "r")?;
    let header = StreamHeader::read(&mut fh)?;
    let primary = text_header::read_primary(&mut fh, header.base)?;
    println!("==> {} <==", path.display());
    println!("{}", String::from_utf8_lossy(&primary));

    let declared = get_binary_field(&header.bin_header_bytes, binary_field::EXTENDED_HEADER_COUNT)?.max(0) as u32;
    let n = if args.all {
        declared
    } else {
        args.num.unwrap_or(0).min(declared)
    };
    for i in 0..n {
        let ext = text_header::read_extended(&mut fh, header.base, i)?;
        println!("--- extended header {} ---", i);
        println!("{}", String::from_utf8_lossy(&ext));
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    for path in &args.files {
        run_per_file(path, args.strict, || dump(path, &args))?;
    }
    Ok(())
}
