//! Print every recognised binary-header field of one or more SEG-Y files, each with its
//! Seismic-Unix-style short name.
use std::path::PathBuf;

use clap::Parser;
use segy_io::file_handle::FileHandle;
use segy_io::header_accessor::get_binary_field;

use segy_cli::common::StreamHeader;
use segy_cli::fields::BIN_FIELDS;

#[derive(Parser)]
#[command(about = "Print every recognised binary-header field, Seismic-Unix short name first")]
struct Args {
    files: Vec<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    for path in &args.files {
        let mut fh = FileHandle::open(path, "r")?;
        let header = StreamHeader::read(&mut fh)?;
        println!("==> {} <==", path.display());
        for field in BIN_FIELDS {
            let value = get_binary_field(&header.bin_header_bytes, field.offset)?;
            println!("{:<10} {:<30} {}", field.su_name, field.name, value);
        }
    }
    Ok(())
}
