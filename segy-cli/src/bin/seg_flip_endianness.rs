//! Byte-reverse every recognised header field and every sample of a SEG-Y file. A support tool
//! for generating byte-order test fixtures, not a faithful endianness conversion: unrecognised
//! header bytes are left untouched and the result is not a valid file in the other byte order
//! unless every recognised field and the sample format happen to be the same width.
use std::path::PathBuf;

use clap::Parser;
use segy_core::catalogue::binary_field;
use segy_core::enums::SampleFormatCode;
use segy_io::file_handle::FileHandle;
use segy_io::header_accessor::get_binary_field;

use segy_cli::fields::{reverse_field_bytes, BIN_FIELDS, TRACE_FIELDS};

#[derive(Parser)]
#[command(about = "Byte-reverse recognised header fields and samples, for building byte-order test fixtures")]
struct Args {
    /// Override the extended textual header count instead of trusting the binary header.
    #[arg(short = 'e')]
    extended_headers: Option<u32>,
    /// Override the samples-per-trace count instead of trusting the binary header.
    #[arg(short = 's')]
    samples: Option<u32>,
    /// Override the on-disk sample width in bytes, bypassing the format lookup entirely.
    #[arg(short = 'F', conflicts_with = "format")]
    sample_bytes: Option<u32>,
    /// Override the sample format code (by name, e.g. `Float32`) instead of trusting the binary
    /// header.
    #[arg(short = 'f')]
    format: Option<String>,
    input: PathBuf,
    output: PathBuf,
}

fn parse_format(name: &str) -> anyhow::Result<SampleFormatCode> {
    use SampleFormatCode::*;
    Ok(match name {
        "IbmFloat32" => IbmFloat32,
        "Int32" => Int32,
        "Int16" => Int16,
        "FixPoint32" => FixPoint32,
        "Float32" => Float32,
        "Float64" => Float64,
        "Int24" => Int24,
        "Int8" => Int8,
        "Int64" => Int64,
        "UInt32" => UInt32,
        "UInt16" => UInt16,
        "UInt64" => UInt64,
        "UInt24" => UInt24,
        "UInt8" => UInt8,
        other => anyhow::bail!("{} is not a recognised sample format name", other),
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut fh = FileHandle::open(&args.input, "r")?;
    let base = if segy_io::reader::detect_tape_label(&mut fh)? {
        segy_core::TAPE_LABEL_LEN as u64
    } else {
        0
    };

    let mut bin_header_bytes = [0u8; segy_core::BIN_HEADER_LEN];
    fh.read_at(base + segy_core::TEXT_HEADER_LEN as u64, &mut bin_header_bytes)?;

    let declared_ext = get_binary_field(&bin_header_bytes, binary_field::EXTENDED_HEADER_COUNT)?.max(0) as u32;
    let ext_headers = args.extended_headers.unwrap_or(declared_ext);

    let declared_samples = get_binary_field(&bin_header_bytes, binary_field::NO_SAMPLES)?.max(0) as u32;
    let samples = args.samples.unwrap_or(declared_samples);

    let sample_bytes = if let Some(b) = args.sample_bytes {
        b
    } else if let Some(name) = &args.format {
        parse_format(name)?.datum_byte_length() as u32
    } else {
        let code = get_binary_field(&bin_header_bytes, binary_field::SAMPLE_FORMAT_CODE)?;
        SampleFormatCode::new(code as u16)?.datum_byte_length() as u32
    };

    let trace0 = base + 3600 + 3200 * ext_headers as u64;
    let per_trace = 240u64 + samples as u64 * sample_bytes as u64;
    let file_size = fh.size()?;
    if file_size < trace0 || per_trace == 0 || (file_size - trace0) % per_trace != 0 {
        anyhow::bail!(
            "file of {} bytes does not tile evenly into {}-byte traces starting at {}",
            file_size,
            per_trace,
            trace0
        );
    }
    let tracecount = (file_size - trace0) / per_trace;

    let mut buf = vec![0u8; file_size as usize];
    fh.read_at(0, &mut buf)?;

    for field in BIN_FIELDS {
        if let Some(width) = segy_cli::fields::bin_field_width(field.offset) {
            reverse_field_bytes(&mut buf[base as usize + 3600..base as usize + 4000], field.offset, width);
        }
    }

    for t in 0..tracecount {
        let header_start = (trace0 + t * per_trace) as usize;
        let data_start = header_start + 240;
        for field in TRACE_FIELDS {
            if let Some(width) = segy_cli::fields::trace_field_width_of(field.offset) {
                reverse_field_bytes(&mut buf[header_start..header_start + 240], field.offset, width);
            }
        }
        for s in 0..samples as usize {
            let start = data_start + s * sample_bytes as usize;
            buf[start..start + sample_bytes as usize].reverse();
        }
    }

    std::fs::write(&args.output, &buf)?;
    log::info!("flipped {} traces ({} bytes each) into {}", tracecount, per_trace, args.output.display());
    Ok(())
}
