//! Decompress command implementation.

use super::{CodecKind, DEFAULT_DECOMPRESSED, DEFAULT_TABLE, TableFormatArg};
use crate::utils::{CliResult, create_spinner, read_json, resolve_path, strip_suffix, with_suffix};
use oxicodec_huffman::{CodeTable, HuffmanDecoder};
use oxicodec_lz77::Lz77Token;
use oxicodec_lz78::Lz78Token;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Options for decompressing a file.
pub struct DecompressOptions {
    pub codec: CodecKind,
    pub output: Option<PathBuf>,
    pub table: Option<PathBuf>,
    pub table_format: TableFormatArg,
    pub show_tree: bool,
    pub quiet: bool,
}

/// Output path used when none is given.
///
/// Huffman output always goes to `Decompressed.txt`; token files drop their
/// codec suffix, falling back to an `.out` suffix.
pub fn default_output(codec: CodecKind, input: &Path) -> PathBuf {
    match codec.token_suffix() {
        Some(suffix) => strip_suffix(input, suffix).unwrap_or_else(|| with_suffix(input, ".out")),
        None => PathBuf::from(DEFAULT_DECOMPRESSED),
    }
}

pub fn cmd_decompress(input: Option<PathBuf>, opts: &DecompressOptions) -> CliResult<()> {
    // Table first, then the compressed data.
    let table = if opts.codec == CodecKind::Huffman {
        let path = resolve_path(
            opts.table.clone(),
            "Enter name of code file",
            Some(DEFAULT_TABLE),
        )?;
        let reader = BufReader::new(File::open(&path)?);
        let table = CodeTable::read_from(reader, opts.table_format.into())?;
        log::info!("Loaded {} codes from {}", table.len(), path.display());
        Some(table)
    } else {
        None
    };

    let input = resolve_path(input, "Enter name of compressed file", None)?;
    let output = opts
        .output
        .clone()
        .unwrap_or_else(|| default_output(opts.codec, &input));

    let spinner = create_spinner("Decoding... please wait.", !opts.quiet);
    let result: CliResult<Vec<u8>> = match (opts.codec, table) {
        (CodecKind::Lz77, _) => read_json::<Vec<Lz77Token>>(&input)
            .and_then(|tokens| Ok(oxicodec_lz77::decompress(&tokens)?)),
        (CodecKind::Lz78, _) => read_json::<Vec<Lz78Token>>(&input)
            .and_then(|tokens| Ok(oxicodec_lz78::decompress(&tokens)?)),
        (CodecKind::Huffman, Some(table)) => decompress_huffman(&input, &table, opts),
        (CodecKind::Huffman, None) => Err("missing code table".into()),
    };
    spinner.finish_and_clear();
    let data = result?;

    fs::write(&output, &data)?;
    if !opts.quiet {
        println!(
            "Decompression successful! Wrote {} ({} bytes)",
            output.display(),
            data.len()
        );
    }
    Ok(())
}

fn decompress_huffman(input: &Path, table: &CodeTable, opts: &DecompressOptions) -> CliResult<Vec<u8>> {
    let decoder = HuffmanDecoder::new(table)?;
    if opts.show_tree {
        println!("Huffman decoding tree:");
        print!("{}", super::tree::render_tree(decoder.tree()));
    }

    let reader = BufReader::new(File::open(input)?);
    Ok(decoder.decode_from(reader)?)
}
