//! Compress command implementation.

use super::stats::print_code_table;
use super::{CodecKind, TableFormatArg};
use crate::utils::{CliResult, create_spinner, print_sizes, resolve_path, with_suffix, write_json};
use oxicodec_huffman::{FrequencyTable, OxiCodecError};
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};

/// Options for compressing a file.
pub struct CompressOptions {
    pub codec: CodecKind,
    pub output: Option<PathBuf>,
    pub window: usize,
    pub table: PathBuf,
    pub table_format: TableFormatArg,
    pub show_tokens: bool,
    pub quiet: bool,
}

/// Output path used when none is given.
pub fn default_output(codec: CodecKind, input: &Path) -> PathBuf {
    match codec.token_suffix() {
        Some(suffix) => with_suffix(input, suffix),
        None => input.with_extension("cmp"),
    }
}

pub fn cmd_compress(input: Option<PathBuf>, opts: &CompressOptions) -> CliResult<()> {
    let input = resolve_path(input, "Enter name of file to compress", None)?;
    let data = fs::read(&input)?;
    let output = opts
        .output
        .clone()
        .unwrap_or_else(|| default_output(opts.codec, &input));

    log::info!(
        "Compressing {} ({} bytes) with {}",
        input.display(),
        data.len(),
        opts.codec.name()
    );
    let spinner = create_spinner(
        &format!("Compressing with {}", opts.codec.name()),
        !opts.quiet,
    );

    let result = match opts.codec {
        CodecKind::Lz77 => compress_lz77(&data, &output, opts),
        CodecKind::Lz78 => compress_lz78(&data, &output, opts),
        CodecKind::Huffman => compress_huffman(&data, &output, opts),
    };
    spinner.finish_and_clear();
    let compressed_len = result?;

    if !opts.quiet {
        print_sizes(data.len() as u64, compressed_len);
        if opts.codec == CodecKind::Huffman {
            println!("Wrote: {} and {}", output.display(), opts.table.display());
        } else {
            println!("Wrote: {}", output.display());
        }
    }
    Ok(())
}

fn print_tokens<T: Display>(tokens: &[T]) {
    let line: Vec<String> = tokens.iter().map(ToString::to_string).collect();
    println!("{}", line.join(" "));
}

fn compress_lz77(data: &[u8], output: &Path, opts: &CompressOptions) -> CliResult<u64> {
    let tokens = oxicodec_lz77::compress(data, opts.window)?;
    log::debug!("LZ77 produced {} tokens", tokens.len());
    if opts.show_tokens {
        print_tokens(&tokens);
    }
    write_json(output, &tokens)?;
    Ok(fs::metadata(output)?.len())
}

fn compress_lz78(data: &[u8], output: &Path, opts: &CompressOptions) -> CliResult<u64> {
    let tokens = oxicodec_lz78::compress(data);
    log::debug!("LZ78 produced {} tokens", tokens.len());
    if opts.show_tokens {
        print_tokens(&tokens);
    }
    write_json(output, &tokens)?;
    Ok(fs::metadata(output)?.len())
}

fn compress_huffman(data: &[u8], output: &Path, opts: &CompressOptions) -> CliResult<u64> {
    let encoded = oxicodec_huffman::compress(data)?;
    if opts.show_tokens {
        print_code_table(&encoded.table, Some(&FrequencyTable::from_bytes(data)));
    }

    // An unrepresentable table must leave no files behind.
    let table_bytes = match encoded.table.to_bytes(opts.table_format.into()) {
        Ok(bytes) => bytes,
        Err(e @ OxiCodecError::AmbiguousSymbol { .. }) => {
            return Err(format!("{}; use --table-format hex for this input", e).into());
        }
        Err(e) => return Err(e.into()),
    };

    fs::write(output, &encoded.data)?;
    fs::write(&opts.table, table_bytes)?;
    log::debug!(
        "Huffman wrote {} bits ({} padding)",
        encoded.bit_len,
        encoded.padding_bits()
    );
    Ok(encoded.data.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{DecompressOptions, cmd_decompress};

    fn roundtrip(codec: CodecKind, table_format: TableFormatArg, data: &[u8]) {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.txt");
        let compressed = dir.path().join("input.out");
        let table = dir.path().join("codes.txt");
        let restored = dir.path().join("restored.txt");
        fs::write(&input, data).unwrap();

        let opts = CompressOptions {
            codec,
            output: Some(compressed.clone()),
            window: 20,
            table: table.clone(),
            table_format,
            show_tokens: false,
            quiet: true,
        };
        cmd_compress(Some(input), &opts).unwrap();

        let opts = DecompressOptions {
            codec,
            output: Some(restored.clone()),
            table: Some(table),
            table_format,
            show_tree: false,
            quiet: true,
        };
        cmd_decompress(Some(compressed), &opts).unwrap();
        assert_eq!(fs::read(restored).unwrap(), data);
    }

    #[test]
    fn test_file_roundtrip_every_codec() {
        let data = b"It was the best of times,\nit was the worst of times.\n";
        for codec in CodecKind::ALL {
            roundtrip(codec, TableFormatArg::Legacy, data);
        }
    }

    #[test]
    fn test_huffman_hex_table_file() {
        roundtrip(CodecKind::Huffman, TableFormatArg::Hex, b"snake_case \x81 bytes");
    }

    #[test]
    fn test_legacy_table_rejects_underscore_without_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.txt");
        let compressed = dir.path().join("input.cmp");
        fs::write(&input, b"snake_case").unwrap();

        let opts = CompressOptions {
            codec: CodecKind::Huffman,
            output: Some(compressed.clone()),
            window: 20,
            table: dir.path().join("codes.txt"),
            table_format: TableFormatArg::Legacy,
            show_tokens: false,
            quiet: true,
        };
        let err = cmd_compress(Some(input), &opts).unwrap_err();
        assert!(err.to_string().contains("--table-format hex"));
        assert!(!compressed.exists());
    }

    #[test]
    fn test_default_output() {
        let input = Path::new("notes/input.txt");
        assert_eq!(
            default_output(CodecKind::Huffman, input),
            PathBuf::from("notes/input.cmp")
        );
        assert_eq!(
            default_output(CodecKind::Lz77, input),
            PathBuf::from("notes/input.txt.lz77.json")
        );
        assert_eq!(
            default_output(CodecKind::Lz78, input),
            PathBuf::from("notes/input.txt.lz78.json")
        );
    }
}
