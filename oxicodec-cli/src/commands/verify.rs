//! Verify command implementation.

use super::CodecKind;
use crate::utils::{CliResult, create_spinner, resolve_path};
use oxicodec_core::{Codec, Result};
use oxicodec_huffman::HuffmanCodec;
use oxicodec_lz77::{Lz77Codec, Lz77Config};
use oxicodec_lz78::Lz78Codec;
use std::fs;
use std::path::PathBuf;

/// Round-trip `data` through one codec.
pub fn verify_codec(kind: CodecKind, data: &[u8], window: usize) -> Result<bool> {
    match kind {
        CodecKind::Lz77 => Lz77Codec::new(Lz77Config::new(window)?).verify(data),
        CodecKind::Lz78 => Lz78Codec.verify(data),
        CodecKind::Huffman => HuffmanCodec.verify(data),
    }
}

pub fn cmd_verify(
    input: Option<PathBuf>,
    codec: Option<CodecKind>,
    window: usize,
    verbose: bool,
    quiet: bool,
) -> CliResult<()> {
    let input = resolve_path(input, "Enter name of file to verify", None)?;
    let data = fs::read(&input)?;
    let codecs: Vec<CodecKind> = match codec {
        Some(kind) => vec![kind],
        None => CodecKind::ALL.to_vec(),
    };

    println!("Testing {} ({} bytes)", input.display(), data.len());

    let mut ok_count = 0usize;
    let mut errors: Vec<(&str, String)> = Vec::new();

    for kind in &codecs {
        let spinner = create_spinner(&format!("Round-tripping {}", kind.name()), !quiet);
        let outcome = verify_codec(*kind, &data, window);
        spinner.finish_and_clear();

        match outcome {
            Ok(true) => {
                ok_count += 1;
                if verbose {
                    println!("  OK: {}", kind.name());
                }
            }
            Ok(false) => {
                errors.push((kind.name(), "output differs from input".to_string()));
                if verbose {
                    println!("  FAILED: {} - output differs from input", kind.name());
                }
            }
            Err(e) => {
                errors.push((kind.name(), e.to_string()));
                if verbose {
                    println!("  FAILED: {} - {}", kind.name(), e);
                }
            }
        }
    }

    println!();
    println!(
        "Tested {} codecs: {} OK, {} failed",
        codecs.len(),
        ok_count,
        errors.len()
    );

    if !errors.is_empty() {
        if !verbose {
            println!();
            println!("Errors:");
            for (name, err) in &errors {
                println!("  {}: {}", name, err);
            }
        }
        return Err("verification failed".into());
    }

    println!("All codecs OK");
    Ok(())
}
