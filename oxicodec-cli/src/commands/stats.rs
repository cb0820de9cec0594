//! Stats command implementation.

use crate::utils::{CliResult, print_sizes, ratio_percent, resolve_path};
use oxicodec_huffman::{CodeTable, FrequencyTable, HuffmanModel, TableFormat};
use oxicodec_lz77::{Lz77Config, Lz77Encoder};
use oxicodec_lz78::Lz78Encoder;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// JSON serializable code table record.
#[derive(Debug, Serialize, Deserialize)]
struct CodeJson {
    symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    count: Option<u64>,
    code: String,
}

/// Huffman section of the stats report.
#[derive(Debug, Serialize, Deserialize)]
struct HuffmanJson {
    distinct_bytes: usize,
    bit_len: u64,
    compressed_size: u64,
    table_size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    ratio: Option<f64>,
    codes: Vec<CodeJson>,
}

/// LZ77 section of the stats report.
#[derive(Debug, Serialize, Deserialize)]
struct Lz77Json {
    window: usize,
    tokens: usize,
    matches: usize,
}

/// LZ78 section of the stats report.
#[derive(Debug, Serialize, Deserialize)]
struct Lz78Json {
    tokens: usize,
    dictionary_size: usize,
}

/// JSON output for the stats command.
#[derive(Debug, Serialize, Deserialize)]
struct StatsJson {
    input: String,
    size: u64,
    huffman: HuffmanJson,
    lz77: Lz77Json,
    lz78: Lz78Json,
}

fn code_rows(table: &CodeTable, freqs: Option<&FrequencyTable>) -> Vec<CodeJson> {
    table
        .iter()
        .map(|(symbol, code)| CodeJson {
            symbol: symbol.to_string(),
            count: freqs.map(|f| f.get(symbol)),
            code: code.to_string(),
        })
        .collect()
}

fn print_rows(rows: &[CodeJson]) {
    println!("\tCharacter\t\tFrequency\tCode");
    println!("\t{}", "=".repeat(44));
    for row in rows {
        let count = row.count.map_or_else(String::new, |c| c.to_string());
        println!("\t    {:<12}\t{:>9}\t{}", row.symbol, count, row.code);
    }
}

/// Print the frequency/code table the way `compress --show-tokens` does.
pub fn print_code_table(table: &CodeTable, freqs: Option<&FrequencyTable>) {
    print_rows(&code_rows(table, freqs));
}

fn huffman_stats(data: &[u8]) -> CliResult<HuffmanJson> {
    let model = HuffmanModel::build(data);
    let bit_len = model.encoded_bits();
    // Hex accepts every symbol.
    let table_size = model.table().to_bytes(TableFormat::Hex)?.len() as u64;
    let compressed_size = bit_len.div_ceil(8);

    Ok(HuffmanJson {
        distinct_bytes: model.frequencies().distinct_bytes(),
        bit_len,
        compressed_size,
        table_size,
        ratio: ratio_percent(data.len() as u64, compressed_size),
        codes: code_rows(model.table(), Some(model.frequencies())),
    })
}

fn lz77_stats(data: &[u8], window: usize) -> CliResult<Lz77Json> {
    let tokens = Lz77Encoder::new(Lz77Config::new(window)?).encode(data);
    Ok(Lz77Json {
        window,
        tokens: tokens.len(),
        matches: tokens.iter().filter(|t| t.is_match()).count(),
    })
}

fn lz78_stats(data: &[u8]) -> Lz78Json {
    let mut encoder = Lz78Encoder::new();
    let tokens = encoder.encode(data);
    Lz78Json {
        tokens: tokens.len(),
        dictionary_size: encoder.dictionary_len(),
    }
}

pub fn cmd_stats(input: Option<PathBuf>, window: usize, json: bool) -> CliResult<()> {
    let input = resolve_path(input, "Enter name of file to analyse", None)?;
    let data = fs::read(&input)?;

    let stats = StatsJson {
        input: input.display().to_string(),
        size: data.len() as u64,
        huffman: huffman_stats(&data)?,
        lz77: lz77_stats(&data, window)?,
        lz78: lz78_stats(&data),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("File: {}", stats.input);
    println!();
    println!("Huffman");
    println!("=======");
    print_rows(&stats.huffman.codes);
    println!();
    print_sizes(stats.size, stats.huffman.compressed_size);
    println!("Code table           : {} bytes (hex)", stats.huffman.table_size);
    println!();
    println!("LZ77 (window {})", stats.lz77.window);
    println!("====");
    println!("Tokens               : {}", stats.lz77.tokens);
    println!("Back-references      : {}", stats.lz77.matches);
    println!();
    println!("LZ78");
    println!("====");
    println!("Tokens               : {}", stats.lz78.tokens);
    println!("Dictionary entries   : {}", stats.lz78.dictionary_size);
    Ok(())
}
