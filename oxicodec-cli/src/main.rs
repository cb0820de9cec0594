//! OxiCodec CLI - classical lossless codecs
//!
//! A Pure Rust utility for LZ77, LZ78 and static Huffman coding.

mod commands;
mod utils;

use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use commands::{
    CodecKind, CompressOptions, DEFAULT_TABLE, DecompressOptions, TableFormatArg, cmd_compress,
    cmd_decompress, cmd_stats, cmd_tree, cmd_verify,
};
use log::LevelFilter;
use oxicodec_lz77::DEFAULT_WINDOW;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "oxicodec")]
#[command(author, version, about = "Classical lossless codecs - LZ77, LZ78 and Huffman")]
#[command(long_about = "
OxiCodec is a Pure Rust implementation of three classical lossless codecs.
Supported codecs: LZ77 (sliding window), LZ78 (dictionary), Huffman (static)

Huffman output is a packed bit stream plus a code table file; LZ77 and LZ78
token streams are stored as JSON.

Examples:
  oxicodec compress input.txt
  oxicodec decompress input.cmp --table codes.txt
  oxicodec compress input.txt --codec lz77 --window 4096
  oxicodec decompress input.txt.lz77.json --codec lz77
  oxicodec verify input.txt
  oxicodec stats input.txt --json
  oxicodec tree --table codes.txt
")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress progress output and logging
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file
    #[command(alias = "c")]
    Compress {
        /// File to compress (prompted for if omitted)
        input: Option<PathBuf>,

        /// Codec to use
        #[arg(short, long, value_enum, default_value_t = CodecKind::Huffman)]
        codec: CodecKind,

        /// Output file [default: <stem>.cmp, or <input>.lz77.json / <input>.lz78.json]
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// LZ77 search window size
        #[arg(short, long, default_value_t = DEFAULT_WINDOW)]
        window: usize,

        /// Huffman code table file to write
        #[arg(short, long, default_value = DEFAULT_TABLE)]
        table: PathBuf,

        /// Huffman code table format
        #[arg(long, value_enum, default_value_t = TableFormatArg::Legacy)]
        table_format: TableFormatArg,

        /// Print the tokens (or Huffman code table) produced
        #[arg(short = 's', long)]
        show_tokens: bool,
    },

    /// Decompress a file
    #[command(alias = "d")]
    Decompress {
        /// File to decompress (prompted for if omitted)
        input: Option<PathBuf>,

        /// Codec the file was compressed with
        #[arg(short, long, value_enum, default_value_t = CodecKind::Huffman)]
        codec: CodecKind,

        /// Output file [default: Decompressed.txt, or the input without its token suffix]
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Huffman code table file (prompted for if omitted)
        #[arg(short, long)]
        table: Option<PathBuf>,

        /// Huffman code table format
        #[arg(long, value_enum, default_value_t = TableFormatArg::Legacy)]
        table_format: TableFormatArg,

        /// Print the Huffman decoding tree
        #[arg(long)]
        show_tree: bool,
    },

    /// Round-trip a file through one or all codecs in memory
    #[command(alias = "t")]
    Verify {
        /// File to verify (prompted for if omitted)
        input: Option<PathBuf>,

        /// Codec to verify (all if omitted)
        #[arg(short, long, value_enum)]
        codec: Option<CodecKind>,

        /// LZ77 search window size
        #[arg(short, long, default_value_t = DEFAULT_WINDOW)]
        window: usize,
    },

    /// Show frequencies, codes and sizes for every codec
    #[command(alias = "i")]
    Stats {
        /// File to analyse (prompted for if omitted)
        input: Option<PathBuf>,

        /// LZ77 search window size
        #[arg(short, long, default_value_t = DEFAULT_WINDOW)]
        window: usize,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Print a Huffman tree sideways
    Tree {
        /// File to build the tree from
        #[arg(conflicts_with = "table")]
        input: Option<PathBuf>,

        /// Code table to rebuild the tree from
        #[arg(short, long)]
        table: Option<PathBuf>,

        /// Huffman code table format
        #[arg(long, value_enum, default_value_t = TableFormatArg::Legacy)]
        table_format: TableFormatArg,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Map `-v`/`-q` to a log level.
fn log_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Off;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn init_logging(level: LevelFilter) {
    if let Err(e) = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Warning: could not initialise logging: {}", e);
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(log_level(cli.verbose, cli.quiet));

    let quiet = cli.quiet;
    let result = match cli.command {
        Commands::Compress {
            input,
            codec,
            output,
            window,
            table,
            table_format,
            show_tokens,
        } => cmd_compress(
            input,
            &CompressOptions {
                codec,
                output,
                window,
                table,
                table_format,
                show_tokens,
                quiet,
            },
        ),
        Commands::Decompress {
            input,
            codec,
            output,
            table,
            table_format,
            show_tree,
        } => cmd_decompress(
            input,
            &DecompressOptions {
                codec,
                output,
                table,
                table_format,
                show_tree,
                quiet,
            },
        ),
        Commands::Verify {
            input,
            codec,
            window,
        } => cmd_verify(input, codec, window, cli.verbose > 0, quiet),
        Commands::Stats {
            input,
            window,
            json,
        } => cmd_stats(input, window, json),
        Commands::Tree {
            input,
            table,
            table_format,
        } => cmd_tree(input, table, table_format),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "oxicodec", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
