//! Word Tiles CLI
//!
//! Usage:
//!   word-tiles
//!
//! Writes one SVG tile per built-in word into `./images`. Set `RUST_LOG=debug`
//! to see each file as it is written.

use std::io::Write;

use clap::Parser;
use log::LevelFilter;

use word_tiles::{Generator, DEFAULT_OUTPUT_DIR};

#[derive(Parser)]
#[command(name = "word-tiles", version)]
#[command(about = "Generate SVG word tiles into ./images")]
struct Cli {}

fn init_logging() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "[{}] - {}", record.level(), record.args()))
        .init();
}

fn main() {
    let _cli = Cli::parse();
    init_logging();

    log::info!("Running {}-{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    if let Err(e) = Generator::new(DEFAULT_OUTPUT_DIR).run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
