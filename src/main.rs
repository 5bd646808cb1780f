/*!
 * Command-line interface for packfs
 */

use std::io;
use std::process;

use clap::{CommandFactory, Parser};

use packfs::config::{Args, Config};
use packfs::error::Result;
use packfs::format;
use packfs::scanner::Scanner;
use packfs::writer::ArchiveWriter;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // Generate shell completions and exit
    if let Some(shell) = args.generate {
        let mut cmd = Args::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
        return;
    }

    // Create configuration
    let config = Config::from_args(args);

    if let Err(err) = run(&config) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run(config: &Config) -> Result<()> {
    // Validate configuration
    config.validate()?;

    // Collect entries, serialize, emit
    let archive = Scanner::new(config.clone()).scan()?;
    let data = format::format(&archive);
    ArchiveWriter::new(config.clone()).write(&data)
}
