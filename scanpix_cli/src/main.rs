//! Entry point for Scanpix's CLI tool.

mod cli_error;
mod commands;

use clap::{Parser, Subcommand};

use commands::{bundle_command, preview_command, print_command};

#[derive(Parser)]
#[command(
  name = "scanpix",
  bin_name = "scanpix",
  version = env!("CARGO_PKG_VERSION"),
  about = "Scanpix is a CLI app for decoding and bundling single-frame \
    DICOM scan slices",
  max_term_width = 80
)]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  #[command(about = bundle_command::ABOUT)]
  Bundle(bundle_command::BundleArgs),

  #[command(about = preview_command::ABOUT)]
  Preview(preview_command::PreviewArgs),

  #[command(about = print_command::ABOUT)]
  Print(print_command::PrintArgs),
}

fn main() -> Result<(), ()> {
  let cli = Cli::parse();

  match &cli.command {
    Commands::Bundle(args) => bundle_command::run(args),
    Commands::Preview(args) => preview_command::run(args),
    Commands::Print(args) => print_command::run(args),
  }
}
