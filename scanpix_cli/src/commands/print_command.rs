use std::io::IsTerminal;

use clap::Args;
use owo_colors::OwoColorize;

use scanpix::core::{dictionary, ScanpixError};

use crate::cli_error::CliError;

pub const ABOUT: &str =
  "Prints the metadata elements of a DICOM slice file";

#[derive(Args)]
pub struct PrintArgs {
  input_filename: String,

  #[arg(
    long,
    short,
    help = "\
      Whether to print output using color and bold text. By default this is \
      set based on whether there is an active output terminal that supports \
      colored output."
  )]
  styled: Option<bool>,
}

pub fn run(args: &PrintArgs) -> Result<(), ()> {
  let styled = args.styled.unwrap_or_else(|| {
    std::io::stdout().is_terminal()
      && supports_color::on(supports_color::Stream::Stdout).is_some()
  });

  match perform_print(&args.input_filename, styled) {
    Ok(()) => Ok(()),

    Err(e) => {
      e.print(&format!("printing file \"{}\"", args.input_filename));
      Err(())
    }
  }
}

fn perform_print(input_filename: &str, styled: bool) -> Result<(), CliError> {
  let buffer =
    std::fs::read(input_filename).map_err(|e| CliError::FileError {
      when: "Reading file".to_string(),
      details: e.to_string(),
    })?;

  let table = scanpix::parse::parse(&buffer).map_err(CliError::ParseFailed)?;

  for (tag, element) in table.iter() {
    let tag_name = dictionary::tag_name(*tag);

    if styled {
      println!(
        "{} {} {} ({} bytes)",
        tag.blue(),
        element.vr,
        tag_name.bold(),
        element.length
      );
    } else {
      println!(
        "{} {} {} ({} bytes)",
        tag, element.vr, tag_name, element.length
      );
    }
  }

  Ok(())
}
