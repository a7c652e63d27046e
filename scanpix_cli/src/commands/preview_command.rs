use std::fs::File;
use std::io::Write;
use std::path::Path;

use clap::Args;

use scanpix::core::ScanpixError;
use scanpix::raster::{self, RasterImage};

use crate::cli_error::CliError;

pub const ABOUT: &str =
  "Decodes DICOM slice files and writes each one to a PNG image file";

#[derive(Args)]
pub struct PreviewArgs {
  #[clap(
    required = true,
    help = "The names of the DICOM slice files to decode. Each file's PNG \
      is written alongside it with a '.png' suffix."
  )]
  input_filenames: Vec<String>,

  #[arg(
    long,
    short,
    help = "The directory to write PNG files into. By default each PNG is \
      written next to its input file."
  )]
  output_dir: Option<String>,

  #[arg(
    long,
    default_value_t = false,
    help = "Write an opaque black placeholder image for slice files that \
      fail to decode, instead of failing the command"
  )]
  placeholder: bool,

  #[arg(
    long,
    default_value_t = 256,
    help = "The width and height in pixels of placeholder images"
  )]
  placeholder_size: u32,
}

pub fn run(args: &PreviewArgs) -> Result<(), ()> {
  let mut result = Ok(());

  for input_filename in args.input_filenames.iter() {
    match preview_file(input_filename, args) {
      Ok(()) => (),

      Err(e) => {
        e.print(&format!("previewing file \"{}\"", input_filename));
        result = Err(());
      }
    }
  }

  result
}

fn preview_file(
  input_filename: &str,
  args: &PreviewArgs,
) -> Result<(), CliError> {
  let buffer =
    std::fs::read(input_filename).map_err(|e| CliError::FileError {
      when: "Reading file".to_string(),
      details: e.to_string(),
    })?;

  let raster = match raster::decode(&buffer) {
    Ok(raster) => raster,

    Err(e) if args.placeholder => {
      e.print(&format!(
        "decoding file \"{}\", writing a placeholder",
        input_filename
      ));

      RasterImage::placeholder(args.placeholder_size, args.placeholder_size)
    }

    Err(e) => return Err(CliError::DecodeFailed(e)),
  };

  let png = raster.to_png().map_err(|e| CliError::FileError {
    when: "Encoding PNG".to_string(),
    details: e.to_string(),
  })?;

  let output_filename = output_filename(input_filename, args);

  print!("Writing file \"{}\" ... ", output_filename);
  let _ = std::io::stdout().flush();

  write_output_file(&output_filename, &png).map_err(|e| {
    CliError::FileError {
      when: "Writing PNG file".to_string(),
      details: e.to_string(),
    }
  })?;

  println!("done");

  Ok(())
}

/// Returns the name of the PNG file to write for an input file: the input
/// filename with a `.png` suffix, placed in the output directory when one
/// was given.
///
fn output_filename(input_filename: &str, args: &PreviewArgs) -> String {
  match &args.output_dir {
    Some(output_dir) => {
      let file_name = Path::new(input_filename)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| input_filename.to_string());

      Path::new(output_dir)
        .join(format!("{}.png", file_name))
        .to_string_lossy()
        .into_owned()
    }

    None => format!("{}.png", input_filename),
  }
}

fn write_output_file(
  output_filename: &str,
  bytes: &[u8],
) -> Result<(), std::io::Error> {
  let mut stream = File::create(output_filename)?;
  stream.write_all(bytes)?;
  stream.flush()
}
