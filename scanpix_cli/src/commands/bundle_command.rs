use std::fs::File;
use std::io::Write;

use clap::Args;

use scanpix::bundle::ScanBundle;
use scanpix::core::ScanpixError;

use crate::cli_error::CliError;

pub const ABOUT: &str = "Bundles directories of CT and PET slice files into \
  a single ZIP archive";

#[derive(Args)]
pub struct BundleArgs {
  #[arg(long, help = "The directory containing the CT slice files")]
  ct_dir: Option<String>,

  #[arg(long, help = "The directory containing the PET slice files")]
  pet_dir: Option<String>,

  #[arg(
    long,
    short,
    default_value = "scans.zip",
    help = "The name of the ZIP file to write"
  )]
  output_filename: String,
}

pub fn run(args: &BundleArgs) -> Result<(), ()> {
  match perform_bundle(args) {
    Ok(file_count) => {
      println!(
        "Wrote {} file{} to \"{}\"",
        file_count,
        if file_count == 1 { "" } else { "s" },
        args.output_filename
      );

      Ok(())
    }

    Err(e) => {
      e.print(&format!("writing file \"{}\"", args.output_filename));
      Err(())
    }
  }
}

fn perform_bundle(args: &BundleArgs) -> Result<usize, CliError> {
  let mut bundle = ScanBundle::new();

  if let Some(ct_dir) = &args.ct_dir {
    for (name, data) in read_slice_directory(ct_dir)? {
      bundle
        .add_ct_file(&name, &data)
        .map_err(CliError::BundleFailed)?;
    }
  }

  if let Some(pet_dir) = &args.pet_dir {
    for (name, data) in read_slice_directory(pet_dir)? {
      bundle
        .add_pet_file(&name, &data)
        .map_err(CliError::BundleFailed)?;
    }
  }

  let mut stream =
    File::create(&args.output_filename).map_err(|e| CliError::FileError {
      when: "Creating output file".to_string(),
      details: e.to_string(),
    })?;

  stream
    .write_all(&bundle.to_zip_bytes())
    .and_then(|_| stream.flush())
    .map_err(|e| CliError::FileError {
      when: "Writing output file".to_string(),
      details: e.to_string(),
    })?;

  Ok(bundle.file_count())
}

/// Reads the content of every file directly inside the given directory.
/// Entries are returned sorted by name so the resulting archive is the same
/// regardless of directory iteration order.
///
fn read_slice_directory(
  directory: &str,
) -> Result<Vec<(String, Vec<u8>)>, CliError> {
  let file_error = |when: &str, details: String| CliError::FileError {
    when: format!("{} \"{}\"", when, directory),
    details,
  };

  let entries = std::fs::read_dir(directory)
    .map_err(|e| file_error("Reading directory", e.to_string()))?;

  let mut files = vec![];

  for entry in entries {
    let entry =
      entry.map_err(|e| file_error("Reading directory", e.to_string()))?;

    let path = entry.path();
    if !path.is_file() {
      continue;
    }

    let name = match path.file_name().and_then(|name| name.to_str()) {
      Some(name) => name.to_string(),
      None => {
        return Err(file_error(
          "Reading directory",
          format!("File name {:?} is not valid UTF-8", path),
        ))
      }
    };

    let data = std::fs::read(&path).map_err(|e| {
      file_error("Reading file", format!("{}: {}", path.display(), e))
    })?;

    files.push((name, data));
  }

  files.sort_by(|a, b| a.0.cmp(&b.0));

  Ok(files)
}
