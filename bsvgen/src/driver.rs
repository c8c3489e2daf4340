use crate::codegen::{BSVCodegen, Codegen, CodegenError};
use crate::{Config, Design};
use log::{debug, info};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
	#[error("Can't open file `{}' for writing: {source}", .path.display())]
	OutputTarget { path: PathBuf, source: io::Error },

	#[error(transparent)]
	Codegen(#[from] CodegenError),

	#[error(transparent)]
	Io(#[from] io::Error),
}

/// Where the command surface puts the generated text
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputTarget {
	/// Keep the text in memory and hand it back to the caller
	Buffer,

	/// Write the text to a file, truncating it
	File(PathBuf),
}

/// Generates wrappers for the selected modules (all modules if the selection
/// is empty) in name order. Stops at the first error.
pub fn write_design(
	w: &mut dyn std::fmt::Write,
	design: &Design,
	selection: &[String],
	config: &Config,
) -> Result<(), CodegenError> {
	config.validate()?;
	if !config.params.is_empty() {
		debug!("Parameters are not used by generation: {}", config.params.join(", "));
	}

	let modules = design.select(selection)?;
	debug!("Generating wrappers for {} module(s)", modules.len());

	let mut cg = BSVCodegen::new(config, w);
	for module in modules {
		cg.emit_module(module)?;
	}
	Ok(())
}

/// Backend surface: wrappers for every module in the design are written to
/// the provided stream.
pub fn run_backend(design: &Design, config: &Config, output: &mut dyn Write) -> Result<(), DriverError> {
	let mut text = String::new();
	write_design(&mut text, design, &[], config)?;
	output.write_all(text.as_bytes())?;
	output.flush()?;
	Ok(())
}

/// Command surface: wrappers for the selected modules are written to a file,
/// or returned as a string when no file is requested.
///
/// The output file is opened before any module is processed.
pub fn run_pass(
	design: &Design,
	config: &Config,
	selection: &[String],
	target: &OutputTarget,
) -> Result<Option<String>, DriverError> {
	let mut file = match target {
		OutputTarget::Buffer => None,
		OutputTarget::File(path) => Some(File::create(path).map_err(|source| DriverError::OutputTarget {
			path: path.clone(),
			source,
		})?),
	};

	let mut text = String::new();
	write_design(&mut text, design, selection, config)?;

	match (&mut file, target) {
		(Some(f), OutputTarget::File(path)) => {
			f.write_all(text.as_bytes())
				.map_err(|source| DriverError::OutputTarget {
					path: path.clone(),
					source,
				})?;
			info!("Wrote {} bytes to {}", text.len(), path.display());
			Ok(None)
		},
		_ => Ok(Some(text)),
	}
}
