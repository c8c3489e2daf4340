use bsvgen::DesignError;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum NetlistError {
	#[error("Cannot read netlist `{path}'")]
	#[diagnostic(code(netlist::io), help("Make sure this file exists and is readable"))]
	Io {
		path: String,
		#[source]
		source: std::io::Error,
	},

	#[error("Malformed netlist: {message}")]
	#[diagnostic(
		code(netlist::syntax),
		help("The input must be a JSON netlist as written by Yosys `write_json`")
	)]
	Syntax {
		message: String,
		#[source_code]
		src: NamedSource<String>,
		#[label("here")]
		span: SourceSpan,
	},

	#[error("Port `{port}' of module `{module}' has no bits")]
	#[diagnostic(code(netlist::empty_port), help("Every port must be at least one bit wide"))]
	EmptyPort { module: String, port: String },

	#[error(transparent)]
	#[diagnostic(code(netlist::design))]
	Design(#[from] DesignError),
}

/// Converts 1-based line and column numbers into a byte offset in `source`
pub(crate) fn line_col_to_offset(source: &str, line: usize, column: usize) -> usize {
	let line_start: usize = source
		.split_inclusive('\n')
		.take(line.saturating_sub(1))
		.map(str::len)
		.sum();
	(line_start + column.saturating_sub(1)).min(source.len())
}

impl NetlistError {
	pub(crate) fn from_json_error(name: &str, source: &str, err: serde_json::Error) -> Self {
		let offset = line_col_to_offset(source, err.line(), err.column());
		let len = if offset < source.len() { 1 } else { 0 };
		Self::Syntax {
			message: err.to_string(),
			src: NamedSource::new(name, source.to_string()),
			span: (offset, len).into(),
		}
	}
}
