extern crate bsvgen;
extern crate netlist;

use bsvgen::{CodegenError, Config, ConfigError, Design, DriverError, OutputTarget};
use clap::{command, Arg, ArgAction, ArgMatches, Command};
use log::debug;
use miette::Diagnostic;
use netlist::NetlistError;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum BsvWrapError {
	#[error(transparent)]
	#[diagnostic(transparent)]
	Netlist(#[from] NetlistError),

	#[error("Cannot read configuration file `{path}'")]
	#[diagnostic(code(bsvwrap::config))]
	ConfigRead {
		path: String,
		#[source]
		source: io::Error,
	},

	#[error("Malformed configuration file `{path}'")]
	#[diagnostic(
		code(bsvwrap::config),
		help("Recognized keys are: clocks, resets, params, groups, interface")
	)]
	ConfigParse {
		path: String,
		#[source]
		source: serde_json::Error,
	},

	#[error(transparent)]
	#[diagnostic(code(bsvwrap::config), help("Pass a valid BSV identifier with -i"))]
	Config(ConfigError),

	#[error(transparent)]
	#[diagnostic(
		code(bsvwrap::lookup),
		help("Every clock (-c), reset (-r) and selected module (-s) must exist in the netlist")
	)]
	Lookup(CodegenError),

	#[error(transparent)]
	#[diagnostic(code(bsvwrap::codegen))]
	Codegen(CodegenError),

	#[error(transparent)]
	#[diagnostic(code(bsvwrap::output))]
	Output(DriverError),

	#[error(transparent)]
	#[diagnostic(code(bsvwrap::io))]
	Io(#[from] io::Error),
}

impl From<CodegenError> for BsvWrapError {
	fn from(err: CodegenError) -> Self {
		match err {
			CodegenError::ConfigError(e) => Self::Config(e),
			e if e.is_lookup_failure() => Self::Lookup(e),
			e => Self::Codegen(e),
		}
	}
}

impl From<DriverError> for BsvWrapError {
	fn from(err: DriverError) -> Self {
		match err {
			DriverError::Codegen(e) => e.into(),
			e => Self::Output(e),
		}
	}
}

/// Options shared by both subcommands
fn generation_args() -> Vec<Arg> {
	vec![
		Arg::new("netlist")
			.required(true)
			.value_name("NETLIST")
			.help("Yosys JSON netlist (write_json) describing the modules"),
		Arg::new("clock")
			.short('c')
			.long("clock")
			.value_name("CLOCK")
			.action(ArgAction::Append)
			.help("Clock port name"),
		Arg::new("reset")
			.short('r')
			.long("reset")
			.value_name("RESET")
			.action(ArgAction::Append)
			.help("Reset port name"),
		Arg::new("param")
			.short('p')
			.long("param")
			.value_name("PARAM")
			.action(ArgAction::Append)
			.help("Parameter name (currently unused)"),
		Arg::new("group")
			.short('g')
			.long("group")
			.value_name("PREFIX")
			.action(ArgAction::Append)
			.help("Group ports whose names contain PREFIX into the same interface"),
		Arg::new("interface")
			.short('i')
			.long("interface")
			.value_name("INTERFACE")
			.help("Module and module interface name"),
		Arg::new("config")
			.long("config")
			.value_name("FILE")
			.help("JSON file with default settings, extended by the flags above"),
	]
}

fn read_config(path: &str) -> Result<Config, BsvWrapError> {
	let content = fs::read_to_string(path).map_err(|source| BsvWrapError::ConfigRead {
		path: path.into(),
		source,
	})?;
	serde_json::from_str(&content).map_err(|source| BsvWrapError::ConfigParse {
		path: path.into(),
		source,
	})
}

fn config_from_matches(matches: &ArgMatches) -> Result<Config, BsvWrapError> {
	let mut config = match matches.get_one::<String>("config") {
		Some(path) => read_config(path)?,
		None => Config::default(),
	};

	let strings = |id: &str| -> Vec<String> {
		matches
			.get_many::<String>(id)
			.map(|values| values.cloned().collect())
			.unwrap_or_default()
	};

	config.merge(Config {
		clocks: strings("clock"),
		resets: strings("reset"),
		params: strings("param"),
		groups: strings("group"),
		interface_name: matches.get_one::<String>("interface").cloned().unwrap_or_default(),
	});
	debug!("Effective configuration: {:?}", config);
	Ok(config)
}

fn load_netlist(matches: &ArgMatches) -> Result<Design, BsvWrapError> {
	let path = matches.get_one::<String>("netlist").map(String::as_str).unwrap_or_default();
	Ok(netlist::load_design(Path::new(path))?)
}

/// Backend surface - all modules, written to FILENAME or stdout
fn write_cmd(matches: &ArgMatches) -> Result<(), BsvWrapError> {
	let config = config_from_matches(matches)?;
	config.validate().map_err(BsvWrapError::Config)?;
	let design = load_netlist(matches)?;

	let mut output: Box<dyn Write> = match matches.get_one::<String>("filename") {
		None => Box::new(io::stdout()),
		Some(path) => match fs::File::create(path) {
			Ok(file) => Box::new(file),
			Err(source) => {
				return Err(DriverError::OutputTarget {
					path: PathBuf::from(path),
					source,
				}
				.into())
			},
		},
	};

	bsvgen::run_backend(&design, &config, &mut output)?;
	Ok(())
}

/// Command surface - selected modules, written to the -o file or printed
fn pass_cmd(matches: &ArgMatches) -> Result<(), BsvWrapError> {
	let config = config_from_matches(matches)?;
	config.validate().map_err(BsvWrapError::Config)?;
	let design = load_netlist(matches)?;

	let selection: Vec<String> = matches
		.get_many::<String>("select")
		.map(|values| values.cloned().collect())
		.unwrap_or_default();

	let target = match matches.get_one::<String>("output") {
		Some(path) => OutputTarget::File(PathBuf::from(path)),
		None => OutputTarget::Buffer,
	};

	if let Some(text) = bsvgen::run_pass(&design, &config, &selection, &target)? {
		let mut stdout = io::stdout().lock();
		stdout.write_all(text.as_bytes())?;
		stdout.flush()?;
	}
	Ok(())
}

fn cli() -> Command {
	command!()
		.about("Writes a wrapper to embed a Verilog or VHDL module in a BSV design")
		.subcommand_required(true)
		.arg_required_else_help(true)
		.subcommand(
			Command::new("write")
				.about("Write wrappers for all modules of the netlist")
				.args(generation_args())
				.arg(
					Arg::new("filename")
						.value_name("FILENAME")
						.help("Output file (stdout if omitted)"),
				),
		)
		.subcommand(
			Command::new("pass")
				.about("Write wrappers for selected modules of the netlist")
				.args(generation_args())
				.arg(
					Arg::new("output")
						.short('o')
						.long("output")
						.value_name("FILE")
						.help("Write to the specified file instead of printing"),
				)
				.arg(
					Arg::new("select")
						.short('s')
						.long("select")
						.value_name("MODULE")
						.action(ArgAction::Append)
						.help("Module to process (all modules if omitted)"),
				),
		)
}

fn main() -> miette::Result<()> {
	env_logger::init();

	let matches = cli().get_matches();
	match matches.subcommand() {
		Some(("write", sub)) => write_cmd(sub)?,
		Some(("pass", sub)) => pass_cmd(sub)?,
		_ => unreachable!("subcommand is required"),
	}
	Ok(())
}
