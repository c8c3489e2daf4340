use crate::netlist_error::NetlistError;
use bsvgen::PortDirection;
use indexmap::IndexMap;
use serde::Deserialize;

/// Top-level Yosys JSON netlist. Only the parts describing module
/// interfaces are kept, everything else is skipped.
#[derive(Debug, Deserialize)]
pub struct Netlist {
	#[serde(default)]
	pub creator: Option<String>,

	/// Modules in the order they appear in the file
	#[serde(default)]
	pub modules: IndexMap<String, JsonModule>,
}

#[derive(Debug, Deserialize)]
pub struct JsonModule {
	/// Ports in declaration order
	#[serde(default)]
	pub ports: IndexMap<String, JsonPort>,
}

#[derive(Debug, Deserialize)]
pub struct JsonPort {
	pub direction: PortDirection,
	pub bits: Vec<JsonBit>,
}

/// A single port bit - either a net index or a constant driver
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum JsonBit {
	Net(u64),
	Const(String),
}

impl JsonPort {
	pub fn width(&self) -> usize {
		self.bits.len()
	}
}

/// Parses a JSON netlist. `name` is only used for error reporting.
pub fn parse_netlist(name: &str, source: &str) -> Result<Netlist, NetlistError> {
	serde_json::from_str(source).map_err(|err| NetlistError::from_json_error(name, source, err))
}
