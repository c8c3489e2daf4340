use crate::utils::is_name_valid;
use serde::Deserialize;
use thiserror::Error;

/// Wrapper generation settings. Immutable for the duration of one generation run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	/// Clock port names, in the order they appear in the wrapper's parameter list
	pub clocks: Vec<String>,

	/// Reset port names, in the order they appear in the wrapper's parameter list
	pub resets: Vec<String>,

	/// Parameter names. Accepted but not used by generation.
	pub params: Vec<String>,

	/// Group prefixes used to cluster ports into sub-interfaces
	pub groups: Vec<String>,

	/// Name of the aggregate interface, also used to derive the wrapper module name
	#[serde(rename = "interface")]
	pub interface_name: String,
}

impl Config {
	/// Creates an empty configuration with the given interface name
	pub fn new(interface_name: &str) -> Self {
		Self {
			interface_name: interface_name.into(),
			..Default::default()
		}
	}

	pub fn clock(mut self, name: &str) -> Self {
		self.clocks.push(name.into());
		self
	}

	pub fn reset(mut self, name: &str) -> Self {
		self.resets.push(name.into());
		self
	}

	pub fn param(mut self, name: &str) -> Self {
		self.params.push(name.into());
		self
	}

	pub fn group(mut self, prefix: &str) -> Self {
		self.groups.push(prefix.into());
		self
	}

	/// Extends this configuration with another one. Lists are appended,
	/// the interface name is replaced only if the other one is set.
	pub fn merge(&mut self, other: Config) {
		self.clocks.extend(other.clocks);
		self.resets.extend(other.resets);
		self.params.extend(other.params);
		self.groups.extend(other.groups);
		if !other.interface_name.is_empty() {
			self.interface_name = other.interface_name;
		}
	}

	/// Returns distinct group prefixes in lexicographic order
	pub fn sorted_groups(&self) -> Vec<&str> {
		let mut groups: Vec<&str> = self.groups.iter().map(String::as_str).collect();
		groups.sort_unstable();
		groups.dedup();
		groups
	}

	/// Checks whether the configuration can be used for generation
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.interface_name.is_empty() {
			return Err(ConfigError::MissingInterfaceName);
		}

		if !is_name_valid(&self.interface_name) {
			return Err(ConfigError::InvalidInterfaceName(self.interface_name.clone()));
		}

		if self.groups.iter().any(String::is_empty) {
			return Err(ConfigError::EmptyGroupPrefix);
		}

		Ok(())
	}
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
	#[error("Interface name not specified")]
	MissingInterfaceName,

	#[error("Interface name `{0}' is not a valid identifier")]
	InvalidInterfaceName(String),

	#[error("Group prefix must not be empty")]
	EmptyGroupPrefix,
}
