use serde::{Deserialize, Serialize};
use std::fmt;

/// Specifies direction for ports in module interface
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortDirection {
	/// Input port (from the perspective of the module)
	Input,

	/// Output port (from the perspective of the module)
	Output,

	/// Bidirectional port
	Inout,
}

impl fmt::Display for PortDirection {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		use PortDirection::*;
		match self {
			Input => write!(f, "input"),
			Output => write!(f, "output"),
			Inout => write!(f, "inout"),
		}
	}
}

/// A single port of a module
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Port {
	/// Name of the port, unique within its module
	pub name: String,

	/// Direction of the port
	pub direction: PortDirection,

	/// Number of distinct signal bits behind the port
	pub width: usize,
}

impl Port {
	pub fn new(name: &str, direction: PortDirection, width: usize) -> Self {
		Self {
			name: name.into(),
			direction,
			width,
		}
	}

	pub fn is_input(&self) -> bool {
		self.direction == PortDirection::Input
	}

	pub fn is_output(&self) -> bool {
		self.direction == PortDirection::Output
	}

	pub fn is_inout(&self) -> bool {
		self.direction == PortDirection::Inout
	}
}
