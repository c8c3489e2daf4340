use super::{DesignError, Port, PortDirection};

/// Represents a hardware module as seen from the outside - a name
/// and an ordered list of ports
#[derive(Clone, Debug)]
pub struct Module {
	/// Name of the module
	name: String,

	/// Ports in declaration order
	ports: Vec<Port>,
}

impl Module {
	/// Creates a new module without any ports
	pub fn new(name: &str) -> Result<Self, DesignError> {
		if name.is_empty() {
			return Err(DesignError::InvalidName);
		}

		Ok(Self {
			name: name.into(),
			ports: vec![],
		})
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns ports in declaration order
	pub fn ports(&self) -> &[Port] {
		&self.ports
	}

	/// Appends a port to the module interface.
	///
	/// Port names must be unique within the module and the width must be positive.
	pub fn add_port(&mut self, name: &str, direction: PortDirection, width: usize) -> Result<&Port, DesignError> {
		if name.is_empty() {
			return Err(DesignError::InvalidName);
		}

		if width == 0 {
			return Err(DesignError::InvalidPortWidth {
				module: self.name.clone(),
				port: name.into(),
			});
		}

		if self.ports.iter().any(|p| p.name == name) {
			return Err(DesignError::PortNameConflict {
				module: self.name.clone(),
				port: name.into(),
			});
		}

		self.ports.push(Port::new(name, direction, width));
		Ok(&self.ports[self.ports.len() - 1])
	}

	/// Looks up a port by name
	pub fn port(&self, name: &str) -> Result<&Port, DesignError> {
		self.ports
			.iter()
			.find(|p| p.name == name)
			.ok_or_else(|| DesignError::PortNotFound {
				module: self.name.clone(),
				port: name.into(),
			})
	}

	pub fn has_port(&self, name: &str) -> bool {
		self.port(name).is_ok()
	}
}
