pub mod module;
pub mod port;

pub use module::Module;
pub use port::{Port, PortDirection};

use thiserror::Error;

/// Represents a design - a collection of modules with unique names.
/// Modules are kept in insertion order until [`Design::sort`] is called.
#[derive(Clone, Debug, Default)]
pub struct Design {
	modules: Vec<Module>,
}

impl Design {
	/// Creates a new empty design
	pub fn new() -> Self {
		Self { modules: vec![] }
	}

	/// Creates a new module with provided name and returns a reference to it
	pub fn new_module(&mut self, name: &str) -> Result<&mut Module, DesignError> {
		let module = Module::new(name)?;
		self.add_module(module)
	}

	/// Adds an existing module to the design
	pub fn add_module(&mut self, module: Module) -> Result<&mut Module, DesignError> {
		if self.get_module(module.name()).is_some() {
			return Err(DesignError::ModuleNameConflict(module.name().into()));
		}

		self.modules.push(module);
		let last = self.modules.len() - 1;
		Ok(&mut self.modules[last])
	}

	pub fn modules(&self) -> &[Module] {
		&self.modules
	}

	pub fn get_module(&self, name: &str) -> Option<&Module> {
		self.modules.iter().find(|m| m.name() == name)
	}

	/// Orders modules by name
	pub fn sort(&mut self) {
		self.modules.sort_by(|a, b| a.name().cmp(b.name()));
	}

	/// Returns modules in name order without modifying the design
	pub fn sorted_modules(&self) -> Vec<&Module> {
		let mut modules: Vec<&Module> = self.modules.iter().collect();
		modules.sort_by(|a, b| a.name().cmp(b.name()));
		modules
	}

	/// Returns the sorted subset of modules named in `selection`.
	/// An empty selection selects all modules.
	pub fn select(&self, selection: &[String]) -> Result<Vec<&Module>, DesignError> {
		for name in selection {
			if self.get_module(name).is_none() {
				return Err(DesignError::ModuleNotFound(name.clone()));
			}
		}

		Ok(self
			.sorted_modules()
			.into_iter()
			.filter(|m| selection.is_empty() || selection.iter().any(|s| s == m.name()))
			.collect())
	}
}

/// Represents an error that can occur during design construction or lookup
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DesignError {
	#[error("Invalid name")]
	InvalidName,

	#[error("Module `{0}' is defined more than once")]
	ModuleNameConflict(String),

	#[error("Port `{port}' is defined more than once in module `{module}'")]
	PortNameConflict { module: String, port: String },

	#[error("Port `{port}' of module `{module}' must be at least one bit wide")]
	InvalidPortWidth { module: String, port: String },

	#[error("Module `{0}' not found in design")]
	ModuleNotFound(String),

	#[error("Port `{port}' not found in module `{module}'")]
	PortNotFound { module: String, port: String },
}
