pub mod bsv;
pub mod classifier;
pub mod grouping;
pub(crate) mod indenter;

pub use bsv::BSVCodegen;

use crate::{ConfigError, DesignError, Module};
use std::fmt;
use thiserror::Error;

#[derive(Clone, Error, Debug, PartialEq, Eq)]
pub enum CodegenError {
	#[error(transparent)]
	FormatError(#[from] fmt::Error),

	#[error(transparent)]
	ConfigError(#[from] ConfigError),

	#[error(transparent)]
	DesignError(#[from] DesignError),

	#[error("Clock `{clock}' is not a port of module `{module}'")]
	UnknownClock { module: String, clock: String },

	#[error("Reset `{reset}' is not a port of module `{module}'")]
	UnknownReset { module: String, reset: String },

	#[error("Port `{port}' of module `{module}' has no method name left after stripping group prefix `{group}'")]
	EmptyMethodName {
		module: String,
		port: String,
		group: String,
	},
}

impl CodegenError {
	/// Returns true if the error was caused by a configured or derived
	/// name that does not match anything in the design
	pub fn is_lookup_failure(&self) -> bool {
		use CodegenError::*;
		matches!(
			self,
			UnknownClock { .. }
				| UnknownReset { .. }
				| EmptyMethodName { .. }
				| DesignError(crate::DesignError::ModuleNotFound(..))
				| DesignError(crate::DesignError::PortNotFound { .. })
		)
	}
}

pub trait Codegen {
	fn emit_module(&mut self, module: &Module) -> Result<(), CodegenError>;
}
