use super::binding::emit_binding;
use super::context::ModuleContext;
use super::interface::emit_interfaces;
use super::schedule::emit_schedule;
use crate::codegen::{Codegen, CodegenError};
use crate::{Config, Module};
use log::debug;
use std::fmt::{self, Write};

/// Separates wrappers of successive modules in the output
pub const MODULE_DELIMITER: &str = ",\n";

/// Generates BSV interfaces and BVI import wrappers
pub struct BSVCodegen<'a> {
	config: &'a Config,
	modules_emitted: usize,
	output_stream: &'a mut dyn fmt::Write,
}

impl<'a> BSVCodegen<'a> {
	pub fn new(config: &'a Config, w: &'a mut dyn fmt::Write) -> Self {
		Self {
			config,
			modules_emitted: 0,
			output_stream: w,
		}
	}

	/// Renders the complete wrapper for one module.
	///
	/// All lookups happen before rendering starts, so a failure leaves
	/// nothing behind.
	pub fn render_module(&self, module: &Module) -> Result<String, CodegenError> {
		self.config.validate()?;
		let ctx = ModuleContext::new(module, self.config)?;

		let mut text = String::new();
		emit_interfaces(&mut text, &ctx)?;
		emit_binding(&mut text, &ctx)?;
		emit_schedule(&mut text, &ctx)?;
		writeln!(text, "endmodule")?;
		Ok(text)
	}

	/// Number of modules written to the output so far
	pub fn modules_emitted(&self) -> usize {
		self.modules_emitted
	}
}

impl<'a> Codegen for BSVCodegen<'a> {
	fn emit_module(&mut self, module: &Module) -> Result<(), CodegenError> {
		debug!("BSV codegen for module '{}'", module.name());
		let text = self.render_module(module)?;

		if self.modules_emitted > 0 {
			self.output_stream.write_str(MODULE_DELIMITER)?;
		}
		self.output_stream.write_str(&text)?;
		self.modules_emitted += 1;
		Ok(())
	}
}
