use super::context::{Method, ModuleContext};
use crate::codegen::indenter::indented;
use crate::codegen::CodegenError;
use crate::PortDirection;
use log::debug;
use std::fmt::{self, Write};

/// Formats the binding between a sub-interface method and the module port
fn method_binding(method: &Method) -> String {
	use PortDirection::*;
	let name = method.name;
	match method.port.direction {
		Input => format!("method {}({}) enable((*in_high*) EN_{});", name, name, name),
		Output => format!("method {} {}();", name, name),
		Inout => format!("inout {};", name),
	}
}

/// Emits the BVI import header, the wrapper module header, clock and reset
/// bindings and one binding block per sub-interface.
pub(super) fn emit_binding(w: &mut dyn fmt::Write, ctx: &ModuleContext) -> Result<(), CodegenError> {
	debug!("Binding codegen ({})", ctx.module.name());

	let config = ctx.config;
	writeln!(w, "import \"BVI\" {} =", ctx.module.name())?;

	let formals: Vec<String> = config
		.clocks
		.iter()
		.map(|c| format!("Clock {}", c))
		.chain(config.resets.iter().map(|r| format!("Reset {}", r)))
		.collect();

	if formals.is_empty() {
		writeln!(w, "module {}({});", ctx.wrapper_name(), ctx.interface_type_name())?;
	}
	else {
		writeln!(
			w,
			"module {}#({})({});",
			ctx.wrapper_name(),
			formals.join(", "),
			ctx.interface_type_name()
		)?;
	}

	let mut body = indented!(*w);
	for clock in &config.clocks {
		writeln!(body, "input_clock {}() = {};", clock, clock)?;
	}

	for reset in &config.resets {
		writeln!(body, "input_reset {}() = {};", reset, reset)?;
	}

	for sub in &ctx.sub_interfaces {
		writeln!(body, "interface {} {};", sub.type_name, sub.prefix)?;
		{
			let mut methods = indented!(body);
			for method in &sub.methods {
				writeln!(methods, "{}", method_binding(method))?;
			}
		}
		writeln!(body, "endinterface")?;
	}

	Ok(())
}
