use super::context::{Method, ModuleContext};
use crate::codegen::indenter::indented;
use crate::codegen::CodegenError;
use crate::PortDirection;
use log::debug;
use std::fmt::{self, Write};

const INTERFACE_ATTRIBUTES: &str = "(* always_ready, always_enabled *)";

/// Formats the interface method for a port. Inout ports have no method.
fn method_declaration(method: &Method) -> Option<String> {
	use PortDirection::*;
	match method.port.direction {
		Input => Some(format!("method Action {}(Bit#({}) v);", method.name, method.port.width)),
		Output => Some(format!("method Bit#({}) {}();", method.port.width, method.name)),
		Inout => None,
	}
}

/// Emits one interface per group followed by the aggregate interface
pub(super) fn emit_interfaces(w: &mut dyn fmt::Write, ctx: &ModuleContext) -> Result<(), CodegenError> {
	debug!("Interface codegen ({})", ctx.module.name());

	for sub in &ctx.sub_interfaces {
		writeln!(w, "{}", INTERFACE_ATTRIBUTES)?;
		writeln!(w, "interface {};", sub.type_name)?;
		{
			let mut body = indented!(*w);
			for decl in sub.methods.iter().filter_map(method_declaration) {
				writeln!(body, "{}", decl)?;
			}
		}
		writeln!(w, "endinterface")?;
	}

	writeln!(w, "{}", INTERFACE_ATTRIBUTES)?;
	writeln!(w, "interface {};", ctx.interface_type_name())?;
	{
		let mut body = indented!(*w);
		for sub in &ctx.sub_interfaces {
			writeln!(body, "interface {} {};", sub.type_name, sub.prefix)?;
		}
	}
	writeln!(w, "endinterface")?;
	Ok(())
}
