use super::context::ModuleContext;
use crate::codegen::indenter::indented;
use crate::codegen::CodegenError;
use log::debug;
use std::fmt::{self, Write};

fn emit_name_list(w: &mut dyn fmt::Write, names: &[&str]) -> fmt::Result {
	let mut list = indented!(*w);
	for (index, name) in names.iter().enumerate() {
		writeln!(list, "{}{}", name, if index == names.len() - 1 { "" } else { "," })?;
	}
	Ok(())
}

/// Declares all regular port methods conflict-free with each other.
/// Nothing is emitted for modules without regular ports.
pub(super) fn emit_schedule(w: &mut dyn fmt::Write, ctx: &ModuleContext) -> Result<(), CodegenError> {
	if ctx.schedule.is_empty() {
		debug!("No regular ports in '{}', schedule omitted", ctx.module.name());
		return Ok(());
	}

	let mut body = indented!(*w);
	writeln!(body, "schedule(")?;
	emit_name_list(&mut body, &ctx.schedule)?;
	writeln!(body, ") CF (")?;
	emit_name_list(&mut body, &ctx.schedule)?;
	writeln!(body, ");")?;
	Ok(())
}
