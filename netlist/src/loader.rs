use crate::json_netlist::{parse_netlist, Netlist};
use crate::netlist_error::NetlistError;
use bsvgen::Design;
use log::debug;
use std::path::Path;

/// Escapes a netlist identifier for use in generated text - backslashes are doubled
pub fn escape_name(name: &str) -> String {
	name.replace('\\', "\\\\")
}

impl Netlist {
	/// Builds a design holding the port table of every module in the netlist.
	/// Module and port order follow the netlist.
	pub fn into_design(self) -> Result<Design, NetlistError> {
		let mut design = Design::new();
		for (module_name, json_module) in self.modules {
			let module = design.new_module(&escape_name(&module_name))?;
			for (port_name, port) in json_module.ports {
				if port.bits.is_empty() {
					return Err(NetlistError::EmptyPort {
						module: module_name,
						port: port_name,
					});
				}
				module.add_port(&escape_name(&port_name), port.direction, port.width())?;
			}
			debug!("Loaded module '{}' with {} port(s)", module.name(), module.ports().len());
		}
		Ok(design)
	}
}

/// Reads a JSON netlist from disk and converts it into a design
pub fn load_design(path: &Path) -> Result<Design, NetlistError> {
	let display_name = path.display().to_string();
	let source = std::fs::read_to_string(path).map_err(|source| NetlistError::Io {
		path: display_name.clone(),
		source,
	})?;

	parse_netlist(&display_name, &source)?.into_design()
}
