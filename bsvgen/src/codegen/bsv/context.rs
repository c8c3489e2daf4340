use crate::codegen::classifier::regular_ports;
use crate::codegen::grouping::{to_type_name, InterfaceGroup, InterfaceGroups};
use crate::codegen::CodegenError;
use crate::{Config, Module, Port};
use log::debug;

/// A port exposed as a method of a sub-interface
#[derive(Clone, Debug)]
pub struct Method<'a> {
	pub port: &'a Port,
	pub name: &'a str,
}

/// A group of ports exposed as one sub-interface
#[derive(Clone, Debug)]
pub struct SubInterface<'a> {
	/// Field name in the aggregate interface
	pub prefix: String,

	/// Interface type name
	pub type_name: String,

	pub methods: Vec<Method<'a>>,
}

/// Per-module generation state. Built and validated before any text is
/// emitted, dropped once the module is done.
#[derive(Clone, Debug)]
pub struct ModuleContext<'a> {
	pub module: &'a Module,
	pub config: &'a Config,

	/// Sub-interfaces in prefix order
	pub sub_interfaces: Vec<SubInterface<'a>>,

	/// Method names of all regular ports (grouped or not) in declaration order
	pub schedule: Vec<&'a str>,
}

fn group_method<'a>(module: &Module, group: &InterfaceGroup, port: &'a Port) -> Result<Method<'a>, CodegenError> {
	match group.method_name(port) {
		Some(name) => Ok(Method { port, name }),
		None => Err(CodegenError::EmptyMethodName {
			module: module.name().into(),
			port: port.name.clone(),
			group: group.prefix().into(),
		}),
	}
}

impl<'a> ModuleContext<'a> {
	pub fn new(module: &'a Module, config: &'a Config) -> Result<Self, CodegenError> {
		for clock in &config.clocks {
			if !module.has_port(clock) {
				return Err(CodegenError::UnknownClock {
					module: module.name().into(),
					clock: clock.clone(),
				});
			}
		}

		for reset in &config.resets {
			if !module.has_port(reset) {
				return Err(CodegenError::UnknownReset {
					module: module.name().into(),
					reset: reset.clone(),
				});
			}
		}

		let regular = regular_ports(module, config);
		let groups = InterfaceGroups::assign(&regular, &config.sorted_groups());

		let mut sub_interfaces = Vec::with_capacity(groups.len());
		for group in groups.iter() {
			let methods = group
				.members()
				.iter()
				.map(|port| group_method(module, group, *port))
				.collect::<Result<Vec<_>, _>>()?;

			sub_interfaces.push(SubInterface {
				prefix: group.prefix().into(),
				type_name: group.type_name(),
				methods,
			});
		}

		let mut schedule = Vec::with_capacity(regular.len());
		for port in &regular {
			match groups.first_group_of(port) {
				Some(group) => schedule.push(group_method(module, group, *port)?.name),
				None => {
					debug!("Port '{}' of '{}' matches no group, not exposed", port.name, module.name());
					schedule.push(port.name.as_str());
				},
			}
		}

		Ok(Self {
			module,
			config,
			sub_interfaces,
			schedule,
		})
	}

	/// Type name of the aggregate interface
	pub fn interface_type_name(&self) -> String {
		to_type_name(&self.config.interface_name)
	}

	/// Name of the wrapper module
	pub fn wrapper_name(&self) -> String {
		format!("mk{}", self.config.interface_name)
	}
}
