use crate::{Config, Module, Port};

/// Role of a port in the generated wrapper
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PortClass {
	/// Bound with `input_clock`
	Clock,

	/// Bound with `input_reset`
	Reset,

	/// Candidate for grouping into sub-interfaces
	Regular,
}

/// Classifies a port name by exact match against configured clocks and resets.
/// A name listed both as a clock and a reset is a clock.
pub fn classify(name: &str, config: &Config) -> PortClass {
	if config.clocks.iter().any(|c| c == name) {
		PortClass::Clock
	}
	else if config.resets.iter().any(|r| r == name) {
		PortClass::Reset
	}
	else {
		PortClass::Regular
	}
}

/// Returns ports which are neither clocks nor resets, in declaration order
pub fn regular_ports<'m>(module: &'m Module, config: &Config) -> Vec<&'m Port> {
	module
		.ports()
		.iter()
		.filter(|p| classify(&p.name, config) == PortClass::Regular)
		.collect()
}
