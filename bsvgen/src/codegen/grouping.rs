use crate::Port;

/// Derives an interface type name from a group prefix or interface name.
///
/// Only the first character is upper-cased. Prefixes that start with a
/// non-alphabetic character come out unchanged.
pub fn to_type_name(name: &str) -> String {
	let mut chars = name.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

/// Strips the group prefix and one separator character from the front of a
/// port name. The prefix does not need to actually match the beginning of
/// the name - only its length matters. Returns `None` if nothing is left.
pub fn strip_group_prefix<'n>(port_name: &'n str, prefix: &str) -> Option<&'n str> {
	let skip = prefix.chars().count() + 1;
	port_name.char_indices().nth(skip).map(|(offset, _)| &port_name[offset..])
}

/// A named bucket of ports forming one sub-interface
#[derive(Clone, Debug)]
pub struct InterfaceGroup<'m> {
	prefix: String,
	members: Vec<&'m Port>,
}

impl<'m> InterfaceGroup<'m> {
	fn new(prefix: &str) -> Self {
		Self {
			prefix: prefix.into(),
			members: vec![],
		}
	}

	/// Group prefix, also used as the sub-interface field name
	pub fn prefix(&self) -> &str {
		&self.prefix
	}

	/// Name of the sub-interface type
	pub fn type_name(&self) -> String {
		to_type_name(&self.prefix)
	}

	/// Member ports in module declaration order
	pub fn members(&self) -> &[&'m Port] {
		&self.members
	}

	/// Method name for a member port
	pub fn method_name<'p>(&self, port: &'p Port) -> Option<&'p str> {
		strip_group_prefix(&port.name, &self.prefix)
	}
}

/// Ports bucketed by group prefix, ordered by prefix
#[derive(Clone, Debug, Default)]
pub struct InterfaceGroups<'m> {
	groups: Vec<InterfaceGroup<'m>>,
}

impl<'m> InterfaceGroups<'m> {
	/// Assigns each port to every group whose prefix occurs anywhere in the
	/// port name. Ports matching no prefix are not part of any group.
	///
	/// `prefixes` must be sorted and free of duplicates.
	pub fn assign(ports: &[&'m Port], prefixes: &[&str]) -> Self {
		debug_assert!(prefixes.windows(2).all(|w| w[0] < w[1]));

		let mut groups: Vec<InterfaceGroup<'m>> = prefixes.iter().map(|p| InterfaceGroup::new(p)).collect();
		for port in ports {
			for group in groups.iter_mut() {
				if port.name.contains(group.prefix.as_str()) {
					group.members.push(*port);
				}
			}
		}

		Self { groups }
	}

	pub fn iter(&self) -> impl Iterator<Item = &InterfaceGroup<'m>> {
		self.groups.iter()
	}

	pub fn is_empty(&self) -> bool {
		self.groups.is_empty()
	}

	pub fn len(&self) -> usize {
		self.groups.len()
	}

	pub fn get(&self, prefix: &str) -> Option<&InterfaceGroup<'m>> {
		self.groups.iter().find(|g| g.prefix == prefix)
	}

	/// First group (in prefix order) that the port belongs to
	pub fn first_group_of(&self, port: &Port) -> Option<&InterfaceGroup<'m>> {
		self.groups
			.iter()
			.find(|g| g.members.iter().any(|m| m.name == port.name))
	}

	/// Ports not assigned to any group
	pub fn ungrouped<'a>(&self, ports: &[&'a Port]) -> Vec<&'a Port> {
		ports
			.iter()
			.filter(|p| self.first_group_of(p).is_none())
			.copied()
			.collect()
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::PortDirection;
	use rstest::rstest;

	fn ports(names: &[&str]) -> Vec<Port> {
		names.iter().map(|n| Port::new(n, PortDirection::Input, 1)).collect()
	}

	fn names<'a>(group: &InterfaceGroup<'a>) -> Vec<&'a str> {
		group.members().iter().map(|p| p.name.as_str()).collect()
	}

	#[rstest]
	#[case("foo", "Foo")]
	#[case("Foo", "Foo")]
	#[case("axiLite", "AxiLite")]
	#[case("_foo", "_foo")]
	#[case("2x", "2x")]
	#[case("", "")]
	fn test_type_name(#[case] prefix: &str, #[case] expected: &str) {
		assert_eq!(to_type_name(prefix), expected);
	}

	#[rstest]
	#[case("foo_data", "foo", Some("data"))]
	#[case("foo.valid", "foo", Some("valid"))]
	#[case("xfoo_en", "foo", Some("_en"))]
	#[case("foo_", "foo", None)]
	#[case("foo", "foo", None)]
	#[case("fé_ok", "fé", Some("ok"))]
	fn test_strip_group_prefix(#[case] name: &str, #[case] prefix: &str, #[case] expected: Option<&str>) {
		assert_eq!(strip_group_prefix(name, prefix), expected);
	}

	#[test]
	fn test_assign_substring_and_order() {
		let table = ports(&["foo_data", "bar_en", "foo_valid", "other", "xfoo_y"]);
		let refs: Vec<&Port> = table.iter().collect();
		let groups = InterfaceGroups::assign(&refs, &["bar", "foo"]);

		assert_eq!(groups.len(), 2);
		let prefixes: Vec<&str> = groups.iter().map(|g| g.prefix()).collect();
		assert_eq!(prefixes, vec!["bar", "foo"]);
		assert_eq!(names(groups.get("bar").unwrap()), vec!["bar_en"]);
		assert_eq!(names(groups.get("foo").unwrap()), vec!["foo_data", "foo_valid", "xfoo_y"]);

		let dropped: Vec<&str> = groups.ungrouped(&refs).iter().map(|p| p.name.as_str()).collect();
		assert_eq!(dropped, vec!["other"]);
	}

	#[test]
	fn test_assign_multi_membership() {
		let table = ports(&["foo_bar_x", "bar_y"]);
		let refs: Vec<&Port> = table.iter().collect();
		let groups = InterfaceGroups::assign(&refs, &["bar", "foo"]);

		assert_eq!(names(groups.get("bar").unwrap()), vec!["foo_bar_x", "bar_y"]);
		assert_eq!(names(groups.get("foo").unwrap()), vec!["foo_bar_x"]);
		assert_eq!(groups.first_group_of(&table[0]).unwrap().prefix(), "bar");
	}

	#[test]
	fn test_assign_empty_prefixes_and_empty_groups() {
		let table = ports(&["foo_data"]);
		let refs: Vec<&Port> = table.iter().collect();

		let none = InterfaceGroups::assign(&refs, &[]);
		assert!(none.is_empty());
		assert_eq!(none.ungrouped(&refs).len(), 1);

		let unused = InterfaceGroups::assign(&refs, &["baz"]);
		assert_eq!(unused.len(), 1);
		assert!(unused.get("baz").unwrap().members().is_empty());
	}
}
