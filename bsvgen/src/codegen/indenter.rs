use std::fmt;

/// Writes into the underlying stream, indenting every non-empty line
pub struct Indenter<'stream> {
	output: &'stream mut dyn fmt::Write,
	indent_str: String,
	line_start: bool,
}

impl<'stream> Indenter<'stream> {
	pub fn new(output: &'stream mut dyn fmt::Write, indent_str: String) -> Indenter<'stream> {
		Self {
			output,
			indent_str,
			line_start: true,
		}
	}

	pub fn new_with_spaces(output: &'stream mut dyn fmt::Write, indent_level: usize) -> Indenter<'stream> {
		Self::new(output, "    ".repeat(indent_level))
	}
}

impl<'stream> fmt::Write for Indenter<'stream> {
	fn write_str(&mut self, s: &str) -> Result<(), std::fmt::Error> {
		for (i, line) in s.split('\n').enumerate() {
			if i != 0 {
				self.output.write_char('\n')?;
				self.line_start = true;
			}

			if !line.is_empty() {
				if self.line_start {
					self.output.write_str(&self.indent_str)?;
					self.line_start = false;
				}
				self.output.write_str(line)?;
			}
		}

		Ok(())
	}
}

macro_rules! indented {
	($output: expr) => {
		{
			let out = &mut $output;
			$crate::codegen::indenter::Indenter::new_with_spaces(out, 1)
		}
	};

	($output: expr, $levels: expr) => {
		{
			let out = &mut $output;
			$crate::codegen::indenter::Indenter::new_with_spaces(out, $levels)
		}
	};
}

pub(crate) use indented;
