//! Reads module port tables from Yosys JSON netlists (`write_json`)

pub mod json_netlist;
pub mod loader;
pub mod netlist_error;

pub use json_netlist::{parse_netlist, JsonBit, JsonModule, JsonPort, Netlist};
pub use loader::{escape_name, load_design};
pub use netlist_error::NetlistError;
