pub mod codegen;
pub mod config;
pub mod design;
pub mod driver;
mod utils;

pub use codegen::{BSVCodegen, Codegen, CodegenError};
pub use config::{Config, ConfigError};
pub use design::{Design, DesignError, Module, Port, PortDirection};
pub use driver::{run_backend, run_pass, write_design, DriverError, OutputTarget};
