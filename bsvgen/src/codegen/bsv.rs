mod binding;
mod bsv_codegen;
mod context;
mod interface;
mod schedule;

pub use bsv_codegen::{BSVCodegen, MODULE_DELIMITER};
pub use context::{Method, ModuleContext, SubInterface};
