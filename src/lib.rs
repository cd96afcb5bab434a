//! BEM class-name formatting for component libraries.
//!
//! - [`format`] turns a block (plus optional element and modifier) into one
//!   class name.
//! - [`ClassBuilder`] accumulates the classes of a single element.
//! - [`generate_class_names`] builds the namespaced class map for a block and
//!   its elements; [`Module`] formats component classes from such a map.
//!
//! The namespace is always passed in explicitly, usually from [`AppConfig`].

pub mod bem;
pub mod builder;
pub mod config;
pub mod error;
pub mod module;
pub mod names;

pub use bem::{format, Block, Descriptor};
pub use builder::{ClassBuilder, ClassMap, Param, Value};
pub use config::{AppConfig, ModuleConfig};
pub use error::{ClassError, Result};
pub use module::Module;
pub use names::{generate_class_names, ClassNames};
