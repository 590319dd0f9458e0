// MwIcons - lib.rs
//
// Library entry point. The binary in `main.rs` is a thin driver over
// `app::generate`; everything here is usable from tests and build scripts.

pub mod app;
pub mod core;
pub mod platform;
pub mod util;

pub use crate::app::generate::{generate_all, generate_all_with, GenerationReport, GeneratorConfig};
pub use crate::core::params::{derive_parameters, IconParams};
pub use crate::core::template::{render, IconStyle, IconTemplate, MarkTemplate};
pub use crate::util::error::{IconError, Result};
