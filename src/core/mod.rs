// MwIcons - core/mod.rs
//
// Pure icon logic: geometry and rendering.
// Must NOT depend on: platform or app, and performs no I/O.

pub mod params;
pub mod template;
