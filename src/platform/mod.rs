// MwIcons - platform/mod.rs
//
// Filesystem access.
// Must NOT depend on: core, app.

pub mod fs;
