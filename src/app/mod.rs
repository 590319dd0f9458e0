// MwIcons - app/mod.rs
//
// Orchestration: ties core rendering to platform file writes.

pub mod generate;
