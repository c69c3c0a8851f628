// Library surface so integration tests can drive the core headlessly.
// The ui module stays bin-only; it renders App, which lives in main.rs.
pub mod chart;
pub mod config;
pub mod keymap;
pub mod keys;
pub mod report;
pub mod runtime;
pub mod sequencer;
pub mod trial;
pub mod util;
