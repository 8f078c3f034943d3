//! Outer adapters: the CSV action script, the JSON view output and the
//! presentation formatting shared by both.

pub mod csv;
pub mod format;
pub mod json;
pub mod view;
