pub mod file;
pub mod in_memory;
pub mod simulated;
