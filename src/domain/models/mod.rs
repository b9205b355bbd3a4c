pub mod envelope;
pub mod file;
