pub mod classifier;
pub mod formatter;
pub mod platform;
