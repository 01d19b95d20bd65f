pub mod endpoints;
pub mod requests;
