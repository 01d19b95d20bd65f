pub mod employee;
pub mod health;
pub mod root;
