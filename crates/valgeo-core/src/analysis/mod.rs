pub mod config;
pub mod enumerate;
pub mod error;
pub mod evaluate;
pub mod specification;
pub mod term;
