pub mod generator;
pub mod ident;
pub mod output;

pub use generator::{Config, Generator};
