pub mod config;
pub mod error;
pub mod generator;

pub use config::CodeOptions;
pub use error::{CodeError, Result};
pub use generator::{
    generate, generate_default, generate_with,
    random::{IndexSource, RngIndexSource, SystemIndexSource},
};
