pub mod config;
pub mod contact;
pub mod error;
pub mod filter;
pub mod remote;
pub mod theme;
pub mod types;

pub use config::parse_portfolio_toml;
pub use error::{Error, Result};
pub use types::*;
