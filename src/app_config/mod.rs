pub mod env;
pub mod log;

pub use env::AppConfig;
