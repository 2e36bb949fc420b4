pub mod config;
pub mod console_interface;
pub mod core;
pub mod logging;
pub mod models;
pub mod session;
