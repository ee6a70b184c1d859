pub mod config;
pub mod logging;

pub mod http;
pub mod logo;
pub mod remote;
pub mod store;
pub mod table;
