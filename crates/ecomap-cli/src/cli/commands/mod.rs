//! CLI command handlers. Each command is in its own file for clarity.

mod fetch;
mod fetch_discord;
mod fetch_github;
mod gen_table;

pub use fetch_discord::run_fetch_discord;
pub use fetch_github::run_fetch_github;
pub use gen_table::run_gen_table;
