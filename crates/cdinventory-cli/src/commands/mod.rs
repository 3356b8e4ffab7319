pub mod config;
pub mod list;
pub mod session;

pub use list::show_inventory;
pub use session::run_interactive;
