pub mod browser;
pub mod config;
pub mod gate;
pub mod model;
pub mod paging;
pub mod selection;
pub mod session;
pub mod shell;
