pub mod access_widener;
pub mod archive;
pub mod config;
