pub mod buffer;
pub mod config;
pub mod consts;
pub mod error;
pub mod geometry;
pub mod io;
pub mod shell;
pub mod view;
