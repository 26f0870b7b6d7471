// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod error;

pub mod export;
pub mod gui;
pub mod net;
pub mod store;
pub mod table;
