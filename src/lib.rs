// src/lib.rs

#[macro_use]
pub mod log;

pub mod config;
pub mod loader;
pub mod present;
pub mod record;
pub mod store;
pub mod view;

pub mod gui;

#[cfg(feature = "cli")]
pub mod cli;
