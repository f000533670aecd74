// src/gui/mod.rs
pub mod app;
pub mod components;
pub mod loading;
pub mod screen;

pub use app::run;
