// src/gui/components/mod.rs
pub mod data_table;
pub mod filter_bar;
pub mod header_bar;
pub mod stats_bar;
