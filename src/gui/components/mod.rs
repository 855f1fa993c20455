// src/gui/components/mod.rs
pub mod data_table;
pub mod form;
pub mod run_bar;
pub mod status_log;
