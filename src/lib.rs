// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod error;
pub mod log;
pub mod specs;

pub mod data;
pub mod file;
pub mod gui;
pub mod progress;
pub mod runner;
pub mod scrape;

#[cfg(feature = "cli")]
pub mod cli;
