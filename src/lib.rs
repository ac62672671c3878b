// src/lib.rs
pub mod client;
pub mod config;
pub mod probe;
pub mod report;
