//! Data models for configuration and extraction results.

pub mod config;
pub mod document;
