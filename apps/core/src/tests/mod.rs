//! Test Module
//!
//! Cross-module test suites for TextLens.
//!
//! ## Test Categories
//! - `analysis_tests`: tokenizer, syllables, readability and intent properties
//! - `diagnostics_tests`: reference checks and report assembly
//! - `config_tests`: environment-driven configuration
//! - `input_tests`: loading text from files and readers

pub mod analysis_tests;
pub mod input_tests;
