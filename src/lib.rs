//! Theme Studio Library
//!
//! This library provides the core of a Qt theme editor: a WCAG color
//! accessibility engine, per-category stylesheet generation, a debounced
//! live preview propagator, theme import and export, and theme generation
//! from a background color.

// Module declarations
pub mod accessibility;
pub mod cli;
pub mod config;
pub mod constants;
pub mod export;
pub mod generator;
pub mod import;
pub mod models;
pub mod preview;
pub mod services;
