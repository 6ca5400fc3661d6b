//! Syllabus Recap
//!
//! Static HTML syllabus generation with hierarchical workload statistics.
//!
//! Course documents are loaded into a cycle -> semester -> UE -> ECUE tree
//! whose hours are aggregated at every level. Each cycle is rendered to one
//! self-contained page, including a merged-cell recap table of all hours.
//!
//! This crate provides the core implementation for the `syllabus` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! syllabus build --source src --mapping templates/mapping.toml --output public
//! syllabus check --source src
//! ```

pub mod aggregator;
pub mod commands;
pub mod model;
pub mod output;
pub mod parser;
pub mod recap;
pub mod render;
pub mod utils;
