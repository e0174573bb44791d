//! Video search front-end API with keyword-driven content analysis.

pub mod analyzer;
pub mod api;
pub mod config;
pub mod error;
pub mod search;
