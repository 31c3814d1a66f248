//! Command implementations for the barista-configure CLI

pub mod completions;
pub mod configure;
pub mod version;
