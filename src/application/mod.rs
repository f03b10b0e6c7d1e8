//! Application services: prompt rendering, backend selection, shared settings.

pub mod catalog;
pub mod gateway;
pub mod prompt;
pub mod state;
