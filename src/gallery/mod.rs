//! Item ingestion, configuration and the stateful gallery instance.

pub(crate) mod config;
pub(crate) mod controller;
pub(crate) mod item;
