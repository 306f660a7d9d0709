//! geoload library - GeoJSON to PostgreSQL loading via ogr2ogr
//!
//! Provides configuration resolution, the `ogr2ogr` command runner, and the
//! command and output infrastructure for the `geoload` binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod loader;
pub mod logging;
pub mod output;

#[macro_use]
pub mod test_macros;

#[cfg(test)]
pub mod test_utils;
