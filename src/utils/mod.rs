//! Utility functions shared by the demos
//!
//! Logging helpers and console printing live here so that the repositories
//! themselves stay free of I/O.

pub mod logging;
