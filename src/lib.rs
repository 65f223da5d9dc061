//! Interactive process and resource monitor for Linux.
//!
//! The [`system`] module samples memory, CPU and the process table from
//! procfs; [`app`] and [`ui`] drive the terminal interface on top of it.

pub mod action;
pub mod app;
pub mod config;
pub mod event;
pub mod format;
pub mod logging;
pub mod report;
pub mod system;
pub mod ui;
