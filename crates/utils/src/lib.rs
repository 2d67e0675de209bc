//! Shared helpers for the gpu-operator binaries: logging setup and build version.

mod build_info;
pub mod logging;
pub mod version;
