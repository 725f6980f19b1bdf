//! DVARS outlier detection for 4D fMRI volumes, plus integrity checks for the
//! downloaded dataset.

pub mod config;
pub mod logging;

pub mod checksum;
pub mod groups;
pub mod manifest;
pub mod metrics;
pub mod validate;
pub mod volume;
