//! NIfTI image loading for the DVARS metric.

use crate::metrics::{dvars, MetricsError};
use ndarray::{Array1, ArrayD};
use nifti::{IntoNdArray, NiftiObject, ReaderOptions};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VolumeError {
    #[error("cannot read image {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: nifti::NiftiError,
    },
    #[error("cannot compute DVARS for {}", path.display())]
    Metrics {
        path: PathBuf,
        #[source]
        source: MetricsError,
    },
}

/// Load a `.nii` or `.nii.gz` image as `f64` voxels, with the header's
/// scaling slope and intercept applied.
pub fn load_volume(path: &Path) -> Result<ArrayD<f64>, VolumeError> {
    let read_err = |source| VolumeError::Read {
        path: path.to_path_buf(),
        source,
    };
    let obj = ReaderOptions::new().read_file(path).map_err(read_err)?;
    let data = obj.into_volume().into_ndarray::<f64>().map_err(read_err)?;
    tracing::debug!("loaded {} with shape {:?}", path.display(), data.shape());
    Ok(data)
}

/// Load an image and compute its DVARS sequence.
pub fn dvars_path(path: &Path) -> Result<Array1<f64>, VolumeError> {
    let data = load_volume(path)?;
    dvars(&data).map_err(|source| VolumeError::Metrics {
        path: path.to_path_buf(),
        source,
    })
}
