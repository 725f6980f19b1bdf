use ndarray::{s, Array1, ArrayBase, Axis, Data, Dimension, Zip};

use super::MetricsError;

/// Calculate the DVARS sequence of a 4D volume with time on the last axis.
///
/// Each voxel's time course is differenced between neighbouring timepoints,
/// squared, averaged over all voxels per timepoint pair, and square-rooted.
/// The result has `T - 1` elements; element `i` compares volume `i` with
/// volume `i + 1`.
///
/// The volume is read in place through its time lanes, so any memory layout
/// (including transposed or sliced views) gives the same answer as the
/// flattened `(voxels, T)` matrix.
pub fn dvars<S, D>(volume: &ArrayBase<S, D>) -> Result<Array1<f64>, MetricsError>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let ndim = volume.ndim();
    if ndim != 4 {
        return Err(MetricsError::NotFourDimensional { ndim });
    }

    let time_axis = Axis(ndim - 1);
    let timepoints = volume.len_of(time_axis);
    if timepoints < 2 {
        return Err(MetricsError::TooFewTimepoints { timepoints });
    }

    let voxels = volume.len() / timepoints;
    if voxels == 0 {
        return Err(MetricsError::NoVoxels);
    }

    let mut sum_sq = Array1::<f64>::zeros(timepoints - 1);
    for lane in volume.lanes(time_axis) {
        Zip::from(&mut sum_sq)
            .and(lane.slice(s![1..]))
            .and(lane.slice(s![..-1]))
            .for_each(|acc, &next, &prev| {
                let d = next - prev;
                *acc += d * d;
            });
    }

    let n = voxels as f64;
    tracing::trace!(voxels, timepoints, "dvars computed");
    Ok(sum_sq.mapv_into(|s| (s / n).sqrt()))
}
