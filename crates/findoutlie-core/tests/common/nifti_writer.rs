//! Minimal single-file NIfTI-1 writer for test fixtures (little-endian float32).

use std::fs;
use std::path::Path;

/// Write `data` (x fastest, then y, z, t) as a `.nii` file with the given dims.
pub fn write_nifti_f32(path: &Path, dims: [usize; 4], data: &[f32]) {
    assert_eq!(data.len(), dims.iter().product::<usize>());
    let mut header = [0u8; 348];
    header[0..4].copy_from_slice(&348i32.to_le_bytes());

    let dim: [i16; 8] = [
        4,
        dims[0] as i16,
        dims[1] as i16,
        dims[2] as i16,
        dims[3] as i16,
        1,
        1,
        1,
    ];
    for (i, d) in dim.iter().enumerate() {
        let off = 40 + i * 2;
        header[off..off + 2].copy_from_slice(&d.to_le_bytes());
    }
    // datatype FLOAT32, bitpix 32
    header[70..72].copy_from_slice(&16i16.to_le_bytes());
    header[72..74].copy_from_slice(&32i16.to_le_bytes());
    for i in 0..8 {
        let off = 76 + i * 4;
        header[off..off + 4].copy_from_slice(&1.0f32.to_le_bytes());
    }
    // vox_offset: header plus 4-byte empty extension block
    header[108..112].copy_from_slice(&352.0f32.to_le_bytes());
    header[112..116].copy_from_slice(&1.0f32.to_le_bytes());
    header[116..120].copy_from_slice(&0.0f32.to_le_bytes());
    header[344..348].copy_from_slice(b"n+1\0");

    let mut bytes = Vec::with_capacity(352 + data.len() * 4);
    bytes.extend_from_slice(&header);
    bytes.extend_from_slice(&[0u8; 4]);
    for v in data {
        bytes.extend_from_slice(&v.to_le_bytes());
    }
    fs::write(path, bytes).unwrap();
}
