pub mod nifti_writer;
