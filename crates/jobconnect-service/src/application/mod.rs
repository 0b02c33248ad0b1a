//! Job application operations.

pub mod service;

pub use service::{ApplicationService, ApplyData, JobSeekerApplicationList, ResumeUpload};
