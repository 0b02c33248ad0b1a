//! Job seeker account entity.

pub mod model;

pub use model::{CreateJobSeeker, JobSeeker, UpdateJobSeekerProfile};
