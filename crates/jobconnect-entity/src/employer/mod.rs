//! Employer account entity.

pub mod model;

pub use model::{CreateEmployer, Employer, UpdateEmployerProfile};
