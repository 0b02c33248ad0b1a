//! Job posting entity.

pub mod attributes;
pub mod model;
pub mod status;

pub use attributes::{EmploymentType, SalaryPeriod};
pub use model::{CreateJob, Job, JobWithCompany, UpdateJob};
pub use status::JobStatus;
