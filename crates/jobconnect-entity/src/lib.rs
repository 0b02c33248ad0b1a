//! Domain entities for the JobConnect job board.
//!
//! Each module maps to one database table plus its associated enums and
//! create/update payload structs.

pub mod account;
pub mod application;
pub mod employer;
pub mod job;
pub mod jobseeker;
pub mod password_reset;
pub mod saved_job;

pub use account::AccountType;
pub use application::{Application, ApplicationStatus};
pub use employer::Employer;
pub use job::{EmploymentType, Job, JobStatus, SalaryPeriod};
pub use jobseeker::JobSeeker;
pub use password_reset::PasswordReset;
pub use saved_job::SavedJob;
