//! Job application entity.

pub mod model;
pub mod status;

pub use model::{Application, ApplicationDetail, ApplicationWithJob, NewApplication};
pub use status::ApplicationStatus;
