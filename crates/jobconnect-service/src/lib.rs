//! Business logic services for the JobConnect backend.
//!
//! Each service owns the authorization rules for its operations; HTTP
//! handlers stay thin and delegate here.

pub mod application;
pub mod auth;
pub mod context;
pub mod dashboard;
pub mod job;
pub mod profile;
pub mod saved_job;

pub use context::RequestContext;
