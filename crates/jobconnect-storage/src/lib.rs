//! Local filesystem storage for uploaded documents (resumes, logos,
//! profile photos).

pub mod kind;
pub mod store;

pub use kind::DocumentKind;
pub use store::DocumentStore;
