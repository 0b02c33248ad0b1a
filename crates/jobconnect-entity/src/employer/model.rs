//! Employer entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A registered employer account.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Employer {
    /// Unique employer identifier.
    pub id: Uuid,
    /// Company name shown on postings.
    pub company_name: String,
    /// Login email, unique across both account tables.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Company website URL.
    pub website: Option<String>,
    /// Industry sector.
    pub industry: Option<String>,
    /// Company size bracket (e.g. "11-50").
    pub company_size: Option<String>,
    /// Company description.
    pub description: Option<String>,
    /// Headquarters location.
    pub location: Option<String>,
    /// Stored filename of the uploaded logo.
    pub logo: Option<String>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new employer account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmployer {
    /// Company name.
    pub company_name: String,
    /// Login email.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
}

/// Data for updating an employer's company profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEmployerProfile {
    /// New company name.
    pub company_name: Option<String>,
    /// New website URL.
    pub website: Option<String>,
    /// New industry sector.
    pub industry: Option<String>,
    /// New company size bracket.
    pub company_size: Option<String>,
    /// New company description.
    pub description: Option<String>,
    /// New headquarters location.
    pub location: Option<String>,
}
