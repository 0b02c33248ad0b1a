//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Company name for employers, full name for job seekers.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Login email.
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 8, message = "Password must be at least 8 characters long"))]
    pub password: String,
    /// Repeated password.
    pub confirm_password: String,
    /// "employer" or "jobseeker".
    pub account_type: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Login email.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Token refresh request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    /// Refresh token.
    pub refresh_token: String,
}

/// Forgot-password request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ForgotPasswordRequest {
    /// Email to send the reset token for.
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

/// Reset-password request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResetPasswordRequest {
    /// Reset token from the issued link.
    #[validate(length(min = 1, message = "Token is required"))]
    pub token: String,
    /// Email the token was issued for.
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    /// New password.
    #[validate(length(min = 8, message = "Password must be at least 8 characters long"))]
    pub new_password: String,
    /// Repeated new password.
    pub confirm_password: String,
}

/// Password change request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    /// Current password.
    #[validate(length(min = 1, message = "Current password is required"))]
    pub current_password: String,
    /// New password.
    #[validate(length(min = 8, message = "Password must be at least 8 characters long"))]
    pub new_password: String,
}

/// Create/update job request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PostJobRequest {
    /// Job title.
    #[validate(length(min = 1, max = 255, message = "Job title is required"))]
    pub title: String,
    /// Job description.
    #[validate(length(min = 1, message = "Job description is required"))]
    pub description: String,
    /// Responsibilities section.
    pub responsibilities: Option<String>,
    /// Requirements section.
    pub requirements: Option<String>,
    /// Benefits section.
    pub benefits: Option<String>,
    /// Work location.
    pub location: Option<String>,
    /// Salary range lower bound.
    pub salary_min: Option<f64>,
    /// Salary range upper bound.
    pub salary_max: Option<f64>,
    /// Salary period slug.
    pub salary_period: Option<String>,
    /// Employment type slug.
    #[validate(length(min = 1, message = "Job type is required"))]
    pub job_type: String,
    /// Category slug.
    #[validate(length(min = 1, message = "Job category is required"))]
    pub category: String,
    /// Experience level slug.
    pub experience_level: Option<String>,
    /// Education level slug.
    pub education_level: Option<String>,
    /// Featured flag.
    #[serde(default)]
    pub featured: bool,
    /// Save as a draft instead of publishing.
    #[serde(default)]
    pub save_as_draft: bool,
}

/// Partial job update request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateJobRequest {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New responsibilities section.
    pub responsibilities: Option<String>,
    /// New requirements section.
    pub requirements: Option<String>,
    /// New benefits section.
    pub benefits: Option<String>,
    /// New location.
    pub location: Option<String>,
    /// New salary lower bound.
    pub salary_min: Option<f64>,
    /// New salary upper bound.
    pub salary_max: Option<f64>,
    /// New salary period slug.
    pub salary_period: Option<String>,
    /// New employment type slug.
    pub job_type: Option<String>,
    /// New category slug.
    pub category: Option<String>,
    /// New experience level slug.
    pub experience_level: Option<String>,
    /// New education level slug.
    pub education_level: Option<String>,
    /// New featured flag.
    pub featured: Option<bool>,
}

/// Job status change request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeJobStatusRequest {
    /// New status slug.
    pub status: String,
}

/// Application status change request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeApplicationStatusRequest {
    /// New status slug.
    pub status: String,
}

/// Job seeker profile update request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateJobSeekerProfileRequest {
    /// New first name.
    pub first_name: Option<String>,
    /// New last name.
    pub last_name: Option<String>,
    /// New headline.
    pub headline: Option<String>,
    /// New summary.
    pub summary: Option<String>,
    /// New location.
    pub location: Option<String>,
    /// New phone number.
    pub phone: Option<String>,
    /// New skills list.
    pub skills: Option<String>,
    /// New experience description.
    pub experience: Option<String>,
    /// New education description.
    pub education: Option<String>,
}

/// Employer profile update request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEmployerProfileRequest {
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
    /// New location.
    pub location: Option<String>,
}

/// Query parameters for public job browsing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrowseJobsQuery {
    /// Keyword matched against title, description, and location.
    pub keyword: Option<String>,
    /// Category slug.
    pub category: Option<String>,
    /// Employment type slug.
    pub job_type: Option<String>,
    /// Experience level slug.
    pub experience_level: Option<String>,
    /// Location substring.
    pub location: Option<String>,
    /// Only featured postings ("1" or "true").
    pub featured: Option<String>,
    /// Sort order slug.
    pub sort: Option<String>,
}

/// Query parameters for employer job listings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployerJobsQuery {
    /// Status filter slug.
    pub status: Option<String>,
    /// Title keyword search.
    pub keyword: Option<String>,
}

/// Query parameters for application listings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApplicationsQuery {
    /// Status filter slug.
    pub status: Option<String>,
    /// Restrict to one job (employer side).
    pub job_id: Option<Uuid>,
}
