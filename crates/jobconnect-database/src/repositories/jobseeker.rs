//! Job seeker repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use jobconnect_core::error::{AppError, ErrorKind};
use jobconnect_core::result::AppResult;
use jobconnect_entity::jobseeker::{CreateJobSeeker, JobSeeker, UpdateJobSeekerProfile};

/// Repository for job seeker account CRUD operations.
#[derive(Debug, Clone)]
pub struct JobSeekerRepository {
    pool: PgPool,
}

impl JobSeekerRepository {
    /// Create a new job seeker repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a job seeker by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<JobSeeker>> {
        sqlx::query_as::<_, JobSeeker>("SELECT * FROM jobseekers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find job seeker by id", e)
            })
    }

    /// Find a job seeker by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<JobSeeker>> {
        sqlx::query_as::<_, JobSeeker>("SELECT * FROM jobseekers WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find job seeker by email", e)
            })
    }

    /// Create a new job seeker account.
    pub async fn create(&self, data: &CreateJobSeeker) -> AppResult<JobSeeker> {
        sqlx::query_as::<_, JobSeeker>(
            "INSERT INTO jobseekers (first_name, last_name, email, password_hash) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.email)
        .bind(&data.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("jobseekers_email_key") =>
            {
                AppError::conflict("Email already in use".to_string())
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create job seeker", e),
        })
    }

    /// Update a job seeker's profile fields.
    pub async fn update_profile(
        &self,
        id: Uuid,
        data: &UpdateJobSeekerProfile,
    ) -> AppResult<JobSeeker> {
        sqlx::query_as::<_, JobSeeker>(
            "UPDATE jobseekers SET first_name = COALESCE($2, first_name), \
                                   last_name = COALESCE($3, last_name), \
                                   headline = COALESCE($4, headline), \
                                   summary = COALESCE($5, summary), \
                                   location = COALESCE($6, location), \
                                   phone = COALESCE($7, phone), \
                                   skills = COALESCE($8, skills), \
                                   experience = COALESCE($9, experience), \
                                   education = COALESCE($10, education), \
                                   updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.headline)
        .bind(&data.summary)
        .bind(&data.location)
        .bind(&data.phone)
        .bind(&data.skills)
        .bind(&data.experience)
        .bind(&data.education)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update profile", e))?
        .ok_or_else(|| AppError::not_found(format!("Job seeker {id} not found")))
    }

    /// Update a job seeker's stored resume filename.
    pub async fn update_resume(&self, id: Uuid, resume: &str) -> AppResult<()> {
        let result =
            sqlx::query("UPDATE jobseekers SET resume = $2, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .bind(resume)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to update resume", e)
                })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Job seeker {id} not found")));
        }
        Ok(())
    }

    /// Update a job seeker's profile photo filename.
    pub async fn update_profile_image(&self, id: Uuid, profile_image: &str) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE jobseekers SET profile_image = $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(profile_image)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update profile image", e)
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Job seeker {id} not found")));
        }
        Ok(())
    }

    /// Update a job seeker's password hash.
    pub async fn update_password(&self, id: Uuid, password_hash: &str) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE jobseekers SET password_hash = $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(password_hash)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update password", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Job seeker {id} not found")));
        }
        Ok(())
    }

    /// Update the password hash for the account with the given email.
    pub async fn update_password_by_email(&self, email: &str, password_hash: &str) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE jobseekers SET password_hash = $2, updated_at = NOW() \
             WHERE LOWER(email) = LOWER($1)",
        )
        .bind(email)
        .bind(password_hash)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update password", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("No job seeker with that email"));
        }
        Ok(())
    }
}
