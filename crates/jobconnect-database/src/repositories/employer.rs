//! Employer repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use jobconnect_core::error::{AppError, ErrorKind};
use jobconnect_core::result::AppResult;
use jobconnect_entity::employer::{CreateEmployer, Employer, UpdateEmployerProfile};

/// Repository for employer account CRUD operations.
#[derive(Debug, Clone)]
pub struct EmployerRepository {
    pool: PgPool,
}

impl EmployerRepository {
    /// Create a new employer repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an employer by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Employer>> {
        sqlx::query_as::<_, Employer>("SELECT * FROM employers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find employer by id", e)
            })
    }

    /// Find an employer by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<Employer>> {
        sqlx::query_as::<_, Employer>("SELECT * FROM employers WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find employer by email", e)
            })
    }

    /// Create a new employer account.
    pub async fn create(&self, data: &CreateEmployer) -> AppResult<Employer> {
        sqlx::query_as::<_, Employer>(
            "INSERT INTO employers (company_name, email, password_hash) \
             VALUES ($1, $2, $3) \
             RETURNING *",
        )
        .bind(&data.company_name)
        .bind(&data.email)
        .bind(&data.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("employers_email_key") =>
            {
                AppError::conflict("Email already in use".to_string())
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create employer", e),
        })
    }

    /// Update an employer's company profile fields.
    pub async fn update_profile(
        &self,
        id: Uuid,
        data: &UpdateEmployerProfile,
    ) -> AppResult<Employer> {
        sqlx::query_as::<_, Employer>(
            "UPDATE employers SET company_name = COALESCE($2, company_name), \
                                  website = COALESCE($3, website), \
                                  industry = COALESCE($4, industry), \
                                  company_size = COALESCE($5, company_size), \
                                  description = COALESCE($6, description), \
                                  location = COALESCE($7, location), \
                                  updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.company_name)
        .bind(&data.website)
        .bind(&data.industry)
        .bind(&data.company_size)
        .bind(&data.description)
        .bind(&data.location)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update employer profile", e)
        })?
        .ok_or_else(|| AppError::not_found(format!("Employer {id} not found")))
    }

    /// Update an employer's logo filename.
    pub async fn update_logo(&self, id: Uuid, logo: &str) -> AppResult<()> {
        let result = sqlx::query("UPDATE employers SET logo = $2, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .bind(logo)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update logo", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Employer {id} not found")));
        }
        Ok(())
    }

    /// Update an employer's password hash.
    pub async fn update_password(&self, id: Uuid, password_hash: &str) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE employers SET password_hash = $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(password_hash)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update password", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Employer {id} not found")));
        }
        Ok(())
    }

    /// Update the password hash for the account with the given email.
    pub async fn update_password_by_email(&self, email: &str, password_hash: &str) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE employers SET password_hash = $2, updated_at = NOW() \
             WHERE LOWER(email) = LOWER($1)",
        )
        .bind(email)
        .bind(password_hash)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update password", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("No employer with that email"));
        }
        Ok(())
    }
}
