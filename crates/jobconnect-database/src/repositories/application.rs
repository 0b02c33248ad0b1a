//! Application repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use jobconnect_core::error::{AppError, ErrorKind};
use jobconnect_core::result::AppResult;
use jobconnect_core::types::pagination::{PageRequest, PageResponse};
use jobconnect_entity::application::{
    Application, ApplicationDetail, ApplicationStatus, ApplicationWithJob, NewApplication,
};

/// Columns selected for the applicant's view of an application.
const WITH_JOB_COLUMNS: &str = "a.*, j.title AS job_title, j.status AS job_status, \
     e.company_name, e.logo AS company_logo";

/// Columns selected for the employer's view of an application.
const DETAIL_COLUMNS: &str = "a.*, j.title AS job_title, j.employer_id, \
     s.first_name, s.last_name, s.email, s.headline, \
     s.location AS applicant_location, s.phone";

/// Per-status application counts for one job seeker.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, sqlx::FromRow)]
pub struct ApplicationStatusCounts {
    /// All applications.
    pub total: i64,
    /// Pending applications.
    pub pending: i64,
    /// Reviewed applications.
    pub reviewed: i64,
    /// Shortlisted applications.
    pub shortlisted: i64,
    /// Interviewed applications.
    pub interviewed: i64,
    /// Offered applications.
    pub offered: i64,
    /// Hired applications.
    pub hired: i64,
    /// Rejected applications.
    pub rejected: i64,
}

/// Repository for job application CRUD and query operations.
#[derive(Debug, Clone)]
pub struct ApplicationRepository {
    pool: PgPool,
}

impl ApplicationRepository {
    /// Create a new application repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an application by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Application>> {
        sqlx::query_as::<_, Application>("SELECT * FROM applications WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find application", e)
            })
    }

    /// Find an application joined with its job and applicant info.
    pub async fn find_detail(&self, id: Uuid) -> AppResult<Option<ApplicationDetail>> {
        let sql = format!(
            "SELECT {DETAIL_COLUMNS} FROM applications a \
             JOIN jobs j ON a.job_id = j.id \
             JOIN jobseekers s ON a.jobseeker_id = s.id \
             WHERE a.id = $1"
        );
        sqlx::query_as::<_, ApplicationDetail>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find application detail", e)
            })
    }

    /// Check if the seeker already applied for the job.
    pub async fn exists(&self, job_id: Uuid, jobseeker_id: Uuid) -> AppResult<bool> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM applications WHERE job_id = $1 AND jobseeker_id = $2",
        )
        .bind(job_id)
        .bind(jobseeker_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check for application", e)
        })?;
        Ok(count > 0)
    }

    /// Submit a new application.
    pub async fn create(&self, data: &NewApplication) -> AppResult<Application> {
        sqlx::query_as::<_, Application>(
            "INSERT INTO applications (job_id, jobseeker_id, resume, cover_letter) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(data.job_id)
        .bind(data.jobseeker_id)
        .bind(&data.resume)
        .bind(&data.cover_letter)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("applications_job_jobseeker_key") =>
            {
                AppError::conflict("You have already applied for this job".to_string())
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create application", e),
        })
    }

    /// Update an application's review status.
    pub async fn update_status(
        &self,
        id: Uuid,
        status: ApplicationStatus,
    ) -> AppResult<Application> {
        sqlx::query_as::<_, Application>(
            "UPDATE applications SET status = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update status", e))?
        .ok_or_else(|| AppError::not_found(format!("Application {id} not found")))
    }

    /// Delete an application (withdrawal).
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM applications WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete application", e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    /// List one seeker's applications with job and company info.
    pub async fn find_by_jobseeker(
        &self,
        jobseeker_id: Uuid,
        status: Option<ApplicationStatus>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<ApplicationWithJob>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM applications \
             WHERE jobseeker_id = $1 AND ($2::application_status IS NULL OR status = $2)",
        )
        .bind(jobseeker_id)
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count applications", e)
        })?;

        let sql = format!(
            "SELECT {WITH_JOB_COLUMNS} FROM applications a \
             JOIN jobs j ON a.job_id = j.id \
             JOIN employers e ON j.employer_id = e.id \
             WHERE a.jobseeker_id = $1 AND ($2::application_status IS NULL OR a.status = $2) \
             ORDER BY a.created_at DESC LIMIT $3 OFFSET $4"
        );
        let applications = sqlx::query_as::<_, ApplicationWithJob>(&sql)
            .bind(jobseeker_id)
            .bind(status)
            .bind(page.limit() as i64)
            .bind(page.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list applications", e)
            })?;

        Ok(PageResponse::new(
            applications,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// List applications across one employer's jobs.
    pub async fn find_by_employer(
        &self,
        employer_id: Uuid,
        job_id: Option<Uuid>,
        status: Option<ApplicationStatus>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<ApplicationDetail>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM applications a JOIN jobs j ON a.job_id = j.id \
             WHERE j.employer_id = $1 \
               AND ($2::uuid IS NULL OR a.job_id = $2) \
               AND ($3::application_status IS NULL OR a.status = $3)",
        )
        .bind(employer_id)
        .bind(job_id)
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count applications", e)
        })?;

        let sql = format!(
            "SELECT {DETAIL_COLUMNS} FROM applications a \
             JOIN jobs j ON a.job_id = j.id \
             JOIN jobseekers s ON a.jobseeker_id = s.id \
             WHERE j.employer_id = $1 \
               AND ($2::uuid IS NULL OR a.job_id = $2) \
               AND ($3::application_status IS NULL OR a.status = $3) \
             ORDER BY a.created_at DESC LIMIT $4 OFFSET $5"
        );
        let applications = sqlx::query_as::<_, ApplicationDetail>(&sql)
            .bind(employer_id)
            .bind(job_id)
            .bind(status)
            .bind(page.limit() as i64)
            .bind(page.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list applications", e)
            })?;

        Ok(PageResponse::new(
            applications,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Per-status application counts for one seeker.
    pub async fn status_counts_for_jobseeker(
        &self,
        jobseeker_id: Uuid,
    ) -> AppResult<ApplicationStatusCounts> {
        sqlx::query_as::<_, ApplicationStatusCounts>(
            "SELECT COUNT(*) AS total, \
                    COUNT(*) FILTER (WHERE status = 'pending') AS pending, \
                    COUNT(*) FILTER (WHERE status = 'reviewed') AS reviewed, \
                    COUNT(*) FILTER (WHERE status = 'shortlisted') AS shortlisted, \
                    COUNT(*) FILTER (WHERE status = 'interviewed') AS interviewed, \
                    COUNT(*) FILTER (WHERE status = 'offered') AS offered, \
                    COUNT(*) FILTER (WHERE status = 'hired') AS hired, \
                    COUNT(*) FILTER (WHERE status = 'rejected') AS rejected \
             FROM applications WHERE jobseeker_id = $1",
        )
        .bind(jobseeker_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count application statuses", e)
        })
    }

    /// Total applications received across one employer's jobs.
    pub async fn count_for_employer(&self, employer_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM applications a JOIN jobs j ON a.job_id = j.id \
             WHERE j.employer_id = $1",
        )
        .bind(employer_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count applications", e)
        })
    }

    /// Most recent applications across one employer's jobs.
    pub async fn recent_for_employer(
        &self,
        employer_id: Uuid,
        limit: i64,
    ) -> AppResult<Vec<ApplicationDetail>> {
        let sql = format!(
            "SELECT {DETAIL_COLUMNS} FROM applications a \
             JOIN jobs j ON a.job_id = j.id \
             JOIN jobseekers s ON a.jobseeker_id = s.id \
             WHERE j.employer_id = $1 \
             ORDER BY a.created_at DESC LIMIT $2"
        );
        sqlx::query_as::<_, ApplicationDetail>(&sql)
            .bind(employer_id)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list recent applications", e)
            })
    }

    /// Most recent applications for one seeker.
    pub async fn recent_for_jobseeker(
        &self,
        jobseeker_id: Uuid,
        limit: i64,
    ) -> AppResult<Vec<ApplicationWithJob>> {
        let sql = format!(
            "SELECT {WITH_JOB_COLUMNS} FROM applications a \
             JOIN jobs j ON a.job_id = j.id \
             JOIN employers e ON j.employer_id = e.id \
             WHERE a.jobseeker_id = $1 \
             ORDER BY a.created_at DESC LIMIT $2"
        );
        sqlx::query_as::<_, ApplicationWithJob>(&sql)
            .bind(jobseeker_id)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list recent applications", e)
            })
    }
}
