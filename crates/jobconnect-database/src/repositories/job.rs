//! Job repository implementation.
//!
//! Public browse queries use `($n IS NULL OR ...)` push-down filters so the
//! SQL stays static and fully parameterized; only the whitelisted ORDER BY
//! fragment is interpolated.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::str::FromStr;
use uuid::Uuid;

use jobconnect_core::error::{AppError, ErrorKind};
use jobconnect_core::result::AppResult;
use jobconnect_core::types::pagination::{PageRequest, PageResponse};
use jobconnect_entity::job::{CreateJob, Job, JobStatus, JobWithCompany, UpdateJob};

/// Sort orders for public job browsing. Featured postings always sort first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JobSort {
    /// Newest postings first (default).
    #[default]
    Newest,
    /// Oldest postings first.
    Oldest,
    /// Title A→Z.
    TitleAsc,
    /// Title Z→A.
    TitleDesc,
}

impl JobSort {
    /// The ORDER BY fragment for this sort. Values are fixed strings, never
    /// user input.
    fn order_clause(&self) -> &'static str {
        match self {
            Self::Newest => "j.featured DESC, j.created_at DESC",
            Self::Oldest => "j.featured DESC, j.created_at ASC",
            Self::TitleAsc => "j.featured DESC, j.title ASC",
            Self::TitleDesc => "j.featured DESC, j.title DESC",
        }
    }
}

impl FromStr for JobSort {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(Self::Newest),
            "oldest" => Ok(Self::Oldest),
            "title_asc" => Ok(Self::TitleAsc),
            "title_desc" => Ok(Self::TitleDesc),
            _ => Err(AppError::validation(format!("Invalid sort order: '{s}'"))),
        }
    }
}

/// Filters for public job browsing.
#[derive(Debug, Clone, Default)]
pub struct JobBrowseFilter {
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
    /// Only featured postings.
    pub featured: bool,
    /// Sort order.
    pub sort: JobSort,
}

/// Per-status posting counts for one employer.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, sqlx::FromRow)]
pub struct JobStatusCounts {
    /// Active postings.
    pub active: i64,
    /// Filled postings.
    pub filled: i64,
    /// Closed postings.
    pub closed: i64,
    /// Draft postings.
    pub draft: i64,
}

impl JobStatusCounts {
    /// Total postings across all statuses.
    pub fn total(&self) -> i64 {
        self.active + self.filled + self.closed + self.draft
    }
}

const BROWSE_CONDITIONS: &str = "j.status = 'active' AND j.expires_at > NOW() \
     AND ($1::text IS NULL OR j.title ILIKE $1 OR j.description ILIKE $1 OR j.location ILIKE $1) \
     AND ($2::text IS NULL OR j.category = $2) \
     AND ($3::text IS NULL OR j.job_type::text = $3) \
     AND ($4::text IS NULL OR j.experience_level = $4) \
     AND ($5::text IS NULL OR j.location ILIKE $5) \
     AND (NOT $6 OR j.featured)";

/// Repository for job posting CRUD and query operations.
#[derive(Debug, Clone)]
pub struct JobRepository {
    pool: PgPool,
}

impl JobRepository {
    /// Create a new job repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a job by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Job>> {
        sqlx::query_as::<_, Job>("SELECT * FROM jobs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find job by id", e))
    }

    /// Find a job joined with its company's public fields.
    pub async fn find_with_company(&self, id: Uuid) -> AppResult<Option<JobWithCompany>> {
        sqlx::query_as::<_, JobWithCompany>(
            "SELECT j.*, e.company_name, e.logo AS company_logo \
             FROM jobs j JOIN employers e ON j.employer_id = e.id \
             WHERE j.id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find job", e))
    }

    /// Browse active, unexpired jobs with filters and pagination.
    pub async fn browse(
        &self,
        filter: &JobBrowseFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<JobWithCompany>> {
        let keyword = filter.keyword.as_ref().map(|k| format!("%{k}%"));
        let location = filter.location.as_ref().map(|l| format!("%{l}%"));

        let count_sql = format!("SELECT COUNT(*) FROM jobs j WHERE {BROWSE_CONDITIONS}");
        let total: i64 = sqlx::query_scalar(&count_sql)
            .bind(&keyword)
            .bind(&filter.category)
            .bind(&filter.job_type)
            .bind(&filter.experience_level)
            .bind(&location)
            .bind(filter.featured)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count jobs", e))?;

        let list_sql = format!(
            "SELECT j.*, e.company_name, e.logo AS company_logo \
             FROM jobs j JOIN employers e ON j.employer_id = e.id \
             WHERE {BROWSE_CONDITIONS} \
             ORDER BY {} LIMIT $7 OFFSET $8",
            filter.sort.order_clause()
        );
        let jobs = sqlx::query_as::<_, JobWithCompany>(&list_sql)
            .bind(&keyword)
            .bind(&filter.category)
            .bind(&filter.job_type)
            .bind(&filter.experience_level)
            .bind(&location)
            .bind(filter.featured)
            .bind(page.limit() as i64)
            .bind(page.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to browse jobs", e))?;

        Ok(PageResponse::new(
            jobs,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// List one employer's jobs with optional status filter and keyword search.
    pub async fn find_by_employer(
        &self,
        employer_id: Uuid,
        status: Option<JobStatus>,
        keyword: Option<&str>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Job>> {
        let pattern = keyword.map(|k| format!("%{k}%"));

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM jobs \
             WHERE employer_id = $1 \
               AND ($2::job_status IS NULL OR status = $2) \
               AND ($3::text IS NULL OR title ILIKE $3)",
        )
        .bind(employer_id)
        .bind(status)
        .bind(&pattern)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count jobs", e))?;

        let jobs = sqlx::query_as::<_, Job>(
            "SELECT * FROM jobs \
             WHERE employer_id = $1 \
               AND ($2::job_status IS NULL OR status = $2) \
               AND ($3::text IS NULL OR title ILIKE $3) \
             ORDER BY created_at DESC LIMIT $4 OFFSET $5",
        )
        .bind(employer_id)
        .bind(status)
        .bind(&pattern)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list jobs", e))?;

        Ok(PageResponse::new(
            jobs,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Per-status posting counts for one employer.
    pub async fn status_counts(&self, employer_id: Uuid) -> AppResult<JobStatusCounts> {
        sqlx::query_as::<_, JobStatusCounts>(
            "SELECT COUNT(*) FILTER (WHERE status = 'active') AS active, \
                    COUNT(*) FILTER (WHERE status = 'filled') AS filled, \
                    COUNT(*) FILTER (WHERE status = 'closed') AS closed, \
                    COUNT(*) FILTER (WHERE status = 'draft') AS draft \
             FROM jobs WHERE employer_id = $1",
        )
        .bind(employer_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count job statuses", e))
    }

    /// Total detail-page views across one employer's postings.
    pub async fn total_views(&self, employer_id: Uuid) -> AppResult<i64> {
        let views: Option<i64> =
            sqlx::query_scalar("SELECT CAST(SUM(views) AS BIGINT) FROM jobs WHERE employer_id = $1")
                .bind(employer_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to sum job views", e)
                })?;
        Ok(views.unwrap_or(0))
    }

    /// Most recent postings for one employer.
    pub async fn recent_by_employer(&self, employer_id: Uuid, limit: i64) -> AppResult<Vec<Job>> {
        sqlx::query_as::<_, Job>(
            "SELECT * FROM jobs WHERE employer_id = $1 ORDER BY created_at DESC LIMIT $2",
        )
        .bind(employer_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list recent jobs", e))
    }

    /// Active jobs in categories the seeker has applied to, excluding jobs
    /// they already applied for.
    pub async fn recommended_for_seeker(
        &self,
        jobseeker_id: Uuid,
        limit: i64,
    ) -> AppResult<Vec<JobWithCompany>> {
        sqlx::query_as::<_, JobWithCompany>(
            "SELECT j.*, e.company_name, e.logo AS company_logo \
             FROM jobs j JOIN employers e ON j.employer_id = e.id \
             WHERE j.status = 'active' AND j.expires_at > NOW() \
               AND j.category IN ( \
                   SELECT DISTINCT pj.category FROM applications a \
                   JOIN jobs pj ON a.job_id = pj.id \
                   WHERE a.jobseeker_id = $1) \
               AND j.id NOT IN ( \
                   SELECT job_id FROM applications WHERE jobseeker_id = $1) \
             ORDER BY j.featured DESC, j.created_at DESC LIMIT $2",
        )
        .bind(jobseeker_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list recommended jobs", e)
        })
    }

    /// Create a new job posting.
    pub async fn create(&self, data: &CreateJob) -> AppResult<Job> {
        sqlx::query_as::<_, Job>(
            "INSERT INTO jobs (employer_id, title, description, responsibilities, requirements, \
                               benefits, location, salary_min, salary_max, salary_period, \
                               job_type, category, experience_level, education_level, status, \
                               featured, expires_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17) \
             RETURNING *",
        )
        .bind(data.employer_id)
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.responsibilities)
        .bind(&data.requirements)
        .bind(&data.benefits)
        .bind(&data.location)
        .bind(data.salary_min)
        .bind(data.salary_max)
        .bind(data.salary_period)
        .bind(data.job_type)
        .bind(&data.category)
        .bind(&data.experience_level)
        .bind(&data.education_level)
        .bind(data.status)
        .bind(data.featured)
        .bind(data.expires_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create job", e))
    }

    /// Partially update a job posting.
    pub async fn update(&self, id: Uuid, data: &UpdateJob) -> AppResult<Job> {
        sqlx::query_as::<_, Job>(
            "UPDATE jobs SET title = COALESCE($2, title), \
                             description = COALESCE($3, description), \
                             responsibilities = COALESCE($4, responsibilities), \
                             requirements = COALESCE($5, requirements), \
                             benefits = COALESCE($6, benefits), \
                             location = COALESCE($7, location), \
                             salary_min = COALESCE($8, salary_min), \
                             salary_max = COALESCE($9, salary_max), \
                             salary_period = COALESCE($10, salary_period), \
                             job_type = COALESCE($11, job_type), \
                             category = COALESCE($12, category), \
                             experience_level = COALESCE($13, experience_level), \
                             education_level = COALESCE($14, education_level), \
                             featured = COALESCE($15, featured), \
                             updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.responsibilities)
        .bind(&data.requirements)
        .bind(&data.benefits)
        .bind(&data.location)
        .bind(data.salary_min)
        .bind(data.salary_max)
        .bind(data.salary_period)
        .bind(data.job_type)
        .bind(&data.category)
        .bind(&data.experience_level)
        .bind(&data.education_level)
        .bind(data.featured)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update job", e))?
        .ok_or_else(|| AppError::not_found(format!("Job {id} not found")))
    }

    /// Update a job's status, optionally refreshing its expiration.
    pub async fn update_status(
        &self,
        id: Uuid,
        status: JobStatus,
        expires_at: Option<DateTime<Utc>>,
    ) -> AppResult<Job> {
        sqlx::query_as::<_, Job>(
            "UPDATE jobs SET status = $2, \
                             expires_at = COALESCE($3, expires_at), \
                             updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .bind(expires_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update job status", e))?
        .ok_or_else(|| AppError::not_found(format!("Job {id} not found")))
    }

    /// Increment the detail-page view counter.
    pub async fn increment_views(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("UPDATE jobs SET views = views + 1 WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to increment views", e)
            })?;
        Ok(())
    }

    /// Adjust the denormalized application counter by the given delta.
    pub async fn adjust_application_count(&self, id: Uuid, delta: i64) -> AppResult<()> {
        sqlx::query(
            "UPDATE jobs SET application_count = GREATEST(application_count + $2, 0) WHERE id = $1",
        )
        .bind(id)
        .bind(delta)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to adjust application count", e)
        })?;
        Ok(())
    }

    /// Delete a job posting.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete job", e))?;

        Ok(result.rows_affected() > 0)
    }
}
