//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::{DemandPostId, TutorPostId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::criteria::{DemandCriteria, TutorPushdown};
use crate::domain::entity::{DemandListing, DemandSubmission, TutorListing, TutorSubmission};
use crate::domain::repository::{DemandRepository, TutorRepository};
use crate::domain::value_object::ListingStatus;
use crate::error::{BoardError, BoardResult};

const TUTOR_COLUMNS: &str = r#"
    id,
    real_name,
    university,
    identity,
    teach_mode,
    gender,
    regions,
    grades,
    subjects,
    min_salary,
    max_salary,
    note,
    auth_files,
    status,
    created_at
"#;

const DEMAND_COLUMNS: &str = r#"
    id,
    teach_mode,
    region,
    detail_address,
    gender,
    subject,
    student_grade,
    min_salary,
    max_salary,
    note,
    created_at
"#;

/// PostgreSQL-backed listing repository
#[derive(Clone)]
pub struct PgBoardRepository {
    pool: PgPool,
}

impl PgBoardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Tutor Repository Implementation
// ============================================================================

impl TutorRepository for PgBoardRepository {
    async fn search(&self, pushdown: &TutorPushdown) -> BoardResult<Vec<TutorListing>> {
        let statuses: Vec<&str> = TutorPushdown::STATUSES.iter().map(|s| s.code()).collect();

        let sql = format!(
            r#"
            SELECT {TUTOR_COLUMNS}
            FROM tutor_posts
            WHERE status = ANY($1)
              AND ($2::text IS NULL OR teach_mode = $2)
              AND ($3::text IS NULL OR regions @> ARRAY[$3::text])
              AND ($4::integer IS NULL OR min_salary >= $4)
              AND ($5::integer IS NULL OR max_salary <= $5)
            ORDER BY created_at DESC
            "#
        );

        let rows = sqlx::query_as::<_, TutorRow>(&sql)
            .bind(&statuses)
            .bind(pushdown.mode.map(|m| m.label()))
            .bind(pushdown.region.map(|r| r.label()))
            .bind(pushdown.min_salary)
            .bind(pushdown.max_salary)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(TutorRow::into_listing).collect()
    }

    async fn list(&self, status: Option<ListingStatus>) -> BoardResult<Vec<TutorListing>> {
        let sql = format!(
            r#"
            SELECT {TUTOR_COLUMNS}
            FROM tutor_posts
            WHERE ($1::text IS NULL OR status = $1)
            ORDER BY created_at DESC
            "#
        );

        let rows = sqlx::query_as::<_, TutorRow>(&sql)
            .bind(status.map(|s| s.code()))
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(TutorRow::into_listing).collect()
    }

    async fn find_by_id(&self, id: TutorPostId) -> BoardResult<Option<TutorListing>> {
        let sql = format!("SELECT {TUTOR_COLUMNS} FROM tutor_posts WHERE id = $1");

        let row = sqlx::query_as::<_, TutorRow>(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| r.into_listing()).transpose()
    }

    async fn insert(&self, submission: &TutorSubmission) -> BoardResult<TutorPostId> {
        let id = TutorPostId::new();

        sqlx::query(
            r#"
            INSERT INTO tutor_posts (
                id,
                real_name,
                university,
                identity,
                teach_mode,
                gender,
                regions,
                grades,
                subjects,
                min_salary,
                max_salary,
                note,
                auth_files,
                status
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            "#,
        )
        .bind(id.as_uuid())
        .bind(&submission.real_name)
        .bind(&submission.university)
        .bind(submission.identity.label())
        .bind(submission.teach_mode.label())
        .bind(submission.gender.map(|g| g.label()))
        .bind(submission.region_labels())
        .bind(submission.grade_labels())
        .bind(submission.subject_labels())
        .bind(submission.salary.min())
        .bind(submission.salary.max())
        .bind(&submission.note)
        .bind(&submission.auth_files)
        .bind(ListingStatus::Pending.code())
        .execute(&self.pool)
        .await?;

        Ok(id)
    }

    async fn update(&self, id: TutorPostId, submission: &TutorSubmission) -> BoardResult<bool> {
        let affected = sqlx::query(
            r#"
            UPDATE tutor_posts SET
                real_name = $2,
                university = $3,
                identity = $4,
                teach_mode = $5,
                gender = $6,
                regions = $7,
                grades = $8,
                subjects = $9,
                min_salary = $10,
                max_salary = $11,
                note = $12,
                auth_files = $13
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .bind(&submission.real_name)
        .bind(&submission.university)
        .bind(submission.identity.label())
        .bind(submission.teach_mode.label())
        .bind(submission.gender.map(|g| g.label()))
        .bind(submission.region_labels())
        .bind(submission.grade_labels())
        .bind(submission.subject_labels())
        .bind(submission.salary.min())
        .bind(submission.salary.max())
        .bind(&submission.note)
        .bind(&submission.auth_files)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(affected > 0)
    }

    async fn delete(&self, id: TutorPostId) -> BoardResult<bool> {
        let affected = sqlx::query("DELETE FROM tutor_posts WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(affected > 0)
    }

    async fn transition_status(
        &self,
        id: TutorPostId,
        expected: ListingStatus,
        next: ListingStatus,
    ) -> BoardResult<bool> {
        // Single statement: the WHERE clause is the precondition
        let affected =
            sqlx::query("UPDATE tutor_posts SET status = $3 WHERE id = $1 AND status = $2")
                .bind(id.as_uuid())
                .bind(expected.code())
                .bind(next.code())
                .execute(&self.pool)
                .await?
                .rows_affected();

        Ok(affected == 1)
    }
}

// ============================================================================
// Demand Repository Implementation
// ============================================================================

impl DemandRepository for PgBoardRepository {
    async fn search(&self, criteria: &DemandCriteria) -> BoardResult<Vec<DemandListing>> {
        let sql = format!(
            r#"
            SELECT {DEMAND_COLUMNS}
            FROM demand_posts
            WHERE ($1::text IS NULL OR teach_mode = $1)
              AND ($2::text IS NULL OR region = $2)
              AND ($3::text IS NULL OR student_grade = $3)
              AND ($4::text IS NULL OR subject = $4)
            ORDER BY created_at DESC
            "#
        );

        let rows = sqlx::query_as::<_, DemandRow>(&sql)
            .bind(criteria.mode.map(|m| m.label()))
            .bind(criteria.region.map(|r| r.label()))
            .bind(criteria.grade.as_deref())
            .bind(criteria.subject.as_deref())
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(DemandRow::into_listing).collect())
    }

    async fn list(&self) -> BoardResult<Vec<DemandListing>> {
        let sql = format!("SELECT {DEMAND_COLUMNS} FROM demand_posts ORDER BY created_at DESC");

        let rows = sqlx::query_as::<_, DemandRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(DemandRow::into_listing).collect())
    }

    async fn find_by_id(&self, id: DemandPostId) -> BoardResult<Option<DemandListing>> {
        let sql = format!("SELECT {DEMAND_COLUMNS} FROM demand_posts WHERE id = $1");

        let row = sqlx::query_as::<_, DemandRow>(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(DemandRow::into_listing))
    }

    async fn insert(&self, submission: &DemandSubmission) -> BoardResult<DemandPostId> {
        let id = DemandPostId::new();

        sqlx::query(
            r#"
            INSERT INTO demand_posts (
                id,
                teach_mode,
                region,
                detail_address,
                gender,
                subject,
                student_grade,
                min_salary,
                max_salary,
                note
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(id.as_uuid())
        .bind(submission.teach_mode.label())
        .bind(submission.region.map(|r| r.label()))
        .bind(&submission.detail_address)
        .bind(submission.gender.label())
        .bind(submission.subject())
        .bind(submission.student_grade())
        .bind(submission.salary.min())
        .bind(submission.salary.max())
        .bind(&submission.note)
        .execute(&self.pool)
        .await?;

        Ok(id)
    }

    async fn update(&self, id: DemandPostId, submission: &DemandSubmission) -> BoardResult<bool> {
        let affected = sqlx::query(
            r#"
            UPDATE demand_posts SET
                teach_mode = $2,
                region = $3,
                detail_address = $4,
                gender = $5,
                subject = $6,
                student_grade = $7,
                min_salary = $8,
                max_salary = $9,
                note = $10
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .bind(submission.teach_mode.label())
        .bind(submission.region.map(|r| r.label()))
        .bind(&submission.detail_address)
        .bind(submission.gender.label())
        .bind(submission.subject())
        .bind(submission.student_grade())
        .bind(submission.salary.min())
        .bind(submission.salary.max())
        .bind(&submission.note)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(affected > 0)
    }

    async fn delete(&self, id: DemandPostId) -> BoardResult<bool> {
        let affected = sqlx::query("DELETE FROM demand_posts WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(affected > 0)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct TutorRow {
    id: Uuid,
    real_name: Option<String>,
    university: String,
    identity: String,
    teach_mode: String,
    gender: Option<String>,
    regions: Vec<String>,
    grades: Vec<String>,
    subjects: Vec<String>,
    min_salary: Option<i32>,
    max_salary: Option<i32>,
    note: Option<String>,
    auth_files: Vec<String>,
    status: String,
    created_at: DateTime<Utc>,
}

impl TutorRow {
    fn into_listing(self) -> BoardResult<TutorListing> {
        let status = ListingStatus::from_code(&self.status)
            .ok_or_else(|| BoardError::CorruptRow(format!("unknown status {}", self.status)))?;

        Ok(TutorListing {
            id: TutorPostId::from_uuid(self.id),
            real_name: self.real_name,
            university: self.university,
            identity: self.identity,
            teach_mode: self.teach_mode,
            gender: self.gender,
            regions: self.regions,
            grades: self.grades,
            subjects: self.subjects,
            min_salary: self.min_salary,
            max_salary: self.max_salary,
            note: self.note,
            auth_files: self.auth_files,
            status,
            created_at: self.created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct DemandRow {
    id: Uuid,
    teach_mode: String,
    region: Option<String>,
    detail_address: Option<String>,
    gender: Option<String>,
    subject: Option<String>,
    student_grade: Option<String>,
    min_salary: Option<i32>,
    max_salary: Option<i32>,
    note: Option<String>,
    created_at: DateTime<Utc>,
}

impl DemandRow {
    fn into_listing(self) -> DemandListing {
        DemandListing {
            id: DemandPostId::from_uuid(self.id),
            teach_mode: self.teach_mode,
            region: self.region,
            detail_address: self.detail_address,
            gender: self.gender,
            subject: self.subject,
            student_grade: self.student_grade,
            min_salary: self.min_salary,
            max_salary: self.max_salary,
            note: self.note,
            created_at: self.created_at,
        }
    }
}
