use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use tracing::debug;

use crate::api::job_role::models::{JobRoleChanges, NewJobRole};
use crate::db::models::JobRole;

/// Column list shared across queries
const COLUMNS: &str = "id, title, description, created_at, updated_at";

/// Storage operations the job role service depends on
///
/// Implementations return raw storage errors; turning them into
/// caller-facing errors is left to the service.
#[async_trait]
pub trait JobRoleRepository: Send + Sync {
    /// List every job role ordered by id
    async fn find_all(&self) -> Result<Vec<JobRole>, sqlx::Error>;

    async fn find_by_id(&self, id: i64) -> Result<Option<JobRole>, sqlx::Error>;

    /// Insert a job role; id and both timestamps are assigned by the datastore
    async fn create(&self, new_job_role: &NewJobRole) -> Result<JobRole, sqlx::Error>;

    /// Apply the provided fields and refresh `updated_at`
    ///
    /// Returns `None` when no row matched `id`.
    async fn update(
        &self,
        id: i64,
        changes: &JobRoleChanges,
    ) -> Result<Option<JobRole>, sqlx::Error>;

    /// Returns `true` iff a row was removed
    async fn delete(&self, id: i64) -> Result<bool, sqlx::Error>;
}

/// PostgreSQL-backed repository for the `job_roles` table
pub struct PgJobRoleRepository {
    pool: Pool<Postgres>,
}

impl PgJobRoleRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobRoleRepository for PgJobRoleRepository {
    async fn find_all(&self) -> Result<Vec<JobRole>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM job_roles ORDER BY id ASC");
        let rows = sqlx::query_as::<_, JobRole>(&query)
            .fetch_all(&self.pool)
            .await?;

        debug!("Fetched {} job roles", rows.len());
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<JobRole>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM job_roles WHERE id = $1");
        sqlx::query_as::<_, JobRole>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn create(&self, new_job_role: &NewJobRole) -> Result<JobRole, sqlx::Error> {
        debug!("Creating job role: title={}", new_job_role.title);

        let query = format!(
            "INSERT INTO job_roles (title, description) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, JobRole>(&query)
            .bind(&new_job_role.title)
            .bind(&new_job_role.description)
            .fetch_one(&self.pool)
            .await?;

        debug!("Job role created with id={}", row.id);
        Ok(row)
    }

    async fn update(
        &self,
        id: i64,
        changes: &JobRoleChanges,
    ) -> Result<Option<JobRole>, sqlx::Error> {
        debug!("Updating job role id={}: {:?}", id, changes);

        // $3 tells whether description was provided at all, so an explicit
        // null can be told apart from an omitted field.
        let query = format!(
            "UPDATE job_roles \
             SET title = COALESCE($2, title), \
                 description = CASE WHEN $3 THEN $4 ELSE description END, \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let title = changes.title.clone().flatten();
        let description = changes.description.clone().flatten();

        sqlx::query_as::<_, JobRole>(&query)
            .bind(id)
            .bind(title)
            .bind(changes.description.is_some())
            .bind(description)
            .fetch_optional(&self.pool)
            .await
    }

    async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM job_roles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        debug!("Delete job role id={}: {} rows affected", id, result.rows_affected());
        Ok(result.rows_affected() > 0)
    }
}

// These run against a real server: `#[sqlx::test]` creates a throwaway
// database from DATABASE_URL and applies ./migrations before each test.
#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::PgPool;

    async fn seed(repository: &PgJobRoleRepository) -> JobRole {
        repository
            .create(&NewJobRole::new("Analyst", Some("Reads reports")))
            .await
            .unwrap()
    }

    #[sqlx::test]
    #[ignore = "requires DATABASE_URL"]
    async fn create_assigns_id_and_timestamps(pool: PgPool) {
        let repository = PgJobRoleRepository::new(pool);
        let created = seed(&repository).await;

        assert!(created.id > 0);
        assert_eq!(created.title, "Analyst");
        assert_eq!(created.description.as_deref(), Some("Reads reports"));
        assert_eq!(created.created_at, created.updated_at);

        let found = repository.find_by_id(created.id).await.unwrap();
        assert_eq!(found, Some(created));
    }

    #[sqlx::test]
    #[ignore = "requires DATABASE_URL"]
    async fn update_keeps_omitted_fields(pool: PgPool) {
        let repository = PgJobRoleRepository::new(pool);
        let created = seed(&repository).await;

        let updated = repository
            .update(created.id, &JobRoleChanges::title("Senior Analyst"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.title, "Senior Analyst");
        assert_eq!(updated.description.as_deref(), Some("Reads reports"));
        assert!(updated.updated_at >= created.updated_at);
    }

    #[sqlx::test]
    #[ignore = "requires DATABASE_URL"]
    async fn update_stores_empty_and_clears_null_description(pool: PgPool) {
        let repository = PgJobRoleRepository::new(pool);
        let created = seed(&repository).await;

        let emptied = repository
            .update(created.id, &JobRoleChanges::description(Some("")))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(emptied.title, "Analyst");
        assert_eq!(emptied.description.as_deref(), Some(""));

        let cleared = repository
            .update(created.id, &JobRoleChanges::description(None))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(cleared.title, "Analyst");
        assert_eq!(cleared.description, None);
    }

    #[sqlx::test]
    #[ignore = "requires DATABASE_URL"]
    async fn update_of_missing_row_is_none(pool: PgPool) {
        let repository = PgJobRoleRepository::new(pool);

        let updated = repository
            .update(i64::from(i32::MAX) + 1, &JobRoleChanges::title("Ghost"))
            .await
            .unwrap();
        assert_eq!(updated, None);
    }

    #[sqlx::test]
    #[ignore = "requires DATABASE_URL"]
    async fn delete_reports_whether_a_row_was_removed(pool: PgPool) {
        let repository = PgJobRoleRepository::new(pool);
        let created = seed(&repository).await;
        repository.create(&NewJobRole::new("Designer", None)).await.unwrap();

        assert!(repository.delete(created.id).await.unwrap());
        assert!(!repository.delete(created.id).await.unwrap());
        assert_eq!(repository.find_by_id(created.id).await.unwrap(), None);

        let remaining = repository.find_all().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].title, "Designer");
        assert_eq!(remaining[0].description, None);
    }
}
