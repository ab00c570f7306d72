//! In-memory repositories used by service, controller and handler tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;

use crate::api::job_role::models::{JobRoleChanges, NewJobRole};
use crate::db::job_role_repository::JobRoleRepository;
use crate::db::models::JobRole;

/// Vector-backed repository with sequential ids
#[derive(Default)]
pub struct InMemoryJobRoleRepository {
    rows: Mutex<Vec<JobRole>>,
    next_id: AtomicI64,
    calls: AtomicUsize,
}

impl InMemoryJobRoleRepository {
    pub fn with_rows(rows: Vec<JobRole>) -> Self {
        let next_id = rows.iter().map(|row| row.id).max().unwrap_or(0);
        Self {
            rows: Mutex::new(rows),
            next_id: AtomicI64::new(next_id),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of repository operations invoked so far
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.rows.lock().expect("job role store poisoned").len()
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl JobRoleRepository for InMemoryJobRoleRepository {
    async fn find_all(&self) -> Result<Vec<JobRole>, sqlx::Error> {
        self.record_call();
        Ok(self.rows.lock().expect("job role store poisoned").clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<JobRole>, sqlx::Error> {
        self.record_call();
        let rows = self.rows.lock().expect("job role store poisoned");
        Ok(rows.iter().find(|row| row.id == id).cloned())
    }

    async fn create(&self, new_job_role: &NewJobRole) -> Result<JobRole, sqlx::Error> {
        self.record_call();
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let now = Utc::now();
        let row = JobRole {
            id,
            title: new_job_role.title.clone(),
            description: new_job_role.description.clone(),
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().expect("job role store poisoned").push(row.clone());
        Ok(row)
    }

    async fn update(
        &self,
        id: i64,
        changes: &JobRoleChanges,
    ) -> Result<Option<JobRole>, sqlx::Error> {
        self.record_call();
        let mut rows = self.rows.lock().expect("job role store poisoned");
        let Some(row) = rows.iter_mut().find(|row| row.id == id) else {
            return Ok(None);
        };

        if let Some(Some(title)) = &changes.title {
            row.title = title.clone();
        }
        if let Some(description) = &changes.description {
            row.description = description.clone();
        }
        row.updated_at = Utc::now();

        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        self.record_call();
        let mut rows = self.rows.lock().expect("job role store poisoned");
        let before = rows.len();
        rows.retain(|row| row.id != id);
        Ok(rows.len() < before)
    }
}

/// Repository whose every call fails as if the pool were unreachable
pub struct FailingJobRoleRepository;

#[async_trait]
impl JobRoleRepository for FailingJobRoleRepository {
    async fn find_all(&self) -> Result<Vec<JobRole>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<JobRole>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn create(&self, _new_job_role: &NewJobRole) -> Result<JobRole, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn update(
        &self,
        _id: i64,
        _changes: &JobRoleChanges,
    ) -> Result<Option<JobRole>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn delete(&self, _id: i64) -> Result<bool, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }
}
