//! The persistence collaborator.
//!
//! The core never talks to a database directly; it reads forms and records
//! submissions through the async [`FormStore`] trait. [`MemoryStore`] is
//! the in-process implementation used by tests and the demo binary; a
//! production deployment plugs a database-backed store in behind the same
//! trait.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

use quickform_core::QuickformResult;

/// A stored form record, as the authoring side persists it.
#[derive(Debug, Clone)]
pub struct StoredForm {
    pub id: i64,
    pub name: String,
    /// The slug used by the hosted submission page URL.
    pub share_url: String,
    /// The selected theme name.
    pub theme: String,
    /// Only published forms are reachable by the embed and submit paths.
    pub published: bool,
    /// The form content document, serialized as a JSON array.
    pub content: String,
}

/// Request context captured alongside a submission.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionMetadata {
    pub user_agent: Option<String>,
    pub origin: Option<String>,
    pub referer: Option<String>,
    pub field_count: usize,
}

/// One recorded submission.
#[derive(Debug, Clone)]
pub struct SubmissionRecord {
    pub id: String,
    pub form_id: i64,
    /// The submitted value map, serialized as JSON.
    pub content: String,
    pub submitted_at: DateTime<Utc>,
    pub metadata: SubmissionMetadata,
}

/// The persistence abstraction consumed by the HTTP surface.
#[async_trait]
pub trait FormStore: Send + Sync {
    /// Looks up a form by id, returning it only when published.
    async fn get_published(&self, form_id: i64) -> QuickformResult<Option<StoredForm>>;

    /// Looks up a published form by its share-URL slug.
    async fn get_by_share_url(&self, share_url: &str) -> QuickformResult<Option<StoredForm>>;

    /// Records a submission for a form.
    async fn record_submission(
        &self,
        form_id: i64,
        content: String,
        metadata: SubmissionMetadata,
    ) -> QuickformResult<SubmissionRecord>;
}

/// In-memory store backing tests and the demo.
#[derive(Default)]
pub struct MemoryStore {
    forms: RwLock<HashMap<i64, StoredForm>>,
    submissions: RwLock<Vec<SubmissionRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a form.
    pub async fn insert_form(&self, form: StoredForm) {
        self.forms.write().await.insert(form.id, form);
    }

    /// The submissions recorded for a form, oldest first.
    pub async fn submissions_for(&self, form_id: i64) -> Vec<SubmissionRecord> {
        self.submissions
            .read()
            .await
            .iter()
            .filter(|s| s.form_id == form_id)
            .cloned()
            .collect()
    }

    /// Total number of recorded submissions.
    pub async fn submission_count(&self) -> usize {
        self.submissions.read().await.len()
    }
}

#[async_trait]
impl FormStore for MemoryStore {
    async fn get_published(&self, form_id: i64) -> QuickformResult<Option<StoredForm>> {
        Ok(self
            .forms
            .read()
            .await
            .get(&form_id)
            .filter(|form| form.published)
            .cloned())
    }

    async fn get_by_share_url(&self, share_url: &str) -> QuickformResult<Option<StoredForm>> {
        Ok(self
            .forms
            .read()
            .await
            .values()
            .find(|form| form.share_url == share_url && form.published)
            .cloned())
    }

    async fn record_submission(
        &self,
        form_id: i64,
        content: String,
        metadata: SubmissionMetadata,
    ) -> QuickformResult<SubmissionRecord> {
        let record = SubmissionRecord {
            id: Uuid::new_v4().to_string(),
            form_id,
            content,
            submitted_at: Utc::now(),
            metadata,
        };
        self.submissions.write().await.push(record.clone());
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_form(id: i64, published: bool) -> StoredForm {
        StoredForm {
            id,
            name: "Survey".to_string(),
            share_url: format!("survey-{id}"),
            theme: "default".to_string(),
            published,
            content: "[]".to_string(),
        }
    }

    #[tokio::test]
    async fn test_get_published_filters_unpublished() {
        let store = MemoryStore::new();
        store.insert_form(sample_form(1, true)).await;
        store.insert_form(sample_form(2, false)).await;

        assert!(store.get_published(1).await.unwrap().is_some());
        assert!(store.get_published(2).await.unwrap().is_none());
        assert!(store.get_published(3).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_by_share_url() {
        let store = MemoryStore::new();
        store.insert_form(sample_form(1, true)).await;
        store.insert_form(sample_form(2, false)).await;

        assert!(store.get_by_share_url("survey-1").await.unwrap().is_some());
        // Unpublished forms are invisible by slug too.
        assert!(store.get_by_share_url("survey-2").await.unwrap().is_none());
        assert!(store.get_by_share_url("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_record_submission() {
        let store = MemoryStore::new();
        let metadata = SubmissionMetadata {
            user_agent: Some("test-agent".to_string()),
            field_count: 2,
            ..Default::default()
        };
        let record = store
            .record_submission(1, r#"{"a":"b"}"#.to_string(), metadata)
            .await
            .unwrap();
        assert_eq!(record.form_id, 1);
        assert!(!record.id.is_empty());

        let submissions = store.submissions_for(1).await;
        assert_eq!(submissions.len(), 1);
        assert_eq!(submissions[0].content, r#"{"a":"b"}"#);
        assert_eq!(submissions[0].metadata.field_count, 2);
        assert!(store.submissions_for(2).await.is_empty());
    }
}
