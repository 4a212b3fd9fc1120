//! Float API client
//!
//! `FloatClient` exposes every resource operation the service supports.
//! The per-resource methods are thin delegators; URL construction, verb
//! gating, and required-field validation all run through the generic
//! operations and the resource registry, so each rule is declared once.

use crate::config::FloatConfig;
use crate::error::{Error, Result};
use crate::http::RequestExecutor;
use crate::pagination;
use crate::resources::{validate_create, ResourceKind};
use crate::types::{JsonObject, JsonValue, Method, Record, StringMap};

/// Client for the Float API.
///
/// Holds only the immutable session configuration and reqwest's
/// connection pool; every operation is a stateless transaction, so one
/// client may be shared freely across tasks.
#[derive(Debug)]
pub struct FloatClient {
    executor: RequestExecutor,
}

impl FloatClient {
    /// Create a client from a configuration
    pub fn new(config: FloatConfig) -> Result<Self> {
        Ok(Self {
            executor: RequestExecutor::new(config)?,
        })
    }

    /// Create a client from the `FLOAT_ACCESS_TOKEN` environment variable
    pub fn from_env() -> Result<Self> {
        Self::new(FloatConfig::from_env()?)
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &FloatConfig {
        self.executor.config()
    }

    // ============================================================================
    // Generic Operations
    // ============================================================================

    /// Get a single record by id
    pub async fn get(&self, kind: ResourceKind, id: u64) -> Result<Record> {
        let response = self
            .executor
            .execute(Method::GET, &kind.item_path(id), &StringMap::new(), None)
            .await?;
        require_body(response.body, kind)
    }

    /// Get every record of a kind, walking all pages.
    ///
    /// `params` may carry extra query parameters (e.g. a `fields`
    /// projection or a task date range) along with `per-page`/`page`
    /// overrides; defaults are 200 records per page starting at page 1.
    pub async fn list_all(&self, kind: ResourceKind, params: StringMap) -> Result<Vec<Record>> {
        pagination::fetch_all(&self.executor, kind.path(), params).await
    }

    /// Create a record.
    ///
    /// The required-field set for the kind is checked before anything is
    /// sent; a missing field fails with `MissingRequiredField` and no
    /// network call is made.
    pub async fn create(&self, kind: ResourceKind, fields: JsonObject) -> Result<Record> {
        kind.ensure_supported(Method::POST)?;
        validate_create(kind, &fields)?;

        let body = JsonValue::Object(fields);
        let response = self
            .executor
            .execute(Method::POST, kind.path(), &StringMap::new(), Some(&body))
            .await?;
        require_body(response.body, kind)
    }

    /// Update a record by id with the given fields
    pub async fn update(&self, kind: ResourceKind, id: u64, fields: JsonObject) -> Result<Record> {
        kind.ensure_supported(Method::PATCH)?;

        let body = JsonValue::Object(fields);
        let response = self
            .executor
            .execute(Method::PATCH, &kind.item_path(id), &StringMap::new(), Some(&body))
            .await?;
        require_body(response.body, kind)
    }

    /// Delete a record by id
    pub async fn delete(&self, kind: ResourceKind, id: u64) -> Result<()> {
        kind.ensure_supported(Method::DELETE)?;
        self.executor
            .execute(Method::DELETE, &kind.item_path(id), &StringMap::new(), None)
            .await?;
        Ok(())
    }

    // ============================================================================
    // Accounts (read only)
    // ============================================================================

    pub async fn get_account(&self, account_id: u64) -> Result<Record> {
        self.get(ResourceKind::Account, account_id).await
    }

    pub async fn get_all_accounts(&self, params: StringMap) -> Result<Vec<Record>> {
        self.list_all(ResourceKind::Account, params).await
    }

    // ============================================================================
    // Clients
    // ============================================================================

    pub async fn get_client(&self, client_id: u64) -> Result<Record> {
        self.get(ResourceKind::Client, client_id).await
    }

    pub async fn get_all_clients(&self, params: StringMap) -> Result<Vec<Record>> {
        self.list_all(ResourceKind::Client, params).await
    }

    pub async fn create_client(&self, fields: JsonObject) -> Result<Record> {
        self.create(ResourceKind::Client, fields).await
    }

    pub async fn update_client(&self, client_id: u64, fields: JsonObject) -> Result<Record> {
        self.update(ResourceKind::Client, client_id, fields).await
    }

    pub async fn delete_client(&self, client_id: u64) -> Result<()> {
        self.delete(ResourceKind::Client, client_id).await
    }

    // ============================================================================
    // Departments
    // ============================================================================

    pub async fn get_department(&self, department_id: u64) -> Result<Record> {
        self.get(ResourceKind::Department, department_id).await
    }

    pub async fn get_all_departments(&self, params: StringMap) -> Result<Vec<Record>> {
        self.list_all(ResourceKind::Department, params).await
    }

    pub async fn create_department(&self, fields: JsonObject) -> Result<Record> {
        self.create(ResourceKind::Department, fields).await
    }

    pub async fn update_department(&self, department_id: u64, fields: JsonObject) -> Result<Record> {
        self.update(ResourceKind::Department, department_id, fields)
            .await
    }

    pub async fn delete_department(&self, department_id: u64) -> Result<()> {
        self.delete(ResourceKind::Department, department_id).await
    }

    // ============================================================================
    // Holidays
    // ============================================================================

    pub async fn get_holiday(&self, holiday_id: u64) -> Result<Record> {
        self.get(ResourceKind::Holiday, holiday_id).await
    }

    pub async fn get_all_holidays(&self, params: StringMap) -> Result<Vec<Record>> {
        self.list_all(ResourceKind::Holiday, params).await
    }

    pub async fn create_holiday(&self, fields: JsonObject) -> Result<Record> {
        self.create(ResourceKind::Holiday, fields).await
    }

    pub async fn update_holiday(&self, holiday_id: u64, fields: JsonObject) -> Result<Record> {
        self.update(ResourceKind::Holiday, holiday_id, fields).await
    }

    pub async fn delete_holiday(&self, holiday_id: u64) -> Result<()> {
        self.delete(ResourceKind::Holiday, holiday_id).await
    }

    // ============================================================================
    // Milestones
    // ============================================================================

    pub async fn get_milestone(&self, milestone_id: u64) -> Result<Record> {
        self.get(ResourceKind::Milestone, milestone_id).await
    }

    pub async fn get_all_milestones(&self, params: StringMap) -> Result<Vec<Record>> {
        self.list_all(ResourceKind::Milestone, params).await
    }

    pub async fn create_milestone(&self, fields: JsonObject) -> Result<Record> {
        self.create(ResourceKind::Milestone, fields).await
    }

    pub async fn update_milestone(&self, milestone_id: u64, fields: JsonObject) -> Result<Record> {
        self.update(ResourceKind::Milestone, milestone_id, fields)
            .await
    }

    pub async fn delete_milestone(&self, milestone_id: u64) -> Result<()> {
        self.delete(ResourceKind::Milestone, milestone_id).await
    }

    // ============================================================================
    // People
    // ============================================================================

    pub async fn get_person(&self, people_id: u64) -> Result<Record> {
        self.get(ResourceKind::Person, people_id).await
    }

    pub async fn get_all_people(&self, params: StringMap) -> Result<Vec<Record>> {
        self.list_all(ResourceKind::Person, params).await
    }

    pub async fn create_person(&self, fields: JsonObject) -> Result<Record> {
        self.create(ResourceKind::Person, fields).await
    }

    pub async fn update_person(&self, people_id: u64, fields: JsonObject) -> Result<Record> {
        self.update(ResourceKind::Person, people_id, fields).await
    }

    pub async fn delete_person(&self, people_id: u64) -> Result<()> {
        self.delete(ResourceKind::Person, people_id).await
    }

    // ============================================================================
    // Phases
    // ============================================================================

    pub async fn get_phase(&self, phase_id: u64) -> Result<Record> {
        self.get(ResourceKind::Phase, phase_id).await
    }

    pub async fn get_all_phases(&self, params: StringMap) -> Result<Vec<Record>> {
        self.list_all(ResourceKind::Phase, params).await
    }

    pub async fn create_phase(&self, fields: JsonObject) -> Result<Record> {
        self.create(ResourceKind::Phase, fields).await
    }

    pub async fn update_phase(&self, phase_id: u64, fields: JsonObject) -> Result<Record> {
        self.update(ResourceKind::Phase, phase_id, fields).await
    }

    pub async fn delete_phase(&self, phase_id: u64) -> Result<()> {
        self.delete(ResourceKind::Phase, phase_id).await
    }

    // ============================================================================
    // Projects
    // ============================================================================

    pub async fn get_project(&self, project_id: u64) -> Result<Record> {
        self.get(ResourceKind::Project, project_id).await
    }

    pub async fn get_all_projects(&self, params: StringMap) -> Result<Vec<Record>> {
        self.list_all(ResourceKind::Project, params).await
    }

    pub async fn create_project(&self, fields: JsonObject) -> Result<Record> {
        self.create(ResourceKind::Project, fields).await
    }

    pub async fn update_project(&self, project_id: u64, fields: JsonObject) -> Result<Record> {
        self.update(ResourceKind::Project, project_id, fields).await
    }

    pub async fn delete_project(&self, project_id: u64) -> Result<()> {
        self.delete(ResourceKind::Project, project_id).await
    }

    // ============================================================================
    // Tasks
    // ============================================================================

    pub async fn get_task(&self, task_id: u64) -> Result<Record> {
        self.get(ResourceKind::Task, task_id).await
    }

    pub async fn get_all_tasks(&self, params: StringMap) -> Result<Vec<Record>> {
        self.list_all(ResourceKind::Task, params).await
    }

    pub async fn create_task(&self, fields: JsonObject) -> Result<Record> {
        self.create(ResourceKind::Task, fields).await
    }

    pub async fn update_task(&self, task_id: u64, fields: JsonObject) -> Result<Record> {
        self.update(ResourceKind::Task, task_id, fields).await
    }

    pub async fn delete_task(&self, task_id: u64) -> Result<()> {
        self.delete(ResourceKind::Task, task_id).await
    }

    // ============================================================================
    // Timeoffs
    // ============================================================================

    pub async fn get_timeoff(&self, timeoff_id: u64) -> Result<Record> {
        self.get(ResourceKind::Timeoff, timeoff_id).await
    }

    pub async fn get_all_timeoffs(&self, params: StringMap) -> Result<Vec<Record>> {
        self.list_all(ResourceKind::Timeoff, params).await
    }

    pub async fn create_timeoff(&self, fields: JsonObject) -> Result<Record> {
        self.create(ResourceKind::Timeoff, fields).await
    }

    pub async fn update_timeoff(&self, timeoff_id: u64, fields: JsonObject) -> Result<Record> {
        self.update(ResourceKind::Timeoff, timeoff_id, fields).await
    }

    pub async fn delete_timeoff(&self, timeoff_id: u64) -> Result<()> {
        self.delete(ResourceKind::Timeoff, timeoff_id).await
    }

    // ============================================================================
    // Timeoff Types (no delete)
    // ============================================================================

    pub async fn get_timeoff_type(&self, timeoff_type_id: u64) -> Result<Record> {
        self.get(ResourceKind::TimeoffType, timeoff_type_id).await
    }

    pub async fn get_all_timeoff_types(&self, params: StringMap) -> Result<Vec<Record>> {
        self.list_all(ResourceKind::TimeoffType, params).await
    }

    pub async fn create_timeoff_type(&self, fields: JsonObject) -> Result<Record> {
        self.create(ResourceKind::TimeoffType, fields).await
    }

    pub async fn update_timeoff_type(
        &self,
        timeoff_type_id: u64,
        fields: JsonObject,
    ) -> Result<Record> {
        self.update(ResourceKind::TimeoffType, timeoff_type_id, fields)
            .await
    }

    // ============================================================================
    // Reports
    // ============================================================================

    /// People report for a date range, optionally filtered to one person
    pub async fn get_people_reports(
        &self,
        start_date: &str,
        end_date: &str,
        people_id: Option<u64>,
    ) -> Result<Vec<Record>> {
        self.report("reports/people", "people", start_date, end_date, "people_id", people_id)
            .await
    }

    /// Project report for a date range, optionally filtered to one project
    pub async fn get_project_reports(
        &self,
        start_date: &str,
        end_date: &str,
        project_id: Option<u64>,
    ) -> Result<Vec<Record>> {
        self.report(
            "reports/projects",
            "projects",
            start_date,
            end_date,
            "project_id",
            project_id,
        )
        .await
    }

    /// Report reads return the list nested under a named key in the
    /// response object; an absent key means an empty report.
    async fn report(
        &self,
        path: &str,
        key: &str,
        start_date: &str,
        end_date: &str,
        filter_param: &str,
        filter_id: Option<u64>,
    ) -> Result<Vec<Record>> {
        let mut query = StringMap::new();
        query.insert("start_date".to_string(), start_date.to_string());
        query.insert("end_date".to_string(), end_date.to_string());
        if let Some(id) = filter_id {
            query.insert(filter_param.to_string(), id.to_string());
        }

        let response = self
            .executor
            .execute(Method::GET, path, &query, None)
            .await?;
        let body = response
            .body
            .ok_or_else(|| Error::decode(format!("report response from {path} has no body")))?;

        match body.get(key) {
            Some(JsonValue::Array(items)) => Ok(items.clone()),
            _ => Ok(Vec::new()),
        }
    }
}

/// A GET/POST/PATCH success always carries a body; its absence is a
/// protocol violation, not an empty result.
fn require_body(body: Option<JsonValue>, kind: ResourceKind) -> Result<Record> {
    body.ok_or_else(|| Error::decode(format!("{kind} response has no body")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client() -> FloatClient {
        let config = FloatConfig::builder()
            .access_token("test-token")
            .base_url("https://mock.local/v3")
            .build()
            .unwrap();
        FloatClient::new(config).unwrap()
    }

    #[tokio::test]
    async fn test_account_mutations_rejected_client_side() {
        let api = client();

        let err = api
            .create(ResourceKind::Account, JsonObject::new())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedOperation { .. }));
        assert!(err.is_client_side());

        let err = api
            .update(ResourceKind::Account, 1, JsonObject::new())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedOperation { .. }));

        let err = api.delete(ResourceKind::Account, 1).await.unwrap_err();
        assert!(matches!(err, Error::UnsupportedOperation { .. }));
    }

    #[tokio::test]
    async fn test_timeoff_type_delete_rejected_client_side() {
        let api = client();
        let err = api.delete(ResourceKind::TimeoffType, 9).await.unwrap_err();
        match err {
            Error::UnsupportedOperation { resource, verb } => {
                assert_eq!(resource, "timeoff type");
                assert_eq!(verb, "DELETE");
            }
            other => panic!("expected UnsupportedOperation, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_validation_precedes_network() {
        // The base URL is unresolvable; reaching the network would fail
        // with a transport error rather than the field error we expect.
        let api = client();
        let err = api.create_project(JsonObject::new()).await.unwrap_err();
        match err {
            Error::MissingRequiredField { field, resource } => {
                assert_eq!(field, "name");
                assert_eq!(resource, "project");
            }
            other => panic!("expected MissingRequiredField, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_task_requires_people_id() {
        let api = client();
        let fields: JsonObject = json!({
            "project_id": 1,
            "start_date": "2021-01-01",
            "end_date": "2021-01-08",
            "hours": 8
        })
        .as_object()
        .unwrap()
        .clone();

        let err = api.create_task(fields).await.unwrap_err();
        assert!(matches!(
            err,
            Error::MissingRequiredField { ref field, .. } if field == "people_id"
        ));
    }
}
