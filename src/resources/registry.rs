//! Per-resource-kind declarations
//!
//! Each `ResourceSpec` is static data; verb support and required fields
//! are declared here and nowhere else.

use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue, Method};

/// Declarative description of one resource kind
#[derive(Debug)]
pub struct ResourceSpec {
    /// Singular name used in error messages
    pub name: &'static str,
    /// URL path fragment under the API base
    pub path: &'static str,
    /// Field addressing a single record of this kind
    pub id_field: &'static str,
    /// Fields that must be present before a create is sent
    pub required_create: &'static [&'static str],
    /// Mutation verbs the service accepts for this kind (GET is universal)
    pub mutable_verbs: &'static [Method],
}

impl ResourceSpec {
    /// Whether the service accepts this verb for this kind
    pub fn supports(&self, verb: Method) -> bool {
        verb == Method::GET || self.mutable_verbs.contains(&verb)
    }
}

const FULL: &[Method] = &[Method::POST, Method::PATCH, Method::DELETE];
const READ_ONLY: &[Method] = &[];
const NO_DELETE: &[Method] = &[Method::POST, Method::PATCH];

static ACCOUNT: ResourceSpec = ResourceSpec {
    name: "account",
    path: "accounts",
    id_field: "account_id",
    required_create: &[],
    mutable_verbs: READ_ONLY,
};

static CLIENT: ResourceSpec = ResourceSpec {
    name: "client",
    path: "clients",
    id_field: "client_id",
    required_create: &["name"],
    mutable_verbs: FULL,
};

static DEPARTMENT: ResourceSpec = ResourceSpec {
    name: "department",
    path: "departments",
    id_field: "department_id",
    required_create: &["name"],
    mutable_verbs: FULL,
};

static HOLIDAY: ResourceSpec = ResourceSpec {
    name: "holiday",
    path: "holidays",
    id_field: "holiday_id",
    required_create: &["name", "date"],
    mutable_verbs: FULL,
};

static MILESTONE: ResourceSpec = ResourceSpec {
    name: "milestone",
    path: "milestones",
    id_field: "milestone_id",
    required_create: &["name", "project_id", "date"],
    mutable_verbs: FULL,
};

static PERSON: ResourceSpec = ResourceSpec {
    name: "person",
    path: "people",
    id_field: "people_id",
    required_create: &["name"],
    mutable_verbs: FULL,
};

static PHASE: ResourceSpec = ResourceSpec {
    name: "phase",
    path: "phases",
    id_field: "phase_id",
    required_create: &["project_id", "name", "start_date", "end_date"],
    mutable_verbs: FULL,
};

static PROJECT: ResourceSpec = ResourceSpec {
    name: "project",
    path: "projects",
    id_field: "project_id",
    required_create: &["name"],
    mutable_verbs: FULL,
};

static TASK: ResourceSpec = ResourceSpec {
    name: "task",
    path: "tasks",
    id_field: "task_id",
    required_create: &["project_id", "start_date", "end_date", "hours", "people_id"],
    mutable_verbs: FULL,
};

static TIMEOFF: ResourceSpec = ResourceSpec {
    name: "timeoff",
    path: "timeoffs",
    id_field: "timeoff_id",
    required_create: &["timeoff_type_id", "start_date", "end_date", "people_ids"],
    mutable_verbs: FULL,
};

static TIMEOFF_TYPE: ResourceSpec = ResourceSpec {
    name: "timeoff type",
    path: "timeoff-types",
    id_field: "timeoff_type_id",
    required_create: &["timeoff_type_name"],
    mutable_verbs: NO_DELETE,
};

/// A category of record the Float service manages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Account,
    Client,
    Department,
    Holiday,
    Milestone,
    Person,
    Phase,
    Project,
    Task,
    Timeoff,
    TimeoffType,
}

impl ResourceKind {
    /// Every resource kind, in path order
    pub const ALL: [ResourceKind; 11] = [
        ResourceKind::Account,
        ResourceKind::Client,
        ResourceKind::Department,
        ResourceKind::Holiday,
        ResourceKind::Milestone,
        ResourceKind::Person,
        ResourceKind::Phase,
        ResourceKind::Project,
        ResourceKind::Task,
        ResourceKind::Timeoff,
        ResourceKind::TimeoffType,
    ];

    /// The static declaration for this kind
    pub fn spec(self) -> &'static ResourceSpec {
        match self {
            ResourceKind::Account => &ACCOUNT,
            ResourceKind::Client => &CLIENT,
            ResourceKind::Department => &DEPARTMENT,
            ResourceKind::Holiday => &HOLIDAY,
            ResourceKind::Milestone => &MILESTONE,
            ResourceKind::Person => &PERSON,
            ResourceKind::Phase => &PHASE,
            ResourceKind::Project => &PROJECT,
            ResourceKind::Task => &TASK,
            ResourceKind::Timeoff => &TIMEOFF,
            ResourceKind::TimeoffType => &TIMEOFF_TYPE,
        }
    }

    /// URL path for the collection
    pub fn path(self) -> &'static str {
        self.spec().path
    }

    /// Field addressing a single record
    pub fn id_field(self) -> &'static str {
        self.spec().id_field
    }

    /// URL path for a single record
    pub fn item_path(self, id: u64) -> String {
        format!("{}/{id}", self.spec().path)
    }

    /// Fail with `UnsupportedOperation` unless the service accepts this verb
    pub fn ensure_supported(self, verb: Method) -> Result<()> {
        let spec = self.spec();
        if spec.supports(verb) {
            Ok(())
        } else {
            Err(Error::unsupported(spec.name, verb.to_string()))
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.spec().name)
    }
}

/// Check the required-field set for a create before anything is sent.
///
/// Fails with `MissingRequiredField` naming the first absent field, in
/// declaration order. Timeoffs additionally require `hours` unless the
/// `full_day` flag is truthy (a full-day absence has no hour count).
pub fn validate_create(kind: ResourceKind, fields: &JsonObject) -> Result<()> {
    let spec = kind.spec();

    for field in spec.required_create {
        if !fields.contains_key(*field) {
            return Err(Error::missing_field(*field, spec.name));
        }
    }

    if kind == ResourceKind::Timeoff
        && !is_truthy(fields.get("full_day"))
        && !fields.contains_key("hours")
    {
        return Err(Error::missing_field("hours", spec.name));
    }

    Ok(())
}

/// Truthiness the way the wire format spells it: `1`, `true`, `"1"`
fn is_truthy(value: Option<&JsonValue>) -> bool {
    match value {
        Some(JsonValue::Bool(b)) => *b,
        Some(JsonValue::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(JsonValue::String(s)) => !s.is_empty() && s != "0" && s != "false",
        _ => false,
    }
}
