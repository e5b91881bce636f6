use std::collections::BTreeMap;

use chrono::{
  NaiveDate,
  NaiveDateTime
};
use serde::{
  Deserialize,
  Serialize
};

/// Longest task name the service accepts, in characters.
pub const MAX_TASK_NAME_LEN: usize = 120;

/// Bucket key for the average over every task in the metrics payload.
pub const METRICS_ALL_KEY: &str = "ALL";

pub type TaskId = i64;

/// Average completion time in seconds, keyed by `ALL` or a priority name.
pub type CompletionMetrics =
  BTreeMap<String, f64>;

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Hash,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
  Done,
  NotDone
}

impl TaskStatus {
  pub fn as_str(self) -> &'static str {
    match self {
      | Self::Done => "DONE",
      | Self::NotDone => "NOT_DONE"
    }
  }

  pub fn parse(
    value: &str
  ) -> Option<Self> {
    match value {
      | "DONE" => Some(Self::Done),
      | "NOT_DONE" => {
        Some(Self::NotDone)
      }
      | _ => None
    }
  }

  pub fn is_done(self) -> bool {
    self == Self::Done
  }

  pub fn toggled(self) -> Self {
    match self {
      | Self::Done => Self::NotDone,
      | Self::NotDone => Self::Done
    }
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Hash,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskPriority {
  High,
  Medium,
  Low
}

impl TaskPriority {
  pub const ALL: [TaskPriority; 3] = [
    TaskPriority::High,
    TaskPriority::Medium,
    TaskPriority::Low
  ];

  pub fn as_str(self) -> &'static str {
    match self {
      | Self::High => "HIGH",
      | Self::Medium => "MEDIUM",
      | Self::Low => "LOW"
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | Self::High => "High",
      | Self::Medium => "Medium",
      | Self::Low => "Low"
    }
  }

  pub fn parse(
    value: &str
  ) -> Option<Self> {
    Self::ALL
      .into_iter()
      .find(|priority| {
        priority.as_str() == value
      })
  }
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
  pub id:            TaskId,
  pub name:          String,
  #[serde(default)]
  pub due_date:      Option<NaiveDate>,
  pub is_done:       TaskStatus,
  #[serde(default)]
  pub done_date:     Option<NaiveDateTime>,
  pub priority:      TaskPriority,
  pub creation_date: NaiveDateTime
}

/// Body of `POST /todos`. The server assigns the id and starts the task as
/// not done.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
)]
#[serde(rename_all = "camelCase")]
pub struct TaskCreate {
  pub name:     String,
  pub due_date: Option<NaiveDate>,
  pub priority: TaskPriority
}

/// Absent fields place no constraint on the listing.
#[derive(
  Debug,
  Clone,
  Default,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
  pub name:        Option<String>,
  pub priority:    Option<TaskPriority>,
  pub done_status: Option<TaskStatus>
}

impl FilterCriteria {
  pub fn any_applied(&self) -> bool {
    self.name.is_some()
      || self.priority.is_some()
      || self.done_status.is_some()
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Hash,
)]
pub enum SortField {
  #[serde(rename = "priority")]
  Priority,
  #[serde(rename = "dueDate")]
  DueDate
}

impl SortField {
  pub fn as_param(self) -> &'static str {
    match self {
      | Self::Priority => "priority",
      | Self::DueDate => "dueDate"
    }
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Hash,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortOrder {
  Asc,
  Desc
}

impl SortOrder {
  pub fn as_param(self) -> &'static str {
    match self {
      | Self::Asc => "ASC",
      | Self::Desc => "DESC"
    }
  }
}

/// Query string of `GET /todos`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListQuery {
  pub filters: FilterCriteria,
  pub page:    u32,
  pub size:    u32,
  pub sort_by: Option<String>,
  pub order:   Option<String>
}

impl TaskListQuery {
  pub fn to_query_pairs(
    &self
  ) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();
    if let Some(name) =
      self.filters.name.as_ref()
    {
      pairs.push(("name", name.clone()));
    }
    if let Some(priority) =
      self.filters.priority
    {
      pairs.push((
        "priority",
        priority.as_str().to_string()
      ));
    }
    if let Some(status) =
      self.filters.done_status
    {
      pairs.push((
        "doneStatus",
        status.as_str().to_string()
      ));
    }
    pairs.push((
      "page",
      self.page.to_string()
    ));
    pairs.push((
      "size",
      self.size.to_string()
    ));
    if let Some(sort_by) =
      self.sort_by.as_ref()
    {
      pairs.push((
        "sortBy",
        sort_by.clone()
      ));
    }
    if let Some(order) =
      self.order.as_ref()
    {
      pairs
        .push(("order", order.clone()));
    }
    pairs
  }
}

/// Paged listing as serialized by the service (a Spring `Page`).
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
)]
#[serde(rename_all = "camelCase")]
pub struct TaskPage {
  #[serde(default)]
  pub content:        Vec<TaskDto>,
  #[serde(default)]
  pub number:         u32,
  #[serde(default)]
  pub size:           u32,
  #[serde(default)]
  pub total_pages:    u32,
  #[serde(default)]
  pub total_elements: u64,
  #[serde(default = "default_true")]
  pub first:          bool,
  #[serde(default = "default_true")]
  pub last:           bool
}

fn default_true() -> bool {
  true
}

impl TaskPage {
  pub fn pagination(
    &self
  ) -> PaginationData {
    PaginationData {
      current_page: self.number,
      size:         self.size,
      total_pages:  self.total_pages,
      first:        self.first,
      last:         self.last
    }
  }
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct PaginationData {
  pub current_page: u32,
  pub size:         u32,
  pub total_pages:  u32,
  pub first:        bool,
  pub last:         bool
}

impl PaginationData {
  /// Descriptor shown before the first listing arrives: a single page with
  /// nowhere to navigate.
  pub fn initial(size: u32) -> Self {
    Self {
      current_page: 0,
      size,
      total_pages: 1,
      first: true,
      last: true
    }
  }
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::*;

  const PAGE_JSON: &str = r#"{
    "content": [
      {
        "id": 7,
        "name": "Write report",
        "dueDate": "2026-03-01",
        "isDone": "DONE",
        "doneDate": "2026-02-20T09:15:00.123456",
        "priority": "MEDIUM",
        "creationDate": "2026-02-18T08:00:00"
      },
      {
        "id": 8,
        "name": "Call plumber",
        "dueDate": null,
        "isDone": "NOT_DONE",
        "doneDate": null,
        "priority": "HIGH",
        "creationDate": "2026-02-19T10:30:00"
      }
    ],
    "pageable": { "pageNumber": 1, "pageSize": 2 },
    "number": 1,
    "size": 2,
    "totalPages": 3,
    "totalElements": 6,
    "first": false,
    "last": false,
    "numberOfElements": 2,
    "empty": false
  }"#;

  #[test]
  fn decodes_spring_page_payload() {
    let page: TaskPage =
      serde_json::from_str(PAGE_JSON)
        .expect("page should decode");

    assert_eq!(page.content.len(), 2);
    assert_eq!(
      page.pagination(),
      PaginationData {
        current_page: 1,
        size:         2,
        total_pages:  3,
        first:        false,
        last:         false
      }
    );

    let done = &page.content[0];
    assert_eq!(done.id, 7);
    assert_eq!(
      done.is_done,
      TaskStatus::Done
    );
    assert_eq!(
      done.due_date,
      NaiveDate::from_ymd_opt(2026, 3, 1)
    );
    assert!(done.done_date.is_some());

    let open = &page.content[1];
    assert_eq!(
      open.priority,
      TaskPriority::High
    );
    assert!(open.due_date.is_none());
    assert!(open.done_date.is_none());
  }

  #[test]
  fn empty_page_defaults_to_single_terminal_page()
  {
    let page: TaskPage =
      serde_json::from_str("{}")
        .expect("empty page decodes");
    let pagination = page.pagination();
    assert!(pagination.first);
    assert!(pagination.last);
    assert!(page.content.is_empty());
  }

  #[test]
  fn create_payload_uses_camel_case_and_null_due_date()
  {
    let payload = TaskCreate {
      name:     "Buy milk".to_string(),
      due_date: None,
      priority: TaskPriority::Low
    };
    let value =
      serde_json::to_value(&payload)
        .expect("payload encodes");
    assert_eq!(
      value,
      serde_json::json!({
        "name": "Buy milk",
        "dueDate": null,
        "priority": "LOW"
      })
    );
  }

  #[test]
  fn query_pairs_skip_unconstrained_filters()
  {
    let query = TaskListQuery {
      filters: FilterCriteria {
        name:        None,
        priority:    Some(
          TaskPriority::Low
        ),
        done_status: None
      },
      page:    2,
      size:    10,
      sort_by: None,
      order:   None
    };

    assert_eq!(
      query.to_query_pairs(),
      vec![
        (
          "priority",
          "LOW".to_string()
        ),
        ("page", "2".to_string()),
        ("size", "10".to_string()),
      ]
    );
  }

  #[test]
  fn query_pairs_carry_every_field_in_order()
  {
    let query = TaskListQuery {
      filters: FilterCriteria {
        name:        Some(
          "report".to_string()
        ),
        priority:    Some(
          TaskPriority::High
        ),
        done_status: Some(
          TaskStatus::NotDone
        )
      },
      page:    0,
      size:    5,
      sort_by: Some(
        "priority,dueDate".to_string()
      ),
      order:   Some(
        "DESC,ASC".to_string()
      )
    };

    let keys: Vec<&str> = query
      .to_query_pairs()
      .into_iter()
      .map(|(key, _)| key)
      .collect();
    assert_eq!(
      keys,
      vec![
        "name",
        "priority",
        "doneStatus",
        "page",
        "size",
        "sortBy",
        "order"
      ]
    );
  }

  #[test]
  fn status_and_priority_parse_wire_names()
  {
    assert_eq!(
      TaskStatus::parse("NOT_DONE"),
      Some(TaskStatus::NotDone)
    );
    assert_eq!(
      TaskStatus::parse("ALL"),
      None
    );
    assert_eq!(
      TaskPriority::parse("MEDIUM"),
      Some(TaskPriority::Medium)
    );
    assert_eq!(
      TaskPriority::parse("medium"),
      None
    );
    assert_eq!(
      TaskStatus::Done.toggled(),
      TaskStatus::NotDone
    );
  }

  #[test]
  fn empty_filters_report_no_constraint()
  {
    assert!(
      !FilterCriteria::default()
        .any_applied()
    );
    let named = FilterCriteria {
      name: Some("x".to_string()),
      ..FilterCriteria::default()
    };
    assert!(named.any_applied());
  }
}
