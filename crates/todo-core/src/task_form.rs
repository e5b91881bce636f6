//! Draft state behind the create/edit modal.

use chrono::NaiveDate;
use todo_gui_shared::{
  MAX_TASK_NAME_LEN,
  TaskCreate,
  TaskDto,
  TaskPriority
};

use crate::error::FormError;

const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// What the modal hands back on save.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskSubmission {
  Create(TaskCreate),
  Update(TaskDto)
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
  pub name:     String,
  /// Value of the date input; empty when no due date is set.
  pub due_date: String,
  pub priority: TaskPriority,
  existing:     Option<TaskDto>
}

impl Default for TaskDraft {
  fn default() -> Self {
    Self {
      name:     String::new(),
      due_date: String::new(),
      priority: TaskPriority::High,
      existing: None
    }
  }
}

impl TaskDraft {
  /// Seeds the draft from the task being edited, or defaults for a new task.
  pub fn new(
    existing: Option<&TaskDto>
  ) -> Self {
    let Some(task) = existing else {
      return Self::default();
    };

    Self {
      name:     task.name.clone(),
      due_date: task
        .due_date
        .map(|date| {
          date
            .format(DUE_DATE_FORMAT)
            .to_string()
        })
        .unwrap_or_default(),
      priority: task.priority,
      existing: Some(task.clone())
    }
  }

  pub fn is_edit(&self) -> bool {
    self.existing.is_some()
  }

  pub fn name_error(
    &self
  ) -> Option<FormError> {
    validate_name(&self.name).err()
  }

  pub fn validate(
    &self
  ) -> Result<(), FormError> {
    validate_name(&self.name)?;
    parse_due_date(&self.due_date)?;
    Ok(())
  }

  pub fn can_submit(&self) -> bool {
    self.validate().is_ok()
  }

  /// Builds the create or update payload. An invalid draft yields the first
  /// validation error and no payload.
  pub fn submit(
    &self
  ) -> Result<TaskSubmission, FormError> {
    validate_name(&self.name)?;
    let due_date =
      parse_due_date(&self.due_date)?;

    let submission = match &self.existing {
      | Some(task) => {
        TaskSubmission::Update(TaskDto {
          name: self.name.clone(),
          due_date,
          priority: self.priority,
          ..task.clone()
        })
      }
      | None => {
        TaskSubmission::Create(TaskCreate {
          name: self.name.clone(),
          due_date,
          priority: self.priority
        })
      }
    };
    Ok(submission)
  }
}

pub fn validate_name(
  name: &str
) -> Result<(), FormError> {
  if name.trim().is_empty() {
    return Err(FormError::EmptyName);
  }
  let len = name.chars().count();
  if len > MAX_TASK_NAME_LEN {
    return Err(FormError::NameTooLong {
      len
    });
  }
  Ok(())
}

fn parse_due_date(
  raw: &str
) -> Result<Option<NaiveDate>, FormError> {
  let raw = raw.trim();
  if raw.is_empty() {
    return Ok(None);
  }
  NaiveDate::parse_from_str(
    raw,
    DUE_DATE_FORMAT
  )
  .map(Some)
  .map_err(|_| FormError::InvalidDueDate)
}
