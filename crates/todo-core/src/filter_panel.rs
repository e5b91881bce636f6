use todo_gui_shared::{
  FilterCriteria,
  TaskPriority,
  TaskStatus
};
use tracing::warn;

/// Select value meaning "do not constrain this field".
pub const ALL_OPTION: &str = "ALL";

/// Raw values of the filter inputs, as typed and selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterDraft {
  pub name:     String,
  pub priority: String,
  pub status:   String
}

impl Default for FilterDraft {
  fn default() -> Self {
    Self {
      name:     String::new(),
      priority: ALL_OPTION.to_string(),
      status:   ALL_OPTION.to_string()
    }
  }
}

impl FilterDraft {
  /// Criteria emitted by the Search button.
  pub fn to_criteria(
    &self
  ) -> FilterCriteria {
    let name = if self.name.trim().is_empty()
    {
      None
    } else {
      Some(self.name.clone())
    };

    FilterCriteria {
      name,
      priority: select_value(
        "priority",
        &self.priority,
        TaskPriority::parse
      ),
      done_status: select_value(
        "status",
        &self.status,
        TaskStatus::parse
      )
    }
  }
}

fn select_value<T>(
  field: &str,
  raw: &str,
  parse: fn(&str) -> Option<T>
) -> Option<T> {
  if raw == ALL_OPTION || raw.is_empty() {
    return None;
  }
  let parsed = parse(raw);
  if parsed.is_none() {
    warn!(
      field,
      value = raw,
      "unknown filter option; treating \
       as unconstrained"
    );
  }
  parsed
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::*;

  #[test]
  fn untouched_panel_emits_no_constraints()
  {
    assert_eq!(
      FilterDraft::default().to_criteria(),
      FilterCriteria::default()
    );
  }

  #[test]
  fn emits_exactly_the_fields_that_were_set()
  {
    let draft = FilterDraft {
      name:     "invoice".to_string(),
      priority: "LOW".to_string(),
      status:   ALL_OPTION.to_string()
    };
    assert_eq!(
      draft.to_criteria(),
      FilterCriteria {
        name:        Some(
          "invoice".to_string()
        ),
        priority:    Some(
          TaskPriority::Low
        ),
        done_status: None
      }
    );

    let status_only = FilterDraft {
      status: "DONE".to_string(),
      ..FilterDraft::default()
    };
    assert_eq!(
      status_only.to_criteria(),
      FilterCriteria {
        name:        None,
        priority:    None,
        done_status: Some(
          TaskStatus::Done
        )
      }
    );
  }

  #[test]
  fn whitespace_name_is_unconstrained() {
    let draft = FilterDraft {
      name: "   \t ".to_string(),
      ..FilterDraft::default()
    };
    assert_eq!(
      draft.to_criteria().name,
      None
    );
  }

  #[test]
  fn unknown_option_is_unconstrained() {
    let draft = FilterDraft {
      priority: "URGENT".to_string(),
      ..FilterDraft::default()
    };
    assert!(
      !draft.to_criteria().any_applied()
    );
  }
}
