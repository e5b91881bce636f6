use thiserror::Error;
use todo_gui_shared::MAX_TASK_NAME_LEN;

/// Failure of a call to the task service. Callers log it and carry on with
/// their previous state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
  #[error("request failed: {0}")]
  Transport(String),

  #[error("request timed out after {ms} ms")]
  Timeout { ms: u32 },

  #[error("unexpected status {status}: {body}")]
  Status { status: u16, body: String },

  #[error("failed to decode response: {0}")]
  Decode(String)
}

/// Reasons a task draft cannot be submitted. The message is shown under the
/// offending input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
  #[error("Name cannot be empty.")]
  EmptyName,

  #[error(
    "Name must contain a maximum of {max} characters ({len} entered).",
    max = MAX_TASK_NAME_LEN
  )]
  NameTooLong { len: usize },

  #[error("Due date must be a valid date (YYYY-MM-DD).")]
  InvalidDueDate
}

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to parse client config: {0}")]
  Parse(#[from] toml::de::Error),

  #[error("invalid client config: {0}")]
  Invalid(String)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn form_errors_render_user_facing_messages() {
    assert_eq!(
      FormError::EmptyName.to_string(),
      "Name cannot be empty."
    );
    assert_eq!(
      FormError::NameTooLong { len: 121 }
        .to_string(),
      "Name must contain a maximum of 120 characters (121 entered)."
    );
  }

  #[test]
  fn status_error_keeps_server_body() {
    let error = ApiError::Status {
      status: 400,
      body:   r#"{"error":"NOT_FOUND"}"#
        .to_string()
    };
    assert_eq!(
      error.to_string(),
      r#"unexpected status 400: {"error":"NOT_FOUND"}"#
    );
  }
}
