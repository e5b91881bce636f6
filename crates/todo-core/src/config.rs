use serde::Deserialize;
use tracing::{
  debug,
  warn
};

use crate::error::ConfigError;

pub const DEFAULT_API_BASE_URL: &str =
  "http://localhost:9090/todos";
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const DEFAULT_REQUEST_TIMEOUT_MS: u32 =
  2_000;

const MAX_PAGE_SIZE: u32 = 100;
const MIN_REQUEST_TIMEOUT_MS: u32 = 250;

#[derive(
  Debug, Clone, PartialEq, Eq, Deserialize,
)]
pub struct ClientConfig {
  #[serde(default = "default_version")]
  pub version: u32,
  #[serde(default)]
  pub api:     ApiConfig,
  #[serde(default)]
  pub list:    ListConfig
}

#[derive(
  Debug, Clone, PartialEq, Eq, Deserialize,
)]
pub struct ApiConfig {
  #[serde(
    default = "default_api_base_url"
  )]
  pub base_url:           String,
  #[serde(
    default = "default_request_timeout_ms"
  )]
  pub request_timeout_ms: u32
}

#[derive(
  Debug, Clone, PartialEq, Eq, Deserialize,
)]
pub struct ListConfig {
  #[serde(default = "default_page_size")]
  pub page_size: u32
}

fn default_version() -> u32 {
  1
}

fn default_api_base_url() -> String {
  DEFAULT_API_BASE_URL.to_string()
}

fn default_request_timeout_ms() -> u32 {
  DEFAULT_REQUEST_TIMEOUT_MS
}

fn default_page_size() -> u32 {
  DEFAULT_PAGE_SIZE
}

impl Default for ApiConfig {
  fn default() -> Self {
    Self {
      base_url:           default_api_base_url(),
      request_timeout_ms:
        DEFAULT_REQUEST_TIMEOUT_MS
    }
  }
}

impl Default for ListConfig {
  fn default() -> Self {
    Self {
      page_size: DEFAULT_PAGE_SIZE
    }
  }
}

impl Default for ClientConfig {
  fn default() -> Self {
    Self {
      version: default_version(),
      api:     ApiConfig::default(),
      list:    ListConfig::default()
    }
  }
}

impl ClientConfig {
  #[tracing::instrument(skip(raw))]
  pub fn from_toml_str(
    raw: &str
  ) -> Result<Self, ConfigError> {
    let mut config: Self =
      toml::from_str(raw)?;
    config.sanitize()?;
    debug!(
      version = config.version,
      base_url = %config.api.base_url,
      page_size = config.list.page_size,
      "parsed client config"
    );
    Ok(config)
  }

  /// Replaces the API base URL, ignoring blank overrides.
  pub fn with_api_base_url(
    mut self,
    base_url: &str
  ) -> Self {
    let trimmed = base_url
      .trim()
      .trim_end_matches('/');
    if trimmed.is_empty() {
      warn!(
        "ignoring blank api base url \
         override"
      );
      return self;
    }
    self.api.base_url =
      trimmed.to_string();
    self
  }

  pub fn endpoint(
    &self,
    path: &str
  ) -> String {
    if path.is_empty() {
      return self.api.base_url.clone();
    }
    format!(
      "{}/{}",
      self.api.base_url,
      path.trim_start_matches('/')
    )
  }

  fn sanitize(
    &mut self
  ) -> Result<(), ConfigError> {
    let base_url = self
      .api
      .base_url
      .trim()
      .trim_end_matches('/')
      .to_string();
    if base_url.is_empty() {
      return Err(ConfigError::Invalid(
        "api.base_url must not be empty"
          .to_string()
      ));
    }
    self.api.base_url = base_url;

    let page_size = self
      .list
      .page_size
      .clamp(1, MAX_PAGE_SIZE);
    if page_size != self.list.page_size {
      warn!(
        requested = self.list.page_size,
        page_size,
        "clamped list.page_size"
      );
      self.list.page_size = page_size;
    }

    if self.api.request_timeout_ms
      < MIN_REQUEST_TIMEOUT_MS
    {
      warn!(
        requested = self
          .api
          .request_timeout_ms,
        "raised api.request_timeout_ms \
         to the minimum"
      );
      self.api.request_timeout_ms =
        MIN_REQUEST_TIMEOUT_MS;
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::*;

  #[test]
  fn missing_sections_fall_back_to_defaults()
  {
    let config =
      ClientConfig::from_toml_str(
        "version = 1\n"
      )
      .expect("minimal config parses");
    assert_eq!(
      config,
      ClientConfig::default()
    );
  }

  #[test]
  fn sanitizes_out_of_range_values() {
    let raw = r#"
      [api]
      base_url = "http://tasks.local:8080/todos/"
      request_timeout_ms = 10

      [list]
      page_size = 0
    "#;
    let config =
      ClientConfig::from_toml_str(raw)
        .expect("config parses");
    assert_eq!(
      config.api.base_url,
      "http://tasks.local:8080/todos"
    );
    assert_eq!(
      config.api.request_timeout_ms,
      250
    );
    assert_eq!(config.list.page_size, 1);
  }

  #[test]
  fn blank_base_url_is_rejected() {
    let error =
      ClientConfig::from_toml_str(
        "[api]\nbase_url = \"  \"\n"
      )
      .expect_err("blank url rejected");
    assert!(matches!(
      error,
      ConfigError::Invalid(_)
    ));
  }

  #[test]
  fn malformed_toml_reports_parse_error()
  {
    let error =
      ClientConfig::from_toml_str(
        "[list]\npage_size = \"ten\"\n"
      )
      .expect_err("bad type rejected");
    assert!(matches!(
      error,
      ConfigError::Parse(_)
    ));
  }

  #[test]
  fn endpoint_joins_paths_once() {
    let config = ClientConfig::default()
      .with_api_base_url(
        "https://example.org/todos/"
      );
    assert_eq!(
      config.endpoint("/7/done"),
      "https://example.org/todos/7/done"
    );
    assert_eq!(
      config.endpoint(""),
      "https://example.org/todos"
    );
    assert_eq!(
      config
        .clone()
        .with_api_base_url("   ")
        .api
        .base_url,
      "https://example.org/todos"
    );
  }
}
