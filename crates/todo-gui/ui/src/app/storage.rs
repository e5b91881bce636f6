use todo_core::ClientConfig;

const CLIENT_CONFIG_TOML: &str =
  include_str!("../../assets/client.toml");
const API_BASE_URL_STORAGE_KEY: &str =
  "todo.api_base_url";

fn local_storage() -> Option<web_sys::Storage>
{
  web_sys::window().and_then(|window| {
    window.local_storage().ok().flatten()
  })
}

fn load_api_base_url_override()
-> Option<String> {
  local_storage().and_then(|storage| {
    storage
      .get_item(API_BASE_URL_STORAGE_KEY)
      .ok()
      .flatten()
  })
}

pub(super) fn load_client_config()
-> ClientConfig {
  let config =
    match ClientConfig::from_toml_str(
      CLIENT_CONFIG_TOML
    ) {
      | Ok(config) => {
        tracing::info!(
          version = config.version,
          base_url = %config.api.base_url,
          page_size = config.list.page_size,
          timeout_ms = config.api.request_timeout_ms,
          "loaded client config"
        );
        config
      }
      | Err(error) => {
        tracing::error!(%error, "failed parsing client config; using defaults");
        ClientConfig::default()
      }
    };

  match load_api_base_url_override() {
    | Some(base_url) => {
      tracing::info!(
        base_url = %base_url,
        "api base url overridden from \
         local storage"
      );
      config.with_api_base_url(&base_url)
    }
    | None => config
  }
}
