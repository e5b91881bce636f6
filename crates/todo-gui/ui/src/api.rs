use std::cell::Cell;
use std::rc::Rc;

use gloo::net::http::{
  Request,
  RequestBuilder,
  Response
};
use gloo::timers::callback::Timeout;
use serde::{
  Deserialize,
  Serialize,
  de::DeserializeOwned
};
use todo_core::{
  ApiError,
  ClientConfig
};
use todo_gui_shared::{
  CompletionMetrics,
  TaskCreate,
  TaskDto,
  TaskId,
  TaskListQuery,
  TaskPage
};
use wasm_bindgen::JsValue;
use web_sys::AbortController;

const STATUS_OK: u16 = 200;

/// Error body the service sends with 4xx responses.
#[derive(Debug, Deserialize)]
struct ServiceError {
  error:   String,
  message: String
}

/// Client for the `/todos` REST service.
///
/// Every public call logs its own failure and returns `None` (or `false`),
/// leaving the caller's state as it was.
#[derive(Debug, Clone, PartialEq)]
pub struct TodoApi {
  config: ClientConfig
}

/// Aborts the in-flight request when the timeout elapses. Dropping it
/// cancels the timer.
struct AbortGuard {
  timed_out: Rc<Cell<bool>>,
  _timer:    Timeout
}

impl TodoApi {
  pub fn new(config: ClientConfig) -> Self {
    Self {
      config
    }
  }

  pub async fn fetch_page(
    &self,
    query: &TaskListQuery
  ) -> Option<TaskPage> {
    let pairs = query.to_query_pairs();
    let result: Result<TaskPage, ApiError> = async {
      let (builder, guard) = self.prepare(
        Request::get(
          &self.config.endpoint("")
        )
        .query(pairs.iter().map(
          |(key, value)| (*key, value.as_str())
        ))
      )?;
      let response =
        self.send(builder.build(), guard).await?;
      decode(response).await
    }
    .await;
    log_failure("fetch_page", result)
  }

  pub async fn create(
    &self,
    payload: &TaskCreate
  ) -> Option<TaskDto> {
    let result = self
      .send_json(
        Request::post(
          &self.config.endpoint("")
        ),
        payload
      )
      .await;
    log_failure("create", result)
  }

  pub async fn update(
    &self,
    id: TaskId,
    task: &TaskDto
  ) -> Option<TaskDto> {
    let result = self
      .send_json(
        Request::put(
          &self
            .config
            .endpoint(&id.to_string())
        ),
        task
      )
      .await;
    log_failure("update", result)
  }

  pub async fn mark_done(
    &self,
    id: TaskId
  ) -> Option<TaskDto> {
    let result = self
      .send_empty(Request::put(
        &self
          .config
          .endpoint(&format!("{id}/done"))
      ))
      .await;
    log_failure("mark_done", result)
  }

  pub async fn mark_undone(
    &self,
    id: TaskId
  ) -> Option<TaskDto> {
    let result = self
      .send_empty(Request::put(
        &self.config.endpoint(&format!(
          "{id}/undone"
        ))
      ))
      .await;
    log_failure("mark_undone", result)
  }

  pub async fn delete(
    &self,
    id: TaskId
  ) -> bool {
    let result: Result<(), ApiError> = async {
      let (builder, guard) =
        self.prepare(Request::delete(
          &self
            .config
            .endpoint(&id.to_string())
        ))?;
      self
        .send(builder.build(), guard)
        .await
        .map(|_| ())
    }
    .await;
    log_failure("delete", result).is_some()
  }

  pub async fn fetch_metrics(
    &self
  ) -> Option<CompletionMetrics> {
    let result = self
      .send_empty(Request::get(
        &self.config.endpoint("metrics")
      ))
      .await;
    log_failure("fetch_metrics", result)
  }

  async fn send_empty<R>(
    &self,
    builder: RequestBuilder
  ) -> Result<R, ApiError>
  where
    R: DeserializeOwned
  {
    let (builder, guard) =
      self.prepare(builder)?;
    let response =
      self.send(builder.build(), guard).await?;
    decode(response).await
  }

  async fn send_json<B, R>(
    &self,
    builder: RequestBuilder,
    body: &B
  ) -> Result<R, ApiError>
  where
    B: Serialize + ?Sized,
    R: DeserializeOwned
  {
    let (builder, guard) =
      self.prepare(builder)?;
    let response = self
      .send(builder.json(body), guard)
      .await?;
    decode(response).await
  }

  fn prepare(
    &self,
    builder: RequestBuilder
  ) -> Result<(RequestBuilder, AbortGuard), ApiError>
  {
    let controller = AbortController::new()
      .map_err(js_transport_error)?;
    let builder = builder
      .abort_signal(Some(&controller.signal()));

    let timed_out = Rc::new(Cell::new(false));
    let timer = {
      let timed_out = timed_out.clone();
      Timeout::new(
        self.config.api.request_timeout_ms,
        move || {
          timed_out.set(true);
          controller.abort();
        }
      )
    };

    Ok((builder, AbortGuard {
      timed_out,
      _timer: timer
    }))
  }

  async fn send(
    &self,
    request: Result<
      Request,
      gloo::net::Error
    >,
    guard: AbortGuard
  ) -> Result<Response, ApiError> {
    let request = request.map_err(|error| {
      ApiError::Transport(error.to_string())
    })?;

    let response = match request.send().await
    {
      | Ok(response) => response,
      | Err(_) if guard.timed_out.get() => {
        return Err(ApiError::Timeout {
          ms: self.config.api.request_timeout_ms
        });
      }
      | Err(error) => {
        return Err(ApiError::Transport(
          error.to_string()
        ));
      }
    };
    drop(guard);

    if response.status() != STATUS_OK {
      let status = response.status();
      let raw =
        response.text().await.unwrap_or_default();
      let body = match serde_json::from_str::<
        ServiceError
      >(&raw)
      {
        | Ok(parsed) => {
          format!(
            "{}: {}",
            parsed.error, parsed.message
          )
        }
        | Err(_) => raw
      };
      return Err(ApiError::Status {
        status,
        body
      });
    }

    Ok(response)
  }
}

async fn decode<R>(
  response: Response
) -> Result<R, ApiError>
where
  R: DeserializeOwned
{
  response.json::<R>().await.map_err(
    |error| ApiError::Decode(error.to_string())
  )
}

fn js_transport_error(
  value: JsValue
) -> ApiError {
  ApiError::Transport(format!("{value:?}"))
}

fn log_failure<T>(
  operation: &str,
  result: Result<T, ApiError>
) -> Option<T> {
  match result {
    | Ok(value) => Some(value),
    | Err(error) => {
      tracing::error!(
        operation,
        %error,
        "task service call failed"
      );
      None
    }
  }
}
