//! Root controller: owns the list, filter, pagination, sort and modal state
//! and decides which requests to issue after each event.
//!
//! The controller performs no IO. `handle` applies an event and returns the
//! effects the runtime must execute; completions come back as events.

use todo_gui_shared::{
  CompletionMetrics,
  FilterCriteria,
  PaginationData,
  SortField,
  TaskCreate,
  TaskDto,
  TaskId,
  TaskListQuery,
  TaskPage,
  TaskStatus
};
use tracing::{
  debug,
  info,
  warn
};

use crate::sorting::SortSpec;
use crate::task_form::TaskSubmission;

#[derive(Debug, Clone, PartialEq)]
pub enum ModalState {
  Closed,
  /// `prefill` is the task being edited; `None` opens an empty create form.
  Open { prefill: Option<TaskDto> }
}

impl ModalState {
  pub fn is_open(&self) -> bool {
    matches!(self, Self::Open { .. })
  }
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum Mutation {
  Create,
  Update(TaskId),
  MarkDone(TaskId),
  MarkUndone(TaskId)
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
  Mounted,
  FiltersSubmitted(FilterCriteria),
  PageRequested(u32),
  SortToggled(SortField),
  NewTaskClicked,
  EditClicked(TaskDto),
  ModalCancelled,
  FormSubmitted(TaskSubmission),
  /// `status` is the state the checkbox was switched to.
  DoneToggled {
    id:     TaskId,
    status: TaskStatus
  },
  DeleteClicked(TaskId),
  ListLoaded {
    seq:  u64,
    page: Option<TaskPage>
  },
  MutationFinished {
    mutation: Mutation,
    task:     Option<TaskDto>
  },
  DeleteFinished {
    id:      TaskId,
    deleted: bool
  },
  MetricsLoaded(Option<CompletionMetrics>)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListRequest {
  pub seq:   u64,
  pub query: TaskListQuery
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
  FetchList(ListRequest),
  Create(TaskCreate),
  Update { id: TaskId, task: TaskDto },
  MarkDone(TaskId),
  MarkUndone(TaskId),
  Delete(TaskId),
  FetchMetrics
}

#[derive(Debug, Clone, PartialEq)]
pub struct Controller {
  tasks:        Vec<TaskDto>,
  filters:      FilterCriteria,
  current_page: u32,
  page_size:    u32,
  pagination:   PaginationData,
  sort:         SortSpec,
  modal:        ModalState,
  metrics:      Option<CompletionMetrics>,
  list_seq:     u64
}

impl Controller {
  pub fn new(page_size: u32) -> Self {
    Self {
      tasks: Vec::new(),
      filters: FilterCriteria::default(),
      current_page: 0,
      page_size,
      pagination: PaginationData::initial(
        page_size
      ),
      sort: SortSpec::default(),
      modal: ModalState::Closed,
      metrics: None,
      list_seq: 0
    }
  }

  pub fn tasks(&self) -> &[TaskDto] {
    &self.tasks
  }

  pub fn filters(
    &self
  ) -> &FilterCriteria {
    &self.filters
  }

  pub fn current_page(&self) -> u32 {
    self.current_page
  }

  pub fn page_size(&self) -> u32 {
    self.page_size
  }

  pub fn pagination(
    &self
  ) -> &PaginationData {
    &self.pagination
  }

  pub fn sort(&self) -> &SortSpec {
    &self.sort
  }

  pub fn modal(&self) -> &ModalState {
    &self.modal
  }

  pub fn metrics(
    &self
  ) -> Option<&CompletionMetrics> {
    self.metrics.as_ref()
  }

  pub fn handle(
    &mut self,
    event: Event
  ) -> Vec<Effect> {
    match event {
      | Event::Mounted => {
        info!(
          page_size = self.page_size,
          "controller mounted"
        );
        vec![
          self.fetch_list(),
          Effect::FetchMetrics,
        ]
      }
      | Event::FiltersSubmitted(filters) => {
        self.apply_filters(filters)
      }
      | Event::PageRequested(page) => {
        self.request_page(page)
      }
      | Event::SortToggled(field) => {
        let order = self.sort.toggle(field);
        debug!(
          field = field.as_param(),
          order = order.as_param(),
          "sort toggled"
        );
        vec![self.fetch_list()]
      }
      | Event::NewTaskClicked => {
        self.modal =
          ModalState::Open { prefill: None };
        vec![]
      }
      | Event::EditClicked(task) => {
        debug!(id = task.id, "editing task");
        self.modal = ModalState::Open {
          prefill: Some(task)
        };
        vec![]
      }
      | Event::ModalCancelled => {
        self.modal = ModalState::Closed;
        vec![]
      }
      | Event::FormSubmitted(submission) => {
        self.modal = ModalState::Closed;
        match submission {
          | TaskSubmission::Create(payload) => {
            vec![Effect::Create(payload)]
          }
          | TaskSubmission::Update(task) => {
            vec![Effect::Update {
              id: task.id,
              task
            }]
          }
        }
      }
      | Event::DoneToggled {
        id,
        status
      } => {
        if status.is_done() {
          vec![Effect::MarkDone(id)]
        } else {
          vec![Effect::MarkUndone(id)]
        }
      }
      | Event::DeleteClicked(id) => {
        vec![Effect::Delete(id)]
      }
      | Event::ListLoaded {
        seq,
        page
      } => {
        self.apply_listing(seq, page);
        vec![]
      }
      | Event::MutationFinished {
        mutation,
        task
      } => {
        if task.is_none() {
          warn!(
            ?mutation,
            "mutation failed; keeping \
             current list"
          );
          return vec![];
        }
        debug!(?mutation, "mutation applied");
        self.refresh_after_mutation()
      }
      | Event::DeleteFinished {
        id,
        deleted
      } => self.after_delete(id, deleted),
      | Event::MetricsLoaded(metrics) => {
        match metrics {
          | Some(metrics) => {
            self.metrics = Some(metrics)
          }
          | None => {
            warn!(
              "metrics unavailable; \
               keeping previous values"
            )
          }
        }
        vec![]
      }
    }
  }

  fn apply_filters(
    &mut self,
    filters: FilterCriteria
  ) -> Vec<Effect> {
    self.filters = filters;
    if self.filters.any_applied()
      && self.current_page != 0
    {
      debug!(
        from = self.current_page,
        "filters applied off the first \
         page; resetting to page 0"
      );
      self.current_page = 0;
    }
    vec![self.fetch_list()]
  }

  fn request_page(
    &mut self,
    page: u32
  ) -> Vec<Effect> {
    if page == self.current_page {
      debug!(
        page,
        "page already current; nothing \
         to fetch"
      );
      return vec![];
    }
    self.current_page = page;
    vec![self.fetch_list()]
  }

  fn after_delete(
    &mut self,
    id: TaskId,
    deleted: bool
  ) -> Vec<Effect> {
    if !deleted {
      warn!(
        id,
        "delete failed; keeping current \
         list"
      );
      return vec![];
    }

    let emptied_last_page = self.tasks.len()
      == 1
      && self.pagination.last
      && !self.pagination.first;
    if emptied_last_page {
      debug!(
        id,
        page = self.current_page,
        "deleted last task of the last \
         page; stepping back"
      );
      let previous =
        self.current_page.saturating_sub(1);
      let mut effects =
        self.request_page(previous);
      effects.push(Effect::FetchMetrics);
      return effects;
    }

    self.refresh_after_mutation()
  }

  fn refresh_after_mutation(
    &mut self
  ) -> Vec<Effect> {
    vec![
      self.fetch_list(),
      Effect::FetchMetrics,
    ]
  }

  fn apply_listing(
    &mut self,
    seq: u64,
    page: Option<TaskPage>
  ) {
    if seq != self.list_seq {
      debug!(
        seq,
        latest = self.list_seq,
        "discarding stale listing"
      );
      return;
    }

    let Some(page) = page else {
      warn!(
        seq,
        "listing failed; keeping current \
         list"
      );
      return;
    };

    debug!(
      seq,
      page = page.number,
      total_pages = page.total_pages,
      rows = page.content.len(),
      "listing applied"
    );
    self.pagination = page.pagination();
    self.tasks = page.content;
  }

  fn fetch_list(&mut self) -> Effect {
    self.list_seq += 1;
    Effect::FetchList(ListRequest {
      seq:   self.list_seq,
      query: TaskListQuery {
        filters: self.filters.clone(),
        page:    self.current_page,
        size:    self.page_size,
        sort_by: self.sort.sort_by_param(),
        order:   self.sort.order_param()
      }
    })
  }
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::*;

  fn fetched_page(
    effects: &[Effect]
  ) -> Option<u32> {
    effects.iter().find_map(|effect| {
      match effect {
        | Effect::FetchList(request) => {
          Some(request.query.page)
        }
        | _ => None
      }
    })
  }

  #[test]
  fn mount_fetches_first_page_and_metrics()
  {
    let mut controller = Controller::new(10);
    let effects =
      controller.handle(Event::Mounted);
    assert_eq!(effects.len(), 2);
    assert_eq!(fetched_page(&effects), Some(0));
    assert_eq!(
      effects[1],
      Effect::FetchMetrics
    );
  }

  #[test]
  fn requesting_current_page_is_a_noop() {
    let mut controller = Controller::new(10);
    assert!(
      controller
        .handle(Event::PageRequested(0))
        .is_empty()
    );
  }

  #[test]
  fn modal_opens_for_create_and_edit() {
    let mut controller = Controller::new(10);
    controller.handle(Event::NewTaskClicked);
    assert_eq!(
      controller.modal(),
      &ModalState::Open { prefill: None }
    );
    controller.handle(Event::ModalCancelled);
    assert!(!controller.modal().is_open());
  }

  #[test]
  fn failed_metrics_keep_previous_values() {
    let mut controller = Controller::new(10);
    let mut metrics =
      CompletionMetrics::new();
    metrics.insert("ALL".to_string(), 30.0);
    controller.handle(Event::MetricsLoaded(
      Some(metrics.clone())
    ));
    controller
      .handle(Event::MetricsLoaded(None));
    assert_eq!(
      controller.metrics(),
      Some(&metrics)
    );
  }
}
