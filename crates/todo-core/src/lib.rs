pub mod config;
pub mod controller;
pub mod error;
pub mod filter_panel;
pub mod metrics;
pub mod paginator;
pub mod sorting;
pub mod task_form;

pub use config::ClientConfig;
pub use controller::{
  Controller,
  Effect,
  Event,
  ListRequest,
  ModalState,
  Mutation
};
pub use error::{
  ApiError,
  ConfigError,
  FormError
};
pub use filter_panel::FilterDraft;
pub use paginator::PageNav;
pub use sorting::SortSpec;
pub use task_form::{
  TaskDraft,
  TaskSubmission
};
