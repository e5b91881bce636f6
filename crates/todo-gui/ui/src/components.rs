mod filter_panel;
mod metrics_panel;
mod paginator;
mod task_form_modal;
mod task_row;
mod task_table;

pub use filter_panel::FilterPanel;
pub use metrics_panel::MetricsPanel;
pub use paginator::Paginator;
pub use task_form_modal::TaskFormModal;
pub use task_row::TaskRow;
pub use task_table::TaskTable;
