use todo_core::SortSpec;
use todo_gui_shared::{
  SortField,
  SortOrder,
  TaskDto,
  TaskId,
  TaskStatus
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::TaskRow;

#[derive(Properties, PartialEq)]
pub struct TaskTableProps {
  pub tasks:          Vec<TaskDto>,
  pub sort:           SortSpec,
  pub on_sort:        Callback<SortField>,
  pub on_edit:        Callback<TaskDto>,
  pub on_delete:      Callback<TaskId>,
  pub on_toggle_done:
    Callback<(TaskId, TaskStatus)>
}

fn sort_arrow(
  order: Option<SortOrder>
) -> &'static str {
  match order {
    | Some(SortOrder::Asc) => "↑",
    | Some(SortOrder::Desc) => "↓",
    | None => "⇵"
  }
}

/// Header cell that toggles its field in the sort map. Headers of an empty
/// table are inert.
fn sort_header(
  label: &str,
  field: SortField,
  class: &'static str,
  props: &TaskTableProps
) -> Html {
  let text = format!(
    "{label} {}",
    sort_arrow(props.sort.direction(field))
  );
  if props.tasks.is_empty() {
    return html! { <th class={class}>{ text }</th> };
  }

  let on_sort = props.on_sort.clone();
  html! {
      <th
          class={format!("{class} sortable")}
          onclick={move |_| on_sort.emit(field)}
      >
          { text }
      </th>
  }
}

#[function_component(TaskTable)]
pub fn task_table(
  props: &TaskTableProps
) -> Html {
  let header = html! {
      <thead>
          <tr>
              <th class="done-col"></th>
              <th class="name-col">{ "Name" }</th>
              { sort_header("Priority", SortField::Priority, "priority-col", props) }
              { sort_header("Due Date", SortField::DueDate, "due-date-col", props) }
              <th class="actions-col"></th>
          </tr>
      </thead>
  };

  if props.tasks.is_empty() {
    return html! {
        <section class="panel list">
            <table>{ header }</table>
            <div class="empty-msg">{ "No tasks were found" }</div>
        </section>
    };
  }

  html! {
      <section class="panel list">
          <table>
              { header }
              <tbody>
                  {
                      for props.tasks.iter().cloned().map(|task| html! {
                          <TaskRow
                              key={task.id.to_string()}
                              task={task.clone()}
                              on_edit={props.on_edit.clone()}
                              on_delete={props.on_delete.clone()}
                              on_toggle_done={props.on_toggle_done.clone()}
                          />
                      })
                  }
              </tbody>
          </table>
      </section>
  }
}
