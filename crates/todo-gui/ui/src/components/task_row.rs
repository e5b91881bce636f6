use todo_gui_shared::{
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

#[derive(Properties, PartialEq)]
pub struct TaskRowProps {
  pub task:           TaskDto,
  pub on_edit:        Callback<TaskDto>,
  pub on_delete:      Callback<TaskId>,
  pub on_toggle_done:
    Callback<(TaskId, TaskStatus)>
}

#[function_component(TaskRow)]
pub fn task_row(
  props: &TaskRowProps
) -> Html {
  let id = props.task.id;
  let done = props.task.is_done.is_done();
  let next_status =
    props.task.is_done.toggled();

  let on_toggle = {
    let on_toggle_done =
      props.on_toggle_done.clone();
    move |_: web_sys::Event| {
      on_toggle_done.emit((id, next_status))
    }
  };
  let on_edit = {
    let on_edit = props.on_edit.clone();
    let task = props.task.clone();
    move |_: yew::MouseEvent| {
      on_edit.emit(task.clone())
    }
  };
  let on_delete = {
    let on_delete = props.on_delete.clone();
    move |_: yew::MouseEvent| {
      on_delete.emit(id)
    }
  };

  let name_class = if done {
    "task-done"
  } else {
    "task-not-done"
  };
  let due = props
    .task
    .due_date
    .map(|date| {
      date.format("%Y-%m-%d").to_string()
    })
    .unwrap_or_else(|| "-".to_string());

  html! {
      <tr>
          <td class="done-checkbox">
              <input type="checkbox" checked={done} onchange={on_toggle} />
          </td>
          <td class={name_class}>{ &props.task.name }</td>
          <td>{ props.task.priority.as_str() }</td>
          <td>{ due }</td>
          <td class="actions">
              <button class="btn edit-btn" onclick={on_edit}>{ "Edit" }</button>
              <button class="btn delete-btn" onclick={on_delete}>{ "Delete" }</button>
          </td>
      </tr>
  }
}
