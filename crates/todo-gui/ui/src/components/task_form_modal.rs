use todo_core::{
  FormError,
  TaskDraft,
  TaskSubmission
};
use todo_gui_shared::{
  MAX_TASK_NAME_LEN,
  TaskDto,
  TaskPriority
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  TargetCast,
  function_component,
  html,
  use_state
};

#[derive(Properties, PartialEq)]
pub struct TaskFormModalProps {
  /// Task being edited; `None` for a new task.
  pub initial:   Option<TaskDto>,
  pub on_save:   Callback<TaskSubmission>,
  pub on_cancel: Callback<()>
}

#[function_component(TaskFormModal)]
pub fn task_form_modal(
  props: &TaskFormModalProps
) -> Html {
  let draft = {
    let initial = props.initial.clone();
    use_state(move || {
      TaskDraft::new(initial.as_ref())
    })
  };
  let today = chrono::Local::now()
    .date_naive()
    .format("%Y-%m-%d")
    .to_string();

  let on_name_input = {
    let draft = draft.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let input: web_sys::HtmlInputElement =
          e.target_unchecked_into();
        let mut next = (*draft).clone();
        next.name = input.value();
        draft.set(next);
      }
    )
  };
  let on_due_date_change = {
    let draft = draft.clone();
    Callback::from(move |e: web_sys::Event| {
      let input: web_sys::HtmlInputElement =
        e.target_unchecked_into();
      let mut next = (*draft).clone();
      next.due_date = input.value();
      draft.set(next);
    })
  };
  let on_priority_change = {
    let draft = draft.clone();
    Callback::from(move |e: web_sys::Event| {
      let select: web_sys::HtmlSelectElement =
        e.target_unchecked_into();
      let Some(priority) =
        TaskPriority::parse(&select.value())
      else {
        return;
      };
      let mut next = (*draft).clone();
      next.priority = priority;
      draft.set(next);
    })
  };
  let on_save_click = {
    let draft = draft.clone();
    let on_save = props.on_save.clone();
    Callback::from(move |e: MouseEvent| {
      e.prevent_default();
      match draft.submit() {
        | Ok(submission) => {
          on_save.emit(submission)
        }
        | Err(error) => {
          tracing::debug!(
            %error,
            "task form rejected"
          );
        }
      }
    })
  };
  let on_cancel_click = {
    let on_cancel = props.on_cancel.clone();
    Callback::from(move |_: MouseEvent| {
      on_cancel.emit(())
    })
  };

  let title = if draft.is_edit() {
    "Edit Task"
  } else {
    "Add Task"
  };
  let name_error = draft
    .name_error()
    .map(|error| error.to_string());
  let due_date_error = match draft.validate()
  {
    | Err(error @ FormError::InvalidDueDate) => {
      Some(error.to_string())
    }
    | _ => None
  };

  html! {
      <div class="modal-backdrop">
          <div class="modal">
              <h3>{ title }</h3>
              <div class="field">
                  <label for="task-name">{ "Name" }</label>
                  <input
                      id="task-name"
                      type="text"
                      value={draft.name.clone()}
                      maxlength={MAX_TASK_NAME_LEN.to_string()}
                      oninput={on_name_input}
                  />
                  {
                      match name_error {
                          Some(message) => html! { <small class="error">{ message }</small> },
                          None => html! {}
                      }
                  }
              </div>
              <div class="field">
                  <label for="task-due-date">{ "Due Date" }</label>
                  <input
                      id="task-due-date"
                      type="date"
                      min={today}
                      value={draft.due_date.clone()}
                      onchange={on_due_date_change}
                  />
                  {
                      match due_date_error {
                          Some(message) => html! { <small class="error">{ message }</small> },
                          None => html! {}
                      }
                  }
              </div>
              <div class="field">
                  <label for="task-priority">{ "Priority" }</label>
                  <select
                      id="task-priority"
                      value={draft.priority.as_str()}
                      onchange={on_priority_change}
                  >
                      {
                          for TaskPriority::ALL.iter().map(|priority| html! {
                              <option
                                  value={priority.as_str()}
                                  selected={*priority == draft.priority}
                              >
                                  { priority.label() }
                              </option>
                          })
                      }
                  </select>
              </div>
              <div class="modal-actions">
                  <button class="btn" onclick={on_cancel_click}>{ "Cancel" }</button>
                  <button
                      class="btn primary"
                      disabled={!draft.can_submit()}
                      onclick={on_save_click}
                  >
                      { "Save" }
                  </button>
              </div>
          </div>
      </div>
  }
}
