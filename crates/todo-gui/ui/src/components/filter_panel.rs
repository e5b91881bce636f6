use todo_core::FilterDraft;
use todo_core::filter_panel::ALL_OPTION;
use todo_gui_shared::{
  FilterCriteria,
  MAX_TASK_NAME_LEN,
  TaskPriority,
  TaskStatus
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
pub struct FilterPanelProps {
  pub on_search: Callback<FilterCriteria>
}

#[function_component(FilterPanel)]
pub fn filter_panel(
  props: &FilterPanelProps
) -> Html {
  let draft = use_state(FilterDraft::default);

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
  let on_priority_change = {
    let draft = draft.clone();
    Callback::from(move |e: web_sys::Event| {
      let select: web_sys::HtmlSelectElement =
        e.target_unchecked_into();
      let mut next = (*draft).clone();
      next.priority = select.value();
      draft.set(next);
    })
  };
  let on_status_change = {
    let draft = draft.clone();
    Callback::from(move |e: web_sys::Event| {
      let select: web_sys::HtmlSelectElement =
        e.target_unchecked_into();
      let mut next = (*draft).clone();
      next.status = select.value();
      draft.set(next);
    })
  };
  let on_search_click = {
    let draft = draft.clone();
    let on_search = props.on_search.clone();
    Callback::from(move |e: MouseEvent| {
      e.prevent_default();
      let criteria = draft.to_criteria();
      tracing::debug!(
        ?criteria,
        "filters submitted"
      );
      on_search.emit(criteria);
    })
  };

  html! {
      <section class="panel filters">
          <div class="field">
              <label for="filter-name">{ "Name" }</label>
              <input
                  id="filter-name"
                  type="text"
                  value={draft.name.clone()}
                  placeholder="Enter task name..."
                  maxlength={MAX_TASK_NAME_LEN.to_string()}
                  oninput={on_name_input}
              />
          </div>
          <div class="field">
              <label for="filter-priority">{ "Priority" }</label>
              <select
                  id="filter-priority"
                  value={draft.priority.clone()}
                  onchange={on_priority_change}
              >
                  <option value={ALL_OPTION}>{ "All" }</option>
                  {
                      for TaskPriority::ALL.iter().map(|priority| html! {
                          <option value={priority.as_str()}>{ priority.label() }</option>
                      })
                  }
              </select>
          </div>
          <div class="field">
              <label for="filter-status">{ "Status" }</label>
              <select
                  id="filter-status"
                  value={draft.status.clone()}
                  onchange={on_status_change}
              >
                  <option value={ALL_OPTION}>{ "All" }</option>
                  <option value={TaskStatus::Done.as_str()}>{ "Done" }</option>
                  <option value={TaskStatus::NotDone.as_str()}>{ "Not Done" }</option>
              </select>
          </div>
          <button class="btn" type="submit" onclick={on_search_click}>{ "Search" }</button>
      </section>
  }
}
