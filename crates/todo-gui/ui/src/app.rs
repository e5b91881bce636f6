mod storage;

use std::cell::RefCell;
use std::rc::Rc;

use gloo::console::log;
use todo_core::{
  Controller,
  Effect,
  Event,
  ModalState,
  Mutation
};
use todo_gui_shared::{
  TaskId,
  TaskStatus
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  UseForceUpdateHandle,
  function_component,
  html,
  use_effect_with,
  use_force_update,
  use_memo,
  use_mut_ref
};

use crate::api::TodoApi;
use crate::components::{
  FilterPanel,
  MetricsPanel,
  Paginator,
  TaskFormModal,
  TaskTable
};

/// Feeds events into the controller and runs the effects it returns.
///
/// Completions are dispatched back through the same path, so every state
/// change goes through `Controller::handle`. The controller borrow is released
/// before any effect is spawned.
#[derive(Clone)]
struct Dispatcher {
  controller: Rc<RefCell<Controller>>,
  api:        Rc<TodoApi>,
  rerender:   UseForceUpdateHandle
}

impl Dispatcher {
  fn dispatch(&self, event: Event) {
    let effects = self
      .controller
      .borrow_mut()
      .handle(event);
    self.rerender.force_update();
    for effect in effects {
      self.run(effect);
    }
  }

  fn run(&self, effect: Effect) {
    let dispatcher = self.clone();
    wasm_bindgen_futures::spawn_local(
      async move {
        let api = dispatcher.api.clone();
        let event = match effect {
          | Effect::FetchList(request) => {
            Event::ListLoaded {
              seq:  request.seq,
              page: api
                .fetch_page(&request.query)
                .await
            }
          }
          | Effect::Create(payload) => {
            Event::MutationFinished {
              mutation: Mutation::Create,
              task:     api
                .create(&payload)
                .await
            }
          }
          | Effect::Update {
            id,
            task
          } => Event::MutationFinished {
            mutation: Mutation::Update(id),
            task:     api
              .update(id, &task)
              .await
          },
          | Effect::MarkDone(id) => {
            Event::MutationFinished {
              mutation: Mutation::MarkDone(
                id
              ),
              task:     api.mark_done(id).await
            }
          }
          | Effect::MarkUndone(id) => {
            Event::MutationFinished {
              mutation: Mutation::MarkUndone(
                id
              ),
              task:     api
                .mark_undone(id)
                .await
            }
          }
          | Effect::Delete(id) => {
            Event::DeleteFinished {
              id,
              deleted: api.delete(id).await
            }
          }
          | Effect::FetchMetrics => {
            Event::MetricsLoaded(
              api.fetch_metrics().await
            )
          }
        };
        dispatcher.dispatch(event);
      }
    );
  }
}

#[function_component(App)]
pub fn app() -> Html {
  let config = use_memo((), |_| {
    storage::load_client_config()
  });
  let api = {
    let config = config.clone();
    use_memo((), move |_| {
      TodoApi::new((*config).clone())
    })
  };
  let controller = {
    let page_size = config.list.page_size;
    use_mut_ref(move || {
      Controller::new(page_size)
    })
  };
  let rerender = use_force_update();

  let dispatcher = Dispatcher {
    controller: controller.clone(),
    api,
    rerender
  };

  {
    let dispatcher = dispatcher.clone();
    use_effect_with((), move |_| {
      ui_debug(
        "app.mounted",
        "frontend mounted; loading first \
         page"
      );
      dispatcher.dispatch(Event::Mounted);
      || ()
    });
  }

  let on_event = {
    let dispatcher = dispatcher.clone();
    Callback::from(move |event: Event| {
      dispatcher.dispatch(event)
    })
  };
  let on_search =
    on_event.reform(Event::FiltersSubmitted);
  let on_page_change =
    on_event.reform(Event::PageRequested);
  let on_sort =
    on_event.reform(Event::SortToggled);
  let on_edit =
    on_event.reform(Event::EditClicked);
  let on_delete =
    on_event.reform(Event::DeleteClicked);
  let on_toggle_done =
    on_event.reform(
      |(id, status): (TaskId, TaskStatus)| {
        Event::DoneToggled {
          id,
          status
        }
      }
    );
  let on_save =
    on_event.reform(Event::FormSubmitted);
  let on_cancel = on_event
    .reform(|()| Event::ModalCancelled);
  let on_new_task =
    on_event.reform(|_: MouseEvent| {
      ui_debug(
        "button.new_task.click",
        "opening create form"
      );
      Event::NewTaskClicked
    });

  let state = controller.borrow();
  let modal = match state.modal() {
    | ModalState::Open {
      prefill
    } => html! {
        <TaskFormModal
            key={prefill.as_ref().map_or("new".to_string(), |task| task.id.to_string())}
            initial={prefill.clone()}
            on_save={on_save}
            on_cancel={on_cancel}
        />
    },
    | ModalState::Closed => html! {}
  };

  html! {
      <main class="app">
          <h1>{ "Tasks" }</h1>
          <FilterPanel on_search={on_search} />
          <section class="toolbar">
              <button class="btn primary" onclick={on_new_task}>{ "+ New Task" }</button>
          </section>
          { modal }
          <TaskTable
              tasks={state.tasks().to_vec()}
              sort={state.sort().clone()}
              on_sort={on_sort}
              on_edit={on_edit}
              on_delete={on_delete}
              on_toggle_done={on_toggle_done}
          />
          <Paginator
              pagination={*state.pagination()}
              on_page_change={on_page_change}
          />
          <MetricsPanel metrics={state.metrics().cloned()} />
      </main>
  }
}

pub(crate) fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
