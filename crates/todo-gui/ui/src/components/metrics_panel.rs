use todo_core::metrics::metric_rows;
use todo_gui_shared::CompletionMetrics;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct MetricsPanelProps {
  pub metrics: Option<CompletionMetrics>
}

#[function_component(MetricsPanel)]
pub fn metrics_panel(
  props: &MetricsPanelProps
) -> Html {
  let rows = metric_rows(props.metrics.as_ref());
  let Some((overall, by_priority)) =
    rows.split_first()
  else {
    return html! {};
  };

  html! {
      <section class="panel metrics">
          <div>
              <h3>{ "Average time to complete tasks:" }</h3>
              <p>{ &overall.display }</p>
          </div>
          <div>
              <h3>{ "Average time to complete tasks by priority:" }</h3>
              {
                  for by_priority.iter().map(|row| html! {
                      <p key={row.key}>
                          <b>{ format!("{}: ", row.label) }</b>
                          { &row.display }
                      </p>
                  })
              }
          </div>
      </section>
  }
}
