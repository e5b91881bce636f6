use todo_core::PageNav;
use todo_core::paginator::page_label;
use todo_gui_shared::PaginationData;
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct PaginatorProps {
  pub pagination:     PaginationData,
  pub on_page_change: Callback<u32>
}

#[function_component(Paginator)]
pub fn paginator(
  props: &PaginatorProps
) -> Html {
  let item = |nav: PageNav| {
    let target =
      nav.target(&props.pagination);
    let on_page_change =
      props.on_page_change.clone();
    html! {
        <div
            class={classes!("paginator-item", target.is_none().then_some("disabled"))}
            title={nav.title()}
            onclick={move |_| {
                if let Some(page) = target {
                    on_page_change.emit(page);
                }
            }}
        >
            { nav.symbol() }
        </div>
    }
  };

  html! {
      <section class="paginator">
          { item(PageNav::First) }
          { item(PageNav::Prev) }
          <div class="paginator-item page-num">{ page_label(&props.pagination) }</div>
          { item(PageNav::Next) }
          { item(PageNav::Last) }
      </section>
  }
}
