use todo_gui_shared::PaginationData;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
  First,
  Prev,
  Next,
  Last
}

impl PageNav {
  pub const ALL: [PageNav; 4] = [
    PageNav::First,
    PageNav::Prev,
    PageNav::Next,
    PageNav::Last
  ];

  /// Page to request, or `None` when the control is a no-op on the current
  /// page.
  pub fn target(
    self,
    pagination: &PaginationData
  ) -> Option<u32> {
    match self {
      | Self::First if !pagination.first => {
        Some(0)
      }
      | Self::Prev if !pagination.first => {
        Some(
          pagination
            .current_page
            .saturating_sub(1)
        )
      }
      | Self::Next if !pagination.last => {
        Some(
          pagination
            .current_page
            .saturating_add(1)
        )
      }
      | Self::Last if !pagination.last => {
        Some(
          pagination
            .total_pages
            .saturating_sub(1)
        )
      }
      | _ => None
    }
  }

  pub fn symbol(self) -> &'static str {
    match self {
      | Self::First => "«",
      | Self::Prev => "‹",
      | Self::Next => "›",
      | Self::Last => "»"
    }
  }

  pub fn title(self) -> &'static str {
    match self {
      | Self::First => "First page",
      | Self::Prev => "Previous page",
      | Self::Next => "Next page",
      | Self::Last => "Last page"
    }
  }
}

/// One-based page number shown between the controls.
pub fn page_label(
  pagination: &PaginationData
) -> String {
  pagination
    .current_page
    .saturating_add(1)
    .to_string()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn pagination(
    current_page: u32,
    total_pages: u32
  ) -> PaginationData {
    PaginationData {
      current_page,
      size: 10,
      total_pages,
      first: current_page == 0,
      last: current_page + 1 >= total_pages
    }
  }

  #[test]
  fn first_and_prev_are_noops_on_first_page()
  {
    let first = pagination(0, 4);
    assert_eq!(
      PageNav::First.target(&first),
      None
    );
    assert_eq!(
      PageNav::Prev.target(&first),
      None
    );
    assert_eq!(
      PageNav::Next.target(&first),
      Some(1)
    );
    assert_eq!(
      PageNav::Last.target(&first),
      Some(3)
    );
  }

  #[test]
  fn next_and_last_are_noops_on_last_page()
  {
    let last = pagination(3, 4);
    assert_eq!(
      PageNav::Next.target(&last),
      None
    );
    assert_eq!(
      PageNav::Last.target(&last),
      None
    );
    assert_eq!(
      PageNav::Prev.target(&last),
      Some(2)
    );
    assert_eq!(
      PageNav::First.target(&last),
      Some(0)
    );
  }

  #[test]
  fn single_page_disables_every_control() {
    let only = pagination(0, 1);
    assert!(PageNav::ALL.iter().all(
      |nav| nav.target(&only).is_none()
    ));
    assert_eq!(page_label(&only), "1");
  }
}
