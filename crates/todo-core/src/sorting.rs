use todo_gui_shared::{
  SortField,
  SortOrder
};

/// Field-to-direction map in the order fields were first clicked.
#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct SortSpec {
  entries: Vec<(SortField, SortOrder)>
}

impl SortSpec {
  /// Header click: `DESC` flips to `ASC`, anything else becomes `DESC`.
  pub fn toggle(
    &mut self,
    field: SortField
  ) -> SortOrder {
    if let Some(entry) = self
      .entries
      .iter_mut()
      .find(|(existing, _)| {
        *existing == field
      })
    {
      entry.1 = match entry.1 {
        | SortOrder::Desc => SortOrder::Asc,
        | SortOrder::Asc => SortOrder::Desc
      };
      return entry.1;
    }

    self
      .entries
      .push((field, SortOrder::Desc));
    SortOrder::Desc
  }

  pub fn direction(
    &self,
    field: SortField
  ) -> Option<SortOrder> {
    self
      .entries
      .iter()
      .find(|(existing, _)| {
        *existing == field
      })
      .map(|(_, order)| *order)
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn entries(
    &self
  ) -> &[(SortField, SortOrder)] {
    &self.entries
  }

  /// Comma-joined `sortBy` parameter.
  pub fn sort_by_param(
    &self
  ) -> Option<String> {
    self.join(|(field, _)| {
      field.as_param()
    })
  }

  /// Comma-joined `order` parameter, aligned with `sort_by_param`.
  pub fn order_param(
    &self
  ) -> Option<String> {
    self.join(|(_, order)| {
      order.as_param()
    })
  }

  fn join(
    &self,
    pick: impl Fn(
      &(SortField, SortOrder)
    ) -> &'static str
  ) -> Option<String> {
    if self.entries.is_empty() {
      return None;
    }
    Some(
      self
        .entries
        .iter()
        .map(pick)
        .collect::<Vec<_>>()
        .join(",")
    )
  }
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::*;

  #[test]
  fn first_click_sorts_descending_then_alternates()
  {
    let mut sort = SortSpec::default();
    assert_eq!(
      sort.toggle(SortField::Priority),
      SortOrder::Desc
    );
    assert_eq!(
      sort.toggle(SortField::Priority),
      SortOrder::Asc
    );
    assert_eq!(
      sort.toggle(SortField::Priority),
      SortOrder::Desc
    );
  }

  #[test]
  fn params_follow_click_order() {
    let mut sort = SortSpec::default();
    assert_eq!(sort.sort_by_param(), None);
    assert_eq!(sort.order_param(), None);

    sort.toggle(SortField::DueDate);
    sort.toggle(SortField::Priority);
    sort.toggle(SortField::DueDate);

    assert_eq!(
      sort.sort_by_param().as_deref(),
      Some("dueDate,priority")
    );
    assert_eq!(
      sort.order_param().as_deref(),
      Some("ASC,DESC")
    );
    assert_eq!(
      sort.direction(SortField::Priority),
      Some(SortOrder::Desc)
    );
  }
}
