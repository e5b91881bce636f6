use todo_gui_shared::{
  CompletionMetrics,
  METRICS_ALL_KEY,
  TaskPriority
};

/// Shown for buckets with no data.
pub const PLACEHOLDER: &str = "--:--:--";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricRow {
  pub key:     &'static str,
  pub label:   &'static str,
  pub display: String
}

/// Formats a duration in seconds as zero-padded `HH:MM:SS`.
///
/// Zero, negative and non-finite values render the placeholder. Hours are
/// not wrapped at a day.
pub fn format_duration(
  seconds: f64
) -> String {
  if !seconds.is_finite() || seconds <= 0.0
  {
    return PLACEHOLDER.to_string();
  }

  let total = seconds.round() as u64;
  let hours = total / 3_600;
  let minutes = (total % 3_600) / 60;
  let secs = total % 60;
  format!("{hours:02}:{minutes:02}:{secs:02}")
}

pub fn bucket_display(
  metrics: &CompletionMetrics,
  key: &str
) -> String {
  metrics
    .get(key)
    .map(|seconds| {
      format_duration(*seconds)
    })
    .unwrap_or_else(|| {
      PLACEHOLDER.to_string()
    })
}

/// Rows of the metrics panel: the overall average first, then one per
/// priority.
pub fn metric_rows(
  metrics: Option<&CompletionMetrics>
) -> Vec<MetricRow> {
  let empty = CompletionMetrics::new();
  let metrics = metrics.unwrap_or(&empty);

  let mut rows = vec![MetricRow {
    key:     METRICS_ALL_KEY,
    label:   "All tasks",
    display: bucket_display(
      metrics,
      METRICS_ALL_KEY
    )
  }];
  rows.extend(TaskPriority::ALL.map(
    |priority| MetricRow {
      key:     priority.as_str(),
      label:   priority.label(),
      display: bucket_display(
        metrics,
        priority.as_str()
      )
    }
  ));
  rows
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::*;

  #[test]
  fn formats_hours_minutes_seconds() {
    assert_eq!(
      format_duration(3_723.0),
      "01:02:03"
    );
    assert_eq!(
      format_duration(90_061.0),
      "25:01:01"
    );
  }

  #[test]
  fn rounds_before_splitting() {
    assert_eq!(
      format_duration(59.6),
      "00:01:00"
    );
    assert_eq!(
      format_duration(0.4),
      "00:00:00"
    );
  }

  #[test]
  fn zero_and_invalid_values_use_placeholder()
  {
    assert_eq!(format_duration(0.0), PLACEHOLDER);
    assert_eq!(
      format_duration(-5.0),
      PLACEHOLDER
    );
    assert_eq!(
      format_duration(f64::NAN),
      PLACEHOLDER
    );
  }

  #[test]
  fn absent_buckets_render_placeholder() {
    let mut metrics = CompletionMetrics::new();
    metrics.insert("ALL".to_string(), 7_200.0);
    metrics.insert("LOW".to_string(), 61.0);

    let rows = metric_rows(Some(&metrics));
    let displays: Vec<(&str, &str)> = rows
      .iter()
      .map(|row| {
        (row.key, row.display.as_str())
      })
      .collect();
    assert_eq!(
      displays,
      vec![
        ("ALL", "02:00:00"),
        ("HIGH", PLACEHOLDER),
        ("MEDIUM", PLACEHOLDER),
        ("LOW", "00:01:01"),
      ]
    );
  }

  #[test]
  fn missing_metrics_render_all_placeholders()
  {
    assert!(metric_rows(None).iter().all(
      |row| row.display == PLACEHOLDER
    ));
  }
}
