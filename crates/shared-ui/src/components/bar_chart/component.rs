use dioxus::prelude::*;

/// One bar: its axis label and value.
#[derive(Debug, Clone, PartialEq)]
pub struct BarDatum {
    pub label: String,
    pub value: f64,
}

impl BarDatum {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Bar heights as a percentage of the tallest bar. All zeros when the
/// largest value is not positive.
pub fn bar_heights(data: &[BarDatum]) -> Vec<f64> {
    let max = data.iter().map(|d| d.value).fold(0.0_f64, f64::max);
    if max <= 0.0 {
        return vec![0.0; data.len()];
    }
    data.iter()
        .map(|d| (d.value.max(0.0) / max * 100.0).round())
        .collect()
}

/// Vertical bar chart drawn with plain elements.
///
/// `format_value` turns a value into the tooltip/label text.
#[component]
pub fn BarChart(
    data: Vec<BarDatum>,
    #[props(default)] title: String,
    #[props(default = 180)] height_px: u32,
    #[props(default)] format_value: Option<Callback<f64, String>>,
) -> Element {
    let heights = bar_heights(&data);
    let bars: Vec<(BarDatum, f64, String)> = data
        .into_iter()
        .zip(heights)
        .map(|(d, h)| {
            let text = match &format_value {
                Some(f) => f.call(d.value),
                None => format!("{}", d.value),
            };
            (d, h, text)
        })
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        figure { class: "bar-chart",
            if !title.is_empty() {
                figcaption { class: "bar-chart-title", "{title}" }
            }
            div { class: "bar-chart-plot", style: "height: {height_px}px;",
                for (i, (datum, height, text)) in bars.into_iter().enumerate() {
                    div { key: "{i}", class: "bar-chart-column", title: "{text}",
                        div { class: "bar-chart-bar", style: "height: {height}%;" }
                        span { class: "bar-chart-label", "{datum.label}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn heights_scale_to_tallest_bar() {
        let data = vec![
            BarDatum::new("يناير", 50.0),
            BarDatum::new("فبراير", 200.0),
            BarDatum::new("مارس", 100.0),
        ];
        assert_eq!(bar_heights(&data), vec![25.0, 100.0, 50.0]);
    }

    #[test]
    fn all_zero_series_is_flat() {
        let data = vec![BarDatum::new("a", 0.0), BarDatum::new("b", 0.0)];
        assert_eq!(bar_heights(&data), vec![0.0, 0.0]);
        assert!(bar_heights(&[]).is_empty());
    }
}
