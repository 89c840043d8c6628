//! Category chart data and lifecycle
//!
//! A chart is never updated in place: `ChartHost` destroys the live chart
//! before asking its backend for a new one.

use crate::error::TrackerResult;
use crate::models::Theme;
use crate::services::Summary;

/// Slice colours, reused in order when there are more categories
pub const PALETTE: [&str; 5] = ["#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF"];

/// Colour of the slice at position `i`
pub fn palette_color(i: usize) -> &'static str {
    PALETTE[i % PALETTE.len()]
}

/// One category's slice
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub color: &'static str,
    /// Fraction of the series total, 0 when the total is 0
    pub share: f64,
}

/// Everything needed to draw the category chart
#[derive(Debug, Clone, PartialEq)]
pub struct PieSeries {
    pub slices: Vec<PieSlice>,
    pub legend_color: &'static str,
    pub total: f64,
}

impl PieSeries {
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

/// Build the chart series for a summary under `theme`
pub fn pie_series(summary: &Summary, theme: Theme) -> PieSeries {
    let slices = summary
        .categories
        .iter()
        .enumerate()
        .map(|(i, sum)| PieSlice {
            label: sum.category.clone(),
            value: sum.total,
            color: palette_color(i),
            share: if summary.total != 0.0 {
                sum.total / summary.total
            } else {
                0.0
            },
        })
        .collect();

    PieSeries {
        slices,
        legend_color: theme.legend_color(),
        total: summary.total,
    }
}

/// A drawn chart
pub trait Chart {
    /// The data this chart was drawn from
    fn series(&self) -> &PieSeries;

    /// Release whatever the chart holds
    fn destroy(self: Box<Self>) -> TrackerResult<()>;
}

/// Something that can draw charts
pub trait ChartBackend {
    fn create(&mut self, series: &PieSeries) -> TrackerResult<Box<dyn Chart>>;
}

/// Owner of the single live chart
pub struct ChartHost<B: ChartBackend> {
    backend: B,
    current: Option<Box<dyn Chart>>,
}

impl<B: ChartBackend> ChartHost<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            current: None,
        }
    }

    /// Replace the live chart with one drawn from `series`
    pub fn render(&mut self, series: &PieSeries) -> TrackerResult<()> {
        self.clear()?;
        self.current = Some(self.backend.create(series)?);
        Ok(())
    }

    /// Destroy the live chart, if any
    pub fn clear(&mut self) -> TrackerResult<()> {
        match self.current.take() {
            Some(chart) => chart.destroy(),
            None => Ok(()),
        }
    }

    pub fn current(&self) -> Option<&dyn Chart> {
        self.current.as_deref()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

/// Chart kept in memory for panels that draw it themselves
#[derive(Debug, Clone)]
pub struct PanelChart {
    series: PieSeries,
}

impl Chart for PanelChart {
    fn series(&self) -> &PieSeries {
        &self.series
    }

    fn destroy(self: Box<Self>) -> TrackerResult<()> {
        Ok(())
    }
}

/// Backend producing `PanelChart`s
#[derive(Debug, Clone, Copy, Default)]
pub struct PanelBackend;

impl ChartBackend for PanelBackend {
    fn create(&mut self, series: &PieSeries) -> TrackerResult<Box<dyn Chart>> {
        Ok(Box::new(PanelChart {
            series: series.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Expense;
    use crate::services::summarize;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn summary_of(categories: &[(&str, f64)]) -> Summary {
        let expenses: Vec<Expense> = categories
            .iter()
            .map(|(c, a)| Expense::new("2024-01-01", *c, *a, "x"))
            .collect();
        summarize(&expenses)
    }

    #[test]
    fn test_series_follows_summary_order() {
        let series = pie_series(&summary_of(&[("Food", 12.5), ("Transport", 20.0)]), Theme::Light);

        assert_eq!(series.slices.len(), 2);
        assert_eq!(series.slices[0].label, "Food");
        assert_eq!(series.slices[0].color, "#FF6384");
        assert_eq!(series.slices[1].color, "#36A2EB");
        assert!((series.slices[1].share - 20.0 / 32.5).abs() < 1e-9);
        assert_eq!(series.legend_color, "#666");
    }

    #[test]
    fn test_palette_cycles_past_five() {
        let names = ["A", "B", "C", "D", "E", "F", "G"];
        let pairs: Vec<(&str, f64)> = names.iter().map(|n| (*n, 1.0)).collect();
        let series = pie_series(&summary_of(&pairs), Theme::Dark);

        assert_eq!(series.slices[5].color, PALETTE[0]);
        assert_eq!(series.slices[6].color, PALETTE[1]);
        assert_eq!(series.legend_color, "white");
    }

    #[test]
    fn test_zero_total_has_zero_shares() {
        let series = pie_series(&summary_of(&[("Food", 0.0)]), Theme::Light);
        assert_eq!(series.slices[0].share, 0.0);
    }

    struct Recorded {
        id: usize,
        series: PieSeries,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl Chart for Recorded {
        fn series(&self) -> &PieSeries {
            &self.series
        }

        fn destroy(self: Box<Self>) -> TrackerResult<()> {
            self.log.borrow_mut().push(format!("destroy {}", self.id));
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingBackend {
        created: usize,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl ChartBackend for RecordingBackend {
        fn create(&mut self, series: &PieSeries) -> TrackerResult<Box<dyn Chart>> {
            self.created += 1;
            self.log.borrow_mut().push(format!("create {}", self.created));
            Ok(Box::new(Recorded {
                id: self.created,
                series: series.clone(),
                log: Rc::clone(&self.log),
            }))
        }
    }

    #[test]
    fn test_host_destroys_before_recreate() {
        let backend = RecordingBackend::default();
        let log = Rc::clone(&backend.log);
        let mut host = ChartHost::new(backend);
        let series = pie_series(&summary_of(&[("Food", 1.0)]), Theme::Light);

        host.render(&series).unwrap();
        host.render(&series).unwrap();
        host.render(&series).unwrap();

        assert_eq!(
            *log.borrow(),
            vec!["create 1", "destroy 1", "create 2", "destroy 2", "create 3"]
        );
        assert!(host.current().is_some());
    }

    #[test]
    fn test_panel_backend_keeps_latest_series() {
        let mut host = ChartHost::new(PanelBackend);
        assert!(host.current().is_none());

        let first = pie_series(&summary_of(&[("Food", 1.0)]), Theme::Light);
        let second = pie_series(&summary_of(&[("Bills", 3.0)]), Theme::Dark);
        host.render(&first).unwrap();
        host.render(&second).unwrap();

        assert_eq!(host.current().unwrap().series(), &second);

        host.clear().unwrap();
        assert!(host.current().is_none());
    }
}
