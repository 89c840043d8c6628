//! SVG chart backend
//!
//! Draws the category pie and its legend into an SVG file. Destroying the
//! chart removes the file.

use std::f64::consts::PI;
use std::fs;
use std::io;
use std::path::{Path as FsPath, PathBuf};

use svg::node::element::{Circle, Path, Rectangle, Text};
use svg::Document;
use tracing::debug;

use crate::error::{TrackerError, TrackerResult};

use super::chart::{Chart, ChartBackend, PieSeries};

const WIDTH: f64 = 480.0;
const HEIGHT: f64 = 300.0;
const CENTER: (f64, f64) = (150.0, 150.0);
const RADIUS: f64 = 120.0;
const LEGEND_X: f64 = 300.0;
const LEGEND_Y: f64 = 40.0;
const LEGEND_STEP: f64 = 24.0;

/// Backend writing every chart to the same file
#[derive(Debug, Clone)]
pub struct SvgChartBackend {
    path: PathBuf,
}

impl SvgChartBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &FsPath {
        &self.path
    }
}

impl ChartBackend for SvgChartBackend {
    fn create(&mut self, series: &PieSeries) -> TrackerResult<Box<dyn Chart>> {
        let document = render_document(series);
        svg::save(&self.path, &document).map_err(|e| {
            TrackerError::Chart(format!("Failed to write {}: {}", self.path.display(), e))
        })?;
        debug!(path = %self.path.display(), slices = series.slices.len(), "chart drawn");

        Ok(Box::new(SvgChart {
            path: self.path.clone(),
            series: series.clone(),
        }))
    }
}

/// A chart living in an SVG file
#[derive(Debug, Clone)]
pub struct SvgChart {
    path: PathBuf,
    series: PieSeries,
}

impl Chart for SvgChart {
    fn series(&self) -> &PieSeries {
        &self.series
    }

    fn destroy(self: Box<Self>) -> TrackerResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(TrackerError::Chart(format!(
                "Failed to remove {}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}

fn point_at(angle: f64) -> (f64, f64) {
    (
        CENTER.0 + RADIUS * angle.cos(),
        CENTER.1 + RADIUS * angle.sin(),
    )
}

/// Build the SVG document for `series`
///
/// Slices start at twelve o'clock and run clockwise. Only positive values
/// get a wedge; every category still gets a legend entry.
pub fn render_document(series: &PieSeries) -> Document {
    let mut document = Document::new()
        .set("viewBox", (0.0, 0.0, WIDTH, HEIGHT))
        .set("width", WIDTH)
        .set("height", HEIGHT);

    let drawable: Vec<_> = series.slices.iter().filter(|s| s.value > 0.0).collect();
    let drawable_total: f64 = drawable.iter().map(|s| s.value).sum();

    if drawable.len() == 1 {
        document = document.add(
            Circle::new()
                .set("cx", CENTER.0)
                .set("cy", CENTER.1)
                .set("r", RADIUS)
                .set("fill", drawable[0].color),
        );
    } else if drawable_total > 0.0 {
        let mut start = -PI / 2.0;
        for slice in &drawable {
            let sweep = slice.value / drawable_total * 2.0 * PI;
            let end = start + sweep;
            let (x1, y1) = point_at(start);
            let (x2, y2) = point_at(end);
            let large_arc = if sweep > PI { 1 } else { 0 };

            let data = format!(
                "M {cx} {cy} L {x1:.3} {y1:.3} A {r} {r} 0 {large_arc} 1 {x2:.3} {y2:.3} Z",
                cx = CENTER.0,
                cy = CENTER.1,
                r = RADIUS,
            );
            document = document.add(
                Path::new()
                    .set("fill", slice.color)
                    .set("stroke", "white")
                    .set("stroke-width", 1)
                    .set("d", data),
            );
            start = end;
        }
    }

    for (i, slice) in series.slices.iter().enumerate() {
        let y = LEGEND_Y + i as f64 * LEGEND_STEP;
        document = document
            .add(
                Rectangle::new()
                    .set("x", LEGEND_X)
                    .set("y", y - 12.0)
                    .set("width", 14)
                    .set("height", 14)
                    .set("fill", slice.color),
            )
            .add(
                Text::new()
                    .set("x", LEGEND_X + 22.0)
                    .set("y", y)
                    .set("fill", series.legend_color)
                    .set("font-family", "sans-serif")
                    .set("font-size", 14)
                    .add(svg::node::Text::new(slice.label.clone())),
            );
    }

    document
}
