//! Plain data handed to the reporting and chart-rendering collaborators.
//!
//! Nothing here computes anything: rows and series are assembled from model
//! output by the caller and consumed positionally by a sink.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::SinkError;

/// One line of a console report: a label, the input value and the computed value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Human-readable description of the data point.
    pub label: String,
    /// Input value (diameter in mm or mass in t).
    pub input: f64,
    /// Computed value (load in kN or diameter in mm).
    pub result: f64,
}

impl ReportRow {
    /// Create a report row.
    #[must_use]
    pub fn new(label: impl Into<String>, input: f64, result: f64) -> Self {
        Self {
            label: label.into(),
            input,
            result,
        }
    }
}

/// Named, ordered sequence of `(x, y)` points.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Series {
    /// Legend entry.
    pub name: String,
    /// Points in drawing order.
    pub points: Vec<(f64, f64)>,
}

impl Series {
    /// Pair `xs` with `ys` positionally; the shorter input bounds the result.
    ///
    /// # Examples
    /// ```
    /// use moai_rope::Series;
    ///
    /// let series = Series::from_xy("loads", [10.0, 20.0], [35.1, 140.3]);
    /// assert_eq!(series.points, vec![(10.0, 35.1), (20.0, 140.3)]);
    /// ```
    #[must_use]
    pub fn from_xy<X, Y>(name: impl Into<String>, xs: X, ys: Y) -> Self
    where
        X: IntoIterator<Item = f64>,
        Y: IntoIterator<Item = f64>,
    {
        Self {
            name: name.into(),
            points: xs.into_iter().zip(ys).collect(),
        }
    }

    /// Smallest and largest x and y values, or `None` for an empty series.
    #[must_use]
    pub fn bounds(&self) -> Option<((f64, f64), (f64, f64))> {
        let (first_x, first_y) = *self.points.first()?;
        let init = ((first_x, first_x), (first_y, first_y));
        Some(
            self.points
                .iter()
                .fold(init, |((x_lo, x_hi), (y_lo, y_hi)), &(x, y)| {
                    ((x_lo.min(x), x_hi.max(x)), (y_lo.min(y), y_hi.max(y)))
                }),
        )
    }
}

/// Axis a threshold annotation is drawn against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// A vertical line at an x value.
    X,
    /// A horizontal line at a y value.
    Y,
}

/// Constant reference line drawn for annotation only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Threshold {
    /// Legend entry.
    pub label: String,
    /// Position on `axis`.
    pub value: f64,
    /// Axis the value refers to.
    pub axis: Axis,
}

impl Threshold {
    /// Create a threshold.
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64, axis: Axis) -> Self {
        Self {
            label: label.into(),
            value,
            axis,
        }
    }
}

/// Everything a chart renderer needs to draw one figure panel.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    /// Caption.
    pub title: String,
    /// Description of the x axis.
    pub x_label: String,
    /// Description of the y axis.
    pub y_label: String,
    /// Data series in legend order.
    pub series: Vec<Series>,
    /// Reference lines.
    pub thresholds: Vec<Threshold>,
    /// Fixed x range; derived from the data when absent.
    pub x_range: Option<(f64, f64)>,
    /// Fixed y range; derived from the data when absent.
    pub y_range: Option<(f64, f64)>,
}

impl Chart {
    /// Create an empty chart with axis labels.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            ..Self::default()
        }
    }

    /// Append a series.
    #[must_use]
    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    /// Append reference lines.
    #[must_use]
    pub fn with_thresholds(mut self, thresholds: impl IntoIterator<Item = Threshold>) -> Self {
        self.thresholds.extend(thresholds);
        self
    }

    /// Fix the plotted ranges.
    #[must_use]
    pub fn with_ranges(mut self, x_range: (f64, f64), y_range: (f64, f64)) -> Self {
        self.x_range = Some(x_range);
        self.y_range = Some(y_range);
        self
    }

    /// Ranges to plot: the fixed ranges when set, otherwise the data bounds with
    /// thresholds included.
    #[must_use]
    pub fn plot_ranges(&self) -> Option<((f64, f64), (f64, f64))> {
        let data = self
            .series
            .iter()
            .filter_map(Series::bounds)
            .reduce(|((ax0, ax1), (ay0, ay1)), ((bx0, bx1), (by0, by1))| {
                ((ax0.min(bx0), ax1.max(bx1)), (ay0.min(by0), ay1.max(by1)))
            })?;
        let ((mut x_lo, mut x_hi), (mut y_lo, mut y_hi)) = data;
        for threshold in &self.thresholds {
            match threshold.axis {
                Axis::X => {
                    x_lo = x_lo.min(threshold.value);
                    x_hi = x_hi.max(threshold.value);
                }
                Axis::Y => {
                    y_lo = y_lo.min(threshold.value);
                    y_hi = y_hi.max(threshold.value);
                }
            }
        }
        Some((
            self.x_range.unwrap_or((x_lo, x_hi)),
            self.y_range.unwrap_or((y_lo.min(0.0), y_hi)),
        ))
    }
}

/// Receiver of computed charts.
pub trait ChartSink {
    /// Render `chart` under the file stem `name`.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError`] when the chart cannot be written.
    fn render(&mut self, name: &str, chart: &Chart) -> Result<PathBuf, SinkError>;
}

/// Writes every chart as pretty-printed JSON into a directory.
#[derive(Clone, Debug)]
pub struct JsonChartSink {
    /// Destination directory.
    directory: PathBuf,
}

impl JsonChartSink {
    /// Create a sink writing into `directory`, which is created on first use.
    #[must_use]
    pub fn new(directory: impl AsRef<Path>) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
        }
    }
}

impl ChartSink for JsonChartSink {
    fn render(&mut self, name: &str, chart: &Chart) -> Result<PathBuf, SinkError> {
        fs::create_dir_all(&self.directory).map_err(|source| SinkError::Io {
            path: self.directory.clone(),
            source,
        })?;
        let path = self.directory.join(format!("{name}.json"));
        let body = serde_json::to_string_pretty(chart)?;
        fs::write(&path, body).map_err(|source| SinkError::Io {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), "wrote chart data");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_chart() -> Chart {
        Chart::new("Required diameter", "Mass (t)", "Diameter (mm)")
            .with_series(Series::from_xy("SF=10", [4.0, 86.0], [10.5, 49.5]))
            .with_thresholds([Threshold::new("Practical limit", 50.0, Axis::Y)])
    }

    #[test]
    fn series_bounds_cover_all_points() {
        let series = Series::from_xy("s", [3.0, -1.0, 2.0], [0.5, 4.0, -2.0]);
        assert_eq!(series.bounds(), Some(((-1.0, 3.0), (-2.0, 4.0))));
        assert_eq!(Series::from_xy("empty", Vec::new(), Vec::new()).bounds(), None);
    }

    #[test]
    fn plot_ranges_include_thresholds() {
        let ranges = sample_chart().plot_ranges().expect("chart has data");
        assert_eq!(ranges, ((4.0, 86.0), (0.0, 50.0)));

        let fixed = sample_chart().with_ranges((0.0, 90.0), (0.0, 70.0));
        assert_eq!(fixed.plot_ranges(), Some(((0.0, 90.0), (0.0, 70.0))));

        assert_eq!(Chart::new("empty", "x", "y").plot_ranges(), None);
    }

    #[test]
    fn json_sink_writes_chart() {
        let directory = std::env::temp_dir().join(format!("moai-rope-sink-{}", std::process::id()));
        let mut sink = JsonChartSink::new(&directory);
        let path = sink
            .render("required_diameter", &sample_chart())
            .expect("chart written");
        let body = fs::read_to_string(&path).expect("chart readable");
        let parsed: Chart = serde_json::from_str(&body).expect("chart parses");
        assert_eq!(parsed, sample_chart());
        fs::remove_dir_all(&directory).expect("cleanup succeeds");
    }
}
