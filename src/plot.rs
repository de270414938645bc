use std::error::Error;
use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};

use moai_rope::{Axis, Chart, ChartSink, SinkError};
use plotters::prelude::*;
use tracing::info;

/// Series with at most this many points also get a marker per point.
const MARKED_SERIES_LEN: usize = 12;

/// Draws every chart as an SVG file with plotters.
#[derive(Clone, Debug)]
pub struct SvgChartSink {
    directory: PathBuf,
    size: (u32, u32),
}

impl SvgChartSink {
    /// Create a sink writing 1000×700 images into `directory`.
    pub fn new(directory: impl AsRef<Path>) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
            size: (1000, 700),
        }
    }
}

/// Widen a range by 5% on each side; a zero-width range gets a fixed pad.
fn padded((lo, hi): (f64, f64)) -> Range<f64> {
    let span = hi - lo;
    let pad = if span.abs() < f64::EPSILON {
        lo.abs().max(1.0) * 0.1
    } else {
        span * 0.05
    };
    (lo - pad)..(hi + pad)
}

fn draw(
    path: &Path,
    size: (u32, u32),
    data: &Chart,
    x_range: Range<f64>,
    y_range: Range<f64>,
) -> Result<(), Box<dyn Error>> {
    let root = SVGBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(&data.title, ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range.clone(), y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc(&data.x_label)
        .y_desc(&data.y_label)
        .draw()?;

    for (i, series) in data.series.iter().enumerate() {
        let color = Palette99::pick(i).mix(0.9);
        chart
            .draw_series(LineSeries::new(series.points.iter().copied(), &color))?
            .label(&series.name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        if series.points.len() <= MARKED_SERIES_LEN {
            chart.draw_series(
                series
                    .points
                    .iter()
                    .map(|&point| Circle::new(point, 4, color.filled())),
            )?;
        }
    }

    // Thresholds are annotations only; they span the whole plotted range.
    for (i, threshold) in data.thresholds.iter().enumerate() {
        let color = Palette99::pick(data.series.len() + i).mix(0.5);
        let line = match threshold.axis {
            Axis::X => vec![
                (threshold.value, y_range.start),
                (threshold.value, y_range.end),
            ],
            Axis::Y => vec![
                (x_range.start, threshold.value),
                (x_range.end, threshold.value),
            ],
        };
        chart
            .draw_series(std::iter::once(PathElement::new(line, color)))?
            .label(&threshold.label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

impl ChartSink for SvgChartSink {
    fn render(&mut self, name: &str, chart: &Chart) -> Result<PathBuf, SinkError> {
        let (x_range, y_range) = chart
            .plot_ranges()
            .ok_or_else(|| SinkError::EmptyChart(name.to_string()))?;
        fs::create_dir_all(&self.directory).map_err(|source| SinkError::Io {
            path: self.directory.clone(),
            source,
        })?;
        let path = self.directory.join(format!("{name}.svg"));
        draw(&path, self.size, chart, padded(x_range), padded(y_range)).map_err(|err| {
            SinkError::Render {
                chart: name.to_string(),
                message: err.to_string(),
            }
        })?;
        info!(path = %path.display(), "wrote chart");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moai_rope::{Series, Threshold};

    #[test]
    fn degenerate_ranges_are_widened() {
        let range = padded((50.0, 50.0));
        assert!(range.start < 50.0 && range.end > 50.0);
        let range = padded((0.0, 100.0));
        assert!((range.start + 5.0).abs() < 1e-9);
        assert!((range.end - 105.0).abs() < 1e-9);
    }

    #[test]
    fn empty_chart_is_rejected() {
        let mut sink = SvgChartSink::new(std::env::temp_dir());
        let err = sink
            .render("empty", &Chart::new("Empty", "x", "y"))
            .expect_err("nothing to draw");
        assert!(matches!(err, SinkError::EmptyChart(name) if name == "empty"));
    }

    #[test]
    fn writes_svg_file() {
        let directory = std::env::temp_dir().join(format!("moai-rope-svg-{}", std::process::id()));
        let chart = Chart::new("Required diameter", "Mass (t)", "Diameter (mm)")
            .with_series(Series::from_xy("SF = 10", [4.0, 86.0], [10.7, 49.5]))
            .with_thresholds([Threshold::new("Practical limit", 50.0, Axis::Y)]);
        let mut sink = SvgChartSink::new(&directory);
        let path = sink.render("required_diameter", &chart).expect("chart drawn");
        let body = fs::read_to_string(&path).expect("svg readable");
        assert!(body.contains("<svg"));
        fs::remove_dir_all(&directory).expect("cleanup succeeds");
    }
}
