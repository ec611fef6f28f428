use std::{fmt::Display, path::Path};

use plotters::prelude::*;

use crate::{PlotError, figure::Figure};

// matplotlib default color cycle
const PALETTE: [RGBColor; 4] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
];

/// Renders one figure to a PNG file. Owns no state across calls; every
/// invocation opens its own backend and finishes with a blocking write.
pub fn render_png(figure: &Figure, path: &Path) -> Result<(), PlotError> {
    if figure.series().is_empty() {
        return Err(PlotError::EmptyFigure(figure.title.clone()));
    }

    let root = BitMapBackend::new(path, figure.size()).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;

    let (xmin, xmax) = figure.x_range();
    let (ymin, ymax) = figure.y_range();
    let mut chart = ChartBuilder::on(&root)
        .caption(&figure.title, ("sans-serif", 28))
        .margin(10)
        .x_label_area_size(45)
        .y_label_area_size(65)
        .build_cartesian_2d(xmin..xmax, ymin..ymax)
        .map_err(draw_err)?;

    chart
        .configure_mesh()
        .x_desc(figure.x_label.as_str())
        .y_desc(figure.y_label.as_str())
        .draw()
        .map_err(draw_err)?;

    for (i, series) in figure.series().iter().enumerate() {
        let color = PALETTE[i % PALETTE.len()];
        let line = chart
            .draw_series(LineSeries::new(
                series.points().iter().copied(),
                &color,
            ))
            .map_err(draw_err)?;
        if figure.show_legend() {
            line.label(series.label.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 12, y)], color));
        }
    }

    if figure.show_legend() {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(draw_err)?;
    }

    root.present().map_err(draw_err)?;
    Ok(())
}

fn draw_err<E: Display>(e: E) -> PlotError {
    PlotError::Draw(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::Series;

    #[test]
    fn writes_a_png_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut figure = Figure::new("Timestep vs. Time")
            .with_x_label("Time [s]")
            .with_y_label("Timestep [ms]");
        figure.add_series(Series::new("", &[0.0, 1.0, 2.0], &[10.0, 20.0, 30.0]));

        let path = dir.path().join("Timestep_vs_Time.png");
        render_png(&figure, &path).unwrap();

        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
    }

    #[test]
    fn legend_chart_renders_all_series() {
        let dir = tempfile::tempdir().unwrap();
        let mut figure = Figure::new("Satellite Position vs. Time")
            .with_x_label("Time [s]")
            .with_y_label("Satellite Position [rad]");
        for label in ["x", "y", "z"] {
            figure.add_series(Series::new(label, &[0.0, 1.0], &[0.0, 1.0]));
        }
        let path = dir.path().join("Satellite_Position_vs_Time.png");
        render_png(&figure, &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn empty_figure_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = render_png(&Figure::new("empty"), &dir.path().join("empty.png")).unwrap_err();
        assert!(matches!(err, PlotError::EmptyFigure(title) if title == "empty"));
    }
}
