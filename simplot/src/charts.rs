//! Builds the fixed chart set for a simulation run: timestep, the four
//! satellite channel groups, and one chart per detected reaction wheel.

use plotting::{Figure, Series};
use trace::{ReactionWheel, SimulationTrace, TraceError, schema};

pub const POSITION_CHART_FILE: &str = "Satellite_Position_vs_Time.png";

const TIME_LABEL: &str = "Time [s]";

/// A figure paired with the file name it is saved under.
pub struct Chart {
    pub file_name: String,
    pub figure: Figure,
}

/// Builds every chart for the trace, in render order. Columns were
/// validated upfront, so lookups here only fail on a schema/trace mismatch.
pub fn chart_set(
    trace: &SimulationTrace,
    wheels: &[ReactionWheel],
) -> Result<Vec<Chart>, TraceError> {
    let time = trace.column(schema::TIME)?;
    let mut charts = Vec::with_capacity(5 + wheels.len());

    // Timestep is recorded in seconds, plotted in milliseconds
    let timestep_ms: Vec<f64> = trace
        .column(schema::TIMESTEP)?
        .iter()
        .map(|dt| dt * 1000.0)
        .collect();
    let mut figure = Figure::new("Timestep vs. Time")
        .with_x_label(TIME_LABEL)
        .with_y_label("Timestep [ms]");
    figure.add_series(Series::new("", time, &timestep_ms));
    charts.push(Chart {
        file_name: "Timestep_vs_Time.png".to_string(),
        figure,
    });

    for group in schema::satellite_groups() {
        let mut figure = Figure::new(format!("{} vs. Time", group.title))
            .with_x_label(TIME_LABEL)
            .with_y_label(format!("{} [{}]", group.quantity, group.unit));
        for channel in &group.channels {
            figure.add_series(Series::new(
                &channel.label,
                time,
                trace.column(&channel.column)?,
            ));
        }
        charts.push(Chart {
            file_name: format!("{}_vs_Time.png", group.title.replace(' ', "_")),
            figure,
        });
    }

    for wheel in wheels {
        let n = wheel.index + 1;
        let mut figure =
            Figure::new(format!("Reaction wheel {n} vs. Time")).with_x_label(TIME_LABEL);
        figure.add_series(Series::new(
            "omega",
            time,
            trace.column(&wheel.omega_column)?,
        ));
        figure.add_series(Series::new(
            "alpha",
            time,
            trace.column(&wheel.alpha_column)?,
        ));
        charts.push(Chart {
            file_name: format!("Reaction wheel {n} alpha.png"),
            figure,
        });
    }

    Ok(charts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use trace::schema::validate;

    fn trace_with_wheels(wheel_count: usize) -> SimulationTrace {
        let mut columns = vec!["Time".to_string(), "Timestep".to_string()];
        for prefix in ["Satellite theta", "Satellite Omega", "Satellite alpha", "Accelerometer"] {
            for axis in ["x", "y", "z"] {
                columns.push(format!("{prefix} {axis}"));
            }
        }
        for wheel in 0..wheel_count {
            columns.push(format!("Reaction wheel {wheel} Omega"));
            columns.push(format!("Reaction wheel {wheel} alpha"));
        }
        let header = columns.join(",");
        let mut csv = format!("{header}\n");
        for (row, dt) in [0.01, 0.02, 0.03].iter().enumerate() {
            let mut fields = vec![format!("{row}.0"), format!("{dt}")];
            fields.extend(vec!["0.5".to_string(); columns.len() - 2]);
            csv.push_str(&fields.join(","));
            csv.push('\n');
        }
        SimulationTrace::from_reader(csv.as_bytes()).unwrap()
    }

    #[test]
    fn emits_five_charts_plus_one_per_wheel() {
        let trace = trace_with_wheels(2);
        let wheels = validate(&trace).unwrap();
        let charts = chart_set(&trace, &wheels).unwrap();
        let names: Vec<&str> = charts
            .iter()
            .map(|chart| chart.file_name.as_str())
            .collect();
        assert_eq!(
            names,
            [
                "Timestep_vs_Time.png",
                "Satellite_Position_vs_Time.png",
                "Satellite_Velocity_vs_Time.png",
                "Satellite_Acceleration_vs_Time.png",
                "Accelerometer_Reading_vs_Time.png",
                "Reaction wheel 1 alpha.png",
                "Reaction wheel 2 alpha.png",
            ]
        );
        assert_eq!(names[1], POSITION_CHART_FILE);
    }

    #[test]
    fn timestep_chart_converts_to_milliseconds() {
        let trace = trace_with_wheels(0);
        let charts = chart_set(&trace, &[]).unwrap();
        let series = &charts[0].figure.series()[0];
        let y: Vec<f64> = series
            .points()
            .iter()
            .map(|&(_, y)| y)
            .collect();
        assert_eq!(y, [10.0, 20.0, 30.0]);
    }

    #[test]
    fn wheel_chart_has_omega_and_alpha_series() {
        let trace = trace_with_wheels(1);
        let wheels = validate(&trace).unwrap();
        let charts = chart_set(&trace, &wheels).unwrap();
        let wheel_chart = &charts[5];
        assert_eq!(wheel_chart.figure.title, "Reaction wheel 1 vs. Time");
        let labels: Vec<&str> = wheel_chart
            .figure
            .series()
            .iter()
            .map(|series| series.label.as_str())
            .collect();
        assert_eq!(labels, ["omega", "alpha"]);
    }

    #[test]
    fn group_charts_carry_units_and_legend() {
        let trace = trace_with_wheels(0);
        let charts = chart_set(&trace, &[]).unwrap();
        assert_eq!(charts[2].figure.y_label, "Satellite Velocity [rad/s]");
        assert_eq!(charts[4].figure.y_label, "Accelerometer [m/s^2]");
        assert!(charts[1].figure.show_legend());
        assert!(!charts[0].figure.show_legend());
    }
}
