//! Explicit column schema for ADCS simulation traces.
//!
//! Channel groups map each chart to an ordered list of expected column
//! names, and reaction wheels are typed records detected from the header,
//! so every lookup is validated upfront rather than failing mid-plot.

use serde::{Deserialize, Serialize};

use crate::{SimulationTrace, TraceError};

pub const TIME: &str = "Time";
pub const TIMESTEP: &str = "Timestep";

const WHEEL_PREFIX: &str = "Reaction wheel";

/// One measured channel: a legend label and the column backing it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Channel {
    pub label: String,
    pub column: String,
}

/// A group of channels rendered together on one chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelGroup {
    /// Chart title stem, e.g. "Satellite Position".
    pub title: String,
    /// Y-axis quantity, e.g. "Accelerometer" for the accelerometer group.
    pub quantity: String,
    /// Unit for the y-axis label.
    pub unit: String,
    pub channels: Vec<Channel>,
}

impl ChannelGroup {
    fn xyz(title: &str, quantity: &str, unit: &str, column_prefix: &str) -> Self {
        let channels = ["x", "y", "z"]
            .iter()
            .map(|axis| Channel {
                label: axis.to_string(),
                column: format!("{column_prefix} {axis}"),
            })
            .collect();
        Self {
            title: title.to_string(),
            quantity: quantity.to_string(),
            unit: unit.to_string(),
            channels,
        }
    }
}

/// A reaction wheel's recorded channels. `index` is zero-based as written
/// by the simulator; chart titles and file names use index + 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactionWheel {
    pub index: usize,
    pub omega_column: String,
    pub alpha_column: String,
}

impl ReactionWheel {
    fn new(index: usize) -> Self {
        Self {
            index,
            omega_column: format!("{WHEEL_PREFIX} {index} Omega"),
            alpha_column: format!("{WHEEL_PREFIX} {index} alpha"),
        }
    }
}

/// The four satellite channel groups, in chart order.
pub fn satellite_groups() -> Vec<ChannelGroup> {
    vec![
        ChannelGroup::xyz(
            "Satellite Position",
            "Satellite Position",
            "rad",
            "Satellite theta",
        ),
        ChannelGroup::xyz(
            "Satellite Velocity",
            "Satellite Velocity",
            "rad/s",
            "Satellite Omega",
        ),
        ChannelGroup::xyz(
            "Satellite Acceleration",
            "Satellite Acceleration",
            "rad/s^2",
            "Satellite alpha",
        ),
        ChannelGroup::xyz(
            "Accelerometer Reading",
            "Accelerometer",
            "m/s^2",
            "Accelerometer",
        ),
    ]
}

/// Detects reaction wheels from the trace header. The wheel count is half
/// the number of columns whose name contains "Reaction wheel", rounded
/// down; wheels are numbered 0..count.
pub fn detect_wheels(trace: &SimulationTrace) -> Vec<ReactionWheel> {
    let matching = trace
        .columns()
        .iter()
        .filter(|column| column.contains(WHEEL_PREFIX))
        .count();
    (0..matching / 2).map(ReactionWheel::new).collect()
}

/// Validates every expected column before any chart is rendered and
/// returns the detected reaction wheels.
///
/// Fails with the first missing column, checked in chart order: `Time`,
/// `Timestep`, the satellite groups, then each wheel's omega/alpha pair.
pub fn validate(trace: &SimulationTrace) -> Result<Vec<ReactionWheel>, TraceError> {
    trace.column(TIME)?;
    trace.column(TIMESTEP)?;
    for group in satellite_groups() {
        for channel in &group.channels {
            trace.column(&channel.column)?;
        }
    }
    let wheels = detect_wheels(trace);
    for wheel in &wheels {
        trace.column(&wheel.omega_column)?;
        trace.column(&wheel.alpha_column)?;
    }
    Ok(wheels)
}
