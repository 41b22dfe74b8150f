//! # Report and CAD Export
//!
//! Formats computed records two ways:
//!
//! - a human-readable report (fixed section order, whole-millimetre geometry)
//! - an [`ExportBlock`] of `#name = value unit` lines that can be pasted
//!   into a parametric CAD tool's variable table
//!
//! ## Export format
//!
//! ```text
//! #prop_diameter = 660 mm
//! #num_motors = 4
//! #motor_radius = 528 mm  // center to motor
//! #prop_radius = 330 mm
//! #prop_tip_radius = 859 mm
//! #clearance_prop_to_tube = 30 mm
//! #tube_OD = 132 mm
//! #tube_wall = 66 mm   // placeholder
//! #tube_inner_radius = 889 mm
//! #tube_center_radius = 955 mm
//! #tube_outer_radius = 1021 mm
//! #ring_OD = 2041 mm
//! ```
//!
//! Values are rounded with `{:.0}` (nearest, ties to even).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::calculations::{GeometryRecord, MarginStatus, NoDataReason, PropulsionRecord, SizingResult};
use crate::inputs::SizingInput;

/// Heading placed above the variable block in the human report
pub const EXPORT_HEADING: &str = "=== OnShape variable block (copy-paste) ===";

/// One `#name = value unit  // comment` line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportLine {
    /// Variable name without the leading `#`
    pub name: String,
    /// Unrounded value; rounded when displayed
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Spaces between the unit and `//`
    #[serde(default = "default_comment_gap")]
    pub comment_gap: usize,
}

fn default_comment_gap() -> usize {
    2
}

impl ExportLine {
    fn mm(name: &str, value: f64) -> Self {
        ExportLine {
            name: name.to_string(),
            value,
            unit: Some("mm".to_string()),
            comment: None,
            comment_gap: default_comment_gap(),
        }
    }

    fn count(name: &str, value: u32) -> Self {
        ExportLine {
            name: name.to_string(),
            value: f64::from(value),
            unit: None,
            comment: None,
            comment_gap: default_comment_gap(),
        }
    }

    fn with_comment(mut self, comment: &str, gap: usize) -> Self {
        self.comment = Some(comment.to_string());
        self.comment_gap = gap;
        self
    }
}

impl fmt::Display for ExportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} = {:.0}", self.name, self.value)?;
        if let Some(unit) = &self.unit {
            write!(f, " {}", unit)?;
        }
        if let Some(comment) = &self.comment {
            write!(f, "{:gap$}// {}", "", comment, gap = self.comment_gap)?;
        }
        Ok(())
    }
}

/// Ordered CAD variable set sufficient to rebuild the ring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportBlock {
    pub lines: Vec<ExportLine>,
}

impl ExportBlock {
    /// Build the variable block for a geometry and motor count.
    pub fn from_geometry(geometry: &GeometryRecord, motor_count: u32) -> Self {
        let g = geometry;
        ExportBlock {
            lines: vec![
                ExportLine::mm("prop_diameter", g.prop_diameter_mm),
                ExportLine::count("num_motors", motor_count),
                ExportLine::mm("motor_radius", g.motor_radius_mm).with_comment("center to motor", 2),
                ExportLine::mm("prop_radius", g.prop_radius_mm),
                ExportLine::mm("prop_tip_radius", g.prop_tip_radius_mm),
                ExportLine::mm("clearance_prop_to_tube", g.clearance_mm),
                ExportLine::mm("tube_OD", g.tube_od_mm),
                ExportLine::mm("tube_wall", g.tube_wall_mm).with_comment("placeholder", 3),
                ExportLine::mm("tube_inner_radius", g.tube_inner_radius_mm),
                ExportLine::mm("tube_center_radius", g.tube_center_radius_mm),
                ExportLine::mm("tube_outer_radius", g.tube_outer_radius_mm),
                ExportLine::mm("ring_OD", g.ring_od_mm),
            ],
        }
    }

    /// Look up a line by variable name
    pub fn get(&self, name: &str) -> Option<&ExportLine> {
        self.lines.iter().find(|l| l.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for ExportBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Formatted output of one computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Multi-line report for display
    pub human: String,
    /// CAD variable block
    pub export: ExportBlock,
}

/// Format records into a human report and an export block.
pub fn format(geometry: &GeometryRecord, propulsion: &PropulsionRecord, input: &SizingInput) -> Report {
    let export = ExportBlock::from_geometry(geometry, input.motor_count);
    let g = geometry;
    let p = propulsion;

    let mut lines = vec![
        "=== CONFIG RESULTS ===".to_string(),
        format!(
            "Prop diameter: {:.1} in  ({:.0} mm)",
            input.prop_diameter_in, g.prop_diameter_mm
        ),
        format!("Number of motors: {}", input.motor_count),
        String::new(),
        format!("Motor radius (center → motor): {:.0} mm", g.motor_radius_mm),
        format!("Prop radius: {:.0} mm", g.prop_radius_mm),
        format!("Prop tip radius: {:.0} mm", g.prop_tip_radius_mm),
        format!("Prop-tip clearance to tube inner wall: {:.0} mm", g.clearance_mm),
        format!("Tube OD (auto): {:.0} mm", g.tube_od_mm),
        format!("Tube inner radius: {:.0} mm", g.tube_inner_radius_mm),
        format!("Tube center radius: {:.0} mm", g.tube_center_radius_mm),
        format!("Tube outer radius: {:.0} mm", g.tube_outer_radius_mm),
        format!("Ring OD (overall frame): {:.0} mm", g.ring_od_mm),
        String::new(),
        format!("Total mass (payload + frame): {:.2} kg", p.total_mass_kg),
        format!("Desired T/W: {:.2}", input.thrust_to_weight),
        format!("Total thrust required: {:.0} N", p.total_thrust_required_n),
        format!("Thrust per motor: {:.0} N", p.thrust_per_motor_n),
        String::new(),
    ];
    lines.extend(status_lines(p));
    lines.push(String::new());
    lines.push(EXPORT_HEADING.to_string());
    lines.extend(export.lines.iter().map(ToString::to_string));

    Report {
        human: lines.join("\n"),
        export,
    }
}

/// Format a full engine result.
pub fn format_result(result: &SizingResult) -> Report {
    format(&result.geometry, &result.propulsion, &result.input)
}

/// Motor status line(s) for the report.
pub fn status_lines(propulsion: &PropulsionRecord) -> Vec<String> {
    let headline = match propulsion.margin {
        MarginStatus::NoData {
            reason: NoDataReason::MissingTableEntry,
        } => {
            return vec![
                "Motor status: No motor data for this prop size (update the motor table).".to_string(),
            ]
        }
        MarginStatus::NoData {
            reason: NoDataReason::NonPositiveDemand,
        } => {
            return vec![
                "Motor status: Thrust per motor is zero or negative (check inputs).".to_string(),
            ]
        }
        MarginStatus::Ok { margin_pct, .. } => format!(
            "Motor status: OK – est. margin ≈ {:.0}% above required thrust.",
            margin_pct
        ),
        MarginStatus::Borderline { margin_pct, .. } => format!(
            "Motor status: BORDERLINE – only ≈ {:.0}% margin above required thrust.",
            margin_pct
        ),
        MarginStatus::Underpowered { shortfall_pct, .. } => format!(
            "Motor status: UNDERPOWERED – short by ≈ {:.0}% of required thrust.",
            shortfall_pct
        ),
    };

    let mut lines = vec![headline];
    if let Some(capability) = propulsion.motor_capability_n {
        lines.push(format!(
            "(DB max thrust per motor: {:.0} N, required: {:.0} N)",
            capability, propulsion.thrust_per_motor_n
        ));
    }
    lines
}
