//! # Top-View Layout
//!
//! Turns a [`GeometryRecord`] into an ordered list of drawing primitives in
//! millimetres. Origin is the ring center, +x points right and +y points up.
//! Scaling to pixels and flipping the y axis is the renderer's job.
//!
//! ## Output order
//!
//! 1. outer tube circle
//! 2. inner tube circle
//! 3. per motor `i` (starting on the +x axis, counter-clockwise):
//!    arm segment from the origin, prop disc, motor dot
//!
//! A drawable ring with `n` motors therefore yields `2 + 3n` primitives.
//! Degenerate geometry yields none.
//!
//! ## Example
//!
//! ```rust
//! use ring_core::calculations::compute;
//! use ring_core::inputs::RawInputs;
//! use ring_core::layout::project;
//! use ring_core::motors::BUILTIN_MOTORS;
//! use ring_core::settings::DesignConstants;
//!
//! let result = compute(&RawInputs::default(), &*BUILTIN_MOTORS, &DesignConstants::default()).unwrap();
//! let primitives = project(&result.geometry, result.input.motor_count);
//! assert_eq!(primitives.len(), 2 + 3 * 4);
//! ```

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calculations::GeometryRecord;
use crate::settings::DesignConstants;

/// What a primitive depicts, so a renderer can style it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveRole {
    OuterTube,
    InnerTube,
    /// Line from ring center to a motor
    Arm,
    /// Circle swept by a propeller
    PropDisc,
    /// Marker at a motor axis
    MotorDot,
}

/// Drawing primitive in millimetres (y up).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape")]
pub enum LayoutPrimitive {
    Circle {
        role: PrimitiveRole,
        center_x: f64,
        center_y: f64,
        radius: f64,
    },
    Segment {
        role: PrimitiveRole,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    },
}

impl LayoutPrimitive {
    pub fn role(&self) -> PrimitiveRole {
        match *self {
            LayoutPrimitive::Circle { role, .. } | LayoutPrimitive::Segment { role, .. } => role,
        }
    }
}

/// Largest motor count the projector will lay out
pub const MAX_MOTOR_COUNT: u32 = 360;

/// Angle of motor `index` out of `motor_count` (radians, from +x, counter-clockwise)
pub fn motor_angle(index: u32, motor_count: u32) -> f64 {
    2.0 * PI * f64::from(index) / f64::from(motor_count)
}

/// Motor axis positions in index order.
///
/// Empty when `motor_count` exceeds [`MAX_MOTOR_COUNT`].
pub fn motor_positions(geometry: &GeometryRecord, motor_count: u32) -> Vec<(f64, f64)> {
    if motor_count > MAX_MOTOR_COUNT {
        return Vec::new();
    }
    (0..motor_count)
        .map(|i| {
            let angle = motor_angle(i, motor_count);
            (
                geometry.motor_radius_mm * angle.cos(),
                geometry.motor_radius_mm * angle.sin(),
            )
        })
        .collect()
}

/// Project geometry using the default motor dot radius.
pub fn project(geometry: &GeometryRecord, motor_count: u32) -> Vec<LayoutPrimitive> {
    project_with(geometry, motor_count, &DesignConstants::default())
}

/// Project geometry into layout primitives.
///
/// Returns an empty list when the geometry is degenerate or `motor_count` is
/// 0 or above [`MAX_MOTOR_COUNT`].
pub fn project_with(
    geometry: &GeometryRecord,
    motor_count: u32,
    constants: &DesignConstants,
) -> Vec<LayoutPrimitive> {
    if motor_count > MAX_MOTOR_COUNT {
        warn!(motor_count, max = MAX_MOTOR_COUNT, "too many motors to draw");
        return Vec::new();
    }
    if motor_count == 0 || geometry.is_degenerate() {
        warn!(
            motor_count,
            tube_outer_radius_mm = geometry.tube_outer_radius_mm,
            motor_radius_mm = geometry.motor_radius_mm,
            "degenerate geometry, nothing to draw"
        );
        return Vec::new();
    }

    let mut primitives = Vec::with_capacity(2 + 3 * motor_count as usize);

    primitives.push(LayoutPrimitive::Circle {
        role: PrimitiveRole::OuterTube,
        center_x: 0.0,
        center_y: 0.0,
        radius: geometry.tube_outer_radius_mm,
    });
    primitives.push(LayoutPrimitive::Circle {
        role: PrimitiveRole::InnerTube,
        center_x: 0.0,
        center_y: 0.0,
        radius: geometry.tube_inner_radius_mm,
    });

    for (x, y) in motor_positions(geometry, motor_count) {
        primitives.push(LayoutPrimitive::Segment {
            role: PrimitiveRole::Arm,
            x1: 0.0,
            y1: 0.0,
            x2: x,
            y2: y,
        });
        primitives.push(LayoutPrimitive::Circle {
            role: PrimitiveRole::PropDisc,
            center_x: x,
            center_y: y,
            radius: geometry.prop_radius_mm,
        });
        primitives.push(LayoutPrimitive::Circle {
            role: PrimitiveRole::MotorDot,
            center_x: x,
            center_y: y,
            radius: constants.motor_dot_radius_mm,
        });
    }

    primitives
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::geometry;
    use crate::inputs::RawInputs;

    fn reference_geometry() -> GeometryRecord {
        let input = RawInputs::default().parse().unwrap();
        geometry::calculate(&input, &DesignConstants::default())
    }

    #[test]
    fn test_primitive_count() {
        let g = reference_geometry();
        for n in [1, 3, 4, 6, 8, 12] {
            assert_eq!(project(&g, n).len(), 2 + 3 * n as usize);
        }
    }

    #[test]
    fn test_order_and_roles() {
        let g = reference_geometry();
        let p = project(&g, 4);

        assert_eq!(p[0].role(), PrimitiveRole::OuterTube);
        assert_eq!(p[1].role(), PrimitiveRole::InnerTube);
        for motor in 0..4 {
            let base = 2 + motor * 3;
            assert_eq!(p[base].role(), PrimitiveRole::Arm);
            assert_eq!(p[base + 1].role(), PrimitiveRole::PropDisc);
            assert_eq!(p[base + 2].role(), PrimitiveRole::MotorDot);
        }

        match p[0] {
            LayoutPrimitive::Circle { radius, .. } => assert_eq!(radius, g.tube_outer_radius_mm),
            _ => panic!("outer tube should be a circle"),
        }
        match p[3] {
            LayoutPrimitive::Circle { radius, .. } => assert_eq!(radius, g.prop_radius_mm),
            _ => panic!("prop disc should be a circle"),
        }
    }

    #[test]
    fn test_first_motor_on_positive_x() {
        let g = reference_geometry();
        let p = project(&g, 4);
        match p[2] {
            LayoutPrimitive::Segment { x1, y1, x2, y2, .. } => {
                assert_eq!((x1, y1), (0.0, 0.0));
                assert!((x2 - g.motor_radius_mm).abs() < 1e-9);
                assert!(y2.abs() < 1e-9);
            }
            _ => panic!("arm should be a segment"),
        }
    }

    #[test]
    fn test_motors_evenly_spaced_counter_clockwise() {
        let g = reference_geometry();
        let n = 6;
        let positions = motor_positions(&g, n);
        for (i, (x, y)) in positions.iter().enumerate() {
            let expected = 2.0 * PI * i as f64 / n as f64;
            let actual = y.atan2(*x).rem_euclid(2.0 * PI);
            assert!((actual - expected).abs() < 1e-9, "motor {i}");
            assert!((x.hypot(*y) - g.motor_radius_mm).abs() < 1e-9);
        }
        // Second motor of a quad sits on +y
        let quad = motor_positions(&g, 4);
        assert!(quad[1].0.abs() < 1e-9);
        assert!(quad[1].1 > 0.0);
    }

    #[test]
    fn test_degenerate_geometry_is_empty() {
        let g = reference_geometry();
        assert!(project(&g, 0).is_empty());

        let mut zero_tube = g;
        zero_tube.tube_outer_radius_mm = 0.0;
        assert!(project(&zero_tube, 4).is_empty());

        let mut negative_inner = g;
        negative_inner.tube_inner_radius_mm = -1.0;
        assert!(project(&negative_inner, 4).is_empty());

        let mut zero_motor = g;
        zero_motor.motor_radius_mm = 0.0;
        assert!(project(&zero_motor, 4).is_empty());

        let mut nan_motor = g;
        nan_motor.motor_radius_mm = f64::NAN;
        assert!(project(&nan_motor, 4).is_empty());
    }

    #[test]
    fn test_excessive_motor_count_is_empty() {
        let input = RawInputs {
            motor_count: "4000000000".to_string(),
            ..RawInputs::default()
        }
        .parse()
        .unwrap();
        let g = geometry::calculate(&input, &DesignConstants::default());

        assert!(project(&g, input.motor_count).is_empty());
        assert!(motor_positions(&g, input.motor_count).is_empty());
        assert_eq!(project(&g, MAX_MOTOR_COUNT).len(), 2 + 3 * MAX_MOTOR_COUNT as usize);
        assert!(project(&g, MAX_MOTOR_COUNT + 1).is_empty());
    }

    #[test]
    fn test_motor_dot_radius_configurable() {
        let g = reference_geometry();
        let constants = DesignConstants {
            motor_dot_radius_mm: 5.0,
            ..DesignConstants::default()
        };
        let p = project_with(&g, 1, &constants);
        match p[4] {
            LayoutPrimitive::Circle { role, radius, .. } => {
                assert_eq!(role, PrimitiveRole::MotorDot);
                assert_eq!(radius, 5.0);
            }
            _ => panic!("motor dot should be a circle"),
        }
    }
}
