//! # ring_core - Ducted-Ring Multirotor Sizing Engine
//!
//! `ring_core` sizes the duct ring of a multirotor from a handful of inputs
//! (prop diameter, motor count, masses, thrust-to-weight, clearance) and
//! checks the motors against a reference thrust table. All inputs and
//! outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: pure functions that take input and return results
//! - **Raw-text inputs**: the engine parses and validates what a form supplies
//! - **Rich Errors**: structured error types, not just strings
//! - **No pixels**: layout is emitted in millimetres, renderers scale it
//!
//! ## Quick Start
//!
//! ```rust
//! use ring_core::calculations::compute;
//! use ring_core::inputs::RawInputs;
//! use ring_core::layout::project;
//! use ring_core::motors::BUILTIN_MOTORS;
//! use ring_core::report::format_result;
//! use ring_core::settings::DesignConstants;
//!
//! let raw = RawInputs {
//!     prop_diameter_in: "26".to_string(),
//!     motor_count: "4".to_string(),
//!     payload_mass_kg: "10.0".to_string(),
//!     frame_mass_kg: "5.5".to_string(),
//!     thrust_to_weight: "2.0".to_string(),
//!     clearance_mm: "30".to_string(),
//! };
//!
//! let result = compute(&raw, &*BUILTIN_MOTORS, &DesignConstants::default()).unwrap();
//! let primitives = project(&result.geometry, result.input.motor_count);
//! let report = format_result(&result);
//!
//! assert_eq!(primitives.len(), 14);
//! assert!(report.export.to_string().ends_with("#ring_OD = 2041 mm"));
//! ```
//!
//! ## Modules
//!
//! - [`inputs`] - Raw input fields and validation
//! - [`calculations`] - Geometry and propulsion (the sizing engine)
//! - [`layout`] - Top-view drawing primitives
//! - [`report`] - Human report and CAD variable export
//! - [`motors`] - Motor capability table
//! - [`settings`] - Design constants and settings file
//! - [`session`] - Host-owned state between computations
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types
//! - [`file_io`] - Settings loading and atomic export writes

pub mod calculations;
pub mod errors;
pub mod file_io;
pub mod inputs;
pub mod layout;
pub mod motors;
pub mod report;
pub mod session;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{compute, GeometryRecord, MarginStatus, PropulsionRecord, SizingResult};
pub use errors::{CalcError, CalcResult, ValidationError};
pub use inputs::{RawInputs, SizingInput};
pub use layout::{project, LayoutPrimitive, PrimitiveRole};
pub use motors::{MotorDatabase, MotorTable, BUILTIN_MOTORS};
pub use report::{ExportBlock, Report};
pub use session::DesignSession;
pub use settings::{DesignConstants, Settings};
