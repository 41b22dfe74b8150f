//! SVG rendering for ring layouts
//!
//! Maps the millimetre, y-up primitives from `ring_core::layout` onto a
//! pixel canvas: the outer tube is scaled to 90% of half the smaller canvas
//! side, the origin sits at the canvas center and y is flipped.

use std::fmt::{self, Write};

use ring_core::layout::{LayoutPrimitive, PrimitiveRole};

/// Fraction of the half-canvas the outer tube may occupy
pub const MARGIN_FACTOR: f64 = 0.9;

/// Largest scale accepted before a layout is treated as unrenderable
const MAX_SCALE: f64 = 1e6;

/// Millimetre to pixel mapping for one canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    /// Pixels per millimetre
    pub scale: f64,
}

impl Viewport {
    /// Fit a ring with the given outer tube radius into a canvas.
    ///
    /// Returns `None` when the resulting scale is not a sensible positive number.
    pub fn fit(outer_radius_mm: f64, width: f64, height: f64) -> Option<Self> {
        let scale = MARGIN_FACTOR * width.min(height) / 2.0 / outer_radius_mm;
        if !(scale > 0.0 && scale < MAX_SCALE) {
            return None;
        }
        Some(Viewport { width, height, scale })
    }

    /// Canvas pixel position of a layout point (y down)
    pub fn to_px(&self, x_mm: f64, y_mm: f64) -> (f64, f64) {
        (
            self.width / 2.0 + x_mm * self.scale,
            self.height / 2.0 - y_mm * self.scale,
        )
    }
}

fn stroke_style(role: PrimitiveRole) -> &'static str {
    match role {
        PrimitiveRole::OuterTube => r#"fill="none" stroke="black" stroke-width="2""#,
        PrimitiveRole::InnerTube | PrimitiveRole::Arm | PrimitiveRole::MotorDot => {
            r#"fill="none" stroke="black" stroke-width="1""#
        }
        PrimitiveRole::PropDisc => r#"fill="none" stroke="gray" stroke-width="1""#,
    }
}

/// Radius of the outer tube circle, if the layout has one
fn outer_radius(primitives: &[LayoutPrimitive]) -> Option<f64> {
    primitives.iter().find_map(|p| match *p {
        LayoutPrimitive::Circle {
            role: PrimitiveRole::OuterTube,
            radius,
            ..
        } => Some(radius),
        _ => None,
    })
}

/// Render a layout as a standalone SVG document.
///
/// An empty or unscalable layout yields a blank canvas.
pub fn render(primitives: &[LayoutPrimitive], width: u32, height: u32) -> Result<String, fmt::Error> {
    let (w, h) = (f64::from(width), f64::from(height));
    let mut svg = String::new();

    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        width, height, width, height
    )?;
    writeln!(svg, r#"  <rect width="100%" height="100%" fill="white"/>"#)?;

    if let Some(view) = outer_radius(primitives).and_then(|r| Viewport::fit(r, w, h)) {
        for primitive in primitives {
            let style = stroke_style(primitive.role());
            match *primitive {
                LayoutPrimitive::Circle {
                    center_x,
                    center_y,
                    radius,
                    ..
                } => {
                    let (cx, cy) = view.to_px(center_x, center_y);
                    writeln!(
                        svg,
                        r#"  <circle cx="{:.2}" cy="{:.2}" r="{:.2}" {}/>"#,
                        cx,
                        cy,
                        radius * view.scale,
                        style
                    )?;
                }
                LayoutPrimitive::Segment { x1, y1, x2, y2, .. } => {
                    let (px1, py1) = view.to_px(x1, y1);
                    let (px2, py2) = view.to_px(x2, y2);
                    writeln!(
                        svg,
                        r#"  <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" {}/>"#,
                        px1, py1, px2, py2, style
                    )?;
                }
            }
        }
    } else {
        tracing::warn!("layout has no drawable outer tube, writing blank canvas");
    }

    writeln!(svg, "</svg>")?;
    Ok(svg)
}
