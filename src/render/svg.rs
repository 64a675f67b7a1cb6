//! SVG scene builder — turns a positioned graph into an SVG document.
//!
//! Paint order (back to front): background, edge lines, node boxes with
//! centered labels, arrowheads. Arrowheads are painted last so they sit on
//! top of node borders.

use std::collections::HashMap;
use std::fmt::Write;

use crate::config::RenderConfig;
use crate::error::{Result, VizError};
use crate::model::{Edge, Point, PositionedNode};
use crate::render::geometry::{arrowhead, boundary_intersection, Rect};

// ─── Canvas ──────────────────────────────────────────────────────────────────

/// The render context: final canvas size, downscale factor and the
/// translation that maps graph coordinates onto it.
///
/// `scale` is 1 unless the padded bounding box exceeds the configured
/// maximum dimension. Every stroke width, font size and arrow length is
/// divided by it so apparent sizes stay constant after scaling; the single
/// factor lives here rather than being recomputed per primitive.
#[derive(Debug, Clone, Copy)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Canvas {
    /// Fit a canvas around the positioned nodes: bounding box over every
    /// node box, plus padding on all sides, downscaled to fit
    /// `max_dimension` if needed.
    pub fn fit(positioned: &[PositionedNode], config: &RenderConfig) -> Result<Self> {
        if positioned.is_empty() {
            return Err(VizError::InvalidInput("cannot render an empty graph".to_string()));
        }
        for p in positioned {
            if !p.position.is_finite() {
                return Err(VizError::InvalidInput(format!(
                    "node {} has a non-finite position",
                    p.id
                )));
            }
        }

        let hw = config.node_width / 2.0;
        let hh = config.node_height / 2.0;
        let min_x = positioned.iter().map(|p| p.position.x - hw).fold(f64::INFINITY, f64::min);
        let max_x = positioned.iter().map(|p| p.position.x + hw).fold(f64::NEG_INFINITY, f64::max);
        let min_y = positioned.iter().map(|p| p.position.y - hh).fold(f64::INFINITY, f64::min);
        let max_y = positioned.iter().map(|p| p.position.y + hh).fold(f64::NEG_INFINITY, f64::max);

        let raw_width = max_x - min_x + 2.0 * config.padding;
        let raw_height = max_y - min_y + 2.0 * config.padding;

        let scale = if raw_width > config.max_dimension || raw_height > config.max_dimension {
            (config.max_dimension / raw_width).min(config.max_dimension / raw_height)
        } else {
            1.0
        };

        tracing::debug!(raw_width, raw_height, scale, "fitted export canvas");

        Ok(Self {
            width: raw_width * scale,
            height: raw_height * scale,
            scale,
            offset_x: -min_x + config.padding,
            offset_y: -min_y + config.padding,
        })
    }

    /// A length given in graph units, counter-scaled so it keeps its
    /// apparent size on the final canvas.
    pub fn counter_scaled(&self, len: f64) -> f64 {
        len / self.scale
    }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Label → positioned node join table; first match wins on duplicates.
fn label_map(positioned: &[PositionedNode]) -> HashMap<&str, &PositionedNode> {
    let mut map: HashMap<&str, &PositionedNode> = HashMap::new();
    for p in positioned {
        map.entry(p.label.as_str()).or_insert(p);
    }
    map
}

fn polygon_points(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

// ─── Scene ───────────────────────────────────────────────────────────────────

/// Render the positioned graph to an SVG document string.
///
/// Edges resolve their endpoints by label; an edge with a dangling endpoint
/// is skipped in both the line pass and the arrowhead pass.
pub fn render(positioned: &[PositionedNode], edges: &[Edge], config: &RenderConfig) -> Result<(String, Canvas)> {
    let canvas = Canvas::fit(positioned, config)?;
    let by_label = label_map(positioned);

    let mut svg = String::new();
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = canvas.width,
        h = canvas.height,
    );
    let _ = write!(
        svg,
        r#"<rect width="100%" height="100%" fill="{}"/>"#,
        config.background_color
    );
    let _ = write!(
        svg,
        r#"<g transform="scale({}) translate({} {})">"#,
        canvas.scale, canvas.offset_x, canvas.offset_y
    );

    // Edge lines, center to center, no arrowheads yet.
    let edge_width = canvas.counter_scaled(config.edge_stroke_width);
    for edge in edges {
        let (Some(source), Some(target)) = (by_label.get(edge.from.as_str()), by_label.get(edge.to.as_str()))
        else {
            continue;
        };
        let _ = write!(
            svg,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
            source.position.x,
            source.position.y,
            target.position.x,
            target.position.y,
            config.edge_color,
            edge_width,
        );
    }

    // Node boxes with centered labels.
    let border_width = canvas.counter_scaled(config.node_stroke_width);
    let font_size = canvas.counter_scaled(config.font_size);
    for p in positioned {
        let x = p.position.x - config.node_width / 2.0;
        let y = p.position.y - config.node_height / 2.0;
        let _ = write!(
            svg,
            r#"<rect x="{x}" y="{y}" width="{}" height="{}" fill="{}" stroke="{}" stroke-width="{border_width}"/>"#,
            config.node_width, config.node_height, config.node_fill_color, config.node_border_color,
        );
        let _ = write!(
            svg,
            r#"<text x="{}" y="{}" text-anchor="middle" dominant-baseline="central" font-family="{}" font-size="{font_size}" fill="{}">{}</text>"#,
            p.position.x,
            p.position.y,
            config.font_family,
            config.text_color,
            escape(&p.label),
        );
    }

    // Arrowheads on top, terminating on the target box boundary.
    let arrow_length = canvas.counter_scaled(config.arrow_length);
    for edge in edges {
        let (Some(source), Some(target)) = (by_label.get(edge.from.as_str()), by_label.get(edge.to.as_str()))
        else {
            continue;
        };
        let dx = target.position.x - source.position.x;
        let dy = target.position.y - source.position.y;
        let angle = dy.atan2(dx);
        let rect = Rect::around(target.position, config.node_width, config.node_height);
        let tip = boundary_intersection(source.position, target.position, rect);
        let points = arrowhead(tip, angle, arrow_length, config.arrow_angle);
        let _ = write!(
            svg,
            r#"<polygon points="{}" fill="{}"/>"#,
            polygon_points(&points),
            config.arrow_color,
        );
    }

    svg.push_str("</g></svg>");
    Ok((svg, canvas))
}

// ─── Tests ───────────────────────────────────────────────────────────────────
