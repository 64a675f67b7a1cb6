//! Layout and rendering configuration.
//!
//! All numeric constants of the pipeline live here so the layout engine and
//! the renderers never hard-code a magic number.

// ─── LayoutConfig ────────────────────────────────────────────────────────────

/// Parameters of the layout engine.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Logical canvas width used by the layout engine.
    pub width: f64,
    /// Logical canvas height used by the layout engine.
    pub height: f64,
    /// Margin kept free on every side of the canvas.
    pub padding: f64,
    /// Largest node count placed on a circle; above this the force
    /// simulation runs instead.
    pub circle_threshold: usize,
    /// Number of simulation iterations.
    pub iterations: usize,
    /// Repulsion constant `k` in `k / d²`.
    pub repulsion: f64,
    /// Attraction factor in `factor · ln(d)`.
    pub attraction: f64,
    /// Per-axis cap on how far a node moves in one iteration.
    pub max_step: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            padding: 50.0,
            circle_threshold: 8,
            iterations: 50,
            repulsion: 30.0,
            attraction: 0.3,
            max_step: 10.0,
        }
    }
}

// ─── RenderConfig ────────────────────────────────────────────────────────────

/// Parameters of the raster renderer.
///
/// Stroke widths, font size and arrow length are given in graph units; the
/// renderer divides them by the downscale factor so their apparent size stays
/// constant after scaling.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Width of the box drawn for every node.
    pub node_width: f64,
    /// Height of the box drawn for every node.
    pub node_height: f64,
    /// Margin added around the graph bounding box.
    pub padding: f64,
    /// Longest allowed canvas edge; bigger canvases are scaled down.
    pub max_dimension: f64,
    pub edge_stroke_width: f64,
    pub node_stroke_width: f64,
    pub font_size: f64,
    pub font_family: String,
    pub arrow_length: f64,
    /// Half-angle of the arrowhead triangle, in radians.
    pub arrow_angle: f64,
    pub background_color: String,
    pub node_fill_color: String,
    pub node_border_color: String,
    pub edge_color: String,
    pub arrow_color: String,
    pub text_color: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            node_width: 100.0,
            node_height: 50.0,
            padding: 50.0,
            max_dimension: 2000.0,
            edge_stroke_width: 2.0,
            node_stroke_width: 1.0,
            font_size: 16.0,
            font_family: "Arial".to_string(),
            arrow_length: 20.0,
            arrow_angle: std::f64::consts::FRAC_PI_6,
            background_color: "#ffffff".to_string(),
            node_fill_color: "#f0f0f0".to_string(),
            node_border_color: "#000".to_string(),
            edge_color: "#555".to_string(),
            arrow_color: "#000".to_string(),
            text_color: "#000".to_string(),
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
