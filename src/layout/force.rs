//! Force-directed simulation for larger graphs.
//!
//! Every pair of nodes repels (`k / d²`), every resolvable edge attracts its
//! endpoints (`0.3 · ln(d)`, which turns repulsive when the endpoints sit
//! closer than one unit apart). Velocity is not inertial: it is reset at the
//! start of each iteration and only accumulates this iteration's forces.

use rand::Rng;

use crate::config::LayoutConfig;
use crate::model::{Edge, GraphIr, Node, Point, PositionedNode};

/// Euclidean length of `(dx, dy)`, with an exactly-zero length replaced by 1
/// so force terms never divide by zero.
fn distance(dx: f64, dy: f64) -> f64 {
    let d = (dx * dx + dy * dy).sqrt();
    if d == 0.0 { 1.0 } else { d }
}

/// Run the simulation and return final positions.
///
/// Initial positions are uniformly random inside the padded canvas, so two
/// runs on the same input generally differ; final positions always lie
/// inside `[padding, width-padding] × [padding, height-padding]`.
pub fn simulate(nodes: &[Node], edges: &[Edge], config: &LayoutConfig) -> Vec<PositionedNode> {
    let mut rng = rand::thread_rng();
    let n = nodes.len();

    let mut positions: Vec<Point> = (0..n)
        .map(|_| {
            Point::new(
                rng.gen_range(config.padding..=config.width - config.padding),
                rng.gen_range(config.padding..=config.height - config.padding),
            )
        })
        .collect();
    let mut velocities: Vec<Point> = vec![Point::default(); n];

    // Label join done once; dangling edges drop out here.
    let springs = GraphIr::from_parts(nodes, edges).endpoint_indices();

    for _ in 0..config.iterations {
        // Repulsion between every ordered pair, accumulated from scratch.
        for i in 0..n {
            velocities[i] = Point::default();
            for j in 0..n {
                if i == j {
                    continue;
                }
                let dx = positions[i].x - positions[j].x;
                let dy = positions[i].y - positions[j].y;
                let d = distance(dx, dy);
                let force = config.repulsion / (d * d);
                velocities[i].x += dx / d * force;
                velocities[i].y += dy / d * force;
            }
        }

        // Attraction along each resolved edge: pulls the source toward the
        // target and vice versa.
        for &(s, t) in &springs {
            let dx = positions[t].x - positions[s].x;
            let dy = positions[t].y - positions[s].y;
            let d = distance(dx, dy);
            let force = d.ln() * config.attraction;
            velocities[s].x += dx / d * force;
            velocities[s].y += dy / d * force;
            velocities[t].x -= dx / d * force;
            velocities[t].y -= dy / d * force;
        }

        // Integrate with a per-axis step cap, then clamp to the padded canvas.
        for i in 0..n {
            positions[i].x += velocities[i].x.clamp(-config.max_step, config.max_step);
            positions[i].y += velocities[i].y.clamp(-config.max_step, config.max_step);
            positions[i].x = positions[i].x.clamp(config.padding, config.width - config.padding);
            positions[i].y = positions[i].y.clamp(config.padding, config.height - config.padding);
        }
    }

    nodes
        .iter()
        .zip(positions)
        .map(|(node, position)| PositionedNode::new(node, position))
        .collect()
}

// ─── Tests ───────────────────────────────────────────────────────────────────
