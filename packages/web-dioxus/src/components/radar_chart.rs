//! Inline-SVG radar chart widget.
//!
//! A generic five-sided (or n-sided) radar: concentric grid rings, one
//! axis label per data point, and a filled polygon scaled by
//! `value / full_mark`. Values are drawn as-is; nothing clamps them.

use dioxus::prelude::*;

/// One axis of the radar dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarPoint {
    /// Axis label
    pub subject: &'static str,
    /// Plotted value
    pub value: f64,
    /// Scale maximum for this axis
    pub full_mark: f64,
}

/// Props for RadarChart
#[derive(Props, Clone, PartialEq)]
pub struct RadarChartProps {
    pub data: Vec<RadarPoint>,
}

const CENTER: f64 = 100.0;
const RADIUS: f64 = 75.0;

/// Radar chart over an arbitrary dataset.
#[component]
pub fn RadarChart(props: RadarChartProps) -> Element {
    let data = &props.data;
    if data.is_empty() {
        return rsx! {};
    }

    let value_points = polygon_points(data, RADIUS);
    let rings: Vec<String> = [0.25, 0.5, 0.75, 1.0]
        .iter()
        .map(|fraction| ring_points(data.len(), RADIUS * fraction))
        .collect();
    let labels: Vec<(f64, f64, &'static str)> = data
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let (x, y) = vertex(i, data.len(), RADIUS + 14.0);
            (x, y, point.subject)
        })
        .collect();

    rsx! {
        svg {
            view_box: "0 0 200 200",
            class: "w-full h-full",

            // Grid rings
            for ring in rings.iter() {
                polygon {
                    points: "{ring}",
                    fill: "none",
                    stroke: "#334155",
                    stroke_width: "0.5",
                }
            }

            // Axis spokes
            for i in 0..props.data.len() {
                {
                    let (x, y) = vertex(i, props.data.len(), RADIUS);
                    rsx! {
                        line {
                            x1: "{CENTER}",
                            y1: "{CENTER}",
                            x2: "{x}",
                            y2: "{y}",
                            stroke: "#334155",
                            stroke_width: "0.5",
                        }
                    }
                }
            }

            // Value polygon
            polygon {
                points: "{value_points}",
                fill: "#6366f1",
                fill_opacity: "0.4",
                stroke: "#6366f1",
                stroke_width: "1.5",
            }

            // Axis labels
            for (x, y, subject) in labels {
                text {
                    x: "{x}",
                    y: "{y}",
                    fill: "#94a3b8",
                    font_size: "10",
                    font_weight: "700",
                    text_anchor: "middle",
                    dominant_baseline: "middle",
                    "{subject}"
                }
            }
        }
    }
}

/// Vertex of axis `i` out of `n`, at distance `radius` from the center.
/// The first axis points straight up.
fn vertex(i: usize, n: usize, radius: f64) -> (f64, f64) {
    let angle = std::f64::consts::TAU * (i as f64) / (n as f64) - std::f64::consts::FRAC_PI_2;
    (CENTER + radius * angle.cos(), CENTER + radius * angle.sin())
}

/// SVG `points` string for the data polygon.
fn polygon_points(data: &[RadarPoint], radius: f64) -> String {
    data.iter()
        .enumerate()
        .map(|(i, point)| {
            let ratio = if point.full_mark > 0.0 {
                point.value / point.full_mark
            } else {
                0.0
            };
            let (x, y) = vertex(i, data.len(), radius * ratio);
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// SVG `points` string for a grid ring at the given radius.
fn ring_points(n: usize, radius: f64) -> String {
    (0..n)
        .map(|i| {
            let (x, y) = vertex(i, n, radius);
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(value: f64) -> RadarPoint {
        RadarPoint {
            subject: "Axis",
            value,
            full_mark: 100.0,
        }
    }

    #[test]
    fn first_axis_points_up() {
        let (x, y) = vertex(0, 5, RADIUS);
        assert!((x - CENTER).abs() < 1e-9);
        assert!((y - (CENTER - RADIUS)).abs() < 1e-9);
    }

    #[test]
    fn polygon_has_one_vertex_per_point() {
        let data = vec![point(70.0), point(60.0), point(50.0), point(40.0), point(85.0)];
        let points = polygon_points(&data, RADIUS);
        assert_eq!(points.split(' ').count(), 5);
    }

    #[test]
    fn full_mark_value_reaches_the_outer_ring() {
        let data = vec![point(100.0), point(100.0), point(100.0)];
        let polygon = polygon_points(&data, RADIUS);
        let ring = ring_points(3, RADIUS);
        assert_eq!(polygon, ring);
    }

    #[test]
    fn zero_full_mark_collapses_to_center() {
        let data = vec![RadarPoint {
            subject: "Axis",
            value: 50.0,
            full_mark: 0.0,
        }];
        let points = polygon_points(&data, RADIUS);
        assert_eq!(points, format!("{CENTER:.1},{CENTER:.1}"));
    }
}
