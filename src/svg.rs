//! SVG visualization of a computed grid layout.
//!
//! Draws the occupied grid cells, the gutters between them, and each placed
//! image labeled with its source index, size and canvas offset.
//!
//! # Example
//!
//! ```
//! use zengrid::{GridLayout, Size, Viewport, svg::render_grid_svg};
//!
//! let plan = GridLayout::new(Viewport::new(200, 150, 10))
//!     .compute(&[Size::new(300, 200), Size::new(500, 1000)])
//!     .unwrap();
//!
//! let svg = render_grid_svg(&plan);
//! // svg is a complete SVG document string
//! assert!(svg.starts_with("<svg"));
//! ```

use alloc::format;
use alloc::string::String;

use crate::grid::GridPlan;
use crate::position::Quadrant;
use crate::viewport::Size;

/// Maximum pixel width of the drawn grid.
const MAX_PANEL_W: f64 = 480.0;
/// Maximum pixel height of the drawn grid.
const MAX_PANEL_H: f64 = 360.0;
/// Horizontal margin.
const MARGIN_X: f64 = 30.0;
/// Top margin, above the title.
const MARGIN_TOP: f64 = 20.0;
/// Height of the title text area.
const LABEL_H: f64 = 24.0;
/// Height reserved below the grid for per-image annotations.
const ANNOTATION_LINE_H: f64 = 16.0;

/// Render a complete SVG document showing `plan`.
pub fn render_grid_svg(plan: &GridPlan) -> String {
    let grid = plan.grid_size();
    let extent = plan.content_extent();
    // Draw whatever is larger: the cells, or images overhanging them.
    let outer = Size::new(grid.width.max(extent.width), grid.height.max(extent.height));
    let scale = scale_to_fit(outer);

    let panel_w = outer.width as f64 * scale;
    let panel_h = outer.height as f64 * scale;
    let total_w = panel_w + 2.0 * MARGIN_X;
    let total_h = MARGIN_TOP
        + LABEL_H
        + panel_h
        + ANNOTATION_LINE_H * (plan.placements.len() as f64 + 1.0)
        + MARGIN_TOP;

    let mut svg = String::with_capacity(4096);

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {:.1} {:.1}">"#,
        total_w as u32, total_h as u32, total_w, total_h
    ));
    svg.push('\n');

    // Style: light/dark mode via prefers-color-scheme
    svg.push_str(
        r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .label { font-size: 13px; font-weight: bold; fill: #333; }
  .annotation { font-size: 11px; fill: #666; }
  .canvas { fill: #f4f4f4; stroke: #999; stroke-width: 1; }
  .cell { fill: #e8e8e8; stroke: #999; stroke-width: 1; stroke-dasharray: 4,2; }
  .image { fill: #6ba3d6; fill-opacity: 0.85; stroke: #2c6faa; stroke-width: 1.5; }
  .index { font-size: 12px; font-weight: bold; fill: #fff; }
  @media (prefers-color-scheme: dark) {
    .label { fill: #e0e0e0; }
    .annotation { fill: #aaa; }
    .canvas { fill: #1f1f1f; stroke: #555; }
    .cell { fill: #2d2d2d; stroke: #555; }
    .image { fill: #3a72a4; stroke: #5a9fd4; }
  }
</style>
"##,
    );

    let vp = &plan.viewport;
    let title = format!(
        "Grid  {}×{} cells, gutter {}, {}",
        vp.width, vp.height, vp.gutter, plan.justification
    );
    svg.push_str(&format!(
        r#"<text x="{:.1}" y="{:.1}" class="label">{}</text>"#,
        MARGIN_X,
        MARGIN_TOP + 14.0,
        escape_xml(&title)
    ));
    svg.push('\n');

    let origin_x = MARGIN_X;
    let origin_y = MARGIN_TOP + LABEL_H;

    svg.push_str(&format!(
        r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="canvas"/>"#,
        origin_x, origin_y, panel_w, panel_h
    ));
    svg.push('\n');

    // Cells occupied by the plan
    for quadrant in Quadrant::ALL.iter().take(plan.placements.len()) {
        let o = quadrant.origin(vp);
        svg.push_str(&format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="cell"/>"#,
            origin_x + o.x as f64 * scale,
            origin_y + o.y as f64 * scale,
            vp.width as f64 * scale,
            vp.height as f64 * scale
        ));
        svg.push('\n');
    }

    // Placed images
    for (i, p) in plan.placements.iter().enumerate() {
        let x = origin_x + p.position.x as f64 * scale;
        let y = origin_y + p.position.y as f64 * scale;
        let w = p.resize_to.width as f64 * scale;
        let h = p.resize_to.height as f64 * scale;
        svg.push_str(&format!(
            r#"<rect x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{h:.1}" class="image" rx="1"/>"#
        ));
        svg.push('\n');
        svg.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" class="index" text-anchor="middle">{}</text>"#,
            x + w / 2.0,
            y + h / 2.0 + 4.0,
            p.source_index
        ));
        svg.push('\n');

        let note = format!(
            "#{} {}×{} → {}×{} @ ({}, {})",
            p.source_index,
            p.source.width,
            p.source.height,
            p.resize_to.width,
            p.resize_to.height,
            p.position.x,
            p.position.y
        );
        svg.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" class="annotation">{}</text>"#,
            origin_x,
            origin_y + panel_h + ANNOTATION_LINE_H * (i as f64 + 1.0),
            escape_xml(&note)
        ));
        svg.push('\n');
    }

    svg.push_str(&format!(
        r#"<text x="{:.1}" y="{:.1}" class="annotation">{}</text>"#,
        origin_x,
        origin_y + panel_h + ANNOTATION_LINE_H * (plan.placements.len() as f64 + 1.0),
        escape_xml(&format!("Canvas  {}×{}", outer.width, outer.height))
    ));
    svg.push('\n');

    svg.push_str("</svg>\n");
    svg
}

/// Uniform scale that fits `size` within MAX_PANEL_W × MAX_PANEL_H.
fn scale_to_fit(size: Size) -> f64 {
    let w = size.width as f64;
    let h = size.height as f64;
    if w == 0.0 || h == 0.0 {
        return 1.0;
    }
    (MAX_PANEL_W / w).min(MAX_PANEL_H / h)
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
