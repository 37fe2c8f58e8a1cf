//! Inspect report types and terminal formatting.
//!
//! This module provides structured inspection results that are displayed
//! as boxed sections in the terminal.

use std::fmt;

use crate::ir::LayerKind;

/// Inner width of every boxed section, in characters.
const BOX_WIDTH: usize = 59;

/// The result of inspecting a screen.
#[derive(Clone, Debug)]
pub struct InspectReport {
    /// Canvas metadata and totals.
    pub canvas: CanvasSection,
    /// Number of top-level layers per variant, in variant order.
    pub kinds: Vec<KindCount>,
    /// One row per top-level layer, in final order.
    pub anchors: Vec<AnchorRow>,
    /// Display options for formatting.
    pub(crate) bar_width: usize,
}

/// Canvas summary.
#[derive(Clone, Debug, Default)]
pub struct CanvasSection {
    pub page: String,
    pub artboard: String,
    pub width: u32,
    pub height: u32,
    /// Background color as `#RRGGBB`.
    pub background: String,
    /// Number of top-level layers.
    pub layers: usize,
    /// Number of elements at any depth, top-level layers included.
    pub elements: usize,
}

/// A layer variant with the number of top-level layers of that variant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KindCount {
    pub kind: LayerKind,
    pub count: usize,
}

/// The anchors of one top-level layer.
#[derive(Clone, Debug, PartialEq)]
pub struct AnchorRow {
    pub id: String,
    pub kind: LayerKind,
    /// `None` when anchored to the container edge.
    pub vertical_ref: Option<String>,
    pub vertical_distance: f64,
    /// `None` when anchored to the container edge.
    pub horizontal_ref: Option<String>,
    pub horizontal_distance: f64,
}

impl fmt::Display for InspectReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Header
        writeln!(f)?;
        writeln!(f, "╭─────────────────────────────────────────────────────────────╮")?;
        writeln!(f, "│              🎨  Screen Inspection Report                   │")?;
        writeln!(f, "╰─────────────────────────────────────────────────────────────╯")?;
        writeln!(f)?;

        self.fmt_canvas(f)?;
        writeln!(f)?;

        self.fmt_kinds(f)?;
        writeln!(f)?;

        self.fmt_anchors(f)?;

        Ok(())
    }
}

impl InspectReport {
    fn fmt_canvas(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.canvas;

        open_box(f, "Canvas")?;
        blank_line(f)?;
        line(f, &format!("  Page:          {}", truncate(&c.page, 40)))?;
        line(f, &format!("  Artboard:      {}", truncate(&c.artboard, 40)))?;
        line(f, &format!("  Size (px):     {} x {}", c.width, c.height))?;
        line(f, &format!("  Background:    {}", c.background))?;
        blank_line(f)?;
        line(f, &format!("  Layers:        {:>8}", format_number(c.layers)))?;
        line(f, &format!("  Elements:      {:>8}", format_number(c.elements)))?;
        blank_line(f)?;
        close_box(f)
    }

    fn fmt_kinds(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        open_box(f, "Layer Kinds")?;
        blank_line(f)?;

        let total: usize = self.kinds.iter().map(|k| k.count).sum();
        if total == 0 {
            line(f, "  No layers found.")?;
        } else {
            let max_count = self.kinds.iter().map(|k| k.count).max().unwrap_or(1);
            for entry in self.kinds.iter().filter(|k| k.count > 0) {
                let bar = render_bar(entry.count, max_count, self.bar_width);
                line(
                    f,
                    &format!(
                        "  {:<22} {:>5} {:>6}  {}",
                        entry.kind.to_string(),
                        format_number(entry.count),
                        fmt_percent(entry.count, total),
                        bar
                    ),
                )?;
            }
        }

        blank_line(f)?;
        close_box(f)
    }

    fn fmt_anchors(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        open_box(f, "Anchors")?;
        blank_line(f)?;

        if self.anchors.is_empty() {
            line(f, "  No layers to anchor.")?;
        } else {
            line(f, &format!("  {:<17} {:<18} {:<18}", "layer", "vertical", "horizontal"))?;
            for row in &self.anchors {
                line(
                    f,
                    &format!(
                        "  {:<17} {:<18} {:<18}",
                        truncate(&row.id, 17),
                        fmt_anchor(row.vertical_ref.as_deref(), row.vertical_distance),
                        fmt_anchor(row.horizontal_ref.as_deref(), row.horizontal_distance),
                    ),
                )?;
            }
        }

        blank_line(f)?;
        close_box(f)
    }
}

fn open_box(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    let used = title.chars().count() + 3;
    writeln!(
        f,
        "┌─ {} {}┐",
        title,
        "─".repeat(BOX_WIDTH.saturating_sub(used))
    )
}

fn close_box(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "└{}┘", "─".repeat(BOX_WIDTH))
}

fn blank_line(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    line(f, "")
}

/// Writes `content` inside the box, padded to the box width.
fn line(f: &mut fmt::Formatter<'_>, content: &str) -> fmt::Result {
    let padding = BOX_WIDTH.saturating_sub(content.chars().count() + 1);
    writeln!(f, "│ {}{}│", content, " ".repeat(padding))
}

/// `ref +0.1234`, or `edge +0.1234` for container-edge anchors.
fn fmt_anchor(reference: Option<&str>, distance: f64) -> String {
    let target = reference.map_or_else(|| "edge".to_string(), |r| truncate(r, 10));
    format!("{} {:.4}", target, distance)
}

/// Format a number with thousands separators.
fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a percentage, handling zero denominators.
fn fmt_percent(numerator: usize, denominator: usize) -> String {
    if denominator == 0 {
        "n/a".to_string()
    } else {
        format!("{:.1}%", (numerator as f64 / denominator as f64) * 100.0)
    }
}

/// Render a horizontal bar using Unicode block characters.
fn render_bar(count: usize, max_count: usize, width: usize) -> String {
    if max_count == 0 || width == 0 {
        return String::new();
    }

    let filled = ((count * width) / max_count).min(width);
    "█".repeat(filled) + &"░".repeat(width - filled)
}

/// Truncate to `max_len` characters, marking the cut with an ellipsis.
fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}
