#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Routes library logs through the test harness; safe to call repeatedly.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Path of a file under `tests/fixtures`.
pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Builds the SVG a design tool exports for a single artboard.
pub struct CanvasBuilder {
    width: u32,
    height: u32,
    background: Option<String>,
    layers: Vec<String>,
}

impl CanvasBuilder {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            background: Some("#FFFFFF".to_string()),
            layers: Vec::new(),
        }
    }

    pub fn background(mut self, hex: &str) -> Self {
        self.background = Some(hex.to_string());
        self
    }

    pub fn without_background(mut self) -> Self {
        self.background = None;
        self
    }

    pub fn layer(mut self, markup: String) -> Self {
        self.layers.push(markup);
        self
    }

    pub fn build(&self) -> String {
        let style = self
            .background
            .as_ref()
            .map(|hex| format!(r#" style="background: {hex};""#))
            .unwrap_or_default();
        format!(
            concat!(
                r#"<?xml version="1.0" encoding="UTF-8"?>"#,
                "\n",
                r#"<svg width="{w}px" height="{h}px" viewBox="0 0 {w} {h}"{style} xmlns="http://www.w3.org/2000/svg">"#,
                "\n<title>Test</title>\n",
                r#"<g id="Page-1" fill-rule="evenodd"><g id="Artboard">"#,
                "\n{layers}\n</g></g></svg>\n"
            ),
            w = self.width,
            h = self.height,
            style = style,
            layers = self.layers.join("\n"),
        )
    }
}

fn geometry(x: f64, y: f64, w: f64, h: f64) -> String {
    format!(r#"x="{x}" y="{y}" width="{w}" height="{h}""#)
}

pub fn rect(id: &str, x: f64, y: f64, w: f64, h: f64) -> String {
    format!(r#"<rect id="{id}" {}></rect>"#, geometry(x, y, w, h))
}

pub fn text(id: &str, x: f64, y: f64, w: f64, h: f64, content: &str) -> String {
    format!(
        r#"<text id="{id}" {}><tspan>{content}</tspan></text>"#,
        geometry(x, y, w, h)
    )
}

/// A `<g>` layer, with a `type` attribute when `kind` is given.
pub fn group(
    id: &str,
    kind: Option<&str>,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    children: &[String],
) -> String {
    let kind = kind
        .map(|kind| format!(r#" type="{kind}""#))
        .unwrap_or_default();
    format!(
        r#"<g id="{id}"{kind} {}>{}</g>"#,
        geometry(x, y, w, h),
        children.join("")
    )
}

/// Writes `<dir>/<name>.svg` and, if given, `<dir>/<name>.json`.
pub fn write_artboard(dir: &Path, name: &str, svg: &str, overrides: Option<&str>) -> PathBuf {
    let svg_path = dir.join(format!("{name}.svg"));
    fs::write(&svg_path, svg).expect("write svg");
    if let Some(json) = overrides {
        fs::write(dir.join(format!("{name}.json")), json).expect("write overrides");
    }
    svg_path
}
