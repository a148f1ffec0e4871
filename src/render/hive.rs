//! Built-in hive templates
//!
//! Both lay the center letter in the middle and the six outside letters around
//! it clockwise from the top, in the order the puzzle lists them.

use super::{RenderedImage, Renderer};
use crate::error::Result;
use crate::puzzle::PuzzleRecord;
use std::f64::consts::PI;

/// Vertex list for a flat-topped hexagon centered on `(cx, cy)`
///
/// Points run clockwise from the leftmost vertex.
fn hexagon(cx: f64, cy: f64, radius: f64) -> [(f64, f64); 6] {
    let width = radius * 2.0;
    let height = width * 3f64.sqrt() / 2.0;
    [
        (cx - width / 2.0, cy),
        (cx - width / 4.0, cy - height / 2.0),
        (cx + width / 4.0, cy - height / 2.0),
        (cx + width / 2.0, cy),
        (cx + width / 4.0, cy + height / 2.0),
        (cx - width / 4.0, cy + height / 2.0),
    ]
}

/// Honeycomb of seven hexagons as SVG
#[derive(Debug, Clone)]
pub struct SvgHiveRenderer {
    pub radius: f64,
    pub center_fill: String,
    pub outside_fill: String,
}

impl Default for SvgHiveRenderer {
    fn default() -> Self {
        Self {
            radius: 40.0,
            center_fill: "#f7da21".to_string(),
            outside_fill: "#e6e6e6".to_string(),
        }
    }
}

impl SvgHiveRenderer {
    fn cell(&self, out: &mut String, cx: f64, cy: f64, letter: char, fill: &str) {
        let points: Vec<String> = hexagon(cx, cy, self.radius * 0.95)
            .iter()
            .map(|(x, y)| format!("{x:.1},{y:.1}"))
            .collect();
        out.push_str(&format!(
            "  <polygon points=\"{}\" fill=\"{fill}\"/>\n",
            points.join(" ")
        ));
        out.push_str(&format!(
            "  <text x=\"{cx:.1}\" y=\"{cy:.1}\" font-size=\"{:.0}\" font-family=\"sans-serif\" font-weight=\"bold\" text-anchor=\"middle\" dominant-baseline=\"central\">{letter}</text>\n",
            self.radius * 0.8
        ));
    }
}

impl Renderer for SvgHiveRenderer {
    fn name(&self) -> &str {
        "hive-svg"
    }

    fn render(&self, puzzle: &PuzzleRecord) -> Result<RenderedImage> {
        let letters = puzzle.letters();
        let size = self.radius * 6.0;
        let (cx, cy) = (size / 2.0, size / 2.0);
        let step = self.radius * 3f64.sqrt();

        let mut out = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{size:.0}\" height=\"{size:.0}\" viewBox=\"0 0 {size:.0} {size:.0}\">\n"
        );
        self.cell(&mut out, cx, cy, letters.center(), &self.center_fill);
        for (i, &letter) in letters.outside().iter().enumerate() {
            // Neighbours of a flat-topped hexagon sit every 60 degrees, starting straight up
            let angle = -PI / 2.0 + PI / 3.0 * i as f64;
            let (x, y) = (cx + step * angle.cos(), cy + step * angle.sin());
            self.cell(&mut out, x, y, letter, &self.outside_fill);
        }
        out.push_str("</svg>\n");

        Ok(RenderedImage::new(out.into_bytes(), "svg"))
    }
}

/// Plain-text hive for terminals and logs
#[derive(Debug, Clone, Copy, Default)]
pub struct TextHiveRenderer;

impl TextHiveRenderer {
    /// The hive as three lines of text
    #[must_use]
    pub fn hive_lines(puzzle: &PuzzleRecord) -> [String; 3] {
        let letters = puzzle.letters();
        let o = letters.outside();
        [
            format!("    {}   {}", o[5], o[0]),
            format!("  {}  [{}]  {}", o[4], letters.center(), o[1]),
            format!("    {}   {}", o[3], o[2]),
        ]
    }
}

impl Renderer for TextHiveRenderer {
    fn name(&self) -> &str {
        "hive-text"
    }

    fn render(&self, puzzle: &PuzzleRecord) -> Result<RenderedImage> {
        let mut out = Self::hive_lines(puzzle).join("\n");
        out.push('\n');
        Ok(RenderedImage::new(out.into_bytes(), "txt"))
    }
}
