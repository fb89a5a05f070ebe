//! Named view guide storage and `sodipodi:guide` serialization.
//!
//! Guide positions use the bottom-left origin of the named view: a vertical
//! guide at `x` is written as `position="x,0" orientation="1,0"`, a
//! horizontal guide at `y` as `position="0,y" orientation="0,1"`.

use gridguide_core::{CanvasExtent, ExportError, GuidePosition, Orientation};

use crate::sink::GuideSink;

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const SODIPODI_NS: &str = "http://sodipodi.sourceforge.net/DTD/sodipodi-0.dtd";

/// In-memory named view holding guides in creation order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NamedView {
    guides: Vec<GuidePosition>,
}

impl NamedView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from guides already present in a document.
    pub fn with_guides(guides: impl IntoIterator<Item = GuidePosition>) -> Self {
        Self {
            guides: guides.into_iter().collect(),
        }
    }

    pub fn guides(&self) -> &[GuidePosition] {
        &self.guides
    }

    pub fn len(&self) -> usize {
        self.guides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guides.is_empty()
    }

    /// The `sodipodi:guide` elements, one per line.
    pub fn guide_elements(&self) -> String {
        let mut out = String::new();
        for guide in &self.guides {
            write_guide(&mut out, guide);
        }
        out
    }

    /// A standalone SVG document sized to the canvas, carrying the guides
    /// in its named view.
    pub fn to_svg(&self, canvas: CanvasExtent) -> String {
        let mut svg = String::new();
        svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        svg.push_str(&format!(
            r#"<svg xmlns="{svg_ns}" xmlns:sodipodi="{sodipodi_ns}" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            svg_ns = SVG_NS,
            sodipodi_ns = SODIPODI_NS,
            w = canvas.width,
            h = canvas.height,
        ));
        svg.push('\n');
        if self.guides.is_empty() {
            svg.push_str("  <sodipodi:namedview id=\"namedview\"/>\n");
        } else {
            svg.push_str("  <sodipodi:namedview id=\"namedview\">\n");
            for guide in &self.guides {
                svg.push_str("    ");
                write_guide(&mut svg, guide);
            }
            svg.push_str("  </sodipodi:namedview>\n");
        }
        svg.push_str("</svg>\n");
        svg
    }
}

impl GuideSink for NamedView {
    fn delete_guides(&mut self, orientation: Orientation) -> Result<usize, ExportError> {
        let before = self.guides.len();
        self.guides.retain(|g| g.orientation != orientation);
        Ok(before - self.guides.len())
    }

    fn add_guide(&mut self, guide: GuidePosition) -> Result<(), ExportError> {
        self.guides.push(guide);
        Ok(())
    }
}

fn write_guide(out: &mut String, guide: &GuidePosition) {
    let c = guide.coordinate;
    out.push_str(&match guide.orientation {
        Orientation::Vertical => format!(r#"<sodipodi:guide position="{c},0" orientation="1,0"/>"#),
        Orientation::Horizontal => format!(r#"<sodipodi:guide position="0,{c}" orientation="0,1"/>"#),
    });
    out.push('\n');
}
