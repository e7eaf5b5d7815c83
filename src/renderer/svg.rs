//! SVG generation for a single tile

use crate::style::{NoiseFilter, TileStyle};

/// Id of the grain filter referenced by the background
const NOISE_FILTER_ID: &str = "noise";

/// Build a tile document incrementally
pub struct TileBuilder {
    width: u32,
    height: u32,
    defs: Vec<String>,
    elements: Vec<String>,
}

impl TileBuilder {
    /// Create a builder for a canvas of the given size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            defs: vec![],
            elements: vec![],
        }
    }

    /// Add the grain filter definition
    pub fn add_noise_filter(&mut self, noise: &NoiseFilter) {
        self.defs.push(format!(
            r#"<filter id="{id}" x="0" y="0" width="100%" height="100%">
      <feTurbulence type="fractalNoise" baseFrequency="{}" numOctaves="{}" result="noise"/>
      <feColorMatrix type="saturate" values="0" in="noise" result="mono"/>
      <feComponentTransfer in="mono" result="noiseAlpha">
        <feFuncA type="table" tableValues="0 {}"/>
      </feComponentTransfer>
      <feBlend in="SourceGraphic" in2="noiseAlpha" mode="overlay"/>
    </filter>"#,
            noise.base_frequency,
            noise.num_octaves,
            noise.max_alpha,
            id = NOISE_FILTER_ID,
        ));
    }

    /// Add a full-canvas background with the grain filter applied
    pub fn add_background(&mut self, fill: &str) {
        self.elements.push(format!(
            r#"  <rect width="100%" height="100%" fill="{}" filter="url(#{})"/>"#,
            escape_attr(fill),
            NOISE_FILTER_ID
        ));
    }

    /// Add the centered label, stretched to `text_length`
    pub fn add_label(&mut self, label: &str, style: &TileStyle) {
        // One attribute per line keeps diffs of generated tiles readable
        self.elements.push(format!(
            r#"  <text
    x="50%"
    y="50%"
    fill="{}"
    font-family="{}"
    font-size="{}"
    font-weight="{}"
    text-anchor="middle"
    dominant-baseline="middle"
    lengthAdjust="spacingAndGlyphs"
    textLength="{}"
  >{}</text>"#,
            escape_attr(&style.text_color),
            escape_attr(&style.font_family),
            style.font_size,
            style.font_weight,
            style.text_length(),
            escape_text(label)
        ));
    }

    /// Build the final SVG string
    pub fn build(self) -> String {
        let mut svg = String::new();

        svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        svg.push('\n');
        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height
        ));
        svg.push('\n');

        if !self.defs.is_empty() {
            svg.push_str("  <defs>\n");
            for def in &self.defs {
                svg.push_str("    ");
                svg.push_str(def);
                svg.push('\n');
            }
            svg.push_str("  </defs>\n");
        }

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push('\n');
        }

        svg.push_str("</svg>\n");
        svg
    }
}

/// Render one tile for `label` using `style`
pub fn render_tile(label: &str, style: &TileStyle) -> String {
    let mut builder = TileBuilder::new(style.width, style.height);
    builder.add_noise_filter(&style.noise);
    builder.add_background(&style.background);
    builder.add_label(label, style);
    builder.build()
}

/// Escape character data
fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape a double-quoted attribute value
fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("a < b"), "a &lt; b");
        assert_eq!(escape_text("a & b"), "a &amp; b");
        assert_eq!(escape_text("<tag>"), "&lt;tag&gt;");
        assert_eq!(escape_text("'quoted'"), "'quoted'");
    }

    #[test]
    fn test_escape_attr_keeps_single_quotes() {
        assert_eq!(
            escape_attr("'Montserrat', 'Arial', sans-serif"),
            "'Montserrat', 'Arial', sans-serif"
        );
        assert_eq!(escape_attr(r#"a"b"#), "a&quot;b");
    }

    #[test]
    fn test_render_contains_constants() {
        let svg = render_tile("АКТИВНОСТЬ", &TileStyle::default());
        assert!(svg.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(svg.contains(r#"width="578""#));
        assert!(svg.contains(r#"height="331""#));
        assert!(svg.contains(r#"viewBox="0 0 578 331""#));
        assert!(svg.contains(r##"fill="#1f1f1f" filter="url(#noise)""##));
        assert!(svg.contains(r##"fill="#e8d9f1""##));
        assert!(svg.contains(r#"font-size="88""#));
        assert!(svg.contains(r#"font-weight="700""#));
        assert!(svg.contains(r#"textLength="473.96""#));
        assert!(svg.contains(">АКТИВНОСТЬ</text>"));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn test_render_escapes_label() {
        let svg = render_tile("R&D <beta>", &TileStyle::default());
        assert!(svg.contains(">R&amp;D &lt;beta&gt;</text>"));
    }

    #[test]
    fn test_render_without_defs() {
        let mut builder = TileBuilder::new(10, 20);
        builder.add_background("red");
        let svg = builder.build();
        assert!(!svg.contains("<defs>"));
        assert_eq!(
            svg,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <svg xmlns=\"http://www.w3.org/2000/svg\" width=\"10\" height=\"20\" viewBox=\"0 0 10 20\">\n  \
             <rect width=\"100%\" height=\"100%\" fill=\"red\" filter=\"url(#noise)\"/>\n\
             </svg>\n"
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let style = TileStyle::default();
        assert_eq!(render_tile("СОСТАВ", &style), render_tile("СОСТАВ", &style));
    }
}
