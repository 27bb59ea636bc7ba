//! XML Serializer

use super::Element;
use crate::common::SCENE_VERSION;
use std::fmt::Write;

/// XML declaration written at the top of every scene file.
pub const XML_HEADER: &str = "<?xml version='1.0' encoding='utf-8'?>";

/// Escapes a value for use inside a double-quoted attribute.
///
/// * `s` - The value.
pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

impl Element {
    /// Creates the root `<scene>` element.
    pub fn scene() -> Self {
        Self::new("scene").with_attr("version", SCENE_VERSION)
    }

    /// Writes this element and its children indented by `depth` tabs.
    ///
    /// * `out`   - Output buffer.
    /// * `depth` - Indentation level.
    pub fn write_xml(&self, out: &mut String, depth: usize) {
        let indent = "\t".repeat(depth);
        let _ = write!(out, "{indent}<{}", self.tag);
        for (k, v) in self.attributes() {
            let _ = write!(out, " {}=\"{}\"", k, escape_attr(v));
        }

        if self.children.is_empty() {
            out.push_str("/>\n");
            return;
        }

        out.push_str(">\n");
        for child in self.children.iter() {
            child.write_xml(out, depth + 1);
        }
        let _ = writeln!(out, "{indent}</{}>", self.tag);
    }

    /// Returns the complete UTF-8 document for a root element. Top-level
    /// children are followed by a blank line.
    pub fn to_document(&self) -> String {
        let mut out = String::new();
        out.push_str(XML_HEADER);
        out.push_str("\n\n");

        let _ = write!(out, "<{}", self.tag);
        for (k, v) in self.attributes() {
            let _ = write!(out, " {}=\"{}\"", k, escape_attr(v));
        }
        if self.children.is_empty() {
            out.push_str("/>\n");
            return out;
        }
        out.push_str(">\n");
        for child in self.children.iter() {
            child.write_xml(&mut out, 1);
            out.push('\n');
        }
        let _ = writeln!(out, "</{}>", self.tag);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_elements_self_close() {
        let mut out = String::new();
        Element::integer("maxDepth", 5).write_xml(&mut out, 0);
        assert_eq!(out, "<integer name=\"maxDepth\" value=\"5\"/>\n");
    }

    #[test]
    fn nested_elements_are_indented() {
        let mut out = String::new();
        Element::plugin("integrator", "path", None)
            .with_child(Element::integer("maxDepth", 5))
            .write_xml(&mut out, 0);
        assert_eq!(
            out,
            "<integrator type=\"path\">\n\t<integer name=\"maxDepth\" value=\"5\"/>\n</integrator>\n"
        );
    }

    #[test]
    fn document_has_header_and_blank_lines() {
        let doc = Element::scene()
            .with_child(Element::plugin("integrator", "path", None))
            .with_child(Element::plugin("sensor", "perspective", None))
            .to_document();
        assert_eq!(
            doc,
            "<?xml version='1.0' encoding='utf-8'?>\n\n<scene version=\"0.5.0\">\n\
             \t<integrator type=\"path\"/>\n\n\
             \t<sensor type=\"perspective\"/>\n\n\
             </scene>\n"
        );
    }

    #[test]
    fn attribute_values_are_escaped() {
        assert_eq!(escape_attr("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
    }
}
