//! Scene Description Elements
//!
//! An in-memory tree of `{tag, attributes, children}` nodes that mirrors the
//! renderer's XML grammar, plus its serializer.

mod writer;

use crate::common::*;
use crate::geometry::*;
use crate::spectrum::*;

// Re-export
pub use writer::*;

/// Colour space used when writing constant colours.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ColorSpace {
    /// Linear RGB, written as `<rgb>`.
    Linear,

    /// sRGB, written as `<srgb>`.
    Srgb,
}

/// A node of the scene description. Attributes keep insertion order so the
/// serialized output is stable.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Element {
    /// Element tag (`bsdf`, `float`, `scene`, ...).
    pub tag: String,

    /// Attributes in insertion order.
    attributes: Vec<(String, String)>,

    /// Child elements.
    pub children: Vec<Element>,
}

impl Element {
    /// Creates an element without attributes or children.
    ///
    /// * `tag` - Element tag.
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attributes: vec![],
            children: vec![],
        }
    }

    /// Creates a plugin element such as `<bsdf type="diffuse" id="...">`.
    ///
    /// * `category`    - Element category (`bsdf`, `emitter`, `texture`, ...).
    /// * `plugin_type` - Plugin type.
    /// * `id`          - Optional id used by later references.
    pub fn plugin(category: &str, plugin_type: &str, id: Option<&str>) -> Self {
        let mut e = Self::new(category);
        e.set_attr("type", plugin_type);
        if let Some(id) = id {
            e.set_attr("id", id);
        }
        e
    }

    /// Returns the value of an attribute.
    ///
    /// * `key` - Attribute name.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns all attributes in insertion order.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Adds an attribute or replaces its value in place.
    ///
    /// * `key`   - Attribute name.
    /// * `value` - Attribute value.
    pub fn set_attr(&mut self, key: &str, value: &str) {
        match self.attributes.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value.to_string(),
            None => self.attributes.push((key.to_string(), value.to_string())),
        }
    }

    /// Builder form of `set_attr()`.
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.set_attr(key, value);
        self
    }

    /// Removes an attribute and returns its value.
    ///
    /// * `key` - Attribute name.
    pub fn remove_attr(&mut self, key: &str) -> Option<String> {
        let i = self.attributes.iter().position(|(k, _)| k == key)?;
        Some(self.attributes.remove(i).1)
    }

    /// Returns the `type` attribute.
    pub fn plugin_type(&self) -> Option<&str> {
        self.attr("type")
    }

    /// Returns the `id` attribute.
    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    /// Returns the `name` attribute.
    pub fn name(&self) -> Option<&str> {
        self.attr("name")
    }

    /// Removes the `id` of this element and of every descendant so the
    /// subtree can be inlined anonymously.
    pub fn strip_ids(&mut self) {
        self.remove_attr("id");
        for child in self.children.iter_mut() {
            child.strip_ids();
        }
    }

    /// Appends a child.
    ///
    /// * `child` - The child element.
    pub fn add_child(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Builder form of `add_child()`.
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Removes all children with a given tag and `name` attribute.
    ///
    /// * `tag`  - Element tag.
    /// * `name` - Value of the `name` attribute.
    pub fn remove_children_named(&mut self, tag: &str, name: &str) {
        self.children
            .retain(|c| !(c.tag == tag && c.name() == Some(name)));
    }

    /// Returns the first child with a given tag and `name` attribute.
    ///
    /// * `tag`  - Element tag.
    /// * `name` - Value of the `name` attribute.
    pub fn child_named(&self, tag: &str, name: &str) -> Option<&Element> {
        self.children
            .iter()
            .find(|c| c.tag == tag && c.name() == Some(name))
    }

    /// Returns the `value` of the first child with a given `name` attribute.
    ///
    /// * `name` - Value of the `name` attribute.
    pub fn value_of(&self, name: &str) -> Option<&str> {
        self.children
            .iter()
            .find(|c| c.name() == Some(name))
            .and_then(|c| c.attr("value"))
    }

    /// Returns all children with a given tag.
    ///
    /// * `tag` - Element tag.
    pub fn children_tagged<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |c| c.tag == tag)
    }

    /// Returns this element and all its descendants in document order.
    pub fn descendants(&self) -> Vec<&Element> {
        let mut out = vec![self];
        for child in self.children.iter() {
            out.extend(child.descendants());
        }
        out
    }

    /* Typed value elements */

    /// Creates a `<boolean>` element.
    pub fn boolean(name: &str, value: bool) -> Self {
        Self::new("boolean")
            .with_attr("name", name)
            .with_attr("value", format_bool(value))
    }

    /// Creates an `<integer>` element.
    pub fn integer(name: &str, value: Int) -> Self {
        Self::new("integer")
            .with_attr("name", name)
            .with_attr("value", &value.to_string())
    }

    /// Creates a `<float>` element.
    pub fn float(name: &str, value: Float) -> Self {
        Self::new("float")
            .with_attr("name", name)
            .with_attr("value", &format_float(value))
    }

    /// Creates a `<string>` element.
    pub fn string(name: &str, value: &str) -> Self {
        Self::new("string")
            .with_attr("name", name)
            .with_attr("value", value)
    }

    /// Creates an `<rgb>` or `<srgb>` element.
    ///
    /// * `name`  - Parameter name.
    /// * `value` - The colour.
    /// * `space` - Colour space.
    pub fn color(name: &str, value: &Color, space: ColorSpace) -> Self {
        let tag = match space {
            ColorSpace::Linear => "rgb",
            ColorSpace::Srgb => "srgb",
        };
        Self::new(tag)
            .with_attr("name", name)
            .with_attr("value", &value.to_string())
    }

    /// Creates an `<rgb>` element.
    pub fn rgb(name: &str, value: &Color) -> Self {
        Self::color(name, value, ColorSpace::Linear)
    }

    /// Creates a constant `<spectrum>` element.
    pub fn spectrum(name: &str, value: Float) -> Self {
        Self::new("spectrum")
            .with_attr("name", name)
            .with_attr("value", &format_float(value))
    }

    /// Creates a `<vector>` element.
    pub fn vector(name: &str, v: &Vector3f) -> Self {
        Self::new("vector")
            .with_attr("name", name)
            .with_attr("x", &format_float(v.x))
            .with_attr("y", &format_float(v.y))
            .with_attr("z", &format_float(v.z))
    }

    /// Creates a `<point>` element.
    pub fn point(name: &str, p: &Point3f) -> Self {
        Self::new("point")
            .with_attr("name", name)
            .with_attr("x", &format_float(p.x))
            .with_attr("y", &format_float(p.y))
            .with_attr("z", &format_float(p.z))
    }

    /// Creates a bitmap `<texture>` element, optionally wrapped in a `scale`
    /// texture.
    ///
    /// * `name`  - Parameter name.
    /// * `path`  - Image file path.
    /// * `scale` - Optional scale factor.
    pub fn texture(name: &str, path: &str, scale: Option<Float>) -> Self {
        let bitmap =
            Self::plugin("texture", "bitmap", None).with_child(Self::string("filename", path));
        match scale {
            Some(s) => Self::plugin("texture", "scale", None)
                .with_attr("name", name)
                .with_child(Self::float("scale", s))
                .with_child(bitmap),
            None => bitmap.with_attr("name", name),
        }
    }

    /// Creates a grid `<volume>` element referencing a volume file.
    ///
    /// * `name` - Parameter name.
    /// * `path` - Volume file path.
    pub fn volume(name: &str, path: &str) -> Self {
        Self::plugin("volume", "gridvolume", None)
            .with_attr("name", name)
            .with_child(Self::string("filename", path))
    }

    /// Creates a `<ref>` element.
    ///
    /// * `name` - Optional parameter name.
    /// * `id`   - Referenced id.
    pub fn reference(name: Option<&str>, id: &str) -> Self {
        let mut e = Self::new("ref");
        if let Some(name) = name {
            e.set_attr("name", name);
        }
        e.with_attr("id", id)
    }
}
