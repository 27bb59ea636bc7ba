//! Parameter Sets

use crate::common::*;
use crate::geometry::*;
use crate::spectrum::*;
use std::collections::HashMap;
use std::fmt;

mod value;

// Re-export
pub use value::*;

/// A hashmap of parameter set items stored by name.
pub type ParamSetMap<T> = HashMap<String, T>;

/// Stores a snapshot of attribute values of different types in hashmaps.
#[derive(Clone, Debug, Default)]
pub struct ParamSet {
    pub bools: ParamSetMap<bool>,
    pub ints: ParamSetMap<Int>,
    pub floats: ParamSetMap<Float>,
    pub vector3fs: ParamSetMap<Vector3f>,
    pub colors: ParamSetMap<Color>,
    pub strings: ParamSetMap<String>,
}

/// Define a macro that can be used to generate a function for adding/replacing
/// parameter set item.
macro_rules! paramset_add {
    ($func: ident, $t: ty, $paramset: ident) => {
        pub fn $func(&mut self, name: &str, value: $t) {
            self.$paramset.insert(String::from(name), value);
        }
    };
}

/// Define a macro that can be used to generate a function for removing
/// parameter set item.
macro_rules! paramset_erase {
    ($func: ident, $paramset: ident) => {
        pub fn $func(&mut self, name: &str) -> bool {
            self.$paramset.remove(name).is_some()
        }
    };
}

/// Define a macro that can be used to generate a function for finding
/// parameter set item or returning a default.
macro_rules! paramset_find_one {
    ($func: ident, $t: ty, $paramset: ident) => {
        pub fn $func(&self, name: &str, default: $t) -> $t {
            match self.$paramset.get(name) {
                Some(value) => value.clone(),
                None => default,
            }
        }
    };
}

/// Define a macro that can be used to print parameter set items.
macro_rules! display_param {
    ($params: expr, $param_type: literal, $formatter: expr) => {
        let mut names: Vec<&String> = $params.keys().collect();
        names.sort();
        for name in names {
            writeln!($formatter, "\"{} {}\" [{:?}]", $param_type, name, $params[name])?;
        }
    };
}

impl ParamSet {
    /// Returns a new `ParamSet`.
    pub fn new() -> Self {
        Self::default()
    }

    paramset_erase!(erase_bool, bools);
    paramset_find_one!(find_one_bool, bool, bools);
    paramset_add!(add_bool, bool, bools);

    paramset_erase!(erase_int, ints);
    paramset_add!(add_int, Int, ints);

    paramset_erase!(erase_float, floats);
    paramset_add!(add_float, Float, floats);

    paramset_erase!(erase_vector3f, vector3fs);
    paramset_find_one!(find_one_vector3f, Vector3f, vector3fs);
    paramset_add!(add_vector3f, Vector3f, vector3fs);

    paramset_erase!(erase_color, colors);
    paramset_find_one!(find_one_color, Color, colors);
    paramset_add!(add_color, Color, colors);

    paramset_erase!(erase_string, strings);
    paramset_find_one!(find_one_string, String, strings);
    paramset_add!(add_string, String, strings);

    /// Finds an integer. Float attributes are accepted and truncated since the
    /// host does not distinguish them consistently.
    ///
    /// * `name`    - Parameter name.
    /// * `default` - Value to return if the parameter is absent.
    pub fn find_one_int(&self, name: &str, default: Int) -> Int {
        match (self.ints.get(name), self.floats.get(name)) {
            (Some(i), _) => *i,
            (None, Some(f)) => *f as Int,
            (None, None) => default,
        }
    }

    /// Finds a float. Integer attributes are accepted.
    ///
    /// * `name`    - Parameter name.
    /// * `default` - Value to return if the parameter is absent.
    pub fn find_one_float(&self, name: &str, default: Float) -> Float {
        match (self.floats.get(name), self.ints.get(name)) {
            (Some(f), _) => *f,
            (None, Some(i)) => *i as Float,
            (None, None) => default,
        }
    }

    /// Stores a host attribute value in the map matching its type. Values
    /// without a parameter set representation are ignored.
    ///
    /// * `name`  - Parameter name.
    /// * `value` - The attribute value.
    pub fn add_attr(&mut self, name: &str, value: &AttrValue) {
        match value {
            AttrValue::Bool(v) => self.add_bool(name, *v),
            AttrValue::Int(v) => self.add_int(name, *v),
            AttrValue::Float(v) => self.add_float(name, *v),
            AttrValue::Float3(v) => self.add_vector3f(name, Vector3f::from(*v)),
            AttrValue::Color(v) => self.add_color(name, *v),
            AttrValue::String(v) => self.add_string(name, v.clone()),
            other => debug!("Ignoring parameter '{}' with value {}", name, other),
        }
    }

    /// Clear all parameter set items.
    pub fn clear(&mut self) {
        self.bools.clear();
        self.ints.clear();
        self.floats.clear();
        self.vector3fs.clear();
        self.colors.clear();
        self.strings.clear();
    }
}

impl fmt::Display for ParamSet {
    /// Formats the value using the given formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_param!(self.bools, "bool", f);
        display_param!(self.ints, "integer", f);
        display_param!(self.floats, "float", f);
        display_param!(self.vector3fs, "vector3", f);
        display_param!(self.colors, "color", f);
        display_param!(self.strings, "string", f);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_with_defaults() {
        let mut ps = ParamSet::new();
        ps.add_bool("useInfiniteDepth", true);
        ps.add_string("integrator", String::from("Path Tracer"));
        assert!(ps.find_one_bool("useInfiniteDepth", false));
        assert!(!ps.find_one_bool("missing", false));
        assert_eq!(ps.find_one_string("integrator", String::new()), "Path Tracer");
        assert_eq!(ps.find_one_int("missing", 7), 7);
    }

    #[test]
    fn ints_and_floats_are_interchangeable() {
        let mut ps = ParamSet::new();
        ps.add_float("maxDepth", 5.0);
        ps.add_int("sampleCount", 16);
        assert_eq!(ps.find_one_int("maxDepth", -1), 5);
        assert_eq!(ps.find_one_float("sampleCount", 0.0), 16.0);
    }

    #[test]
    fn attr_values_go_to_matching_maps() {
        let mut ps = ParamSet::new();
        ps.add_attr("a", &AttrValue::from(0.5));
        ps.add_attr("b", &AttrValue::from(Color::WHITE));
        ps.add_attr("c", &AttrValue::FloatArray(vec![1.0]));
        assert_eq!(ps.floats.len(), 1);
        assert_eq!(ps.colors.len(), 1);
        assert!(ps.strings.is_empty());
        assert!(ps.erase_float("a"));
        assert!(!ps.erase_float("a"));
    }
}
