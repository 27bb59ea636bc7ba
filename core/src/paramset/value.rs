//! Attribute Values

use crate::common::*;
use crate::geometry::*;
use crate::spectrum::*;
use std::fmt;

/// A value read from a host attribute.
#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    Bool(bool),
    Int(Int),
    Float(Float),
    Float2([Float; 2]),
    Float3([Float; 3]),
    Color(Color),
    String(String),
    Matrix(Matrix4x4),
    FloatArray(Vec<Float>),
    IntArray(Vec<Int>),
}

impl AttrValue {
    /// Returns the value as a boolean. Numbers are true when non-zero.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Int(i) => Some(*i != 0),
            Self::Float(f) => Some(*f != 0.0),
            _ => None,
        }
    }

    /// Returns the value as an integer. Floats are truncated.
    pub fn as_int(&self) -> Option<Int> {
        match self {
            Self::Int(i) => Some(*i),
            Self::Float(f) => Some(*f as Int),
            Self::Bool(b) => Some(*b as Int),
            _ => None,
        }
    }

    /// Returns the value as a float.
    pub fn as_float(&self) -> Option<Float> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Int(i) => Some(*i as Float),
            Self::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            _ => None,
        }
    }

    /// Returns the value as a string. Enumerations are stored by the host as
    /// their UI label so they read as strings too.
    pub fn as_string(&self) -> Option<String> {
        match self {
            Self::String(s) => Some(s.clone()),
            _ => None,
        }
    }

    /// Returns the value as a colour. A float is promoted to a grey colour.
    pub fn as_color(&self) -> Option<Color> {
        match self {
            Self::Color(c) => Some(*c),
            Self::Float3(v) => Some(Color::from(*v)),
            Self::Float(f) => Some(Color::grey(*f)),
            _ => None,
        }
    }

    /// Returns the value as a 3-D vector.
    pub fn as_vector3f(&self) -> Option<Vector3f> {
        match self {
            Self::Float3(v) => Some(Vector3f::from(*v)),
            Self::Color(c) => Some(Vector3f::new(c.r, c.g, c.b)),
            _ => None,
        }
    }

    /// Returns the value as a 2-D pair.
    pub fn as_float2(&self) -> Option<[Float; 2]> {
        match self {
            Self::Float2(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value as a matrix.
    pub fn as_matrix(&self) -> Option<Matrix4x4> {
        match self {
            Self::Matrix(m) => Some(*m),
            _ => None,
        }
    }

    /// Returns the value as a list of floats.
    pub fn as_floats(&self) -> Option<Vec<Float>> {
        match self {
            Self::FloatArray(v) => Some(v.clone()),
            Self::IntArray(v) => Some(v.iter().map(|i| *i as Float).collect()),
            _ => None,
        }
    }

    /// Returns the value as a list of integers.
    pub fn as_ints(&self) -> Option<Vec<Int>> {
        match self {
            Self::IntArray(v) => Some(v.clone()),
            _ => None,
        }
    }
}

impl From<bool> for AttrValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<Int> for AttrValue {
    fn from(v: Int) -> Self {
        Self::Int(v)
    }
}

impl From<f32> for AttrValue {
    fn from(v: f32) -> Self {
        Self::Float(v as Float)
    }
}

impl From<f64> for AttrValue {
    fn from(v: f64) -> Self {
        Self::Float(v as Float)
    }
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Color> for AttrValue {
    fn from(v: Color) -> Self {
        Self::Color(v)
    }
}

impl From<Vector3f> for AttrValue {
    fn from(v: Vector3f) -> Self {
        Self::Float3([v.x, v.y, v.z])
    }
}

impl From<Point3f> for AttrValue {
    fn from(p: Point3f) -> Self {
        Self::Float3([p.x, p.y, p.z])
    }
}

impl From<Matrix4x4> for AttrValue {
    fn from(m: Matrix4x4) -> Self {
        Self::Matrix(m)
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Float2(v) => write!(f, "{} {}", v[0], v[1]),
            Self::Float3(v) => write!(f, "{} {} {}", v[0], v[1], v[2]),
            Self::Color(v) => write!(f, "{v}"),
            Self::String(v) => write!(f, "\"{v}\""),
            Self::Matrix(m) => write!(f, "{:?}", m.m),
            Self::FloatArray(v) => write!(f, "{v:?}"),
            Self::IntArray(v) => write!(f, "{v:?}"),
        }
    }
}
