//! Common

/// Use 32-bit precision for floating point numbers.
pub type Float = f32;

/// Default signed integer to 32-bit.
pub type Int = i32;

/// Version of the scene description grammar written to the root element.
pub const SCENE_VERSION: &str = "0.5.0";

/// Returns the textual representation of a floating point value used in the
/// scene description. This is locale independent.
///
/// * `v` - The value.
#[inline]
pub fn format_float(v: Float) -> String {
    format!("{v}")
}

/// Returns a boolean as the lowercase literal used in the scene description.
///
/// * `v` - The value.
#[inline]
pub fn format_bool(v: bool) -> &'static str {
    if v {
        "true"
    } else {
        "false"
    }
}

/// Returns a frame number zero-padded to 4 digits.
///
/// * `frame` - The frame number.
#[inline]
pub fn pad_frame(frame: Int) -> String {
    format!("{frame:04}")
}

/// Joins float values into a `", "` separated list.
///
/// * `values` - The values.
pub fn join_floats(values: &[Float]) -> String {
    itertools::join(values.iter().map(|v| format_float(*v)), ", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floats_use_shortest_representation() {
        assert_eq!(format_float(5.0), "5");
        assert_eq!(format_float(0.3), "0.3");
        assert_eq!(format_float(-1.25), "-1.25");
    }

    #[test]
    fn frames_are_padded_to_four_digits() {
        assert_eq!(pad_frame(1), "0001");
        assert_eq!(pad_frame(42), "0042");
        assert_eq!(pad_frame(12345), "12345");
    }

    #[test]
    fn joined_floats_are_comma_separated() {
        assert_eq!(join_floats(&[0.3, 0.7]), "0.3, 0.7");
        assert_eq!(join_floats(&[]), "");
    }
}
