//! Camera Placement

use core::common::*;
use core::element::*;
use core::geometry::*;

/// Camera placement in world space as `(target, origin, up)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LookAt {
    /// Point the camera looks at.
    pub target: Point3f,

    /// Camera position.
    pub origin: Point3f,

    /// World space up vector.
    pub up: Vector3f,
}

impl LookAt {
    /// Derives the placement from a camera world matrix. The camera looks down
    /// its negative z-axis with the target `center_of_interest` units away.
    ///
    /// * `world`              - Camera world matrix.
    /// * `center_of_interest` - Distance to the target.
    pub fn from_world(world: &Matrix4x4, center_of_interest: Float) -> Self {
        let origin = world.translation();
        let view = -world.axis(2).normalize();
        Self {
            target: origin + view * center_of_interest,
            origin,
            up: world.axis(1).normalize(),
        }
    }

    /// Returns the `<lookat>` element.
    pub fn to_element(&self) -> Element {
        Element::new("lookat")
            .with_attr("target", &self.target.to_string())
            .with_attr("origin", &self.origin.to_string())
            .with_attr("up", &self.up.to_string())
    }
}

/// Returns a `<transform name="toWorld">` element.
///
/// * `ops` - Transform operations in application order.
pub fn to_world(ops: Vec<Element>) -> Element {
    let mut transform = Element::new("transform").with_attr("name", "toWorld");
    for op in ops {
        transform.add_child(op);
    }
    transform
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookat_from_translated_camera() {
        let mut world = Matrix4x4::IDENTITY;
        world.m[3] = [1.0, 2.0, 3.0, 1.0];
        let la = LookAt::from_world(&world, 5.0);
        assert_eq!(la.origin, Point3f::new(1.0, 2.0, 3.0));
        assert_eq!(la.target, Point3f::new(1.0, 2.0, -2.0));
        assert_eq!(la.up, Vector3f::new(0.0, 1.0, 0.0));

        let e = la.to_element();
        assert_eq!(e.attr("target"), Some("1, 2, -2"));
        assert_eq!(e.attr("origin"), Some("1, 2, 3"));
        assert_eq!(e.attr("up"), Some("0, 1, 0"));
    }
}
