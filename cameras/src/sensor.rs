//! Sensors

use super::*;
use core::common::*;
use core::element::*;
use core::host::*;
use core::settings::*;

/// Node kind of host cameras.
pub const CAMERA_KIND: &str = "camera";

/// Millimetres per inch; film apertures are stored in inches.
const MM_PER_INCH: Float = 25.4;

/// Sensor models.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SensorKind {
    Perspective,
    ThinLens,
    Orthographic,
    Telecentric,
    Spherical,
    RadianceMeter,
    FluenceMeter,
    PerspectiveRdist,
}

impl SensorKind {
    /// Returns the sensor model for a camera. The `sensorOverride` setting
    /// replaces the model derived from the camera when it names one.
    ///
    /// * `host`     - The scene.
    /// * `camera`   - Camera node.
    /// * `settings` - Render settings.
    pub fn select(host: &dyn SceneQuery, camera: &str, settings: &RenderSettings) -> Self {
        let derived = if host.find_one_bool(camera, "orthographic", false) {
            Self::Orthographic
        } else if host.find_one_bool(camera, "depthOfField", false) {
            Self::ThinLens
        } else {
            Self::Perspective
        };

        let name = settings.find_one_string("sensorOverride", "None");
        match name.as_str() {
            "None" => derived,
            "Spherical" => Self::Spherical,
            "Telecentric" => Self::Telecentric,
            "Radiance Meter" => Self::RadianceMeter,
            "Fluence Meter" => Self::FluenceMeter,
            "Perspective Pinhole with Radial Distortion" => Self::PerspectiveRdist,
            _ => {
                warn!("Unknown sensor override '{name}'; using the camera's own model");
                derived
            }
        }
    }

    /// Returns the plugin name.
    pub fn plugin(&self) -> &'static str {
        match self {
            Self::Perspective => "perspective",
            Self::ThinLens => "thinlens",
            Self::Orthographic => "orthographic",
            Self::Telecentric => "telecentric",
            Self::Spherical => "spherical",
            Self::RadianceMeter => "radiancemeter",
            Self::FluenceMeter => "fluencemeter",
            Self::PerspectiveRdist => "perspective_rdist",
        }
    }

    /// Returns true if the model has a field of view.
    pub fn has_fov(&self) -> bool {
        matches!(self, Self::Perspective | Self::ThinLens | Self::PerspectiveRdist)
    }

    /// Returns true if the model has an aperture and a focus distance.
    pub fn has_aperture(&self) -> bool {
        matches!(self, Self::ThinLens | Self::Telecentric)
    }

    /// Returns true if the model has clip planes.
    pub fn has_clip_planes(&self) -> bool {
        !matches!(
            self,
            Self::Spherical | Self::RadianceMeter | Self::FluenceMeter
        )
    }
}

/// Returns the camera to render: the first renderable camera, else the first
/// camera.
///
/// * `host` - The scene.
pub fn render_camera(host: &dyn SceneQuery) -> Result<String, String> {
    let cameras = host.list_of_kind(CAMERA_KIND);
    if let Some(camera) = cameras.iter().find(|c| host.is_renderable(c)) {
        return Ok(camera.clone());
    }
    match cameras.into_iter().next() {
        Some(camera) => {
            warn!("No renderable camera; using '{camera}'");
            Ok(camera)
        }
        None => Err(String::from("Scene has no camera")),
    }
}

/// Returns the horizontal field of view in degrees.
///
/// * `aperture`     - Horizontal film aperture in inches.
/// * `focal_length` - Focal length in millimetres.
pub fn horizontal_fov(aperture: Float, focal_length: Float) -> Float {
    (2.0 * (aperture * MM_PER_INCH / (2.0 * focal_length)).atan()).to_degrees()
}

/// Returns the lens aperture radius in scene units.
///
/// * `focal_length` - Focal length in millimetres.
/// * `f_stop`       - Lens f-number.
pub fn aperture_radius(focal_length: Float, f_stop: Float) -> Float {
    focal_length / (2.0 * f_stop) / 10.0
}

/// Returns the `sensor` element for the render camera with the sampler and
/// film nested in it.
///
/// * `host`     - The scene.
/// * `settings` - Render settings.
/// * `sampler`  - The sampler element.
/// * `film`     - The film element.
pub fn make_sensor(
    host: &dyn SceneQuery,
    settings: &RenderSettings,
    sampler: Element,
    film: Element,
) -> Result<Element, String> {
    let camera = render_camera(host)?;
    let kind = SensorKind::select(host, &camera, settings);
    debug!("Sensor '{}' from camera '{camera}'", kind.plugin());

    let mut sensor = Element::plugin("sensor", kind.plugin(), None);

    let focal_length = host.find_one_float(&camera, "focalLength", 35.0);
    if kind.has_fov() {
        let aperture = host.find_one_float(&camera, "horizontalFilmAperture", 1.41732);
        sensor.add_child(Element::float("fov", horizontal_fov(aperture, focal_length)));
        sensor.add_child(Element::string("fovAxis", "x"));
    }

    if kind.has_aperture() {
        let f_stop = host.find_one_float(&camera, "fStop", 5.6);
        sensor.add_child(Element::float(
            "apertureRadius",
            aperture_radius(focal_length, f_stop),
        ));
        sensor.add_child(Element::float(
            "focusDistance",
            host.find_one_float(&camera, "focusDistance", 5.0),
        ));
    }

    if kind == SensorKind::PerspectiveRdist {
        let kc2 = settings.find_one_float("sensorOverridePerspectiveRdistKc2", 0.0);
        let kc4 = settings.find_one_float("sensorOverridePerspectiveRdistKc4", 0.0);
        sensor.add_child(Element::string("kc", &join_floats(&[kc2, kc4])));
    }

    if kind.has_clip_planes() {
        sensor.add_child(Element::float(
            "nearClip",
            host.find_one_float(&camera, "nearClipPlane", 0.1),
        ));
        sensor.add_child(Element::float(
            "farClip",
            host.find_one_float(&camera, "farClipPlane", 10000.0),
        ));
    }

    let world = host.world_matrix(&camera)?;
    let coi = host.find_one_float(&camera, "centerOfInterest", 5.0);
    let mut ops = vec![];
    let is_ortho_camera = host.find_one_bool(&camera, "orthographic", false);
    if is_ortho_camera && matches!(kind, SensorKind::Orthographic | SensorKind::Telecentric) {
        let half_width = host.find_one_float(&camera, "orthographicWidth", 30.0) / 2.0;
        ops.push(
            Element::new("scale")
                .with_attr("x", &format_float(half_width))
                .with_attr("y", &format_float(half_width)),
        );
    }
    ops.push(LookAt::from_world(&world, coi).to_element());
    sensor.add_child(to_world(ops));

    sensor.add_child(sampler);
    sensor.add_child(film);
    Ok(sensor)
}
