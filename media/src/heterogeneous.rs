//! Heterogeneous Media

use super::*;
use pbrt_core::context::*;
use pbrt_core::element::*;
use pbrt_core::fileutil::*;
use pbrt_core::float_file::*;
use pbrt_core::geometry::*;
use pbrt_core::host::*;
use pbrt_core::texture::*;
use std::path::Path;

/// Returns the first geometry whose shading engine uses the medium as its
/// volume shader.
///
/// * `host`   - The scene.
/// * `medium` - Medium node.
pub fn owner_geometry(host: &dyn SceneQuery, medium: &str) -> Result<Option<String>, String> {
    for c in host.list_connections(medium)? {
        if host.node_kind(&c.other)? != SHADING_ENGINE_KIND {
            continue;
        }
        if let Some(geometry) = connections_to(host, &c.other, "dagSetMembers")?.into_iter().next() {
            return Ok(Some(geometry));
        }
    }
    Ok(None)
}

/// Returns the renderer's volume sampling method.
fn sampling_method(ctx: &TranslateContext, node: &str) -> &'static str {
    let label = ctx
        .host
        .find_one_string(node, "samplingMethod", String::from("Woodcock"));
    match label.to_lowercase().as_str() {
        "woodcock" => "woodcock",
        "simpson" => "simpson",
        _ => {
            warn!("Unknown sampling method '{label}' on '{node}'; using 'woodcock'");
            "woodcock"
        }
    }
}

/// Returns the orientation volume used by anisotropic phase functions.
fn orientation_volume(ctx: &TranslateContext, node: &str) -> Result<Element, String> {
    match connected_texture(ctx, node, "orientation")? {
        Some(path) => Ok(Element::volume("orientation", &path)),
        None => Ok(Element::plugin("volume", "constvolume", None)
            .with_attr("name", "orientation")
            .with_child(Element::vector(
                "value",
                &ctx.host
                    .find_one_vector3f(node, "orientation", Vector3f::new(0.0, 1.0, 0.0)),
            ))),
    }
}

/// Returns a `heterogeneous` medium whose density is written to a grid volume
/// file in the render directory. The grid spans the bounding box of the
/// geometry the medium is assigned to.
///
/// Returns `None` when the medium has no usable source data.
///
/// * `ctx`  - Translation context.
/// * `node` - Medium node.
/// * `id`   - Optional id used by shape references.
pub fn heterogeneous_medium(
    ctx: &TranslateContext,
    node: &str,
    id: Option<&str>,
) -> Result<Option<Element>, String> {
    let source = ctx.host.find_one_string(node, "sourceFile", String::new());
    if source.is_empty() || !Path::new(&source).is_file() {
        warn!("Heterogeneous medium '{node}' has no source file '{source}'; skipping");
        return Ok(None);
    }

    let height = ctx.host.find_one_int(node, "gridHeight", 0);
    let width = ctx.host.find_one_int(node, "gridWidth", 0);
    let depth = ctx.host.find_one_int(node, "gridDepth", 0);
    if height <= 0 || width <= 0 || depth <= 0 {
        warn!("Heterogeneous medium '{node}' has an empty grid {height}x{width}x{depth}; skipping");
        return Ok(None);
    }

    let Some(owner) = owner_geometry(ctx.host, node)? else {
        warn!("Heterogeneous medium '{node}' is not assigned to any geometry; skipping");
        return Ok(None);
    };
    let bounds: Bounds3f = ctx.host.vertex_positions(&owner)?.iter().collect();
    if bounds.is_empty() {
        warn!("Geometry '{owner}' has no vertices to bound medium '{node}'; skipping");
        return Ok(None);
    }

    let data = read_float_file(Path::new(&source))?;
    let grid = GridVolume::new(height as usize, width as usize, depth as usize, bounds, data);
    let path = ctx.unique_render_path(&file_stem(&source), "vol");
    grid.write_file(&path)?;
    ctx.add_sidecar(path.clone());
    let path = absolute_path(&path)?;

    let mut medium = Element::plugin("medium", "heterogeneous", id)
        .with_child(Element::string("method", sampling_method(ctx, node)))
        .with_child(Element::volume("density", &path.to_string_lossy()));

    // The albedo is always given as a volume.
    for param in scattering_params(ctx, node)? {
        if param.name() != Some("albedo") {
            medium.add_child(param);
        }
    }
    medium.add_child(volume_param(ctx, node, "albedo", pbrt_core::spectrum::Color::grey(0.95))?);
    if ctx.host.find_one_bool(node, "useOrientation", false) {
        medium.add_child(orientation_volume(ctx, node)?);
    }
    medium.add_child(Element::float(
        "scale",
        ctx.host.find_one_float(node, "scale", 1.0),
    ));
    medium.add_child(phase_function(ctx, node));
    Ok(Some(medium))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pbrt_core::paramset::*;
    use pbrt_core::settings::*;
    use std::fs;

    fn scene(source: &Path) -> MemoryHost {
        let mut host = MemoryHost::new();
        host.add_node("box", "transform");
        host.add_node("boxShape", "mesh").parent("box").set(
            "points",
            AttrValue::FloatArray(vec![0.0, 0.0, 0.0, 2.0, 1.0, 0.0, 1.0, 3.0, 4.0]),
        );
        host.add_node("smoke", "MitsubaHeterogeneousParticipatingMedium")
            .set("sourceFile", &*source.to_string_lossy())
            .set("gridHeight", 2)
            .set("gridWidth", 2)
            .set("gridDepth", 2)
            .set("useSigmaTAlbedo", true)
            .set("samplingMethod", "Simpson");
        host.add_node("smokeSG", SHADING_ENGINE_KIND);
        host.connect("boxShape", "instObjGroups", "smokeSG", "dagSetMembers");
        host.connect("smoke", "outColor", "smokeSG", "volumeShader");
        host
    }

    #[test]
    fn writes_sidecar_and_references_it() {
        let dir = std::env::temp_dir().join("media_heterogeneous_writes_sidecar");
        fs::create_dir_all(&dir).unwrap();
        let source = dir.join("smoke.txt");
        fs::write(&source, "1 2 3 x 5\n6 7 8").unwrap();

        let host = scene(&source);
        let settings = RenderSettings::new(ParamSet::new(), 1, (8, 8));
        let ctx = TranslateContext::new(&host, &settings, &dir);
        assert_eq!(owner_geometry(&host, "smoke").unwrap(), Some(String::from("boxShape")));

        let m = heterogeneous_medium(&ctx, "smoke", Some("smoke")).unwrap().unwrap();
        assert_eq!(m.value_of("method"), Some("simpson"));
        let density = m.child_named("volume", "density").unwrap();
        let filename = density.value_of("filename").unwrap();
        assert!(filename.ends_with("smoke.vol"));
        assert!(Path::new(filename).is_absolute());
        assert_eq!(m.child_named("volume", "albedo").and_then(|v| v.plugin_type()), Some("constvolume"));
        assert!(m.child_named("rgb", "albedo").is_none());

        let sidecars = ctx.sidecars();
        assert_eq!(sidecars, vec![dir.join("smoke.vol")]);
        let bytes = fs::read(&sidecars[0]).unwrap();
        assert_eq!(bytes.len(), GRID_HEADER_SIZE + 8 * 4);
        assert_eq!(&bytes[52..56], &2.0f32.to_le_bytes());
        assert_eq!(&bytes[60..64], &0.0f32.to_le_bytes());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn sources_sharing_a_stem_get_their_own_sidecars() {
        let dir = std::env::temp_dir().join("media_heterogeneous_shared_stem");
        fs::create_dir_all(dir.join("x")).unwrap();
        fs::create_dir_all(dir.join("y")).unwrap();
        let first = dir.join("x").join("smoke.txt");
        let second = dir.join("y").join("smoke.dat");
        fs::write(&first, "1 1 1 1 1 1 1 1").unwrap();
        fs::write(&second, "2 2 2 2 2 2 2 2").unwrap();

        let mut host = scene(&first);
        host.add_node("boxB", "transform");
        host.add_node("boxBShape", "mesh").parent("boxB").set(
            "points",
            AttrValue::FloatArray(vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0]),
        );
        host.add_node("fog", "MitsubaHeterogeneousParticipatingMedium")
            .set("sourceFile", &*second.to_string_lossy())
            .set("gridHeight", 2)
            .set("gridWidth", 2)
            .set("gridDepth", 2);
        host.add_node("fogSG", SHADING_ENGINE_KIND);
        host.connect("boxBShape", "instObjGroups", "fogSG", "dagSetMembers");
        host.connect("fog", "outColor", "fogSG", "volumeShader");

        let settings = RenderSettings::default();
        let ctx = TranslateContext::new(&host, &settings, &dir);
        let a = heterogeneous_medium(&ctx, "smoke", Some("smoke")).unwrap().unwrap();
        let b = heterogeneous_medium(&ctx, "fog", Some("fog")).unwrap().unwrap();
        let density = |m: &Element| {
            m.child_named("volume", "density")
                .and_then(|v| v.value_of("filename"))
                .map(String::from)
                .unwrap()
        };
        assert!(density(&a).ends_with("smoke.vol"));
        assert!(density(&b).ends_with("smoke_1.vol"));
        assert_eq!(ctx.sidecars(), vec![dir.join("smoke.vol"), dir.join("smoke_1.vol")]);

        let a_bytes = fs::read(dir.join("smoke.vol")).unwrap();
        let b_bytes = fs::read(dir.join("smoke_1.vol")).unwrap();
        assert_eq!(&a_bytes[GRID_HEADER_SIZE..GRID_HEADER_SIZE + 4], &1.0f32.to_le_bytes());
        assert_eq!(&b_bytes[GRID_HEADER_SIZE..GRID_HEADER_SIZE + 4], &2.0f32.to_le_bytes());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_source_is_skipped() {
        let host = scene(Path::new("/nonexistent/smoke.txt"));
        let settings = RenderSettings::default();
        let ctx = TranslateContext::new(&host, &settings, Path::new("."));
        assert_eq!(heterogeneous_medium(&ctx, "smoke", None).unwrap(), None);
        assert!(ctx.sidecars().is_empty());
    }
}
