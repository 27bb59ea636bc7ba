mod common;

use api::parser::*;
use api::*;
use byteorder::{LittleEndian, ReadBytesExt};
use common::*;
use pbrt_core::element::*;
use pbrt_core::host::*;
use pbrt_core::paramset::*;
use pbrt_core::settings::*;
use pbrt_core::spectrum::*;
use std::fs;
use std::io::{Cursor, Read};

#[test]
fn diffuse_cube_with_path_tracer() {
    let mut host = parse_str(
        r#"
node "settings" "MitsubaRenderSettings" {
    string integrator "Path Tracer"
    int iPathTracerMaxDepth 5
    string sampler "Independent Sampler"
    int sampleCount 4
}
node "persp" "transform" { }
node "perspShape" "camera" parent "persp" { bool renderable true }
node "M" "MitsubaDiffuseShader" { color reflectance 0.5 0.5 0.5 }
"#,
    )
    .unwrap();
    add_mesh(&mut host, "cubeShape");
    assign_surface(&mut host, "cubeShape", "M");

    let (t, _) = translate(&host, "diffuse_cube_with_path_tracer");
    let scene = &t.document;

    let integrator = top(scene, "integrator");
    assert_eq!(integrator.plugin_type(), Some("path"));
    assert_eq!(integrator.value_of("maxDepth"), Some("5"));
    assert_eq!(integrator.value_of("rrDepth"), Some("5"));
    assert_eq!(integrator.value_of("strictNormals"), Some("false"));
    assert_eq!(integrator.value_of("hideEmitters"), Some("false"));

    let sensor = top(scene, "sensor");
    assert_eq!(sensor.plugin_type(), Some("perspective"));
    let sampler = sensor.children_tagged("sampler").next().unwrap();
    assert_eq!(sampler.plugin_type(), Some("independent"));
    assert_eq!(sampler.value_of("sampleCount"), Some("4"));
    let film = sensor.children_tagged("film").next().unwrap();
    assert_eq!(film.plugin_type(), Some("hdrfilm"));
    assert_eq!(film.value_of("width"), Some("640"));
    assert!(film.children_tagged("rfilter").next().is_some());

    let bsdf = top(scene, "bsdf");
    assert_eq!(bsdf.plugin_type(), Some("diffuse"));
    assert_eq!(bsdf.id(), Some("M"));

    let shape = top(scene, "shape");
    assert_eq!(shape.plugin_type(), Some("obj"));
    let r = shape.children_tagged("ref").next().unwrap();
    assert_eq!(r.id(), Some("M"));
    assert!(shape.value_of("filename").unwrap().ends_with("cubeShape.obj"));
    assert_eq!(t.sidecars.len(), 1);
    assert!(t.sidecars[0].exists());

    let xml = scene.to_document();
    assert!(xml.starts_with("<?xml version='1.0' encoding='utf-8'?>"));
    assert!(xml.contains("<bsdf type=\"diffuse\" id=\"M\">"));
    assert!(xml.contains("<ref id=\"M\"/>"));
}

#[test]
fn two_sided_rough_plastic() {
    let mut host = MemoryHost::new();
    host.add_node("cam", "camera");
    host.add_node("RP", "MitsubaRoughPlasticShader")
        .set("twosided", true)
        .set("distribution", "GGX");
    add_mesh(&mut host, "sphereShape");
    assign_surface(&mut host, "sphereShape", "RP");

    let (t, _) = translate(&host, "two_sided_rough_plastic");
    let outer = top(&t.document, "bsdf");
    assert_eq!(outer.plugin_type(), Some("twosided"));
    assert_eq!(outer.id(), Some("RP"));
    let inner: Vec<&Element> = outer.children_tagged("bsdf").collect();
    assert_eq!(inner.len(), 1);
    assert_eq!(inner[0].plugin_type(), Some("roughplastic"));
    assert_eq!(inner[0].id(), Some("RPInnerMaterial"));

    let shape = top(&t.document, "shape");
    assert_eq!(shape.children_tagged("ref").next().unwrap().id(), Some("RP"));
}

#[test]
fn environment_map_with_rotation() {
    let mut host = MemoryHost::new();
    host.add_node("cam", "camera");
    host.add_node("env", "MitsubaEnvironmentLight")
        .set("rotate", AttrValue::Float3([10.0, 20.0, 30.0]))
        .set("cache", true);
    host.add_node("envFile", "file").set("fileTextureName", "env.exr");
    host.connect("envFile", "outColor", "env", "source");

    let (t, _) = translate(&host, "environment_map_with_rotation");
    let emitter = top(&t.document, "emitter");
    assert_eq!(emitter.plugin_type(), Some("envmap"));
    assert_eq!(emitter.value_of("filename"), Some("env.exr"));
    assert_eq!(emitter.value_of("cache"), Some("true"));

    let rotations = &emitter.children_tagged("transform").next().unwrap().children;
    assert_eq!(rotations.len(), 3);
    for (r, (axis, angle)) in rotations.iter().zip([("x", "10"), ("y", "20"), ("z", "30")]) {
        assert_eq!(r.tag, "rotate");
        assert_eq!(r.attr(axis), Some("1"));
        assert_eq!(r.attr("angle"), Some(angle));
    }
}

#[test]
fn heterogeneous_medium_writes_volume() {
    let dir = scratch_dir("heterogeneous_medium_source");
    let source = dir.join("test.txt");
    let n = 32 * 32 * 32;
    let text: Vec<String> = (0..n).map(|i| format!("{}", (i % 7) as f32 / 7.0)).collect();
    fs::write(&source, text.join(" ")).unwrap();

    let mut host = MemoryHost::new();
    host.add_node("cam", "camera");
    add_mesh(&mut host, "boxShape");
    host.add_node("smoke", "MitsubaHeterogeneousParticipatingMedium")
        .set("sourceFile", source.to_string_lossy().to_string())
        .set("gridHeight", 32)
        .set("gridWidth", 32)
        .set("gridDepth", 32);
    host.add_node("smokeSG", SHADING_ENGINE_KIND);
    host.connect("smoke", "outColor", "smokeSG", "volumeShader");
    host.connect("boxShape", "instObjGroups", "smokeSG", "dagSetMembers");

    let (t, render_dir) = translate(&host, "heterogeneous_medium_writes_volume");
    let medium = top(&t.document, "medium");
    assert_eq!(medium.plugin_type(), Some("heterogeneous"));
    assert_eq!(medium.id(), Some("smoke"));
    let density = medium.children_tagged("volume").next().unwrap();
    assert_eq!(density.name(), Some("density"));
    let filename = density.value_of("filename").unwrap();
    assert!(filename.ends_with("test.vol"));

    let shape = top(&t.document, "shape");
    let interior = shape.children_tagged("ref").next().unwrap();
    assert_eq!(interior.name(), Some("interior"));
    assert_eq!(interior.id(), Some("smoke"));

    let vol = render_dir.join("test.vol");
    assert!(t.sidecars.contains(&vol));
    let bytes = fs::read(&vol).unwrap();
    assert_eq!(bytes.len(), 48 + n * 4);

    let mut header = Cursor::new(&bytes[..48]);
    let mut magic = [0u8; 4];
    header.read_exact(&mut magic).unwrap();
    assert_eq!(&magic, b"VOL\x03");
    assert_eq!(header.read_i32::<LittleEndian>().unwrap(), 1);
    for expected in [32, 32, 32, 1] {
        assert_eq!(header.read_i32::<LittleEndian>().unwrap(), expected);
    }
    let bounds: Vec<f32> = (0..6)
        .map(|_| header.read_f32::<LittleEndian>().unwrap())
        .collect();
    assert_eq!(bounds, vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
}

#[test]
fn mixture_drops_zero_weights() {
    let mut host = MemoryHost::new();
    host.add_node("cam", "camera");
    host.add_node("Mix", "MitsubaMixtureShader")
        .set("weight1", 0.3)
        .set("weight2", 0.0)
        .set("weight3", 0.7)
        .set("weight4", 0.0);
    host.add_node("A", "MitsubaDiffuseShader").set("reflectance", Color::grey(0.8));
    host.add_node("B", "MitsubaConductorShader");
    host.connect("A", "outColor", "Mix", "bsdf1");
    host.connect("B", "outColor", "Mix", "bsdf3");
    add_mesh(&mut host, "mesh1");
    assign_surface(&mut host, "mesh1", "Mix");

    let (t, _) = translate(&host, "mixture_drops_zero_weights");
    let mix = top(&t.document, "bsdf");
    assert_eq!(mix.plugin_type(), Some("mixturebsdf"));
    assert_eq!(mix.value_of("weights"), Some("0.3, 0.7"));
    let nested: Vec<&Element> = mix.children_tagged("bsdf").collect();
    assert_eq!(nested.len(), 2);
    assert_eq!(nested[0].plugin_type(), Some("diffuse"));
    assert_eq!(nested[1].plugin_type(), Some("conductor"));
    assert!(nested.iter().all(|b| b.id().is_none()));
}

#[test]
fn sobol_scramble_seeded_by_frame() {
    let host = parse_str(
        r#"
frame 42
node "settings" "MitsubaRenderSettings" {
    string sampler "Sobol QMC Sampler"
    int samplerScramble -1
}
node "cam" "camera" { }
"#,
    )
    .unwrap();
    let (t, _) = translate(&host, "sobol_scramble_seeded_by_frame");
    let sampler = top(&t.document, "sensor")
        .children_tagged("sampler")
        .next()
        .unwrap();
    assert_eq!(sampler.plugin_type(), Some("sobol"));
    let scramble = sampler.child_named("integer", "scramble").unwrap();
    assert_eq!(scramble.attr("value"), Some("42"));
}

#[test]
fn animated_texture_uses_frame_extension() {
    let mut host = MemoryHost::new();
    host.add_node("cam", "camera");
    host.add_node("M", "MitsubaDiffuseShader");
    host.add_node("wood", "file")
        .set("fileTextureName", "tex/wood.0001.png")
        .set("useFrameExtension", true)
        .set("frameExtension", 7);
    host.connect("wood", "outColor", "M", "reflectance");
    add_mesh(&mut host, "mesh1");
    assign_surface(&mut host, "mesh1", "M");

    let (t, _) = translate(&host, "animated_texture_uses_frame_extension");
    let bsdf = top(&t.document, "bsdf");
    let texture = bsdf.children_tagged("texture").next().unwrap();
    assert_eq!(texture.value_of("filename"), Some("tex/wood.0007.png"));
}

#[test]
fn parent_override_hides_geometry() {
    let mut host = MemoryHost::new();
    host.add_node("cam", "camera");
    host.add_node("grp", "transform")
        .set("overrideEnabled", true)
        .set("overrideVisibility", false);
    add_mesh(&mut host, "hiddenShape");
    host.node_mut("hiddenShapeXform").unwrap().parent("grp");
    add_mesh(&mut host, "shownShape");

    let (t, _) = translate(&host, "parent_override_hides_geometry");
    let shapes: Vec<&Element> = t.document.children_tagged("shape").collect();
    assert_eq!(shapes.len(), 1);
    assert!(shapes[0].value_of("filename").unwrap().ends_with("shownShape.obj"));
}

#[test]
fn multichannel_film_lists_channels() {
    let mut host = MemoryHost::new();
    host.add_node("cam", "camera");
    host.add_node("settings", RENDER_SETTINGS_KIND)
        .set("multichannel", true)
        .set("multichannelPosition", true)
        .set("multichannelDistance", true)
        .set("multichannelUV", true)
        .set("fileFormat", "RGBE (.hdr)");

    let (t, _) = translate(&host, "multichannel_film_lists_channels");
    assert_eq!(t.image_extension, "exr");
    let film = top(&t.document, "sensor").children_tagged("film").next().unwrap();
    assert_eq!(film.value_of("fileFormat"), Some("openexr"));
    assert_eq!(film.value_of("pixelFormat"), Some("rgba, rgb, luminance, rgb"));
    assert_eq!(film.value_of("channelNames"), Some("rgba, position, distance, uv"));

    let integrator = top(&t.document, "integrator");
    assert_eq!(integrator.plugin_type(), Some("multichannel"));
    assert_eq!(integrator.children_tagged("integrator").count(), 4);
}

#[test]
fn frame_range_renders_each_frame() {
    let mut host = parse_str(
        r#"
node "cam" "camera" { }
node "M" "MitsubaDiffuseShader" { }
node "M_SG" "shadingEngine" { }
node "tri" "mesh" {
    floats points [0 0 0 1 0 0 0 1 0]
    ints faceVertexCounts [3]
    ints faceVertexIndices [0 1 2]
    key 3 bool visibility false
}
connect "M.outColor" "M_SG.surfaceShader"
connect "tri.instObjGroups" "M_SG.dagSetMembers"
"#,
    )
    .unwrap();
    let opts = FrameOptions {
        out_dir: scratch_dir("frame_range_renders_each_frame"),
        scene_name: String::from("shot"),
        keep: Some(true),
        ..Default::default()
    };

    let mut jobs = vec![];
    for frame in FrameRange::new(1, 3, 2).unwrap().frames() {
        jobs.push(render_frame(&mut host, frame, &opts).unwrap());
    }
    assert_eq!(jobs.len(), 2);
    assert_eq!(jobs[0].geometry.len(), 1);
    assert!(jobs[1].geometry.is_empty());
    assert!(jobs[1].image.ends_with("shot_0003.exr"));
    assert!(fs::read_to_string(&jobs[0].scene_file)
        .unwrap()
        .contains("<shape type=\"obj\">"));
}
