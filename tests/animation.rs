use std::f32::consts::TAU;

use orrery::engine::core::StopCondition;
use orrery::engine::resources::ResourceManager;
use orrery::engine::scene::SceneGraph;
use orrery::solar::animation::AnimationDriver;
use orrery::solar::catalog::SolarCatalog;
use orrery::solar::SolarSystem;

fn standard_system() -> SolarSystem {
    let mut resources = ResourceManager::new("missing-assets");
    SolarSystem::build(&SolarCatalog::standard(), &mut resources, 1.5)
}

fn angles_match(actual: f32, expected: f32, tolerance: f32) -> bool {
    let diff = (actual - expected).rem_euclid(TAU);
    diff < tolerance || TAU - diff < tolerance
}

fn yaw(graph: &SceneGraph, id: orrery::engine::scene::NodeId) -> f32 {
    graph.node(id).transform.yaw()
}

#[test]
fn test_single_frame_increments() {
    let mut system = standard_system();
    let mut driver = AnimationDriver::for_system(&system);

    driver.advance(&mut system.scene.graph);
    let graph = &system.scene.graph;

    let earth = system.body("Earth").expect("Earth");
    let mars = system.body("Mars").expect("Mars");
    assert!((yaw(graph, earth.anchor) - 0.01).abs() < 1e-6);
    assert!((yaw(graph, earth.mesh) - 0.002).abs() < 1e-6);
    assert!((yaw(graph, mars.anchor) - 0.0084).abs() < 1e-6);
    assert!((yaw(graph, system.sun.mesh) - 0.004).abs() < 1e-6);
    assert_eq!(driver.frames(), 1);
}

#[test]
fn test_rotations_accumulate_linearly() {
    let mut system = standard_system();
    let mut driver = AnimationDriver::for_system(&system);
    let frames = 250u32;

    for _ in 0..frames {
        driver.advance(&mut system.scene.graph);
    }

    let graph = &system.scene.graph;
    for body in &system.bodies {
        let spin = (f64::from(frames) * f64::from(body.spin_rate)) as f32;
        let revolution = (f64::from(frames) * f64::from(body.revolution_rate)) as f32;
        println!(
            "{}: spin {} (expected {}), revolution {} (expected {})",
            body.name,
            yaw(graph, body.mesh),
            spin,
            yaw(graph, body.anchor),
            revolution
        );
        assert!(angles_match(yaw(graph, body.mesh), spin, 1e-3), "{} spin", body.name);
        assert!(
            angles_match(yaw(graph, body.anchor), revolution, 1e-3),
            "{} revolution",
            body.name
        );
    }

    let sun_spin = frames as f32 * system.sun.spin_rate;
    assert!(angles_match(yaw(graph, system.sun.mesh), sun_spin, 1e-3));
}

#[test]
fn test_sun_has_no_revolution_track() {
    let system = standard_system();
    let driver = AnimationDriver::for_system(&system);

    // Sun first, then one track per body.
    assert_eq!(driver.tracks().len(), 10);
    let sun = driver.tracks()[0];
    assert_eq!(sun.mesh, system.sun.mesh);
    assert!(sun.anchor.is_none());
    assert!(driver.tracks()[1..].iter().all(|track| track.anchor.is_some()));
}

#[test]
fn test_rings_stay_with_their_body() {
    let mut system = standard_system();
    let mut driver = AnimationDriver::for_system(&system);

    for frame in 1..=400u32 {
        driver.advance(&mut system.scene.graph);
        if frame % 50 != 0 {
            continue;
        }
        let graph = &system.scene.graph;
        for body in system.bodies.iter().filter(|body| body.ring.is_some()) {
            let ring = body.ring.expect("filtered on ring");
            let ring_position = graph.world_position(ring);
            let body_position = graph.world_position(body.mesh);
            assert!(
                ring_position.abs_diff_eq(body_position, 1e-3),
                "{} ring drifted at frame {frame}: {ring_position:?} vs {body_position:?}",
                body.name
            );
        }
    }
}

#[test]
fn test_orbit_radius_is_preserved() {
    let mut system = standard_system();
    let mut driver = AnimationDriver::for_system(&system);
    let catalog = SolarCatalog::standard();

    for _ in 0..123 {
        driver.advance(&mut system.scene.graph);
    }

    for (body, definition) in system.bodies.iter().zip(&catalog.bodies) {
        let position = system.scene.graph.world_position(body.mesh);
        assert!(position.y.abs() < 1e-3);
        let radius = position.length();
        assert!(
            (radius - definition.orbital_distance).abs() < 1e-2,
            "{} radius {radius}",
            body.name
        );
    }
}

#[test]
fn test_topology_never_changes() {
    let mut system = standard_system();
    let mut driver = AnimationDriver::for_system(&system);
    let before = system.scene.graph.topology();
    let nodes = system.scene.graph.len();

    for _ in 0..60 {
        driver.advance(&mut system.scene.graph);
    }

    assert_eq!(system.scene.graph.len(), nodes);
    assert_eq!(system.scene.graph.topology(), before);
}

#[test]
fn test_track_order_does_not_matter() {
    let mut forward = standard_system();
    let mut reversed = standard_system();

    let mut in_order = AnimationDriver::for_system(&forward);
    let mut tracks = in_order.tracks().to_vec();
    tracks.reverse();
    let mut out_of_order = AnimationDriver::new(tracks);

    for _ in 0..30 {
        in_order.advance(&mut forward.scene.graph);
        out_of_order.advance(&mut reversed.scene.graph);
    }

    for ((id, a), (_, b)) in forward.scene.graph.iter().zip(reversed.scene.graph.iter()) {
        assert_eq!(a.transform, b.transform, "node {} diverged", id.index());
    }
}

#[test]
fn test_headless_run_honours_stop_condition() {
    // 1. Setup
    let mut system = standard_system();
    let mut driver = AnimationDriver::for_system(&system);
    let mut presented = Vec::new();

    // 2. Run five frames, recording what each present sees
    let ran = driver.run(
        &mut system.scene.graph,
        StopCondition::AfterFrames(5),
        |graph| presented.push(graph.len()),
    );

    // 3. Verify
    assert_eq!(ran, 5);
    assert_eq!(driver.frames(), 5);
    assert_eq!(presented, vec![21; 5]);

    // Already at the limit: nothing more to do.
    let ran = driver.run(&mut system.scene.graph, StopCondition::AfterFrames(5), |_| {});
    assert_eq!(ran, 0);

    let earth = system.body("Earth").expect("Earth");
    assert!((yaw(&system.scene.graph, earth.anchor) - 0.05).abs() < 1e-5);
}
