use crate::engine::core::StopCondition;
use crate::engine::scene::{NodeId, SceneGraph};

use super::SolarSystem;

/// Spin and revolution increments for one body. The sun has no anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationTrack {
    pub mesh: NodeId,
    pub anchor: Option<NodeId>,
    pub spin_rate: f32,
    pub revolution_rate: f32,
}

/// Advances every body by one frame of fixed angular increments.
#[derive(Debug, Clone)]
pub struct AnimationDriver {
    tracks: Vec<RotationTrack>,
    frames: u64,
}

impl AnimationDriver {
    pub fn new(tracks: Vec<RotationTrack>) -> Self {
        Self { tracks, frames: 0 }
    }

    /// Sun first, then bodies in catalog order.
    pub fn for_system(system: &SolarSystem) -> Self {
        let sun = RotationTrack {
            mesh: system.sun.mesh,
            anchor: None,
            spin_rate: system.sun.spin_rate,
            revolution_rate: 0.0,
        };
        let bodies = system.bodies.iter().map(|body| RotationTrack {
            mesh: body.mesh,
            anchor: Some(body.anchor),
            spin_rate: body.spin_rate,
            revolution_rate: body.revolution_rate,
        });
        Self::new(std::iter::once(sun).chain(bodies).collect())
    }

    pub fn tracks(&self) -> &[RotationTrack] {
        &self.tracks
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Applies one frame of spin to every mesh and revolution to every anchor.
    pub fn advance(&mut self, graph: &mut SceneGraph) {
        for track in &self.tracks {
            graph.rotate_y(track.mesh, track.spin_rate);
            if let Some(anchor) = track.anchor {
                graph.rotate_y(anchor, track.revolution_rate);
            }
        }
        self.frames += 1;
        tracing::trace!(target: "scene", frame = self.frames, "rotations applied");
    }

    /// Headless loop: advance, hand the finished frame to `present`, repeat
    /// until `stop` fires. Returns the number of frames run by this call.
    pub fn run(
        &mut self,
        graph: &mut SceneGraph,
        stop: StopCondition,
        mut present: impl FnMut(&SceneGraph),
    ) -> u64 {
        let start = self.frames;
        while !stop.should_stop(self.frames) {
            self.advance(graph);
            present(graph);
        }
        self.frames - start
    }
}
