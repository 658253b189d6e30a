//! Scene nodes the simulation is bound to
//!
//! The scene itself (meshes, drawables, loading) belongs to the renderer. The
//! core only needs named transforms for the miner and the three asteroids plus
//! exactly one camera, resolved once at startup.

use glam::{Quat, Vec3};
use thiserror::Error;

use crate::consts::{ASTEROID_NODES, MINER_NODE};
use crate::sim::HAZARD_COUNT;
use crate::tuning::TuningError;

/// Startup binding failures. These are fatal: the game cannot run without them.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("scene node '{0}' not found")]
    MissingNode(&'static str),
    #[error("expecting scene to have exactly one camera, but it has {0}")]
    CameraCount(usize),
    #[error(transparent)]
    Tuning(#[from] TuningError),
}

/// Index of a transform within a [`Scene`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransformId(usize);

/// A named scene node
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    pub name: String,
    pub position: Vec3,
    pub rotation: Quat,
}

impl Transform {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

/// A perspective camera attached to a transform
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub transform: TransformId,
    pub aspect: f32,
}

/// Transforms and cameras
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub transforms: Vec<Transform>,
    pub cameras: Vec<Camera>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transform and return its id
    pub fn add_transform(&mut self, transform: Transform) -> TransformId {
        self.transforms.push(transform);
        TransformId(self.transforms.len() - 1)
    }

    /// Add a camera on a new transform with the given name
    pub fn add_camera(&mut self, name: impl Into<String>) -> usize {
        let transform = self.add_transform(Transform::new(name));
        self.cameras.push(Camera {
            transform,
            aspect: 1.0,
        });
        self.cameras.len() - 1
    }

    /// Look up a transform by name (first match)
    pub fn find(&self, name: &str) -> Option<TransformId> {
        self.transforms
            .iter()
            .position(|t| t.name == name)
            .map(TransformId)
    }

    pub fn transform(&self, id: TransformId) -> &Transform {
        &self.transforms[id.0]
    }

    pub fn transform_mut(&mut self, id: TransformId) -> &mut Transform {
        &mut self.transforms[id.0]
    }
}

/// Scene nodes the game writes to every frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneBindings {
    pub miner: TransformId,
    pub asteroids: [TransformId; HAZARD_COUNT],
    /// Index into `Scene::cameras`
    pub camera: usize,
}

impl SceneBindings {
    /// Resolve every required node, failing on the first one missing
    pub fn resolve(scene: &Scene) -> Result<Self, SetupError> {
        let find = |name: &'static str| scene.find(name).ok_or(SetupError::MissingNode(name));

        let miner = find(MINER_NODE)?;
        let asteroids = [
            find(ASTEROID_NODES[0])?,
            find(ASTEROID_NODES[1])?,
            find(ASTEROID_NODES[2])?,
        ];

        if scene.cameras.len() != 1 {
            return Err(SetupError::CameraCount(scene.cameras.len()));
        }

        Ok(Self {
            miner,
            asteroids,
            camera: 0,
        })
    }
}

/// Build the stock scene: miner, three asteroids and one camera
pub fn default_scene() -> Scene {
    let mut scene = Scene::new();
    scene.add_transform(Transform::new(MINER_NODE));
    for name in ASTEROID_NODES {
        scene.add_transform(Transform::new(name));
    }
    scene.add_camera("Camera");
    scene
}
