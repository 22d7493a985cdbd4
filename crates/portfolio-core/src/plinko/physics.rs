use glam::Vec2;
use rapier2d::prelude::*;

fn vec2_to_na(v: Vec2) -> nalgebra::Vector2<f32> {
    nalgebra::Vector2::new(v.x, v.y)
}

/// The kind of rigid body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyType {
    Dynamic,
    Fixed,
}

impl BodyType {
    fn to_rapier(self) -> RigidBodyType {
        match self {
            BodyType::Dynamic => RigidBodyType::Dynamic,
            BodyType::Fixed => RigidBodyType::Fixed,
        }
    }
}

/// Shape description for a collider.
#[derive(Debug, Clone, Copy)]
pub enum ColliderDesc {
    Ball { radius: f32 },
    Cuboid { half_width: f32, half_height: f32 },
}

impl ColliderDesc {
    fn build_collider(&self) -> ColliderBuilder {
        match *self {
            ColliderDesc::Ball { radius } => ColliderBuilder::ball(radius),
            ColliderDesc::Cuboid {
                half_width,
                half_height,
            } => ColliderBuilder::cuboid(half_width, half_height),
        }
    }
}

/// Physical material properties for a collider.
#[derive(Debug, Clone, Copy)]
pub struct ColliderMaterial {
    pub restitution: f32,
    pub friction: f32,
    pub density: f32,
}

impl Default for ColliderMaterial {
    fn default() -> Self {
        Self {
            restitution: 0.3,
            friction: 0.5,
            density: 1.0,
        }
    }
}

/// Builder for describing a rigid body before creation.
#[derive(Debug, Clone)]
pub struct BodyDesc {
    pub body_type: BodyType,
    pub position: Vec2,
    pub velocity: Vec2,
    pub linear_damping: f32,
    pub ccd: bool,
    pub collider: ColliderDesc,
}

impl BodyDesc {
    /// Create a dynamic body description with the given collider shape.
    pub fn dynamic(collider: ColliderDesc) -> Self {
        Self {
            body_type: BodyType::Dynamic,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            linear_damping: 0.0,
            ccd: false,
            collider,
        }
    }

    /// Create a fixed (static) body description with the given collider shape.
    pub fn fixed(collider: ColliderDesc) -> Self {
        Self {
            body_type: BodyType::Fixed,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            linear_damping: 0.0,
            ccd: false,
            collider,
        }
    }

    pub fn with_position(mut self, pos: Vec2) -> Self {
        self.position = pos;
        self
    }

    pub fn with_velocity(mut self, vel: Vec2) -> Self {
        self.velocity = vel;
        self
    }

    /// Linear damping approximates air drag: higher values slow the body faster.
    pub fn with_linear_damping(mut self, damping: f32) -> Self {
        self.linear_damping = damping;
        self
    }

    pub fn with_ccd(mut self, enabled: bool) -> Self {
        self.ccd = enabled;
        self
    }
}

/// Handle pair referencing Rapier internals for one body.
#[derive(Debug, Clone, Copy)]
pub struct BodyHandle {
    body: RigidBodyHandle,
    collider: ColliderHandle,
}

/// Wraps the Rapier2D boilerplate the plinko board needs: create and remove
/// bodies, step the integration, and read a body's position and speed.
/// Collision resolution stays entirely inside Rapier — landing detection is
/// done by polling, not collision events.
pub struct PhysicsWorld {
    gravity: nalgebra::Vector2<f32>,
    integration_parameters: IntegrationParameters,
    physics_pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    query_pipeline: QueryPipeline,
}

impl PhysicsWorld {
    /// Create a new physics world. The board uses Y-down coordinates, so
    /// downward gravity is positive Y.
    pub fn new(gravity: Vec2) -> Self {
        Self {
            gravity: vec2_to_na(gravity),
            integration_parameters: IntegrationParameters::default(),
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
        }
    }

    /// Set the integration timestep.
    pub fn set_dt(&mut self, dt: f32) {
        self.integration_parameters.dt = dt;
    }

    /// Create a rigid body + collider and return the handle pair.
    pub fn create_body(&mut self, desc: &BodyDesc, material: ColliderMaterial) -> BodyHandle {
        let rb = RigidBodyBuilder::new(desc.body_type.to_rapier())
            .translation(vec2_to_na(desc.position))
            .linvel(vec2_to_na(desc.velocity))
            .linear_damping(desc.linear_damping)
            .ccd_enabled(desc.ccd)
            .build();

        let body = self.bodies.insert(rb);

        let collider = desc
            .collider
            .build_collider()
            .restitution(material.restitution)
            .friction(material.friction)
            .density(material.density)
            .build();

        let collider = self
            .colliders
            .insert_with_parent(collider, body, &mut self.bodies);

        BodyHandle { body, collider }
    }

    /// Remove a body and its collider from the simulation.
    pub fn remove_body(&mut self, handle: BodyHandle) {
        self.bodies.remove(
            handle.body,
            &mut self.island_manager,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            true,
        );
    }

    /// Advance the simulation by one fixed step.
    pub fn step(&mut self) {
        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &(),
            &(),
        );
    }

    /// Current position of a body's center.
    pub fn position(&self, handle: BodyHandle) -> Vec2 {
        self.bodies
            .get(handle.body)
            .map(|rb| Vec2::new(rb.translation().x, rb.translation().y))
            .unwrap_or(Vec2::ZERO)
    }

    /// Scalar speed (magnitude of linear velocity).
    pub fn speed(&self, handle: BodyHandle) -> f32 {
        self.bodies
            .get(handle.body)
            .map(|rb| rb.linvel().norm())
            .unwrap_or(0.0)
    }

    /// Number of rigid bodies in the simulation.
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    // Used by tests to place a body into a known settle scenario.
    #[cfg(test)]
    pub(crate) fn set_state(&mut self, handle: BodyHandle, pos: Vec2, vel: Vec2) {
        if let Some(rb) = self.bodies.get_mut(handle.body) {
            rb.set_translation(vec2_to_na(pos), true);
            rb.set_linvel(vec2_to_na(vel), true);
        }
    }

    #[cfg(test)]
    pub(crate) fn has_collider(&self, handle: BodyHandle) -> bool {
        self.colliders.get(handle.collider).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_and_remove_body() {
        let mut world = PhysicsWorld::new(Vec2::ZERO);
        let handle = world.create_body(
            &BodyDesc::dynamic(ColliderDesc::Ball { radius: 10.0 }),
            ColliderMaterial::default(),
        );
        assert_eq!(world.body_count(), 1);
        assert!(world.has_collider(handle));
        world.remove_body(handle);
        assert_eq!(world.body_count(), 0);
    }

    #[test]
    fn gravity_pulls_dynamic_body_down() {
        let mut world = PhysicsWorld::new(Vec2::new(0.0, 981.0));
        world.set_dt(1.0 / 60.0);

        let handle = world.create_body(
            &BodyDesc::dynamic(ColliderDesc::Ball { radius: 10.0 })
                .with_position(Vec2::new(400.0, 50.0)),
            ColliderMaterial::default(),
        );

        for _ in 0..30 {
            world.step();
        }

        let pos = world.position(handle);
        assert!(pos.y > 50.0, "ball should fall: y={}", pos.y);
        assert!(world.speed(handle) > 0.0);
    }

    #[test]
    fn fixed_body_does_not_move() {
        let mut world = PhysicsWorld::new(Vec2::new(0.0, 981.0));
        world.set_dt(1.0 / 60.0);

        let handle = world.create_body(
            &BodyDesc::fixed(ColliderDesc::Cuboid {
                half_width: 405.0,
                half_height: 10.0,
            })
            .with_position(Vec2::new(400.0, 680.0)),
            ColliderMaterial::default(),
        );

        for _ in 0..30 {
            world.step();
        }

        let pos = world.position(handle);
        assert!((pos.y - 680.0).abs() < 0.001, "ground moved: y={}", pos.y);
    }

    #[test]
    fn ball_comes_to_rest_on_ground() {
        let mut world = PhysicsWorld::new(Vec2::new(0.0, 981.0));
        world.set_dt(1.0 / 60.0);

        world.create_body(
            &BodyDesc::fixed(ColliderDesc::Cuboid {
                half_width: 405.0,
                half_height: 10.0,
            })
            .with_position(Vec2::new(400.0, 680.0)),
            ColliderMaterial::default(),
        );
        let ball = world.create_body(
            &BodyDesc::dynamic(ColliderDesc::Ball { radius: 10.0 })
                .with_position(Vec2::new(400.0, 50.0))
                .with_linear_damping(0.001),
            ColliderMaterial {
                restitution: 0.9,
                friction: 0.001,
                density: 1.0,
            },
        );

        // Plenty of time to fall ~600 units and bounce out
        for _ in 0..(60 * 60) {
            world.step();
        }

        let pos = world.position(ball);
        let speed = world.speed(ball);
        assert!(pos.y > 640.0, "ball should rest near the floor: y={}", pos.y);
        assert!(speed < 0.5, "ball should be settled: speed={}", speed);
    }

    #[test]
    fn queries_on_removed_body_are_benign() {
        let mut world = PhysicsWorld::new(Vec2::ZERO);
        let handle = world.create_body(
            &BodyDesc::dynamic(ColliderDesc::Ball { radius: 5.0 }),
            ColliderMaterial::default(),
        );
        world.remove_body(handle);
        assert_eq!(world.position(handle), Vec2::ZERO);
        assert_eq!(world.speed(handle), 0.0);
    }
}
