use cgmath::*;

use crate::util::Bounds;

// ---------------------------------------------------------------------------------------------------------------------

/// Which faces of a Body made contact with a static body during the most recent step.
/// Reset at the start of every step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Touching {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Touching {
    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

/// An arcade physics body: an axis aligned box with a velocity. Positions are y-down
/// world pixels, and `position` is the top-left corner of the box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    pub position: Point2<f32>,
    pub extent: Vector2<f32>,
    pub velocity: Vector2<f32>,
    /// Fraction of velocity retained (and reflected) on contact, per axis
    pub bounce: Vector2<f32>,
    pub allow_gravity: bool,
    pub collide_world_bounds: bool,
    pub enabled: bool,
    pub touching: Touching,
}

impl Body {
    pub fn new(center: Point2<f32>, extent: Vector2<f32>) -> Self {
        Self {
            position: center - extent * 0.5,
            extent,
            velocity: vec2(0.0, 0.0),
            bounce: vec2(0.0, 0.0),
            allow_gravity: true,
            collide_world_bounds: false,
            enabled: true,
            touching: Touching::default(),
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.position, self.extent)
    }

    pub fn center(&self) -> Point2<f32> {
        self.position + self.extent * 0.5
    }

    pub fn set_center(&mut self, center: Point2<f32>) {
        self.position = center - self.extent * 0.5;
    }

    /// Moves the body so its center is at `center`, zeroing velocity and contact state.
    pub fn reset(&mut self, center: Point2<f32>) {
        self.set_center(center);
        self.velocity = vec2(0.0, 0.0);
        self.touching = Touching::default();
    }

    /// Re-enables a disabled body at the given center.
    pub fn enable_at(&mut self, center: Point2<f32>) {
        self.reset(center);
        self.enabled = true;
    }

    /// Removes the body from simulation. A disabled body neither moves nor overlaps anything.
    pub fn disable(&mut self) {
        self.enabled = false;
        self.velocity = vec2(0.0, 0.0);
    }
}

/// True if both bodies are enabled and their boxes share interior area.
pub fn overlaps(a: &Body, b: &Body) -> bool {
    a.enabled && b.enabled && a.bounds().intersects(&b.bounds())
}

// ---------------------------------------------------------------------------------------------------------------------

/// The physics "space": world bounds, gravity, and the immovable platform bodies dynamic
/// bodies collide against. Dynamic bodies are owned by their entities and stepped through here.
pub struct Space {
    bounds: Bounds,
    gravity: Vector2<f32>,
    paused: bool,
    static_bodies: Vec<Bounds>,
}

impl Space {
    pub fn new(bounds: Bounds, gravity: Vector2<f32>) -> Self {
        Self {
            bounds,
            gravity,
            paused: false,
            static_bodies: vec![],
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn add_static_body(&mut self, bounds: Bounds) {
        self.static_bodies.push(bounds);
    }

    pub fn static_bodies(&self) -> &[Bounds] {
        &self.static_bodies
    }

    /// Halts all motion. There is no way to resume a paused space.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Advances a single body by `dt` seconds: applies gravity, then moves and separates along
    /// y, then along x, then clamps to the world bounds if the body asks for it. When
    /// `collide_with_statics` is false the body passes through platforms.
    pub fn step_body(&self, body: &mut Body, dt: f32, collide_with_statics: bool) {
        if self.paused || !body.enabled {
            return;
        }

        body.touching = Touching::default();

        if body.allow_gravity {
            body.velocity += self.gravity * dt;
        }

        body.position.y += body.velocity.y * dt;
        if collide_with_statics {
            self.separate_y(body);
        }

        body.position.x += body.velocity.x * dt;
        if collide_with_statics {
            self.separate_x(body);
        }

        if body.collide_world_bounds {
            self.collide_world_bounds(body);
        }
    }

    fn separate_y(&self, body: &mut Body) {
        for platform in &self.static_bodies {
            if !body.bounds().intersects(platform) {
                continue;
            }
            if body.velocity.y > 0.0 {
                body.position.y = platform.top() - body.extent.y;
                body.touching.down = true;
            } else if body.velocity.y < 0.0 {
                body.position.y = platform.bottom();
                body.touching.up = true;
            } else {
                continue;
            }
            body.velocity.y = -body.velocity.y * body.bounce.y;
        }
    }

    fn separate_x(&self, body: &mut Body) {
        for platform in &self.static_bodies {
            if !body.bounds().intersects(platform) {
                continue;
            }
            if body.velocity.x > 0.0 {
                body.position.x = platform.left() - body.extent.x;
                body.touching.right = true;
            } else if body.velocity.x < 0.0 {
                body.position.x = platform.right();
                body.touching.left = true;
            } else {
                continue;
            }
            body.velocity.x = -body.velocity.x * body.bounce.x;
        }
    }

    fn collide_world_bounds(&self, body: &mut Body) {
        let world = self.bounds;
        if body.position.x < world.left() {
            body.position.x = world.left();
            body.velocity.x = -body.velocity.x * body.bounce.x;
        } else if body.position.x + body.extent.x > world.right() {
            body.position.x = world.right() - body.extent.x;
            body.velocity.x = -body.velocity.x * body.bounce.x;
        }

        if body.position.y < world.top() {
            body.position.y = world.top();
            body.velocity.y = -body.velocity.y * body.bounce.y;
        } else if body.position.y + body.extent.y > world.bottom() {
            body.position.y = world.bottom() - body.extent.y;
            body.velocity.y = -body.velocity.y * body.bounce.y;
        }
    }
}

#[cfg(test)]
mod space_tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn space() -> Space {
        let mut space = Space::new(
            Bounds::new(point2(0.0, 0.0), vec2(1600.0, 600.0)),
            vec2(0.0, 300.0),
        );
        space.add_static_body(Bounds::new(point2(0.0, 500.0), vec2(800.0, 64.0)));
        space
    }

    #[test]
    fn gravity_accelerates_falling_body() {
        let space = Space::new(
            Bounds::new(point2(0.0, 0.0), vec2(1600.0, 600.0)),
            vec2(0.0, 300.0),
        );
        let mut body = Body::new(point2(100.0, 100.0), vec2(10.0, 10.0));
        space.step_body(&mut body, DT, true);
        assert!((body.velocity.y - 5.0).abs() < 1e-4);
        assert!(body.center().y > 100.0);
        assert!(!body.touching.any());
    }

    #[test]
    fn landing_sets_touching_down_and_snaps_to_platform() {
        let space = space();
        let mut body = Body::new(point2(100.0, 480.0), vec2(32.0, 48.0));
        body.velocity.y = 200.0;
        space.step_body(&mut body, DT, true);
        assert!(body.touching.down);
        assert_eq!(body.bounds().bottom(), 500.0);
        assert_eq!(body.velocity.y, 0.0);
    }

    #[test]
    fn resting_body_stays_grounded() {
        let space = space();
        let mut body = Body::new(point2(100.0, 476.0), vec2(32.0, 48.0));
        body.bounce = vec2(0.2, 0.2);
        for _ in 0..120 {
            space.step_body(&mut body, DT, true);
        }
        assert_eq!(body.bounds().bottom(), 500.0);
        assert!(body.touching.down);
    }

    #[test]
    fn bounce_reflects_velocity() {
        let space = space();
        let mut body = Body::new(point2(100.0, 490.0), vec2(10.0, 10.0));
        body.bounce = vec2(1.0, 1.0);
        body.velocity.y = 100.0;
        space.step_body(&mut body, DT, true);
        assert!(body.touching.down);
        assert!((body.velocity.y + 105.0).abs() < 1e-3);
    }

    #[test]
    fn bodies_pass_through_statics_when_asked() {
        let space = space();
        let mut body = Body::new(point2(100.0, 495.0), vec2(10.0, 10.0));
        body.velocity.y = 100.0;
        space.step_body(&mut body, DT, false);
        assert!(!body.touching.down);
        assert!(body.bounds().intersects(&space.static_bodies()[0]));
    }

    #[test]
    fn walking_into_a_wall_is_blocked() {
        let mut space = Space::new(
            Bounds::new(point2(0.0, 0.0), vec2(1600.0, 600.0)),
            vec2(0.0, 0.0),
        );
        space.add_static_body(Bounds::new(point2(200.0, 0.0), vec2(50.0, 600.0)));
        let mut body = Body::new(point2(197.0, 100.0), vec2(10.0, 10.0));
        body.velocity.x = 160.0;
        space.step_body(&mut body, DT, true);
        assert!(body.touching.right);
        assert_eq!(body.bounds().right(), 200.0);
    }

    #[test]
    fn world_bounds_clamp() {
        let space = space();
        let mut body = Body::new(point2(3.0, 100.0), vec2(10.0, 10.0));
        body.collide_world_bounds = true;
        body.bounce = vec2(1.0, 1.0);
        body.velocity.x = -300.0;
        space.step_body(&mut body, DT, true);
        assert_eq!(body.position.x, 0.0);
        assert_eq!(body.velocity.x, 300.0);
    }

    #[test]
    fn paused_space_and_disabled_bodies_do_not_move() {
        let mut space = space();
        let mut body = Body::new(point2(100.0, 100.0), vec2(10.0, 10.0));
        body.velocity = vec2(50.0, 50.0);

        let mut disabled = body;
        disabled.enabled = false;
        space.step_body(&mut disabled, DT, true);
        assert_eq!(disabled.position, body.position);

        space.pause();
        let before = body;
        space.step_body(&mut body, DT, true);
        assert_eq!(body, before);
    }

    #[test]
    fn overlap_requires_enabled_bodies() {
        let a = Body::new(point2(0.0, 0.0), vec2(10.0, 10.0));
        let mut b = Body::new(point2(5.0, 5.0), vec2(10.0, 10.0));
        assert!(overlaps(&a, &b));
        b.disable();
        assert!(!overlaps(&a, &b));
        b.enable_at(point2(100.0, 100.0));
        assert!(b.enabled);
        assert!(!overlaps(&a, &b));
    }
}
