use cgmath::*;
use rand::{rngs::StdRng, SeedableRng};
use std::time::Duration;
use winit::keyboard::KeyCode;

use crate::{
    camera::Camera,
    collision::{self, Space},
    entities::{
        player::Player,
        slime::{self, SlimeGroup},
        spell::SpellPool,
        star::StarGroup,
        util::Facing,
    },
    entity::{Entity, IdVendor},
    event_dispatch::{Dispatcher, Message, MessageHandler},
    input::InputState,
    rendering::Quad,
    util::Bounds,
    Options,
};

use super::{
    constants::{
        backdrop, colors, platforms, spell, CAMERA_LERP, GRAVITY, PHYSICS_TIMESTEP, WINDOW_HEIGHT,
        WINDOW_WIDTH, WORLD_HEIGHT, WORLD_WIDTH,
    },
    events::Event,
};

// ---------------------------------------------------------------------------------------------------------------------

fn build_platforms() -> Vec<Bounds> {
    platforms::LAYOUT
        .iter()
        .map(|(x, y, scale)| {
            Bounds::from_center(
                point2(*x, *y),
                vec2(platforms::WIDTH, platforms::HEIGHT) * *scale,
            )
        })
        .collect()
}

fn build_backdrop() -> Vec<Bounds> {
    (1..=backdrop::PANEL_COUNT)
        .map(|k| {
            Bounds::from_center(
                point2(
                    backdrop::PANEL_SPACING * k as f32,
                    backdrop::PANEL_CENTER_Y,
                ),
                vec2(backdrop::PANEL_WIDTH, backdrop::PANEL_HEIGHT),
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------------------------------------------------

/// The scene: owns the world, its entities and the score/ammo/game over counters, and responds
/// to input and to contacts detected during the physics step.
pub struct GameState {
    entity_id_vendor: IdVendor,
    rng: StdRng,
    message_dispatcher: Dispatcher,
    space: Space,
    backdrop: Vec<Bounds>,
    camera: Camera,
    time_accumulator: f32,

    player: Player,
    stars: StarGroup,
    slimes: SlimeGroup,
    spells: SpellPool,

    score: u32,
    ammo: i32,
    game_over: bool,
}

impl GameState {
    pub fn new(options: &Options) -> Self {
        let mut rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut entity_id_vendor = IdVendor::default();

        let world_bounds = Bounds::new(point2(0.0, 0.0), vec2(WORLD_WIDTH, WORLD_HEIGHT));
        let mut space = Space::new(world_bounds, vec2(0.0, GRAVITY));
        for platform in build_platforms() {
            space.add_static_body(platform);
        }

        let spells = SpellPool::new(spell::POOL_SIZE, &mut entity_id_vendor);
        let player = Player::new(entity_id_vendor.next_id());
        let stars = StarGroup::new(&mut entity_id_vendor, &mut rng);

        let mut camera = Camera::new(
            vec2(WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32),
            world_bounds,
        );
        camera.set_lerp(vec2(CAMERA_LERP, CAMERA_LERP));
        camera.center_on(player.body().center());

        log::info!(
            "GameState::new - world: {:?} platforms: {} stars: {} spells: {}",
            world_bounds,
            space.static_bodies().len(),
            stars.count_active(),
            spells.capacity()
        );

        Self {
            entity_id_vendor,
            rng,
            message_dispatcher: Dispatcher::default(),
            space,
            backdrop: build_backdrop(),
            camera,
            time_accumulator: 0.0,
            player,
            stars,
            slimes: SlimeGroup::default(),
            spells,
            score: 0,
            ammo: spell::STARTING_AMMO,
            game_over: false,
        }
    }

    // -----------------------------------------------------------------------------------------------------------------
    // Accessors

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn ammo(&self) -> i32 {
        self.ammo
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn stars(&self) -> &StarGroup {
        &self.stars
    }

    pub fn slimes(&self) -> &SlimeGroup {
        &self.slimes
    }

    pub fn spells(&self) -> &SpellPool {
        &self.spells
    }

    pub fn space(&self) -> &Space {
        &self.space
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    // -----------------------------------------------------------------------------------------------------------------
    // Frame update

    /// Advance the scene by `dt`. Input is applied once, physics runs in fixed ticks.
    /// Once the game is over, nothing responds anymore.
    pub fn update(&mut self, dt: Duration, input: &InputState) {
        if self.game_over {
            return;
        }

        self.process_input(input);
        self.dispatch_messages();

        self.player.update(dt);

        self.time_accumulator += dt.as_secs_f32();
        while self.time_accumulator >= PHYSICS_TIMESTEP {
            self.time_accumulator -= PHYSICS_TIMESTEP;
            self.step_physics(PHYSICS_TIMESTEP);
        }

        self.camera.follow(self.player.body().center());
    }

    fn process_input(&mut self, input: &InputState) {
        let direction = if input.is_down(KeyCode::ArrowLeft) {
            Some(Facing::Left)
        } else if input.is_down(KeyCode::ArrowRight) {
            Some(Facing::Right)
        } else {
            None
        };
        self.player.walk(direction);

        if input.is_down(KeyCode::ArrowUp) {
            self.player.jump();
        }

        for key in [KeyCode::Space, KeyCode::Enter] {
            if input.is_just_pressed(key) {
                self.message_dispatcher.global(Event::CastSpell {
                    facing: self.player.facing(),
                });
            }
        }

        // Pointer casts don't carry the player's facing
        if input.is_pointer_just_pressed() {
            self.message_dispatcher.global(Event::CastSpell {
                facing: Facing::Right,
            });
        }
    }

    fn step_physics(&mut self, dt: f32) {
        if self.space.is_paused() {
            return;
        }

        let space = &self.space;
        step_entity(space, &mut self.player, dt);
        for star in self.stars.stars_mut().iter_mut() {
            step_entity(space, star, dt);
        }
        for slime in self.slimes.slimes_mut().iter_mut() {
            step_entity(space, slime, dt);
        }
        for spell in self.spells.spells_mut().iter_mut() {
            step_entity(space, spell, dt);
        }

        let recycled = self.spells.recycle_escaped(&self.space.bounds());
        if recycled > 0 {
            log::trace!("Recycled {} spells which left the world", recycled);
        }

        self.detect_contacts();
        self.dispatch_messages();
    }

    /// Queues a message for each contact, in the order contacts are registered:
    /// player/star overlaps, player/slime collisions, then spell/slime collisions.
    fn detect_contacts(&mut self) {
        let player_id = self.player.entity_id();
        let player_body = *self.player.body();
        let slime_bodies = self.slimes.slimes().active_bodies();

        for (star_id, star_body) in self.stars.stars().active_bodies() {
            if collision::overlaps(&player_body, &star_body) {
                self.message_dispatcher
                    .entity_to_global(player_id, Event::StarTouched { star_id });
            }
        }

        for (slime_id, slime_body) in &slime_bodies {
            if collision::overlaps(&player_body, slime_body) {
                self.message_dispatcher.entity_to_global(
                    player_id,
                    Event::SlimeTouched {
                        slime_id: *slime_id,
                    },
                );
            }
        }

        for (spell_id, spell_body) in self.spells.spells().active_bodies() {
            for (slime_id, slime_body) in &slime_bodies {
                if collision::overlaps(&spell_body, slime_body) {
                    self.message_dispatcher.entity_to_global(
                        spell_id,
                        Event::SpellHitSlime {
                            spell_id,
                            slime_id: *slime_id,
                        },
                    );
                }
            }
        }
    }

    fn dispatch_messages(&mut self) {
        while !self.message_dispatcher.is_empty() {
            let messages = self.message_dispatcher.drain();
            Dispatcher::dispatch(&messages, self);
        }
    }

    // -----------------------------------------------------------------------------------------------------------------
    // Event responses

    /// Fires a spell from just above the player. Ammo is spent even if every spell is already
    /// in flight, and is allowed to go negative.
    pub fn cast_spell(&mut self, facing: Facing) {
        let origin = self.player.cast_origin();
        match self.spells.cast(origin, facing) {
            Some(spell_id) => log::debug!("Cast spell {} {:?} from {:?}", spell_id, facing, origin),
            None => log::debug!("Spell pool exhausted, cast dropped"),
        }
        self.ammo -= 1;
    }

    /// Collects a star, respawning the whole group when it was the last one, and spawns one slime.
    pub fn collect_star(&mut self, star_id: u32) {
        if !self.stars.collect(star_id) {
            return;
        }

        self.score += 1;
        log::debug!("Collected star {}, score: {}", star_id, self.score);

        if self.stars.count_active() == 0 {
            let respawned = self.stars.respawn_all();
            log::info!("All stars collected, respawned {}", respawned);
        }

        let x = slime::spawn_x(self.player.body().center().x, &mut self.rng);
        self.spawn_slime(x);
    }

    pub fn spawn_slime(&mut self, x: f32) -> u32 {
        self.slimes
            .spawn(&mut self.entity_id_vendor, x, &mut self.rng)
    }

    /// The terminal state: physics stops and the player turns red.
    pub fn hit_slime(&mut self, slime_id: u32) {
        if self.game_over {
            return;
        }
        let slime: Option<&dyn Entity> = self
            .slimes
            .slimes()
            .get(slime_id)
            .map(|s| s as &dyn Entity);
        log::info!(
            "Player hit {:?}, game over. Final score: {}",
            slime,
            self.score
        );
        self.space.pause();
        self.player.die();
        self.game_over = true;
    }

    pub fn kill_slime(&mut self, slime_id: u32) {
        if self.slimes.kill(slime_id) {
            log::debug!("Slime {} destroyed by spell", slime_id);
        }
    }

    // -----------------------------------------------------------------------------------------------------------------
    // Drawing

    /// Appends world-space quads, back to front.
    pub fn draw(&self, quads: &mut Vec<Quad>) {
        for (i, panel) in self.backdrop.iter().enumerate() {
            let color = if i % 2 == 0 {
                colors::BACKDROP_FAR
            } else {
                colors::BACKDROP_NEAR
            };
            quads.push(Quad::from_bounds(panel, color));

            // a few trunks per panel so scrolling is visible
            for t in 0..4 {
                let x = panel.left() + panel.width() * (0.15 + 0.23 * t as f32);
                quads.push(Quad::new(
                    point2(x, panel.top()),
                    vec2(18.0 + 6.0 * (t % 2) as f32, panel.height()),
                    colors::BACKDROP_NEAR,
                ));
            }
        }

        for platform in self.space.static_bodies() {
            quads.push(Quad::from_bounds(platform, colors::PLATFORM));
            quads.push(Quad::new(
                platform.origin,
                vec2(platform.width(), 6.0),
                colors::PLATFORM_TOP,
            ));
        }

        for star in self.stars.stars().iter() {
            star.draw(quads);
        }
        for slime in self.slimes.slimes().iter() {
            slime.draw(quads);
        }
        for spell in self.spells.spells().iter() {
            spell.draw(quads);
        }
        self.player.draw(quads);
    }

    /// Bodies of every active entity, for debug visualization
    pub fn active_bodies(&self) -> Vec<collision::Body> {
        let mut bodies = vec![*self.player.body()];
        bodies.extend(self.stars.stars().active().map(|e| *e.body()));
        bodies.extend(self.slimes.slimes().active().map(|e| *e.body()));
        bodies.extend(self.spells.spells().active().map(|e| *e.body()));
        bodies
    }
}

fn step_entity<E: Entity>(space: &Space, entity: &mut E, dt: f32) {
    let collide_with_statics = entity.collides_with_platforms();
    space.step_body(entity.body_mut(), dt, collide_with_statics);
}

impl MessageHandler for GameState {
    fn handle_message(&mut self, message: &Message) {
        match message.event {
            Event::CastSpell { facing } => self.cast_spell(facing),
            Event::StarTouched { star_id } => self.collect_star(star_id),
            Event::SlimeTouched { slime_id } => self.hit_slime(slime_id),
            Event::SpellHitSlime { slime_id, .. } => self.kill_slime(slime_id),
        }
    }
}

#[cfg(test)]
mod game_state_tests {
    use super::*;
    use crate::{collision::Body, entities::player::PlayerAnimation};
    use winit::event::{ElementState, MouseButton};

    // slightly longer than a physics tick so every frame steps at least once
    const FRAME: Duration = Duration::from_millis(17);

    fn new_state() -> GameState {
        GameState::new(&Options {
            debug_overlay: false,
            seed: Some(1234),
        })
    }

    fn input() -> InputState {
        InputState::for_keys(&crate::input::GAME_KEYS)
    }

    fn press(input: &mut InputState, key: KeyCode) {
        input.process_keyboard(key, ElementState::Pressed);
    }

    fn release(input: &mut InputState, key: KeyCode) {
        input.process_keyboard(key, ElementState::Released);
    }

    /// Runs frames until the player is standing on the ground
    fn settle(state: &mut GameState, input: &mut InputState) {
        for _ in 0..180 {
            state.update(FRAME, input);
            input.update();
        }
        assert!(state.player().body().touching.down);
    }

    fn star_ids(state: &GameState) -> Vec<u32> {
        state.stars().stars().iter().map(|s| s.entity_id()).collect()
    }

    fn spell_bodies(state: &GameState) -> Vec<Body> {
        state.spells().spells().iter().map(|s| *s.body()).collect()
    }

    #[test]
    fn initial_state() {
        let state = new_state();
        assert_eq!(state.score(), 0);
        assert_eq!(state.ammo(), 30);
        assert!(!state.is_game_over());
        assert_eq!(state.stars().count_active(), 10);
        assert_eq!(state.slimes().len(), 0);
        assert_eq!(state.spells().capacity(), 30);
        assert_eq!(state.spells().count_active(), 0);
        assert_eq!(state.space().static_bodies().len(), 8);
        assert_eq!(state.player().body().center(), point2(100.0, 450.0));
    }

    #[test]
    fn player_falls_and_lands_on_ground() {
        let mut state = new_state();
        let mut input = input();
        settle(&mut state, &mut input);
        assert_eq!(state.player().body().bounds().bottom(), 586.0);
    }

    #[test]
    fn movement_keys_set_velocity() {
        let mut state = new_state();
        let mut input = input();

        press(&mut input, KeyCode::ArrowLeft);
        state.update(Duration::from_secs(0), &input);
        assert_eq!(state.player().body().velocity.x, -160.0);
        assert_eq!(state.player().facing(), Facing::Left);
        assert_eq!(
            state.player().current_animation(),
            Some(PlayerAnimation::Left)
        );

        release(&mut input, KeyCode::ArrowLeft);
        input.update();
        press(&mut input, KeyCode::ArrowRight);
        state.update(Duration::from_secs(0), &input);
        assert_eq!(state.player().body().velocity.x, 160.0);

        release(&mut input, KeyCode::ArrowRight);
        input.update();
        input.update();
        state.update(Duration::from_secs(0), &input);
        assert_eq!(state.player().body().velocity.x, 0.0);
        assert_eq!(
            state.player().current_animation(),
            Some(PlayerAnimation::Turn)
        );
    }

    #[test]
    fn jump_only_from_ground() {
        let mut state = new_state();
        let mut input = input();

        press(&mut input, KeyCode::ArrowUp);
        state.update(Duration::from_secs(0), &input);
        assert_eq!(state.player().body().velocity.y, 0.0);
        release(&mut input, KeyCode::ArrowUp);
        input.update();
        input.update();

        settle(&mut state, &mut input);
        press(&mut input, KeyCode::ArrowUp);
        state.update(Duration::from_secs(0), &input);
        assert_eq!(state.player().body().velocity.y, -340.0);
    }

    #[test]
    fn firing_activates_one_spell_at_player() {
        let mut state = new_state();
        let mut input = input();

        press(&mut input, KeyCode::Space);
        state.update(Duration::from_secs(0), &input);

        assert_eq!(state.spells().count_active(), 1);
        assert_eq!(state.ammo(), 29);
        let spell = state.spells().spells().active().next().unwrap();
        assert_eq!(spell.body().center(), state.player().cast_origin());
        assert_eq!(spell.body().velocity.x, 900.0);

        // holding the key does not fire again
        input.update();
        state.update(Duration::from_secs(0), &input);
        assert_eq!(state.spells().count_active(), 1);
    }

    #[test]
    fn firing_while_facing_left_goes_left() {
        let mut state = new_state();
        let mut input = input();

        press(&mut input, KeyCode::ArrowLeft);
        press(&mut input, KeyCode::Enter);
        state.update(Duration::from_secs(0), &input);

        let spell = state.spells().spells().active().next().unwrap();
        assert_eq!(spell.body().velocity.x, -900.0);
    }

    #[test]
    fn space_and_enter_each_fire() {
        let mut state = new_state();
        let mut input = input();

        press(&mut input, KeyCode::Space);
        press(&mut input, KeyCode::Enter);
        state.update(Duration::from_secs(0), &input);
        assert_eq!(state.spells().count_active(), 2);
        assert_eq!(state.ammo(), 28);
    }

    #[test]
    fn pointer_fires_rightward_regardless_of_facing() {
        let mut state = new_state();
        let mut input = input();

        press(&mut input, KeyCode::ArrowLeft);
        input.process_mouse(MouseButton::Left, ElementState::Pressed);
        state.update(Duration::from_secs(0), &input);

        assert_eq!(state.player().facing(), Facing::Left);
        let spell = state.spells().spells().active().next().unwrap();
        assert_eq!(spell.body().velocity.x, 900.0);
    }

    #[test]
    fn ammo_has_no_floor_and_exhausted_pool_is_unchanged() {
        let mut state = new_state();
        for _ in 0..30 {
            state.cast_spell(Facing::Right);
        }
        assert_eq!(state.spells().count_active(), 30);
        assert_eq!(state.ammo(), 0);

        let before = spell_bodies(&state);
        state.cast_spell(Facing::Left);
        assert_eq!(spell_bodies(&state), before);
        assert_eq!(state.ammo(), -1);
    }

    #[test]
    fn collecting_star_scores_and_spawns_one_slime() {
        let mut state = new_state();
        let id = star_ids(&state)[3];

        state.collect_star(id);
        assert_eq!(state.score(), 1);
        assert_eq!(state.stars().count_active(), 9);
        assert_eq!(state.slimes().len(), 1);

        // player starts at x = 100, so the slime drops on the far side
        let slime = state.slimes().slimes().iter().next().unwrap();
        let x = slime.body().center().x;
        assert!((400.0..=800.0).contains(&x));

        // a star which is already collected can't be collected again
        state.collect_star(id);
        assert_eq!(state.score(), 1);
        assert_eq!(state.slimes().len(), 1);
    }

    #[test]
    fn collecting_every_star_respawns_them_all() {
        let mut state = new_state();
        let ids = star_ids(&state);
        for (i, id) in ids.iter().enumerate() {
            state.collect_star(*id);
            assert_eq!(state.score(), i as u32 + 1);
        }

        assert_eq!(state.stars().count_active(), 10);
        assert_eq!(state.slimes().len(), 10);
        for star in state.stars().stars().iter() {
            assert_eq!(star.body().center().y, 0.0);
        }
    }

    #[test]
    fn touching_a_star_collects_it() {
        let mut state = new_state();
        let mut input = input();
        settle(&mut state, &mut input);

        let star_id = star_ids(&state)[0];
        let center = state.player().body().center();
        {
            let star = state.stars.stars_mut().get_mut(star_id).unwrap();
            star.body_mut().reset(center);
            star.body_mut().allow_gravity = false;
        }

        state.update(FRAME, &input);
        assert_eq!(state.score(), 1);
        assert_eq!(state.slimes().len(), 1);
    }

    #[test]
    fn touching_the_last_star_respawns_all_in_one_frame() {
        let mut state = new_state();
        let mut input = input();
        settle(&mut state, &mut input);

        let ids = star_ids(&state);
        let (last, rest) = ids.split_last().unwrap();
        for id in rest {
            state.collect_star(*id);
        }
        assert_eq!(state.stars().count_active(), 1);
        assert_eq!(state.slimes().len(), 9);

        let center = state.player().body().center();
        {
            let star = state.stars.stars_mut().get_mut(*last).unwrap();
            star.body_mut().reset(center);
            star.body_mut().allow_gravity = false;
        }

        state.update(FRAME, &input);
        assert_eq!(state.score(), 10);
        assert_eq!(state.stars().count_active(), 10);
        assert_eq!(state.slimes().len(), 10);
        assert!(!state.is_game_over());
    }

    #[test]
    fn key_tap_between_frames_still_fires() {
        let mut state = new_state();
        let mut input = input();

        press(&mut input, KeyCode::Space);
        release(&mut input, KeyCode::Space);
        state.update(Duration::from_secs(0), &input);

        assert_eq!(state.ammo(), 29);
        assert_eq!(state.spells().count_active(), 1);

        // the tap is consumed by that frame
        input.update();
        state.update(Duration::from_secs(0), &input);
        assert_eq!(state.ammo(), 29);
    }

    #[test]
    fn pointer_tap_between_frames_still_fires() {
        let mut state = new_state();
        let mut input = input();

        input.process_mouse(MouseButton::Left, ElementState::Pressed);
        input.process_mouse(MouseButton::Left, ElementState::Released);
        state.update(Duration::from_secs(0), &input);

        assert_eq!(state.ammo(), 29);
        let spell = state.spells().spells().active().next().unwrap();
        assert_eq!(spell.body().velocity.x, 900.0);
    }

    #[test]
    fn touching_a_slime_ends_the_game() {
        let mut state = new_state();
        let mut input = input();
        settle(&mut state, &mut input);

        let center = state.player().body().center();
        let slime_id = state.spawn_slime(center.x);
        state
            .slimes
            .slimes_mut()
            .get_mut(slime_id)
            .unwrap()
            .body_mut()
            .reset(center);

        press(&mut input, KeyCode::ArrowRight);
        state.update(FRAME, &input);
        assert!(state.is_game_over());
        assert!(state.space().is_paused());
        assert!(state.player().is_tinted());
    }

    #[test]
    fn game_over_ignores_input() {
        let mut state = new_state();
        let mut input = input();

        press(&mut input, KeyCode::ArrowRight);
        state.update(Duration::from_secs(0), &input);
        assert_eq!(state.player().body().velocity.x, 160.0);

        state.hit_slime(0);
        assert!(state.is_game_over());

        release(&mut input, KeyCode::ArrowRight);
        input.update();
        press(&mut input, KeyCode::ArrowLeft);
        press(&mut input, KeyCode::ArrowUp);
        press(&mut input, KeyCode::Space);
        let before = *state.player().body();
        for _ in 0..10 {
            state.update(FRAME, &input);
            input.update();
        }
        assert_eq!(*state.player().body(), before);
        assert_eq!(state.ammo(), 30);
        assert_eq!(state.spells().count_active(), 0);
    }

    #[test]
    fn spells_destroy_slimes() {
        let mut state = new_state();
        let mut input = input();

        press(&mut input, KeyCode::Space);
        state.update(Duration::from_secs(0), &input);
        input.update();

        let spell_center = state
            .spells()
            .spells()
            .active()
            .next()
            .unwrap()
            .body()
            .center();
        let slime_id = state.spawn_slime(spell_center.x + 40.0);
        {
            let slime = state.slimes.slimes_mut().get_mut(slime_id).unwrap();
            slime.body_mut().reset(spell_center + vec2(40.0, 0.0));
            slime.body_mut().allow_gravity = false;
        }

        for _ in 0..4 {
            state.update(FRAME, &input);
        }
        assert_eq!(state.slimes().count_active(), 0);
        assert_eq!(state.slimes().len(), 1);
        assert!(!state.is_game_over());
    }

    #[test]
    fn spells_leaving_the_world_return_to_pool() {
        let mut state = new_state();
        let mut input = input();

        press(&mut input, KeyCode::Space);
        state.update(Duration::from_secs(0), &input);
        input.update();
        assert_eq!(state.spells().count_active(), 1);

        // 900px/s clears a 1600px world in under two seconds
        for _ in 0..150 {
            state.update(FRAME, &input);
        }
        assert_eq!(state.spells().count_active(), 0);
    }

    #[test]
    fn camera_follows_player() {
        let mut state = new_state();
        let mut input = input();
        assert_eq!(state.camera().scroll.x, 0.0);

        press(&mut input, KeyCode::ArrowRight);
        for _ in 0..600 {
            state.update(FRAME, &input);
            input.update();
        }
        assert!(state.camera().scroll.x > 0.0);
        assert!(state.camera().scroll.x <= 800.0);
    }

    #[test]
    fn draw_emits_world_quads() {
        let state = new_state();
        let mut quads = vec![];
        state.draw(&mut quads);
        // backdrop, platforms, stars and player at minimum
        assert!(quads.len() > 3 + 8 + 10 + 1);
    }
}
