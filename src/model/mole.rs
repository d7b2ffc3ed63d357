use super::*;

use std::ops::RangeInclusive;

#[derive(Debug, Clone)]
pub struct Mole {
    /// Footprint of the mole's sprite.
    pub size: vec2<Coord>,
    /// Position of the mole's center.
    pub position: Anchor,
    pub velocity: Velocity,
    pub spawned_at: Time,
    pub max_age: Time,
    pub phase: MolePhase,
    /// Run in order every tick while the mole is alive.
    pub tick_tasks: Vec<TickTask>,
    /// Run in order when the mole gets clicked.
    pub click_tasks: Vec<ClickTask>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MolePhase {
    /// Moving in from outside the window, through `edge`, towards `target`.
    Birth { target: Anchor, edge: Edge },
    /// Sitting in the window, or hiding after it got too old.
    Active,
    /// Hit or gone. Waiting to be removed from the world.
    Dead,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickTask {
    /// Apply the velocity to the position.
    Move,
    /// Stop at the spawn point once it is reached.
    FinishBirth,
    /// Start hiding once the mole gets too old.
    CheckAge,
    /// Die after leaving the window.
    CheckOffscreen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTask {
    Whack,
}

/// The mole got out of the window without being hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Missed;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitResult {
    pub position: vec2<Coord>,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SpawnError {
    #[error("an object of size {size:?} does not fit into a window of size {window:?}")]
    TooLarge {
        size: vec2<Coord>,
        window: vec2<Coord>,
    },
}

/// Inclusive integer ranges for the center of an object that has to fit into the window.
pub fn spawn_bounds(
    window: &ScreenBox,
    size: vec2<Coord>,
) -> Result<(RangeInclusive<i64>, RangeInclusive<i64>), SpawnError> {
    let bounds = window.center_bounds(size);
    let x = bounds.left().ceil() as i64..=bounds.right().floor() as i64;
    let y = bounds.top().ceil() as i64..=bounds.bottom().floor() as i64;
    if x.is_empty() || y.is_empty() {
        return Err(SpawnError::TooLarge {
            size,
            window: window.size(),
        });
    }
    Ok((x, y))
}

impl Mole {
    /// Spawn a mole just outside the window edge that is closest to a random spawn point.
    pub fn spawn(
        config: &MoleConfig,
        window: &ScreenBox,
        now: Time,
        rng: &mut dyn RandomSource,
    ) -> Result<Self, SpawnError> {
        let size = config.size();
        let (range_x, range_y) = spawn_bounds(window, size)?;
        let target = vec2(
            rng.gen_inclusive(*range_x.start(), *range_x.end()) as Coord,
            rng.gen_inclusive(*range_y.start(), *range_y.end()) as Coord,
        );

        let edge = window.closest_edge(target);
        let start = edge.outside_position(window, target, size);
        let origin = vec2(window.left(), window.top());

        let mut velocity = Velocity::new(config.speed);
        velocity.shove(-edge.unit_vector());

        log::debug!("Spawning a mole at {target} from the {edge:?} edge");
        Ok(Self {
            size,
            position: Anchor::pixels(start - origin, Corner::TopLeft, None),
            velocity,
            spawned_at: now,
            max_age: config.max_age,
            phase: MolePhase::Birth {
                target: Anchor::pixels(target - origin, Corner::TopLeft, None),
                edge,
            },
            tick_tasks: vec![
                TickTask::Move,
                TickTask::FinishBirth,
                TickTask::CheckAge,
                TickTask::CheckOffscreen,
            ],
            click_tasks: vec![ClickTask::Whack],
        })
    }

    pub fn is_alive(&self) -> bool {
        !matches!(self.phase, MolePhase::Dead)
    }

    pub fn is_birth_phase(&self) -> bool {
        matches!(self.phase, MolePhase::Birth { .. })
    }

    pub fn age(&self, now: Time) -> Time {
        now - self.spawned_at
    }

    pub fn is_expired(&self, now: Time) -> bool {
        self.age(now) >= self.max_age
    }

    pub fn collision_box(&self, window: &ScreenBox) -> ScreenBox {
        let top_left = self.position.calculate_top_left(window, self.size);
        ScreenBox::from_top_left(top_left, self.size)
    }

    pub fn is_within_window(&self, window: &ScreenBox, margin: Coord) -> bool {
        self.collision_box(window).is_inside(window, margin)
    }

    pub fn is_outside_window(&self, window: &ScreenBox) -> bool {
        self.collision_box(window).is_outside(window)
    }

    /// Run one tick of the mole's tick tasks.
    pub fn advance(&mut self, window: &ScreenBox, now: Time) -> Option<Missed> {
        let mut missed = None;
        for i in 0..self.tick_tasks.len() {
            if !self.is_alive() {
                break;
            }
            let task = self.tick_tasks[i];
            if let Some(miss) = self.run_tick_task(task, window, now) {
                missed = Some(miss);
            }
        }
        missed
    }

    fn run_tick_task(&mut self, task: TickTask, window: &ScreenBox, now: Time) -> Option<Missed> {
        match task {
            TickTask::Move => {
                self.velocity.on_tick(&mut self.position);
            }
            TickTask::FinishBirth => {
                let MolePhase::Birth { target, .. } = self.phase else {
                    return None;
                };
                let remaining = target.resolve(window) - self.position.resolve(window);
                let velocity = self.velocity.value;
                if remaining.x * velocity.x + remaining.y * velocity.y <= 0.0 {
                    // Reached or overshot the spawn point
                    self.position = target;
                    self.velocity.stop();
                    self.phase = MolePhase::Active;
                    log::debug!("Mole reached its spawn point");
                }
            }
            TickTask::CheckAge => {
                if self.phase == MolePhase::Active && self.is_expired(now) {
                    let center = self.collision_box(window).center();
                    let edge = window.closest_edge(center);
                    self.velocity.shove(edge.unit_vector());
                }
            }
            TickTask::CheckOffscreen => {
                if !self.is_birth_phase() && self.is_outside_window(window) {
                    log::debug!("Mole left the window");
                    self.phase = MolePhase::Dead;
                    return Some(Missed);
                }
            }
        }
        None
    }

    /// Hit test the point against the mole and run the click tasks on a hit.
    pub fn handle_point_event(
        &mut self,
        point: vec2<Coord>,
        window: &ScreenBox,
    ) -> Option<HitResult> {
        if !self.is_alive() || !self.collision_box(window).intersects_with_point(point) {
            return None;
        }
        for task in &self.click_tasks {
            match task {
                ClickTask::Whack => self.phase = MolePhase::Dead,
            }
        }
        Some(HitResult { position: point })
    }

    /// Keep the mole at the same relative place when the window changes size.
    ///
    /// A mole that is still coming in gets its spawn point remapped into the new
    /// window and keeps its distance from the edge it enters through.
    /// A resting mole keeps its relative position; hiding moles are left alone.
    pub fn on_window_resize(&mut self, old: &ScreenBox, new: &ScreenBox, now: Time) {
        self.position.on_window_resize(old.size(), new.size());
        if let MolePhase::Birth { target, edge } = &mut self.phase {
            target.on_window_resize(old.size(), new.size());
            let (target, edge) = (*target, *edge);
            self.rebirth(target, edge, old, new);
            return;
        }

        if self.phase != MolePhase::Active
            || self.is_expired(now)
            || !self.is_within_window(old, 0.0)
        {
            return;
        }
        let fraction = old
            .center_bounds(self.size)
            .position_fraction(self.collision_box(old).center());
        let target = new.center_bounds(self.size).point_at_fraction(fraction);
        let delta = target - self.collision_box(new).center();
        self.position.move_right(delta.x);
        self.position.move_down(delta.y);
    }

    fn rebirth(&mut self, target: Anchor, edge: Edge, old: &ScreenBox, new: &ScreenBox) {
        let fraction = old
            .center_bounds(self.size)
            .position_fraction(target.resolve(old));
        let target = new.center_bounds(self.size).point_at_fraction(fraction);
        let depth = edge.depth(old, self.position.resolve(old));
        let start = edge.point_at_depth(new, target, depth);

        let origin = vec2(new.left(), new.top());
        self.position = Anchor::pixels(start - origin, Corner::TopLeft, None);
        self.phase = MolePhase::Birth {
            target: Anchor::pixels(target - origin, Corner::TopLeft, None),
            edge,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn window() -> ScreenBox {
        ScreenBox::window(600.0, 400.0)
    }

    fn spawn_at(x: i64, y: i64) -> Mole {
        let mut rng = ScriptedRandom::new([x, y]);
        Mole::spawn(&MoleConfig::default(), &window(), Time::ZERO, &mut rng)
            .expect("a 64x64 mole fits into 600x400")
    }

    /// Tick until the mole leaves the birth phase.
    fn finish_birth(mole: &mut Mole, now: Time) {
        for _ in 0..100 {
            if !mole.is_birth_phase() {
                return;
            }
            assert_eq!(mole.advance(&window(), now), None);
        }
        panic!("birth animation did not finish");
    }

    #[rstest]
    fn spawn_in_the_middle_comes_from_the_top() {
        let mole = spawn_at(300, 200);
        assert!(mole.is_birth_phase());
        assert_eq!(mole.position.resolve(&window()), vec2(300.0, -64.0));
        assert_eq!(mole.velocity.value, vec2(0.0, 20.0));
        assert!(mole.is_outside_window(&window()));
    }

    #[rstest]
    #[case(300, 350, vec2(300.0, 464.0), vec2(0.0, -20.0))]
    #[case(40, 200, vec2(-64.0, 200.0), vec2(20.0, 0.0))]
    #[case(560, 200, vec2(664.0, 200.0), vec2(-20.0, 0.0))]
    fn spawn_starts_behind_the_closest_edge(
        #[case] x: i64,
        #[case] y: i64,
        #[case] start: vec2<Coord>,
        #[case] velocity: vec2<Coord>,
    ) {
        let mole = spawn_at(x, y);
        assert_eq!(mole.position.resolve(&window()), start);
        assert_eq!(mole.velocity.value, velocity);
    }

    #[rstest]
    fn spawn_bounds_keep_the_mole_inside() {
        let (x, y) = spawn_bounds(&window(), vec2(64.0, 64.0)).unwrap();
        assert_eq!(x, 32..=568);
        assert_eq!(y, 32..=368);

        let (x, _) = spawn_bounds(&window(), vec2(65.0, 64.0)).unwrap();
        assert_eq!(x, 33..=567);
    }

    #[rstest]
    fn spawn_fails_when_the_mole_does_not_fit() {
        let tiny = ScreenBox::window(50.0, 400.0);
        let mut rng = ScriptedRandom::new([]);
        let result = Mole::spawn(&MoleConfig::default(), &tiny, Time::ZERO, &mut rng);
        assert!(matches!(result, Err(SpawnError::TooLarge { .. })));
    }

    #[rstest]
    fn birth_stops_at_the_spawn_point() {
        let mut mole = spawn_at(300, 200);
        assert_eq!(mole.advance(&window(), Time::ZERO), None);
        assert_eq!(mole.position.resolve(&window()), vec2(300.0, -44.0));

        finish_birth(&mut mole, Time::ZERO);
        assert_eq!(mole.phase, MolePhase::Active);
        assert_eq!(mole.position.resolve(&window()), vec2(300.0, 200.0));
        assert!(!mole.velocity.is_moving());
        assert!(mole.is_within_window(&window(), 0.0));
    }

    #[rstest]
    fn birth_phase_is_exempt_from_age_and_offscreen_checks() {
        let mut mole = spawn_at(300, 200);
        let late = mole.max_age + r32(10.0);
        // Still outside the window and already too old, but keeps coming in.
        assert_eq!(mole.advance(&window(), late), None);
        assert!(mole.is_alive());
        assert_eq!(mole.velocity.value, vec2(0.0, 20.0));
    }

    #[rstest]
    fn expired_mole_hides_and_counts_as_missed() {
        let mut mole = spawn_at(300, 100);
        finish_birth(&mut mole, Time::ZERO);

        let late = mole.max_age;
        assert_eq!(mole.advance(&window(), late), None);
        assert_eq!(mole.velocity.value, vec2(0.0, -20.0));

        let mut missed = None;
        for _ in 0..100 {
            missed = mole.advance(&window(), late);
            if missed.is_some() {
                break;
            }
        }
        assert_eq!(missed, Some(Missed));
        assert!(!mole.is_alive());
        // Dead moles do nothing.
        assert_eq!(mole.advance(&window(), late), None);
    }

    #[rstest]
    fn resting_mole_stays_put_before_expiring() {
        let mut mole = spawn_at(300, 200);
        finish_birth(&mut mole, Time::ZERO);
        for _ in 0..10 {
            assert_eq!(mole.advance(&window(), r32(0.5)), None);
        }
        assert_eq!(mole.position.resolve(&window()), vec2(300.0, 200.0));
    }

    #[rstest]
    fn click_inside_kills_the_mole() {
        let mut mole = spawn_at(300, 200);
        finish_birth(&mut mole, Time::ZERO);

        assert_eq!(mole.handle_point_event(vec2(100.0, 100.0), &window()), None);
        assert!(mole.is_alive());

        let hit = mole.handle_point_event(vec2(310.0, 190.0), &window());
        assert_eq!(
            hit,
            Some(HitResult {
                position: vec2(310.0, 190.0)
            })
        );
        assert!(!mole.is_alive());

        // Already dead.
        assert_eq!(mole.handle_point_event(vec2(310.0, 190.0), &window()), None);
    }

    #[rstest]
    fn resize_keeps_relative_position() {
        let mut mole = spawn_at(300, 200);
        finish_birth(&mut mole, Time::ZERO);

        let bigger = ScreenBox::window(1200.0, 800.0);
        mole.on_window_resize(&window(), &bigger, Time::ZERO);
        assert_eq!(mole.collision_box(&bigger).center(), vec2(600.0, 400.0));
    }

    #[rstest]
    fn resize_during_birth_lands_inside_the_new_window() {
        let mut mole = spawn_at(560, 200);
        assert_eq!(mole.advance(&window(), Time::ZERO), None);
        assert_eq!(mole.position.resolve(&window()), vec2(644.0, 200.0));

        let narrow = ScreenBox::window(300.0, 400.0);
        mole.on_window_resize(&window(), &narrow, Time::ZERO);
        // Same distance behind the right edge of the narrower window.
        assert_eq!(mole.position.resolve(&narrow).x, 344.0);
        assert_eq!(mole.velocity.value, vec2(-20.0, 0.0));

        for _ in 0..100 {
            if !mole.is_birth_phase() {
                break;
            }
            assert_eq!(mole.advance(&narrow, Time::ZERO), None);
        }
        assert_eq!(mole.phase, MolePhase::Active);
        assert!(mole.is_within_window(&narrow, 0.0));
        assert_eq!(mole.advance(&narrow, Time::ZERO), None);
        assert!(mole.is_alive());
    }

    #[rstest]
    fn resize_during_birth_keeps_the_mole_behind_its_edge() {
        let mut mole = spawn_at(300, 350);
        let tall = ScreenBox::window(600.0, 1080.0);
        mole.on_window_resize(&window(), &tall, Time::ZERO);

        assert_eq!(mole.position.resolve(&tall), vec2(300.0, 1144.0));
        assert!(mole.is_outside_window(&tall));
        let MolePhase::Birth { target, edge } = mole.phase else {
            panic!("still in birth");
        };
        assert_eq!(edge, Edge::Bottom);
        let top_left = target.calculate_top_left(&tall, mole.size);
        assert!(ScreenBox::from_top_left(top_left, mole.size).is_inside(&tall, 0.0));
    }

    #[rstest]
    fn resize_does_not_touch_hiding_moles() {
        let mut mole = spawn_at(300, 100);
        finish_birth(&mut mole, Time::ZERO);
        let late = mole.max_age;
        assert_eq!(mole.advance(&window(), late), None);

        let before = mole.position;
        mole.on_window_resize(&window(), &ScreenBox::window(1200.0, 800.0), late);
        assert_eq!(mole.position, before);
    }
}
