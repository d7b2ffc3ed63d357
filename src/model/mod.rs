mod anchor;
mod geometry;
mod logic;
mod mole;
mod random;
mod velocity;

pub use self::{anchor::*, geometry::*, mole::*, random::*, velocity::*};

use crate::prelude::*;

use std::collections::VecDeque;

pub type Time = R32;
pub type Coord = f32;
pub type Score = u64;

pub struct Model {
    pub config: Config,
    /// The current window, updated through [`WorldEvent::Resize`].
    pub window: ScreenBox,
    /// Simulation time, advanced by one tick duration every unpaused tick.
    pub time: Time,
    pub score: Score,
    pub is_paused: bool,
    pub show_collision_boxes: bool,
    pub moles: Arena<Mole>,
    /// The one mole the player is supposed to hit.
    pub current_mole: Option<Id>,
    events: VecDeque<WorldEvent>,
    rng: Box<dyn RandomSource>,
}

/// Input collected by the host between ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorldEvent {
    /// Pointer released at a position in screen coordinates.
    Click(vec2<Coord>),
    /// The window changed to the given box.
    Resize(ScreenBox),
}

impl Model {
    pub fn new(config: Config) -> Self {
        Self::with_random(config, Box::new(ThreadRandom))
    }

    pub fn with_random(config: Config, rng: Box<dyn RandomSource>) -> Self {
        let (width, height) = config.initial_window;
        Self {
            window: ScreenBox::window(width, height),
            config,
            time: Time::ZERO,
            score: 0,
            is_paused: false,
            show_collision_boxes: false,
            moles: Arena::new(),
            current_mole: None,
            events: VecDeque::new(),
            rng,
        }
    }

    /// Queue an event to be handled at the start of the next tick.
    pub fn push_event(&mut self, event: WorldEvent) {
        self.events.push_back(event);
    }

    pub fn toggle_pause(&mut self) {
        self.is_paused = !self.is_paused;
        log::debug!("Paused: {}", self.is_paused);
    }
}
