mod spawn;

use super::*;

impl Model {
    /// Advance the world by one tick.
    ///
    /// Pending events are handled first, then dead moles are replaced,
    /// and only then do the moles run their tick tasks.
    pub fn tick(&mut self) {
        self.dispatch_events();
        if self.is_paused {
            return;
        }
        self.time = self.time + self.config.tick_duration();
        self.reap_moles();
        self.update_moles();
    }

    fn dispatch_events(&mut self) {
        while let Some(event) = self.events.pop_front() {
            match event {
                WorldEvent::Click(position) => self.handle_click(position),
                WorldEvent::Resize(window) => self.handle_resize(window),
            }
        }
    }

    fn handle_click(&mut self, position: vec2<Coord>) {
        if self.is_paused {
            return;
        }
        let window = self.window;
        let mut hits = 0;
        for (_, mole) in &mut self.moles {
            if let Some(hit) = mole.handle_point_event(position, &window) {
                log::debug!("Mole hit at {}", hit.position);
                hits += 1;
            }
        }
        if hits > 0 {
            self.score += hits;
            log::info!("Hit! Score: {}", self.score);
        }
    }

    fn handle_resize(&mut self, window: ScreenBox) {
        let old = self.window;
        if old == window {
            return;
        }
        log::debug!("Window resized from {:?} to {:?}", old.size(), window.size());
        self.window = window;
        for (_, mole) in &mut self.moles {
            mole.on_window_resize(&old, &window, self.time);
        }
    }

    fn update_moles(&mut self) {
        let window = self.window;
        let mut missed = 0;
        for (_, mole) in &mut self.moles {
            if mole.advance(&window, self.time).is_some() {
                missed += 1;
            }
        }
        for _ in 0..missed {
            if self.score > 0 {
                self.score -= 1;
                log::info!("Missed! Score: {}", self.score);
            }
        }
    }
}
