use super::*;

impl Model {
    /// Remove dead moles and make sure there is a live current mole.
    pub(super) fn reap_moles(&mut self) {
        self.moles.retain(|_, mole| mole.is_alive());
        if let Some(id) = self.current_mole {
            if !self.moles.contains(id) {
                self.current_mole = None;
            }
        }
        if self.current_mole.is_none() {
            self.spawn_mole();
        }
    }

    fn spawn_mole(&mut self) {
        match Mole::spawn(&self.config.mole, &self.window, self.time, self.rng.as_mut()) {
            Ok(mole) => {
                self.current_mole = Some(self.moles.insert(mole));
            }
            Err(err) => {
                // Try again once the window is large enough
                log::warn!("Could not spawn a mole: {}", err);
            }
        }
    }
}
