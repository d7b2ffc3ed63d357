use geng::Key;

use crate::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Pause,
    ShowCollisionBoxes,
}

/// Handlers for an action: one runs on press, the optional other on release of the same key.
pub struct ActionHandler<T> {
    pub press: fn(&mut T),
    pub release: Option<fn(&mut T)>,
}

/// Maps keys to actions and actions to their handlers.
pub struct Controls<T> {
    bindings: HashMap<Key, Action>,
    handlers: HashMap<Action, ActionHandler<T>>,
    /// Release handlers of the keys that are currently held down.
    pending_release: HashMap<Key, fn(&mut T)>,
}

impl<T> Default for Controls<T> {
    fn default() -> Self {
        Self {
            bindings: HashMap::new(),
            handlers: HashMap::new(),
            pending_release: HashMap::new(),
        }
    }
}

impl<T> Controls<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&mut self, key: Key, action: Action) {
        self.bindings.insert(key, action);
    }

    pub fn on_action(&mut self, action: Action, press: fn(&mut T), release: Option<fn(&mut T)>) {
        self.handlers.insert(action, ActionHandler { press, release });
    }

    /// Returns whether the key triggered an action.
    pub fn key_press(&mut self, key: Key, target: &mut T) -> bool {
        let Some(action) = self.bindings.get(&key) else {
            return false;
        };
        let Some(handler) = self.handlers.get(action) else {
            log::debug!("No handler registered for {:?}", action);
            return false;
        };
        (handler.press)(target);
        if let Some(release) = handler.release {
            self.pending_release.insert(key, release);
        }
        true
    }

    /// Runs the release handler stored by the matching press, if any.
    pub fn key_release(&mut self, key: Key, target: &mut T) {
        if let Some(release) = self.pending_release.remove(&key) {
            release(target);
        }
    }
}

impl Controls<Model> {
    pub fn default_for_model() -> Self {
        let mut controls = Self::new();
        controls.bind(Key::P, Action::Pause);
        controls.bind(Key::Tab, Action::ShowCollisionBoxes);
        controls.on_action(Action::Pause, Model::toggle_pause, None);
        controls.on_action(
            Action::ShowCollisionBoxes,
            |model: &mut Model| model.show_collision_boxes = true,
            Some(|model: &mut Model| model.show_collision_boxes = false),
        );
        controls
    }
}
