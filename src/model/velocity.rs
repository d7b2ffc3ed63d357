use super::*;

/// Per-tick displacement of the anchor it is applied to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Velocity {
    /// Pixels per tick, in screen directions.
    pub value: vec2<Coord>,
    pub base_speed: Coord,
}

impl Velocity {
    pub fn new(base_speed: Coord) -> Self {
        Self {
            value: vec2::ZERO,
            base_speed,
        }
    }

    pub fn on_tick(&self, anchor: &mut Anchor) {
        // Negative values move left and up.
        anchor.move_right(self.value.x);
        anchor.move_down(self.value.y);
    }

    pub fn shove_x(&mut self, multiplier: Coord) {
        self.value.x = self.base_speed * multiplier;
    }

    pub fn shove_y(&mut self, multiplier: Coord) {
        self.value.y = self.base_speed * multiplier;
    }

    /// Shove along both axes at once.
    pub fn shove(&mut self, direction: vec2<Coord>) {
        self.shove_x(direction.x);
        self.shove_y(direction.y);
    }

    pub fn stop(&mut self) {
        self.value = vec2::ZERO;
    }

    #[cfg(test)]
    pub fn is_moving(&self) -> bool {
        self.value != vec2::ZERO
    }
}
