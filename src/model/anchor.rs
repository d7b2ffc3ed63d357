use super::*;

/// A position relative to one of the window corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub kind: AnchorKind,
    /// Distance from `outer_corner`, measured towards the inside of the window.
    pub magnitude: vec2<Coord>,
    /// The corner of the window the magnitude is measured from.
    pub outer_corner: Corner,
    /// The corner of the positioned object this point represents.
    /// `None` means the object's center.
    pub self_corner: Option<Corner>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorKind {
    /// Magnitude in pixels.
    Pixels,
    /// Magnitude as a fraction of the window size.
    Fraction,
}

impl Anchor {
    pub fn pixels(
        magnitude: vec2<Coord>,
        outer_corner: Corner,
        self_corner: Option<Corner>,
    ) -> Self {
        Self {
            kind: AnchorKind::Pixels,
            magnitude,
            outer_corner,
            self_corner,
        }
    }

    pub fn fraction(
        magnitude: vec2<Coord>,
        outer_corner: Corner,
        self_corner: Option<Corner>,
    ) -> Self {
        Self {
            kind: AnchorKind::Fraction,
            magnitude,
            outer_corner,
            self_corner,
        }
    }

    /// Absolute coordinates of the anchor point itself.
    pub fn resolve(&self, window: &ScreenBox) -> vec2<Coord> {
        match self.kind {
            AnchorKind::Pixels => self.resolve_pixels(self.magnitude, window),
            AnchorKind::Fraction => {
                if window.is_empty() {
                    return vec2(window.left(), window.top());
                }
                let pixels = self.magnitude * window.size();
                self.resolve_pixels(pixels, window)
            }
        }
    }

    fn resolve_pixels(&self, pixels: vec2<Coord>, window: &ScreenBox) -> vec2<Coord> {
        let multiplier = self.outer_corner.multiplier();
        let base = vec2(window.left(), window.top()) + multiplier * window.size();
        let offset = vec2(
            if self.outer_corner.is_right() {
                -pixels.x
            } else {
                pixels.x
            },
            if self.outer_corner.is_bottom() {
                -pixels.y
            } else {
                pixels.y
            },
        );
        base + offset
    }

    /// Coordinates of the top-left corner of an object of the given size placed at this anchor.
    pub fn calculate_top_left(&self, window: &ScreenBox, size: vec2<Coord>) -> vec2<Coord> {
        self.find_corner(Corner::TopLeft, window, size)
    }

    pub fn find_corner(
        &self,
        corner: Corner,
        window: &ScreenBox,
        size: vec2<Coord>,
    ) -> vec2<Coord> {
        self.resolve(window) + self.calculate_offset_to_corner(size, corner)
    }

    pub fn calculate_offset_to_corner(&self, size: vec2<Coord>, corner: Corner) -> vec2<Coord> {
        Corner::offset_between(self.self_corner, corner, size)
    }

    /// Resolved positions already track the live window size, so nothing has to change here.
    pub fn on_window_resize(&mut self, _old: vec2<Coord>, _new: vec2<Coord>) {}

    pub fn move_right(&mut self, amount: Coord) {
        if self.outer_corner.is_right() {
            self.magnitude.x -= amount;
        } else {
            self.magnitude.x += amount;
        }
    }

    pub fn move_left(&mut self, amount: Coord) {
        self.move_right(-amount);
    }

    pub fn move_down(&mut self, amount: Coord) {
        if self.outer_corner.is_bottom() {
            self.magnitude.y -= amount;
        } else {
            self.magnitude.y += amount;
        }
    }

    pub fn move_up(&mut self, amount: Coord) {
        self.move_down(-amount);
    }
}
