use super::*;

/// An axis-aligned box in screen coordinates (y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenBox {
    pub x1: Coord,
    pub y1: Coord,
    pub x2: Coord,
    pub y2: Coord,
}

/// A corner of a box, stored as one bit per axis:
/// `1` on x means the right side, `1` on y means the bottom side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl ScreenBox {
    pub fn new(x1: Coord, y1: Coord, x2: Coord, y2: Coord) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// A box with its top-left corner at `top_left`.
    pub fn from_top_left(top_left: vec2<Coord>, size: vec2<Coord>) -> Self {
        Self::new(
            top_left.x,
            top_left.y,
            top_left.x + size.x,
            top_left.y + size.y,
        )
    }

    /// The box covering a window of the given size.
    pub fn window(width: Coord, height: Coord) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn left(&self) -> Coord {
        self.x1
    }

    pub fn top(&self) -> Coord {
        self.y1
    }

    pub fn right(&self) -> Coord {
        self.x2
    }

    pub fn bottom(&self) -> Coord {
        self.y2
    }

    pub fn width(&self) -> Coord {
        self.x2 - self.x1
    }

    pub fn height(&self) -> Coord {
        self.y2 - self.y1
    }

    pub fn size(&self) -> vec2<Coord> {
        vec2(self.width(), self.height())
    }

    pub fn center(&self) -> vec2<Coord> {
        vec2(
            self.left() + self.width() / 2.0,
            self.top() + self.height() / 2.0,
        )
    }

    /// Whether every edge of `self` is within `margin` of the matching edge of `outer`.
    /// A negative margin requires the box to be that far inside.
    pub fn is_inside(&self, outer: &ScreenBox, margin: Coord) -> bool {
        let within_x =
            outer.left() - self.left() <= margin && self.right() - outer.right() <= margin;
        let within_y =
            outer.top() - self.top() <= margin && self.bottom() - outer.bottom() <= margin;
        within_x && within_y
    }

    /// Whether the boxes are separated on at least one axis.
    pub fn is_outside(&self, other: &ScreenBox) -> bool {
        let outside_x = self.right() < other.left() || self.left() > other.right();
        let outside_y = self.bottom() < other.top() || self.top() > other.bottom();
        outside_x || outside_y
    }

    /// Inclusive point test.
    pub fn intersects_with_point(&self, point: vec2<Coord>) -> bool {
        (self.left()..=self.right()).contains(&point.x)
            && (self.top()..=self.bottom()).contains(&point.y)
    }

    /// The box of possible center positions for an object of the given size
    /// that stays completely inside `self`.
    pub fn center_bounds(&self, size: vec2<Coord>) -> ScreenBox {
        let padding = size / 2.0;
        Self::new(
            self.left() + padding.x,
            self.top() + padding.y,
            self.right() - padding.x,
            self.bottom() - padding.y,
        )
    }

    /// Position of the point relative to the box, scaled to `0..=1` on each axis.
    /// An axis with no extent maps to the middle.
    pub fn position_fraction(&self, point: vec2<Coord>) -> vec2<Coord> {
        let fraction = |value: Coord, start: Coord, extent: Coord| {
            if extent.abs() <= Coord::EPSILON {
                0.5
            } else {
                (value - start) / extent
            }
        };
        vec2(
            fraction(point.x, self.left(), self.width()),
            fraction(point.y, self.top(), self.height()),
        )
    }

    /// The inverse of [`Self::position_fraction`].
    pub fn point_at_fraction(&self, fraction: vec2<Coord>) -> vec2<Coord> {
        vec2(
            self.left() + self.width() * fraction.x,
            self.top() + self.height() * fraction.y,
        )
    }

    /// The window edge closest to `point`.
    /// Ties go to the first edge in the order top, bottom, left, right.
    pub fn closest_edge(&self, point: vec2<Coord>) -> Edge {
        let distances = [
            (Edge::Top, (point.y - self.top()).abs()),
            (Edge::Bottom, (self.bottom() - point.y).abs()),
            (Edge::Left, (point.x - self.left()).abs()),
            (Edge::Right, (self.right() - point.x).abs()),
        ];
        let mut closest = distances[0];
        for candidate in &distances[1..] {
            if candidate.1 < closest.1 {
                closest = *candidate;
            }
        }
        closest.0
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }
}

impl Corner {
    #[cfg(test)]
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    pub fn bits(self) -> vec2<u8> {
        match self {
            Self::TopLeft => vec2(0, 0),
            Self::TopRight => vec2(1, 0),
            Self::BottomLeft => vec2(0, 1),
            Self::BottomRight => vec2(1, 1),
        }
    }

    pub fn multiplier(self) -> vec2<Coord> {
        self.bits().map(Coord::from)
    }

    pub fn is_right(self) -> bool {
        self.bits().x == 1
    }

    pub fn is_bottom(self) -> bool {
        self.bits().y == 1
    }

    /// Offset from `from` (or the center, if `None`) to `to` on an object of the given size.
    pub fn offset_between(from: Option<Corner>, to: Corner, size: vec2<Coord>) -> vec2<Coord> {
        let Some(from) = from else {
            let direction = to.multiplier() * 2.0 - vec2(1.0, 1.0);
            return direction * size / 2.0;
        };
        if from == to {
            return vec2::ZERO;
        }
        (to.multiplier() - from.multiplier()) * size
    }
}

impl Edge {
    pub fn unit_vector(self) -> vec2<Coord> {
        match self {
            Self::Top => vec2(0.0, -1.0),
            Self::Bottom => vec2(0.0, 1.0),
            Self::Left => vec2(-1.0, 0.0),
            Self::Right => vec2(1.0, 0.0),
        }
    }

    /// Position just beyond this edge of the window for an object of the given size.
    /// Only the axis perpendicular to the edge is changed.
    pub fn outside_position(
        self,
        window: &ScreenBox,
        point: vec2<Coord>,
        size: vec2<Coord>,
    ) -> vec2<Coord> {
        match self {
            Self::Top => vec2(point.x, window.top() - size.y),
            Self::Bottom => vec2(point.x, window.bottom() + size.y),
            Self::Left => vec2(window.left() - size.x, point.y),
            Self::Right => vec2(window.right() + size.x, point.y),
        }
    }

    /// Signed distance of the point from this edge, positive towards the inside of the window.
    pub fn depth(self, window: &ScreenBox, point: vec2<Coord>) -> Coord {
        match self {
            Self::Top => point.y - window.top(),
            Self::Bottom => window.bottom() - point.y,
            Self::Left => point.x - window.left(),
            Self::Right => window.right() - point.x,
        }
    }

    /// Point at the given [`depth`](Self::depth) from this edge.
    /// The axis parallel to the edge is taken from `point`.
    pub fn point_at_depth(
        self,
        window: &ScreenBox,
        point: vec2<Coord>,
        depth: Coord,
    ) -> vec2<Coord> {
        match self {
            Self::Top => vec2(point.x, window.top() + depth),
            Self::Bottom => vec2(point.x, window.bottom() - depth),
            Self::Left => vec2(window.left() + depth, point.y),
            Self::Right => vec2(window.right() - depth, point.y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn box_is_inside_itself() {
        let boxes = [
            ScreenBox::new(0.0, 0.0, 600.0, 400.0),
            ScreenBox::new(-10.0, 5.0, 20.0, 5.0),
            ScreenBox::new(3.0, 3.0, 3.0, 3.0),
        ];
        for b in boxes {
            assert!(b.is_inside(&b, 0.0), "{b:?} should contain itself");
        }
    }

    #[rstest]
    fn margin_loosens_and_tightens_containment() {
        let window = ScreenBox::window(100.0, 100.0);
        let poking_out = ScreenBox::new(-5.0, 10.0, 20.0, 30.0);
        assert!(!poking_out.is_inside(&window, 0.0));
        assert!(poking_out.is_inside(&window, 5.0));

        let inner = ScreenBox::new(5.0, 5.0, 95.0, 95.0);
        assert!(inner.is_inside(&window, -5.0));
        assert!(!inner.is_inside(&window, -6.0));
    }

    #[rstest]
    fn inside_and_outside_are_not_complements() {
        let window = ScreenBox::window(100.0, 100.0);
        let overlapping = ScreenBox::new(80.0, 80.0, 120.0, 120.0);
        assert!(!overlapping.is_inside(&window, 0.0));
        assert!(!overlapping.is_outside(&window));
    }

    #[rstest]
    #[case(ScreenBox::new(-50.0, 10.0, -1.0, 20.0), true)]
    #[case(ScreenBox::new(10.0, 101.0, 20.0, 150.0), true)]
    #[case(ScreenBox::new(-50.0, 10.0, 0.0, 20.0), false)]
    #[case(ScreenBox::new(10.0, 10.0, 20.0, 20.0), false)]
    fn separating_axis(#[case] b: ScreenBox, #[case] outside: bool) {
        let window = ScreenBox::window(100.0, 100.0);
        assert_eq!(b.is_outside(&window), outside);
    }

    #[rstest]
    #[case(vec2(10.0, 10.0), true)]
    #[case(vec2(20.0, 30.0), true)]
    #[case(vec2(15.0, 20.0), true)]
    #[case(vec2(20.1, 20.0), false)]
    #[case(vec2(15.0, 9.9), false)]
    fn point_test_is_inclusive(#[case] point: vec2<Coord>, #[case] hit: bool) {
        let b = ScreenBox::new(10.0, 10.0, 20.0, 30.0);
        assert_eq!(b.intersects_with_point(point), hit);
    }

    #[rstest]
    fn center_of_box() {
        let b = ScreenBox::new(10.0, 20.0, 30.0, 60.0);
        assert_eq!(b.center(), vec2(20.0, 40.0));
    }

    #[rstest]
    fn offset_to_same_corner_is_zero() {
        for corner in Corner::ALL {
            let offset = Corner::offset_between(Some(corner), corner, vec2(64.0, 32.0));
            assert_eq!(offset, vec2::ZERO);
        }
    }

    #[rstest]
    fn offset_between_corners_is_antisymmetric() {
        for size in [vec2(0.0, 0.0), vec2(64.0, 32.0), vec2(7.5, 100.0)] {
            for a in Corner::ALL {
                for b in Corner::ALL {
                    let there = Corner::offset_between(Some(a), b, size);
                    let back = Corner::offset_between(Some(b), a, size);
                    assert_eq!(there, -back, "{a:?} <-> {b:?} with size {size:?}");
                }
            }
        }
    }

    #[rstest]
    #[case(Corner::TopLeft, vec2(-32.0, -16.0))]
    #[case(Corner::TopRight, vec2(32.0, -16.0))]
    #[case(Corner::BottomLeft, vec2(-32.0, 16.0))]
    #[case(Corner::BottomRight, vec2(32.0, 16.0))]
    fn offset_from_center(#[case] to: Corner, #[case] expected: vec2<Coord>) {
        assert_eq!(Corner::offset_between(None, to, vec2(64.0, 32.0)), expected);
    }

    #[rstest]
    #[case(vec2(300.0, 200.0), Edge::Top)]
    #[case(vec2(300.0, 390.0), Edge::Bottom)]
    #[case(vec2(5.0, 200.0), Edge::Left)]
    #[case(vec2(590.0, 200.0), Edge::Right)]
    #[case(vec2(10.0, 10.0), Edge::Top)]
    #[case(vec2(590.0, 390.0), Edge::Bottom)]
    fn closest_edge_with_tie_break(#[case] point: vec2<Coord>, #[case] edge: Edge) {
        let window = ScreenBox::window(600.0, 400.0);
        assert_eq!(window.closest_edge(point), edge);
    }

    #[rstest]
    #[case(Edge::Top, vec2(300.0, -44.0), vec2(600.0, -44.0))]
    #[case(Edge::Bottom, vec2(300.0, 464.0), vec2(600.0, 864.0))]
    #[case(Edge::Left, vec2(10.0, 200.0), vec2(10.0, 400.0))]
    #[case(Edge::Right, vec2(644.0, 200.0), vec2(1244.0, 400.0))]
    fn depth_is_kept_across_windows(
        #[case] edge: Edge,
        #[case] point: vec2<Coord>,
        #[case] moved: vec2<Coord>,
    ) {
        let old = ScreenBox::window(600.0, 400.0);
        let new = ScreenBox::window(1200.0, 800.0);
        let depth = edge.depth(&old, point);
        assert_eq!(edge.point_at_depth(&new, vec2(600.0, 400.0), depth), moved);
    }

    #[rstest]
    fn fraction_of_degenerate_box_does_not_divide_by_zero() {
        let flat = ScreenBox::new(10.0, 10.0, 10.0, 50.0);
        let fraction = flat.position_fraction(vec2(10.0, 30.0));
        assert_eq!(fraction, vec2(0.5, 0.5));
    }

    #[rstest]
    fn fraction_maps_between_boxes() {
        let old = ScreenBox::window(600.0, 400.0).center_bounds(vec2(64.0, 64.0));
        let new = ScreenBox::window(1200.0, 800.0).center_bounds(vec2(64.0, 64.0));
        let fraction = old.position_fraction(old.center());
        assert_eq!(new.point_at_fraction(fraction), new.center());
    }
}
