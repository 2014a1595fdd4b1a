/// A position in normalized device space.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Per-coordinate arithmetic mean of `a` and `b`.
    #[inline]
    pub fn midpoint(a: Point, b: Point) -> Point {
        Point {
            x: (a.x + b.x) / 2.0,
            y: (a.y + b.y) / 2.0,
            z: (a.z + b.z) / 2.0,
        }
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f32; 3]> for Point {
    #[inline]
    fn from(v: [f32; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

/// Three corners of a triangle, in emission order.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Triangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
}

impl Triangle {
    #[inline]
    pub const fn new(a: Point, b: Point, c: Point) -> Self {
        Self { a, b, c }
    }

    /// The three corner sub-triangles, ordered a-side, b-side, c-side.
    ///
    /// Each child keeps one corner of `self` and the midpoints of the two edges
    /// touching it.
    pub fn children(self) -> [Triangle; 3] {
        let ab = Point::midpoint(self.a, self.b);
        let ac = Point::midpoint(self.a, self.c);
        let bc = Point::midpoint(self.b, self.c);

        [
            Triangle::new(self.a, ab, ac),
            Triangle::new(self.b, ab, bc),
            Triangle::new(self.c, ac, bc),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32, z: f32) -> Point { Point::new(x, y, z) }

    // ── midpoint ──────────────────────────────────────────────────────────

    #[test]
    fn midpoint_of_same_point_is_identity() {
        let a = p(0.3, -0.7, 0.25);
        assert_eq!(Point::midpoint(a, a), a);
    }

    #[test]
    fn midpoint_averages_each_coordinate() {
        let m = Point::midpoint(p(-1.0, 0.0, 2.0), p(1.0, 1.0, -2.0));
        assert_eq!(m, p(0.0, 0.5, 0.0));
    }

    #[test]
    fn midpoint_is_symmetric() {
        let a = p(-0.5, -0.5, 0.0);
        let b = p(0.0, 0.5, 0.0);
        assert_eq!(Point::midpoint(a, b), Point::midpoint(b, a));
    }

    // ── children ──────────────────────────────────────────────────────────

    #[test]
    fn children_keep_one_corner_each_in_order() {
        let t = Triangle::new(p(-0.5, -0.5, 0.0), p(0.0, 0.5, 0.0), p(0.5, -0.5, 0.0));
        let [ca, cb, cc] = t.children();
        assert_eq!(ca.a, t.a);
        assert_eq!(cb.a, t.b);
        assert_eq!(cc.a, t.c);
    }

    #[test]
    fn children_share_edge_midpoints() {
        let t = Triangle::new(p(-0.5, -0.5, 0.0), p(0.0, 0.5, 0.0), p(0.5, -0.5, 0.0));
        let [ca, cb, cc] = t.children();
        assert_eq!(ca.b, p(-0.25, 0.0, 0.0)); // ab
        assert_eq!(ca.c, p(0.0, -0.5, 0.0));  // ac
        assert_eq!(cb.b, ca.b);
        assert_eq!(cb.c, p(0.25, 0.0, 0.0));  // bc
        assert_eq!(cc.b, ca.c);
        assert_eq!(cc.c, cb.c);
    }
}
