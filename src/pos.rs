use std::ops;

/// A point in domain coordinates. `x` grows east, `y` grows south.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pos {
    pub x: f64,
    pub y: f64,
}

impl Pos {
    pub const ZERO: Self = Self { x: 0., y: 0. };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn dist2(self, other: Pos) -> f64 {
        (self - other).dist2()
    }

    /// `self + t * (other - self)`
    pub fn lerp(self, other: Pos, t: f64) -> Self {
        self + (other - self) * t
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PosOffset {
    pub dx: f64,
    pub dy: f64,
}

impl PosOffset {
    pub const ZERO: Self = Self { dx: 0., dy: 0. };

    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    pub fn dist2(self) -> f64 {
        self.dx * self.dx + self.dy * self.dy
    }
}

impl ops::Add<PosOffset> for Pos {
    type Output = Self;

    fn add(self, rhs: PosOffset) -> Self::Output {
        Self::new(self.x + rhs.dx, self.y + rhs.dy)
    }
}

impl ops::AddAssign<PosOffset> for Pos {
    fn add_assign(&mut self, rhs: PosOffset) {
        self.x += rhs.dx;
        self.y += rhs.dy;
    }
}

impl ops::Sub<Pos> for Pos {
    type Output = PosOffset;

    fn sub(self, rhs: Pos) -> Self::Output {
        PosOffset::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl ops::Mul<f64> for PosOffset {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.dx * rhs, self.dy * rhs)
    }
}
