/// Integer axis-aligned bounding box in world pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> i32 {
        self.x + self.width / 2
    }

    /// Point at the middle of the top edge
    pub fn mid_top(&self) -> (i32, i32) {
        (self.center_x(), self.top())
    }

    pub fn set_mid_top(&mut self, (x, y): (i32, i32)) {
        self.x = x - self.width / 2;
        self.y = y;
    }

    pub fn set_mid_bottom(&mut self, (x, y): (i32, i32)) {
        self.x = x - self.width / 2;
        self.y = y - self.height;
    }

    /// Strict overlap test; rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}
