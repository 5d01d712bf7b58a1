use super::fleet::Heading;
use super::rect::Rect;

#[derive(Debug, Clone)]
pub struct Alien {
    /// Horizontal position as a float so slow fleets still creep along
    pub x: f32,
    pub rect: Rect,
}

impl Alien {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x: x as f32,
            rect: Rect::new(x, y, width, height),
        }
    }

    /// Whether this alien touches the screen edge it is heading towards
    pub fn at_edge(&self, heading: Heading, screen_width: i32) -> bool {
        match heading {
            Heading::Left => self.rect.left() <= 0,
            Heading::Right => self.rect.right() >= screen_width,
        }
    }

    pub fn advance(&mut self, speed: f32, heading: Heading) {
        self.x += speed * heading.sign();
        self.rect.x = self.x.floor() as i32;
    }

    pub fn drop_by(&mut self, step: i32) {
        self.rect.y += step;
    }
}
