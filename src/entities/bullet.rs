use super::rect::Rect;
use super::ship::Ship;
use crate::settings::Settings;

#[derive(Debug, Clone)]
pub struct Bullet {
    /// Vertical position as a float, the rect follows it each tick
    pub y: f32,
    pub rect: Rect,
}

impl Bullet {
    /// Creates a bullet whose top edge sits at the ship's top center
    pub fn new(ship: &Ship, settings: &Settings) -> Self {
        let mut rect = Rect::new(0, 0, settings.bullet_width, settings.bullet_height);
        rect.set_mid_top(ship.rect.mid_top());

        Self {
            y: rect.y as f32,
            rect,
        }
    }

    pub fn update(&mut self, speed: f32) {
        self.y -= speed;
        self.rect.y = self.y.floor() as i32;
    }

    /// True once the bullet has fully left the top of the screen.
    ///
    /// The removal tick is `ceil((y0 + height) / speed)` when the speed is
    /// exact in binary (2.5, 0.25, ...). Other speeds accumulate `f32`
    /// rounding and can land one tick either side.
    pub fn is_off_screen(&self) -> bool {
        self.y + self.rect.height as f32 <= 0.0
    }
}
