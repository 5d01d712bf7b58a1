use super::rect::Rect;
use crate::settings::Settings;

#[derive(Debug, Clone)]
pub struct Ship {
    /// Horizontal position kept as a float so fractional speeds accumulate
    pub x: f32,
    pub rect: Rect,
    pub moving_left: bool,
    pub moving_right: bool,
}

impl Ship {
    /// Places a new ship at the bottom center of the screen
    pub fn new(settings: &Settings) -> Self {
        let mut rect = Rect::new(0, 0, settings.ship_width, settings.ship_height);
        rect.set_mid_bottom((settings.screen_width / 2, settings.screen_height));

        Self {
            x: rect.x as f32,
            rect,
            moving_left: false,
            moving_right: false,
        }
    }

    pub fn max_x(&self, screen_width: i32) -> f32 {
        (screen_width - self.rect.width).max(0) as f32
    }

    pub fn move_left(&mut self, speed: f32) {
        if self.x > 0.0 {
            self.x = (self.x - speed).max(0.0);
        }
    }

    pub fn move_right(&mut self, speed: f32, screen_width: i32) {
        let max_x = self.max_x(screen_width);
        if self.x < max_x {
            self.x = (self.x + speed).min(max_x);
        }
    }

    /// Applies the current intent flags for one tick and resyncs the rect
    pub fn update(&mut self, settings: &Settings) {
        if self.moving_right {
            self.move_right(settings.ship_speed, settings.screen_width);
        }
        if self.moving_left {
            self.move_left(settings.ship_speed);
        }
        self.rect.x = self.x.floor() as i32;
    }

    pub fn set_intent(&mut self, left: bool, right: bool) {
        self.moving_left = left;
        self.moving_right = right;
    }
}
