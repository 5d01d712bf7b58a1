use color_eyre::eyre::{Result, ensure};

use crate::entities::Heading;

/// Plain RGB triple, kept free of any rendering backend types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Static game configuration. All distances are in world pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub title: &'static str,
    pub screen_width: i32,
    pub screen_height: i32,
    pub bg_color: Rgb,
    pub frame_rate: u32,

    pub ship_speed: f32,
    pub ship_width: i32,
    pub ship_height: i32,
    pub ship_color: Rgb,

    pub bullet_speed: f32,
    pub bullet_width: i32,
    pub bullet_height: i32,
    pub bullet_color: Rgb,
    pub bullets_allowed: usize,

    pub alien_speed: f32,
    pub alien_width: i32,
    pub alien_height: i32,
    pub alien_color: Rgb,
    pub fleet_drop_speed: i32,
    /// Direction a freshly created game's fleet starts out moving in
    pub fleet_direction: Heading,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "Alien Invasion",
            screen_width: 1200,
            screen_height: 800,
            bg_color: Rgb(230, 230, 230),
            frame_rate: 60,

            ship_speed: 1.5,
            ship_width: 60,
            ship_height: 48,
            ship_color: Rgb(40, 90, 160),

            bullet_speed: 2.5,
            bullet_width: 3,
            bullet_height: 15,
            bullet_color: Rgb(60, 60, 60),
            bullets_allowed: 3,

            alien_speed: 1.0,
            alien_width: 40,
            alien_height: 40,
            alien_color: Rgb(60, 160, 60),
            fleet_drop_speed: 10,
            fleet_direction: Heading::Right,
        }
    }
}

impl Settings {
    /// Rejects configurations the update loop cannot make sense of
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.screen_width > 0 && self.screen_height > 0,
            "screen must have a positive size, got {}x{}",
            self.screen_width,
            self.screen_height
        );
        ensure!(
            self.ship_width > 0 && self.ship_height > 0,
            "ship must have a positive size"
        );
        ensure!(
            self.ship_width <= self.screen_width,
            "ship ({}) is wider than the screen ({})",
            self.ship_width,
            self.screen_width
        );
        ensure!(
            self.bullet_width > 0 && self.bullet_height > 0,
            "bullet must have a positive size"
        );
        ensure!(
            self.alien_width > 0 && self.alien_height > 0,
            "alien must have a positive size"
        );
        ensure!(self.ship_speed > 0.0, "ship speed must be positive");
        ensure!(self.bullet_speed > 0.0, "bullet speed must be positive");
        ensure!(self.alien_speed > 0.0, "alien speed must be positive");
        ensure!(self.bullets_allowed > 0, "at least one bullet must be allowed");
        ensure!(self.frame_rate > 0, "frame rate must be positive");
        Ok(())
    }
}
