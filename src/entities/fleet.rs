use super::alien::Alien;
use crate::settings::Settings;

/// Shared horizontal direction of the whole fleet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    Left,
    Right,
}

impl Heading {
    pub fn sign(self) -> f32 {
        match self {
            Heading::Left => -1.0,
            Heading::Right => 1.0,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Fleet {
    pub aliens: Vec<Alien>,
    pub heading: Heading,
}

impl Fleet {
    /// Creates a full fleet heading in the configured starting direction
    pub fn new(settings: &Settings) -> Self {
        Self {
            aliens: create_aliens(settings),
            heading: settings.fleet_direction,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.aliens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.aliens.len()
    }

    /// Replaces whatever is left with a fresh grid. The heading is kept.
    pub fn respawn(&mut self, settings: &Settings) {
        self.aliens = create_aliens(settings);
    }

    pub fn at_edge(&self, screen_width: i32) -> bool {
        self.aliens
            .iter()
            .any(|alien| alien.at_edge(self.heading, screen_width))
    }

    /// Drops every alien one step and reverses the shared heading
    pub fn change_direction(&mut self, drop_step: i32) {
        for alien in &mut self.aliens {
            alien.drop_by(drop_step);
        }
        self.heading = self.heading.reversed();
    }

    /// One tick of fleet motion: bounce off an edge if needed, then slide
    pub fn update(&mut self, settings: &Settings) {
        if self.at_edge(settings.screen_width) {
            self.change_direction(settings.fleet_drop_speed);
        }
        for alien in &mut self.aliens {
            alien.advance(settings.alien_speed, self.heading);
        }
    }
}

/// Number of (columns, rows) that fit on screen with one-alien spacing
pub fn grid_shape(settings: &Settings) -> (usize, usize) {
    let w = settings.alien_width;
    let h = settings.alien_height;

    let available_x = settings.screen_width - 2 * w;
    let available_y = settings.screen_height - 3 * h - settings.ship_height;

    let columns = (available_x / (2 * w)).max(0) as usize;
    let rows = (available_y / (2 * h)).max(0) as usize;
    (columns, rows)
}

/// Lays aliens out row by row, left to right, top to bottom
pub fn create_aliens(settings: &Settings) -> Vec<Alien> {
    let (columns, rows) = grid_shape(settings);
    let w = settings.alien_width;
    let h = settings.alien_height;

    let mut aliens = Vec::with_capacity(columns * rows);
    for row in 0..rows as i32 {
        for column in 0..columns as i32 {
            let x = w + 2 * w * column;
            let y = h + 2 * h * row;
            aliens.push(Alien::new(x, y, w, h));
        }
    }
    aliens
}
