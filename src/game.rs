//! Per-tick simulation: the game context and the free functions that advance it.

use crate::entities::{Alien, Bullet, Fleet, Ship};
use crate::settings::Settings;

/// What happened during a single update, mostly for logging and tests
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub aliens_destroyed: usize,
    pub fleet_respawned: bool,
}

/// Everything the update and render passes operate on
#[derive(Debug, Clone)]
pub struct Game {
    pub settings: Settings,
    pub ship: Ship,
    pub bullets: Vec<Bullet>,
    pub fleet: Fleet,
}

impl Game {
    pub fn new(settings: Settings) -> Self {
        let ship = Ship::new(&settings);
        let fleet = Fleet::new(&settings);
        log::debug!("spawned fleet of {} aliens", fleet.len());

        Self {
            settings,
            ship,
            bullets: Vec::new(),
            fleet,
        }
    }

    /// Fires a bullet from the ship if the limit allows it
    pub fn fire(&mut self) -> bool {
        fire_bullet(&mut self.bullets, &self.ship, &self.settings)
    }

    /// Advances the world by one tick. Input must already be applied.
    pub fn update(&mut self) -> TickReport {
        self.ship.update(&self.settings);
        update_bullets(&mut self.bullets, &self.settings);
        self.fleet.update(&self.settings);

        let aliens_destroyed = resolve_collisions(&mut self.bullets, &mut self.fleet.aliens);
        let fleet_respawned =
            respawn_if_cleared(&mut self.bullets, &mut self.fleet, &self.settings);
        if fleet_respawned {
            log::info!("fleet cleared, spawning {} aliens", self.fleet.len());
        }

        TickReport {
            aliens_destroyed,
            fleet_respawned,
        }
    }
}

/// Adds a bullet at the ship's nose unless the on-screen limit is reached
pub fn fire_bullet(bullets: &mut Vec<Bullet>, ship: &Ship, settings: &Settings) -> bool {
    if bullets.len() >= settings.bullets_allowed {
        log::trace!("fire ignored, {} bullets already in flight", bullets.len());
        return false;
    }
    bullets.push(Bullet::new(ship, settings));
    true
}

/// Moves bullets up and drops the ones that left the screen
pub fn update_bullets(bullets: &mut Vec<Bullet>, settings: &Settings) {
    for bullet in bullets.iter_mut() {
        bullet.update(settings.bullet_speed);
    }
    bullets.retain(|bullet| !bullet.is_off_screen());
}

/// Removes every bullet/alien pair that overlaps and returns the kill count.
///
/// Bullets are checked in order against the aliens still alive; each bullet
/// takes out at most the first alien it overlaps, and a dead alien cannot
/// absorb a second bullet.
pub fn resolve_collisions(bullets: &mut Vec<Bullet>, aliens: &mut Vec<Alien>) -> usize {
    let mut alien_alive = vec![true; aliens.len()];
    let mut bullet_alive = vec![true; bullets.len()];
    let mut destroyed = 0;

    for (b_idx, bullet) in bullets.iter().enumerate() {
        let hit = aliens
            .iter()
            .enumerate()
            .position(|(a_idx, alien)| alien_alive[a_idx] && bullet.rect.intersects(&alien.rect));

        if let Some(a_idx) = hit {
            alien_alive[a_idx] = false;
            bullet_alive[b_idx] = false;
            destroyed += 1;
        }
    }

    if destroyed > 0 {
        let mut flags = bullet_alive.into_iter();
        bullets.retain(|_| flags.next().unwrap_or(true));
        let mut flags = alien_alive.into_iter();
        aliens.retain(|_| flags.next().unwrap_or(true));
    }

    destroyed
}

/// Clears bullets and brings in a new fleet once every alien is gone
pub fn respawn_if_cleared(
    bullets: &mut Vec<Bullet>,
    fleet: &mut Fleet,
    settings: &Settings,
) -> bool {
    if !fleet.is_empty() {
        return false;
    }
    bullets.clear();
    fleet.respawn(settings);
    true
}
