mod alien;
mod bullet;
mod fleet;
mod rect;
mod ship;

// Re-export all public types
pub use alien::Alien;
pub use bullet::Bullet;
pub use fleet::{Fleet, Heading, create_aliens, grid_shape};
pub use rect::Rect;
pub use ship::Ship;
