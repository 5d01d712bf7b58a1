// Library exports for the binary and integration tests
pub use app::App;
pub use entities::{Alien, Bullet, Fleet, Heading, Rect, Ship};
pub use game::{Game, TickReport};
pub use input::{InputAction, InputEvent, InputManager, InputSource, TerminalInput};
pub use settings::{Rgb, Settings};

pub mod app;
pub mod clock;
pub mod entities;
pub mod game;
#[cfg(feature = "gamepad")]
pub mod gamepad;
pub mod input;
pub mod renderer;
pub mod settings;
