use color_eyre::Result;
use ratatui::{Terminal, backend::Backend};

use crate::clock::FrameClock;
use crate::game::Game;
use crate::input::{InputAction, InputManager, InputSource};
use crate::renderer::{TerminalSurface, draw_frame};
use crate::settings::Settings;

/// The main application which holds the state and logic of the application.
pub struct App {
    running: bool,
    game: Game,
    /// internal components
    input_manager: InputManager,
    input_sources: Vec<Box<dyn InputSource>>,
    clock: FrameClock,
    ticks: u64,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(settings: Settings, input_sources: Vec<Box<dyn InputSource>>) -> Self {
        let clock = FrameClock::new(settings.frame_rate);

        Self {
            running: true,
            game: Game::new(settings),
            input_manager: InputManager::new(),
            input_sources,
            clock,
            ticks: 0,
        }
    }

    /// Tells input handling whether the terminal reports key releases
    pub fn with_key_releases(mut self, reports_releases: bool) -> Self {
        self.input_manager.set_reports_releases(reports_releases);
        self
    }

    /// Run the application's main loop.
    pub fn run<B: Backend>(mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while self.running {
            self.input_manager.poll_events(&mut self.input_sources)?;
            self.process_actions();
            if !self.running {
                break;
            }

            self.step();

            let game = &self.game;
            terminal.draw(|frame| {
                let area = frame.area();
                let mut surface = TerminalSurface::new(frame.buffer_mut(), area, &game.settings);
                draw_frame(game, &mut surface);
            })?;

            self.clock.tick();
        }

        log::info!("quit after {} ticks", self.ticks);
        Ok(())
    }

    /// Apply one-shot actions and the current steering to the game.
    /// A quit anywhere in the batch wins over everything else in it.
    fn process_actions(&mut self) {
        if self.input_manager.actions().contains(&InputAction::Quit) {
            self.running = false;
            return;
        }

        for action in self.input_manager.actions() {
            match action {
                InputAction::Quit => {}
                InputAction::Fire => {
                    self.game.fire();
                }
            }
        }

        let steering = self.input_manager.steering();
        self.game.ship.set_intent(steering.left, steering.right);
    }

    /// Advance the simulation by one tick
    fn step(&mut self) {
        self.ticks += 1;
        let report = self.game.update();
        if report.aliens_destroyed > 0 {
            log::debug!(
                "tick {}: {} aliens destroyed, {} left",
                self.ticks,
                report.aliens_destroyed,
                self.game.fleet.len()
            );
        }
    }
}
