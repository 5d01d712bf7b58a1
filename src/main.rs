use std::fs::OpenOptions;
use std::io::{self, Stdout, stdout};

use alien_invasion::{App, InputSource, Settings, TerminalInput};
use crossterm::{
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
    },
};
use ratatui::{Terminal, backend::CrosstermBackend};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_logging()?;

    let settings = Settings::default();
    settings.validate()?;
    log::info!(
        "starting {}x{} world at {} ticks/s",
        settings.screen_width,
        settings.screen_height,
        settings.frame_rate
    );

    let supports_keyboard_enhancement = matches!(
        crossterm::terminal::supports_keyboard_enhancement(),
        Ok(true)
    );
    if supports_keyboard_enhancement {
        log::info!("keyboard enhancement supported, key releases will be reported");
    } else {
        log::warn!("terminal does not report key releases, the last arrow pressed steers");
    }

    // Setup terminal manually for full control
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle(settings.title))?;

    // Enable keyboard enhancement AFTER entering alternate screen
    if supports_keyboard_enhancement {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let result = App::new(settings, input_sources())
        .with_key_releases(supports_keyboard_enhancement)
        .run(&mut terminal);

    let restored = restore_terminal(&mut terminal, supports_keyboard_enhancement);
    result.and(restored.map_err(Into::into))
}

/// Undo every terminal change even if one step fails, reporting the first failure
fn restore_terminal(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    pop_keyboard_flags: bool,
) -> io::Result<()> {
    let pop = if pop_keyboard_flags {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)
    } else {
        Ok(())
    };
    let raw = disable_raw_mode();
    let screen = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let cursor = terminal.show_cursor();

    first_error([pop, raw, screen, cursor])
}

fn first_error(steps: impl IntoIterator<Item = io::Result<()>>) -> io::Result<()> {
    match steps.into_iter().find_map(Result::err) {
        Some(err) => {
            log::error!("terminal restore failed: {err}");
            Err(err)
        }
        None => Ok(()),
    }
}

/// Log to a file, the terminal itself belongs to the game
fn init_logging() -> color_eyre::Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("debug.log")?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();
    Ok(())
}

fn input_sources() -> Vec<Box<dyn InputSource>> {
    let mut sources: Vec<Box<dyn InputSource>> = vec![Box::new(TerminalInput)];
    sources.extend(gamepad_source());
    sources
}

#[cfg(feature = "gamepad")]
fn gamepad_source() -> Option<Box<dyn InputSource>> {
    match alien_invasion::gamepad::GamepadInput::new() {
        Ok(gamepad) => Some(Box::new(gamepad)),
        Err(err) => {
            log::warn!("continuing without gamepad: {err}");
            None
        }
    }
}

#[cfg(not(feature = "gamepad"))]
fn gamepad_source() -> Option<Box<dyn InputSource>> {
    None
}
