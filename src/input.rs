use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// Identifier a device backend hands out for a connected controller
pub type DeviceId = usize;

/// Keys the game cares about; everything else collapses into `Other`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Space,
    Escape,
    Char(char),
    Other,
}

/// Gamepad face and menu buttons, named by position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    South,
    East,
    North,
    West,
    Start,
    Select,
    Other,
}

/// Every kind of input the game loop consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
    KeyUp(Key),
    DeviceAdded(DeviceId),
    DeviceRemoved(DeviceId),
    /// Directional pad position, each axis in {-1, 0, 1}, up is positive y
    HatMotion { x: i8, y: i8 },
    ButtonDown(Button),
}

/// One-shot requests produced while handling a tick's events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Fire,
    Quit,
}

/// Left/right intent as reported by a single input source
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Steering {
    pub left: bool,
    pub right: bool,
}

impl Steering {
    fn or(self, other: Steering) -> Steering {
        Steering {
            left: self.left || other.left,
            right: self.right || other.right,
        }
    }
}

/// Anything that can be drained for input once per tick
pub trait InputSource {
    /// Appends all events that arrived since the last poll. Must not block.
    fn poll(&mut self, events: &mut Vec<InputEvent>) -> color_eyre::Result<()>;
}

/// Translates events into steering state and one-shot actions.
///
/// Keyboard and d-pad keep separate flags so letting go of one never cancels
/// a direction still held on the other.
#[derive(Debug)]
pub struct InputManager {
    keys: Steering,
    dpad: Steering,
    controller: Option<DeviceId>,
    /// Without key releases an arrow press replaces the other arrow
    reports_releases: bool,
    oneshot_actions: Vec<InputAction>,
    events: Vec<InputEvent>,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            keys: Steering::default(),
            dpad: Steering::default(),
            controller: None,
            reports_releases: true,
            oneshot_actions: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Tells the manager whether key-up events will ever arrive
    pub fn set_reports_releases(&mut self, reports_releases: bool) {
        self.reports_releases = reports_releases;
    }

    /// Drains every source and handles the events in arrival order.
    /// Should be called once per frame before reading actions.
    pub fn poll_events(&mut self, sources: &mut [Box<dyn InputSource>]) -> color_eyre::Result<()> {
        self.oneshot_actions.clear();

        let mut events = std::mem::take(&mut self.events);
        for source in sources.iter_mut() {
            source.poll(&mut events)?;
        }
        for event in events.drain(..) {
            self.handle_event(event);
        }
        self.events = events;

        Ok(())
    }

    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Quit => self.oneshot_actions.push(InputAction::Quit),
            InputEvent::KeyDown(key) => self.handle_key_press(key),
            InputEvent::KeyUp(key) => self.handle_key_release(key),
            InputEvent::DeviceAdded(id) => {
                log::info!("controller {id} connected");
                self.controller = Some(id);
            }
            InputEvent::DeviceRemoved(id) => {
                log::info!("controller {id} disconnected");
                self.controller = None;
                self.dpad = Steering::default();
            }
            InputEvent::HatMotion { x, y } => {
                if self.controller.is_none() {
                    log::debug!("hat motion ({x}, {y}) with no controller attached");
                    return;
                }
                self.dpad = Steering {
                    left: x < 0,
                    right: x > 0,
                };
            }
            InputEvent::ButtonDown(Button::South) => self.oneshot_actions.push(InputAction::Fire),
            InputEvent::ButtonDown(button) => {
                log::debug!("unbound button {button:?}");
            }
        }
    }

    fn handle_key_press(&mut self, key: Key) {
        match key {
            Key::Char('q') | Key::Char('Q') | Key::Escape => {
                self.oneshot_actions.push(InputAction::Quit);
            }
            Key::Left => {
                self.keys.left = true;
                if !self.reports_releases {
                    self.keys.right = false;
                }
            }
            Key::Right => {
                self.keys.right = true;
                if !self.reports_releases {
                    self.keys.left = false;
                }
            }
            Key::Space => self.oneshot_actions.push(InputAction::Fire),
            Key::Char(_) | Key::Other => {}
        }
    }

    fn handle_key_release(&mut self, key: Key) {
        match key {
            Key::Left => self.keys.left = false,
            Key::Right => self.keys.right = false,
            _ => {}
        }
    }

    /// Combined intent of all directional sources
    pub fn steering(&self) -> Steering {
        self.keys.or(self.dpad)
    }

    /// One-shot actions gathered by the last poll
    pub fn actions(&self) -> &[InputAction] {
        &self.oneshot_actions
    }

    pub fn controller(&self) -> Option<DeviceId> {
        self.controller
    }
}

/// Keyboard input read from the terminal through crossterm
#[derive(Debug, Default)]
pub struct TerminalInput;

impl InputSource for TerminalInput {
    fn poll(&mut self, events: &mut Vec<InputEvent>) -> color_eyre::Result<()> {
        // Poll for all available events without blocking
        while event::poll(Duration::from_millis(0))? {
            let raw = event::read()?;
            match translate_event(&raw) {
                Some(event) => events.push(event),
                None => log::trace!("ignored terminal event {raw:?}"),
            }
        }
        Ok(())
    }
}

/// Maps a crossterm event onto the game's input vocabulary
pub fn translate_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(key_event) => translate_key_event(key_event),
        _ => None,
    }
}

fn translate_key_event(key_event: &KeyEvent) -> Option<InputEvent> {
    let ctrl_c = key_event.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key_event.code, KeyCode::Char('c') | KeyCode::Char('C'));

    match key_event.kind {
        KeyEventKind::Press if ctrl_c => Some(InputEvent::Quit),
        KeyEventKind::Press => Some(InputEvent::KeyDown(translate_key(key_event.code))),
        KeyEventKind::Release => Some(InputEvent::KeyUp(translate_key(key_event.code))),
        // Held keys are already tracked as down
        KeyEventKind::Repeat => None,
    }
}

fn translate_key(code: KeyCode) -> Key {
    match code {
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Char(' ') => Key::Space,
        KeyCode::Esc => Key::Escape,
        KeyCode::Char(c) => Key::Char(c),
        _ => Key::Other,
    }
}
