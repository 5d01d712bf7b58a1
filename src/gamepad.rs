//! Controller support through gilrs.

use color_eyre::eyre::eyre;
use gilrs::{EventType, GamepadId, Gilrs};

use crate::input::{Button, DeviceId, InputEvent, InputSource};

/// Gamepad events folded into the game's input vocabulary.
///
/// gilrs reports the d-pad as four buttons; every change to one of them is
/// turned into a single hat position.
pub struct GamepadInput {
    gilrs: Gilrs,
    pending: Vec<InputEvent>,
}

impl GamepadInput {
    pub fn new() -> color_eyre::Result<Self> {
        let gilrs =
            Gilrs::new().map_err(|err| eyre!("failed to initialise gamepad support: {err}"))?;

        // Pads plugged in before startup are announced like hot-plugged ones
        let pending = gilrs
            .gamepads()
            .map(|(id, _)| InputEvent::DeviceAdded(device_id(id)))
            .collect();

        Ok(Self { gilrs, pending })
    }

    fn hat_position(&self, id: GamepadId) -> (i8, i8) {
        let pad = self.gilrs.gamepad(id);
        let pressed = |button| i8::from(pad.is_pressed(button));
        let x = pressed(gilrs::Button::DPadRight) - pressed(gilrs::Button::DPadLeft);
        let y = pressed(gilrs::Button::DPadUp) - pressed(gilrs::Button::DPadDown);
        (x, y)
    }
}

impl InputSource for GamepadInput {
    fn poll(&mut self, events: &mut Vec<InputEvent>) -> color_eyre::Result<()> {
        events.append(&mut self.pending);

        while let Some(gilrs::Event { id, event, .. }) = self.gilrs.next_event() {
            match event {
                EventType::Connected => events.push(InputEvent::DeviceAdded(device_id(id))),
                EventType::Disconnected => events.push(InputEvent::DeviceRemoved(device_id(id))),
                EventType::ButtonPressed(button, _) | EventType::ButtonReleased(button, _)
                    if is_dpad(button) =>
                {
                    let (x, y) = self.hat_position(id);
                    events.push(InputEvent::HatMotion { x, y });
                }
                EventType::ButtonPressed(button, _) => {
                    events.push(InputEvent::ButtonDown(translate_button(button)));
                }
                other => log::trace!("ignored gamepad event {other:?} from {id}"),
            }
        }
        Ok(())
    }
}

fn device_id(id: GamepadId) -> DeviceId {
    usize::from(id)
}

fn is_dpad(button: gilrs::Button) -> bool {
    matches!(
        button,
        gilrs::Button::DPadLeft
            | gilrs::Button::DPadRight
            | gilrs::Button::DPadUp
            | gilrs::Button::DPadDown
    )
}

fn translate_button(button: gilrs::Button) -> Button {
    match button {
        gilrs::Button::South => Button::South,
        gilrs::Button::East => Button::East,
        gilrs::Button::North => Button::North,
        gilrs::Button::West => Button::West,
        gilrs::Button::Start => Button::Start,
        gilrs::Button::Select => Button::Select,
        _ => Button::Other,
    }
}
