use std::collections::HashMap;

use winit::{
    event::{ElementState, MouseButton},
    keyboard::KeyCode,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonState {
    Pressed,
    Down,
    Released,
    #[default]
    Up,
}

impl ButtonState {
    fn transition(&self, key_down: bool) -> ButtonState {
        if key_down {
            match self {
                ButtonState::Pressed => ButtonState::Down,
                ButtonState::Down => ButtonState::Down,
                ButtonState::Released => ButtonState::Pressed,
                ButtonState::Up => ButtonState::Pressed,
            }
        } else {
            match self {
                ButtonState::Pressed => ButtonState::Released,
                ButtonState::Down => ButtonState::Released,
                ButtonState::Released => ButtonState::Up,
                ButtonState::Up => ButtonState::Up,
            }
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, ButtonState::Pressed | ButtonState::Down)
    }
}

/// The keys the scene polls each frame.
pub const GAME_KEYS: [KeyCode; 5] = [
    KeyCode::ArrowLeft,
    KeyCode::ArrowRight,
    KeyCode::ArrowUp,
    KeyCode::Space,
    KeyCode::Enter,
];

/// A button's state plus a latch recording that a press arrived since the last frame.
/// A press and release landing between two frames leave the state Released, but the
/// latch still reports the press.
#[derive(Clone, Copy, Debug, Default)]
struct TrackedButton {
    state: ButtonState,
    pressed_this_frame: bool,
}

impl TrackedButton {
    fn process(&mut self, pressed: bool) {
        // OS key-repeat delivers repeated Pressed events; those must not re-trigger Pressed
        if pressed && self.state.is_active() {
            return;
        }
        if pressed {
            self.pressed_this_frame = true;
        }
        self.state = self.state.transition(pressed);
    }

    fn update(&mut self) {
        self.state = self.state.transition(self.state.is_active());
        self.pressed_this_frame = false;
    }
}

#[derive(Default, Debug)]
pub struct InputState {
    buttons: HashMap<KeyCode, TrackedButton>,
    pointer: TrackedButton,
}

impl InputState {
    pub fn for_keys(keys: &[KeyCode]) -> Self {
        let mut buttons = HashMap::new();
        for key in keys {
            buttons.insert(*key, TrackedButton::default());
        }

        Self {
            buttons,
            pointer: TrackedButton::default(),
        }
    }

    pub fn get_button_state(&self, key: KeyCode) -> ButtonState {
        self.buttons
            .get(&key)
            .map(|button| button.state)
            .unwrap_or_default()
    }

    pub fn is_down(&self, key: KeyCode) -> bool {
        self.get_button_state(key).is_active()
    }

    /// True if the key went down since the last frame, even if it has already been released.
    pub fn is_just_pressed(&self, key: KeyCode) -> bool {
        self.buttons
            .get(&key)
            .map_or(false, |button| button.pressed_this_frame)
    }

    pub fn is_pointer_just_pressed(&self) -> bool {
        self.pointer.pressed_this_frame
    }

    /// Returns true if the key is one this InputState tracks.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        match self.buttons.get_mut(&key) {
            Some(button) => {
                button.process(state == ElementState::Pressed);
                true
            }
            None => false,
        }
    }

    pub fn process_mouse(&mut self, button: MouseButton, state: ElementState) -> bool {
        if button != MouseButton::Left {
            return false;
        }
        self.pointer.process(state == ElementState::Pressed);
        true
    }

    /// Gamepad buttons are folded into the equivalent keyboard keys.
    pub fn process_gamepad(&mut self, event: gilrs::EventType) -> bool {
        match event {
            gilrs::EventType::ButtonPressed(button, _) => match gamepad_key(button) {
                Some(key) => self.process_keyboard(key, ElementState::Pressed),
                None => false,
            },
            gilrs::EventType::ButtonReleased(button, _) => match gamepad_key(button) {
                Some(key) => self.process_keyboard(key, ElementState::Released),
                None => false,
            },
            _ => false,
        }
    }

    /// Advance button states at the end of a frame; Pressed becomes Down, Released becomes Up.
    pub fn update(&mut self) {
        for button in self.buttons.values_mut() {
            button.update();
        }
        self.pointer.update();
    }
}

fn gamepad_key(button: gilrs::Button) -> Option<KeyCode> {
    match button {
        gilrs::Button::DPadLeft => Some(KeyCode::ArrowLeft),
        gilrs::Button::DPadRight => Some(KeyCode::ArrowRight),
        gilrs::Button::DPadUp => Some(KeyCode::ArrowUp),
        gilrs::Button::South => Some(KeyCode::Space),
        gilrs::Button::East => Some(KeyCode::Enter),
        _ => None,
    }
}
