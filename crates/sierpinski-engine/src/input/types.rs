/// Keyboard key identifier.
///
/// Only keys the viewer reacts to get a named variant. Everything else maps to
/// `Key::Unknown` with the platform key code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,

    /// Platform-dependent key not represented here.
    Unknown(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Platform-agnostic input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Window focus gained (`true`) or lost (`false`).
    Focused(bool),

    Key {
        key: Key,
        state: KeyState,
        /// Auto-repeat generated by the OS while the key is held.
        repeat: bool,
    },
}
