//! Physical button names
//!
//! The agent addresses hardware buttons by well-known lowercase names
//! (dpad buttons use their keycode names).

/// A physical button on the device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhysicalButton {
    Home,
    Search,
    Menu,
    Back,
    DpadUp,
    DpadDown,
    DpadLeft,
    DpadRight,
    DpadCenter,
    Enter,
}

impl PhysicalButton {
    /// The name the wire protocol uses for this button
    pub fn key_name(self) -> &'static str {
        match self {
            PhysicalButton::Home => "home",
            PhysicalButton::Search => "search",
            PhysicalButton::Menu => "menu",
            PhysicalButton::Back => "back",
            PhysicalButton::DpadUp => "DPAD_UP",
            PhysicalButton::DpadDown => "DPAD_DOWN",
            PhysicalButton::DpadLeft => "DPAD_LEFT",
            PhysicalButton::DpadRight => "DPAD_RIGHT",
            PhysicalButton::DpadCenter => "DPAD_CENTER",
            PhysicalButton::Enter => "enter",
        }
    }
}
