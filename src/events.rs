///
/// Actions that a pointer device can perform
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum PointerAction {
    /// The main button was pressed
    ButtonDown,

    /// The pointer moved (with or without the button held)
    Move,

    /// The main button was released
    ButtonUp,

    /// The pointer left the window
    Leave
}

///
/// Event generated when the pointer state changes
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct PointerEvent {
    /// What the pointer did
    pub action: PointerAction,

    /// Where the pointer was, in window coordinates
    pub location_in_window: (f64, f64)
}
