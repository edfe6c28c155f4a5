#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Key {
    A,
    D,
    Left,
    Right,
    Escape,
    None,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum MouseButton {
    /// Start a flight, or jump while flying.
    Primary,
    /// Toggle pause while flying.
    Secondary,
    Other,
}
