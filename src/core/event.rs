/// One classified keypress.
///
/// The set is closed: adapters drop anything they cannot map onto it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalKey {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Esc,
    Char(char),
}

impl LogicalKey {
    /// Horizontal direction for Left/Right, `None` for every other key.
    pub fn direction(self) -> Option<Direction> {
        match self {
            LogicalKey::Left => Some(Direction::Left),
            LogicalKey::Right => Some(Direction::Right),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

#[cfg(test)]
#[path = "../../tests/unit/core/event.rs"]
mod tests;
