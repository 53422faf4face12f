use crate::core::event::LogicalKey;
use std::collections::VecDeque;
use std::io;

/// Blocking source of classified keypresses.
pub trait InputSource {
    fn read_key(&mut self) -> io::Result<LogicalKey>;
}

/// Replays a fixed sequence of keys, then reports `UnexpectedEof`.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    keys: VecDeque<LogicalKey>,
}

impl ScriptedInput {
    pub fn new(keys: impl IntoIterator<Item = LogicalKey>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl InputSource for ScriptedInput {
    fn read_key(&mut self) -> io::Result<LogicalKey> {
        self.keys
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "input script exhausted"))
    }
}
