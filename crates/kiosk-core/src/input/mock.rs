use heapless::Deque;

use super::{TouchEvent, TouchPanel, TouchSource};

/// No-hardware touch source used during bring-up.
#[derive(Default, Debug, Clone, Copy)]
pub struct NoTouch;

impl NoTouch {
    pub const fn new() -> Self {
        Self
    }
}

impl TouchSource for NoTouch {
    type Error = core::convert::Infallible;

    fn poll_touch(&mut self) -> Result<Option<TouchEvent>, Self::Error> {
        Ok(None)
    }
}

const SCRIPT_CAPACITY: usize = 16;

/// Queue of pending taps; each poll pops one.
#[derive(Default, Debug, Clone)]
pub struct ScriptedTouch {
    pending: Deque<TouchEvent, SCRIPT_CAPACITY>,
}

impl ScriptedTouch {
    pub const fn new() -> Self {
        Self {
            pending: Deque::new(),
        }
    }

    /// Queue a tap. Returns `false` when the queue is full.
    pub fn push(&mut self, event: TouchEvent) -> bool {
        self.pending.push_back(event).is_ok()
    }

    pub fn tap(&mut self) -> bool {
        self.push(TouchEvent { x: 240, y: 240 })
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

impl TouchSource for ScriptedTouch {
    type Error = core::convert::Infallible;

    fn poll_touch(&mut self) -> Result<Option<TouchEvent>, Self::Error> {
        Ok(self.pending.pop_front())
    }
}

/// Level-triggered panel whose contact is set by hand.
#[derive(Default, Debug, Clone, Copy)]
pub struct HeldPanel {
    contact: Option<(u16, u16)>,
}

impl HeldPanel {
    pub fn press(&mut self, x: u16, y: u16) {
        self.contact = Some((x, y));
    }

    pub fn release(&mut self) {
        self.contact = None;
    }
}

impl TouchPanel for HeldPanel {
    type Error = core::convert::Infallible;

    fn sample(&mut self) -> Result<Option<(u16, u16)>, Self::Error> {
        Ok(self.contact)
    }
}
