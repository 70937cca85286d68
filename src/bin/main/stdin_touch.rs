use std::{
    io::{self, BufRead},
    sync::mpsc::{self, Receiver, TryRecvError},
    thread,
};

use kiosk_core::input::{TouchEvent, TouchSource};
use log::{info, warn};

const CENTER: TouchEvent = TouchEvent { x: 240, y: 240 };

/// Taps typed on stdin, one per line. A line of `x y` taps at that point,
/// anything else taps the panel center.
pub(super) struct StdinTouch {
    taps: Receiver<TouchEvent>,
    closed: bool,
}

impl StdinTouch {
    pub(super) fn spawn() -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else {
                    break;
                };
                if tx.send(parse_tap(&line)).is_err() {
                    break;
                }
            }
        });
        info!("touch: reading taps from stdin");

        Self {
            taps: rx,
            closed: false,
        }
    }

    #[cfg(test)]
    fn from_receiver(taps: Receiver<TouchEvent>) -> Self {
        Self {
            taps,
            closed: false,
        }
    }
}

impl TouchSource for StdinTouch {
    type Error = core::convert::Infallible;

    fn poll_touch(&mut self) -> Result<Option<TouchEvent>, Self::Error> {
        if self.closed {
            return Ok(None);
        }

        match self.taps.try_recv() {
            Ok(tap) => Ok(Some(tap)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => {
                warn!("touch: stdin closed; no further taps");
                self.closed = true;
                Ok(None)
            }
        }
    }
}

fn parse_tap(line: &str) -> TouchEvent {
    let mut parts = line.split_whitespace().map(str::parse::<u16>);
    match (parts.next(), parts.next()) {
        (Some(Ok(x)), Some(Ok(y))) => TouchEvent { x, y },
        _ => CENTER,
    }
}
