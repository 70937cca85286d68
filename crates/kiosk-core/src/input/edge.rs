use super::{TouchEvent, TouchPanel, TouchSource};

/// Turns a level-triggered [`TouchPanel`] into press-edge taps.
///
/// Holding a finger down yields one event; lifting it re-arms the detector.
#[derive(Debug)]
pub struct EdgeTouch<P> {
    panel: P,
    was_down: bool,
}

impl<P: TouchPanel> EdgeTouch<P> {
    pub const fn new(panel: P) -> Self {
        Self {
            panel,
            was_down: false,
        }
    }

    pub fn panel_mut(&mut self) -> &mut P {
        &mut self.panel
    }

    pub fn into_inner(self) -> P {
        self.panel
    }
}

impl<P: TouchPanel> TouchSource for EdgeTouch<P> {
    type Error = P::Error;

    fn poll_touch(&mut self) -> Result<Option<TouchEvent>, Self::Error> {
        let contact = self.panel.sample()?;
        let pressed = contact.is_some() && !self.was_down;
        self.was_down = contact.is_some();

        Ok(contact
            .filter(|_| pressed)
            .map(|(x, y)| TouchEvent { x, y }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::mock::HeldPanel;

    #[test]
    fn only_the_press_edge_fires() {
        let mut touch = EdgeTouch::new(HeldPanel::default());

        assert_eq!(touch.poll_touch(), Ok(None));
        touch.panel_mut().press(10, 20);
        assert_eq!(touch.poll_touch(), Ok(Some(TouchEvent { x: 10, y: 20 })));
        assert_eq!(touch.poll_touch(), Ok(None));
        assert_eq!(touch.poll_touch(), Ok(None));

        touch.panel_mut().release();
        assert_eq!(touch.poll_touch(), Ok(None));
        touch.panel_mut().press(1, 2);
        assert_eq!(touch.poll_touch(), Ok(Some(TouchEvent { x: 1, y: 2 })));
    }
}
