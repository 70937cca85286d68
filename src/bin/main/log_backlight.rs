use kiosk_core::render::{Backlight, to_percent};
use log::{debug, info};

/// Stand-in backlight that logs duty changes in percent.
#[derive(Debug, Default)]
pub(super) struct LogBacklight {
    percent: Option<u8>,
}

impl LogBacklight {
    pub(super) fn new() -> Self {
        Self::default()
    }
}

impl Backlight for LogBacklight {
    type Error = core::convert::Infallible;

    fn set_brightness(&mut self, level: f32) -> Result<(), Self::Error> {
        let percent = to_percent(level);
        if self.percent == Some(percent) {
            return Ok(());
        }

        match percent {
            0 | 100 => info!("backlight: {}%", percent),
            _ => debug!("backlight: {}%", percent),
        }
        self.percent = Some(percent);
        Ok(())
    }
}
