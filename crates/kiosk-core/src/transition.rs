//! Backlight fade strategies.
//!
//! Brightness is normalized to `0.0..=1.0` throughout; conversion to a device
//! range happens in the backlight collaborator.

/// Output of one [`Transition::update`] call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FadeSample {
    pub brightness: f32,
    pub complete: bool,
}

/// A fade that can be restarted and sampled by elapsed time.
pub trait Transition {
    /// Begin a new fade, replacing whatever was running.
    fn start(&mut self, from: f32, to: f32, duration_ms: u32);

    /// Sample the fade `elapsed_ms` after [`Transition::start`].
    fn update(&mut self, elapsed_ms: u64) -> FadeSample;
}

/// Easing curve mapping `t` in `0..=1` to progress in `0..=1`.
pub type Easing = fn(f64) -> f64;

/// `3t^2 - 2t^3`
pub fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

pub fn linear(t: f64) -> f64 {
    t
}

/// Fixed-duration fade shaped by an easing curve.
#[derive(Clone, Copy, Debug)]
pub struct EasedFade {
    from: f32,
    to: f32,
    duration_ms: u32,
    easing: Easing,
}

impl EasedFade {
    pub const fn new(easing: Easing) -> Self {
        Self {
            from: 0.0,
            to: 0.0,
            duration_ms: 1,
            easing,
        }
    }

    pub const fn smoothstep() -> Self {
        Self::new(smoothstep)
    }

    pub const fn linear() -> Self {
        Self::new(linear)
    }
}

impl Default for EasedFade {
    fn default() -> Self {
        Self::smoothstep()
    }
}

impl Transition for EasedFade {
    fn start(&mut self, from: f32, to: f32, duration_ms: u32) {
        self.from = from.clamp(0.0, 1.0);
        self.to = to.clamp(0.0, 1.0);
        self.duration_ms = duration_ms.max(1);
    }

    fn update(&mut self, elapsed_ms: u64) -> FadeSample {
        let t = (elapsed_ms as f64 / f64::from(self.duration_ms)).clamp(0.0, 1.0);
        let progress = (self.easing)(t).clamp(0.0, 1.0);
        let from = f64::from(self.from);
        let brightness = from + (f64::from(self.to) - from) * progress;

        FadeSample {
            brightness: (brightness as f32).clamp(0.0, 1.0),
            complete: t >= 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn endpoints_are_exact() {
        let mut fade = EasedFade::smoothstep();
        fade.start(0.0, 0.8, 2_000);

        assert_eq!(fade.update(0).brightness, 0.0);
        assert!(!fade.update(0).complete);
        let done = fade.update(2_000);
        assert_eq!(done.brightness, 0.8);
        assert!(done.complete);
        assert_eq!(fade.update(9_999).brightness, 0.8);
    }

    #[test]
    fn smoothstep_midpoint_is_half() {
        let mut fade = EasedFade::smoothstep();
        fade.start(0.0, 1.0, 1_000);
        assert_eq!(fade.update(500).brightness, 0.5);
        assert!(fade.update(250).brightness < 0.25);
    }

    #[test]
    fn restart_replaces_previous_fade() {
        let mut fade = EasedFade::linear();
        fade.start(0.0, 1.0, 100);
        fade.start(1.0, 0.0, 400);

        let sample = fade.update(100);
        assert_eq!(sample.brightness, 0.75);
        assert!(!sample.complete);
    }

    #[test]
    fn zero_duration_completes_on_first_nonzero_sample() {
        let mut fade = EasedFade::default();
        fade.start(1.0, 0.0, 0);

        assert!(!fade.update(0).complete);
        assert_eq!(
            fade.update(1),
            FadeSample {
                brightness: 0.0,
                complete: true
            }
        );
    }

    proptest! {
        #[test]
        fn fade_in_is_monotonic(duration in 1u32..10_000, a in 0u64..20_000, b in 0u64..20_000) {
            let (early, late) = if a <= b { (a, b) } else { (b, a) };
            let mut fade = EasedFade::smoothstep();
            fade.start(0.0, 1.0, duration);

            let first = fade.update(early);
            let second = fade.update(late);
            prop_assert!(first.brightness <= second.brightness);
            prop_assert_eq!(first.complete, early >= u64::from(duration));
            if late >= u64::from(duration) {
                prop_assert_eq!(second.brightness, 1.0);
            }
        }
    }
}
