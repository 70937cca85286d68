impl<CS, TS, BL, TM, R, TR> SlideController<CS, TS, BL, TM, R, TR>
where
    CS: ContentSource,
    TS: TouchSource,
    BL: Backlight,
    TM: TextMeasurer,
    R: Reporter,
    TR: Transition,
{
    fn tick_load(&mut self, now_ms: u64) -> TickResult {
        if !self.load_current() {
            self.consecutive_load_failures = self.consecutive_load_failures.saturating_add(1);
            if self.consecutive_load_failures >= self.playlist.len() {
                return self.enter_idle_error(Trigger::NothingLoadable);
            }
            self.advance_index();
            return TickResult::NoRender;
        }

        self.consecutive_load_failures = 0;
        self.page = 0;
        self.set_backlight(0.0);

        if self.apply(Trigger::SlideReady) {
            self.start_fade(0.0, self.target_brightness, self.timing.fade_in_ms, now_ms);
        }
        TickResult::RenderRequested
    }

    fn tick_fade_in(&mut self, now_ms: u64) -> TickResult {
        let sample = self.sample_fade(now_ms);
        if sample.complete && self.apply(Trigger::FadeInComplete) {
            self.fade = None;
            self.dwell_deadline_ms = Some(now_ms.saturating_add(self.timing.dwell_ms));
        }
        TickResult::NoRender
    }

    fn tick_display(&mut self, now_ms: u64, touch: Option<TouchEvent>) -> TickResult {
        // A touch landing on the same tick the deadline passes is dropped.
        if self.dwell_deadline_ms.is_some_and(|deadline| now_ms >= deadline) {
            if self.apply(Trigger::DwellExpired) {
                self.dwell_deadline_ms = None;
                self.start_fade(self.target_brightness, 0.0, self.timing.fade_out_ms, now_ms);
            }
            return TickResult::NoRender;
        }

        match touch {
            Some(_) => self.apply_touch(now_ms),
            None => TickResult::NoRender,
        }
    }

    fn tick_fade_out(&mut self, now_ms: u64) -> TickResult {
        let sample = self.sample_fade(now_ms);
        if sample.complete && self.apply(Trigger::FadeOutComplete) {
            self.fade = None;
            self.advance_index();
        }
        TickResult::NoRender
    }

    /// Resolve the current entry: record, pages and photo. Returns `false`
    /// when the poem no longer loads.
    fn load_current(&mut self) -> bool {
        let Some(entry) = self.playlist.get(self.index) else {
            return false;
        };
        let id = entry.id.clone();
        let has_photo = entry.has_photo;

        let record = match load_record(&mut self.content, &id) {
            Ok(record) => record,
            Err(error) => {
                self.reporter.report(KioskEvent::SlideSkipped {
                    id: &id,
                    error: &error,
                });
                self.slide = None;
                return false;
            }
        };

        let pages = paginate(&record, &self.layout, &self.measurer);
        let photo = self.load_photo(&id, has_photo);

        self.reporter.report(KioskEvent::SlideLoaded {
            id: &id,
            index: self.index,
            pages: pages.len(),
            has_photo: photo.is_some(),
        });
        self.slide = Some(LoadedSlide { id, pages, photo });
        true
    }

    fn load_photo(&mut self, id: &str, has_photo: bool) -> Option<Vec<u8>> {
        let outcome = if has_photo {
            self.content.load_photo(id).map_err(|err| format!("{err:?}"))
        } else {
            Ok(None)
        };

        let warning = match outcome {
            Ok(Some(bytes)) => return Some(bytes),
            Ok(None) => MissingAssetWarning::NotFound,
            Err(cause) => MissingAssetWarning::Unreadable(cause),
        };
        self.reporter.report(KioskEvent::PhotoMissing {
            id,
            warning: &warning,
        });
        None
    }

    fn enter_idle_error(&mut self, trigger: Trigger) -> TickResult {
        if !self.apply(trigger) {
            return TickResult::NoRender;
        }

        self.dwell_deadline_ms = None;
        self.fade = None;
        self.slide = None;
        self.set_backlight(self.target_brightness);
        TickResult::RenderRequested
    }

    /// Look up `(state, trigger)` in the table and move. Unknown pairs are
    /// reported and leave the state untouched.
    fn apply(&mut self, trigger: Trigger) -> bool {
        let from = self.state;
        match from.next(trigger) {
            Some(to) => {
                self.state = to;
                self.reporter
                    .report(KioskEvent::StateChanged { from, to, trigger });
                true
            }
            None => {
                self.reporter.report(KioskEvent::TransitionRejected {
                    state: from,
                    trigger,
                });
                false
            }
        }
    }

    fn start_fade(&mut self, from: f32, to: f32, duration_ms: u32, now_ms: u64) {
        self.transition.start(from, to, duration_ms);
        self.fade = Some(ActiveFade { started_ms: now_ms });
    }

    fn sample_fade(&mut self, now_ms: u64) -> FadeSample {
        let Some(fade) = self.fade else {
            return FadeSample {
                brightness: self.brightness,
                complete: true,
            };
        };

        let sample = self
            .transition
            .update(now_ms.saturating_sub(fade.started_ms));
        self.set_backlight(sample.brightness);
        sample
    }

    fn set_backlight(&mut self, level: f32) {
        self.brightness = level;
        if let Err(err) = self.backlight.set_brightness(level) {
            let cause = format!("{err:?}");
            self.reporter
                .report(KioskEvent::BacklightFault { cause: &cause });
        }
    }

    fn advance_index(&mut self) {
        let len = self.playlist.len().max(1);
        self.index = (self.index + 1) % len;
        self.page = 0;
    }
}
