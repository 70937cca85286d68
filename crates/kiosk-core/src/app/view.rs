impl<CS, TS, BL, TM, R> SlideController<CS, TS, BL, TM, R, EasedFade>
where
    CS: ContentSource,
    TS: TouchSource,
    BL: Backlight,
    TM: TextMeasurer,
    R: Reporter,
{
    pub fn new(
        playlist: Playlist,
        content: CS,
        touch: TS,
        backlight: BL,
        measurer: TM,
        reporter: R,
        config: &KioskConfig,
    ) -> Self {
        let config = config.clone().normalized();

        Self {
            playlist,
            content,
            touch,
            backlight,
            measurer,
            reporter,
            transition: EasedFade::smoothstep(),
            layout: config.layout(),
            timing: config.timing(),
            target_brightness: config.backlight_target(),
            state: SlideState::Load,
            index: 0,
            page: 0,
            dwell_deadline_ms: None,
            fade: None,
            slide: None,
            consecutive_load_failures: 0,
            brightness: 0.0,
        }
    }
}

impl<CS, TS, BL, TM, R, TR> SlideController<CS, TS, BL, TM, R, TR>
where
    CS: ContentSource,
    TS: TouchSource,
    BL: Backlight,
    TM: TextMeasurer,
    R: Reporter,
    TR: Transition,
{
    /// Swap the fade strategy. Only meaningful before the first tick.
    pub fn with_transition<T2: Transition>(self, transition: T2) -> SlideController<CS, TS, BL, TM, R, T2> {
        SlideController {
            playlist: self.playlist,
            content: self.content,
            touch: self.touch,
            backlight: self.backlight,
            measurer: self.measurer,
            reporter: self.reporter,
            transition,
            layout: self.layout,
            timing: self.timing,
            target_brightness: self.target_brightness,
            state: self.state,
            index: self.index,
            page: self.page,
            dwell_deadline_ms: self.dwell_deadline_ms,
            fade: None,
            slide: self.slide,
            consecutive_load_failures: self.consecutive_load_failures,
            brightness: self.brightness,
        }
    }

    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        match self.state {
            SlideState::IdleError => return TickResult::NoRender,
            SlideState::Load if self.playlist.is_empty() => {
                return self.enter_idle_error(Trigger::PlaylistEmpty);
            }
            _ => {}
        }

        let touch = self.poll_touch();

        match self.state {
            SlideState::Load => self.tick_load(now_ms),
            SlideState::FadeIn => self.tick_fade_in(now_ms),
            SlideState::Display => self.tick_display(now_ms, touch),
            SlideState::FadeOut => self.tick_fade_out(now_ms),
            SlideState::IdleError => TickResult::NoRender,
        }
    }

    pub fn with_screen<F>(&self, f: F)
    where
        F: FnOnce(Screen<'_>),
    {
        if self.state == SlideState::IdleError {
            f(Screen::Message {
                lines: &IDLE_MESSAGE,
            });
            return;
        }

        let Some(slide) = self.slide.as_ref() else {
            f(Screen::Blank);
            return;
        };

        let lines = slide
            .pages
            .page(self.page)
            .map(|page| page.lines.as_slice())
            .unwrap_or(&[]);
        let background = match slide.photo.as_deref() {
            Some(bytes) => Background::Photo(bytes),
            None => Background::Black,
        };

        f(Screen::Slide(SlideView {
            title_lines: slide.pages.title_lines(),
            lines,
            page_index: self.page,
            page_count: slide.pages.len(),
            background,
        }));
    }

    /// Draw the current screen onto `surface`. A failed draw is reported
    /// and returned; playback state is unaffected.
    pub fn render_to<S: RenderSurface>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        let mut outcome = Ok(());
        self.with_screen(|screen| outcome = surface.draw(&screen));

        if let Err(err) = &outcome {
            let cause = format!("{err:?}");
            self.reporter.report(KioskEvent::RenderFault { cause: &cause });
        }
        outcome
    }

    pub fn state(&self) -> SlideState {
        self.state
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn playlist_index(&self) -> usize {
        self.index
    }

    pub fn page_index(&self) -> usize {
        self.page
    }

    pub fn page_count(&self) -> usize {
        self.slide.as_ref().map_or(0, |slide| slide.pages.len())
    }

    /// Id of the slide on screen, if one is loaded.
    pub fn current_id(&self) -> Option<&str> {
        self.slide.as_ref().map(|slide| slide.id.as_str())
    }

    pub fn dwell_deadline_ms(&self) -> Option<u64> {
        self.dwell_deadline_ms
    }

    pub fn is_fading(&self) -> bool {
        self.fade.is_some()
    }

    /// Last level written to the backlight.
    pub fn brightness(&self) -> f32 {
        self.brightness
    }

    pub fn touch_mut(&mut self) -> &mut TS {
        &mut self.touch
    }

    pub fn backlight(&self) -> &BL {
        &self.backlight
    }

    pub fn content_mut(&mut self) -> &mut CS {
        &mut self.content
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }
}
