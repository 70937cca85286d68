impl<CS, TS, BL, TM, R, TR> SlideController<CS, TS, BL, TM, R, TR>
where
    CS: ContentSource,
    TS: TouchSource,
    BL: Backlight,
    TM: TextMeasurer,
    R: Reporter,
    TR: Transition,
{
    /// One non-blocking poll per tick. Faults are reported and read as no touch.
    fn poll_touch(&mut self) -> Option<TouchEvent> {
        match self.touch.poll_touch() {
            Ok(event) => event,
            Err(err) => {
                let cause = format!("{err:?}");
                self.reporter.report(KioskEvent::TouchFault { cause: &cause });
                None
            }
        }
    }

    /// DISPLAY only: next page (wrapping) and a fresh dwell deadline, even
    /// when the poem has a single page.
    fn apply_touch(&mut self, now_ms: u64) -> TickResult {
        let Some(slide) = self.slide.as_ref() else {
            return TickResult::NoRender;
        };

        let pages = slide.pages.len().max(1);
        self.page = (self.page + 1) % pages;
        self.dwell_deadline_ms = Some(now_ms.saturating_add(self.timing.dwell_ms));
        self.reporter.report(KioskEvent::PageAdvanced {
            id: slide.id.as_str(),
            page: self.page,
            pages,
        });
        TickResult::RenderRequested
    }
}
