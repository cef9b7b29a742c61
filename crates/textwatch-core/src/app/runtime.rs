impl<IN> WatchFace<IN>
where
    IN: InputProvider,
{
    /// Put `time` on screen without animating, as on first launch.
    pub fn show_initial(&mut self, time: WallTime) {
        self.last_reading = Some(reading_key(time));
        self.lines = self.pack(time);
        self.visible = self.lines.used();
        self.shown = Some(time);
        self.transitions = core::array::from_fn(|_| None);
        self.pending_redraw = true;
        debug!("watch: initial {} on {} lines", time, self.visible);
    }

    /// Feed the current clock reading. The display only follows the clock
    /// when the reading moves to a new half minute, so a debug step sticks
    /// until then.
    pub fn tick(&mut self, time: WallTime, now_ms: u64) -> TickResult {
        let reading = reading_key(time);
        if self.last_reading != Some(reading) {
            self.last_reading = Some(reading);
            self.display_time(time, now_ms);
        }

        self.process_inputs(now_ms);

        let retired = self.retire_transitions(now_ms);
        let running = self.transitions.iter().any(Option::is_some);
        if self.pending_redraw || retired || running {
            self.pending_redraw = false;
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }

    pub fn apply_settings(&mut self, settings: WatchSettings, now_ms: u64) {
        if settings == self.settings {
            return;
        }

        let language_changed = settings.language != self.settings.language;
        self.settings = settings;
        self.pending_redraw = true;
        debug!("watch: settings {:?}", settings);

        if language_changed {
            if let Some(time) = self.shown {
                self.display_time(time, now_ms);
            }
        }
    }

    fn pack(&self, time: WallTime) -> LineBuffer<NUM_LINES, LINE_BYTES> {
        time_to_lines(self.settings.language.table(), time, self.config.layout)
    }

    /// Show `time`, sliding every line whose text changed. A change in the
    /// number of lines moves every row, so then all non-blank slots slide.
    fn display_time(&mut self, time: WallTime, now_ms: u64) -> bool {
        let next = self.pack(time);
        let next_visible = next.used();
        let count_changed = next_visible != self.visible;

        let mut start_ms = now_ms;
        let mut animated = 0usize;
        for index in 0..NUM_LINES {
            let old = self.lines.text(index);
            let new = next.text(index);
            if old.is_empty() && new.is_empty() {
                continue;
            }

            if count_changed || old != new {
                self.start_transition(index, start_ms);
                start_ms += u64::from(self.config.stagger_ms);
                animated += 1;
            }
        }

        self.lines = next;
        self.visible = next_visible;
        self.shown = Some(time);

        if animated > 0 {
            self.pending_redraw = true;
            debug!("watch: {} -> {} lines, {} sliding", time, next_visible, animated);
        } else {
            trace!("watch: {} unchanged", time);
        }
        animated > 0
    }

    /// Slide every visible line out and back in.
    fn replay_transitions(&mut self, now_ms: u64) {
        let mut start_ms = now_ms;
        for index in 0..self.visible {
            self.start_transition(index, start_ms);
            start_ms += u64::from(self.config.stagger_ms);
        }
        self.pending_redraw = true;
    }

    /// Snapshot slot `index` as the outgoing text, sliding out from
    /// `start_ms`. Must run before `self.lines` takes the new text.
    fn start_transition(&mut self, index: usize, start_ms: u64) {
        let outgoing = self.lines.line(index).cloned().unwrap_or_default();
        let outgoing_y = self.config.geometry.row_y(self.visible, index);
        let duration = self.config.animation_ms;

        self.transitions[index] = Some(LineTransition {
            outgoing,
            outgoing_y,
            slide_out: AnimationSpec::new(Easing::EaseIn, start_ms, duration),
            slide_in: AnimationSpec::new(
                Easing::EaseOut,
                start_ms + u64::from(self.config.out_in_delay_ms),
                duration,
            ),
        });
    }

    fn retire_transitions(&mut self, now_ms: u64) -> bool {
        let mut retired = false;
        for slot in &mut self.transitions {
            if slot
                .as_ref()
                .is_some_and(|transition| transition.is_finished(now_ms))
            {
                *slot = None;
                retired = true;
            }
        }
        retired
    }
}
