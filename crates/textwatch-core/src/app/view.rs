impl<IN> WatchFace<IN>
where
    IN: InputProvider,
{
    pub fn new(input: IN, config: WatchConfig, settings: WatchSettings) -> Self {
        Self {
            input,
            config,
            settings,
            last_reading: None,
            shown: None,
            lines: LineBuffer::new(),
            visible: 0,
            transitions: core::array::from_fn(|_| None),
            pending_redraw: false,
        }
    }

    pub fn settings(&self) -> WatchSettings {
        self.settings
    }

    /// Time currently spelled out, which may differ from the clock after a
    /// debug step.
    pub fn shown_time(&self) -> Option<WallTime> {
        self.shown
    }

    pub fn lines(&self) -> &LineBuffer<NUM_LINES, LINE_BYTES> {
        &self.lines
    }

    pub fn is_animating(&self, now_ms: u64) -> bool {
        self.transitions
            .iter()
            .flatten()
            .any(|transition| !transition.is_finished(now_ms))
    }

    pub fn with_frame<F>(&self, now_ms: u64, f: F)
    where
        F: FnOnce(WatchFrame<'_>),
    {
        let geometry = self.config.geometry;
        let mut views: Vec<LineView<'_>, NUM_LINES> = Vec::new();

        for (index, line) in self.lines.slots().iter().enumerate() {
            let transition = self.transitions[index]
                .as_ref()
                .filter(|transition| !transition.is_finished(now_ms));
            if line.is_empty() && transition.is_none() {
                continue;
            }

            let (x, outgoing) = match transition {
                None => (0, None),
                Some(transition) => {
                    let out_pct = transition
                        .slide_out
                        .frame(now_ms)
                        .map_or(100, |frame| frame.eased_pct());
                    let in_pct = transition
                        .slide_in
                        .frame(now_ms)
                        .map_or(100, |frame| frame.eased_pct());

                    let outgoing = (!transition.outgoing.is_empty() && out_pct < 100).then(|| {
                        OutgoingView {
                            text: transition.outgoing.text(),
                            weight: transition.outgoing.weight(),
                            x: -slide_offset(geometry.screen_width, out_pct),
                            y: transition.outgoing_y,
                        }
                    });
                    (geometry.screen_width - slide_offset(geometry.screen_width, in_pct), outgoing)
                }
            };

            let _ = views.push(LineView {
                text: line.text(),
                weight: line.weight(),
                x,
                y: geometry.row_y(self.visible, index),
                outgoing,
            });
        }

        f(WatchFrame {
            lines: &views,
            visible_lines: self.visible,
            style: self.settings.style,
        });
    }
}

fn slide_offset(width: i16, pct: u8) -> i16 {
    (i32::from(width) * i32::from(pct) / 100) as i16
}
