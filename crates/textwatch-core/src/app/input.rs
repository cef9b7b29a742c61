impl<IN> WatchFace<IN>
where
    IN: InputProvider,
{
    fn process_inputs(&mut self, now_ms: u64) {
        loop {
            match self.input.poll_event() {
                Ok(Some(event)) => self.apply_input_event(event, now_ms),
                Ok(None) => break,
                Err(_) => {
                    warn!("watch: input poll failed");
                    break;
                }
            }
        }
    }

    pub fn apply_input_event(&mut self, event: InputEvent, now_ms: u64) {
        debug!("watch: input {:?}", event);

        match event {
            InputEvent::Tap => self.replay_transitions(now_ms),
            InputEvent::StepForward => {
                if let Some(time) = self.shown {
                    self.display_time(time.step_forward(), now_ms);
                }
            }
            InputEvent::StepBack => {
                if let Some(time) = self.shown {
                    self.display_time(time.step_back(), now_ms);
                }
            }
        }
    }
}
