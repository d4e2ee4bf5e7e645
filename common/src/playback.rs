use std::collections::VecDeque;
use std::time::Duration;

use crate::paint::{Paint, PaintSink, Trace};

/// Feeds a recorded search to a surface one paint per `delay`, so the
/// search can be watched instead of appearing all at once.
#[derive(Debug, Clone)]
pub struct Playback {
    queue: VecDeque<Paint>,
    delay: Duration,
    elapsed: Duration,
}

impl Playback {
    pub fn new(delay: Duration) -> Self {
        Self {
            queue: VecDeque::new(),
            delay,
            elapsed: Duration::ZERO,
        }
    }

    pub fn start(&mut self, trace: &Trace) {
        self.queue = trace.paints().collect();
        self.elapsed = Duration::ZERO;
    }

    pub fn cancel(&mut self) {
        self.queue.clear();
        self.elapsed = Duration::ZERO;
    }

    pub fn is_running(&self) -> bool {
        !self.queue.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    /// Moves the clock on by `dt` and paints whatever has come due. Returns
    /// how many paints were applied.
    pub fn advance(&mut self, dt: Duration, sink: &mut dyn PaintSink) -> usize {
        if self.queue.is_empty() {
            return 0;
        }

        if self.delay.is_zero() {
            return self.finish(sink);
        }

        self.elapsed += dt;
        let mut applied = 0;

        while self.elapsed >= self.delay {
            let Some(paint) = self.queue.pop_front() else {
                self.elapsed = Duration::ZERO;
                break;
            };
            sink.paint(paint);
            self.elapsed -= self.delay;
            applied += 1;
        }

        applied
    }

    /// Paints everything still queued.
    pub fn finish(&mut self, sink: &mut dyn PaintSink) -> usize {
        let applied = self.queue.len();
        for paint in self.queue.drain(..) {
            sink.paint(paint);
        }
        self.elapsed = Duration::ZERO;
        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Coordinate;
    use crate::paint::{PaintColor, SearchObserver, Step};

    fn trace_of(n: usize) -> Trace {
        let mut trace = Trace::new();
        for x in 0..n {
            trace.on_step(Step::Entered(Coordinate::new(x, 0)));
        }
        trace
    }

    #[test]
    fn paints_one_step_per_delay() {
        let mut playback = Playback::new(Duration::from_millis(40));
        playback.start(&trace_of(3));
        let mut paints = Vec::new();

        assert_eq!(playback.advance(Duration::from_millis(30), &mut paints), 0);
        assert_eq!(playback.advance(Duration::from_millis(30), &mut paints), 1);
        assert_eq!(playback.advance(Duration::from_millis(100), &mut paints), 2);

        assert!(!playback.is_running());
        assert_eq!(paints.len(), 3);
        assert_eq!(paints[0], Paint::new(Coordinate::new(0, 0), PaintColor::Visiting));
    }

    #[test]
    fn zero_delay_flushes_at_once() {
        let mut playback = Playback::new(Duration::ZERO);
        playback.start(&trace_of(5));
        let mut paints = Vec::new();

        assert_eq!(playback.advance(Duration::ZERO, &mut paints), 5);
        assert_eq!(paints.len(), 5);
    }

    #[test]
    fn cancel_drops_pending_paints() {
        let mut playback = Playback::new(Duration::from_millis(10));
        playback.start(&trace_of(4));
        playback.cancel();
        let mut paints = Vec::new();

        assert_eq!(playback.advance(Duration::from_secs(1), &mut paints), 0);
        assert!(paints.is_empty());
    }

    #[test]
    fn long_frame_does_not_bank_time_after_the_queue_empties() {
        let mut playback = Playback::new(Duration::from_millis(10));
        playback.start(&trace_of(1));
        let mut paints = Vec::new();

        assert_eq!(playback.advance(Duration::from_secs(1), &mut paints), 1);

        playback.start(&trace_of(2));
        assert_eq!(playback.advance(Duration::from_millis(5), &mut paints), 0);
    }
}
