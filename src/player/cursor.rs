use rand::Rng;
use std::time::{Duration, Instant};

/// Tracks the current position within a selected chord list, plus the
/// fixed-period change timer.
///
/// The cursor performs no I/O. The presentation loop owns exactly one
/// instance, polls [`PlaybackCursor::tick`] against the monotonic clock
/// and dispatches navigation commands at it; nothing else mutates it.
pub struct PlaybackCursor {
    names: Vec<String>,       // selected chord names, in practice order
    index: usize,             // current position within `names`
    timer_enabled: bool,      // change timer flag
    tempo: Duration,          // interval between timed changes
    next_boundary: Instant,   // next timed change is due at this instant
}

impl PlaybackCursor {
    /// Build a cursor over a non-empty ordered chord list.
    pub fn new(names: Vec<String>, tempo: Duration) -> Self {
        assert!(!names.is_empty(), "playback list must not be empty");
        Self {
            names,
            index: 0,
            timer_enabled: false,
            tempo,
            next_boundary: Instant::now() + tempo,
        }
    }

    /// Name of the current chord.
    pub fn current(&self) -> &str {
        &self.names[self.index]
    }

    pub const fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub const fn timer_enabled(&self) -> bool {
        self.timer_enabled
    }

    pub const fn tempo(&self) -> Duration {
        self.tempo
    }

    pub fn set_tempo(&mut self, tempo: Duration) {
        self.tempo = tempo;
    }

    /// Advance one step, wrapping past the end of the list.
    pub fn next_chord(&mut self) {
        self.index = (self.index + 1) % self.names.len();
    }

    /// Step back one, wrapping past the start of the list.
    pub fn prev_chord(&mut self) {
        self.index = (self.index + self.names.len() - 1) % self.names.len();
    }

    /// Jump to a uniformly chosen position.
    pub fn random_chord(&mut self) {
        self.index = rand::thread_rng().gen_range(0..self.names.len());
    }

    /// Flip the timer flag; the position does not move. The next timed
    /// change is re-armed one full tempo interval from now.
    pub fn toggle_timer(&mut self) {
        self.timer_enabled = !self.timer_enabled;
        self.next_boundary = Instant::now() + self.tempo;
    }

    /// Poll the change timer.
    ///
    /// Advances exactly one step when the timer is enabled and the
    /// boundary has been reached, then re-arms at now + tempo. Repeated
    /// calls between boundary crossings are no-ops, so the caller may
    /// poll as often as it likes.
    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> bool {
        if !self.timer_enabled || now < self.next_boundary {
            return false;
        }
        self.next_boundary = now + self.tempo;
        self.next_chord();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor(names: &[&str]) -> PlaybackCursor {
        PlaybackCursor::new(
            names.iter().map(|n| (*n).to_string()).collect(),
            Duration::from_secs(5),
        )
    }

    #[test]
    fn test_next_wraps_around() {
        let mut c = cursor(&["C", "Dm", "G"]);
        c.next_chord();
        c.next_chord();
        assert_eq!(c.index(), 2);
        c.next_chord();
        assert_eq!(c.index(), 0);
        assert_eq!(c.current(), "C");
    }

    #[test]
    fn test_prev_wraps_around() {
        let mut c = cursor(&["C", "Dm", "G"]);
        c.prev_chord();
        assert_eq!(c.index(), 2);
        assert_eq!(c.current(), "G");
        c.prev_chord();
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn test_random_stays_in_range() {
        let mut c = cursor(&["C", "Dm", "G"]);
        for _ in 0..50 {
            c.random_chord();
            assert!(c.index() < c.len());
        }
    }

    #[test]
    fn test_toggle_keeps_position() {
        let mut c = cursor(&["C", "Dm", "G"]);
        c.next_chord();
        c.toggle_timer();
        assert!(c.timer_enabled());
        assert_eq!(c.index(), 1);
        c.toggle_timer();
        assert!(!c.timer_enabled());
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn test_tick_is_a_noop_while_disabled() {
        let mut c = cursor(&["C", "Dm", "G"]);
        let long_past_any_boundary = Instant::now() + Duration::from_secs(3600);
        assert!(!c.tick_at(long_past_any_boundary));
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_tick_gating_within_one_interval() {
        let mut c = cursor(&["C", "Dm", "G"]);
        c.toggle_timer();
        let boundary = c.next_boundary;

        // reaching the boundary advances exactly once
        assert!(c.tick_at(boundary));
        assert_eq!(c.index(), 1);

        // a second poll inside the same interval does nothing
        assert!(!c.tick_at(boundary + Duration::from_secs(1)));
        assert_eq!(c.index(), 1);

        // the re-armed boundary sits one tempo after the crossing
        assert!(c.tick_at(boundary + c.tempo()));
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn test_tick_wraps_like_next() {
        let mut c = cursor(&["C", "Dm"]);
        c.toggle_timer();
        let mut at = c.next_boundary;
        for expected in [1, 0, 1] {
            assert!(c.tick_at(at));
            assert_eq!(c.index(), expected);
            at += c.tempo();
        }
    }

    #[test]
    #[should_panic(expected = "must not be empty")]
    fn test_empty_list_is_rejected() {
        let _ = PlaybackCursor::new(vec![], Duration::from_secs(3));
    }
}
