use std::time::Duration;

use thiserror::Error;

/// Delays used by the typewriter state machine. Every transition consumes
/// one of these before the next one may run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterConfig {
    /// Delay between appending characters while typing.
    pub typing_speed: Duration,
    /// Delay between removing characters while deleting.
    pub deleting_speed: Duration,
    /// Delay inserted after a phrase is fully typed, before deletion starts.
    pub pause_after_typed: Duration,
    /// Delay inserted after a phrase is fully deleted, before the next
    /// phrase starts typing.
    pub pause_after_deleted: Duration,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            typing_speed: Duration::from_millis(80),
            deleting_speed: Duration::from_millis(40),
            pause_after_typed: Duration::from_millis(1500),
            pause_after_deleted: Duration::from_millis(500),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypewriterError {
    #[error("typewriter needs at least one phrase")]
    EmptyPhrases,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Typing,
    Deleting,
}

/// Cycles through a fixed list of phrases, typing each out character by
/// character, pausing, deleting it, then moving on to the next phrase.
///
/// The machine is advanced externally, one transition per `tick`. After
/// each tick, [`next_delay`](Typewriter::next_delay) says how long to wait
/// before the next one. `displayed` is always a prefix of the phrase at
/// `phrase_index`, so indexing can never go out of range once construction
/// has validated the phrase list.
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    config: TypewriterConfig,
    phrase_index: usize,
    displayed: String,
    mode: Mode,
    next_delay: Duration,
}

impl Typewriter {
    pub fn new(
        phrases: Vec<String>,
        config: TypewriterConfig,
    ) -> Result<Self, TypewriterError> {
        if phrases.is_empty() {
            return Err(TypewriterError::EmptyPhrases);
        }
        Ok(Self {
            phrases,
            config,
            phrase_index: 0,
            displayed: String::new(),
            mode: Mode::Typing,
            next_delay: config.typing_speed,
        })
    }

    /// Run exactly one transition.
    ///
    /// Completing a phrase (typed or deleted) is its own transition: the
    /// text stays put, only the mode or phrase index changes, and the
    /// matching pause becomes the next delay. The first deletion after a
    /// fully-typed phrase therefore happens on the tick *after* the pause,
    /// matching the observed behavior of the original effect. Don't make
    /// this symmetric without flagging the behavior change.
    pub fn tick(&mut self) {
        let target = &self.phrases[self.phrase_index];
        match self.mode {
            Mode::Typing => {
                if self.displayed.len() < target.len() {
                    let next = target[self.displayed.len()..]
                        .chars()
                        .next()
                        .expect("prefix is shorter than target, a char must follow");
                    self.displayed.push(next);
                    self.next_delay = self.config.typing_speed;
                } else {
                    // fully typed, including the zero-length phrase case
                    self.mode = Mode::Deleting;
                    self.next_delay = self.config.pause_after_typed;
                }
            }
            Mode::Deleting => {
                if self.displayed.pop().is_some() {
                    self.next_delay = self.config.deleting_speed;
                } else {
                    self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
                    self.mode = Mode::Typing;
                    self.next_delay = self.config.pause_after_deleted;
                }
            }
        }
    }

    pub fn current_text(&self) -> &str {
        &self.displayed
    }

    /// How long to wait before the next `tick`.
    pub fn next_delay(&self) -> Duration {
        self.next_delay
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }
}

/// A single-shot timer the runner rearms after every tick.
///
/// `arm` replaces any previously armed timer, so at most one firing is ever
/// outstanding. `cancel` must take effect synchronously: a cancelled timer
/// never fires.
pub trait Timer {
    fn arm(&mut self, delay: Duration);
    fn cancel(&mut self);
}

/// Drives a [`Typewriter`] off a rearming single-shot timer.
///
/// `stop` pauses rather than resets: a later `start` resumes from whatever
/// state the engine was left in.
pub struct TypewriterRunner<T> {
    engine: Typewriter,
    timer: T,
    running: bool,
}

impl<T: Timer> TypewriterRunner<T> {
    pub fn new(engine: Typewriter, timer: T) -> Self {
        Self {
            engine,
            timer,
            running: false,
        }
    }

    /// Begin the scheduling loop. No-op when already running, so calling
    /// this twice never arms a second timer.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.timer.arm(self.engine.next_delay());
    }

    /// Cancel the outstanding timer. Idempotent; safe before `start`.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.timer.cancel();
        self.running = false;
    }

    /// Called by the timer when it fires: advance once and rearm. A stale
    /// firing that races a `stop` is ignored.
    pub fn timer_fired(&mut self) {
        if !self.running {
            return;
        }
        self.engine.tick();
        self.timer.arm(self.engine.next_delay());
    }

    pub fn current_text(&self) -> &str {
        self.engine.current_text()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(phrases: &[&str]) -> Typewriter {
        Typewriter::new(
            phrases.iter().map(|s| s.to_string()).collect(),
            TypewriterConfig::default(),
        )
        .expect("test phrases should be valid")
    }

    fn phrase(e: &Typewriter) -> &str {
        &e.phrases[e.phrase_index]
    }

    #[test]
    fn rejects_empty_phrase_list() {
        let res = Typewriter::new(Vec::new(), TypewriterConfig::default());
        assert_eq!(res.unwrap_err(), TypewriterError::EmptyPhrases);
    }

    #[test]
    fn starts_empty_in_typing_mode() {
        let e = engine(&["Hi", "Go"]);
        assert_eq!(e.current_text(), "");
        assert_eq!(e.mode(), Mode::Typing);
        assert_eq!(e.phrase_index(), 0);
        assert_eq!(e.next_delay(), Duration::from_millis(80));
    }

    #[test]
    fn types_one_character_per_tick() {
        let mut e = engine(&["Hi", "Go"]);
        e.tick();
        assert_eq!(e.current_text(), "H");
        assert_eq!(e.next_delay(), Duration::from_millis(80));
        e.tick();
        assert_eq!(e.current_text(), "Hi");
        assert_eq!(e.mode(), Mode::Typing);
    }

    #[test]
    fn fully_typed_phrase_pauses_then_enters_deleting() {
        let mut e = engine(&["Hi", "Go"]);
        e.tick();
        e.tick();
        // third tick only flips the mode and schedules the long pause
        e.tick();
        assert_eq!(e.current_text(), "Hi");
        assert_eq!(e.mode(), Mode::Deleting);
        assert_eq!(e.next_delay(), Duration::from_millis(1500));
    }

    #[test]
    fn deletes_back_to_empty_then_advances_phrase() {
        let mut e = engine(&["Hi", "Go"]);
        for _ in 0..5 {
            e.tick();
        }
        // 2 typing + 1 pause trigger + 2 deleting
        assert_eq!(e.current_text(), "");
        assert_eq!(e.mode(), Mode::Deleting);
        assert_eq!(e.phrase_index(), 0);

        e.tick();
        assert_eq!(e.phrase_index(), 1);
        assert_eq!(e.mode(), Mode::Typing);
        assert_eq!(e.current_text(), "");
        assert_eq!(e.next_delay(), Duration::from_millis(500));
    }

    #[test]
    fn wraps_back_to_first_phrase() {
        let mut e = engine(&["Hi", "Go"]);
        // 2*2+2 ticks per phrase
        for _ in 0..12 {
            e.tick();
        }
        assert_eq!(e.phrase_index(), 0);
        assert_eq!(e.mode(), Mode::Typing);
        assert_eq!(e.current_text(), "");
    }

    #[test]
    fn full_cycle_length_matches_phrase_lengths() {
        let phrases = ["alpha", "", "dua"];
        let mut e = engine(&phrases);
        let expected: usize = phrases.iter().map(|p| 2 * p.chars().count() + 2).sum();
        for _ in 0..expected {
            e.tick();
        }
        assert_eq!(e.phrase_index(), 0);
        assert_eq!(e.mode(), Mode::Typing);
        assert_eq!(e.current_text(), "");
    }

    #[test]
    fn single_phrase_cycles_indefinitely() {
        let mut e = engine(&["Go"]);
        for _ in 0..6 {
            e.tick();
        }
        assert_eq!(e.phrase_index(), 0);
        assert_eq!(e.mode(), Mode::Typing);
        e.tick();
        assert_eq!(e.current_text(), "G");
    }

    #[test]
    fn empty_phrase_alternates_modes_without_text() {
        let mut e = engine(&[""]);
        for _ in 0..8 {
            let before = e.mode();
            e.tick();
            assert_eq!(e.current_text(), "");
            assert_ne!(e.mode(), before);
            // the transition still consumes a configured delay
            assert!(e.next_delay() > Duration::ZERO);
        }
    }

    #[test]
    fn displayed_text_is_always_a_prefix_of_the_target() {
        let mut e = engine(&["Hi", "", "Señorita", "日本語", "Go"]);
        for _ in 0..200 {
            e.tick();
            assert!(
                phrase(&e).starts_with(e.current_text()),
                "{:?} is not a prefix of {:?}",
                e.current_text(),
                phrase(&e),
            );
        }
    }

    #[test]
    fn each_tick_changes_length_or_mode_never_both() {
        let mut e = engine(&["ab", "", "xyz"]);
        for _ in 0..100 {
            let len_before = e.current_text().chars().count();
            let mode_before = e.mode();
            let index_before = e.phrase_index();
            e.tick();
            let len_after = e.current_text().chars().count();
            let len_changed = len_after != len_before;
            let state_changed = e.mode() != mode_before || e.phrase_index() != index_before;
            assert!(len_changed != state_changed);
            if len_changed {
                assert_eq!(len_after.abs_diff(len_before), 1);
            }
        }
    }

    #[test]
    fn multibyte_phrases_type_one_char_at_a_time() {
        let mut e = engine(&["héllo"]);
        e.tick();
        assert_eq!(e.current_text(), "h");
        e.tick();
        assert_eq!(e.current_text(), "hé");
        e.tick();
        assert_eq!(e.current_text(), "hél");
    }

    #[derive(Default)]
    struct FakeTimer {
        armed: Option<Duration>,
        arms: usize,
        cancels: usize,
    }

    impl Timer for FakeTimer {
        fn arm(&mut self, delay: Duration) {
            self.armed = Some(delay);
            self.arms += 1;
        }

        fn cancel(&mut self) {
            self.armed = None;
            self.cancels += 1;
        }
    }

    fn runner(phrases: &[&str]) -> TypewriterRunner<FakeTimer> {
        TypewriterRunner::new(engine(phrases), FakeTimer::default())
    }

    #[test]
    fn start_arms_exactly_one_timer() {
        let mut r = runner(&["Hi"]);
        r.start();
        assert_eq!(r.timer.arms, 1);
        assert_eq!(r.timer.armed, Some(Duration::from_millis(80)));
    }

    #[test]
    fn double_start_does_not_arm_a_second_timer() {
        let mut r = runner(&["Hi"]);
        r.start();
        r.start();
        assert_eq!(r.timer.arms, 1);
    }

    #[test]
    fn firing_advances_once_and_rearms() {
        let mut r = runner(&["Hi"]);
        r.start();
        r.timer_fired();
        assert_eq!(r.current_text(), "H");
        assert_eq!(r.timer.arms, 2);
        r.timer_fired();
        assert_eq!(r.current_text(), "Hi");
        // completing the phrase schedules the long pause, not another key
        r.timer_fired();
        assert_eq!(r.timer.armed, Some(Duration::from_millis(1500)));
    }

    #[test]
    fn stop_cancels_and_blocks_further_transitions() {
        let mut r = runner(&["Hi"]);
        r.start();
        r.timer_fired();
        r.stop();
        assert_eq!(r.timer.cancels, 1);
        // a stale firing after stop must not advance the machine
        r.timer_fired();
        r.timer_fired();
        assert_eq!(r.current_text(), "H");
    }

    #[test]
    fn stop_before_start_is_a_no_op() {
        let mut r = runner(&["Hi"]);
        r.stop();
        r.stop();
        assert_eq!(r.timer.cancels, 0);
        assert!(!r.is_running());
    }

    #[test]
    fn restart_resumes_where_it_left_off() {
        let mut r = runner(&["Hi"]);
        r.start();
        r.timer_fired();
        r.stop();
        r.start();
        assert!(r.is_running());
        r.timer_fired();
        assert_eq!(r.current_text(), "Hi");
    }
}
