//! Decrypt-style text reveal.
//!
//! [`RevealState`] drives one animation run: characters are revealed one per
//! tick in a random order, while the rest flicker through random glyphs.
//! [`RevealRunner`] owns the repeating timer behind a run and swaps it out
//! when the text or duration changes. The browser timer lives in
//! `utils::interval`.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::config::reveal::{ALPHABET, MASK_CHAR};

/// Display produced by one tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealFrame {
    pub text: String,
    /// All characters revealed; the timer can be released.
    pub done: bool,
}

/// Tick interval for revealing `char_count` characters over `duration_ms`.
///
/// Returns `None` for empty text (nothing to animate). Never returns zero.
pub fn tick_interval_ms(duration_ms: u32, char_count: usize) -> Option<u32> {
    if char_count == 0 {
        return None;
    }
    let count = u32::try_from(char_count).unwrap_or(u32::MAX);
    Some((duration_ms / count).max(1))
}

/// Placeholder shown before the first tick: one mask character per source char.
pub fn masked(text: &str) -> String {
    text.chars().map(|_| MASK_CHAR).collect()
}

/// State of one reveal run. Discard and rebuild when the text changes.
pub struct RevealState<R = StdRng> {
    source: Vec<char>,
    order: Vec<usize>,
    revealed: Vec<bool>,
    iteration: usize,
    alphabet: Vec<char>,
    rng: R,
}

impl RevealState<StdRng> {
    /// Seed from OS entropy.
    pub fn new(text: &str) -> Self {
        Self::with_rng(text, StdRng::from_entropy())
    }

    /// Deterministic run for a given seed.
    #[cfg(test)]
    pub fn seeded(text: &str, seed: u64) -> Self {
        Self::with_rng(text, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RevealState<R> {
    pub fn with_rng(text: &str, mut rng: R) -> Self {
        let source: Vec<char> = text.chars().collect();
        let mut order: Vec<usize> = (0..source.len()).collect();
        order.shuffle(&mut rng);

        Self {
            revealed: vec![false; source.len()],
            source,
            order,
            iteration: 0,
            alphabet: ALPHABET.chars().collect(),
            rng,
        }
    }

    /// Number of characters (and therefore ticks) in the run.
    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Reveal order; a permutation of `0..len()`.
    #[cfg(test)]
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    #[cfg(test)]
    pub fn revealed_count(&self) -> usize {
        self.iteration
    }

    #[cfg(test)]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn is_complete(&self) -> bool {
        self.iteration >= self.source.len()
    }

    /// Advance one tick: reveal the next index in the order and rescramble
    /// the rest. On the final tick the frame is exactly the source text.
    pub fn tick(&mut self) -> RevealFrame {
        if let Some(&index) = self.order.get(self.iteration) {
            self.revealed[index] = true;
            self.iteration += 1;
        }

        if self.is_complete() {
            return RevealFrame {
                text: self.source.iter().collect(),
                done: true,
            };
        }

        let text = self
            .source
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                if self.revealed[i] || c == ' ' {
                    c
                } else {
                    self.alphabet[self.rng.gen_range(0..self.alphabet.len())]
                }
            })
            .collect();

        RevealFrame { text, done: false }
    }
}

// =============================================================================
// Runner
// =============================================================================

/// A repeating timer that calls back into its owner on every tick.
pub trait IntervalTimer {
    type Handle;

    /// Start firing every `interval_ms`. `None` if the platform refused.
    fn start(&self, interval_ms: u32) -> Option<Self::Handle>;

    fn cancel(&self, handle: Self::Handle);
}

/// Drives [`RevealState`] runs on an [`IntervalTimer`].
///
/// Starting a new run cancels the previous timer first, so at most one
/// handle is live per runner.
pub struct RevealRunner<T: IntervalTimer> {
    timer: T,
    state: Option<RevealState>,
    handle: Option<T::Handle>,
}

impl<T: IntervalTimer> RevealRunner<T> {
    pub fn new(timer: T) -> Self {
        Self {
            timer,
            state: None,
            handle: None,
        }
    }

    /// Replace any running animation with one revealing `text` over
    /// `duration_ms`. Returns the text to display right away.
    pub fn restart(&mut self, text: &str, duration_ms: u32) -> String {
        self.stop();

        let state = RevealState::new(text);
        if state.is_empty() {
            return String::new();
        }
        let Some(interval) = tick_interval_ms(duration_ms, state.len()) else {
            return text.to_string();
        };

        match self.timer.start(interval) {
            Some(handle) => {
                self.handle = Some(handle);
                self.state = Some(state);
                masked(text)
            }
            None => {
                tracing::warn!("could not start reveal timer, showing text directly");
                text.to_string()
            }
        }
    }

    /// Called on every timer fire. Returns the next display, or `None` when
    /// no run is active. The timer is released after the final frame.
    pub fn tick(&mut self) -> Option<String> {
        let frame = self.state.as_mut()?.tick();
        if frame.done {
            self.stop();
        }
        Some(frame.text)
    }

    /// Cancel the running timer, if any.
    pub fn stop(&mut self) {
        self.state = None;
        if let Some(handle) = self.handle.take() {
            self.timer.cancel(handle);
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_interval() {
        assert_eq!(tick_interval_ms(200, 2), Some(100));
        assert_eq!(tick_interval_ms(1500, 13), Some(115));
        assert_eq!(tick_interval_ms(0, 5), Some(1));
        assert_eq!(tick_interval_ms(3, 10), Some(1));
        assert_eq!(tick_interval_ms(100, 0), None);
    }

    #[test]
    fn test_mask_matches_length() {
        assert_eq!(masked("a b"), "\u{00A0}\u{00A0}\u{00A0}");
        assert_eq!(masked("héllo").chars().count(), 5);
    }

    #[test]
    fn test_two_char_scenario() {
        let mut state = RevealState::seeded("hi", 7);
        assert_eq!(tick_interval_ms(200, state.len()), Some(100));

        let first = state.tick();
        assert!(!first.done);
        let shown: Vec<char> = first.text.chars().collect();
        let source = ['h', 'i'];
        let revealed = state.order()[0];
        let hidden = 1 - revealed;
        assert_eq!(shown[revealed], source[revealed]);
        assert!(state.is_revealed(revealed));
        assert!(!state.is_revealed(hidden));
        assert_ne!(shown[hidden], ' ');
        assert!(ALPHABET.contains(shown[hidden]));

        let second = state.tick();
        assert_eq!(second, RevealFrame { text: "hi".into(), done: true });
    }

    #[test]
    fn test_empty_text_is_complete() {
        let mut state = RevealState::seeded("", 1);
        assert!(state.is_complete());
        assert_eq!(state.tick(), RevealFrame { text: String::new(), done: true });
    }

    #[test]
    fn test_ticks_after_completion_stay_final() {
        let mut state = RevealState::seeded("ok", 3);
        state.tick();
        state.tick();
        assert_eq!(state.tick().text, "ok");
        assert_eq!(state.revealed_count(), 2);
    }

    #[test]
    fn test_same_seed_same_order() {
        let a = RevealState::seeded("krishan patel", 42);
        let b = RevealState::seeded("krishan patel", 42);
        assert_eq!(a.order(), b.order());
    }

    #[test]
    fn test_multibyte_characters() {
        let mut state = RevealState::seeded("née ✓", 9);
        let mut last = state.tick();
        while !last.done {
            assert_eq!(last.text.chars().count(), 5);
            last = state.tick();
        }
        assert_eq!(last.text, "née ✓");
    }

    /// Timer that records which handles are live instead of firing.
    #[derive(Clone, Default)]
    struct FakeTimer {
        live: Rc<RefCell<Vec<u32>>>,
        next: Rc<Cell<u32>>,
        refuse: bool,
    }

    impl FakeTimer {
        fn live(&self) -> Vec<u32> {
            self.live.borrow().clone()
        }
    }

    impl IntervalTimer for FakeTimer {
        type Handle = u32;

        fn start(&self, _interval_ms: u32) -> Option<u32> {
            if self.refuse {
                return None;
            }
            let id = self.next.get();
            self.next.set(id + 1);
            self.live.borrow_mut().push(id);
            Some(id)
        }

        fn cancel(&self, handle: u32) {
            self.live.borrow_mut().retain(|&h| h != handle);
        }
    }

    fn run_to_end(runner: &mut RevealRunner<FakeTimer>) -> String {
        let mut last = String::new();
        while let Some(text) = runner.tick() {
            last = text;
        }
        last
    }

    #[test]
    fn test_runner_releases_timer_when_done() {
        let timer = FakeTimer::default();
        let mut runner = RevealRunner::new(timer.clone());

        assert_eq!(runner.restart("abc", 300), masked("abc"));
        assert_eq!(timer.live(), vec![0]);

        assert_eq!(run_to_end(&mut runner), "abc");
        assert!(timer.live().is_empty());
        assert!(!runner.is_running());
    }

    #[test]
    fn test_text_change_mid_run_keeps_one_timer() {
        let timer = FakeTimer::default();
        let mut runner = RevealRunner::new(timer.clone());

        runner.restart("hello", 500);
        runner.tick();
        runner.tick();

        assert_eq!(runner.restart("world", 500), masked("world"));
        assert_eq!(timer.live(), vec![1]);

        assert_eq!(run_to_end(&mut runner), "world");
        assert!(timer.live().is_empty());
    }

    #[test]
    fn test_duration_change_restarts() {
        let timer = FakeTimer::default();
        let mut runner = RevealRunner::new(timer.clone());

        runner.restart("same", 400);
        runner.restart("same", 100);

        assert_eq!(timer.live(), vec![1]);
        assert_eq!(run_to_end(&mut runner), "same");
    }

    #[test]
    fn test_empty_text_starts_no_timer() {
        let timer = FakeTimer::default();
        let mut runner = RevealRunner::new(timer.clone());

        runner.restart("abc", 300);
        assert_eq!(runner.restart("", 300), "");

        assert!(timer.live().is_empty());
        assert_eq!(runner.tick(), None);
    }

    #[test]
    fn test_refused_timer_shows_text() {
        let timer = FakeTimer {
            refuse: true,
            ..FakeTimer::default()
        };
        let mut runner = RevealRunner::new(timer.clone());

        assert_eq!(runner.restart("hi", 200), "hi");
        assert!(!runner.is_running());
        assert_eq!(runner.tick(), None);
    }

    #[test]
    fn test_stop_cancels() {
        let timer = FakeTimer::default();
        let mut runner = RevealRunner::new(timer.clone());

        runner.restart("abc", 300);
        runner.stop();

        assert!(timer.live().is_empty());
        assert_eq!(runner.tick(), None);
    }

    proptest! {
        #[test]
        fn prop_order_is_permutation(text in "[a-z ]{0,40}", seed in any::<u64>()) {
            let state = RevealState::seeded(&text, seed);
            let mut order = state.order().to_vec();
            order.sort_unstable();
            prop_assert_eq!(order, (0..text.chars().count()).collect::<Vec<_>>());
        }

        #[test]
        fn prop_reveal_converges(text in "[ -~]{1,60}", seed in any::<u64>()) {
            let mut state = RevealState::seeded(&text, seed);
            let len = state.len();
            let source: Vec<char> = text.chars().collect();

            for tick in 1..=len {
                let frame = state.tick();
                let shown: Vec<char> = frame.text.chars().collect();

                prop_assert_eq!(state.revealed_count(), tick);
                prop_assert_eq!(shown.len(), len);
                for (i, &c) in source.iter().enumerate() {
                    if c == ' ' {
                        prop_assert_eq!(shown[i], ' ');
                    }
                    if state.is_revealed(i) {
                        prop_assert_eq!(shown[i], c);
                    }
                }
                prop_assert_eq!(frame.done, tick == len);
            }

            prop_assert!(state.is_complete());
            prop_assert_eq!(state.tick().text, text);
        }
    }
}
