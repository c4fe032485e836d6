/// Majority vote over the last `N` reads of a contact.
///
/// `N` must be at least 1, an empty window is refused at build time:
///
/// ```compile_fail
/// let _ = dipcomp_control::input::Debounced::<0>::new();
/// ```
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debounced<const N: usize> {
    debounce_filter: DebounceBuffer<N>,
    active: bool,
}

impl<const N: usize> Debounced<N> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            debounce_filter: DebounceBuffer::new(),
            active: false,
        }
    }

    pub fn update(&mut self, value: bool) -> bool {
        self.debounce_filter.write(value);
        self.active = self.debounce_filter.read();
        self.active
    }

    pub fn value(&self) -> bool {
        self.active
    }
}

impl<const N: usize> Default for Debounced<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Last `N` reads of a contact with a running count of the closed ones.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
struct DebounceBuffer<const N: usize> {
    history: [bool; N],
    oldest: usize,
    closed: usize,
}

impl<const N: usize> DebounceBuffer<N> {
    const NOT_EMPTY: () = assert!(N > 0, "debouncing needs at least one read");

    fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NOT_EMPTY;
        Self {
            history: [false; N],
            oldest: 0,
            closed: 0,
        }
    }

    fn write(&mut self, value: bool) {
        let evicted = core::mem::replace(&mut self.history[self.oldest], value);
        self.closed = self.closed + usize::from(value) - usize::from(evicted);
        self.oldest = if self.oldest + 1 == N { 0 } else { self.oldest + 1 };
    }

    fn read(&self) -> bool {
        self.closed > N / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_glitch_is_ignored() {
        let mut switch = Debounced::<4>::new();
        assert!(!switch.update(true));
        assert!(!switch.update(false));
        assert!(!switch.update(false));
        assert!(!switch.value());
    }

    #[test]
    fn stable_contact_is_accepted_after_majority_of_reads() {
        let mut switch = Debounced::<4>::new();
        assert!(!switch.update(true));
        assert!(!switch.update(true));
        assert!(switch.update(true));
        assert!(switch.value());
    }

    #[test]
    fn contact_released_after_window_turns_over() {
        let mut switch = Debounced::<3>::new();
        for _ in 0..5 {
            switch.update(true);
        }
        assert!(switch.value());
        assert!(switch.update(false));
        assert!(!switch.update(false));
        for _ in 0..10 {
            assert!(!switch.update(false));
        }
    }

    #[test]
    fn count_follows_the_window_over_many_rotations() {
        let mut buffer = DebounceBuffer::<5>::new();
        for i in 0..23 {
            buffer.write(i % 3 == 0);
            let expected = buffer.history.iter().filter(|x| **x).count();
            assert_eq!(buffer.closed, expected);
        }
    }

    #[test]
    fn single_read_buffer_follows_input() {
        let mut switch = Debounced::<1>::new();
        assert!(switch.update(true));
        assert!(!switch.update(false));
    }
}
