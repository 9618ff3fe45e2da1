use super::pi;
use super::session_rng::SessionRng;

/// Produces and checks the target sequence for one game mode.
pub trait SequenceStrategy: Send {
    /// Exclusive upper bound of a valid element.
    fn element_range(&self) -> u8;

    fn generate(&self, len: usize, rng: &mut SessionRng) -> Vec<u8>;

    /// Appends exactly one element, leaving the existing prefix untouched.
    fn extend(&self, target: &mut Vec<u8>, rng: &mut SessionRng);

    fn matches(&self, expected: u8, actual: u8) -> bool {
        expected == actual
    }

    /// Longest target this strategy can produce, if bounded.
    fn max_len(&self) -> Option<usize> {
        None
    }
}

/// Uniformly random grid cells; used by the colors and numbers modes.
#[derive(Debug, Clone, Copy)]
pub struct RandomCells {
    cell_count: u8,
}

impl RandomCells {
    pub fn new(cell_count: u8) -> Self {
        Self { cell_count }
    }
}

impl SequenceStrategy for RandomCells {
    fn element_range(&self) -> u8 {
        self.cell_count
    }

    fn generate(&self, len: usize, rng: &mut SessionRng) -> Vec<u8> {
        (0..len).map(|_| rng.next_cell(self.cell_count)).collect()
    }

    fn extend(&self, target: &mut Vec<u8>, rng: &mut SessionRng) {
        target.push(rng.next_cell(self.cell_count));
    }
}

/// The fixed digits of π. Never random.
#[derive(Debug, Clone, Copy, Default)]
pub struct PiDigits;

impl SequenceStrategy for PiDigits {
    fn element_range(&self) -> u8 {
        10
    }

    fn generate(&self, len: usize, _rng: &mut SessionRng) -> Vec<u8> {
        pi::prefix(len)
    }

    fn extend(&self, target: &mut Vec<u8>, _rng: &mut SessionRng) {
        if let Some(digit) = pi::digit_at(target.len()) {
            target.push(digit);
        }
    }

    fn max_len(&self) -> Option<usize> {
        Some(pi::digit_count())
    }
}
