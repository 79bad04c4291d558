use crate::finder::PalindromeFinder;
use crate::rules::Exact;

pub struct PalindromeFinderBuilder<R> {
    rule: R,
    mismatches: Option<usize>,
}

impl Default for PalindromeFinderBuilder<Exact> {
    fn default() -> Self {
        Self::new(Exact)
    }
}

impl<R> PalindromeFinderBuilder<R> {
    pub fn new(rule: R) -> Self {
        Self {
            rule,
            mismatches: None,
        }
    }
    /// Swap the pairing rule, keeping the rest of the configuration.
    pub fn with_rule<S>(self, rule: S) -> PalindromeFinderBuilder<S> {
        PalindromeFinderBuilder {
            rule,
            mismatches: self.mismatches,
        }
    }
    pub fn with_mismatches(mut self, mismatches: usize) -> Self {
        self.mismatches = Some(mismatches);
        self
    }
    pub fn build(self) -> PalindromeFinder<R> {
        match self.mismatches {
            Some(k) => PalindromeFinder::with_mismatches(self.rule, k),
            None => PalindromeFinder::new(self.rule),
        }
    }
}
