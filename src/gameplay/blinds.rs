use crate::Chips;

/// Forced bets posted before the hole cards are dealt.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Blinds {
    pub small: Chips,
    pub big: Chips,
}

impl Blinds {
    pub fn new(small: Chips, big: Chips) -> Self {
        assert!(small <= big, "small blind {} exceeds big blind {}", small, big);
        Self { small, big }
    }
}

impl Default for Blinds {
    fn default() -> Self {
        Self::new(crate::DEFAULT_SMALL_BLIND, crate::DEFAULT_BIG_BLIND)
    }
}

impl std::fmt::Display for Blinds {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.small, self.big)
    }
}
