use crate::Probability;

/// A coarse reading of equity against the fair share `1 / players`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Verdict {
    VeryWeak,
    Weak,
    Fair,
    Good,
    VeryGood,
    Excellent,
}

impl Verdict {
    pub fn from_equity(equity: Probability, opponents: usize) -> Self {
        let fair = 1. / (opponents + 1) as Probability;
        match equity {
            e if e < fair / 2. => Self::VeryWeak,
            e if e < fair => Self::Weak,
            e if e < fair + 0.10 => Self::Fair,
            e if e < fair + 0.20 => Self::Good,
            e if e < fair + 0.35 => Self::VeryGood,
            _ => Self::Excellent,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::VeryWeak => write!(f, "very weak"),
            Self::Weak => write!(f, "weak"),
            Self::Fair => write!(f, "fair"),
            Self::Good => write!(f, "good"),
            Self::VeryGood => write!(f, "very good"),
            Self::Excellent => write!(f, "excellent"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heads_up_bands() {
        assert_eq!(Verdict::from_equity(0.20, 1), Verdict::VeryWeak);
        assert_eq!(Verdict::from_equity(0.40, 1), Verdict::Weak);
        assert_eq!(Verdict::from_equity(0.55, 1), Verdict::Fair);
        assert_eq!(Verdict::from_equity(0.65, 1), Verdict::Good);
        assert_eq!(Verdict::from_equity(0.75, 1), Verdict::VeryGood);
        assert_eq!(Verdict::from_equity(0.90, 1), Verdict::Excellent);
    }

    #[test]
    fn bands_shift_with_table_size() {
        assert_eq!(Verdict::from_equity(0.30, 3), Verdict::Fair);
        assert_eq!(Verdict::from_equity(0.30, 1), Verdict::Weak);
    }
}
