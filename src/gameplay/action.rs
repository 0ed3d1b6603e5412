use crate::Chips;

/// A player's decision at their turn.
///
/// `Raise` carries the increment above the amount owed, so `Raise(20)`
/// facing a bet of 10 commits 30 chips.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Action {
    Fold,
    Check,
    Call,
    Raise(Chips),
}

/// text isomorphism: "fold", "check", "call", "raise 40"
impl TryFrom<&str> for Action {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut words = s.split_whitespace().map(str::to_lowercase);
        let action = match (words.next().as_deref(), words.next()) {
            (Some("fold" | "f"), None) => Self::Fold,
            (Some("check" | "x"), None) => Self::Check,
            (Some("call" | "c"), None) => Self::Call,
            (Some("raise" | "r"), Some(amount)) => Self::Raise(amount.parse()?),
            (Some("raise" | "r"), None) => return Err(anyhow::anyhow!("raise needs an amount")),
            _ => return Err(anyhow::anyhow!("invalid action: {}", s)),
        };
        match words.next() {
            None => Ok(action),
            Some(extra) => Err(anyhow::anyhow!("unexpected input after action: {}", extra)),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Fold => write!(f, "FOLD"),
            Self::Check => write!(f, "CHECK"),
            Self::Call => write!(f, "CALL"),
            Self::Raise(amount) => write!(f, "RAISE {}", amount),
        }
    }
}
