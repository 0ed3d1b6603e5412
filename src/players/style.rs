use crate::Probability;
use rand::Rng;

/// A bot's playing style.
///
/// Tightness is how readily weak hands are folded, aggression how often
/// the bot bets or raises instead of calling. Both lie in `[0, 1]`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Style {
    /// tight aggressive
    Tag,
    /// loose aggressive
    Lag,
    /// call-fold
    Ctr,
    /// nitty
    Nit,
    /// loose passive
    Fish,
}

impl Style {
    pub const fn all() -> [Self; 5] {
        [Self::Tag, Self::Lag, Self::Ctr, Self::Nit, Self::Fish]
    }
    pub fn tightness(&self) -> Probability {
        match self {
            Self::Tag => 0.75,
            Self::Lag => 0.35,
            Self::Ctr => 0.55,
            Self::Nit => 0.90,
            Self::Fish => 0.30,
        }
    }
    pub fn aggression(&self) -> Probability {
        match self {
            Self::Tag => 0.85,
            Self::Lag => 0.80,
            Self::Ctr => 0.40,
            Self::Nit => 0.50,
            Self::Fish => 0.20,
        }
    }
    pub fn name(&self) -> &'static str {
        match self {
            Self::Tag => "TAG (Tight Aggressive)",
            Self::Lag => "LAG (Loose Aggressive)",
            Self::Ctr => "CTR (Call-Fold)",
            Self::Nit => "NIT (Nitty)",
            Self::Fish => "FISH (Loose-Passive)",
        }
    }
    pub fn choose<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::all()[rng.random_range(0..5)]
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::try_from(crate::DEFAULT_BOT_TYPE).unwrap_or(Self::Tag)
    }
}

/// preset code isomorphism: "TAG", "lag", ...
impl TryFrom<&str> for Style {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_uppercase().as_str() {
            "TAG" => Ok(Self::Tag),
            "LAG" => Ok(Self::Lag),
            "CTR" => Ok(Self::Ctr),
            "NIT" => Ok(Self::Nit),
            "FISH" => Ok(Self::Fish),
            _ => Err(anyhow::anyhow!("unknown bot type: {}", s)),
        }
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Tag => write!(f, "TAG"),
            Self::Lag => write!(f, "LAG"),
            Self::Ctr => write!(f, "CTR"),
            Self::Nit => write!(f, "NIT"),
            Self::Fish => write!(f, "FISH"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets() {
        assert_eq!((Style::Tag.tightness(), Style::Tag.aggression()), (0.75, 0.85));
        assert_eq!((Style::Lag.tightness(), Style::Lag.aggression()), (0.35, 0.80));
        assert_eq!((Style::Ctr.tightness(), Style::Ctr.aggression()), (0.55, 0.40));
        assert_eq!((Style::Nit.tightness(), Style::Nit.aggression()), (0.90, 0.50));
        assert_eq!((Style::Fish.tightness(), Style::Fish.aggression()), (0.30, 0.20));
    }

    #[test]
    fn names_round_trip() {
        for style in Style::all() {
            assert_eq!(Style::try_from(style.to_string().as_str()).unwrap(), style);
        }
        assert_eq!(Style::try_from("fish").unwrap(), Style::Fish);
        assert!(Style::try_from("shark").is_err());
        assert_eq!(Style::default(), Style::Tag);
    }
}
