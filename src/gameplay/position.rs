/// Coarse table position relative to the button.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Position {
    Early,
    Middle,
    Late,
}

impl Position {
    /// Classifies a seat by its distance clockwise from the button.
    ///
    /// The button is Late, and so is the cutoff once more than three
    /// players are seated. The first third of the seats after the button
    /// (at least one) are Early and the rest Middle.
    pub fn from_seat(seat: usize, button: usize, n: usize) -> Self {
        assert!(n > 0, "empty table");
        let offset = (seat % n + n - button % n) % n;
        match offset {
            0 => Self::Late,
            o if n > 3 && o == n - 1 => Self::Late,
            o if o <= std::cmp::max(1, n / 3) => Self::Early,
            _ => Self::Middle,
        }
    }
    /// scales the fold threshold: tighter early, looser late
    pub fn multiplier(&self) -> f32 {
        match self {
            Self::Early => 0.5,
            Self::Middle => 0.8,
            Self::Late => 1.3,
        }
    }
}

impl TryFrom<&str> for Position {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "early" => Ok(Self::Early),
            "middle" => Ok(Self::Middle),
            "late" => Ok(Self::Late),
            _ => Err(anyhow::anyhow!("invalid position: {}", s)),
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Early => write!(f, "early"),
            Self::Middle => write!(f, "middle"),
            Self::Late => write!(f, "late"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_handed() {
        let positions = (0..6)
            .map(|seat| Position::from_seat(seat, 2, 6))
            .collect::<Vec<_>>();
        assert_eq!(
            positions,
            vec![
                Position::Middle,
                Position::Late,
                Position::Late,
                Position::Early,
                Position::Early,
                Position::Middle,
            ]
        );
    }

    #[test]
    fn short_tables() {
        assert_eq!(Position::from_seat(0, 0, 2), Position::Late);
        assert_eq!(Position::from_seat(1, 0, 2), Position::Early);
        assert_eq!(Position::from_seat(1, 0, 3), Position::Early);
        assert_eq!(Position::from_seat(2, 0, 3), Position::Middle);
    }

    #[test]
    fn multipliers() {
        assert_eq!(Position::Early.multiplier(), 0.5);
        assert_eq!(Position::Middle.multiplier(), 0.8);
        assert_eq!(Position::Late.multiplier(), 1.3);
        assert_eq!(Position::try_from("LATE").unwrap(), Position::Late);
    }
}
