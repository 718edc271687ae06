//! Rock-paper-scissors.

use rand::Rng;
use std::fmt;

/// One hand in rock-paper-scissors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hand {
    Rock,
    Scissors,
    Paper,
}

impl Hand {
    pub const ALL: [Self; 3] = [Self::Rock, Self::Scissors, Self::Paper];

    /// Menu choice `1`, `2` or `3`.
    pub fn parse(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::Rock),
            "2" => Some(Self::Scissors),
            "3" => Some(Self::Paper),
            _ => None,
        }
    }

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    const fn beats(self) -> Self {
        match self {
            Self::Rock => Self::Scissors,
            Self::Scissors => Self::Paper,
            Self::Paper => Self::Rock,
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Rock => "Rock",
            Self::Scissors => "Scissors",
            Self::Paper => "Paper",
        })
    }
}

/// Result of one round, from the player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Draw,
    Win,
    Lose,
}

impl Verdict {
    pub const fn message(self) -> &'static str {
        match self {
            Self::Draw => "Draw!",
            Self::Win => "You win!",
            Self::Lose => "You lose...",
        }
    }
}

pub fn judge(player: Hand, cpu: Hand) -> Verdict {
    if player == cpu {
        Verdict::Draw
    } else if player.beats() == cpu {
        Verdict::Win
    } else {
        Verdict::Lose
    }
}
