//! Feedback calculation for Wordle guesses.
//!
//! This module handles computing the feedback pattern (green/yellow/white)
//! for a guess against a candidate answer word.

use crate::WORD_LENGTH;

/// Represents the feedback for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Correct letter in correct position (green)
    Correct,
    /// Correct letter in wrong position (yellow)
    Present,
    /// Letter not in word (white)
    Absent,
}

impl Feedback {
    /// Convert to a character for display
    pub fn to_char(self) -> char {
        match self {
            Feedback::Correct => '🟩',
            Feedback::Present => '🟨',
            Feedback::Absent => '⬜',
        }
    }

    /// Parse from a character (g=green, y=yellow, w=white)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'g' | '2' => Some(Feedback::Correct),
            'y' | '1' => Some(Feedback::Present),
            'w' | 'b' | '0' => Some(Feedback::Absent),
            _ => None,
        }
    }
}

/// A complete feedback pattern for a 5-letter guess.
/// Encoded as a single u8 value (0-242) for efficiency.
/// Each position can be 0 (absent), 1 (present), or 2 (correct).
/// Pattern = 81*p0 + 27*p1 + 9*p2 + 3*p3 + p4, most significant position
/// first, so the derived ordering is the canonical branch ranking used when
/// displaying sibling branches of the strategy tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FeedbackPattern(pub u8);

impl FeedbackPattern {
    /// Total number of possible patterns (3^5)
    pub const NUM_PATTERNS: usize = 243;

    /// Create a new pattern from individual feedback values
    pub fn new(feedbacks: [Feedback; WORD_LENGTH]) -> Self {
        let mut pattern: u8 = 0;
        for fb in feedbacks {
            let value = match fb {
                Feedback::Absent => 0,
                Feedback::Present => 1,
                Feedback::Correct => 2,
            };
            pattern = pattern * 3 + value;
        }
        Self(pattern)
    }

    /// Calculate the feedback pattern for a guess against a candidate answer.
    ///
    /// A single left-to-right pass: a position is Correct when the letters
    /// match, and Present when the answer contains the letter and the guess
    /// prefix before this position does not already contain it. A repeated
    /// guess letter is therefore credited Present at most once, regardless of
    /// how often the answer contains it. This is intentionally simpler than
    /// the official game's two-pass duplicate-letter rule and must be kept
    /// as-is: changing it changes the grouping and with it the whole tree.
    pub fn calculate(guess: &str, answer: &str) -> Self {
        let guess_bytes = guess.as_bytes();
        let answer_bytes = answer.as_bytes();

        debug_assert_eq!(guess_bytes.len(), WORD_LENGTH);
        debug_assert_eq!(answer_bytes.len(), WORD_LENGTH);

        let mut feedback = [Feedback::Absent; WORD_LENGTH];

        for i in 0..WORD_LENGTH {
            let ch = guess_bytes[i];
            if ch == answer_bytes[i] {
                feedback[i] = Feedback::Correct;
            } else if answer_bytes.contains(&ch) && !guess_bytes[..i].contains(&ch) {
                feedback[i] = Feedback::Present;
            }
        }

        Self::new(feedback)
    }

    /// Convert pattern to array of feedbacks
    pub fn to_feedbacks(self) -> [Feedback; WORD_LENGTH] {
        let mut pattern = self.0;
        let mut feedbacks = [Feedback::Absent; WORD_LENGTH];
        for feedback in feedbacks.iter_mut().rev() {
            *feedback = match pattern % 3 {
                0 => Feedback::Absent,
                1 => Feedback::Present,
                2 => Feedback::Correct,
                _ => unreachable!(),
            };
            pattern /= 3;
        }
        feedbacks
    }

    /// Parse a pattern from a string like "gywww" or "21000"
    pub fn parse(s: &str) -> Option<Self> {
        if s.chars().count() != WORD_LENGTH {
            return None;
        }
        let feedbacks: Option<Vec<_>> = s.chars().map(Feedback::from_char).collect();
        let feedbacks = feedbacks?;
        let arr: [Feedback; WORD_LENGTH] = feedbacks.try_into().ok()?;
        Some(Self::new(arr))
    }

    /// Display as emoji string
    pub fn to_emoji_string(self) -> String {
        self.to_feedbacks().iter().map(|f| f.to_char()).collect()
    }
}

impl std::fmt::Display for FeedbackPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_emoji_string())
    }
}
