//! Quote of the day.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// A motivational line with its emoji.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Motivation {
    /// Quote text
    pub quote: &'static str,
    /// Decoration shown next to the quote
    pub emoji: &'static str,
}

const QUOTES: [Motivation; 15] = [
    Motivation { quote: "Consistency beats motivation - keep going!", emoji: "🚀" },
    Motivation { quote: "Small steps every day lead to big achievements!", emoji: "🎯" },
    Motivation { quote: "Focus on progress, not perfection!", emoji: "💪" },
    Motivation { quote: "Your future self will thank you for today's effort!", emoji: "⭐" },
    Motivation { quote: "Success is the sum of small efforts repeated daily!", emoji: "🔥" },
    Motivation { quote: "The expert in anything was once a beginner!", emoji: "🌱" },
    Motivation { quote: "Discipline is choosing what you want most over what you want now!", emoji: "🎓" },
    Motivation { quote: "Every day is a fresh start to reach your goals!", emoji: "🌅" },
    Motivation { quote: "Your only limit is the one you set for yourself!", emoji: "🚀" },
    Motivation { quote: "Dream big, work hard, stay focused!", emoji: "💎" },
    Motivation { quote: "The harder you work, the luckier you get!", emoji: "🍀" },
    Motivation { quote: "Believe in yourself and all that you are!", emoji: "✨" },
    Motivation { quote: "Education is the passport to the future!", emoji: "🎓" },
    Motivation { quote: "Stay hungry, stay foolish, stay focused!", emoji: "🧠" },
    Motivation { quote: "You're capable of amazing things!", emoji: "🌟" },
];

/// The quote for `date`. Same all day, rotates through the pool by day of year.
#[must_use]
pub fn daily_motivation(date: NaiveDate) -> &'static Motivation {
    &QUOTES[date.ordinal() as usize % QUOTES.len()]
}

/// Every quote in rotation order.
#[must_use]
pub const fn all() -> &'static [Motivation] {
    &QUOTES
}
