//! Allowed focus session lengths.

use serde::{Deserialize, Serialize};

use crate::error::StudyFocusError;

/// A selectable focus session length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Preset {
    /// Classic 25-minute Pomodoro.
    TwentyFive,
    /// 50-minute deep work block.
    Fifty,
    /// 90-minute extended block.
    Ninety,
}

impl Preset {
    /// Preset the timer starts with.
    pub const DEFAULT: Self = Self::TwentyFive;

    /// Every preset, shortest first.
    pub const ALL: [Self; 3] = [Self::TwentyFive, Self::Fifty, Self::Ninety];

    /// Length in minutes.
    #[must_use]
    pub const fn minutes(self) -> u32 {
        match self {
            Self::TwentyFive => 25,
            Self::Fifty => 50,
            Self::Ninety => 90,
        }
    }

    /// Length in seconds.
    #[must_use]
    pub const fn seconds(self) -> u32 {
        self.minutes() * 60
    }

    /// Look up a preset by its length in minutes.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDurationSelection` if `minutes` is not an allowed preset.
    pub fn from_minutes(minutes: u32) -> Result<Self, StudyFocusError> {
        match minutes {
            25 => Ok(Self::TwentyFive),
            50 => Ok(Self::Fifty),
            90 => Ok(Self::Ninety),
            other => Err(StudyFocusError::InvalidDurationSelection(other)),
        }
    }

    /// Position in [`Preset::ALL`], used for number-key shortcuts.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::TwentyFive => 0,
            Self::Fifty => 1,
            Self::Ninety => 2,
        }
    }
}

impl Default for Preset {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for Preset {
    type Error = StudyFocusError;

    fn try_from(minutes: u32) -> Result<Self, Self::Error> {
        Self::from_minutes(minutes)
    }
}

impl From<Preset> for u32 {
    fn from(preset: Preset) -> Self {
        preset.minutes()
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} min", self.minutes())
    }
}
