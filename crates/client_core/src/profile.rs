//! Behaviour profiles of the form screen.
//!
//! The screen historically shipped in three flavours that differ only in the
//! response shape they read, whether numeric controls are bounded, whether a
//! non-2xx status counts as failure and whether a loading state is shown.

use std::{fmt, str::FromStr};

use shared::ResponseShape;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Profile {
    Classic,
    #[default]
    Labeled,
    Guarded,
}

impl Profile {
    pub const ALL: [Profile; 3] = [Profile::Classic, Profile::Labeled, Profile::Guarded];

    pub fn label(self) -> &'static str {
        match self {
            Profile::Classic => "classic",
            Profile::Labeled => "labeled",
            Profile::Guarded => "guarded",
        }
    }

    pub fn response_shape(self) -> ResponseShape {
        match self {
            Profile::Classic => ResponseShape::PredictionProbability,
            Profile::Labeled | Profile::Guarded => ResponseShape::AttritionLabel,
        }
    }

    /// Numeric controls clamp to the declared [min, max].
    pub fn enforces_bounds(self) -> bool {
        matches!(self, Profile::Classic)
    }

    /// Non-2xx statuses fail the submission instead of being parsed.
    pub fn inspects_status(self) -> bool {
        matches!(self, Profile::Guarded)
    }

    /// The submit button is disabled and shows progress while requests are
    /// outstanding.
    pub fn shows_loading(self) -> bool {
        matches!(self, Profile::Guarded)
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Profile::ALL
            .into_iter()
            .find(|profile| profile.label() == wanted)
            .ok_or_else(|| format!("unknown profile '{s}' (expected classic, labeled or guarded)"))
    }
}

/// How responses of overlapping submissions are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPolicy {
    /// Every response is applied when it arrives; the last arrival wins.
    #[default]
    LastWriteWins,
    /// Responses older than the newest applied ticket are dropped.
    LatestRequest,
}

impl SubmissionPolicy {
    pub fn label(self) -> &'static str {
        match self {
            SubmissionPolicy::LastWriteWins => "last-write-wins",
            SubmissionPolicy::LatestRequest => "latest-request",
        }
    }
}

impl fmt::Display for SubmissionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SubmissionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "last-write-wins" => Ok(SubmissionPolicy::LastWriteWins),
            "latest-request" => Ok(SubmissionPolicy::LatestRequest),
            _ => Err(format!(
                "unknown submission policy '{s}' (expected last-write-wins or latest-request)"
            )),
        }
    }
}
