use alloc::string::String;
use core::fmt;

use crate::Breakpoint;

/// A required element of the carousel markup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Element {
    NavPrev,
    NavNext,
    InnerTrack,
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NavPrev => "previous control",
            Self::NavNext => "next control",
            Self::InnerTrack => "inner track",
        })
    }
}

/// Configuration errors. All of them are fatal at construction: a carousel either initializes
/// completely or not at all.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CarouselError {
    #[error("unrecognized breakpoint `{0}`")]
    UnknownBreakpoint(String),
    #[error("carousel markup is missing its {0}")]
    MissingElement(Element),
    #[error("carousel markup has no panels")]
    NoPanels,
    #[error("the {breakpoint} layout must show and step at least one panel")]
    InvalidLayout { breakpoint: Breakpoint },
    #[error("tab navigation has {tabs} tabs for {panels} panels")]
    TabCountMismatch { tabs: usize, panels: usize },
}
