use alloc::string::String;
use alloc::vec::Vec;

use crate::{CarouselError, Element};

/// One authored slide.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Panel {
    /// Stable identity used for fragment deep-linking.
    pub id: Option<String>,
}

impl Panel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
        }
    }
}

/// What the host found under the carousel root.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Markup {
    pub nav_prev: bool,
    pub nav_next: bool,
    pub inner_track: bool,
    pub panels: Vec<Panel>,
    /// Number of tab-nav controls; zero when the carousel has no tab navigation.
    pub tabs: usize,
}

impl Markup {
    /// Complete markup with the given panels and no tab navigation.
    pub fn new(panels: impl IntoIterator<Item = Panel>) -> Self {
        Self {
            nav_prev: true,
            nav_next: true,
            inner_track: true,
            panels: panels.into_iter().collect(),
            tabs: 0,
        }
    }

    /// Complete markup with `count` anonymous panels.
    pub fn with_panel_count(count: usize) -> Self {
        Self::new((0..count).map(|_| Panel::new()))
    }

    /// Adds one tab-nav control per panel.
    pub fn with_tab_nav(mut self) -> Self {
        self.tabs = self.panels.len();
        self
    }

    pub fn with_tabs(mut self, tabs: usize) -> Self {
        self.tabs = tabs;
        self
    }

    pub fn validate(&self) -> Result<(), CarouselError> {
        if !self.nav_prev {
            return Err(CarouselError::MissingElement(Element::NavPrev));
        }
        if !self.nav_next {
            return Err(CarouselError::MissingElement(Element::NavNext));
        }
        if !self.inner_track {
            return Err(CarouselError::MissingElement(Element::InnerTrack));
        }
        if self.panels.is_empty() {
            return Err(CarouselError::NoPanels);
        }
        if self.tabs != 0 && self.tabs != self.panels.len() {
            return Err(CarouselError::TabCountMismatch {
                tabs: self.tabs,
                panels: self.panels.len(),
            });
        }
        Ok(())
    }

    /// Finds the panel a URL fragment points at. The leading `#` is optional.
    pub fn find_fragment(&self, fragment: &str) -> Option<usize> {
        let id = fragment.strip_prefix('#').unwrap_or(fragment);
        if id.is_empty() {
            return None;
        }
        self.panels
            .iter()
            .position(|panel| panel.id.as_deref() == Some(id))
    }
}
