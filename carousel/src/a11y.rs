use alloc::vec;
use alloc::vec::Vec;

use crate::{ActiveSet, LoopBuffer};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    TabList,
    Tab,
    TabPanel,
    Button,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TabList => "tablist",
            Self::Tab => "tab",
            Self::TabPanel => "tabpanel",
            Self::Button => "button",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TabIndex {
    /// `tabindex="0"`
    Focusable,
    /// `tabindex="-1"`
    Removed,
}

impl TabIndex {
    pub fn value(self) -> i32 {
        match self {
            Self::Focusable => 0,
            Self::Removed => -1,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RootAttrs {
    pub role: Option<Role>,
    /// `aria-live="polite"` while initialized.
    pub aria_live_polite: bool,
    pub initialized: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavAttrs {
    pub role: Option<Role>,
    pub tabindex: Option<TabIndex>,
    pub disabled: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PanelAttrs {
    pub role: Option<Role>,
    pub aria_hidden: Option<bool>,
    pub active: bool,
    /// `tabindex` applied to every focusable descendant of the panel.
    pub descendant_tabindex: Option<TabIndex>,
    /// Presentation duplicate created for wraparound.
    pub is_clone: bool,
}

impl PanelAttrs {
    pub fn is_exposed(&self) -> bool {
        self.aria_hidden == Some(false)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabAttrs {
    pub role: Option<Role>,
    pub tabindex: Option<TabIndex>,
    pub aria_selected: Option<bool>,
    pub active: bool,
    /// A visually-hidden "currently selected" label is appended to the tab.
    pub selected_label: bool,
}

/// The attribute model the host mirrors onto its document.
///
/// Panels are indexed by buffer index; tabs by real index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Accessibility {
    root: RootAttrs,
    prev: NavAttrs,
    next: NavAttrs,
    panels: Vec<PanelAttrs>,
    tabs: Vec<TabAttrs>,
}

impl Accessibility {
    pub(crate) fn new(buffer: &LoopBuffer, tab_count: usize) -> Self {
        let nav = NavAttrs {
            role: Some(Role::Button),
            tabindex: Some(TabIndex::Focusable),
            disabled: false,
        };
        let panels = (0..buffer.track_len())
            .map(|buffer_index| PanelAttrs {
                role: Some(Role::TabPanel),
                aria_hidden: Some(true),
                active: false,
                descendant_tabindex: Some(TabIndex::Removed),
                is_clone: buffer.is_looping() && !buffer.is_settled(buffer_index),
            })
            .collect();
        let tab = TabAttrs {
            role: Some(Role::Tab),
            tabindex: Some(TabIndex::Focusable),
            aria_selected: Some(false),
            active: false,
            selected_label: false,
        };
        Self {
            root: RootAttrs {
                role: Some(Role::TabList),
                aria_live_polite: true,
                initialized: true,
            },
            prev: nav,
            next: nav,
            panels,
            tabs: vec![tab; tab_count],
        }
    }

    pub fn root(&self) -> &RootAttrs {
        &self.root
    }

    pub fn prev(&self) -> &NavAttrs {
        &self.prev
    }

    pub fn next(&self) -> &NavAttrs {
        &self.next
    }

    pub fn panels(&self) -> &[PanelAttrs] {
        &self.panels
    }

    pub fn tabs(&self) -> &[TabAttrs] {
        &self.tabs
    }

    /// Index of the tab holding the active state, if any.
    pub fn selected_tab(&self) -> Option<usize> {
        self.tabs.iter().position(|t| t.active)
    }

    /// Whether the exposed panels are exactly the active set and every other panel is hidden
    /// with its focusable descendants removed from the tab order.
    pub fn mirrors(&self, active: &ActiveSet) -> bool {
        self.panels.iter().enumerate().all(|(buffer_index, panel)| {
            if active.contains(buffer_index) {
                panel.aria_hidden == Some(false)
                    && panel.active
                    && panel.descendant_tabindex == Some(TabIndex::Focusable)
            } else {
                panel.aria_hidden == Some(true)
                    && !panel.active
                    && panel.descendant_tabindex == Some(TabIndex::Removed)
            }
        })
    }

    pub(crate) fn deactivate_panels(&mut self) {
        for panel in &mut self.panels {
            panel.active = false;
            panel.aria_hidden = Some(true);
            panel.descendant_tabindex = Some(TabIndex::Removed);
        }
    }

    /// Activates every physical copy of `real_index`.
    pub(crate) fn activate_panel(&mut self, buffer: &LoopBuffer, real_index: usize) {
        for buffer_index in buffer.twins(real_index) {
            debug_assert!(
                buffer_index < self.panels.len(),
                "activate_panel: buffer index out of bounds (i={buffer_index}, len={})",
                self.panels.len()
            );
            let Some(panel) = self.panels.get_mut(buffer_index) else {
                cwarn!(buffer_index, "activate_panel: buffer index out of bounds");
                continue;
            };
            panel.active = true;
            panel.aria_hidden = Some(false);
            panel.descendant_tabindex = Some(TabIndex::Focusable);
        }
    }

    /// Moves the active state to `index`, so exactly one tab holds it.
    pub(crate) fn select_tab(&mut self, index: usize) {
        for (i, tab) in self.tabs.iter_mut().enumerate() {
            let selected = i == index;
            tab.active = selected;
            tab.aria_selected = Some(selected);
            tab.selected_label = selected;
        }
    }

    pub(crate) fn set_nav_disabled(&mut self, prev_disabled: bool, next_disabled: bool) {
        for (nav, disabled) in [(&mut self.prev, prev_disabled), (&mut self.next, next_disabled)] {
            nav.disabled = disabled;
            nav.tabindex = Some(if disabled {
                TabIndex::Removed
            } else {
                TabIndex::Focusable
            });
        }
    }

    /// Removes everything the engine added and drops the clone panels.
    pub(crate) fn strip(&mut self, authored: usize) {
        self.root = RootAttrs::default();
        self.prev = NavAttrs::default();
        self.next = NavAttrs::default();
        self.panels.clear();
        self.panels.resize(authored, PanelAttrs::default());
        for tab in &mut self.tabs {
            *tab = TabAttrs::default();
        }
    }
}
