//! Tab controls and panels
//!
//! After the first click exactly one control and at most one panel are
//! active. The panel count is one unless the clicked control targets a panel
//! that does not exist, in which case no panel is active.

use crate::markup::TabsMarkup;

/// A tab control bound to its target panel id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabControl {
    pub id: String,
    pub label: String,
    pub target: String,
    pub active: bool,
}

/// A tab panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabPanel {
    pub id: String,
    pub content: String,
    pub active: bool,
}

/// Fixed set of tab controls and panels
#[derive(Debug, Clone, Default)]
pub struct TabSet {
    controls: Vec<TabControl>,
    panels: Vec<TabPanel>,
}

impl TabSet {
    /// Build from markup. Initial active flags are taken as declared.
    pub fn from_markup(markup: &TabsMarkup) -> Self {
        Self {
            controls: markup
                .controls
                .iter()
                .map(|c| TabControl {
                    id: c.id.clone(),
                    label: c.label.clone(),
                    target: c.target.clone(),
                    active: c.active,
                })
                .collect(),
            panels: markup
                .panels
                .iter()
                .map(|p| TabPanel {
                    id: p.id.clone(),
                    content: p.content.clone(),
                    active: p.active,
                })
                .collect(),
        }
    }

    pub fn controls(&self) -> &[TabControl] {
        &self.controls
    }

    pub fn panels(&self) -> &[TabPanel] {
        &self.panels
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// Handle a click on the control at `index`.
    ///
    /// Out-of-range indexes are ignored.
    pub fn click(&mut self, index: usize) {
        if index >= self.controls.len() {
            return;
        }

        for control in &mut self.controls {
            control.active = false;
        }
        for panel in &mut self.panels {
            panel.active = false;
        }

        let control = &mut self.controls[index];
        control.active = true;

        match self.panels.iter_mut().find(|p| p.id == control.target) {
            Some(panel) => {
                panel.active = true;
                log::debug!("tab '{}' activated panel '{}'", control.id, panel.id);
            }
            None => {
                log::warn!(
                    "tab '{}' targets missing panel '{}'",
                    control.id,
                    control.target
                );
            }
        }
    }

    /// Index of the first active control
    pub fn active_control(&self) -> Option<usize> {
        self.controls.iter().position(|c| c.active)
    }

    /// Index of the first active panel
    pub fn active_panel(&self) -> Option<usize> {
        self.panels.iter().position(|p| p.active)
    }

    pub fn is_control_active(&self, id: &str) -> bool {
        self.controls.iter().any(|c| c.id == id && c.active)
    }

    pub fn is_panel_active(&self, id: &str) -> bool {
        self.panels.iter().any(|p| p.id == id && p.active)
    }
}
