//! Page structure description
//!
//! The page works on a small, fixed set of elements that exist before any
//! interaction happens. `PageMarkup` describes that set: which tab controls
//! and panels there are, which accordion sections, and which form inputs and
//! error slots are present. It is read once at startup and never changes.

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::{CoreError, CoreResult};

/// Full page structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageMarkup {
    /// Tab controls and panels
    pub tabs: TabsMarkup,
    /// Accordion sections, in display order
    pub accordion: Vec<SectionMarkup>,
    /// Registration form
    pub form: FormMarkup,
}

/// Tab controls and panels
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TabsMarkup {
    pub controls: Vec<TabControlMarkup>,
    pub panels: Vec<TabPanelMarkup>,
}

/// A clickable tab control
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TabControlMarkup {
    pub id: String,
    pub label: String,
    /// Identifier of the panel this control shows
    pub target: String,
    /// Initial active state as declared by the markup
    #[serde(default)]
    pub active: bool,
}

/// A tab panel
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TabPanelMarkup {
    pub id: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub active: bool,
}

/// An accordion header and the panel that follows it
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SectionMarkup {
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub open: bool,
}

/// Registration form elements
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormMarkup {
    /// Text inputs, in display order
    pub fields: Vec<FieldMarkup>,
    /// Whether the terms checkbox exists
    pub terms: bool,
    /// Whether the terms checkbox has its error slot
    pub terms_error_slot: bool,
}

/// A text input and its `{name}-error` slot
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldMarkup {
    pub name: String,
    pub label: String,
    /// Render the value masked
    #[serde(default)]
    pub secret: bool,
    #[serde(default = "default_true")]
    pub error_slot: bool,
}

fn default_true() -> bool {
    true
}

impl FieldMarkup {
    fn new(name: &str, label: &str, secret: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            secret,
            error_slot: true,
        }
    }
}

impl Default for FormMarkup {
    fn default() -> Self {
        Self {
            fields: vec![
                FieldMarkup::new("username", "Username", false),
                FieldMarkup::new("email", "Email", false),
                FieldMarkup::new("password", "Password", true),
                FieldMarkup::new("confirmPassword", "Confirm Password", true),
                FieldMarkup::new("phone", "Phone (optional)", false),
            ],
            terms: true,
            terms_error_slot: true,
        }
    }
}

impl Default for PageMarkup {
    fn default() -> Self {
        let control = |id: &str, label: &str, target: &str, active: bool| TabControlMarkup {
            id: id.to_string(),
            label: label.to_string(),
            target: target.to_string(),
            active,
        };
        let panel = |id: &str, content: &str, active: bool| TabPanelMarkup {
            id: id.to_string(),
            content: content.to_string(),
            active,
        };
        let section = |title: &str, body: &str| SectionMarkup {
            title: title.to_string(),
            body: body.to_string(),
            open: false,
        };

        Self {
            tabs: TabsMarkup {
                controls: vec![
                    control("tab-btn-1", "Overview", "tab1", true),
                    control("tab-btn-2", "Features", "tab2", false),
                    control("tab-btn-3", "Details", "tab3", false),
                ],
                panels: vec![
                    panel(
                        "tab1",
                        "An overview of the page: a theme switch, tabs, an accordion and a registration form.",
                        true,
                    ),
                    panel(
                        "tab2",
                        "Exactly one tab is active at a time. Clicking a tab shows its panel and hides the rest.",
                        false,
                    ),
                    panel(
                        "tab3",
                        "The registration form validates every field as you type and again on submit.",
                        false,
                    ),
                ],
            },
            accordion: vec![
                section(
                    "What is this page?",
                    "A small collection of interactive widgets that react to clicks and typing.",
                ),
                section(
                    "How does the accordion work?",
                    "At most one section is open. Clicking an open header closes it.",
                ),
                section(
                    "Is my data sent anywhere?",
                    "No. Submitting the form only validates it locally and then clears it.",
                ),
            ],
            form: FormMarkup::default(),
        }
    }
}

impl PageMarkup {
    /// Reject markup whose identifiers are ambiguous, or whose accordion
    /// starts with more than one section open.
    ///
    /// A control targeting a panel that does not exist is allowed: clicking
    /// it simply activates no panel.
    pub fn check(&self) -> CoreResult<()> {
        ensure_unique("tab control", self.tabs.controls.iter().map(|c| c.id.as_str()))?;
        ensure_unique("tab panel", self.tabs.panels.iter().map(|p| p.id.as_str()))?;
        ensure_unique("form field", self.form.fields.iter().map(|f| f.name.as_str()))?;

        if self.accordion.iter().filter(|s| s.open).count() > 1 {
            return Err(CoreError::Markup("more than one open accordion section".to_string()));
        }
        Ok(())
    }
}

fn ensure_unique<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> CoreResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if id.is_empty() {
            return Err(CoreError::Markup(format!("empty {kind} id")));
        }
        if !seen.insert(id) {
            return Err(CoreError::Markup(format!("duplicate {kind} id: {id}")));
        }
    }
    Ok(())
}
