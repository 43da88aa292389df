//! Accordion sections
//!
//! At most one section is open. Clicking an open header closes everything;
//! clicking a closed one closes the others and opens it.

use crate::markup::SectionMarkup;

/// A header together with the panel that follows it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccordionSection {
    pub title: String,
    pub body: String,
    pub open: bool,
}

#[derive(Debug, Clone, Default)]
pub struct AccordionSet {
    sections: Vec<AccordionSection>,
}

impl AccordionSet {
    pub fn from_markup(sections: &[SectionMarkup]) -> Self {
        Self {
            sections: sections
                .iter()
                .map(|s| AccordionSection {
                    title: s.title.clone(),
                    body: s.body.clone(),
                    open: s.open,
                })
                .collect(),
        }
    }

    pub fn sections(&self) -> &[AccordionSection] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Handle a click on the header at `index`.
    pub fn click(&mut self, index: usize) {
        let Some(was_open) = self.sections.get(index).map(|s| s.open) else {
            return;
        };

        for section in &mut self.sections {
            section.open = false;
        }

        if !was_open {
            self.sections[index].open = true;
        }

        log::debug!(
            "accordion section {index} {}",
            if was_open { "collapsed" } else { "expanded" }
        );
    }

    /// Index of the open section, if any
    pub fn open_section(&self) -> Option<usize> {
        self.sections.iter().position(|s| s.open)
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.sections.get(index).is_some_and(|s| s.open)
    }
}
