//! Page-wide UI state
//!
//! Each widget's state lives in its own field and is reached only through
//! this context; there is no ambient global state.

use std::time::Instant;

use crate::accordion::AccordionSet;
use crate::error::CoreResult;
use crate::markup::PageMarkup;
use crate::notice::NoticeBoard;
use crate::submission::{self, SubmissionOutcome};
use crate::tabs::TabSet;
use crate::theme::{ThemeController, ThemeState};
use crate::validation::{RegistrationForm, RuleTable};

#[derive(Debug)]
pub struct PageState {
    pub theme: ThemeController,
    pub tabs: TabSet,
    pub accordion: AccordionSet,
    pub form: RegistrationForm,
    pub notices: NoticeBoard,
}

impl PageState {
    /// Load the page from its markup. Theme starts out light.
    pub fn load(markup: &PageMarkup) -> CoreResult<Self> {
        markup.check()?;
        let rules = RuleTable::standard()?;

        Ok(Self {
            theme: ThemeController::new(ThemeState::default()),
            tabs: TabSet::from_markup(&markup.tabs),
            accordion: AccordionSet::from_markup(&markup.accordion),
            form: RegistrationForm::new(&markup.form, rules),
            notices: NoticeBoard::new(),
        })
    }

    pub fn submit(&mut self, now: Instant) -> SubmissionOutcome {
        submission::submit(&mut self.form, &mut self.notices, now)
    }

    /// Fire pending notice removals.
    pub fn tick(&mut self, now: Instant) {
        self.notices.expire(now);
    }
}
