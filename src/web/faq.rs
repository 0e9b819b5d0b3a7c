//! FAQ accordion listeners
//!
//! Each question gets its own click and keydown listener. The answer is found
//! through the question's parent.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Element, KeyboardEvent, MouseEvent};

use super::{document, listen, query_all};
use crate::config::LandingConfig;
use crate::consts::{FAQ_ANSWER_OPEN_CLASS, FAQ_OPEN_CLASS};
use crate::init::{Outcome, StepResult};
use crate::ui::{Accordion, is_activation_key};

struct Entries {
    questions: Vec<Element>,
    answer_selector: String,
}

impl Entries {
    fn answer(&self, question: &Element) -> Option<Element> {
        question
            .parent_element()?
            .query_selector(&self.answer_selector)
            .ok()
            .flatten()
    }

    /// Close everything else, toggle `index`
    fn activate(&self, index: usize) {
        let mut accordion = Accordion::from_states(
            self.questions
                .iter()
                .map(|q| q.class_list().contains(FAQ_OPEN_CLASS))
                .collect(),
        );
        let changes = accordion.activate(index);
        log::trace!("FAQ {} activated, {} entries changed", index, changes.len());

        for (i, question) in self.questions.iter().enumerate() {
            let open = accordion.is_open(i);
            let _ = question.class_list().toggle_with_force(FAQ_OPEN_CLASS, open);
            if let Some(answer) = self.answer(question) {
                let _ = answer
                    .class_list()
                    .toggle_with_force(FAQ_ANSWER_OPEN_CLASS, open);
            }
        }
    }
}

pub fn init(config: &LandingConfig) -> StepResult {
    let document = document()?;
    let questions = query_all(&document, &config.selectors.faq_question)?;
    if questions.is_empty() {
        return Ok(Outcome::Skipped("no FAQ questions".to_string()));
    }

    let entries = Rc::new(Entries {
        questions,
        answer_selector: config.selectors.faq_answer.clone(),
    });

    for (index, question) in entries.questions.iter().enumerate() {
        {
            let entries = entries.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                entries.activate(index);
            });
            listen(question, "click", closure)?;
        }

        // Enter/Space on a focused question
        {
            let entries = entries.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if is_activation_key(&event.key()) {
                    event.prevent_default();
                    entries.activate(index);
                }
            });
            listen(question, "keydown", closure)?;
        }
    }

    Ok(Outcome::Installed)
}
