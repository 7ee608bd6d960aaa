//! Canned-answer lookup and the chat widget state.

use std::collections::HashMap;
use std::rc::Rc;

use log::debug;
use serde::Deserialize;
use yew::prelude::*;

pub const FALLBACK_ANSWER: &str = "Sorry, I don’t have an answer for that. Please contact support!";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// Immutable question -> answer table. Built once at startup.
#[derive(Debug, Default, PartialEq)]
pub struct FaqTable {
    entries: Vec<FaqEntry>,
    index: HashMap<String, usize>,
}

impl FaqTable {
    pub fn new(entries: Vec<FaqEntry>) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.question.clone(), i))
            .collect();
        Self { entries, index }
    }

    /// Questions in configured order.
    pub fn questions(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.question.as_str())
    }

    /// Exact match only; anything else gets the fallback.
    pub fn resolve(&self, question: &str) -> &str {
        match self.index.get(question) {
            Some(&i) => &self.entries[i].answer,
            None => FALLBACK_ANSWER,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatExchange {
    pub user_text: String,
    pub bot_text: String,
}

pub enum ChatAction {
    Toggle,
    Select(String),
    Send,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatState {
    pub table: Rc<FaqTable>,
    pub open: bool,
    pub selection: String,
    pub transcript: Vec<ChatExchange>,
}

impl ChatState {
    pub fn new(table: Rc<FaqTable>) -> Self {
        Self {
            table,
            open: false,
            selection: String::new(),
            transcript: Vec::new(),
        }
    }
}

impl Reducible for ChatState {
    type Action = ChatAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ChatAction::Toggle => Rc::new(Self {
                open: !self.open,
                ..(*self).clone()
            }),
            ChatAction::Select(selection) => Rc::new(Self {
                selection,
                ..(*self).clone()
            }),
            ChatAction::Send => {
                if self.selection.trim().is_empty() {
                    return self;
                }
                let answer = self.table.resolve(&self.selection).to_string();
                debug!("chat: {:?} -> {} chars", self.selection, answer.len());

                let mut next = (*self).clone();
                next.transcript.push(ChatExchange {
                    user_text: std::mem::take(&mut next.selection),
                    bot_text: answer,
                });
                Rc::new(next)
            }
        }
    }
}
