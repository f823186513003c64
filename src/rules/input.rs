//! The human's side of a draw: prompting and parsing positions.

use std::collections::VecDeque;

use super::events::PlayerRef;
use crate::core::error::GameError;

/// What the human is asked to choose.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrawPrompt {
    pub drawer: PlayerRef,
    pub target: PlayerRef,
    /// Valid answers are `0..target_hand_size`.
    pub target_hand_size: usize,
}

/// Input collaborator.
///
/// Returns the raw answer, or `None` to cancel the game. The engine keeps
/// asking until the answer parses as a position in the target's hand.
pub trait TurnInput {
    fn choose_card(&mut self, prompt: &DrawPrompt) -> Option<String>;
}

/// Parse a typed answer into a position in a hand of `hand_size` cards.
pub fn parse_choice(text: &str, hand_size: usize) -> Result<usize, GameError> {
    let trimmed = text.trim();
    let index: usize = trimmed
        .parse()
        .map_err(|_| GameError::InvalidInput(format!("{:?} is not a number", trimmed)))?;
    if index >= hand_size {
        return Err(GameError::InvalidInput(format!(
            "{} is not between 0 and {}",
            index,
            hand_size.saturating_sub(1)
        )));
    }
    Ok(index)
}

/// Answers prompts from a fixed list; cancels once the list runs out.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    answers: VecDeque<Option<String>>,
    prompts: Vec<DrawPrompt>,
}

impl ScriptedInput {
    /// Answers given in order. `None` entries cancel.
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(|a| a.map(Into::into)).collect(),
            prompts: Vec::new(),
        }
    }

    /// Always answer with the same text.
    pub fn repeating(answer: impl Into<String>, times: usize) -> Self {
        let answer = answer.into();
        Self::new(std::iter::repeat(Some(answer)).take(times))
    }

    /// Every prompt received so far.
    #[must_use]
    pub fn prompts(&self) -> &[DrawPrompt] {
        &self.prompts
    }

    /// Answers not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl TurnInput for ScriptedInput {
    fn choose_card(&mut self, prompt: &DrawPrompt) -> Option<String> {
        self.prompts.push(prompt.clone());
        self.answers.pop_front().flatten()
    }
}
