//! Line-based terminal front-end: reads choices, prints events.
//!
//! Generic over the reader and writer so the text can be tested without a
//! terminal.

use std::io::{BufRead, Write};

use log::warn;

use crate::rules::{DrawPrompt, GameEvent, Outcome, TurnInput, TurnObserver};

/// Reads the human's choice one line at a time. `q`, `quit` or end of
/// input cancels the game.
pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> TurnInput for ConsoleInput<R, W> {
    fn choose_card(&mut self, prompt: &DrawPrompt) -> Option<String> {
        let asked = write!(
            self.writer,
            "Pick a card from {} by position, 0 to {} from the left (q to quit): ",
            prompt.target,
            prompt.target_hand_size.saturating_sub(1)
        )
        .and_then(|()| self.writer.flush());
        if let Err(err) = asked {
            warn!("failed to write prompt: {}", err);
        }

        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                let answer = line.trim();
                if answer.eq_ignore_ascii_case("q") || answer.eq_ignore_ascii_case("quit") {
                    None
                } else {
                    Some(answer.to_string())
                }
            }
            Err(err) => {
                warn!("failed to read choice: {}", err);
                None
            }
        }
    }
}

/// Prints table summaries and announcements.
pub struct ConsoleObserver<W> {
    writer: W,
}

impl<W: Write> ConsoleObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Give back the writer, e.g. to inspect captured output.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn print(&mut self, event: &GameEvent) -> std::io::Result<()> {
        let w = &mut self.writer;
        match event {
            GameEvent::Started { finished, .. } => {
                writeln!(w, "Old Maid begins!")?;
                for player in finished {
                    writeln!(w, "{} paired off every card on the deal!", player)?;
                }
            }
            GameEvent::TurnStarted { active, target, hands, .. } => {
                writeln!(w)?;
                for summary in hands {
                    writeln!(w, "{}: {}", summary.player, summary.rendering)?;
                }
                writeln!(w, "--- {}'s turn ---", active)?;
                let cards = hands
                    .iter()
                    .find(|s| s.player.id == target.id)
                    .map_or(0, |s| s.cards);
                let noun = if cards == 1 { "card" } else { "cards" };
                writeln!(w, "{} has {} {}.", target, cards, noun)?;
            }
            GameEvent::InvalidChoice { reason, .. } => {
                writeln!(w, "Please enter a valid number ({}).", reason)?;
            }
            GameEvent::CardDrawn { drawer, source, card, revealed } => {
                if *revealed {
                    writeln!(w, "You drew {}.", card)?;
                } else {
                    writeln!(w, "{} drew a card from {}.", drawer, source)?;
                }
            }
            GameEvent::PairsDiscarded { player, cards } => {
                writeln!(w, "{} discarded {} pair(s).", player, cards.len() / 2)?;
            }
            GameEvent::PlayerFinished { player } => {
                writeln!(w, "{} has no cards left and is out!", player)?;
            }
            GameEvent::Concluded(Outcome::Loser(loser)) => {
                writeln!(w, "Game over! {} is holding the joker and loses!", loser)?;
            }
            GameEvent::Concluded(Outcome::Aborted) => {
                writeln!(w, "Game cancelled.")?;
            }
        }
        Ok(())
    }
}

impl<W: Write> TurnObserver for ConsoleObserver<W> {
    fn observe(&mut self, event: &GameEvent) {
        if let Err(err) = self.print(event) {
            warn!("failed to print event: {}", err);
        }
    }
}
