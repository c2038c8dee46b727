//! Terminal seam between the game and whoever is playing it.
//!
//! The round and session talk only to the [`Console`] trait; [`Terminal`]
//! is the real stdin/stdout implementation.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};

/// ANSI "erase display" followed by "cursor home".
const CLEAR_SEQUENCE: &str = "\x1b[2J\x1b[H";

/// Answers that count as "yes". `н` is the key sharing `y`'s spot on a
/// Russian keyboard layout.
const AFFIRMATIVE: [&str; 3] = ["y", "yes", "н"];

pub trait Console {
    /// Print a block of text followed by a newline.
    fn show(&mut self, text: &str) -> Result<()>;

    /// Wipe the screen before a fresh render. May be a no-op.
    fn clear(&mut self) -> Result<()>;

    /// Ask a yes/no question. Anything that is not affirmative is a "no".
    fn ask(&mut self, prompt: &str) -> Result<bool>;
}

/// True for `y`, `yes` or `н`, ignoring case and surrounding whitespace.
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    AFFIRMATIVE.contains(&answer.as_str())
}

/// Console backed by any reader/writer pair.
pub struct Terminal<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl Terminal<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio(clear_screen: bool) -> Self {
        Terminal::new(io::stdin().lock(), io::stdout(), clear_screen)
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W, clear_screen: bool) -> Self {
        Terminal { input, output, clear_screen }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for Terminal<R, W> {
    fn show(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}").context("failed to write to the terminal")?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        if self.clear_screen {
            write!(self.output, "{CLEAR_SEQUENCE}").context("failed to clear the terminal")?;
        }
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<bool> {
        write!(self.output, "{prompt} (y/n) ").context("failed to write prompt")?;
        self.output.flush().context("failed to flush prompt")?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).context("failed to read answer")?;
        if read == 0 {
            bail!("input closed while waiting for an answer to {prompt:?}");
        }
        Ok(is_affirmative(&line))
    }
}

/// Console that replays canned answers and records everything shown.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct Scripted {
    pub answers: std::collections::VecDeque<bool>,
    pub prompts: Vec<String>,
    pub screens: Vec<String>,
    pub clears: usize,
}

#[cfg(test)]
impl Scripted {
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Scripted { answers: answers.into_iter().collect(), ..Scripted::default() }
    }
}

#[cfg(test)]
impl Console for Scripted {
    fn show(&mut self, text: &str) -> Result<()> {
        self.screens.push(text.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.clears += 1;
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<bool> {
        self.prompts.push(prompt.to_string());
        match self.answers.pop_front() {
            Some(answer) => Ok(answer),
            None => bail!("script ran out of answers at {prompt:?}"),
        }
    }
}
