//! Character-by-character typing effect for the hero title.

use alloc::string::String;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TypeStep<'a> {
    /// Text visible after this step.
    Typed(&'a str),
    Finished,
}

#[derive(Clone, Debug)]
pub struct Typewriter {
    text: String,
    typed: usize,
    start_delay_ms: u32,
    step_ms: u32,
}

impl Typewriter {
    pub fn new(text: &str, start_delay_ms: u32, step_ms: u32) -> Self {
        Self {
            text: String::from(text),
            typed: 0,
            start_delay_ms,
            step_ms,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn visible(&self) -> &str {
        &self.text[..self.typed]
    }

    pub fn is_finished(&self) -> bool {
        self.typed >= self.text.len()
    }

    pub const fn start_delay_ms(&self) -> u32 {
        self.start_delay_ms
    }

    pub const fn step_ms(&self) -> u32 {
        self.step_ms
    }

    /// Reveal one more character.
    pub fn step(&mut self) -> TypeStep<'_> {
        let Some(ch) = self.text[self.typed..].chars().next() else {
            return TypeStep::Finished;
        };

        self.typed += ch.len_utf8();
        TypeStep::Typed(&self.text[..self.typed])
    }
}
