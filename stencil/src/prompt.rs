use std::io::{self, IsTerminal};

use console::{Key, Term};

use crate::errors::StencilError;

/// Line-oriented prompting capability.
///
/// The session talks to the user through this trait so the whole loop can
/// be driven by scripted answers in tests, with no terminal attached.
pub trait Prompter {
    /// Show `prompt` and read one line of input.
    fn ask(&mut self, prompt: &str, completions: &Completions) -> Result<String, StencilError>;
}

/// Fixed candidate list offered for tab completion at a prompt.
#[derive(Debug, Clone, Default)]
pub struct Completions(Vec<String>);

impl Completions {
    pub fn none() -> Self {
        Self(Vec::new())
    }

    pub fn yes_no() -> Self {
        Self(vec!["yes".to_string(), "no".to_string()])
    }

    /// Candidates starting with the given prefix, in list order.
    pub fn matching(&self, prefix: &str) -> Vec<&str> {
        self.0
            .iter()
            .map(String::as_str)
            .filter(|candidate| candidate.starts_with(prefix))
            .collect()
    }
}

impl FromIterator<String> for Completions {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Prompter backed by the attached terminal.
///
/// When stdin and stdout are both terminals, input is read key by key so
/// Tab extends the line to the longest shared prefix of the matching
/// candidates. Otherwise whole lines are read from stdin and completion
/// is skipped.
pub struct TermPrompter {
    term: Term,
}

impl TermPrompter {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }

    fn read_completed_line(&self, completions: &Completions) -> io::Result<String> {
        let mut line = String::new();

        loop {
            match self.term.read_key()? {
                Key::Enter => {
                    self.term.write_line("")?;
                    return Ok(line);
                }
                Key::Backspace => {
                    if line.pop().is_some() {
                        self.term.clear_chars(1)?;
                    }
                }
                Key::Tab => {
                    let matches = completions.matching(&line);

                    if let Some(completed) = common_prefix(&matches) {
                        if completed.len() > line.len() {
                            let rest = completed[line.len()..].to_string();
                            self.term.write_str(&rest)?;
                            line.push_str(&rest);
                        }
                    }
                }
                Key::Char(c) => {
                    self.term.write_str(&c.to_string())?;
                    line.push(c);
                }
                _ => {}
            }
        }
    }
}

impl Default for TermPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TermPrompter {
    fn ask(&mut self, prompt: &str, completions: &Completions) -> Result<String, StencilError> {
        self.term.write_str(prompt)?;

        if key_input_available(self.term.is_term(), io::stdin().is_terminal()) {
            return Ok(self.read_completed_line(completions)?);
        }

        // Piped input: take a whole line from stdin, no key-by-key reads
        let mut line = String::new();

        if io::stdin().read_line(&mut line)? == 0 {
            return Err(StencilError::EndOfInputError);
        }

        self.term.write_line("")?;

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Interpret a yes/no answer, falling back to `default` when the answer is
/// blank or unrecognized.
pub fn parse_yes_no(answer: &str, default: bool) -> bool {
    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => true,
        "n" | "no" => false,
        _ => default,
    }
}

/// Key-by-key reads need the keyboard and the screen to both be attached
/// to a terminal; with either end piped, input comes in whole lines.
fn key_input_available(stdout_is_term: bool, stdin_is_term: bool) -> bool {
    stdout_is_term && stdin_is_term
}

fn common_prefix<'a>(candidates: &[&'a str]) -> Option<&'a str> {
    let (first, rest) = candidates.split_first()?;
    let mut end = first.len();

    for candidate in rest {
        while !candidate.starts_with(&first[..end]) {
            end -= 1;

            while !first.is_char_boundary(end) {
                end -= 1;
            }
        }
    }

    Some(&first[..end])
}
