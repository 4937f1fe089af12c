use console::Style;

use crate::engine::substitute;
use crate::errors::StencilError;
use crate::fields::FieldTable;
use crate::highlight::{highlight_tokens, highlight_values};
use crate::loader;
use crate::prompt::{parse_yes_no, Completions, Prompter};

const HEADING_PADDING: usize = 10;

/// Whether the outer prompt loop keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Stopped,
}

/// Preset answers for a session's prompts.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Template file name, prompted for when absent.
    pub template: Option<String>,
    /// JSON fields file name, prompted for when absent.
    pub fields: Option<String>,
    /// Output file name. When set, processed text is written there without
    /// the dump prompt.
    pub output: Option<String>,
    /// Stop after one cycle instead of asking to continue, and treat a
    /// failed cycle as fatal.
    pub once: bool,
}

/// The interactive prompt loop around the substitution engine.
///
/// Each cycle loads a template and a field table, previews the recognized
/// tokens and the substituted values, runs the real substitution, and
/// offers to dump the result. An error inside a cycle is reported on the
/// error stream and the session moves on to the continue prompt.
pub struct Session<'a> {
    prompter: &'a mut dyn Prompter,
    options: SessionOptions,
}

impl<'a> Session<'a> {
    pub fn new(prompter: &'a mut dyn Prompter, options: SessionOptions) -> Self {
        Self { prompter, options }
    }

    /// Run cycles until the user declines to continue or input runs out.
    pub fn run(&mut self) -> Result<(), StencilError> {
        let mut state = SessionState::Running;

        while state == SessionState::Running {
            state = self.step()?;
        }

        Ok(())
    }

    fn step(&mut self) -> Result<SessionState, StencilError> {
        match self.cycle() {
            Ok(()) => {}
            Err(StencilError::EndOfInputError) => return Ok(SessionState::Stopped),
            Err(error) if self.options.once => return Err(error),
            Err(error) => eprintln!("{}", render_error(&error)),
        }

        if self.options.once {
            return Ok(SessionState::Stopped);
        }

        match self.ask_continue() {
            Ok(true) => Ok(SessionState::Running),
            Ok(false) => Ok(SessionState::Stopped),
            Err(StencilError::EndOfInputError) => Ok(SessionState::Stopped),
            Err(error) => Err(error),
        }
    }

    fn cycle(&mut self) -> Result<(), StencilError> {
        let green = Style::new().green();

        let template = self.load_template()?;

        println!("{}", heading("Template Debugging"));
        println!("Fields will be highlighted in green: ");
        println!(
            "{}",
            highlight_tokens(&template, |token| green.apply_to(token).to_string())
        );

        println!("{}", heading("Loading Fields"));
        let fields = self.load_fields()?;
        println!(
            "{}",
            Style::new()
                .yellow()
                .apply_to("Remember only fields with string values will be picked up!")
        );
        println!("{}", fields.to_pretty_json());

        println!("{}", heading("Processed Template"));
        println!("Replaced values will be highlighted in green: ");
        let preview = highlight_values(&template, &fields, |value| {
            green.apply_to(value).to_string()
        });
        println!("{preview}");

        let processed = substitute(&template, &fields);

        println!("{}", heading("Dumping Template"));
        self.dump(&processed)?;

        Ok(())
    }

    fn load_template(&mut self) -> Result<String, StencilError> {
        let name = match &self.options.template {
            Some(name) => name.clone(),
            None => {
                let completions = loader::dir_entry_names(".").into_iter().collect();
                self.prompter.ask("Template file name: ", &completions)?
            }
        };

        loader::read_template(&name)
    }

    fn load_fields(&mut self) -> Result<FieldTable, StencilError> {
        let name = match &self.options.fields {
            Some(name) => name.clone(),
            None => {
                let completions = loader::dir_entry_names(".").into_iter().collect();
                self.prompter.ask("JSON file name: ", &completions)?
            }
        };

        loader::read_fields(&name)
    }

    fn dump(&mut self, processed: &str) -> Result<(), StencilError> {
        let name = match &self.options.output {
            Some(name) => name.clone(),
            None => {
                let answer = self
                    .prompter
                    .ask("Dump template to file? [y/N]: ", &Completions::yes_no())?;

                if !parse_yes_no(&answer, false) {
                    return Ok(());
                }

                self.prompter.ask("Output file name: ", &Completions::none())?
            }
        };

        let path = loader::write_output(&name, processed)?;

        println!(
            "{}",
            Style::new()
                .green()
                .apply_to(format!("Template dumped to {}", path.display()))
        );

        Ok(())
    }

    fn ask_continue(&mut self) -> Result<bool, StencilError> {
        let prompt = Style::new().yellow().apply_to("Continue? [Y/n]: ").to_string();
        let answer = self.prompter.ask(&prompt, &Completions::none())?;

        Ok(parse_yes_no(&answer, true))
    }
}

/// Banner shown between session phases: the text centered inside fixed
/// padding, framed by two rules of matching length, in green.
pub fn heading(text: &str) -> String {
    let padded = format!("{text:^width$}", width = text.len() + 2 * HEADING_PADDING);
    let rule = "-".repeat(padded.len());
    let green = Style::new().green();

    format!("\n{rule}\n{}\n{rule}\n", green.apply_to(&padded))
}

/// Error line as shown on the error stream.
pub fn render_error(error: &StencilError) -> String {
    Style::new().for_stderr().red().apply_to(error).to_string()
}
