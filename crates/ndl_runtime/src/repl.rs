//! The interactive console.
//!
//! The console alternates between two modes: choosing an NPC to approach,
//! and talking to the chosen NPC. Resolution failures are printed and the
//! session carries on.

use ndl_engine::resolve::AI_ACTION;
use ndl_engine::{Generator, Resolver, Response};
use ndl_foundation::{Error, Npc, Result};

use crate::editor::{LineEditor, ReadResult, RustylineEditor};

/// Prompt shown while choosing an NPC.
pub const CHOOSE_PROMPT: &str = "Which NPC do you want to interact with? ";

/// Prompt shown while talking.
pub const TALK_PROMPT: &str = "You: ";

/// What the console is doing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Waiting for an NPC name.
    Choosing,
    /// Talking to the named NPC.
    Talking(String),
}

/// The interactive console.
pub struct Repl<G, E: LineEditor = RustylineEditor> {
    editor: E,
    resolver: Resolver<G>,
    mode: Mode,
    show_banner: bool,
}

impl<G: Generator> Repl<G, RustylineEditor> {
    /// Creates a console with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(resolver: Resolver<G>) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(resolver, editor))
    }
}

impl<G: Generator, E: LineEditor> Repl<G, E> {
    /// Creates a console with the given editor.
    pub fn with_editor(resolver: Resolver<G>, editor: E) -> Self {
        Self {
            editor,
            resolver,
            mode: Mode::Choosing,
            show_banner: true,
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Returns the resolver.
    #[must_use]
    pub fn resolver(&self) -> &Resolver<G> {
        &self.resolver
    }

    /// Returns the current mode.
    #[must_use]
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Runs the console loop until the user quits or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            print_banner();
        }

        while self.read_eval_print()? {}

        println!("\nGoodbye!");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    pub fn read_eval_print(&mut self) -> Result<bool> {
        let prompt = match self.mode {
            Mode::Choosing => {
                println!("\nAvailable NPCs: {}", self.resolver.list_npcs().join(", "));
                self.editor.set_completions(
                    self.resolver.list_npcs().into_iter().map(String::from).collect(),
                );
                CHOOSE_PROMPT
            }
            Mode::Talking(_) => TALK_PROMPT,
        };

        let input = match self.editor.read_line(prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => {
                println!();
                return Ok(true);
            }
            ReadResult::Eof => return Ok(false),
        };
        let input = input.trim();

        match self.mode.clone() {
            Mode::Choosing => Ok(self.choose(input)),
            Mode::Talking(name) => {
                if !input.is_empty() {
                    self.editor.add_history(input);
                }
                Ok(self.talk(&name, input))
            }
        }
    }

    /// Handles an answer to the NPC choice prompt.
    fn choose(&mut self, input: &str) -> bool {
        if input.is_empty() || input.eq_ignore_ascii_case("quit") {
            return false;
        }

        let Some(npc) = self.resolver.find_npc(input) else {
            println!("NPC {input} not found.");
            return true;
        };

        for line in introduction(npc) {
            println!("{line}");
        }
        let mut words: Vec<String> = npc.trigger_events().map(String::from).collect();
        words.extend(["quit".to_string(), "switch".to_string()]);
        self.mode = Mode::Talking(npc.name.clone());
        self.editor.set_completions(words);
        true
    }

    /// Handles one utterance to the NPC called `name`.
    ///
    /// `quit` and `switch` both end the conversation; quitting the session
    /// happens at the NPC prompt.
    fn talk(&mut self, name: &str, input: &str) -> bool {
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("switch") {
            self.mode = Mode::Choosing;
            return true;
        }

        match self.resolver.resolve(name, input, false) {
            Ok(reply) => println!("{}", describe_reply(name, reply.as_ref())),
            Err(e) => print_error(&e),
        }
        true
    }
}

/// Lines printed when approaching an NPC.
#[must_use]
pub fn introduction(npc: &Npc) -> Vec<String> {
    let mut lines = vec![
        format!(
            "\nYou are now approaching {}...(Type 'quit' to exit, 'switch' to change NPC)",
            npc.name
        ),
        format!("Options: {}", npc.trigger_events().collect::<Vec<_>>().join(", ")),
    ];
    if let Some(memory) = &npc.memory {
        lines.push(format!("(Note: {memory})"));
    }
    lines
}

/// Formats a resolution result for the console.
#[must_use]
pub fn describe_reply(name: &str, reply: Option<&Response>) -> String {
    match reply {
        None => format!("{name} has no response."),
        Some(response) => match response.action.as_deref() {
            Some(action) if action != AI_ACTION => {
                format!("{name}: {} -> {action}", response.text)
            }
            _ => format!("{name}: {}", response.text),
        },
    }
}

fn print_error(error: &Error) {
    eprintln!("\x1b[31mError: {error}\x1b[0m");
}

fn print_banner() {
    println!("\x1b[1;36mNDL\x1b[0m v{}", env!("CARGO_PKG_VERSION"));
    println!("Pick an NPC to talk to. Use Ctrl+D to exit.");
}
