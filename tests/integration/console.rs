//! Console sessions driven by scripted input

use ndl::engine::{Registry, Resolver};
use ndl::foundation::{Error, Result};
use ndl::runtime::{LineEditor, Mode, OfflineGenerator, ReadResult, Repl};

/// Replays a fixed list of lines, then reports end of input.
struct ScriptedEditor {
    lines: Vec<ReadResult>,
    prompts: Vec<String>,
}

impl ScriptedEditor {
    fn new(lines: &[&str]) -> Self {
        let mut lines: Vec<_> = lines
            .iter()
            .map(|l| ReadResult::Line((*l).to_string()))
            .collect();
        lines.reverse();
        Self {
            lines,
            prompts: Vec::new(),
        }
    }
}

impl LineEditor for ScriptedEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        self.prompts.push(prompt.to_string());
        Ok(self.lines.pop().unwrap_or(ReadResult::Eof))
    }

    fn add_history(&mut self, _line: &str) {}

    fn set_completions(&mut self, _words: Vec<String>) {}
}

/// Fails every read, as a broken terminal would.
struct BrokenEditor;

impl LineEditor for BrokenEditor {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Err(Error::internal("terminal went away"))
    }

    fn add_history(&mut self, _line: &str) {}

    fn set_completions(&mut self, _words: Vec<String>) {}
}

const SCRIPT: &str = r#"
npc "Elara" {
    dialogue {
        on "hello" "Welcome!" -> wave
        fallback { ai "Be warm." }
    }
}
npc "Bram" { }
"#;

fn resolver() -> Resolver<OfflineGenerator> {
    let (registry, _) = Registry::from_script(SCRIPT);
    Resolver::new(registry, OfflineGenerator)
}

#[test]
fn session_survives_generator_failures() {
    let editor = ScriptedEditor::new(&["Elara", "hello", "tell me a story", "switch", "bram", "hi"]);
    let mut repl = Repl::with_editor(resolver(), editor).without_banner();

    assert!(repl.run().is_ok());
    assert_eq!(repl.mode(), &Mode::Talking("Bram".to_string()));
}

#[test]
fn quit_while_talking_returns_to_the_npc_prompt() {
    let editor = ScriptedEditor::new(&["Elara", "quit", "quit", "never read"]);
    let mut repl = Repl::with_editor(resolver(), editor).without_banner();

    assert!(repl.read_eval_print().unwrap());
    assert!(repl.read_eval_print().unwrap());
    assert_eq!(repl.mode(), &Mode::Choosing);
    assert!(!repl.read_eval_print().unwrap());
}

#[test]
fn interrupt_keeps_the_session_going() {
    let mut editor = ScriptedEditor::new(&["Elara"]);
    editor.lines.push(ReadResult::Interrupted);
    let mut repl = Repl::with_editor(resolver(), editor).without_banner();

    assert!(repl.read_eval_print().unwrap());
    assert_eq!(repl.mode(), &Mode::Choosing);
    assert!(repl.read_eval_print().unwrap());
    assert_eq!(repl.mode(), &Mode::Talking("Elara".to_string()));
}

#[test]
fn terminal_errors_end_the_session() {
    let mut repl = Repl::with_editor(resolver(), BrokenEditor).without_banner();
    assert!(repl.run().is_err());
}
