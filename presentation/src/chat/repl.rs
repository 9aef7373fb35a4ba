//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::ConsoleFormatter;
use crate::cli::commands::OutputFormat;
use drlegal_application::RouteMessageUseCase;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};

/// What a slash command asks the loop to do.
#[derive(Debug, PartialEq, Eq)]
enum CommandOutcome {
    Continue,
    Exit,
}

/// Interactive chat REPL
pub struct ChatRepl {
    use_case: RouteMessageUseCase,
    output: OutputFormat,
}

impl ChatRepl {
    pub fn new(use_case: RouteMessageUseCase) -> Self {
        Self {
            use_case,
            output: OutputFormat::Text,
        }
    }

    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = dirs::data_dir().map(|p| p.join("dr-legal").join("history.txt"));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            match rl.readline(">>> ") {
                Ok(line) => {
                    let line = line.trim();

                    if line.starts_with('/') {
                        if self.handle_command(line) == CommandOutcome::Exit {
                            break;
                        }
                        continue;
                    }

                    if !line.is_empty() {
                        let _ = rl.add_history_entry(line);
                    }

                    // Empty lines are routed too: they get the intro menu.
                    self.process_message(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Até breve!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│          Dr. Legal - Chat Mode              │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Commands:");
        println!("  /help     - Show this help");
        println!("  /areas    - List practice areas");
        println!("  /quit     - Exit chat");
        println!();
    }

    fn handle_command(&self, cmd: &str) -> CommandOutcome {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Até breve!");
                CommandOutcome::Exit
            }
            "/help" | "/h" | "/?" => {
                println!();
                println!("Commands:");
                println!("  /help, /h, /?    - Show this help");
                println!("  /areas           - List practice areas");
                println!("  /quit, /exit, /q - Exit chat");
                println!();
                CommandOutcome::Continue
            }
            "/areas" => {
                println!();
                println!("Practice areas (tie-break order):");
                for area in self.use_case.lexicon().areas() {
                    println!("  - {} ({} keywords)", area.area, area.keywords().len());
                }
                println!();
                CommandOutcome::Continue
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                CommandOutcome::Continue
            }
        }
    }

    async fn process_message(&self, message: &str) {
        println!();
        let routed = self.use_case.execute(message).await;
        let output = match self.output {
            OutputFormat::Text => ConsoleFormatter::format_text(&routed),
            OutputFormat::Html => ConsoleFormatter::format_html(&routed),
            OutputFormat::Json => ConsoleFormatter::format_json(&routed),
        };
        println!("{}", output);
    }
}
