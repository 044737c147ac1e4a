//! Session driver: reads command lines, dispatches them to the API, prints responses.
//!
//! The notes live in memory, so a session is the whole lifetime of the data.
//! Lines are split shell-style (whitespace separated, `"` and `'` quoting,
//! backslash escapes) and then parsed with clap.

use crate::args::{SessionCommand, SessionLine};
use crate::cli::print::print_response;
use clap::error::ErrorKind;
use clap::Parser;
use notes::api::NotesApi;
use notes::config::OutputFormat;
use notes::error::{NotesError, Result};
use notes::model::{CreateNoteRequest, UpdateNoteRequest};
use std::fs;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;
use tracing::info;

const PROMPT: &str = "notes> ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Session<W: Write> {
    api: NotesApi,
    format: OutputFormat,
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(api: NotesApi, format: OutputFormat, out: W) -> Self {
        Self { api, format, out }
    }

    /// Executes one line. Parse failures are errors; API failures are printed responses.
    pub fn execute(&mut self, line: &str) -> Result<Flow> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(Flow::Continue);
        }

        let words = split_line(line)?;
        let parsed = match SessionLine::try_parse_from(&words) {
            Ok(parsed) => parsed,
            Err(e)
                if matches!(
                    e.kind(),
                    ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                ) =>
            {
                write!(self.out, "{}", e)?;
                return Ok(Flow::Continue);
            }
            Err(e) => return Err(NotesError::Cli(e.to_string().trim_end().to_string())),
        };

        let response = match parsed.command {
            SessionCommand::Create { title, content } => {
                let payload = CreateNoteRequest {
                    title: Some(title),
                    content: Some(content),
                };
                self.api.create_note(serde_json::to_value(payload)?)
            }
            SessionCommand::List => self.api.list_notes(),
            SessionCommand::Get { id } => self.api.get_note(&id),
            SessionCommand::Update { id, title, content } => {
                let payload = UpdateNoteRequest { title, content };
                self.api.update_note(&id, serde_json::to_value(payload)?)
            }
            SessionCommand::Delete { id } => self.api.delete_note(&id),
            SessionCommand::Health => self.api.health(),
            SessionCommand::Exit => return Ok(Flow::Exit),
        };

        print_response(&mut self.out, &response, self.format)?;
        Ok(Flow::Continue)
    }

    fn prompt(&mut self) -> io::Result<()> {
        write!(self.out, "{}", PROMPT)?;
        self.out.flush()
    }
}

/// Reads commands from stdin until EOF or `exit`. Bad lines are reported and skipped.
pub fn run_interactive(api: NotesApi, format: OutputFormat) -> Result<()> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut session = Session::new(api, format, io::stdout().lock());

    if interactive {
        writeln!(
            session.out,
            "Notes session. Type `help` for commands, `exit` to quit."
        )?;
    }

    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            session.prompt()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        match session.execute(&line?) {
            Ok(Flow::Exit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => eprintln!("{}", e),
        }
    }

    info!("session ended");
    Ok(())
}

/// Runs every line of `script`, stopping at the first line that fails to parse.
pub fn run_script(api: NotesApi, format: OutputFormat, script: &Path) -> Result<()> {
    let text = fs::read_to_string(script)?;
    let mut session = Session::new(api, format, io::stdout().lock());

    for (number, line) in text.lines().enumerate() {
        match session.execute(line) {
            Ok(Flow::Exit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => {
                return Err(NotesError::Cli(format!(
                    "{}:{}: {}",
                    script.display(),
                    number + 1,
                    e
                )));
            }
        }
    }
    Ok(())
}

/// Splits a command line into words, honoring quotes and backslash escapes.
pub fn split_line(line: &str) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match quote {
            Some(q) if c == q => quote = None,
            Some('"') if c == '\\' => match chars.next() {
                Some(next) => current.push(next),
                None => current.push('\\'),
            },
            Some(_) => current.push(c),
            None => match c {
                '"' | '\'' => {
                    quote = Some(c);
                    in_word = true;
                }
                '\\' => {
                    if let Some(next) = chars.next() {
                        current.push(next);
                    }
                    in_word = true;
                }
                c if c.is_whitespace() => {
                    if in_word {
                        words.push(std::mem::take(&mut current));
                        in_word = false;
                    }
                }
                c => {
                    current.push(c);
                    in_word = true;
                }
            },
        }
    }

    if let Some(q) = quote {
        return Err(NotesError::Cli(format!("unterminated {} quote", q)));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use notes::service::NotesService;
    use std::sync::Arc;

    fn session() -> Session<Vec<u8>> {
        let api = NotesApi::new(Arc::new(NotesService::in_memory()));
        Session::new(api, OutputFormat::Json, Vec::new())
    }

    fn output(session: &Session<Vec<u8>>) -> String {
        String::from_utf8(session.out.clone()).unwrap()
    }

    fn last_id(session: &Session<Vec<u8>>) -> String {
        session
            .api
            .service()
            .get_all()
            .unwrap()
            .first()
            .unwrap()
            .id
            .clone()
    }

    #[test]
    fn splits_plain_words() {
        assert_eq!(split_line("get abc").unwrap(), vec!["get", "abc"]);
        assert_eq!(split_line("  list  ").unwrap(), vec!["list"]);
    }

    #[test]
    fn splits_quoted_words() {
        assert_eq!(
            split_line(r#"create "Shopping list" 'milk, eggs'"#).unwrap(),
            vec!["create", "Shopping list", "milk, eggs"]
        );
        assert_eq!(
            split_line(r#"create "say \"hi\"" it\ works"#).unwrap(),
            vec!["create", "say \"hi\"", "it works"]
        );
    }

    #[test]
    fn keeps_empty_quoted_word() {
        assert_eq!(split_line(r#"create "" x"#).unwrap(), vec!["create", "", "x"]);
    }

    #[test]
    fn rejects_unterminated_quote() {
        assert!(matches!(split_line("create \"oops"), Err(NotesError::Cli(_))));
    }

    #[test]
    fn blank_and_comment_lines_do_nothing() {
        let mut session = session();
        assert_eq!(session.execute("").unwrap(), Flow::Continue);
        assert_eq!(session.execute("# note to self").unwrap(), Flow::Continue);
        assert!(output(&session).is_empty());
    }

    #[test]
    fn shopping_scenario() {
        let mut session = session();
        session.execute(r#"create Shopping "milk, eggs""#).unwrap();
        assert!(output(&session).contains("201 Created"));

        let id = last_id(&session);
        session
            .execute(&format!(r#"update {id} --content "milk, eggs, bread""#))
            .unwrap();
        let note = session.api.service().get_by_id(&id).unwrap().unwrap();
        assert_eq!(note.title, "Shopping");
        assert_eq!(note.content, "milk, eggs, bread");

        session.execute(&format!("delete {id}")).unwrap();
        assert!(output(&session).contains("204 No Content"));
        session.execute(&format!("get {id}")).unwrap();
        assert!(output(&session).contains("404 Not Found"));
    }

    #[test]
    fn validation_failures_are_printed_not_raised() {
        let mut session = session();
        assert_eq!(session.execute(r#"create "" body"#).unwrap(), Flow::Continue);
        let text = output(&session);
        assert!(text.contains("400 Bad Request"));
        assert!(text.contains("Title is required"));
    }

    #[test]
    fn unknown_command_is_an_error() {
        let mut session = session();
        assert!(matches!(session.execute("frobnicate"), Err(NotesError::Cli(_))));
    }

    #[test]
    fn help_is_printed() {
        let mut session = session();
        assert_eq!(session.execute("help").unwrap(), Flow::Continue);
        assert!(output(&session).contains("create"));
    }

    #[test]
    fn exit_and_quit_end_the_session() {
        let mut session = session();
        assert_eq!(session.execute("exit").unwrap(), Flow::Exit);
        assert_eq!(session.execute("quit").unwrap(), Flow::Exit);
    }
}
