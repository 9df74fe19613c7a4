//! Line-oriented console over a pass session
//!
//! The console keeps the event form (role, event, date, venue) between
//! commands and turns each input line into session operations. Every command
//! writes its output as whole lines so it can be driven from a terminal or a
//! script alike.

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::pass::Pass;
use crate::session::error::ValidationError;
use crate::session::session::PassSession;
use crate::types::{defaults, ConfigValidationError, HolderSpec, PassConfig, Role};

/// Greeting printed when the console starts
pub const BANNER: [&str; 5] = [
    "Event Pass Generator (Builder + Prototype)",
    "1) Pick role -> build template",
    "2) Fill name/email -> issue pass",
    "------------------------------------------",
    "Type 'help' for commands.",
];

const HELP: [&str; 12] = [
    "Commands:",
    "  role <PROFESSOR|MONITOR|STUDENT>  set the template role",
    "  event <name>                      set the event name",
    "  date <date>                       set the event date",
    "  venue <venue>                     set the venue",
    "  form                              show the current form",
    "  build                             build a template from the form",
    "  issue <name> | <email>            issue a pass from the template",
    "  template                          show the current template",
    "  list                              show every issued pass",
    "  clear                             clear the screen",
    "  quit                              leave the console",
];

const PROMPT: &str = "> ";

/// ANSI sequence that erases the terminal and homes the cursor
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Whether the console should keep reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line
    Continue,
    /// Stop reading
    Quit,
}

/// Command interpreter holding the event form and the session it drives
#[derive(Debug)]
pub struct Console {
    session: PassSession,
    role: Role,
    event_name: String,
    event_date: String,
    venue: String,
}

impl Console {
    /// Create a console with the default form values
    pub fn new(session: PassSession) -> Self {
        Self {
            session,
            role: Role::Professor,
            event_name: defaults::EVENT_NAME.to_string(),
            event_date: defaults::EVENT_DATE.to_string(),
            venue: defaults::VENUE.to_string(),
        }
    }

    /// Create a console whose form is prefilled from `config`
    pub fn from_config(config: &PassConfig) -> Result<Self, ConfigValidationError> {
        let role = config.get_role()?;
        Ok(Self {
            session: PassSession::from_config(config),
            role,
            event_name: config.event_name.clone(),
            event_date: config.event_date.clone(),
            venue: config.venue.clone(),
        })
    }

    /// The session behind the console
    pub fn session(&self) -> &PassSession {
        &self.session
    }

    /// Currently selected role
    pub fn role(&self) -> Role {
        self.role
    }

    /// Run one command line, appending its output to `out`
    pub fn execute(&mut self, line: &str, out: &mut Vec<String>) -> Flow {
        let line = line.trim();
        if line.is_empty() {
            return Flow::Continue;
        }

        let (command, args) = match line.split_once(char::is_whitespace) {
            Some((command, args)) => (command, args.trim()),
            None => (line, ""),
        };
        debug!(command, "Console command");

        match command.to_ascii_lowercase().as_str() {
            "role" => match args.parse::<Role>() {
                Ok(role) => {
                    self.role = role;
                    out.push(format!("Role set to {}", role));
                }
                Err(_) => out.push(ValidationError::unknown_role(args).to_string()),
            },
            "event" => self.event_name = args.to_string(),
            "date" => self.event_date = args.to_string(),
            "venue" => self.venue = args.to_string(),
            "form" => out.push(self.form_line()),
            "build" => self.build(out),
            "issue" => self.issue(args, out),
            "template" => match self.session.template() {
                Some(template) => {
                    out.push("=== TEMPLATE ===".to_string());
                    out.push(template.to_text());
                }
                None => out.push("No template yet.".to_string()),
            },
            "list" => push_created_passes(self.session.issued(), out),
            "clear" => out.push(CLEAR_SCREEN.to_string()),
            "help" => out.extend(HELP.iter().map(|line| line.to_string())),
            "quit" | "exit" => return Flow::Quit,
            other => out.push(format!("Unknown command: {} (type 'help')", other)),
        }

        Flow::Continue
    }

    /// Read commands from `input` until it ends or a quit command arrives
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in BANNER {
            writeln!(output, "{}", line)?;
        }

        let mut lines = input.lines();
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            let Some(line) = lines.next() else {
                writeln!(output)?;
                break;
            };

            let mut out = Vec::new();
            let flow = self.execute(&line?, &mut out);
            for entry in &out {
                writeln!(output, "{}", entry)?;
            }
            if flow == Flow::Quit {
                break;
            }
        }

        info!(issued = self.session.issued().len(), "Console session finished");
        Ok(())
    }

    fn form_line(&self) -> String {
        format!(
            "Role={} | Event={} | Date={} | Venue={}",
            self.role, self.event_name, self.event_date, self.venue
        )
    }

    fn build(&mut self, out: &mut Vec<String>) {
        let result = self.session.build_template_for(
            self.role,
            &self.event_name,
            &self.event_date,
            &self.venue,
            Some(&mut *out),
        );
        match result {
            Ok(template) => out.push(template.to_text()),
            Err(err @ ValidationError::BlankEventInfo { .. }) => out.push(format!("Oops. {}", err)),
            Err(err) => out.push(err.to_string()),
        }
    }

    fn issue(&mut self, args: &str, out: &mut Vec<String>) {
        let (name, email) = split_holder(args);
        match self.session.issue_pass(&name, &email, Some(&mut *out)) {
            Ok(pass) => out.push(pass.to_text()),
            Err(err) => out.push(err.to_string()),
        }
    }
}

/// Append the numbered listing of `issued` passes
pub(crate) fn push_created_passes(issued: &[Pass], out: &mut Vec<String>) {
    out.push(format!("=== CREATED PASSES ({}) ===", issued.len()));
    if issued.is_empty() {
        out.push("(none yet)".to_string());
    }
    for (index, pass) in issued.iter().enumerate() {
        out.push(format!("#{}", index + 1));
        out.push(pass.to_text());
    }
}

/// Split `name | email`, falling back to `Name <email>` and `Name,email`
fn split_holder(args: &str) -> (String, String) {
    if let Some((name, email)) = args.split_once('|') {
        return (name.trim().to_string(), email.trim().to_string());
    }
    match args.parse::<HolderSpec>() {
        Ok(holder) => (holder.name, holder.email),
        Err(_) => (args.trim().to_string(), String::new()),
    }
}
