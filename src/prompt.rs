// Credential prompting. The session only talks to the `LinePrompt` trait, so
// tests can feed scripted answers instead of driving a real terminal.

use dialoguer::{Input, Password};
use std::collections::VecDeque;
use std::fmt;
use std::io::{self, BufRead, IsTerminal, Write};

/// Source of single-line answers to prompts.
pub trait LinePrompt {
    /// Show `prompt` and return one line of input without its line ending.
    /// End of input is returned as an empty line.
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;

    /// Like `read_line`, for values that should not be echoed.
    fn read_secret(&mut self, prompt: &str) -> io::Result<String> {
        self.read_line(prompt)
    }
}

/// Prompts on the real terminal.
///
/// With an interactive stdin the prompts go through `dialoguer` (the token is
/// read with echo disabled). When stdin is a pipe or file, plain lines are
/// read so the answers can be scripted from the shell.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl TerminalPrompt {
    fn read_plain(prompt: &str) -> io::Result<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{}: ", prompt)?;
        stdout.flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
    }
}

impl LinePrompt for TerminalPrompt {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        if !io::stdin().is_terminal() {
            return Self::read_plain(prompt);
        }
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
    }

    fn read_secret(&mut self, prompt: &str) -> io::Result<String> {
        if !io::stdin().is_terminal() {
            return Self::read_plain(prompt);
        }
        Password::new()
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()
    }
}

/// Pre-recorded answers, handed out in order. Runs dry as empty lines.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedPrompt {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Prompts shown so far.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }
}

impl LinePrompt for ScriptedPrompt {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        self.asked.push(prompt.to_string());
        Ok(self.answers.pop_front().unwrap_or_default())
    }
}

/// Account email and single-use submission token for one attempt.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub token: String,
}

impl Credentials {
    /// An empty email is the user's way of backing out.
    pub fn is_cancelled(&self) -> bool {
        self.email.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Ask for the login email and then the submission token.
///
/// No format checks are made. Surrounding whitespace is dropped from the
/// email, so an email made of spaces counts as empty and
/// [`Credentials::is_cancelled`] holds. The token is kept as entered.
pub fn prompt_credentials<P: LinePrompt + ?Sized>(prompt: &mut P) -> io::Result<Credentials> {
    println!("Please enter the email address that you use to log in to Coursera.");
    let email = prompt.read_line("Login (Email address)")?;

    println!("To validate your submission, we need your submission token.");
    println!("This is the single-use key you can generate on the Coursera instructions page for this assignment.");
    println!("This is NOT your own Coursera account password!");
    let token = prompt.read_secret("Submission token")?;

    Ok(Credentials {
        email: email.trim().to_string(),
        token: token.trim_end_matches(&['\r', '\n'][..]).to_string(),
    })
}
