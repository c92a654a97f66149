use std::fmt;
use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

use thiserror::Error;

mod archive;
mod digest;
mod files;
mod navigation;
mod parser;
mod preconditions;
mod system;

pub use archive::{CompressCommand, DecompressCommand};
pub use digest::HashCommand;
pub use files::{AddCommand, CatCommand, CopyCommand, MoveCommand, RemoveCommand, RenameCommand};
pub use navigation::{CdCommand, ExitCommand, LsCommand, UpCommand};
pub use parser::tokenize;
pub use system::{OsCommand, OsQuery};

use super::config::Options;
use super::session::Session;

/// The leading token of an input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Up,
    Cd,
    Ls,
    Cat,
    Add,
    Rn,
    Cp,
    Mv,
    Rm,
    Os,
    Hash,
    Compress,
    Decompress,
    Exit,
}

impl Verb {
    pub const ALL: [Verb; 14] = [
        Verb::Up,
        Verb::Cd,
        Verb::Ls,
        Verb::Cat,
        Verb::Add,
        Verb::Rn,
        Verb::Cp,
        Verb::Mv,
        Verb::Rm,
        Verb::Os,
        Verb::Hash,
        Verb::Compress,
        Verb::Decompress,
        Verb::Exit,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Verb::Up => "up",
            Verb::Cd => "cd",
            Verb::Ls => "ls",
            Verb::Cat => "cat",
            Verb::Add => "add",
            Verb::Rn => "rn",
            Verb::Cp => "cp",
            Verb::Mv => "mv",
            Verb::Rm => "rm",
            Verb::Os => "os",
            Verb::Hash => "hash",
            Verb::Compress => "compress",
            Verb::Decompress => "decompress",
            Verb::Exit => ".exit",
        }
    }

    /// Exact, case-sensitive match.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|verb| verb.as_str() == token)
    }

    /// Number of arguments the verb takes.
    pub fn arity(self) -> usize {
        match self {
            Verb::Up | Verb::Ls | Verb::Exit => 0,
            Verb::Cd | Verb::Cat | Verb::Add | Verb::Rm | Verb::Os | Verb::Hash => 1,
            Verb::Rn | Verb::Cp | Verb::Mv | Verb::Compress | Verb::Decompress => 2,
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse failure category, for callers that branch on cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    AlreadyExists,
    NotADirectory,
    NotAFile,
    Io,
    BadSyntax,
    Fault,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("unknown command: `{0}`")]
    UnknownCommand(String),
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("no such file or directory: {}", .0.display())]
    NotFound(PathBuf),
    #[error("already exists: {}", .0.display())]
    AlreadyExists(PathBuf),
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    #[error("not a file: {}", .0.display())]
    NotAFile(PathBuf),
    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("unavailable: {0}")]
    Unavailable(&'static str),
    #[error("command panicked: {0}")]
    Fault(String),
}

impl CommandError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CommandError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CommandError::UnknownCommand(_) | CommandError::InvalidArguments(_) => ErrorKind::BadSyntax,
            CommandError::NotFound(_) | CommandError::Unavailable(_) => ErrorKind::NotFound,
            CommandError::AlreadyExists(_) => ErrorKind::AlreadyExists,
            CommandError::NotADirectory(_) => ErrorKind::NotADirectory,
            CommandError::NotAFile(_) => ErrorKind::NotAFile,
            CommandError::Io { source, .. } => match source.kind() {
                io::ErrorKind::NotFound => ErrorKind::NotFound,
                io::ErrorKind::AlreadyExists => ErrorKind::AlreadyExists,
                _ => ErrorKind::Io,
            },
            CommandError::Fault(_) => ErrorKind::Fault,
        }
    }
}

impl From<io::Error> for CommandError {
    fn from(err: io::Error) -> Self {
        CommandError::io(PathBuf::new(), err)
    }
}

pub(crate) trait IoResultExt<T> {
    fn at(self, path: &Path) -> Result<T, CommandError>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn at(self, path: &Path) -> Result<T, CommandError> {
        self.map_err(|e| CommandError::io(path, e))
    }
}

/// What the interpreter does after a command succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit,
}

/// Everything a handler may touch while it runs.
pub struct Context<'a> {
    pub session: &'a mut Session,
    pub options: &'a Options,
    pub out: &'a mut dyn Write,
}

pub trait Command {
    fn execute(&self, ctx: &mut Context<'_>, args: &[String]) -> Result<Outcome, CommandError>;
}

/// A tokenized input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub verb: Verb,
    pub args: Vec<String>,
}

impl ParsedCommand {
    /// Tokenizes `line` and checks the verb and argument count.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut tokens = tokenize(line)?.into_iter();
        let head = tokens.next().unwrap_or_default();
        let verb = Verb::from_token(&head).ok_or(CommandError::UnknownCommand(head))?;
        let args: Vec<String> = tokens.collect();

        if args.len() != verb.arity() {
            return Err(CommandError::InvalidArguments(format!(
                "{verb} takes {} argument(s), got {}",
                verb.arity(),
                args.len()
            )));
        }
        Ok(Self { verb, args })
    }
}

#[derive(Clone, Copy)]
enum CommandType {
    Up(UpCommand),
    Cd(CdCommand),
    Ls(LsCommand),
    Cat(CatCommand),
    Add(AddCommand),
    Rn(RenameCommand),
    Cp(CopyCommand),
    Mv(MoveCommand),
    Rm(RemoveCommand),
    Os(OsCommand),
    Hash(HashCommand),
    Compress(CompressCommand),
    Decompress(DecompressCommand),
    Exit(ExitCommand),
}

impl CommandType {
    fn for_verb(verb: Verb) -> Self {
        match verb {
            Verb::Up => CommandType::Up(UpCommand),
            Verb::Cd => CommandType::Cd(CdCommand),
            Verb::Ls => CommandType::Ls(LsCommand),
            Verb::Cat => CommandType::Cat(CatCommand),
            Verb::Add => CommandType::Add(AddCommand),
            Verb::Rn => CommandType::Rn(RenameCommand),
            Verb::Cp => CommandType::Cp(CopyCommand),
            Verb::Mv => CommandType::Mv(MoveCommand),
            Verb::Rm => CommandType::Rm(RemoveCommand),
            Verb::Os => CommandType::Os(OsCommand),
            Verb::Hash => CommandType::Hash(HashCommand),
            Verb::Compress => CommandType::Compress(CompressCommand),
            Verb::Decompress => CommandType::Decompress(DecompressCommand),
            Verb::Exit => CommandType::Exit(ExitCommand),
        }
    }
}

impl Command for CommandType {
    fn execute(&self, ctx: &mut Context<'_>, args: &[String]) -> Result<Outcome, CommandError> {
        match self {
            CommandType::Up(cmd) => cmd.execute(ctx, args),
            CommandType::Cd(cmd) => cmd.execute(ctx, args),
            CommandType::Ls(cmd) => cmd.execute(ctx, args),
            CommandType::Cat(cmd) => cmd.execute(ctx, args),
            CommandType::Add(cmd) => cmd.execute(ctx, args),
            CommandType::Rn(cmd) => cmd.execute(ctx, args),
            CommandType::Cp(cmd) => cmd.execute(ctx, args),
            CommandType::Mv(cmd) => cmd.execute(ctx, args),
            CommandType::Rm(cmd) => cmd.execute(ctx, args),
            CommandType::Os(cmd) => cmd.execute(ctx, args),
            CommandType::Hash(cmd) => cmd.execute(ctx, args),
            CommandType::Compress(cmd) => cmd.execute(ctx, args),
            CommandType::Decompress(cmd) => cmd.execute(ctx, args),
            CommandType::Exit(cmd) => cmd.execute(ctx, args),
        }
    }
}

/// Runs one input line to completion.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dispatcher;

impl Dispatcher {
    pub fn new() -> Self {
        Self
    }

    /// Parses and executes `line`. A panicking handler is reported as
    /// [`CommandError::Fault`]; the session is left as the handler left it.
    pub fn dispatch(&self, ctx: &mut Context<'_>, line: &str) -> Result<Outcome, CommandError> {
        let result = ParsedCommand::parse(line.trim()).and_then(|parsed| {
            tracing::trace!(verb = %parsed.verb, args = ?parsed.args, "dispatching");
            run_guarded(&CommandType::for_verb(parsed.verb), ctx, &parsed.args)
        });

        if let Err(err) = &result {
            tracing::debug!(kind = ?err.kind(), %err, "command failed");
        }
        result
    }
}

/// Runs `handler`, turning a panic into [`CommandError::Fault`].
fn run_guarded(handler: &dyn Command, ctx: &mut Context<'_>, args: &[String]) -> Result<Outcome, CommandError> {
    panic::catch_unwind(AssertUnwindSafe(|| handler.execute(ctx, args)))
        .unwrap_or_else(|payload| Err(CommandError::Fault(panic_message(payload.as_ref()))))
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}
