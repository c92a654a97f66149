use std::{
    env,
    io::{self, Write},
};

use rustyline::{error::ReadlineError, history::FileHistory, Config as EditorConfig, Editor};

mod reporter;

pub use reporter::{Reporter, FAILURE_BANNER};

use crate::{
    core::{
        commands::{Context, Dispatcher, Outcome},
        config::Config,
        session::Session,
    },
    error::ShellError,
    highlight::SyntaxHighlighter,
    input::ShellCompleter,
};

pub const PROMPT: &str = "> ";

pub struct Shell {
    pub(crate) editor: Editor<ShellCompleter, FileHistory>,
    pub(crate) session: Session,
    pub(crate) config: Config,
    pub(crate) dispatcher: Dispatcher,
    pub(crate) reporter: Reporter,
}

impl Shell {
    pub fn new(session: Session, config: Config) -> Result<Self, ShellError> {
        let options = config.options();
        let highlighter = SyntaxHighlighter::new(options.color);

        let editor_config = EditorConfig::builder()
            .max_history_size(options.history_size)?
            .auto_add_history(options.history)
            .build();
        let mut editor = Editor::<ShellCompleter, FileHistory>::with_config(editor_config)?;

        let mut completer = ShellCompleter::new(
            session.current_dir().to_path_buf(),
            session.home_dir().to_path_buf(),
            highlighter,
        );
        completer.update_aliases(config.aliases());
        editor.set_helper(Some(completer));

        if options.history {
            let history_path = &config.paths().history_path;
            if let Err(err) = editor.load_history(history_path) {
                tracing::debug!(path = %history_path.display(), %err, "no history loaded");
            }
        }

        Ok(Shell {
            editor,
            session,
            config,
            dispatcher: Dispatcher::new(),
            reporter: Reporter::new(highlighter),
        })
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        let username = self.session.username().to_string();
        let reporter = self.reporter;
        ctrlc::set_handler(move || {
            let mut out = io::stdout();
            let _ = writeln!(out);
            let _ = reporter.goodbye(&mut out, &username);
            std::process::exit(0);
        })?;

        let mut out = io::stdout();
        self.reporter.welcome(&mut out, self.session.username())?;
        self.reporter.current_dir(&mut out, self.session.current_dir())?;
        out.flush()?;
        self.sync_process_dir();

        loop {
            match self.editor.readline(PROMPT) {
                Ok(line) => {
                    if self.execute_line(&line, &mut out)? == Outcome::Exit {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    writeln!(out)?;
                    break;
                }
                Err(err) => return Err(err.into()),
            }
        }

        self.save_history();
        self.reporter.goodbye(&mut out, self.session.username())?;
        out.flush()?;
        Ok(())
    }

    /// Runs one line and prints its status. Command failures are reported,
    /// only a broken output stream is returned as an error.
    pub fn execute_line(&mut self, line: &str, out: &mut dyn Write) -> Result<Outcome, ShellError> {
        let expanded = self.config.expand_aliases(line).into_owned();
        let result = {
            let mut ctx = Context {
                session: &mut self.session,
                options: self.config.options(),
                out: &mut *out,
            };
            self.dispatcher.dispatch(&mut ctx, &expanded)
        };

        if result.is_ok() {
            self.sync_process_dir();
            if let Some(helper) = self.editor.helper_mut() {
                helper.set_current_dir(self.session.current_dir().to_path_buf());
            }
        }

        self.reporter.report(out, &result, self.session.current_dir())?;
        out.flush()?;
        Ok(result.unwrap_or(Outcome::Continue))
    }

    fn sync_process_dir(&self) {
        if !self.config.options().sync_process_dir {
            return;
        }
        if let Err(err) = env::set_current_dir(self.session.current_dir()) {
            tracing::warn!(dir = %self.session.current_dir().display(), %err, "could not change process directory");
        }
    }

    fn save_history(&mut self) {
        if !self.config.options().history {
            return;
        }
        let history_path = &self.config.paths().history_path;
        if let Err(err) = self.editor.save_history(history_path) {
            tracing::warn!(path = %history_path.display(), %err, "could not save history");
        }
    }
}
