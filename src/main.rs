use fman::core::config::Config;
use fman::core::session::Session;
use fman::error::ShellError;
use fman::flags::Flags;
use fman::identity::username_or_fallback;
use fman::logging::{init_logging, install_panic_hook};
use fman::shell::Shell;
use std::env;

fn main() -> Result<(), ShellError> {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    flags.parse(&args)?;

    if flags.is_set("help") {
        flags.print_help();
        return Ok(());
    }

    if flags.is_set("version") {
        println!("fman {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_logging();
    install_panic_hook();

    let username = username_or_fallback(&args);
    let home_dir = dirs::home_dir().ok_or(ShellError::HomeDirNotFound)?;

    let mut config = Config::new()?;
    if let Err(err) = config.load() {
        tracing::warn!(path = %config.paths().rc_path.display(), %err, "ignoring rc file");
    }

    let session = Session::new(username, home_dir);
    let mut shell = Shell::new(session, config)?;
    shell.run()
}
