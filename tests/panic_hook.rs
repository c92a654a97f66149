use std::io::{self, Write};
use std::panic;
use std::sync::{Arc, Mutex};

use fman::logging::install_panic_hook;

#[derive(Clone, Default)]
struct SharedLog(Arc<Mutex<Vec<u8>>>);

impl Write for SharedLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_panics_are_logged_not_printed() {
    install_panic_hook();
    let log = SharedLog::default();
    let writer = log.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let caught = tracing::subscriber::with_default(subscriber, || {
        panic::catch_unwind(|| panic!("handler went wrong")).is_err()
    });
    let _ = panic::take_hook();

    assert!(caught);
    let logged = String::from_utf8(log.0.lock().unwrap().clone()).unwrap();
    assert!(logged.contains("command panicked"), "{logged}");
    assert!(logged.contains("handler went wrong"), "{logged}");
}
