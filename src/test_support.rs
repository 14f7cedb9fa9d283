//! Log capture for tests.
//!
//! Records are tagged with the emitting thread so tests running in parallel
//! only see their own output.

use std::sync::Mutex;
use std::thread::{self, ThreadId};

use log::{Level, LevelFilter, Log, Metadata, Record};

static RECORDS: Mutex<Vec<(ThreadId, Level, String)>> = Mutex::new(Vec::new());
static LOGGER: CaptureLogger = CaptureLogger;

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        let mut records = RECORDS.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        records.push((
            thread::current().id(),
            record.level(),
            record.args().to_string(),
        ));
    }

    fn flush(&self) {}
}

fn drain_current_thread() -> Vec<(Level, String)> {
    let id = thread::current().id();
    let mut records = RECORDS.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let (mine, others): (Vec<_>, Vec<_>) = records.drain(..).partition(|(tid, _, _)| *tid == id);
    *records = others;
    mine.into_iter()
        .map(|(_, level, message)| (level, message))
        .collect()
}

/// Run `f` and return every `(level, message)` it logged on this thread.
pub(crate) fn capture_logs(f: impl FnOnce()) -> Vec<(Level, String)> {
    // only the first call installs; later calls find the logger already set
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(LevelFilter::Trace);
    drain_current_thread();
    f();
    drain_current_thread()
}
