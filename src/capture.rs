//! Panic capturing for test and group bodies.
//!
//! A process-wide panic hook is chained in front of the previous one the first time a body
//! runs. While a [`PanicCaptureGuard`] is alive on a thread, panics from that thread are not
//! printed; their location is stored so the failure can report it. Every other panic is
//! forwarded to the previous hook unchanged.

use std::{
    any::Any,
    cell::{Cell, RefCell},
    panic::{self, AssertUnwindSafe, PanicHookInfo},
    sync::Once,
};

use crate::outcome::TestFailure;

thread_local! {
    static CAPTURING: Cell<bool> = const { Cell::new(false) };
    static PANIC_LOCATION: RefCell<Option<String>> = const { RefCell::new(None) };
}

static INSTALL_HOOK: Once = Once::new();

fn install_hook() {
    INSTALL_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info: &PanicHookInfo<'_>| {
            if !CAPTURING.get() {
                return previous(info);
            }

            PANIC_LOCATION.set(info.location().map(|location| location.to_string()));
        }));
    });
}

pub(crate) struct PanicCaptureGuard {
    was_capturing: bool,
}

impl PanicCaptureGuard {
    pub(crate) fn install() -> Self {
        install_hook();
        Self {
            was_capturing: CAPTURING.replace(true),
        }
    }
}

impl Drop for PanicCaptureGuard {
    fn drop(&mut self) {
        CAPTURING.set(self.was_capturing);
    }
}

/// A panic caught while running a body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedPanic {
    pub message: String,
    pub location: Option<String>,
}

impl From<CapturedPanic> for TestFailure {
    fn from(value: CapturedPanic) -> Self {
        TestFailure::Panicked {
            message: value.message,
            location: value.location,
        }
    }
}

/// Convert a panic payload into a string.
///
/// This matches the common payload types produced by `panic!` (`&'static str` and `String`).
/// Other payload types are formatted as a generic placeholder.
pub fn payload_as_string(err: Box<dyn Any + Send + 'static>) -> String {
    err.downcast::<&'static str>()
        .map(|s| s.to_string())
        .or_else(|err| err.downcast::<String>().map(|s| *s))
        .unwrap_or_else(|_| String::from("Box<dyn Any>"))
}

/// Run `f`, turning a panic into a [`CapturedPanic`] instead of unwinding further.
///
/// Bodies are not required to be unwind safe: a panicking body leaves nothing behind that
/// the caller reads again except what was already registered or recorded.
pub(crate) fn catch<F, R>(f: F) -> Result<R, CapturedPanic>
where
    F: FnOnce() -> R,
{
    let _guard = PanicCaptureGuard::install();
    PANIC_LOCATION.take();
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| CapturedPanic {
        message: payload_as_string(payload),
        location: PANIC_LOCATION.take(),
    })
}
