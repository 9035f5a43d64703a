//! Panic capture at the boundary between panicking code and typed errors.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use thiserror::Error;

/// A panic captured by a `try_catch` boundary.
///
/// The panic payload is reduced to its message: payloads raised by
/// `panic!` with a literal or a formatted string are kept verbatim, any
/// other payload is described generically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("computation panicked: {message}")]
pub struct Thrown {
    message: String,
}

impl Thrown {
    /// Creates a `Thrown` carrying `message`.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Extracts the message from a panic payload.
    #[must_use]
    pub fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => match payload.downcast::<&'static str>() {
                Ok(message) => (*message).to_string(),
                Err(_) => "panic payload is not a string".to_string(),
            },
        };
        Self { message }
    }

    /// The panic message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Runs `computation`, turning a panic into a [`Thrown`].
pub(crate) fn catch<A, F>(computation: F) -> Result<A, Thrown>
where
    F: FnOnce() -> A,
{
    panic::catch_unwind(AssertUnwindSafe(computation)).map_err(|payload| {
        let thrown = Thrown::from_payload(payload);
        tracing::debug!(panic_message = %thrown.message(), "captured panic");
        thrown
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            let bytes = self.0.lock().unwrap();
            String::from_utf8_lossy(&bytes).into_owned()
        }
    }

    impl io::Write for SharedBuffer {
        fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(bytes);
            Ok(bytes.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[rstest]
    fn literal_payload_is_kept() {
        let thrown = catch(|| -> i32 { panic!("empty array") }).unwrap_err();
        assert_eq!(thrown.message(), "empty array");
        assert_eq!(thrown.to_string(), "computation panicked: empty array");
    }

    #[rstest]
    fn formatted_payload_is_kept() {
        let index = 3;
        let thrown = catch(|| -> i32 { panic!("no element at {index}") }).unwrap_err();
        assert_eq!(thrown, Thrown::new("no element at 3"));
    }

    #[rstest]
    fn other_payloads_are_described() {
        let thrown = catch(|| -> i32 { std::panic::panic_any(42_u8) }).unwrap_err();
        assert_eq!(thrown.message(), "panic payload is not a string");
    }

    #[rstest]
    fn values_pass_through() {
        assert_eq!(catch(|| 1 + 1), Ok(2));
    }

    #[rstest]
    fn captured_panic_is_logged_with_its_message_field() {
        let buffer = SharedBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let result = tracing::subscriber::with_default(subscriber, || {
            catch(|| -> i32 { panic!("empty array") })
        });

        assert_eq!(result, Err(Thrown::new("empty array")));
        let logged = buffer.contents();
        assert!(logged.contains("captured panic"), "{logged}");
        assert!(logged.contains("panic_message=empty array"), "{logged}");
    }
}
