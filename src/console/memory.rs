//! In-memory console capturing both streams independently.

use std::io;
use std::sync::{Arc, Mutex, MutexGuard};

use super::{Console, Stream};

#[derive(Debug, Default)]
struct Buffers {
    stdout: Vec<u8>,
    stderr: Vec<u8>,
}

/// A console that records everything written to it.
///
/// Clones share the same buffers, so a clone handed to a registry can be
/// inspected through the original.
#[derive(Debug, Clone, Default)]
pub struct MemoryConsole {
    inner: Arc<Mutex<Buffers>>,
}

impl MemoryConsole {
    /// Create an empty capture.
    pub fn new() -> Self {
        Self::default()
    }

    fn buffers(&self) -> MutexGuard<'_, Buffers> {
        // A poisoned capture is still readable
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Everything written to stdout so far, lossily decoded.
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.buffers().stdout).into_owned()
    }

    /// Everything written to stderr so far, lossily decoded.
    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.buffers().stderr).into_owned()
    }

    /// Drain both buffers, returning `(stdout, stderr)`.
    pub fn take(&self) -> (String, String) {
        let mut buffers = self.buffers();
        let out = String::from_utf8_lossy(&std::mem::take(&mut buffers.stdout)).into_owned();
        let err = String::from_utf8_lossy(&std::mem::take(&mut buffers.stderr)).into_owned();
        (out, err)
    }

    /// Returns true if nothing has been captured on either stream.
    pub fn is_empty(&self) -> bool {
        let buffers = self.buffers();
        buffers.stdout.is_empty() && buffers.stderr.is_empty()
    }
}

impl Console for MemoryConsole {
    fn write_record(&self, stream: Stream, record: &[u8]) -> io::Result<()> {
        let mut buffers = self.buffers();
        match stream {
            Stream::Discard => {}
            Stream::Stdout => buffers.stdout.extend_from_slice(record),
            Stream::Stderr => buffers.stderr.extend_from_slice(record),
        }
        Ok(())
    }
}
