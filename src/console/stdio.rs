//! Console backed by the process's standard streams.

use std::io::{self, Write};

use super::{Console, Stream};

/// Writes records to the process stdout and stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdConsole;

impl StdConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn write_record(&self, stream: Stream, record: &[u8]) -> io::Result<()> {
        match stream {
            Stream::Discard => Ok(()),
            Stream::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(record)?;
                out.flush()
            }
            Stream::Stderr => {
                let mut err = io::stderr().lock();
                err.write_all(record)?;
                err.flush()
            }
        }
    }
}
