use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::host::{BridgeEvent, HostSurface};
use crate::window::RuntimeConfig;

/// A host surface over a pair of byte streams.
///
/// The document is written once to `output`; events are read from `input`
/// as JSON lines:
///
/// ```text
/// {"id": "button_0", "value": "click"}
/// {"id": "tab_switch", "value": "Settings"}
/// ```
///
/// Blank lines are skipped. Lines that are not a valid event are logged and
/// skipped, so a noisy peer cannot end the session. EOF closes the window.
pub struct StreamHost<R, W> {
    input: R,
    output: W,
    line: Vec<u8>,
    line_no: usize,
}

impl<R: BufRead, W: Write> StreamHost<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output, line: Vec::new(), line_no: 0 }
    }

    /// Consume the host and hand back its streams.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> HostSurface for StreamHost<R, W> {
    fn open(&mut self, config: &RuntimeConfig, document: &str) -> Result<()> {
        log::info!(
            "opening '{}' ({}x{}), {} bytes of markup",
            config.title, config.width, config.height, document.len()
        );
        self.output
            .write_all(document.as_bytes())
            .context("failed to write document to host stream")?;
        self.output.flush().context("failed to flush host stream")?;
        Ok(())
    }

    fn next_event(&mut self) -> Result<Option<BridgeEvent>> {
        loop {
            self.line.clear();
            let read = self
                .input
                .read_until(b'\n', &mut self.line)
                .context("failed to read event from host stream")?;
            if read == 0 {
                return Ok(None);
            }
            self.line_no += 1;

            // Raw bytes, so a line that is not UTF-8 is skipped like any other bad line.
            let line = self.line.trim_ascii();
            if line.is_empty() {
                continue;
            }
            match serde_json::from_slice::<BridgeEvent>(line) {
                Ok(event) => {
                    log::trace!("event {}: {} = {:?}", self.line_no, event.id, event.value);
                    return Ok(Some(event));
                }
                Err(e) => log::warn!("skipping malformed event on line {}: {e}", self.line_no),
            }
        }
    }

    fn close(&mut self) -> Result<()> {
        self.output.flush().context("failed to flush host stream")?;
        log::info!("host stream closed after {} line(s)", self.line_no);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn host(input: &str) -> StreamHost<Cursor<Vec<u8>>, Vec<u8>> {
        StreamHost::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn open_writes_document_verbatim() {
        let mut h = host("");
        h.open(&RuntimeConfig::default(), "<html></html>").unwrap();
        let (_, out) = h.into_inner();
        assert_eq!(out, b"<html></html>");
    }

    #[test]
    fn reads_events_in_order() {
        let mut h = host(
            "{\"id\":\"button_0\",\"value\":\"click\"}\n{\"id\":\"slider_1\",\"value\":\"42\"}\n",
        );
        assert_eq!(h.next_event().unwrap(), Some(BridgeEvent::new("button_0", "click")));
        assert_eq!(h.next_event().unwrap(), Some(BridgeEvent::new("slider_1", "42")));
        assert_eq!(h.next_event().unwrap(), None);
    }

    #[test]
    fn skips_blank_and_malformed_lines() {
        let mut h = host("\n   \nnot json\n{\"id\":\"x\"}\n{\"id\":\"tab_switch\",\"value\":\"A\"}\n");
        let ev = h.next_event().unwrap().unwrap();
        assert!(ev.is_tab_switch());
        assert_eq!(ev.value, "A");
        assert_eq!(h.next_event().unwrap(), None);
    }

    #[test]
    fn invalid_utf8_line_is_skipped() {
        let bytes = b"\xff\xfe garbage\n{\"id\":\"button_0\",\"value\":\"click\"}\n";
        let mut h = StreamHost::new(Cursor::new(bytes.to_vec()), Vec::new());
        assert_eq!(h.next_event().unwrap(), Some(BridgeEvent::new("button_0", "click")));
        assert_eq!(h.next_event().unwrap(), None);
    }

    #[test]
    fn last_line_without_newline_is_read() {
        let mut h = host("{\"id\":\"a\",\"value\":\"b\"}");
        assert_eq!(h.next_event().unwrap(), Some(BridgeEvent::new("a", "b")));
        assert_eq!(h.next_event().unwrap(), None);
    }
}
