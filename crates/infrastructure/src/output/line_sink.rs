use ns_takeover_application::ports::FindingSink;
use ns_takeover_domain::config::{OutputConfig, OutputFormat};
use ns_takeover_domain::Finding;
use serde::Serialize;
use std::io::{Stdout, Write};
use std::sync::Mutex;
use tracing::warn;

#[derive(Serialize)]
struct FindingLine<'a> {
    label: &'a str,
    #[serde(flatten)]
    finding: &'a Finding,
}

/// Writes one line per finding to any writer.
///
/// The line is assembled first and written with a single `write_all` under
/// the lock, so concurrent workers never interleave partial lines.
pub struct LineFindingSink<W: Write + Send> {
    label: String,
    format: OutputFormat,
    writer: Mutex<W>,
}

pub type StdoutFindingSink = LineFindingSink<Stdout>;

impl StdoutFindingSink {
    pub fn stdout(config: &OutputConfig) -> Self {
        Self::new(std::io::stdout(), config)
    }
}

impl<W: Write + Send> LineFindingSink<W> {
    pub fn new(writer: W, config: &OutputConfig) -> Self {
        Self {
            label: config.label.clone(),
            format: config.format,
            writer: Mutex::new(writer),
        }
    }

    pub fn format_line(&self, finding: &Finding) -> String {
        let mut line = match self.format {
            OutputFormat::Text => finding.render(&self.label),
            OutputFormat::Json => serde_json::to_string(&FindingLine {
                label: &self.label,
                finding,
            })
            .unwrap_or_else(|e| {
                warn!(error = %e, "Failed to serialize finding, falling back to text");
                finding.render(&self.label)
            }),
        };
        line.push('\n');
        line
    }

    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write + Send> FindingSink for LineFindingSink<W> {
    fn emit(&self, finding: &Finding) {
        let line = self.format_line(finding);

        let mut writer = self
            .writer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Err(e) = writer.write_all(line.as_bytes()).and_then(|()| writer.flush()) {
            warn!(error = %e, domain = %finding.domain, "Failed to write finding");
        }
    }
}
