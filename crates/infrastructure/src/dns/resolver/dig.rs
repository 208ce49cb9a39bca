use super::dig_parser::DigOutputParser;
use async_trait::async_trait;
use ns_takeover_application::ports::ResolverClient;
use ns_takeover_domain::{DomainError, NameServer, QueryType, ResolutionOutcome};
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, trace};

/// Resolver backed by the `dig` command line tool.
///
/// Each query runs `dig -t <type> +noall +comments +answer +authority +time=1
/// -q <domain> @<nameserver>`. The domain always follows `-q` so a name
/// starting with `-` or `+` is never read as an option. Stdout and stderr are captured separately: the
/// response is read from stdout only, stderr is kept for error reports.
pub struct DigResolverClient {
    binary: PathBuf,
    parser: DigOutputParser,
}

impl DigResolverClient {
    /// Fails with `ResolverUnavailable` when nothing exists at `binary`.
    pub fn new(binary: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let binary = binary.into();
        if !binary.exists() {
            return Err(DomainError::ResolverUnavailable(format!(
                "'dig' binary not found at path: {}",
                binary.display()
            )));
        }

        Ok(Self {
            binary,
            parser: DigOutputParser::new()?,
        })
    }

    pub fn command_args(domain: &str, nameserver: &NameServer, query_type: QueryType) -> Vec<String> {
        vec![
            "-t".to_string(),
            query_type.as_str().to_ascii_lowercase(),
            "+noall".to_string(),
            "+comments".to_string(),
            "+answer".to_string(),
            "+authority".to_string(),
            "+time=1".to_string(),
            "-q".to_string(),
            domain.to_string(),
            format!("@{}", nameserver),
        ]
    }
}

#[async_trait]
impl ResolverClient for DigResolverClient {
    async fn query(
        &self,
        domain: &str,
        nameserver: &NameServer,
        query_type: QueryType,
    ) -> Result<ResolutionOutcome, DomainError> {
        let args = Self::command_args(domain, nameserver, query_type);
        debug!(binary = %self.binary.display(), args = ?args, "Executing dig");

        let output = Command::new(&self.binary)
            .args(&args)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| {
                DomainError::ResolverUnavailable(format!(
                    "failed to run {}: {}",
                    self.binary.display(),
                    e
                ))
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        trace!(stdout = %stdout, stderr = %stderr, exit = ?output.status.code(), "dig output");

        let parsed = self.parser.parse(&stdout, query_type);

        match parsed.status {
            Some(status) => Ok(ResolutionOutcome::new(status, parsed.records)),
            None => {
                let reason = stderr
                    .lines()
                    .chain(stdout.lines())
                    .map(str::trim)
                    .find(|l| !l.is_empty())
                    .unwrap_or("no response header in dig output")
                    .to_string();

                Err(DomainError::Transport {
                    server: nameserver.to_string(),
                    reason: format!("{} (exit status {:?})", reason, output.status.code()),
                })
            }
        }
    }

    fn name(&self) -> &'static str {
        "dig"
    }
}
