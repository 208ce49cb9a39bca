use crate::ports::FindingSink;
use crate::use_cases::ScanDomainUseCase;
use ns_takeover_domain::Domain;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Queue capacity between the reader and the workers. Kept at one so that
/// reading stays in lockstep with the pool.
const QUEUE_CAPACITY: usize = 1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub domains_scanned: usize,
    pub findings: usize,
}

impl ScanSummary {
    fn merge(&mut self, other: ScanSummary) {
        self.domains_scanned += other.domains_scanned;
        self.findings += other.findings;
    }
}

/// Fixed pool of workers fed one domain at a time from a shared queue.
///
/// Each worker runs a full scan for a domain before taking the next one.
/// The only state the workers share is the queue receiver and the sink.
pub struct ScanDispatcher {
    scanner: Arc<ScanDomainUseCase>,
    sink: Arc<dyn FindingSink>,
    worker_count: usize,
}

impl ScanDispatcher {
    pub fn new(
        scanner: Arc<ScanDomainUseCase>,
        sink: Arc<dyn FindingSink>,
        worker_count: usize,
    ) -> Self {
        Self {
            scanner,
            sink,
            worker_count: worker_count.max(1),
        }
    }

    /// Reads one domain per line until end of input, scanning them on the
    /// pool, and returns once every worker has drained the queue and exited.
    ///
    /// Blank lines and lines that are not valid UTF-8 are skipped. A read
    /// error ends the input early; domains already queued are still scanned.
    pub async fn run<R>(&self, input: R) -> ScanSummary
    where
        R: AsyncBufRead + Unpin,
    {
        let (tx, rx) = mpsc::channel::<Domain>(QUEUE_CAPACITY);
        let rx = Arc::new(Mutex::new(rx));

        let mut workers = JoinSet::new();
        for worker_id in 0..self.worker_count {
            let rx = Arc::clone(&rx);
            let scanner = Arc::clone(&self.scanner);
            let sink = Arc::clone(&self.sink);
            workers.spawn(worker_loop(worker_id, rx, scanner, sink));
        }

        info!(workers = self.worker_count, "Worker pool started");

        feed_domains(input, &tx).await;
        drop(tx);

        let mut summary = ScanSummary::default();
        while let Some(joined) = workers.join_next().await {
            match joined {
                Ok(worker_summary) => summary.merge(worker_summary),
                Err(e) => warn!(error = %e, "Worker terminated abnormally"),
            }
        }

        info!(
            domains = summary.domains_scanned,
            findings = summary.findings,
            "All workers finished"
        );

        summary
    }
}

async fn feed_domains<R>(mut input: R, tx: &mpsc::Sender<Domain>)
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();
    let mut line_number = 0usize;

    loop {
        buf.clear();
        match input.read_until(b'\n', &mut buf).await {
            Ok(0) => break,
            Ok(_) => line_number += 1,
            Err(e) => {
                warn!(error = %e, line_number, "Input read failed, no further domains queued");
                break;
            }
        }

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line.trim(),
            Err(e) => {
                warn!(line_number, error = %e, "Skipping input line that is not valid UTF-8");
                continue;
            }
        };
        if line.is_empty() {
            continue;
        }

        if tx.send(Domain::from(line)).await.is_err() {
            warn!("All workers exited before input was exhausted");
            break;
        }
    }

    debug!(lines = line_number, "Input exhausted, closing queue");
}

async fn worker_loop(
    worker_id: usize,
    rx: Arc<Mutex<mpsc::Receiver<Domain>>>,
    scanner: Arc<ScanDomainUseCase>,
    sink: Arc<dyn FindingSink>,
) -> ScanSummary {
    let mut summary = ScanSummary::default();

    loop {
        // Guard is released before scanning so other workers can dequeue.
        let next = rx.lock().await.recv().await;
        let Some(domain) = next else {
            break;
        };

        debug!(worker_id, domain = %domain, "Scanning domain");
        let findings = scanner.execute(&domain).await;

        for finding in &findings {
            sink.emit(finding);
        }

        summary.domains_scanned += 1;
        summary.findings += findings.len();
    }

    debug!(worker_id, domains = summary.domains_scanned, "Worker exiting");
    summary
}
