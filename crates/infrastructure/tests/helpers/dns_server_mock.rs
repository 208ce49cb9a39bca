#![allow(dead_code)]
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

pub const RCODE_NOERROR: u8 = 0;
pub const RCODE_SERVFAIL: u8 = 2;
pub const RCODE_REFUSED: u8 = 5;

const TYPE_A: u16 = 1;
const TYPE_NS: u16 = 2;

#[derive(Debug, Clone)]
pub enum MockRecord {
    A([u8; 4]),
    Ns(String),
}

#[derive(Debug, Clone, Default)]
pub struct MockAnswer {
    pub rcode: u8,
    pub answers: Vec<MockRecord>,
    pub authority: Vec<MockRecord>,
}

impl MockAnswer {
    pub fn rcode(rcode: u8) -> Self {
        Self {
            rcode,
            ..Default::default()
        }
    }

    pub fn ns_answer(names: &[&str]) -> Self {
        Self {
            answers: names.iter().map(|n| MockRecord::Ns(n.to_string())).collect(),
            ..Default::default()
        }
    }

    pub fn ns_referral(names: &[&str]) -> Self {
        Self {
            authority: names.iter().map(|n| MockRecord::Ns(n.to_string())).collect(),
            ..Default::default()
        }
    }

    pub fn a(octets: [u8; 4]) -> Self {
        Self {
            answers: vec![MockRecord::A(octets)],
            ..Default::default()
        }
    }
}

/// Mock authoritative DNS server for tests.
///
/// Answers from a table keyed by (lowercase query name, query type). Names
/// missing from the table get `NOERROR` with no records. With
/// `silent = true` nothing is ever answered, to exercise timeouts.
pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(table: HashMap<(String, u16), MockAnswer>) -> std::io::Result<Self> {
        Self::spawn(table, false).await
    }

    pub async fn start_silent() -> std::io::Result<Self> {
        Self::spawn(HashMap::new(), true).await
    }

    async fn spawn(table: HashMap<(String, u16), MockAnswer>, silent: bool) -> std::io::Result<Self> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;
        let table = Arc::new(table);

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            if silent {
                                continue;
                            }
                            if let Some(response) = Self::build_response(&buf[..len], &table) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Returns (query name without trailing dot, qtype, end of question).
    fn parse_question(query: &[u8]) -> Option<(String, u16, usize)> {
        let mut pos = 12;
        let mut labels = Vec::new();

        loop {
            let len = *query.get(pos)? as usize;
            pos += 1;
            if len == 0 {
                break;
            }
            let label = query.get(pos..pos + len)?;
            labels.push(String::from_utf8_lossy(label).to_lowercase());
            pos += len;
        }

        let qtype = u16::from_be_bytes([*query.get(pos)?, *query.get(pos + 1)?]);
        // qtype + qclass
        Some((labels.join("."), qtype, pos + 4))
    }

    fn encode_name(name: &str) -> Vec<u8> {
        let mut out = Vec::new();
        for label in name.trim_end_matches('.').split('.').filter(|l| !l.is_empty()) {
            out.push(label.len() as u8);
            out.extend_from_slice(label.as_bytes());
        }
        out.push(0);
        out
    }

    fn encode_record(record: &MockRecord) -> Vec<u8> {
        let (rtype, rdata) = match record {
            MockRecord::A(octets) => (TYPE_A, octets.to_vec()),
            MockRecord::Ns(name) => (TYPE_NS, Self::encode_name(name)),
        };

        let mut out = vec![0xc0, 0x0c]; // Name pointer to question
        out.extend_from_slice(&rtype.to_be_bytes());
        out.extend_from_slice(&[0x00, 0x01]); // Class IN
        out.extend_from_slice(&[0x00, 0x00, 0x0e, 0x10]); // TTL: 3600 seconds
        out.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
        out.extend_from_slice(&rdata);
        out
    }

    fn build_response(query: &[u8], table: &HashMap<(String, u16), MockAnswer>) -> Option<Vec<u8>> {
        if query.len() < 12 {
            return None;
        }

        let (qname, qtype, question_end) = Self::parse_question(query)?;
        let answer = table.get(&(qname, qtype)).cloned().unwrap_or_default();

        let mut response = Vec::with_capacity(512);
        response.extend_from_slice(&query[0..2]); // Transaction ID
        response.push(0x85); // QR=1, AA=1, RD=1
        response.push(answer.rcode & 0x0f);
        response.extend_from_slice(&[0x00, 0x01]); // One question
        response.extend_from_slice(&(answer.answers.len() as u16).to_be_bytes());
        response.extend_from_slice(&(answer.authority.len() as u16).to_be_bytes());
        response.extend_from_slice(&[0x00, 0x00]); // Additional RRs: 0
        response.extend_from_slice(&query[12..question_end]);

        for record in answer.answers.iter().chain(answer.authority.iter()) {
            response.extend_from_slice(&Self::encode_record(record));
        }

        Some(response)
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
