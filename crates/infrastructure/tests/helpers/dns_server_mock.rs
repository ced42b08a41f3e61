#![allow(dead_code)]
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// Scripted mock DNS server.
///
/// Each instance plays one authoritative/root server: a script maps a
/// question (lowercased name, type code) to the canned response to send.
/// Questions with no script entry get silence, which is how timeout
/// behavior is exercised. Every received question is appended to a shared
/// log so tests can assert which queries actually went on the wire.
pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

pub type Script = HashMap<(String, u16), CannedResponse>;
pub type QueryLog = Arc<Mutex<Vec<(String, u16)>>>;

#[derive(Clone, Default)]
pub struct CannedResponse {
    pub answers: Vec<CannedRecord>,
    pub authority: Vec<CannedRecord>,
    pub additionals: Vec<CannedRecord>,
    /// When set, the response is the echoed transaction id followed by
    /// exactly these bytes; used to script malformed responses.
    pub raw_tail: Option<Vec<u8>>,
}

impl CannedResponse {
    pub fn answers(records: Vec<CannedRecord>) -> Self {
        Self {
            answers: records,
            ..Default::default()
        }
    }

    pub fn referral(authority: Vec<CannedRecord>, additionals: Vec<CannedRecord>) -> Self {
        Self {
            authority,
            additionals,
            ..Default::default()
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn malformed(tail: Vec<u8>) -> Self {
        Self {
            raw_tail: Some(tail),
            ..Default::default()
        }
    }
}

#[derive(Clone)]
pub struct CannedRecord {
    pub name: String,
    pub rtype: u16,
    pub ttl: u32,
    pub rdata: Rdata,
}

#[derive(Clone)]
pub enum Rdata {
    Ipv4([u8; 4]),
    Ipv6([u8; 16]),
    Name(String),
    Mx(u16, String),
}

impl CannedRecord {
    pub fn a(name: &str, ttl: u32, octets: [u8; 4]) -> Self {
        Self {
            name: name.to_string(),
            rtype: 1,
            ttl,
            rdata: Rdata::Ipv4(octets),
        }
    }

    pub fn aaaa(name: &str, ttl: u32, octets: [u8; 16]) -> Self {
        Self {
            name: name.to_string(),
            rtype: 28,
            ttl,
            rdata: Rdata::Ipv6(octets),
        }
    }

    pub fn ns(name: &str, ttl: u32, target: &str) -> Self {
        Self {
            name: name.to_string(),
            rtype: 2,
            ttl,
            rdata: Rdata::Name(target.to_string()),
        }
    }

    pub fn cname(name: &str, ttl: u32, target: &str) -> Self {
        Self {
            name: name.to_string(),
            rtype: 5,
            ttl,
            rdata: Rdata::Name(target.to_string()),
        }
    }

    pub fn mx(name: &str, ttl: u32, preference: u16, exchange: &str) -> Self {
        Self {
            name: name.to_string(),
            rtype: 15,
            ttl,
            rdata: Rdata::Mx(preference, exchange.to_string()),
        }
    }
}

impl MockDnsServer {
    /// Start on an ephemeral loopback port.
    pub async fn start(script: Script) -> std::io::Result<(Self, SocketAddr, QueryLog)> {
        Self::start_at("127.0.0.1:0".parse().unwrap(), script).await
    }

    /// Start on a specific address; used to place two "servers" on distinct
    /// loopback IPs sharing one port, the way a referral expects.
    pub async fn start_at(
        addr: SocketAddr,
        script: Script,
    ) -> std::io::Result<(Self, SocketAddr, QueryLog)> {
        let socket = UdpSocket::bind(addr).await?;
        let local_addr = socket.local_addr()?;
        let log: QueryLog = Arc::new(Mutex::new(Vec::new()));
        let task_log = Arc::clone(&log);

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        let Ok((len, peer)) = result else { break };
                        let query = &buf[..len];
                        let Some(question) = parse_question(query) else { continue };
                        task_log.lock().unwrap().push(question.clone());

                        if let Some(canned) = script.get(&question) {
                            let response = build_response(query, canned);
                            let _ = socket.send_to(&response, peer).await;
                        }
                        // No script entry: stay silent, let the client time out.
                    }
                }
            }
        });

        Ok((
            Self {
                addr: local_addr,
                shutdown_tx: Some(shutdown_tx),
            },
            local_addr,
            log,
        ))
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
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

/// Question name (lowercased) and type code, or None for a garbage query.
fn parse_question(query: &[u8]) -> Option<(String, u16)> {
    let mut pos = 12;
    let mut labels: Vec<String> = Vec::new();

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
    Some((labels.join("."), qtype))
}

fn question_end(query: &[u8]) -> usize {
    let mut pos = 12;
    while query[pos] != 0 {
        pos += 1 + query[pos] as usize;
    }
    pos + 1 + 4
}

fn build_response(query: &[u8], canned: &CannedResponse) -> Vec<u8> {
    if let Some(tail) = &canned.raw_tail {
        let mut response = query[0..2].to_vec();
        response.extend_from_slice(tail);
        return response;
    }

    let mut response = Vec::with_capacity(512);
    response.extend_from_slice(&query[0..2]); // transaction id
    response.extend_from_slice(&[0x84, 0x00]); // QR=1, AA=1
    response.extend_from_slice(&query[4..6]); // question count
    response.extend_from_slice(&(canned.answers.len() as u16).to_be_bytes());
    response.extend_from_slice(&(canned.authority.len() as u16).to_be_bytes());
    response.extend_from_slice(&(canned.additionals.len() as u16).to_be_bytes());
    response.extend_from_slice(&query[12..question_end(query)]);

    for record in canned
        .answers
        .iter()
        .chain(canned.authority.iter())
        .chain(canned.additionals.iter())
    {
        push_record(&mut response, record);
    }

    response
}

fn push_name(buf: &mut Vec<u8>, name: &str) {
    for label in name.trim_end_matches('.').split('.') {
        buf.push(label.len() as u8);
        buf.extend_from_slice(label.as_bytes());
    }
    buf.push(0);
}

fn push_record(buf: &mut Vec<u8>, record: &CannedRecord) {
    push_name(buf, &record.name);
    buf.extend_from_slice(&record.rtype.to_be_bytes());
    buf.extend_from_slice(&1u16.to_be_bytes()); // class IN
    buf.extend_from_slice(&record.ttl.to_be_bytes());

    let mut rdata = Vec::new();
    match &record.rdata {
        Rdata::Ipv4(octets) => rdata.extend_from_slice(octets),
        Rdata::Ipv6(octets) => rdata.extend_from_slice(octets),
        Rdata::Name(target) => push_name(&mut rdata, target),
        Rdata::Mx(preference, exchange) => {
            rdata.extend_from_slice(&preference.to_be_bytes());
            push_name(&mut rdata, exchange);
        }
    }

    buf.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
    buf.extend_from_slice(&rdata);
}
