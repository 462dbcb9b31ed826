//! Polling client: reachability probe, repeated balance polls, one logs fetch.
//!
//! The whole client run is a straight line: probe once, poll `n` times, fetch
//! the logs once. Only the probe is fatal; every later transport failure is
//! reported for that call and the run continues.

use std::time::Duration;

use crate::codec;
use crate::types::Outcome;

const PROBE_TIMEOUT: Duration = Duration::from_secs(2);
const POLL_TIMEOUT: Duration = Duration::from_secs(1);
const LOGS_TIMEOUT: Duration = Duration::from_secs(3);

/// Line printed for one balance response.
pub fn classify(status: u16) -> String {
    match Outcome::from_status(status) {
        Outcome::Ok => format!("GET /getbalance Response Code: {}", status),
        Outcome::Forbidden => format!("GET /getbalance Response Code: {} - Forbidden", status),
        Outcome::ServerError => {
            format!("GET /getbalance Response Code: {} - Internal server error.", status)
        }
        Outcome::Timeout => {
            format!("GET /getbalance Response Code: {} - Request timed out.", status)
        }
        Outcome::Unexpected(code) => {
            format!("GET /getbalance Response Code: {} - Unexpected response.", code)
        }
    }
}

/// Issues repeated balance requests and prints a classification per response.
pub struct BalancePoller {
    base_url: String,
    client: reqwest::Client,
}

impl BalancePoller {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Single reachability probe. `true` only when the server answers with
    /// one of the four expected statuses; a transport failure or any other
    /// status means the server is not usable.
    pub async fn probe(&self) -> bool {
        let url = format!("{}/getbalance", self.base_url);
        match self.client.get(&url).timeout(PROBE_TIMEOUT).send().await {
            Ok(response) => Outcome::from_status(response.status().as_u16()).is_expected(),
            Err(e) => {
                eprintln!("Error happened while trying to connect to the server: {}", e);
                false
            }
        }
    }

    /// Probes, then issues `n` independent balance polls.
    ///
    /// Returns `false` (after reporting) when the probe fails; the caller
    /// skips the logs fetch in that case. Per-poll transport failures are
    /// reported individually and do not abort the remaining polls.
    pub async fn run(&self, n: usize) -> bool {
        if !self.probe().await {
            println!("Client could not connect to the server. Please check your IP address and port.");
            return false;
        }
        println!("Connected to the server successfully.\n");
        let url = format!("{}/getbalance", self.base_url);
        for _ in 0..n {
            match self.client.get(&url).timeout(POLL_TIMEOUT).send().await {
                Ok(response) => println!("{}", classify(response.status().as_u16())),
                Err(e) => eprintln!("Error while calling /getbalance: {}", e),
            }
        }
        true
    }
}

/// Fetches `/getlogs` once and prints each unique entry.
pub struct LogsFetcher {
    base_url: String,
    client: reqwest::Client,
}

impl LogsFetcher {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// One request; 200 feeds the body through the codec's parse + dedup,
    /// any other status is reported without parsing.
    pub async fn run(&self) {
        let url = format!("{}/getlogs", self.base_url);
        let response = match self.client.get(&url).timeout(LOGS_TIMEOUT).send().await {
            Ok(response) => response,
            Err(e) => {
                eprintln!("Error while calling /getlogs: {}", e);
                return;
            }
        };
        if response.status() != reqwest::StatusCode::OK {
            println!("Failed to load logs. Status code: {}", response.status().as_u16());
            return;
        }
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                eprintln!("Error while calling /getlogs: {}", e);
                return;
            }
        };
        println!("\nLogs:\n");
        for entry in codec::unique_entries(&body) {
            println!("{}", entry);
        }
    }
}
