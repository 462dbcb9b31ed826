//! Interactive polling client binary.
//!
//! Prompts for the server address on stdin, probes it, polls `/getbalance`
//! twenty times, then fetches `/getlogs` once and prints the unique entries.

use flaky_balance::client::{BalancePoller, LogsFetcher};
use std::io::{self, BufRead, Write};

const POLL_COUNT: usize = 20;

fn prompt(label: &str) -> io::Result<String> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

#[tokio::main]
async fn main() {
    let _ = env_logger::try_init();

    let ip = match prompt("Enter the server IP address: ") {
        Ok(value) => value,
        Err(e) => {
            eprintln!("Failed to read input: {}", e);
            return;
        }
    };
    let port = match prompt("Enter the server port: ") {
        Ok(value) => value,
        Err(e) => {
            eprintln!("Failed to read input: {}", e);
            return;
        }
    };

    let base_url = format!("http://{}:{}", ip, port);
    let poller = BalancePoller::new(base_url.clone());
    if poller.run(POLL_COUNT).await {
        LogsFetcher::new(base_url).run().await;
    }
}
