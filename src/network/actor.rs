//! Network actor - runs portal fetches in the Tokio async runtime

use std::time::Instant;

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::PortalClient;

/// Network actor that processes fetch commands
pub struct NetworkActor {
    client: PortalClient,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_fetches: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(client: PortalClient, response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            client,
            response_tx,
            active_fetches: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::Fetch { id, kind }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();

                            self.active_fetches.spawn(async move {
                                tracing::info!(id, endpoint = kind.endpoint(), "executing fetch");
                                let start = Instant::now();
                                let result = client.fetch(&kind).await;
                                let time_ms = start.elapsed().as_millis() as u64;

                                let response = match result {
                                    Ok(payload) => {
                                        tracing::info!(id, time_ms, "fetch completed");
                                        NetworkResponse::Loaded { id, payload, time_ms }
                                    }
                                    Err(e) => {
                                        tracing::warn!(id, time_ms, error = %e, "fetch failed");
                                        NetworkResponse::Failed {
                                            id,
                                            error: e.to_string(),
                                            time_ms,
                                        }
                                    }
                                };
                                let _ = response_tx.send(response);
                            });
                        }

                        Some(NetworkCommand::Shutdown) | None => break,
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_fetches.join_next() => {}
            }
        }
    }
}
