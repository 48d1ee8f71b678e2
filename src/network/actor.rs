//! Network actor - runs backend calls in the Tokio async runtime

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::constants::STATUS_ENDPOINT;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::{HttpMethod, RequestBody};
use crate::network::client::ApiClient;

/// Network actor that turns commands into backend calls
pub struct NetworkActor {
    client: ApiClient,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(client: ApiClient, response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            client,
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::CheckStatus { id }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, "Checking backend status");
                                let result = client
                                    .api_call(STATUS_ENDPOINT, HttpMethod::GET, RequestBody::Empty)
                                    .await
                                    .map_err(|e| e.to_string());
                                let response = NetworkResponse::Status { id, result };
                                tracing::info!(id, ok = response.is_ok(), "Status check completed");
                                let _ = response_tx.send(response);
                            });
                        }

                        Some(NetworkCommand::Fetch { id, endpoint }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, endpoint = %endpoint, "Fetching endpoint");
                                let result = client
                                    .api_call(&endpoint, HttpMethod::GET, RequestBody::Empty)
                                    .await
                                    .map_err(|e| e.to_string());
                                let _ = response_tx.send(NetworkResponse::Fetched { id, endpoint, result });
                            });
                        }

                        Some(NetworkCommand::Shutdown) => {
                            self.active_requests.abort_all();
                            break;
                        }

                        None => break,
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_requests.join_next() => {}
            }
        }
    }
}
