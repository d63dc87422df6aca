//! Reads ownership data from the settlement layer.

use alloy_network::TransactionBuilder;
use alloy_primitives::{Address, B256, U256};
use alloy_provider::{Provider, ProviderBuilder};
use alloy_rpc_types::TransactionRequest;
use alloy_sol_types::SolCall;
use alloy_transport::TransportResult;
use async_trait::async_trait;
use tracing::{debug, warn};
use url::Url;

use std::{future::IntoFuture, time::Duration};

use super::{contracts::IOwnable, OwnersError};

/// The two reads ownership resolution needs from an L1 node.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OwnershipReader: Send + Sync {
    /// Raw 32 byte storage word of `address` at `slot`, latest block.
    async fn storage_at(&self, address: Address, slot: B256) -> Result<B256, OwnersError>;

    /// Result of `owner()` on `address`, latest block.
    async fn owner_of(&self, address: Address) -> Result<Address, OwnersError>;
}

/// [`OwnershipReader`] backed by a JSON-RPC provider.
///
/// Every request is bounded by `timeout`.
#[derive(Debug, Clone)]
pub struct RpcOwnershipReader<P> {
    provider: P,
    timeout: Duration,
}

impl<P: Provider> RpcOwnershipReader<P> {
    pub fn new(provider: P, timeout: Duration) -> Self {
        Self { provider, timeout }
    }

    async fn bounded<T, F>(&self, address: Address, request: F) -> Result<T, OwnersError>
    where
        F: IntoFuture<Output = TransportResult<T>> + Send,
        F::IntoFuture: Send,
    {
        match tokio::time::timeout(self.timeout, request).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(err)) => Err(OwnersError::RpcReadFailed { address, reason: err.to_string() }),
            Err(_) => Err(OwnersError::RpcReadFailed {
                address,
                reason: format!("timed out after {}", humantime::format_duration(self.timeout)),
            }),
        }
    }
}

#[async_trait]
impl<P: Provider> OwnershipReader for RpcOwnershipReader<P> {
    async fn storage_at(&self, address: Address, slot: B256) -> Result<B256, OwnersError> {
        let key = U256::from_be_bytes(slot.0);
        let value = self.bounded(address, self.provider.get_storage_at(address, key)).await?;
        Ok(B256::from(value.to_be_bytes::<32>()))
    }

    async fn owner_of(&self, address: Address) -> Result<Address, OwnersError> {
        call_and_decode(IOwnable::ownerCall {}, address, self).await
    }
}

/// Private function to make a contract call and decode the response
async fn call_and_decode<C, P>(
    call: C,
    to: Address,
    reader: &RpcOwnershipReader<P>,
) -> Result<C::Return, OwnersError>
where
    C: SolCall + Send,
    P: Provider,
{
    let req = TransactionRequest::default().with_to(to).with_input(call.abi_encode());

    let data = reader.bounded(to, reader.provider.call(req)).await?;
    C::abi_decode_returns(&data)
        .map_err(|err| OwnersError::RpcReadFailed { address: to, reason: err.to_string() })
}

/// Opens a connection to the L1 endpoint at `rpc_url`.
///
/// The endpoint is probed with `eth_chainId`; a chain id other than
/// `expected_chain_id` is logged but tolerated.
pub async fn connect(
    rpc_url: &str,
    timeout: Duration,
    expected_chain_id: u64,
) -> Result<RpcOwnershipReader<impl Provider>, OwnersError> {
    let connection_failed =
        |reason: String| OwnersError::RpcConnectionFailed { url: rpc_url.to_string(), reason };

    let url: Url = rpc_url.parse().map_err(|err: url::ParseError| connection_failed(err.to_string()))?;
    let provider = ProviderBuilder::new().connect_http(url);

    let chain_id = match tokio::time::timeout(timeout, provider.get_chain_id()).await {
        Ok(Ok(chain_id)) => chain_id,
        Ok(Err(err)) => return Err(connection_failed(err.to_string())),
        Err(_) => {
            return Err(connection_failed(format!(
                "timed out after {}",
                humantime::format_duration(timeout)
            )))
        }
    };

    if chain_id != expected_chain_id {
        warn!(target: "op::owners", rpc_url, chain_id, expected_chain_id, "L1 endpoint serves an unexpected chain");
    }
    debug!(target: "op::owners", rpc_url, chain_id, "connected to L1");

    Ok(RpcOwnershipReader::new(provider, timeout))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::owners::EIP1967_ADMIN_SLOT;
    use alloy_primitives::address;
    use serde_json::{json, Value};
    use tokio::{
        io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader},
        net::{TcpListener, TcpStream},
    };

    use std::sync::Arc;

    const OWNER: Address = address!("7bB41C3008B3f03FE483B28b8DB90e19Cf07595c");
    const PROXY: Address = address!("608d94945A64503E642E6370Ec598e519a2C1E53");

    type Answer = Arc<dyn Fn(&str) -> Option<Value> + Send + Sync>;

    /// Starts a JSON-RPC node on localhost answering each method with
    /// `answer(method)`. Methods answered with `None` never get a reply.
    async fn spawn_node(answer: impl Fn(&str) -> Option<Value> + Send + Sync + 'static) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let answer: Answer = Arc::new(answer);

        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                tokio::spawn(serve_connection(stream, answer.clone()));
            }
        });
        url
    }

    async fn serve_connection(stream: TcpStream, answer: Answer) -> std::io::Result<()> {
        let mut reader = BufReader::new(stream);
        loop {
            let mut content_length = 0;
            loop {
                let mut line = String::new();
                if reader.read_line(&mut line).await? == 0 {
                    return Ok(());
                }
                let line = line.trim_end();
                if line.is_empty() {
                    break;
                }
                if let Some((name, value)) = line.split_once(':') {
                    if name.eq_ignore_ascii_case("content-length") {
                        content_length = value.trim().parse().unwrap();
                    }
                }
            }

            let mut body = vec![0; content_length];
            reader.read_exact(&mut body).await?;
            let request: Value = serde_json::from_slice(&body).unwrap();

            let Some(result) = answer(request["method"].as_str().unwrap()) else {
                std::future::pending::<()>().await;
                return Ok(());
            };
            let response =
                json!({ "jsonrpc": "2.0", "id": request["id"], "result": result }).to_string();
            let head = format!(
                "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\n\r\n",
                response.len()
            );
            let stream = reader.get_mut();
            stream.write_all(head.as_bytes()).await?;
            stream.write_all(response.as_bytes()).await?;
            stream.flush().await?;
        }
    }

    fn mainnet_node(method: &str) -> Option<Value> {
        match method {
            "eth_chainId" => Some(json!("0x1")),
            // admin word with dirty high bytes
            "eth_getStorageAt" => Some(json!(format!("0x{}{}", "ff".repeat(12), hex(OWNER)))),
            // abi encoded `address`
            "eth_call" => Some(json!(format!("0x{}{}", "00".repeat(12), hex(OWNER)))),
            _ => None,
        }
    }

    fn hex(address: Address) -> String {
        address.as_slice().iter().map(|b| format!("{b:02x}")).collect()
    }

    #[tokio::test]
    async fn test_reads_owners_over_json_rpc() {
        let url = spawn_node(mainnet_node).await;
        let Ok(reader) = connect(&url, Duration::from_secs(5), 1).await else {
            panic!("failed to connect to local node");
        };

        let word = reader.storage_at(PROXY, EIP1967_ADMIN_SLOT).await.unwrap();
        assert_eq!(&word[..12], &[0xff; 12]);
        assert_eq!(Address::from_word(word), OWNER);

        assert_eq!(reader.owner_of(PROXY).await.unwrap(), OWNER);
    }

    #[tokio::test]
    async fn test_connect_tolerates_other_chain_id() {
        let url = spawn_node(|method| match method {
            "eth_chainId" => Some(json!("0xa")),
            other => mainnet_node(other),
        })
        .await;
        let Ok(reader) = connect(&url, Duration::from_secs(5), 1).await else {
            panic!("chain id mismatch rejected");
        };
        assert_eq!(reader.owner_of(PROXY).await.unwrap(), OWNER);
    }

    #[tokio::test]
    async fn test_connect_times_out_on_silent_node() {
        let url = spawn_node(|_| None).await;
        let Err(err) = connect(&url, Duration::from_millis(300), 1).await else {
            panic!("silent node accepted");
        };
        assert!(
            matches!(err, OwnersError::RpcConnectionFailed { ref reason, .. } if reason.contains("timed out"))
        );
    }

    #[tokio::test]
    async fn test_reads_time_out_on_stalled_node() {
        let url = spawn_node(|method| (method == "eth_chainId").then(|| json!("0x1"))).await;
        let Ok(reader) = connect(&url, Duration::from_millis(300), 1).await else {
            panic!("failed to connect to local node");
        };

        let err = reader.storage_at(PROXY, EIP1967_ADMIN_SLOT).await.unwrap_err();
        assert!(matches!(
            err,
            OwnersError::RpcReadFailed { address, ref reason } if address == PROXY && reason.contains("timed out")
        ));

        let err = reader.owner_of(PROXY).await.unwrap_err();
        assert!(matches!(err, OwnersError::RpcReadFailed { address, .. } if address == PROXY));
    }

    #[tokio::test]
    async fn test_connect_rejects_malformed_url() {
        let Err(err) = connect("not a url", Duration::from_secs(1), 1).await else {
            panic!("malformed url accepted");
        };
        assert!(matches!(err, OwnersError::RpcConnectionFailed { ref url, .. } if url == "not a url"));
    }

    #[tokio::test]
    async fn test_connect_reports_unreachable_endpoint() {
        let Err(err) = connect("http://127.0.0.1:1", Duration::from_secs(5), 1).await else {
            panic!("unreachable endpoint accepted");
        };
        assert!(matches!(err, OwnersError::RpcConnectionFailed { .. }));
    }

    #[test]
    fn test_owner_call_encoding() {
        // owner()
        assert_eq!(IOwnable::ownerCall::SELECTOR, [0x8d, 0xa5, 0xcb, 0x5b]);
        assert_eq!(IOwnable::ownerCall {}.abi_encode(), vec![0x8d, 0xa5, 0xcb, 0x5b]);
    }
}
