// MCP server: newline-delimited JSON-RPC 2.0 over stdio

use crate::protocol::*;
use crate::tools::ToolRegistry;
use anyhow::{Context, Result};
use futures::{SinkExt, StreamExt};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio_util::bytes::{Bytes, BytesMut};
use tokio_util::codec::{
    AnyDelimiterCodec, AnyDelimiterCodecError, Decoder, FramedRead, FramedWrite, LinesCodec,
};

pub const SERVER_NAME: &str = "hnscout";

/// Longest request line accepted, in bytes.
pub const MAX_LINE_LENGTH: usize = 4 * 1024 * 1024;

/// One input line, or the reason it cannot be handled as text.
#[derive(Debug, PartialEq)]
enum Frame {
    Line(String),
    Unreadable(&'static str),
}

/// Newline-delimited input that reports bad UTF-8 and overlong lines as
/// frames, so a single bad line does not end the stream.
struct RequestCodec {
    inner: AnyDelimiterCodec,
}

impl RequestCodec {
    fn new(max_length: usize) -> Self {
        Self {
            inner: AnyDelimiterCodec::new_with_max_length(b"\n".to_vec(), Vec::new(), max_length),
        }
    }

    fn frame(
        chunk: Result<Option<Bytes>, AnyDelimiterCodecError>,
    ) -> Result<Option<Frame>, AnyDelimiterCodecError> {
        match chunk {
            Ok(Some(bytes)) => Ok(Some(match String::from_utf8(bytes.to_vec()) {
                Ok(line) => Frame::Line(line),
                Err(_) => Frame::Unreadable("invalid UTF-8"),
            })),
            Ok(None) => Ok(None),
            // The inner codec discards the rest of the line itself.
            Err(AnyDelimiterCodecError::MaxChunkLengthExceeded) => {
                Ok(Some(Frame::Unreadable("line too long")))
            }
            Err(e) => Err(e),
        }
    }
}

impl Decoder for RequestCodec {
    type Item = Frame;
    type Error = AnyDelimiterCodecError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Frame>, Self::Error> {
        Self::frame(self.inner.decode(src))
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<Frame>, Self::Error> {
        Self::frame(self.inner.decode_eof(src))
    }
}

pub struct McpServer {
    registry: ToolRegistry,
    max_line_length: usize,
}

impl McpServer {
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            registry,
            max_line_length: MAX_LINE_LENGTH,
        }
    }

    /// Cap on the size of a single request line.
    pub fn with_max_line_length(mut self, max_line_length: usize) -> Self {
        self.max_line_length = max_line_length;
        self
    }

    /// Serve requests from stdin until it closes. Stdout carries protocol
    /// messages only.
    pub async fn start(&self) -> Result<()> {
        tracing::info!(tools = self.registry.len(), "MCP server listening on stdio");
        self.serve(tokio::io::stdin(), tokio::io::stdout()).await
    }

    pub async fn serve<R, W>(&self, reader: R, writer: W) -> Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = FramedRead::new(reader, RequestCodec::new(self.max_line_length));
        let mut sink = FramedWrite::new(writer, LinesCodec::new());

        while let Some(frame) = lines.next().await {
            let response = match frame.context("Failed to read request line")? {
                Frame::Line(line) => self.handle_line(&line).await,
                Frame::Unreadable(reason) => {
                    tracing::warn!(reason, "Unreadable request line");
                    Some(JsonRpcResponse::error(
                        serde_json::Value::Null,
                        JsonRpcError::parse_error(),
                    ))
                }
            };

            if let Some(response) = response {
                let json = serde_json::to_string(&response)
                    .context("Failed to serialize response")?;
                sink.send(json).await.context("Failed to write response")?;
            }
        }

        tracing::info!("Input closed, shutting down");
        Ok(())
    }

    /// Handle one raw line. Returns `None` for blank lines and notifications.
    pub async fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let value: serde_json::Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "Unparseable request");
                return Some(JsonRpcResponse::error(
                    serde_json::Value::Null,
                    JsonRpcError::parse_error(),
                ));
            }
        };

        let request: JsonRpcRequest = match serde_json::from_value(value.clone()) {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!(error = %e, "Malformed request");
                let id = value.get("id").cloned().unwrap_or(serde_json::Value::Null);
                return Some(JsonRpcResponse::error(id, JsonRpcError::invalid_request()));
            }
        };

        if request.jsonrpc != "2.0" {
            let id = request.id.unwrap_or(serde_json::Value::Null);
            return Some(JsonRpcResponse::error(id, JsonRpcError::invalid_request()));
        }

        self.handle_request(request).await
    }

    async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        tracing::debug!(method = %request.method, "Handling request");

        if request.is_notification() {
            match request.method.as_str() {
                "notifications/initialized" => tracing::info!("Client initialized"),
                other => tracing::debug!(method = other, "Ignoring notification"),
            }
            return None;
        }

        let id = request.id.unwrap_or(serde_json::Value::Null);
        let params = request.params;

        let outcome = match request.method.as_str() {
            "initialize" => self.initialize(params),
            "ping" => Ok(serde_json::json!({})),
            "tools/list" => self.list_tools(),
            "tools/call" => self.call_tool(params).await,
            other => Err(JsonRpcError::method_not_found(other)),
        };

        Some(match outcome {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(error) => JsonRpcResponse::error(id, error),
        })
    }

    fn initialize(
        &self,
        params: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, JsonRpcError> {
        let params: InitializeParams = decode_params(params)?;

        tracing::info!(
            client = %params.client_info.name,
            client_version = %params.client_info.version,
            protocol_version = %params.protocol_version,
            "Initializing session"
        );

        to_result(InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: false,
                }),
            },
            server_info: ServerInfo {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        })
    }

    fn list_tools(&self) -> Result<serde_json::Value, JsonRpcError> {
        to_result(ListToolsResult {
            tools: self.registry.list_schemas(),
        })
    }

    async fn call_tool(
        &self,
        params: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, JsonRpcError> {
        let params: CallToolParams = decode_params(params)?;

        let tool = self
            .registry
            .get(&params.name)
            .ok_or_else(|| JsonRpcError::invalid_params(format!("Unknown tool: {}", params.name)))?;

        tracing::info!(tool = %params.name, "Calling tool");

        let result = match tool.execute(params.arguments).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(tool = %params.name, error = %e, "Tool call rejected");
                CallToolResult::error(format!("{:#}", e))
            }
        };

        to_result(result)
    }
}

fn decode_params<T: serde::de::DeserializeOwned>(
    params: Option<serde_json::Value>,
) -> Result<T, JsonRpcError> {
    let params = params.ok_or_else(|| JsonRpcError::invalid_params("Missing params"))?;
    serde_json::from_value(params)
        .map_err(|e| JsonRpcError::invalid_params(format!("Invalid params: {}", e)))
}

fn to_result<T: serde::Serialize>(value: T) -> Result<serde_json::Value, JsonRpcError> {
    serde_json::to_value(value).map_err(|e| JsonRpcError::internal_error(e.to_string()))
}
