//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes the conversions over stdio so AI assistants can spell amounts
//! without shelling out to the CLI.
//!
//! # Architecture
//!
//! The server is a presentation layer over `daxie_core`, the same library the
//! CLI commands call. Tools return JSON reports (`Conversion` for capital
//! numerals, `MoneyConversion` for fen/yuan). Empty formats from the loaded
//! configuration apply whenever a call does not pass its own.

use daxie_core::config::Config;
use daxie_core::{
    MoneyConversion, NumeralInput, NumericCheck, RenderMode, convert, fen_to_yuan, yuan_to_fen,
};
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use serde::Serialize;

/// A value as sent by the client: text or a JSON number.
#[derive(Debug, Clone, serde::Deserialize, schemars::JsonSchema)]
#[serde(untagged)]
pub enum AmountValue {
    /// Decimal text such as `"1008"` or `"12.5"`.
    Text(String),
    /// JSON integer.
    Integer(i64),
    /// JSON floating-point number.
    Float(f64),
}

impl AmountValue {
    fn as_input(&self) -> NumeralInput<'_> {
        match self {
            Self::Text(text) => NumeralInput::from(text.as_str()),
            Self::Integer(value) => NumeralInput::from(*value),
            Self::Float(value) => NumeralInput::from(*value),
        }
    }
}

fn input_of(value: Option<&AmountValue>) -> NumeralInput<'_> {
    value.map_or(NumeralInput::Absent, AmountValue::as_input)
}

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `number_to_cn` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct NumberToCnParams {
    /// Non-negative decimal number, as text or a JSON number.
    pub value: Option<AmountValue>,
}

/// Parameters for the `currency_to_cn` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CurrencyToCnParams {
    /// Non-negative RMB amount in yuan. Omit for a blank amount.
    pub value: Option<AmountValue>,
    /// Text returned for a blank amount (default: 零元整).
    pub empty_format: Option<String>,
}

/// Parameters for the `fen_to_yuan` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct FenToYuanParams {
    /// Amount in fen (cents). Omit for a blank amount.
    pub value: Option<AmountValue>,
    /// Text returned for a blank amount (default: 0.00).
    pub empty_format: Option<String>,
    /// Trim trailing fractional zeros (20.00 becomes 20).
    #[serde(default)]
    pub cut_zero: bool,
}

/// Parameters for the `yuan_to_fen` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct YuanToFenParams {
    /// Amount in yuan. Omit for a blank amount.
    pub value: Option<AmountValue>,
    /// Text returned for a blank amount (default: 0).
    pub empty_format: Option<String>,
}

/// Parameters for the `check_value` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CheckValueParams {
    /// Format to test: number, integer, decimal, money or null.
    pub kind: NumericCheck,
    /// Value to test.
    pub value: String,
}

#[derive(Serialize)]
struct CheckReport<'a> {
    kind: NumericCheck,
    value: &'a str,
    matched: bool,
}

fn json_result<T: Serialize>(report: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

/// MCP server exposing the conversions to AI assistants.
///
/// Each `#[tool]` method in the `#[tool_router]` impl block is automatically
/// registered and callable via the MCP protocol.
#[derive(Clone)]
pub struct ProjectServer {
    config: Config,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
}

impl Default for ProjectServer {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[tool_router]
impl ProjectServer {
    /// Create a new MCP server using `config` for default formats.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            tool_router: Self::tool_router(),
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
        });

        let text = if params.format == "json" {
            serde_json::to_string_pretty(&info)
                .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Spell a number in capital numerals.
    #[tool(
        description = "Spell a non-negative number (up to 12 integer digits) in Chinese capital numerals, e.g. 1008 -> 壹仟零捌. Returns a JSON report with outcome and text."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn number_to_cn(
        &self,
        Parameters(params): Parameters<NumberToCnParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "number_to_cn", "executing MCP tool");

        let report = convert(
            input_of(params.value.as_ref()),
            RenderMode::PlainNumeral,
            None,
        );

        tracing::info!(tool = "number_to_cn", outcome = ?report.outcome, "MCP tool completed");
        json_result(&report)
    }

    /// Spell an RMB amount in capital numerals.
    #[tool(
        description = "Spell an RMB amount in Chinese capital numerals with 元/角/分/整, e.g. 1.01 -> 壹元零壹分. Returns a JSON report with outcome and text."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn currency_to_cn(
        &self,
        Parameters(params): Parameters<CurrencyToCnParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "currency_to_cn", "executing MCP tool");

        let empty_format = params
            .empty_format
            .as_deref()
            .or(self.config.currency_empty_format.as_deref());
        let report = convert(
            input_of(params.value.as_ref()),
            RenderMode::Currency,
            empty_format,
        );

        tracing::info!(tool = "currency_to_cn", outcome = ?report.outcome, "MCP tool completed");
        json_result(&report)
    }

    /// Convert fen to yuan.
    #[tool(
        description = "Convert an amount in fen (cents) to yuan with two decimals, e.g. 2000 -> 20.00. Output is empty when the value is not a number."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn fen_to_yuan(
        &self,
        Parameters(params): Parameters<FenToYuanParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "fen_to_yuan", cut_zero = params.cut_zero, "executing MCP tool");

        let format = self
            .config
            .yuan_format(params.empty_format.as_deref(), params.cut_zero);
        let input = input_of(params.value.as_ref());
        let output = fen_to_yuan(input.clone(), &format);
        let report = MoneyConversion::new(input, output);

        tracing::info!(tool = "fen_to_yuan", ok = report.ok, "MCP tool completed");
        json_result(&report)
    }

    /// Convert yuan to fen.
    #[tool(
        description = "Convert an amount in yuan to fen (cents), e.g. 10.02 -> 1002. Output is empty when the value is not a number."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn yuan_to_fen(
        &self,
        Parameters(params): Parameters<YuanToFenParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "yuan_to_fen", "executing MCP tool");

        let empty = params
            .empty_format
            .as_deref()
            .or(self.config.fen_empty_format.as_deref());
        let input = input_of(params.value.as_ref());
        let output = yuan_to_fen(input.clone(), empty);
        let report = MoneyConversion::new(input, output);

        tracing::info!(tool = "yuan_to_fen", ok = report.ok, "MCP tool completed");
        json_result(&report)
    }

    /// Test a value against a numeric format.
    #[tool(
        description = "Test whether a string is a number, integer, decimal, money amount (at most two decimals) or null marker."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", kind = %params.kind))]
    fn check_value(
        &self,
        Parameters(params): Parameters<CheckValueParams>,
    ) -> Result<CallToolResult, McpError> {
        let matched = params.kind.test(&params.value);
        tracing::debug!(tool = "check_value", matched, "executing MCP tool");

        json_result(&CheckReport {
            kind: params.kind,
            value: &params.value,
            matched,
        })
    }
}

#[tool_handler]
impl ServerHandler for ProjectServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use tools to spell numbers and RMB amounts in Chinese capital numerals.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    #[test]
    fn server_info_has_correct_name() {
        let server = ProjectServer::default();
        let info = ServerHandler::get_info(&server);

        assert_eq!(info.server_info.name, env!("CARGO_PKG_NAME"));
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
        assert!(info.capabilities.tools.is_some());
    }

    /// Extract text from the first content item in a `CallToolResult`.
    fn extract_text(result: &CallToolResult) -> Option<&str> {
        result.content.first().and_then(|c| match &c.raw {
            RawContent::Text(t) => Some(t.text.as_str()),
            _ => None,
        })
    }

    fn json_of(result: &CallToolResult) -> serde_json::Value {
        assert!(!result.is_error.unwrap_or(false));
        let text = extract_text(result).expect("should have text content");
        serde_json::from_str(text).expect("output should be valid JSON")
    }

    #[test]
    fn get_info_tool_returns_json_when_requested() {
        let server = ProjectServer::default();
        let params = Parameters(GetInfoParams {
            format: "json".to_string(),
        });

        let result = server.get_info(params).expect("get_info should succeed");
        let json = json_of(&result);
        assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn get_info_tool_returns_text_by_default() {
        let server = ProjectServer::default();
        let params = Parameters(GetInfoParams {
            format: default_format(),
        });

        let result = server.get_info(params).expect("get_info should succeed");
        let text = extract_text(&result).expect("should have text content");
        assert!(text.contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn number_to_cn_accepts_text_and_numbers() {
        let server = ProjectServer::default();

        let result = server
            .number_to_cn(Parameters(NumberToCnParams {
                value: Some(AmountValue::Text("1008".to_string())),
            }))
            .expect("number_to_cn should succeed");
        let json = json_of(&result);
        assert_eq!(json["text"], "壹仟零捌");
        assert_eq!(json["outcome"], "converted");

        let result = server
            .number_to_cn(Parameters(NumberToCnParams {
                value: Some(AmountValue::Float(0.5)),
            }))
            .expect("number_to_cn should succeed");
        assert_eq!(json_of(&result)["text"], "零点伍");
    }

    #[test]
    fn number_to_cn_reports_out_of_range() {
        let server = ProjectServer::default();
        let result = server
            .number_to_cn(Parameters(NumberToCnParams {
                value: Some(AmountValue::Integer(1_000_000_000_000)),
            }))
            .expect("number_to_cn should succeed");
        let json = json_of(&result);
        assert_eq!(json["text"], "超大数字");
        assert_eq!(json["outcome"], "out-of-range");
    }

    #[test]
    fn currency_to_cn_uses_config_empty_format() {
        let server = ProjectServer::new(Config {
            currency_empty_format: Some("--".to_string()),
            ..Config::default()
        });

        let result = server
            .currency_to_cn(Parameters(CurrencyToCnParams {
                value: None,
                empty_format: None,
            }))
            .expect("currency_to_cn should succeed");
        assert_eq!(json_of(&result)["text"], "--");

        let result = server
            .currency_to_cn(Parameters(CurrencyToCnParams {
                value: None,
                empty_format: Some("空".to_string()),
            }))
            .expect("currency_to_cn should succeed");
        assert_eq!(json_of(&result)["text"], "空");
    }

    #[test]
    fn currency_to_cn_spells_amount() {
        let server = ProjectServer::default();
        let result = server
            .currency_to_cn(Parameters(CurrencyToCnParams {
                value: Some(AmountValue::Text("1.01".to_string())),
                empty_format: None,
            }))
            .expect("currency_to_cn should succeed");
        assert_eq!(json_of(&result)["text"], "壹元零壹分");
    }

    #[test]
    fn fen_to_yuan_tool_works() {
        let server = ProjectServer::default();
        let result = server
            .fen_to_yuan(Parameters(FenToYuanParams {
                value: Some(AmountValue::Integer(2000)),
                empty_format: None,
                cut_zero: true,
            }))
            .expect("fen_to_yuan should succeed");
        let json = json_of(&result);
        assert_eq!(json["output"], "20");
        assert_eq!(json["ok"], true);
    }

    #[test]
    fn yuan_to_fen_tool_flags_bad_input() {
        let server = ProjectServer::default();
        let result = server
            .yuan_to_fen(Parameters(YuanToFenParams {
                value: Some(AmountValue::Text(".2".to_string())),
                empty_format: None,
            }))
            .expect("yuan_to_fen should succeed");
        let json = json_of(&result);
        assert_eq!(json["output"], "");
        assert_eq!(json["ok"], false);
    }

    #[test]
    fn check_value_tool_works() {
        let server = ProjectServer::default();
        let result = server
            .check_value(Parameters(CheckValueParams {
                kind: NumericCheck::Money,
                value: "20.002".to_string(),
            }))
            .expect("check_value should succeed");
        let json = json_of(&result);
        assert_eq!(json["kind"], "money");
        assert_eq!(json["matched"], false);
    }

    #[test]
    fn amount_value_deserializes_from_json() {
        let params: NumberToCnParams = serde_json::from_str(r#"{"value": 12}"#).unwrap();
        assert!(matches!(params.value, Some(AmountValue::Integer(12))));

        let params: NumberToCnParams = serde_json::from_str(r#"{"value": "12"}"#).unwrap();
        assert!(matches!(params.value, Some(AmountValue::Text(_))));

        let params: NumberToCnParams = serde_json::from_str("{}").unwrap();
        assert!(params.value.is_none());
    }
}
