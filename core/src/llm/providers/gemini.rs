//! Google Gemini client implementation

use crate::config::ResolvedLlmConfig;
use crate::error::{LlmError, Result};
use crate::llm::{
    Content, FunctionDeclaration, GenerateRequest, GenerationConfig, LlmClient, ModelReply, Part,
    Role, Usage,
};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

/// Gemini `generateContent` client
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    headers: HashMap<String, String>,
}

impl GeminiClient {
    /// Create a new Gemini client from resolved configuration
    pub fn new(config: &ResolvedLlmConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(LlmError::Authentication {
                message: "No API key found for Gemini".to_string(),
            }
            .into());
        }

        Ok(Self {
            client: Client::new(),
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            headers: config.headers.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    fn build_request<'a>(&self, request: &'a GenerateRequest) -> GeminiRequest<'a> {
        GeminiRequest {
            system_instruction: request.system_instruction.as_deref().map(|text| {
                SystemInstruction {
                    parts: vec![TextPart { text }],
                }
            }),
            contents: &request.contents,
            tools: if request.tools.is_empty() {
                Vec::new()
            } else {
                vec![GeminiTool {
                    function_declarations: &request.tools,
                }]
            },
            generation_config: &request.generation_config,
        }
    }

    fn parse_response(&self, response: GeminiResponse) -> ModelReply {
        let usage = response.usage_metadata.map(|u| Usage {
            prompt_tokens: u.prompt_token_count,
            completion_tokens: u.candidates_token_count,
            total_tokens: u.total_token_count,
        });

        let Some(candidate) = response.candidates.into_iter().next() else {
            warn!(model = %self.model, "Gemini returned no candidates");
            return ModelReply {
                content: None,
                usage,
                finish_reason: None,
            };
        };

        ModelReply {
            content: candidate.content.map(|c| Content {
                role: c.role.unwrap_or(Role::Model),
                parts: c.parts,
            }),
            usage,
            finish_reason: candidate.finish_reason,
        }
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn generate(&self, request: &GenerateRequest) -> Result<ModelReply> {
        let body = self.build_request(request);

        let mut builder = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json");
        for (key, value) in &self.headers {
            builder = builder.header(key, value);
        }

        let response = builder
            .json(&body)
            .send()
            .await
            .map_err(LlmError::from)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let error_text = response.text().await.unwrap_or_default();
            return Err(LlmError::ApiError {
                status,
                message: error_text,
            }
            .into());
        }

        let text = response.text().await.map_err(LlmError::from)?;
        let parsed: GeminiResponse =
            serde_json::from_str(&text).map_err(|e| LlmError::Protocol {
                message: format!("Failed to parse Gemini response: {}", e),
            })?;

        Ok(self.parse_response(parsed))
    }

    fn model_name(&self) -> &str {
        &self.model
    }

    fn provider_name(&self) -> &str {
        "gemini"
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<SystemInstruction<'a>>,
    contents: &'a [Content],
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<GeminiTool<'a>>,
    generation_config: &'a GenerationConfig,
}

#[derive(Debug, Serialize)]
struct SystemInstruction<'a> {
    parts: Vec<TextPart<'a>>,
}

#[derive(Debug, Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiTool<'a> {
    function_declarations: &'a [FunctionDeclaration],
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    usage_metadata: Option<GeminiUsage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    content: Option<GeminiContent>,
    finish_reason: Option<String>,
}

// Role is occasionally omitted on candidates (e.g. safety-blocked replies)
#[derive(Debug, Deserialize)]
struct GeminiContent {
    role: Option<Role>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiUsage {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
    #[serde(default)]
    total_token_count: u32,
}
