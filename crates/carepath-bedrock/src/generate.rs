use std::future::Future;

use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, InferenceConfiguration, Message, SystemContentBlock,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::BedrockError;
use crate::prompt;

/// Shown in place of a plan when the model call fails.
pub const GENERATION_FAILED: &str = "An error occurred while generating the plan.";

/// Shown when the model answers with no text.
pub const EMPTY_PLAN: &str = "Failed to generate plan.";

/// Sampling settings. Kept conservative for clinical wording.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct InferenceSettings {
    pub temperature: f32,
    pub top_p: f32,
    pub max_tokens: i32,
}

impl Default for InferenceSettings {
    fn default() -> Self {
        Self {
            temperature: 0.3,
            top_p: 0.9,
            max_tokens: 1024,
        }
    }
}

/// A model that turns a system and user prompt into text.
pub trait TextGenerator: Send + Sync {
    fn generate(
        &self,
        system_prompt: &str,
        user_message: &str,
    ) -> impl Future<Output = Result<String, BedrockError>> + Send;
}

/// [`TextGenerator`] backed by the Bedrock Converse API.
pub struct BedrockGenerator {
    client: Client,
    model_id: String,
    settings: InferenceSettings,
}

impl BedrockGenerator {
    pub fn new(config: &aws_config::SdkConfig, model_id: impl Into<String>) -> Self {
        Self {
            client: Client::new(config),
            model_id: model_id.into(),
            settings: InferenceSettings::default(),
        }
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }
}

impl TextGenerator for BedrockGenerator {
    async fn generate(
        &self,
        system_prompt: &str,
        user_message: &str,
    ) -> Result<String, BedrockError> {
        invoke_converse(
            &self.client,
            &self.model_id,
            &self.settings,
            system_prompt,
            user_message,
        )
        .await
    }
}

/// Draft a wellness plan for the described needs.
///
/// Blank input is refused before any call is made. Past that point this
/// never fails: model errors and empty answers are replaced by
/// [`GENERATION_FAILED`] and [`EMPTY_PLAN`].
pub async fn generate_wellness_plan<G: TextGenerator>(
    generator: &G,
    patient_needs: &str,
) -> Result<String, BedrockError> {
    if patient_needs.trim().is_empty() {
        return Err(BedrockError::EmptyInput);
    }

    let plan = generator
        .generate(&prompt::system_prompt(), &prompt::user_prompt(patient_needs))
        .await;
    Ok(match plan {
        Ok(text) if text.trim().is_empty() => {
            warn!("model returned an empty plan");
            EMPTY_PLAN.to_string()
        }
        Ok(text) => text,
        Err(e) => {
            warn!(error = %e, "wellness plan generation failed");
            GENERATION_FAILED.to_string()
        }
    })
}

/// Core invocation using the Bedrock Converse API.
async fn invoke_converse(
    client: &Client,
    model_id: &str,
    settings: &InferenceSettings,
    system_prompt: &str,
    user_message: &str,
) -> Result<String, BedrockError> {
    info!(model = model_id, "invoking converse");

    let response = client
        .converse()
        .model_id(model_id)
        .system(SystemContentBlock::Text(system_prompt.to_string()))
        .messages(
            Message::builder()
                .role(ConversationRole::User)
                .content(ContentBlock::Text(user_message.to_string()))
                .build()
                .map_err(|e| BedrockError::Invocation(e.to_string()))?,
        )
        .inference_config(
            InferenceConfiguration::builder()
                .temperature(settings.temperature)
                .top_p(settings.top_p)
                .max_tokens(settings.max_tokens)
                .build(),
        )
        .send()
        .await
        .map_err(|e| BedrockError::Invocation(e.into_service_error().to_string()))?;

    let output_message = response
        .output()
        .and_then(|o| o.as_message().ok())
        .ok_or_else(|| BedrockError::ResponseParse("no message in response".to_string()))?;

    let text = output_message
        .content()
        .iter()
        .filter_map(|block| match block {
            ContentBlock::Text(text) => Some(text.as_str()),
            _ => None,
        })
        .collect::<String>();

    if let Some(usage) = response.usage() {
        info!(
            model = model_id,
            input_tokens = usage.input_tokens(),
            output_tokens = usage.output_tokens(),
            "converse complete"
        );
    }

    Ok(text)
}
