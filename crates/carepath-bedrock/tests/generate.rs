use std::sync::Mutex;

use carepath_bedrock::error::BedrockError;
use carepath_bedrock::generate::{
    EMPTY_PLAN, GENERATION_FAILED, InferenceSettings, TextGenerator, generate_wellness_plan,
};
use carepath_bedrock::prompt::{PLAN_SECTIONS, system_prompt, user_prompt};

/// Replays a canned answer and records what it was asked.
struct Canned {
    answer: Result<String, String>,
    calls: Mutex<Vec<(String, String)>>,
}

impl Canned {
    fn ok(text: &str) -> Self {
        Self {
            answer: Ok(text.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            answer: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl TextGenerator for Canned {
    async fn generate(
        &self,
        system_prompt: &str,
        user_message: &str,
    ) -> Result<String, BedrockError> {
        self.calls
            .lock()
            .unwrap()
            .push((system_prompt.to_string(), user_message.to_string()));
        self.answer.clone().map_err(BedrockError::Invocation)
    }
}

#[tokio::test]
async fn plan_text_is_passed_through() {
    let generator = Canned::ok("## Neuro-Acoustic Protocol\n- 432 Hz");
    let plan = generate_wellness_plan(&generator, "poor sleep, work stress")
        .await
        .unwrap();

    assert_eq!(plan, "## Neuro-Acoustic Protocol\n- 432 Hz");
    let calls = generator.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].1.contains("poor sleep, work stress"));
}

#[tokio::test]
async fn failures_become_the_fallback_message() {
    let generator = Canned::failing("throttled");
    let plan = generate_wellness_plan(&generator, "anxiety").await.unwrap();
    assert_eq!(plan, GENERATION_FAILED);
}

#[tokio::test]
async fn empty_answers_become_the_empty_message() {
    let generator = Canned::ok("  \n");
    let plan = generate_wellness_plan(&generator, "anxiety").await.unwrap();
    assert_eq!(plan, EMPTY_PLAN);
}

#[tokio::test]
async fn blank_needs_are_refused_without_a_call() {
    let generator = Canned::ok("unused");
    let result = generate_wellness_plan(&generator, "   ").await;
    assert!(matches!(result, Err(BedrockError::EmptyInput)));
    assert!(generator.calls().is_empty());
}

#[test]
fn system_prompt_lists_every_section_and_rule() {
    let prompt = system_prompt();
    for section in PLAN_SECTIONS {
        assert!(prompt.contains(section), "missing {section}");
    }
    assert!(prompt.contains("DO NOT suggest medical diagnoses."));
    assert!(prompt.contains("non-pharmacological"));
}

#[test]
fn user_prompt_quotes_trimmed_needs() {
    assert_eq!(
        user_prompt("  tinnitus \n"),
        "Based on these patient needs: \"tinnitus\", create a comprehensive wellness plan."
    );
}

#[test]
fn default_settings_are_conservative() {
    let settings = InferenceSettings::default();
    assert_eq!(settings.temperature, 0.3);
    assert_eq!(settings.top_p, 0.9);
    assert_eq!(settings.max_tokens, 1024);
}
