//! Integration tests for the travel research pipeline.
//!
//! These tests drive the public API end to end with the scripted mock client.

use std::sync::Arc;

use serde_json::json;
use travelsearch::domain::services::curated_content;
use travelsearch::{
    Container, ContainerConfig, FallbackSynthesizer, MockResearchClient, QueryParams,
    RawSelections, RawServiceOutput, Region, ResearchTravelUseCase, ResultEnvelope, TravelPlan,
    TravelPreference, INCOMPLETE_FAILURE_MESSAGE, TRANSPORT_FAILURE_MESSAGE,
};

fn use_case(client: MockResearchClient) -> ResearchTravelUseCase {
    ResearchTravelUseCase::new(Arc::new(client))
}

fn family_params() -> QueryParams {
    QueryParams::new("")
        .with_preferences([TravelPreference::Family])
        .with_regions([Region::PuntaCana])
        .with_budget("mid-range")
        .with_companions("family")
}

fn assert_no_empty_lists(plan: &TravelPlan) {
    assert!(!plan.summary.is_empty());
    assert!(!plan.details.is_empty());
    assert!(plan.is_complete(), "plan has an empty list: {plan:?}");
}

#[tokio::test]
async fn test_section_marker_answer_is_extracted_per_field() {
    let text = "Summary: X\nDetails: Y\nPros:\n1. A\n2. B\nCons:\nPlaces to Visit:\n- P1\n\
                Activities:\nAccommodations:\nRestaurants:\nSafety Tips:\n- S1";
    let envelope = use_case(MockResearchClient::replying(RawServiceOutput::complete(text)))
        .submit_query(&family_params())
        .await;

    let plan = envelope.data().expect("section answer should succeed");
    assert_eq!(plan.summary, "X");
    assert_eq!(plan.details, "Y");
    assert_eq!(plan.pros_and_cons.pros, vec!["A", "B"]);
    assert_eq!(plan.recommendations.places[0].name, "P1");
    assert_eq!(plan.recommendations.places.len(), 1);
    assert_eq!(
        plan.recommendations.activities.len(),
        curated_content::DEFAULT_ACTIVITIES.len()
    );
    assert_eq!(plan.safety_tips, vec!["S1"]);
    assert_no_empty_lists(plan);
}

#[tokio::test]
async fn test_structured_answer_round_trips() {
    let body = json!({
        "summary": "A week in Samaná",
        "details": "Whales, waterfalls and quiet beaches.",
        "prosAndCons": {"pros": ["Whale season"], "cons": ["Long drive"]},
        "recommendations": {
            "places": [{"name": "Los Haitises", "link": "https://example.com/haitises"}],
            "activities": [{"name": "Whale watching", "link": ""}],
            "accommodations": [{"name": "Eco lodge", "link": ""}],
            "restaurants": [{"name": "Beach shack", "link": ""}]
        },
        "safetytips": ["Book licensed boats"],
        "extra": "ignored"
    });
    let envelope = use_case(MockResearchClient::replying(RawServiceOutput::complete(
        body.to_string(),
    )))
    .submit_query(&QueryParams::new("Whales?").with_regions([Region::Samana]))
    .await;

    let plan = envelope.data().expect("structured answer should succeed");
    assert_eq!(plan.summary, "A week in Samaná");
    assert_eq!(plan.recommendations.places[0].link, "https://example.com/haitises");
    assert_eq!(plan.safety_tips, vec!["Book licensed boats"]);

    let reencoded = serde_json::to_value(plan).unwrap();
    assert_eq!(reencoded["prosAndCons"], body["prosAndCons"]);
    assert_eq!(reencoded["recommendations"], body["recommendations"]);
}

#[tokio::test]
async fn test_unusable_answer_falls_back_to_synthesis() {
    let envelope = use_case(MockResearchClient::replying(RawServiceOutput::complete(
        "I'm not sure, sorry.",
    )))
    .submit_query(&family_params())
    .await;

    let plan = envelope.data().expect("synthesis always succeeds");
    assert_eq!(plan, &FallbackSynthesizer::synthesize(&family_params()));
    assert!(plan.summary.contains("family vacation"));
    assert!(plan.summary.contains("Punta Cana"));
    assert!(plan.summary.contains("mid-range"));
}

#[tokio::test]
async fn test_transport_error_yields_failure_without_plan() {
    let envelope = use_case(MockResearchClient::failing("dns lookup failed"))
        .submit_query(&family_params())
        .await;

    match envelope {
        ResultEnvelope::Failure { error } => {
            assert!(!error.is_empty());
            assert_eq!(error, TRANSPORT_FAILURE_MESSAGE);
        }
        ResultEnvelope::Success { .. } => panic!("transport error must not synthesize a plan"),
    }
}

#[tokio::test]
async fn test_truncated_partial_text_is_still_used() {
    let envelope = use_case(MockResearchClient::replying(RawServiceOutput::incomplete(
        "Summary: Cut short\nPros:\n- Sunny",
        "max_output_tokens",
    )))
    .submit_query(&family_params())
    .await;

    let plan = envelope.data().expect("partial text is usable");
    assert_eq!(plan.summary, "Cut short");
    assert_eq!(plan.pros_and_cons.pros, vec!["Sunny"]);
    assert_no_empty_lists(plan);
}

#[tokio::test]
async fn test_truncated_without_text_is_failure() {
    let envelope = use_case(MockResearchClient::replying(RawServiceOutput::incomplete(
        "",
        "max_output_tokens",
    )))
    .submit_query(&family_params())
    .await;

    assert_eq!(envelope.error(), Some(INCOMPLETE_FAILURE_MESSAGE));
}

#[tokio::test]
async fn test_every_success_path_fills_all_lists() {
    let replies = [
        RawServiceOutput::complete(""),
        RawServiceOutput::complete("Summary: only a summary"),
        RawServiceOutput::complete(r#"{"summary": "missing everything else"}"#),
        RawServiceOutput::complete(
            r#"```json
{"summary":"s","details":"d","prosAndCons":{"pros":[],"cons":[]},"recommendations":{"places":[],"activities":[],"accommodations":[],"restaurants":[]},"safetytips":[]}
```"#,
        ),
        RawServiceOutput::refused("cannot help with that"),
    ];

    for reply in replies {
        let envelope = use_case(MockResearchClient::replying(reply.clone()))
            .submit_query(&family_params())
            .await;
        let plan = envelope
            .data()
            .unwrap_or_else(|| panic!("expected success for {reply:?}"));
        assert_no_empty_lists(plan);
    }
}

#[tokio::test]
async fn test_raw_selections_are_normalized_before_prompting() {
    let client = Arc::new(MockResearchClient::new());
    let use_case = ResearchTravelUseCase::new(client.clone());

    let raw = RawSelections {
        query: Some("  Where to eat?  ".to_string()),
        preferences: vec![Some("Cultural".to_string()), None, Some("cultural".to_string())],
        regions: vec![Some("santo domingo".to_string()), Some("undefined".to_string())],
        budget: Some("  ".to_string()),
        companions: None,
    };
    let envelope = use_case.submit_selections(&raw).await;
    assert!(envelope.is_success());

    let prompt = client.last_prompt().expect("one request was sent");
    assert!(prompt.user.contains("User query: Where to eat?\n"));
    assert!(prompt.user.contains("Travel preferences: cultural\n"));
    assert!(prompt.user.contains("Regions of interest: Santo Domingo\n"));
    assert!(!prompt.user.contains("Budget range:"));
    assert!(!prompt.user.contains("Traveling with:"));
}

#[tokio::test]
async fn test_mock_container_session_flow() {
    let container = Container::new(ContainerConfig {
        mock: true,
        ..ContainerConfig::default()
    })
    .expect("mock container needs no credentials");
    let session = container.session();

    let envelope = session.submit(family_params()).await;
    assert!(envelope.is_success());

    let saved = session
        .save_current_response()
        .await
        .expect("a plan is current");
    assert_eq!(saved.plan(), envelope.data().unwrap());

    session.clear_response().await;
    assert!(session.current_response().await.is_none());
    assert_eq!(session.saved_itineraries().await.len(), 1);
}

#[test]
fn test_envelope_wire_shape() {
    let success = serde_json::to_value(ResultEnvelope::success(FallbackSynthesizer::synthesize(
        &family_params(),
    )))
    .unwrap();
    assert_eq!(success["status"], "success");
    assert!(success["data"]["safetytips"].as_array().unwrap().len() >= 4);

    let failure = serde_json::to_value(ResultEnvelope::failure("nope")).unwrap();
    assert_eq!(failure, json!({"status": "failure", "error": "nope"}));
}
