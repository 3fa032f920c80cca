//! Tests for provider sets and the static provider

use super::*;
use crate::config::ProviderConfig;
use crate::test_utils::test_helpers::{MockProvider, Outcome, provider_set};

fn names(eligible: &[(usize, Arc<dyn SuggestionProvider>)]) -> Vec<(usize, String)> {
    eligible
        .iter()
        .map(|(slot, p)| (*slot, p.name().to_string()))
        .collect()
}

#[test]
fn test_eligibility_keeps_positions() {
    let set = provider_set(vec![
        MockProvider::new("web"),
        MockProvider::new("off").disabled(),
        MockProvider::new("trending")
            .without_term_support()
            .with_zero_term(0, Outcome::Suggest(vec![])),
        MockProvider::new("people").with_zero_term(0, Outcome::Suggest(vec![])),
    ]);

    assert_eq!(
        names(&set.term_eligible()),
        vec![(0, "web".to_string()), (3, "people".to_string())]
    );
    assert_eq!(
        names(&set.zero_term_eligible()),
        vec![(2, "trending".to_string()), (3, "people".to_string())]
    );
}

#[test]
fn test_sets_with_same_signature_are_equal() {
    let a = provider_set(vec![MockProvider::new("web"), MockProvider::new("people")]);
    let b = provider_set(vec![MockProvider::new("web"), MockProvider::new("people")]);
    assert_eq!(a, b);
}

#[test]
fn test_set_change_detection() {
    let base = provider_set(vec![MockProvider::new("web")]);

    assert_ne!(base, provider_set(vec![MockProvider::new("web").disabled()]));
    assert_ne!(base, provider_set(vec![MockProvider::new("news")]));
    assert_ne!(
        base,
        provider_set(vec![MockProvider::new("web"), MockProvider::new("news")])
    );
    assert_ne!(
        base,
        provider_set(vec![
            MockProvider::new("web").with_zero_term(0, Outcome::Suggest(vec![]))
        ])
    );
    assert_ne!(base, ProviderSet::default());
}

#[test]
fn test_error_display_names_provider() {
    let err = ProviderError::Network {
        provider: "people".to_string(),
        message: "connection refused".to_string(),
    };
    assert_eq!(err.to_string(), "[people] Network error: connection refused");
}

#[test]
fn test_static_provider_capabilities() {
    let empty = StaticProvider::new("empty");
    assert_eq!(empty.capabilities(), Capabilities::default());

    let full = StaticProvider::new("full")
        .with_suggestions(["Cat food"])
        .with_zero_term(["Weekly deals"]);
    assert_eq!(
        full.capabilities(),
        Capabilities {
            term_suggestions: true,
            zero_term_suggestions: true,
        }
    );
}

#[tokio::test]
async fn test_static_provider_matches_case_insensitively() {
    let provider = StaticProvider::new("catalog")
        .with_group("Products")
        .with_suggestions(["Cat food", "Dog food", "Bobcat"]);

    let suggestions = provider.fetch_suggestions("CAT").await.unwrap();
    let labels: Vec<&str> = suggestions.iter().map(|s| s.display_text.as_str()).collect();

    assert_eq!(labels, vec!["<B>Cat</B> food", "Bob<B>cat</B>"]);
    assert!(suggestions.iter().all(|s| s.effective_group() == "Products"));
}

#[tokio::test]
async fn test_static_provider_zero_term() {
    let provider = StaticProvider::new("trending").with_zero_term(["Weekly deals", "New arrivals"]);

    let suggestions = provider.fetch_zero_term_suggestions().await.unwrap();
    let labels: Vec<&str> = suggestions.iter().map(|s| s.display_text.as_str()).collect();

    assert_eq!(labels, vec!["Weekly deals", "New arrivals"]);
}

#[test]
fn test_static_provider_from_config() {
    let config = ProviderConfig {
        name: "help".to_string(),
        enabled: false,
        group: Some("Help".to_string()),
        suggestions: vec!["Cancel order".to_string()],
        zero_term: vec![],
    };
    let provider = StaticProvider::from(&config);

    assert_eq!(provider.name(), "help");
    assert!(!provider.is_enabled());
    assert!(provider.capabilities().term_suggestions);
    assert!(!provider.capabilities().zero_term_suggestions);
}
