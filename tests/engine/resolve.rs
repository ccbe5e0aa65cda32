//! Resolution precedence tests

use ndl_engine::{Registry, Resolver, ResponseSource};
use ndl_foundation::{Error, Result};

type TestGenerator = fn(&str, f32) -> Result<String>;

fn offline(_: &str, _: f32) -> Result<String> {
    Err(Error::generator("offline"))
}

fn generated(_: &str, _: f32) -> Result<String> {
    Ok("(generated)".to_string())
}

fn resolver(script: &str, generator: TestGenerator) -> Resolver<TestGenerator> {
    let (registry, diagnostics) = Registry::from_script(script);
    assert!(diagnostics.is_empty(), "{diagnostics:?}");
    Resolver::new(registry, generator)
}

const ELARA: &str = r#"
npc "Elara" {
    dialogue {
        on "hello" "Welcome, traveler!" -> wave
        on "hell" "Language!" -> scold
        on "room" "Five silver a night." ->
        with "Bram" on "trouble" "Bram, we have trouble." -> alert
        fallback { ai "Stay friendly." }
    }
}
npc "Bram" {
    dialogue {
        on "trouble" "Not now." -> ignore
        fallback { ai "Be terse." }
    }
}
"#;

#[test]
fn unknown_npc() {
    let resolver = resolver(ELARA, offline);
    let response = resolver.resolve("Nobody", "hello", false).unwrap().unwrap();
    assert_eq!(response.text, "NPC Nobody not found.");
    assert_eq!(response.action, None);
    assert_eq!(response.source, ResponseSource::UnknownNpc);
}

#[test]
fn names_are_case_insensitive() {
    let resolver = resolver(ELARA, offline);
    let response = resolver.resolve("eLaRa", "hello", false).unwrap().unwrap();
    assert_eq!(response.text, "Welcome, traveler!");
}

#[test]
fn events_match_as_case_insensitive_substrings() {
    let resolver = resolver(ELARA, offline);
    let response = resolver.resolve("Elara", "Do you have a ROOM?", false).unwrap().unwrap();
    assert_eq!(response.text, "Five silver a night.");
    assert_eq!(response.action, None);
}

#[test]
fn first_declared_trigger_wins() {
    let resolver = resolver(ELARA, offline);
    let response = resolver.resolve("Elara", "hello!", false).unwrap().unwrap();
    assert_eq!(response.action.as_deref(), Some("wave"));
}

#[test]
fn triggers_before_interactions() {
    let resolver = resolver(
        r#"npc "A" { dialogue {
            with "B" on "x" "to B" -> relay
            on "x" "direct" -> answer
        } } npc "B" { }"#,
        offline,
    );
    let response = resolver.resolve("A", "x", false).unwrap().unwrap();
    assert_eq!(response.source, ResponseSource::Trigger);
    assert_eq!(response.text, "direct");
}

#[test]
fn interactions_before_fallback() {
    let resolver = resolver(ELARA, generated);
    let response = resolver.resolve("Elara", "there's trouble", false).unwrap().unwrap();
    assert_eq!(response.source, ResponseSource::Interaction);
    assert_eq!(
        response.text,
        "Bram, we have trouble. (to Bram: (generated))"
    );
    assert_eq!(response.action.as_deref(), Some("alert"));
}

#[test]
fn relayed_call_skips_triggers() {
    let resolver = resolver(ELARA, generated);
    let response = resolver.resolve("Bram", "trouble", true).unwrap().unwrap();
    assert_eq!(response.source, ResponseSource::Fallback);
    let direct = resolver.resolve("Bram", "trouble", false).unwrap().unwrap();
    assert_eq!(direct.source, ResponseSource::Trigger);
}

#[test]
fn nothing_matches() {
    let resolver = resolver(r#"npc "Stone" { dialogue { on "x" "X" -> y } }"#, offline);
    assert_eq!(resolver.resolve("Stone", "hello", false).unwrap(), None);
}

#[test]
fn list_and_find() {
    let resolver = resolver(ELARA, offline);
    assert_eq!(resolver.list_npcs(), vec!["Elara", "Bram"]);
    assert!(resolver.find_npc("bram").is_some());
    assert!(resolver.find_npc("Gretchen").is_none());
}
