//! NPC-to-NPC relay tests

use std::cell::Cell;

use ndl_engine::resolve::NO_RESPONSE;
use ndl_engine::{Registry, Resolver, ResolverConfig};
use ndl_foundation::{Error, InteractionRule, Npc, Result};
use proptest::prelude::*;

fn offline(_: &str, _: f32) -> Result<String> {
    Err(Error::generator("offline"))
}

fn registry(script: &str) -> Registry {
    let (registry, diagnostics) = Registry::from_script(script);
    assert!(diagnostics.is_empty(), "{diagnostics:?}");
    registry
}

#[test]
fn missing_target_is_reported_in_text() {
    let resolver = Resolver::new(
        registry(r#"npc "A" { dialogue { with "Ghost" on "boo" "Ghost, come out!" -> summon } }"#),
        offline,
    );
    let response = resolver.resolve("A", "boo", false).unwrap().unwrap();
    assert_eq!(response.text, "Ghost, come out! (but Ghost isn't here)");
    assert!(response.text.contains("isn't here"));
    assert_eq!(response.action.as_deref(), Some("summon"));
}

#[test]
fn target_is_named_as_registered() {
    let resolver = Resolver::new(
        registry(
            r#"npc "A" { dialogue { with "bram" on "hi" "hi" -> x } }
               npc "Bram" { dialogue { fallback { ai "p" } } }"#,
        ),
        |_: &str, _: f32| -> Result<String> { Ok("Hm.".to_string()) },
    );
    let response = resolver.resolve("A", "hi", false).unwrap().unwrap();
    assert_eq!(response.text, "hi (to Bram: Hm.)");
}

#[test]
fn silent_target() {
    let resolver = Resolver::new(
        registry(r#"npc "A" { dialogue { with "B" on "hi" "B?" -> ask } } npc "B" { }"#),
        offline,
    );
    let response = resolver.resolve("A", "hi", false).unwrap().unwrap();
    assert_eq!(response.text, format!("B? (to B: {NO_RESPONSE})"));
}

#[test]
fn self_targeting_interaction_terminates() {
    let resolver = Resolver::new(
        registry(r#"npc "Narcissus" { dialogue { with "Narcissus" on "mirror" "mirror, mirror" -> gaze } }"#),
        offline,
    );
    let response = resolver.resolve("Narcissus", "mirror", false).unwrap().unwrap();
    assert!(response.text.ends_with("Narcissus is too caught up in conversation to respond.))"));
    assert_eq!(response.text.matches("(to Narcissus:").count(), 2);
    assert_eq!(response.action.as_deref(), Some("gaze"));
}

#[test]
fn mutual_interactions_stop_at_the_limit() {
    let script = r#"
        npc "Ping" { dialogue { with "Pong" on "ball" "ball to Pong" -> hit } }
        npc "Pong" { dialogue { with "Ping" on "ball" "ball to Ping" -> hit } }
    "#;
    for depth in 0..4u32 {
        let resolver = Resolver::new(registry(script), offline)
            .with_config(ResolverConfig::default().with_max_relay_depth(depth));
        let response = resolver.resolve("Ping", "ball", false).unwrap().unwrap();
        let hops = response.text.matches("(to ").count();
        assert_eq!(hops, depth as usize + 1, "{}", response.text);
        assert!(response.text.contains("too caught up"));
    }
}

#[test]
fn relay_hops_never_exceed_the_limit() {
    let calls = Cell::new(0);
    let counting = |_: &str, _: f32| -> Result<String> {
        calls.set(calls.get() + 1);
        Ok("done".to_string())
    };
    let resolver = Resolver::new(
        registry(
            r#"
            npc "A" { dialogue { with "B" on "go" "go" -> x } }
            npc "B" { dialogue { with "C" on "go" "go" -> x } }
            npc "C" { dialogue { fallback { ai "end" } } }
            "#,
        ),
        counting,
    );

    let response = resolver.resolve("A", "go", false).unwrap().unwrap();
    assert_eq!(response.text, "go (to B: go (to C: C is too caught up in conversation to respond.))");
    assert_eq!(calls.get(), 0);
}

fn ring() -> impl Strategy<Value = Vec<Npc>> {
    (1usize..6, prop::collection::vec((0usize..6, "[a-c]"), 1..12)).prop_map(|(count, edges)| {
        let mut npcs: Vec<Npc> = (0..count).map(|i| Npc::new(format!("N{i}"))).collect();
        for (i, (to, event)) in edges.into_iter().enumerate() {
            let target = format!("N{}", to % (count + 1));
            npcs[i % count] = npcs[i % count].clone().with_interaction(InteractionRule::new(
                target,
                event.clone(),
                event,
                "relay",
            ));
        }
        npcs
    })
}

proptest! {
    #[test]
    fn arbitrary_relay_graphs_terminate(npcs in ring(), depth in 0u32..4, utterance in "[a-c]{1,3}") {
        let names: Vec<String> = npcs.iter().map(|n| n.name.clone()).collect();
        let resolver = Resolver::new(npcs.into_iter().collect(), offline)
            .with_config(ResolverConfig::default().with_max_relay_depth(depth));

        for name in &names {
            let response = resolver.resolve(name, &utterance, false).unwrap();
            if let Some(response) = response {
                prop_assert!(response.text.matches("(to ").count() <= depth as usize + 1);
            }
        }
    }
}
