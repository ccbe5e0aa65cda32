//! Property tests for the parser
//!
//! Generated NPCs are rendered as NDL and parsed back.

use ndl_foundation::{FallbackRule, InteractionRule, Npc, TriggerRule};
use ndl_language::{Keyword, parse_script};
use proptest::prelude::*;

fn word() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,7}".prop_filter("keywords are reserved", |w| {
        Keyword::from_ident(w).is_none()
    })
}

fn text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ,.!?{}\\[\\]-]{1,20}"
}

fn trigger() -> impl Strategy<Value = TriggerRule> {
    (text(), text(), word()).prop_map(|(event, line, action)| TriggerRule::new(event, line, action))
}

fn interaction() -> impl Strategy<Value = InteractionRule> {
    ("[A-Z][a-z]{0,6}", text(), text(), word()).prop_map(|(target, event, line, action)| {
        InteractionRule::new(target, event, line, action)
    })
}

fn npc() -> impl Strategy<Value = Npc> {
    (
        "[A-Z][a-z]{0,6}( [A-Z][a-z]{0,6})?",
        prop::collection::vec(word(), 0..4),
        prop::option::of(text()),
        prop::collection::vec(trigger(), 0..4),
        prop::collection::vec(interaction(), 0..3),
        prop::option::of(text()),
    )
        .prop_map(|(name, traits, memory, triggers, interactions, fallback)| Npc {
            name,
            traits,
            memory,
            triggers,
            interactions,
            fallback: fallback.map(FallbackRule::new),
        })
}

fn render(npc: &Npc) -> String {
    let mut out = format!("npc \"{}\" {{\n", npc.name);
    if !npc.traits.is_empty() {
        out.push_str(&format!("    traits [{}]\n", npc.traits.join(", ")));
    }
    if let Some(memory) = &npc.memory {
        out.push_str(&format!("    memory \"{memory}\"\n"));
    }
    out.push_str("    dialogue {\n");
    for t in &npc.triggers {
        out.push_str(&format!("        on \"{}\" \"{}\" -> {}\n", t.event, t.line, t.action));
    }
    for i in &npc.interactions {
        out.push_str(&format!(
            "        with \"{}\" on \"{}\": \"{}\" -> {}\n",
            i.target, i.event, i.line, i.action
        ));
    }
    if let Some(fallback) = &npc.fallback {
        out.push_str(&format!("        fallback {{ ai \"{}\" }}\n", fallback.prompt));
    }
    out.push_str("    }\n}\n");
    out
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn rendered_npcs_parse_back(npcs in prop::collection::vec(npc(), 0..5)) {
        let script: String = npcs.iter().map(render).collect();
        let parsed = parse_script(&script);

        prop_assert!(parsed.is_clean(), "{:?}\n{}", parsed.diagnostics, script);
        prop_assert_eq!(parsed.npcs, npcs);
    }

    #[test]
    fn truncation_never_loses_complete_blocks(npcs in prop::collection::vec(npc(), 1..4)) {
        let mut script: String = npcs.iter().map(render).collect();
        script.push_str("npc \"Cut\" { dialogue { on \"x\"");
        let parsed = parse_script(&script);

        prop_assert_eq!(parsed.npcs.len(), npcs.len());
        prop_assert!(parsed.fatal().is_some());
    }
}
