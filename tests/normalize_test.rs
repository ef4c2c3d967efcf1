// Text normalization against the shipped French glossary

use translation_utils::{normalize, Normalizer, ReplacementRule};

#[test]
fn test_clean_text_is_unchanged() {
    for text in [
        "",
        "Bonjour le monde",
        "Le nœud envoie un message au pair.",
        "<<Alice>> paie <<Bob>> 10 sats",
        "a & b; c",
    ] {
        assert_eq!(normalize(text), text, "clean text should pass through: {:?}", text);
    }
}

#[test]
fn test_numeric_entities_decode_to_code_point() {
    for (code, expected) in [(65u32, 'A'), (233, 'é'), (8364, '€'), (128512, '😀')] {
        let decoded = normalize(&format!("&#{};", code));
        assert_eq!(decoded, expected.to_string());
        // Idempotent once no entities remain
        assert_eq!(normalize(&decoded), decoded);
    }
}

#[test]
fn test_unknown_entities_pass_through() {
    assert_eq!(normalize("a &nbsp; b &lt;c&gt;"), "a &nbsp; b &lt;c&gt;");
    assert_eq!(normalize("&#xE9;"), "&#xE9;");
}

#[test]
fn test_rules_apply_in_sequence() {
    // Rule B's pattern only exists after rule A has run
    let rules = vec![
        ReplacementRule::literal("nœud", "noeud"),
        ReplacementRule::literal("noeud", "node"),
    ];
    let normalizer = Normalizer::new(&rules);
    assert_eq!(normalizer.normalize("le nœud"), "le node");

    let reversed: Vec<_> = rules.iter().cloned().rev().collect();
    assert_eq!(Normalizer::new(&reversed).normalize("le nœud"), "le noeud");
}

#[test]
fn test_literal_glossary_terms() {
    assert_eq!(normalize("les portefeuilles"), "les porte-monnaie");
    assert_eq!(normalize("le câble"), "le fil");
    assert_eq!(normalize("routage de l'oignon"), "routage en oignon");
    assert_eq!(normalize("un aperçu (simplifié)"), "un aperçu (de manière simplifiée)");
}

#[test]
fn test_pattern_glossary_terms_keep_case() {
    assert_eq!(normalize("Le graphique des canaux"), "Le graphe de canaux");
    assert_eq!(normalize("Graphique du canal"), "Graphe de canaux");
    assert_eq!(normalize("bits de fonctions"), "bits de fonctionnalités");
}

#[test]
fn test_entities_decoded_before_glossary() {
    assert_eq!(normalize("lisible par l&#39;homme"), "lisible par l'humain");
    assert_eq!(normalize("d&apos;homologues"), "de pairs");
}

#[test]
fn test_undecoded_entities_still_match_rules() {
    // &gt; is not in the entity table, the glossary sees it verbatim
    assert_eq!(normalize("&gt; &gt;"), "&gt;&gt;");
}

#[test]
fn test_word_class_is_ascii() {
    // 'é' before "chiffrer" is not matched by the ASCII word class, so the
    // dedicated "déchiffrer" rule applies instead
    assert_eq!(normalize("déchiffrer le message"), "décrypter le message");
    assert_eq!(normalize("déchiffrés"), "décryptés");
}
