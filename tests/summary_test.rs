use article_digest::{rank_sentences, sentences_intersected_words_count, summarize};

#[test]
fn single_sentence_paragraph_contributes_nothing() {
    let text = "SpaceX launched a rocket.\n\nThe launch was successful. It was historic.";
    assert_eq!(summarize(text), "The launch was successful");
}

#[test]
fn every_paragraph_below_two_sentences_gives_empty_summary() {
    assert_eq!(summarize(""), "");
    assert_eq!(summarize("Only a single sentence."), "");
}

#[test]
fn one_sentence_per_paragraph_is_flattened_and_retried() {
    let text = "Rockets are loud machines.\n\nRockets are expensive machines.\n\nBoats are quiet.";
    let summary = summarize(text);

    assert_eq!(summary, "Rockets are loud machines");
}

#[test]
fn summary_holds_one_sentence_per_qualifying_paragraph() {
    let text = "The probe reached Mars. The probe sent photos. Mission control was happy.\n\n\
                A single line paragraph.\n\n\
                Photos showed red dust. The probe photos were sharp.";
    let summary = summarize(text);
    let lines: Vec<&str> = summary.lines().collect();

    assert_eq!(lines.len(), 2);
    assert!(text.contains(lines[0]));
    assert!(text.contains(lines[1]));
}

#[test]
fn ranks_are_document_wide() {
    // "Photos arrived" shares words with the first paragraph, "Dust settled" does not
    let text = "Photos arrived today from orbit.\n\nDust settled slowly. Photos arrived today.";
    assert_eq!(summarize(text), "Photos arrived today.");
}

#[test]
fn summarize_is_deterministic() {
    let text = "Alpha beta gamma. Beta gamma delta. Gamma delta alpha.\n\nOne two three. Two three four.";
    assert_eq!(summarize(text), summarize(text));
}

#[test]
fn similarity_is_symmetric() {
    let sentences = [
        "SpaceX launched a rocket",
        "The launch was successful",
        "It was historic",
        "a a a rocket rocket",
        "",
        "launch launch SpaceX the was",
    ];

    for a in sentences {
        for b in sentences {
            assert_eq!(
                sentences_intersected_words_count(a, b),
                sentences_intersected_words_count(b, a),
                "asymmetric for {a:?} / {b:?}"
            );
        }
    }
}

#[test]
fn rank_table_is_keyed_by_letters_only() {
    let ranks = rank_sentences("It rained, again. It rained again today");
    assert!(ranks.get("Itrainedagain").is_some());
    assert_eq!(ranks.rank_of("It rained again!"), ranks.rank_of("It rained, again"));
}
