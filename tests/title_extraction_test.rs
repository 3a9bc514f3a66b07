use article_digest::extract;

fn title_of(head: &str, body: &str) -> String {
    let html = format!(
        "<html><head>{head}</head><body>{body}<article><p>Body text long enough to score.</p></article></body></html>"
    );

    match extract(&html) {
        Ok(result) => result.title,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn title_after_last_colon() {
    assert_eq!(
        title_of("<title>My Blog: How SpaceX Works</title>", ""),
        "How SpaceX Works"
    );
}

#[test]
fn title_uses_last_of_several_colons() {
    assert_eq!(
        title_of("<title>News: Science: Why The Sky Is Blue</title>", ""),
        "Why The Sky Is Blue"
    );
}

#[test]
fn title_kept_when_colon_segment_too_short() {
    assert_eq!(
        title_of("<title>Weekly roundup: Part two</title>", ""),
        "Weekly roundup: Part two"
    );
}

#[test]
fn title_matching_heading_is_used_verbatim() {
    assert_eq!(
        title_of(
            "<title>Site: The Full Headline</title>",
            "<h1>Site: The Full Headline</h1>"
        ),
        "Site: The Full Headline"
    );
}

#[test]
fn title_too_short_defers_to_single_h1() {
    assert_eq!(
        title_of("<title>Home</title>", "<h1>The Real Article Headline</h1>"),
        "The Real Article Headline"
    );
}

#[test]
fn title_too_long_defers_to_single_h1() {
    let long_title = "word ".repeat(40);
    assert_eq!(
        title_of(&format!("<title>{long_title}</title>"), "<h1>Concise Headline</h1>"),
        "Concise Headline"
    );
}

#[test]
fn title_too_short_kept_without_unique_h1() {
    assert_eq!(
        title_of("<title>Home</title>", "<h1>First</h1><h1>Second</h1>"),
        "Home"
    );
}

#[test]
fn title_is_trimmed() {
    assert_eq!(
        title_of("<title>   A perfectly ordinary title   </title>", ""),
        "A perfectly ordinary title"
    );
}

#[test]
fn title_empty_when_no_container_wins() {
    let html = "<html><head><title>Orphan title with no content</title></head><body><span>x</span></body></html>";

    match extract(html) {
        Ok(result) => assert_eq!(result.title, ""),
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}
