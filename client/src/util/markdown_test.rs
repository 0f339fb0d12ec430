use super::*;

#[test]
fn paragraphs_become_p_tags() {
    let html = render_markdown_html("First.\n\nSecond.");
    assert_eq!(html, "<p>First.</p>\n<p>Second.</p>\n");
}

#[test]
fn headings_and_code_render() {
    let html = render_markdown_html("## Stagger\n\nUse `transform`.");
    assert!(html.contains("<h2>Stagger</h2>"));
    assert!(html.contains("<code>transform</code>"));
}

#[test]
fn raw_html_is_dropped() {
    let html = render_markdown_html("Hello <script>alert(1)</script> world");
    assert!(!html.contains("<script>"));
    assert!(html.contains("Hello"));
}
