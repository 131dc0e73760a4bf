use md_multiline_table_engine::{Converter, ProcessorRegistry, RenderOptions};
use pretty_assertions::assert_eq;
use pulldown_cmark::{Parser, html::push_html};
use rstest::rstest;

fn html(md: &str) -> String {
    Converter::default().to_html(md).html
}

#[test]
fn colon_table_renders_merged_cells() {
    let out = html("| A | B |\n|---|---|\n| a | b |\n: c : d :");
    assert!(out.contains("<th>A</th><th>B</th>"), "{out}");
    assert!(out.contains("<td>a c</td><td>b d</td>"), "{out}");
}

#[test]
fn colon_escapes_render_literally() {
    let out = html("|A|\n|-|\n||\n:\\:\\|:\n:\\:\\|:");
    assert!(out.contains("<td>:| :|</td>"), "{out}");
}

#[test]
fn plus_sign_escapes_render_literally() {
    let out = html("|A|\n|-|\n||\n|:\\||+\n|:\\||+");
    assert!(out.contains("<td>:| :|</td>"), "{out}");
}

#[test]
fn standard_table_renders_the_same_with_and_without_processor() {
    let md = "| A | B |\n|:--|--:|\n| 1 | 2 |\n| 3 | 4 |\n\nText after.\n";
    let plain = Converter::new(ProcessorRegistry::new(), RenderOptions::default());
    assert_eq!(html(md), plain.to_html(md).html);
}

#[test]
fn degenerate_table_is_left_untouched() {
    let rewritten = Converter::default().rewrite("|\n|-|\n|a|");
    assert_eq!(rewritten.markdown, "|\n|-|\n|a|");
    assert_eq!(rewritten.diagnostics.len(), 1);
    assert_eq!(rewritten.diagnostics[0].line, Some(1));
}

#[rstest]
#[case("Para.\n\n    code a\n\n\n    code b\n")]
#[case("<pre>\nline1\n\n\nline2\n</pre>")]
#[case("Text\n\n\n\n> quote\n>\n> more\n")]
#[case("```\n|A|\n|-|\n```rust\n|a|\n:b:\n```\n")]
fn documents_without_multiline_tables_render_like_pulldown(#[case] md: &str) {
    let mut plain = String::new();
    push_html(
        &mut plain,
        Parser::new_ext(md, RenderOptions::default().to_options()),
    );
    assert_eq!(html(md), plain);
}

#[test]
fn mismatched_row_is_still_rendered() {
    let rendered =
        Converter::default().to_html("| A | B |\n|---|---|\n| a | b |\n: c :\n| e | f |");
    assert!(
        rendered.html.contains("<td>a c</td><td>b</td>"),
        "{}",
        rendered.html
    );
    assert!(
        rendered.html.contains("<td>e</td><td>f</td>"),
        "{}",
        rendered.html
    );
    assert_eq!(rendered.diagnostics.len(), 1);
    assert_eq!(rendered.diagnostics[0].line, Some(4));
}

#[test]
fn single_line_and_bad_separator_are_prose() {
    for md in ["| A | B |", "| A | B |\nnot a separator |"] {
        let out = html(md);
        assert!(!out.contains("<table>"), "{out}");
        assert!(out.starts_with("<p>"), "{out}");
    }
}

#[test]
fn tables_disabled_leaves_pipes_in_paragraph() {
    let converter = Converter::with_multiline_tables(RenderOptions {
        tables: false,
        ..RenderOptions::default()
    });
    let out = converter.to_html("|A|\n|-|\n|a|\n:b:").html;
    assert!(!out.contains("<table>"), "{out}");
    assert!(out.contains("| a b |"), "{out}");
}
