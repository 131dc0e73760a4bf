// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_multiline_table(rows: usize) -> String {
    let mut table = String::from(
        "| Name | Value | Notes |\n: of item : used : here :\n|------|:-----:|-------|\n",
    );
    for row in 0..rows {
        table.push_str(&format!("| item {row} | {row} | first line |\n"));
        table.push_str(": more : text : second line :\n");
        table.push_str("| | | third line |+\n");
    }
    table
}

#[allow(dead_code)]
pub fn generate_document(tables: usize, rows: usize) -> String {
    let mut content = String::new();
    for section in 0..tables {
        content.push_str(&format!("# Section {section}\n\nSome paragraph text.\n\n"));
        content.push_str(&generate_multiline_table(rows));
        content.push_str("\n```\n|not|\n|-|\n:a table:\n```\n\n");
    }
    content
}
