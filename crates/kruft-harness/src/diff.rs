//! Diff rendering for fixture comparison.

/// Render a line diff between expected and actual output.
///
/// Lines present on only one side are reported as removed or added.
#[must_use]
pub fn render_diff(expected: &str, actual: &str) -> String {
    if expected == actual {
        return String::from("[identical]");
    }

    let mut out = String::from("--- expected\n+++ actual\n");
    let expected_lines: Vec<&str> = expected.lines().collect();
    let actual_lines: Vec<&str> = actual.lines().collect();
    for i in 0..expected_lines.len().max(actual_lines.len()) {
        let e = expected_lines.get(i);
        let a = actual_lines.get(i);
        if e == a {
            continue;
        }
        out.push_str(&format!("@@ line {} @@\n", i + 1));
        if let Some(e) = e {
            out.push_str(&format!("-{e}\n"));
        }
        if let Some(a) = a {
            out.push_str(&format!("+{a}\n"));
        }
    }
    out
}
