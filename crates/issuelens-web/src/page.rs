// SPDX-License-Identifier: Apache-2.0

//! HTML rendering for the browser form.

use std::fmt::Write;

use issuelens_core::AnalysisResult;

/// What to show under the form.
pub enum Outcome<'a> {
    /// Nothing submitted yet.
    Empty,
    /// A successful analysis.
    Analysis(&'a AnalysisResult),
    /// A user-safe error message.
    Error(&'a str),
}

/// Escapes text for inclusion in HTML element content or attribute values.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

const HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>issuelens</title>
<style>
body { font-family: system-ui, sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }
label { display: block; margin-top: 1rem; }
input { width: 100%; padding: .4rem; }
.error { color: #b00020; border: 1px solid #b00020; padding: .75rem; margin-top: 1rem; white-space: pre-wrap; }
.result { border: 1px solid #ccc; padding: .75rem; margin-top: 1rem; }
code { background: #f3f3f3; padding: 0 .25rem; }
</style>
</head>
<body>
<h1>GitHub Issue Analyzer</h1>
"#;

/// Renders the full page: form, then the outcome.
#[must_use]
pub fn render_page(repo_url: &str, issue_number: &str, outcome: &Outcome<'_>) -> String {
    let mut html = String::from(HEAD);

    let _ = write!(
        html,
        r#"<form method="post" action="/analyze">
<label for="repo_url">Repository URL</label>
<input id="repo_url" name="repo_url" placeholder="https://github.com/owner/repo" value="{}" required>
<label for="issue_number">Issue number</label>
<input id="issue_number" name="issue_number" inputmode="numeric" value="{}" required>
<p><button type="submit">Analyze</button></p>
</form>
"#,
        escape_html(repo_url),
        escape_html(issue_number)
    );

    match outcome {
        Outcome::Empty => {}
        Outcome::Error(message) => {
            let _ = writeln!(html, r#"<div class="error">{}</div>"#, escape_html(message));
        }
        Outcome::Analysis(analysis) => render_analysis(&mut html, analysis),
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn render_analysis(html: &mut String, analysis: &AnalysisResult) {
    let labels = analysis
        .suggested_labels
        .iter()
        .map(|l| format!("<code>{}</code>", escape_html(l)))
        .collect::<Vec<_>>()
        .join(" ");

    let _ = write!(
        html,
        r#"<div class="result">
<h2>Analysis</h2>
<p><strong>Summary:</strong> {}</p>
<p><strong>Type:</strong> {}</p>
<p><strong>Priority:</strong> {}</p>
<p><strong>Suggested labels:</strong> {}</p>
<p><strong>Potential impact:</strong> {}</p>
</div>
"#,
        escape_html(&analysis.summary),
        analysis.issue_type,
        escape_html(&analysis.priority_score),
        labels,
        escape_html(&analysis.potential_impact),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use issuelens_core::IssueType;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<script>alert("x") & 'y'</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;) &amp; &#x27;y&#x27;&lt;/script&gt;"
        );
    }

    #[test]
    fn empty_page_has_form_only() {
        let html = render_page("", "", &Outcome::Empty);
        assert!(html.contains(r#"action="/analyze""#));
        assert!(!html.contains("class=\"error\""));
        assert!(!html.contains("class=\"result\""));
    }

    #[test]
    fn error_is_escaped_and_input_kept() {
        let html = render_page(
            "https://github.com/acme/widget",
            "abc",
            &Outcome::Error("Issue number must be <numeric>"),
        );
        assert!(html.contains("Issue number must be &lt;numeric&gt;"));
        assert!(html.contains(r#"value="https://github.com/acme/widget""#));
        assert!(html.contains(r#"value="abc""#));
    }

    #[test]
    fn analysis_lists_labels() {
        let analysis = AnalysisResult {
            summary: "Crash on <save>".to_string(),
            issue_type: IssueType::Bug,
            priority_score: "4".to_string(),
            suggested_labels: vec!["bug".to_string(), "ui".to_string()],
            potential_impact: "Data loss".to_string(),
        };
        let html = render_page("acme/widget", "7", &Outcome::Analysis(&analysis));
        assert!(html.contains("Crash on &lt;save&gt;"));
        assert!(html.contains("<code>bug</code> <code>ui</code>"));
        assert!(html.contains("<strong>Type:</strong> bug"));
    }
}
