//! Inline HTML pages: the upload form and the result view.
//!
//! The gateway serves two small pages and no assets, so the markup lives here
//! as strings rather than behind a template engine.

use crate::handlers::score::ScoreReport;
use axum::response::Html;

const PAGE_STYLE: &str = "body{font-family:sans-serif;max-width:40rem;margin:3rem auto;padding:0 1rem}\
h1{font-size:1.4rem}blockquote{border-left:3px solid #999;margin:1rem 0;padding:0.4rem 1rem;color:#333}\
.score{font-size:1.8rem;font-weight:bold}.notice{color:#a33}";

/// `GET /` — the upload form. Field name `audio_file` is part of the API.
pub fn upload_page(app_name: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>{name}</title><style>{style}</style></head>
<body>
<h1>{name}</h1>
<p>Upload a call recording to scan it for scam keywords.</p>
<form action="/process" method="post" enctype="multipart/form-data">
  <input type="file" name="audio_file" accept="audio/*">
  <button type="submit">Analyze</button>
</form>
</body>
</html>
"#,
        name = escape_html(app_name),
        style = PAGE_STYLE,
    ))
}

/// Result view for `POST /process`: transcript plus score on success, a
/// distinct failure notice (and no score) otherwise.
pub fn result_page(app_name: &str, report: &ScoreReport) -> Html<String> {
    let body = match report.score {
        Some(score) => format!(
            r#"<h2>Transcript</h2>
<blockquote>{transcript}</blockquote>
<p class="score">Fraud score: {score:.1}%</p>
<p>{hits} keyword hit(s) across {words} word(s).</p>"#,
            transcript = escape_html(&report.transcript),
            score = score,
            hits = report.scam_hits.unwrap_or(0),
            words = report.total_words.unwrap_or(0),
        ),
        None => format!(
            r#"<p class="notice">{notice}</p>
<p>No score was computed for this upload.</p>"#,
            notice = escape_html(&report.transcript),
        ),
    };
    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>{name} — result</title><style>{style}</style></head>
<body>
<h1>{name}</h1>
{body}
<p><a href="/">Analyze another recording</a></p>
</body>
</html>
"#,
        name = escape_html(app_name),
        style = PAGE_STYLE,
        body = body,
    ))
}

/// Minimal HTML escaping for text interpolated into the pages.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
