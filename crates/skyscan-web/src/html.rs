//! Server-rendered results page.
//!
//! The stylesheet is embedded via [`include_str!`] so the binary serves the
//! page without any files on disk. All interpolated text goes through
//! [`escape`].

use crate::snapshot::Snapshot;
use serde_json::Value;
use skyscan_core::{NormalizedState, RawStateVector, Rows};
use url::form_urlencoded;

pub(crate) const STYLE: &str = include_str!("assets/style.css");

static NULL: Value = Value::Null;

/// Columns of the results table, by field name.
pub const TABLE_COLUMNS: [&str; 10] = [
    "icao24",
    "callsign",
    "origin_country",
    "longitude",
    "latitude",
    "geo_altitude",
    "velocity",
    "true_track",
    "on_ground",
    "last_contact",
];

// ---------------------------------------------------------------------------
// Page
// ---------------------------------------------------------------------------

/// Render the full results page for one snapshot.
pub fn page(snap: &Snapshot) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>OpenSky Results</title>
<style>
{style}</style>
</head>
<body>
  <header>
    <h1>OpenSky Results</h1>
    <a href="{bbox_url}" class="muted">API request &#8599;</a>
    <a href="/map?{query}" class="muted">Map view</a>
  </header>
{error}{form}
  <h3 style="margin-top:20px;">Counts by origin_country</h3>
  <div class="counts">
{counts}  </div>

  <h3>Filtered list ({country}) &middot; {count} flights</h3>
{table}
  <p class="muted">Raw JSON: <a href="/json?{query}">/json</a></p>
</body>
</html>
"#,
        style = STYLE,
        bbox_url = escape(&snap.bbox_url),
        query = escape(&query_string(snap)),
        error = error_box(snap.error.as_deref()),
        form = form(snap),
        counts = counts(snap),
        country = escape(&snap.country),
        count = snap.count,
        table = table(&snap.states),
    )
}

fn error_box(error: Option<&str>) -> String {
    match error {
        Some(message) => format!(
            "  <div class=\"error\">Error fetching data: {}</div>\n",
            escape(message)
        ),
        None => String::new(),
    }
}

fn form(snap: &Snapshot) -> String {
    let q = &snap.query;
    let mut fields = String::new();
    for (name, value) in q.query_pairs() {
        fields.push_str(&input(name, value));
    }
    fields.push_str(&input("country", &snap.country));
    format!(
        "  <form class=\"form\" action=\"/\" method=\"get\">\n{fields}    \
         <div style=\"display:flex;align-items:end;\"><button type=\"submit\">Update</button></div>\n  \
         </form>\n"
    )
}

fn input(name: &str, value: &str) -> String {
    format!(
        "    <label>{name}<br><input name=\"{name}\" value=\"{}\" /></label>\n",
        escape(value)
    )
}

fn counts(snap: &Snapshot) -> String {
    let max = snap.max_count() as f64;
    snap.counts
        .iter()
        .map(|c| {
            format!(
                "    <div>\n      <span class=\"pill\">{}</span>\n      \
                 <div class=\"muted\">{} flights</div>\n      \
                 <div class=\"bar\" style=\"width: {:.1}%\"></div>\n    </div>\n",
                escape(c.label()),
                c.count,
                c.count as f64 / max * 100.0
            )
        })
        .collect()
}

fn table(rows: &Rows) -> String {
    let head: String = TABLE_COLUMNS.iter().map(|c| format!("<th>{c}</th>")).collect();
    let body: String = match rows {
        Rows::Named(rows) => rows.iter().map(named_row).collect(),
        Rows::Raw(rows) => rows.iter().map(raw_row).collect(),
    };
    format!(
        "  <table>\n    <thead>\n      <tr>{head}</tr>\n    </thead>\n    <tbody>\n{body}    </tbody>\n  </table>\n"
    )
}

fn named_row(state: &NormalizedState) -> String {
    row(|name| state.get(name))
}

fn raw_row(state: &RawStateVector) -> String {
    row(|name| state.field(name))
}

fn row<'a>(lookup: impl Fn(&str) -> Option<&'a Value>) -> String {
    let cells: String = TABLE_COLUMNS
        .iter()
        .map(|&name| {
            let value = lookup(name).unwrap_or(&NULL);
            if name == "last_contact" {
                if let Some(when) = value.as_i64().and_then(utc_label) {
                    return format!("<td title=\"{when}\">{}</td>", escape(&cell(value)));
                }
            }
            format!("<td>{}</td>", escape(&cell(value)))
        })
        .collect();
    format!("      <tr>{cells}</tr>\n")
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Text of one table cell. Null renders empty; strings render without quotes.
pub fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn utc_label(unix_secs: i64) -> Option<String> {
    chrono::DateTime::from_timestamp(unix_secs, 0)
        .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
}

/// `lamin=..&lamax=..&lomin=..&lomax=..&country=..` for the current query,
/// form-encoded the same way as the upstream request.
pub fn query_string(snap: &Snapshot) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(snap.query.query_pairs())
        .append_pair("country", &snap.country)
        .finish()
}

/// Escape text for HTML element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
