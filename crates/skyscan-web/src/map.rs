//! Map view: the filtered rows plotted with Leaflet.
//!
//! The page ships the raw positional vectors together with the schema's
//! field names; the client script looks positions up by name.

use crate::html::{escape, query_string, STYLE};
use crate::snapshot::Snapshot;
use serde::Serialize;
use skyscan_core::schema::STATE_FIELDS;

const MAP_SCRIPT: &str = include_str!("assets/map.js");

/// Map centre when the bounding box does not parse.
const FALLBACK_CENTER: (f64, f64) = (39.0, 35.5);

/// Render the map page for a snapshot built with the raw projection.
pub fn page(snap: &Snapshot) -> String {
    let (lat, lon) = center(snap);
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>OpenSky Map</title>
<link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css">
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
<style>
{style}</style>
</head>
<body>
  <header>
    <h1>OpenSky Map ({country})</h1>
    <a href="{bbox_url}" class="muted">API request &#8599;</a>
    <a href="/?{query}" class="muted">Table view</a>
    <button id="refresh" type="button">Refresh</button>
    <span class="muted"><span id="plotted">0</span> of <span id="total">{count}</span> flights plotted</span>
  </header>
  <div id="error" class="error" hidden></div>
  <div id="map"></div>
  <script>
const FIELDS = {fields};
const STATES = {states};
const INITIAL_ERROR = {error};
const CENTER = {{ lat: {lat}, lon: {lon} }};
{script}
  </script>
</body>
</html>
"#,
        style = STYLE,
        country = escape(&snap.country),
        bbox_url = escape(&snap.bbox_url),
        query = escape(&query_string(snap)),
        count = snap.count,
        fields = script_json(&STATE_FIELDS),
        states = script_json(&snap.states),
        error = script_json(&snap.error),
        lat = lat,
        lon = lon,
        script = MAP_SCRIPT,
    )
}

/// Midpoint of the bounding box, or [`FALLBACK_CENTER`] if any bound is not
/// a number.
fn center(snap: &Snapshot) -> (f64, f64) {
    let q = &snap.query;
    let parse = |s: &str| s.trim().parse::<f64>().ok().filter(|v| v.is_finite());
    match (
        parse(q.lamin.as_str()),
        parse(q.lamax.as_str()),
        parse(q.lomin.as_str()),
        parse(q.lomax.as_str()),
    ) {
        (Some(a), Some(b), Some(c), Some(d)) => ((a + b) / 2.0, (c + d) / 2.0),
        _ => FALLBACK_CENTER,
    }
}

/// JSON safe to inline in a `<script>` element.
fn script_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| "null".to_string())
        .replace("</", "<\\/")
}
