//! Positional schema of an OpenSky state vector.
//!
//! The upstream API delivers each aircraft as an array whose positions carry
//! fixed meanings. This module is the only place that knows those positions;
//! everything else addresses fields by name.

use phf::phf_map;

/// Number of fields in a complete state vector.
pub const SCHEMA_LEN: usize = 17;

/// Canonical field names, in upstream position order.
pub const STATE_FIELDS: [&str; SCHEMA_LEN] = [
    "icao24",
    "callsign",
    "origin_country",
    "time_position",
    "last_contact",
    "longitude",
    "latitude",
    "baro_altitude",
    "on_ground",
    "velocity",
    "true_track",
    "vertical_rate",
    "sensors",
    "geo_altitude",
    "squawk",
    "spi",
    "position_source",
];

pub const ORIGIN_COUNTRY: &str = "origin_country";

static FIELD_INDEX: phf::Map<&'static str, usize> = phf_map! {
    "icao24" => 0,
    "callsign" => 1,
    "origin_country" => 2,
    "time_position" => 3,
    "last_contact" => 4,
    "longitude" => 5,
    "latitude" => 6,
    "baro_altitude" => 7,
    "on_ground" => 8,
    "velocity" => 9,
    "true_track" => 10,
    "vertical_rate" => 11,
    "sensors" => 12,
    "geo_altitude" => 13,
    "squawk" => 14,
    "spi" => 15,
    "position_source" => 16,
};

/// Position of `name` in a raw state vector, or `None` for unknown names.
pub fn field_index(name: &str) -> Option<usize> {
    FIELD_INDEX.get(name).copied()
}
