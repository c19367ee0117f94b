//! normalization of the avoid_polygons GeoJSON payload into an ordered
//! sequence of simple polygons.

use geo_types::{Geometry, Polygon};
use geojson::GeoJson;
use serde_json::{json, Value};

/// how normalization failed, before the handler attaches error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvoidAreasFailure {
    /// payload could not be parsed as GeoJSON
    InvalidJson,
    /// payload parsed, but is not a polygon or multipolygon geometry
    NotAPolygon,
}

/// rebuilds the payload as a strict `{type, coordinates}` object so the
/// parser never sees foreign members
fn strict_geometry(value: &Value) -> Value {
    json!({
        "type": value.get("type").cloned().unwrap_or(Value::Null),
        "coordinates": value.get("coordinates").cloned().unwrap_or(Value::Null),
    })
}

/// normalizes a GeoJSON polygon or multipolygon payload. a multipolygon
/// expands to one entry per member, keeping member order; a polygon yields
/// a single entry.
pub fn parse_avoid_areas(value: &Value) -> Result<Vec<Polygon<f64>>, AvoidAreasFailure> {
    let geojson = GeoJson::from_json_value(strict_geometry(value))
        .map_err(|_| AvoidAreasFailure::InvalidJson)?;
    let geometry =
        Geometry::<f64>::try_from(geojson).map_err(|_| AvoidAreasFailure::NotAPolygon)?;
    match geometry {
        Geometry::Polygon(polygon) => Ok(vec![polygon]),
        Geometry::MultiPolygon(multi) => Ok(multi.0),
        _ => Err(AvoidAreasFailure::NotAPolygon),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    fn unit_square(origin_x: f64) -> Value {
        json!([[
            [origin_x, 0.0],
            [origin_x + 1.0, 0.0],
            [origin_x + 1.0, 1.0],
            [origin_x, 1.0],
            [origin_x, 0.0]
        ]])
    }

    #[test]
    fn test_polygon_yields_single_entry() {
        let payload = json!({ "type": "Polygon", "coordinates": unit_square(0.0) });
        let areas = parse_avoid_areas(&payload).expect("polygon payload should parse");
        assert_eq!(areas.len(), 1);
    }

    #[test]
    fn test_multipolygon_expands_in_member_order() {
        let payload = json!({
            "type": "MultiPolygon",
            "coordinates": [unit_square(0.0), unit_square(10.0), unit_square(20.0)]
        });
        let areas = parse_avoid_areas(&payload).expect("multipolygon payload should parse");
        assert_eq!(areas.len(), 3);
        let origins: Vec<f64> = areas
            .iter()
            .map(|polygon| polygon.exterior().0[0].x)
            .collect();
        assert_eq!(origins, vec![0.0, 10.0, 20.0]);
    }

    #[test]
    fn test_non_polygon_geometry_is_rejected() {
        let payload = json!({ "type": "Point", "coordinates": [1.0, 2.0] });
        assert_eq!(
            parse_avoid_areas(&payload),
            Err(AvoidAreasFailure::NotAPolygon)
        );
    }

    #[test]
    fn test_malformed_payload_is_invalid_json() {
        let payload = json!({ "type": "Polygon", "coordinates": "not coordinates" });
        assert_eq!(
            parse_avoid_areas(&payload),
            Err(AvoidAreasFailure::InvalidJson)
        );
        let missing = json!({ "avoid": "everything" });
        assert_eq!(
            parse_avoid_areas(&missing),
            Err(AvoidAreasFailure::InvalidJson)
        );
    }

    #[test]
    fn test_foreign_members_are_dropped_before_parsing() {
        let payload = json!({
            "type": "Polygon",
            "coordinates": unit_square(0.0),
            "properties": { "note": "ignored" }
        });
        let areas = parse_avoid_areas(&payload).expect("foreign members should not break parsing");
        assert_eq!(areas.len(), 1);
    }
}
