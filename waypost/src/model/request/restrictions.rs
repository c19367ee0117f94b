use serde::{Deserialize, Serialize};

use waypost_core::model::wheelchair_types::{SmoothnessType, SurfaceType, TrackType};

/// hard constraints supplied with a request. each field is optional and a
/// present field must be legal for the resolved profile's variant; the
/// validator decides, not this type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Restrictions {
    /// steepest gradient to use, in percent (cycling, walking)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient: Option<i32>,
    /// most difficult trail rating to use (cycling, walking)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trail_difficulty: Option<i32>,
    /// vehicle length in metres (heavy vehicle)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    /// vehicle width in metres (heavy vehicle)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// vehicle height in metres (heavy vehicle)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// gross weight in tonnes (heavy vehicle)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// weight per axle in tonnes (heavy vehicle)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axle_load: Option<f64>,
    /// vehicle carries hazardous materials (heavy vehicle)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hazardous_material: Option<bool>,
    /// worst surface to use (wheelchair)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surface_type: Option<SurfaceType>,
    /// worst track grade to use (wheelchair)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track_type: Option<TrackType>,
    /// worst smoothness to use (wheelchair)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smoothness_type: Option<SmoothnessType>,
    /// highest sloped kerb to mount, in metres (wheelchair)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_sloped_kerb: Option<f64>,
    /// steepest incline to use, in percent (wheelchair)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_incline: Option<i32>,
    /// narrowest passage to use, in metres (wheelchair)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_width: Option<f64>,
}

impl Restrictions {
    /// names of the fields present on this restriction set, in declaration
    /// order
    pub fn set_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.gradient.is_some() {
            fields.push("gradient");
        }
        if self.trail_difficulty.is_some() {
            fields.push("trail_difficulty");
        }
        if self.length.is_some() {
            fields.push("length");
        }
        if self.width.is_some() {
            fields.push("width");
        }
        if self.height.is_some() {
            fields.push("height");
        }
        if self.weight.is_some() {
            fields.push("weight");
        }
        if self.axle_load.is_some() {
            fields.push("axle_load");
        }
        if self.hazardous_material.is_some() {
            fields.push("hazardous_material");
        }
        if self.surface_type.is_some() {
            fields.push("surface_type");
        }
        if self.track_type.is_some() {
            fields.push("track_type");
        }
        if self.smoothness_type.is_some() {
            fields.push("smoothness_type");
        }
        if self.max_sloped_kerb.is_some() {
            fields.push("max_sloped_kerb");
        }
        if self.max_incline.is_some() {
            fields.push("max_incline");
        }
        if self.min_width.is_some() {
            fields.push("min_width");
        }
        fields
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_fields_lists_only_present_fields() {
        let restrictions: Restrictions = serde_json::from_value(json!({
            "gradient": 6,
            "weight": 28.0,
            "min_width": 0.9
        }))
        .expect("restrictions should deserialize");
        assert_eq!(
            restrictions.set_fields(),
            vec!["gradient", "weight", "min_width"]
        );
    }

    #[test]
    fn test_empty_restrictions_have_no_set_fields() {
        let restrictions = Restrictions::default();
        assert!(restrictions.set_fields().is_empty());
    }
}
