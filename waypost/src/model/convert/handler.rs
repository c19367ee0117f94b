use geo_types::Polygon;
use itertools::Itertools;
use serde_json::Value;
use uom::si::f64::{Length, Mass};
use uom::si::length::meter;
use uom::si::mass::ton;

use waypost_core::model::avoid_feature_flags;
use waypost_core::model::heavy_vehicle_type::HeavyVehicleType;
use waypost_core::model::load_characteristics;
use waypost_core::model::parameters::{
    CyclingParameters, ProfileParameters, ProfileParametersVariant, ProfileWeighting,
    VehicleParameters, WalkingParameters, WheelchairParameters,
};
use waypost_core::model::profile_type::{ProfileCategory, ProfileType};
use waypost_core::model::search_context::RouteSearchContext;

use crate::model::error_code::{self, ErrorCodeRegistry};
use crate::model::request::{AvoidFeature, Restrictions, RouteRequest, Weightings};
use crate::model::request_error::RequestError;

use super::avoid_areas::{parse_avoid_areas, AvoidAreasFailure};

/// translates routing requests into the validated, profile-specific
/// representation a search engine consumes. stateless apart from the
/// injected error code registry, so one handler serves concurrent requests.
pub struct RouteRequestHandler {
    error_codes: ErrorCodeRegistry,
}

impl RouteRequestHandler {
    pub fn new(error_codes: ErrorCodeRegistry) -> RouteRequestHandler {
        RouteRequestHandler { error_codes }
    }

    /// single conversion entry point: translate a whole request, or fail on
    /// the first parameter that does not fit the profile.
    pub fn search_context(
        &self,
        request: &RouteRequest,
    ) -> Result<RouteSearchContext, RequestError> {
        let profile = request.profile;
        let parameters = self.convert_parameters(request, profile)?;
        let mut vehicle_type = HeavyVehicleType::Unknown;
        let mut avoid_features = 0;
        let mut avoid_borders = None;
        let mut avoid_areas = Vec::new();
        if let Some(options) = &request.options {
            vehicle_type = self.convert_vehicle_type(options.vehicle_type, profile)?;
            if let Some(features) = &options.avoid_features {
                avoid_features = self.convert_feature_types(features, profile)?;
            }
            avoid_borders = options.avoid_borders;
            if let Some(geometry) = &options.avoid_polygons {
                avoid_areas = self.convert_avoid_areas(geometry)?;
            }
        }
        log::debug!(
            "translated request for profile {}: avoid flags {:#x}, {} avoid area(s)",
            profile,
            avoid_features,
            avoid_areas.len()
        );
        Ok(RouteSearchContext {
            profile,
            vehicle_type,
            parameters,
            avoid_features,
            avoid_borders,
            avoid_areas,
        })
    }

    /// builds the profile parameters object for a request. restrictions are
    /// validated against the profile's variant before conversion; weightings
    /// are layered on afterwards in fixed order.
    pub fn convert_parameters(
        &self,
        request: &RouteRequest,
        profile: ProfileType,
    ) -> Result<ProfileParameters, RequestError> {
        let mut params = ProfileParameters::default();
        let options = match &request.options {
            Some(options) => options,
            None => return Ok(params),
        };
        // a supplied vehicle type must fit the profile even when no
        // restrictions accompany it
        let vehicle_type = self.convert_vehicle_type(options.vehicle_type, profile)?;
        if let Some(profile_params) = &options.profile_params {
            if let Some(restrictions) = &profile_params.restrictions {
                self.validate_restrictions(restrictions, profile)?;
                params.variant = match profile.category() {
                    ProfileCategory::Cycling => {
                        ProfileParametersVariant::Cycling(convert_cycling_parameters(restrictions))
                    }
                    ProfileCategory::HeavyVehicle => ProfileParametersVariant::Vehicle(
                        convert_vehicle_parameters(restrictions, vehicle_type),
                    ),
                    ProfileCategory::Walking => {
                        ProfileParametersVariant::Walking(convert_walking_parameters(restrictions))
                    }
                    ProfileCategory::Wheelchair => ProfileParametersVariant::Wheelchair(
                        convert_wheelchair_parameters(restrictions),
                    ),
                    ProfileCategory::Driving => ProfileParametersVariant::Base,
                };
            }
            if let Some(weightings) = &profile_params.weightings {
                apply_weightings(weightings, &mut params);
            }
        }
        Ok(params)
    }

    /// resolves the optional vehicle type. absence maps to the unknown
    /// sentinel; a vehicle type on a profile outside the heavy vehicle
    /// category is an incompatibility, not a value error.
    pub fn convert_vehicle_type(
        &self,
        vehicle_type: Option<HeavyVehicleType>,
        profile: ProfileType,
    ) -> Result<HeavyVehicleType, RequestError> {
        match vehicle_type {
            None => Ok(HeavyVehicleType::Unknown),
            Some(vehicle_type) => {
                if profile.category() != ProfileCategory::HeavyVehicle {
                    return Err(RequestError::IncompatibleParameter {
                        code: self.error_codes.get(error_code::INVALID_PARAMETER_VALUE),
                        parameter: String::from("vehicle_type"),
                        value: vehicle_type.to_string(),
                        other_parameter: String::from("profile"),
                        other_value: profile.to_string(),
                    });
                }
                Ok(vehicle_type)
            }
        }
    }

    /// combines requested avoidance features into one bit flag set
    pub fn convert_feature_types(
        &self,
        avoid_features: &[AvoidFeature],
        profile: ProfileType,
    ) -> Result<u32, RequestError> {
        let mut flags = 0;
        for feature in avoid_features {
            flags |= self.feature_flag(feature.name(), profile)?;
        }
        Ok(flags)
    }

    /// looks up the flag for one feature name and checks it against the
    /// profile. a zero flag means the registry does not know the name, which
    /// must never pass as a valid result.
    pub fn feature_flag(&self, name: &str, profile: ProfileType) -> Result<u32, RequestError> {
        let flag = avoid_feature_flags::from_name(name);
        if flag == 0 {
            return Err(RequestError::UnknownParameterValue {
                code: self.error_codes.get(error_code::INVALID_PARAMETER_VALUE),
                parameter: String::from("avoid_features"),
                value: name.to_string(),
            });
        }
        if !avoid_feature_flags::is_valid(profile.category(), flag) {
            return Err(RequestError::IncompatibleParameter {
                code: self.error_codes.get(error_code::INVALID_PARAMETER_VALUE),
                parameter: String::from("avoid_features"),
                value: name.to_string(),
                other_parameter: String::from("profile"),
                other_value: profile.to_string(),
            });
        }
        Ok(flag)
    }

    /// normalizes the avoid_polygons payload into simple polygons
    pub fn convert_avoid_areas(&self, geometry: &Value) -> Result<Vec<Polygon<f64>>, RequestError> {
        parse_avoid_areas(geometry).map_err(|failure| match failure {
            AvoidAreasFailure::InvalidJson => RequestError::InvalidJsonFormat {
                code: self.error_codes.get(error_code::INVALID_JSON_FORMAT),
                parameter: String::from("avoid_polygons"),
            },
            AvoidAreasFailure::NotAPolygon => RequestError::InvalidParameterValue {
                code: self.error_codes.get(error_code::INVALID_PARAMETER_VALUE),
                parameter: String::from("avoid_polygons"),
            },
        })
    }

    /// rejects restriction fields outside the valid list of the variant for
    /// this profile, listing every offending name in one error
    fn validate_restrictions(
        &self,
        restrictions: &Restrictions,
        profile: ProfileType,
    ) -> Result<(), RequestError> {
        let valid = profile.category().valid_restrictions();
        let invalid: Vec<&str> = restrictions
            .set_fields()
            .into_iter()
            .filter(|field| !valid.contains(field))
            .collect();
        if invalid.is_empty() {
            return Ok(());
        }
        Err(RequestError::IncompatibleParameter {
            code: self.error_codes.get(error_code::UNKNOWN_PARAMETER),
            parameter: String::from("restrictions"),
            value: invalid.iter().join(", "),
            other_parameter: String::from("profile"),
            other_value: profile.to_string(),
        })
    }
}

fn convert_cycling_parameters(restrictions: &Restrictions) -> CyclingParameters {
    CyclingParameters {
        maximum_gradient: restrictions.gradient,
        maximum_trail_difficulty: restrictions.trail_difficulty,
    }
}

fn convert_walking_parameters(restrictions: &Restrictions) -> WalkingParameters {
    WalkingParameters {
        maximum_gradient: restrictions.gradient,
        maximum_trail_difficulty: restrictions.trail_difficulty,
    }
}

/// vehicle dimension and load fields apply only once the caller named a
/// concrete vehicle type; with an unknown vehicle they stay unset even when
/// the restriction set supplied them
fn convert_vehicle_parameters(
    restrictions: &Restrictions,
    vehicle_type: HeavyVehicleType,
) -> VehicleParameters {
    let mut params = VehicleParameters::default();
    if vehicle_type.is_unknown() {
        return params;
    }
    params.length = restrictions.length.map(metres);
    params.width = restrictions.width.map(metres);
    params.height = restrictions.height.map(metres);
    params.weight = restrictions.weight.map(tonnes);
    params.axle_load = restrictions.axle_load.map(tonnes);
    let mut load_flags = 0;
    if restrictions.hazardous_material == Some(true) {
        load_flags |= load_characteristics::HAZMAT;
    }
    if load_flags != 0 {
        params.load_characteristics = Some(load_flags);
    }
    params
}

fn convert_wheelchair_parameters(restrictions: &Restrictions) -> WheelchairParameters {
    WheelchairParameters {
        surface_type: restrictions.surface_type.map(|s| s.encoded_value()),
        track_type: restrictions.track_type.map(|t| t.encoded_value()),
        smoothness_type: restrictions.smoothness_type.map(|s| s.encoded_value()),
        maximum_sloped_kerb: restrictions.max_sloped_kerb.map(metres),
        maximum_incline: restrictions.max_incline,
        minimum_width: restrictions.min_width.map(metres),
    }
}

/// layers the requested soft preferences onto already-built parameters, in
/// green, quiet, steepness order. continuous factors carry two decimals;
/// discrete levels are plain integers.
fn apply_weightings(weightings: &Weightings, params: &mut ProfileParameters) {
    if let Some(green) = weightings.green {
        params.push_weighting(
            ProfileWeighting::new("green").with_parameter("factor", format!("{green:.2}")),
        );
    }
    if let Some(quiet) = weightings.quiet {
        params.push_weighting(
            ProfileWeighting::new("quiet").with_parameter("factor", format!("{quiet:.2}")),
        );
    }
    if let Some(level) = weightings.steepness_difficulty {
        params.push_weighting(
            ProfileWeighting::new("steepness_difficulty")
                .with_parameter("level", format!("{level}")),
        );
    }
}

fn metres(value: f64) -> Length {
    Length::new::<meter>(value)
}

fn tonnes(value: f64) -> Mass {
    Mass::new::<ton>(value)
}
