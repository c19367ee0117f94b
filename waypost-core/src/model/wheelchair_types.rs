//! surface, track and smoothness classifications relevant to wheelchair
//! routing, with the stable integer encodings the graph encoder stores.
//! encoded values are 1-based; 0 is reserved for "unknown".

use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceType {
    Paved,
    Asphalt,
    Concrete,
    PavingStones,
    Metal,
    Wood,
    CompactedGravel,
    FineGravel,
    Gravel,
    Pebblestone,
    Ground,
    Unpaved,
    Grass,
    Sand,
}

impl SurfaceType {
    pub fn encoded_value(&self) -> i32 {
        match self {
            SurfaceType::Paved => 1,
            SurfaceType::Asphalt => 2,
            SurfaceType::Concrete => 3,
            SurfaceType::PavingStones => 4,
            SurfaceType::Metal => 5,
            SurfaceType::Wood => 6,
            SurfaceType::CompactedGravel => 7,
            SurfaceType::FineGravel => 8,
            SurfaceType::Gravel => 9,
            SurfaceType::Pebblestone => 10,
            SurfaceType::Ground => 11,
            SurfaceType::Unpaved => 12,
            SurfaceType::Grass => 13,
            SurfaceType::Sand => 14,
        }
    }
}

/// OSM tracktype grades, firm to soft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackType {
    Grade1,
    Grade2,
    Grade3,
    Grade4,
    Grade5,
}

impl TrackType {
    pub fn encoded_value(&self) -> i32 {
        match self {
            TrackType::Grade1 => 1,
            TrackType::Grade2 => 2,
            TrackType::Grade3 => 3,
            TrackType::Grade4 => 4,
            TrackType::Grade5 => 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmoothnessType {
    Excellent,
    Good,
    Intermediate,
    Bad,
    VeryBad,
    Horrible,
    VeryHorrible,
    Impassable,
}

impl SmoothnessType {
    pub fn encoded_value(&self) -> i32 {
        match self {
            SmoothnessType::Excellent => 1,
            SmoothnessType::Good => 2,
            SmoothnessType::Intermediate => 3,
            SmoothnessType::Bad => 4,
            SmoothnessType::VeryBad => 5,
            SmoothnessType::Horrible => 6,
            SmoothnessType::VeryHorrible => 7,
            SmoothnessType::Impassable => 8,
        }
    }
}

impl Display for SurfaceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SurfaceType::Paved => "paved",
            SurfaceType::Asphalt => "asphalt",
            SurfaceType::Concrete => "concrete",
            SurfaceType::PavingStones => "paving_stones",
            SurfaceType::Metal => "metal",
            SurfaceType::Wood => "wood",
            SurfaceType::CompactedGravel => "compacted_gravel",
            SurfaceType::FineGravel => "fine_gravel",
            SurfaceType::Gravel => "gravel",
            SurfaceType::Pebblestone => "pebblestone",
            SurfaceType::Ground => "ground",
            SurfaceType::Unpaved => "unpaved",
            SurfaceType::Grass => "grass",
            SurfaceType::Sand => "sand",
        };
        write!(f, "{name}")
    }
}

impl Display for TrackType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrackType::Grade1 => write!(f, "grade1"),
            TrackType::Grade2 => write!(f, "grade2"),
            TrackType::Grade3 => write!(f, "grade3"),
            TrackType::Grade4 => write!(f, "grade4"),
            TrackType::Grade5 => write!(f, "grade5"),
        }
    }
}

impl Display for SmoothnessType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SmoothnessType::Excellent => "excellent",
            SmoothnessType::Good => "good",
            SmoothnessType::Intermediate => "intermediate",
            SmoothnessType::Bad => "bad",
            SmoothnessType::VeryBad => "very_bad",
            SmoothnessType::Horrible => "horrible",
            SmoothnessType::VeryHorrible => "very_horrible",
            SmoothnessType::Impassable => "impassable",
        };
        write!(f, "{name}")
    }
}
