//! Statue masses and recorded figure values used throughout the paper.

use serde::Serialize;

/// A named statue and its estimated mass.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MoaiSpecimen {
    /// Display name.
    pub name: &'static str,
    /// Estimated mass in metric tons.
    pub mass_tons: f64,
    /// Whether the statue is known to have been moved from the quarry.
    pub transported: bool,
}

impl MoaiSpecimen {
    /// Create a catalog entry.
    #[must_use]
    pub const fn new(name: &'static str, mass_tons: f64, transported: bool) -> Self {
        Self {
            name,
            mass_tons,
            transported,
        }
    }
}

/// Statues discussed in the paper, from smallest to largest.
pub const DOCUMENTED_MOAI: [MoaiSpecimen; 5] = [
    MoaiSpecimen::new("Experimental Replica", 4.3, true),
    MoaiSpecimen::new("Ahu Akivi (typical)", 18.0, true),
    MoaiSpecimen::new("Paro", 86.0, true),
    MoaiSpecimen::new("Ahu Tongariki (largest transported)", 90.0, true),
    MoaiSpecimen::new("Te Tokanga (quarry, never moved)", 260.0, false),
];

/// Heaviest statue observed to have been transported, in tons.
pub const OBSERVED_TRANSPORT_LIMIT_TONS: f64 = 90.0;

/// Typical statue of a find-site category and the rope team it needed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TransportScenario {
    /// Find-site category.
    pub category: &'static str,
    /// Typical mass in metric tons.
    pub mass_tons: f64,
    /// Estimated people per rope team.
    pub team_size: u32,
}

/// Find-site categories compared in the transport scenario figure.
pub const TRANSPORT_SCENARIOS: [TransportScenario; 4] = [
    TransportScenario {
        category: "Quarry (incomplete)",
        mass_tons: 15.0,
        team_size: 10,
    },
    TransportScenario {
        category: "Road (abandoned)",
        mass_tons: 12.0,
        team_size: 8,
    },
    TransportScenario {
        category: "Platform (transported)",
        mass_tons: 14.0,
        team_size: 10,
    },
    TransportScenario {
        category: "Paro (transported)",
        mass_tons: 86.0,
        team_size: 60,
    },
];

/// Masses sampled by the required-diameter panel, in tons.
pub const REQUIREMENT_MASSES: [f64; 7] = [4.0, 10.0, 20.0, 40.0, 60.0, 80.0, 86.0];

/// Diameters in millimetres marked on the breaking-load panel.
pub const MARKED_DIAMETERS: [f64; 3] = [10.0, 20.0, 45.0];

/// Working loads in kilonewtons drawn as requirements on the breaking-load panel.
pub const REFERENCE_WORKING_LOADS: [f64; 2] = [4.0, 80.0];

/// A diameter written into a figure by hand rather than computed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RecordedDiameter {
    /// Statue mass in metric tons.
    pub mass_tons: f64,
    /// Diameter in millimetres as it appeared in the figure.
    pub diameter_mm: f64,
}

impl RecordedDiameter {
    /// Create a recorded value.
    #[must_use]
    pub const fn new(mass_tons: f64, diameter_mm: f64) -> Self {
        Self {
            mass_tons,
            diameter_mm,
        }
    }
}

/// Diameters hand-picked for the first grip-limit figure.
pub const HISTORICAL_GRIP_FIGURE: [RecordedDiameter; 4] = [
    RecordedDiameter::new(4.0, 10.0),
    RecordedDiameter::new(15.0, 20.0),
    RecordedDiameter::new(80.0, 45.0),
    RecordedDiameter::new(86.0, 40.0),
];

/// Diameters tabulated in the rope production figure, computed without packing.
pub const HISTORICAL_PRODUCTION_TABLE: [RecordedDiameter; 5] = [
    RecordedDiameter::new(4.3, 8.9),
    RecordedDiameter::new(18.0, 18.3),
    RecordedDiameter::new(40.0, 27.2),
    RecordedDiameter::new(60.0, 33.3),
    RecordedDiameter::new(86.0, 39.9),
];

/// Days of harvesting and processing per kilogram of fibre.
pub const HARVESTING_DAYS_PER_KG: f64 = 0.5;
/// Days the fibre spends retting.
pub const RETTING_DAYS: f64 = 38.0;
/// Days of drying and preparation before construction.
pub const PREPARATION_DAYS: f64 = 3.0;
/// Rope sets worn out over one transport.
pub const TRANSPORT_ROPE_SETS: f64 = 4.0;
/// Transport distance the rope sets are budgeted for, in kilometres.
pub const TRANSPORT_DISTANCE_KM: f64 = 6.0;
/// Person-days of labour the island community could supply per day.
pub const COMMUNITY_DAILY_CAPACITY: f64 = 700.0;

/// Time and labour recorded for producing the ropes of one statue class.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RopeProduction {
    /// Statue class.
    pub label: &'static str,
    /// Statue mass in metric tons.
    pub mass_tons: f64,
    /// Rope diameter in millimetres, computed without packing.
    pub diameter_mm: f64,
    /// Fibre needed for one rope set in kilograms.
    pub fibre_kg: f64,
    /// Days spent twisting the rope itself.
    pub construction_days: f64,
    /// Recorded production time for one rope set in days.
    pub production_days: f64,
    /// Recorded labour for one rope set in person-days.
    pub person_days_per_set: f64,
    /// Recorded labour for every set a transport wears out, in person-days.
    pub person_days_per_transport: f64,
}

impl RopeProduction {
    /// Days of each stage: harvesting, retting, preparation and construction.
    #[must_use]
    pub fn stage_days(&self) -> [f64; 4] {
        [
            self.fibre_kg * HARVESTING_DAYS_PER_KG,
            RETTING_DAYS,
            PREPARATION_DAYS,
            self.construction_days,
        ]
    }

    /// Sum of [`RopeProduction::stage_days`].
    #[must_use]
    pub fn stage_total(&self) -> f64 {
        self.stage_days().iter().sum()
    }

    /// Transport labour as a fraction of one day of community capacity.
    #[must_use]
    pub fn share_of_daily_capacity(&self) -> f64 {
        self.person_days_per_transport / COMMUNITY_DAILY_CAPACITY
    }
}

/// Rope production investment per statue class, smallest to largest.
pub const ROPE_PRODUCTION: [RopeProduction; 5] = [
    RopeProduction {
        label: "Experimental Replica",
        mass_tons: 4.3,
        diameter_mm: 8.9,
        fibre_kg: 3.4,
        construction_days: 27.0,
        production_days: 70.0,
        person_days_per_set: 78.0,
        person_days_per_transport: 311.0,
    },
    RopeProduction {
        label: "Typical Platform Moai",
        mass_tons: 18.0,
        diameter_mm: 18.3,
        fibre_kg: 14.4,
        construction_days: 27.0,
        production_days: 75.0,
        person_days_per_set: 107.0,
        person_days_per_transport: 427.0,
    },
    RopeProduction {
        label: "Large Platform Moai",
        mass_tons: 40.0,
        diameter_mm: 27.2,
        fibre_kg: 32.0,
        construction_days: 29.0,
        production_days: 84.0,
        person_days_per_set: 145.0,
        person_days_per_transport: 581.0,
    },
    RopeProduction {
        label: "Very Large (Near Limit)",
        mass_tons: 60.0,
        diameter_mm: 33.3,
        fibre_kg: 48.0,
        construction_days: 32.0,
        production_days: 92.0,
        person_days_per_set: 178.0,
        person_days_per_transport: 710.0,
    },
    RopeProduction {
        label: "Paro (Largest Transported)",
        mass_tons: 86.0,
        diameter_mm: 39.9,
        fibre_kg: 68.9,
        construction_days: 41.0,
        production_days: 102.0,
        person_days_per_set: 218.0,
        person_days_per_transport: 871.0,
    },
];

/// Paro's mass before and after the revised estimate, in tons.
pub const PARO_MASS_REVISION: (f64, f64) = (86.0, 82.0);

/// Masses around Paro used to show sensitivity to the revision, in tons.
pub const PARO_NEIGHBOURHOOD: [f64; 5] = [80.0, 82.0, 85.0, 86.0, 90.0];
