//! # The Prompt Catalog
//!
//! A fixed, ordered set of policy-compliance checks offered against an
//! uploaded project brief. The catalog is defined at compile time, is never
//! mutated, and keeps its identity and order for the whole process lifetime.

use serde::Serialize;

use crate::prompts;

/// A static record pairing a policy-compliance question template with a
/// display title and an icon identifier for the host UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PromptCheck {
    pub icon: &'static str,
    pub prompt: &'static str,
    pub title: &'static str,
}

/// The four checks, in display order.
pub const CHECKS: [PromptCheck; 4] = [
    PromptCheck {
        icon: "AreaChart",
        prompt: prompts::AREA_EFFICIENCY_PROMPT,
        title: "Area Efficiency",
    },
    PromptCheck {
        icon: "BuildDefinition",
        prompt: prompts::BUILDING_HEIGHT_PROMPT,
        title: "Building Height",
    },
    PromptCheck {
        icon: "BlowingSnow",
        prompt: prompts::THERMAL_INSULATION_PROMPT,
        title: "Thermal Insulation",
    },
    PromptCheck {
        icon: "LightningBolt",
        prompt: prompts::THERMAL_COMFORT_PROMPT,
        title: "Thermal Comfort",
    },
];
