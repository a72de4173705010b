//! # Policy Check Prompt Templates
//!
//! The natural-language directives sent downstream alongside an extracted
//! project brief when querying it against the policy documents. These are
//! fixed, externally-authored strings; the pairing with display metadata
//! lives in [`crate::catalog`].

/// Asks for the usable and lettable floor areas and whether they meet the
/// design efficiency requirements.
pub const AREA_EFFICIENCY_PROMPT: &str = r#"State the usable floor area (UFA) and the lettable floor area (LFA) from the project brief provided below. If not mentioned, please state the same.
Does this meet the design efficiency requirements for floor area as stated in the policies?"#;

/// Checks the brief's floor-height dimensions against the policies.
pub const BUILDING_HEIGHT_PROMPT: &str = r#"Does the project brief provided below have dimensions for the floor height?
If not, please state that they are not available in the brief.
If they are available, do they meet the policies' requirements?
Please state the differences in floor height."#;

/// Checks the brief against the thermal insulation requirements, per
/// category.
pub const THERMAL_INSULATION_PROMPT: &str = r#"Does the project brief provided below meet the Thermal Insulation requirements stated in the policies?
Please give an overview per category.
Please state if a category is not available in the provided document or if there are categories in the provided document that are not in the policies."#;

/// Checks the brief against the general thermal comfort requirements for
/// winter and summer.
pub const THERMAL_COMFORT_PROMPT: &str = r#"Does the provided project brief meet the General Thermal Comfort requirements as stated in the policies.
Please give an overview per category for Winter and Summer.
Please state if the value is higher or lower than the policies.
Please state if a category is not available in the provided document or if there are categories in the provided document that are not in the policies."#;
