//! Rotating gardening tips.

/// General gardening tips shown alongside the planner.
pub const GARDENING_TIPS: [&str; 5] = [
    "Water your garden early in the morning to reduce evaporation.",
    "Companion planting can help deter pests naturally.",
    "Rotating crops each season helps prevent disease and pest issues.",
    "Mulch helps retain moisture and suppresses weeds.",
    "Consider your garden's sun exposure when choosing planting locations.",
];

/// Pick a tip for a day number, cycling through the list.
pub fn tip_for_day(day: u32) -> &'static str {
    GARDENING_TIPS[day as usize % GARDENING_TIPS.len()]
}
