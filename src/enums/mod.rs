pub mod change_type;
pub mod commands;
pub mod model_error;
pub mod model_outcome;
pub mod risk_tier;
