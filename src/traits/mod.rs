pub mod model_runtime;
pub mod source_control;
