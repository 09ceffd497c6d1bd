pub mod condition_tally;
pub mod correlation_matrix;
pub mod current_conditions;
pub mod daily_summary;
pub mod forecast_sample;
pub mod hourly_point;
pub mod label_zone;
