pub mod correlation;
pub mod forecast;
