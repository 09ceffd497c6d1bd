pub mod cards;
pub mod charts;
pub mod error;
pub mod export;
pub mod page;
pub mod theme;
