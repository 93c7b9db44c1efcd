pub mod base;
pub mod dailymotion;
