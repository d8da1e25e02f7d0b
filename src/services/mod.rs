pub mod gemini_service;
pub mod generation_service;
pub mod intent;
pub mod quiz_service;
pub mod sanitizer;
pub mod schedule;
