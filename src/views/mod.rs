//! Presentational view models — pure functions of props, no state.
//!
//! These produce serializable descriptions (labels, tones, css classes)
//! for whatever host renders them; none of them fetch or mutate anything.

pub mod alert;
pub mod badge;
pub mod nav;
pub mod score;
pub mod spinner;

pub use alert::{AlertKind, Notice};
pub use badge::{Badge, Tone};
pub use nav::{primary_nav, NavLink};
pub use score::{health_score_bar, urgency_bar, BarColor, ScoreBar};
pub use spinner::SpinnerSize;
