//! Client-side core of the subtitle-a-thon platform: the language-selection
//! pipeline (locale catalog → source resolver → eligibility filter →
//! reservation gate) and the thin client for the backend that owns all real
//! state (events, reservations, submissions, users).

pub mod backend;
pub mod catalog;
pub mod config;
pub mod eligibility;
pub mod item;
pub mod policy;
pub mod reservation;
pub mod resolver;
pub mod selector;
pub mod session;
