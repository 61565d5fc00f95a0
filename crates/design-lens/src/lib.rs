//! Deterministic design critique engine.
//!
//! A critique scores an uploaded design against a selection of design principles. Tiers and
//! scores are a pure function of the payload length and the selected principles, so the same
//! upload with the same selection always lands in the same place. Feedback copy is picked
//! from a static bank and the whole run is sequenced by a [`session::DesignSession`].

pub mod config;
pub mod critique;
pub mod error;
pub mod session;
pub mod telemetry;
