//! Services used by the request handlers

pub mod uploads;
