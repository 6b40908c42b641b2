//! Period Tracker - Menstrual cycle phase calculator and health journal
//!
//! Projects menstruation, follicular, ovulation and luteal phases forward
//! from the most recently recorded period, and keeps a daily log of
//! symptoms, moods and pain that is laid over the projected calendar.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
