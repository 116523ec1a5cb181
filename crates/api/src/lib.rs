//! `stockcast-api` — HTTP serving layer over the forecasting engine.

pub mod app;
