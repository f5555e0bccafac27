//! This module defines the error types used by the `gridrace-track` crate.

#![warn(missing_docs)]

/// Error type for track operations.
///
/// This enum encapsulates the errors that can occur while building the track
/// grid. Cell access outside the grid is a programmer-contract violation and
/// panics instead of surfacing here.
#[derive(Debug, PartialEq)]
pub enum TrackError {
    /// Error for invalid grid dimensions.
    /// This variant is returned when a grid is created with size zero.
    InvalidDimensions(&'static str),
    /// Error for a value vector that does not match the grid dimensions.
    /// This variant is returned when `size * size` values are expected but a
    /// different number is supplied.
    ValueCountMismatch(&'static str),
}

impl core::fmt::Display for TrackError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TrackError::InvalidDimensions(msg) => write!(f, "Invalid grid dimensions: {}", msg),
            TrackError::ValueCountMismatch(msg) => write!(f, "Invalid grid values: {}", msg),
        }
    }
}

impl core::error::Error for TrackError {}
