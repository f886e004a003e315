//! Spot extraction stages
//!
//! This module contains the logic turning a binarized raster into
//! dispatched glyphs:
//! - Run scanning (run-length encoding with optional length filter)
//! - Section building (junction-ratio policy over adjacent runs)
//! - Glyph assembly (union-find over the section arena)
//! - Region dispatch (abscissa-bounded registration)

/// Region dispatch of assembled glyphs
pub mod dispatch;
/// Glyph assembly from the section arena
pub mod glyphs;
/// Run-length scanning of binary rasters
pub mod runs;
/// Section building under the junction policy
pub mod sections;
