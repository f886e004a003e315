//! Raster-level image processing
//!
//! This module provides the pixel operations feeding spot extraction:
//! - Smoothing filters (median, gaussian)
//! - Flat-disk morphology (structuring elements, closing)
//! - Binarization (global threshold)

pub mod binarization;
pub mod filters;
pub mod morphology;
