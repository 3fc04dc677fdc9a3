//! Core types and utilities shared by the `facefind` detector crates.
//!
//! This crate holds the plain data that every detector consumes or produces:
//! grayscale image buffers and views, the integral image, pixel rectangles,
//! detection records, and a small RGB raster for rendering annotations. It
//! does *not* depend on any concrete detector or on the `image` crate.

mod error;
mod image;
mod integral;
mod logger;
mod raster;
mod rect;

pub use error::CoreError;
pub use image::{sample_bilinear, sample_bilinear_u8, GrayImage, GrayImageView};
pub use integral::IntegralImage;
pub use raster::{Canvas, Rgb};
pub use rect::{DetectionKind, FaceDetection, PixelRect};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
