//! # qrbrand
//!
//! A Rust library for rendering styled, scannable QR codes with brand
//! logo overlay and shape masking.
//!
//! `qrbrand` turns a payload plus styling choices (foreground and
//! background colors, a size tier, a logo toggle, an outer shape) into
//! a final raster image. The pipeline classifies the payload by its
//! URL host, encodes it as a QR symbol, optionally fetches and
//! composites a brand logo centered on the symbol, and optionally
//! clips the result to a circle.
//!
//! ## Features
//!
//! - Encode any text or URL payload; the symbol version grows to fit.
//! - Style with hex foreground/background colors; malformed specs fall
//!   back to black rather than failing the render.
//! - Three size tiers (small, medium, large) controlling module pixel
//!   size, border width, and logo size.
//! - Best-effort logo overlay fetched by payload classification
//!   (YouTube, Spotify, Instagram, TikTok, Web); any fetch or decode
//!   problem silently skips the overlay.
//! - Square or circular output shapes.
//! - PNG and base64 data-URL serialization helpers.
//!
//! ## Installation
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! qrbrand = "0.1" # Replace with the latest version
//! ```
//!
//! ## Example
//!
//! Render a styled QR code for a URL:
//!
//! ```rust,no_run
//! use qrbrand::pipeline::{render, RenderRequest};
//!
//! let mut request = RenderRequest::new("https://youtube.com/watch?v=abc");
//! request.foreground = "#43e97b".to_string();
//! request.include_logo = false;
//!
//! let outcome = render(&request).unwrap();
//! println!("classified as {}", outcome.label);
//! outcome.image.save("output/qr.png").unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`pipeline`]: The render pipeline and its request/outcome types.
//! - [`color`]: Hex color resolution with defined fallbacks.
//! - [`profile`]: Size tiers, shape styles, and rendering profiles.
//! - [`classify`]: Payload classification and logo asset selection.
//! - [`encode`]: QR symbol encoding and rasterisation.
//! - [`logo`]: Remote logo retrieval and compositing.
//! - [`shape`]: Circular output masking.

#![forbid(unsafe_code)]

pub mod classify;
pub mod color;
pub mod encode;
pub mod logo;
pub mod pipeline;
pub mod profile;
pub mod shape;
