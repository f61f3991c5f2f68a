//! # deborder
//!
//! Batch removal of uniform near-white borders from images. Point it at
//! files or folders; every image with a meaningful margin gets a cropped
//! copy written next to it (`photo.png` → `photo_cropped.png`), everything
//! else is reported as skipped or failed.
//!
//! # Architecture: One Pipeline, Three Outcomes
//!
//! Every input runs through the same five stages and lands in exactly one
//! of three outcome classes:
//!
//! ```text
//! decode → detect → decide → crop → encode
//!                      │
//!                      ├── Success  (cropped copy written)
//!                      ├── Skipped  (no content / borders too narrow)
//!                      └── Error    (decode, encode, or internal fault)
//! ```
//!
//! Items are independent: a failure is local to its image, the queue never
//! halts, and results always come back in submission order even though
//! processing is parallel.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`inputs`] | Expands file/folder arguments into an ordered image list |
//! | [`codec`] | Decode/encode via the `image` crate, format from extension |
//! | [`detect`] | `BorderDetector` trait + the contour and scan strategies |
//! | [`policy`] | Crop-or-skip decision from a detection outcome |
//! | [`crop`] | Sub-grid extraction |
//! | [`process`] | Batch driver: per-item isolation, rayon parallelism |
//! | [`naming`] | `name.ext` → `name_cropped.ext` derivation |
//! | [`geometry`] | `Rect` and `BorderWidths` arithmetic |
//! | [`config`] | `config.toml` loading and validation |
//! | [`types`] | `ProcessResult` and stable reason codes |
//! | [`output`] | CLI output formatting of batch results |
//!
//! # Design Decisions
//!
//! ## Two Detectors, Not One
//!
//! The contour strategy (adaptive binarization + morphological closing +
//! outer contours) and the scan strategy (row/column scans inward from each
//! edge) are genuinely different algorithms with different failure
//! semantics, not revisions of one code path. They stay behind one trait so
//! either can be selected per run and both can be tested independently. The
//! scan strategy is the conservative choice: it only recognizes margins
//! that are uniformly near-white. The contour strategy also handles uneven
//! lighting and non-white backgrounds, at the cost of a statistical step.
//!
//! ## Determinism
//!
//! Identical input bytes always produce an identical crop rectangle. The
//! contour strategy's largest-region selection breaks ties by raster
//! traversal order, and nothing in the pipeline depends on thread timing:
//! parallelism only reorders work, never results.
//!
//! ## Stable Reason Codes
//!
//! Skip and error reasons are machine-readable codes (`no-content`,
//! `decode-failure`, ...). Wording, localization, and retry prompts belong
//! to whatever frontend drives the library.
//!
//! ## Durable Writes
//!
//! Encoded output goes to a temp file in the destination directory and is
//! renamed into place, so an interrupted run never leaves a half-written
//! image that a later run would then fail to decode.

pub mod codec;
pub mod config;
pub mod crop;
pub mod detect;
pub mod geometry;
pub mod inputs;
pub mod naming;
pub mod output;
pub mod policy;
pub mod process;
pub mod types;
