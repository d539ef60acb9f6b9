// Paco Gateway - Queue message transform gateway
// Copyright (c) 2026 Rui Calado
//
// Licensed under the MIT License.
// See LICENSE file for details.

//! # Paco Gateway - Queue message transform gateway
//!
//! This crate provides the orchestration layer over the [`paco`] codec
//! core: given queue messages (body plus attribute map), it applies the
//! configured compression/encoding/checksum transform on the outbound path
//! and validates and reverses it on the inbound path.
//!
//! ## Overview
//!
//! A [`TransformGateway`] is constructed once per client from an immutable
//! [`paco::CodecConfig`] and invoked from the transport's hook point: once
//! per outbound message (or batch entry) before transmission, once per
//! inbound message after receipt. The gateway never talks to the network
//! itself.
//!
//! ## Quick Start
//!
//! ```rust
//! use paco::{ChecksumAlgorithm, CodecConfig, CompressionAlgorithm, EncodingAlgorithm};
//! use paco_gateway::{QueueMessage, TransformGateway};
//!
//! let gateway = TransformGateway::new(CodecConfig::new(
//!     CompressionAlgorithm::Zstd,
//!     EncodingAlgorithm::None,
//!     ChecksumAlgorithm::Md5,
//! ));
//!
//! // Outbound: compress, encode, checksum, tag.
//! let outbound = gateway
//!     .transform_outbound(QueueMessage::new("{\"value\":42}"))
//!     .unwrap();
//! assert_eq!(outbound.attribute("x-codec-compression-alg"), Some("zstd"));
//! assert_eq!(outbound.attribute("x-codec-encoding-alg"), Some("base64"));
//!
//! // Inbound: validate, decode, verify, restore.
//! let inbound = gateway.restore_inbound(outbound).unwrap();
//! assert_eq!(inbound.body, "{\"value\":42}");
//! ```

mod gateway;
mod message;

// Public API
pub use gateway::TransformGateway;
pub use message::QueueMessage;
