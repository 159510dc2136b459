//! AWS SigV4 signing and URL presigning for S3-compatible object stores,
//! without a vendor SDK.
//!
//! The crate builds canonical representations of an HTTP request, derives
//! a signing key through the SigV4 HMAC chain, and either attaches the
//! signature as request headers or embeds it into query parameters to
//! produce a time-limited, shareable URL.
//!
//! ## Overview
//!
//! - [`S3Request`]: one outgoing request and its canonical forms.
//! - [`SignerV4`]: canonical request, string to sign, and signature.
//! - [`PresignerV4`]: query-string authentication on top of the signer.
//! - [`S3Storage`]: a small façade choosing addressing style, scheme, and
//!   auth mode for one bucket.
//!
//! Transport, retries, and response parsing are deliberately out of
//! scope; the output of this crate is a signed request or a URL for some
//! other layer to send.
//!
//! ## Example
//!
//! ```no_run
//! use s3_sigv4::{Credential, S3Storage};
//!
//! # fn example() -> s3_sigv4::Result<()> {
//! let storage = S3Storage::new(
//!     Credential::new("access_key_id", "secret_access_key"),
//!     "examplebucket",
//!     "us-east-1",
//! )?
//! .with_query_string_auth(true)
//! .with_url_expires(chrono::TimeDelta::try_hours(24).unwrap());
//!
//! // A presigned GET, valid for 24 hours.
//! let url = storage.url("test.txt")?;
//! # Ok(())
//! # }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;

mod constants;
pub use constants::{EMPTY_STRING_SHA256, UNSIGNED_PAYLOAD};

mod error;
pub use error::{Error, ErrorKind, Result};

mod encode;
pub use encode::uri_encode;

mod region;
pub use region::host_for_region;

mod credential;
pub use credential::Credential;

mod expiry;
pub use expiry::Expires;

mod request;
pub use request::S3Request;

mod signer;
pub use signer::SignerV4;

mod presign;
pub use presign::PresignerV4;

mod storage;
pub use storage::S3Storage;
