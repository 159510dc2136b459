use std::collections::BTreeMap;

use http::HeaderMap;
use http::Method;

use crate::encode::uri_encode;

/// One outgoing request against an S3-compatible object store.
///
/// Holds the raw method, endpoint, bucket, key, headers, and query
/// parameters; every canonical form the signing algorithm needs is derived
/// on demand and never written back into the stored maps.
#[derive(Debug)]
pub struct S3Request {
    /// HTTP method.
    pub method: Method,
    /// Bare endpoint host of the object store, e.g. `s3.amazonaws.com`.
    pub endpoint: String,
    /// Bucket name.
    pub bucket: String,
    /// Object key. May be empty for bucket-level requests.
    pub key: String,
    /// Whether the derived URL uses `https`.
    pub use_https: bool,
    /// Path-style addressing puts the bucket in the path; virtual-hosted
    /// style puts it in the host.
    pub use_path_style: bool,
    /// Request headers. Keys are case-insensitive by construction.
    pub headers: HeaderMap,
    /// Query parameters.
    pub params: BTreeMap<String, String>,
}

impl S3Request {
    /// Create a request with the library defaults: https on, virtual-hosted
    /// addressing, no headers or parameters.
    pub fn new(
        method: Method,
        endpoint: impl Into<String>,
        bucket: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            bucket: bucket.into(),
            key: key.into(),
            use_https: true,
            use_path_style: false,
            headers: HeaderMap::new(),
            params: BTreeMap::new(),
        }
    }

    /// URL scheme.
    pub fn scheme(&self) -> &'static str {
        if self.use_https {
            "https"
        } else {
            "http"
        }
    }

    /// Host the request is addressed to. Virtual-hosted style prefixes the
    /// bucket onto the endpoint.
    pub fn host(&self) -> String {
        if self.use_path_style {
            self.endpoint.clone()
        } else {
            format!("{}.{}", self.bucket, self.endpoint)
        }
    }

    /// Percent-encoded request path, always starting with `/`. Slashes
    /// inside the key stay as segment separators.
    pub fn path(&self) -> String {
        let key = uri_encode(&self.key, false);
        if self.use_path_style {
            format!("/{}/{}", self.bucket, key)
        } else {
            format!("/{}", key)
        }
    }

    /// Canonical query string: both key and value percent-encoded with
    /// slashes escaped, entries sorted by encoded key then encoded value.
    ///
    /// Sorting happens after encoding; raw and encoded order can disagree
    /// for keys outside the unreserved set.
    pub fn canonical_query_string(&self) -> String {
        let mut pairs = self
            .params
            .iter()
            .map(|(k, v)| (uri_encode(k, true), uri_encode(v, true)))
            .collect::<Vec<_>>();
        pairs.sort();

        let mut s = String::with_capacity(16);
        for (idx, (k, v)) in pairs.into_iter().enumerate() {
            if idx != 0 {
                s.push('&');
            }
            s.push_str(&k);
            s.push('=');
            s.push_str(&v);
        }
        s
    }

    /// Canonical headers block: lowercased names, values trimmed with
    /// interior whitespace runs collapsed to one space, sorted by name,
    /// each line terminated by `\n` including the last.
    pub fn canonical_headers(&self) -> String {
        let mut headers = self
            .headers
            .iter()
            .map(|(k, v)| {
                (
                    k.as_str().to_lowercase(),
                    collapse_whitespace(&String::from_utf8_lossy(v.as_bytes())),
                )
            })
            .collect::<Vec<_>>();
        headers.sort();

        let mut s = String::with_capacity(64);
        for (k, v) in headers {
            s.push_str(&k);
            s.push(':');
            s.push_str(&v);
            s.push('\n');
        }
        s
    }

    /// Sorted, lowercased header names joined with `;`.
    pub fn signed_headers(&self) -> String {
        let mut names = self
            .headers
            .keys()
            .map(|k| k.as_str())
            .collect::<Vec<&str>>();
        names.sort_unstable();
        names.join(";")
    }

    /// Assemble the full URL, appending the canonically sorted query string
    /// when any parameters are present.
    pub fn url(&self) -> String {
        let mut s = format!("{}://{}{}", self.scheme(), self.host(), self.path());
        if !self.params.is_empty() {
            s.push('?');
            s.push_str(&self.canonical_query_string());
        }
        s
    }
}

// Header values are canonicalized by trimming and collapsing every
// whitespace run, tabs included, to a single space.
fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}
