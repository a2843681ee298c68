//! Literal documents served by the informational pages.
//!
//! Everything here is built from `'static` strings on each request.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Ordered mapping from operation name to path template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointMap(&'static [(&'static str, &'static str)]);

impl EndpointMap {
    pub fn entries(&self) -> &'static [(&'static str, &'static str)] {
        self.0
    }
}

impl Serialize for EndpointMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, path) in self.0 {
            map.serialize_entry(name, path)?;
        }
        map.end()
    }
}

/// Operations of the authentication API. Path segments starting with `:`
/// are placeholders filled in by the caller.
const AUTH_ENDPOINTS: &[(&str, &str)] = &[
    ("signup", "/api/auth/signup"),
    ("signin", "/api/auth/signin"),
    ("profile", "/api/auth/profile"),
    ("verify-email", "/api/auth/verify-email/:token"),
    ("resend-verification", "/api/auth/resend-verification"),
    ("forgot-password", "/api/auth/forgot-password"),
    ("reset-password", "/api/auth/reset-password/:token"),
    ("test-email", "/api/auth/test-email"),
];

/// API metadata record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub status: &'static str,
}

impl ApiInfo {
    pub fn current() -> Self {
        Self {
            name: "Authentication API",
            version: "1.0.0",
            status: "active",
        }
    }
}

/// Base path of each top-level section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndpointIndex {
    pub api: &'static str,
    pub auth: &'static str,
}

impl Default for EndpointIndex {
    fn default() -> Self {
        Self {
            api: "/api",
            auth: "/api/auth",
        }
    }
}

/// JSON body of the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Landing {
    pub message: &'static str,
    pub api_status: &'static str,
    pub endpoints: EndpointIndex,
}

impl Default for Landing {
    fn default() -> Self {
        Self {
            message: "Authentication API Frontend",
            api_status: "running",
            endpoints: EndpointIndex::default(),
        }
    }
}

/// JSON body of the auth page: the endpoint map under an `endpoints` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AuthIndex {
    pub endpoints: EndpointMap,
}

impl Default for AuthIndex {
    fn default() -> Self {
        Self {
            endpoints: EndpointMap(AUTH_ENDPOINTS),
        }
    }
}
