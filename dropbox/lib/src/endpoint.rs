//! Route definition with type-state builder pattern.
//!
//! An [`Endpoint`] describes one Dropbox route: its identifier, HTTP method,
//! path, the [`ResponseFormat`] of a successful reply and the error taxonomy
//! `E` of a failed one. The [`EndpointBuilder`] uses a type-state pattern so
//! that every required field is set at compile time.

use std::marker::PhantomData;

use crate::method::RestMethod;
use crate::response::ResponseFormat;

/// Marker types for builder state tracking.
pub mod builder_state {
    /// Marker for a field that has not been set.
    pub struct Missing;
    /// Marker for a field that has been set.
    pub struct Present;
}

use builder_state::{Missing, Present};

/// A Dropbox route definition.
///
/// ## Type Parameters
///
/// - `F`: The [`ResponseFormat`] for successful responses.
/// - `E`: The route error type decoded from 409 responses, a
///   [`TaggedError`](crate::taxonomy::TaggedError).
///
/// ## Examples
///
/// ```rust
/// use dropbox_api::{Endpoint, RestMethod};
/// use dropbox_api::response::JsonFormat;
/// use dropbox_api::taxonomy::CopyReferenceGetError;
///
/// let endpoint: Endpoint<JsonFormat<serde_json::Value>, CopyReferenceGetError> =
///     Endpoint::builder()
///         .id("copy_reference_get")
///         .method(RestMethod::Post)
///         .path("2/files/copy_reference/get")
///         .build();
///
/// assert_eq!(endpoint.path(), "2/files/copy_reference/get");
/// ```
#[derive(Debug)]
pub struct Endpoint<F: ResponseFormat, E> {
    /// Identifier used in logs and permission errors.
    id: String,
    /// HTTP method for this route.
    method: RestMethod,
    /// Path relative to the API base URL.
    path: String,
    /// Optional description of what this route does.
    description: Option<String>,
    _types: PhantomData<(F, E)>,
}

// PhantomData is always Clone; derive would demand F: Clone and E: Clone.
impl<F: ResponseFormat, E> Clone for Endpoint<F, E> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            method: self.method,
            path: self.path.clone(),
            description: self.description.clone(),
            _types: PhantomData,
        }
    }
}

impl<F: ResponseFormat, E> Endpoint<F, E> {
    /// Creates a new endpoint builder.
    pub fn builder() -> EndpointBuilder<Missing, Missing, Missing, F, E> {
        EndpointBuilder::new()
    }

    /// Returns the route identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the HTTP method for this route.
    pub fn method(&self) -> RestMethod {
        self.method
    }

    /// Returns the path relative to the API base URL.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the optional description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Joins this route's path onto `base_url`.
    pub fn full_url(&self, base_url: &url::Url) -> Result<url::Url, url::ParseError> {
        base_url.join(&self.path)
    }
}

/// Type-state builder for [`Endpoint`].
///
/// ## Type Parameters
///
/// - `Id`: State of the ID field (`Missing` or `Present`).
/// - `Method`: State of the method field (`Missing` or `Present`).
/// - `Path`: State of the path field (`Missing` or `Present`).
/// - `F`: The response format type.
/// - `E`: The route error type.
pub struct EndpointBuilder<Id, Method, Path, F: ResponseFormat, E> {
    id: Option<String>,
    method: Option<RestMethod>,
    path: Option<String>,
    description: Option<String>,
    _phantom: PhantomData<(Id, Method, Path, F, E)>,
}

impl<F: ResponseFormat, E> EndpointBuilder<Missing, Missing, Missing, F, E> {
    /// Creates a new endpoint builder with no fields set.
    pub fn new() -> Self {
        Self {
            id: None,
            method: None,
            path: None,
            description: None,
            _phantom: PhantomData,
        }
    }
}

impl<F: ResponseFormat, E> Default for EndpointBuilder<Missing, Missing, Missing, F, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M, P, F: ResponseFormat, E> EndpointBuilder<Missing, M, P, F, E> {
    /// Sets the route identifier.
    pub fn id(self, id: impl Into<String>) -> EndpointBuilder<Present, M, P, F, E> {
        EndpointBuilder {
            id: Some(id.into()),
            method: self.method,
            path: self.path,
            description: self.description,
            _phantom: PhantomData,
        }
    }
}

impl<I, P, F: ResponseFormat, E> EndpointBuilder<I, Missing, P, F, E> {
    /// Sets the HTTP method.
    pub fn method(self, method: RestMethod) -> EndpointBuilder<I, Present, P, F, E> {
        EndpointBuilder {
            id: self.id,
            method: Some(method),
            path: self.path,
            description: self.description,
            _phantom: PhantomData,
        }
    }
}

impl<I, M, F: ResponseFormat, E> EndpointBuilder<I, M, Missing, F, E> {
    /// Sets the path, relative to the API base URL (no leading `/`).
    pub fn path(self, path: impl Into<String>) -> EndpointBuilder<I, M, Present, F, E> {
        EndpointBuilder {
            id: self.id,
            method: self.method,
            path: Some(path.into()),
            description: self.description,
            _phantom: PhantomData,
        }
    }
}

impl<I, M, P, F: ResponseFormat, E> EndpointBuilder<I, M, P, F, E> {
    /// Sets an optional description.
    pub fn description(self, description: impl Into<String>) -> Self {
        EndpointBuilder {
            description: Some(description.into()),
            ..self
        }
    }
}

impl<F: ResponseFormat, E> EndpointBuilder<Present, Present, Present, F, E> {
    /// Builds the endpoint.
    ///
    /// Only available once id, method and path have been set.
    pub fn build(self) -> Endpoint<F, E> {
        Endpoint {
            id: self.id.expect("id set via type state"),
            method: self.method.expect("method set via type state"),
            path: self.path.expect("path set via type state"),
            description: self.description,
            _types: PhantomData,
        }
    }
}
