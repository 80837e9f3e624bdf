//! HTTP methods used by Dropbox routes.

use strum::{Display, EnumIter, EnumString};

/// HTTP method of a route.
///
/// RPC routes are `POST` with a JSON argument body; `GET` is kept for the
/// few plain endpoints that take no argument.
///
/// ## Examples
///
/// ```rust
/// use dropbox_api::RestMethod;
///
/// assert!(RestMethod::Post.has_body());
/// assert_eq!("GET".parse::<RestMethod>().unwrap(), RestMethod::Get);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum RestMethod {
    /// HTTP GET - no argument body.
    Get,
    /// HTTP POST - JSON argument body.
    Post,
}

impl RestMethod {
    /// Returns `true` if the route argument is sent as the request body.
    pub fn has_body(&self) -> bool {
        matches!(self, Self::Post)
    }

    /// Converts to the equivalent `reqwest::Method`.
    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
        }
    }
}

impl From<RestMethod> for reqwest::Method {
    fn from(method: RestMethod) -> Self {
        method.to_reqwest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_display_and_parse() {
        assert_eq!(RestMethod::Post.to_string(), "POST");
        assert_eq!("POST".parse::<RestMethod>().unwrap(), RestMethod::Post);
        assert!("PATCH".parse::<RestMethod>().is_err());
    }

    #[test]
    fn test_has_body() {
        assert!(RestMethod::Post.has_body());
        assert!(!RestMethod::Get.has_body());
    }

    #[test]
    fn test_to_reqwest() {
        let methods: Vec<reqwest::Method> = RestMethod::iter().map(Into::into).collect();
        assert_eq!(methods, vec![reqwest::Method::GET, reqwest::Method::POST]);
    }
}
