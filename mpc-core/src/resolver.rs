use url::Url;

use crate::designation::Designation;

/// Query endpoint of the Minor Planet Center orbital-record database.
pub const MPCORB_DB_SEARCH_URL: &str = "https://www.minorplanetcenter.net/db_search/show_object";

/// Outcome of resolving a designation: the redirect target together with
/// its classification. The classification only feeds log lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectDecision {
    /// Redirect to the MPCORB record matching the stripped designation.
    Mpcorb(String),
    /// Redirect to the local informational page for a synthetic object.
    Synthetic(String),
}

impl RedirectDecision {
    pub fn url(&self) -> &str {
        match self {
            Self::Mpcorb(url) | Self::Synthetic(url) => url,
        }
    }

    pub fn into_url(self) -> String {
        match self {
            Self::Mpcorb(url) | Self::Synthetic(url) => url,
        }
    }

    /// Short classification label for log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Mpcorb(_) => "mpcorb record",
            Self::Synthetic(_) => "synthetic object",
        }
    }
}

/// Maps designations to redirect targets.
///
/// Stateless and total: every input string, including the empty string,
/// resolves to exactly one of the two URL shapes. There is no failure mode
/// and no validation beyond the form-urlencoding applied at construction.
#[derive(Debug, Clone)]
pub struct DesignationResolver {
    synthetic_base: String,
}

impl DesignationResolver {
    /// `path_prefix` is the URL prefix the application is mounted under,
    /// e.g. `/` or `/mpc-lookup`. The synthetic-object URL is built under
    /// the same prefix so a prefixed deployment redirects within itself.
    pub fn new(path_prefix: &str) -> Self {
        Self {
            synthetic_base: path_prefix.trim_end_matches('/').to_string(),
        }
    }

    pub fn resolve(&self, designation: &Designation) -> RedirectDecision {
        let stripped = designation.stripped();
        if Designation::stripped_is_synthetic(&stripped) {
            let query = url::form_urlencoded::Serializer::new(String::new())
                .append_pair("designation", designation.as_str())
                .finish();
            RedirectDecision::Synthetic(format!("{}/synthetic_object?{query}", self.synthetic_base))
        } else {
            let url = Url::parse_with_params(MPCORB_DB_SEARCH_URL, [("object_id", stripped.as_str())])
                .unwrap_or_else(|_| unreachable!("{MPCORB_DB_SEARCH_URL} should be a valid base url"));
            RedirectDecision::Mpcorb(url.into())
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn kind_reflects_classification() {
        let resolver = DesignationResolver::new("/");
        let external = resolver.resolve(&Designation::from("1998 QE2"));
        assert!(matches!(external, RedirectDecision::Mpcorb(_)));
        assert_eq!(external.kind(), "mpcorb record");

        let synthetic = resolver.resolve(&Designation::from("2011 12345"));
        assert!(matches!(synthetic, RedirectDecision::Synthetic(_)));
        assert_eq!(synthetic.kind(), "synthetic object");
    }

    #[test]
    fn synthetic_base_drops_the_trailing_slash() {
        let resolver = DesignationResolver::new("/");
        let decision = resolver.resolve(&Designation::from("12345"));
        assert_eq!(decision.url(), "/synthetic_object?designation=12345");

        let resolver = DesignationResolver::new("/mpc-lookup/");
        let decision = resolver.resolve(&Designation::from("12345"));
        assert_eq!(decision.url(), "/mpc-lookup/synthetic_object?designation=12345");
    }
}
