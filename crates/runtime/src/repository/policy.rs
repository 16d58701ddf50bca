use strum::{Display, EnumString};

/// How a store picks the id of a newly created warrior.
///
/// Both policies refuse to create a second warrior under an id that is
/// already taken.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum IdPolicy {
    /// Use the caller's id when one is supplied, otherwise assign the next one.
    #[default]
    Client,
    /// Always assign `max + 1` (or `1` for an empty store), ignoring caller ids.
    Sequential,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parses_policy_names() {
        assert_eq!(IdPolicy::from_str("client").unwrap(), IdPolicy::Client);
        assert_eq!(IdPolicy::from_str("Sequential").unwrap(), IdPolicy::Sequential);
        assert!(IdPolicy::from_str("random").is_err());
    }

    #[test]
    fn displays_lowercase() {
        assert_eq!(IdPolicy::Sequential.to_string(), "sequential");
    }
}
