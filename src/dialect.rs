//! Language dialect descriptors.
//!
//! Each supported language id maps to a small descriptor: the wrapper pair
//! delimiting a type annotation, an optional parameter sigil, and whether
//! parameter-usage inference applies. Parser and renderer consult the
//! descriptor instead of branching on language ids.

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    JavaScript,
    CoffeeScript,
    LiveScript,
    Php,
}

impl Dialect {
    /// Resolve a host language identifier. Unknown ids fail the request
    /// without touching the buffer.
    pub fn from_language_id(id: &str) -> Result<Dialect, Error> {
        match id {
            "javascript" => Ok(Dialect::JavaScript),
            "coffeescript" => Ok(Dialect::CoffeeScript),
            "livescript" => Ok(Dialect::LiveScript),
            "php" => Ok(Dialect::Php),
            _ => Err(Error::UnsupportedDialect(id.to_string())),
        }
    }

    /// The open/close strings delimiting a type annotation in `@param` /
    /// `@returns` tags. Empty strings for unwrapped dialects.
    pub fn wrapper(self) -> (&'static str, &'static str) {
        match self {
            Dialect::JavaScript | Dialect::CoffeeScript | Dialect::LiveScript => ("{", "}"),
            Dialect::Php => ("", ""),
        }
    }

    /// Sigil prefixing parameter names in source and tags, if any.
    pub fn param_sigil(self) -> Option<char> {
        match self {
            Dialect::Php => Some('$'),
            _ => None,
        }
    }

    /// Whether the type annotation is wrapper-delimited in tags.
    pub fn wraps_types(self) -> bool {
        !self.wrapper().0.is_empty()
    }

    /// Parameter-usage inference scans for `name.member` patterns, which is
    /// meaningless for sigil dialects.
    pub fn infers_param_types(self) -> bool {
        self.param_sigil().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ids_resolve() {
        assert_eq!(
            Dialect::from_language_id("javascript").unwrap(),
            Dialect::JavaScript
        );
        assert_eq!(Dialect::from_language_id("php").unwrap(), Dialect::Php);
    }

    #[test]
    fn unknown_id_fails() {
        assert!(matches!(
            Dialect::from_language_id("haskell"),
            Err(Error::UnsupportedDialect(id)) if id == "haskell"
        ));
    }

    #[test]
    fn wrappers() {
        assert_eq!(Dialect::JavaScript.wrapper(), ("{", "}"));
        assert_eq!(Dialect::Php.wrapper(), ("", ""));
        assert!(Dialect::CoffeeScript.wraps_types());
        assert!(!Dialect::Php.wraps_types());
    }

    #[test]
    fn php_uses_sigil_and_skips_inference() {
        assert_eq!(Dialect::Php.param_sigil(), Some('$'));
        assert!(!Dialect::Php.infers_param_types());
        assert!(Dialect::JavaScript.infers_param_types());
    }
}
