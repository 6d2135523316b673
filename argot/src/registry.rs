//! The option table the parser resolves tokens against.

use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

use crate::error::{Error, Result};
use crate::name::OptionName;
use crate::sink::{BoolSink, StringSink, ValueSink};

/// A registered option: its name and the sink its values go to.
pub struct Opt<'a> {
    name: OptionName,
    sink: Box<dyn ValueSink + 'a>,
    has_argument: bool,
}

impl<'a> Opt<'a> {
    fn new(name: OptionName, sink: Box<dyn ValueSink + 'a>) -> Self {
        let has_argument = sink.has_argument();
        Opt {
            name,
            sink,
            has_argument,
        }
    }

    pub fn name(&self) -> &OptionName {
        &self.name
    }

    pub fn has_argument(&self) -> bool {
        self.has_argument
    }

    pub fn is_long(&self) -> bool {
        self.name.is_long()
    }

    pub(crate) fn append_value(&mut self, raw: &str) -> Result<()> {
        self.sink.append(raw)
    }

    fn abbreviatable(&self, prefix: &str) -> bool {
        self.name.is_long() && self.name.as_str().starts_with(prefix)
    }
}

impl fmt::Debug for Opt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Opt")
            .field("name", &self.name)
            .field("has_argument", &self.has_argument)
            .finish()
    }
}

/// Registered options keyed by name.
///
/// Sinks borrow caller storage for `'a`; the collected values become readable
/// again once the registry (and any parser borrowing it) is dropped.
#[derive(Debug, Default)]
pub struct Registry<'a> {
    options: BTreeMap<OptionName, Opt<'a>>,
}

impl<'a> Registry<'a> {
    pub fn new() -> Self {
        Registry {
            options: BTreeMap::new(),
        }
    }

    pub fn register(&mut self, name: &str, sink: Box<dyn ValueSink + 'a>) -> Result<&Opt<'a>> {
        let name = OptionName::new(name)?;
        if self.options.contains_key(&name) {
            return Err(Error::DuplicateOption(name.to_string()));
        }
        let opt = Opt::new(name.clone(), sink);
        debug!(name = %name, has_argument = opt.has_argument, "registered option");
        Ok(self.options.entry(name).or_insert(opt))
    }

    pub fn register_bool(&mut self, name: &str, values: &'a mut Vec<bool>) -> Result<&Opt<'a>> {
        self.register(name, Box::new(BoolSink::new(values)))
    }

    pub fn register_string(
        &mut self,
        name: &str,
        values: &'a mut Vec<String>,
    ) -> Result<&Opt<'a>> {
        self.register(name, Box::new(StringSink::new(values)))
    }

    /// Exact match on a one-character option name.
    pub fn lookup(&mut self, c: char) -> Result<&mut Opt<'a>> {
        let key = c.to_string();
        self.options
            .get_mut(key.as_str())
            .ok_or(Error::NotFound(key))
    }

    /// Resolve a long option by unique prefix.
    ///
    /// Every long option starting with `prefix` is a candidate, including one
    /// named exactly `prefix`; more than one candidate is ambiguous.
    pub fn find_by_abbreviation(&mut self, prefix: &str) -> Result<&mut Opt<'a>> {
        let mut found: Vec<&mut Opt<'a>> = self
            .options
            .values_mut()
            .filter(|o| o.abbreviatable(prefix))
            .collect();
        match found.len() {
            0 => Err(Error::NotFound(prefix.to_string())),
            1 => Ok(found.remove(0)),
            _ => Err(Error::AmbiguousName {
                name: prefix.to_string(),
                candidates: found.iter().map(|o| o.name.to_string()).collect(),
            }),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.options.contains_key(name)
    }

    /// Registered options in name order.
    pub fn options(&self) -> impl Iterator<Item = &Opt<'a>> {
        self.options.values()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_once() {
        let mut a = Vec::new();
        let mut b = Vec::new();
        let mut registry = Registry::new();
        let opt = registry.register_bool("verbose", &mut a).unwrap();
        assert_eq!(opt.name().as_str(), "verbose");
        assert!(!opt.has_argument());

        match registry.register_string("verbose", &mut b) {
            Err(Error::DuplicateOption(name)) => assert_eq!(name, "verbose"),
            other => panic!("expected DuplicateOption, got {other:?}"),
        }
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn register_invalid_name() {
        let mut a = Vec::new();
        let mut registry = Registry::new();
        assert!(matches!(
            registry.register_bool("foo--bar", &mut a),
            Err(Error::InvalidName(_))
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn arity_follows_sink_kind() {
        let mut flag = Vec::new();
        let mut name = Vec::new();
        let mut registry = Registry::new();
        registry.register_bool("v", &mut flag).unwrap();
        registry.register_string("name", &mut name).unwrap();

        assert!(!registry.lookup('v').unwrap().has_argument());
        assert!(registry.find_by_abbreviation("name").unwrap().has_argument());
    }

    #[test]
    fn lookup_short() {
        let mut a = Vec::new();
        let mut registry = Registry::new();
        registry.register_bool("a", &mut a).unwrap();

        assert_eq!(registry.lookup('a').unwrap().name().as_str(), "a");
        match registry.lookup('b') {
            Err(Error::NotFound(name)) => assert_eq!(name, "b"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    // -- abbreviation --

    #[test]
    fn abbreviation_unique_prefix() {
        let mut v = Vec::new();
        let mut registry = Registry::new();
        registry.register_bool("verbose", &mut v).unwrap();

        for prefix in ["v", "verb", "verbose"] {
            let opt = registry.find_by_abbreviation(prefix).unwrap();
            assert_eq!(opt.name().as_str(), "verbose");
        }
        assert!(matches!(
            registry.find_by_abbreviation("verbosely"),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn abbreviation_skips_short_options() {
        let mut v = Vec::new();
        let mut registry = Registry::new();
        registry.register_bool("v", &mut v).unwrap();
        assert!(matches!(
            registry.find_by_abbreviation("v"),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn abbreviation_ambiguous() {
        let mut bar = Vec::new();
        let mut baz = Vec::new();
        let mut registry = Registry::new();
        registry.register_bool("foo-baz", &mut baz).unwrap();
        registry.register_bool("foo-bar", &mut bar).unwrap();

        for prefix in ["foo", "foo-b"] {
            match registry.find_by_abbreviation(prefix) {
                Err(Error::AmbiguousName { name, candidates }) => {
                    assert_eq!(name, prefix);
                    assert_eq!(candidates, vec!["foo-bar", "foo-baz"]);
                }
                other => panic!("{prefix}: expected AmbiguousName, got {other:?}"),
            }
        }
        assert_eq!(
            registry.find_by_abbreviation("foo-bar").unwrap().name().as_str(),
            "foo-bar"
        );
    }

    #[test]
    fn exact_name_still_ambiguous_with_longer_sibling() {
        let mut a = Vec::new();
        let mut b = Vec::new();
        let mut registry = Registry::new();
        registry.register_bool("color", &mut a).unwrap();
        registry.register_bool("colors", &mut b).unwrap();
        assert!(matches!(
            registry.find_by_abbreviation("color"),
            Err(Error::AmbiguousName { .. })
        ));
    }

    #[test]
    fn options_in_name_order() {
        let mut a = Vec::new();
        let mut b = Vec::new();
        let mut c = Vec::new();
        let mut registry = Registry::new();
        registry.register_bool("zeta", &mut a).unwrap();
        registry.register_string("alpha", &mut b).unwrap();
        registry.register_bool("m", &mut c).unwrap();

        let names: Vec<&str> = registry.options().map(|o| o.name().as_str()).collect();
        assert_eq!(names, vec!["alpha", "m", "zeta"]);
        assert!(registry.contains("m"));
        assert!(!registry.contains("alp"));
    }
}
