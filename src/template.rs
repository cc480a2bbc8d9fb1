//! Placeholder templates - extraction, rendering, forking
//!
//! A `Template` wraps a source string containing tag-delimited placeholders
//! (default `{name}`) and derives a replacement schema from them:
//! - the source is scanned once at construction; distinct valid tokens are
//!   kept in first-seen order
//! - rendering substitutes resolved values and leaves unresolved
//!   placeholders verbatim
//! - forking re-parses a partially-rendered source into a fresh, independent
//!   `Template`
//!
//! Compiled tag-pair patterns are cached globally so repeated construction
//! with the same delimiters never recompiles the matcher.

use std::collections::{HashMap, HashSet};
use std::fmt;

use dashmap::DashMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::debug;

use crate::error::TemplateError;
use crate::util::{
    clean, display_value, first_char, is_defined, is_defined_primitive, is_non_nullable, last_char,
};

/// Default opening delimiter
pub const DEFAULT_START_TAG: &str = "{";
/// Default closing delimiter
pub const DEFAULT_END_TAG: &str = "}";

/// Caller-supplied replacement values, keyed by property name
pub type Overrides = serde_json::Map<String, Value>;

/// Compiled placeholder patterns keyed by tag pair
static PATTERN_CACHE: Lazy<DashMap<(String, String), Regex>> = Lazy::new(DashMap::new);

/// Replacement state for one property name
#[derive(Debug, Clone, PartialEq)]
pub enum Replacement {
    /// A usable scalar value
    Value(Value),
    /// Caller explicitly passed null
    Empty,
    /// Nothing supplied yet
    Unset,
}

impl Replacement {
    /// The usable value, if one was supplied
    pub fn value(&self) -> Option<&Value> {
        match self {
            Replacement::Value(v) => Some(v),
            Replacement::Empty | Replacement::Unset => None,
        }
    }

    /// Whether a usable value is present
    pub fn is_set(&self) -> bool {
        matches!(self, Replacement::Value(_))
    }
}

/// An immutable template over a source string.
///
/// Construction never fails: a source without placeholders simply yields an
/// empty schema. All fields are fixed once built; `fork` derives new values
/// instead of mutating.
#[derive(Debug, Clone)]
pub struct Template {
    source: String,
    start_tag: String,
    end_tag: String,
    pattern: Regex,
    placeholders: Vec<String>,
    placeholders_map: HashMap<String, String>,
    replacements: HashMap<String, Replacement>,
}

impl Template {
    /// Create a template with the default `{` `}` tags and no defaults.
    pub fn new(source: impl Into<String>) -> Self {
        Self::builder(source).build()
    }

    /// Create a template with a custom tag pair and no defaults.
    pub fn with_tags(
        source: impl Into<String>,
        start_tag: impl Into<String>,
        end_tag: impl Into<String>,
    ) -> Self {
        Self::builder(source).tags(start_tag, end_tag).build()
    }

    /// Start building a template from a source string.
    pub fn builder(source: impl Into<String>) -> TemplateBuilder {
        TemplateBuilder {
            source: source.into(),
            start_tag: DEFAULT_START_TAG.to_string(),
            end_tag: DEFAULT_END_TAG.to_string(),
            defaults: Overrides::new(),
        }
    }

    /// Fork `template` with `overrides` (alias for [`Template::fork`]).
    pub fn from_template(template: &Template, overrides: &Overrides) -> Template {
        template.fork(overrides)
    }

    /// Compiled matcher for placeholders bounded by the given tag pair.
    ///
    /// Compiles once per distinct pair; later calls hit a global cache.
    pub fn placeholder_pattern(start_tag: &str, end_tag: &str) -> Regex {
        let key = (start_tag.to_string(), end_tag.to_string());
        if let Some(pattern) = PATTERN_CACHE.get(&key) {
            return pattern.clone();
        }

        let raw = format!(
            "{}[A-Za-z0-9_-]+{}",
            regex::escape(start_tag),
            regex::escape(end_tag)
        );
        let pattern = Regex::new(&raw).unwrap();
        PATTERN_CACHE.insert(key, pattern.clone());
        pattern
    }

    /// The source string as supplied.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The opening delimiter.
    pub fn start_tag(&self) -> &str {
        &self.start_tag
    }

    /// The closing delimiter.
    pub fn end_tag(&self) -> &str {
        &self.end_tag
    }

    /// The matcher used to find placeholder occurrences.
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Distinct valid placeholder tokens, in first-seen order.
    pub fn placeholders(&self) -> &[String] {
        &self.placeholders
    }

    /// Token to property-name mapping (token with its tags stripped).
    pub fn placeholders_map(&self) -> &HashMap<String, String> {
        &self.placeholders_map
    }

    /// Replacement state per property name.
    pub fn replacements(&self) -> &HashMap<String, Replacement> {
        &self.replacements
    }

    /// Render with stored defaults only.
    ///
    /// Placeholders without a usable value stay verbatim. Equals the
    /// `Display` form.
    pub fn render(&self) -> String {
        self.render_with(&Overrides::new())
    }

    /// Render with caller overrides layered over stored defaults.
    ///
    /// A key present in `overrides` shadows the stored default, even when its
    /// value is null. Only defined, non-null primitive scalars are
    /// substituted; every occurrence of a resolved token is replaced.
    pub fn render_with(&self, overrides: &Overrides) -> String {
        let mut output = self.source.clone();
        for token in &self.placeholders {
            let Some(name) = self.placeholders_map.get(token) else {
                continue;
            };
            let supplied = overrides.get(name);
            let resolved = if is_defined(supplied) {
                supplied
            } else {
                self.replacements.get(name).and_then(Replacement::value)
            };
            if is_defined_primitive(resolved) && is_non_nullable(resolved) {
                if let Some(value) = resolved {
                    output = output.replace(token.as_str(), &display_value(value));
                }
            }
        }
        output
    }

    /// Render with overrides, then fail if any placeholder survived.
    pub fn render_checked(&self, overrides: &Overrides) -> Result<String, TemplateError> {
        let output = self.render_with(overrides);
        self.validate(&output)?;
        Ok(output)
    }

    /// Check a rendered string for leftover placeholders.
    pub fn validate(&self, rendered: &str) -> Result<(), TemplateError> {
        let missing = self.remaining_placeholders(rendered);
        if missing.is_empty() {
            return Ok(());
        }
        debug!(missing = missing.len(), "template validation failed");
        Err(TemplateError::Validation {
            template: rendered.to_string(),
            missing_replacements: missing,
        })
    }

    /// Placeholder tokens still present in `value`, in first-seen order.
    pub fn remaining_placeholders(&self, value: &str) -> Vec<String> {
        collect_placeholders(&self.pattern, &self.start_tag, &self.end_tag, value)
    }

    /// Derive a new template from the partially-rendered source.
    ///
    /// Substituted placeholders disappear; unresolved ones persist. The new
    /// template keeps the tag pair but carries no defaults.
    pub fn fork(&self, overrides: &Overrides) -> Template {
        Template::builder(self.render_with(overrides))
            .tags(self.start_tag.clone(), self.end_tag.clone())
            .build()
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<&str> for Template {
    fn from(source: &str) -> Self {
        Template::new(source)
    }
}

impl From<String> for Template {
    fn from(source: String) -> Self {
        Template::new(source)
    }
}

impl PartialEq for Template {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
            && self.start_tag == other.start_tag
            && self.end_tag == other.end_tag
            && self.placeholders == other.placeholders
            && self.replacements == other.replacements
    }
}

/// Builder for [`Template`] construction options.
///
/// `build` is total: any source string and tag pair produce a template.
#[derive(Debug, Clone)]
pub struct TemplateBuilder {
    source: String,
    start_tag: String,
    end_tag: String,
    defaults: Overrides,
}

impl TemplateBuilder {
    /// Set the delimiter pair.
    pub fn tags(mut self, start_tag: impl Into<String>, end_tag: impl Into<String>) -> Self {
        self.start_tag = start_tag.into();
        self.end_tag = end_tag.into();
        self
    }

    /// Set all default replacement values at once.
    pub fn defaults(mut self, defaults: Overrides) -> Self {
        self.defaults = defaults;
        self
    }

    /// Set one default replacement value.
    pub fn default_value(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.defaults.insert(name.into(), value.into());
        self
    }

    /// Scan the source and assemble the template.
    pub fn build(self) -> Template {
        let pattern = Template::placeholder_pattern(&self.start_tag, &self.end_tag);
        let placeholders =
            collect_placeholders(&pattern, &self.start_tag, &self.end_tag, &clean(&self.source));

        let mut placeholders_map = HashMap::with_capacity(placeholders.len());
        let mut replacements = HashMap::with_capacity(placeholders.len());
        for token in &placeholders {
            let name = strip_tags(token, &self.start_tag, &self.end_tag).to_string();
            let replacement = match self.defaults.get(&name) {
                Some(Value::Null) => Replacement::Empty,
                Some(value) => Replacement::Value(value.clone()),
                None => Replacement::Unset,
            };
            placeholders_map.insert(token.clone(), name.clone());
            replacements.insert(name, replacement);
        }

        debug!(
            placeholders = placeholders.len(),
            start_tag = %self.start_tag,
            end_tag = %self.end_tag,
            "parsed template"
        );

        Template {
            source: self.source,
            start_tag: self.start_tag,
            end_tag: self.end_tag,
            pattern,
            placeholders,
            placeholders_map,
            replacements,
        }
    }
}

/// Scan `input` for valid placeholder tokens, deduplicated in first-seen
/// order.
///
/// The matcher finds tag-bounded name runs; the neighborhood rules are
/// applied here since candidates inside doubled delimiters must be dropped:
/// - the inner name may not contain a space
/// - the inner name may not start with the start tag's first char, nor end
///   with the end tag's first char
/// - a candidate directly preceded by the start tag's first char, or directly
///   followed by the end tag's first char plus a space, is skipped
fn collect_placeholders(pattern: &Regex, start_tag: &str, end_tag: &str, input: &str) -> Vec<String> {
    let start_lead = first_char(start_tag);
    let end_lead = first_char(end_tag);

    let mut seen = HashSet::new();
    let mut found = Vec::new();

    for m in pattern.find_iter(input) {
        let token = m.as_str();
        let name = strip_tags(token, start_tag, end_tag);

        if name.contains(' ') {
            continue;
        }
        if start_lead.is_some() && first_char(name) == start_lead {
            continue;
        }
        if end_lead.is_some() && last_char(name) == end_lead {
            continue;
        }
        if let Some(lead) = start_lead {
            if input[..m.start()].ends_with(lead) {
                continue;
            }
        }
        if let Some(lead) = end_lead {
            let mut rest = input[m.end()..].chars();
            if rest.next() == Some(lead) && rest.next() == Some(' ') {
                continue;
            }
        }
        if seen.insert(token.to_string()) {
            found.push(token.to_string());
        }
    }

    found
}

/// Strip exactly one leading start tag and one trailing end tag.
fn strip_tags<'a>(token: &'a str, start_tag: &str, end_tag: &str) -> &'a str {
    token
        .strip_prefix(start_tag)
        .and_then(|rest| rest.strip_suffix(end_tag))
        .unwrap_or(token)
}
