use crate::error::{LocaleError, RenderError};
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt::Display;
use std::fs;
use std::path::Path;

/// Every template the commands use.
/// The default locale must carry all of them, other locales may fall back.
pub const REQUIRED_TEMPLATES: &[&str] = &[
    "bot_log.info",
    "bot_log.cog_loaded",
    "utilities.user_info",
    "utilities.user_info_title",
    "utilities.emoji_info_title",
    "utilities.emoji_info",
    "utilities.channel_info",
    "utilities.channel_info_title",
    "utilities.channel_not_a_channel",
    "utilities.avatar_info_title",
    "utilities.avatar_info",
    "utilities.guild_info",
    "utilities.guild_info_title",
    "guild_master.locale_info",
    "guild_master.locale_changed",
    "guild_master.locale_cleared",
    "guild_master.locale_unknown",
    "guild_master.locale_list",
    "errors.malformed_token",
    "errors.not_found",
    "errors.member_not_found",
    "errors.command_failed",
    "errors.guild_only",
    "errors.lacking_permissions",
    "etc.channel_type.text",
    "etc.channel_type.voice",
    "etc.channel_type.news",
    "etc.levels.none",
    "etc.levels.low",
    "etc.levels.medium",
    "etc.levels.high",
    "etc.levels.extreme",
    "etc.levels.unknown",
    "etc.other.yes",
    "etc.other.no",
    "etc.other.unknown",
    "etc.subjects.emoji",
    "etc.subjects.channel",
    "etc.subjects.member",
    "etc.subjects.guild",
];

/// The locale table, `{locale: {category: {name: template}}}`.
/// Categories may nest further, paths are written with dots (`etc.levels.none`).
#[derive(Debug)]
pub struct Locales {
    tables: HashMap<String, Value>,
    default: String,
}

impl Locales {
    pub fn from_file<P: AsRef<Path>>(path: P, default: &str) -> Result<Self, LocaleError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LocaleError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&content, default)
    }

    pub fn from_json(json: &str, default: &str) -> Result<Self, LocaleError> {
        let tables: HashMap<String, Value> = serde_json::from_str(json)?;

        if !tables.contains_key(default) {
            return Err(LocaleError::DefaultMissing(default.to_owned()));
        }

        Ok(Self {
            tables,
            default: default.to_owned(),
        })
    }

    /// Make sure the default locale can render everything,
    /// missing templates in the other locales are only reported.
    pub fn validate(&self) -> Result<(), LocaleError> {
        for &path in REQUIRED_TEMPLATES {
            if self.lookup(&self.default, path).is_none() {
                return Err(LocaleError::DefaultIncomplete {
                    locale: self.default.to_owned(),
                    path,
                });
            }
        }

        for locale in self.keys().into_iter().filter(|&v| v != self.default) {
            let missing: Vec<_> = REQUIRED_TEMPLATES
                .iter()
                .filter(|path| self.lookup(locale, path).is_none())
                .collect();

            if !missing.is_empty() {
                warn!(
                    "Locale `{}` misses {} templates, these will use `{}`: {:?}",
                    locale,
                    missing.len(),
                    self.default,
                    missing
                );
            }
        }

        Ok(())
    }

    #[inline]
    pub fn default_locale(&self) -> &str {
        &self.default
    }

    #[inline]
    pub fn contains(&self, locale: &str) -> bool {
        self.tables.contains_key(locale)
    }

    /// Available locale keys, sorted
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<_> = self.tables.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// The locale that will actually be used for `locale`
    pub fn resolve<'a>(&'a self, locale: &'a str) -> &'a str {
        if self.contains(locale) {
            return locale;
        }

        warn!(
            "Locale `{}` is not available, falling back to `{}`",
            locale, self.default
        );

        &self.default
    }

    fn lookup(&self, locale: &str, path: &str) -> Option<&str> {
        path.split('.')
            .try_fold(self.tables.get(locale)?, |node, key| node.get(key))?
            .as_str()
    }

    pub fn template(&self, locale: &str, path: &str) -> Result<&str, RenderError> {
        let locale = self.resolve(locale);

        if let Some(template) = self.lookup(locale, path) {
            return Ok(template);
        }

        if locale != self.default {
            if let Some(template) = self.lookup(&self.default, path) {
                warn!(
                    "Template `{}` is missing in `{}`, using the one from `{}`",
                    path, locale, self.default
                );

                return Ok(template);
            }
        }

        Err(RenderError::TemplateMissing {
            locale: locale.to_owned(),
            path: path.to_owned(),
        })
    }

    #[inline]
    pub fn format(
        &self,
        locale: &str,
        path: &str,
        args: &[&dyn Display],
    ) -> Result<String, RenderError> {
        self.template(locale, path)
            .map(|template| format_template(template, args))
    }
}

/// Fill the placeholders of a template.
///
/// `{0}`, `{1}`... take the argument at that position, `{}` takes the next one,
/// `{{` and `}}` are literal braces.
/// A placeholder without a matching argument is kept as it is.
pub fn format_template(template: &str, args: &[&dyn Display]) -> String {
    lazy_static! {
        static ref PLACEHOLDER_RE: Regex = Regex::new(r"\{\{|\}\}|\{(\d*)\}").unwrap();
    }

    let mut next = 0;

    PLACEHOLDER_RE
        .replace_all(template, |caps: &Captures<'_>| {
            let whole = &caps[0];

            match whole {
                "{{" => return String::from("{"),
                "}}" => return String::from("}"),
                _ => {}
            }

            let index = match &caps[1] {
                "" => {
                    next += 1;
                    next - 1
                }

                digits => match digits.parse::<usize>() {
                    Ok(n) => n,
                    Err(_) => return whole.to_owned(),
                },
            };

            args.get(index)
                .map(|arg| arg.to_string())
                .unwrap_or_else(|| whole.to_owned())
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TABLE: &str = r#"{
        "en": {
            "utilities": { "hello": "Hello {0}, I'm {1}" },
            "etc": { "levels": { "none": "None" } }
        },
        "ru": {
            "utilities": { "hello": "Привет {0}, я {1}" }
        }
    }"#;

    fn locales() -> Locales {
        Locales::from_json(TABLE, "en").unwrap()
    }

    #[test]
    fn positional_placeholders() {
        assert_eq!(format_template("{1} {0} {1}", &[&"a", &2]), "2 a 2");
    }

    #[test]
    fn sequential_placeholders() {
        assert_eq!(format_template("{}-{}", &[&"x", &"y"]), "x-y");
    }

    #[test]
    fn escaped_braces() {
        assert_eq!(format_template("{{{0}}}", &[&7]), "{7}");
    }

    #[test]
    fn missing_argument_is_kept() {
        assert_eq!(format_template("{0} {3}", &[&"a"]), "a {3}");
    }

    #[test]
    fn nested_lookup() {
        let locales = locales();
        assert_eq!(locales.template("en", "etc.levels.none"), Ok("None"));
        assert_eq!(
            locales.format("ru", "utilities.hello", &[&"Ann", &"Tomo"]),
            Ok(String::from("Привет Ann, я Tomo"))
        );
    }

    #[test]
    fn unknown_locale_falls_back_to_default() {
        let locales = locales();
        assert_eq!(locales.resolve("de"), "en");
        assert_eq!(
            locales.format("de", "utilities.hello", &[&"Ann", &"Tomo"]),
            Ok(String::from("Hello Ann, I'm Tomo"))
        );
    }

    #[test]
    fn missing_template_falls_back_to_default() {
        assert_eq!(locales().template("ru", "etc.levels.none"), Ok("None"));
    }

    #[test]
    fn missing_everywhere() {
        let err = locales().template("ru", "etc.levels.low").unwrap_err();
        assert_eq!(
            err,
            RenderError::TemplateMissing {
                locale: String::from("ru"),
                path: String::from("etc.levels.low"),
            }
        );
    }

    #[test]
    fn non_string_node_is_not_a_template() {
        assert!(locales().template("en", "etc.levels").is_err());
    }

    #[test]
    fn default_must_exist() {
        assert!(matches!(
            Locales::from_json(TABLE, "ja"),
            Err(LocaleError::DefaultMissing(ref l)) if l == "ja"
        ));
    }

    #[test]
    fn incomplete_default_fails_validation() {
        assert!(matches!(
            locales().validate(),
            Err(LocaleError::DefaultIncomplete { .. })
        ));
    }

    #[test]
    fn shipped_locales_are_complete() {
        let json = include_str!("../data/locales.json");
        for default in &["en", "ru"] {
            let locales = Locales::from_json(json, default).unwrap();
            locales.validate().unwrap();
        }
    }

    #[test]
    fn keys_are_sorted() {
        assert_eq!(locales().keys(), vec!["en", "ru"]);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TABLE.as_bytes()).unwrap();

        let locales = Locales::from_file(file.path(), "ru").unwrap();
        assert_eq!(locales.default_locale(), "ru");
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            Locales::from_file("./does/not/exist.json", "en"),
            Err(LocaleError::Read { .. })
        ));
    }
}
