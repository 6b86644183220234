//! Fluent table loading and key normalisation for [`FluentResolver`].
//!
//! Keeping parsing, directory loading, and identifier normalisation here keeps
//! `mod.rs` focused on the resolver contract.

use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8::Dir};
use fluent_bundle::FluentResource;
use fluent_bundle::concurrent::FluentBundle;
use unic_langid::LanguageIdentifier;

use super::{
    FluentResolver, FluentResolverBuilder, FluentResolverError, FormattingIssueReporter,
    PRIMARY_TABLE, Scope, TableSource,
};

const TABLE_EXTENSION: &str = "ftl";

pub(super) struct TableBundle {
    pub(super) scope: Scope,
    pub(super) table: String,
    pub(super) bundle: FluentBundle<Arc<FluentResource>>,
}

impl fmt::Debug for TableBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableBundle")
            .field("scope", &self.scope)
            .field("table", &self.table)
            .field("bundle", &"<fluent bundle>")
            .finish()
    }
}

fn bundle_from_source(
    locale: &LanguageIdentifier,
    scope: Scope,
    table: String,
    source: &str,
) -> Result<TableBundle, FluentResolverError> {
    let resource = FluentResource::try_new(dashed_resource(source)).map_err(
        |(_resource, errors)| FluentResolverError::Parser {
            locale: locale.clone(),
            scope: scope.clone(),
            table: table.clone(),
            errors,
        },
    )?;

    let mut bundle = FluentBundle::new_concurrent(vec![locale.clone()]);
    bundle.set_use_isolating(false);
    bundle
        .add_resource(Arc::new(resource))
        .map_err(|errors| FluentResolverError::Registration {
            locale: locale.clone(),
            scope: scope.clone(),
            table: table.clone(),
            errors,
        })?;

    tracing::debug!(%scope, %table, %locale, "registered Fluent table");
    Ok(TableBundle {
        scope,
        table,
        bundle,
    })
}

fn io_error(path: &Utf8Path) -> impl FnOnce(std::io::Error) -> FluentResolverError {
    let owned = path.to_owned();
    move |source| FluentResolverError::Io {
        path: owned,
        source,
    }
}

/// Reads every `*.ftl` file in `dir`, keyed by file stem, in name order.
fn read_table_dir(dir: &Utf8Path) -> Result<Vec<(String, String)>, FluentResolverError> {
    let handle = Dir::open_ambient_dir(dir, ambient_authority()).map_err(io_error(dir))?;
    let mut names = Vec::new();
    for entry in handle.entries().map_err(io_error(dir))? {
        let dir_entry = entry.map_err(io_error(dir))?;
        if !dir_entry.file_type().map_err(io_error(dir))?.is_file() {
            continue;
        }
        let name = dir_entry.file_name().map_err(io_error(dir))?;
        if Utf8Path::new(&name).extension() == Some(TABLE_EXTENSION) {
            names.push(name);
        }
    }
    names.sort();

    let mut tables = Vec::with_capacity(names.len());
    for name in names {
        let source = handle
            .read_to_string(&name)
            .map_err(io_error(&dir.join(&name)))?;
        let table = Utf8Path::new(&name)
            .file_stem()
            .unwrap_or(PRIMARY_TABLE)
            .to_owned();
        tables.push((table, source));
    }
    Ok(tables)
}

/// Fluent id for a dotted table key: `Button.Title` becomes `Button-Title`.
pub(super) fn fluent_id(key: &str) -> Cow<'_, str> {
    if key.contains('.') {
        Cow::Owned(key.replace('.', "-"))
    } else {
        Cow::Borrowed(key)
    }
}

/// Rewrites a table so its dotted keys become ids Fluent can parse.
///
/// Top-level definitions such as `Label.Title = ...` are renamed with
/// [`fluent_id`], and references to them inside placeables
/// (`{ Label.Title }`) are renamed to match. Any other dotted reference keeps
/// its Fluent meaning, so `{ login.tooltip }` still names an attribute.
/// Comments, terms, and string literals are never touched.
pub(super) fn dashed_resource(source: &str) -> String {
    let dotted: HashSet<&str> = source
        .lines()
        .filter_map(split_definition)
        .map(|(key, _)| key)
        .filter(|key| key.contains('.'))
        .collect();
    if dotted.is_empty() {
        return source.to_owned();
    }

    let mut out = String::with_capacity(source.len());
    for chunk in source.split_inclusive('\n') {
        let line = chunk.trim_end_matches(['\r', '\n']);
        let ending = chunk.strip_prefix(line).unwrap_or_default();
        if line.starts_with('#') {
            out.push_str(line);
        } else if let Some((key, rest)) = split_definition(line) {
            out.push_str(&fluent_id(key));
            rewrite_references(rest, &dotted, &mut out);
        } else {
            rewrite_references(line, &dotted, &mut out);
        }
        out.push_str(ending);
    }
    out
}

/// Key characters are ASCII, matching Fluent identifiers plus `.`.
///
/// A definition whose key uses anything else is left as written, and Fluent
/// then rejects the whole table with [`FluentResolverError::Parser`].
const fn is_key_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.')
}

fn is_key(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    chars.next().is_some_and(|first| first.is_ascii_alphabetic()) && chars.all(is_key_char)
}

/// Splits `Key.Name = value` into the key and everything after it.
fn split_definition(line: &str) -> Option<(&str, &str)> {
    let (left, _) = line.split_once('=')?;
    let key = left.trim_end();
    if !is_key(key) {
        return None;
    }
    Some((key, line.strip_prefix(key)?))
}

/// Copies `text`, renaming placeable references to dotted definitions.
///
/// A reference is an identifier opening a placeable or, inside one, following
/// `(` or `,` as a call argument. Variables (`$x`) and terms (`-x`) are
/// preceded by their sigil and never match.
fn rewrite_references(text: &str, dotted: &HashSet<&str>, out: &mut String) {
    let mut depth = 0_usize;
    let mut in_string = false;
    let mut previous: Option<char> = None;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_string {
            out.push(ch);
            if ch == '\\' {
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        let opens_reference = depth > 0 && matches!(previous, Some('{' | '(' | ','));
        if opens_reference && ch.is_ascii_alphabetic() {
            let mut token = String::from(ch);
            while let Some(next) = chars.next_if(|next| is_key_char(*next)) {
                token.push(next);
            }
            out.push_str(&rename_reference(&token, dotted));
            previous = Some(ch);
            continue;
        }

        match ch {
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            '"' if depth > 0 => in_string = true,
            _ => {}
        }
        out.push(ch);
        if !ch.is_whitespace() {
            previous = Some(ch);
        }
    }
}

/// Renames the longest dotted definition `token` starts with.
///
/// `App.Name.tooltip` with `App.Name` defined becomes `App-Name.tooltip`, an
/// attribute of the renamed message.
fn rename_reference(token: &str, dotted: &HashSet<&str>) -> String {
    let longest = token
        .match_indices('.')
        .map(|(index, _)| index)
        .chain(std::iter::once(token.len()))
        .filter_map(|end| token.get(..end))
        .filter(|prefix| dotted.contains(prefix))
        .last();
    match longest {
        Some(prefix) => {
            let rest = token.get(prefix.len()..).unwrap_or_default();
            format!("{}{rest}", fluent_id(prefix))
        }
        None => token.to_owned(),
    }
}

impl FluentResolverBuilder {
    /// Creates a builder for the requested locale.
    #[must_use]
    pub fn new(locale: LanguageIdentifier) -> Self {
        Self {
            locale,
            sources: Vec::new(),
            report_issue: super::default_reporter(),
        }
    }

    /// Registers an in-memory table. `None` names the primary table.
    ///
    /// Dotted keys are stored under dashed Fluent ids, so `Button.Title` and
    /// `Button-Title` name the same message. A table defining both fails to
    /// build with [`FluentResolverError::Registration`], and a lookup of
    /// either spelling finds whichever one the table defines.
    #[must_use]
    pub fn with_table(
        mut self,
        scope: Scope,
        table: Option<&str>,
        source: impl Into<String>,
    ) -> Self {
        self.sources.push(TableSource::Inline {
            scope,
            table: table.unwrap_or(PRIMARY_TABLE).to_owned(),
            source: source.into(),
        });
        self
    }

    /// Registers every `*.ftl` file in `dir` as a table of `scope`.
    ///
    /// The file stem names the table, so `Localizable.ftl` backs the primary
    /// table. The directory is read when the resolver is built, and each file
    /// follows the key rules of [`Self::with_table`].
    #[must_use]
    pub fn with_table_dir(mut self, scope: Scope, dir: impl Into<Utf8PathBuf>) -> Self {
        self.sources.push(TableSource::Directory {
            scope,
            dir: dir.into(),
        });
        self
    }

    /// Installs a hook to report formatting issues surfaced by Fluent.
    #[must_use]
    pub fn with_error_reporter(mut self, reporter: FormattingIssueReporter) -> Self {
        self.report_issue = reporter;
        self
    }

    /// Builds the [`FluentResolver`], parsing every registered table.
    ///
    /// # Errors
    ///
    /// Returns [`FluentResolverError`] when a directory cannot be read, a
    /// table fails to parse or register, or a table is supplied twice for the
    /// same scope.
    pub fn try_build(self) -> Result<FluentResolver, FluentResolverError> {
        let mut tables: Vec<TableBundle> = Vec::new();
        for source in self.sources {
            let entries = match source {
                TableSource::Inline {
                    scope,
                    table,
                    source: text,
                } => vec![(scope, table, text)],
                TableSource::Directory { scope, dir } => read_table_dir(&dir)?
                    .into_iter()
                    .map(|(table, text)| (scope.clone(), table, text))
                    .collect(),
            };

            for (scope, table, text) in entries {
                if tables
                    .iter()
                    .any(|bundle| bundle.scope == scope && bundle.table == table)
                {
                    return Err(FluentResolverError::DuplicateTable { scope, table });
                }
                tables.push(bundle_from_source(&self.locale, scope, table, &text)?);
            }
        }

        Ok(FluentResolver {
            locale: self.locale,
            tables,
            report_issue: self.report_issue,
        })
    }
}

impl fmt::Debug for FluentResolverBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FluentResolverBuilder")
            .field("locale", &self.locale)
            .field("sources", &self.sources)
            .field("report_issue", &"<formatter>")
            .finish()
    }
}
