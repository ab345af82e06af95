//! Option parsing from files and strings.

use std::{path::Path, str::FromStr};

use miette::SourceSpan;
use serde::Deserialize;
use toml::Spanned;

use crate::{Error, Options, Result, SourceContext};

const DEFAULT_FILENAME: &str = "bindweave.toml";

/// On-disk shape of the options file; keeps spans for validation errors.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawOptions {
    #[serde(default)]
    generate_library_namespace: bool,
    #[serde(default)]
    output_namespace: Option<Spanned<String>>,
}

impl FromStr for Options {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_options(s, DEFAULT_FILENAME)
    }
}

impl Options {
    /// Parse options from the file at `path`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_options(&content, &path.display().to_string())
    }

    /// Parse options from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_options(content, filename)
    }
}

/// Parse and validate options from `content`.
pub fn parse_options(content: &str, filename: &str) -> Result<Options> {
    let ctx = SourceContext::new(content, filename);
    let raw: RawOptions = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
    validate(&raw, &ctx)?;

    Ok(Options {
        generate_library_namespace: raw.generate_library_namespace,
        output_namespace: raw
            .output_namespace
            .map(Spanned::into_inner)
            .unwrap_or_default(),
    })
}

fn validate(raw: &RawOptions, ctx: &SourceContext) -> Result<()> {
    if !raw.generate_library_namespace {
        return Ok(());
    }

    let Some(namespace) = &raw.output_namespace else {
        return Err(ctx.validation_error(
            "output_namespace is required when generate_library_namespace is enabled",
            None,
        ));
    };

    let span = Some(SourceSpan::from(namespace.span()));
    let value = namespace.get_ref();
    if value.trim().is_empty() {
        return Err(ctx.validation_error("output_namespace must not be empty", span));
    }
    if value.split("::").any(|segment| segment.trim().is_empty()) {
        return Err(ctx.validation_error(
            format!("output_namespace '{value}' has an empty '::' segment"),
            span,
        ));
    }
    Ok(())
}
