//! Compile and evaluate entry points.

use crate::compiler;
use crate::error::Error;
use crate::interpreter::{Context, Evalable};
use crate::locale::LocaleTable;
use crate::parser::parse_template;

/// A compiled message, ready to evaluate any number of times.
///
/// `MessageFormat` is immutable and `Send + Sync`; share it behind an `Arc`
/// and give each evaluation its own [`Context`].
///
/// # Example
///
/// ```
/// use icumf::{CldrLocaleTable, Context, compile};
///
/// let table = CldrLocaleTable::new();
/// let message = compile("{n, plural, one {# file} other {# files}}", "en", &table).unwrap();
///
/// let mut ctx = Context::new().with("n", 1);
/// assert_eq!(message.format(&mut ctx).unwrap(), "1 file");
///
/// let mut ctx = Context::new().with("n", 5);
/// assert_eq!(message.format(&mut ctx).unwrap(), "5 files");
/// ```
#[derive(Debug, Clone)]
pub struct MessageFormat {
    source: String,
    language: String,
    root: Evalable,
}

impl MessageFormat {
    /// The template text this message was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The language tag as resolved by the locale table.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The root of the evaluation tree.
    pub fn root(&self) -> &Evalable {
        &self.root
    }

    /// Evaluate against `ctx`. On error no partial output is returned.
    pub fn format(&self, ctx: &mut Context) -> Result<String, Error> {
        self.root.eval(ctx).map_err(|source| Error::Evaluation {
            template: self.source.clone(),
            source,
        })
    }
}

/// Parse and compile a template for one language.
///
/// # Errors
///
/// Returns [`Error::Syntax`] for malformed templates and [`Error::Compile`]
/// for unknown functions, missing `other` cases, bad offsets, invalid case
/// names, or a language the table rejects.
pub fn compile<T: LocaleTable + ?Sized>(
    template: &str,
    language: &str,
    table: &T,
) -> Result<MessageFormat, Error> {
    let ast = parse_template(template)?;
    let rules = table.rules(language)?;
    let root = compiler::build(&ast, &rules)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        template,
        language = rules.language(),
        fragments = ast.fragments.len(),
        "compiled message"
    );

    Ok(MessageFormat {
        source: template.to_string(),
        language: rules.language().to_string(),
        root,
    })
}

/// Evaluate a compiled message. Same as [`MessageFormat::format`].
pub fn evaluate(message: &MessageFormat, ctx: &mut Context) -> Result<String, Error> {
    message.format(ctx)
}
