//! Cache of compiled templates, keyed by template identifier.

use crate::error::{Error, Result};
use crate::renderer::environment::new_environment;
use log::debug;
use minijinja::{Environment, Template};
use serde::Serialize;
use std::collections::HashSet;
use std::io::Write;

/// Compiled templates of one run.
///
/// An identifier always yields the same compiled template for the lifetime of
/// the cache; entries are never evicted or replaced.
pub struct TemplateCache {
    env: Environment<'static>,
    keys: HashSet<String>,
}

impl Default for TemplateCache {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateCache {
    pub fn new() -> Self {
        Self { env: new_environment(), keys: HashSet::new() }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Parses `source` and stores it under `key`.
    ///
    /// A key that is already cached keeps its first template.
    pub fn insert(&mut self, key: &str, source: String) -> Result<()> {
        if self.contains(key) {
            debug!("Template '{key}' already cached");
            return Ok(());
        }
        self.env
            .add_template_owned(key.to_string(), source)
            .map_err(|e| Error::TemplateParseError { name: key.to_string(), e })?;
        self.keys.insert(key.to_string());
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<CompiledTemplate<'_>> {
        if !self.contains(key) {
            return None;
        }
        self.env
            .get_template(key)
            .ok()
            .map(|template| CompiledTemplate { name: key.to_string(), template })
    }
}

/// A cached template ready to be executed.
pub struct CompiledTemplate<'c> {
    name: String,
    template: Template<'c, 'c>,
}

impl CompiledTemplate<'_> {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Executes the template, returning the output.
    pub fn render<S: Serialize>(&self, ctx: S) -> Result<String> {
        self.template.render(ctx).map_err(|e| self.execution_error(e))
    }

    /// Executes the template, streaming the output into `writer`.
    pub fn render_to_write<S: Serialize, W: Write>(&self, ctx: S, writer: W) -> Result<()> {
        self.template
            .render_captured_to(ctx, writer)
            .map(|_| ())
            .map_err(|e| self.execution_error(e))
    }

    fn execution_error(&self, e: minijinja::Error) -> Error {
        Error::TemplateExecutionError { name: self.name.clone(), e }
    }
}
