//! Stage B: render every directive's templates into output files.

use crate::config::{FromTo, GlobalConfig, Mapping, RenderConfig, TemplateDirective};
use crate::constants::OUTPUT_LOG_TARGET;
use crate::error::{Error, Result};
use crate::ioutils::create_dir_all;
use crate::loader::SourceLoader;
use crate::renderer::{resolve, CompiledTemplate, TemplateCache};
use crate::template::header::{comment_marker, write_header};
use crate::template::operation::RenderOperation;
use log::{debug, info};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// What an output template sees.
#[derive(Serialize)]
pub struct RenderContext<'a> {
    #[serde(rename = "Values")]
    pub values: &'a Mapping,
    #[serde(rename = "Global")]
    pub global: &'a Mapping,
}

pub struct TemplateProcessor<'a> {
    /// Dependencies
    loader: &'a dyn SourceLoader,
    cache: &'a mut TemplateCache,

    /// Other
    output_root: PathBuf,
    dry_run: bool,
    show_output_dir: bool,
}

impl<'a> TemplateProcessor<'a> {
    pub fn new(
        loader: &'a dyn SourceLoader,
        cache: &'a mut TemplateCache,
        output_root: PathBuf,
    ) -> Self {
        Self { loader, cache, output_root, dry_run: false, show_output_dir: false }
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn show_output_dir(mut self, show_output_dir: bool) -> Self {
        self.show_output_dir = show_output_dir;
        self
    }

    /// Renders all directives of `config`, in order, and returns the rendered
    /// targets. The first failure aborts; files written before it stay.
    pub fn process_all(&mut self, config: &GlobalConfig) -> Result<Vec<PathBuf>> {
        let mut rendered = Vec::new();
        for directive in &config.templates {
            rendered.extend(self.process_directive(directive, &config.global)?);
        }
        Ok(rendered)
    }

    /// Renders every FromTo of `directive` once per render config.
    pub fn process_directive(
        &mut self,
        directive: &TemplateDirective,
        global: &Mapping,
    ) -> Result<Vec<PathBuf>> {
        let mut rendered = Vec::new();
        for from_to in &directive.from_to {
            if self.show_output_dir {
                info!(target: OUTPUT_LOG_TARGET, "Rendering {from_to}");
            }
            let target = self.target_path(from_to);
            let template = resolve(&from_to.from, self.loader, self.cache)
                .map_err(|e| render_error(from_to, e))?;

            for render in &directive.render {
                let operation = plan(from_to, &target).map_err(|e| render_error(from_to, e))?;
                render_file(&template, &operation, render, global, self.dry_run)
                    .map_err(|e| render_error(from_to, e))?;
                info!("{}", operation.get_message(self.dry_run));
                rendered.push(target.clone());
            }
        }
        Ok(rendered)
    }

    /// Destination of `from_to`, relative to the output root.
    pub fn target_path(&self, from_to: &FromTo) -> PathBuf {
        self.output_root.join(&from_to.to)
    }
}

fn render_error(from_to: &FromTo, e: Error) -> Error {
    Error::RenderError { from_to: from_to.to_string(), e: Box::new(e) }
}

/// Resolves everything needed before the target is touched.
fn plan(from_to: &FromTo, target: &Path) -> Result<RenderOperation> {
    Ok(RenderOperation {
        from_to: from_to.clone(),
        target: target.to_path_buf(),
        marker: comment_marker(target)?,
        target_exists: target.exists(),
    })
}

fn output_error(target: &Path) -> impl FnOnce(std::io::Error) -> Error + '_ {
    move |e| Error::OutputError { path: target.display().to_string(), e }
}

/// Writes the header and streams the template output into the target file.
fn render_file(
    template: &CompiledTemplate<'_>,
    operation: &RenderOperation,
    render: &RenderConfig,
    global: &Mapping,
    dry_run: bool,
) -> Result<()> {
    let ctx = RenderContext { values: &render.values, global };
    let target = operation.target.as_path();

    if dry_run {
        let content = template.render(ctx)?;
        debug!("Would write {} bytes to {}", content.len(), target.display());
        return Ok(());
    }

    if let Some(parent) = target.parent() {
        create_dir_all(parent)?;
    }
    let file = File::create(target).map_err(output_error(target))?;
    let mut writer = BufWriter::new(file);
    write_header(&mut writer, operation.marker).map_err(output_error(target))?;
    template.render_to_write(ctx, &mut writer)?;
    writer.flush().map_err(output_error(target))
}
