use crate::config::{GlobalConfig, MergePolicy};
use crate::error::Result;
use crate::loader::SourceLoader;
use crate::renderer::TemplateCache;
use crate::template::data::process_data_files;
use crate::template::processor::TemplateProcessor;
use log::info;
use std::path::PathBuf;

/// Switches of one pipeline run.
#[derive(Debug, Default, Clone, Copy)]
pub struct PipelineOptions {
    pub policy: MergePolicy,
    pub dry_run: bool,
    pub show_output_dir: bool,
}

/// Runs both render stages with one template cache.
pub struct Pipeline<'a> {
    template_loader: &'a dyn SourceLoader,
    cache: TemplateCache,
    options: PipelineOptions,
}

impl<'a> Pipeline<'a> {
    pub fn new(template_loader: &'a dyn SourceLoader, options: PipelineOptions) -> Self {
        Self { template_loader, cache: TemplateCache::new(), options }
    }

    pub fn cache(&self) -> &TemplateCache {
        &self.cache
    }

    /// Resolves the data files into directives, then renders every directive
    /// under `output_root`. Returns the rendered targets in render order.
    pub fn run<P: AsRef<std::path::Path>>(
        &mut self,
        mut config: GlobalConfig,
        data_files: &[P],
        output_root: PathBuf,
    ) -> Result<Vec<PathBuf>> {
        process_data_files(&mut config, data_files, &mut self.cache, self.options.policy)?;
        config.resolve_job_configs(self.options.policy)?;

        let rendered = TemplateProcessor::new(self.template_loader, &mut self.cache, output_root)
            .dry_run(self.options.dry_run)
            .show_output_dir(self.options.show_output_dir)
            .process_all(&config)?;
        info!("Rendered {} files", rendered.len());
        Ok(rendered)
    }
}
