use crate::{
    cli::Args,
    config::{GlobalConfig, MergePolicy},
    constants::github,
    error::Result,
    ioutils::{collect_data_files, output_base_for_file},
    loader::{GithubLoader, LocalLoader, TemplateSource},
    template::{Pipeline, PipelineOptions},
};
use log::{debug, info};
use std::path::PathBuf;

/// Main CLI runner that orchestrates config loading, data file discovery and rendering
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Executes the complete rendering workflow
    pub fn run(self) -> Result<Vec<PathBuf>> {
        let config = self.load_config()?;
        let (data_files, output_root) = self.collect_data_files()?;

        let source = TemplateSource::for_templates(self.args.templates.clone());
        info!("Reading templates from {source}");
        let template_loader = source.into_loader(self.token())?;

        let mut pipeline = Pipeline::new(template_loader.as_ref(), self.options());
        let rendered = pipeline.run(config, &data_files, output_root)?;

        if self.args.dry_run {
            info!("Dry run finished, {} files would be rendered", rendered.len());
        }
        Ok(rendered)
    }

    /// Loads the primary config from `--config`, or from GitHub when it is omitted
    fn load_config(&self) -> Result<GlobalConfig> {
        match &self.args.config {
            Some(path) => {
                let loader = LocalLoader::unrooted();
                GlobalConfig::load(&loader, &path.display().to_string())
            }
            None => {
                let loader = GithubLoader::new(github::CONFIG_DIR, self.token())?;
                GlobalConfig::load(&loader, github::CONFIG_FILE)
            }
        }
    }

    /// Returns the data files to process and the directory outputs are written under
    fn collect_data_files(&self) -> Result<(Vec<PathBuf>, PathBuf)> {
        match &self.args.data_file {
            Some(data_file) => {
                debug!("Using single data file {}", data_file.display());
                Ok((vec![data_file.clone()], output_base_for_file(data_file)))
            }
            None => {
                let data_files = collect_data_files(&self.args.data)?;
                debug!("Found {} data files in {}", data_files.len(), self.args.data.display());
                Ok((data_files, self.args.data.clone()))
            }
        }
    }

    fn options(&self) -> PipelineOptions {
        PipelineOptions {
            policy: MergePolicy::new(self.args.append_slice),
            dry_run: self.args.dry_run,
            show_output_dir: self.args.show_output_dir,
        }
    }

    fn token(&self) -> Option<String> {
        self.args.gh_token.clone().filter(|token| !token.is_empty())
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<Vec<PathBuf>> {
    let runner = Runner::new(args);
    runner.run()
}
