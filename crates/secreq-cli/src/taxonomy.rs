//! # Taxonomy Subcommand
//!
//! Prints the effective keyword taxonomy (built-in, or the one from
//! `--config`) in the same YAML shape the configuration file accepts.

use anyhow::{Context, Result};
use clap::Args;

use secreq_report::PipelineConfig;

/// Arguments for the `secreq taxonomy` subcommand.
#[derive(Args, Debug)]
pub struct TaxonomyArgs {}

/// Render the effective taxonomy as YAML.
pub fn taxonomy_yaml(config: &PipelineConfig) -> Result<String> {
    let taxonomy = config
        .taxonomy()
        .context("invalid taxonomy in configuration")?;
    serde_yaml::to_string(&taxonomy.to_def()).context("failed to render taxonomy")
}

/// Execute the taxonomy subcommand.
pub fn run_taxonomy(_args: &TaxonomyArgs, config: &PipelineConfig) -> Result<u8> {
    print!("{}", taxonomy_yaml(config)?);
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_taxonomy_renders_all_axes() {
        let yaml = taxonomy_yaml(&PipelineConfig::default()).unwrap();
        assert!(yaml.contains("characteristics:"));
        assert!(yaml.contains("Human/Trust:"));
        assert!(yaml.contains("info_states:"));
        assert!(yaml.contains("measure_types:"));
        assert!(!yaml.contains("all:"));
    }

    #[test]
    fn rendered_yaml_loads_back_as_config() {
        let yaml = taxonomy_yaml(&PipelineConfig::default()).unwrap();
        let indented: String = yaml.lines().map(|l| format!("  {l}\n")).collect();
        let config = PipelineConfig::from_yaml_str(&format!("taxonomy:\n{indented}")).unwrap();
        assert_eq!(
            config.taxonomy().unwrap(),
            secreq_core::Taxonomy::builtin()
        );
    }
}
