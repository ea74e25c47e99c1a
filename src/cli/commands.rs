//! CLI command implementations
//!
//! All command functions return `CliResult<T>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::SchemaConfig;
use crate::creator::{Creator, EnumCreator};
use crate::helpers::AutoNameStrategy;
use crate::introspect::{ClassIndex, ClassInfo};
use crate::model::{EnumType, Reference, ReferenceType};

use super::{CliError, CliResult};

/// Options of the `enums` command.
#[derive(Debug, Clone, Default)]
pub struct EnumsOptions {
    /// Classes to build; empty means every class marked as an enum.
    pub classes: Vec<String>,
    /// Overrides the config's auto-name strategy.
    pub strategy: Option<AutoNameStrategy>,
    pub config: Option<PathBuf>,
    pub pretty: bool,
}

/// Build enum descriptors for the classes of the index at `index_path` and render them as JSON.
pub fn build_enums(index_path: &Path, options: &EnumsOptions) -> CliResult<String> {
    let mut config = match &options.config {
        Some(path) => SchemaConfig::load(path)?,
        None => SchemaConfig::default(),
    };
    if let Some(strategy) = options.strategy {
        config = config.with_auto_name_strategy(strategy);
    }

    let index = ClassIndex::load(index_path)?;
    let enum_types = create_enums(&index, &options.classes, &config)?;
    tracing::info!(count = enum_types.len(), index = %index_path.display(), "built enum types");

    let rendered = if options.pretty {
        serde_json::to_string_pretty(&enum_types)
    } else {
        serde_json::to_string(&enum_types)
    };
    rendered.map_err(|e| CliError::failure(format!("Error serializing enum types: {e}")))
}

/// Run the enum creator over the selected classes of `index`, in selection order.
pub fn create_enums(index: &ClassIndex, classes: &[String], config: &SchemaConfig) -> CliResult<Vec<EnumType>> {
    let mut creator = EnumCreator::from_config(config);
    if let Some(directives) = config.directives(index.directives.iter().cloned()) {
        creator.set_directives(Arc::new(directives));
    }

    let selected: Vec<&ClassInfo> = if classes.is_empty() {
        index.enums().collect()
    } else {
        index.classes_named(classes)?
    };
    if selected.is_empty() {
        tracing::warn!("no enum classes selected");
    }

    selected
        .into_iter()
        .map(|class| {
            let reference = Reference::new(class.name.clone(), class.simple_name(), ReferenceType::Enum);
            creator.create(class, &reference).map_err(CliError::from)
        })
        .collect()
}
