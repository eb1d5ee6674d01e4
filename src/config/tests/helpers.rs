//! Layer builders shared by the configuration tests.

use ortho_config::MergeComposer;
use serde_json::Value;

use crate::CuratorConfig;

/// Configuration sources, lowest precedence first.
#[derive(Debug, Clone, Copy)]
pub enum Source {
    Defaults,
    File,
    Environment,
    Cli,
}

/// Merges `layers` in the given order into a [`CuratorConfig`].
pub fn merge(layers: impl IntoIterator<Item = (Source, Value)>) -> CuratorConfig {
    let mut composer = MergeComposer::new();
    for (source, value) in layers {
        match source {
            Source::Defaults => composer.push_defaults(value),
            Source::File => composer.push_file(value, None),
            Source::Environment => composer.push_environment(value),
            Source::Cli => composer.push_cli(value),
        }
    }
    CuratorConfig::merge_from_layers(composer.layers()).expect("layers should merge")
}
