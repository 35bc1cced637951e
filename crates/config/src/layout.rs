use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Data directory convention: raw downloads under `data_raw`, intermediate
/// and sample data under `data_clean`, results under `outputs`. All three
/// are resolved against a project root chosen by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataLayout {
    pub data_raw: String,
    pub data_clean: String,
    pub outputs: String,
}

impl Default for DataLayout {
    fn default() -> Self {
        Self {
            data_raw: "data_raw".into(),
            data_clean: "data_clean".into(),
            outputs: "outputs".into(),
        }
    }
}

impl DataLayout {
    pub fn raw_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.data_raw)
    }

    pub fn clean_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.data_clean)
    }

    pub fn outputs_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.outputs)
    }

    /// Default demographics input (written by `ongap sample`).
    pub fn demographics_path(&self, root: &Path) -> PathBuf {
        self.clean_dir(root).join("sample_demographics.csv")
    }

    /// Default services input (written by `ongap sample`).
    pub fn services_path(&self, root: &Path) -> PathBuf {
        self.clean_dir(root).join("sample_services.csv")
    }

    /// Default results destination.
    pub fn results_path(&self, root: &Path) -> PathBuf {
        self.outputs_dir(root).join("gap_analysis_results.csv")
    }

    /// Raw files the `check` command looks for.
    pub fn expected_raw_files(&self, root: &Path) -> Vec<PathBuf> {
        ["census_data.csv", "services_data.csv", "postal_codes.csv"]
            .iter()
            .map(|name| self.raw_dir(root).join(name))
            .collect()
    }
}
