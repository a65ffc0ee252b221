use std::path::Path;

/// Ordered list of class names, index-aligned with the model output.
#[derive(Debug, Clone)]
pub struct LabelSet {
    labels: Vec<String>,
}

impl LabelSet {
    /// Load labels from a newline-delimited file.
    ///
    /// Lines are trimmed; blank lines are skipped so a trailing newline does
    /// not shift the index alignment.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            anyhow::bail!(
                "Label file not found. Expected location:\n  - {}",
                path.display()
            );
        }

        let contents = std::fs::read_to_string(path)?;
        let labels: Vec<String> = contents
            .lines()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();

        if labels.is_empty() {
            anyhow::bail!("Label file is empty: {}", path.display());
        }

        Ok(Self { labels })
    }

    /// Build a label set from in-memory names.
    pub fn from_names(names: Vec<String>) -> Self {
        Self { labels: names }
    }

    /// Label for a class index, if the index is in range.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
