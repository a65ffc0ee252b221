pub mod labels;
pub mod model;
pub mod postprocess;
pub mod preprocessing;

use anyhow::Result;
use image::DynamicImage;
use rten::Model;
use std::path::Path;

use crate::models::Prediction;
use labels::LabelSet;

/// Still-image sign classifier.
///
/// Owns the loaded model and label list; both artifacts are read once at
/// startup and reused for every capture.
pub struct SignClassifier {
    model: Model,
    labels: LabelSet,
    verbose: bool,
}

impl SignClassifier {
    /// Load the model and label artifacts.
    ///
    /// If the model declares a fixed output class dimension it must match the
    /// label count; a mismatch means the two bundled artifacts are from
    /// different exports and every prediction would be mislabeled.
    pub fn load(model_path: &Path, labels_path: &Path) -> Result<Self> {
        let model = model::load_model(model_path)?;
        let labels = LabelSet::load(labels_path)?;

        if let Some(classes) = model::declared_class_count(&model) {
            if classes != labels.len() {
                anyhow::bail!(
                    "Model predicts {} classes but the label file has {} entries",
                    classes,
                    labels.len()
                );
            }
        }

        Ok(Self {
            model,
            labels,
            verbose: false,
        })
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn labels(&self) -> &LabelSet {
        &self.labels
    }

    /// Classify one still image: resize, normalize, run a forward pass and
    /// select the winning class.
    pub fn classify(&self, img: &DynamicImage) -> Result<Prediction> {
        if self.verbose {
            println!(
                "Preprocessing {}x{} image to {}x{} input...",
                img.width(),
                img.height(),
                preprocessing::INPUT_SIZE,
                preprocessing::INPUT_SIZE
            );
        }
        let input = preprocessing::prepare_input(img);

        if self.verbose {
            println!("Running inference...");
        }
        let scores = model::run_scores(&self.model, input)?;

        if scores.len() != self.labels.len() {
            anyhow::bail!(
                "Model produced {} scores but the label file has {} entries",
                scores.len(),
                self.labels.len()
            );
        }

        let (index, score) = postprocess::top_class(&scores)
            .ok_or_else(|| anyhow::anyhow!("Model produced an empty score vector"))?;

        let label = self
            .labels
            .get(index)
            .ok_or_else(|| anyhow::anyhow!("Predicted class {} has no label", index))?
            .to_string();

        if self.verbose {
            println!("  → {} ({})", label, postprocess::format_confidence(score));
        }

        Ok(Prediction {
            index,
            label,
            score,
        })
    }
}
