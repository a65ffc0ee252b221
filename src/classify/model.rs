use anyhow::Result;
use rten::{Dimension, Model};
use rten_tensor::prelude::*;
use rten_tensor::{NdTensor, Tensor};
use std::path::Path;

/// Load the classification model from disk.
pub fn load_model(path: &Path) -> Result<Model> {
    if !path.exists() {
        anyhow::bail!(
            "Model file not found. Expected location:\n  - {}",
            path.display()
        );
    }

    let model = Model::load_file(path)?;
    Ok(model)
}

/// Class count declared by the model's output shape, when it is fixed.
///
/// Models exported with a symbolic class dimension return None; the score
/// vector is then validated against the label list at inference time instead.
pub fn declared_class_count(model: &Model) -> Option<usize> {
    let output_id = model.output_ids().first().copied()?;
    let shape = model.node_info(output_id)?.shape()?;
    match shape.last()? {
        Dimension::Fixed(size) => Some(*size),
        Dimension::Symbolic(_) => None,
    }
}

/// Run one forward pass and return the flattened per-class score vector.
pub fn run_scores(model: &Model, input: NdTensor<f32, 4>) -> Result<Vec<f32>> {
    let output = model
        .run_one(input.view().into(), None)
        .map_err(|e| anyhow::anyhow!("Model execution failed: {}", e))?;

    // Classifier output is [batch, classes]; flatten so a model exported
    // without the batch dimension still works.
    let scores: Tensor<f32> = output
        .try_into()
        .map_err(|e| anyhow::anyhow!("Unexpected model output type: {:?}", e))?;

    Ok(scores.iter().copied().collect())
}
