// learnix-train/src/trainer.rs

use crate::config::TrainConfig;
use crate::error::TrainError;
use crate::loss_log::LossLog;
use crate::model::{LossFunction, Model};
use learnix_data::dataloader::DataLoader;
use learnix_data::datasets::Dataset;
use learnix_data::samplers::DistinctRandomSampler;
use num_traits::ToPrimitive;
use rand::RngCore;
use std::time::{Duration, Instant};

/// Outcome summary of a training run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainReport {
    /// Number of minibatch steps executed.
    pub epochs: usize,
    /// Loss of the last step.
    pub final_loss: f32,
    /// Wall-clock time of the whole loop.
    pub duration: Duration,
}

/// One evaluation example: the key, its true rank, and the model's rescaled
/// prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct EvalRow {
    pub key: f32,
    pub position: f32,
    pub predicted_position: f32,
}

impl EvalRow {
    /// Prints the row the way the experiment reports it: zero decimal
    /// places, comma-separated.
    pub fn print(&self) {
        println!(
            "{:.0}, {:.0}, {:.0}",
            self.key, self.position, self.predicted_position
        );
    }
}

/// Minibatch training loop for rank-position models.
///
/// Owns the experiment mechanics only: per-step batch sampling, the
/// normalized-position rescaling contract, console/CSV loss reporting and
/// timing. The model and the loss function are collaborators supplied by the
/// caller; the trainer never looks inside them.
#[derive(Debug)]
pub struct Trainer<M, L> {
    config: TrainConfig,
    model: M,
    loss_fn: L,
}

impl<M: Model, L: LossFunction> Trainer<M, L> {
    /// Creates a trainer after validating `config`.
    pub fn new(config: TrainConfig, model: M, loss_fn: L) -> Result<Self, TrainError> {
        config.validate()?;
        Ok(Trainer {
            config,
            model,
            loss_fn,
        })
    }

    /// The validated experiment configuration.
    pub fn config(&self) -> &TrainConfig {
        &self.config
    }

    /// Hands the model back, e.g. to inspect it after training.
    pub fn into_model(self) -> M {
        self.model
    }

    /// Runs the full experiment: `num_epochs` minibatch steps over `dataset`.
    ///
    /// Each step draws a fresh batch, multiplies the model's normalized
    /// output by the dataset size, prints and logs the loss, then feeds the
    /// down-scaled loss gradient back through the model and applies one
    /// optimizer update. The per-epoch `Epoch: <n> Loss: <v>` lines, the CSV
    /// rows and the closing timing summary make up the run's output contract.
    pub fn run<D, T, R>(&mut self, dataset: &D, rng: &mut R) -> Result<TrainReport, TrainError>
    where
        D: Dataset<Item = (T, usize)>,
        T: ToPrimitive,
        R: RngCore,
    {
        self.check_dataset(dataset)?;
        let loader = DataLoader::new(dataset, DistinctRandomSampler::new(self.config.batch_size));
        let mut loss_log = LossLog::create(&self.config.loss_path)?;
        let scale = self.config.dataset_size as f32;

        log::info!(
            "training for {} epochs: batch size {}, {} keys up to {}",
            self.config.num_epochs,
            self.config.batch_size,
            self.config.dataset_size,
            self.config.max_value
        );

        let start = Instant::now();
        let mut final_loss = 0.0;
        for epoch in 0..self.config.num_epochs {
            let batch = loader.next_batch(rng)?;

            let raw = self.model.forward(&batch.keys)?;
            check_output_len(raw.len(), batch.len())?;
            let predicted: Vec<f32> = raw.iter().map(|&p| p * scale).collect();

            let loss = self.loss_fn.loss(&predicted, &batch.positions);
            println!("Epoch: {} Loss: {}", epoch, loss);
            loss_log.record(epoch, loss)?;

            let mut grad = self.loss_fn.backward(&predicted, &batch.positions);
            for g in &mut grad {
                *g /= scale;
            }
            self.model.backward(&grad)?;
            self.model.step();

            final_loss = loss;
        }
        let duration = start.elapsed();
        println!(
            "Total training of {} iters took: {}s",
            self.config.num_epochs,
            duration.as_secs_f32()
        );
        loss_log.finish()?;

        Ok(TrainReport {
            epochs: self.config.num_epochs,
            final_loss,
            duration,
        })
    }

    /// Scores one fresh held-out batch without updating the model.
    pub fn evaluate<D, T, R>(&mut self, dataset: &D, rng: &mut R) -> Result<Vec<EvalRow>, TrainError>
    where
        D: Dataset<Item = (T, usize)>,
        T: ToPrimitive,
        R: RngCore,
    {
        self.check_dataset(dataset)?;
        let loader = DataLoader::new(dataset, DistinctRandomSampler::new(self.config.batch_size));
        let batch = loader.next_batch(rng)?;
        let raw = self.model.forward(&batch.keys)?;
        check_output_len(raw.len(), batch.len())?;
        log::debug!("evaluating {} held-out examples", batch.len());

        let scale = self.config.dataset_size as f32;
        Ok(batch
            .keys
            .iter()
            .zip(&batch.positions)
            .zip(&raw)
            .map(|((&key, &position), &raw_out)| EvalRow {
                key,
                position,
                predicted_position: raw_out * scale,
            })
            .collect())
    }

    fn check_dataset<D: Dataset>(&self, dataset: &D) -> Result<(), TrainError> {
        if dataset.len() != self.config.dataset_size {
            return Err(TrainError::InvalidConfig {
                message: format!(
                    "dataset holds {} keys but the configuration says {}",
                    dataset.len(),
                    self.config.dataset_size
                ),
            });
        }
        Ok(())
    }
}

fn check_output_len(actual: usize, expected: usize) -> Result<(), TrainError> {
    if actual != expected {
        return Err(TrainError::Model {
            message: format!("forward returned {} values for a batch of {}", actual, expected),
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "trainer_test.rs"]
mod tests;
