// learnix-train/src/trainer_test.rs

use super::*;
use crate::loss::HuberLoss;
use approx::assert_relative_eq;
use learnix_data::datasets::SortedKeyDataset;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("learnix-trainer-{}-{}", std::process::id(), name))
}

fn small_config(name: &str) -> TrainConfig {
    TrainConfig {
        batch_size: 4,
        num_epochs: 3,
        dataset_size: 16,
        max_value: 50.0,
        loss_path: temp_path(name),
    }
}

fn small_dataset() -> SortedKeyDataset<u64> {
    SortedKeyDataset::new((0..16u64).map(|i| i * 3).collect()).unwrap()
}

/// Ignores its input and always predicts the same normalized position.
#[derive(Debug)]
struct ConstantModel {
    value: f32,
    backward_calls: usize,
    step_calls: usize,
}

impl ConstantModel {
    fn new(value: f32) -> Self {
        ConstantModel {
            value,
            backward_calls: 0,
            step_calls: 0,
        }
    }
}

impl Model for ConstantModel {
    fn forward(&mut self, input: &[f32]) -> Result<Vec<f32>, TrainError> {
        Ok(vec![self.value; input.len()])
    }

    fn backward(&mut self, grad: &[f32]) -> Result<(), TrainError> {
        assert!(!grad.is_empty());
        self.backward_calls += 1;
        Ok(())
    }

    fn step(&mut self) {
        self.step_calls += 1;
    }
}

/// Always returns one value too few, whatever the input.
#[derive(Debug)]
struct TruncatingModel;

impl Model for TruncatingModel {
    fn forward(&mut self, input: &[f32]) -> Result<Vec<f32>, TrainError> {
        Ok(vec![0.0; input.len().saturating_sub(1)])
    }

    fn backward(&mut self, _grad: &[f32]) -> Result<(), TrainError> {
        Ok(())
    }

    fn step(&mut self) {}
}

#[test]
fn test_run_drives_model_and_writes_loss_log() {
    let config = small_config("run.csv");
    let loss_path = config.loss_path.clone();
    let mut trainer = Trainer::new(config, ConstantModel::new(0.5), HuberLoss::default()).unwrap();
    let mut rng = StdRng::seed_from_u64(1);

    let report = trainer.run(&small_dataset(), &mut rng).unwrap();
    assert_eq!(report.epochs, 3);
    assert!(report.final_loss.is_finite());

    let contents = fs::read_to_string(&loss_path).unwrap();
    let rows: Vec<&str> = contents.lines().collect();
    assert_eq!(rows.len(), 3);
    for (epoch, row) in rows.iter().enumerate() {
        let (logged_epoch, logged_loss) = row.split_once(',').unwrap();
        assert_eq!(logged_epoch.trim().parse::<usize>().unwrap(), epoch);
        assert!(logged_loss.trim().parse::<f32>().unwrap().is_finite());
    }

    let model = trainer.into_model();
    assert_eq!(model.backward_calls, 3);
    assert_eq!(model.step_calls, 3);
    fs::remove_file(&loss_path).unwrap();
}

#[test]
fn test_run_rejects_mismatched_dataset() {
    let config = small_config("mismatch.csv");
    let mut trainer = Trainer::new(config, ConstantModel::new(0.5), HuberLoss::default()).unwrap();
    let mut rng = StdRng::seed_from_u64(2);

    let dataset = SortedKeyDataset::new((0..8u64).collect()).unwrap();
    assert!(matches!(
        trainer.run(&dataset, &mut rng),
        Err(TrainError::InvalidConfig { .. })
    ));
}

#[test]
fn test_run_surfaces_wrong_output_length() {
    let config = small_config("truncating.csv");
    let loss_path = config.loss_path.clone();
    let mut trainer = Trainer::new(config, TruncatingModel, HuberLoss::default()).unwrap();
    let mut rng = StdRng::seed_from_u64(3);

    assert!(matches!(
        trainer.run(&small_dataset(), &mut rng),
        Err(TrainError::Model { .. })
    ));
    let _ = fs::remove_file(&loss_path);
}

#[test]
fn test_new_rejects_invalid_config() {
    let config = TrainConfig {
        batch_size: 0,
        ..small_config("invalid.csv")
    };
    assert!(matches!(
        Trainer::new(config, ConstantModel::new(0.5), HuberLoss::default()),
        Err(TrainError::InvalidConfig { .. })
    ));
}

#[test]
fn test_evaluate_rescales_predictions() {
    let config = small_config("eval.csv");
    let mut trainer = Trainer::new(config, ConstantModel::new(0.25), HuberLoss::default()).unwrap();
    let mut rng = StdRng::seed_from_u64(4);

    let dataset = small_dataset();
    let rows = trainer.evaluate(&dataset, &mut rng).unwrap();
    assert_eq!(rows.len(), 4);
    for row in &rows {
        // 0.25 normalized, rescaled by the 16-key dataset.
        assert_relative_eq!(row.predicted_position, 4.0);
        assert_eq!(
            dataset.keys()[row.position as usize] as f32,
            row.key,
            "evaluation rows must pair keys with their true positions"
        );
    }
}
