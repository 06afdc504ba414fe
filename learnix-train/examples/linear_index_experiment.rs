//! Single-layer position-prediction experiment.
//!
//! Trains a one-weight linear regressor (with Adam) to predict the rank of a
//! key inside a sorted list of 1000 integer lognormals rescaled to a maximum
//! of 100 — the precursor experiment to the second level of a Recursive
//! Model Index. The per-epoch loss goes to stdout and `loss.csv`; after
//! training, one line per held-out example prints the key, its true position
//! and the rescaled prediction.
//!
//! Run with: `cargo run --example linear_index_experiment`

use learnix_data::datasets::SortedKeyDataset;
use learnix_data::generators::LognormalKeys;
use learnix_train::config::TrainConfig;
use learnix_train::error::TrainError;
use learnix_train::loss::HuberLoss;
use learnix_train::model::Model;
use learnix_train::trainer::Trainer;
use rand::rngs::StdRng;
use rand::SeedableRng;

const BETA1: f32 = 0.9;
const BETA2: f32 = 0.999;
const EPSILON: f32 = 1e-8;

/// One-weight linear regressor updated by Adam — the smallest possible
/// stand-in for the external network collaborator.
struct LinearModel {
    weight: f32,
    bias: f32,
    learning_rate: f32,
    last_input: Vec<f32>,
    grad_weight: f32,
    grad_bias: f32,
    weight_moments: (f32, f32),
    bias_moments: (f32, f32),
    steps: i32,
}

impl LinearModel {
    fn new(learning_rate: f32) -> Self {
        LinearModel {
            weight: 0.0,
            bias: 0.0,
            learning_rate,
            last_input: Vec::new(),
            grad_weight: 0.0,
            grad_bias: 0.0,
            weight_moments: (0.0, 0.0),
            bias_moments: (0.0, 0.0),
            steps: 0,
        }
    }

    fn adam_update(
        parameter: &mut f32,
        gradient: f32,
        moments: &mut (f32, f32),
        learning_rate: f32,
        steps: i32,
    ) {
        let (m, v) = *moments;
        let m = BETA1 * m + (1.0 - BETA1) * gradient;
        let v = BETA2 * v + (1.0 - BETA2) * gradient * gradient;
        *moments = (m, v);
        let m_hat = m / (1.0 - BETA1.powi(steps));
        let v_hat = v / (1.0 - BETA2.powi(steps));
        *parameter -= learning_rate * m_hat / (v_hat.sqrt() + EPSILON);
    }
}

impl Model for LinearModel {
    fn forward(&mut self, input: &[f32]) -> Result<Vec<f32>, TrainError> {
        self.last_input = input.to_vec();
        Ok(input.iter().map(|&x| self.weight * x + self.bias).collect())
    }

    fn backward(&mut self, grad: &[f32]) -> Result<(), TrainError> {
        for (&g, &x) in grad.iter().zip(&self.last_input) {
            self.grad_weight += g * x;
            self.grad_bias += g;
        }
        Ok(())
    }

    fn step(&mut self) {
        self.steps += 1;
        Self::adam_update(
            &mut self.weight,
            self.grad_weight,
            &mut self.weight_moments,
            self.learning_rate,
            self.steps,
        );
        Self::adam_update(
            &mut self.bias,
            self.grad_bias,
            &mut self.bias_moments,
            self.learning_rate,
            self.steps,
        );
        self.grad_weight = 0.0;
        self.grad_bias = 0.0;
    }
}

fn main() -> Result<(), TrainError> {
    env_logger::init();

    let config = TrainConfig::default();
    let generator = LognormalKeys::new(config.dataset_size, config.max_value);
    let mut rng = StdRng::from_entropy();
    let dataset: SortedKeyDataset<u64> = SortedKeyDataset::from_generator(&generator, &mut rng)?;

    let mut trainer = Trainer::new(config, LinearModel::new(0.01), HuberLoss::default())?;
    trainer.run(&dataset, &mut rng)?;

    for row in trainer.evaluate(&dataset, &mut rng)? {
        row.print();
    }
    Ok(())
}
