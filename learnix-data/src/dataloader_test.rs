// learnix-data/src/dataloader_test.rs

use super::*;
use crate::datasets::SortedKeyDataset;
use crate::samplers::DistinctRandomSampler;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn dataset() -> SortedKeyDataset<u64> {
    SortedKeyDataset::new(vec![2u64, 3, 5, 8, 13, 21, 34, 55, 89, 100]).unwrap()
}

#[test]
fn test_next_batch_shape_and_pairing() {
    let dataset = dataset();
    let keys = dataset.keys().to_vec();
    let loader = DataLoader::new(dataset, DistinctRandomSampler::new(4));
    let mut rng = StdRng::seed_from_u64(1);

    let batch = loader.next_batch(&mut rng).unwrap();
    assert_eq!(batch.len(), 4);
    assert_eq!(batch.keys.len(), batch.positions.len());
    for (key, position) in batch.keys.iter().zip(&batch.positions) {
        // Every row must pair a key with its own rank.
        assert_eq!(*key, keys[*position as usize] as f32);
    }
}

#[test]
fn test_next_batch_rows_are_distinct() {
    let loader = DataLoader::new(dataset(), DistinctRandomSampler::new(10));
    let mut rng = StdRng::seed_from_u64(2);
    let batch = loader.next_batch(&mut rng).unwrap();
    let positions: HashSet<u64> = batch.positions.iter().map(|&p| p as u64).collect();
    assert_eq!(positions.len(), 10);
}

#[test]
fn test_next_batch_resamples_each_call() {
    let loader = DataLoader::new(dataset(), DistinctRandomSampler::new(4));
    let mut rng = StdRng::seed_from_u64(3);
    let batches: Vec<HashSet<u64>> = (0..10)
        .map(|_| {
            let batch = loader.next_batch(&mut rng).unwrap();
            batch.positions.iter().map(|&p| p as u64).collect()
        })
        .collect();
    // Ten draws of 4 out of 10 repeating the same subset every time would
    // mean the sampler is not being re-invoked.
    assert!(batches.windows(2).any(|pair| pair[0] != pair[1]));
}

#[test]
fn test_next_batch_oversized_request_fails() {
    let loader = DataLoader::new(dataset(), DistinctRandomSampler::new(11));
    let mut rng = StdRng::seed_from_u64(4);
    assert!(matches!(
        loader.next_batch(&mut rng),
        Err(DataError::InvalidArgument { .. })
    ));
}

#[test]
fn test_next_batch_empty_sampler_gives_empty_batch() {
    let loader = DataLoader::new(dataset(), DistinctRandomSampler::new(0));
    let mut rng = StdRng::seed_from_u64(5);
    let batch = loader.next_batch(&mut rng).unwrap();
    assert!(batch.is_empty());
}

#[test]
fn test_loader_works_over_a_borrowed_dataset() {
    let dataset = dataset();
    let loader = DataLoader::new(&dataset, DistinctRandomSampler::new(3));
    let mut rng = StdRng::seed_from_u64(6);
    let batch = loader.next_batch(&mut rng).unwrap();
    assert_eq!(batch.len(), 3);
    assert_eq!(loader.dataset().len(), 10);
}
