use super::*;

#[test]
fn test_all_outside() {
  assert_eq!(classify(&[1.0; 8], 0.0), 0);
}

#[test]
fn test_all_inside() {
  assert_eq!(classify(&[-1.0; 8], 0.0), 255);
}

#[test]
fn test_exactly_on_level_counts_as_inside() {
  // Inclusive comparison: density == level sets the bit
  assert_eq!(classify(&[0.0; 8], 0.0), 255);

  let mut densities = [1.0; 8];
  densities[3] = 0.0;
  assert_eq!(classify(&densities, 0.0), 1 << 3);
}

#[test]
fn test_single_corner_bits() {
  for corner in 0..8 {
    let mut densities = [1.0; 8];
    densities[corner] = -1.0;
    assert_eq!(
      classify(&densities, 0.0),
      1 << corner,
      "Corner {} should map to bit {}",
      corner,
      corner
    );
  }
}

#[test]
fn test_nonzero_level() {
  let densities = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
  // Level 3.0 includes corners 0..=3
  assert_eq!(classify(&densities, 3.0), 0b0000_1111);
  // Level 6.5 includes corners 0..=6
  assert_eq!(classify(&densities, 6.5), 0b0111_1111);
}

#[test]
fn test_deterministic() {
  let densities = [-0.5, 0.25, 1.5, -2.0, 0.0, 3.0, -0.1, 0.7];
  let first = classify(&densities, 0.25);
  for _ in 0..100 {
    assert_eq!(classify(&densities, 0.25), first);
  }
}
