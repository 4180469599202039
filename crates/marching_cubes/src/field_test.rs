use super::*;

#[test]
fn test_new_rejects_tiny_grid() {
  let samples = vec![0.0; 1];
  assert_eq!(
    DensityField::new(&samples, 1).unwrap_err(),
    FieldError::GridTooSmall { samples_per_axis: 1 }
  );
  assert_eq!(
    DensityBuffer::new(samples, 0).unwrap_err(),
    FieldError::GridTooSmall { samples_per_axis: 0 }
  );
}

#[test]
fn test_new_rejects_wrong_sample_count() {
  let samples = vec![0.0; 7];
  let err = DensityField::new(&samples, 2).unwrap_err();
  assert_eq!(
    err,
    FieldError::SampleCountMismatch {
      samples_per_axis: 2,
      expected: 8,
      actual: 7
    }
  );
  // The message names both counts
  assert!(err.to_string().contains("8"));
  assert!(err.to_string().contains("7"));
}

#[test]
fn test_sample_reads_layout_order() {
  // from_fn fills x-major, z-fastest; sample() must agree
  let buffer = DensityBuffer::from_fn(3, |c| (c.x * 100 + c.y * 10 + c.z) as f32)
    .expect("valid buffer");
  let field = buffer.as_field();

  assert_eq!(field.sample(IVec3::new(0, 0, 0)), 0.0);
  assert_eq!(field.sample(IVec3::new(0, 0, 2)), 2.0);
  assert_eq!(field.sample(IVec3::new(0, 2, 1)), 21.0);
  assert_eq!(field.sample(IVec3::new(2, 1, 0)), 210.0);
}

#[test]
fn test_sample_clamps_out_of_range() {
  let buffer = DensityBuffer::from_fn(3, |c| (c.x * 100 + c.y * 10 + c.z) as f32)
    .expect("valid buffer");
  let field = buffer.as_field();

  // Each axis clamps independently
  assert_eq!(field.sample(IVec3::new(-1, 0, 0)), field.sample(IVec3::ZERO));
  assert_eq!(
    field.sample(IVec3::new(5, 1, 1)),
    field.sample(IVec3::new(2, 1, 1))
  );
  assert_eq!(
    field.sample(IVec3::new(-3, 7, 1)),
    field.sample(IVec3::new(0, 2, 1))
  );
}

#[test]
fn test_set_then_sample() {
  let mut buffer = DensityBuffer::filled(2, -1.0).expect("valid buffer");
  buffer.set(0, 1, 1, 1.0);

  let field = buffer.as_field();
  assert_eq!(field.sample(IVec3::new(0, 1, 1)), 1.0);
  assert_eq!(field.sample(IVec3::new(0, 0, 0)), -1.0);
}

#[test]
fn test_filled_is_uniform() {
  let buffer = DensityBuffer::filled(4, 5.0).expect("valid buffer");
  assert_eq!(buffer.samples().len(), 64);
  assert!(buffer.samples().iter().all(|&s| s == 5.0));
}

#[test]
fn test_debug_does_not_dump_samples() {
  let buffer = DensityBuffer::filled(4, 0.0).expect("valid buffer");
  let dump = format!("{:?}", buffer.as_field());
  assert!(dump.contains("samples_per_axis: 4"));
  assert!(dump.contains("samples: 64"));
}
