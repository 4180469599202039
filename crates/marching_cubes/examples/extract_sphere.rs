use marching_cubes::samplers::{DensitySource, SphereSampler};
use marching_cubes::{extract, extract_parallel_timed, ExtractConfig};

fn main() {
  let samples_per_axis = 64;

  println!("Baking {0}x{0}x{0} sphere volume...", samples_per_axis);
  let volume = SphereSampler::centered_in(samples_per_axis)
    .sample_volume(samples_per_axis)
    .unwrap();

  let field = volume.as_field();
  let config = ExtractConfig::default();

  let serial = extract(&field, &config);
  println!(
    "Serial:   {} triangles ({} vertices)",
    serial.triangle_count(),
    serial.vertex_count()
  );
  println!(
    "          bounds {:?} .. {:?}",
    serial.bounds.min, serial.bounds.max
  );

  let (parallel, stats) = extract_parallel_timed(&field, &config);
  println!(
    "Parallel: {} triangles across {} blocks in {} us",
    parallel.triangle_count(),
    stats.block_count,
    stats.extract_us
  );
}
