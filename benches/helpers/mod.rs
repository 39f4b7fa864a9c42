pub mod traits;

pub use traits::SizedBenchmark;
