//! Traits to simplify the definition of criterion benchmarks.

/// A parametric-size benchmark.
pub trait SizedBenchmark: Sized {
    /// Name of the benchmark.
    fn name() -> &'static str;

    /// List of sizes to benchmark.
    fn sizes() -> &'static [usize] {
        &[100, 1_000, 10_000]
    }

    /// Initialize the benchmark with a given graph order.
    ///
    /// Benchmarked sizes default to 100, 1_000, and 10_000 unless overridden.
    fn setup(size: usize) -> Self;

    /// Operation to benchmark.
    ///
    /// Note that the destruction of the return type is measured as part of the benchmark,
    /// so generated graphs are dropped inside the timed section.
    fn run(&self) -> impl Sized;

    /// Run the benchmark under criterion for a given list of sizes.
    fn criterion(c: &mut criterion::Criterion) {
        let mut g = c.benchmark_group(Self::name());
        g.plot_config(
            criterion::PlotConfiguration::default()
                .summary_scale(criterion::AxisScale::Logarithmic),
        );

        for &size in Self::sizes() {
            let benchmark = Self::setup(size);
            g.bench_function(criterion::BenchmarkId::new(Self::name(), size), |b| {
                b.iter(|| criterion::black_box(benchmark.run()))
            });
        }
        g.finish();
    }
}
