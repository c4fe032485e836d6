use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

use dipcomp_dsp::compressor::{Attributes, Compressor, EnvelopeLink};
use dipcomp_dsp::parameters::{CompressorParameters, Ratio, SampleRate};

fn criterion_benchmark(c: &mut Criterion) {
    const BUFFER_SIZE: usize = 32;
    let sample_rate = SampleRate::new(48_000.0).unwrap();
    let mut rng = rand::thread_rng();

    let mut compressor = Compressor::new(CompressorParameters::default(), EnvelopeLink::default());
    compressor.set_attributes(Attributes {
        ratio: Ratio::new(5.0).unwrap(),
    });

    let mut input_left = [0.0; BUFFER_SIZE];
    let mut input_right = [0.0; BUFFER_SIZE];
    let mut output_left = [0.0; BUFFER_SIZE];
    let mut output_right = [0.0; BUFFER_SIZE];

    c.bench_function("compressor", |b| {
        b.iter(|| {
            input_left
                .iter_mut()
                .chain(input_right.iter_mut())
                .for_each(|x| *x = rng.gen::<f32>() * 2.0 - 1.0);
            compressor.process(
                [black_box(&input_left), black_box(&input_right)],
                [&mut output_left, &mut output_right],
                sample_rate,
            )
        });
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
