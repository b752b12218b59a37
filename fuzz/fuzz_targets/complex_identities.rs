#![no_main]

use fractal_lib::math::{Complex, One as _, Zero as _};
use libfuzzer_sys::fuzz_target;
use rand::Rng as _;
use rand_pcg::Pcg64;
use rand_seeder::Seeder;

fn close(a: Complex<f64>, b: Complex<f64>, epsilon: f64) -> bool {
    (a - b).length_sq() <= epsilon * epsilon * (1. + b.length_sq())
}

// Checks arithmetic identities on random values. Uses input data as seed for random generator.
fuzz_target!(|data: &[u8]| {
    let mut rng: Pcg64 = Seeder::from(data).make_rng();

    for _ in 0..64 {
        let a = Complex::new(rng.random_range(-1e6..1e6), rng.random_range(-1e6..1e6));
        let b = Complex::new(rng.random_range(-1e6..1e6), rng.random_range(-1e6..1e6));

        let mut sum = a;
        assert_eq!(*sum.plus(Complex::zero()), a);
        let mut product = a;
        assert_eq!(*product.times(Complex::one()), a);
        assert_eq!(a.conjugate().conjugate(), a);
        assert_eq!(a.minus(b), a - b);

        if b.length_sq() > 0. {
            assert_eq!(a.divide(b), a / b);
            let restored = *a.divide(b).times(b);
            assert!(close(restored, a, 1e-9), "{a} / {b} * {b} = {restored}");
        }
    }
});
