use criterion::{Criterion, black_box, criterion_group, criterion_main};
use eckey::{KeyPair, Secp256k1, Signature, hash_message};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn bench_keygen(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);

    c.bench_function("ecdsa_keygen", |bencher| {
        bencher.iter(|| {
            let key = KeyPair::<Secp256k1>::random(&mut rng).expect("keygen");
            black_box(key);
        })
    });
}

fn bench_sign(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let key = KeyPair::<Secp256k1>::random(&mut rng).expect("keygen");
    let digest = hash_message(b"benchmark message");

    c.bench_function("ecdsa_sign", |bencher| {
        bencher.iter(|| {
            let sig = key.sign(black_box(&digest), &mut rng).expect("sign");
            black_box(sig);
        })
    });
}

fn bench_verify(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let key = KeyPair::<Secp256k1>::random(&mut rng).expect("keygen");
    let digest = hash_message(b"benchmark message");
    let sig = key.sign(&digest, &mut rng).expect("sign");

    c.bench_function("ecdsa_verify", |bencher| {
        bencher.iter(|| {
            let ok = key.verify(black_box(&digest), black_box(&sig));
            black_box(ok);
        })
    });
}

fn bench_der(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let key = KeyPair::<Secp256k1>::random(&mut rng).expect("keygen");
    let sig = key.sign(&hash_message(b"der"), &mut rng).expect("sign");
    let der = sig.to_der();

    c.bench_function("der_encode", |bencher| {
        bencher.iter(|| black_box(black_box(sig).to_der()))
    });
    c.bench_function("der_decode", |bencher| {
        bencher.iter(|| black_box(Signature::from_der(black_box(&der)).expect("decode")))
    });
}

criterion_group!(benches, bench_keygen, bench_sign, bench_verify, bench_der);
criterion_main!(benches);
