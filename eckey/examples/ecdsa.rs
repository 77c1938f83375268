use eckey::{KeyPair, Secp256k1, Signature, hash_message};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() {
    tracing_subscriber::fmt::init();

    let mut rng = StdRng::seed_from_u64(42);
    let key = KeyPair::<Secp256k1>::random(&mut rng).expect("keygen");
    let public_hex = key.public_key_hex().expect("public key");
    println!("public key: {public_hex}");

    let digest = hash_message(b"hello ecdsa");
    let sig = key.sign(&digest, &mut rng).expect("sign");
    println!("signature:  {}", sig.to_hex());
    println!("der:        {}", hex::encode(sig.to_der()));

    let sig_bytes = bincode::serialize(&sig).expect("serialize sig");
    let sig2: Signature = bincode::deserialize(&sig_bytes).expect("deserialize sig");

    let verifier = KeyPair::<Secp256k1>::from_public_hex(&public_hex).expect("parse public key");
    assert!(verifier.verify(&digest, &sig2));
    assert!(verifier.verify(&digest, &Signature::from_der(&sig.to_der()).expect("decode")));
    println!("verified");
}
