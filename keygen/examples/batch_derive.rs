use bn254_curve::{G2Layout, ScalarField};
use bn254_keygen::{KeyRecord, PublicKeys, SigningKey, derive_batch};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() {
    let mut rng = StdRng::seed_from_u64(42);
    let keys: Vec<SigningKey> = (0..4).map(|_| SigningKey::random(&mut rng)).collect();
    let scalars: Vec<ScalarField> = keys.iter().map(SigningKey::scalar).collect();

    for (sk, result) in keys.iter().zip(derive_batch(&scalars)) {
        let (g1, _g2) = result.expect("derive");
        let pair = sk.key_pair();
        assert_eq!(pair.public.g1_bytes(), g1);

        let record = KeyRecord::new(&pair);
        println!("{}", record.to_json_pretty().expect("json"));
    }

    let sk_bytes = bincode::serialize(&keys[0]).expect("serialize sk");
    let pk_bytes = bincode::serialize(&keys[0].public_keys()).expect("serialize pk");

    let sk2: SigningKey = bincode::deserialize(&sk_bytes).expect("deserialize sk");
    let pk2: PublicKeys = bincode::deserialize(&pk_bytes).expect("deserialize pk");
    assert_eq!(PublicKeys::from(&sk2), pk2);
    println!(
        "G2 (EIP-197 order): 0x{}",
        hex::encode(pk2.g2_bytes(G2Layout::ImaginaryFirst))
    );
}
