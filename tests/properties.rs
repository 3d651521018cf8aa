use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rc5::cipher::{generic_array::GenericArray, BlockDecrypt, BlockEncrypt, KeyInit};
use rc5::{decrypt, encrypt, expand_key_schedule, Block, Key, KEY_SCHEDULE_SIZE, RC5_32_12_16};

const SAMPLES: usize = 2000;

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5243_3500)
}

fn changed_bits(a: Block, b: Block) -> u32 {
    (a[0] ^ b[0]).count_ones() + (a[1] ^ b[1]).count_ones()
}

#[test]
fn round_trip_random() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let key: Key = rng.gen();
        let block: Block = rng.gen();

        assert_eq!(decrypt(encrypt(block, &key), &key), block);
        assert_eq!(encrypt(decrypt(block, &key), &key), block);
    }
}

#[test]
fn round_trip_random_bytes() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let key: [u8; 16] = rng.gen();
        let pt: [u8; 8] = rng.gen();

        let cipher = RC5_32_12_16::new(&key.into());
        let mut block = GenericArray::from(pt);

        cipher.encrypt_block(&mut block);
        let words = rc5::block_from_slice(&block).unwrap();
        assert_eq!(
            words,
            encrypt(rc5::block_from_slice(&pt).unwrap(), &rc5::key_from_slice(&key).unwrap())
        );

        cipher.decrypt_block(&mut block);
        assert_eq!(block[..], pt);
    }
}

#[test]
fn deterministic() {
    let mut rng = rng();
    for _ in 0..100 {
        let key: Key = rng.gen();
        let block: Block = rng.gen();

        assert_eq!(encrypt(block, &key), encrypt(block, &key));
        assert_eq!(expand_key_schedule(&key), expand_key_schedule(&key));
    }
}

#[test]
fn schedule_length() {
    let mut rng = rng();
    for _ in 0..100 {
        let key: Key = rng.gen();
        assert_eq!(expand_key_schedule(&key).len(), KEY_SCHEDULE_SIZE);
    }
    assert_eq!(expand_key_schedule(&[u32::MAX; 4]).len(), 26);
}

#[test]
fn plaintext_avalanche() {
    let mut rng = rng();
    let mut total = 0;
    for _ in 0..SAMPLES {
        let key: Key = rng.gen();
        let block: Block = rng.gen();
        let bit = rng.gen_range(0..64);

        let mut flipped = block;
        flipped[bit / 32] ^= 1 << (bit % 32);

        total += changed_bits(encrypt(block, &key), encrypt(flipped, &key));
    }

    let average = f64::from(total) / SAMPLES as f64;
    assert!((30.0..34.0).contains(&average), "average {average}");
}

#[test]
fn key_avalanche() {
    let mut rng = rng();
    let mut total = 0;
    for _ in 0..SAMPLES {
        let key: Key = rng.gen();
        let block: Block = rng.gen();
        let bit = rng.gen_range(0..128);

        let mut flipped = key;
        flipped[bit / 32] ^= 1 << (bit % 32);

        total += changed_bits(encrypt(block, &key), encrypt(block, &flipped));
    }

    let average = f64::from(total) / SAMPLES as f64;
    assert!((30.0..34.0).contains(&average), "average {average}");
}

#[test]
fn concurrent_callers() {
    let handles: Vec<_> = (0..4u32)
        .map(|seed| {
            std::thread::spawn(move || {
                let key = [seed, seed + 1, seed + 2, seed + 3];
                let block = [seed, !seed];
                decrypt(encrypt(block, &key), &key) == block
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
