//! Randomized cross-checks: small operands are compared against i128
//! arithmetic, large operands against algebraic identities that must hold
//! regardless of operand size.

use big_integer::BigInteger;
use rand::prelude::*;

const ROUNDS: usize = 200;

fn random_value(rng: &mut ThreadRng, words: usize) -> BigInteger {
    let mut x = BigInteger::from(0u32);
    for _ in 0..words {
        x <<= 32;
        x += BigInteger::from(rng.gen::<u32>());
    }
    if rng.gen_bool(0.5) {
        -x
    } else {
        x
    }
}

#[test]
fn arithmetic_matches_i128() {
    let mut rng = thread_rng();
    for _ in 0..ROUNDS {
        let a = rng.gen::<i64>();
        let b = rng.gen::<i64>();
        let (x, y) = (BigInteger::from(a), BigInteger::from(b));
        let (a, b) = (a as i128, b as i128);
        assert_eq!((&x + &y).to_string(), (a + b).to_string());
        assert_eq!((&x - &y).to_string(), (a - b).to_string());
        assert_eq!((&x * &y).to_string(), (a * b).to_string());
        if b != 0 {
            assert_eq!((&x / &y).to_string(), (a / b).to_string());
            assert_eq!((&x % &y).to_string(), (a % b).to_string());
        }
    }
}

#[test]
fn bitwise_matches_i64() {
    let mut rng = thread_rng();
    for _ in 0..ROUNDS {
        let a = rng.gen::<i64>();
        let b = rng.gen::<i64>();
        let (x, y) = (BigInteger::from(a), BigInteger::from(b));
        assert_eq!(&x & &y, BigInteger::from(a & b), "{} & {}", a, b);
        assert_eq!(&x | &y, BigInteger::from(a | b), "{} | {}", a, b);
        assert_eq!(&x ^ &y, BigInteger::from(a ^ b), "{} ^ {}", a, b);
        assert_eq!(!&x, BigInteger::from(!a));
    }
}

#[test]
fn shifts_match_i128() {
    let mut rng = thread_rng();
    for _ in 0..ROUNDS {
        let x = rng.gen::<i64>();
        let bits = rng.gen_range(0..50);
        let v = BigInteger::from(x);
        let model = x as i128;
        assert_eq!((&v << bits).to_string(), (model << bits).to_string());
        // i128 >> is an arithmetic shift, the floor semantics under test
        assert_eq!((&v >> bits).to_string(), (model >> bits).to_string());
    }
}

#[test]
fn div_rem_contract_holds_for_large_operands() {
    let mut rng = thread_rng();
    for _ in 0..ROUNDS {
        let a_words = rng.gen_range(1..8);
        let b_words = rng.gen_range(1..5);
        let a = random_value(&mut rng, a_words);
        let b = random_value(&mut rng, b_words);
        if b.is_zero() {
            continue;
        }
        let (q, r) = a.div_rem(&b).unwrap();
        assert_eq!(&q * &b + &r, a, "a = {}, b = {}", a, b);
        assert!(r.abs() < b.abs(), "a = {}, b = {}", a, b);
        assert!(r.is_zero() || r.is_negative() == a.is_negative());
    }
}

#[test]
fn ring_axioms_hold() {
    let mut rng = thread_rng();
    let zero = BigInteger::from(0u32);
    for _ in 0..ROUNDS {
        let a_words = rng.gen_range(0..5);
        let b_words = rng.gen_range(0..5);
        let c_words = rng.gen_range(0..5);
        let a = random_value(&mut rng, a_words);
        let b = random_value(&mut rng, b_words);
        let c = random_value(&mut rng, c_words);
        assert_eq!(&a + &zero, a);
        assert_eq!(&a + &(-&a), zero);
        assert_eq!(&a + &b, &b + &a);
        assert_eq!(&a * &b, &b * &a);
        assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
        assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
    }
}

#[test]
fn add_and_sub_are_inverses() {
    let mut rng = thread_rng();
    for _ in 0..ROUNDS {
        let a_words = rng.gen_range(0..8);
        let b_words = rng.gen_range(0..8);
        let a = random_value(&mut rng, a_words);
        let b = random_value(&mut rng, b_words);
        assert_eq!(&(&a + &b) - &b, a);
        assert_eq!(&(&a - &b) + &b, a);
    }
}

#[test]
fn mul_and_div_are_inverses() {
    let mut rng = thread_rng();
    for _ in 0..ROUNDS {
        let a_words = rng.gen_range(0..6);
        let b_words = rng.gen_range(1..6);
        let a = random_value(&mut rng, a_words);
        let b = random_value(&mut rng, b_words);
        if b.is_zero() {
            continue;
        }
        let product = &a * &b;
        assert_eq!(&product / &b, a, "a = {}, b = {}", a, b);
        assert!((&product % &b).is_zero());
    }
}

#[test]
fn shift_round_trip_for_large_operands() {
    let mut rng = thread_rng();
    for _ in 0..ROUNDS {
        let words = rng.gen_range(0..6);
        let a = random_value(&mut rng, words);
        let bits = rng.gen_range(0..200);
        assert_eq!(&(&a << bits) >> bits, a);
        let pow2 = BigInteger::from(1u32) << bits;
        assert_eq!(&a << bits, &a * &pow2);
    }
}

#[test]
fn string_round_trip() {
    let mut rng = thread_rng();
    for _ in 0..ROUNDS {
        let words = rng.gen_range(0..10);
        let a = random_value(&mut rng, words);
        let parsed: BigInteger = a.to_string().parse().unwrap();
        assert_eq!(parsed, a);
    }
}

#[test]
fn sort_matches_native_ordering() {
    let mut rng = thread_rng();
    let mut native: Vec<i64> = (0..100).map(|_| rng.gen()).collect();
    let mut values: Vec<BigInteger> = native.iter().map(|&v| BigInteger::from(v)).collect();
    native.sort_unstable();
    values.sort();
    for (big, small) in values.iter().zip(&native) {
        assert_eq!(big.to_string(), small.to_string());
    }
}
