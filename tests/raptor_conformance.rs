//! Raptor R10 conformance tests.
//!
//! This suite validates:
//! - Parameter invariants across the whole supported range of `k`
//! - The systematic property: ids `0..k` reproduce the source
//! - Round trips from source-only, repair-only and mixed symbol sets
//! - Failure modes: too few symbols, duplicate ids
//! - Determinism of triples, schedules and intermediate symbols

mod common;

use common::*;
use raptor_r10::raptor::numbers::{choose, is_prime};
use raptor_r10::raptor::params::{MAX_K, MIN_K};
use raptor_r10::raptor::triple::TripleGenerator;
use raptor_r10::{Decoder, Encoder, EncodingSymbol, Error, ParameterSet, Symbol};

// ============================================================================
// Parameters
// ============================================================================

#[test]
fn parameter_invariants_hold_for_every_k() {
    init_test_logging();
    test_phase!("parameter_invariants");

    for k in MIN_K..=MAX_K {
        let p = ParameterSet::new(k).unwrap();
        assert!(p.x * (p.x - 1) >= 2 * k, "k={k}: X too small");
        assert!((p.x - 1) * (p.x - 2) < 2 * k, "k={k}: X not minimal");
        assert!(p.s >= k.div_ceil(100) + p.x && is_prime(p.s), "k={k}: S");
        assert!(choose(p.h, p.h.div_ceil(2)) >= (k + p.s) as u64, "k={k}: H");
        assert!(
            choose(p.h - 1, (p.h - 1).div_ceil(2)) < (k + p.s) as u64,
            "k={k}: H not minimal"
        );
        assert_eq!(p.h_prime, p.h.div_ceil(2));
        assert_eq!(p.l, k + p.s + p.h);
        assert!(p.l_prime >= p.l && is_prime(p.l_prime), "k={k}: L'");
    }

    test_complete!("parameter_invariants");
}

#[test]
fn parameter_bounds() {
    assert!(matches!(ParameterSet::new(3), Err(Error::Parameter { k: 3, .. })));
    assert!(matches!(
        ParameterSet::new(8193),
        Err(Error::Parameter { k: 8193, .. })
    ));
    let p = ParameterSet::with_systematic_index(4, 0).unwrap();
    assert_eq!((p.x, p.s, p.h, p.h_prime, p.l, p.l_prime), (4, 5, 5, 3, 14, 17));
}

// ============================================================================
// Systematic property
// ============================================================================

#[test]
fn source_ids_reproduce_source() {
    init_test_logging();
    test_phase!("systematic");

    for (k, size) in [(4, 8), (10, 16), (37, 24), (100, 8)] {
        let sources = [
            make_patterned_source(k, size),
            make_source_data(k, size, DEFAULT_TEST_SEED ^ k as u64),
            vec![Symbol::zeros(size); k],
        ];
        for source in sources {
            let encoder = Encoder::new(k, source.clone()).unwrap();
            for (i, original) in source.iter().enumerate() {
                assert_eq!(&encoder.symbol(i as u32), original, "k={k} id={i}");
            }
        }
    }

    test_complete!("systematic");
}

// ============================================================================
// Round trips
// ============================================================================

fn round_trip(k: usize, symbol_size: usize) {
    let source = make_source_data(k, symbol_size, 0xC0FFEE + k as u64);
    let encoder = Encoder::new(k, source.clone()).unwrap();

    // Source only.
    let systematic: Vec<EncodingSymbol> = encoder.lt().stream().take(k).collect();
    let out = Decoder::decode_symbols(k, systematic).unwrap();
    assert_eq!(out.source, source, "k={k}: source-only");

    // Repair only: ids from k on until decodable.
    let repair = encoder.lt().stream_from(k as u32).take(k + 32);
    let (recovered, used) = decode_incrementally(k, repair).expect("repair window decodes");
    assert_eq!(recovered, source, "k={k}: repair-only");
    tracing::debug!(k, used, overhead = used - k, "repair-only decode");

    // Mixed: odd source ids plus repair symbols until decodable.
    let mixed = encoder
        .lt()
        .stream()
        .take(k)
        .filter(|s| s.esi % 2 == 1)
        .chain(encoder.lt().stream_from(k as u32).take(k + 32));
    let (recovered, used) = decode_incrementally(k, mixed).expect("mixed set decodes");
    assert_eq!(recovered, source, "k={k}: mixed");
    tracing::debug!(k, used, overhead = used - k, "mixed decode");
}

#[test]
fn round_trip_k4() {
    init_test_logging();
    round_trip(4, 8);
}

#[test]
fn round_trip_k10() {
    init_test_logging();
    round_trip(10, 32);
}

#[test]
fn round_trip_k100() {
    init_test_logging();
    round_trip(100, 16);
}

/// The largest block decodes each set in one attempt, eight symbols over `k`.
#[test]
fn round_trip_k8192() {
    init_test_logging();
    test_phase!("round_trip_k8192");

    let k = 8192;
    let source = make_source_data(k, 8, 0xC0FFEE + k as u64);
    let encoder = Encoder::new(k, source.clone()).unwrap();

    let systematic: Vec<EncodingSymbol> = encoder.lt().stream().take(k).collect();
    let out = Decoder::decode_symbols(k, systematic).unwrap();
    assert_eq!(out.source, source, "source-only");

    let out = Decoder::decode_symbols(k, encoder.repair(k + 8)).unwrap();
    assert_eq!(out.source, source, "repair-only");

    let mixed: Vec<EncodingSymbol> = encoder
        .lt()
        .stream()
        .take(k)
        .filter(|s| s.esi % 2 == 1)
        .chain(encoder.lt().stream_from(k as u32).take(k / 2 + 8))
        .collect();
    let out = Decoder::decode_symbols(k, mixed).unwrap();
    assert_eq!(out.source, source, "mixed");

    test_complete!("round_trip_k8192", stats = out.stats);
}

#[test]
fn k4_repair_ids_4_to_9() {
    init_test_logging();
    test_phase!("k4_scenario");

    let source: Vec<Symbol> = [
        *b"raptor!!",
        *b"fountain",
        [0u8; 8],
        [0xFF, 0x00, 0xFF, 0x00, 0x12, 0x34, 0x56, 0x78],
    ]
    .into_iter()
    .map(|bytes| Symbol::from(&bytes[..]))
    .collect();

    let mut encoder = Encoder::new(4, source.clone()).unwrap();
    let produced = encoder.emit(10);
    let repair: Vec<EncodingSymbol> = produced[4..].to_vec();
    assert_eq!(
        repair.iter().map(|s| s.esi).collect::<Vec<_>>(),
        vec![4, 5, 6, 7, 8, 9]
    );

    // With J(4) = 18 the first four repair ids leave the system singular.
    assert!(matches!(
        Decoder::decode_symbols(4, repair[..4].to_vec()),
        Err(Error::RankDeficiency { .. })
    ));
    let out = Decoder::decode_symbols(4, repair).unwrap();
    assert_eq!(out.source, source);

    test_complete!("k4_scenario", stats = out.stats);
}

#[test]
fn decoded_encoder_continues_the_stream() {
    let source = make_patterned_source(12, 16);
    let encoder = Encoder::new(12, source).unwrap();
    let out = Decoder::decode_symbols(12, encoder.repair(20)).unwrap();
    for esi in [0, 11, 12, 40, 1000, u32::MAX] {
        assert_eq!(out.lt.symbol(esi), encoder.symbol(esi), "esi {esi}");
    }
}

// ============================================================================
// Failure modes
// ============================================================================

#[test]
fn k_minus_one_symbols_is_insufficient() {
    for k in [4, 10, 100] {
        let encoder = Encoder::new(k, make_patterned_source(k, 8)).unwrap();
        let received: Vec<_> = encoder.lt().stream().skip(1).take(k - 1).collect();
        let err = Decoder::decode_symbols(k, received).unwrap_err();
        assert_eq!(
            err,
            Error::InsufficientSymbols {
                received: k - 1,
                required: k
            }
        );
        assert!(err.is_retryable());
    }
}

#[test]
fn duplicate_ids_are_rank_deficient() {
    for k in [4, 10, 100] {
        let encoder = Encoder::new(k, make_patterned_source(k, 8)).unwrap();
        let mut received: Vec<_> = encoder.lt().stream().take(k - 1).collect();
        received.push(received[0].clone());
        let err = Decoder::decode_symbols(k, received).unwrap_err();
        assert!(matches!(err, Error::RankDeficiency { .. }), "k={k}: {err}");
    }
}

#[test]
fn mismatched_symbol_sizes_are_rejected() {
    let encoder = Encoder::new(4, make_patterned_source(4, 8)).unwrap();
    let mut received = encoder.repair(4);
    received[2] = EncodingSymbol::new(received[2].esi, vec![0u8; 7]);
    assert!(matches!(
        Decoder::decode_symbols(4, received),
        Err(Error::SymbolSizeMismatch { .. })
    ));
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn triples_are_deterministic() {
    for k in [4, 10, 100, 1000] {
        let p = ParameterSet::with_systematic_index(k, 7).unwrap();
        let a = TripleGenerator::new(&p);
        let b = TripleGenerator::new(&ParameterSet::with_systematic_index(k, 7).unwrap());
        for esi in 0..=10_000 {
            assert_eq!(a.triple(esi), b.triple(esi), "k={k} esi={esi}");
        }
    }
}

#[test]
fn decoding_is_deterministic() {
    let k = 20;
    let source = make_source_data(k, 24, 99);
    let encoder = Encoder::new(k, source).unwrap();
    let received = encoder.repair(k + 8);
    let first = Decoder::decode_symbols(k, received.clone()).unwrap();
    let second = Decoder::decode_symbols(k, received).unwrap();
    assert_eq!(first.lt.intermediate(), second.lt.intermediate());
    assert_eq!(first.stats, second.stats);
}

#[test]
fn dense_path_matches_scheduled_path() {
    // Repair ids k..2k are non-singular for these block sizes.
    for k in [5, 16, 30] {
        let source = make_source_data(k, 16, k as u64);
        let fast = Encoder::new(k, source.clone()).unwrap();
        let dense = Encoder::new_dense(k, source).unwrap();
        assert_eq!(fast.lt().intermediate(), dense.lt().intermediate(), "k={k}");

        let mut decoder = Decoder::new(k).unwrap();
        for symbol in fast.repair(k) {
            decoder.push(symbol);
        }
        assert_eq!(decoder.decode_dense().unwrap(), decoder.decode().unwrap().source);
    }
}
