//! End-to-end witness computation through the public API

use indexmap::IndexMap;
use witgen_core::api::{compute_voter_eligibility, InputSignal, WitnessRequest};
use witgen_core::circuits;
use witgen_core::eval::{scheduler, CalcContext};
use witgen_core::field::FieldElement;
use witgen_core::graph::Instances;
use witgen_core::store::SignalStore;

fn request(values: &[(&str, &str)]) -> WitnessRequest {
    let mut inputs = IndexMap::new();
    for (name, value) in values {
        inputs.insert(name.to_string(), InputSignal::decimal(value));
    }
    WitnessRequest { inputs }
}

fn eligibility_request(is_registered: &str, is_eligible: &str, voter_address: &str) -> WitnessRequest {
    request(&[
        ("regionHash", "1234567890"),
        ("electionId", "1"),
        ("voterAddress", voter_address),
        ("region", "5"),
        ("isRegistered", is_registered),
        ("isEligible", is_eligible),
    ])
}

#[test]
fn registered_and_eligible_voter_is_valid() {
    let response = compute_voter_eligibility(&eligibility_request("1", "1", "42")).unwrap();
    assert_eq!(response.outputs["valid"], "1");
    assert_eq!(response.outputs["commitment"], "42");
}

#[test]
fn unregistered_voter_is_invalid() {
    let response = compute_voter_eligibility(&eligibility_request("0", "1", "7")).unwrap();
    assert_eq!(response.outputs["valid"], "0");
    assert_eq!(response.outputs["commitment"], "7");
}

#[test]
fn valid_follows_logical_and() {
    for (is_registered, is_eligible) in [("0", "0"), ("0", "1"), ("1", "0"), ("1", "1")] {
        let response =
            compute_voter_eligibility(&eligibility_request(is_registered, is_eligible, "9")).unwrap();
        let expected = if is_registered == "1" && is_eligible == "1" { "1" } else { "0" };
        assert_eq!(
            response.outputs["valid"], expected,
            "isRegistered={}, isEligible={}",
            is_registered, is_eligible
        );
    }
}

#[test]
fn witness_is_complete_and_deterministic() {
    let a = compute_voter_eligibility(&eligibility_request("1", "1", "42")).unwrap();
    let b = compute_voter_eligibility(&eligibility_request("1", "1", "42")).unwrap();

    // 17 signals: constant one + 8 main + 2 * 4 IsEqual, all assigned.
    assert_eq!(a.witness.len(), 17);
    assert_eq!(a.witness[0], "1");
    assert!(a.witness.iter().all(|value| !value.is_empty()));

    // Identical inputs yield an identical witness vector.
    assert_eq!(a.witness, b.witness);
}

#[test]
fn hex_encoded_voter_address() {
    let mut req = eligibility_request("1", "1", "0");
    req.inputs.insert(
        "voterAddress".to_string(),
        InputSignal {
            value: "0x2a".to_string(),
            encoding: None,
        },
    );
    let response = compute_voter_eligibility(&req).unwrap();
    assert_eq!(response.outputs["commitment"], "42");
}

#[test]
fn every_signal_assigned_exactly_once() {
    // Drive the circuit by hand so the store can be observed after
    // evaluation: a completed run means no double write occurred (the store
    // rejects them) and into_witness proves no slot was skipped.
    let def = circuits::circuit_def().unwrap();
    let procs = circuits::procedures().unwrap();
    let mut store = SignalStore::new();
    let mut instances = Instances::instantiate(&def, &mut store).unwrap();
    let main = instances.main();

    let mut ctx = CalcContext::new(&def, &procs, &mut instances, &mut store);
    for (name, value) in [
        ("regionHash", 11u64),
        ("electionId", 1),
        ("voterAddress", 42),
        ("region", 3),
        ("isRegistered", 1),
        ("isEligible", 1),
    ] {
        ctx.set(main, name, FieldElement::from_u64(value)).unwrap();
    }
    scheduler::evaluate_circuit(&mut ctx).unwrap();

    let witness = store.into_witness().unwrap();
    assert_eq!(witness.len(), 17);
}

#[test]
fn malformed_requests_are_rejected_before_evaluation() {
    // Missing input
    let mut req = eligibility_request("1", "1", "42");
    req.inputs.shift_remove("isEligible");
    assert!(compute_voter_eligibility(&req).unwrap_err().contains("isEligible"));

    // Unknown input
    let mut req = eligibility_request("1", "1", "42");
    req.inputs.insert("extra".to_string(), InputSignal::decimal("1"));
    assert!(compute_voter_eligibility(&req).unwrap_err().contains("extra"));

    // Out-of-field value
    let mut req = eligibility_request("1", "1", "42");
    req.inputs.insert(
        "region".to_string(),
        InputSignal::decimal(witgen_core::field::MODULUS_DECIMAL),
    );
    assert!(compute_voter_eligibility(&req)
        .unwrap_err()
        .contains("outside the field range"));
}

#[test]
fn response_serializes_to_json() {
    let response = compute_voter_eligibility(&eligibility_request("1", "1", "42")).unwrap();
    let json = serde_json::to_string(&response).unwrap();
    let parsed: witgen_core::WitnessResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.witness, response.witness);
    assert_eq!(parsed.public_signals, response.public_signals);
}
