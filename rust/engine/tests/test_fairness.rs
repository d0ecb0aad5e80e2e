use fairdeal_engine::fairness::{commit, generate_seed, verify, Commitment};

#[test]
fn commit_verify_round_trip() {
    let fresh = generate_seed();
    for seed in ["", "x", "hand-1", "a much longer seed with spaces", fresh.as_str()] {
        let c = commit(seed);
        assert!(verify(seed, c.as_str()), "round trip failed for {:?}", seed);
    }
}

#[test]
fn other_seed_fails_verification() {
    let c = commit("seed-one");
    assert!(!verify("seed-two", c.as_str()));
}

#[test]
fn commit_is_stable() {
    assert_eq!(commit("stable"), commit("stable"));
    assert_eq!(commit("stable").as_str().len(), Commitment::HEX_LEN);
}

#[test]
fn commitment_serializes_as_string() {
    let c = commit("json");
    let text = serde_json::to_string(&c).unwrap();
    assert_eq!(text, format!("\"{}\"", c));
    let back: Commitment = serde_json::from_str(&text).unwrap();
    assert_eq!(back, c);
    assert!(serde_json::from_str::<Commitment>("\"not-a-hash\"").is_err());
}
