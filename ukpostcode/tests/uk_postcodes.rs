// ukpostcode/tests/uk_postcodes.rs
//
// Typing each of the six example postcodes through an attached engine
// session, the way a host text field would.

use ukpostcode::{
    new_engine, new_session, Decision, PostcodeEngine, Recommendation, SessionHandle,
    UkPostcodeConfig,
};

/// Type `keys` into the field behind `handle`, returning the final text and
/// every decision made along the way.
fn type_into(engine: &mut PostcodeEngine, handle: SessionHandle, keys: &str) -> (String, Vec<Decision>) {
    let mut text = String::new();
    let mut decisions = Vec::new();
    for key in keys.chars() {
        let end = text.chars().count();
        let decision = engine
            .propose_edit(handle, &text, end..end, &key.to_string())
            .unwrap();
        if decision.accepted {
            text = decision.new_text.clone();
        }
        decisions.push(decision);
    }
    (text, decisions)
}

#[test]
fn test_six_example_postcodes() {
    let cases = [
        ("b11aa", "B1 1AA"),
        ("m602la", "M60 2LA"),
        ("sa67jl", "SA6 7JL"),
        ("so171bj", "SO17 1BJ"),
        ("w1d1an", "W1D 1AN"),
        ("ec2r8ah", "EC2R 8AH"),
    ];

    let mut engine = new_engine(UkPostcodeConfig::default()).unwrap();
    for (keys, expected) in cases {
        let handle = engine.attach();
        let (text, decisions) = type_into(&mut engine, handle, keys);
        assert_eq!(text, expected, "typing {keys:?}");
        assert!(decisions.iter().all(|d| d.accepted));
        // the last inward letter completes the shape
        assert_eq!(decisions.last().unwrap().recommended_class, Recommendation::NoChange);
        assert!(engine.detach(handle));
    }
    assert_eq!(engine.session_count(), 0);
}

#[test]
fn test_letter_ending_outward_code_wants_digit() {
    let mut engine = new_engine(UkPostcodeConfig::default()).unwrap();
    for keys in ["w1d", "ec2r"] {
        let handle = engine.attach();
        let (_, decisions) = type_into(&mut engine, handle, keys);
        // an outward code ending in a letter cannot grow, the inward digit is next
        assert_eq!(
            decisions.last().unwrap().recommended_class,
            Recommendation::Digit,
            "after {keys:?}"
        );
        engine.detach(handle);
    }
}

#[test]
fn test_w1d_switches_to_digits_after_d() {
    use Recommendation::*;
    let mut session = new_session();
    let mut text = String::new();
    let mut recs = Vec::new();
    for key in "W1D1AN".chars() {
        let end = text.chars().count();
        let d = session.propose_edit(&text, end..end, &key.to_string());
        text = d.new_text;
        recs.push(d.recommended_class);
    }
    assert_eq!(recs, vec![NoChange, NoChange, Digit, Letter, Letter, NoChange]);
    assert_eq!(text, "W1D 1AN");
}

#[test]
fn test_engine_without_auto_space() {
    let mut config = UkPostcodeConfig::default();
    config.base_mut().auto_space = false;
    let mut engine = new_engine(config).unwrap();
    let handle = engine.attach();

    let (text, _) = type_into(&mut engine, handle, "m602la");
    assert_eq!(text, "M602LA");

    // typing the space by hand still works
    let (text, _) = type_into(&mut engine, handle, "m60 2la");
    assert_eq!(text, "M60 2LA");
}

#[test]
fn test_decision_json_shape() {
    let mut session = new_session();
    let decision = session.propose_edit("", 0..0, "s");
    let decision = session.propose_edit(&decision.new_text, 1..1, "w");
    let json = serde_json::to_value(&decision).unwrap();
    assert_eq!(json["accepted"], true);
    assert_eq!(json["new_text"], "SW");
    assert_eq!(json["new_selection_position"], 2);
    assert_eq!(json["recommended_class"], "Digit");
}
