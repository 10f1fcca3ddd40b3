use mark_predictor::{build_suggestions, evaluate, Marks, Status};

fn run(g1: f64, g2: f64, g3: f64) -> (mark_predictor::EvaluationResult, Vec<String>) {
    let marks = Marks::new(g1, g2, g3);
    let result = evaluate(&marks);
    let suggestions = build_suggestions(&marks, result.status, result.average);
    (result, suggestions)
}

#[test]
fn test_fail_on_single_low_subject() {
    let (result, suggestions) = run(30.0, 50.0, 60.0);

    assert_eq!(result.status, Status::Fail);
    assert_eq!(result.total, 140.0);
    assert!((result.average - 46.666666666666664).abs() < 1e-9);
    assert_eq!(result.reasons, vec!["Subject 1 mark is below 35."]);

    // Weakest-area tip, one remediation tip, closing tip.
    assert_eq!(suggestions.len(), 3);
    assert!(suggestions[0].contains("**Subject 1**"));
}

#[test]
fn test_fail_on_everything_low() {
    let (result, suggestions) = run(20.0, 20.0, 20.0);

    assert_eq!(result.status, Status::Fail);
    assert_eq!(result.total, 60.0);
    assert_eq!(result.average, 20.0);
    assert_eq!(result.reasons.len(), 4);
    assert_eq!(result.reasons[3], "Overall average is below 40.");

    assert_eq!(suggestions.len(), 6);
}

#[test]
fn test_fail_on_average_alone() {
    let (result, _) = run(38.0, 38.0, 38.0);

    assert_eq!(result.status, Status::Fail);
    assert_eq!(result.total, 114.0);
    assert_eq!(result.average, 38.0);
    assert_eq!(result.reasons, vec!["Overall average is below 40."]);
}

#[test]
fn test_solid_pass() {
    let (result, suggestions) = run(90.0, 85.0, 95.0);

    assert_eq!(result.status, Status::Pass);
    assert_eq!(result.average, 90.0);
    assert!(result.reasons.is_empty());

    assert_eq!(suggestions.len(), 2);
    assert!(suggestions[0].starts_with("Solid performance"));
    assert!(suggestions[1].contains("timed practice sessions"));
}

#[test]
fn test_marginal_pass_targets_weakest_subject() {
    let (result, suggestions) = run(45.0, 42.0, 90.0);

    assert_eq!(result.status, Status::Pass);
    assert_eq!(result.average, 59.0);
    assert!(result.reasons.is_empty());

    assert_eq!(suggestions.len(), 2);
    assert!(suggestions[0].contains("can be better"));
    assert!(suggestions[0].contains("**Subject 2**"));
}

#[test]
fn test_result_serializes_with_plain_status_strings() {
    let (result, _) = run(90.0, 85.0, 95.0);
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["status"], "Pass");
    assert_eq!(json["average"], 90.0);
    assert_eq!(json["total"], 270.0);
    assert!(json["reasons"].as_array().unwrap().is_empty());

    let (result, _) = run(20.0, 20.0, 20.0);
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["status"], "Fail");
    assert_eq!(json["reasons"].as_array().unwrap().len(), 4);
}
