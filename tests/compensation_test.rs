//! End-to-end tests for rail resolution and the report.

use std::f64::consts::PI;

use approx::assert_relative_eq;
use tps_compensation::{
    compute_rail, default_rails, notation::parse_rail, report::DISCLAIMER, write_report,
    RailSpec, SystemParameters,
};

fn report(rails: &[RailSpec]) -> String {
    let mut out = Vec::new();
    write_report(&mut out, &SystemParameters::tps652510(), rails).expect("report failed");
    String::from_utf8(out).expect("report is not UTF-8")
}

// ── Resolution ────────────────────────────────────────────────────

#[test]
fn test_derived_rail_matches_formulas() {
    let p = SystemParameters::new(15.0, 900e3, 130e-6, 10.0, 0.8, 0.1, 0.2);
    let (v, i, c) = (12.0, 0.3, 14e-6);
    let result = compute_rail(&RailSpec::new(v, i, c), &p);

    let r = v / i;
    let rc = 2.0 * PI * 90e3 * c / (130e-6 * 10.0);
    let cc = r * c / rc;
    let croll = 0.1 * c / rc;
    let fp_roll = 1.0 / (2.0 * PI * rc * croll);
    let l = (15.0 - v) * v / (i * 0.2 * 15.0 * 900e3);
    let ripple = (15.0 - v) * v / (l * 15.0 * 900e3);
    let c_min = i * i * l / (v * ripple);

    assert_relative_eq!(result.r, 40.0, max_relative = 1e-9);
    assert_relative_eq!(result.rc, rc, max_relative = 1e-9);
    assert_relative_eq!(result.rc, 6089.86, max_relative = 1e-5);
    assert_relative_eq!(result.cc, cc, max_relative = 1e-9);
    assert_relative_eq!(result.croll, croll, max_relative = 1e-9);
    assert_relative_eq!(result.fp_roll, fp_roll, max_relative = 1e-9);
    assert_relative_eq!(result.l, l, max_relative = 1e-9);
    assert_relative_eq!(result.ripple, ripple, max_relative = 1e-9);
    assert_relative_eq!(result.c_min, c_min, max_relative = 1e-9);
    assert_eq!(result.stability_ok, fp_roll >= 180e3);
}

#[test]
fn test_derivation_is_deterministic() {
    let params = SystemParameters::tps652510();
    let spec = RailSpec::new(3.3, 0.22, 7e-6);
    let a = compute_rail(&spec, &params);
    let b = compute_rail(&spec, &params);

    assert_eq!(a.r.to_bits(), b.r.to_bits());
    assert_eq!(a.rc.to_bits(), b.rc.to_bits());
    assert_eq!(a.cc.to_bits(), b.cc.to_bits());
    assert_eq!(a.croll.to_bits(), b.croll.to_bits());
    assert_eq!(a.l.to_bits(), b.l.to_bits());
}

#[test]
fn test_all_overrides_returned_unchanged() {
    let params = SystemParameters::tps652510();
    for spec in default_rails() {
        let spec = spec.with_r(123.0);
        let result = compute_rail(&spec, &params);
        assert_eq!(Some(result.r), spec.r);
        assert_eq!(Some(result.rc), spec.rc);
        assert_eq!(Some(result.cc), spec.cc);
        assert_eq!(Some(result.croll), spec.croll);
        assert_eq!(Some(result.l), spec.l);
    }
}

#[test]
fn test_rolloff_pole_from_overridden_parts() {
    let params = SystemParameters::tps652510();
    let spec = RailSpec::new(12.0, 0.3, 14e-6).with_rc(7500.0).with_croll(100e-12);
    let result = compute_rail(&spec, &params);
    assert_relative_eq!(
        result.fp_roll,
        1.0 / (2.0 * PI * 7500.0 * 100e-12),
        max_relative = 1e-12
    );
}

#[test]
fn test_overridden_inductor_changes_ripple() {
    let params = SystemParameters::tps652510();
    let derived = compute_rail(&RailSpec::new(5.0, 1.0, 22e-6), &params);
    assert_relative_eq!(derived.ripple, 0.2, max_relative = 1e-9);

    let picked = compute_rail(&RailSpec::new(5.0, 1.0, 22e-6).with_l(2.0 * derived.l), &params);
    assert_relative_eq!(picked.ripple, 0.1, max_relative = 1e-9);
}

#[test]
fn test_stability_boundary_is_inclusive() {
    let params = SystemParameters::tps652510();
    let rc = 1000.0;
    // croll such that fp_roll lands on 2*f_c
    let croll = 1.0 / (2.0 * PI * rc * params.min_rolloff_frequency());
    let at = compute_rail(&RailSpec::new(5.0, 1.0, 22e-6).with_rc(rc).with_croll(croll), &params);
    assert_eq!(at.stability_ok, at.fp_roll >= 180e3);

    let below = compute_rail(
        &RailSpec::new(5.0, 1.0, 22e-6).with_rc(rc).with_croll(croll * 1.01),
        &params,
    );
    assert!(!below.stability_ok);

    let above = compute_rail(
        &RailSpec::new(5.0, 1.0, 22e-6).with_rc(rc).with_croll(croll * 0.99),
        &params,
    );
    assert!(above.stability_ok);
}

#[test]
fn test_rail_at_input_voltage_still_reports() {
    let params = SystemParameters::tps652510();
    let result = compute_rail(&RailSpec::new(15.0, 0.3, 14e-6), &params);
    assert!(!result.ripple.is_finite());
    assert!(!result.c_min.is_finite());

    let text = report(&[RailSpec::new(15.0, 0.3, 14e-6)]);
    assert!(text.contains("rail V:15 I:0.3 C:0.000014"));
    assert!(text.contains("\tRIPPLE:NaN\n"));
    assert!(text.contains("\tCMIN:NaN\n"));
}

// ── Report ────────────────────────────────────────────────────────

#[test]
fn test_default_report() {
    let text = report(&default_rails());
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], DISCLAIMER);
    assert_eq!(lines[1], "rail V:12 I:0.3 C:0.000014");
    assert_eq!(lines[2], "\tR:40");
    assert_eq!(lines[3], "\tRC:7500");
    assert_eq!(lines[7], "\tL:0.0000047");
    assert_eq!(lines[10], "rail V:3.3 I:0.22 C:0.000007");
    assert_eq!(lines[19], "rail V:1.2 I:0.000555 C:0.0000011");
    // Picked parts keep every roll-off pole above 180 kHz
    assert!(!text.contains("WARNING"));
    assert_eq!(lines.len(), 28);
}

#[test]
fn test_report_from_notation() {
    let rails = vec![
        parse_rail("V=5 I=1 C=22u RC=10k CROLL=1n").expect("parse failed"),
        parse_rail("V=3.3 I=500m C=10u").expect("parse failed"),
    ];
    let text = report(&rails);

    let first = text.find("rail V:5 ").expect("first rail missing");
    let warning = text.find("WARNING: fp_roll is too close to f_c=90000!").expect("warning missing");
    let second = text.find("rail V:3.3 ").expect("second rail missing");
    assert!(first < warning && warning < second);
}
