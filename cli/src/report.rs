use recon_core::approx::CrossCheck;
use recon_core::Reconstruction;
use serde_json::{json, Value};

/// Human-readable result, one fact per line.
pub fn render_text(
    result: &Reconstruction,
    check: Option<&CrossCheck>,
) -> String {
    let mut out = format!("The value of C = {}", result.secret());
    if !result.is_integral() {
        out.push_str(&format!(
            "\nnote: the secret is not an integer; shares {:?} do not lie \
             on an integer polynomial of degree {}",
            result.indices(),
            result.indices().len().saturating_sub(1)
        ));
    }
    if let Some(check) = check {
        let verdict = if check.agrees { "agrees" } else { "DISAGREES" };
        out.push_str(&format!(
            "\ncross-check: floating-point estimate {:e} {} with exact {:e}",
            check.approximate, verdict, check.exact
        ));
    }
    out
}

pub fn render_json(result: &Reconstruction, check: Option<&CrossCheck>) -> Value {
    let mut value = json!({
        "secret": result.secret(),
        "integral": result.is_integral(),
        "indices": result.indices(),
    });
    if let Some(check) = check {
        value["cross_check"] = json!({
            "approximate": finite_or_null(check.approximate),
            "exact": finite_or_null(check.exact),
            "agrees": check.agrees,
        });
    }
    value
}

fn finite_or_null(value: f64) -> Value {
    if value.is_finite() {
        json!(value)
    } else {
        Value::Null
    }
}
