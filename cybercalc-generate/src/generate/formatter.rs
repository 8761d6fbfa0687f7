use ::std::fmt::Write;

pub const PROBABILITY_PLACES: usize = 4;

pub const LABEL_OPERATOR_ADD: &'static str = "+";
pub const LABEL_OPERATOR_SUB: &'static str = "-";
pub const LABEL_OPERATOR_MUL: &'static str = r#"\times"#;
pub const LABEL_OPERATOR_DIV: &'static str = r#"\div"#;

pub fn math_mode<T: ::std::fmt::Display>(inner: T) -> String {
    format!(r#"\({}\)"#, inner)
}

pub fn text<T: ::std::fmt::Display>(inner: T) -> String {
    format!(r#"\text{{{}}}"#, inner)
}

pub fn format_i32_raw(int: i32) -> String {
    int.to_string()
}

pub fn format_i32_fraction_raw(numerator: i32, denominator: i32) -> String {
    match (numerator, denominator) {
        (0, _) => format_i32_raw(0),
        (_, 1) => format_i32_raw(numerator),
        _ => format!(r#"\frac{{{numerator}}}{{{denominator}}}"#),
    }
}

pub fn format_i32_fraction(numerator: i32, denominator: i32) -> String {
    math_mode(format_i32_fraction_raw(numerator, denominator))
}

pub fn format_f64_places_raw(float: f64, places: usize) -> String {
    let rounded = round_f64(float, places);
    // keeps "-0.0000" out of the output
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{0:.1$}", rounded, places)
}

pub fn format_probability_raw(probability: f64) -> String {
    format_f64_places_raw(probability, PROBABILITY_PLACES)
}

pub fn round_f64(float: f64, places: usize) -> f64 {
    let scaling_factor = 10_f64.powi(places as i32);
    (float * scaling_factor).round() / scaling_factor
}

/// Writes a coefficient in front of a symbol: `1` and `-1` lose their digit, later terms get
/// an explicit `+`.
pub fn write_coefficient_raw(out: &mut String, coefficient: i32, leading: bool, elide_unit: bool) {
    let magnitude = coefficient.unsigned_abs();
    let sign = match (coefficient < 0, leading) {
        (true, _) => "-",
        (false, true) => "",
        (false, false) => "+",
    };
    if elide_unit && magnitude == 1 {
        out.push_str(sign);
    } else {
        write!(out, "{sign}{magnitude}").expect("write_coefficient_raw failed to write to string");
    }
}

pub fn format_coefficient_raw(coefficient: i32, leading: bool) -> String {
    let mut result = String::new();
    write_coefficient_raw(&mut result, coefficient, leading, true);
    result
}
