use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Number(f64),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) if n.is_nan() => write!(f, "NaN"),
            Value::Number(n) if n.is_infinite() => {
                if n.is_sign_negative() {
                    write!(f, "-Infinity")
                } else {
                    write!(f, "Infinity")
                }
            }
            Value::Number(n) => write_finite(f, *n),
        }
    }
}

const PLAIN_LOWER_BOUND: f64 = 1e-3;
const PLAIN_UPPER_BOUND: f64 = 1e7;

// Plain decimal inside [1e-3, 1e7), `d.dddE<exp>` outside it; the mantissa
// always carries at least one fractional digit.
fn write_finite(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    let magnitude = n.abs();
    if n == 0.0 || (PLAIN_LOWER_BOUND..PLAIN_UPPER_BOUND).contains(&magnitude) {
        let plain = n.to_string();
        return if plain.contains('.') {
            write!(f, "{}", plain)
        } else {
            write!(f, "{}.0", plain)
        };
    }

    let scientific = format!("{:e}", n);
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    if mantissa.contains('.') {
        write!(f, "{}E{}", mantissa, exponent)
    } else {
        write!(f, "{}.0E{}", mantissa, exponent)
    }
}
