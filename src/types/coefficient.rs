use super::q8_8::Q8_8;
use num_complex::Complex64;

/// One complex rotation coefficient W_N^k, both parts encoded in Q8.8.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TwiddleCoefficient {
    pub re: Q8_8,
    pub im: Q8_8,
}

impl TwiddleCoefficient {
    pub const fn new(re: Q8_8, im: Q8_8) -> Self {
        Self { re, im }
    }

    /// Encodes a float-domain unit-circle point. Each part wraps modulo 2^16
    /// if out of range, per the Q8.8 contract.
    pub fn encode(value: Complex64) -> Self {
        Self {
            re: Q8_8::from_f64(value.re),
            im: Q8_8::from_f64(value.im),
        }
    }

    /// Decodes back to the float domain.
    pub fn to_complex(self) -> Complex64 {
        Complex64::new(self.re.to_f64(), self.im.to_f64())
    }
}
